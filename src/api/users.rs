use axum::{
    Json,
    extract::{OriginalUri, Path, State, rejection::PathRejection},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::api::extract::Body;
use crate::api::location::{child_location, request_host, self_location};
use crate::api::server::AppState;
use crate::api::validation::{UserPayload, ValidUser};
use crate::auth::password::hash_password_blocking;
use crate::db::models::{User, UserWrite};
use crate::db::repo;
use crate::errors::Error;

async fn into_write(user: ValidUser) -> Result<UserWrite, Error> {
    Ok(UserWrite {
        name: user.name,
        email: user.email,
        password_hash: hash_password_blocking(user.password).await?,
    })
}

#[tracing::instrument(skip_all)]
pub async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, Error> {
    let rows = repo::list_users(&state.db).await?;

    Ok(Json(rows.into_iter().map(User::from).collect()))
}

#[tracing::instrument(skip_all)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, Error> {
    let Path(id) = path?;
    let row = repo::get_user(&state.db, id).await?;

    Ok(Json(User::from(row)))
}

#[tracing::instrument(skip_all)]
pub async fn create_user(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Body(payload): Body<UserPayload>,
) -> Result<impl IntoResponse, Error> {
    let user = payload.validate_for(state.validation)?;
    let write = into_write(user).await?;

    let id = repo::insert_user(&state.db, &write).await?;
    let user = User::from(repo::get_user(&state.db, id).await?);

    let location = child_location(request_host(&headers), uri.path(), user.id);
    tracing::info!(id = user.id, %location, "User created");

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

#[tracing::instrument(skip_all)]
pub async fn update_user(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    Body(payload): Body<UserPayload>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = path?;
    let user = payload.validate_for(state.validation)?;
    let write = into_write(user).await?;

    repo::update_user(&state.db, id, &write).await?;
    let user = User::from(repo::get_user(&state.db, id).await?);

    // The path already ends in the id; appending it again would not address the record.
    let location = self_location(request_host(&headers), uri.path());
    tracing::info!(id, %location, "User updated");

    Ok((StatusCode::OK, [(header::LOCATION, location)], Json(user)))
}
