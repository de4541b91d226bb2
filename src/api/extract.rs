//! Request body extraction accepting JSON or URL-encoded forms.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;

use crate::errors::Error;

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.starts_with("application/x-www-form-urlencoded"))
}

/// `application/x-www-form-urlencoded` bodies go through `Form`, everything
/// else through `Json`. Rejections keep axum's status code.
#[derive(Debug, Clone)]
pub struct Body<T>(pub T);

impl<S, T> FromRequest<S> for Body<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(payload) = Form::<T>::from_request(req, state).await?;
            Ok(Body(payload))
        } else {
            let Json(payload) = Json::<T>::from_request(req, state).await?;
            Ok(Body(payload))
        }
    }
}
