use sqlx::SqlitePool;

use crate::db::errors::{DbError, on};
use crate::db::models::{UserRow, UserWrite};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL
    )
"#;
const SELECT_ALL: &str = "SELECT id, name, email, password FROM users ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, name, email, password FROM users WHERE id = ?";
const INSERT: &str = "INSERT INTO users (name, email, password) VALUES (?, ?, ?)";
const UPDATE: &str = "UPDATE users SET name = ?, email = ?, password = ? WHERE id = ?";

pub async fn create_user_table(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query(CREATE_TABLE).execute(pool).await.map_err(on(CREATE_TABLE))?;

    Ok(())
}

pub async fn list_users(pool: &SqlitePool) -> Result<Vec<UserRow>, DbError> {
    sqlx::query_as::<_, UserRow>(SELECT_ALL)
        .fetch_all(pool)
        .await
        .map_err(on(SELECT_ALL))
}

/// Fetch one user. A missing id is `DbError::NotFound`.
pub async fn get_user(pool: &SqlitePool, id: i64) -> Result<UserRow, DbError> {
    sqlx::query_as::<_, UserRow>(SELECT_BY_ID)
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(on(SELECT_BY_ID))
}

/// Insert a user and return the generated id.
pub async fn insert_user(pool: &SqlitePool, user: &UserWrite) -> Result<i64, DbError> {
    let result = sqlx::query(INSERT)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(pool)
        .await
        .map_err(on(INSERT))?;

    Ok(result.last_insert_rowid())
}

/// Overwrite every field of user `id`. Matching no row is `DbError::NotFound`.
pub async fn update_user(pool: &SqlitePool, id: i64, user: &UserWrite) -> Result<(), DbError> {
    let result = sqlx::query(UPDATE)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(id)
        .execute(pool)
        .await
        .map_err(on(UPDATE))?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound { sql: UPDATE });
    }

    Ok(())
}
