use thiserror::Error;

/// Storage errors, classified from `sqlx::Error`.
///
/// Every variant produced by the repository carries the statement that was
/// running, as written (placeholders, no bound values).
#[derive(Error, Debug)]
pub enum DbError {
    /// Unique constraint violation (duplicate email)
    #[error("Unique constraint violation: {message}")]
    UniqueViolation { message: String, sql: &'static str },

    /// The statement matched no row
    #[error("No row matched `{sql}`")]
    NotFound { sql: &'static str },

    /// Anything else the driver reported
    #[error("{message}")]
    Query { message: String, sql: &'static str },
}

impl DbError {
    /// Classify a driver error raised while running `sql`.
    pub fn from_sqlx(err: sqlx::Error, sql: &'static str) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound { sql },
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => DbError::UniqueViolation {
                message: db_err.message().to_string(),
                sql,
            },
            sqlx::Error::Database(db_err) => DbError::Query {
                message: db_err.message().to_string(),
                sql,
            },
            other => DbError::Query {
                message: other.to_string(),
                sql,
            },
        }
    }
}

/// Shorthand for `.map_err(on(SQL))` at repository call sites.
pub fn on(sql: &'static str) -> impl FnOnce(sqlx::Error) -> DbError {
    move |err| DbError::from_sqlx(err, sql)
}
