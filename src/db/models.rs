use serde::Serialize;

/// A row of the `users` table. `password` holds the argon2 hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// A user as sent to clients: the row without its password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}

/// Validated fields ready to be written. `password_hash` is never the plaintext.
#[derive(Debug, Clone)]
pub struct UserWrite {
    pub name: Option<String>,
    pub email: String,
    pub password_hash: String,
}
