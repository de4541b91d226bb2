//! Runtime configuration, from command-line flags or the environment.

use clap::{Parser, ValueEnum};

/// Which fields a user payload must carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ValidationMode {
    /// `name` is required and must be at least 3 characters
    #[default]
    Strict,
    /// `name` may be omitted; a supplied name is still length-checked
    Lenient,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "users-api", about = "REST endpoint for creating, listing and updating users")]
pub struct Config {
    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// SQLite connection URL, e.g. `sqlite://users.db?mode=rwc`
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite::memory:")]
    pub database_url: String,

    /// Pool size for file-backed databases
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Field validation applied to create and update requests
    #[arg(long, env = "USER_VALIDATION", value_enum, default_value_t = ValidationMode::Strict)]
    pub validation: ValidationMode,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
