pub mod extract;
pub mod location;
pub mod server;
pub mod users;
pub mod validation;
