pub mod auth;
pub mod notify;
pub mod profile;
pub mod token;
