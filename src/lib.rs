//! Account microservices
//!
//! Three small HTTP services sharing one library:
//!
//! - **auth** - registration and login, issues HMAC-signed JWTs and
//!   fires a best-effort welcome notification
//! - **profile** - per-user profile upsert/read/delete behind token
//!   verification middleware
//! - **notification** - stateless SMTP relay for transactional email
//!
//! Each binary under `src/bin/` wires its own slice of this crate:
//! config, MongoDB access, repositories, services, handlers and routes.

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
