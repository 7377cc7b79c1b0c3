pub mod mailer;
pub mod notify_client;
pub mod profile_service;
pub mod token_service;
pub mod user_service;

pub use mailer::Mailer;
pub use notify_client::NotifyClient;
pub use profile_service::{ProfileService, UpsertOutcome};
pub use token_service::TokenService;
pub use user_service::UserService;
