pub mod profile_repo;
pub mod user_repo;

pub use profile_repo::ProfileRepository;
pub use user_repo::{UserRepository, UserStore};
