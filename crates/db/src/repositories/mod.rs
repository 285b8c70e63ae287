pub mod account_repo;
pub mod media_repo;
pub mod user_repo;

pub use account_repo::AccountRepo;
pub use media_repo::MediaRepo;
pub use user_repo::UserRepo;
