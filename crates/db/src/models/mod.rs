pub mod account;
pub mod media_item;
pub mod user;
