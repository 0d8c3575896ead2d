pub mod cache;
pub mod root;
pub mod user;
