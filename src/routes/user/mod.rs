mod handler;

pub use handler::list_users;
