mod handler;
mod model;

pub use handler::{get_value, set_value};
pub use model::{CacheValueResponse, SetValueResponse};
