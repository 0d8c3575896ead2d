mod handler;
mod model;

pub use handler::{health, welcome};
pub use model::{HealthResponse, WelcomeResponse};
