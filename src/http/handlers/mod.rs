pub mod health;
pub mod predict;

pub use health::health_handler;
pub use predict::predict_handler;
