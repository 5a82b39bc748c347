pub mod rating;

pub use rating::{PredictionRequest, PredictionResponse, RatingPoint};
