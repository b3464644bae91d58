//! Remote breed API: data types, the gateway trait and its HTTP client.

mod client;
mod error;
mod gateway;
mod types;

pub use client::DogApiClient;
pub use error::ApiError;
pub use gateway::BreedGateway;
pub use types::{Breed, BreedImage, Measurement};
