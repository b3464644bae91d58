//! The seam between the state layer and the remote API.

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{Breed, BreedImage};

/// Stateless access to the remote breed catalog.
///
/// The store only ever talks to this trait, so tests can drive it with a
/// scripted fake and the binary with [`DogApiClient`](super::DogApiClient).
#[async_trait]
pub trait BreedGateway: Send + Sync + 'static {
    /// One page of the catalog. `page` is zero-based.
    async fn fetch_breeds(&self, page: u32, limit: u32) -> Result<Vec<Breed>, ApiError>;

    /// Free-text search. The API does not paginate search results, so the
    /// implementation truncates to `limit` itself.
    async fn search_breeds(&self, query: &str, limit: usize) -> Result<Vec<Breed>, ApiError>;

    /// A single breed. Unknown ids yield [`ApiError::NotFound`].
    async fn fetch_breed(&self, id: u32) -> Result<Breed, ApiError>;

    /// Image metadata for a reference image id.
    async fn fetch_image(&self, image_id: &str) -> Result<BreedImage, ApiError>;
}
