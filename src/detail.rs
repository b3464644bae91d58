//! Breed detail loading.
//!
//! Unlike the catalog, the detail view has no shared state: it loads one
//! breed, tries to resolve its image, and reports failures directly.

use thiserror::Error;

use crate::api::{ApiError, Breed, BreedGateway};

/// Errors surfaced by the detail view.
#[derive(Debug, Error)]
pub enum DetailError {
    #[error("Breed ID is required")]
    MissingId,

    #[error("Invalid breed ID '{0}'")]
    InvalidId(String),

    #[error("Breed not found")]
    NotFound,

    #[error("Failed to load breed details")]
    Fetch(#[source] ApiError),
}

impl From<ApiError> for DetailError {
    fn from(err: ApiError) -> Self {
        if err.is_not_found() {
            DetailError::NotFound
        } else {
            DetailError::Fetch(err)
        }
    }
}

/// Parse the id segment of a `/breed/{id}` style route.
pub fn parse_breed_id(raw: &str) -> Result<u32, DetailError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DetailError::MissingId);
    }
    raw.parse()
        .map_err(|_| DetailError::InvalidId(raw.to_string()))
}

/// Fetch a breed and, when it has a reference image, its image record.
///
/// A failing image lookup is logged and otherwise ignored; callers fall
/// back to [`display_image_url`].
pub async fn load_breed_detail<G>(gateway: &G, id: u32) -> Result<Breed, DetailError>
where
    G: BreedGateway + ?Sized,
{
    let mut breed = gateway.fetch_breed(id).await.map_err(|e| {
        tracing::warn!(id, kind = e.kind(), error = %e, "Failed to load breed details");
        DetailError::from(e)
    })?;

    if let Some(image_id) = breed.image_id().map(str::to_string) {
        match gateway.fetch_image(&image_id).await {
            Ok(image) => breed.image = Some(image),
            Err(e) => {
                tracing::warn!(id, image_id = %image_id, error = %e, "Failed to load breed image");
            }
        }
    }

    Ok(breed)
}

/// CDN URL of a reference image.
pub fn cdn_image_url(cdn_base: &str, image_id: &str) -> String {
    format!("{}/{}.jpg", cdn_base.trim_end_matches('/'), image_id)
}

/// Best image URL for a breed: the resolved image, else the CDN guess.
pub fn display_image_url(breed: &Breed, cdn_base: &str) -> Option<String> {
    if let Some(image) = breed.image.as_ref().filter(|i| !i.url.is_empty()) {
        return Some(image.url.clone());
    }
    breed.image_id().map(|id| cdn_image_url(cdn_base, id))
}

/// Temperament as individual traits.
pub fn temperament_traits(breed: &Breed) -> Vec<&str> {
    breed
        .temperament
        .as_deref()
        .map(|t| t.split(", ").filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}
