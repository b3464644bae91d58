//! Shared test utilities: sample data and a scripted gateway.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use async_trait::async_trait;
use doggodex::api::{ApiError, Breed, BreedGateway, BreedImage, Measurement};
use doggodex::state::collections::CollectionItem;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

// -- Sample data --------------------------------------------------------------

pub fn breed(id: u32, name: &str) -> Breed {
    Breed {
        id,
        name: name.to_string(),
        breed_group: Some("Working".to_string()),
        temperament: Some("Docile, Alert".to_string()),
        life_span: "10 - 14 years".to_string(),
        bred_for: Some("Hunting bears".to_string()),
        reference_image_id: Some(format!("img{}", id)),
        weight: Measurement {
            imperial: "65 - 115".to_string(),
            metric: "29 - 52".to_string(),
        },
        height: Measurement {
            imperial: "24 - 28".to_string(),
            metric: "61 - 71".to_string(),
        },
        ..Breed::default()
    }
}

pub fn akita() -> Breed {
    breed(6, "Akita")
}

pub fn item(id: u32, name: &str) -> CollectionItem {
    CollectionItem {
        id,
        name: name.to_string(),
        reference_image_id: Some(format!("img{}", id)),
        breed_group: "Working".to_string(),
    }
}

pub fn image(id: &str) -> BreedImage {
    BreedImage {
        id: id.to_string(),
        url: format!("https://cdn.test/images/{}.jpg", id),
        width: 800,
        height: 600,
    }
}

// -- Fake gateway -------------------------------------------------------------

/// A recorded gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchBreeds { page: u32, limit: u32 },
    Search { query: String, limit: usize },
    FetchBreed(u32),
    FetchImage(String),
}

/// In-memory gateway with scripted responses.
///
/// Unknown pages and queries answer with an empty list; unknown breed and
/// image ids answer `NotFound`. Delays use `tokio::time`, so tests running
/// with a paused clock stay deterministic.
#[derive(Default)]
pub struct FakeGateway {
    pages: HashMap<u32, Vec<Breed>>,
    searches: HashMap<String, Vec<Breed>>,
    breeds: HashMap<u32, Breed>,
    images: HashMap<String, BreedImage>,
    delays: HashMap<String, Duration>,
    fail_images: bool,
    fail_catalog: AtomicBool,
    calls: Mutex<Vec<Call>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32, breeds: Vec<Breed>) -> Self {
        self.pages.insert(page, breeds);
        self
    }

    pub fn with_search(mut self, query: &str, breeds: Vec<Breed>) -> Self {
        self.searches.insert(query.to_string(), breeds);
        self
    }

    pub fn with_breed(mut self, breed: Breed) -> Self {
        self.breeds.insert(breed.id, breed);
        self
    }

    pub fn with_image(mut self, image: BreedImage) -> Self {
        self.images.insert(image.id.clone(), image);
        self
    }

    /// Delay answers for search `query` (or page `page:N`).
    pub fn with_delay(mut self, key: &str, delay: Duration) -> Self {
        self.delays.insert(key.to_string(), delay);
        self
    }

    pub fn failing_images(mut self) -> Self {
        self.fail_images = true;
        self
    }

    /// Make page fetches and searches fail from now on.
    pub fn fail_catalog(&self, fail: bool) {
        self.fail_catalog.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }

    async fn delay(&self, key: &str) {
        if let Some(delay) = self.delays.get(key) {
            tokio::time::sleep(*delay).await;
        }
    }

    fn catalog_error(&self) -> Result<(), ApiError> {
        if self.fail_catalog.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl BreedGateway for FakeGateway {
    async fn fetch_breeds(&self, page: u32, limit: u32) -> Result<Vec<Breed>, ApiError> {
        self.record(Call::FetchBreeds { page, limit });
        self.delay(&format!("page:{}", page)).await;
        self.catalog_error()?;
        let mut breeds = self.pages.get(&page).cloned().unwrap_or_default();
        breeds.truncate(limit as usize);
        Ok(breeds)
    }

    async fn search_breeds(&self, query: &str, limit: usize) -> Result<Vec<Breed>, ApiError> {
        self.record(Call::Search {
            query: query.to_string(),
            limit,
        });
        self.delay(query).await;
        self.catalog_error()?;
        let mut breeds = self.searches.get(query).cloned().unwrap_or_default();
        breeds.truncate(limit);
        Ok(breeds)
    }

    async fn fetch_breed(&self, id: u32) -> Result<Breed, ApiError> {
        self.record(Call::FetchBreed(id));
        self.breeds.get(&id).cloned().ok_or_else(|| ApiError::NotFound {
            resource: format!("Breed {}", id),
        })
    }

    async fn fetch_image(&self, image_id: &str) -> Result<BreedImage, ApiError> {
        self.record(Call::FetchImage(image_id.to_string()));
        if self.fail_images {
            return Err(ApiError::Status {
                status: 502,
                message: "bad gateway".to_string(),
            });
        }
        self.images
            .get(image_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound {
                resource: format!("Image {}", image_id),
            })
    }
}
