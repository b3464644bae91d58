mod common;

use common::{akita, image, Call, FakeGateway};
use doggodex::detail::{display_image_url, load_breed_detail, DetailError};

const CDN: &str = "https://cdn2.thedogapi.com/images";

#[tokio::test]
async fn loads_breed_and_image() {
    let gateway = FakeGateway::new().with_breed(akita()).with_image(image("img6"));

    let breed = load_breed_detail(&gateway, 6).await.unwrap();

    assert_eq!(breed.image, Some(image("img6")));
    assert_eq!(
        display_image_url(&breed, CDN).as_deref(),
        Some("https://cdn.test/images/img6.jpg")
    );
    assert_eq!(
        gateway.calls(),
        vec![Call::FetchBreed(6), Call::FetchImage("img6".to_string())]
    );
}

#[tokio::test]
async fn image_failure_falls_back_to_cdn() {
    let gateway = FakeGateway::new().with_breed(akita()).failing_images();

    let breed = load_breed_detail(&gateway, 6).await.unwrap();

    assert!(breed.image.is_none());
    assert_eq!(
        display_image_url(&breed, CDN).as_deref(),
        Some("https://cdn2.thedogapi.com/images/img6.jpg")
    );
}

#[tokio::test]
async fn breed_without_image_skips_lookup() {
    let mut breed = akita();
    breed.reference_image_id = Some(String::new());
    let gateway = FakeGateway::new().with_breed(breed);

    let loaded = load_breed_detail(&gateway, 6).await.unwrap();

    assert!(display_image_url(&loaded, CDN).is_none());
    assert_eq!(gateway.calls(), vec![Call::FetchBreed(6)]);
}

#[tokio::test]
async fn unknown_breed_is_not_found() {
    let gateway = FakeGateway::new();

    let err = load_breed_detail(&gateway, 9999).await.unwrap_err();

    assert!(matches!(err, DetailError::NotFound));
    assert_eq!(err.to_string(), "Breed not found");
}
