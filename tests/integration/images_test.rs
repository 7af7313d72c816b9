//! Image resolver fallback tests.

use uni_advisor_bot::services::images::{
    placeholder_image, ImageResolver, PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH,
};

#[tokio::test]
async fn test_unconfigured_resolver_always_yields_placeholder() {
    let resolver = ImageResolver::new(None, None);
    let first = resolver.resolve("Alpha University").await;
    let second = resolver.resolve("Beta College").await;
    assert_eq!(first, placeholder_image());
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_partial_credentials_yield_placeholder() {
    // Both a key and an engine id are required before a search is attempted.
    let resolver = ImageResolver::new(Some("key".to_string()), None);
    assert_eq!(resolver.resolve("Alpha University").await, placeholder_image());
}

#[test]
fn test_placeholder_decodes_as_jpeg_with_card_dimensions() {
    let bytes = placeholder_image();
    assert_eq!(
        image::guess_format(&bytes).unwrap(),
        image::ImageFormat::Jpeg
    );
    let decoded = image::load_from_memory(&bytes).unwrap();
    assert_eq!(decoded.width(), PLACEHOLDER_WIDTH);
    assert_eq!(decoded.height(), PLACEHOLDER_HEIGHT);
}
