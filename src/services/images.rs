//! Image Resolver
//!
//! Best-effort lookup of a representative campus photo per university via
//! Google Custom Search, with a deterministic placeholder when anything goes
//! wrong. Exactly one search attempt and one fetch attempt per call, both
//! behind a bounded timeout; the resolver never propagates a failure.

use serde::Deserialize;
use std::io::Cursor;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;
use uni_advisor_llm::build_http_client;

/// Placeholder bitmap dimensions.
pub const PLACEHOLDER_WIDTH: u32 = 800;
pub const PLACEHOLDER_HEIGHT: u32 = 400;

const SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";
const IMAGE_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
enum ImageFetchError {
    #[error("image search credentials not configured")]
    NotConfigured,
    #[error("search request failed: {0}")]
    Search(String),
    #[error("no image results")]
    NoResults,
    #[error("image fetch failed: {0}")]
    Fetch(String),
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    link: String,
}

/// Resolves one photo per university name.
pub struct ImageResolver {
    client: reqwest::Client,
    api_key: Option<String>,
    engine_id: Option<String>,
}

impl ImageResolver {
    pub fn new(api_key: Option<String>, engine_id: Option<String>) -> Self {
        Self {
            client: build_http_client(IMAGE_TIMEOUT),
            api_key,
            engine_id,
        }
    }

    /// Fetch a photo for the university, falling back to the placeholder.
    pub async fn resolve(&self, university_name: &str) -> Vec<u8> {
        match self.search_and_fetch(university_name).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(university = %university_name, error = %e, "image lookup failed, using placeholder");
                placeholder_image()
            }
        }
    }

    async fn search_and_fetch(&self, university_name: &str) -> Result<Vec<u8>, ImageFetchError> {
        let (key, cx) = match (self.api_key.as_deref(), self.engine_id.as_deref()) {
            (Some(key), Some(cx)) => (key, cx),
            _ => return Err(ImageFetchError::NotConfigured),
        };
        let query = format!("{} university campus main building", university_name);

        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("key", key),
                ("cx", cx),
                ("q", query.as_str()),
                ("searchType", "image"),
                ("imgSize", "large"),
                ("imgType", "photo"),
                ("num", "1"),
            ])
            .send()
            .await
            .map_err(|e| ImageFetchError::Search(e.to_string()))?;
        if !response.status().is_success() {
            return Err(ImageFetchError::Search(format!(
                "HTTP {}",
                response.status()
            )));
        }
        let results: SearchResponse = response
            .json()
            .await
            .map_err(|e| ImageFetchError::Search(e.to_string()))?;
        let link = results
            .items
            .into_iter()
            .next()
            .map(|item| item.link)
            .ok_or(ImageFetchError::NoResults)?;

        let image_response = self
            .client
            .get(&link)
            .send()
            .await
            .map_err(|e| ImageFetchError::Fetch(e.to_string()))?;
        if !image_response.status().is_success() {
            return Err(ImageFetchError::Fetch(format!(
                "HTTP {}",
                image_response.status()
            )));
        }
        let bytes = image_response
            .bytes()
            .await
            .map_err(|e| ImageFetchError::Fetch(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Deterministic fallback: a solid white 800x400 JPEG.
pub fn placeholder_image() -> Vec<u8> {
    let img = image::ImageBuffer::from_pixel(
        PLACEHOLDER_WIDTH,
        PLACEHOLDER_HEIGHT,
        image::Rgb([255u8, 255, 255]),
    );
    let mut bytes = Vec::new();
    img.write_to(
        &mut Cursor::new(&mut bytes),
        image::ImageFormat::Jpeg,
    )
    .expect("in-memory jpeg encoding cannot fail");
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_has_fixed_dimensions() {
        let bytes = placeholder_image();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), PLACEHOLDER_WIDTH);
        assert_eq!(decoded.height(), PLACEHOLDER_HEIGHT);
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        assert_eq!(placeholder_image(), placeholder_image());
    }

    #[tokio::test]
    async fn test_resolve_without_credentials_returns_placeholder() {
        let resolver = ImageResolver::new(None, None);
        let bytes = resolver.resolve("Anywhere University").await;
        assert_eq!(bytes, placeholder_image());
    }
}
