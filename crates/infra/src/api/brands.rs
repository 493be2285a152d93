//! Brand endpoints
//!
//! Brands are addressed by slug; slugs are percent-encoded into the path.

use std::sync::Arc;

use orion_domain::constants::{BRANDS_PATH, BRAND_PLATFORMS_PATH};
use orion_domain::{Brand, CreateBrandData, Paginated, SocialPlatform, UpdateBrandData};
use serde_json::Value;
use tracing::{debug, instrument};
use urlencoding::encode;

use super::client::ApiClient;
use super::errors::ApiError;

fn brand_path(slug: &str) -> String {
    format!("{BRANDS_PATH}{}/", encode(slug))
}

/// Brand management operations
pub struct BrandApi {
    client: Arc<ApiClient>,
}

impl BrandApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List brands visible to the current user.
    ///
    /// The endpoint may answer with a bare array or a paginated envelope;
    /// both come back as a page.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Paginated<Brand>, ApiError> {
        let page: Paginated<Brand> = self.client.list::<_, Value>(BRANDS_PATH, None).await?;
        debug!(count = page.count, "brands listed");
        Ok(page)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, slug: &str) -> Result<Brand, ApiError> {
        self.client.get(&brand_path(slug)).await
    }

    #[instrument(skip(self, data), fields(slug = %data.slug))]
    pub async fn create(&self, data: &CreateBrandData) -> Result<Brand, ApiError> {
        let brand: Brand = self.client.post(BRANDS_PATH, data).await?;
        debug!(brand_id = brand.id, "brand created");
        Ok(brand)
    }

    /// Replace a brand (PUT).
    #[instrument(skip(self, data))]
    pub async fn update(&self, slug: &str, data: &UpdateBrandData) -> Result<Brand, ApiError> {
        self.client.put(&brand_path(slug), data).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, slug: &str) -> Result<(), ApiError> {
        self.client.delete(&brand_path(slug)).await
    }

    #[instrument(skip(self))]
    pub async fn activate(&self, slug: &str) -> Result<Brand, ApiError> {
        self.client.post_empty(&format!("{}activate/", brand_path(slug))).await
    }

    #[instrument(skip(self))]
    pub async fn deactivate(&self, slug: &str) -> Result<Brand, ApiError> {
        self.client.post_empty(&format!("{}deactivate/", brand_path(slug))).await
    }

    /// Social platforms a brand can connect accounts on.
    #[instrument(skip(self))]
    pub async fn platforms(&self) -> Result<Vec<SocialPlatform>, ApiError> {
        let page: Paginated<SocialPlatform> =
            self.client.list::<_, Value>(BRAND_PLATFORMS_PATH, None).await?;
        Ok(page.results)
    }
}
