//! Data source endpoints

use std::sync::Arc;

use orion_domain::constants::DATA_SOURCES_PATH;
use orion_domain::{
    CrawlTriggerResponse, CreateDataSourceData, DataSource, DataSourceQuery, Paginated,
    UpdateDataSourceData,
};
use tracing::{debug, info, instrument};

use super::client::ApiClient;
use super::errors::ApiError;

fn source_path(id: i64) -> String {
    format!("{DATA_SOURCES_PATH}{id}/")
}

fn action_path(id: i64, action: &str) -> String {
    format!("{DATA_SOURCES_PATH}{id}/{action}/")
}

/// Crawl targets (websites, social pages, map listings) attached to brands
pub struct DataSourceApi {
    client: Arc<ApiClient>,
}

impl DataSourceApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List data sources, optionally filtered by brand, platform or state.
    #[instrument(skip(self))]
    pub async fn list(&self, query: &DataSourceQuery) -> Result<Paginated<DataSource>, ApiError> {
        let page: Paginated<DataSource> = self.client.list(DATA_SOURCES_PATH, Some(query)).await?;
        debug!(count = page.count, "data sources listed");
        Ok(page)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<DataSource, ApiError> {
        self.client.get(&source_path(id)).await
    }

    #[instrument(skip(self, data), fields(brand = data.brand))]
    pub async fn create(&self, data: &CreateDataSourceData) -> Result<DataSource, ApiError> {
        self.client.post(DATA_SOURCES_PATH, data).await
    }

    #[instrument(skip(self, data))]
    pub async fn update(
        &self,
        id: i64,
        data: &UpdateDataSourceData,
    ) -> Result<DataSource, ApiError> {
        self.client.put(&source_path(id), data).await
    }

    #[instrument(skip(self, data))]
    pub async fn patch(
        &self,
        id: i64,
        data: &UpdateDataSourceData,
    ) -> Result<DataSource, ApiError> {
        self.client.patch(&source_path(id), data).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&source_path(id)).await
    }

    #[instrument(skip(self))]
    pub async fn activate(&self, id: i64) -> Result<DataSource, ApiError> {
        self.client.post_empty(&action_path(id, "activate")).await
    }

    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: i64) -> Result<DataSource, ApiError> {
        self.client.post_empty(&action_path(id, "deactivate")).await
    }

    /// Ask the backend to crawl this source immediately.
    #[instrument(skip(self))]
    pub async fn crawl_now(&self, id: i64) -> Result<CrawlTriggerResponse, ApiError> {
        let response: CrawlTriggerResponse =
            self.client.post_empty(&action_path(id, "crawl_now")).await?;
        info!(data_source = id, status = ?response.status, "crawl triggered");
        Ok(response)
    }
}
