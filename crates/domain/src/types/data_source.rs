//! Crawl data sources attached to brands

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Extra;

/// Kind of site a data source points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformType {
    SocialMedia,
    Website,
    Forum,
    Marketplace,
    GoogleMaps,
    Youtube,
    Linkedin,
    Tiktok,
    CommunityGroup,
    Other,
}

impl PlatformType {
    pub const ALL: [Self; 10] = [
        Self::SocialMedia,
        Self::Website,
        Self::Forum,
        Self::Marketplace,
        Self::GoogleMaps,
        Self::Youtube,
        Self::Linkedin,
        Self::Tiktok,
        Self::CommunityGroup,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SocialMedia => "social_media",
            Self::Website => "website",
            Self::Forum => "forum",
            Self::Marketplace => "marketplace",
            Self::GoogleMaps => "google_maps",
            Self::Youtube => "youtube",
            Self::Linkedin => "linkedin",
            Self::Tiktok => "tiktok",
            Self::CommunityGroup => "community_group",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlFrequency {
    Hourly,
    #[default]
    Daily,
    Weekly,
    Monthly,
    Manual,
    Custom,
}

impl CrawlFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Manual => "manual",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for CrawlFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data source as the API reports it.
///
/// `platform_type` and `crawl_frequency` stay strings here: the server may
/// know values newer than [`PlatformType`] and [`CrawlFrequency`], and a
/// listing must not fail because of one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub id: i64,
    pub brand: i64,
    #[serde(default)]
    pub brand_name: Option<String>,
    pub platform_type: String,
    #[serde(default)]
    pub platform_type_display: Option<String>,
    pub source_name: String,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub crawl_frequency: Option<String>,
    #[serde(default)]
    pub crawl_frequency_display: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub last_crawled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDataSourceData {
    pub brand: i64,
    pub platform_type: PlatformType,
    pub source_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default)]
    pub crawl_frequency: CrawlFrequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body for PUT and PATCH. PATCH sends only the fields that are set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDataSourceData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_type: Option<PlatformType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crawl_frequency: Option<CrawlFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Filters for the data source listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_type: Option<PlatformType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl DataSourceQuery {
    pub fn for_brand(brand: i64) -> Self {
        Self { brand: Some(brand), ..Default::default() }
    }
}

/// Acknowledgement of a `crawl_now` trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlTriggerResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}
