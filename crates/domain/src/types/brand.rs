//! Brand management types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Extra;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub social_accounts_count: u32,
    #[serde(default)]
    pub social_accounts: Option<Vec<SocialAccount>>,
    #[serde(default)]
    pub settings: Option<BrandSettings>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Voice, palette and posting cadence configured for a brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSettings {
    pub id: i64,
    pub brand: i64,
    #[serde(default)]
    pub color_primary: String,
    #[serde(default)]
    pub color_secondary: String,
    #[serde(default)]
    pub brand_description: String,
    #[serde(default)]
    pub brand_voice: String,
    #[serde(default)]
    pub brand_values: String,
    #[serde(default)]
    pub content_language: String,
    #[serde(default)]
    pub posts_per_week: u32,
    #[serde(default)]
    pub content_categories: String,
    #[serde(default)]
    pub auto_respond_enabled: bool,
    #[serde(default)]
    pub auto_respond_message: String,
    #[serde(default)]
    pub lead_scoring_enabled: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialAccount {
    pub id: i64,
    pub brand: i64,
    pub platform: i64,
    #[serde(default)]
    pub platform_name: String,
    #[serde(default)]
    pub platform_slug: String,
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialPlatform {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBrandData {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Full-replacement update body. Unset fields are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBrandData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
