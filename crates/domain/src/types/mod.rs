//! Domain types and models
//!
//! Records mirror the JSON the ORION API returns. They are pass-through: the
//! client never validates or derives values from them, and fields the
//! dashboard does not read survive in each record's `extra` map.

pub mod auth;
pub mod brand;
pub mod content;
pub mod data_source;
pub mod generation;
pub mod language;
pub mod pagination;

pub use auth::{
    AppleLoginRequest, CredentialPair, GoogleLoginRequest, LoginCredentials, LoginResponse,
    RefreshRequest, RefreshResponse, RegisterData, User,
};
pub use brand::{
    Brand, BrandSettings, CreateBrandData, SocialAccount, SocialPlatform, UpdateBrandData,
};
pub use content::{
    ApprovalActionData, ApprovalResponse, ApprovalStatus, AssetType, ContentApprovalLog,
    ContentAsset, ContentAssetData, ContentItem, ContentQuery, ContentSchedule, ContentSettings,
    ContentSettingsData, ContentSubmission, ContentType, CreateContentData, SubmissionStatus,
    SubmitContentData, SubmitResponse, UpdateContentData,
};
pub use data_source::{
    CrawlFrequency, CrawlTriggerResponse, CreateDataSourceData, DataSource, DataSourceQuery,
    PlatformType, UpdateDataSourceData,
};
pub use generation::{
    image_generation_metadata, video_composition_metadata, ImageGenerationRequest,
    ImageGenerationResult, VideoCompositionRequest, VideoCompositionResult,
};
pub use language::Language;
pub use pagination::{ListPayload, Paginated};

/// Flattened bag of fields a record carries beyond the typed ones.
pub type Extra = serde_json::Map<String, serde_json::Value>;
