//! Content items and the approval workflow around them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Extra;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
    ChangesRequested,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::ChangesRequested => "changes_requested",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Submitted,
    Failed,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Image,
    Video,
    Audio,
    Document,
    Infographic,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: i64,
    pub brand: i64,
    #[serde(default)]
    pub content_type: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub hashtags: Option<String>,
    #[serde(default)]
    pub content_metadata: Option<Value>,
    #[serde(default)]
    pub approval_status: Option<ApprovalStatus>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub approved_by: Option<Value>,
    #[serde(default)]
    pub is_published: bool,
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
pub struct ContentType {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
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
pub struct ContentAsset {
    pub id: i64,
    pub content: i64,
    pub asset_type: AssetType,
    pub file_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Create/update body for an asset; only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentAssetData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentApprovalLog {
    pub id: i64,
    #[serde(default)]
    pub approver: Option<i64>,
    #[serde(default)]
    pub approver_username: Option<String>,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSubmission {
    pub id: i64,
    pub content: i64,
    pub social_account: i64,
    #[serde(default)]
    pub platform_name: String,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub platform_post_id: Option<String>,
    #[serde(default)]
    pub platform_url: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scheduled_for: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSchedule {
    pub id: i64,
    pub content: i64,
    pub social_account: i64,
    #[serde(default)]
    pub social_account_detail: Option<Value>,
    #[serde(default)]
    pub platform_name: String,
    pub scheduled_for: DateTime<Utc>,
    #[serde(default)]
    pub is_posted: bool,
    #[serde(default)]
    pub posted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Per-brand publishing rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSettings {
    pub id: i64,
    pub brand: i64,
    #[serde(default)]
    pub require_approval: bool,
    #[serde(default)]
    pub auto_schedule: bool,
    #[serde(default)]
    pub default_schedule_days: Option<u32>,
    #[serde(default)]
    pub max_content_length: Option<u32>,
    #[serde(default)]
    pub enable_hashtags: bool,
    #[serde(default)]
    pub enable_mentions: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSettingsData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_approval: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_schedule: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_schedule_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_content_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_hashtags: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_mentions: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateContentData {
    pub brand: i64,
    pub content_type: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_metadata: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateContentData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_metadata: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Reviewer notes attached to approve, reject and request-changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalActionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ApprovalActionData {
    pub fn with_notes(notes: impl Into<String>) -> Self {
        Self { notes: Some(notes.into()) }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitContentData {
    pub social_account_ids: Vec<i64>,
}

/// `{status, content}` returned by the approval actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalResponse {
    pub status: String,
    pub content: ContentItem,
}

/// `{status, submissions}` returned by submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub status: String,
    pub submissions: Vec<ContentSubmission>,
}

/// Filters and paging for the content listing. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<ApprovalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn approval_response_carries_content() {
        let response: ApprovalResponse = serde_json::from_value(json!({
            "status": "approved",
            "content": {
                "id": 11,
                "brand": 3,
                "title": "Tet campaign",
                "approval_status": "approved",
                "is_approved": true,
                "approved_at": "2024-02-01T09:00:00Z",
                "approved_by": 4
            }
        }))
        .unwrap();

        assert_eq!(response.content.approval_status, Some(ApprovalStatus::Approved));
        assert!(response.content.is_approved);
        assert_eq!(response.content.approved_by, Some(json!(4)));
    }

    #[test]
    fn query_serializes_only_set_filters() {
        let query = ContentQuery {
            brand: Some(3),
            approval_status: Some(ApprovalStatus::ChangesRequested),
            page: Some(2),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"brand": 3, "approval_status": "changes_requested", "page": 2})
        );
    }

    #[test]
    fn approval_notes_are_optional() {
        assert_eq!(serde_json::to_value(ApprovalActionData::default()).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(ApprovalActionData::with_notes("fix typo")).unwrap(),
            json!({"notes": "fix typo"})
        );
    }
}
