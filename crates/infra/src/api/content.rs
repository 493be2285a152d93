//! Content endpoints
//!
//! Covers content items and their approval workflow, plus the content-type,
//! asset, settings and AI generation sub-resources.

use std::sync::Arc;

use orion_domain::constants::{
    CONTENT_ASSETS_PATH, CONTENT_PATH, CONTENT_SETTINGS_PATH, CONTENT_TYPES_PATH,
    GENERATE_IMAGE_PATH, GENERATE_VIDEO_PATH,
};
use orion_domain::{
    ApprovalActionData, ApprovalResponse, ContentApprovalLog, ContentAsset, ContentAssetData,
    ContentItem, ContentQuery, ContentSchedule, ContentSettings, ContentSettingsData,
    ContentSubmission, ContentType, CreateContentData, ImageGenerationRequest,
    ImageGenerationResult, Paginated, SubmitContentData, SubmitResponse, UpdateContentData,
    VideoCompositionRequest, VideoCompositionResult,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info, instrument};

use super::client::ApiClient;
use super::errors::ApiError;

fn item_path(id: i64) -> String {
    format!("{CONTENT_PATH}{id}/")
}

fn action_path(id: i64, action: &str) -> String {
    format!("{CONTENT_PATH}{id}/{action}/")
}

pub struct ContentApi {
    client: Arc<ApiClient>,
}

impl ContentApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Collection endpoints sometimes paginate and sometimes don't. Either
    /// way the caller gets `count` and `next` to page on.
    async fn page<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<Paginated<T>, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let page: Paginated<T> = self.client.list(path, query).await?;
        debug!(path, count = page.count, has_next = page.has_next(), "collection fetched");
        Ok(page)
    }

    // === Content items ===

    #[instrument(skip(self))]
    pub async fn list(&self, query: &ContentQuery) -> Result<Paginated<ContentItem>, ApiError> {
        let page: Paginated<ContentItem> = self.client.list(CONTENT_PATH, Some(query)).await?;
        debug!(count = page.count, "content listed");
        Ok(page)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<ContentItem, ApiError> {
        self.client.get(&item_path(id)).await
    }

    #[instrument(skip(self, data), fields(brand = data.brand))]
    pub async fn create(&self, data: &CreateContentData) -> Result<ContentItem, ApiError> {
        let item: ContentItem = self.client.post(CONTENT_PATH, data).await?;
        debug!(content_id = item.id, "content created");
        Ok(item)
    }

    #[instrument(skip(self, data))]
    pub async fn update(&self, id: i64, data: &UpdateContentData) -> Result<ContentItem, ApiError> {
        self.client.put(&item_path(id), data).await
    }

    #[instrument(skip(self, data))]
    pub async fn patch(&self, id: i64, data: &UpdateContentData) -> Result<ContentItem, ApiError> {
        self.client.patch(&item_path(id), data).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&item_path(id)).await
    }

    // === Approval workflow ===

    #[instrument(skip(self, data))]
    pub async fn approve(
        &self,
        id: i64,
        data: &ApprovalActionData,
    ) -> Result<ApprovalResponse, ApiError> {
        self.review(id, "approve", data).await
    }

    #[instrument(skip(self, data))]
    pub async fn reject(
        &self,
        id: i64,
        data: &ApprovalActionData,
    ) -> Result<ApprovalResponse, ApiError> {
        self.review(id, "reject", data).await
    }

    #[instrument(skip(self, data))]
    pub async fn request_changes(
        &self,
        id: i64,
        data: &ApprovalActionData,
    ) -> Result<ApprovalResponse, ApiError> {
        self.review(id, "request_changes", data).await
    }

    async fn review(
        &self,
        id: i64,
        action: &str,
        data: &ApprovalActionData,
    ) -> Result<ApprovalResponse, ApiError> {
        let response: ApprovalResponse = self.client.post(&action_path(id, action), data).await?;
        info!(content_id = id, action, status = %response.status, "content reviewed");
        Ok(response)
    }

    /// Queue an approved item for publishing on the given social accounts.
    #[instrument(skip(self, data), fields(accounts = data.social_account_ids.len()))]
    pub async fn submit(
        &self,
        id: i64,
        data: &SubmitContentData,
    ) -> Result<SubmitResponse, ApiError> {
        let response: SubmitResponse = self.client.post(&action_path(id, "submit"), data).await?;
        info!(content_id = id, submissions = response.submissions.len(), "content submitted");
        Ok(response)
    }

    #[instrument(skip(self))]
    pub async fn pending_approval(&self) -> Result<Paginated<ContentItem>, ApiError> {
        self.client.list::<_, Value>(&format!("{CONTENT_PATH}pending_approval/"), None).await
    }

    #[instrument(skip(self))]
    pub async fn approved_content(&self) -> Result<Paginated<ContentItem>, ApiError> {
        self.client.list::<_, Value>(&format!("{CONTENT_PATH}approved_content/"), None).await
    }

    #[instrument(skip(self))]
    pub async fn scheduled_for_today(&self) -> Result<Paginated<ContentSchedule>, ApiError> {
        self.page::<_, Value>(&format!("{CONTENT_PATH}scheduled_for_today/"), None).await
    }

    #[instrument(skip(self))]
    pub async fn approval_history(
        &self,
        id: i64,
    ) -> Result<Paginated<ContentApprovalLog>, ApiError> {
        self.page::<_, Value>(&action_path(id, "approval_history"), None).await
    }

    #[instrument(skip(self))]
    pub async fn submission_status(
        &self,
        id: i64,
    ) -> Result<Paginated<ContentSubmission>, ApiError> {
        self.page::<_, Value>(&action_path(id, "submission_status"), None).await
    }

    #[instrument(skip(self))]
    pub async fn scheduled_posts(&self, id: i64) -> Result<Paginated<ContentSchedule>, ApiError> {
        self.page::<_, Value>(&action_path(id, "scheduled_posts"), None).await
    }

    // === Content types ===

    #[instrument(skip(self))]
    pub async fn content_types(&self) -> Result<Paginated<ContentType>, ApiError> {
        self.page::<_, Value>(CONTENT_TYPES_PATH, None).await
    }

    #[instrument(skip(self))]
    pub async fn content_type(&self, id: i64) -> Result<ContentType, ApiError> {
        self.client.get(&format!("{CONTENT_TYPES_PATH}{id}/")).await
    }

    // === Assets ===

    /// Assets, optionally only those attached to one content item.
    #[instrument(skip(self))]
    pub async fn assets(&self, content: Option<i64>) -> Result<Paginated<ContentAsset>, ApiError> {
        let filter = content.map(|content| json!({ "content": content }));
        self.page(CONTENT_ASSETS_PATH, filter.as_ref()).await
    }

    #[instrument(skip(self))]
    pub async fn asset(&self, id: i64) -> Result<ContentAsset, ApiError> {
        self.client.get(&format!("{CONTENT_ASSETS_PATH}{id}/")).await
    }

    #[instrument(skip(self, data))]
    pub async fn create_asset(&self, data: &ContentAssetData) -> Result<ContentAsset, ApiError> {
        self.client.post(CONTENT_ASSETS_PATH, data).await
    }

    #[instrument(skip(self, data))]
    pub async fn update_asset(
        &self,
        id: i64,
        data: &ContentAssetData,
    ) -> Result<ContentAsset, ApiError> {
        self.client.put(&format!("{CONTENT_ASSETS_PATH}{id}/"), data).await
    }

    #[instrument(skip(self))]
    pub async fn delete_asset(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{CONTENT_ASSETS_PATH}{id}/")).await
    }

    // === Settings ===

    /// Publishing settings, optionally only those of one brand.
    #[instrument(skip(self))]
    pub async fn settings(
        &self,
        brand: Option<i64>,
    ) -> Result<Paginated<ContentSettings>, ApiError> {
        let filter = brand.map(|brand| json!({ "brand": brand }));
        self.page(CONTENT_SETTINGS_PATH, filter.as_ref()).await
    }

    #[instrument(skip(self))]
    pub async fn setting(&self, id: i64) -> Result<ContentSettings, ApiError> {
        self.client.get(&format!("{CONTENT_SETTINGS_PATH}{id}/")).await
    }

    #[instrument(skip(self, data))]
    pub async fn create_setting(
        &self,
        data: &ContentSettingsData,
    ) -> Result<ContentSettings, ApiError> {
        self.client.post(CONTENT_SETTINGS_PATH, data).await
    }

    #[instrument(skip(self, data))]
    pub async fn update_setting(
        &self,
        id: i64,
        data: &ContentSettingsData,
    ) -> Result<ContentSettings, ApiError> {
        self.client.put(&format!("{CONTENT_SETTINGS_PATH}{id}/"), data).await
    }

    #[instrument(skip(self))]
    pub async fn delete_setting(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("{CONTENT_SETTINGS_PATH}{id}/")).await
    }

    // === Generation ===

    /// Render an image from a text prompt.
    #[instrument(skip(self, prompt, config))]
    pub async fn generate_image(
        &self,
        prompt: &str,
        config: Option<Map<String, Value>>,
    ) -> Result<ImageGenerationResult, ApiError> {
        let request = ImageGenerationRequest { prompt: prompt.to_string(), config };
        let result: ImageGenerationResult = self.client.post(GENERATE_IMAGE_PATH, &request).await?;
        info!(status = %result.status, "image generated");
        Ok(result)
    }

    /// Compose a slideshow video from still images.
    #[instrument(skip(self, image_urls, config), fields(images = image_urls.len()))]
    pub async fn generate_video(
        &self,
        image_urls: &[String],
        config: Option<Map<String, Value>>,
    ) -> Result<VideoCompositionResult, ApiError> {
        let request = VideoCompositionRequest { image_urls: image_urls.to_vec(), config };
        let result: VideoCompositionResult =
            self.client.post(GENERATE_VIDEO_PATH, &request).await?;
        info!(status = %result.status, "video composed");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use orion_domain::{ApprovalStatus, CredentialPair, SubmissionStatus};
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::ApiClientConfig;
    use crate::storage::MemoryTokenStore;

    fn content_api(server: &MockServer) -> ContentApi {
        let store = MemoryTokenStore::with_credentials(CredentialPair::new("access", "refresh"));
        let config = ApiClientConfig { base_url: server.uri(), ..Default::default() };
        let client =
            ApiClient::builder().config(config).token_store(Arc::new(store)).build().unwrap();
        ContentApi::new(Arc::new(client))
    }

    fn item_json(id: i64, status: &str) -> Value {
        json!({
            "id": id,
            "brand": 3,
            "content_type": 1,
            "title": "Tet campaign",
            "approval_status": status,
            "is_approved": status == "approved"
        })
    }

    fn submission_json(id: i64, status: &str) -> Value {
        json!({
            "id": id,
            "content": 11,
            "social_account": 5,
            "platform_name": "Facebook",
            "status": status
        })
    }

    #[tokio::test]
    async fn list_sends_only_set_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CONTENT_PATH))
            .and(query_param("brand", "3"))
            .and(query_param("approval_status", "pending"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 30,
                "next": "https://orionai.runagent.io/api/v1/content/?page=3",
                "previous": "https://orionai.runagent.io/api/v1/content/?page=1",
                "results": [item_json(11, "pending")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let query = ContentQuery {
            brand: Some(3),
            approval_status: Some(ApprovalStatus::Pending),
            page: Some(2),
            ..Default::default()
        };
        let page = content_api(&server).list(&query).await.unwrap();

        assert_eq!(page.count, 30);
        assert_eq!(page.results[0].approval_status, Some(ApprovalStatus::Pending));

        let requests = server.received_requests().await.unwrap();
        let pairs: Vec<_> = requests[0].url.query_pairs().collect();
        assert_eq!(pairs.len(), 3);
    }

    #[tokio::test]
    async fn item_crud() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(CONTENT_PATH))
            .and(body_json(json!({"brand": 3, "content_type": 1, "title": "Tet campaign"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(item_json(11, "pending")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/content/11/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(item_json(11, "pending")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/content/11/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(item_json(11, "pending")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/api/v1/content/11/"))
            .and(body_json(json!({"hashtags": "#tet"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(item_json(11, "pending")))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/content/11/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let api = content_api(&server);
        let created = api
            .create(&CreateContentData {
                brand: 3,
                content_type: 1,
                title: "Tet campaign".into(),
                description: None,
                body: None,
                slug: None,
                tags: None,
                hashtags: None,
                content_metadata: None,
                is_active: None,
            })
            .await
            .unwrap();
        assert_eq!(api.get(created.id).await.unwrap().title, "Tet campaign");

        let update = UpdateContentData { title: Some("Tet campaign".into()), ..Default::default() };
        api.update(11, &update).await.unwrap();

        let patch = UpdateContentData { hashtags: Some("#tet".into()), ..Default::default() };
        api.patch(11, &patch).await.unwrap();
        api.delete(11).await.unwrap();
    }

    #[tokio::test]
    async fn approval_actions_post_notes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/content/11/approve/"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "approved", "content": item_json(11, "approved")
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/content/11/reject/"))
            .and(body_json(json!({"notes": "Off brand"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "rejected", "content": item_json(11, "rejected")
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/content/11/request_changes/"))
            .and(body_json(json!({"notes": "Shorter caption"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "changes_requested", "content": item_json(11, "changes_requested")
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = content_api(&server);

        let approved = api.approve(11, &ApprovalActionData::default()).await.unwrap();
        assert!(approved.content.is_approved);

        let rejected = api.reject(11, &ApprovalActionData::with_notes("Off brand")).await.unwrap();
        assert_eq!(rejected.content.approval_status, Some(ApprovalStatus::Rejected));

        let changes = api
            .request_changes(11, &ApprovalActionData::with_notes("Shorter caption"))
            .await
            .unwrap();
        assert_eq!(changes.status, "changes_requested");
    }

    #[tokio::test]
    async fn submit_returns_submissions() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/content/11/submit/"))
            .and(body_json(json!({"social_account_ids": [5, 6]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "submitted",
                "submissions": [submission_json(1, "pending"), submission_json(2, "submitted")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = content_api(&server)
            .submit(11, &SubmitContentData { social_account_ids: vec![5, 6] })
            .await
            .unwrap();

        assert_eq!(response.submissions.len(), 2);
        assert_eq!(response.submissions[1].status, SubmissionStatus::Submitted);
    }

    #[tokio::test]
    async fn workflow_listings_normalize() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/content/pending_approval/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([item_json(1, "pending"), item_json(2, "pending")])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/content/approved_content/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 9, "next": null, "previous": null, "results": [item_json(3, "approved")]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/content/scheduled_for_today/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 1,
                "content": 11,
                "social_account": 5,
                "scheduled_for": "2024-02-10T08:00:00Z"
            }])))
            .mount(&server)
            .await;

        let api = content_api(&server);
        assert_eq!(api.pending_approval().await.unwrap().count, 2);
        assert_eq!(api.approved_content().await.unwrap().count, 9);
        assert_eq!(api.scheduled_for_today().await.unwrap().results[0].content, 11);
    }

    #[tokio::test]
    async fn per_item_history_routes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/content/11/approval_history/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "approver": 4, "status": "approved", "notes": "Looks good"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/content/11/submission_status/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([submission_json(1, "failed")])),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/content/11/scheduled_posts/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let api = content_api(&server);
        let history = api.approval_history(11).await.unwrap();
        assert_eq!(history.results[0].notes.as_deref(), Some("Looks good"));

        let submissions = api.submission_status(11).await.unwrap();
        assert_eq!(submissions.results[0].status, SubmissionStatus::Failed);

        assert!(api.scheduled_posts(11).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn sub_resources_use_their_roots() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CONTENT_TYPES_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "Post", "slug": "post"}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/content/content-types/1/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 1, "name": "Post", "slug": "post"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(CONTENT_ASSETS_PATH))
            .and(query_param("content", "11"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 2, "content": 11, "asset_type": "image", "file_url": "https://cdn/x.png"
            }])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(CONTENT_SETTINGS_PATH))
            .and(query_param("brand", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 4, "brand": 3, "require_approval": true
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let api = content_api(&server);
        assert_eq!(api.content_types().await.unwrap().results[0].slug, "post");
        assert_eq!(api.content_type(1).await.unwrap().name, "Post");
        assert_eq!(api.assets(Some(11)).await.unwrap().results[0].id, 2);
        assert!(api.settings(Some(3)).await.unwrap().results[0].require_approval);
    }

    #[tokio::test]
    async fn paginated_assets_keep_count_and_next() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CONTENT_ASSETS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 120,
                "next": "https://orionai.runagent.io/api/v1/content/assets/?page=2",
                "previous": null,
                "results": [{
                    "id": 2, "content": 11, "asset_type": "image", "file_url": "https://cdn/x.png"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = content_api(&server).assets(None).await.unwrap();

        assert_eq!(page.count, 120);
        assert_eq!(page.results.len(), 1);
        assert!(page.has_next());
        assert_eq!(
            page.next.as_deref(),
            Some("https://orionai.runagent.io/api/v1/content/assets/?page=2")
        );
    }

    #[tokio::test]
    async fn asset_and_setting_crud() {
        let server = MockServer::start().await;
        let asset = json!({
            "id": 2, "content": 11, "asset_type": "video", "file_url": "https://cdn/x.mp4"
        });
        let setting = json!({"id": 4, "brand": 3, "auto_schedule": true});

        Mock::given(method("POST"))
            .and(path(CONTENT_ASSETS_PATH))
            .respond_with(ResponseTemplate::new(201).set_body_json(asset.clone()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/content/assets/2/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(asset.clone()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/content/assets/2/"))
            .and(body_json(json!({"position": 1})))
            .respond_with(ResponseTemplate::new(200).set_body_json(asset))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(CONTENT_SETTINGS_PATH))
            .and(body_json(json!({"brand": 3, "auto_schedule": true})))
            .respond_with(ResponseTemplate::new(201).set_body_json(setting.clone()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/content/settings/4/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(setting.clone()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/content/settings/4/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(setting))
            .expect(1)
            .mount(&server)
            .await;
        for route in ["/api/v1/content/assets/2/", "/api/v1/content/settings/4/"] {
            Mock::given(method("DELETE"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(204))
                .expect(1)
                .mount(&server)
                .await;
        }

        let api = content_api(&server);

        let data = ContentAssetData {
            content: Some(11),
            file_url: Some("https://cdn/x.mp4".into()),
            ..Default::default()
        };
        assert_eq!(api.create_asset(&data).await.unwrap().id, 2);
        api.asset(2).await.unwrap();
        api.update_asset(2, &ContentAssetData { position: Some(1), ..Default::default() })
            .await
            .unwrap();
        api.delete_asset(2).await.unwrap();

        let data = ContentSettingsData {
            brand: Some(3),
            auto_schedule: Some(true),
            ..Default::default()
        };
        assert!(api.create_setting(&data).await.unwrap().auto_schedule);
        api.setting(4).await.unwrap();
        api.update_setting(4, &data).await.unwrap();
        api.delete_setting(4).await.unwrap();
    }

    #[tokio::test]
    async fn generation_endpoints() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_IMAGE_PATH))
            .and(body_json(json!({"prompt": "bowl of pho", "config": {"size": "512x512"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "image_url": "https://cdn/pho.png",
                "metadata": {"engine": "dall-e-3"}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(GENERATE_VIDEO_PATH))
            .and(body_json(json!({"image_urls": ["https://cdn/a.png", "https://cdn/b.png"]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "video_url": "https://cdn/slideshow.mp4"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = content_api(&server);

        let mut config = Map::new();
        config.insert("size".into(), json!("512x512"));
        let image = api.generate_image("bowl of pho", Some(config)).await.unwrap();
        assert_eq!(image.image_url, "https://cdn/pho.png");
        assert_eq!(image.metadata["engine"], "dall-e-3");

        let images = vec!["https://cdn/a.png".to_string(), "https://cdn/b.png".to_string()];
        let video = api.generate_video(&images, None).await.unwrap();
        assert_eq!(video.video_url, "https://cdn/slideshow.mp4");
        assert!(video.metadata.is_empty());
    }
}
