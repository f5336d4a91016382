//! Blocking HTTP client for the platform REST API.
//!
//! One method per endpoint; every response passes through the schema
//! normalization in [`super::schema`] before leaving this module. Runs on
//! the API worker thread, never on the UI thread.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::{
    Annotation, Category, Dataset, EntityId, Notification, Project, ProjectType, QuotaUsage,
    TrainingJob, User, Workspace,
};
use crate::session::SessionContext;

use super::error::ApiError;
use super::schema::{
    self, AnnotationEnvelope, CategoryRecord, DatasetRecord, ImagePage, ImagePageRecord,
    JobRecord, LoginResponse, NotificationRecord, ProjectRecord, QuotaRecord, WorkspaceRecord,
};

/// HTTP client for one platform deployment.
pub struct VisionClient {
    http: reqwest::blocking::Client,
    base_url: String,
    asset_base_url: String,
    token: Option<String>,
}

impl VisionClient {
    /// Create a client for the given deployment, taking the bearer token
    /// from the injected session (if signed in).
    pub fn new(base_url: &str, asset_base_url: &str, session: &SessionContext) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            asset_base_url: asset_base_url.trim_end_matches('/').to_string(),
            token: session.token().map(String::from),
        }
    }

    /// Replace the bearer token after a successful login (or sign-out).
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path)
    }

    // ---- session ----

    /// Exchange credentials for a bearer token. Enforcement is entirely
    /// server-side; the client just stores what it gets back.
    pub fn login(&self, email: &str, password: &str) -> Result<(String, User), ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response: LoginResponse = self.post_json("auth/login", &body)?;
        Ok((response.token, response.user.into()))
    }

    // ---- workspaces ----

    pub fn workspaces(&self) -> Result<Vec<Workspace>, ApiError> {
        let records: Vec<WorkspaceRecord> = self.get_json("workspaces")?;
        Ok(records.into_iter().map(Workspace::from).collect())
    }

    pub fn create_workspace(&self, name: &str) -> Result<Workspace, ApiError> {
        let body = serde_json::json!({ "name": name });
        let record: WorkspaceRecord = self.post_json("workspaces", &body)?;
        Ok(record.into())
    }

    pub fn delete_workspace(&self, workspace_id: EntityId) -> Result<(), ApiError> {
        self.delete(&format!("workspaces/{workspace_id}"))
    }

    // ---- projects ----

    pub fn projects(&self, workspace_id: EntityId) -> Result<Vec<Project>, ApiError> {
        let records: Vec<ProjectRecord> =
            self.get_json(&format!("workspaces/{workspace_id}/projects"))?;
        Ok(records.into_iter().map(Project::from).collect())
    }

    pub fn create_project(
        &self,
        workspace_id: EntityId,
        name: &str,
        project_type: ProjectType,
    ) -> Result<Project, ApiError> {
        let body = serde_json::json!({
            "name": name,
            "project_type": schema::project_type_str(project_type),
        });
        let record: ProjectRecord =
            self.post_json(&format!("workspaces/{workspace_id}/projects"), &body)?;
        Ok(record.into())
    }

    pub fn delete_project(
        &self,
        workspace_id: EntityId,
        project_id: EntityId,
    ) -> Result<(), ApiError> {
        self.delete(&format!("workspaces/{workspace_id}/projects/{project_id}"))
    }

    // ---- datasets ----

    pub fn datasets(&self, workspace_id: EntityId) -> Result<Vec<Dataset>, ApiError> {
        let records: Vec<DatasetRecord> =
            self.get_json(&format!("workspaces/{workspace_id}/datasets"))?;
        Ok(records.into_iter().map(Dataset::from).collect())
    }

    pub fn create_dataset(&self, workspace_id: EntityId, name: &str) -> Result<Dataset, ApiError> {
        let body = serde_json::json!({ "name": name });
        let record: DatasetRecord =
            self.post_json(&format!("workspaces/{workspace_id}/datasets"), &body)?;
        Ok(record.into())
    }

    pub fn delete_dataset(
        &self,
        workspace_id: EntityId,
        dataset_id: EntityId,
    ) -> Result<(), ApiError> {
        self.delete(&format!("workspaces/{workspace_id}/datasets/{dataset_id}"))
    }

    // ---- images ----

    /// Fetch one page of a dataset's image list. Pagination is
    /// `page`/`limit`, 1-based; this is the only place list URLs are built.
    pub fn list_images(
        &self,
        workspace_id: EntityId,
        dataset_id: EntityId,
        page: u32,
        limit: u32,
    ) -> Result<ImagePage, ApiError> {
        let record: ImagePageRecord = self.get_json(&format!(
            "workspaces/{workspace_id}/datasets/{dataset_id}/images?page={page}&limit={limit}"
        ))?;
        Ok(schema::decode_image_page(record))
    }

    /// Fetch an image binary from the asset host. The renderer decodes the
    /// bytes; this method does not interpret them.
    pub fn fetch_image_bytes(&self, relative_path: &str) -> Result<Vec<u8>, ApiError> {
        let url = format!(
            "{}/{}",
            self.asset_base_url,
            relative_path.trim_start_matches('/')
        );
        let response = self.with_auth(self.http.get(url)).send()?;
        let response = Self::ensure_success(response)?;
        Ok(response.bytes()?.to_vec())
    }

    // ---- categories ----

    pub fn categories(
        &self,
        workspace_id: EntityId,
        project_id: EntityId,
    ) -> Result<Vec<Category>, ApiError> {
        let records: Vec<CategoryRecord> = self.get_json(&format!(
            "workspaces/{workspace_id}/projects/{project_id}/categories"
        ))?;
        Ok(schema::decode_categories(records))
    }

    // ---- annotations ----

    /// Fetch and normalize the annotation set for one image.
    pub fn annotations(
        &self,
        workspace_id: EntityId,
        project_id: EntityId,
        image_id: EntityId,
    ) -> Result<Vec<Annotation>, ApiError> {
        let envelope: AnnotationEnvelope = self.get_json(&format!(
            "workspaces/{workspace_id}/projects/{project_id}/images/{image_id}/annotations"
        ))?;
        schema::check_schema_version(envelope.schema_version)?;
        Ok(schema::decode_annotations(envelope.data))
    }

    /// Save the complete annotation set for one image (full replace).
    /// Returns the number of records transmitted.
    pub fn save_annotations(
        &self,
        workspace_id: EntityId,
        project_id: EntityId,
        image_id: EntityId,
        annotations: &[Annotation],
    ) -> Result<usize, ApiError> {
        let envelope = AnnotationEnvelope {
            schema_version: Some(schema::SCHEMA_VERSION),
            data: schema::encode_annotations(annotations),
        };
        let count = envelope.data.len();
        self.post_no_response(
            &format!(
                "workspaces/{workspace_id}/projects/{project_id}/images/{image_id}/annotations"
            ),
            &envelope,
        )?;
        Ok(count)
    }

    // ---- training jobs ----

    pub fn jobs(
        &self,
        workspace_id: EntityId,
        project_id: EntityId,
    ) -> Result<Vec<TrainingJob>, ApiError> {
        let records: Vec<JobRecord> =
            self.get_json(&format!("workspaces/{workspace_id}/projects/{project_id}/jobs"))?;
        Ok(records.into_iter().map(TrainingJob::from).collect())
    }

    pub fn create_job(
        &self,
        workspace_id: EntityId,
        project_id: EntityId,
        name: &str,
        dataset_id: EntityId,
    ) -> Result<TrainingJob, ApiError> {
        let body = serde_json::json!({ "name": name, "dataset_id": dataset_id });
        let record: JobRecord = self.post_json(
            &format!("workspaces/{workspace_id}/projects/{project_id}/jobs"),
            &body,
        )?;
        Ok(record.into())
    }

    // ---- notifications ----

    pub fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        let records: Vec<NotificationRecord> = self.get_json("notifications")?;
        Ok(records.into_iter().map(Notification::from).collect())
    }

    pub fn mark_notification_read(&self, notification_id: EntityId) -> Result<(), ApiError> {
        self.post_no_response(
            &format!("notifications/{notification_id}/read"),
            &serde_json::json!({}),
        )
    }

    // ---- quota ----

    pub fn quota(&self, workspace_id: EntityId) -> Result<Vec<QuotaUsage>, ApiError> {
        let records: Vec<QuotaRecord> =
            self.get_json(&format!("workspaces/{workspace_id}/quota"))?;
        Ok(records.into_iter().map(QuotaUsage::from).collect())
    }

    // ---- private helpers ----

    fn with_auth(&self, request: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.with_auth(self.http.get(self.url(path))).send()?;
        Self::parse_response(response)
    }

    fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .with_auth(self.http.post(self.url(path)))
            .json(body)
            .send()?;
        Self::parse_response(response)
    }

    fn post_no_response<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self
            .with_auth(self.http.post(self.url(path)))
            .json(body)
            .send()?;
        Self::ensure_success(response)?;
        Ok(())
    }

    fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.with_auth(self.http.delete(self.url(path))).send()?;
        Self::ensure_success(response)?;
        Ok(())
    }

    /// Ensure the response has a success status code, or capture status and
    /// body for diagnostics.
    fn ensure_success(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    fn parse_response<T: DeserializeOwned>(
        response: reqwest::blocking::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response)?;
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}
