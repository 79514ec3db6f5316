//! HTTP client for network-based API calls

use crate::service::GuestService;
use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{DataEnvelope, Guest, GuestCreate, GuestUpdate};
use std::path::Path;

const SHEET_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// HTTP client for making network requests to the guest service
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body, ignoring the response payload
    pub async fn post_empty(&self, path: &str) -> ClientResult<()> {
        let response = self.client.post(self.url(path)).send().await?;
        Self::handle_status(response).await
    }

    /// Make a PATCH request without body, ignoring the response payload
    pub async fn patch_empty(&self, path: &str) -> ClientResult<()> {
        let response = self.client.patch(self.url(path)).send().await?;
        Self::handle_status(response).await
    }

    /// Make a DELETE request, ignoring the response payload
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::handle_status(response).await
    }

    /// Make a POST request with a multipart form
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<T> {
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a multipart form, ignoring the response payload
    pub async fn post_multipart_empty(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<()> {
        let response = self
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::handle_status(response).await
    }

    /// Handle an HTTP response carrying a JSON payload
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(Into::into)
    }

    /// Handle a status-only HTTP response
    async fn handle_status(response: reqwest::Response) -> ClientResult<()> {
        Self::check_status(response).await.map(|_| ())
    }

    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            tracing::warn!("request failed with {}: {}", status, text);
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        Ok(response)
    }

    async fn file_part(path: &Path, mime: &str) -> ClientResult<reqwest::multipart::Part> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            ClientError::Validation(format!("cannot read upload file {}: {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)?)
    }

    // ========== Guest API ==========

    /// Fetch the full guest collection
    pub async fn list_guests(&self) -> ClientResult<Vec<Guest>> {
        self.get("guests").await
    }

    /// Create a guest
    pub async fn create_guest(&self, payload: &GuestCreate) -> ClientResult<Guest> {
        self.post("guests", payload).await
    }

    /// Update a guest
    pub async fn update_guest(&self, id: &str, payload: &GuestUpdate) -> ClientResult<Guest> {
        self.put(&format!("guests/{id}"), payload).await
    }

    /// Delete a guest
    pub async fn delete_guest(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("guests/{id}")).await
    }

    /// Mark a guest invitation as shared
    pub async fn mark_invitation_shared(&self, id: &str) -> ClientResult<()> {
        self.post_empty(&format!("guests/shared/{id}")).await
    }

    /// Mark a group link as shared
    pub async fn mark_group_shared(&self, group_id: &str) -> ClientResult<()> {
        self.patch_empty(&format!("groups/{}/share", urlencoding::encode(group_id)))
            .await
    }

    /// Upload a guest spreadsheet; returns the guests the backend created
    pub async fn upload_guest_sheet(
        &self,
        file: &Path,
        origin: &str,
    ) -> ClientResult<Vec<Guest>> {
        let part = Self::file_part(file, SHEET_MIME).await?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("origin", origin.to_string());

        let envelope: DataEnvelope<Vec<Guest>> = self.post_multipart("guests/upload", form).await?;
        Ok(envelope.into_inner())
    }

    /// Upload a group photo
    pub async fn upload_group_image(&self, file: &Path, group_name: &str) -> ClientResult<()> {
        let mime = mime_guess::from_path(file).first_or_octet_stream();
        let part = Self::file_part(file, mime.as_ref()).await?;
        let form = reqwest::multipart::Form::new()
            .part("imageFile", part)
            .text("groupName", group_name.to_string());

        self.post_multipart_empty("guests/group-image", form).await
    }
}

#[async_trait]
impl GuestService for HttpClient {
    async fn list_guests(&self) -> ClientResult<Vec<Guest>> {
        HttpClient::list_guests(self).await
    }

    async fn create_guest(&self, payload: &GuestCreate) -> ClientResult<Guest> {
        HttpClient::create_guest(self, payload).await
    }

    async fn update_guest(&self, id: &str, payload: &GuestUpdate) -> ClientResult<Guest> {
        HttpClient::update_guest(self, id, payload).await
    }

    async fn delete_guest(&self, id: &str) -> ClientResult<()> {
        HttpClient::delete_guest(self, id).await
    }

    async fn mark_invitation_shared(&self, id: &str) -> ClientResult<()> {
        HttpClient::mark_invitation_shared(self, id).await
    }

    async fn mark_group_shared(&self, group_id: &str) -> ClientResult<()> {
        HttpClient::mark_group_shared(self, group_id).await
    }

    async fn upload_guest_sheet(&self, file: &Path, origin: &str) -> ClientResult<Vec<Guest>> {
        HttpClient::upload_guest_sheet(self, file, origin).await
    }

    async fn upload_group_image(&self, file: &Path, group_name: &str) -> ClientResult<()> {
        HttpClient::upload_group_image(self, file, group_name).await
    }
}
