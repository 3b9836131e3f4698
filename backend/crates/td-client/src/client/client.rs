use crate::{ClientError, ClientResult, UploadRequest};

use td_core::Analysis;

use std::collections::HashMap;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde_json::Value;

const UPLOAD_CSV_PATH: &str = "/api/upload-csv";
const GET_ANALYSIS_PATH: &str = "/api/get-analysis";

/// HTTP client for the analysis backend
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://localhost:5000")
    /// * `timeout` - Budget for each request, connect included
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::builder().timeout(timeout).build()?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Execute request and map error bodies
    async fn execute(&self, req: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| error_message(&body))
                .unwrap_or(text);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Upload one submission record
    pub async fn upload_csv(&self, request: &UploadRequest) -> ClientResult<Value> {
        debug!(
            "Uploading record for {} (with_feedback={})",
            request.user_id, request.with_feedback
        );
        let req = self
            .client
            .request(Method::POST, self.url(UPLOAD_CSV_PATH))
            .json(request);
        self.execute(req).await
    }

    /// Fetch intervention weights for a user
    pub async fn get_analysis(&self, user_id: &str) -> ClientResult<Analysis> {
        if user_id.is_empty() {
            return Err(ClientError::invalid_request("No user ID found"));
        }

        let url = Url::parse_with_params(&self.url(GET_ANALYSIS_PATH), &[("user_id", user_id)])
            .map_err(|e| ClientError::invalid_request(format!("Invalid backend URL: {e}")))?;
        let req = self.client.request(Method::GET, url);
        let body = self.execute(req).await?;

        let weights: HashMap<String, f64> = serde_json::from_value(body)?;
        Ok(Analysis::from_weights(weights))
    }
}

/// Backend error bodies are `{"error": "..."}`, optionally with `"message"`.
pub(crate) fn error_message(body: &Value) -> Option<String> {
    let error = body.get("error")?;
    let error = match error {
        Value::String(s) => s.clone(),
        other => other
            .get("message")
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| other.to_string()),
    };

    match body.get("message").and_then(Value::as_str) {
        Some(detail) => Some(format!("{error}: {detail}")),
        None => Some(error),
    }
}
