use td_client::{Client, ClientResult, UploadRequest};
use td_core::Analysis;

use async_trait::async_trait;

/// Remote side of the questionnaire: record upload and analysis lookup.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn upload(&self, request: &UploadRequest) -> ClientResult<()>;

    async fn analysis(&self, user_id: &str) -> ClientResult<Analysis>;
}

#[async_trait]
impl Backend for Client {
    async fn upload(&self, request: &UploadRequest) -> ClientResult<()> {
        self.upload_csv(request).await.map(|_| ())
    }

    async fn analysis(&self, user_id: &str) -> ClientResult<Analysis> {
        self.get_analysis(user_id).await
    }
}
