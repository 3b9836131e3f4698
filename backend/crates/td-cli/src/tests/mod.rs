mod survey;

use crate::{Backend, Questionnaire};

use td_client::{ClientError, ClientResult, UploadRequest};
use td_core::Analysis;
use td_store::{MemoryStore, SessionStore};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// Backend double that records uploads and serves a canned analysis.
#[derive(Clone, Default)]
pub(crate) struct FakeBackend {
    pub(crate) uploads: Arc<Mutex<Vec<UploadRequest>>>,
    pub(crate) analysis_requests: Arc<Mutex<Vec<String>>>,
    /// None answers analysis requests with an error
    pub(crate) analysis: Option<Analysis>,
    pub(crate) offline: bool,
}

impl FakeBackend {
    pub(crate) fn serving(analysis: Analysis) -> Self {
        Self {
            analysis: Some(analysis),
            ..Self::default()
        }
    }

    pub(crate) fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub(crate) fn uploads(&self) -> Vec<UploadRequest> {
        self.uploads.lock().unwrap().clone()
    }

    pub(crate) fn analysis_requests(&self) -> Vec<String> {
        self.analysis_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn upload(&self, request: &UploadRequest) -> ClientResult<()> {
        self.uploads.lock().unwrap().push(request.clone());
        if self.offline {
            return Err(ClientError::invalid_request("backend offline"));
        }
        Ok(())
    }

    async fn analysis(&self, user_id: &str) -> ClientResult<Analysis> {
        self.analysis_requests
            .lock()
            .unwrap()
            .push(user_id.to_string());
        match (&self.analysis, self.offline) {
            (Some(analysis), false) => Ok(analysis.clone()),
            _ => Err(ClientError::invalid_request("backend offline")),
        }
    }
}

pub(crate) fn questionnaire(backend: &FakeBackend) -> Questionnaire<MemoryStore, FakeBackend> {
    Questionnaire::new(SessionStore::new(MemoryStore::new()), backend.clone(), false)
}

pub(crate) fn backend_analysis() -> Analysis {
    Analysis::from_weights(
        [
            ("White noise".to_string(), 0.6),
            ("Take a walk".to_string(), 0.4),
        ]
        .into_iter()
        .collect(),
    )
}
