pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod upload_request;

pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
pub use upload_request::UploadRequest;
