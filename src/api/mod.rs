/// Examples API for the tool trainer
///
/// Saved examples go either to the trainer database or to a JSON file
/// written by the backend. Both paths sit behind the [`ExamplesApi`] trait so
/// the dialog can be driven by the HTTP client or by a test double.
///
/// # Architecture
///
/// - `client` - reqwest-backed [`HttpExamplesApi`]
///
/// # Usage
///
/// ```rust,no_run
/// use tool_trainer::api::{ExamplesApi, HttpExamplesApi};
/// use tool_trainer::example::ExamplePayload;
///
/// # async fn example() -> Result<(), tool_trainer::api::ApiError> {
/// let api = HttpExamplesApi::from_env()?;
/// let payload = ExamplePayload::build("Greeting", "", &[], &[]);
/// api.create_example(&payload).await?;
/// # Ok(())
/// # }
/// ```
mod client;

use crate::example::ExamplePayload;
use async_trait::async_trait;

pub use client::HttpExamplesApi;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("{0}")]
    Config(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Persistence backend for saved examples.
#[async_trait]
pub trait ExamplesApi: Send + Sync {
    async fn create_example(&self, payload: &ExamplePayload) -> ApiResult<()>;

    async fn save_to_json(&self, path: &str, payload: &ExamplePayload) -> ApiResult<()>;
}
