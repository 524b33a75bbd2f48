use super::{ApiError, ApiResult, ExamplesApi};
use crate::config::{ApiConfig, settings};
use crate::example::ExamplePayload;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Client for the trainer backend's examples endpoints.
pub struct HttpExamplesApi {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct SaveJsonRequest<'a> {
    file_path: &'a str,
    example: &'a ExamplePayload,
}

// Error bodies come back either FastAPI-style (`detail`) or as `{ message }`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

impl HttpExamplesApi {
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = config.base_url.trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "Invalid examples API URL: '{}'",
                config.base_url
            )));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Create the client from `TRAINER_API_URL` / `TRAINER_API_KEY`
    pub fn from_env() -> ApiResult<Self> {
        Self::new(&settings().api)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> ApiResult<()> {
        let url = self.endpoint(path);
        let mut request = self.client.post(&url).json(body);

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await?;
        tracing::warn!(%url, %status, "examples API returned an error");
        Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(status.as_u16(), &body),
        })
    }
}

#[async_trait]
impl ExamplesApi for HttpExamplesApi {
    async fn create_example(&self, payload: &ExamplePayload) -> ApiResult<()> {
        self.post("examples", payload).await
    }

    async fn save_to_json(&self, path: &str, payload: &ExamplePayload) -> ApiResult<()> {
        self.post(
            "examples/save-json",
            &SaveJsonRequest {
                file_path: path,
                example: payload,
            },
        )
        .await
    }
}

/// Pull a readable message out of an error response body.
fn error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(serde_json::Value::String(detail)) = parsed.detail
            && !detail.trim().is_empty()
        {
            return detail;
        }
        if let Some(message) = parsed.message
            && !message.trim().is_empty()
        {
            return message;
        }
    }

    let body = body.trim();
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}
