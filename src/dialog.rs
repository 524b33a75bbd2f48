//! State and handlers behind the "Save Example" dialog.
//!
//! The dialog is a plain struct so any host can drive it. `save` runs the
//! whole flow in one call; hosts that cannot hold the state across an await
//! (Dioxus signals) call `prepare_save`, `SaveRequest::submit` and
//! `finish_save` themselves.

use crate::api::{ApiError, ExamplesApi};
use crate::example::{ExamplePayload, SaveMode, format_tags, parse_tags};
use crate::toast::{Notifier, Toast};
use crate::types::Content;

pub const MISSING_FILE_PATH: &str = "Please provide a file path for the JSON file.";
pub const GENERIC_SAVE_FAILURE: &str = "Failed to save example";

/// Values supplied by the host view. Re-read every time the dialog opens.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DialogSeed {
    pub example_name: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Please provide a file path for the JSON file.")]
    EmptyFilePath,

    #[error("a save is already in progress")]
    InFlight,

    #[error(transparent)]
    Persistence(#[from] ApiError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SaveTarget {
    Database,
    JsonFile(String),
}

/// A validated save, ready to hand to the API.
#[derive(Clone, Debug, PartialEq)]
pub struct SaveRequest {
    pub target: SaveTarget,
    pub payload: ExamplePayload,
}

impl SaveRequest {
    pub async fn submit<A>(&self, api: &A) -> Result<(), ApiError>
    where
        A: ExamplesApi + ?Sized,
    {
        match &self.target {
            SaveTarget::Database => api.create_example(&self.payload).await,
            SaveTarget::JsonFile(path) => api.save_to_json(path, &self.payload).await,
        }
    }

    fn success_message(&self) -> String {
        match &self.target {
            SaveTarget::Database => "Example saved to database".to_string(),
            SaveTarget::JsonFile(path) => format!("Example saved to {}", path),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SaveDialogState {
    pub is_open: bool,
    pub is_saving: bool,
    pub name: String,
    pub description: String,
    pub local_tags: Vec<String>,
    pub save_mode: SaveMode,
    pub file_path: String,
}

impl SaveDialogState {
    pub fn new(seed: &DialogSeed) -> Self {
        let mut state = Self::default();
        state.reseed(seed);
        state
    }

    fn reseed(&mut self, seed: &DialogSeed) {
        self.name = seed.example_name.clone().unwrap_or_default();
        self.local_tags = seed.tags.clone().unwrap_or_default();
    }

    /// Closed -> open transition. Name and tags are taken from the seed again;
    /// the description is kept.
    pub fn open(&mut self, seed: &DialogSeed) {
        if self.is_open {
            return;
        }
        self.is_open = true;
        self.reseed(seed);
    }

    /// Ignored while a save is in flight.
    pub fn close(&mut self) {
        if self.is_saving {
            return;
        }
        self.is_open = false;
    }

    pub fn set_open(&mut self, open: bool, seed: &DialogSeed) {
        if open {
            self.open(seed);
        } else {
            self.close();
        }
    }

    pub fn set_tags_input(&mut self, raw: &str) {
        self.local_tags = parse_tags(raw);
    }

    pub fn tags_input(&self) -> String {
        format_tags(&self.local_tags)
    }

    pub fn needs_file_path(&self) -> bool {
        self.save_mode == SaveMode::Json
    }

    pub fn can_save(&self, messages: &[Content]) -> bool {
        !self.is_saving && !self.name.trim().is_empty() && !messages.is_empty()
    }

    /// Validates the form and builds the request. On success the dialog is
    /// left in the saving state until `finish_save` runs.
    pub fn prepare_save(
        &mut self,
        messages: &[Content],
        notifier: &dyn Notifier,
    ) -> Result<SaveRequest, SaveError> {
        if self.is_saving {
            tracing::debug!("save ignored, another save is in flight");
            return Err(SaveError::InFlight);
        }
        self.is_saving = true;

        let payload =
            ExamplePayload::build(&self.name, &self.description, &self.local_tags, messages);

        let target = match self.save_mode {
            SaveMode::Database => SaveTarget::Database,
            SaveMode::Json => {
                let path = self.file_path.trim();
                if path.is_empty() {
                    self.is_saving = false;
                    notifier.notify(Toast::error(MISSING_FILE_PATH));
                    return Err(SaveError::EmptyFilePath);
                }
                SaveTarget::JsonFile(path.to_string())
            }
        };

        tracing::info!(
            name = %payload.name,
            mode = %self.save_mode,
            messages = payload.messages.len(),
            "saving example"
        );
        Ok(SaveRequest { target, payload })
    }

    /// Applies the API outcome: reset and close on success, toast and stay
    /// open on failure.
    pub fn finish_save(
        &mut self,
        request: &SaveRequest,
        result: Result<(), ApiError>,
        notifier: &dyn Notifier,
    ) -> Result<(), SaveError> {
        self.is_saving = false;
        match result {
            Ok(()) => {
                tracing::info!(name = %request.payload.name, "example saved");
                notifier.notify(Toast::success(request.success_message()));
                self.is_open = false;
                self.name.clear();
                self.description.clear();
                self.local_tags.clear();
                self.file_path.clear();
                Ok(())
            }
            Err(err) => {
                tracing::error!(name = %request.payload.name, error = %err, "failed to save example");
                notifier.notify(Toast::error(failure_message(&err)));
                Err(SaveError::Persistence(err))
            }
        }
    }

    /// Runs a full save against `api`. Errors have already been reported to
    /// `notifier` by the time this returns.
    pub async fn save<A>(
        &mut self,
        messages: &[Content],
        api: &A,
        notifier: &dyn Notifier,
    ) -> Result<(), SaveError>
    where
        A: ExamplesApi + ?Sized,
    {
        let request = self.prepare_save(messages, notifier)?;
        let result = request.submit(api).await;
        self.finish_save(&request, result, notifier)
    }
}

fn failure_message(err: &ApiError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        GENERIC_SAVE_FAILURE.to_string()
    } else {
        message
    }
}
