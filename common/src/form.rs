//! Classification form state machine
//!
//! Pure state for the upload → classify → result flow, kept out of the UI
//! layer so the transitions are unit-testable. The UI owns one
//! `ClassifierForm`, forwards user events to it, and renders from its fields.
//!
//! Two rules live here rather than in the UI:
//! - `begin_classify` refuses while a classification is already in flight
//! - every async completion (preview read, prediction join) carries the
//!   generation it was started under; a completion whose generation no longer
//!   matches the current one is dropped, so work from before a reset or
//!   re-selection never reaches the screen

use crate::error::Result;
use crate::types::VehicleClassification;
use crate::validate;

/// Shown when the selected file cannot be read or encoded
pub const PROCESS_FAILED_MESSAGE: &str = "Failed to process image. Please try again.";

/// Shown when a prediction call fails without a `detail` from the service
pub const CLASSIFY_FAILED_MESSAGE: &str = "Failed to classify image. Please try again.";

/// Monotonic tag for async work started by the form
pub type Generation = u64;

/// A user-selected photo awaiting or holding its preview
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub byte_len: u64,
    /// Data-URL preview, present once the file read completes
    pub preview: Option<String>,
}

/// State of one classification form.
///
/// Invariant: at most one of `outcome` and `error` is populated.
#[derive(Debug, Clone, Default)]
pub struct ClassifierForm {
    selected: Option<SelectedImage>,
    outcome: Option<VehicleClassification>,
    error: Option<String>,
    classifying: bool,
    generation: Generation,
}

impl ClassifierForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&SelectedImage> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.selected.as_ref()?.preview.as_deref()
    }

    pub fn outcome(&self) -> Option<&VehicleClassification> {
        self.outcome.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_classifying(&self) -> bool {
        self.classifying
    }

    /// Accept a newly chosen file.
    ///
    /// Clears any prior outcome or error and restarts the machine; the
    /// returned generation tags the asynchronous preview read. A file that
    /// fails validation is not stored: the previous selection (if any) is
    /// kept and the error slot carries the rejection message.
    pub fn select_image(&mut self, file_name: &str, mime: &str, byte_len: u64) -> Result<Generation> {
        self.generation += 1;
        self.classifying = false;
        self.outcome = None;
        match validate::validate_image(file_name, mime, byte_len) {
            Ok(()) => {
                self.error = None;
                self.selected = Some(SelectedImage {
                    file_name: file_name.to_string(),
                    byte_len,
                    preview: None,
                });
                Ok(self.generation)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Deliver the preview read started under `generation`.
    pub fn preview_ready(&mut self, generation: Generation, data_url: String) {
        if generation != self.generation {
            return;
        }
        if let Some(image) = &mut self.selected {
            image.preview = Some(data_url);
        }
    }

    /// Record a failed file read for the selection tagged `generation`.
    ///
    /// The unreadable file is dropped; keeping it would leave a selection
    /// that can never produce a payload.
    pub fn preview_failed(&mut self, generation: Generation) {
        if generation != self.generation {
            return;
        }
        self.selected = None;
        self.outcome = None;
        self.error = Some(PROCESS_FAILED_MESSAGE.to_string());
    }

    /// Start a classification attempt.
    ///
    /// Returns the generation to tag the completion with, or `None` when
    /// there is no selected image or one is already in flight — the no-op
    /// cases, in which callers must not issue network requests.
    pub fn begin_classify(&mut self) -> Option<Generation> {
        if self.classifying || self.selected.is_none() {
            return None;
        }
        self.classifying = true;
        self.error = None;
        Some(self.generation)
    }

    /// Deliver the joined result of the two prediction calls.
    ///
    /// Partial success never reaches this point: the caller fails the whole
    /// submission if either endpoint fails.
    pub fn complete_classify(
        &mut self,
        generation: Generation,
        result: std::result::Result<VehicleClassification, String>,
    ) {
        if generation != self.generation || !self.classifying {
            return;
        }
        self.classifying = false;
        match result {
            Ok(outcome) => {
                self.error = None;
                self.outcome = Some(outcome);
            }
            Err(message) => {
                self.outcome = None;
                self.error = Some(message);
            }
        }
    }

    /// Return to the idle state unconditionally.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.outcome = None;
        self.error = None;
        self.classifying = false;
    }
}
