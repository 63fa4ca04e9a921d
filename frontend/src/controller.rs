//! Upload workflow state machine.
//!
//! [`InteractionState`] holds the state and its transitions, with no
//! reactive runtime involved. [`UploadController`] stores it in a Leptos
//! signal and drives the asynchronous submission through a
//! [`ProgramTransport`].
//!
//! ```text
//!            select_file                  submit (no file)
//!   Idle ───────────────► Ready     any ─────────────────► Failed
//!                          │
//!                          │ submit
//!                          ▼
//!                      Submitting ──ok──► Success
//!                          │
//!                          └──err──► Failed
//! ```
//!
//! `select_file` goes to `Ready` from any settled state; while a request is
//! in flight the phase stays `Submitting`. Nothing is terminal.

use std::rc::Rc;

use leptos::*;

use crate::error::SubmitError;
use crate::services::ProgramTransport;
use crate::types::{ManeuverRecord, UploadFile};

/// Position in the upload workflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected yet
    #[default]
    Idle,
    /// A file is selected and no request is running
    Ready,
    /// A request is in flight
    Submitting,
    /// Last submission produced a program
    Success,
    /// Last submission failed
    Failed,
}

/// Interaction state of the upload form.
#[derive(Clone, Debug)]
pub struct InteractionState<F> {
    pub selected_file: Option<F>,
    pub is_submitting: bool,
    pub error_message: Option<String>,
    pub program_rows: Vec<ManeuverRecord>,
    pub phase: Phase,
}

impl<F> Default for InteractionState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            is_submitting: false,
            error_message: None,
            program_rows: Vec::new(),
            phase: Phase::Idle,
        }
    }
}

impl<F: Clone> InteractionState<F> {
    /// Replace the selected file.
    ///
    /// Clears the error but keeps the rows of the previous program on screen.
    /// A request already in flight keeps running and still resolves.
    pub fn select_file(&mut self, file: F) {
        self.selected_file = Some(file);
        self.error_message = None;
        if !self.is_submitting {
            self.phase = Phase::Ready;
        }
    }

    /// Start a submission.
    ///
    /// Returns the file to send, or `None` when no request must be made:
    /// nothing selected (the state moves to `Failed`) or a request already
    /// in flight (the state is left alone).
    pub fn begin_submit(&mut self) -> Option<F> {
        if self.is_submitting {
            return None;
        }

        let Some(file) = self.selected_file.clone() else {
            self.fail(&SubmitError::NoFileSelected);
            return None;
        };

        self.error_message = None;
        self.is_submitting = true;
        self.phase = Phase::Submitting;
        Some(file)
    }

    /// Apply the outcome of the request started by [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, outcome: Result<Vec<ManeuverRecord>, SubmitError>) {
        self.is_submitting = false;
        match outcome {
            Ok(rows) => {
                self.program_rows = rows;
                self.error_message = None;
                self.phase = Phase::Success;
            }
            Err(e) => self.fail(&e),
        }
    }

    fn fail(&mut self, error: &SubmitError) {
        self.error_message = Some(error.to_string());
        self.phase = Phase::Failed;
    }
}

/// Owner of the upload state, shared by the form's event handlers.
pub struct UploadController<T: ProgramTransport> {
    state: RwSignal<InteractionState<T::File>>,
    transport: StoredValue<Rc<T>>,
}

impl<T: ProgramTransport> Clone for UploadController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ProgramTransport> Copy for UploadController<T> {}

impl<T: ProgramTransport> UploadController<T> {
    /// Must be called inside a reactive owner (a component or a runtime).
    pub fn new(transport: T) -> Self {
        Self {
            state: create_rw_signal(InteractionState::default()),
            transport: store_value(Rc::new(transport)),
        }
    }

    pub fn select_file(&self, file: T::File) {
        log::info!("📄 Selected {}", file.display_name());
        self.state.update(|state| state.select_file(file));
    }

    /// Run one submission to completion.
    ///
    /// Every failure ends up in the error message; nothing is returned.
    pub async fn submit(&self) {
        let Some(file) = self.state.try_update(InteractionState::begin_submit).flatten() else {
            self.state.with_untracked(|state| {
                if state.is_submitting {
                    log::warn!("⚠️ Submission already in flight, ignoring");
                } else {
                    log::warn!("⚠️ Submit without a selected file");
                }
            });
            return;
        };

        log::info!("⏳ Generating program from {}", file.display_name());
        let transport = self.transport.get_value();
        let outcome = transport.submit(&file).await.map_err(SubmitError::from);

        match &outcome {
            Ok(rows) => log::info!("✅ Program generated: {} maneuvers", rows.len()),
            Err(SubmitError::Transport(e)) => log::error!("❌ Program generation failed: {}", e.diagnostic()),
            Err(e) => log::error!("❌ Program generation failed: {}", e),
        }

        self.state.update(|state| state.finish_submit(outcome));
    }

    pub fn phase(&self) -> Signal<Phase> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.phase))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_submitting))
    }

    pub fn error_message(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error_message.clone()))
    }

    pub fn selected_name(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.selected_file.as_ref().map(UploadFile::display_name)))
    }

    /// Snapshot of the current program, for the table.
    pub fn program_rows(&self) -> Signal<Vec<ManeuverRecord>> {
        let state = self.state;
        create_memo(move |_| state.with(|s| s.program_rows.clone())).into()
    }
}
