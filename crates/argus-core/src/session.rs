use std::fmt;

use crate::error::{ArgusError, Result};
use crate::intake::ImageFile;

/// The three user-facing workflows, one per tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Workflow {
    Classify,
    Encode,
    Decode,
}

impl Workflow {
    pub fn label(&self) -> &'static str {
        match self {
            Workflow::Classify => "Analyze",
            Workflow::Encode => "Hide Data",
            Workflow::Decode => "Extract Data",
        }
    }
}

impl fmt::Display for Workflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle of a workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Empty,
    FileSelected,
    Submitting,
    ResultShown,
}

/// Mutable per-workflow state: the selected file, auxiliary inputs, and a
/// generation counter used to discard responses that arrive after a clear.
#[derive(Debug)]
pub struct WorkflowSession {
    workflow: Workflow,
    phase: Phase,
    file: Option<ImageFile>,
    payload: String,
    password: String,
    use_password: bool,
    generation: u64,
}

impl WorkflowSession {
    pub fn new(workflow: Workflow) -> Self {
        Self {
            workflow,
            phase: Phase::Empty,
            file: None,
            payload: String::new(),
            password: String::new(),
            use_password: false,
            generation: 0,
        }
    }

    pub fn workflow(&self) -> Workflow {
        self.workflow
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn file(&self) -> Option<&ImageFile> {
        self.file.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Replace the selected file wholesale and move to `FileSelected`.
    pub fn accept_file(&mut self, file: ImageFile) {
        self.file = Some(file);
        self.phase = Phase::FileSelected;
    }

    /// Reset to `Empty` from any state: drop the file, wipe auxiliary
    /// inputs, and bump the generation so any outstanding response for the
    /// old state is discarded on arrival.
    pub fn clear(&mut self) {
        self.file = None;
        self.payload.clear();
        self.password.clear();
        self.use_password = false;
        self.phase = Phase::Empty;
        self.generation += 1;
    }

    pub fn set_payload(&mut self, text: impl Into<String>) {
        self.payload = text.into();
    }

    pub fn payload_raw(&mut self) -> &mut String {
        &mut self.payload
    }

    /// The text payload as submitted: surrounding whitespace stripped.
    pub fn payload(&self) -> &str {
        self.payload.trim()
    }

    pub fn set_password(&mut self, text: impl Into<String>) {
        self.password = text.into();
    }

    pub fn password_raw(&mut self) -> &mut String {
        &mut self.password
    }

    pub fn use_password(&self) -> bool {
        self.use_password
    }

    /// Toggle password protection. Turning it off wipes the stored value.
    pub fn set_use_password(&mut self, enabled: bool) {
        self.use_password = enabled;
        if !enabled {
            self.password.clear();
        }
    }

    /// Password to send with the request, if any.
    pub fn password(&self) -> Option<&str> {
        if self.use_password && !self.password.is_empty() {
            Some(self.password.as_str())
        } else {
            None
        }
    }

    /// Required-field predicate: the action button is enabled iff this
    /// holds. Classify and decode need a file; encode also needs a
    /// non-empty payload.
    pub fn can_submit(&self) -> bool {
        let has_file = self.file.is_some();
        match self.workflow {
            Workflow::Classify | Workflow::Decode => has_file,
            Workflow::Encode => has_file && !self.payload().is_empty(),
        }
    }

    /// Guarded transition to `Submitting`. Fails locally, before any
    /// request is built, when the predicate does not hold, when a previous
    /// request is still in flight, or when password protection is enabled
    /// but the field is blank. Returns the generation ticket the response
    /// must present to [`finish_submit`].
    pub fn begin_submit(&mut self) -> Result<u64> {
        if self.phase == Phase::Submitting || !self.can_submit() {
            return Err(ArgusError::NotReady);
        }
        if self.use_password && self.password.trim().is_empty() {
            return Err(ArgusError::MissingPassword);
        }
        self.phase = Phase::Submitting;
        Ok(self.generation)
    }

    /// Transition to `Submitting` for a server-side sample run, which needs
    /// no local file.
    pub fn begin_sample(&mut self) -> Result<u64> {
        if self.phase == Phase::Submitting {
            return Err(ArgusError::NotReady);
        }
        self.phase = Phase::Submitting;
        Ok(self.generation)
    }

    /// Apply a response outcome. Returns false (and changes nothing) when
    /// the generation is stale or the session is no longer submitting, so a
    /// late response can never resurrect a cleared workflow.
    pub fn finish_submit(&mut self, generation: u64, success: bool) -> bool {
        if generation != self.generation || self.phase != Phase::Submitting {
            return false;
        }
        self.phase = if success {
            Phase::ResultShown
        } else if self.file.is_some() {
            Phase::FileSelected
        } else {
            Phase::Empty
        };
        true
    }
}
