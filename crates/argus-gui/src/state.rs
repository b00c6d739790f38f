use std::time::Instant;

use argus_core::protocol::{CapacityReply, DecodeReply};
use argus_core::report::ClassificationReport;
use argus_core::session::{Workflow, WorkflowSession};
use argus_core::stego::EncodeReport;

/// The three tabs, one per workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Analyze,
    Encode,
    Decode,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Analyze, Tab::Encode, Tab::Decode];

    pub fn workflow(&self) -> Workflow {
        match self {
            Tab::Analyze => Workflow::Classify,
            Tab::Encode => Workflow::Encode,
            Tab::Decode => Workflow::Decode,
        }
    }

    pub fn label(&self) -> &'static str {
        self.workflow().label()
    }
}

/// Display state shared by every workflow: the session plus the decoded
/// preview texture for the selected file.
pub struct WorkflowView {
    pub session: WorkflowSession,
    pub preview: Option<egui::TextureHandle>,
    /// Original pixel size of the selected image.
    pub preview_size: Option<[usize; 2]>,
    /// One-shot: scroll the result section into view on the next frame.
    pub scroll_to_result: bool,
}

impl WorkflowView {
    pub fn new(workflow: Workflow) -> Self {
        Self {
            session: WorkflowSession::new(workflow),
            preview: None,
            preview_size: None,
            scroll_to_result: false,
        }
    }

    /// Reset the workflow back to its empty state.
    pub fn clear(&mut self) {
        self.session.clear();
        self.preview = None;
        self.preview_size = None;
        self.scroll_to_result = false;
    }
}

pub struct AnalyzeState {
    pub view: WorkflowView,
    pub report: Option<ClassificationReport>,
    /// Name of the server-side sample fixture to classify.
    pub sample_name: String,
}

impl AnalyzeState {
    pub fn new() -> Self {
        Self {
            view: WorkflowView::new(Workflow::Classify),
            report: None,
            sample_name: String::new(),
        }
    }

    pub fn clear(&mut self) {
        self.view.clear();
        self.report = None;
    }
}

pub struct EncodeState {
    pub view: WorkflowView,
    /// Capacity probe result for the current file, shown under the preview.
    pub capacity: Option<CapacityReply>,
    pub report: Option<EncodeReport>,
    pub result_texture: Option<egui::TextureHandle>,
    pub result_size: Option<[usize; 2]>,
    pub show_password: bool,
}

impl EncodeState {
    pub fn new() -> Self {
        Self {
            view: WorkflowView::new(Workflow::Encode),
            capacity: None,
            report: None,
            result_texture: None,
            result_size: None,
            show_password: false,
        }
    }

    pub fn clear(&mut self) {
        self.view.clear();
        self.capacity = None;
        self.report = None;
        self.result_texture = None;
        self.result_size = None;
        self.show_password = false;
    }
}

pub struct DecodeState {
    pub view: WorkflowView,
    pub result: Option<DecodeReply>,
    /// When the extracted text was last copied; drives the button flash.
    pub copied_at: Option<Instant>,
    pub show_password: bool,
}

impl DecodeState {
    pub fn new() -> Self {
        Self {
            view: WorkflowView::new(Workflow::Decode),
            result: None,
            copied_at: None,
            show_password: false,
        }
    }

    pub fn clear(&mut self) {
        self.view.clear();
        self.result = None;
        self.copied_at = None;
        self.show_password = false;
    }
}

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
