use std::path::Path;
use std::sync::mpsc;

use argus_core::session::Workflow;

use crate::convert::preview_to_color_image;
use crate::messages::{ImageSource, WorkerCommand, WorkerResult};
use crate::panels;
use crate::settings::Settings;
use crate::state::{AnalyzeState, DecodeState, EncodeState, Tab, UIState, WorkflowView};
use crate::worker;

pub struct ArgusApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub tab: Tab,
    pub analyze: AnalyzeState,
    pub encode: EncodeState,
    pub decode: DecodeState,
    pub ui_state: UIState,
    pub server_url: String,
    pub show_about: bool,
}

impl ArgusApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let settings = Settings::load(Path::new("argus.toml")).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "settings load failed, using defaults");
            Settings::default()
        });

        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone(), settings.server_url.clone());

        Self {
            cmd_tx,
            result_rx,
            tab: Tab::Analyze,
            analyze: AnalyzeState::new(),
            encode: EncodeState::new(),
            decode: DecodeState::new(),
            ui_state: UIState::default(),
            server_url: settings.server_url,
            show_about: false,
        }
    }

    fn view_mut(&mut self, workflow: Workflow) -> &mut WorkflowView {
        match workflow {
            Workflow::Classify => &mut self.analyze.view,
            Workflow::Encode => &mut self.encode.view,
            Workflow::Decode => &mut self.decode.view,
        }
    }

    /// Drain all pending results from the worker. Results carry the
    /// generation current when their request was issued; anything stale
    /// (the workflow was cleared in the meantime) is dropped here.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::FileAccepted {
                    workflow,
                    file,
                    preview,
                    generation,
                } => {
                    let view = self.view_mut(workflow);
                    if generation != view.session.generation() {
                        continue;
                    }
                    let name = file.name.clone();
                    view.session.accept_file(file);
                    let image = preview_to_color_image(&preview);
                    let size = image.size;
                    view.preview =
                        Some(ctx.load_texture("preview", image, egui::TextureOptions::LINEAR));
                    view.preview_size = Some(size);
                    // Stale results for the previous file are no longer
                    // meaningful; drop them.
                    match workflow {
                        Workflow::Classify => self.analyze.report = None,
                        Workflow::Encode => {
                            self.encode.capacity = None;
                            self.encode.report = None;
                            self.encode.result_texture = None;
                            self.encode.result_size = None;
                        }
                        Workflow::Decode => self.decode.result = None,
                    }
                    self.ui_state.add_log(format!(
                        "Selected: {name} ({}x{})",
                        preview.width, preview.height
                    ));
                }
                WorkerResult::OpenFailed { workflow, message } => {
                    self.ui_state
                        .add_log(format!("ERROR [{workflow}]: {message}"));
                }
                WorkerResult::CapacityDone { info, generation } => {
                    let session = &self.encode.view.session;
                    if generation == session.generation() && session.file().is_some() {
                        self.ui_state.add_log(info.summary());
                        self.encode.capacity = Some(info);
                    }
                }
                WorkerResult::ClassifyDone { report, generation } => {
                    if self.analyze.view.session.finish_submit(generation, true) {
                        self.analyze.report = Some(report);
                        self.analyze.view.scroll_to_result = true;
                    }
                }
                WorkerResult::EncodeDone {
                    report,
                    preview,
                    generation,
                } => {
                    if self.encode.view.session.finish_submit(generation, true) {
                        let image = preview_to_color_image(&preview);
                        let size = image.size;
                        self.encode.result_texture = Some(ctx.load_texture(
                            "encode_result",
                            image,
                            egui::TextureOptions::LINEAR,
                        ));
                        self.encode.result_size = Some(size);
                        self.ui_state.add_log(report.message.clone());
                        self.encode.report = Some(report);
                        self.encode.view.scroll_to_result = true;
                    }
                }
                WorkerResult::DecodeDone { reply, generation } => {
                    if self.decode.view.session.finish_submit(generation, true) {
                        self.decode.copied_at = None;
                        self.decode.result = Some(reply);
                        self.decode.view.scroll_to_result = true;
                    }
                }
                WorkerResult::Failed {
                    workflow,
                    message,
                    generation,
                } => {
                    let applied = self
                        .view_mut(workflow)
                        .session
                        .finish_submit(generation, false);
                    if applied {
                        self.ui_state
                            .add_log(format!("ERROR [{workflow}]: {message}"));
                    }
                }
                WorkerResult::DownloadDone { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Switching tabs abandons whatever was in progress everywhere.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        self.tab = tab;
        self.analyze.clear();
        self.encode.clear();
        self.decode.clear();
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Route a dropped file to the active tab's workflow.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let Some(file) = dropped.into_iter().next() else {
            return;
        };

        let source = if let Some(path) = file.path {
            ImageSource::Path(path)
        } else if let Some(bytes) = file.bytes {
            ImageSource::Memory {
                name: file.name,
                bytes: bytes.to_vec(),
            }
        } else {
            return;
        };

        let workflow = self.tab.workflow();
        let generation = self.view_mut(workflow).session.generation();
        self.send_command(WorkerCommand::OpenImage {
            workflow,
            source,
            generation,
        });
    }
}

impl eframe::App for ArgusApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_dropped_files(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    if ui.selectable_label(self.tab == tab, tab.label()).clicked() {
                        self.select_tab(tab);
                    }
                }
            });
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.tab {
                    Tab::Analyze => panels::analyze::show(ui, self),
                    Tab::Encode => panels::encode::show(ui, self),
                    Tab::Decode => panels::decode::show(ui, self),
                });
        });

        // About dialog
        if self.show_about {
            egui::Window::new("About Argus")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Argus");
                        ui.label("Image Malware Analysis & Steganography");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
