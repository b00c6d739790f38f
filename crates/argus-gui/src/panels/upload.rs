use std::sync::mpsc;

use crate::messages::{ImageSource, WorkerCommand};
use crate::state::WorkflowView;

/// Maximum display width of the selected-image preview.
const PREVIEW_WIDTH: f32 = 360.0;

/// Shared upload widget: browse button, drop hint, preview, clear.
/// Returns `true` when the user cleared the selection; the caller resets
/// its workflow-specific extras.
pub fn upload_section(
    ui: &mut egui::Ui,
    cmd_tx: &mpsc::Sender<WorkerCommand>,
    view: &mut WorkflowView,
) -> bool {
    let mut cleared = false;

    ui.horizontal(|ui| {
        if ui.button("Browse...").clicked() {
            browse(cmd_tx, view);
        }
        ui.weak("or drop a JPEG/PNG here (max 16 MB)");
    });

    if let Some(file) = view.session.file() {
        let label = format!(
            "{} ({}, {:.1} KB)",
            file.name,
            file.kind,
            file.len() as f64 / 1024.0
        );
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(label);
            if ui
                .add_enabled(!view.session.is_submitting(), egui::Button::new("Clear"))
                .clicked()
            {
                view.clear();
                cleared = true;
            }
        });
    }

    if cleared {
        return true;
    }

    if let (Some(texture), Some(size)) = (&view.preview, view.preview_size) {
        let scale = (PREVIEW_WIDTH / size[0] as f32).min(1.0);
        let display = egui::vec2(size[0] as f32 * scale, size[1] as f32 * scale);
        ui.add_space(4.0);
        ui.add(egui::Image::new(texture).fit_to_exact_size(display));
    }

    false
}

fn browse(cmd_tx: &mpsc::Sender<WorkerCommand>, view: &WorkflowView) {
    let cmd_tx = cmd_tx.clone();
    let workflow = view.session.workflow();
    let generation = view.session.generation();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::OpenImage {
                workflow,
                source: ImageSource::Path(path),
                generation,
            });
        }
    });
}
