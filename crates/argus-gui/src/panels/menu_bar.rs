use std::sync::mpsc;

use crate::app::ArgusApp;
use crate::messages::{ImageSource, WorkerCommand};
use crate::state::WorkflowView;

pub fn show(ctx: &egui::Context, app: &mut ArgusApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Open...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    open_file(app);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::O,
            ))
        }) {
            open_file(app);
        }
        if ctx.input_mut(|i| {
            i.consume_shortcut(&egui::KeyboardShortcut::new(
                egui::Modifiers::COMMAND,
                egui::Key::Q,
            ))
        }) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Open routes to the active tab's workflow.
fn open_file(app: &ArgusApp) {
    let view: &WorkflowView = match app.tab {
        crate::state::Tab::Analyze => &app.analyze.view,
        crate::state::Tab::Encode => &app.encode.view,
        crate::state::Tab::Decode => &app.decode.view,
    };
    pick_image(&app.cmd_tx, view);
}

fn pick_image(cmd_tx: &mpsc::Sender<WorkerCommand>, view: &WorkflowView) {
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
