use std::sync::mpsc;

use argus_core::stego::EncodeReport;

use crate::app::ArgusApp;
use crate::messages::WorkerCommand;
use crate::panels::{self, upload};

/// Maximum display width of the encoded-result image.
const RESULT_WIDTH: f32 = 360.0;

pub fn show(ui: &mut egui::Ui, app: &mut ArgusApp) {
    panels::section_header(ui, "Cover Image", None);
    ui.add_space(4.0);
    if upload::upload_section(ui, &app.cmd_tx, &mut app.encode.view) {
        app.encode.capacity = None;
        app.encode.report = None;
        app.encode.result_texture = None;
        app.encode.result_size = None;
        app.encode.show_password = false;
    }

    if let Some(capacity) = &app.encode.capacity {
        ui.add_space(4.0);
        ui.weak(capacity.summary());
    }

    ui.add_space(8.0);
    panels::section_header(ui, "Secret Message", None);
    ui.add(
        egui::TextEdit::multiline(app.encode.view.session.payload_raw())
            .desired_rows(4)
            .desired_width(f32::INFINITY)
            .hint_text("Text to hide inside the image"),
    );

    ui.add_space(4.0);
    password_row(
        ui,
        &mut app.encode.view.session,
        &mut app.encode.show_password,
    );

    ui.add_space(8.0);
    let session = &app.encode.view.session;
    let can_submit = session.can_submit() && !session.is_submitting();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(can_submit, egui::Button::new("Hide Data"))
            .clicked()
        {
            submit(app);
        }
        if app.encode.view.session.is_submitting() {
            ui.spinner();
        }
    });

    if app.encode.report.is_some() {
        ui.add_space(12.0);
        let header = ui.strong("Result");
        if app.encode.view.scroll_to_result {
            header.scroll_to_me(Some(egui::Align::Min));
            app.encode.view.scroll_to_result = false;
        }
        ui.add_space(4.0);
        show_result(ui, app);
    }
}

/// Password toggle plus entry field, shared with the decode tab.
pub(super) fn password_row(
    ui: &mut egui::Ui,
    session: &mut argus_core::session::WorkflowSession,
    show_password: &mut bool,
) {
    let mut use_password = session.use_password();
    if ui
        .checkbox(&mut use_password, "Password protect")
        .changed()
    {
        session.set_use_password(use_password);
    }
    if session.use_password() {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(session.password_raw())
                    .password(!*show_password)
                    .desired_width(180.0),
            );
            ui.checkbox(show_password, "Show");
        });
    }
}

fn submit(app: &mut ArgusApp) {
    match app.encode.view.session.begin_submit() {
        Ok(generation) => {
            let session = &app.encode.view.session;
            if let Some(file) = session.file().cloned() {
                let payload = session.payload().to_string();
                let password = session.password().map(String::from);
                app.encode.report = None;
                app.encode.result_texture = None;
                app.encode.result_size = None;
                app.send_command(WorkerCommand::Encode {
                    file,
                    payload,
                    password,
                    generation,
                });
            }
        }
        Err(e) => app.ui_state.add_log(format!("ERROR: {}", e.user_message())),
    }
}

fn show_result(ui: &mut egui::Ui, app: &mut ArgusApp) {
    let Some(report) = &app.encode.report else {
        return;
    };

    ui.label(&report.message);
    ui.add_space(4.0);

    if let (Some(texture), Some(size)) = (&app.encode.result_texture, app.encode.result_size) {
        let scale = (RESULT_WIDTH / size[0] as f32).min(1.0);
        let display = egui::vec2(size[0] as f32 * scale, size[1] as f32 * scale);
        ui.add(egui::Image::new(texture).fit_to_exact_size(display));
        ui.add_space(4.0);
    }

    for line in report.metadata_lines() {
        ui.weak(line);
    }

    ui.add_space(4.0);
    if ui.button("Download...").clicked() {
        download(&app.cmd_tx, report);
    }
}

fn download(cmd_tx: &mpsc::Sender<WorkerCommand>, report: &EncodeReport) {
    let cmd_tx = cmd_tx.clone();
    let token = report.download.clone();
    std::thread::spawn(move || {
        if let Some(dest) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name(token.as_str())
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::Download { token, dest });
        }
    });
}
