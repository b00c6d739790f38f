use std::time::Instant;

use argus_core::consts::COPY_FEEDBACK_DURATION;

use crate::app::ArgusApp;
use crate::messages::WorkerCommand;
use crate::panels::{self, encode, upload};

pub fn show(ui: &mut egui::Ui, app: &mut ArgusApp) {
    panels::section_header(ui, "Stego Image", None);
    ui.add_space(4.0);
    if upload::upload_section(ui, &app.cmd_tx, &mut app.decode.view) {
        app.decode.result = None;
        app.decode.copied_at = None;
        app.decode.show_password = false;
    }

    ui.add_space(4.0);
    encode::password_row(
        ui,
        &mut app.decode.view.session,
        &mut app.decode.show_password,
    );

    ui.add_space(8.0);
    let session = &app.decode.view.session;
    let can_submit = session.can_submit() && !session.is_submitting();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(can_submit, egui::Button::new("Extract Data"))
            .clicked()
        {
            submit(app);
        }
        if app.decode.view.session.is_submitting() {
            ui.spinner();
        }
    });

    if app.decode.result.is_some() {
        ui.add_space(12.0);
        let header = ui.strong("Extracted Data");
        if app.decode.view.scroll_to_result {
            header.scroll_to_me(Some(egui::Align::Min));
            app.decode.view.scroll_to_result = false;
        }
        ui.add_space(4.0);
        show_result(ui, app);
    }
}

fn submit(app: &mut ArgusApp) {
    match app.decode.view.session.begin_submit() {
        Ok(generation) => {
            let session = &app.decode.view.session;
            if let Some(file) = session.file().cloned() {
                let password = session.password().map(String::from);
                app.decode.result = None;
                app.send_command(WorkerCommand::Decode {
                    file,
                    password,
                    generation,
                });
            }
        }
        Err(e) => app.ui_state.add_log(format!("ERROR: {}", e.user_message())),
    }
}

fn show_result(ui: &mut egui::Ui, app: &mut ArgusApp) {
    let Some(reply) = &app.decode.result else {
        return;
    };

    ui.label(&reply.message);
    ui.add_space(4.0);

    // Read-only view of the extracted text, verbatim.
    let mut text = reply.data.as_str();
    ui.add(
        egui::TextEdit::multiline(&mut text)
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(4.0);
    let flashing = app
        .decode
        .copied_at
        .is_some_and(|at| at.elapsed() < COPY_FEEDBACK_DURATION);
    let label = if flashing { "Copied!" } else { "Copy" };
    if ui.button(label).clicked() {
        ui.ctx().copy_text(reply.data.clone());
        app.decode.copied_at = Some(Instant::now());
    }
    if flashing {
        // Keep repainting until the flash times out.
        ui.ctx().request_repaint_after(std::time::Duration::from_millis(100));
    }
}
