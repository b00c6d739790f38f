use crate::app::ArgusApp;

pub fn show(ctx: &egui::Context, app: &mut ArgusApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Indeterminate progress while any request is in flight
        let busy = app.analyze.view.session.is_submitting()
            || app.encode.view.session.is_submitting()
            || app.decode.view.session.is_submitting();
        if busy {
            ui.add(
                egui::ProgressBar::new(0.0)
                    .text("Waiting for server...")
                    .animate(true),
            );
        } else {
            // Invisible placeholder keeping the same height
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 4 empty lines to prevent layout jump.
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            ui.label(format!("Server: {}", app.server_url));
            ui.separator();
            ui.label(app.tab.label());
        });

        ui.add_space(2.0);
    });
}
