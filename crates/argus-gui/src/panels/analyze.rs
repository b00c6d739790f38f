use argus_core::report::{ChartModel, ClassificationReport, Verdict};
use egui_plot::{Bar, BarChart, Plot};

use crate::app::ArgusApp;
use crate::messages::WorkerCommand;
use crate::panels::{self, upload};

/// Height of the top-families chart in pixels.
const CHART_HEIGHT: f32 = 220.0;

pub fn show(ui: &mut egui::Ui, app: &mut ArgusApp) {
    panels::section_header(ui, "Image", None);
    ui.add_space(4.0);
    if upload::upload_section(ui, &app.cmd_tx, &mut app.analyze.view) {
        app.analyze.report = None;
    }

    ui.add_space(8.0);
    let session = &app.analyze.view.session;
    let can_submit = session.can_submit() && !session.is_submitting();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(can_submit, egui::Button::new("Analyze"))
            .clicked()
        {
            submit(app);
        }
        if app.analyze.view.session.is_submitting() {
            ui.spinner();
        }
    });

    // Server-side sample fixtures, classified without an upload.
    ui.add_space(8.0);
    panels::section_header(ui, "Sample", None);
    ui.horizontal(|ui| {
        ui.label("Name:");
        ui.add(
            egui::TextEdit::singleline(&mut app.analyze.sample_name)
                .desired_width(180.0)
                .hint_text("sample image name"),
        );
        let can_sample = !app.analyze.sample_name.trim().is_empty()
            && !app.analyze.view.session.is_submitting();
        if ui
            .add_enabled(can_sample, egui::Button::new("Analyze Sample"))
            .clicked()
        {
            submit_sample(app);
        }
    });

    if let Some(report) = app.analyze.report.take() {
        ui.add_space(12.0);
        let header = ui.strong("Results");
        if app.analyze.view.scroll_to_result {
            header.scroll_to_me(Some(egui::Align::Min));
            app.analyze.view.scroll_to_result = false;
        }
        ui.add_space(4.0);
        show_report(ui, &report);
        app.analyze.report = Some(report);
    }
}

fn submit(app: &mut ArgusApp) {
    match app.analyze.view.session.begin_submit() {
        Ok(generation) => {
            // begin_submit only succeeds with a file present
            if let Some(file) = app.analyze.view.session.file().cloned() {
                app.analyze.report = None;
                app.send_command(WorkerCommand::Classify { file, generation });
            }
        }
        Err(e) => app.ui_state.add_log(format!("ERROR: {}", e.user_message())),
    }
}

fn submit_sample(app: &mut ArgusApp) {
    match app.analyze.view.session.begin_sample() {
        Ok(generation) => {
            let name = app.analyze.sample_name.trim().to_string();
            app.analyze.report = None;
            app.send_command(WorkerCommand::ClassifySample { name, generation });
        }
        Err(e) => app.ui_state.add_log(format!("ERROR: {}", e.user_message())),
    }
}

fn show_report(ui: &mut egui::Ui, report: &ClassificationReport) {
    match &report.verdict {
        Verdict::Malware { .. } => {
            ui.colored_label(egui::Color32::from_rgb(220, 60, 60), report.verdict.to_string());
        }
        Verdict::Safe => {
            ui.colored_label(egui::Color32::from_rgb(80, 180, 80), report.verdict.to_string());
        }
    }

    if report.ranked.is_empty() {
        return;
    }

    ui.add_space(8.0);
    family_chart(ui, &report.chart);

    ui.add_space(8.0);
    egui::Grid::new("ranked_families")
        .num_columns(3)
        .spacing([12.0, 2.0])
        .striped(true)
        .show(ui, |ui| {
            for (rank, entry) in report.ranked.iter().enumerate() {
                ui.label(format!("{}", rank + 1));
                ui.label(&entry.label);
                ui.label(entry.percent());
                ui.end_row();
            }
        });
}

/// Bar chart of the top families. Bar colors come from the report; the
/// legend row below maps colors back to labels.
fn family_chart(ui: &mut egui::Ui, chart: &ChartModel) {
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            Bar::new(i as f64, bar.value_pct)
                .fill(egui::Color32::from_rgb(bar.color[0], bar.color[1], bar.color[2]))
                .width(0.6)
                .name(bar.label.clone())
        })
        .collect();

    Plot::new("family_chart")
        .height(CHART_HEIGHT)
        .include_y(0.0)
        .include_y(argus_core::consts::CHART_MAX_PERCENT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show_x(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("families", bars));
        });

    ui.horizontal_wrapped(|ui| {
        for bar in &chart.bars {
            let color = egui::Color32::from_rgb(bar.color[0], bar.color[1], bar.color[2]);
            let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, color);
            ui.label(&bar.label);
            ui.add_space(8.0);
        }
    });
}
