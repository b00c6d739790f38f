mod app;
mod convert;
mod messages;
mod panels;
mod settings;
mod state;
mod worker;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("Argus"),
        ..Default::default()
    };

    eframe::run_native(
        "ArgusClient",
        options,
        Box::new(|cc| Ok(Box::new(app::ArgusApp::new(&cc.egui_ctx)))),
    )
}
