use std::sync::mpsc;

use argus_core::client::ApiClient;
use argus_core::intake::{decode_rgba, ImageFile};
use argus_core::report::ClassificationReport;
use argus_core::session::Workflow;
use argus_core::stego::{DownloadReference, EncodeReport};

use crate::messages::{ImageSource, WorkerCommand, WorkerResult};

/// Spawn the worker thread that owns the HTTP client. Returns the command
/// sender. All blocking I/O lives here; the UI thread stays responsive.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    server_url: String,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("argus-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, server_url);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    server_url: String,
) {
    let client = match ApiClient::new(&server_url) {
        Ok(client) => client,
        Err(e) => {
            send_log(&tx, &ctx, format!("ERROR: failed to set up HTTP client: {e}"));
            return;
        }
    };
    send_log(&tx, &ctx, format!("Server: {}", client.base_url()));

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::OpenImage {
                workflow,
                source,
                generation,
            } => {
                handle_open_image(&client, workflow, source, generation, &tx, &ctx);
            }
            WorkerCommand::Classify { file, generation } => {
                handle_classify(&client, &file, generation, &tx, &ctx);
            }
            WorkerCommand::ClassifySample { name, generation } => {
                handle_classify_sample(&client, &name, generation, &tx, &ctx);
            }
            WorkerCommand::Encode {
                file,
                payload,
                password,
                generation,
            } => {
                handle_encode(&client, &file, &payload, password.as_deref(), generation, &tx, &ctx);
            }
            WorkerCommand::Decode {
                file,
                password,
                generation,
            } => {
                handle_decode(&client, &file, password.as_deref(), generation, &tx, &ctx);
            }
            WorkerCommand::Download { token, dest } => {
                handle_download(&client, &token, &dest, &tx, &ctx);
            }
        }
    }
}

fn handle_open_image(
    client: &ApiClient,
    workflow: Workflow,
    source: ImageSource,
    generation: u64,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let file = match source {
        ImageSource::Path(path) => ImageFile::open(&path),
        ImageSource::Memory { name, bytes } => ImageFile::validate(&name, bytes),
    };
    let file = match file {
        Ok(file) => file,
        Err(e) => {
            send(tx, ctx, WorkerResult::OpenFailed {
                workflow,
                message: e.user_message(),
            });
            return;
        }
    };

    let preview = match file.decode_preview() {
        Ok(preview) => preview,
        Err(e) => {
            send(tx, ctx, WorkerResult::OpenFailed {
                workflow,
                message: format!("Could not decode image: {e}"),
            });
            return;
        }
    };

    let probe = (workflow == Workflow::Encode).then(|| file.clone());
    send(tx, ctx, WorkerResult::FileAccepted {
        workflow,
        file,
        preview,
        generation,
    });

    // Capacity is informational only: a failed probe leaves the panel
    // hidden and does not block encoding.
    if let Some(file) = probe {
        match client.capacity(&file) {
            Ok(info) => send(tx, ctx, WorkerResult::CapacityDone { info, generation }),
            Err(e) => tracing::warn!(error = %e, "capacity probe failed"),
        }
    }
}

fn handle_classify(
    client: &ApiClient,
    file: &ImageFile,
    generation: u64,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match client.classify(file) {
        Ok(reply) => {
            let report = ClassificationReport::from_map(&reply.probabilities);
            send(tx, ctx, WorkerResult::ClassifyDone { report, generation });
        }
        Err(e) => send(tx, ctx, WorkerResult::Failed {
            workflow: Workflow::Classify,
            message: e.user_message(),
            generation,
        }),
    }
}

fn handle_classify_sample(
    client: &ApiClient,
    name: &str,
    generation: u64,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match client.classify_sample(name) {
        Ok(reply) => {
            let report = ClassificationReport::from_map(&reply.probabilities);
            send(tx, ctx, WorkerResult::ClassifyDone { report, generation });
        }
        Err(e) => send(tx, ctx, WorkerResult::Failed {
            workflow: Workflow::Classify,
            message: e.user_message(),
            generation,
        }),
    }
}

fn handle_encode(
    client: &ApiClient,
    file: &ImageFile,
    payload: &str,
    password: Option<&str>,
    generation: u64,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let outcome = client
        .encode(file, payload, password)
        .and_then(EncodeReport::from_reply)
        .and_then(|report| {
            let preview = decode_rgba(&report.preview_png)?;
            Ok((report, preview))
        });
    match outcome {
        Ok((report, preview)) => send(tx, ctx, WorkerResult::EncodeDone {
            report,
            preview,
            generation,
        }),
        Err(e) => send(tx, ctx, WorkerResult::Failed {
            workflow: Workflow::Encode,
            message: e.user_message(),
            generation,
        }),
    }
}

fn handle_decode(
    client: &ApiClient,
    file: &ImageFile,
    password: Option<&str>,
    generation: u64,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    match client.decode(file, password) {
        Ok(reply) => send(tx, ctx, WorkerResult::DecodeDone { reply, generation }),
        Err(e) => send(tx, ctx, WorkerResult::Failed {
            workflow: Workflow::Decode,
            message: e.user_message(),
            generation,
        }),
    }
}

fn handle_download(
    client: &ApiClient,
    token: &DownloadReference,
    dest: &std::path::Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let outcome = client
        .download(token.as_str())
        .and_then(|bytes| std::fs::write(dest, bytes).map_err(Into::into));
    match outcome {
        Ok(()) => send(tx, ctx, WorkerResult::DownloadDone {
            path: dest.to_path_buf(),
        }),
        Err(e) => send_log(tx, ctx, format!("ERROR: download failed: {}", e.user_message())),
    }
}
