use std::time::Duration;

/// Maximum accepted upload size in bytes (the server rejects anything above
/// 16 MiB, so the client refuses before dispatch).
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Top-entry probability at or above which the verdict is "malware".
pub const MALWARE_THRESHOLD: f64 = 0.6;

/// Maximum number of entries shown in the ranked probability list.
pub const RANKED_LIST_LIMIT: usize = 10;

/// Maximum number of bars in the probability chart.
pub const CHART_BAR_LIMIT: usize = 5;

/// Hue of the first chart bar, in degrees.
pub const PALETTE_BASE_HUE: f32 = 250.0;

/// Hue decrease per chart rank, in degrees.
pub const PALETTE_HUE_STEP: f32 = 30.0;

/// Saturation of the chart palette.
pub const PALETTE_SATURATION: f32 = 0.8;

/// Lightness of the chart palette.
pub const PALETTE_LIGHTNESS: f32 = 0.6;

/// Upper bound of the chart's percentage axis.
pub const CHART_MAX_PERCENT: f64 = 100.0;

/// Server base URL used when none is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// How long the "Copied!" confirmation stays visible.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);
