//! Derivation of the classification result view: verdict, ranked list, and
//! the bar-chart model. Everything here is pure so the presentation layers
//! only draw.

use std::fmt;

use crate::consts::{
    CHART_BAR_LIMIT, CHART_MAX_PERCENT, MALWARE_THRESHOLD, PALETTE_BASE_HUE, PALETTE_HUE_STEP,
    PALETTE_LIGHTNESS, PALETTE_SATURATION, RANKED_LIST_LIMIT,
};
use crate::protocol::ProbabilityMap;

/// Outcome of thresholding the most likely entry.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    Malware { label: String, probability: f64 },
    Safe,
}

impl Verdict {
    pub fn is_malware(&self) -> bool {
        matches!(self, Verdict::Malware { .. })
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Malware { label, probability } => {
                write!(
                    f,
                    "Malware detected: {label} ({})",
                    format_percent(*probability)
                )
            }
            Verdict::Safe => write!(f, "Image is safe"),
        }
    }
}

/// One row of the ranked probability list.
#[derive(Clone, Debug, PartialEq)]
pub struct RankedEntry {
    pub label: String,
    pub probability: f64,
}

impl RankedEntry {
    pub fn percent(&self) -> String {
        format_percent(self.probability)
    }
}

/// One bar of the chart: percentage value plus its palette color.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value_pct: f64,
    pub color: [u8; 3],
}

/// Ephemeral chart view state, rebuilt from scratch on every new result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartModel {
    pub bars: Vec<ChartBar>,
}

/// Fully derived classification result, ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassificationReport {
    pub verdict: Verdict,
    pub ranked: Vec<RankedEntry>,
    pub chart: ChartModel,
}

impl ClassificationReport {
    /// Derive the display model from a probability map. Entries are taken
    /// in the server's order; the first one decides the verdict.
    pub fn from_map(map: &ProbabilityMap) -> Self {
        let verdict = match map.top() {
            Some((label, probability)) if probability >= MALWARE_THRESHOLD => Verdict::Malware {
                label: label.to_string(),
                probability,
            },
            _ => Verdict::Safe,
        };

        let ranked = map
            .entries()
            .iter()
            .take(RANKED_LIST_LIMIT)
            .map(|(label, probability)| RankedEntry {
                label: label.clone(),
                probability: *probability,
            })
            .collect();

        let bars = map
            .entries()
            .iter()
            .take(CHART_BAR_LIMIT)
            .enumerate()
            .map(|(rank, (label, probability))| ChartBar {
                label: label.clone(),
                value_pct: (probability * 100.0).clamp(0.0, CHART_MAX_PERCENT),
                color: palette_for(rank),
            })
            .collect();

        Self {
            verdict,
            ranked,
            chart: ChartModel { bars },
        }
    }
}

/// Format a probability in [0, 1] as a percentage with two decimals.
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Deterministic chart palette: the hue starts at 250° and decreases by a
/// fixed step per rank.
pub fn palette_for(rank: usize) -> [u8; 3] {
    let hue = (PALETTE_BASE_HUE - PALETTE_HUE_STEP * rank as f32).rem_euclid(360.0);
    hsl_to_rgb(hue, PALETTE_SATURATION, PALETTE_LIGHTNESS)
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [u8; 3] {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}
