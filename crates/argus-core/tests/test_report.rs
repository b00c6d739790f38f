use argus_core::protocol::ProbabilityMap;
use argus_core::report::{format_percent, palette_for, ClassificationReport, Verdict};

fn map_of(entries: &[(&str, f64)]) -> ProbabilityMap {
    ProbabilityMap::from_entries(
        entries
            .iter()
            .map(|(l, p)| (l.to_string(), *p))
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Verdict threshold
// ---------------------------------------------------------------------------

#[test]
fn test_verdict_threshold_boundaries() {
    for (p, malware) in [(0.0, false), (0.599999, false), (0.6, true), (1.0, true)] {
        let report = ClassificationReport::from_map(&map_of(&[("Ramnit", p)]));
        assert_eq!(
            report.verdict.is_malware(),
            malware,
            "p = {p} should give malware = {malware}"
        );
    }
}

#[test]
fn test_malware_verdict_carries_top_label_and_probability() {
    let report = ClassificationReport::from_map(&map_of(&[("trojan", 0.82), ("benign", 0.1)]));
    match &report.verdict {
        Verdict::Malware { label, probability } => {
            assert_eq!(label, "trojan");
            assert_eq!(*probability, 0.82);
        }
        Verdict::Safe => panic!("expected malware verdict"),
    }
    let s = report.verdict.to_string();
    assert!(s.contains("trojan"), "got: {s}");
    assert!(s.contains("82.00%"), "got: {s}");
}

#[test]
fn test_high_benign_probability_is_still_safe_below_threshold() {
    let report = ClassificationReport::from_map(&map_of(&[("benign", 0.95)]));
    // The first entry decides; 0.95 >= 0.6 so this is "malware" by the
    // contract even for a benign-sounding label. The safe case needs the
    // top probability under the threshold.
    assert!(report.verdict.is_malware());

    let report = ClassificationReport::from_map(&map_of(&[("Gatak", 0.15), ("Simda", 0.12)]));
    assert_eq!(report.verdict, Verdict::Safe);
    assert_eq!(report.verdict.to_string(), "Image is safe");
}

#[test]
fn test_empty_map_is_safe_with_empty_views() {
    let report = ClassificationReport::from_map(&map_of(&[]));
    assert_eq!(report.verdict, Verdict::Safe);
    assert!(report.ranked.is_empty());
    assert!(report.chart.bars.is_empty());
}

// ---------------------------------------------------------------------------
// List and chart cardinality
// ---------------------------------------------------------------------------

#[test]
fn test_list_and_chart_limits() {
    let entries: Vec<(String, f64)> = (0..12)
        .map(|i| (format!("family{i}"), 0.9 - i as f64 * 0.05))
        .collect();
    let map = ProbabilityMap::from_entries(entries);
    let report = ClassificationReport::from_map(&map);

    assert_eq!(report.ranked.len(), 10);
    assert_eq!(report.chart.bars.len(), 5);
}

#[test]
fn test_small_map_keeps_all_entries() {
    let report = ClassificationReport::from_map(&map_of(&[("a", 0.5), ("b", 0.3), ("c", 0.1)]));
    assert_eq!(report.ranked.len(), 3);
    assert_eq!(report.chart.bars.len(), 3);
}

#[test]
fn test_list_keeps_server_order() {
    // Deliberately not sorted by probability: the order must survive.
    let report = ClassificationReport::from_map(&map_of(&[("x", 0.2), ("y", 0.7), ("z", 0.5)]));
    let labels: Vec<&str> = report.ranked.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["x", "y", "z"]);
}

#[test]
fn test_chart_values_are_percentages() {
    let report = ClassificationReport::from_map(&map_of(&[("a", 0.82)]));
    assert!((report.chart.bars[0].value_pct - 82.0).abs() < 1e-9);
}

#[test]
fn test_chart_values_clamped_to_axis_range() {
    // Out-of-range probabilities from a misbehaving server must not push
    // bars past the axis.
    let report = ClassificationReport::from_map(&map_of(&[("a", 1.3), ("b", -0.1)]));
    assert_eq!(report.chart.bars[0].value_pct, 100.0);
    assert_eq!(report.chart.bars[1].value_pct, 0.0);
}

// ---------------------------------------------------------------------------
// Formatting and palette
// ---------------------------------------------------------------------------

#[test]
fn test_percent_formatting_two_decimals() {
    assert_eq!(format_percent(0.82), "82.00%");
    assert_eq!(format_percent(0.056789), "5.68%");
    assert_eq!(format_percent(1.0), "100.00%");
}

#[test]
fn test_palette_is_deterministic() {
    assert_eq!(palette_for(3), palette_for(3));
}

#[test]
fn test_palette_colors_differ_by_rank() {
    let colors: Vec<[u8; 3]> = (0..5).map(palette_for).collect();
    for i in 0..colors.len() {
        for j in (i + 1)..colors.len() {
            assert_ne!(colors[i], colors[j], "ranks {i} and {j} collide");
        }
    }
}

#[test]
fn test_palette_handles_ranks_past_hue_wraparound() {
    // Rank 9 takes the hue negative; the palette must still be valid.
    let _ = palette_for(9);
    let _ = palette_for(100);
}

#[test]
fn test_chart_bars_use_ranked_palette() {
    let report = ClassificationReport::from_map(&map_of(&[("a", 0.5), ("b", 0.4)]));
    assert_eq!(report.chart.bars[0].color, palette_for(0));
    assert_eq!(report.chart.bars[1].color, palette_for(1));
}
