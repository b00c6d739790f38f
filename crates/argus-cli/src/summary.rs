use console::Style;

use argus_core::protocol::CapacityReply;
use argus_core::report::{ClassificationReport, Verdict};
use argus_core::stego::EncodeReport;

pub struct Styles {
    pub title: Style,
    pub label: Style,
    pub value: Style,
    pub danger: Style,
    pub safe: Style,
    pub dim: Style,
}

impl Styles {
    pub fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            danger: Style::new().red().bold(),
            safe: Style::new().green().bold(),
            dim: Style::new().dim(),
        }
    }
}

pub fn print_classification(report: &ClassificationReport) {
    let s = Styles::new();

    println!();
    match &report.verdict {
        Verdict::Malware { .. } => {
            println!("  {}", s.danger.apply_to(report.verdict.to_string()));
        }
        Verdict::Safe => {
            println!("  {}", s.safe.apply_to(report.verdict.to_string()));
        }
    }

    if report.ranked.is_empty() {
        return;
    }

    println!();
    println!("  {}", s.title.apply_to("Top Families"));
    println!("  {:>4}  {:<20}  {:>8}", "Rank", "Family", "Prob");
    println!("  {}", s.dim.apply_to("-".repeat(36)));
    for (rank, entry) in report.ranked.iter().enumerate() {
        println!(
            "  {:>4}  {:<20}  {:>8}",
            rank + 1,
            entry.label,
            entry.percent()
        );
    }
    println!();
}

pub fn print_capacity(reply: &CapacityReply) {
    let s = Styles::new();

    println!();
    println!("  {}", s.value.apply_to(reply.summary()));
    if let Some(pixels) = reply.total_pixels {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Pixels"),
            s.value.apply_to(pixels)
        );
    }
    if let Some([width, height]) = reply.image_size {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Size"),
            s.value.apply_to(format!("{width} x {height}"))
        );
    }
    println!();
}

pub fn print_encode(report: &EncodeReport) {
    let s = Styles::new();

    println!();
    println!("  {}", s.safe.apply_to(&report.message));
    for line in report.metadata_lines() {
        println!("  {}", s.label.apply_to(line));
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Token"),
        s.value.apply_to(&report.download)
    );
    println!();
}
