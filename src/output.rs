use crate::model::{Histogram, HistogramOutput, SCHEMA_VERSION};
use crate::skyline::SkylineModel;
use anyhow::Result;
use chrono::Utc;
use console::style;
use std::path::Path;

pub fn output_json(histogram: &Histogram, author: Option<&str>) -> Result<()> {
    let output = HistogramOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        year: histogram.year(),
        author: author.map(str::to_string),
        total_commits: histogram.total_commits(),
        max_count: histogram.max_count(),
        buckets: histogram.buckets().to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_summary(histogram: &Histogram, model: &SkylineModel, stl: &Path) -> Result<()> {
    println!("{}", style(format!("Skyline {}", histogram.year())).bold());
    println!("{}", "─".repeat(50));

    let active_days = histogram.buckets().iter().filter(|b| b.count > 0).count();
    println!("Commits: {}", style(histogram.total_commits()).cyan());
    println!(
        "Active days: {} of {}",
        style(active_days).green(),
        histogram.len()
    );
    if let Some(busiest) = histogram.busiest_day() {
        println!(
            "Busiest day: {} ({} commits)",
            style(busiest.date.format("%Y-%m-%d")).dim(),
            style(busiest.count).yellow()
        );
    }
    println!(
        "Base: {:.1} x {:.1} mm, {} bars",
        model.base_length,
        model.params().base_width,
        model.bars.len()
    );
    println!("\nWrote {}", style(stl.display()).green());
    Ok(())
}
