//! Walk through a session: ungrouped data, then grouped data, with
//! charts drawn as plain text.
//!
//! Run with `RUST_LOG=debug` to see the session's tracing output.

use descriptive_session::{
    AnalysisReport, AnalysisSession, AnalyzeRequest, ChartImage, ChartRenderer, ConfigureRequest,
};
use tracing_subscriber::EnvFilter;

const BAR_WIDTH: f64 = 40.0;

/// Draws charts as ASCII bars
struct TextChartRenderer;

impl TextChartRenderer {
    fn bars<L: AsRef<str>>(title: &str, rows: &[(L, f64)]) -> ChartImage {
        let peak = rows.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
        let mut out = format!("{title}\n");
        for (label, value) in rows {
            let len = if peak > 0.0 {
                (value / peak * BAR_WIDTH).round() as usize
            } else {
                0
            };
            out.push_str(&format!("{:>12} | {} {value}\n", label.as_ref(), "#".repeat(len)));
        }
        ChartImage::text(out)
    }
}

impl ChartRenderer for TextChartRenderer {
    fn render_histogram(&self, values: &[f64]) -> anyhow::Result<ChartImage> {
        let bins = descriptive_frequency::histogram_bins(
            values,
            descriptive_frequency::BinningRule::Auto,
        )?;
        let rows: Vec<(String, f64)> = bins
            .iter()
            .map(|bin| (format!("{:.2}-{:.2}", bin.left, bin.right), bin.count as f64))
            .collect();
        Ok(Self::bars("Histogram", &rows))
    }

    fn render_boxplot(&self, values: &[f64]) -> anyhow::Result<ChartImage> {
        let sorted = descriptive_core::utils::sorted(values);
        let q = |p: f64| descriptive_core::utils::quantile_sorted(&sorted, p);
        Ok(ChartImage::text(format!(
            "Box plot\n  min {}  q1 {}  median {}  q3 {}  max {}\n",
            q(0.0),
            q(0.25),
            q(0.5),
            q(0.75),
            q(1.0)
        )))
    }

    fn render_grouped_histogram(
        &self,
        labels: &[String],
        frequencies: &[u64],
    ) -> anyhow::Result<ChartImage> {
        anyhow::ensure!(
            labels.len() == frequencies.len(),
            "{} labels for {} frequencies",
            labels.len(),
            frequencies.len()
        );
        let rows: Vec<(&str, f64)> = labels
            .iter()
            .zip(frequencies)
            .map(|(label, &f)| (label.as_str(), f as f64))
            .collect();
        Ok(Self::bars("Grouped histogram", &rows))
    }

    fn render_xr_chart(&self, midpoints: &[f64], ranges: &[f64]) -> anyhow::Result<ChartImage> {
        let rows: Vec<(String, f64)> = midpoints
            .iter()
            .zip(ranges)
            .map(|(m, &r)| (format!("x={m}"), r))
            .collect();
        Ok(Self::bars("X-R chart (class width by midpoint)", &rows))
    }
}

fn print_report(report: &AnalysisReport) {
    for (name, value) in report.statistics().iter() {
        println!("  {name:<22} {value}");
    }
    if let Some(ungrouped) = report.as_ungrouped() {
        println!("\n{}", ungrouped.frequency_table);
        println!("Visual skew: {}", ungrouped.visual_skew.description());
    }
    if let Some(grouped) = report.as_grouped() {
        println!("\n  parameters: {:?}", grouped.parameters);
    }

    let charts = report.charts();
    for image in [
        &charts.histogram,
        &charts.boxplot,
        &charts.grouped_histogram,
        &charts.xr_chart,
    ]
    .into_iter()
    .flatten()
    {
        println!("\n{}", String::from_utf8_lossy(&image.bytes));
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut session = AnalysisSession::with_renderer(TextChartRenderer);

    println!("== Ungrouped data (sample) ==");
    let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let report = session.analyze(&AnalyzeRequest::ungrouped(&data))?;
    print_report(&report);

    println!("\n== Grouped data (population) ==");
    let ack = session.configure(ConfigureRequest::new(false, true));
    println!("{}", ack.message);
    let report = session.analyze(&AnalyzeRequest::grouped(
        &["0-10", "10-20", "20-30", "30-40"],
        &[4, 9, 6, 1],
    ))?;
    print_report(&report);

    println!("\n== Rejected request ==");
    let response = session.respond(&AnalyzeRequest::grouped(&["0-10", "oops"], &[1, 2]));
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
