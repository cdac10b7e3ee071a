//! Shared utilities for integration tests

use descriptive_session::{ChartImage, ChartRenderer};
use std::sync::{Arc, Mutex};

pub use approx::assert_relative_eq;

/// Install a test subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Renderer that records which charts were requested
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> anyhow::Result<ChartImage> {
        self.calls.lock().unwrap().push(call.clone());
        Ok(ChartImage::text(call))
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render_histogram(&self, values: &[f64]) -> anyhow::Result<ChartImage> {
        self.record(format!("histogram:{}", values.len()))
    }

    fn render_boxplot(&self, values: &[f64]) -> anyhow::Result<ChartImage> {
        self.record(format!("boxplot:{}", values.len()))
    }

    fn render_grouped_histogram(
        &self,
        labels: &[String],
        frequencies: &[u64],
    ) -> anyhow::Result<ChartImage> {
        self.record(format!("grouped_histogram:{}:{}", labels.len(), frequencies.len()))
    }

    fn render_xr_chart(&self, midpoints: &[f64], ranges: &[f64]) -> anyhow::Result<ChartImage> {
        self.record(format!("xr_chart:{}:{}", midpoints.len(), ranges.len()))
    }
}

/// Renderer whose every call fails
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingRenderer;

impl ChartRenderer for FailingRenderer {
    fn render_histogram(&self, _values: &[f64]) -> anyhow::Result<ChartImage> {
        anyhow::bail!("plotting backend unavailable")
    }

    fn render_boxplot(&self, _values: &[f64]) -> anyhow::Result<ChartImage> {
        anyhow::bail!("plotting backend unavailable")
    }

    fn render_grouped_histogram(
        &self,
        _labels: &[String],
        _frequencies: &[u64],
    ) -> anyhow::Result<ChartImage> {
        anyhow::bail!("plotting backend unavailable")
    }

    fn render_xr_chart(&self, _midpoints: &[f64], _ranges: &[f64]) -> anyhow::Result<ChartImage> {
        anyhow::bail!("plotting backend unavailable")
    }
}
