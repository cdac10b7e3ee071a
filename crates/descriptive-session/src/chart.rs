//! Chart collaborator interface
//!
//! This module defines the interface chart renderers implement to turn
//! prepared series into images. Series preparation lives here; drawing
//! is left to the renderer.

use descriptive_core::Result;
use descriptive_frequency::{histogram_bins, BinningRule, ClassFrequency, HistogramBin};
use serde::{Serialize, Serializer};
use std::fmt;

/// Rendered chart, opaque to the session
#[derive(Clone, PartialEq, Eq)]
pub struct ChartImage {
    /// MIME type of `bytes`, e.g. `image/png` or `text/plain`
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl ChartImage {
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Image holding UTF-8 text
    pub fn text(content: impl Into<String>) -> Self {
        Self::new("text/plain", content.into().into_bytes())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for ChartImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartImage")
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

// Only metadata is serialized; the bytes are handed to the caller directly
impl Serialize for ChartImage {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ChartImage", 2)?;
        state.serialize_field("media_type", &self.media_type)?;
        state.serialize_field("size", &self.bytes.len())?;
        state.end()
    }
}

/// Trait for rendering the charts of an analysis
///
/// The session calls these methods after the statistics have been computed.
/// Failures surface as [`Error::Render`](descriptive_core::Error::Render).
pub trait ChartRenderer {
    /// Histogram of raw observations
    fn render_histogram(&self, values: &[f64]) -> anyhow::Result<ChartImage>;

    /// Box plot of raw observations
    fn render_boxplot(&self, values: &[f64]) -> anyhow::Result<ChartImage>;

    /// Bar chart of class frequencies
    fn render_grouped_histogram(
        &self,
        labels: &[String],
        frequencies: &[u64],
    ) -> anyhow::Result<ChartImage>;

    /// X-R chart of class midpoints against class widths
    fn render_xr_chart(&self, midpoints: &[f64], ranges: &[f64]) -> anyhow::Result<ChartImage>;

    /// Check if this renderer actually produces output
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Null renderer that does nothing (for when charts are disabled)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullChartRenderer;

impl ChartRenderer for NullChartRenderer {
    fn render_histogram(&self, _values: &[f64]) -> anyhow::Result<ChartImage> {
        Ok(ChartImage::new("application/octet-stream", Vec::new()))
    }

    fn render_boxplot(&self, _values: &[f64]) -> anyhow::Result<ChartImage> {
        Ok(ChartImage::new("application/octet-stream", Vec::new()))
    }

    fn render_grouped_histogram(
        &self,
        _labels: &[String],
        _frequencies: &[u64],
    ) -> anyhow::Result<ChartImage> {
        Ok(ChartImage::new("application/octet-stream", Vec::new()))
    }

    fn render_xr_chart(&self, _midpoints: &[f64], _ranges: &[f64]) -> anyhow::Result<ChartImage> {
        Ok(ChartImage::new("application/octet-stream", Vec::new()))
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for Box<R> {
    fn render_histogram(&self, values: &[f64]) -> anyhow::Result<ChartImage> {
        (**self).render_histogram(values)
    }

    fn render_boxplot(&self, values: &[f64]) -> anyhow::Result<ChartImage> {
        (**self).render_boxplot(values)
    }

    fn render_grouped_histogram(
        &self,
        labels: &[String],
        frequencies: &[u64],
    ) -> anyhow::Result<ChartImage> {
        (**self).render_grouped_histogram(labels, frequencies)
    }

    fn render_xr_chart(&self, midpoints: &[f64], ranges: &[f64]) -> anyhow::Result<ChartImage> {
        (**self).render_xr_chart(midpoints, ranges)
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// Data series a renderer draws from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "lowercase")]
pub enum ChartSeries {
    Ungrouped {
        values: Vec<f64>,
        /// Histogram bins using the automatic binning rule
        bins: Vec<HistogramBin>,
    },
    Grouped {
        labels: Vec<String>,
        frequencies: Vec<u64>,
        midpoints: Vec<f64>,
        /// Class widths
        ranges: Vec<f64>,
    },
}

impl ChartSeries {
    /// Prepare the series of raw observations
    pub fn ungrouped(values: &[f64]) -> Result<Self> {
        let bins = histogram_bins(values, BinningRule::Auto)?;
        Ok(Self::Ungrouped {
            values: values.to_vec(),
            bins,
        })
    }

    /// Prepare the series of parsed classes
    pub fn grouped(classes: &[ClassFrequency]) -> Self {
        Self::Grouped {
            labels: classes.iter().map(|c| c.label.clone()).collect(),
            frequencies: classes.iter().map(|c| c.frequency).collect(),
            midpoints: classes.iter().map(|c| c.interval.midpoint()).collect(),
            ranges: classes.iter().map(|c| c.interval.width()).collect(),
        }
    }
}

/// Images produced for one analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Charts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<ChartImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boxplot: Option<ChartImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouped_histogram: Option<ChartImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xr_chart: Option<ChartImage>,
}

impl Charts {
    /// Number of images present
    pub fn count(&self) -> usize {
        [
            &self.histogram,
            &self.boxplot,
            &self.grouped_histogram,
            &self.xr_chart,
        ]
        .iter()
        .filter(|image| image.is_some())
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Render every chart that applies to `series`
///
/// Returns no images when the renderer is disabled.
pub fn render_charts<R: ChartRenderer + ?Sized>(
    renderer: &R,
    series: &ChartSeries,
) -> Result<Charts> {
    if !renderer.is_enabled() {
        return Ok(Charts::default());
    }

    let charts = match series {
        ChartSeries::Ungrouped { values, .. } => Charts {
            histogram: Some(renderer.render_histogram(values)?),
            boxplot: Some(renderer.render_boxplot(values)?),
            ..Charts::default()
        },
        ChartSeries::Grouped {
            labels,
            frequencies,
            midpoints,
            ranges,
        } => Charts {
            grouped_histogram: Some(renderer.render_grouped_histogram(labels, frequencies)?),
            xr_chart: Some(renderer.render_xr_chart(midpoints, ranges)?),
            ..Charts::default()
        },
    };
    Ok(charts)
}
