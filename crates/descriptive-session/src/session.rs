//! Per-caller analysis state

use crate::chart::{render_charts, ChartRenderer, ChartSeries, NullChartRenderer};
use crate::config::{Acknowledgement, AnalysisConfig, ConfigureRequest, DataLayout};
use crate::report::{AnalysisReport, GroupedReport, UngroupedReport};
use crate::request::AnalyzeRequest;
use crate::response::Response;
use descriptive_core::Result;
use descriptive_frequency::{pair_classes, ClassFrequency, FrequencyTableBuilder};
use descriptive_moments::{GroupedEstimator, UngroupedEstimator};
use tracing::{debug, instrument, warn};

/// Configuration plus the most recent dataset of each layout
///
/// A session is an ordinary value: callers serving several users keep one
/// session per user or per request.
///
/// # Example
///
/// ```rust
/// use descriptive_session::{AnalysisSession, AnalyzeRequest, ConfigureRequest};
///
/// let mut session = AnalysisSession::new();
/// session.configure(ConfigureRequest::new(false, false));
///
/// let report = session
///     .analyze(&AnalyzeRequest::ungrouped(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]))
///     .unwrap();
/// assert_eq!(report.statistics().number("varianza"), Some(4.0));
/// assert_eq!(session.observations().len(), 8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession<R: ChartRenderer = NullChartRenderer> {
    config: AnalysisConfig,
    observations: Vec<f64>,
    classes: Vec<ClassFrequency>,
    renderer: R,
}

impl AnalysisSession<NullChartRenderer> {
    /// Create a session with default configuration and no charts
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: ChartRenderer> AnalysisSession<R> {
    /// Create a session that renders charts with `renderer`
    pub fn with_renderer(renderer: R) -> Self {
        Self {
            config: AnalysisConfig::default(),
            observations: Vec::new(),
            classes: Vec::new(),
            renderer,
        }
    }

    pub fn config(&self) -> AnalysisConfig {
        self.config
    }

    /// Observations stored by the last successful ungrouped analysis
    pub fn observations(&self) -> &[f64] {
        &self.observations
    }

    /// Classes stored by the last successful grouped analysis
    pub fn classes(&self) -> &[ClassFrequency] {
        &self.classes
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Replace divisor mode and layout; stored data is kept
    #[instrument(skip(self), fields(sample = request.sample, grouped = request.grouped))]
    pub fn configure(&mut self, request: ConfigureRequest) -> Acknowledgement {
        self.set_config(AnalysisConfig::from(request));
        Acknowledgement::saved(self.config)
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        debug!(%config, "configuration updated");
        self.config = config;
    }

    /// Decode `request` for the configured layout and analyze it
    ///
    /// On success the dataset of that layout is replaced. On failure the
    /// session is left as it was.
    #[instrument(skip(self, request), fields(layout = %self.config.layout, divisor = %self.config.divisor))]
    pub fn analyze(&mut self, request: &AnalyzeRequest) -> Result<AnalysisReport> {
        match self.config.layout {
            DataLayout::Ungrouped => {
                let observations = request.observations()?;
                let report = self.analyze_ungrouped(&observations)?;
                self.observations = observations;
                Ok(AnalysisReport::Ungrouped(report))
            }
            DataLayout::Grouped => {
                let labels = request.class_labels()?;
                let frequencies = request.class_frequencies()?;
                let classes = pair_classes(labels.as_slice(), frequencies.as_slice())?;
                let report = self.analyze_grouped(&classes)?;
                self.classes = classes;
                Ok(AnalysisReport::Grouped(report))
            }
        }
    }

    /// Analyze `request`, converting any failure into an error response
    pub fn respond(&mut self, request: &AnalyzeRequest) -> Response {
        let result = self.analyze(request);
        if let Err(err) = &result {
            warn!(kind = %err.kind(), error = %err, "analysis rejected");
        }
        Response::from(result)
    }

    fn analyze_ungrouped(&self, observations: &[f64]) -> Result<UngroupedReport> {
        let summary = UngroupedEstimator::new(self.config.divisor).estimate(observations)?;
        let frequency_table = FrequencyTableBuilder::new().build(observations)?;
        let series = ChartSeries::ungrouped(observations)?;
        let charts = render_charts(&self.renderer, &series)?;

        Ok(UngroupedReport {
            statistics: summary.statistics(),
            frequency_table,
            observations: observations.to_vec(),
            visual_skew: summary.visual_skew,
            series,
            charts,
            summary,
        })
    }

    fn analyze_grouped(&self, classes: &[ClassFrequency]) -> Result<GroupedReport> {
        let summary = GroupedEstimator::new(self.config.divisor).estimate(classes)?;
        let series = ChartSeries::grouped(classes);
        let charts = render_charts(&self.renderer, &series)?;

        Ok(GroupedReport {
            statistics: summary.statistics(),
            parameters: summary.parameters.clone(),
            series,
            charts,
            summary,
        })
    }
}
