//! Analysis reports returned by the session

use crate::chart::{ChartSeries, Charts};
use descriptive_core::StatisticSet;
use descriptive_frequency::FrequencyTable;
use descriptive_moments::{GroupedParameters, GroupedSummary, SkewDirection, UngroupedSummary};
use serde::Serialize;

/// Result of one ungrouped analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UngroupedReport {
    /// `media`, `mediana`, `moda`, `varianza`, `desviacion_estandar`,
    /// `valor_minimo`, `valor_maximo`, `rango`
    pub statistics: StatisticSet,
    pub frequency_table: FrequencyTable,
    /// Observations the statistics were computed from, in input order
    pub observations: Vec<f64>,
    pub visual_skew: SkewDirection,
    pub series: ChartSeries,
    pub charts: Charts,
    #[serde(skip)]
    pub summary: UngroupedSummary,
}

/// Result of one grouped analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedReport {
    /// `media`, `mediana_aproximada`, `moda`, `varianza`,
    /// `desviacion_estandar`, `sesgo`, `curtosis`
    pub statistics: StatisticSet,
    pub parameters: GroupedParameters,
    pub series: ChartSeries,
    pub charts: Charts,
    #[serde(skip)]
    pub summary: GroupedSummary,
}

/// Report produced by [`AnalysisSession::analyze`](crate::AnalysisSession::analyze)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnalysisReport {
    Ungrouped(UngroupedReport),
    Grouped(GroupedReport),
}

impl AnalysisReport {
    /// Named statistics of either layout
    pub fn statistics(&self) -> &StatisticSet {
        match self {
            Self::Ungrouped(report) => &report.statistics,
            Self::Grouped(report) => &report.statistics,
        }
    }

    pub fn charts(&self) -> &Charts {
        match self {
            Self::Ungrouped(report) => &report.charts,
            Self::Grouped(report) => &report.charts,
        }
    }

    pub fn series(&self) -> &ChartSeries {
        match self {
            Self::Ungrouped(report) => &report.series,
            Self::Grouped(report) => &report.series,
        }
    }

    pub fn as_ungrouped(&self) -> Option<&UngroupedReport> {
        match self {
            Self::Ungrouped(report) => Some(report),
            Self::Grouped(_) => None,
        }
    }

    pub fn as_grouped(&self) -> Option<&GroupedReport> {
        match self {
            Self::Grouped(report) => Some(report),
            Self::Ungrouped(_) => None,
        }
    }
}
