// KPI domain model
use serde::{Deserialize, Serialize};

/// The caller-chosen metric behind the third KPI tile. An external UI
/// selection, not viewport state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraMetric {
    /// Max combustion temperature over the window.
    #[default]
    Temp,
    /// Mean IDF running percentage.
    Idf,
    /// Mean RGF running percentage.
    Rgf,
}

/// Summary statistics over the visible window. `None` means no data was
/// available for that field - distinct from zero and never NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiResult {
    pub avg_power: Option<f64>,
    pub avg_steam: Option<f64>,
    pub extra: Option<f64>,
    pub metric: ExtraMetric,
}

impl KpiResult {
    pub fn unavailable(metric: ExtraMetric) -> Self {
        Self {
            avg_power: None,
            avg_steam: None,
            extra: None,
            metric,
        }
    }
}
