// File: crates/chart-lod/src/description.rs
// Summary: Typed chart description (the option object a charting surface renders).
// Notes:
// - Only the keys the optimizer reads or writes are typed. Presentation keys
//   are carried as opaque JSON, and anything unrecognized lands in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::series::SeriesOptions;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_zoom: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<SeriesOptions>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    /// Points per progressive rendering chunk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progressive: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progressive_threshold: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_threshold: Option<usize>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(json!({ "text": text.into() }));
        self
    }

    /// Time x-axis and value y-axis, the layout used for sampled time series.
    pub fn with_time_axes(mut self) -> Self {
        self.x_axis = Some(json!({ "type": "time" }));
        self.y_axis = Some(json!({ "type": "value" }));
        self
    }

    pub fn add_series(&mut self, series: SeriesOptions) {
        self.series.get_or_insert_with(Vec::new).push(series);
    }

    /// Data size of the chart: the longest series, or 0 without series.
    pub fn data_len(&self) -> usize {
        self.series.iter().flatten().map(SeriesOptions::len).max().unwrap_or(0)
    }

    /// Downsample every XY series to at most `threshold` points.
    pub fn downsample_lttb(&self, threshold: usize) -> Self {
        let series = self
            .series
            .as_ref()
            .map(|all| all.iter().map(|s| s.downsample_lttb(threshold)).collect());
        Self { series, ..self.clone() }
    }
}
