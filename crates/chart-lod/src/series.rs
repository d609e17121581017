// File: crates/chart-lod/src/series.rs
// Summary: Per-series render options and data as handed to the charting surface.
// Notes:
// - `data` sits behind an `Arc` so optimized copies of a description share the
//   data arrays with the original instead of copying them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::downsample::lttb_indices;
use crate::types::Point;

/// Shared, immutable series payload. Items are usually `[x, y]` pairs but
/// pie/funnel style series carry objects.
pub type SeriesData = Arc<Vec<Value>>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Line,
    Bar,
    Scatter,
    Candlestick,
    Pie,
    Radar,
    Funnel,
    Gauge,
    Heatmap,
    Tree,
    #[serde(untagged)]
    Other(String),
}

impl SeriesType {
    /// Series types whose data is a sequence of `[x, y]` samples.
    pub fn is_xy(&self) -> bool {
        matches!(self, SeriesType::Line | SeriesType::Bar | SeriesType::Scatter)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub series_type: Option<SeriesType>,
    #[serde(default, skip_serializing_if = "data_is_empty")]
    pub data: SeriesData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_threshold: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Presentation keys this crate never inspects (itemStyle, smooth, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn data_is_empty(data: &SeriesData) -> bool {
    data.is_empty()
}

impl SeriesOptions {
    pub fn new(series_type: SeriesType) -> Self {
        Self { series_type: Some(series_type), ..Self::default() }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<Value>) -> Self {
        Self { series_type: Some(series_type), data: Arc::new(data), ..Self::default() }
    }

    /// Line series from XY samples; each point becomes a `[x, y]` item.
    pub fn line(points: &[Point]) -> Self {
        let data = points.iter().map(|&(x, y)| Value::from(vec![x, y])).collect();
        Self::with_data(SeriesType::Line, data)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Data as XY samples, or `None` when any item is not a numeric `[x, y]` pair.
    pub fn xy_points(&self) -> Option<Vec<Point>> {
        self.data.iter().map(point_from_value).collect()
    }

    /// Downsample XY data using LTTB to `threshold` points.
    /// Non-XY series, and series with non-pair items, come back sharing their data.
    pub fn downsample_lttb(&self, threshold: usize) -> Self {
        if matches!(&self.series_type, Some(t) if !t.is_xy()) {
            return self.clone();
        }
        let Some(points) = self.xy_points() else {
            debug!(series = ?self.name, "series data is not [x, y] pairs; skipping downsample");
            return self.clone();
        };
        match lttb_indices(&points, threshold) {
            Some(keep) => {
                debug!(series = ?self.name, from = points.len(), to = keep.len(), "lttb downsampled series");
                let data = keep.into_iter().map(|i| self.data[i].clone()).collect();
                Self { data: Arc::new(data), ..self.clone() }
            }
            None => self.clone(),
        }
    }
}

fn point_from_value(item: &Value) -> Option<Point> {
    match item.as_array()?.as_slice() {
        [x, y] => Some((x.as_f64()?, y.as_f64()?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pair_items_parse_as_points() {
        assert_eq!(point_from_value(&json!([1_600_000_000_000i64, 2.5])), Some((1.6e12, 2.5)));
        assert_eq!(point_from_value(&json!([1, 2, 3])), None);
        assert_eq!(point_from_value(&json!({"name": "a", "value": 3})), None);
        assert_eq!(point_from_value(&json!(["a", 1])), None);
    }

    #[test]
    fn unknown_series_type_round_trips() {
        let t: SeriesType = serde_json::from_value(json!("sankey")).unwrap();
        assert_eq!(t, SeriesType::Other("sankey".into()));
        assert_eq!(serde_json::to_value(&t).unwrap(), json!("sankey"));
        let t: SeriesType = serde_json::from_value(json!("line")).unwrap();
        assert_eq!(t, SeriesType::Line);
    }
}
