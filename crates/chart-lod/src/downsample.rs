// File: crates/chart-lod/src/downsample.rs
// Summary: Largest-Triangle-Three-Buckets downsampling for XY series.

use std::borrow::Cow;

use crate::types::Point;

/// Largest-Triangle-Three-Buckets downsampling.
///
/// Returns the input borrowed as-is when there is nothing to reduce
/// (`threshold == 0` or `points.len() <= threshold`). Otherwise returns exactly
/// `threshold` points for `threshold >= 2`, always keeping the first and last
/// input points. A `threshold` of 1 on a longer series yields `[first, last]`.
pub fn lttb(points: &[Point], threshold: usize) -> Cow<'_, [Point]> {
    match lttb_indices(points, threshold) {
        Some(indices) => Cow::Owned(indices.into_iter().map(|i| points[i]).collect()),
        None => Cow::Borrowed(points),
    }
}

/// Indices of the points LTTB keeps, in ascending order.
/// `None` means the series is kept whole.
pub fn lttb_indices(points: &[Point], threshold: usize) -> Option<Vec<usize>> {
    let n = points.len();
    if threshold == 0 || n <= threshold {
        return None;
    }

    let mut sampled = Vec::with_capacity(threshold.max(2));
    // Always include first
    sampled.push(0);

    if threshold > 2 {
        let buckets = threshold - 2;
        let bucket_size = (n - 2) as f64 / buckets as f64;
        let mut a = 0usize; // anchor: the point picked from the previous bucket

        for i in 0..buckets {
            let start = bucket_bound(i, bucket_size);
            let end = bucket_bound(i + 1, bucket_size).min(n - 1).max(start + 1);

            // Average over the next bucket; for the final bucket that is the last point.
            let next_end = bucket_bound(i + 2, bucket_size).min(n).max(end + 1);
            let (avg_x, avg_y) = average(&points[end..next_end]);

            let (a_x, a_y) = points[a];
            let mut max_area = -1.0f64;
            let mut max_idx = start;
            for (k, &(x, y)) in points.iter().enumerate().take(end).skip(start) {
                let area = ((a_x - avg_x) * (y - a_y) - (a_x - x) * (avg_y - a_y)).abs() * 0.5;
                // Strictly greater: the first point with the largest area wins ties.
                if area > max_area {
                    max_area = area;
                    max_idx = k;
                }
            }

            sampled.push(max_idx);
            a = max_idx;
        }
    }

    // Always include last
    sampled.push(n - 1);
    Some(sampled)
}

/// Lower index bound of bucket `k` over the interior points (index 0 is the fixed first point).
fn bucket_bound(k: usize, bucket_size: f64) -> usize {
    (k as f64 * bucket_size).floor() as usize + 1
}

fn average(window: &[Point]) -> Point {
    if window.is_empty() {
        return (0.0, 0.0);
    }
    let (sx, sy) = window
        .iter()
        .fold((0.0f64, 0.0f64), |(sx, sy), &(x, y)| (sx + x, sy + y));
    let count = window.len() as f64;
    (sx / count, sy / count)
}
