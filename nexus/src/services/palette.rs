//! Rank-based colouring of forecast buckets.
//!
//! Colours follow magnitude (largest bucket red) while the chart keeps the
//! chronological order of the buckets. Ranking and rendering are two separate
//! passes over two separate sequences.

use std::collections::HashMap;

use crate::api::{ChartSlice, DayPeriod, ForecastBucket};

/// Colours from highest to lowest value: red, yellow, green, dark green.
pub const RANK_PALETTE: [&str; 4] = ["#ff4d4d", "#ffd93b", "#34d399", "#065f46"];

/// Colour of any bucket ranked after the palette runs out.
pub const FALLBACK_COLOR: &str = "#999999";

pub const LEGEND_NOTE: &str =
    "Colours show highest to lowest consumption: red (max), yellow, green, dark green (min).";

/// Palette colour of the bucket at `rank` (0 = largest).
pub fn color_for_rank(rank: usize) -> &'static str {
    RANK_PALETTE.get(rank).copied().unwrap_or(FALLBACK_COLOR)
}

/// Colour of every period, ranked by value descending.
///
/// Ties keep their input order. When a period appears more than once, its
/// lowest-ranked occurrence decides the colour.
pub fn rank_colors(buckets: &[ForecastBucket]) -> HashMap<DayPeriod, &'static str> {
    let mut ranked: Vec<&ForecastBucket> = buckets.iter().collect();
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));

    let mut colors = HashMap::with_capacity(ranked.len());
    for (rank, bucket) in ranked.into_iter().enumerate() {
        colors.insert(bucket.period, color_for_rank(rank));
    }
    colors
}

/// Render buckets in their original order with their ranked colour.
pub fn color_buckets(buckets: &[ForecastBucket]) -> Vec<ChartSlice> {
    let colors = rank_colors(buckets);

    buckets
        .iter()
        .map(|bucket| ChartSlice {
            period: bucket.period,
            name: bucket.name.clone(),
            value: bucket.value,
            color: colors
                .get(&bucket.period)
                .copied()
                .unwrap_or(FALLBACK_COLOR)
                .to_string(),
        })
        .collect()
}
