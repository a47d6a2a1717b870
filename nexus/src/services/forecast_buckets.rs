//! Partition of an hourly forecast into four fixed 6-hour windows.

use crate::api::{DayPeriod, ForecastBucket, ForecastPoint};

/// Inclusive horizon range of a daily period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketWindow {
    pub period: DayPeriod,
    pub first_hour: i64,
    pub last_hour: i64,
}

impl BucketWindow {
    pub fn contains(&self, horizon_hours: i64) -> bool {
        (self.first_hour..=self.last_hour).contains(&horizon_hours)
    }
}

/// The four windows, in chronological order.
pub const BUCKET_WINDOWS: [BucketWindow; 4] = [
    BucketWindow {
        period: DayPeriod::Night,
        first_hour: 1,
        last_hour: 6,
    },
    BucketWindow {
        period: DayPeriod::Morning,
        first_hour: 7,
        last_hour: 12,
    },
    BucketWindow {
        period: DayPeriod::Afternoon,
        first_hour: 13,
        last_hour: 18,
    },
    BucketWindow {
        period: DayPeriod::Evening,
        first_hour: 19,
        last_hour: 24,
    },
];

/// Index into [`BUCKET_WINDOWS`] of the window holding `horizon_hours`.
pub fn window_index(horizon_hours: i64) -> Option<usize> {
    BUCKET_WINDOWS.iter().position(|w| w.contains(horizon_hours))
}

/// Sum predicted values per window.
///
/// Points outside hours 1 to 24 are skipped, as are non-finite values.
/// Windows whose total is not positive are left out; the others are rounded
/// to two decimals and returned in chronological order.
pub fn bucket_forecast(points: &[ForecastPoint]) -> Vec<ForecastBucket> {
    let mut totals = [0.0_f64; BUCKET_WINDOWS.len()];

    for point in points {
        let Some(index) = window_index(point.horizon_hours) else {
            continue;
        };
        if point.predicted_value.is_finite() {
            totals[index] += point.predicted_value;
        }
    }

    BUCKET_WINDOWS
        .iter()
        .zip(totals)
        .filter(|(_, total)| *total > 0.0)
        .map(|(window, total)| ForecastBucket {
            period: window.period,
            name: window.period.label().to_string(),
            value: round2(total),
        })
        .collect()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
