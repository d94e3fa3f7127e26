//! Turns monthly buckets into reported averages.

use super::bucket::{MonthKey, MonthlyBuckets};

/// Average of one dimension in one month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyAverage {
    pub key: MonthKey,
    pub average: f64,
}

/// All-time average of one dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionAverage {
    pub dimension_id: i32,
    /// Number of months that contributed
    pub months: usize,
    pub average: f64,
}

/// One row per (dimension, month): `sum / count` of that bucket.
pub fn monthly_averages(buckets: &MonthlyBuckets) -> Vec<MonthlyAverage> {
    buckets
        .iter()
        .map(|(key, acc)| MonthlyAverage {
            key: *key,
            average: acc.average(),
        })
        .collect()
}

/// One row per dimension: the unweighted mean of its monthly averages.
///
/// A month with a single transaction weighs the same as a month with fifty,
/// so this differs from `total sum / total count`.
pub fn all_time_averages(buckets: &MonthlyBuckets) -> Vec<DimensionAverage> {
    let mut result: Vec<DimensionAverage> = Vec::new();
    let mut total_of_means = 0.0;

    // Buckets iterate grouped by dimension id
    for (key, acc) in buckets.iter() {
        match result.last_mut() {
            Some(current) if current.dimension_id == key.dimension_id => {
                current.months += 1;
                total_of_means += acc.average();
            }
            _ => {
                if let Some(previous) = result.last_mut() {
                    previous.average = total_of_means / previous.months as f64;
                }
                result.push(DimensionAverage {
                    dimension_id: key.dimension_id,
                    months: 1,
                    average: 0.0,
                });
                total_of_means = acc.average();
            }
        }
    }

    if let Some(last) = result.last_mut() {
        last.average = total_of_means / last.months as f64;
    }

    result
}
