//! Fixed category and bucket domains
//!
//! Bucket boundaries and label orderings live here as constants owned by the
//! aggregation engine, never inferred from the loaded data. Chart axes must
//! stay identical whichever filter combination is active, so a bucket with no
//! matching records still gets a zero-valued slot.

/// Lowest age covered by the first age bin
pub const AGE_BIN_START: u32 = 18;

/// Width of each age bin in years
pub const AGE_BIN_WIDTH: u32 = 5;

/// Number of age bins (18-22 through 63-67)
pub const AGE_BIN_COUNT: usize = 10;

/// Labels for the fixed age bins, in ascending order
pub fn age_bin_labels() -> Vec<String> {
    (0..AGE_BIN_COUNT)
        .map(|i| {
            let low = AGE_BIN_START + i as u32 * AGE_BIN_WIDTH;
            format!("{}-{}", low, low + AGE_BIN_WIDTH - 1)
        })
        .collect()
}

/// Bin index for an age; out-of-range ages clamp to the nearest bin
pub fn age_bin_index(age: u32) -> usize {
    if age < AGE_BIN_START {
        return 0;
    }
    (((age - AGE_BIN_START) / AGE_BIN_WIDTH) as usize).min(AGE_BIN_COUNT - 1)
}

/// Inclusive year ranges of the fixed tenure buckets, ascending
pub const TENURE_BUCKETS: [(u32, u32); 7] = [
    (0, 1),
    (2, 5),
    (6, 10),
    (11, 15),
    (16, 20),
    (21, 30),
    (31, 40),
];

/// Labels for the fixed tenure buckets, in ascending order
pub fn tenure_bucket_labels() -> Vec<String> {
    TENURE_BUCKETS
        .iter()
        .map(|(low, high)| format!("{}-{}", low, high))
        .collect()
}

/// Bucket index for a tenure; tenures past the last boundary clamp into it
pub fn tenure_bucket_index(years: u32) -> usize {
    TENURE_BUCKETS
        .iter()
        .position(|&(low, high)| years >= low && years <= high)
        .unwrap_or(TENURE_BUCKETS.len() - 1)
}

/// Display labels for job satisfaction levels 1-4, ascending
pub const SATISFACTION_LABELS: [&str; 4] = ["1 - Low", "2 - Medium", "3 - High", "4 - Very High"];

/// Display labels for the overtime split
pub const OVERTIME_LABELS: [&str; 2] = ["With Overtime", "Without Overtime"];

/// Display labels for the work-life radar metrics
pub const WORKLIFE_LABELS: [&str; 5] = [
    "Job Satisfaction",
    "Environment",
    "Relationships",
    "Work-Life Balance",
    "Job Involvement",
];
