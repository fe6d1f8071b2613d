/// Check a threshold configuration: at least one share must be required and
/// the threshold cannot exceed the number of shares available.
pub const fn validate_threshold_config(threshold: usize, share_count: usize) -> bool {
    threshold >= 1 && threshold <= share_count
}
