/// Rejected configuration.
///
/// Returned at the point where options are assigned; the pipeline itself never fails.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("row height must be a finite number greater than zero (got {row_height})")]
    InvalidRowHeight { row_height: f64 },
}
