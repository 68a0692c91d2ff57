/// Errors from building or loading a matcher.
///
/// Scanning itself never fails: unmatched or unresolved text passes through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScannerError {
    #[error("failed to build matcher: {0}")]
    Build(String),

    #[error("failed to load matcher: {0}")]
    Deserialize(String),

    #[error("not a serialized moji matcher")]
    BadHeader,

    #[error("invalid decorator options: {0}")]
    Options(String),
}
