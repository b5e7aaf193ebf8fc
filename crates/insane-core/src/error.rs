use thiserror::Error;

/// Failure to make sense of the raw settings document.
///
/// This is the only hard error in the pipeline: without a parseable
/// container there is nothing to default. Every later stage is total and
/// reports corrections through [`Report`](crate::report::Report) instead.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("settings document must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
}
