use serde::Deserialize;

/// How much of a session operation reaches the `debug` log.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionTrace {
    /// Token fingerprint only, never the payload.
    #[default]
    Redacted,
    /// Full token and `Debug` of the payload. May leak challenge material.
    Verbatim,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub session_trace: SessionTrace,
    /// Pre-sizes both tables.
    pub initial_capacity: usize,
}
