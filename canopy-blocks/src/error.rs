use thiserror::Error;

/// Errors surfaced by the block engine. Steady-state behavior degrades
/// silently instead of erroring; only config persistence can fail loudly.
#[derive(Debug, Error)]
pub enum BlockError {
    #[error("config io: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("config parse: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
