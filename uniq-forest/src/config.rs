//! Configuration for the stream driver.

/// Configuration for the stream driver.
#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    /// Deduplicate and flush a trailing forest that reaches end of stream
    /// without a blank-line terminator.
    ///
    /// The historical tool silently drops such a forest, so this defaults to
    /// false; the drop is logged either way.
    pub flush_trailing_forest: bool,
}

impl DriverConfig {
    /// Creates a configuration with the default (historical) behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether an unterminated trailing forest is flushed at end of
    /// stream.
    pub fn with_flush_trailing_forest(mut self, flush: bool) -> Self {
        self.flush_trailing_forest = flush;
        self
    }
}
