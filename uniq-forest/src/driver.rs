//! Line-stream driver that groups records into forests and writes the
//! deduplicated output.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::DriverConfig;
use crate::error::{UniqForestError, UniqForestResult};
use crate::forest::uniq_forest;
use crate::record::SENTENCE_MARKER;

/// Drives a line stream through forest accumulation and deduplication.
///
/// Lines are trimmed before classification. A line that trims to empty is a
/// forest delimiter: the accumulated records are deduplicated, written out,
/// and followed by one blank line. A `sentence :` marker and the line after
/// it are echoed without entering the record buffer. Everything else is a
/// record line.
pub struct StreamDriver {
    config: DriverConfig,
}

impl StreamDriver {
    /// Creates a driver with the given configuration.
    pub fn new(config: DriverConfig) -> Self {
        Self { config }
    }

    /// Processes `reader` until end of stream, writing results to `writer`.
    ///
    /// All forest state is local to this call. Any parse or IO error is
    /// fatal; no partial output is guaranteed for the forest being processed
    /// when the error surfaces.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> UniqForestResult<()> {
        let mut hyperedges: Vec<String> = Vec::new();
        let mut forests_flushed = 0usize;
        let mut lines = reader.lines();

        while let Some(line) = lines.next() {
            let line = line?;
            let line = line.trim();

            // Blank lines delimit forests.
            if line.is_empty() {
                self.flush_forest(&hyperedges, writer)?;
                hyperedges.clear();
                forests_flushed += 1;
                continue;
            }

            // The sentence marker and the line after it bypass deduplication.
            if line == SENTENCE_MARKER {
                writeln!(writer, "{line}")?;
                let next = lines
                    .next()
                    .ok_or(UniqForestError::UnexpectedEndOfStream)??;
                writeln!(writer, "{}", next.trim())?;
                continue;
            }

            hyperedges.push(line.to_string());
        }

        if !hyperedges.is_empty() {
            if self.config.flush_trailing_forest {
                self.flush_forest(&hyperedges, writer)?;
                forests_flushed += 1;
            } else {
                warn!(
                    records = hyperedges.len(),
                    "dropping trailing forest with no blank-line terminator"
                );
            }
        }

        debug!(forests = forests_flushed, "finished processing stream");

        Ok(())
    }

    /// Deduplicates one forest and writes its lines plus the blank separator.
    fn flush_forest<W: Write>(&self, hyperedges: &[String], writer: &mut W) -> UniqForestResult<()> {
        for line in uniq_forest(hyperedges)? {
            writeln!(writer, "{line}")?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
