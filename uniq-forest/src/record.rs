//! Parsing of scored hyperedge record lines.

use std::str::FromStr;

use crate::error::{UniqForestError, UniqForestResult};

/// Field separator used by the forest text format.
pub const FIELD_SEPARATOR: &str = "|||";

/// Marker line that introduces a two-line sentence header. The marker and the
/// line that follows it are passed through untouched by deduplication.
pub const SENTENCE_MARKER: &str = "sentence :";

/// A single scored hyperedge parsed from one record line.
///
/// The key is every field except the trailing score, rejoined with the
/// separator. The original trimmed score text is kept alongside the parsed
/// number so output can reproduce it verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperedge {
    /// Deduplication key.
    pub key: String,
    /// Numeric value of the trailing score field.
    pub score: f64,
    /// The trimmed score field as it appeared in the input.
    pub score_text: String,
}

impl FromStr for Hyperedge {
    type Err = UniqForestError;

    fn from_str(line: &str) -> UniqForestResult<Self> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() < 2 {
            return Err(UniqForestError::MissingSeparator(line.to_string()));
        }

        let score_text = fields[fields.len() - 1].trim();
        let score = score_text
            .parse::<f64>()
            .map_err(|source| UniqForestError::InvalidScore {
                score: score_text.to_string(),
                source,
            })?;
        let key = fields[..fields.len() - 1].join(FIELD_SEPARATOR);

        Ok(Self {
            key,
            score,
            score_text: score_text.to_string(),
        })
    }
}
