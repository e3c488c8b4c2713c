//! Per-forest deduplication keeping the best-scoring record for each key.

use std::collections::HashMap;

use crate::error::UniqForestResult;
use crate::record::{FIELD_SEPARATOR, Hyperedge};

/// Best score seen so far for a key, with its original textual form.
#[derive(Debug, Clone)]
struct BestScore {
    score: f64,
    score_text: String,
}

/// Tracks the highest-scoring entry per key while preserving the order in
/// which each distinct key first appeared.
///
/// A stored entry is replaced only on a strictly greater score, so ties keep
/// the earliest occurrence. A `NaN` score never replaces an existing entry
/// for the same reason.
#[derive(Debug, Default)]
pub struct ScoreTable {
    /// Keys in first-seen order.
    ordered_keys: Vec<String>,
    /// Best (score, score text) per key.
    best: HashMap<String, BestScore>,
}

impl ScoreTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one hyperedge, keeping the entry with the highest score.
    pub fn observe(&mut self, edge: Hyperedge) {
        match self.best.get_mut(&edge.key) {
            Some(existing) => {
                if edge.score > existing.score {
                    existing.score = edge.score;
                    existing.score_text = edge.score_text;
                }
            }
            None => {
                self.ordered_keys.push(edge.key.clone());
                self.best.insert(
                    edge.key,
                    BestScore {
                        score: edge.score,
                        score_text: edge.score_text,
                    },
                );
            }
        }
    }

    /// Returns the number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.ordered_keys.len()
    }

    /// Returns true if no records have been observed.
    pub fn is_empty(&self) -> bool {
        self.ordered_keys.is_empty()
    }

    /// Consumes the table and emits one output line per key in first-seen
    /// order, formatted as `<key>||| <score-string>`.
    pub fn into_lines(self) -> Vec<String> {
        let best = self.best;
        self.ordered_keys
            .into_iter()
            .map(|key| {
                let entry = &best[&key];
                format!("{key}{FIELD_SEPARATOR} {}", entry.score_text)
            })
            .collect()
    }
}

/// Deduplicates one forest's record lines.
///
/// Parsing happens here rather than at accumulation time, matching the
/// single-pass structure of the driver: a malformed record fails the whole
/// forest with no partial output.
pub fn uniq_forest(lines: &[String]) -> UniqForestResult<Vec<String>> {
    let mut table = ScoreTable::new();
    for line in lines {
        let edge: Hyperedge = line.parse()?;
        table.observe(edge);
    }

    Ok(table.into_lines())
}
