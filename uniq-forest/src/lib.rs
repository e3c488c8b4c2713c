//! uniq-forest - Deduplicates scored records within blank-line delimited
//! forests.
//!
//! Input is a line-oriented stream of `|||`-separated records where the last
//! field is a numeric score and the remaining fields form the key. Within
//! each forest (a group of records between blank lines) only the
//! highest-scoring record per key survives, emitted in first-seen key order.
//! A literal `sentence :` line and the line following it are copied through
//! untouched.
//!
//! # Usage
//!
//! ```
//! use std::io::Cursor;
//!
//! use uniq_forest::{DriverConfig, StreamDriver};
//!
//! let input = Cursor::new("a|||b|||1.0\na|||b|||2.0\n\n");
//! let mut output = Vec::new();
//!
//! let driver = StreamDriver::new(DriverConfig::new());
//! driver.run(input, &mut output).unwrap();
//!
//! assert_eq!(output, b"a|||b||| 2.0\n\n");
//! ```

mod config;
mod driver;
mod error;
mod forest;
mod record;

pub use config::DriverConfig;
pub use driver::StreamDriver;
pub use error::{UniqForestError, UniqForestResult};
pub use forest::{ScoreTable, uniq_forest};
pub use record::{FIELD_SEPARATOR, Hyperedge, SENTENCE_MARKER};
