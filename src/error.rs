//! Error type shared by the whole crate.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The guess is not a word of the configured length and alphabet.
    #[error("invalid word {word:?}: {reason}")]
    InvalidWord { word: String, reason: String },

    /// The feedback string has the wrong length or an unknown mark.
    #[error("invalid feedback {feedback:?}: {reason}")]
    InvalidFeedback { feedback: String, reason: String },

    /// No dictionary word satisfies the accumulated constraints.
    #[error("no dictionary word satisfies the current constraints")]
    NoCandidates,

    #[error("failed to read dictionary {}", .path.display())]
    Dictionary {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
