use std::io;

use thiserror::Error;

/// Errors surfaced by the prompt primitives.
///
/// Invalid *user input* is never an error: the prompt loop retries, falls
/// back to the caller's default, or (for bounded-attempt primitives)
/// reports `Ok(false)`. `PromptError` is reserved for the terminal stream
/// failing underneath a prompt and for malformed call arguments, which are
/// rejected before any read happens.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The terminal collaborator failed to read or write.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    /// The input stream closed before a valid answer was read.
    ///
    /// Only the raw line-sequence primitive treats end-of-input as a normal
    /// termination; every other primitive surfaces it here.
    #[error("input stream closed before a valid answer was read")]
    Eof,

    /// An empty allowed-type set was passed to a typed prompt.
    #[error("allowed type set must not be empty")]
    EmptyTypeSet,

    /// An empty key list was passed to a key-press wait.
    #[error("key set must not be empty")]
    EmptyKeySet,

    /// A selection prompt was given a menu with no entries.
    #[error("menu must not be empty")]
    EmptyMenu,

    /// Two menu entries stringified to the same key.
    #[error("menu keys must be unique: duplicate key `{0}`")]
    DuplicateMenuKey(String),
}
