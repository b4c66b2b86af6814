//! Error kinds for the store and context layers.
//!
//! Dangling foreign keys are deliberately not represented here: lookups over a
//! snapshot return `Option` and readers render a placeholder instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The backing database could not be opened or migrated. Fatal to
    /// initialization; the context never falls back to memory-only operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The context was read or mutated before `initialize` completed.
    #[error("school context accessed before initialize")]
    Uninitialized,

    /// A store transaction aborted. The store rolls the affected tables back
    /// to their prior contents and the in-memory snapshot is left untouched.
    #[error("store transaction failed: {0}")]
    Transaction(#[from] diesel::result::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
