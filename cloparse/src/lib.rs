//! Small command-line support library.
//!
//! The centrepiece is [`CloParser`], a per-token option matcher driven by a
//! caller-owned cursor:
//! - `cop.get("-v --verbose")` for flags
//! - `cop.get_value("-p --parallel", &mut n, false)` for options with a value,
//!   either in the next token or glued to a short keyword (`-p4`)
//! - value coercion through the closed [`BinderKind`] set, picked by the slot type
//!
//! Around it sit the helpers a solver front end needs: whitespace word
//! splitting, comma-joined summaries ([`HadOne`]), lenient
//! [`SemanticVersion`] parsing, I/O status reporting and hard assertions.

#[macro_use]
mod assert;

pub mod binder;
pub mod cargv;
pub mod io_status;
pub mod join;
pub mod matcher;
pub mod numeric;
pub mod version;
pub mod words;

pub use binder::{BinderKind, Coerced, ValueSlot};
pub use cargv::CArgv;
pub use io_status::{check_errno, check_io_status};
pub use join::{HadOne, Truthy};
pub use matcher::{CloParser, MatchPolicy};
pub use numeric::round_to_i64;
pub use version::SemanticVersion;
pub use words::{begins_with, split, split_into};

#[doc(hidden)]
pub use tracing as __tracing;

// ============================================================================
// Result and Error types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A hard assertion failed.
    #[error("internal error: {0}")]
    Internal(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("argument {index} contains an interior NUL byte")]
    InteriorNul { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
