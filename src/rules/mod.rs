//! Movement rules.
//!
//! - `legality`: the single step/finish predicate
//! - `movegen`: exhaustive enumeration of legal paths
//! - `validator`: checks an externally supplied path
//!
//! Enumeration and validation share one predicate, so a path passes
//! validation exactly when enumeration with the same step count produces it.

pub mod legality;
pub mod movegen;
pub mod validator;

pub use legality::{LegalMove, Path};
pub use movegen::{enumerate_moves, enumerate_paths, has_legal_move};
pub use validator::{is_legal, validate};
