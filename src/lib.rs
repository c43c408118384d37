//! Hierarchical scope paths such as package, class, test group and test case,
//! with a lossless `/`-separated string encoding.
//!
//! The library reads no files or environment variables. The `scope-path`
//! binary built from the same package is a thin command-line front end
//! outside this library, and it alone reads `SCOPE_PATH_DEBUG`.

mod path;
mod type_path;

pub use path::{Ancestors, DecodeError, Path};
pub use type_path::{qualified_type_to_path, type_to_path};
