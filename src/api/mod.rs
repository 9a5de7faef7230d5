//! Purpose: Define the stable public Rust API boundary for sheetcast.
//! Exports: Value tree, rendering, lifting adapters, sheet model, errors.
//! Role: Public, additive-only surface; the CLI and tests consume this path.
//! Invariants: This module is the only public path callers should rely on.
//! Invariants: Render and access paths treat a built tree as immutable;
//! mutators require external synchronization.

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::lift::{from_bool, from_decimal, from_f64, from_i64, from_string};
pub use crate::core::render::render;
pub use crate::core::sheet::{Cell, Sheet};
pub use crate::core::value::{BuildOptions, DEFAULT_MAX_DEPTH, Scalar, Value, ValueKind};
