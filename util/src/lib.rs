//! Small, self-contained helpers: value conversion, data source names,
//! string tokenization, random data, slice and struct-patching utilities,
//! plus filesystem, JSON, time, and network odds and ends.
//!
//! Each module stands on its own; none depends on another part of this
//! crate.

pub mod convert;
pub mod dsn;
pub mod fs;
pub mod json;
pub mod net;
pub mod patch;
pub mod random;
pub mod slice;
pub mod time;
pub mod tokens;
