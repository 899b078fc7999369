//! Hash collections using the FxHash hasher.

pub use rustc_hash::{FxHashMap, FxHashSet};
