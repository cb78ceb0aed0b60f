//! Query functions over a loaded article collection
//!
//! Everything here is pure: the collection is passed in explicitly, read
//! through shared references, and never modified.

mod articles;
mod tags;

pub use articles::*;
pub use tags::*;
