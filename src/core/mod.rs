//! Seam traits and their implementations for foreign storage.

pub mod traits;
pub mod wrappers;
