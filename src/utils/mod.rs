//! Utility functions shared across layers.
//!
//! - [`normalize`] - Trimming and placeholder substitution for upstream fields

pub mod normalize;
