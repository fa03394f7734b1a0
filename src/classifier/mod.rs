//! Token classification module.
//!
//! This module assigns each scanned lexeme to exactly one of the ten
//! token categories. It includes:
//!
//! - The closed `Category` enumeration and the `Token` pair
//! - Static reserved-word, operator and separator tables
//! - The ordered classification rules, literal shapes before table
//!   membership before the identifier fallback
//! - `ClassificationResult`, the per-run category collections

pub mod classifier;
pub mod tables;
pub mod tokens;
