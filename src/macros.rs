//! Utility macros for the tokenizer.
//!
//! This module defines helper macros used throughout the tokenizer:
//!
//! - `MK_PATTERN!` - Creates a tagged scanner pattern entry
//!
//! These macros reduce boilerplate in the scanner implementation.

/// Creates a `ShapePattern` entry for the scanner's alternative table.
///
/// # Arguments
///
/// * `$shape` - The Shape tag reported when this alternative fires
/// * `$pattern` - The regex source, anchored at the cursor with `^`
///
/// # Example
///
/// ```ignore
/// let pattern = MK_PATTERN!(Shape::Number, r"^[0-9]+");
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($shape:expr, $pattern:literal) => {
        ShapePattern {
            shape: $shape,
            regex: Regex::new($pattern).unwrap(),
        }
    };
}
