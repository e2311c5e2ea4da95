/// Checked numeric conversions.
///
/// Integers widen to floats only when the value fits the float's mantissa,
/// and runtime indices resolve to `usize` positions only inside the bounds of
/// the axis they select. Every helper reports failure instead of rounding or
/// wrapping.
pub mod num;
