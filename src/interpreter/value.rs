/// The `Value` enum and its conversions, accessors and formatting.
pub mod core;
