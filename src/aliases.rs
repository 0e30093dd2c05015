//! Type aliases for common DSP formats.
//!
//! `Qn` is the canonical fractional format: one sign bit, no integer bits,
//! `n` fractional bits, no reserved bits, base 0.

use crate::Sfp;

pub type Q7 = Sfp<8, 1, 0, 7, 0, 0>;
pub type Q15 = Sfp<16, 1, 0, 15, 0, 0>;
pub type Q31 = Sfp<32, 1, 0, 31, 0, 0>;
pub type Q63 = Sfp<64, 1, 0, 63, 0, 0>;

/// One integer bit of headroom, e.g. for filter coefficients slightly above 1.
pub type Q1_14 = Sfp<16, 1, 1, 14, 0, 0>;
pub type Q1_30 = Sfp<32, 1, 1, 30, 0, 0>;

/// Exact product of two Q15 values.
pub type Q15Square = Sfp<32, 2, 0, 30, 0, 0>;
