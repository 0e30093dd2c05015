#![cfg_attr(not(test), no_std)]
//! Signed fixed-point numbers whose bit layout is part of the type.
//!
//! An [`Sfp`] is a single `i64` raw value interpreted under a six-parameter
//! layout: total width, redundant sign bits, integer bits, fractional bits,
//! reserved zero bits, and a logical base-exponent offset. [`convert`] moves
//! raw values between layouts; [`add_saturate`], [`add_overflow`] and
//! [`multiply`] build DSP arithmetic on top of it.

pub mod aliases;
mod conversion;
pub use conversion::{convert, convert_into};
mod dsp;
pub use dsp::{add_overflow, add_saturate, multiply};
mod error;
pub use error::{Error, Result};
mod macros;
mod number;
pub use number::{Layout, Sfp};
