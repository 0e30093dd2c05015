//! DSP-style arithmetic: saturating add, overflowing add, full-precision
//! multiply.
//!
//! Each operator takes two numbers of arbitrary (possibly distinct) layouts
//! and a caller-chosen target layout; the operands are first converted into
//! the target, so the converter's failure modes apply to every operator.

use crate::number::{Layout, Sfp};
use crate::conversion::{convert, convert_raw};
use crate::Result;

/// Clamp a wide sum into a layout's raw range.
fn saturate(layout: &Layout, wide: i128) -> i64 {
    if wide > layout.max_raw() as i128 {
        layout.max_raw()
    } else if wide < layout.min_raw() as i128 {
        layout.min_raw()
    } else {
        wide as i64
    }
}

/// Addition that clamps into the target's representable range.
///
/// Total once both conversions succeed: the sum is formed in i128 (two
/// 64-bit raws cannot overflow there) and the clamped bounds are always
/// valid encodings.
pub fn add_saturate<
    const TB: usize, const TS: usize, const TI: usize, const TF: usize, const TZ: usize, const TE: i32,
    const AB: usize, const AS: usize, const AI: usize, const AF: usize, const AZ: usize, const AE: i32,
    const BB: usize, const BS: usize, const BI: usize, const BF: usize, const BZ: usize, const BE: i32,
>(
    s1: &Sfp<AB, AS, AI, AF, AZ, AE>,
    s2: &Sfp<BB, BS, BI, BF, BZ, BE>,
) -> Result<Sfp<TB, TS, TI, TF, TZ, TE>> {
    let s1c: Sfp<TB, TS, TI, TF, TZ, TE> = convert(s1)?;
    let s2c: Sfp<TB, TS, TI, TF, TZ, TE> = convert(s2)?;
    let raw = s1c.raw_value() as i128 + s2c.raw_value() as i128;
    Ok(Sfp::from_raw_unchecked(saturate(
        &Sfp::<TB, TS, TI, TF, TZ, TE>::LAYOUT,
        raw,
    )))
}

/// Addition with classic overflow semantics.
///
/// The sum goes through the *validating* raw constructor: a single-sign-bit
/// target accepts any pattern and silently wraps (two's complement), while a
/// target with redundant sign bits rejects an overflowed sum with
/// [`Error::InvalidSignBits`][crate::Error::InvalidSignBits]. Overflow is
/// detectable by construction exactly when the sign field is redundant.
pub fn add_overflow<
    const TB: usize, const TS: usize, const TI: usize, const TF: usize, const TZ: usize, const TE: i32,
    const AB: usize, const AS: usize, const AI: usize, const AF: usize, const AZ: usize, const AE: i32,
    const BB: usize, const BS: usize, const BI: usize, const BF: usize, const BZ: usize, const BE: i32,
>(
    s1: &Sfp<AB, AS, AI, AF, AZ, AE>,
    s2: &Sfp<BB, BS, BI, BF, BZ, BE>,
) -> Result<Sfp<TB, TS, TI, TF, TZ, TE>> {
    let s1c: Sfp<TB, TS, TI, TF, TZ, TE> = convert(s1)?;
    let s2c: Sfp<TB, TS, TI, TF, TZ, TE> = convert(s2)?;
    let raw = s1c.raw_value().wrapping_add(s2c.raw_value());
    Sfp::try_from_raw(raw)
}

/// Full-precision multiplication.
///
/// The exact product lives in the layout whose six fields are the pairwise
/// sums of the operands' fields; that intermediate is then converted into
/// the target, inheriting the converter's truncating shift and its two
/// failure modes. The caller picks operand widths so the product fits 64
/// bits; a wider product is outside the contract.
pub fn multiply<
    const TB: usize, const TS: usize, const TI: usize, const TF: usize, const TZ: usize, const TE: i32,
    const AB: usize, const AS: usize, const AI: usize, const AF: usize, const AZ: usize, const AE: i32,
    const BB: usize, const BS: usize, const BI: usize, const BF: usize, const BZ: usize, const BE: i32,
>(
    s1: &Sfp<AB, AS, AI, AF, AZ, AE>,
    s2: &Sfp<BB, BS, BI, BF, BZ, BE>,
) -> Result<Sfp<TB, TS, TI, TF, TZ, TE>> {
    let wide_layout = Sfp::<AB, AS, AI, AF, AZ, AE>::LAYOUT.product(&Sfp::<BB, BS, BI, BF, BZ, BE>::LAYOUT);
    let product = s1.raw_value() as i128 * s2.raw_value() as i128;
    debug_assert!(i64::MIN as i128 <= product && product <= i64::MAX as i128);

    let raw = convert_raw(&wide_layout, &Sfp::<TB, TS, TI, TF, TZ, TE>::LAYOUT, product as i64)?;
    Ok(Sfp::from_raw_unchecked(raw))
}
