//! Conversion of a raw value between two layouts.
//!
//! Two independent transforms compose:
//!
//! 1. Base relabeling. `S.I.F.Z<B><base>` and `S.(I+k).(F-k).Z<B><base-k>`
//!    denote the same scale exponent, so the raw bits are untouched; only the
//!    conceptual int/frac boundary moves. The relabeled counts must be
//!    non-negative and must equal the declared target counts exactly.
//! 2. Zero-bit reshape. Moving bits between the fractional and reserved-zero
//!    fields changes the scale exponent, so the raw value is rescaled by an
//!    arithmetic shift. Right shifts truncate, there is no rounding mode.
//!
//! The shift result is always a valid encoding of the target layout (shifting
//! preserves sign extension, and reserved low bits are only ever set to 0 or
//! dropped), so no re-validation happens on success.

use crate::{Error, Result};
use crate::number::{Layout, Sfp};

/// The layout-agnostic core of [`convert`]: both steps on a bare raw value.
pub(crate) fn convert_raw(from: &Layout, to: &Layout, raw: i64) -> Result<i64> {
    // base relabeling, no bits move
    let base_diff = to.base - from.base;
    let int = from.int as i32 - base_diff;
    let frac = from.frac as i32 + base_diff;
    if int < 0 || frac < 0 {
        return Err(Error::InsufficientDegreesOfFreedom);
    }
    if int != to.int as i32 || frac != to.frac as i32 {
        return Err(Error::DegreesOfFreedomMismatch);
    }

    // zero-bit reshape, sign-preserving shift
    let zero_diff = to.zero as i32 - from.zero as i32;
    Ok(if zero_diff > 0 {
        raw << zero_diff as u32
    } else if zero_diff < 0 {
        raw >> (-zero_diff) as u32
    } else {
        raw
    })
}

/// Converts a number into the target layout named by the first six const
/// parameters (usually inferred from the assignment site).
pub fn convert<
    const TB: usize, const TS: usize, const TI: usize, const TF: usize, const TZ: usize, const TE: i32,
    const SB: usize, const SS: usize, const SI: usize, const SF: usize, const SZ: usize, const SE: i32,
>(
    from: &Sfp<SB, SS, SI, SF, SZ, SE>,
) -> Result<Sfp<TB, TS, TI, TF, TZ, TE>> {
    let raw = convert_raw(
        &Sfp::<SB, SS, SI, SF, SZ, SE>::LAYOUT,
        &Sfp::<TB, TS, TI, TF, TZ, TE>::LAYOUT,
        from.raw_value(),
    )?;
    Ok(Sfp::from_raw_unchecked(raw))
}

/// In-place form of [`convert`], writing into an existing target.
pub fn convert_into<
    const TB: usize, const TS: usize, const TI: usize, const TF: usize, const TZ: usize, const TE: i32,
    const SB: usize, const SS: usize, const SI: usize, const SF: usize, const SZ: usize, const SE: i32,
>(
    to: &mut Sfp<TB, TS, TI, TF, TZ, TE>,
    from: &Sfp<SB, SS, SI, SF, SZ, SE>,
) -> Result<()> {
    *to = convert(from)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn invariant_decimal_point() {
        // 1.0.14.1 -> 2.0.14.0
        let a = Sfp::<16, 1, 0, 14, 1, 0>::from_f64(0.05);
        let b: Sfp<16, 2, 0, 14, 0, 0> = convert(&a).unwrap();
        assert_eq!(a.value(), b.value());

        // 2.0.14.0 -> 1.0.14.1
        let b = Sfp::<16, 2, 0, 14, 0, 0>::from_f64(-0.3);
        let a: Sfp<16, 1, 0, 14, 1, 0> = convert(&b).unwrap();
        assert_eq!(b.value(), a.value());
    }

    #[test]
    fn invariant_base() {
        // 1.0.15.0<1> -> 1.1.14.0<0>
        let a = Sfp::<16, 1, 0, 15, 0, 1>::from_f64(0.05);
        let b: Sfp<16, 1, 1, 14, 0, 0> = convert(&a).unwrap();
        assert_eq!(a.value(), b.value());
        assert_eq!(a.raw_value(), b.raw_value());

        // 1.1.14.0<0> -> 1.0.15.0<1>
        let b = Sfp::<16, 1, 1, 14, 0, 0>::from_f64(-0.3);
        let a: Sfp<16, 1, 0, 15, 0, 1> = convert(&b).unwrap();
        assert_eq!(b.value(), a.value());
    }

    #[test]
    fn invariant_bit_width() {
        // 1.1.1.1<4> -> 2.1.1.4<8>
        let a = Sfp::<4, 1, 1, 1, 1, 0>::from_f64(0.05);
        let b: Sfp<8, 2, 1, 1, 4, 0> = convert(&a).unwrap();
        assert_eq!(a.value(), b.value());

        // 2.1.1.4<8> -> 1.1.1.1<4>
        let b = Sfp::<8, 2, 1, 1, 4, 0>::from_f64(-0.3);
        let a: Sfp<4, 1, 1, 1, 1, 0> = convert(&b).unwrap();
        assert_eq!(b.value(), a.value());
    }

    #[test]
    fn invariant_mix() {
        // 3.3.3.3<12><3> -> 2.6.0.8<16><0>
        let a = Sfp::<12, 3, 3, 3, 3, 3>::from_f64(0.05);
        let b: Sfp<16, 2, 6, 0, 8, 0> = convert(&a).unwrap();
        assert_eq!(a.value(), b.value());

        let b = Sfp::<16, 2, 6, 0, 8, 0>::from_f64(-0.3);
        let a: Sfp<12, 3, 3, 3, 3, 3> = convert(&b).unwrap();
        assert_eq!(b.value(), a.value());
    }

    #[test]
    fn in_place() {
        let from = Sfp::<16, 1, 0, 14, 1, 0>::from_f64(0.05);
        let mut to = Sfp::<16, 2, 0, 14, 0, 0>::new();
        convert_into(&mut to, &from).unwrap();
        assert_eq!(from.value(), to.value());
    }

    #[test]
    fn round_trip_is_raw_exact() {
        let a = Sfp::<16, 1, 0, 15, 0, 1>::from_f64(0.8125);
        let b: Sfp<16, 1, 1, 14, 0, 0> = convert(&a).unwrap();
        let back: Sfp<16, 1, 0, 15, 0, 1> = convert(&b).unwrap();
        assert_eq!(a.raw_value(), back.raw_value());
    }

    #[test]
    fn dof_mismatch() {
        // same base, but the declared int/frac split disagrees
        let a = Sfp::<16, 1, 0, 14, 1, 0>::from_f64(0.05);
        let r: Result<Sfp<16, 1, 1, 13, 1, 0>> = convert(&a);
        assert_eq!(r.unwrap_err(), Error::DegreesOfFreedomMismatch);
    }

    #[test]
    fn insufficient_dof() {
        // raising the base would need a negative integer bit count
        let a = Sfp::<16, 1, 0, 15, 0, 0>::from_f64(0.05);
        let r: Result<Sfp<16, 1, 0, 15, 0, 1>> = convert(&a);
        assert_eq!(r.unwrap_err(), Error::InsufficientDegreesOfFreedom);

        // lowering it would need a negative fractional bit count
        let b = Sfp::<16, 1, 15, 0, 0, 0>::from_f64(42.0);
        let r: Result<Sfp<16, 1, 15, 0, 0, -1>> = convert(&b);
        assert_eq!(r.unwrap_err(), Error::InsufficientDegreesOfFreedom);
    }
}
