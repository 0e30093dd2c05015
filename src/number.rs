use num_traits::float::FloatCore;

use crate::{Error, Result};

mod trait_implementations;

/// Bit layout of a signed fixed-point number.
///
/// Within a `bits`-wide field (at most 64, stored sign-extended in an `i64`),
/// from most to least significant: `sign` redundant sign bits, `int` integer
/// bits, `frac` fractional bits, `zero` reserved bits that are always 0.
/// `base` is a logical exponent offset: it moves the conceptual int/frac
/// boundary without moving any physical bit.
///
/// The numeric value of a raw integer `r` under a layout is
/// `r * 2^-(frac + zero - base)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub(crate) bits: usize,
    pub(crate) sign: usize,
    pub(crate) int: usize,
    pub(crate) frac: usize,
    pub(crate) zero: usize,
    pub(crate) base: i32,
}

impl Layout {
    /// Fails to const-evaluate (i.e., fails the build of the instantiation)
    /// unless `sign >= 1`, `bits <= 64` and the four bit fields tile `bits`.
    pub const fn new(bits: usize, sign: usize, int: usize, frac: usize, zero: usize, base: i32) -> Self {
        assert!(sign >= 1, "at least one sign bit");
        assert!(bits <= 64, "raw storage is a single i64");
        assert!(sign + int + frac + zero == bits, "sign + int + frac + zero must equal the total width");
        Self { bits, sign, int, frac, zero, base }
    }

    /// The scale exponent `E`: a raw value `r` denotes `r * 2^-E`.
    pub const fn scale_exponent(&self) -> i32 {
        self.frac as i32 + self.zero as i32 - self.base
    }

    /// Largest valid raw value: all magnitude bits set, sign and zero bits 0.
    pub const fn max_raw(&self) -> i64 {
        !((-1i64) << (self.int + self.frac)) << self.zero
    }

    /// Smallest valid raw value: `-2^(bits - sign)`.
    pub const fn min_raw(&self) -> i64 {
        (-1i64) << (self.bits - self.sign)
    }

    /// Mask over the `zero` reserved low bits.
    pub const fn zero_mask(&self) -> i64 {
        !((-1i64) << self.zero)
    }

    /// Two's-complement sign extension of the `bits`-wide field into the
    /// full i64 container. Bits above the field are discarded.
    pub const fn sign_extend(&self, raw: i64) -> i64 {
        (raw << (64 - self.bits)) >> (64 - self.bits)
    }

    /// All `sign` most-significant bits of the (already sign-extended) field
    /// hold the same value.
    pub const fn sign_bits_valid(&self, raw: i64) -> bool {
        raw >> (self.bits - self.sign) == raw >> (self.bits - 1)
    }

    /// All `zero` reserved low bits are 0.
    pub const fn zero_bits_valid(&self, raw: i64) -> bool {
        raw & self.zero_mask() == 0
    }

    /// The layout of an exact full-precision product: each field is the
    /// pairwise sum of the factors' fields.
    pub(crate) const fn product(&self, other: &Self) -> Self {
        Self {
            bits: self.bits + other.bits,
            sign: self.sign + other.sign,
            int: self.int + other.int,
            frac: self.frac + other.frac,
            zero: self.zero + other.zero,
            base: self.base + other.base,
        }
    }
}

/// Signed fixed-point number with layout `SGN.INT.FRAC.ZERO<BITS>` and base
/// exponent `BASE` (notation of the layout parameters from most to least
/// significant bit field).
///
/// The raw value is kept sign-extended beyond bit `BITS - 1`, so ordinary
/// i64 arithmetic on raw values behaves like `BITS`-wide two's complement.
///
/// An invalid parameter set (see [`Layout::new`]) fails the build of the
/// instantiation, not any runtime operation.
#[derive(Clone, Copy)]
pub struct Sfp<
    const BITS: usize,
    const SGN: usize,
    const INT: usize,
    const FRAC: usize,
    const ZERO: usize,
    const BASE: i32,
> {
    raw: i64,
}

impl<const BITS: usize, const SGN: usize, const INT: usize, const FRAC: usize, const ZERO: usize, const BASE: i32>
    Sfp<BITS, SGN, INT, FRAC, ZERO, BASE>
{
    /// The layout described by the const parameters, validated once.
    pub const LAYOUT: Layout = Layout::new(BITS, SGN, INT, FRAC, ZERO, BASE);

    /// Largest representable value.
    pub const MAX: Self = Self { raw: Self::LAYOUT.max_raw() };
    /// Smallest representable value.
    pub const MIN: Self = Self { raw: Self::LAYOUT.min_raw() };

    /// Zero.
    pub fn new() -> Self {
        // mentioning LAYOUT forces the parameter check for this instantiation
        let _ = Self::LAYOUT;
        Self { raw: 0 }
    }

    /// Rounds to the nearest raw value at this layout's scale, then forces
    /// the reserved low bits to 0. Total: any finite input yields a valid
    /// encoding (magnitude overflow is the caller's contract).
    ///
    /// Rounding is round-half-away-from-zero.
    pub fn from_f64(value: f64) -> Self {
        let scale = FloatCore::powi(2.0f64, Self::LAYOUT.scale_exponent());
        let raw = FloatCore::round(value * scale) as i64;
        Self { raw: raw & !Self::LAYOUT.zero_mask() }
    }

    /// Bit-exact construction from a raw integer.
    ///
    /// The `BITS`-wide field is sign-extended from bit `BITS - 1`; anything
    /// above it in the input is ignored. With `SGN == 1` every field pattern
    /// is accepted (this is the wraparound reinterpretation path); with
    /// `SGN > 1` a non-uniform sign field is [`Error::InvalidSignBits`].
    /// A nonzero reserved bit is [`Error::InvalidZeroBits`].
    pub fn try_from_raw(raw: i64) -> Result<Self> {
        let raw = Self::LAYOUT.sign_extend(raw);
        if SGN > 1 && !Self::LAYOUT.sign_bits_valid(raw) {
            return Err(Error::InvalidSignBits);
        }
        if ZERO > 0 && !Self::LAYOUT.zero_bits_valid(raw) {
            return Err(Error::InvalidZeroBits);
        }
        Ok(Self { raw })
    }

    /// Skips validation; callers guarantee `raw` is a valid, sign-extended
    /// encoding of this layout (conversion shifts and saturation bounds are).
    pub(crate) const fn from_raw_unchecked(raw: i64) -> Self {
        Self { raw }
    }

    /// The denoted real number, `raw * 2^-E`.
    ///
    /// Exact whenever the raw value fits the f64 mantissa.
    pub fn value(&self) -> f64 {
        self.raw as f64 * FloatCore::powi(2.0f64, -Self::LAYOUT.scale_exponent())
    }

    /// Round-and-mask assignment, cf. [`Self::from_f64`].
    pub fn set_value(&mut self, value: f64) {
        *self = Self::from_f64(value);
    }

    /// The stored raw integer, unmodified.
    pub fn raw_value(&self) -> i64 {
        self.raw
    }

    /// Validating raw assignment, cf. [`Self::try_from_raw`].
    pub fn try_set_raw_value(&mut self, raw: i64) -> Result<()> {
        *self = Self::try_from_raw(raw)?;
        Ok(())
    }

    /// The value of one least-significant fractional step, `2^-E`.
    pub fn resolution() -> f64 {
        FloatCore::powi(2.0f64, -Self::LAYOUT.scale_exponent())
    }
}
