use core::{cmp::Ordering, convert::TryFrom, fmt};

use super::Sfp;
use crate::Error;

/// Comparison is by denoted value, so numbers of different layouts compare
/// meaningfully. Two layouts can encode the same real number with different
/// raw bits.
impl<
        const B1: usize, const S1: usize, const I1: usize, const F1: usize, const Z1: usize, const E1: i32,
        const B2: usize, const S2: usize, const I2: usize, const F2: usize, const Z2: usize, const E2: i32,
    > PartialEq<Sfp<B2, S2, I2, F2, Z2, E2>> for Sfp<B1, S1, I1, F1, Z1, E1>
{
    fn eq(&self, other: &Sfp<B2, S2, I2, F2, Z2, E2>) -> bool {
        self.value() == other.value()
    }
}

impl<
        const B1: usize, const S1: usize, const I1: usize, const F1: usize, const Z1: usize, const E1: i32,
        const B2: usize, const S2: usize, const I2: usize, const F2: usize, const Z2: usize, const E2: i32,
    > PartialOrd<Sfp<B2, S2, I2, F2, Z2, E2>> for Sfp<B1, S1, I1, F1, Z1, E1>
{
    fn partial_cmp(&self, other: &Sfp<B2, S2, I2, F2, Z2, E2>) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }
}

impl<const B: usize, const S: usize, const I: usize, const F: usize, const Z: usize, const E: i32> Default
    for Sfp<B, S, I, F, Z, E>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const B: usize, const S: usize, const I: usize, const F: usize, const Z: usize, const E: i32> TryFrom<i64>
    for Sfp<B, S, I, F, Z, E>
{
    type Error = Error;

    /// Enforces the sign-bit and zero-bit invariants, cf. [`Sfp::try_from_raw`].
    fn try_from(raw: i64) -> crate::Result<Self> {
        Self::try_from_raw(raw)
    }
}

#[cfg(not(feature = "hex-debug"))]
impl<const B: usize, const S: usize, const I: usize, const F: usize, const Z: usize, const E: i32> fmt::Debug
    for Sfp<B, S, I, F, Z, E>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sfp<{}, {}, {}, {}, {}, {}>({})", B, S, I, F, Z, E, self.raw)
    }
}

#[cfg(feature = "hex-debug")]
impl<const B: usize, const S: usize, const I: usize, const F: usize, const Z: usize, const E: i32> fmt::Debug
    for Sfp<B, S, I, F, Z, E>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sfp<{}, {}, {}, {}, {}, {}>({})",
            B, S, I, F, Z, E,
            delog::hex_str!(&self.raw.to_be_bytes()),
        )
    }
}
