use core::fmt;

/// The ways a raw bit pattern or a layout conversion can be invalid.
///
/// All of these are contract violations on the caller's side; the library
/// never swallows or logs them, they surface at the detecting call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// A directly assigned raw value whose redundant sign bits are not all
    /// the same value (only possible for layouts with more than one sign bit).
    InvalidSignBits,
    /// A directly assigned raw value with a nonzero reserved low bit.
    InvalidZeroBits,
    /// A base-exponent relabeling that would need a negative integer or
    /// fractional bit count.
    InsufficientDegreesOfFreedom,
    /// Relabeled integer/fractional bit counts that differ from the declared
    /// target layout.
    DegreesOfFreedomMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSignBits => write!(f, "all sign bits should be the same value"),
            Error::InvalidZeroBits => write!(f, "all zero bits should be 0"),
            Error::InsufficientDegreesOfFreedom => {
                write!(f, "base relabeling needs a negative integer or fractional bit count")
            }
            Error::DegreesOfFreedomMismatch => {
                write!(f, "relabeled integer/fractional bit counts do not match the target layout")
            }
        }
    }
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
