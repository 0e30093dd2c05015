/// Expands to a fully spelled-out [`Sfp`][crate::Sfp] type, filling in
/// defaults for the omitted layout parameters: one sign bit, no integer
/// bits, all remaining bits fractional, no reserved bits, base 0.
///
/// `sfp!(16)` is `Sfp<16, 1, 0, 15, 0, 0>` (Q15); `sfp!(16, 1, 1)` is
/// `Sfp<16, 1, 1, 14, 0, 0>`.
///
/// ```
/// use sfp::sfp;
///
/// let n: sfp!(16) = sfp::Sfp::from_f64(0.1);
/// let m: sfp!(16, 1, 0, 15) = sfp::Sfp::from_f64(0.1);
/// assert_eq!(n.raw_value(), m.raw_value());
/// ```
#[macro_export]
macro_rules! sfp {
    ($bits:expr) => {
        $crate::sfp!($bits, 1)
    };
    ($bits:expr, $sgn:expr) => {
        $crate::sfp!($bits, $sgn, 0)
    };
    ($bits:expr, $sgn:expr, $int:expr) => {
        $crate::Sfp<{ $bits }, { $sgn }, { $int }, { $bits - $sgn - $int }, 0, 0>
    };
    ($bits:expr, $sgn:expr, $int:expr, $frac:expr) => {
        $crate::Sfp<{ $bits }, { $sgn }, { $int }, { $frac }, { $bits - $sgn - $int - $frac }, 0>
    };
    ($bits:expr, $sgn:expr, $int:expr, $frac:expr, $zero:expr) => {
        $crate::Sfp<{ $bits }, { $sgn }, { $int }, { $frac }, { $zero }, 0>
    };
    ($bits:expr, $sgn:expr, $int:expr, $frac:expr, $zero:expr, $base:expr) => {
        $crate::Sfp<{ $bits }, { $sgn }, { $int }, { $frac }, { $zero }, { $base }>
    };
}

#[cfg(test)]
mod test {
    #[test]
    fn default_parameters() {
        let a: sfp!(16) = crate::Sfp::from_f64(0.1);
        let b: crate::aliases::Q15 = crate::Sfp::from_f64(0.1);
        assert_eq!(a.raw_value(), b.raw_value());

        let c: sfp!(12, 3, 3, 3, 3, 3) = crate::Sfp::from_f64(0.05);
        assert_eq!(c.raw_value(), 0);

        let d: sfp!(16, 1, 0, 14) = crate::Sfp::from_f64(0.05);
        assert_eq!(d.raw_value() & 1, 0);
    }
}
