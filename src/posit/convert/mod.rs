use super::*;

/// Value-to-value conversion that may *round*, using the rounding rules of the [posit standard].
/// It is the reciprocal of [`RoundInto`].
///
/// The interface is identical to the standard [`From`], but — unlike the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from) — these
/// conversions are _not necessarily lossless_: the result is the nearest representable value in
/// the target type.
///
/// The usual guidelines for [`From`] apply: prefer implementing [`RoundFrom`] over [`RoundInto`]
/// (the latter comes for free via a blanket impl), and prefer [`RoundInto`] in generic trait
/// bounds. There is also a blanket `RoundFrom<T> for T`.
///
/// # Rounding
///
/// "Rounding" in this crate always means the same thing:
///
///   - If the value is greater in absolute value than the biggest value of the target type,
///     round to it (i.e. never overflow to NaR).
///   - If the value is nonzero and smaller in absolute value than the smallest positive value of
///     the target type, round to it (i.e. never underflow to zero).
///   - Otherwise, round to the nearest representable value, and ties to the even bit pattern.
///
/// # Examples
///
/// Rounding from ints and floats:
/// ```
/// # use posit_arith::*;
/// assert!(p16::round_from(1) == p16::round_from(1.00000001));
/// assert!(p32::round_from(1) <  p32::round_from(1.00000001));
///
/// assert!(p32::round_from(f64::NAN).is_nar());
/// ```
///
/// Rounding to ints and floats:
/// ```
/// # use posit_arith::*;
/// assert_eq!(f32::round_from(p16::MIN_POSITIVE), 1.3877788e-17);
/// assert_eq!(i64::round_from(p8::MAX), 1 << 24);
///
/// assert!(f64::round_from(p32::NAR).is_nan());
/// ```
///
/// [posit standard]: https://posithub.org/docs/posit_standard-2.pdf#section.4
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding to nearest (ties to even bit pattern)
  /// if the value is not representable exactly.
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Value-to-value conversion that may *round*, using the rounding rules of the [posit standard].
/// It is the reciprocal of [`RoundFrom`]: see that trait for the full description of the
/// rounding rules.
///
/// As with [`Into`], do not implement this trait directly: implement [`RoundFrom`] and this one
/// comes for free.
///
/// # Examples
///
/// ```
/// # use posit_arith::*;
/// assert_eq!(p16::ONE.next(), 1.0004883_f64.round_into());
///
/// let x: f64 = p8::MIN_POSITIVE.round_into();
/// assert_eq!(x, 5.960464477539063e-8);
/// ```
///
/// [posit standard]: https://posithub.org/docs/posit_standard-2.pdf#section.4
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) target type, rounding to nearest (ties to
  /// even bit pattern) if the value is not representable exactly.
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

mod float;
mod int;
