use num::{BigInt, ToPrimitive};
use crate::BitVector;
use crate::core::{check_bounds, pow2, shift};
use crate::error::{Checked, Error, Result};
use crate::literal::Literal;
use crate::unsigned::check_width;

/// A two's complement integer of a fixed width (`numeric_std.signed`).
/// Always has `low = 0`; the width is `high`.
#[derive(Clone,Debug)]
pub struct SignedInt(pub(crate) BitVector);

bit_access!(SignedInt, 0);

impl SignedInt {

  /// Fit a computed value into `width` bits, wrapping (with a warning) if
  /// it does not fit.
  pub(crate) fn fit(value: BigInt, width: u32) -> Checked<SignedInt> {
    BitVector::fit(width as i32, 0, value, true).map(SignedInt)
  }

  fn build(value: Literal, width: Option<u32>) -> Result<Checked<SignedInt>> {
    let lit   = value.to_integer(true)?;
    let width = match width {
      Some(w) => { check_width(w)?; w }
      None    => lit.value.width
    };
    Ok(lit.and_then(|l| SignedInt::fit(l.value, width)))
  }

  /// The smallest signed integer holding `value`. Bit patterns are read in
  /// two's complement, so `"1011"` is -5.
  pub fn new(value: impl Into<Literal>) -> Result<SignedInt> {
    Ok(SignedInt::build(value.into(), None)?.report())
  }

  /// A signed integer of the given width. A literal that does not fit is
  /// wrapped with a warning.
  pub fn with_width(value: impl Into<Literal>, width: u32) -> Result<SignedInt> {
    Ok(SignedInt::build(value.into(), Some(width))?.report())
  }

  /// Like [`SignedInt::with_width`] but wrapping is an error.
  pub fn with_width_exact(value: impl Into<Literal>, width: u32) -> Result<SignedInt> {
    SignedInt::build(value.into(), Some(width))?.strict()
  }

  /// Construct from explicit bounds; `low` must be 0.
  pub fn with_bounds(value: impl Into<Literal>, high: i32, low: i32)
    -> Result<SignedInt> {
    if low != 0 { return Err(Error::NonZeroLow(low)) }
    check_bounds(high, low)?;
    SignedInt::with_width(value, high as u32)
  }

  /// Copy the bits of another value into `width` bits and read them in
  /// two's complement. The source is sign or zero extended as needed.
  pub fn from_bits(src: &impl AsRef<BitVector>, width: u32) -> Result<SignedInt> {
    let src  = src.as_ref();
    let high = check_width(width)?;
    let bits = BitVector::from_raw(src.width() as i32, 0, src.value().clone(), src.is_signed());
    Ok(SignedInt(bits.resize(high, 0)?.reinterpret(true)))
  }

  pub fn zero(width: u32) -> Result<SignedInt> {
    SignedInt::with_width(0, width)
  }

  /// Exclusive upper bound, `2^(width-1)`.
  pub fn max(&self) -> BigInt { pow2(self.width() - 1) }

  /// Inclusive lower bound, `-2^(width-1)`.
  pub fn min(&self) -> BigInt { -pow2(self.width() - 1) }

  pub fn to_bigint(&self) -> BigInt { self.value().clone() }

  pub fn to_i64(&self) -> Option<i64> { self.value().to_i64() }

  /// Change the width, sign extending or truncating. Truncating
  /// significant bits is reported as a warning.
  pub fn resize(&self, width: u32) -> Result<SignedInt> {
    Ok(SignedInt(self.0.resize(check_width(width)?, 0)?))
  }

  /// Like [`SignedInt::resize`] but losing bits is an error.
  pub fn try_resize(&self, width: u32) -> Result<SignedInt> {
    Ok(SignedInt(self.0.try_resize(check_width(width)?, 0)?))
  }

  /// Store `other` in this integer's width, wrapping with a warning if it
  /// does not fit. `other` is aligned by its bit positions, so fraction bits
  /// are dropped (rounding toward negative infinity).
  pub fn assign_resized(&mut self, other: &impl AsRef<BitVector>) {
    let other = other.as_ref();
    let value = shift(other.value(), other.low());
    *self = SignedInt::fit(value, self.width()).report();
  }

  /// Negate; the result is one bit wider so it cannot overflow.
  pub fn try_neg(&self) -> Result<SignedInt> { Ok(-self) }

  /// Absolute value, one bit wider.
  pub fn abs(&self) -> SignedInt {
    let v = self.value();
    let v = if v < &BigInt::from(0) { -v } else { v.clone() };
    SignedInt(BitVector::from_raw(self.high() + 1, 0, v, true))
  }
}

impl std::ops::Neg for &SignedInt {
  type Output = SignedInt;
  fn neg(self) -> SignedInt {
    SignedInt(BitVector::from_raw(self.high() + 1, 0, -self.value(), true))
  }
}

impl std::ops::Neg for SignedInt {
  type Output = SignedInt;
  fn neg(self) -> SignedInt { -&self }
}

impl From<&crate::UnsignedInt> for SignedInt {
  fn from(x: &crate::UnsignedInt) -> Self { x.to_signed() }
}

impl From<crate::UnsignedInt> for SignedInt {
  fn from(x: crate::UnsignedInt) -> Self { x.to_signed() }
}


#[cfg(test)]
mod test {
  use num::BigInt;
  use crate::{BitVector, Error, FixedPoint, SignedInt, Warning};
  use crate::proptest::*;

  #[test]
  fn five() {
    let x = SignedInt::new(5).unwrap();
    assert_eq!((x.high(), x.low()), (4, 0));
    assert_eq!(x.max(), BigInt::from(8));
    assert_eq!(x.min(), BigInt::from(-8));
    assert_eq!(x.bin(), "0101");
    assert_eq!(SignedInt::new(-5).unwrap().bin(), "1011");
    assert!(x.is_signed());
  }

  #[test]
  fn patterns_are_twos_complement() {
    assert_eq!(SignedInt::new("1011").unwrap(), -5);
    assert_eq!(SignedInt::new("0111").unwrap(), 7);
    assert_eq!(SignedInt::with_width("1011", 8).unwrap().bin(), "11111011");
  }

  #[test]
  fn explicit_width_wraps() {
    assert_eq!(SignedInt::with_width(200, 5).unwrap(), 8);
    assert_eq!(SignedInt::with_width(-200, 5).unwrap(), -8);
    assert_eq!(SignedInt::with_width(12, 4).unwrap(), -4);
    assert_eq!(SignedInt::with_width_exact(12, 4).unwrap_err(),
               Error::PrecisionLoss(Warning::Wrapped { high: 4, low: 0 }));
    assert_eq!(SignedInt::with_bounds(1, 4, -2).unwrap_err(), Error::NonZeroLow(-2));
  }

  #[test]
  fn negation_widens() {
    let x = SignedInt::with_width(-8, 4).unwrap();
    let n = -&x;
    assert_eq!(n.width(), 5);
    assert_eq!(n, 8);
    assert_eq!(x.abs(), 8);
    assert_eq!(x.try_neg().unwrap(), 8);
  }

  #[test]
  fn resize_sign_extends() {
    let x = SignedInt::new(-3).unwrap();
    assert_eq!(x.resize(16).unwrap(), -3);
    assert_eq!(x.resize(16).unwrap().width(), 16);
    let y = SignedInt::with_width(100, 9).unwrap();
    assert_eq!(y.resize(4).unwrap(), 4);
    assert!(y.try_resize(4).is_err());
  }

  #[test]
  fn assignment_keeps_width() {
    let mut x = SignedInt::zero(4).unwrap();
    x.assign_resized(&SignedInt::new(9).unwrap());
    assert_eq!(x, -7);
    assert_eq!(x.width(), 4);
  }

  #[test]
  fn assignment_aligns_positions() {
    let mut x = SignedInt::zero(8).unwrap();
    x.assign_resized(&FixedPoint::new(1.5).unwrap());
    assert_eq!(x, 1);
    x.assign_resized(&FixedPoint::new(-1.25).unwrap());
    assert_eq!(x, -2);
    x.assign_resized(&BitVector::with_bounds(1, 4, 2).unwrap());
    assert_eq!(x, 4);
  }

  #[test]
  fn width_invariant() {
    do_test(signed, |x: SignedInt| {
      let half = BigInt::from(1) << (x.width() - 1) as usize;
      Some(x.low() == 0 && x.value() >= &-&half && x.value() < &half)
    })
  }
}
