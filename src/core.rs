// Bit vectors with explicit bit bounds.

use num::{BigInt, Integer, One, Signed, Zero};
use crate::error::{Checked, Error, Result, Warning};
use crate::literal::Literal;

/// `2^n`
pub(crate) fn pow2(n: u32) -> BigInt { BigInt::one() << n as usize }

/// Multiply by `2^n`. Negative amounts shift right, rounding toward -inf.
pub(crate) fn shift(v: &BigInt, n: i32) -> BigInt {
  if n >= 0 { v << n as usize } else { v >> n.unsigned_abs() as usize }
}

/// The low `width` bits of `v`, as a non-negative number.
pub(crate) fn pattern_of(v: &BigInt, width: u32) -> BigInt {
  v.mod_floor(&pow2(width))
}

/// Reduce `v` modulo `2^width`, reading the result in two's complement
/// when `signed`.
pub(crate) fn wrap(v: &BigInt, width: u32, signed: bool) -> BigInt {
  let p = pattern_of(v, width);
  if signed && width > 0 && p >= pow2(width - 1) { p - pow2(width) } else { p }
}

/// Does `v` fit in `width` bits without wrapping.
pub(crate) fn fits(v: &BigInt, width: u32, signed: bool) -> bool {
  if signed {
    if width == 0 { return v.is_zero() }
    let half = pow2(width - 1);
    *v >= -&half && *v < half
  } else {
    !v.is_negative() && *v < pow2(width)
  }
}

/// Number of bits in the magnitude of `v`.
pub(crate) fn bit_length(v: &BigInt) -> u32 { v.magnitude().bits() as u32 }

/// Smallest width that holds `v`. Signed widths keep one extra bit for
/// the sign.
pub(crate) fn min_width(v: &BigInt, signed: bool) -> u32 {
  if signed { bit_length(v) + 1 } else { bit_length(v).max(1) }
}

pub(crate) fn check_bounds(high: i32, low: i32) -> Result<()> {
  if high > low { Ok(()) } else { Err(Error::InvalidBounds { high, low }) }
}


/// A fixed width vector of bits occupying positions `low .. high`.
///
///   * `high` is exclusive and `low` is inclusive; `low` may be negative.
///   * `value` holds exactly `high - low` bits. For signed vectors it is
///     the two's complement reading of those bits, otherwise it is the
///     non-negative pattern.
///   * Mutation never changes the width: results are masked back into the
///     vector, like a hardware register.
#[derive(Clone,Debug)]
pub struct BitVector {
  high:   i32,
  low:    i32,
  value:  BigInt,
  signed: bool,
  exact:  bool
}

impl BitVector {

  /// Build a vector, silently wrapping `value` into its width.
  /// Callers have already checked `high > low`.
  pub(crate) fn from_raw(high: i32, low: i32, value: BigInt, signed: bool)
    -> BitVector {
    let w = (high - low) as u32;
    let value = if fits(&value, w, signed) { value } else { wrap(&value, w, signed) };
    BitVector { high, low, value, signed, exact: true }
  }

  /// Build a vector, reporting a warning if `value` had to be wrapped.
  pub(crate) fn fit(high: i32, low: i32, value: BigInt, signed: bool)
    -> Checked<BitVector> {
    let lossless = fits(&value, (high - low) as u32, signed);
    let result   = BitVector::from_raw(high, low, value, signed);
    if lossless { Checked::ok(result) }
    else { Checked::warn(result, Warning::Wrapped { high, low }) }
  }

  /// A vector of the smallest width holding the literal, with `low = 0`.
  /// Negative integers get their two's complement pattern.
  pub fn new(value: impl Into<Literal>) -> Result<BitVector> {
    let lit = value.into().to_integer(false)?.report();
    Ok(BitVector::from_raw(lit.width as i32, 0, lit.value, false))
  }

  /// A vector occupying positions `low .. high`. A literal that does not
  /// fit is truncated to the low bits, with a warning.
  pub fn with_bounds(value: impl Into<Literal>, high: i32, low: i32)
    -> Result<BitVector> {
    Ok(BitVector::bounded(value.into(), high, low)?.report())
  }

  /// Like [`BitVector::with_bounds`] but truncation is an error.
  pub fn with_bounds_exact(value: impl Into<Literal>, high: i32, low: i32)
    -> Result<BitVector> {
    BitVector::bounded(value.into(), high, low)?.strict()
  }

  fn bounded(value: Literal, high: i32, low: i32) -> Result<Checked<BitVector>> {
    check_bounds(high, low)?;
    let w = (high - low) as u32;
    Ok(value.to_integer(false)?.and_then(|lit| {
      // A negative literal keeps its two's complement pattern.
      let lossless = fits(&lit.value, w, false) || fits(&lit.value, w, true);
      let result   = BitVector::from_raw(high, low, lit.value, false);
      Checked::lossy(result, (!lossless).then_some(Warning::Wrapped { high, low }))
    }))
  }

  /// All zeros.
  pub fn zero(high: i32, low: i32) -> Result<BitVector> {
    check_bounds(high, low)?;
    Ok(BitVector::from_raw(high, low, BigInt::zero(), false))
  }

  /// Exclusive upper bit position.
  pub fn high(&self) -> i32 { self.high }

  /// Inclusive lower bit position.
  pub fn low(&self) -> i32 { self.low }

  /// Number of bits.
  pub fn width(&self) -> u32 { (self.high - self.low) as u32 }

  /// The stored payload.
  pub fn value(&self) -> &BigInt { &self.value }

  pub fn is_signed(&self) -> bool { self.signed }

  /// False when this vector came out of a bitwise operation whose operands
  /// had to be widened beyond both of their formats.
  pub fn is_exact(&self) -> bool { self.exact }

  /// The bits as a non-negative number.
  pub fn pattern(&self) -> BigInt {
    if self.value.is_negative() { pattern_of(&self.value, self.width()) }
    else { self.value.clone() }
  }

  /// Is the most significant bit set.
  pub fn msb(&self) -> bool {
    self.value.is_negative() || self.value >= pow2(self.width() - 1)
  }

  /// Same format and signedness, new payload (wrapped silently).
  pub(crate) fn with_value(&self, value: BigInt) -> BitVector {
    BitVector::from_raw(self.high, self.low, value, self.signed)
  }

  /// Same bits, read with the given signedness.
  pub(crate) fn reinterpret(&self, signed: bool) -> BitVector {
    BitVector::from_raw(self.high, self.low, self.pattern(), signed)
  }

  pub(crate) fn inexact(mut self) -> BitVector {
    self.exact = false;
    self
  }

  /// Overwrite the payload, keeping the format.
  pub(crate) fn store(&mut self, value: BigInt) {
    let w = self.width();
    self.value = if fits(&value, w, self.signed) { value }
                 else { wrap(&value, w, self.signed) };
  }
}

impl AsRef<BitVector> for BitVector {
  fn as_ref(&self) -> &BitVector { self }
}

/// A single bit.
impl From<bool> for BitVector {
  fn from(b: bool) -> Self {
    BitVector::from_raw(1, 0, BigInt::from(u8::from(b)), false)
  }
}


#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn helpers() {
    assert_eq!(wrap(&BigInt::from(-200), 5, true), BigInt::from(-8));
    assert_eq!(wrap(&BigInt::from(7), 3, true), BigInt::from(-1));
    assert_eq!(wrap(&BigInt::from(-1), 3, false), BigInt::from(7));
    assert!(fits(&BigInt::from(-8), 4, true));
    assert!(!fits(&BigInt::from(8), 4, true));
    assert!(!fits(&BigInt::from(-1), 4, false));
    assert_eq!(min_width(&BigInt::from(5), true), 4);
    assert_eq!(min_width(&BigInt::from(-5), true), 4);
    assert_eq!(min_width(&BigInt::from(0), true), 1);
    assert_eq!(min_width(&BigInt::from(0), false), 1);
    assert_eq!(shift(&BigInt::from(-5), -1), BigInt::from(-3));
  }

  #[test]
  fn inferred_width() {
    let v = BitVector::new(0x3b).unwrap();
    assert_eq!((v.high(), v.low(), v.width()), (6, 0, 6));
    assert!(!v.is_signed());

    let v = BitVector::new("1100_1").unwrap();
    assert_eq!(v.width(), 5);
    assert_eq!(v.value(), &BigInt::from(25));

    let v = BitVector::new(-5).unwrap();
    assert_eq!(v.width(), 4);
    assert_eq!(v.value(), &BigInt::from(11));
  }

  #[test]
  fn explicit_bounds() {
    let v = BitVector::with_bounds(5, 8, 4).unwrap();
    assert_eq!((v.high(), v.low(), v.width()), (8, 4, 4));
    assert_eq!(v.value(), &BigInt::from(5));

    // Truncation is a warning, not an error.
    let v = BitVector::with_bounds(0x1ff, 4, 0).unwrap();
    assert_eq!(v.value(), &BigInt::from(0xf));
    assert_eq!(BitVector::with_bounds_exact(0x1ff, 4, 0),
               Err(Error::PrecisionLoss(Warning::Wrapped { high: 4, low: 0 })));

    // A negative literal that fits as a pattern is not a loss.
    let v = BitVector::with_bounds_exact(-1, 4, 0).unwrap();
    assert_eq!(v.value(), &BigInt::from(15));
  }

  #[test]
  fn bad_bounds() {
    assert_eq!(BitVector::with_bounds(1, 3, 3).unwrap_err(),
               Error::InvalidBounds { high: 3, low: 3 });
    assert!(BitVector::zero(-2, 0).is_err());
    assert!(matches!(BitVector::new("12"), Err(Error::MalformedLiteral { .. })));
  }

  #[test]
  fn msb_and_pattern() {
    let v = BitVector::from_raw(4, 0, BigInt::from(-3), true);
    assert!(v.msb());
    assert_eq!(v.pattern(), BigInt::from(13));
    assert_eq!(v.reinterpret(false).value(), &BigInt::from(13));
    assert!(!BitVector::from(false).msb());
  }
}
