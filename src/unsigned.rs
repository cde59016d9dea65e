use num::{BigInt, Signed, ToPrimitive, Zero};
use crate::{BitVector, SignedInt};
use crate::core::{check_bounds, pow2, shift};
use crate::error::{Checked, Error, Result};
use crate::literal::Literal;

/// Check that a width is usable.
pub(crate) fn check_width(width: u32) -> Result<i32> {
  let high = i32::try_from(width).map_err(|_| Error::InvalidBounds { high: i32::MAX, low: 0 })?;
  check_bounds(high, 0)?;
  Ok(high)
}

/// An unsigned integer of a fixed width (`numeric_std.unsigned`).
/// Always has `low = 0` and a value in `0 .. 2^width`.
#[derive(Clone,Debug)]
pub struct UnsignedInt(pub(crate) BitVector);

bit_access!(UnsignedInt, 0);

impl UnsignedInt {

  /// Fit a computed value into `width` bits, wrapping (with a warning) if
  /// it does not fit.
  pub(crate) fn fit(value: BigInt, width: u32) -> Checked<UnsignedInt> {
    BitVector::fit(width as i32, 0, value, false).map(UnsignedInt)
  }

  fn build(value: Literal, width: Option<u32>) -> Result<Checked<UnsignedInt>> {
    let lit = value.to_integer(false)?;
    if lit.value.value.is_negative() {
      return Err(Error::NegativeUnsigned(lit.value.value))
    }
    let width = match width {
      Some(w) => { check_width(w)?; w }
      None    => lit.value.width
    };
    Ok(lit.and_then(|l| UnsignedInt::fit(l.value, width)))
  }

  /// The smallest unsigned integer holding `value`.
  pub fn new(value: impl Into<Literal>) -> Result<UnsignedInt> {
    Ok(UnsignedInt::build(value.into(), None)?.report())
  }

  /// An unsigned integer of the given width. A literal that does not fit is
  /// truncated with a warning.
  pub fn with_width(value: impl Into<Literal>, width: u32) -> Result<UnsignedInt> {
    Ok(UnsignedInt::build(value.into(), Some(width))?.report())
  }

  /// Like [`UnsignedInt::with_width`] but truncation is an error.
  pub fn with_width_exact(value: impl Into<Literal>, width: u32)
    -> Result<UnsignedInt> {
    UnsignedInt::build(value.into(), Some(width))?.strict()
  }

  /// Construct from explicit bounds; `low` must be 0.
  pub fn with_bounds(value: impl Into<Literal>, high: i32, low: i32)
    -> Result<UnsignedInt> {
    if low != 0 { return Err(Error::NonZeroLow(low)) }
    check_bounds(high, low)?;
    UnsignedInt::with_width(value, high as u32)
  }

  /// Copy the bits of another value into `width` bits and read them as
  /// unsigned. The source is sign or zero extended as needed.
  pub fn from_bits(src: &impl AsRef<BitVector>, width: u32) -> Result<UnsignedInt> {
    let src  = src.as_ref();
    let high = check_width(width)?;
    let bits = BitVector::from_raw(src.width() as i32, 0, src.value().clone(), src.is_signed());
    Ok(UnsignedInt(bits.resize(high, 0)?.reinterpret(false)))
  }

  pub fn zero(width: u32) -> Result<UnsignedInt> {
    UnsignedInt::with_width(0, width)
  }

  /// Exclusive upper bound, `2^width`.
  pub fn max(&self) -> BigInt { pow2(self.width()) }

  /// Inclusive lower bound, always 0.
  pub fn min(&self) -> BigInt { BigInt::zero() }

  pub fn to_bigint(&self) -> BigInt { self.value().clone() }

  pub fn to_u64(&self) -> Option<u64> { self.value().to_u64() }

  pub fn to_i64(&self) -> Option<i64> { self.value().to_i64() }

  /// The same number as a signed integer, one bit wider.
  pub fn to_signed(&self) -> SignedInt {
    SignedInt(BitVector::from_raw(self.high() + 1, 0, self.to_bigint(), true))
  }

  /// Change the width, zero extending or truncating. Truncating
  /// significant bits is reported as a warning.
  pub fn resize(&self, width: u32) -> Result<UnsignedInt> {
    Ok(UnsignedInt(self.0.resize(check_width(width)?, 0)?))
  }

  /// Like [`UnsignedInt::resize`] but losing bits is an error.
  pub fn try_resize(&self, width: u32) -> Result<UnsignedInt> {
    Ok(UnsignedInt(self.0.try_resize(check_width(width)?, 0)?))
  }

  /// Store `other` in this integer's width. Negative values wrap, with a
  /// warning. `other` is aligned by its bit positions, so fraction bits are
  /// dropped.
  pub fn assign_resized(&mut self, other: &impl AsRef<BitVector>) {
    let other = other.as_ref();
    let value = shift(other.value(), other.low());
    *self = UnsignedInt::fit(value, self.width()).report();
  }

  /// Negation is not defined for unsigned values.
  pub fn try_neg(&self) -> Result<SignedInt> { Err(Error::UnsignedNegation) }
}
