// Signed fixed point numbers (`fixed_pkg.sfixed`).

use num::{BigInt, Signed, ToPrimitive, Zero};
use crate::{BitVector, MathConfig, Overflow, Rounding};
use crate::core::{bit_length, check_bounds, min_width, pow2, shift, wrap};
use crate::error::{Checked, Error, Result, Warning};
use crate::literal::{decompose, parse_pattern, FloatParts, Literal};
use crate::resize::{resize_fixed, round_shift};

/// A signed number with bits at positions `low .. high`, i.e. `high` integer
/// bits (including the sign) and `-low` fraction bits. The payload is read
/// in two's complement and scaled by `2^low`.
///
/// Every value carries the [`MathConfig`] it was built (or last resized)
/// with. Arithmetic results are brought into their format under the config
/// of the left operand.
#[derive(Clone,Debug)]
pub struct FixedPoint {
  pub(crate) bits:   BitVector,
  pub(crate) config: MathConfig
}

bit_access!(FixedPoint, bits);

/// A literal in the smallest format that holds it exactly.
enum Exact {
  Finite { payload: BigInt, high: i32, low: i32 },
  Infinite { negative: bool }
}

fn exact(lit: Literal) -> Result<Exact> {
  match lit {
    Literal::Int(v) => {
      let high = min_width(&v, true) as i32;
      Ok(Exact::Finite { payload: v, high, low: 0 })
    }

    Literal::Float(x) => match decompose(x)? {
      FloatParts::Finite { mantissa, exponent } => {
        let low     = exponent.min(0);
        let payload = shift(&mantissa, exponent - low);
        let high    = low + min_width(&payload, true) as i32;
        Ok(Exact::Finite { payload, high, low })
      }
      FloatParts::Infinite { negative } => Ok(Exact::Infinite { negative })
    },

    Literal::Bits(s) => {
      let p    = parse_pattern(&s, true)?;
      let low  = -(p.frac as i32);
      let high = low + p.width as i32;
      Ok(Exact::Finite { payload: wrap(&BigInt::from(p.bits), p.width, true), high, low })
    }
  }
}

/// `2^e` as an `f64`, built from its bits so no rounding happens.
fn exp2(e: i64) -> f64 {
  if e > 1023 { f64::INFINITY }
  else if e >= -1022 { f64::from_bits(((e + 1023) as u64) << 52) }
  else if e >= -1074 { f64::from_bits(1_u64 << (e + 1074)) }
  else { 0.0 }
}

/// The largest (`up`) or smallest payload of a signed `width` bit number.
pub(crate) fn saturated(width: u32, up: bool) -> BigInt {
  let top = pow2(width - 1);
  if up { top - 1 } else { -top }
}

impl FixedPoint {

  /// Callers have already checked the bounds. The payload is wrapped
  /// silently.
  pub(crate) fn from_parts(high: i32, low: i32, payload: BigInt, config: MathConfig)
    -> FixedPoint {
    FixedPoint { bits: BitVector::from_raw(high, low, payload, true), config }
  }

  fn build(lit: Literal, format: Option<(i32,i32)>, config: MathConfig)
    -> Result<Checked<FixedPoint>> {
    let src = exact(lit)?;
    let (high, low) = match (format, &src) {
      (Some((h, l)), _) => { check_bounds(h, l)?; (h, l) }
      (None, Exact::Finite { high, low, .. }) => (*high, *low),
      (None, Exact::Infinite { .. }) => return Err(Error::NonFinite)
    };
    let payload = match src {
      Exact::Finite { payload, high: sh, low: sl } =>
        resize_fixed(&payload, sh, sl, high, low, &config),
      Exact::Infinite { negative } =>
        Checked::warn(saturated((high - low) as u32, !negative), Warning::Infinite)
    };
    Ok(payload.map(|v| FixedPoint::from_parts(high, low, v, config)))
  }

  /// The smallest format holding `value` exactly, with the default config.
  /// Bit strings may contain one `.` marking the binary point, so
  /// `"0101.10"` is 5.5 in format `(4, -2)`.
  pub fn new(value: impl Into<Literal>) -> Result<FixedPoint> {
    FixedPoint::with_config(value, MathConfig::default())
  }

  pub fn with_config(value: impl Into<Literal>, config: MathConfig) -> Result<FixedPoint> {
    Ok(FixedPoint::build(value.into(), None, config)?.report())
  }

  /// `value` in format `(high, low)`, rounded and saturated per the default
  /// config. Infinities saturate with a warning.
  pub fn with_format(value: impl Into<Literal>, high: i32, low: i32) -> Result<FixedPoint> {
    FixedPoint::with_format_config(value, high, low, MathConfig::default())
  }

  pub fn with_format_config( value: impl Into<Literal>, high: i32, low: i32
                           , config: MathConfig
                           ) -> Result<FixedPoint> {
    Ok(FixedPoint::build(value.into(), Some((high, low)), config)?.report())
  }

  /// Like [`FixedPoint::with_format_config`] but overflow is an error.
  pub fn with_format_exact( value: impl Into<Literal>, high: i32, low: i32
                          , config: MathConfig
                          ) -> Result<FixedPoint> {
    FixedPoint::build(value.into(), Some((high, low)), config)?.strict()
  }

  /// A raw payload in format `(high, low)`: the number is
  /// `payload * 2^low`. A payload that does not fit wraps with a warning.
  pub fn from_payload(payload: BigInt, high: i32, low: i32, config: MathConfig)
    -> Result<FixedPoint> {
    check_bounds(high, low)?;
    let bits = BitVector::fit(high, low, payload, true).report();
    Ok(FixedPoint { bits, config })
  }

  pub fn config(&self)     -> MathConfig { self.config }
  pub fn overflow(&self)   -> Overflow   { self.config.overflow() }
  pub fn rounding(&self)   -> Rounding   { self.config.rounding() }
  pub fn guard_bits(&self) -> u32        { self.config.guard_bits() }

  /// Largest number in this format.
  pub fn max_value(&self) -> FixedPoint {
    FixedPoint::from_parts(self.high(), self.low(), saturated(self.width(), true), self.config)
  }

  /// Smallest number in this format.
  pub fn min_value(&self) -> FixedPoint {
    FixedPoint::from_parts(self.high(), self.low(), saturated(self.width(), false), self.config)
  }

  pub(crate) fn resized(&self, high: i32, low: i32, config: &MathConfig)
    -> Result<Checked<FixedPoint>> {
    check_bounds(high, low)?;
    Ok(resize_fixed(self.value(), self.high(), self.low(), high, low, config)
         .map(|v| FixedPoint::from_parts(high, low, v, *config)))
  }

  /// Move into format `(high, low)` using this value's own config.
  pub fn resize(&self, high: i32, low: i32) -> Result<FixedPoint> {
    self.resize_with(high, low, &self.config)
  }

  /// Move into format `(high, low)`, rounding and handling overflow per
  /// `config`. The result keeps `config`.
  pub fn resize_with(&self, high: i32, low: i32, config: &MathConfig) -> Result<FixedPoint> {
    Ok(self.resized(high, low, config)?.report())
  }

  /// Like [`FixedPoint::resize_with`] but saturating or wrapping is an
  /// error. Rounding is not.
  pub fn try_resize_with(&self, high: i32, low: i32, config: &MathConfig)
    -> Result<FixedPoint> {
    self.resized(high, low, config)?.strict()
  }

  /// Move into the format of `other`, under `other`'s config.
  pub fn resize_like(&self, other: &FixedPoint) -> FixedPoint {
    let v = resize_fixed(self.value(), self.high(), self.low(),
                         other.high(), other.low(), &other.config);
    v.map(|v| FixedPoint::from_parts(other.high(), other.low(), v, other.config))
     .report()
  }

  /// Store `other` in this value's format, under this value's config.
  pub fn assign_resized(&mut self, other: &FixedPoint) {
    let v = resize_fixed(other.value(), other.high(), other.low(),
                         self.high(), self.low(), &self.config).report();
    self.bits.store(v);
  }

  /// Round toward negative infinity, to format `(max(high, 2), 0)`.
  pub fn floor(&self) -> FixedPoint {
    let truncate = self.config.with_rounding(Rounding::Truncate);
    let high     = self.high().max(2);
    let v = resize_fixed(self.value(), self.high(), self.low(), high, 0, &truncate);
    FixedPoint::from_parts(high, 0, v.report(), self.config)
  }

  /// Absolute value, one integer bit wider.
  pub fn abs(&self) -> FixedPoint {
    FixedPoint::from_parts(self.high() + 1, self.low(), self.value().abs(), self.config)
  }

  /// Negation never fails for signed values.
  pub fn try_neg(&self) -> Result<FixedPoint> { Ok(-self) }

  /// Multiply by `2^n`: same bits, both bounds move by `n`.
  pub fn scalb(&self, n: i32) -> FixedPoint {
    FixedPoint::from_parts(self.high() + n, self.low() + n, self.value().clone(), self.config)
  }

  /// The integer part, truncated toward zero.
  pub fn to_bigint(&self) -> BigInt {
    let v = self.value();
    if self.low() >= 0 { return shift(v, self.low()) }
    if v.is_negative() { -shift(&-v, self.low()) } else { shift(v, self.low()) }
  }

  /// The nearest `f64`, ties to even. Values beyond the `f64` range become
  /// infinite.
  pub fn to_f64(&self) -> f64 {
    let low  = i64::from(self.low());
    let bits = i64::from(bit_length(self.value()));
    // At most 53 significant bits, none below 2^-1074.
    let drop = (bits - 53).max(-1074 - low).max(0);
    let m    = round_shift(self.value(), drop as u32);
    if m.is_zero() { return 0.0 }
    m.to_f64().unwrap_or(f64::NAN) * exp2(low + drop)
  }
}

impl std::ops::Neg for &FixedPoint {
  type Output = FixedPoint;
  fn neg(self) -> FixedPoint {
    FixedPoint::from_parts(self.high() + 1, self.low(), -self.value(), self.config)
  }
}

impl std::ops::Neg for FixedPoint {
  type Output = FixedPoint;
  fn neg(self) -> FixedPoint { -&self }
}
