use crate::{BitVector, FixedPoint, MathConfig, SignedInt, UnsignedInt};
use crate::error::Result;

/// The three arithmetic types. Code generators use this to pick the target
/// type (`unsigned`, `signed`, `sfixed`).
#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash)]
pub enum Kind { Unsigned, Signed, Fixed }

/// Operations shared by the arithmetic types.
pub trait Numeric: AsRef<BitVector> + Clone {

  const KIND: Kind;

  /// Result of negation.
  type Negated;

  /// The rounding and overflow policy, for types that have one.
  fn config(&self) -> Option<MathConfig>;

  /// Negate, widening by one bit. Fails for unsigned values.
  fn try_neg(&self) -> Result<Self::Negated>;

  /// The same number as a fixed point value, with the default config.
  fn to_fixed(&self) -> FixedPoint;

  fn kind(&self) -> Kind { Self::KIND }
}

impl Numeric for UnsignedInt {
  const KIND: Kind = Kind::Unsigned;
  type Negated = SignedInt;

  fn config(&self) -> Option<MathConfig> { None }

  fn try_neg(&self) -> Result<SignedInt> { UnsignedInt::try_neg(self) }

  /// Format `(width + 1, 0)`, so the value stays non-negative.
  fn to_fixed(&self) -> FixedPoint { self.to_signed().to_fixed() }
}

impl Numeric for SignedInt {
  const KIND: Kind = Kind::Signed;
  type Negated = SignedInt;

  fn config(&self) -> Option<MathConfig> { None }

  fn try_neg(&self) -> Result<SignedInt> { SignedInt::try_neg(self) }

  fn to_fixed(&self) -> FixedPoint {
    FixedPoint::from_parts(self.high(), 0, self.value().clone(), MathConfig::default())
  }
}

impl Numeric for FixedPoint {
  const KIND: Kind = Kind::Fixed;
  type Negated = FixedPoint;

  fn config(&self) -> Option<MathConfig> { Some(self.config) }

  fn try_neg(&self) -> Result<FixedPoint> { FixedPoint::try_neg(self) }

  fn to_fixed(&self) -> FixedPoint { self.clone() }
}

impl FixedPoint {

  /// Copy any numeric value into format `(high, low)` under `config`.
  pub fn convert(x: &impl Numeric, high: i32, low: i32, config: &MathConfig)
    -> Result<FixedPoint> {
    x.to_fixed().resize_with(high, low, config)
  }
}

impl From<&UnsignedInt> for FixedPoint {
  fn from(x: &UnsignedInt) -> Self { x.to_fixed() }
}

impl From<&SignedInt> for FixedPoint {
  fn from(x: &SignedInt) -> Self { x.to_fixed() }
}
