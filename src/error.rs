use num::BigInt;

/// Configuration errors. These always reach the immediate caller.
#[derive(Clone,Debug,PartialEq,Eq,thiserror::Error)]
#[non_exhaustive]
pub enum Error {
  #[error("invalid bounds: high ({high}) must be greater than low ({low})")]
  InvalidBounds { high: i32, low: i32 },

  #[error("integer types require low == 0, got low = {0}")]
  NonZeroLow(i32),

  #[error("negative value {0} cannot be stored in an unsigned type")]
  NegativeUnsigned(BigInt),

  #[error("unsigned values cannot be negated")]
  UnsignedNegation,

  #[error("malformed literal {literal:?}: {reason}")]
  MalformedLiteral { literal: String, reason: &'static str },

  #[error("non-finite float literal cannot be represented here")]
  NonFinite,

  #[error("bit index {index} out of range [{low}, {high})")]
  IndexOutOfRange { index: i32, high: i32, low: i32 },

  #[error("slice [{i}:{j}] requires i > j")]
  SliceOrder { i: i32, j: i32 },

  #[error("slice of width {expected} cannot be assigned a value of width {found}")]
  LengthMismatch { expected: u32, found: u32 },

  #[error("invalid shift amount: {0}")]
  ShiftAmount(&'static str),

  #[error("division by zero")]
  DivisionByZero,

  #[error("precision lost: {0}")]
  PrecisionLoss(Warning),
}

pub type Result<T> = std::result::Result<T, Error>;


/// Precision-loss conditions. By default these are reported as `tracing`
/// events under the `hwnum::precision` target and the operation carries on.
#[derive(Clone,Debug,PartialEq,Eq,thiserror::Error)]
#[non_exhaustive]
pub enum Warning {
  #[error("significant bits dropped when fitting a value into ({high}, {low})")]
  Wrapped { high: i32, low: i32 },

  #[error("value saturated to the bounds of ({high}, {low})")]
  Saturated { high: i32, low: i32 },

  #[error("fractional part of a float literal dropped")]
  FractionDropped,

  #[error("infinite literal saturated")]
  Infinite,

  #[error("division by zero produced a saturated result")]
  DivisionByZero,
}

impl Warning {
  fn kind(&self) -> &'static str {
    match self {
      Warning::Wrapped { .. }   => "wrapped",
      Warning::Saturated { .. } => "saturated",
      Warning::FractionDropped  => "fraction_dropped",
      Warning::Infinite         => "infinite",
      Warning::DivisionByZero   => "division_by_zero",
    }
  }
}


/// A value together with the precision-loss condition (if any) that
/// happened while computing it.
#[must_use]
#[derive(Clone,Debug)]
pub(crate) struct Checked<T> {
  pub value:   T,
  pub warning: Option<Warning>
}

impl<T> Checked<T> {

  pub fn ok(value: T) -> Self { Checked { value, warning: None } }

  pub fn warn(value: T, warning: Warning) -> Self {
    Checked { value, warning: Some(warning) }
  }

  pub fn lossy(value: T, warning: Option<Warning>) -> Self {
    Checked { value, warning }
  }

  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
    Checked { value: f(self.value), warning: self.warning }
  }

  /// Chain a second lossy step. The first warning wins.
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Checked<U>) -> Checked<U> {
    let next = f(self.value);
    Checked { value: next.value, warning: self.warning.or(next.warning) }
  }

  /// Emit the warning on the side channel and keep the value.
  pub fn report(self) -> T {
    if let Some(w) = &self.warning {
      tracing::warn!(target: "hwnum::precision", kind = w.kind(), "{}", w);
    }
    self.value
  }

  /// Treat any warning as an error.
  pub fn strict(self) -> Result<T> {
    match self.warning {
      Some(w) => Err(Error::PrecisionLoss(w)),
      None    => Ok(self.value)
    }
  }
}
