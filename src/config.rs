/// What to do with bits that do not fit above the most significant bit.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq,Hash)]
pub enum Overflow {
  /// Clamp to the largest or smallest representable value.
  #[default]
  Saturate,

  /// Drop the high bits (modulo 2^width).
  Wrap
}

/// What to do with bits that fall below the least significant bit.
#[derive(Clone,Copy,Debug,Default,PartialEq,Eq,Hash)]
pub enum Rounding {
  /// Round to nearest, ties to the even neighbour.
  #[default]
  Round,

  /// Drop the bits (floor in two's complement).
  Truncate
}

/// Rounding and overflow policy for fixed point arithmetic.
/// The defaults match `fixed_pkg`: saturate, round, 3 guard bits.
#[derive(Clone,Copy,Debug,PartialEq,Eq,Hash)]
pub struct MathConfig {
  overflow:   Overflow,
  rounding:   Rounding,
  guard_bits: u32
}

impl Default for MathConfig {
  fn default() -> Self {
    MathConfig::new(Overflow::Saturate, Rounding::Round,
                    MathConfig::DEFAULT_GUARD_BITS)
  }
}

impl MathConfig {

  pub const DEFAULT_GUARD_BITS: u32 = 3;

  pub const fn new(overflow: Overflow, rounding: Rounding, guard_bits: u32)
    -> MathConfig {
    MathConfig { overflow, rounding, guard_bits }
  }

  pub fn overflow(&self)   -> Overflow { self.overflow }
  pub fn rounding(&self)   -> Rounding { self.rounding }
  pub fn guard_bits(&self) -> u32      { self.guard_bits }

  pub fn with_overflow(self, overflow: Overflow) -> MathConfig {
    MathConfig { overflow, ..self }
  }

  pub fn with_rounding(self, rounding: Rounding) -> MathConfig {
    MathConfig { rounding, ..self }
  }

  pub fn with_guard_bits(self, guard_bits: u32) -> MathConfig {
    MathConfig { guard_bits, ..self }
  }

  pub fn saturates(&self) -> bool { self.overflow == Overflow::Saturate }
  pub fn rounds(&self)    -> bool { self.rounding == Rounding::Round }
}
