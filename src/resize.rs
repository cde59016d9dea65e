use num::{BigInt, Integer, Signed};
use crate::{BitVector, MathConfig};
use crate::core::{check_bounds, fits, pattern_of, pow2, shift, wrap};
use crate::error::{Checked, Result, Warning};

impl BitVector {

  pub(crate) fn resized(&self, high: i32, low: i32) -> Result<Checked<BitVector>> {
    check_bounds(high, low)?;
    let value = shift(self.value(), self.low() - low);
    Ok(BitVector::fit(high, low, value, self.is_signed()))
  }

  /// Copy the bits into positions `low .. high`. Bits below `low` are
  /// dropped, new high bits are sign or zero extended. Dropping significant
  /// high bits is reported as a warning.
  pub fn resize(&self, high: i32, low: i32) -> Result<BitVector> {
    Ok(self.resized(high, low)?.report())
  }

  /// Like [`BitVector::resize`] but dropping significant high bits is an
  /// error.
  pub fn try_resize(&self, high: i32, low: i32) -> Result<BitVector> {
    self.resized(high, low)?.strict()
  }
}


/// `value / 2^n`, rounded to nearest with ties to even.
pub(crate) fn round_shift(value: &BigInt, n: u32) -> BigInt {
  let mut r = shift(value, -(n as i32));
  if n > 0 {
    let rem  = pattern_of(value, n);
    let half = pow2(n - 1);
    if rem >= half && (r.is_odd() || rem > half) {
      r += 1;
    }
  }
  r
}

/// Move the fixed point payload `value`, which occupies `high .. low`,
/// into the format `to_high .. to_low`, applying the rounding and overflow
/// policy of `config`. Returns the new payload.
pub(crate) fn resize_fixed( value: &BigInt, high: i32, low: i32
                          , to_high: i32, to_low: i32, config: &MathConfig
                          ) -> Checked<BigInt> {
  let width = (to_high - to_low) as u32;

  // Nothing of the source survives except its sign.
  if to_low > high {
    return Checked::ok(BigInt::from(if value.is_negative() { -1 } else { 0 }))
  }

  let dropped = to_low - low;
  let r = if dropped > 0 && config.rounds() { round_shift(value, dropped as u32) }
          else { shift(value, -dropped) };

  if fits(&r, width, true) { return Checked::ok(r) }

  if config.saturates() {
    let top   = pow2(width - 1);
    let bound = if r.is_negative() { -top } else { top - 1 };
    Checked::warn(bound, Warning::Saturated { high: to_high, low: to_low })
  } else {
    Checked::warn(wrap(&r, width, true), Warning::Wrapped { high: to_high, low: to_low })
  }
}
