use num::{BigInt, Integer, Signed, Zero};
use crate::{BitVector, FixedPoint, MathConfig, Numeric, SignedInt, UnsignedInt};
use crate::core::shift;
use crate::error::{Checked, Warning};
use crate::fixed::saturated;
use crate::resize::resize_fixed;

#[derive(Clone,Copy,Debug,PartialEq,Eq)]
enum FixedOp { Add, Sub, Mul, Div, Rem }

/// Both payloads at the lower of the two `low`s.
fn align(a: &FixedPoint, b: &FixedPoint) -> (i32, BigInt, BigInt) {
  let low = a.low().min(b.low());
  (low, shift(a.value(), a.low() - low), shift(b.value(), b.low() - low))
}

/// Apply `op` under the config of `a`.
///
/// Sums, differences and products are computed in a format large enough to
/// be exact. The quotient of `(ha,la) / (hb,lb)` has format
/// `(ha-lb+1, la-hb+1)`; it is computed with `guard_bits` extra fraction
/// bits and then rounded. The remainder has format `(hb, min(la,lb))` and
/// takes the sign of the divisor.
fn fixed_op(op: FixedOp, a: &FixedPoint, b: &FixedPoint) -> Checked<FixedPoint> {
  let config = a.config;
  let exact  = |high: i32, low: i32, v: BigInt| {
    Checked::ok(FixedPoint::from_parts(high, low, v, config))
  };

  match op {
    FixedOp::Add | FixedOp::Sub => {
      let (low, x, y) = align(a, b);
      let high = a.high().max(b.high()) + 1;
      exact(high, low, if op == FixedOp::Add { x + y } else { x - y })
    }

    FixedOp::Mul =>
      exact(a.high() + b.high() + 1, a.low() + b.low(), a.value() * b.value()),

    FixedOp::Div => {
      let high = a.high() - b.low() + 1;
      let low  = a.low() - b.high() + 1;
      if b.value().is_zero() {
        tracing::debug!(target: "hwnum::precision", high, low, "fixed point division by zero");
        let v = saturated((high - low) as u32, !a.value().is_negative());
        return Checked::warn(FixedPoint::from_parts(high, low, v, config),
                             Warning::DivisionByZero)
      }
      let guard = config.guard_bits() as i32;
      let scale = (b.width() as i32 - 1 + guard) as usize;
      let q     = (a.value() << scale).div_floor(b.value());
      resize_fixed(&q, high, low - guard, high, low, &config)
        .map(|v| FixedPoint::from_parts(high, low, v, config))
    }

    FixedOp::Rem => {
      let (low, x, y) = align(a, b);
      let high = b.high();
      if y.is_zero() {
        tracing::debug!(target: "hwnum::precision", high, low, "fixed point modulo by zero");
        return Checked::warn((), Warning::DivisionByZero).and_then(|_| {
          resize_fixed(&x, a.high(), low, high, low, &config)
            .map(|v| FixedPoint::from_parts(high, low, v, config))
        })
      }
      exact(high, low, x.mod_floor(&y))
    }
  }
}

/// An integer as a fixed point value with `low = 0`, carrying `config`.
fn promote(x: &impl Numeric, config: MathConfig) -> FixedPoint {
  FixedPoint { config, ..x.to_fixed() }
}

macro_rules! fixed_arith {
  ($trait:ident, $method:ident, $assign:ident, $assign_method:ident, $op:expr) => {
    impl std::ops::$trait<&FixedPoint> for &FixedPoint {
      type Output = FixedPoint;
      fn $method(self, rhs: &FixedPoint) -> FixedPoint {
        fixed_op($op, self, rhs).report()
      }
    }

    forward_binop!($trait, $method, FixedPoint, FixedPoint, FixedPoint);
    assign_via!($assign, $assign_method, $trait, $method, FixedPoint, FixedPoint);
    fixed_arith!(@int $trait, $method, $assign, $assign_method, UnsignedInt);
    fixed_arith!(@int $trait, $method, $assign, $assign_method, SignedInt);
  };

  // The integer operand takes the config of the fixed point one.
  (@int $trait:ident, $method:ident, $assign:ident, $assign_method:ident, $int:ident) => {
    impl std::ops::$trait<&$int> for &FixedPoint {
      type Output = FixedPoint;
      fn $method(self, rhs: &$int) -> FixedPoint {
        std::ops::$trait::$method(self, &promote(rhs, self.config))
      }
    }

    impl std::ops::$trait<&FixedPoint> for &$int {
      type Output = FixedPoint;
      fn $method(self, rhs: &FixedPoint) -> FixedPoint {
        std::ops::$trait::$method(&promote(self, rhs.config), rhs)
      }
    }

    forward_binop!($trait, $method, FixedPoint, $int, FixedPoint);
    forward_binop!($trait, $method, $int, FixedPoint, FixedPoint);
    assign_via!($assign, $assign_method, $trait, $method, FixedPoint, $int);
  };
}

fixed_arith!(Add, add, AddAssign, add_assign, FixedOp::Add);
fixed_arith!(Sub, sub, SubAssign, sub_assign, FixedOp::Sub);
fixed_arith!(Mul, mul, MulAssign, mul_assign, FixedOp::Mul);
fixed_arith!(Div, div, DivAssign, div_assign, FixedOp::Div);
fixed_arith!(Rem, rem, RemAssign, rem_assign, FixedOp::Rem);

impl FixedPoint {

  /// Quotient rounded toward negative infinity: the true quotient passed
  /// through [`FixedPoint::floor`].
  pub fn floor_div(&self, rhs: &FixedPoint) -> FixedPoint {
    (self / rhs).floor()
  }
}


// Bitwise operators work on the union format, like `BitVector`.

macro_rules! fixed_logic {
  ($trait:ident, $method:ident, $assign:ident, $assign_method:ident) => {
    impl std::ops::$trait<&FixedPoint> for &FixedPoint {
      type Output = FixedPoint;
      fn $method(self, rhs: &FixedPoint) -> FixedPoint {
        let bits: BitVector = std::ops::$trait::$method(&self.bits, &rhs.bits);
        FixedPoint { bits, config: self.config }
      }
    }

    forward_binop!($trait, $method, FixedPoint, FixedPoint, FixedPoint);
    assign_via!($assign, $assign_method, $trait, $method, FixedPoint, FixedPoint);
  };
}

fixed_logic!(BitAnd, bitand, BitAndAssign, bitand_assign);
fixed_logic!(BitOr,  bitor,  BitOrAssign,  bitor_assign);
fixed_logic!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl std::ops::Not for &FixedPoint {
  type Output = FixedPoint;
  fn not(self) -> FixedPoint {
    FixedPoint { bits: self.bits.complement(), config: self.config }
  }
}

impl std::ops::Not for FixedPoint {
  type Output = FixedPoint;
  fn not(self) -> FixedPoint { !&self }
}

impl std::ops::Shl<usize> for &FixedPoint {
  type Output = FixedPoint;
  fn shl(self, amt: usize) -> FixedPoint {
    FixedPoint { bits: self.bits.shift_left(amt), config: self.config }
  }
}

impl std::ops::Shr<usize> for &FixedPoint {
  type Output = FixedPoint;
  fn shr(self, amt: usize) -> FixedPoint {
    FixedPoint { bits: self.bits.shift_right(amt), config: self.config }
  }
}

impl std::ops::ShlAssign<usize> for FixedPoint {
  fn shl_assign(&mut self, amt: usize) { *self = &*self << amt }
}

impl std::ops::ShrAssign<usize> for FixedPoint {
  fn shr_assign(&mut self, amt: usize) { *self = &*self >> amt }
}
