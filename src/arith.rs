use num::{BigInt, Integer, Signed, Zero};
use crate::{BitVector, SignedInt, UnsignedInt};
use crate::core::pow2;
use crate::error::{Checked, Error, Result, Warning};

/// Integer operations, tagged so the result width can be computed from the
/// operand widths alone.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub(crate) enum IntOp { Add, Sub, Mul, Div, Rem }

impl IntOp {

  /// Width of the result for operands of widths `a` and `b`.
  pub(crate) fn width(self, a: u32, b: u32) -> u32 {
    match self {
      IntOp::Add | IntOp::Sub => a.max(b) + 1,
      IntOp::Mul              => a + b,
      IntOp::Div              => a.max(b),
      IntOp::Rem              => b,
    }
  }
}

/// Apply `op` and fit the result in the grown width. Division rounds toward
/// negative infinity and the remainder takes the sign of the divisor.
///
/// Dividing by zero does not fail: the quotient saturates to the largest
/// (non-negative dividend) or smallest value of the result, and the
/// remainder is the dividend itself.
pub(crate) fn int_op(op: IntOp, x: &BitVector, y: &BitVector, signed: bool)
  -> Checked<BitVector> {
  let width = op.width(x.width(), y.width());
  let (a, b) = (x.value(), y.value());

  if b.is_zero() && (op == IntOp::Div || op == IntOp::Rem) {
    let value = match op {
      IntOp::Div => saturated(width, signed, !a.is_negative()),
      _          => a.clone()
    };
    tracing::debug!(target: "hwnum::precision", ?op, width, "integer division by zero");
    return Checked::warn((), Warning::DivisionByZero)
             .and_then(|_| BitVector::fit(width as i32, 0, value, signed))
  }

  let value = match op {
    IntOp::Add => a + b,
    IntOp::Sub => a - b,
    IntOp::Mul => a * b,
    IntOp::Div => a.div_floor(b),
    IntOp::Rem => a.mod_floor(b),
  };
  BitVector::fit(width as i32, 0, value, signed)
}

/// The largest (`up`) or smallest value of the given width.
fn saturated(width: u32, signed: bool, up: bool) -> BigInt {
  match (signed, up) {
    (true,  true)  => pow2(width - 1) - 1,
    (true,  false) => -pow2(width - 1),
    (false, true)  => pow2(width) - 1,
    (false, false) => BigInt::zero(),
  }
}


macro_rules! int_arith {
  ($ty:ident, $signed:expr,
   $trait:ident, $method:ident, $assign:ident, $assign_method:ident, $op:expr) => {
    impl std::ops::$trait<&$ty> for &$ty {
      type Output = $ty;
      fn $method(self, rhs: &$ty) -> $ty {
        $ty(int_op($op, &self.0, &rhs.0, $signed).report())
      }
    }

    forward_binop!($trait, $method, $ty, $ty, $ty);
    assign_via!($assign, $assign_method, $trait, $method, $ty, $ty);
  };
}

/// Unsigned op signed: the unsigned operand is promoted first.
macro_rules! mixed_arith {
  ($trait:ident, $method:ident, $assign:ident, $assign_method:ident) => {
    impl std::ops::$trait<&SignedInt> for &UnsignedInt {
      type Output = SignedInt;
      fn $method(self, rhs: &SignedInt) -> SignedInt {
        std::ops::$trait::$method(&self.to_signed(), rhs)
      }
    }

    impl std::ops::$trait<&UnsignedInt> for &SignedInt {
      type Output = SignedInt;
      fn $method(self, rhs: &UnsignedInt) -> SignedInt {
        std::ops::$trait::$method(self, &rhs.to_signed())
      }
    }

    forward_binop!($trait, $method, UnsignedInt, SignedInt, SignedInt);
    forward_binop!($trait, $method, SignedInt, UnsignedInt, SignedInt);
    assign_via!($assign, $assign_method, $trait, $method, UnsignedInt, SignedInt);
    assign_via!($assign, $assign_method, $trait, $method, SignedInt, UnsignedInt);
  };
}

int_arith!(UnsignedInt, false, Add, add, AddAssign, add_assign, IntOp::Add);
int_arith!(UnsignedInt, false, Sub, sub, SubAssign, sub_assign, IntOp::Sub);
int_arith!(UnsignedInt, false, Mul, mul, MulAssign, mul_assign, IntOp::Mul);
int_arith!(UnsignedInt, false, Div, div, DivAssign, div_assign, IntOp::Div);
int_arith!(UnsignedInt, false, Rem, rem, RemAssign, rem_assign, IntOp::Rem);

int_arith!(SignedInt, true, Add, add, AddAssign, add_assign, IntOp::Add);
int_arith!(SignedInt, true, Sub, sub, SubAssign, sub_assign, IntOp::Sub);
int_arith!(SignedInt, true, Mul, mul, MulAssign, mul_assign, IntOp::Mul);
int_arith!(SignedInt, true, Div, div, DivAssign, div_assign, IntOp::Div);
int_arith!(SignedInt, true, Rem, rem, RemAssign, rem_assign, IntOp::Rem);

mixed_arith!(Add, add, AddAssign, add_assign);
mixed_arith!(Sub, sub, SubAssign, sub_assign);
mixed_arith!(Mul, mul, MulAssign, mul_assign);
mixed_arith!(Div, div, DivAssign, div_assign);
mixed_arith!(Rem, rem, RemAssign, rem_assign);


macro_rules! checked_division {
  ($ty:ident) => {
    impl $ty {
      /// Floor division that reports a zero divisor instead of saturating.
      pub fn checked_div(&self, rhs: &$ty) -> Result<$ty> {
        if rhs.value().is_zero() { return Err(Error::DivisionByZero) }
        Ok(self / rhs)
      }

      /// Floor modulo that reports a zero divisor instead of returning the
      /// dividend.
      pub fn checked_rem(&self, rhs: &$ty) -> Result<$ty> {
        if rhs.value().is_zero() { return Err(Error::DivisionByZero) }
        Ok(self % rhs)
      }
    }
  };
}

checked_division!(UnsignedInt);
checked_division!(SignedInt);
