use num::{Signed, ToPrimitive};
use crate::{BitVector, Error, Result, SignedInt, UnsignedInt};

impl BitVector {

  /// Shift towards the most significant end. The width does not change;
  /// bits shifted out are lost.
  pub fn shift_left(&self, amt: usize) -> BitVector {
    let amt = amt.min(self.width() as usize);
    self.with_value(self.value() << amt)
  }

  /// Shift towards the least significant end. Signed vectors copy the sign
  /// bit in; unsigned ones shift in zeros.
  pub fn shift_right(&self, amt: usize) -> BitVector {
    let amt = amt.min(self.width() as usize);
    self.with_value(self.value() >> amt)
  }

  /// Read a shift amount from a vector. It must have `low = 0` and must
  /// not be negative.
  pub(crate) fn shift_amount(amt: &BitVector) -> Result<usize> {
    if amt.low() != 0 { return Err(Error::ShiftAmount("amount must have low = 0")) }
    if amt.value().is_negative() {
      return Err(Error::ShiftAmount("amount must not be negative"))
    }
    Ok(amt.to_usize_saturating())
  }

  /// [`BitVector::shift_left`] with the amount held in a vector.
  pub fn shl_by(&self, amt: &BitVector) -> Result<BitVector> {
    Ok(self.shift_left(BitVector::shift_amount(amt)?))
  }

  /// [`BitVector::shift_right`] with the amount held in a vector.
  pub fn shr_by(&self, amt: &BitVector) -> Result<BitVector> {
    Ok(self.shift_right(BitVector::shift_amount(amt)?))
  }
}

impl std::ops::Shl<usize> for &BitVector {
  type Output = BitVector;
  fn shl(self, amt: usize) -> BitVector { self.shift_left(amt) }
}

impl std::ops::Shr<usize> for &BitVector {
  type Output = BitVector;
  fn shr(self, amt: usize) -> BitVector { self.shift_right(amt) }
}

impl std::ops::Shl<usize> for BitVector {
  type Output = BitVector;
  fn shl(self, amt: usize) -> BitVector { self.shift_left(amt) }
}

impl std::ops::Shr<usize> for BitVector {
  type Output = BitVector;
  fn shr(self, amt: usize) -> BitVector { self.shift_right(amt) }
}

impl std::ops::ShlAssign<usize> for BitVector {
  fn shl_assign(&mut self, amt: usize) { *self = self.shift_left(amt) }
}

impl std::ops::ShrAssign<usize> for BitVector {
  fn shr_assign(&mut self, amt: usize) { *self = self.shift_right(amt) }
}


/// Shifts keep the width. An unsigned amount can always be read, so these
/// operators do not fail.
macro_rules! int_shift {
  ($ty:ident) => {
    impl std::ops::Shl<usize> for &$ty {
      type Output = $ty;
      fn shl(self, amt: usize) -> $ty { $ty(self.0.shift_left(amt)) }
    }

    impl std::ops::Shr<usize> for &$ty {
      type Output = $ty;
      fn shr(self, amt: usize) -> $ty { $ty(self.0.shift_right(amt)) }
    }

    impl std::ops::Shl<usize> for $ty {
      type Output = $ty;
      fn shl(self, amt: usize) -> $ty { &self << amt }
    }

    impl std::ops::Shr<usize> for $ty {
      type Output = $ty;
      fn shr(self, amt: usize) -> $ty { &self >> amt }
    }

    impl std::ops::Shl<&UnsignedInt> for &$ty {
      type Output = $ty;
      fn shl(self, amt: &UnsignedInt) -> $ty { self << amt.0.to_usize_saturating() }
    }

    impl std::ops::Shr<&UnsignedInt> for &$ty {
      type Output = $ty;
      fn shr(self, amt: &UnsignedInt) -> $ty { self >> amt.0.to_usize_saturating() }
    }

    impl std::ops::ShlAssign<usize> for $ty {
      fn shl_assign(&mut self, amt: usize) { *self = &*self << amt }
    }

    impl std::ops::ShrAssign<usize> for $ty {
      fn shr_assign(&mut self, amt: usize) { *self = &*self >> amt }
    }
  };
}

int_shift!(UnsignedInt);
int_shift!(SignedInt);

impl BitVector {
  fn to_usize_saturating(&self) -> usize {
    self.value().to_usize().unwrap_or(usize::MAX)
  }
}


#[cfg(test)]
mod test {
  use num::BigInt;
  use crate::{BitVector, Error, SignedInt, UnsignedInt};
  use crate::proptest::*;

  #[test]
  fn keeps_width() {
    let v = BitVector::new("0110").unwrap();
    assert_eq!((&v << 1).to_string(), "1100");
    assert_eq!((&v << 2).to_string(), "1000");
    assert_eq!((&v << 9).to_string(), "0000");
    assert_eq!((&v >> 1).to_string(), "0011");
    assert_eq!((&v >> 3).to_string(), "0000");
  }

  #[test]
  fn signed_right_shift_copies_sign() {
    let v = BitVector::from_raw(4, 0, BigInt::from(-4), true);
    assert_eq!((&v >> 1).value(), &BigInt::from(-2));
    assert_eq!((&v >> 10).value(), &BigInt::from(-1));
    assert_eq!((&v << 1).value(), &BigInt::from(-8));
    assert_eq!((&v << 2).value(), &BigInt::from(0));
  }

  #[test]
  fn assign_forms() {
    let mut v = BitVector::new("0011").unwrap();
    v <<= 2;
    assert_eq!(v.to_string(), "1100");
    v >>= 3;
    assert_eq!(v.to_string(), "0001");
  }

  #[test]
  fn amount_in_vector() {
    let v   = BitVector::new("0001").unwrap();
    let amt = BitVector::new(2).unwrap();
    assert_eq!(v.shl_by(&amt).unwrap().to_string(), "0100");
    assert_eq!(v.shl_by(&amt).unwrap().shr_by(&amt).unwrap(), v);

    let bad = BitVector::with_bounds(1, 2, -1).unwrap();
    assert!(matches!(v.shl_by(&bad), Err(Error::ShiftAmount(_))));
    let neg = BitVector::from_raw(3, 0, BigInt::from(-1), true);
    assert!(matches!(v.shr_by(&neg), Err(Error::ShiftAmount(_))));
  }

  #[test]
  fn left_shift_is_multiplication_mod_width() {
    do_test(vector_and::<u8>, |(x, n): (BitVector, u8)| {
      let n = usize::from(n % 70);
      let expect = (x.pattern() << n) % (BigInt::from(1) << x.width() as usize);
      Some((&x << n).pattern() == expect)
    })
  }

  #[test]
  fn integers() {
    let u = UnsignedInt::with_width(0b1001, 4).unwrap();
    assert_eq!(&u << 1, 2);
    assert_eq!(&u >> 1, 4);
    let s = SignedInt::with_width(-6, 4).unwrap();
    assert_eq!(&s >> 1, -3);
    assert_eq!(&s << 1, 4);
    let amt = UnsignedInt::new(2).unwrap();
    assert_eq!(&s >> &amt, -2);
    assert_eq!((&u << &amt).width(), 4);

    let mut x = SignedInt::with_width(1, 8).unwrap();
    x <<= 7;
    assert_eq!(x, -128);
    x >>= 100;
    assert_eq!(x, -1);
  }
}
