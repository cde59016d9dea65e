use num::BigInt;
use crate::{BitVector, SignedInt, UnsignedInt};
use crate::core::{pow2, shift};

impl BitVector {

  /// Both payloads, aligned to the union format `(max high, min low)`.
  /// Unsigned payloads are non-negative, so aligning zero extends them.
  fn align(&self, other: &BitVector) -> (i32, i32, BigInt, BigInt) {
    let high = self.high().max(other.high());
    let low  = self.low().min(other.low());
    ( high, low
    , shift(self.value(), self.low() - low)
    , shift(other.value(), other.low() - low)
    )
  }

  pub(crate) fn logic( &self, other: &BitVector
                     , op: impl FnOnce(&BigInt, &BigInt) -> BigInt
                     ) -> BitVector {
    let (high, low, x, y) = self.align(other);
    let signed = self.is_signed() || other.is_signed();
    let result = BitVector::from_raw(high, low, op(&x, &y), signed);
    let same   = |v: &BitVector| v.high() == high && v.low() == low;
    if same(self) || same(other) { result } else { result.inexact() }
  }

  /// Flip every bit.
  pub fn complement(&self) -> BitVector {
    self.with_value(pow2(self.width()) - 1 - self.pattern())
  }

  /// Are all the bits set.
  pub fn and_reduce(&self) -> bool { self.iter_bits_lsb().all(|b| b) }

  /// Is any bit set.
  pub fn or_reduce(&self) -> bool { self.iter_bits_lsb().any(|b| b) }

  /// Is an odd number of bits set.
  pub fn xor_reduce(&self) -> bool {
    self.iter_bits_lsb().fold(false, |acc, b| acc ^ b)
  }
}

macro_rules! vector_logic {
  ($trait:ident, $method:ident, $assign:ident, $assign_method:ident, $op:tt) => {
    impl std::ops::$trait<&BitVector> for &BitVector {
      type Output = BitVector;
      fn $method(self, rhs: &BitVector) -> BitVector {
        self.logic(rhs, |x, y| x $op y)
      }
    }

    forward_binop!($trait, $method, BitVector, BitVector, BitVector);
    assign_via!($assign, $assign_method, $trait, $method, BitVector, BitVector);
  };
}

vector_logic!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
vector_logic!(BitOr,  bitor,  BitOrAssign,  bitor_assign,  |);
vector_logic!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl std::ops::Not for &BitVector {
  type Output = BitVector;
  fn not(self) -> BitVector { self.complement() }
}

impl std::ops::Not for BitVector {
  type Output = BitVector;
  fn not(self) -> BitVector { self.complement() }
}

impl BitVector {
  /// Resize `other` into this vector's format and keep its bits.
  pub fn assign_resized(&mut self, other: &BitVector) {
    let value = shift(other.value(), other.low() - self.low());
    let fitted = BitVector::fit(self.high(), self.low(), value, self.is_signed())
                   .report();
    self.store(fitted.pattern());
  }
}


/// Bitwise operators on integers. Unsigned operands meeting a signed one are
/// promoted first, so the result is signed.
macro_rules! int_logic {
  ($trait:ident, $method:ident, $assign:ident, $assign_method:ident) => {
    impl std::ops::$trait<&UnsignedInt> for &UnsignedInt {
      type Output = UnsignedInt;
      fn $method(self, rhs: &UnsignedInt) -> UnsignedInt {
        UnsignedInt(std::ops::$trait::$method(&self.0, &rhs.0))
      }
    }

    impl std::ops::$trait<&SignedInt> for &SignedInt {
      type Output = SignedInt;
      fn $method(self, rhs: &SignedInt) -> SignedInt {
        SignedInt(std::ops::$trait::$method(&self.0, &rhs.0))
      }
    }

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

    forward_binop!($trait, $method, UnsignedInt, UnsignedInt, UnsignedInt);
    forward_binop!($trait, $method, SignedInt, SignedInt, SignedInt);
    forward_binop!($trait, $method, UnsignedInt, SignedInt, SignedInt);
    forward_binop!($trait, $method, SignedInt, UnsignedInt, SignedInt);
    assign_via!($assign, $assign_method, $trait, $method, UnsignedInt, UnsignedInt);
    assign_via!($assign, $assign_method, $trait, $method, SignedInt, SignedInt);
    assign_via!($assign, $assign_method, $trait, $method, UnsignedInt, SignedInt);
    assign_via!($assign, $assign_method, $trait, $method, SignedInt, UnsignedInt);
  };
}

int_logic!(BitAnd, bitand, BitAndAssign, bitand_assign);
int_logic!(BitOr,  bitor,  BitOrAssign,  bitor_assign);
int_logic!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl std::ops::Not for &UnsignedInt {
  type Output = UnsignedInt;
  fn not(self) -> UnsignedInt { UnsignedInt(self.0.complement()) }
}

impl std::ops::Not for UnsignedInt {
  type Output = UnsignedInt;
  fn not(self) -> UnsignedInt { !&self }
}

impl std::ops::Not for &SignedInt {
  type Output = SignedInt;
  fn not(self) -> SignedInt { SignedInt(self.0.complement()) }
}

impl std::ops::Not for SignedInt {
  type Output = SignedInt;
  fn not(self) -> SignedInt { !&self }
}


#[cfg(test)]
mod test {
  use num::BigInt;
  use crate::{BitVector, SignedInt, UnsignedInt};
  use crate::proptest::*;

  #[test]
  fn same_format() {
    let a = BitVector::new("1100").unwrap();
    let b = BitVector::new("1010").unwrap();
    assert_eq!((&a & &b).to_string(), "1000");
    assert_eq!((&a | &b).to_string(), "1110");
    assert_eq!((&a ^ &b).to_string(), "0110");
    assert_eq!((!&a).to_string(), "0011");
    assert!((&a & &b).is_exact());
  }

  #[test]
  fn union_format() {
    let a = BitVector::new("1100").unwrap();
    let b = BitVector::with_bounds("11", 2, -2).unwrap();
    let r = &a | &b;
    assert_eq!((r.high(), r.low()), (4, -2));
    assert_eq!(r.to_string(), "110011");
    assert!(!r.is_exact());

    // Contained in the wider operand: exact.
    let c = BitVector::new("1").unwrap();
    assert!((&a & &c).is_exact());
  }

  #[test]
  fn signed_operands_sign_extend() {
    let a = BitVector::from_raw(8, 0, BigInt::from(-1), true);
    let b = BitVector::from_raw(4, 0, BigInt::from(-8), true);
    let r = &a & &b;
    assert_eq!(r.value(), &BigInt::from(-8));
    assert!(r.is_signed());
  }

  #[test]
  fn compound_keeps_receiver_format() {
    let mut a = BitVector::new("1100").unwrap();
    a |= BitVector::new("110011").unwrap();
    assert_eq!(a.to_string(), "1111");
    a &= &BitVector::new("0101").unwrap();
    assert_eq!(a.to_string(), "0101");
    a ^= BitVector::new("1111").unwrap();
    assert_eq!(a.to_string(), "1010");
  }

  #[test]
  fn reductions() {
    let ones = BitVector::new("111").unwrap();
    let mix  = BitVector::new("101").unwrap();
    let zero = BitVector::new("000").unwrap();
    assert!(ones.and_reduce() && ones.or_reduce() && ones.xor_reduce());
    assert!(!mix.and_reduce() && mix.or_reduce() && !mix.xor_reduce());
    assert!(!zero.and_reduce() && !zero.or_reduce() && !zero.xor_reduce());
  }

  #[test]
  fn de_morgan() {
    do_test(vector_pair, |(x, y): (BitVector, BitVector)| {
      Some(!(&x & &y) == (&!&x | &!&y))
    })
  }

  #[test]
  fn xor_reduce_is_parity() {
    do_test(vector, |x: BitVector| {
      let ones = x.pattern().to_str_radix(2).chars().filter(|c| *c == '1').count();
      Some(x.xor_reduce() == (ones % 2 == 1))
    })
  }

  #[test]
  fn integers() {
    let a = UnsignedInt::new(0b1100).unwrap();
    let b = UnsignedInt::new(0b11).unwrap();
    let r = &a | &b;
    assert_eq!(r.width(), 4);
    assert_eq!(r, 15);
    assert_eq!(!&b, 0);
    assert_eq!(!UnsignedInt::with_width(1, 4).unwrap(), 14);

    let s = SignedInt::new(-2).unwrap();
    assert_eq!(!&s, 1);
    assert_eq!(&s & &SignedInt::new(7).unwrap(), 6);

    // -2 is all ones above bit 0, so the unsigned bits come through.
    let m = &a & &s;
    assert!(m.is_signed());
    assert_eq!(m.width(), 5);
    assert_eq!(m, 12);

    let mut x = UnsignedInt::with_width(0, 3).unwrap();
    x ^= UnsignedInt::new(0b1101).unwrap();
    assert_eq!(x, 5);
    assert_eq!(x.width(), 3);
  }
}
