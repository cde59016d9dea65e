use std::cmp::Ordering;
use num::BigInt;
use crate::{BitVector, FixedPoint, SignedInt, UnsignedInt};
use crate::core::shift;
use crate::literal::{decompose, FloatParts};

/// Compare `a * 2^la` with `b * 2^lb`.
fn cmp_scaled(a: &BigInt, la: i32, b: &BigInt, lb: i32) -> Ordering {
  let low = la.min(lb);
  shift(a, la - low).cmp(&shift(b, lb - low))
}

/// Vectors are equal when they hold the same bits in the same positions
/// with the same signedness.
impl PartialEq for BitVector {
  fn eq(&self, other: &Self) -> bool {
    self.high() == other.high() && self.low() == other.low()
      && self.is_signed() == other.is_signed()
      && self.pattern() == other.pattern()
  }
}

impl Eq for BitVector {}


// Integers compare by numeric value, regardless of width.

macro_rules! int_cmp {
  ($lhs:ty, $rhs:ty) => {
    impl PartialEq<$rhs> for $lhs {
      fn eq(&self, other: &$rhs) -> bool { self.value() == other.value() }
    }

    impl PartialOrd<$rhs> for $lhs {
      fn partial_cmp(&self, other: &$rhs) -> Option<Ordering> {
        Some(self.value().cmp(other.value()))
      }
    }
  };
}

int_cmp!(UnsignedInt, UnsignedInt);
int_cmp!(SignedInt, SignedInt);
int_cmp!(UnsignedInt, SignedInt);
int_cmp!(SignedInt, UnsignedInt);

// No `Ord`: its `max`/`min` would shadow the bound accessors.
impl Eq for UnsignedInt {}
impl Eq for SignedInt {}

macro_rules! prim_cmp {
  ($ty:ty, $($prim:ty),*) => {
    $(
      impl PartialEq<$prim> for $ty {
        fn eq(&self, other: &$prim) -> bool {
          PartialOrd::<$prim>::partial_cmp(self, other) == Some(Ordering::Equal)
        }
      }

      impl PartialOrd<$prim> for $ty {
        fn partial_cmp(&self, other: &$prim) -> Option<Ordering> {
          Some(cmp_scaled(self.value(), self.low(), &BigInt::from(*other), 0))
        }
      }
    )*
  };
}

prim_cmp!(UnsignedInt, i32, i64, u32, u64);
prim_cmp!(SignedInt,   i32, i64, u32, u64);
prim_cmp!(FixedPoint,  i32, i64, u32, u64);


// Fixed point values compare by the number they represent; the format and
// the configuration do not matter.

impl PartialEq for FixedPoint {
  fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for FixedPoint {}

impl PartialOrd for FixedPoint {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for FixedPoint {
  fn cmp(&self, other: &Self) -> Ordering {
    cmp_scaled(self.value(), self.low(), other.value(), other.low())
  }
}

impl PartialOrd<f64> for FixedPoint {
  fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
    match decompose(*other).ok()? {
      FloatParts::Finite { mantissa, exponent } =>
        Some(cmp_scaled(self.value(), self.low(), &mantissa, exponent)),
      FloatParts::Infinite { negative } =>
        Some(if negative { Ordering::Greater } else { Ordering::Less }),
    }
  }
}

impl PartialEq<f64> for FixedPoint {
  fn eq(&self, other: &f64) -> bool {
    PartialOrd::<f64>::partial_cmp(self, other) == Some(Ordering::Equal)
  }
}


#[cfg(test)]
mod test {
  use std::cmp::Ordering;
  use num::BigInt;
  use crate::{BitVector, FixedPoint, SignedInt, UnsignedInt};
  use crate::proptest::*;

  #[test]
  fn vectors_compare_bits() {
    let a = BitVector::with_bounds(5, 4, 0).unwrap();
    assert_eq!(a, BitVector::new("0101").unwrap());
    assert_ne!(a, BitVector::new("101").unwrap());
    assert_ne!(a, BitVector::with_bounds(5, 5, 1).unwrap());
    assert_ne!(a, a.reinterpret(true));
  }

  #[test]
  fn integers_compare_values() {
    let a = UnsignedInt::with_width(5, 8).unwrap();
    let b = SignedInt::new(5).unwrap();
    assert!(a == b);
    assert!(SignedInt::new(-1).unwrap() < a);
    assert_eq!(a.partial_cmp(&UnsignedInt::new(9).unwrap()), Some(Ordering::Less));
    assert!(a > 4_i64 && a < 6_u32);
  }

  #[test]
  fn fixed_ignores_format() {
    let a = FixedPoint::new(1.5).unwrap();
    let b = FixedPoint::with_format(1.5, 10, -6).unwrap();
    assert_eq!(a, b);
    assert!(a > 1 && a < 2);
    assert!(a == 1.5 && a < 1.75 && a > f64::NEG_INFINITY);
    assert!(a.partial_cmp(&f64::NAN).is_none());
    assert!(FixedPoint::with_format(4, 6, 2).unwrap() == 4);
  }

  #[test]
  fn fixed_ordering_matches_difference() {
    do_test(fixed_pair, |(a, b): (FixedPoint, FixedPoint)| {
      let diff = &a - &b;
      Some(a.cmp(&b) == diff.value().cmp(&BigInt::from(0)))
    })
  }
}
