// Operator plumbing shared by all value types.

/// Given `impl Op<&B> for &A`, implement the three other owned/borrowed
/// combinations by borrowing.
macro_rules! forward_binop {
  ($trait:ident, $method:ident, $lhs:ty, $rhs:ty, $out:ty) => {
    impl std::ops::$trait<$rhs> for $lhs {
      type Output = $out;
      #[inline(always)]
      fn $method(self, rhs: $rhs) -> $out {
        <&$lhs as std::ops::$trait<&$rhs>>::$method(&self, &rhs)
      }
    }

    impl std::ops::$trait<&$rhs> for $lhs {
      type Output = $out;
      #[inline(always)]
      fn $method(self, rhs: &$rhs) -> $out {
        <&$lhs as std::ops::$trait<&$rhs>>::$method(&self, rhs)
      }
    }

    impl std::ops::$trait<$rhs> for &$lhs {
      type Output = $out;
      #[inline(always)]
      fn $method(self, rhs: $rhs) -> $out {
        <&$lhs as std::ops::$trait<&$rhs>>::$method(self, &rhs)
      }
    }
  };
}

/// Compound assignment: compute the plain result, then resize it back into
/// the receiver with `assign_resized`.
macro_rules! assign_via {
  ($trait:ident, $method:ident, $op:ident, $op_method:ident, $lhs:ty, $rhs:ty) => {
    impl std::ops::$trait<&$rhs> for $lhs {
      fn $method(&mut self, rhs: &$rhs) {
        let result = std::ops::$op::$op_method(&*self, rhs);
        self.assign_resized(&result)
      }
    }

    impl std::ops::$trait<$rhs> for $lhs {
      #[inline(always)]
      fn $method(&mut self, rhs: $rhs) {
        <$lhs as std::ops::$trait<&$rhs>>::$method(self, &rhs)
      }
    }
  };
}

/// Bit-level accessors for types that wrap a `BitVector` in field `.0`
/// (or the field named in the second argument).
macro_rules! bit_access {
  ($ty:ty, $field:tt) => {
    impl AsRef<crate::BitVector> for $ty {
      fn as_ref(&self) -> &crate::BitVector { &self.$field }
    }

    impl $ty {
      /// Exclusive upper bit position.
      pub fn high(&self) -> i32 { self.$field.high() }

      /// Inclusive lower bit position.
      pub fn low(&self) -> i32 { self.$field.low() }

      /// Number of bits.
      pub fn width(&self) -> u32 { self.$field.width() }

      /// The stored payload.
      pub fn value(&self) -> &num::BigInt { self.$field.value() }

      pub fn is_signed(&self) -> bool { self.$field.is_signed() }

      /// See [`crate::BitVector::is_exact`].
      pub fn is_exact(&self) -> bool { self.$field.is_exact() }

      /// The underlying bits.
      pub fn as_bits(&self) -> &crate::BitVector { &self.$field }

      pub fn into_bits(self) -> crate::BitVector { self.$field }

      pub fn bit(&self, index: i32) -> crate::Result<bool> {
        self.$field.bit(index)
      }

      pub fn set_bit(&mut self, index: i32, value: bool) -> crate::Result<()> {
        self.$field.set_bit(index, value)
      }

      pub fn slice(&self, i: i32, j: i32) -> crate::Result<crate::BitVector> {
        self.$field.slice(i, j)
      }

      pub fn set_slice(&mut self, i: i32, j: i32, v: &crate::BitVector)
        -> crate::Result<()> {
        self.$field.set_slice(i, j, v)
      }

      pub fn and_reduce(&self) -> bool { self.$field.and_reduce() }
      pub fn or_reduce(&self)  -> bool { self.$field.or_reduce() }
      pub fn xor_reduce(&self) -> bool { self.$field.xor_reduce() }
    }
  };
}
