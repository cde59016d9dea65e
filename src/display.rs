use std::fmt;
use crate::{BitVector, FixedPoint, SignedInt, UnsignedInt};
use crate::core::{pattern_of, shift};

/// Round `n` up to a multiple of `k`.
fn round_up(n: i32, k: i32) -> i32 { (n + k - 1) / k * k }

impl BitVector {

  /// Positions `from .. to` as digits of `per` bits each, most significant
  /// first. `to - from` must be a multiple of `per`. Positions above `high`
  /// are sign (or zero) extended, positions below `low` read as 0.
  pub(crate) fn digits(&self, from: i32, to: i32, per: u32) -> String {
    let count = (to - from) as u32 / per;
    let bits  = pattern_of(&shift(self.value(), self.low() - from), count * per);
    let s     = bits.to_str_radix(1 << per);
    format!("{:0>width$}", s, width = count as usize)
  }

  fn radix(&self, per: u32) -> String {
    let top = self.low() + round_up(self.width() as i32, per as i32);
    self.digits(self.low(), top, per)
  }

  /// Exactly `width` binary digits.
  pub fn bin(&self) -> String { self.digits(self.low(), self.high(), 1) }

  /// Octal digits. The top digit is sign extended for signed vectors.
  pub fn oct(&self) -> String { self.radix(3) }

  /// Hex digits. The top digit is sign extended for signed vectors.
  pub fn hex(&self) -> String { self.radix(4) }
}

impl fmt::Display for BitVector {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.pad(&self.bin()) }
}

impl fmt::Binary for BitVector {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0b", &self.bin())
  }
}

impl fmt::Octal for BitVector {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0o", &self.oct())
  }
}

impl fmt::LowerHex for BitVector {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0x", &self.hex())
  }
}

impl fmt::UpperHex for BitVector {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0x", &self.hex().to_uppercase())
  }
}


macro_rules! int_display {
  ($ty:ty) => {
    impl $ty {
      pub fn bin(&self) -> String { self.0.bin() }
      pub fn oct(&self) -> String { self.0.oct() }
      pub fn hex(&self) -> String { self.0.hex() }
    }

    impl fmt::Display for $ty {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
      }
    }

    impl fmt::Binary for $ty {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
      }
    }

    impl fmt::Octal for $ty {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Octal::fmt(&self.0, f)
      }
    }

    impl fmt::LowerHex for $ty {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
      }
    }

    impl fmt::UpperHex for $ty {
      fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
      }
    }
  };
}

int_display!(UnsignedInt);
int_display!(SignedInt);


impl FixedPoint {

  /// The bits, with a `.` at the binary point. A format that stops short of
  /// the point is padded up to it: sign bits between the point and `high`,
  /// zeros between `low` and the point. So `(-1, -4)` holding `"101"` is
  /// `".1101"`, and [`FixedPoint::new`] reads any of these back to the same
  /// number.
  pub fn bin(&self) -> String {
    let (from, to) = (self.low().min(0), self.high().max(0));
    let mut s = self.bits.digits(from, to, 1);
    if from < 0 { s.insert(to as usize, '.') }
    s
  }

  /// Hex digits grouped from the binary point outwards, e.g. `"f3.a"`.
  /// The integer part is sign extended, the fraction padded with zeros.
  pub fn hex(&self) -> String {
    let top   = round_up(self.high().max(1), 4);
    let mut s = self.bits.digits(0, top, 4);
    if self.low() < 0 {
      let bottom = -round_up(-self.low(), 4);
      s.push('.');
      s.push_str(&self.bits.digits(bottom, 0, 4));
    }
    s
  }
}

impl fmt::Display for FixedPoint {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.pad(&self.bin()) }
}

impl fmt::Binary for FixedPoint {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0b", &self.bin())
  }
}

impl fmt::LowerHex for FixedPoint {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0x", &self.hex())
  }
}

impl fmt::UpperHex for FixedPoint {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.pad_integral(true, "0x", &self.hex().to_uppercase())
  }
}


#[cfg(test)]
mod test {
  use crate::{BitVector, FixedPoint, SignedInt, UnsignedInt};
  use crate::proptest::*;

  #[test]
  fn vectors() {
    let v = BitVector::new("1011_0111_1").unwrap();
    assert_eq!(v.to_string(), "101101111");
    assert_eq!(v.hex(), "16f");
    assert_eq!(v.oct(), "557");
    assert_eq!(format!("{:#x}", v), "0x16f");
    assert_eq!(format!("{:X}", v), "16F");
    assert_eq!(format!("{:#b}", v), "0b101101111");
    assert_eq!(format!("{:>12}", v), "   101101111");
  }

  #[test]
  fn integers() {
    assert_eq!(SignedInt::new(5).unwrap().to_string(), "0101");
    assert_eq!(SignedInt::new(-5).unwrap().to_string(), "1011");
    assert_eq!(SignedInt::with_width(-1, 5).unwrap().hex(), "ff");
    assert_eq!(UnsignedInt::with_width(31, 5).unwrap().hex(), "1f");
    assert_eq!(format!("{:o}", UnsignedInt::new(8).unwrap()), "10");
  }

  #[test]
  fn fixed() {
    let x = FixedPoint::new("0101.10").unwrap();
    assert_eq!(x.bin(), "0101.10");
    assert_eq!(x.hex(), "5.8");

    let x = FixedPoint::new(-1.25).unwrap();
    assert_eq!((x.high(), x.low()), (2, -2));
    assert_eq!(x.bin(), "10.11");
    assert_eq!(x.hex(), "e.c");

    let x = FixedPoint::new(".101").unwrap();
    assert_eq!(x.bin(), ".101");

    let x = FixedPoint::with_format(1, 10, 0).unwrap();
    assert_eq!(x.hex(), "001");
  }

  #[test]
  fn fixed_bits_reach_the_point() {
    let x = FixedPoint::with_format(-0.1875, -1, -4).unwrap();
    assert_eq!(x.bin(), ".1101");
    let x = FixedPoint::with_format(0.125, -1, -4).unwrap();
    assert_eq!(x.bin(), ".0010");
    let x = FixedPoint::with_format(-12, 5, 2).unwrap();
    assert_eq!(x.bin(), "10100");
    assert_eq!(FixedPoint::new(x.bin().as_str()).unwrap(), -12);
  }

  #[test]
  fn fixed_bit_strings_round_trip() {
    do_test(crate::proptest::fixed, |x: FixedPoint| {
      let y = FixedPoint::new(x.bin().as_str()).ok()?;
      Some(y == x)
    })
  }

  #[test]
  fn bit_strings_round_trip() {
    do_test(vector, |x: BitVector| {
      let s = x.bin();
      let y = BitVector::new(s.as_str()).ok()?;
      Some(y.to_string() == s)
    })
  }
}
