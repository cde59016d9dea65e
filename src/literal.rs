use num::{BigInt, BigUint, Signed, Zero};
use num::traits::Float;
use crate::{BitVector, SignedInt, UnsignedInt};
use crate::core::{min_width, shift, wrap};
use crate::error::{Checked, Error, Result, Warning};

/// The things a value can be built from.
#[derive(Clone,Debug,PartialEq)]
pub enum Literal {
  /// An integer. For fixed point types this is the real value, not the
  /// payload.
  Int(BigInt),

  /// An IEEE-754 double.
  Float(f64),

  /// A bit pattern such as `"1100_1"` (or `"01.101"` for fixed point),
  /// most significant bit first.
  Bits(String)
}

macro_rules! literal_from_int {
  ($($t:ty),*) => {
    $(
      impl From<$t> for Literal {
        fn from(x: $t) -> Self { Literal::Int(BigInt::from(x)) }
      }
    )*
  };
}

literal_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<bool> for Literal {
  fn from(x: bool) -> Self { Literal::Int(BigInt::from(u8::from(x))) }
}

impl From<BigInt> for Literal {
  fn from(x: BigInt) -> Self { Literal::Int(x) }
}

impl From<&BigInt> for Literal {
  fn from(x: &BigInt) -> Self { Literal::Int(x.clone()) }
}

impl From<f64> for Literal {
  fn from(x: f64) -> Self { Literal::Float(x) }
}

impl From<f32> for Literal {
  fn from(x: f32) -> Self { Literal::Float(f64::from(x)) }
}

impl From<&str> for Literal {
  fn from(x: &str) -> Self { Literal::Bits(x.to_string()) }
}

impl From<String> for Literal {
  fn from(x: String) -> Self { Literal::Bits(x) }
}

/// The bits of another vector, keeping its width.
impl From<&BitVector> for Literal {
  fn from(x: &BitVector) -> Self { Literal::Bits(x.bin()) }
}

impl From<&UnsignedInt> for Literal {
  fn from(x: &UnsignedInt) -> Self { Literal::Int(x.to_bigint()) }
}

impl From<&SignedInt> for Literal {
  fn from(x: &SignedInt) -> Self { Literal::Int(x.to_bigint()) }
}


/// A parsed bit-pattern string.
#[derive(Debug)]
pub(crate) struct Pattern {
  /// The digits read as an unsigned number.
  pub bits:  BigUint,

  /// Total number of digits.
  pub width: u32,

  /// Number of digits after the binary point.
  pub frac:  u32
}

pub(crate) fn parse_pattern(s: &str, allow_point: bool) -> Result<Pattern> {
  let malformed = |reason| Error::MalformedLiteral { literal: s.to_string(), reason };

  let mut bits  = BigUint::zero();
  let mut width = 0_u32;
  let mut frac: Option<u32> = None;

  for c in s.chars() {
    match c {
      '0' | '1' => {
        bits = (bits << 1_usize) + u32::from(c == '1');
        width += 1;
        if let Some(f) = frac.as_mut() { *f += 1 }
      }
      '_' => (),
      '.' if !allow_point => return Err(malformed("binary point not allowed")),
      '.' if frac.is_some() => return Err(malformed("more than one binary point")),
      '.' => frac = Some(0),
      _ => return Err(malformed("expected only '0', '1', '_' or '.'"))
    }
  }

  if width == 0 { return Err(malformed("no digits")) }
  Ok(Pattern { bits, width, frac: frac.unwrap_or(0) })
}


/// A float split into `mantissa * 2^exponent` with an odd mantissa
/// (or zero).
#[derive(Debug,PartialEq)]
pub(crate) enum FloatParts {
  Finite { mantissa: BigInt, exponent: i32 },
  Infinite { negative: bool }
}

pub(crate) fn decompose(x: f64) -> Result<FloatParts> {
  if x.is_nan() { return Err(Error::NonFinite) }
  if x.is_infinite() {
    return Ok(FloatParts::Infinite { negative: x < 0.0 })
  }

  let (mantissa, exponent, sign) = x.integer_decode();
  if mantissa == 0 {
    return Ok(FloatParts::Finite { mantissa: BigInt::zero(), exponent: 0 })
  }

  let tz = mantissa.trailing_zeros();
  let m  = BigInt::from(mantissa >> tz);
  Ok(FloatParts::Finite {
    mantissa: if sign < 0 { -m } else { m },
    exponent: i32::from(exponent) + tz as i32
  })
}


/// An integer literal and the smallest width that holds it.
#[derive(Debug)]
pub(crate) struct IntLiteral {
  pub value: BigInt,
  pub width: u32
}

impl Literal {

  /// Read the literal as an integer. Bit patterns are read in two's
  /// complement when `signed` is set.
  pub(crate) fn to_integer(&self, signed: bool) -> Result<Checked<IntLiteral>> {
    match self {
      Literal::Int(v) => {
        let width = min_width(v, signed || v.is_negative());
        Ok(Checked::ok(IntLiteral { value: v.clone(), width }))
      }

      Literal::Float(x) => match decompose(*x)? {
        FloatParts::Infinite { .. } => Err(Error::NonFinite),
        FloatParts::Finite { mantissa, exponent } => {
          let value = shift(&mantissa, exponent);
          let width = min_width(&value, signed || value.is_negative());
          let lit   = IntLiteral { value, width };
          Ok(if exponent < 0 && !mantissa.is_zero() {
            Checked::warn(lit, Warning::FractionDropped)
          } else {
            Checked::ok(lit)
          })
        }
      },

      Literal::Bits(s) => {
        let p     = parse_pattern(s, false)?;
        let value = wrap(&BigInt::from(p.bits), p.width, signed);
        Ok(Checked::ok(IntLiteral { value, width: p.width }))
      }
    }
  }
}
