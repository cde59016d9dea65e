use std::marker::PhantomData;
use num::BigInt;
use crate::BitVector;
use crate::core::{pattern_of, pow2};
use crate::error::{Error, Result};

/// Specify from which side of a vector we are iterating.
#[derive(Clone,Copy)]
pub enum IndexFrom {
  /// Start at the least significant bit.
  Lsb,

  /// Start at the most significant bit.
  Msb
}

/// Direction for iteration.
pub trait IndexDir {
  const DIR: IndexFrom;
}

/// Iterate from the least significant side.
#[derive(Clone,Copy)]
pub struct FromLSB;

/// Iterate from the most significant side.
#[derive(Clone,Copy)]
pub struct FromMSB;

impl IndexDir for FromLSB { const DIR: IndexFrom = IndexFrom::Lsb; }
impl IndexDir for FromMSB { const DIR: IndexFrom = IndexFrom::Msb; }


impl BitVector {

  fn check_index(&self, index: i32) -> Result<()> {
    if index < self.low() || index >= self.high() {
      return Err(Error::IndexOutOfRange {
        index, high: self.high(), low: self.low() })
    }
    Ok(())
  }

  fn check_slice(&self, i: i32, j: i32) -> Result<()> {
    if i <= j { return Err(Error::SliceOrder { i, j }) }
    if j < self.low() {
      return Err(Error::IndexOutOfRange { index: j, high: self.high(), low: self.low() })
    }
    if i > self.high() {
      return Err(Error::IndexOutOfRange { index: i, high: self.high(), low: self.low() })
    }
    Ok(())
  }

  /// The bit at absolute position `index`.
  pub fn bit(&self, index: i32) -> Result<bool> {
    self.check_index(index)?;
    Ok(self.pattern().bit((index - self.low()) as u64))
  }

  /// Set the bit at absolute position `index`.
  pub fn set_bit(&mut self, index: i32, value: bool) -> Result<()> {
    self.check_index(index)?;
    let mut p = self.pattern();
    p.set_bit((index - self.low()) as u64, value);
    self.store(p);
    Ok(())
  }

  /// Bits `j .. i` (hardware `i-1 downto j`) as a new unsigned vector with
  /// `low = 0`.
  pub fn slice(&self, i: i32, j: i32) -> Result<BitVector> {
    self.check_slice(i, j)?;
    let w    = (i - j) as u32;
    let bits = pattern_of(&(self.pattern() >> (j - self.low()) as usize), w);
    Ok(BitVector::from_raw(w as i32, 0, bits, false))
  }

  /// Overwrite bits `j .. i` with the bits of `v`, which must have exactly
  /// `i - j` bits.
  pub fn set_slice(&mut self, i: i32, j: i32, v: &BitVector) -> Result<()> {
    self.check_slice(i, j)?;
    let expected = (i - j) as u32;
    if v.width() != expected {
      return Err(Error::LengthMismatch { expected, found: v.width() })
    }
    let off   = (j - self.low()) as usize;
    let field = (pow2(expected) - 1) << off;
    let keep  = self.pattern() & (pow2(self.width()) - 1 - field);
    self.store(keep | (v.pattern() << off));
    Ok(())
  }

  /// Put `lower` below this vector. The result is unsigned with `low = 0`.
  pub fn append(&self, lower: &BitVector) -> BitVector {
    let w     = self.width() + lower.width();
    let value = (self.pattern() << lower.width() as usize) | lower.pattern();
    BitVector::from_raw(w as i32, 0, value, false)
  }

  /// Join vectors, most significant first.
  pub fn concat<I>(parts: I) -> Result<BitVector>
    where I: IntoIterator, I::Item: Into<BitVector> {
    let mut it = parts.into_iter();
    let first: BitVector = match it.next() {
      Some(x) => x.into(),
      None    => return Err(Error::InvalidBounds { high: 0, low: 0 })
    };
    let first = BitVector::from_raw(first.width() as i32, 0, first.pattern(), false);
    Ok(it.fold(first, |acc, x| acc.append(&x.into())))
  }

  /// Iterate over the bits.
  pub fn iter_bits<INDEX: IndexDir>(&self) -> Bits<INDEX> {
    Bits { dir: PhantomData, bits: self.pattern(), width: self.width(), ix: 0 }
  }

  /// Iterate over the bits, starting at the most significant end.
  pub fn iter_bits_msb(&self) -> Bits<FromMSB> { self.iter_bits() }

  /// Iterate over the bits, starting at the least significant end.
  pub fn iter_bits_lsb(&self) -> Bits<FromLSB> { self.iter_bits() }
}


/// Traverse the bits of a vector.
#[derive(Clone)]
pub struct Bits<INDEX: IndexDir> {
  dir:   PhantomData<INDEX>,
  bits:  BigInt,
  width: u32,
  ix:    u32
}

impl<INDEX: IndexDir> Iterator for Bits<INDEX> {
  type Item = bool;

  fn next(&mut self) -> Option<bool> {
    if self.ix >= self.width { return None }
    let i = match INDEX::DIR {
              IndexFrom::Msb => self.width - self.ix - 1,
              IndexFrom::Lsb => self.ix
            };
    self.ix += 1;
    Some(self.bits.bit(u64::from(i)))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = (self.width - self.ix) as usize;
    (n, Some(n))
  }
}

impl<INDEX: IndexDir> ExactSizeIterator for Bits<INDEX> {}
