use num::{BigInt, BigUint};
use crate::{BitVector, FixedPoint, MathConfig, SignedInt, UnsignedInt};
use crate::core::wrap;
use proptest::prelude::*;
use proptest::strategy::*;
use proptest::arbitrary::*;
use proptest::test_runner::*;

/// A random payload of `width` bits.
fn payload(rng: &mut TestRng, width: u32, signed: bool) -> BigInt {
  let limbs = (0 .. (width + 31) / 32).map(|_| rng.next_u32()).collect();
  wrap(&BigInt::from(BigUint::new(limbs)), width, signed)
}

macro_rules! no_shrink {
  ($ty:ty) => {
    impl ValueTree for $ty {
      type Value = $ty;
      fn current(&self) -> $ty { self.clone() }
      fn simplify(&mut self) -> bool { false }
      fn complicate(&mut self) -> bool { false }
    }
  };
}

no_shrink!(BitVector);
no_shrink!(UnsignedInt);
no_shrink!(SignedInt);
no_shrink!(FixedPoint);

/// Values of one type with a given width.
#[derive(Debug)]
pub struct WidthStrategy<T> { pub width: u32, kind: std::marker::PhantomData<T> }

impl<T> WidthStrategy<T> {
  fn new(width: u32) -> Self { WidthStrategy { width, kind: std::marker::PhantomData } }
}

/// Unsigned vectors with `low = 0`.
impl Strategy for WidthStrategy<BitVector> {
  type Tree  = BitVector;
  type Value = BitVector;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let w = self.width;
    Ok(BitVector::from_raw(w as i32, 0, payload(runner.rng(), w, false), false))
  }
}

impl Strategy for WidthStrategy<UnsignedInt> {
  type Tree  = UnsignedInt;
  type Value = UnsignedInt;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let w = self.width;
    Ok(UnsignedInt(BitVector::from_raw(w as i32, 0, payload(runner.rng(), w, false), false)))
  }
}

impl Strategy for WidthStrategy<SignedInt> {
  type Tree  = SignedInt;
  type Value = SignedInt;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let w = self.width;
    Ok(SignedInt(BitVector::from_raw(w as i32, 0, payload(runner.rng(), w, true), true)))
  }
}

/// The binary point lands anywhere from `width` bits below the vector to
/// `width` bits above it.
impl Strategy for WidthStrategy<FixedPoint> {
  type Tree  = FixedPoint;
  type Value = FixedPoint;

  fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
    let w   = self.width;
    let rng = runner.rng();
    let low = (rng.next_u32() % (2 * w + 1)) as i32 - w as i32;
    let v   = payload(rng, w, true);
    Ok(FixedPoint::from_parts(low + w as i32, low, v, MathConfig::default()))
  }
}

macro_rules! arbitrary_width {
  ($ty:ty) => {
    impl Arbitrary for $ty {
      type Parameters = u32;
      type Strategy   = WidthStrategy<$ty>;

      fn arbitrary_with(width: u32) -> Self::Strategy { WidthStrategy::new(width) }
    }
  };
}

arbitrary_width!(BitVector);
arbitrary_width!(UnsignedInt);
arbitrary_width!(SignedInt);
arbitrary_width!(FixedPoint);


/// Check a property for every width from 1 to 130 bits.
pub fn do_test<T: Arbitrary>
    ( s: fn (u32) -> StrategyFor<T>
    , p: fn(T)    -> Option<bool>
    ) {
  for width in 1 .. 131 {
    let mut cfg: Config = <_>::default();
    cfg.cases = 32;
    cfg.failure_persistence = None;
    let mut runner = TestRunner::new(cfg);
    let strategy = s(width);
    runner.run(&strategy, |arg| {
      match p(arg) {
        Some(result) =>
          if result { Ok(()) }
          else {
            Err(TestCaseError::Fail("unexpected result".into()))
          },
        None => Err(TestCaseError::Reject("invalid input".into()))
      }
    }).unwrap()
  }
}

pub fn vector(width: u32) -> StrategyFor<BitVector> {
  arbitrary_with(width)
}

/// Two vectors of the same format.
pub fn vector_pair(width: u32) -> StrategyFor<(BitVector,BitVector)> {
  arbitrary_with((width,width))
}

pub fn vector_and<T>(width: u32) -> StrategyFor<(BitVector,T)>
  where T: Arbitrary, T::Parameters: Default {
  arbitrary_with((width,T::Parameters::default()))
}

pub fn unsigned(width: u32) -> StrategyFor<UnsignedInt> {
  arbitrary_with(width)
}

pub fn signed(width: u32) -> StrategyFor<SignedInt> {
  arbitrary_with(width)
}

/// The second operand is narrower, so pairs of different widths are
/// covered too.
pub fn signed_pair(width: u32) -> StrategyFor<(SignedInt,SignedInt)> {
  arbitrary_with((width, 1 + width / 2))
}

pub fn fixed(width: u32) -> StrategyFor<FixedPoint> {
  arbitrary_with(width)
}

pub fn fixed_pair(width: u32) -> StrategyFor<(FixedPoint,FixedPoint)> {
  arbitrary_with((width, 1 + width / 3))
}
