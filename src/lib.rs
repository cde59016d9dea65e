//! Arbitrary width bit vectors and the hardware number types built on them:
//! unsigned and signed integers (`numeric_std`) and signed fixed point
//! numbers (`fixed_pkg`).
//!
//! Every value has explicit bit bounds `low .. high`. Arithmetic produces a
//! new value whose bounds follow from the operand bounds; assignment forms
//! (`+=`, `set_slice`, ...) keep the receiver's bounds, like a register.
//!
//! Lost precision (wrapping, saturation) is not an error. It is reported as
//! a `tracing` warning under the `hwnum::precision` target, and the `try_` /
//! `_exact` variants of the lossy operations turn it into
//! [`Error::PrecisionLoss`].

#[macro_use]
mod macros;

pub mod error;
pub mod config;
pub mod literal;
pub mod core;
pub mod index;
pub mod logic;
pub mod shift;
pub mod display;
pub mod resize;
pub mod unsigned;
pub mod signed;
pub mod arith;
pub mod cmp;
pub mod fixed;
pub mod fixed_arith;
pub mod traits;

#[cfg(test)]
pub mod proptest;

pub use crate::core::BitVector;
pub use crate::config::{MathConfig, Overflow, Rounding};
pub use crate::error::{Error, Result, Warning};
pub use crate::literal::Literal;
pub use crate::index::{Bits, IndexDir, IndexFrom, FromLSB, FromMSB};
pub use crate::unsigned::UnsignedInt;
pub use crate::signed::SignedInt;
pub use crate::fixed::FixedPoint;
pub use crate::traits::{Kind, Numeric};
