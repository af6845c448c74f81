//! GIFT-128: the 128-bit-block member of the GIFT family, fixsliced.
//!
//! # Features
//!
//! - [`quintuple_round`]/[`inv_quintuple_round`]: 5 rounds fused into a
//!   single pass over the fixsliced state.
//! - Block-level (`gift128_encrypt_block`) and ECB-mode
//!   (`gift128_encrypt_ecb`) entry points for the standard variant.
//! - GIFTb-128, the "b"-variant with no external bit permutation, used as
//!   [`crate::cofb`]'s keyed primitive.
//!
//! # Disclaimer
//!
//! Pure software implementation; no platform-specific SIMD or assembly
//! kernels. Intended for correctness and composition with [`crate::cofb`],
//! not for squeezing out the last cycle the way a microcontroller port
//! would.

mod core;
mod ecb;
mod key_schedule;

pub use core::*;
pub use ecb::*;
pub use key_schedule::*;

#[cfg(test)]
mod tests;
