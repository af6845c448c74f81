//! GIFT-64: the 64-bit-block member of the GIFT family, fixsliced.
//!
//! # Features
//!
//! - [`quadruple_round`]/[`inv_quadruple_round`]: 4 rounds fused into a
//!   single pass over the fixsliced state, amortizing the linear layer into
//!   a short sequence of word/nibble rotations.
//! - ECB-mode single/double-block evaluation (`gift64_encrypt_ecb`,
//!   `gift64_decrypt_ecb`), batching two 64-bit blocks per state evaluation
//!   when two are available, the way the reference `encrypt.c` does.
//! - The `giftb64` interleaved-input variant (no basis change, just nibble
//!   interleaving), used where a caller needs the raw cipher without GIFT-64's
//!   two-block packing.
//!
//! # Disclaimer
//!
//! This module implements the block cipher only: key management, nonce
//! handling, and authenticated encryption live in [`crate::cofb`] for the
//! 128-bit sibling; GIFT-64 here is exposed purely as an ECB primitive for
//! testing and composition.

mod core;
mod ecb;
mod key_schedule;

pub use core::*;
pub use ecb::*;
pub use key_schedule::*;

#[cfg(test)]
mod tests;
