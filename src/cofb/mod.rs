//! GIFT-COFB: authenticated encryption with associated data, built atop the
//! `b`-variant of GIFT-128 (see [`crate::gift128`]) combined with a
//! COFB-style offset-feedback state machine.
//!
//! # Features
//!
//! - [`aead_encrypt`]/[`aead_decrypt`]: one-shot AEAD entry points producing
//!   (and verifying) `ciphertext || tag`.
//! - [`core`]: the feedback primitives (`double`/`triple`, `RHO`/`RHO'`/
//!   `RHO1`, padding) the state machine is built from, exposed for testing.

pub mod aead;
pub mod core;

pub use aead::{aead_decrypt, aead_encrypt, TAG_SIZE};
