//! A Rust-based software library for the GIFT family of lightweight
//! ciphers: the GIFT-128 and GIFT-64 block ciphers in their fixsliced
//! bitwise form, and GIFT-COFB, the authenticated-encryption mode built atop
//! GIFTb-128.
//!
//! # Modules
//!
//! - [`bits`]: bit-manipulation primitives (rotations, nibble-rotations,
//!   swap-move) shared by every cipher's linear layer and packing step.
//! - [`gift128`]: the 40-round GIFT-128 block cipher, its key schedule, and
//!   ECB-mode entry points for both the standard and `b`-variant.
//! - [`gift64`]: the 28-round GIFT-64 block cipher, its key schedule
//!   (including the two-key variant), and ECB-mode entry points.
//! - [`cofb`]: the GIFT-COFB AEAD construction, one-shot `encrypt`/`decrypt`.
//!
//! # Usage
//!
//! ```
//! use gift_cofb::cofb::{aead_decrypt, aead_encrypt};
//!
//! let key = [0u8; 16];
//! let nonce = [0u8; 16];
//! let ad = b"associated data";
//! let plaintext = b"secret message";
//!
//! let ciphertext = aead_encrypt(&key, &nonce, ad, plaintext);
//! let recovered = aead_decrypt(&key, &nonce, ad, &ciphertext).unwrap();
//! assert_eq!(recovered, plaintext);
//! ```

pub mod bits;
pub mod cofb;
pub mod gift128;
pub mod gift64;
