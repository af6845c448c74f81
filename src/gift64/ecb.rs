//! ECB-mode evaluation of GIFT-64 and its `giftb64` variant.
//!
//! # Features
//!
//! - [`gift64_encrypt_ecb`]/[`gift64_decrypt_ecb`]: standard GIFT-64, batching
//!   two 8-byte blocks per state evaluation when two are available.
//! - [`giftb64_encrypt_ecb`]/[`giftb64_decrypt_ecb`]: the interleaved-input
//!   variant, used where a caller needs the raw cipher without the basis
//!   change `packing`/`unpacking` apply.
//!
//! # Usage
//!
//! ```
//! use gift_cofb::gift64::{gift64_encrypt_ecb, gift64_decrypt_ecb};
//!
//! let key = [0u8; 16];
//! let plaintext = [0u8; 16]; // two 8-byte blocks
//! let ciphertext = gift64_encrypt_ecb(&plaintext, &key).unwrap();
//! let recovered = gift64_decrypt_ecb(&ciphertext, &key).unwrap();
//! assert_eq!(plaintext.to_vec(), recovered);
//! ```

use std::error::Error;

use super::core::{
    gift64_decrypt_state, gift64_encrypt_state, packing, packing_interleave, unpacking,
    unpacking_interleave,
};
use super::key_schedule::precompute_rkeys_64;
use super::GIFT64_BLOCK_SIZE;

fn validate_len(data: &[u8]) -> Result<(), Box<dyn Error>> {
    if data.len() % GIFT64_BLOCK_SIZE != 0 {
        return Err(format!(
            "GIFT-64 ERROR: input length must be a multiple of {} bytes",
            GIFT64_BLOCK_SIZE
        )
        .into());
    }
    Ok(())
}

fn block_at(data: &[u8], index: usize) -> [u8; 8] {
    let mut block = [0u8; 8];
    block.copy_from_slice(&data[index * 8..index * 8 + 8]);
    block
}

/// Encrypt `plaintext` (a multiple of 8 bytes) under `key` in ECB mode.
pub fn gift64_encrypt_ecb(plaintext: &[u8], key: &[u8; 16]) -> Result<Vec<u8>, Box<dyn Error>> {
    validate_len(plaintext)?;
    let rkey = precompute_rkeys_64(key);
    let blocks = plaintext.len() / 8;
    let mut out = Vec::with_capacity(plaintext.len());

    let mut i = 0;
    while i < blocks {
        let b0 = block_at(plaintext, i);
        let b1 = if i + 1 < blocks {
            block_at(plaintext, i + 1)
        } else {
            [0u8; 8]
        };
        let mut state = packing(&b0, &b1);
        gift64_encrypt_state(&mut state, &rkey);
        let (c0, c1) = unpacking(&state);
        out.extend_from_slice(&c0);
        if i + 1 < blocks {
            out.extend_from_slice(&c1);
        }
        i += 2;
    }
    Ok(out)
}

/// Decrypt `ciphertext` (a multiple of 8 bytes) under `key` in ECB mode.
pub fn gift64_decrypt_ecb(ciphertext: &[u8], key: &[u8; 16]) -> Result<Vec<u8>, Box<dyn Error>> {
    validate_len(ciphertext)?;
    let rkey = precompute_rkeys_64(key);
    let blocks = ciphertext.len() / 8;
    let mut out = Vec::with_capacity(ciphertext.len());

    let mut i = 0;
    while i < blocks {
        let b0 = block_at(ciphertext, i);
        let b1 = if i + 1 < blocks {
            block_at(ciphertext, i + 1)
        } else {
            [0u8; 8]
        };
        let mut state = packing(&b0, &b1);
        gift64_decrypt_state(&mut state, &rkey);
        let (p0, p1) = unpacking(&state);
        out.extend_from_slice(&p0);
        if i + 1 < blocks {
            out.extend_from_slice(&p1);
        }
        i += 2;
    }
    Ok(out)
}

/// Encrypt under the interleaved-input `giftb64` variant (no basis change).
pub fn giftb64_encrypt_ecb(plaintext: &[u8], key: &[u8; 16]) -> Result<Vec<u8>, Box<dyn Error>> {
    validate_len(plaintext)?;
    let rkey = precompute_rkeys_64(key);
    let blocks = plaintext.len() / 8;
    let mut out = Vec::with_capacity(plaintext.len());

    let mut i = 0;
    while i < blocks {
        let b0 = block_at(plaintext, i);
        let b1 = if i + 1 < blocks {
            block_at(plaintext, i + 1)
        } else {
            [0u8; 8]
        };
        let mut state = packing_interleave(&b0, &b1);
        gift64_encrypt_state(&mut state, &rkey);
        let (c0, c1) = unpacking_interleave(&state);
        out.extend_from_slice(&c0);
        if i + 1 < blocks {
            out.extend_from_slice(&c1);
        }
        i += 2;
    }
    Ok(out)
}

/// Decrypt under the interleaved-input `giftb64` variant.
pub fn giftb64_decrypt_ecb(ciphertext: &[u8], key: &[u8; 16]) -> Result<Vec<u8>, Box<dyn Error>> {
    validate_len(ciphertext)?;
    let rkey = precompute_rkeys_64(key);
    let blocks = ciphertext.len() / 8;
    let mut out = Vec::with_capacity(ciphertext.len());

    let mut i = 0;
    while i < blocks {
        let b0 = block_at(ciphertext, i);
        let b1 = if i + 1 < blocks {
            block_at(ciphertext, i + 1)
        } else {
            [0u8; 8]
        };
        let mut state = packing_interleave(&b0, &b1);
        gift64_decrypt_state(&mut state, &rkey);
        let (p0, p1) = unpacking_interleave(&state);
        out.extend_from_slice(&p0);
        if i + 1 < blocks {
            out.extend_from_slice(&p1);
        }
        i += 2;
    }
    Ok(out)
}
