//! ECB-mode evaluation of GIFT-128 and its GIFTb-128 variant.
//!
//! # Features
//!
//! - [`gift128_encrypt_ecb`]/[`gift128_decrypt_ecb`]: standard GIFT-128.
//! - [`giftb128_encrypt_ecb`]/[`giftb128_decrypt_ecb`]: the "b"-variant used
//!   as GIFT-COFB's keyed primitive, exposed here for ECB-mode testing.
//!
//! # Usage
//!
//! ```
//! use gift_cofb::gift128::{gift128_encrypt_ecb, gift128_decrypt_ecb};
//!
//! let key = [0u8; 16];
//! let plaintext = [0u8; 16];
//! let ciphertext = gift128_encrypt_ecb(&plaintext, &key).unwrap();
//! let recovered = gift128_decrypt_ecb(&ciphertext, &key).unwrap();
//! assert_eq!(plaintext.to_vec(), recovered);
//! ```

use std::error::Error;

use super::core::{
    giftb128_decrypt_block, giftb128_encrypt_block, gift128_decrypt_block, gift128_encrypt_block,
    GIFT128_BLOCK_SIZE,
};
use super::key_schedule::precompute_rkeys_128;

fn validate_len(data: &[u8]) -> Result<(), Box<dyn Error>> {
    if data.len() % GIFT128_BLOCK_SIZE != 0 {
        return Err(format!(
            "GIFT-128 ERROR: input length must be a multiple of {} bytes",
            GIFT128_BLOCK_SIZE
        )
        .into());
    }
    Ok(())
}

/// Encrypt `plaintext` (a multiple of 16 bytes) under `key` in ECB mode.
pub fn gift128_encrypt_ecb(plaintext: &[u8], key: &[u8; 16]) -> Result<Vec<u8>, Box<dyn Error>> {
    validate_len(plaintext)?;
    let rkey = precompute_rkeys_128(key);
    let mut out = Vec::with_capacity(plaintext.len());
    for chunk in plaintext.chunks_exact(16) {
        let mut block = [0u8; 16];
        block.copy_from_slice(chunk);
        out.extend_from_slice(&gift128_encrypt_block(&block, &rkey));
    }
    Ok(out)
}

/// Decrypt `ciphertext` (a multiple of 16 bytes) under `key` in ECB mode.
pub fn gift128_decrypt_ecb(ciphertext: &[u8], key: &[u8; 16]) -> Result<Vec<u8>, Box<dyn Error>> {
    validate_len(ciphertext)?;
    let rkey = precompute_rkeys_128(key);
    let mut out = Vec::with_capacity(ciphertext.len());
    for chunk in ciphertext.chunks_exact(16) {
        let mut block = [0u8; 16];
        block.copy_from_slice(chunk);
        out.extend_from_slice(&gift128_decrypt_block(&block, &rkey));
    }
    Ok(out)
}

/// Encrypt under GIFTb-128 (no packing), used internally by GIFT-COFB.
pub fn giftb128_encrypt_ecb(plaintext: &[u8], key: &[u8; 16]) -> Result<Vec<u8>, Box<dyn Error>> {
    validate_len(plaintext)?;
    let rkey = precompute_rkeys_128(key);
    let mut out = Vec::with_capacity(plaintext.len());
    for chunk in plaintext.chunks_exact(16) {
        let mut block = [0u8; 16];
        block.copy_from_slice(chunk);
        out.extend_from_slice(&giftb128_encrypt_block(&block, &rkey));
    }
    Ok(out)
}

/// Decrypt under GIFTb-128.
pub fn giftb128_decrypt_ecb(ciphertext: &[u8], key: &[u8; 16]) -> Result<Vec<u8>, Box<dyn Error>> {
    validate_len(ciphertext)?;
    let rkey = precompute_rkeys_128(key);
    let mut out = Vec::with_capacity(ciphertext.len());
    for chunk in ciphertext.chunks_exact(16) {
        let mut block = [0u8; 16];
        block.copy_from_slice(chunk);
        out.extend_from_slice(&giftb128_decrypt_block(&block, &rkey));
    }
    Ok(out)
}
