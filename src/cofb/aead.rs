//! One-shot GIFT-COFB authenticated encryption, built on [`super::core`]'s
//! feedback primitives and the GIFTb-128 keyed permutation.
//!
//! # Usage
//!
//! ```
//! use gift_cofb::cofb::{aead_decrypt, aead_encrypt};
//!
//! let key = [0u8; 16];
//! let nonce = [0u8; 16];
//! let ad = b"header";
//! let pt = b"hello, gift-cofb";
//!
//! let ct = aead_encrypt(&key, &nonce, ad, pt);
//! let recovered = aead_decrypt(&key, &nonce, ad, &ct).unwrap();
//! assert_eq!(recovered, pt);
//! ```

use std::error::Error;

use super::core::{double, rho, rho1, rho_prime, triple, xor_top_bar_block};
use crate::gift128::{giftb128_encrypt_block, precompute_rkeys_128};

/// Size in bytes of the authentication tag GIFT-COFB appends to every
/// ciphertext.
pub const TAG_SIZE: usize = 16;

fn initial_state(key: &[u8; 16], nonce: &[u8; 16]) -> ([u32; 80], [u8; 16], u64) {
    let rkey = precompute_rkeys_128(key);
    let y = giftb128_encrypt_block(nonce, &rkey);
    let offset = u64::from_be_bytes(y[0..8].try_into().unwrap());
    (rkey, y, offset)
}

/// Run the associated-data half of the COFB state machine, returning the
/// updated feedback register and offset. `empty_m` folds in the message's
/// emptiness: domain separation between the four combinations of
/// {partial/full AD} x {empty/non-empty message} is encoded entirely in how
/// many times the offset is tripled here.
fn process_ad(
    rkey: &[u32; 80],
    mut y: [u8; 16],
    mut offset: u64,
    ad: &[u8],
    empty_m: bool,
) -> ([u8; 16], u64) {
    let empty_a = ad.is_empty();
    let mut remaining = ad;

    while remaining.len() > 16 {
        let mut input = rho1(&y, &remaining[..16]);
        offset = double(offset);
        xor_top_bar_block(&mut input, offset);
        y = giftb128_encrypt_block(&input, rkey);
        remaining = &remaining[16..];
    }

    offset = triple(offset);
    if remaining.len() % 16 != 0 || empty_a {
        offset = triple(offset);
    }
    if empty_m {
        offset = triple(offset);
        offset = triple(offset);
    }

    let mut input = rho1(&y, remaining);
    xor_top_bar_block(&mut input, offset);
    y = giftb128_encrypt_block(&input, rkey);

    (y, offset)
}

/// Encrypt `plaintext` under `key`/`nonce`/`ad`, returning `ciphertext || tag`.
pub fn aead_encrypt(key: &[u8; 16], nonce: &[u8; 16], ad: &[u8], plaintext: &[u8]) -> Vec<u8> {
    let empty_m = plaintext.is_empty();
    let (rkey, y0, offset0) = initial_state(key, nonce);
    let (mut y, mut offset) = process_ad(&rkey, y0, offset0, ad, empty_m);

    let mut ciphertext = Vec::with_capacity(plaintext.len() + TAG_SIZE);
    let mut remaining = plaintext;

    while remaining.len() > 16 {
        offset = double(offset);
        let (y_prime, c) = rho(&y, &remaining[..16]);
        ciphertext.extend_from_slice(&c);
        let mut input = y_prime;
        xor_top_bar_block(&mut input, offset);
        y = giftb128_encrypt_block(&input, &rkey);
        remaining = &remaining[16..];
    }

    if !empty_m {
        offset = triple(offset);
        if remaining.len() % 16 != 0 {
            offset = triple(offset);
        }
        let (y_prime, c) = rho(&y, remaining);
        ciphertext.extend_from_slice(&c);
        let mut input = y_prime;
        xor_top_bar_block(&mut input, offset);
        y = giftb128_encrypt_block(&input, &rkey);
    }

    ciphertext.extend_from_slice(&y);
    ciphertext
}

/// Decrypt `ciphertext` (ciphertext body followed by a 16-byte tag) under
/// `key`/`nonce`/`ad`, returning the recovered plaintext on success.
///
/// Returns an error if `ciphertext` is shorter than the tag or if the
/// recomputed tag does not match; the tag comparison accumulates over all
/// 16 bytes rather than early-exiting, so its timing does not leak which
/// byte first differed.
pub fn aead_decrypt(
    key: &[u8; 16],
    nonce: &[u8; 16],
    ad: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, Box<dyn Error>> {
    if ciphertext.len() < TAG_SIZE {
        return Err("GIFT-COFB ERROR: ciphertext shorter than the tag".into());
    }
    let (ct_body, tag) = ciphertext.split_at(ciphertext.len() - TAG_SIZE);
    let empty_m = ct_body.is_empty();

    let (rkey, y0, offset0) = initial_state(key, nonce);
    let (mut y, mut offset) = process_ad(&rkey, y0, offset0, ad, empty_m);

    let mut plaintext = Vec::with_capacity(ct_body.len());
    let mut remaining = ct_body;

    while remaining.len() > 16 {
        offset = double(offset);
        let (y_prime, m) = rho_prime(&y, &remaining[..16]);
        plaintext.extend_from_slice(&m);
        let mut input = y_prime;
        xor_top_bar_block(&mut input, offset);
        y = giftb128_encrypt_block(&input, &rkey);
        remaining = &remaining[16..];
    }

    if !empty_m {
        offset = triple(offset);
        if remaining.len() % 16 != 0 {
            offset = triple(offset);
        }
        let (y_prime, m) = rho_prime(&y, remaining);
        plaintext.extend_from_slice(&m);
        let mut input = y_prime;
        xor_top_bar_block(&mut input, offset);
        y = giftb128_encrypt_block(&input, &rkey);
    }

    let mut diff = 0u8;
    for i in 0..TAG_SIZE {
        diff |= tag[i] ^ y[i];
    }
    if diff != 0 {
        return Err("GIFT-COFB ERROR: authentication failed".into());
    }
    Ok(plaintext)
}
