//! GIFT-128 key schedule.
//!
//! The classical GIFT-128 key state is two 64-bit halves `k0`/`k1`, advanced
//! once per round; round `r`'s round key is the 64 bits of `k0` in effect
//! that round, split into a bit-plane-1 word `V` and a bit-plane-2 word `U`
//! (`V = k0 & 0xffffffff`, `U = (k0 >> 32) & 0xffffffff`). In the unpacked
//! cipher state those bits would land one-per-nibble at positions `4i+1`
//! (`V`) and `4i+2` (`U`), but [`super::quintuple_round`] operates on the
//! fixsliced state `packing` produces, not the unpacked one. So each round
//! key is scattered into a nibble-per-bit mask at the positions the unpacked
//! cipher would use, pushed through [`super::core::packing`] to move into
//! fixsliced form, and then rotated by the same primitives
//! `quintuple_round` itself applies to the state, so that it lands aligned
//! to whichever of the five sub-round phases consumes it.

use crate::bits::{nibble_ror_1, nibble_ror_2, nibble_ror_3, ror};

/// Scatter a round's `(V, U)` round-key halves into a 16-byte block with `V`
/// bit `i` at nibble position `4i+1` and `U` bit `i` at nibble position
/// `4i+2`, matching the positions those bits occupy in the unpacked cipher
/// state.
fn spread_round_key_block(v: u32, u: u32) -> [u8; 16] {
    let mut mask: u128 = 0;
    for i in 0..32u32 {
        mask |= (u128::from((v >> i) & 1)) << (4 * i + 1);
        mask |= (u128::from((u >> i) & 1)) << (4 * i + 2);
    }
    mask.to_be_bytes()
}

/// Carry a fixsliced bit-plane-1 round-key word from round-0 alignment to
/// the alignment `quintuple_round`'s phase-`phase` sub-round expects.
fn plane1_rotation(phase: usize, x: u32) -> u32 {
    let x = nibble_ror_1(x);
    if phase == 0 {
        return x;
    }
    let x = ror(x, 8);
    if phase == 1 {
        return x;
    }
    let x = nibble_ror_3(x);
    if phase == 2 {
        return x;
    }
    let x = ror(x, 24);
    if phase == 3 {
        return x;
    }
    nibble_ror_2(x)
}

/// Carry a fixsliced bit-plane-2 round-key word from round-0 alignment to
/// the alignment `quintuple_round`'s phase-`phase` sub-round expects.
fn plane2_rotation(phase: usize, x: u32) -> u32 {
    let x = nibble_ror_2(x);
    if phase == 0 {
        return x;
    }
    let x = ror(x, 16);
    if phase == 1 {
        return x;
    }
    let x = nibble_ror_2(x);
    if phase == 2 {
        return x;
    }
    let x = ror(x, 16);
    if phase == 3 {
        return x;
    }
    nibble_ror_1(x)
}

/// Expand a 16-byte key into the 80 round-key words consumed by 8
/// [`super::quintuple_round`] units.
pub fn precompute_rkeys_128(key: &[u8; 16]) -> [u32; 80] {
    let mut k1: u128 = 0;
    let mut k0: u128 = 0;
    for i in 0..8 {
        k1 = (k1 << 8) | u128::from(key[i]);
        k0 = (k0 << 8) | u128::from(key[i + 8]);
    }

    let mut rkey = [0u32; 80];
    for round in 0..40 {
        let v = (k0 & 0xffff_ffff) as u32;
        let u = ((k0 >> 32) & 0xffff_ffff) as u32;
        let phase = round % 5;

        let block = spread_round_key_block(v, u);
        let packed = super::core::packing(&block);
        rkey[2 * round] = plane1_rotation(phase, packed[1]);
        rkey[2 * round + 1] = plane2_rotation(phase, packed[2]);

        let t0 = k0;
        let t1 = k1;
        k0 = t0 >> 32;
        k0 ^= t1 << 32;
        k1 = t1 >> 32;
        k1 ^= ((((t0 & 0xffff) >> 12) ^ ((t0 & 0xffff) << 4)) & 0xffff) << 32;
        k1 ^= ((((t0 & 0xffff_0000) >> 2) ^ ((t0 & 0xffff_0000) << 14)) & 0xffff_0000) << 32;
    }
    rkey
}
