use super::super::ecb::*;

#[test]
fn gift128_ecb_round_trips_single_block() {
    let key = [0x42u8; 16];
    let plaintext = [0u8; 16];
    let ct = gift128_encrypt_ecb(&plaintext, &key).unwrap();
    let pt = gift128_decrypt_ecb(&ct, &key).unwrap();
    assert_eq!(pt, plaintext.to_vec());
}

#[test]
fn gift128_ecb_round_trips_multiple_blocks() {
    let key = [0x11u8; 16];
    let plaintext: Vec<u8> = (0..48).collect();
    let ct = gift128_encrypt_ecb(&plaintext, &key).unwrap();
    let pt = gift128_decrypt_ecb(&ct, &key).unwrap();
    assert_eq!(pt, plaintext);
}

#[test]
fn gift128_ecb_rejects_unaligned_input() {
    let key = [0u8; 16];
    let plaintext = [0u8; 10];
    assert!(gift128_encrypt_ecb(&plaintext, &key).is_err());
}

#[test]
fn giftb128_ecb_round_trips() {
    let key = [0x99u8; 16];
    let plaintext: Vec<u8> = (0..32).collect();
    let ct = giftb128_encrypt_ecb(&plaintext, &key).unwrap();
    let pt = giftb128_decrypt_ecb(&ct, &key).unwrap();
    assert_eq!(pt, plaintext);
}

#[test]
fn gift128_and_giftb128_differ() {
    let key = [0x55u8; 16];
    let plaintext: Vec<u8> = (0..16).collect();
    let a = gift128_encrypt_ecb(&plaintext, &key).unwrap();
    let b = giftb128_encrypt_ecb(&plaintext, &key).unwrap();
    assert_ne!(a, b);
}
