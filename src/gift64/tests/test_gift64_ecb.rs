use super::super::ecb::*;

#[test]
fn gift64_ecb_round_trips_single_block() {
    let key = [0x42u8; 16];
    let plaintext = [0u8; 8];
    let ct = gift64_encrypt_ecb(&plaintext, &key).unwrap();
    let pt = gift64_decrypt_ecb(&ct, &key).unwrap();
    assert_eq!(pt, plaintext.to_vec());
}

#[test]
fn gift64_ecb_round_trips_two_blocks() {
    let key = [0x11u8; 16];
    let plaintext: Vec<u8> = (0..16).collect();
    let ct = gift64_encrypt_ecb(&plaintext, &key).unwrap();
    let pt = gift64_decrypt_ecb(&ct, &key).unwrap();
    assert_eq!(pt, plaintext);
}

#[test]
fn gift64_ecb_round_trips_three_blocks() {
    let key = [0x77u8; 16];
    let plaintext: Vec<u8> = (0..24).collect();
    let ct = gift64_encrypt_ecb(&plaintext, &key).unwrap();
    let pt = gift64_decrypt_ecb(&ct, &key).unwrap();
    assert_eq!(pt, plaintext);
}

#[test]
fn gift64_ecb_rejects_unaligned_input() {
    let key = [0u8; 16];
    let plaintext = [0u8; 5];
    assert!(gift64_encrypt_ecb(&plaintext, &key).is_err());
}

#[test]
fn giftb64_ecb_round_trips() {
    let key = [0x99u8; 16];
    let plaintext: Vec<u8> = (0..16).collect();
    let ct = giftb64_encrypt_ecb(&plaintext, &key).unwrap();
    let pt = giftb64_decrypt_ecb(&ct, &key).unwrap();
    assert_eq!(pt, plaintext);
}

#[test]
fn gift64_and_giftb64_differ() {
    let key = [0x55u8; 16];
    let plaintext: Vec<u8> = (0..16).collect();
    let a = gift64_encrypt_ecb(&plaintext, &key).unwrap();
    let b = giftb64_encrypt_ecb(&plaintext, &key).unwrap();
    assert_ne!(a, b);
}
