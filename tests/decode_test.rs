use peel_fountain::{decode, Decoder};
use rand::rngs::StdRng;
use rand::RngCore;
use rand::SeedableRng;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Scenario #1: a single byte, block size 1 - only degree-one packets exist,
// so the first packet decodes the message.
#[test]
fn scenario_single_byte_block_size_one() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(1);
    let decoded = decode(b"A", 1, &mut rng).unwrap();
    assert_eq!(decoded, b"A");
}

// Scenario #2: a longer message with an unaligned final block, run as a
// stable regression fixture.
#[test]
fn scenario_default_message() {
    init_logger();
    let message = b"Hello there you jammy little bugger!".to_vec();
    let mut rng = StdRng::seed_from_u64(2);
    let decoded = decode(&message, 20, &mut rng).unwrap();
    assert_eq!(decoded, message);
}

// Scenario #3: message length not a multiple of the block size; the final
// block is zero-padded internally and the output is truncated back to L.
#[test]
fn scenario_unaligned_message_length() {
    init_logger();
    let message = b"abcdefghij".to_vec();
    let mut rng = StdRng::seed_from_u64(3);
    let decoded = decode(&message, 4, &mut rng).unwrap();
    assert_eq!(decoded, message);
}

// Scenario #4: 256 bytes covering the full byte range, block size 16.
#[test]
fn scenario_full_byte_range() {
    init_logger();
    let message: Vec<u8> = (0..=255u8).collect();
    let mut rng = StdRng::seed_from_u64(4);
    let decoded = decode(&message, 16, &mut rng).unwrap();
    assert_eq!(decoded, message);
}

// Scenario #5: 1 KiB of seeded random payload, block size 64.
#[test]
fn scenario_one_kibibyte_random_payload() {
    init_logger();
    let mut seed_rng = StdRng::seed_from_u64(5);
    let mut message = vec![0u8; 1024];
    seed_rng.fill_bytes(&mut message);

    let mut rng = StdRng::seed_from_u64(500);
    let decoded = decode(&message, 64, &mut rng).unwrap();
    assert_eq!(decoded, message);
}

#[test]
fn decode_reports_packets_pulled() {
    init_logger();
    let message = b"abcdefghij".to_vec();
    let mut rng = StdRng::seed_from_u64(6);
    let outcome = Decoder::new(&message, 4).unwrap().decode(&mut rng).unwrap();
    assert_eq!(outcome.message, message);
    assert!(outcome.packets_pulled > 0);
}

#[test]
fn larger_message_round_trips_across_many_blocks() {
    init_logger();
    let mut seed_rng = StdRng::seed_from_u64(7);
    let mut message = vec![0u8; 64 * 1024];
    seed_rng.fill_bytes(&mut message);

    let mut rng = StdRng::seed_from_u64(700);
    let decoded = decode(&message, 256, &mut rng).unwrap();
    assert_eq!(decoded, message);
}
