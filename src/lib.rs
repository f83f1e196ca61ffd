//! A Luby-transform-style fountain codec: an encoder that produces
//! randomized XOR-combined packets over a fixed message, and a
//! belief-propagation (peeling) decoder that reconstructs the message from
//! a stream of such packets.
//!
//! The interesting part is entirely the decoder state machine: it holds
//! packets it cannot yet resolve, cascades reductions through that hold as
//! new blocks are decoded, and terminates once every source block is
//! recovered. This is a demonstrator, not a production erasure code: the
//! degree distribution is the simple triangular law, not an optimised
//! Robust Soliton, so decoding is not guaranteed to be packet-efficient,
//! only to terminate with probability 1.

mod distribution;
mod encoder;
mod error;
mod hold;
mod metadata;
mod packet;

pub mod decoder;

pub use decoder::{DecodeOutcome, Decoder, DecoderOptions};
pub use encoder::Encoder;
pub use error::FountainError;
pub use metadata::Metadata;
pub use packet::Packet;

use rand::Rng;

/// Produces one randomized packet over `message`, split into blocks of
/// `block_size` bytes.
///
/// This convenience function re-derives the message's block split on every
/// call; callers drawing more than one packet from the same message should
/// construct an [`Encoder`] once and call [`Encoder::encode`] repeatedly.
pub fn encode<R: Rng + ?Sized>(
    message: &[u8],
    block_size: u32,
    rng: &mut R,
) -> Result<Packet, FountainError> {
    Ok(Encoder::new(message, block_size)?.encode(rng))
}

/// Reconstructs `message` from a stream of packets pulled, one at a time,
/// from an in-process encoder over the same message. Returns a byte
/// sequence equal to `message`.
pub fn decode<R: Rng + ?Sized>(
    message: &[u8],
    block_size: u32,
    rng: &mut R,
) -> Result<Vec<u8>, FountainError> {
    let outcome = Decoder::new(message, block_size)?.decode(rng)?;
    Ok(outcome.message)
}
