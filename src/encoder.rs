use log::trace;
use rand::Rng;

use crate::distribution::{sample_distinct_indices, TriangularDistribution};
use crate::error::FountainError;
use crate::metadata::Metadata;
use crate::packet::{xor_into, Packet};

// Precomputes and owns the zero-padded source blocks once at construction
// instead of re-slicing the message on every call to encode().
pub struct Encoder {
    blocks: Vec<Vec<u8>>,
    metadata: Metadata,
    distribution: TriangularDistribution,
}

impl Encoder {
    pub fn new(message: &[u8], block_size: u32) -> Result<Encoder, FountainError> {
        let metadata = Metadata::new(message.len() as u64, block_size)?;
        let blocks = split_into_blocks(message, &metadata);
        let distribution = TriangularDistribution::new(metadata.block_count());

        Ok(Encoder {
            blocks,
            metadata,
            distribution,
        })
    }

    pub fn metadata(&self) -> Metadata {
        self.metadata
    }

    /// Samples a degree from the triangular distribution, draws that many
    /// distinct block indices by uniform-with-rejection, and XORs the
    /// referenced blocks into a fresh payload.
    pub fn encode<R: Rng + ?Sized>(&self, rng: &mut R) -> Packet {
        let degree = self.distribution.sample(rng);
        let blocks = sample_distinct_indices(degree, self.metadata.block_count(), rng);

        let mut payload = vec![0u8; self.metadata.block_size() as usize];
        for &index in &blocks {
            xor_into(&mut payload, &self.blocks[index as usize]);
        }

        trace!("encoded packet: degree={degree} blocks={blocks:?}");

        Packet::new(blocks, payload)
    }
}

/// Splits `message` into `metadata.block_count()` blocks of
/// `metadata.block_size()` bytes, zero-padding the final block.
pub fn split_into_blocks(message: &[u8], metadata: &Metadata) -> Vec<Vec<u8>> {
    let block_size = metadata.block_size() as usize;
    let mut blocks = Vec::with_capacity(metadata.block_count() as usize);
    for chunk in message.chunks(block_size) {
        let mut block = vec![0u8; block_size];
        block[..chunk.len()].copy_from_slice(chunk);
        blocks.push(block);
    }
    blocks
}
