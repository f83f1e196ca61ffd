use log::{debug, trace};
use rand::Rng;

use crate::encoder::Encoder;
use crate::error::FountainError;
use crate::hold::Hold;
use crate::metadata::Metadata;
use crate::packet::Packet;

/// Configuration for a `Decoder`, exposing the hold growth granularity.
#[derive(Debug, Clone, Copy)]
pub struct DecoderOptions {
    pub hold_granularity: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            hold_granularity: 256,
        }
    }
}

/// The reconstructed message plus the number of packets pulled from the
/// encoder before every block was decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutcome {
    pub message: Vec<u8>,
    pub packets_pulled: u64,
}

// Either the loop should pull a fresh packet next, or the same (reduced)
// packet must be re-inspected before anything else happens.
enum NextStep {
    PullFresh,
    ReprocessReduced(Packet),
}

/// Stateful peeling decoder. Owns the RNG-consuming encoder it pulls
/// packets from, the recovered `solved` buffer, the `decoded` bitmap, and
/// the `hold` of unresolved packets.
pub struct Decoder {
    metadata: Metadata,
    encoder: Encoder,
    solved: Vec<u8>,
    decoded: Vec<bool>,
    hold: Hold,
}

impl Decoder {
    pub fn new(message: &[u8], block_size: u32) -> Result<Decoder, FountainError> {
        Decoder::with_options(message, block_size, DecoderOptions::default())
    }

    pub fn with_options(
        message: &[u8],
        block_size: u32,
        options: DecoderOptions,
    ) -> Result<Decoder, FountainError> {
        let encoder = Encoder::new(message, block_size)?;
        let metadata = encoder.metadata();
        let block_size = metadata.block_size() as usize;
        let block_count = metadata.block_count() as usize;

        Ok(Decoder {
            metadata,
            encoder,
            solved: vec![0u8; block_size * block_count],
            decoded: vec![false; block_count],
            hold: Hold::new(options.hold_granularity),
        })
    }

    /// Runs the decode loop to completion and returns the reconstructed
    /// message truncated to the original length, plus the packet-pull
    /// count.
    pub fn decode<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<DecodeOutcome, FountainError> {
        let mut packets_pulled: u64 = 0;
        let mut current: Option<Packet> = None;

        loop {
            let packet = match current.take() {
                Some(packet) => packet,
                None => {
                    packets_pulled += 1;
                    let packet = self.encoder.encode(rng);
                    trace!("pulled packet #{packets_pulled}: {packet:?}");
                    packet
                }
            };

            match self.process_packet(packet)? {
                NextStep::PullFresh => {
                    if self.is_complete() {
                        break;
                    }
                }
                NextStep::ReprocessReduced(reduced) => current = Some(reduced),
            }
        }

        Ok(DecodeOutcome {
            message: self.finish(),
            packets_pulled,
        })
    }

    fn is_complete(&self) -> bool {
        self.decoded.iter().all(|&done| done)
    }

    fn decoded_count(&self) -> usize {
        self.decoded.iter().filter(|&&done| done).count()
    }

    fn block_slice(&self, index: u32) -> &[u8] {
        let block_size = self.metadata.block_size() as usize;
        let start = index as usize * block_size;
        &self.solved[start..start + block_size]
    }

    fn set_block(&mut self, index: u32, payload: &[u8]) {
        let block_size = self.metadata.block_size() as usize;
        let start = index as usize * block_size;
        self.solved[start..start + block_size].copy_from_slice(payload);
        self.decoded[index as usize] = true;
        debug!(
            "block {index} decoded ({}/{})",
            self.decoded_count(),
            self.decoded.len()
        );
    }

    /// One iteration of the decode loop: either resolves a degree-1
    /// packet (cascading through the hold), peels a degree >= 2 packet
    /// against an already-decoded dependency, or files it in the hold.
    fn process_packet(&mut self, mut packet: Packet) -> Result<NextStep, FountainError> {
        if packet.degree == 1 {
            let index = packet.blocks[0];
            if self.decoded[index as usize] {
                trace!("discarding redundant degree-1 packet for block {index}");
            } else {
                self.resolve(index, packet.payload);
            }
            return Ok(NextStep::PullFresh);
        }

        // Peel against already-decoded blocks: the first decoded index
        // found is XORed out and removed; the reduced packet is
        // re-inspected rather than discarded or held.
        if let Some(pos) = packet
            .blocks
            .iter()
            .position(|&index| self.decoded[index as usize])
        {
            let index = packet.blocks[pos];
            let block = self.block_slice(index).to_vec();
            packet.reduce(index, &block);
            return Ok(NextStep::ReprocessReduced(packet));
        }

        let inserted = self.hold.insert(packet)?;
        if !inserted {
            trace!("discarding packet already present in hold");
        }
        Ok(NextStep::PullFresh)
    }

    /// Handles a newly decoded block and cascades the reduction through the
    /// hold: each held packet that references the decoded block has it
    /// XORed out, and any held packet reduced down to degree 1 gets queued
    /// for the same treatment. Driven from an explicit worklist rather than
    /// recursion, so a block solved by reducing packet `j` never shifts the
    /// hold out from under a scan that is still walking toward `j`.
    fn resolve(&mut self, index: u32, payload: Vec<u8>) {
        let mut worklist = vec![(index, payload)];

        while let Some((index, payload)) = worklist.pop() {
            self.set_block(index, &payload);

            let mut i = 0;
            while i < self.hold.len() {
                if self.hold.get_mut(i).blocks.contains(&index) {
                    self.hold.get_mut(i).reduce(index, &payload);

                    if self.hold.get_mut(i).is_solved() {
                        let solved = self.hold.remove(i);
                        let solved_index = solved.blocks[0];
                        if !self.decoded[solved_index as usize] {
                            worklist.push((solved_index, solved.payload));
                        }
                        continue;
                    }
                }
                i += 1;
            }
        }
    }

    fn finish(&self) -> Vec<u8> {
        self.solved[..self.metadata.len() as usize].to_vec()
    }
}
