use crate::error::FountainError;

/// Derived sizing for a fountain-coded message: `len` bytes split into
/// `block_count` fixed-size blocks of `block_size` bytes, the final block
/// zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    len: u64,
    block_size: u32,
    block_count: u32,
}

impl Metadata {
    /// Derives `N = ceil(L / B)` from a message length and block size.
    pub fn new(len: u64, block_size: u32) -> Result<Metadata, FountainError> {
        if len == 0 {
            return Err(FountainError::EmptyMessage);
        }
        if block_size == 0 {
            return Err(FountainError::ZeroBlockSize);
        }

        let block_size_u64 = block_size as u64;
        let block_count = len.div_ceil(block_size_u64);
        if block_count > u32::MAX as u64 {
            return Err(FountainError::BlockCountOverflow);
        }

        Ok(Metadata {
            len,
            block_size,
            block_count: block_count as u32,
        })
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn block_count(&self) -> u32 {
        self.block_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_message() {
        assert!(matches!(
            Metadata::new(0, 4),
            Err(FountainError::EmptyMessage)
        ));
    }

    #[test]
    fn rejects_zero_block_size() {
        assert!(matches!(
            Metadata::new(10, 0),
            Err(FountainError::ZeroBlockSize)
        ));
    }

    #[test]
    fn derives_block_count_with_padding() {
        let m = Metadata::new(10, 4).unwrap();
        assert_eq!(m.block_count(), 3);
        assert_eq!(m.len(), 10);
        assert_eq!(m.block_size(), 4);
    }

    #[test]
    fn exact_multiple_needs_no_padding_block() {
        let m = Metadata::new(12, 4).unwrap();
        assert_eq!(m.block_count(), 3);
    }

    #[test]
    fn single_byte_block_size() {
        let m = Metadata::new(7, 1).unwrap();
        assert_eq!(m.block_count(), 7);
    }
}
