use rand::Rng;

/// The triangular degree distribution: `Pr[d = k] = (N - k + 1) / T` with
/// `T = N(N+1)/2`, equivalently a uniform draw from the virtual multiset of
/// `N` copies of `1`, `N-1` copies of `2`, ..., `1` copy of `N`.
///
/// Holds a closed-form cumulative table over integer counts rather than
/// anything float-based, so there's no precision concern at the sampling
/// boundary.
#[derive(Debug, Clone)]
pub struct TriangularDistribution {
    block_count: u32,
    total: u64,
    cumulative: Vec<u64>,
}

impl TriangularDistribution {
    /// `block_count` must be `>= 1` (callers only ever construct this from
    /// an already-validated `Metadata`).
    pub fn new(block_count: u32) -> TriangularDistribution {
        let n = block_count as u64;
        let total = n * (n + 1) / 2;

        let mut cumulative = Vec::with_capacity(block_count as usize);
        let mut running = 0u64;
        for k in 1..=n {
            running += n - k + 1;
            cumulative.push(running);
        }

        TriangularDistribution {
            block_count,
            total,
            cumulative,
        }
    }

    /// Draws a degree `d` in `[1, N]` from the triangular law above.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if self.block_count == 1 {
            return 1;
        }

        let draw = rng.gen_range(0..self.total);
        let idx = self.cumulative.partition_point(|&running| running <= draw);
        (idx + 1) as u32
    }
}

// Uniform-with-rejection: repeatedly draw rand() mod N, discarding
// duplicates, until `degree` distinct values have been collected. Order of
// first acceptance is preserved.
pub fn sample_distinct_indices<R: Rng + ?Sized>(
    degree: u32,
    block_count: u32,
    rng: &mut R,
) -> Vec<u32> {
    let mut chosen = Vec::with_capacity(degree as usize);
    while (chosen.len() as u32) < degree {
        let candidate = rng.gen_range(0..block_count);
        if !chosen.contains(&candidate) {
            chosen.push(candidate);
        }
    }
    chosen
}
