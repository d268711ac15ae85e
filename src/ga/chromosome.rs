//! Round-permutation chromosome for lineup assignment.
//!
//! # Encoding
//!
//! A chromosome holds one gene per round. Each gene is a permutation of
//! the roster's indices `0..n` (every player, not only as many as there
//! are positions). Position `i` in a round is filled by the player at
//! gene index `i`; if the roster is shorter than the position list the
//! surplus positions read past the end and stay unassigned, and if it
//! is longer the tail of the permutation is never read.
//!
//! Genes hold indices into the caller's roster slice, so building and
//! evolving chromosomes never touches caller-owned data.

use rand::Rng;
use rand::seq::SliceRandom;

/// Round-permutation chromosome.
///
/// Higher fitness = fairer lineup (maximization convention).
#[derive(Debug, Clone, PartialEq)]
pub struct LineupChromosome {
    /// One roster permutation per round.
    pub genes: Vec<Vec<usize>>,
    /// Cached fitness (0 until evaluated).
    pub fitness: f64,
}

impl LineupChromosome {
    /// Creates a random chromosome.
    ///
    /// With no positions there is nothing to fill and the genes stay
    /// empty; otherwise every round gets an independent uniform shuffle.
    pub fn random<R: Rng>(
        player_count: usize,
        position_count: usize,
        rounds: usize,
        rng: &mut R,
    ) -> Self {
        let genes = if position_count == 0 {
            Vec::new()
        } else {
            (0..rounds).map(|_| random_round(player_count, rng)).collect()
        };
        Self { genes, fitness: 0.0 }
    }

    /// Wraps explicit genes (fitness reset to 0).
    pub fn from_genes(genes: Vec<Vec<usize>>) -> Self {
        Self { genes, fitness: 0.0 }
    }

    /// Number of encoded rounds.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.genes.len()
    }

    /// Roster index placed at `position` in round 0.
    pub fn assigned(&self, position: usize) -> Option<usize> {
        self.genes.first().and_then(|round| round.get(position)).copied()
    }

    /// Validates that every round is a permutation of `0..player_count`.
    pub fn is_valid(&self, player_count: usize) -> bool {
        self.genes.iter().all(|round| {
            if round.len() != player_count {
                return false;
            }
            let mut seen = vec![false; player_count];
            round.iter().all(|&idx| {
                idx < player_count && !std::mem::replace(&mut seen[idx], true)
            })
        })
    }
}

/// Uniform random permutation of `0..player_count`.
pub(crate) fn random_round<R: Rng>(player_count: usize, rng: &mut R) -> Vec<usize> {
    let mut round: Vec<usize> = (0..player_count).collect();
    round.shuffle(rng);
    round
}

// ======================== Crossover operators ========================

/// Single cut-point crossover over rounds.
///
/// Draws a cut `m` in `[0, rounds)`. Rounds after the cut come from
/// `this`, rounds up to and including it from `partner`. With a single
/// round `m` is always 0, so the child is a full copy of `partner`.
pub fn round_cut_crossover<R: Rng>(
    this: &LineupChromosome,
    partner: &LineupChromosome,
    rng: &mut R,
) -> LineupChromosome {
    let rounds = this.rounds().min(partner.rounds());
    if rounds == 0 {
        return LineupChromosome::from_genes(Vec::new());
    }
    let cut = rng.random_range(0..rounds);
    let genes = this
        .genes
        .iter()
        .zip(&partner.genes)
        .enumerate()
        .map(|(i, (a, b))| if i > cut { a.clone() } else { b.clone() })
        .collect();
    LineupChromosome::from_genes(genes)
}

/// Order crossover (OX) applied to every round.
///
/// Keeps a random segment of `this` in place and fills the remaining
/// positions with `partner`'s players in their relative order. Unlike
/// [`round_cut_crossover`] this mixes both parents even with one round.
///
/// # Reference
/// Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
pub fn order_crossover<R: Rng>(
    this: &LineupChromosome,
    partner: &LineupChromosome,
    rng: &mut R,
) -> LineupChromosome {
    let genes = this
        .genes
        .iter()
        .zip(&partner.genes)
        .map(|(a, b)| {
            let n = a.len();
            if n < 2 {
                return b.clone();
            }
            let mut start = rng.random_range(0..n);
            let mut end = rng.random_range(0..n);
            if start > end {
                std::mem::swap(&mut start, &mut end);
            }
            ox_build_child(a, b, start, end)
        })
        .collect();
    LineupChromosome::from_genes(genes)
}

/// Copies `template[start..=end]`, fills the rest from `donor` after the segment.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut in_segment = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        in_segment[template[i]] = true;
    }

    let mut pos = (end + 1) % n;
    for offset in 0..n {
        let val = donor[(end + 1 + offset) % n];
        if !in_segment[val] {
            child[pos] = val;
            pos = (pos + 1) % n;
        }
    }
    child
}

// ======================== Mutation operators ========================

/// Reshuffle mutation: each round, with probability `rate`, is replaced
/// by a fresh uniform permutation.
pub fn reshuffle_mutation<R: Rng>(chromosome: &mut LineupChromosome, rate: f64, rng: &mut R) {
    let rate = probability(rate);
    for round in &mut chromosome.genes {
        if rng.random_bool(rate) {
            round.shuffle(rng);
        }
    }
}

/// Swap mutation: each round, with probability `rate`, exchanges two
/// random positions.
pub fn swap_mutation<R: Rng>(chromosome: &mut LineupChromosome, rate: f64, rng: &mut R) {
    let rate = probability(rate);
    for round in &mut chromosome.genes {
        let len = round.len();
        if len < 2 || !rng.random_bool(rate) {
            continue;
        }
        let i = rng.random_range(0..len);
        let j = rng.random_range(0..len);
        round.swap(i, j);
    }
}

/// Clamps a rate into `[0, 1]`; NaN counts as 0.
fn probability(rate: f64) -> f64 {
    if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) }
}
