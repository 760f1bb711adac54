// ABOUTME: Injected selection orderings for pool picks and recommendation shuffles
// ABOUTME: Seeded ChaCha shuffles, fixed permutations, and seeded workout id generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Fitness

//! Selection ordering
//!
//! Anything that looks random in the generator (the HIIT pool pick, the home
//! screen shuffle, workout ids) goes through a seed or an injected ordering so
//! that a fixed seed always reproduces the same output.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stream used for workout ids so they do not perturb the selection order
const ID_STREAM: u64 = 1;

/// Seed for one generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionSeed(pub u64);

impl SelectionSeed {
    /// Fresh seed from the thread-local OS-seeded generator
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Raw seed value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for SelectionSeed {
    fn from(seed: u64) -> Self {
        Self(seed)
    }
}

impl fmt::Display for SelectionSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Produces the order in which pool candidates are considered
pub trait SelectionOrder {
    /// A permutation of `0..len`
    fn order(&mut self, len: usize) -> Vec<usize>;
}

/// Seeded Fisher-Yates shuffle
#[derive(Debug, Clone)]
pub struct SeededShuffle {
    rng: ChaCha8Rng,
}

impl SeededShuffle {
    /// Shuffle driven by `seed`
    #[must_use]
    pub fn new(seed: SelectionSeed) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed.value()),
        }
    }
}

impl SelectionOrder for SeededShuffle {
    fn order(&mut self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut self.rng);
        indices
    }
}

/// Caller-supplied permutation
///
/// Out-of-range and repeated indices are skipped; indices the caller left out
/// follow in ascending order, so the result is always a full permutation.
#[derive(Debug, Clone, Default)]
pub struct FixedOrder {
    indices: Vec<usize>,
}

impl FixedOrder {
    /// Use `indices` as the preferred order
    #[must_use]
    pub fn new(indices: impl Into<Vec<usize>>) -> Self {
        Self {
            indices: indices.into(),
        }
    }
}

impl SelectionOrder for FixedOrder {
    fn order(&mut self, len: usize) -> Vec<usize> {
        let mut seen = vec![false; len];
        let mut order = Vec::with_capacity(len);
        for &index in &self.indices {
            if index < len && !seen[index] {
                seen[index] = true;
                order.push(index);
            }
        }
        order.extend((0..len).filter(|&index| !seen[index]));
        order
    }
}

/// Keeps the pool in authoring order
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl SelectionOrder for Identity {
    fn order(&mut self, len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}

/// Seeded source of workout ids (`<slug>-<16 hex digits>`)
#[derive(Debug, Clone)]
pub struct WorkoutIds {
    rng: ChaCha8Rng,
}

impl WorkoutIds {
    /// Id source for one generation run
    #[must_use]
    pub fn new(seed: SelectionSeed) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed.value());
        rng.set_stream(ID_STREAM);
        Self { rng }
    }

    /// Next id with the given prefix
    pub fn next_id(&mut self, slug: &str) -> String {
        let suffix: u64 = self.rng.gen();
        format!("{slug}-{suffix:016x}")
    }
}
