//! RNG module - 7-bag piece sequencing
//!
//! The queue keeps a running list of upcoming kinds. Whenever fewer than
//! [`PREVIEW_LEN`] remain, a freshly shuffled bag of all seven kinds is
//! appended, so every kind appears once per bag and the next few pieces are
//! always known. The state is owned by whoever drives the game; nothing here
//! is global.
//!
//! Also provides a simple LCG for deterministic runs.

use arrayvec::ArrayVec;

use crate::pieces::rotation_count;
use crate::types::PieceKind;

/// Number of upcoming kinds that are always available for preview
pub const PREVIEW_LEN: usize = 3;

/// Upper bound on the running list: a short list plus one appended bag.
const QUEUE_CAPACITY: usize = PREVIEW_LEN - 1 + PieceKind::ALL.len();

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator with a fixed-length preview
#[derive(Debug, Clone)]
pub struct PieceQueue {
    upcoming: ArrayVec<PieceKind, QUEUE_CAPACITY>,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            upcoming: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        };
        queue.top_up();
        queue
    }

    /// Append shuffled bags until the preview is full.
    fn top_up(&mut self) {
        while self.upcoming.len() < PREVIEW_LEN {
            let mut bag = PieceKind::ALL;
            self.rng.shuffle(&mut bag);
            self.upcoming.extend(bag);
        }
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> PieceKind {
        self.upcoming[0]
    }

    /// The next [`PREVIEW_LEN`] pieces, in draw order
    pub fn preview(&self) -> &[PieceKind] {
        &self.upcoming[..PREVIEW_LEN]
    }

    /// Draw the next piece from the queue
    pub fn draw(&mut self) -> PieceKind {
        let piece = self.upcoming.remove(0);
        self.top_up();
        piece
    }

    /// Pick a uniformly random starting rotation for a kind
    pub fn spawn_rotation(&mut self, kind: PieceKind) -> u8 {
        self.rng.next_range(rotation_count(kind) as u32) as u8
    }

    /// Number of kinds currently buffered (for testing/debugging)
    pub fn buffered(&self) -> usize {
        self.upcoming.len()
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
