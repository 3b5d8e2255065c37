//! Branch queue
//!
//! The tree carries a fixed column of branch slots. Every chop scrolls the
//! column down one slot and grows a new random branch (or bare trunk) at
//! the top. The bottom slot sits level with the player.

use rand::Rng;
use super::config::NUM_BRANCHES;

/// Which side of the trunk something is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Contents of one slot: a branch on one side, or `None` for bare trunk
pub type BranchSlot = Option<Side>;

/// Roll a new top branch.
///
/// Five equally likely buckets: one Left, one Right, three bare trunk.
pub fn roll_branch<R: Rng>(rng: &mut R) -> BranchSlot {
    match rng.gen_range(0..5) {
        0 => Some(Side::Left),
        1 => Some(Side::Right),
        _ => None,
    }
}

/// Fixed-length scrolling column of branches, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchQueue {
    slots: [BranchSlot; NUM_BRANCHES],
}

impl BranchQueue {
    /// Bare trunk
    pub fn new() -> Self {
        Self { slots: [None; NUM_BRANCHES] }
    }

    /// Remove every branch
    pub fn clear(&mut self) {
        self.slots = [None; NUM_BRANCHES];
    }

    /// Scroll down one slot and put `top` in slot 0.
    /// Whatever was in the bottom slot falls off.
    pub fn push_top(&mut self, top: BranchSlot) {
        self.slots.rotate_right(1);
        self.slots[0] = top;
    }

    /// Scroll down one slot and grow a random branch at the top
    pub fn advance<R: Rng>(&mut self, rng: &mut R) {
        let top = roll_branch(rng);
        self.push_top(top);
    }

    pub fn get(&self, index: usize) -> BranchSlot {
        self.slots.get(index).copied().flatten()
    }

    pub fn set(&mut self, index: usize, slot: BranchSlot) {
        if let Some(s) = self.slots.get_mut(index) {
            *s = slot;
        }
    }

    /// The collision row, level with the player
    pub fn bottom(&self) -> BranchSlot {
        self.slots[NUM_BRANCHES - 1]
    }

    pub fn slots(&self) -> &[BranchSlot; NUM_BRANCHES] {
        &self.slots
    }

    pub fn is_bare(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

impl Default for BranchQueue {
    fn default() -> Self {
        Self::new()
    }
}
