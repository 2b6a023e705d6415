use crate::tiles::Letter;
#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n.bzhi(v)
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n & ((1 << v) - 1)
}

/// A bitset of letters.
///
/// Used for the cross-check set of a square, and for the labels of the
/// children of a [`DawgNode`](crate::DawgNode).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterSet(u32);

impl LetterSet {
    /// The set with all 26 letters
    pub const ALL: LetterSet = LetterSet((1 << Letter::COUNT) - 1);

    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    /// Add `letter`, return true if it was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1 << letter.index();
        let r = (self.0 & bit) != 0;
        self.0 |= bit;
        r
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> IteratorLetterSet {
        IteratorLetterSet::new(self.0)
    }

    /// Return the number of letters in the set that come before `letter`.
    pub fn rank(&self, letter: Letter) -> usize {
        count_ones(zero_highbits(self.0, letter.index() as u32)) as usize
    }

    /// Return the position of `letter` in the set if present.
    pub fn index_of(&self, letter: Letter) -> Option<usize> {
        if !self.contains(letter) {
            return None;
        }
        Some(self.rank(letter))
    }

    pub fn intersection(self, other: LetterSet) -> LetterSet {
        LetterSet(self.0 & other.0)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(Letter::to_char).collect();
        write!(f, "{}", s)
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self)
    }
}

pub struct IteratorLetterSet {
    count: usize,
    value: u32,
}

impl IteratorLetterSet {
    fn new(value: u32) -> IteratorLetterSet {
        IteratorLetterSet { count: 0, value }
    }
}

impl Iterator for IteratorLetterSet {
    type Item = Letter;
    fn next(&mut self) -> Option<Letter> {
        while self.count < Letter::COUNT {
            let i = self.count;
            self.count += 1;
            if self.value & (1 << i) != 0 {
                return Some(Letter::from_index(i));
            }
        }
        None
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut c = LetterSet::new();
        for letter in iter {
            c.insert(letter);
        }
        c
    }
}
