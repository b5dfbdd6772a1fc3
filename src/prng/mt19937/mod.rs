use std::fmt;

use byteorder::{ByteOrder, LittleEndian};

use super::Prng;
use crate::utils::errors::{Error, Result};

mod rng;
mod untemper;

pub use self::untemper::{clone_from_outputs, untemper};

pub const W: u32 = 32;
pub const N: usize = 624;
const M: usize = 397;
const F: u32 = 1812433253;
const A: u32 = 0x9908b0df;
pub const C: u32 = 0xefc60000;
pub const B: u32 = 0x9d2c5680;
pub const U: u32 = 11;
pub const S: u32 = 7;
pub const T: u32 = 15;
pub const L: u32 = 18;
const UPPER_MASK: u32 = 0x80000000;
const LOWER_MASK: u32 = 0x7fffffff;

/// MT19937 generator. Each value owns its state; clones advance
/// independently of the generator they were taken from.
#[derive(Clone, PartialEq, Eq)]
pub struct MT19937 {
    mti: usize,
    mt: [u32; N],
    twists: u64,
    byte_array: [u8; 4],
    byte_counter: usize,
}

pub fn temper(mut y: u32) -> u32 {
    y ^= y >> U;
    y ^= (y << S) & B;
    y ^= (y << T) & C;
    y ^= y >> L;

    y
}

impl MT19937 {
    pub fn new(seed: u32) -> MT19937 {
        let mut mt = [0u32; N];

        mt[0] = seed;
        for i in 1..N {
            mt[i] = F
                .wrapping_mul(mt[i - 1] ^ (mt[i - 1] >> (W - 2)))
                .wrapping_add(i as u32);
        }

        MT19937::with_state(mt, N)
    }

    /// Rebuilds a generator from a full state array and cursor. An index of
    /// `N` means the next draw twists first.
    pub fn from_state(state: &[u32], index: usize) -> Result<MT19937> {
        if state.len() != N {
            return Err(Error::StateLength(state.len()));
        }
        if index > N {
            return Err(Error::IndexOutOfRange(index));
        }

        let mut mt = [0u32; N];
        mt.copy_from_slice(state);

        Ok(MT19937::with_state(mt, index))
    }

    fn with_state(mt: [u32; N], mti: usize) -> MT19937 {
        MT19937 {
            mti,
            mt,
            twists: 0,
            byte_array: [0; 4],
            byte_counter: 4,
        }
    }

    /// Draws the next word. Any bytes left over from a partly used word of
    /// the byte stream are discarded.
    pub fn gen_rand(&mut self) -> u32 {
        self.byte_counter = 4;

        if self.mti >= N {
            self.twist();
        }

        let y = self.mt[self.mti];
        self.mti += 1;

        temper(y)
    }

    // In place, i ascending. Once i >= N - M the (i + M) read wraps to a word
    // this pass already rewrote, as does the (i + 1) read at i = N - 1. Reading
    // from a snapshot instead would change the output.
    fn twist(&mut self) {
        for i in 0..N {
            let x = (self.mt[i] & UPPER_MASK) | (self.mt[(i + 1) % N] & LOWER_MASK);
            let mut x_a = x >> 1;
            if x & 1 != 0 {
                x_a ^= A;
            }
            self.mt[i] = self.mt[(i + M) % N] ^ x_a;
        }

        self.mti = 0;
        self.twists += 1;
    }

    pub fn iter(&mut self) -> Outputs<'_> {
        Outputs { prng: self }
    }

    pub fn get_state(&self) -> &[u32] {
        &self.mt[..]
    }

    pub fn get_state_val(&self, i: usize) -> Option<u32> {
        self.mt.get(i).cloned()
    }

    pub fn get_index(&self) -> usize {
        self.mti
    }

    pub fn needs_twist(&self) -> bool {
        self.mti >= N
    }

    /// Number of twists performed since this generator was built.
    pub fn twist_count(&self) -> u64 {
        self.twists
    }
}

impl Prng for MT19937 {
    fn new(seed: u32) -> MT19937 {
        MT19937::new(seed)
    }

    fn gen_rand(&mut self) -> u32 {
        MT19937::gen_rand(self)
    }

    fn gen_rand_byte(&mut self) -> u8 {
        if self.byte_counter >= 4 {
            let rand = MT19937::gen_rand(self);
            LittleEndian::write_u32(&mut self.byte_array, rand);
            self.byte_counter = 0;
        }

        let byte = self.byte_array[self.byte_counter];
        self.byte_counter += 1;

        byte
    }
}

impl fmt::Debug for MT19937 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("MT19937")
            .field("mti", &self.mti)
            .field("twists", &self.twists)
            .finish()
    }
}

/// Endless iterator over a generator's outputs.
pub struct Outputs<'a> {
    prng: &'a mut MT19937,
}

impl<'a> Iterator for Outputs<'a> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.prng.gen_rand())
    }
}
