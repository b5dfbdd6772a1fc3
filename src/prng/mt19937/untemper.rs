use super::{MT19937, B, C, L, N, S, T, U};
use crate::utils::errors::{Error, Result};

// Each pass recovers `shift` more of the high bits.
fn undo_right_shift_xor(y: u32, shift: u32) -> u32 {
    let mut x = y;
    for _ in 0..(32 / shift) {
        x = y ^ (x >> shift);
    }

    x
}

// Each pass recovers `shift` more of the low bits.
fn undo_left_shift_xor_and(y: u32, shift: u32, mask: u32) -> u32 {
    let mut x = y;
    for _ in 0..(32 / shift) {
        x = y ^ ((x << shift) & mask);
    }

    x
}

/// Inverse of `temper`: recovers the raw state word behind an output.
pub fn untemper(y: u32) -> u32 {
    let mut x = undo_right_shift_xor(y, L);
    x = undo_left_shift_xor_and(x, T, C);
    x = undo_left_shift_xor_and(x, S, B);

    undo_right_shift_xor(x, U)
}

/// Rebuilds a generator from `N` consecutive outputs that start right after
/// a twist, such as the first `N` outputs after seeding. The clone's next
/// output is the one the original would produce next.
pub fn clone_from_outputs(outputs: &[u32]) -> Result<MT19937> {
    if outputs.len() < N {
        return Err(Error::NotEnoughOutputs(outputs.len()));
    }

    let state: Vec<u32> = outputs[..N].iter().map(|&y| untemper(y)).collect();

    MT19937::from_state(&state[..], N)
}
