pub mod mt19937;

pub trait Prng {
    fn new(seed: u32) -> Self;
    fn gen_rand(&mut self) -> u32;

    /// Byte stream over `gen_rand`: every word is handed out as its four
    /// little-endian bytes before the next word is drawn.
    fn gen_rand_byte(&mut self) -> u8;
}

pub fn fill_bytes<T: Prng>(prng: &mut T, dest: &mut [u8]) {
    for byte in dest.iter_mut() {
        *byte = prng.gen_rand_byte();
    }
}

/// XORs `input` with the byte stream of a generator seeded with `seed`.
/// Running it twice with the same seed gives back the input.
pub fn keystream_xor<T: Prng>(seed: u16, input: &[u8]) -> Vec<u8> {
    let mut prng: T = T::new(seed.into());

    let mut keystream = vec![0u8; input.len()];
    fill_bytes(&mut prng, &mut keystream[..]);

    input
        .iter()
        .zip(keystream.iter())
        .map(|(byte, keystream_byte)| byte ^ keystream_byte)
        .collect()
}
