use byteorder::{ByteOrder, LittleEndian};
use rand::{Error, RngCore, SeedableRng};
use rand_core::impls;

use super::MT19937;

impl RngCore for MT19937 {
    fn next_u32(&mut self) -> u32 {
        self.gen_rand()
    }

    // Low word first.
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MT19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> MT19937 {
        MT19937::new(LittleEndian::read_u32(&seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::bytes::words_to_le_bytes;
    use rand::Rng;

    #[test]
    fn next_u32_matches_gen_rand() {
        let mut rng = MT19937::new(42);
        assert_eq!(RngCore::next_u32(&mut rng), 1608637542);
        assert_eq!(RngCore::next_u32(&mut rng), 3421126067);
    }

    #[test]
    fn next_u64_is_low_word_first() {
        let mut rng = MT19937::new(42);
        let expected = (3421126067u64 << 32) | 1608637542u64;
        assert_eq!(rng.next_u64(), expected);
    }

    #[test]
    fn fill_bytes_drops_unused_tail() {
        let mut rng = MT19937::new(1234);
        let mut dest = [0u8; 11];
        rng.fill_bytes(&mut dest);

        let mut reference = MT19937::new(1234);
        let words: Vec<u32> = (0..3).map(|_| reference.gen_rand()).collect();
        assert_eq!(&dest[..], &words_to_le_bytes(&words[..])[..11]);

        // The twelfth byte was discarded along with the rest of word three.
        assert_eq!(rng.gen_rand(), reference.gen_rand());
    }

    #[test]
    fn seed_bytes_are_little_endian() {
        let mut from_bytes = MT19937::from_seed(42u32.to_le_bytes());
        let mut direct = MT19937::new(42);

        for _ in 0..100 {
            assert_eq!(from_bytes.gen_rand(), direct.gen_rand());
        }
    }

    #[test]
    fn usable_through_rng_trait() {
        let mut rng = MT19937::new(5489);
        for _ in 0..1000 {
            let x: f64 = rng.gen();
            assert!(x >= 0.0 && x < 1.0);
            let die = rng.gen_range(1..=6);
            assert!(die >= 1 && die <= 6);
        }
    }

    #[test]
    fn from_entropy_works() {
        let mut rng = MT19937::from_entropy();
        rng.gen_rand();
        assert_eq!(rng.get_index(), 1);
    }
}
