use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: &[u8] = b"abcdefghijklmnouvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random alphanumeric string of `len` characters.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect()
}

/// Seeded generator when `seed` is set, OS entropy otherwise.
#[must_use]
pub fn sample_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_have_the_requested_length_and_alphabet() {
        let mut rng = sample_rng(Some(1));
        let value = random_string(&mut rng, 256);
        assert_eq!(value.len(), 256);
        assert!(value.bytes().all(|byte| ALPHABET.contains(&byte)));
        assert!(random_string(&mut rng, 0).is_empty());
    }

    #[test]
    fn equal_seeds_repeat() {
        let first = random_string(&mut sample_rng(Some(42)), 32);
        let second = random_string(&mut sample_rng(Some(42)), 32);
        assert_eq!(first, second);
    }
}
