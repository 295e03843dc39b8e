//! Deck shuffling.

use rand::Rng;

/// Return a uniformly shuffled copy of `items`. The input is never mutated.
///
/// Fisher-Yates from the last index down to 1, swapping each slot with a
/// uniformly drawn earlier-or-equal one. A sequence of length 0 or 1 comes
/// back as a plain copy.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut deck: Vec<T> = items.to_vec();
    for i in (1..deck.len()).rev() {
        let j = rng.gen_range(0..=i);
        deck.swap(i, j);
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn output_is_a_permutation_of_the_input() {
        let input: Vec<u32> = (0..50).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let out = shuffled(&input, &mut rng);
        assert_eq!(out.len(), input.len());
        let mut sorted = out.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
    }

    #[test]
    fn input_is_left_untouched() {
        let input: Vec<u32> = (0..20).collect();
        let snapshot = input.clone();
        let mut rng = StdRng::seed_from_u64(7);
        let _ = shuffled(&input, &mut rng);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn short_sequences_come_back_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(shuffled::<u32, _>(&[], &mut rng), Vec::<u32>::new());
        assert_eq!(shuffled(&[9], &mut rng), vec![9]);
    }

    #[test]
    fn same_seed_gives_same_permutation() {
        let input: Vec<u32> = (0..22).collect();
        let a = shuffled(&input, &mut StdRng::seed_from_u64(99));
        let b = shuffled(&input, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_usually_disagree() {
        let input: Vec<u32> = (0..22).collect();
        let a = shuffled(&input, &mut StdRng::seed_from_u64(1));
        let b = shuffled(&input, &mut StdRng::seed_from_u64(2));
        assert_ne!(a, b);
    }
}
