//! Property-based tests for binevo
//!
//! Uses proptest to verify invariants of the genome, the genetic operators,
//! and the elite slicing arithmetic.

use binevo::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    // ==================== BitString properties ====================

    #[test]
    fn bit_string_length_preserved(len in 1usize..64, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let genome = BitString::random(&mut rng, len);
        prop_assert_eq!(genome.len(), len);
    }

    #[test]
    fn bit_string_value_roundtrip(len in 1usize..64, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let genome = BitString::random(&mut rng, len);
        let rebuilt = BitString::from_value(genome.value(), len);
        prop_assert_eq!(genome, rebuilt);
    }

    #[test]
    fn bit_string_display_parses_to_value(bits in prop::collection::vec(any::<bool>(), 1..60)) {
        let genome = BitString::new(bits);
        let parsed = u64::from_str_radix(&genome.to_string(), 2).unwrap();
        prop_assert_eq!(parsed, genome.value());
    }

    // ==================== Fitness properties ====================

    #[test]
    fn fitness_never_positive(value in 0u64..256, target in 0u64..256) {
        let mut ind = Individual::new(BitString::from_value(value, 8));
        ind.evaluate(target);
        prop_assert!(ind.fitness_value() <= 0);
        prop_assert_eq!(ind.fitness_value() == 0, value == target);
    }

    #[test]
    fn fitness_matches_estimate_distance(value in 0u64..1024, target in 0u64..1024) {
        let mut ind = Individual::new(BitString::from_value(value, 10));
        ind.evaluate(target);
        prop_assert_eq!(ind.fitness_value(), -(value.abs_diff(target) as i64));
    }

    // ==================== Operator properties ====================

    #[test]
    fn mate_bits_come_from_a_parent(
        a in 0u64..256,
        b in 0u64..256,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pa = Individual::new(BitString::from_value(a, 8));
        let pb = Individual::new(BitString::from_value(b, 8));
        let child = pa.mate(&pb, &mut rng);

        for (i, &bit) in child.genome().bits().iter().enumerate() {
            prop_assert!(bit == pa.genome()[i] || bit == pb.genome()[i]);
        }
    }

    #[test]
    fn mate_is_deterministic_for_seed(a in 0u64..256, b in 0u64..256, seed in any::<u64>()) {
        let pa = Individual::new(BitString::from_value(a, 8));
        let pb = Individual::new(BitString::from_value(b, 8));

        let c1 = pa.mate(&pb, &mut StdRng::seed_from_u64(seed));
        let c2 = pa.mate(&pb, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(c1, c2);
    }

    #[test]
    fn mutate_flips_exactly_one_bit(value in 0u64..256, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let original = Individual::new(BitString::from_value(value, 8));
        let mutated = original.mutate(&mut rng);

        let differing = original
            .genome()
            .bits()
            .iter()
            .zip(mutated.genome().bits())
            .filter(|(x, y)| x != y)
            .count();
        prop_assert_eq!(differing, 1);
        prop_assert_ne!(original, mutated);
    }

    // ==================== Equality properties ====================

    #[test]
    fn equality_is_reflexive_and_symmetric(a in 0u64..256, b in 0u64..256) {
        let mut ia = Individual::new(BitString::from_value(a, 8));
        let ib = Individual::new(BitString::from_value(b, 8));
        // stale fitness cache must not affect equality
        ia.evaluate(0);

        prop_assert_eq!(ia == ia, true);
        prop_assert_eq!(ia == ib, ib == ia);
        prop_assert_eq!(ia == ib, a == b);
    }

    // ==================== Elite slicing properties ====================

    #[test]
    fn top_fraction_starts_at_truncated_index(
        len in 0usize..500,
        fraction in 0.0f64..=1.0
    ) {
        let items: Vec<usize> = (0..len).collect();
        let slice = top_fraction(&items, fraction);
        let expected_start = (len as f64 * (1.0 - fraction)) as usize;
        prop_assert_eq!(slice.len(), len - expected_start.min(len));
        if let Some(&first) = slice.first() {
            prop_assert_eq!(first, expected_start);
        }
    }

    #[test]
    fn top_fraction_is_a_suffix(len in 1usize..200, fraction in 0.0f64..=1.0) {
        let items: Vec<usize> = (0..len).collect();
        let slice = top_fraction(&items, fraction);
        if let Some(&first) = slice.first() {
            prop_assert_eq!(slice, &items[first..]);
        }
    }
}
