//! Generated fixtures are labelled correctly, whatever the seed.

use super::oracles::oracle_recursive_descent;
use nestcheck::{
    build_string, generate, verify_fixtures, GeneratorConfig, Provenance, Validator, Verdict,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every label the generator writes agrees with the validator.
    #[test]
    fn prop_generated_labels_verify(seed: u64) {
        let config = GeneratorConfig { seed, step: 2, max_length: 24, big_length: None };
        let file = generate(&config).unwrap();
        let report = verify_fixtures(&Validator::default(), &file.fixtures());
        prop_assert!(report.is_success(), "seed {} failures: {:?}", seed, report.failures);
    }

    /// Labels are verified after the fact by an independent recognizer,
    /// not assumed from how the string was made.
    #[test]
    fn prop_generated_labels_match_oracle(seed: u64) {
        let config = GeneratorConfig { seed, ..GeneratorConfig::default() };
        for fixture in generate(&config).unwrap().fixtures() {
            let oracle = Verdict::from(oracle_recursive_descent(&fixture.input));
            prop_assert_eq!(oracle, fixture.expected, "{}", fixture.describe());
        }
    }

    /// Truncated fixtures are odd-length and invalid.
    #[test]
    fn prop_truncated_fixtures_are_odd(seed: u64) {
        let config = GeneratorConfig { seed, ..GeneratorConfig::default() };
        for fixture in generate(&config).unwrap().fixtures() {
            if fixture.provenance == Some(Provenance::Truncated) {
                prop_assert_eq!(fixture.input.len() % 2, 1, "{}", fixture.describe());
                prop_assert_eq!(fixture.expected, Verdict::Invalid);
            }
        }
    }

    /// Mistake builds are invalid at every even length.
    #[test]
    fn prop_mistake_builds_are_invalid(seed in any::<u64>(), half in 1usize..40) {
        let mut rng = StdRng::seed_from_u64(seed);
        let s = build_string(half * 2, true, &mut rng).unwrap();
        prop_assert_eq!(s.len(), half * 2);
        prop_assert!(!oracle_recursive_descent(&s), "input {:?}", s);
    }
}
