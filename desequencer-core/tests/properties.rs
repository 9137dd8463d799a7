//! Property-based tests for the desequencer engine.
//!
//! These check the pass as a whole: it is a pure function of its inputs, an
//! unknown argument halts it for good, and parcels are delivered in order.

use desequencer_core::{ArgumentDescriptor, ErrorKind, Registry};
use proptest::prelude::*;

fn mixed_registry() -> Registry {
    let mut descriptors = ArgumentDescriptor::builtins();
    descriptors.extend([
        ArgumentDescriptor::new("flag").short('f').long("flag"),
        ArgumentDescriptor::new("one").short('1').long("one").parcels(1),
        ArgumentDescriptor::new("pair").short('2').parcels(2).array(true),
        ArgumentDescriptor::new("rest").short('r').long("rest").parcels(1).unbounded(true),
    ]);
    Registry::from_descriptors(descriptors).unwrap()
}

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        "-[fhv12rx]{1,3}",
        "--(flag|one|rest|help|verbose|nope)",
        "[a-z]{1,4}",
        Just("-".to_string()),
    ]
}

fn command_line() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token(), 0..10)
}

proptest! {
    #[test]
    fn same_input_same_result(tokens in command_line()) {
        let first = mixed_registry().desequence(&tokens);
        let second = mixed_registry().desequence(&tokens);
        prop_assert_eq!(&first, &second);

        // reusing a registry leaves no residue between passes
        let registry = mixed_registry();
        let _ = registry.desequence(["-v", "-1", "residue"]);
        prop_assert_eq!(registry.desequence(&tokens), first);
    }

    #[test]
    fn unknown_argument_halts_for_good(
        tokens in command_line(),
        extra in command_line(),
    ) {
        let registry = mixed_registry();
        let halted = registry.desequence(&tokens);
        prop_assume!(halted.error_kind() == ErrorKind::UnknownArgument);

        let mut longer = tokens.clone();
        longer.extend(extra);
        prop_assert_eq!(registry.desequence(&longer), halted);
    }

    #[test]
    fn error_code_matches_error_flag(tokens in command_line()) {
        let result = mixed_registry().desequence(&tokens);
        prop_assert_eq!(result.sequence_error(), result.sequence_error_code() != 0);
        prop_assert_eq!(result.sequence_error(), result.outcome().diagnostic().is_some());
    }

    #[test]
    fn flag_clusters_count_every_character(clusters in prop::collection::vec("[fv]{1,4}", 0..6)) {
        let tokens: Vec<String> = clusters.iter().map(|c| format!("-{}", c)).collect();
        let result = mixed_registry().desequence(&tokens);

        let joined: String = clusters.concat();
        prop_assert!(!result.sequence_error());
        prop_assert_eq!(result.values_for("flag").occurrences, joined.matches('f').count());
        prop_assert_eq!(result.verbosity(), joined.matches('v').count());
    }

    #[test]
    fn array_parcels_arrive_in_order(values in prop::collection::vec("[a-z]{1,6}", 1..8)) {
        let registry = Registry::from_descriptors([
            ArgumentDescriptor::new("item").short('i').parcels(1).array(true),
        ])
        .unwrap();

        let mut tokens = vec![format!("-{}", "i".repeat(values.len()))];
        tokens.extend(values.iter().cloned());
        let result = registry.desequence(&tokens);

        prop_assert!(!result.sequence_error());
        prop_assert_eq!(result.parcels("item"), values.as_slice());
        prop_assert_eq!(result.values_for("item").occurrences, values.len());
    }

    #[test]
    fn unbounded_takes_everything_after_it(values in prop::collection::vec("[a-z]{1,6}", 1..8)) {
        let registry = Registry::from_descriptors([
            ArgumentDescriptor::new("rest").short('r').parcels(1).array(true).unbounded(true),
        ])
        .unwrap();

        let mut tokens = vec!["-r".to_string()];
        tokens.extend(values.iter().cloned());
        let result = registry.desequence(&tokens);

        prop_assert!(!result.sequence_error());
        prop_assert_eq!(result.parcels("rest"), values.as_slice());
    }
}
