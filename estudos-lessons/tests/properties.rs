//! Properties that must hold for every input, not just the sample data.

use std::collections::HashSet;

use estudos_lessons::lambdas::{uppercase_by_prefix_loop, uppercase_by_prefix_pipeline};
use estudos_lessons::reduce::{fold_no_seed, fold_with_seed, join_names, max};
use estudos_lessons::streams::{count_distinct, flatten, partition_by_length, sum_even};
use estudos_lessons::strings::append_benchmark;
use proptest::prelude::*;

fn names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-zÀ-ÿ]{0,8}", 0..20)
}

fn numbers() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1_000..1_000_i32, 0..50)
}

proptest! {
    #[test]
    fn prop_loop_and_pipeline_agree(names in names(), prefix in prop::char::range('A', 'z')) {
        let by_loop = uppercase_by_prefix_loop(&names, prefix);
        let by_pipeline = uppercase_by_prefix_pipeline(&names, prefix);

        prop_assert_eq!(&by_loop, &by_pipeline);
        prop_assert!(by_loop.windows(2).all(|w| w[0] <= w[1]));
        let expected = names.iter().filter(|n| n.starts_with(prefix)).count();
        prop_assert_eq!(by_loop.len(), expected);
    }

    #[test]
    fn prop_partition_covers_input(names in names(), threshold in 0_usize..10) {
        let groups = partition_by_length(&names, threshold);

        prop_assert_eq!(groups.matching.len() + groups.rest.len(), names.len());
        prop_assert!(groups.matching.iter().all(|n| n.chars().count() > threshold));
        prop_assert!(groups.rest.iter().all(|n| n.chars().count() <= threshold));

        let input: HashSet<&String> = names.iter().collect();
        let union: HashSet<&String> = groups.matching.iter().chain(&groups.rest).collect();
        prop_assert_eq!(input, union);
    }

    #[test]
    fn prop_distinct_count_bounded(names in names()) {
        let distinct = count_distinct(&names);
        prop_assert!(distinct <= names.len());
        prop_assert_eq!(distinct == 0, names.is_empty());
    }

    #[test]
    fn prop_sum_even_ignores_odds(numbers in numbers()) {
        let evens: Vec<i32> = numbers.iter().copied().filter(|n| n % 2 == 0).collect();
        prop_assert_eq!(sum_even(&numbers), fold_with_seed(0, &evens));
    }

    #[test]
    fn prop_folds_agree_when_present(numbers in numbers()) {
        match fold_no_seed(&numbers) {
            Some(total) => prop_assert_eq!(total, fold_with_seed(0, &numbers)),
            None => prop_assert!(numbers.is_empty()),
        }
    }

    #[test]
    fn prop_max_is_a_member(numbers in numbers()) {
        match max(&numbers) {
            Some(largest) => {
                prop_assert!(numbers.contains(&largest));
                prop_assert!(numbers.iter().all(|&n| n <= largest));
            }
            None => prop_assert!(numbers.is_empty()),
        }
    }

    #[test]
    fn prop_join_separators(names in prop::collection::vec("[a-z]{1,6}", 0..10)) {
        match join_names(&names) {
            Some(joined) => prop_assert_eq!(joined.matches(", ").count(), names.len() - 1),
            None => prop_assert!(names.is_empty()),
        }
    }

    #[test]
    fn prop_flatten_preserves_every_element(nested in prop::collection::vec(numbers(), 0..8)) {
        let flat = flatten(&nested);
        let expected: Vec<i32> = nested.concat();
        prop_assert_eq!(flat, expected);
    }

    #[test]
    fn prop_benchmark_length(initial in "[a-zé]{0,12}", count in 0_usize..2_000) {
        let report = append_benchmark(&initial, count);
        prop_assert_eq!(report.final_len, initial.len() + count);
    }
}
