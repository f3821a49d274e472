//! Property-based tests for composition laws.
//!
//! ## Composition Laws
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//! - **Definition**: `compose!(f, g, h)(x) == f(g(h(x)))`
//!
//! ## Fork Laws
//! - **Definition**: `fork(lastly, f, g)(x) == lastly(f(x), g(x))`
//! - **Projection**: `fork(|a, _| a, f, g) == f`
//! - **Curried Definition**: `fork!(lastly, f, g, x) == fork!(lastly, f, g)(x)`
//! - **Curried Prefixes**: `fork!(lastly)(f)(g)(x) == fork!(lastly, f)(g)(x) == fork(lastly, f, g)(x)`

use pointfree::compose::{fork, identity};
use pointfree::compose;
use proptest::prelude::*;

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Left Identity Law: compose!(identity, f)(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose!(identity, function);

        prop_assert_eq!(composed(x), function(x));
    }

    /// Right Identity Law: compose!(f, identity)(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        let composed = compose!(function, identity);

        prop_assert_eq!(composed(x), function(x));
    }

    /// Associativity Law: compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(3);
        let function3 = |n: i32| n.wrapping_sub(7);

        let left = compose!(function1, compose!(function2, function3));
        let right = compose!(compose!(function1, function2), function3);

        prop_assert_eq!(left(x), right(x));
    }

    /// Definition: compose!(f, g, h)(x) == f(g(h(x)))
    #[test]
    fn prop_compose_applies_right_to_left(text in "[a-z]{0,16}") {
        let reverse = |s: String| s.chars().rev().collect::<String>();
        let shout = |s: String| s.to_uppercase();
        let mark = |s: String| format!("{s}!");

        let composed = compose!(mark, shout, reverse);

        prop_assert_eq!(composed(text.clone()), mark(shout(reverse(text))));
    }
}

// =============================================================================
// Fork Laws
// =============================================================================

proptest! {
    /// Definition: fork(lastly, f, g)(x) == lastly(f(x), g(x))
    #[test]
    fn prop_fork_definition(values in prop::collection::vec(any::<i16>(), 0..32)) {
        let lastly = |total: i64, count: usize| (total, count);
        let left = |xs: Vec<i16>| xs.iter().copied().map(i64::from).sum::<i64>();
        let right = |xs: Vec<i16>| xs.len();

        let forked = fork(lastly, left, right);

        prop_assert_eq!(
            forked(values.clone()),
            lastly(left(values.clone()), right(values))
        );
    }

    /// Projection: fork(|a, _| a, f, g) == f
    #[test]
    fn prop_fork_projection(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(5);
        let ignored = |n: i32| n.wrapping_neg();

        let forked = fork(|kept: i32, _: i32| kept, function, ignored);

        prop_assert_eq!(forked(x), function(x));
    }

    /// Curried Definition: fork!(lastly, f, g, x) == fork!(lastly, f, g)(x)
    #[test]
    fn prop_fork_saturated_matches_partial(x in any::<i32>()) {
        let lastly = |a: i64, b: i64| a.wrapping_sub(b);
        let left = |n: i32| i64::from(n) * 2;
        let right = |n: i32| i64::from(n) + 1;

        prop_assert_eq!(fork!(lastly, left, right, x), fork!(lastly, left, right)(x));
    }

    /// Curried Prefixes: fork!(lastly)(f)(g)(x) == fork!(lastly, f)(g)(x) == fork(lastly, f, g)(x)
    #[test]
    fn prop_fork_prefixes_agree(x in any::<i32>()) {
        let lastly = |a: i64, b: i64| a.wrapping_mul(b);
        let left = |n: i32| i64::from(n) - 3;
        let right = |n: i32| i64::from(n) % 7;

        let expected = fork(lastly, left, right)(x);

        prop_assert_eq!(fork!(lastly)(left)(right)(x), expected);
        prop_assert_eq!(fork!(lastly, left)(right)(x), expected);
    }
}
