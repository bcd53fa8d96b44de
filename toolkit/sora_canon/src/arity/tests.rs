#![allow(clippy::unwrap_used)]

use crate::arity::{
    destructure0, destructure2, destructure3, destructure4, destructure5, destructure6,
    destructure_single,
};
use pretty_assertions::assert_eq;

#[test]
fn test_destructure0() {
    assert_eq!(destructure0(Vec::<i32>::new()), Some(()));
    assert_eq!(destructure0(vec![1]), None);
}

#[test]
fn test_destructure_single() {
    assert_eq!(destructure_single(vec!["a"]), Some("a"));
    assert_eq!(destructure_single(Vec::<&str>::new()), None);
    assert_eq!(destructure_single(vec!["a", "b"]), None);
}

#[test]
fn test_destructure2_preserves_order() {
    assert_eq!(destructure2(vec![1, 2]), Some((1, 2)));
    assert_eq!(destructure2(vec![1]), None);
    assert_eq!(destructure2(vec![1, 2, 3]), None);
}

#[test]
fn test_higher_arities() {
    assert_eq!(destructure3(1..=3), Some((1, 2, 3)));
    assert_eq!(destructure4(1..=4), Some((1, 2, 3, 4)));
    assert_eq!(destructure5(1..=5), Some((1, 2, 3, 4, 5)));
    assert_eq!(destructure6(1..=6), Some((1, 2, 3, 4, 5, 6)));
}

#[test]
fn test_arity_law_exact_length_only() {
    // For every k, Some iff the length is exactly k.
    for len in 0usize..8 {
        let items: Vec<usize> = (0..len).collect();
        assert_eq!(destructure0(items.clone()).is_some(), len == 0);
        assert_eq!(destructure_single(items.clone()).is_some(), len == 1);
        assert_eq!(destructure2(items.clone()).is_some(), len == 2);
        assert_eq!(destructure3(items.clone()).is_some(), len == 3);
        assert_eq!(destructure4(items.clone()).is_some(), len == 4);
        assert_eq!(destructure5(items.clone()).is_some(), len == 5);
        assert_eq!(destructure6(items).is_some(), len == 6);
    }
}
