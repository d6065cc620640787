use passgas::{filter_candidates, meets_policy, Policy, DEFAULT_SPECIAL_CHARS};
use std::collections::HashSet;

fn default_specials() -> Vec<char> {
    DEFAULT_SPECIAL_CHARS.chars().collect()
}

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn min_length_with_uppercase_scenario() {
    let policy = Policy {
        min_length: 8,
        require_uppercase: true,
        require_numeric: false,
        require_special: false,
    };
    let input = set(&["abc", "Abcdefgh", "ABCDEFGH12"]);
    let out = filter_candidates(&input, &policy, &default_specials());
    assert_eq!(out, set(&["Abcdefgh", "ABCDEFGH12"]));
}

#[test]
fn filter_is_a_subset_operation() {
    let input = set(&["a", "B1!", "longpassword", "PASS123!"]);
    let policy = Policy {
        min_length: 3,
        require_numeric: true,
        ..Policy::default()
    };
    let out = filter_candidates(&input, &policy, &default_specials());
    assert!(out.is_subset(&input));
}

#[test]
fn permissive_policy_returns_input_unchanged() {
    let input = set(&["", "x", "Yz9!"]);
    let out = filter_candidates(&input, &Policy::default(), &default_specials());
    assert_eq!(out, input);
}

#[test]
fn filtering_twice_equals_filtering_once() {
    let input = set(&["short", "LongEnough1!", "noupper1!", "NoDigits!"]);
    let policy = Policy {
        min_length: 6,
        require_uppercase: true,
        require_numeric: true,
        require_special: true,
    };
    let once = filter_candidates(&input, &policy, &default_specials());
    let twice = filter_candidates(&once, &policy, &default_specials());
    assert_eq!(once, twice);
    assert_eq!(once, set(&["LongEnough1!"]));
}

#[test]
fn special_class_is_judged_against_the_configured_alphabet() {
    let policy = Policy {
        require_special: true,
        ..Policy::default()
    };
    assert!(meets_policy("pw!", &policy, &['!']));
    assert!(!meets_policy("pw!", &policy, &['?']));
}
