use passgas::{generate_candidates, GenParams, Policy, Record};

fn no_padding() -> GenParams {
    GenParams {
        max_special_repeats: 0,
        ..GenParams::default()
    }
}

#[test]
fn max_record_scenario() {
    let record = Record {
        firstname: Some("Max".into()),
        lastname: Some("N/A".into()),
        keywords: Some("Rex,2020".into()),
        ..Record::default()
    };
    let set = generate_candidates(&record, &no_padding());
    assert!(set.contains("Max"));
    assert!(set.contains("xaM"));
    assert!(set.contains("M4x"));
    // Keywords contribute too.
    assert!(set.contains("Rex"));
    assert!(set.contains("R3x"));
    assert!(set.contains("2020"));
    // Pairwise combination of sorted base words.
    assert!(set.contains("2020Max"));
    assert!(set.contains("MaxRex"));
}

#[test]
fn all_absent_record_yields_nothing() {
    let record = Record {
        firstname: Some("N/A".into()),
        lastname: Some("".into()),
        nickname: Some("  ".into()),
        keywords: Some("N/A".into()),
        ..Record::default()
    };
    let set = generate_candidates(&record, &GenParams::default());
    assert!(set.is_empty());

    let policy = Policy {
        min_length: 1,
        require_uppercase: true,
        ..Policy::default()
    };
    let kept = passgas::filter_candidates(&set, &policy, &['!']);
    assert!(kept.is_empty());
}

#[test]
fn combined_pairs_skip_case_and_reverse() {
    let record = Record {
        petname: Some("rex".into()),
        companyname: Some("acme".into()),
        ..Record::default()
    };
    let set = generate_candidates(&record, &no_padding());
    assert!(set.contains("acmerex"));
    // The combined word gets leet variants but no capitalization or
    // reversal of its own.
    assert!(set.contains("4cm3r3x"));
    assert!(!set.contains("Acmerex"));
    assert!(!set.contains("xeremca"));
}

#[test]
fn padding_applies_to_every_closure_member() {
    let record = Record {
        firstname: Some("Bo".into()),
        ..Record::default()
    };
    let params = GenParams {
        max_special_repeats: 1,
        special_chars: vec!['!'],
        ..GenParams::default()
    };
    let set = generate_candidates(&record, &params);
    assert!(set.contains("Bo!"));
    assert!(set.contains("!Bo"));
    assert!(set.contains("oB!"));
    assert!(set.contains("!B0"));
}

#[test]
fn identical_inputs_identical_sets() {
    let record = Record {
        firstname: Some("Ana".into()),
        petname: Some("Rex".into()),
        keywords: Some("1999".into()),
        ..Record::default()
    };
    let params = GenParams {
        max_special_repeats: 2,
        special_chars: vec!['!', '?'],
        ..GenParams::default()
    };
    let a = generate_candidates(&record, &params);
    let b = generate_candidates(&record, &params);
    assert_eq!(a, b);
}
