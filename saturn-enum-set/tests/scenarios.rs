use saturn_enum_set::{Domain, EnumSet, EnumSetError, Representation};

fn letters() -> Domain<char> {
    Domain::new(['a', 'b', 'c', 'd', 'e']).expect("distinct symbols")
}

fn members<T: Copy>(set: &EnumSet<T>) -> Vec<T> {
    set.iter().copied().collect()
}

// -----------------------------------------------------------------------------
// Five-symbol domain
// -----------------------------------------------------------------------------

#[test]
fn complement_and_union() {
    let domain = letters();
    let s1 = EnumSet::of(&domain, &['a', 'c']);
    assert_eq!(members(&s1.complement()), vec!['b', 'd', 'e']);

    let s2 = EnumSet::of(&domain, &['c']);
    assert_eq!(members(&s1.union(&s2)), vec!['a', 'c']);
}

#[test]
fn add_reports_whether_set_changed() {
    let domain = letters();
    let mut set = EnumSet::of(&domain, &['a', 'c']);
    assert!(set.add('b'));
    assert_eq!(set.len(), 3);
    assert!(!set.add('b'));
    assert_eq!(set.len(), 3);
}

#[test]
fn none_and_all() {
    let domain = letters();
    assert!(EnumSet::none_of(&domain).is_empty());
    assert_eq!(EnumSet::all_of(&domain).len(), 5);
    assert_eq!(domain.representation(), Representation::Compact);
}

#[test]
fn accessor_errors() {
    let domain = letters();
    assert_eq!(EnumSet::of(&domain, &['a']).single(), Ok(&'a'));
    assert_eq!(
        EnumSet::of(&domain, &['a', 'b']).single(),
        Err(EnumSetError::TooManyElements)
    );
    assert_eq!(
        EnumSet::none_of(&domain).first(),
        Err(EnumSetError::EmptyCollection)
    );
    assert_eq!(
        EnumSet::all_of(&domain).element_at(5),
        Err(EnumSetError::IndexOutOfRange { index: 5, len: 5 })
    );
}

#[test]
fn copies_do_not_alias() {
    let domain = letters();
    let original = EnumSet::of(&domain, &['b']);

    let mut copy = EnumSet::copy_of(&original);
    copy.add('e');
    let mut complement = EnumSet::complement_of(&original);
    complement.clear();

    assert_eq!(members(&original), vec!['b']);
    assert_eq!(members(&copy), vec!['b', 'e']);
}

#[test]
fn iterator_cursor_states() {
    let domain = letters();
    let set = EnumSet::of(&domain, &['d', 'a']);

    let mut iter = set.iter();
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.current(), None);
    assert!(iter.move_next());
    assert_eq!(iter.current(), Some(&'a'));
    assert!(iter.move_next());
    assert_eq!(iter.current(), Some(&'d'));
    assert!(!iter.move_next());
    assert_eq!(iter.current(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn owned_iterator_outlives_source() {
    let domain = letters();
    let mut set = EnumSet::of(&domain, &['a', 'd']);
    let owned = set.clone().into_iter();
    set.clear();

    assert!(set.is_empty());
    assert_eq!(owned.collect::<Vec<_>>(), vec!['a', 'd']);
}

// -----------------------------------------------------------------------------
// One hundred symbols
// -----------------------------------------------------------------------------

fn hundred() -> Domain<u16> {
    Domain::new(0..100u16).expect("distinct symbols")
}

#[test]
fn large_domain_is_wide() {
    let domain = hundred();
    let set = EnumSet::none_of(&domain);
    assert_eq!(set.representation(), Representation::Wide);
}

#[test]
fn fill_sets_exactly_domain_len_bits() {
    let domain = hundred();
    let mut set = EnumSet::none_of(&domain);
    set.fill();

    assert_eq!(set.len(), 100);
    assert_eq!(set.iter().count(), 100);
    assert_eq!(set.last(), Ok(&99));
    assert!(!set.contains(&100));
}

#[test]
fn complement_of_all_is_empty() {
    let domain = hundred();
    assert!(EnumSet::all_of(&domain).complement().is_empty());
}

#[test]
fn element_at_last_ordinal() {
    let domain = hundred();
    let all = EnumSet::all_of(&domain);
    assert_eq!(all.element_at(99), Ok(&99));
    assert_eq!(all.element_at(63), Ok(&63));
    assert_eq!(all.element_at(64), Ok(&64));
}

#[test]
fn wide_algebra_across_word_boundary() {
    let domain = hundred();
    let left = EnumSet::of(&domain, &[1, 63, 64, 99]);
    let right = EnumSet::of(&domain, &[63, 64, 65]);

    assert_eq!(members(&(&left | &right)), vec![1, 63, 64, 65, 99]);
    assert_eq!(members(&(&left & &right)), vec![63, 64]);
    assert_eq!(members(&(&left - &right)), vec![1, 99]);
    assert!(left.contains_all(&[63, 99]));
    assert!(!left.contains_all(&right));

    let mut kept = left.clone();
    kept.retain_all(&right);
    assert_eq!(members(&kept), vec![63, 64]);
}
