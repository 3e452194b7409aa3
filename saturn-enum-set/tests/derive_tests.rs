#![cfg(feature = "derive")]

use saturn_enum_set::{Domain, EnumSet, Enumerable, Representation};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enumerable)]
enum Color {
    Red,
    Green = 7,
    Blue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enumerable)]
enum Never {}

macro_rules! many_variants {
    ($name:ident { $($variant:ident),* $(,)? }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enumerable)]
        enum $name {
            $($variant),*
        }
    };
}

many_variants!(Cell {
    C00, C01, C02, C03, C04, C05, C06, C07, C08, C09,
    C10, C11, C12, C13, C14, C15, C16, C17, C18, C19,
    C20, C21, C22, C23, C24, C25, C26, C27, C28, C29,
    C30, C31, C32, C33, C34, C35, C36, C37, C38, C39,
    C40, C41, C42, C43, C44, C45, C46, C47, C48, C49,
    C50, C51, C52, C53, C54, C55, C56, C57, C58, C59,
    C60, C61, C62, C63, C64, C65, C66, C67, C68, C69,
});

#[test]
fn variants_in_declaration_order() {
    assert_eq!(Color::VARIANTS, &[Color::Red, Color::Green, Color::Blue]);
}

#[test]
fn ordinals_ignore_explicit_discriminants() {
    assert_eq!(Color::Red.ordinal(), 0);
    assert_eq!(Color::Green.ordinal(), 1);
    assert_eq!(Color::Blue.ordinal(), 2);
}

#[test]
fn enum_domain_lookup() {
    let domain = Domain::<Color>::of_enum();
    assert_eq!(domain.len(), 3);
    assert_eq!(domain.ordinal(&Color::Blue), Some(2));
    assert_eq!(domain.symbol(1), Some(&Color::Green));
}

#[test]
fn enum_set_shortcuts() {
    let mut set = EnumSet::<Color>::empty();
    assert!(set.is_empty());
    set.add(Color::Blue);
    set.add(&Color::Red);
    assert_eq!(
        set.iter().copied().collect::<Vec<_>>(),
        vec![Color::Red, Color::Blue]
    );
    assert_eq!(set.complement().single(), Ok(&Color::Green));
    assert_eq!(EnumSet::<Color>::all().len(), 3);
    assert!(EnumSet::<Color>::default().is_empty());
}

#[test]
fn collect_into_set() {
    let set: EnumSet<Color> = [Color::Blue, Color::Red, Color::Blue].into_iter().collect();
    assert_eq!(set.len(), 2);
    assert_eq!(format!("{set:?}"), "{Red, Blue}");
}

#[test]
fn separately_built_enum_sets_combine_word_by_word() {
    let warm = EnumSet::of(&Domain::<Color>::of_enum(), &[Color::Red]);
    let cool = EnumSet::of(&Domain::<Color>::of_enum(), &[Color::Green, Color::Blue]);
    assert_eq!(&warm | &cool, EnumSet::all());
    assert!((&warm & &cool).is_empty());
}

#[test]
fn empty_enum() {
    assert!(Never::VARIANTS.is_empty());
    let set = EnumSet::<Never>::all();
    assert!(set.is_empty());
    assert!(set.complement().is_empty());
}

#[test]
fn seventy_variants_use_wide_representation() {
    assert_eq!(Cell::C69.ordinal(), 69);
    let mut set = EnumSet::<Cell>::all();
    assert_eq!(set.representation(), Representation::Wide);
    assert_eq!(set.len(), 70);

    set.remove(&Cell::C64);
    assert_eq!(set.len(), 69);
    assert_eq!(set.last(), Ok(&Cell::C69));
    assert_eq!(set.complement().single(), Ok(&Cell::C64));
}
