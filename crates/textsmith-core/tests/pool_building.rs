use textsmith_core::{BufferStats, CharacterClass, ClassId, build_pool, build_set};

#[test]
fn pool_concatenates_classes_in_order() {
    let pool = build_pool(&[CharacterClass::Digits.into(), CharacterClass::Space.into()]);
    let chars: String = pool.as_slice().iter().collect();
    assert_eq!(chars, "0123456789 ");
}

#[test]
fn pool_keeps_duplicates_from_repeated_classes() {
    let pool = build_pool(&[CharacterClass::Digits.into(), CharacterClass::Digits.into()]);
    assert_eq!(pool.len(), 20);
    assert_eq!(pool.to_set().len(), 10);
}

#[test]
fn pool_is_empty_when_every_class_is_unknown() {
    assert!(build_pool(&[]).is_empty());
    assert!(build_pool(&[ClassId::from("emoji"), ClassId::from("kanji")]).is_empty());
}

#[test]
fn pool_is_non_empty_when_any_class_is_known() {
    for class in CharacterClass::ALL {
        let pool = build_pool(&[ClassId::from("emoji"), class.into()]);
        assert!(!pool.is_empty(), "{class} should contribute characters");
        assert_eq!(pool.len(), class.characters().chars().count());
    }
}

#[test]
fn set_membership_matches_classes() {
    let set = build_set(&[CharacterClass::Upper.into(), CharacterClass::Special.into()]);
    assert!(set.contains('Q'));
    assert!(set.contains('~'));
    assert!(!set.contains('q'));
    assert!(!set.contains(' '));
}

#[test]
fn stats_count_characters_per_class() {
    let stats = BufferStats::of("AB cd 12!é");
    assert_eq!(stats.length, 10);
    assert_eq!(stats.count(CharacterClass::Upper), 2);
    assert_eq!(stats.count(CharacterClass::Lower), 2);
    assert_eq!(stats.count(CharacterClass::Digits), 2);
    assert_eq!(stats.count(CharacterClass::Special), 1);
    assert_eq!(stats.count(CharacterClass::Space), 2);
    assert_eq!(stats.other, 1);
}
