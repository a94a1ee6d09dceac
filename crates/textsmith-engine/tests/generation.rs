use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use textsmith_core::{CharacterClass, ClassId, GenerateRequest, build_pool};
use textsmith_engine::EngineError;
use textsmith_engine::generate::{generate, precheck};

const LIMIT: usize = 1_000_000;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

#[test]
fn generates_digits_into_empty_buffer() {
    let request = GenerateRequest::new([CharacterClass::Digits]).with_count(5);
    let outcome = generate("", &request, false, LIMIT, &mut rng()).expect("generate digits");

    assert_eq!(outcome.buffer.chars().count(), 5);
    assert!(outcome.buffer.chars().all(|ch| ch.is_ascii_digit()));
    assert_eq!(outcome.affected, 5);
    assert!(!outcome.capped());
}

#[test]
fn validation_order_is_stable() {
    let missing = GenerateRequest::new(Vec::<ClassId>::new());
    assert_eq!(precheck(&missing), Err(EngineError::MissingTarget));

    let no_classes = GenerateRequest::new(Vec::<ClassId>::new()).with_count(3);
    assert_eq!(precheck(&no_classes), Err(EngineError::NoClassesSelected));

    let too_many = GenerateRequest::new([CharacterClass::Upper])
        .with_count(50)
        .with_full_length(10);
    assert_eq!(
        precheck(&too_many),
        Err(EngineError::CountExceedsFullLength {
            count: 50,
            full_length: 10
        })
    );

    let unknown = GenerateRequest::new([ClassId::from("emoji")]).with_count(-1);
    assert_eq!(
        generate("", &unknown, false, LIMIT, &mut rng()),
        Err(EngineError::EmptyPool)
    );

    let negative = GenerateRequest::new([CharacterClass::Upper]).with_count(-1);
    assert_eq!(
        generate("", &negative, false, LIMIT, &mut rng()),
        Err(EngineError::NegativeTarget { field: "count" })
    );

    let negative_full = GenerateRequest::new([CharacterClass::Upper]).with_full_length(-4);
    assert_eq!(
        generate("", &negative_full, false, LIMIT, &mut rng()),
        Err(EngineError::NegativeTarget {
            field: "full length"
        })
    );
}

#[test]
fn zero_count_has_nothing_to_generate() {
    let request = GenerateRequest::new([CharacterClass::Lower]).with_count(0);
    let err = generate("abc", &request, true, LIMIT, &mut rng()).unwrap_err();
    assert_eq!(err, EngineError::NothingToGenerate);
    assert!(err.is_zero_effect());
}

#[test]
fn append_fills_up_to_full_length_without_capping() {
    let request = GenerateRequest::new([CharacterClass::Lower]).with_full_length(10);
    let outcome = generate("abcdefgh", &request, true, LIMIT, &mut rng()).expect("append");

    assert_eq!(outcome.buffer.chars().count(), 10);
    assert!(outcome.buffer.starts_with("abcdefgh"));
    assert_eq!(outcome.affected, 2);
    assert!(!outcome.capped());
}

#[test]
fn append_count_is_clamped_to_full_length() {
    let request = GenerateRequest::new([CharacterClass::Upper])
        .with_count(5)
        .with_full_length(10);
    let outcome = generate("ABCDEFGH", &request, true, LIMIT, &mut rng()).expect("append");

    assert_eq!(outcome.buffer.chars().count(), 10);
    assert_eq!(outcome.affected, 2);
    assert_eq!(outcome.capped_at, Some(10));
    assert!(outcome.summary().contains("full length (10 chars)"));
}

#[test]
fn append_with_existing_at_full_length_has_nothing_to_generate() {
    let request = GenerateRequest::new([CharacterClass::Upper])
        .with_count(3)
        .with_full_length(4);
    assert_eq!(
        generate("ABCD", &request, true, LIMIT, &mut rng()),
        Err(EngineError::NothingToGenerate)
    );
}

#[test]
fn overwrite_discards_existing_content() {
    let request = GenerateRequest::new([CharacterClass::Space]).with_count(3);
    let outcome = generate("keep?", &request, false, LIMIT, &mut rng()).expect("overwrite");
    assert_eq!(outcome.buffer, "   ");
}

#[test]
fn every_generated_character_comes_from_the_pool() {
    let classes = [CharacterClass::Special, CharacterClass::Digits];
    let request = GenerateRequest::new(classes).with_count(500);
    let pool = build_pool(&request.classes);
    let outcome = generate("xy", &request, true, LIMIT, &mut rng()).expect("generate");

    assert_eq!(outcome.buffer.chars().count(), 502);
    let added: String = outcome.buffer.chars().skip(2).collect();
    assert!(added.chars().all(|ch| pool.contains(ch)));
}

#[test]
fn unknown_classes_are_ignored_next_to_known_ones() {
    let classes = [ClassId::from("emoji"), CharacterClass::Digits.into()];
    let request = GenerateRequest::new(classes).with_count(20);
    let outcome = generate("", &request, false, LIMIT, &mut rng()).expect("generate");
    assert!(outcome.buffer.chars().all(|ch| ch.is_ascii_digit()));
}

#[test]
fn generation_respects_size_limit() {
    let request = GenerateRequest::new([CharacterClass::Lower]).with_count(11);
    assert_eq!(
        generate("", &request, false, 10, &mut rng()),
        Err(EngineError::TargetTooLarge {
            need: 11,
            limit: 10
        })
    );
}

#[test]
fn same_seed_gives_same_output() {
    let classes = [CharacterClass::Upper, CharacterClass::Lower];
    let request = GenerateRequest::new(classes).with_count(32);
    let first = generate("", &request, false, LIMIT, &mut rng()).expect("first");
    let second = generate("", &request, false, LIMIT, &mut rng()).expect("second");
    assert_eq!(first.buffer, second.buffer);
}
