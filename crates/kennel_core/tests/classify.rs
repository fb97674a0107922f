use kennel_core::{Breeds, Classification, Probe};

fn breeds() -> Breeds {
    Breeds::from_entries([
        ("affenpinscher", vec![]),
        ("akita", vec![]),
        ("appenzeller", vec![]),
        ("australian", vec!["shepherd"]),
        ("basenji", vec![]),
        ("briard", vec![]),
        ("bulldog", vec!["boston", "english", "french"]),
    ])
}

fn guess(class_name: &str, probability: f64) -> Classification {
    Classification {
        class_name: class_name.to_string(),
        probability,
    }
}

fn probe(confidence: f64, breed: &str, sub_breed: Option<&str>) -> Probe {
    Probe {
        confidence,
        breed: breed.to_string(),
        sub_breed: sub_breed.map(str::to_string),
    }
}

#[test]
fn empty_input_matches_nothing() {
    assert_eq!(breeds().classify(&[]), None);
    assert_eq!(Breeds::default().classify(&[]), None);
}

#[test]
fn unknown_label_matches_nothing() {
    assert_eq!(breeds().classify(&[guess("something", 0.5)]), None);
}

#[test]
fn exact_breed_name_matches() {
    assert_eq!(
        breeds().classify(&[guess("akita", 0.5)]),
        Some(probe(0.5, "akita", None))
    );
}

#[test]
fn matching_is_case_insensitive() {
    let taxonomy = breeds();

    assert_eq!(
        taxonomy.classify(&[guess("Akita", 0.5)]),
        taxonomy.classify(&[guess("akita", 0.5)])
    );
}

#[test]
fn highest_probability_that_resolves_wins() {
    // The unresolvable top guess is skipped; the input arrives unsorted.
    assert_eq!(
        breeds().classify(&[
            guess("akita", 0.5),
            guess("bulldog", 0.6),
            guess("none_existing", 0.75),
        ]),
        Some(probe(0.6, "bulldog", None))
    );
}

#[test]
fn result_does_not_depend_on_input_order() {
    let taxonomy = breeds();
    let forward = [
        guess("none_existing", 0.75),
        guess("bulldog", 0.6),
        guess("akita", 0.5),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    assert_eq!(taxonomy.classify(&forward), taxonomy.classify(&reversed));
}

#[test]
fn result_does_not_depend_on_unresolvable_neighbours() {
    let taxonomy = breeds();
    let expected = Some(probe(0.4, "basenji", None));

    assert_eq!(taxonomy.classify(&[guess("basenji", 0.4)]), expected);
    assert_eq!(
        taxonomy.classify(&[
            guess("something", 0.9),
            guess("basenji", 0.4),
            guess("whatever", 0.1),
        ]),
        expected
    );
    assert_eq!(
        taxonomy.classify(&[
            guess("basenji", 0.4),
            guess("whatever", 0.1),
            guess("something", 0.9),
        ]),
        expected
    );
}

#[test]
fn first_resolving_fragment_wins() {
    assert_eq!(
        breeds().classify(&[guess("something,akita, buldog", 0.6)]),
        Some(probe(0.6, "akita", None))
    );
}

#[test]
fn compound_fragment_resolves_sub_breed() {
    let taxonomy = breeds();
    let expected = Some(probe(0.6, "bulldog", Some("english")));

    assert_eq!(
        taxonomy.classify(&[guess("something,bulldog-english,  appenzeller", 0.6)]),
        expected
    );
    assert_eq!(
        taxonomy.classify(&[guess("something,bulldog  english,  appenzeller", 0.6)]),
        expected
    );
}

#[test]
fn breed_and_sub_breed_tokens_resolve_in_either_order() {
    let taxonomy = breeds();
    let expected = Some(probe(0.6, "bulldog", Some("english")));

    assert_eq!(
        taxonomy.classify(&[guess("something,english-bulldog,  appenzeller", 0.6)]),
        expected
    );
    assert_eq!(
        taxonomy.classify(&[guess("something,english  bulldog,  appenzeller", 0.6)]),
        expected
    );
}

#[test]
fn first_sub_breed_token_wins_across_the_whole_fragment() {
    // "boston" precedes "english" in the fragment, so it becomes the
    // sub-breed even though "english" is adjacent to the breed token.
    assert_eq!(
        breeds().classify(&[guess("something,boston english-bulldog,  appenzeller", 0.6)]),
        Some(probe(0.6, "bulldog", Some("boston")))
    );
}

#[test]
fn sub_breed_of_another_breed_does_not_leak() {
    // "shepherd" belongs to australian, not bulldog.
    assert_eq!(
        breeds().classify(&[guess("shepherd bulldog", 0.3)]),
        Some(probe(0.3, "bulldog", None))
    );
}

#[test]
fn classify_does_not_mutate_its_input() {
    let taxonomy = breeds();
    let input = vec![guess("akita", 0.5), guess("bulldog", 0.6)];
    let copy = input.clone();

    let _ = taxonomy.classify(&input);

    assert_eq!(input, copy);
}
