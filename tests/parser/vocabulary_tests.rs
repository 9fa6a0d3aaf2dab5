//! Vocabulary integration tests.

use mooring_parser::Vocabulary;
use mooring_parser::vocabulary::Preposition;

fn words(text: &str) -> Vec<String> {
    text.split_whitespace().map(String::from).collect()
}

#[test]
fn default_shortcuts() {
    let vocab = Vocabulary::default();
    assert_eq!(vocab.shortcut('"'), Some("say"));
    assert_eq!(vocab.shortcut(':'), Some("emote"));
    assert_eq!(vocab.shortcut(';'), Some("eval"));
    assert_eq!(vocab.shortcut('!'), None);
}

#[test]
fn empty_vocabulary() {
    let vocab = Vocabulary::empty();
    assert!(vocab.prepositions().is_empty());
    assert_eq!(vocab.shortcut(';'), None);
}

#[test]
fn without_shortcuts_keeps_prepositions() {
    let vocab = Vocabulary::default().without_shortcuts();
    assert_eq!(vocab.shortcut(';'), None);
    assert!(!vocab.prepositions().is_empty());
}

#[test]
fn prepositions_longest_first() {
    let vocab = Vocabulary::empty()
        .with_preposition("in")
        .with_preposition("in front of")
        .with_preposition("out of");
    let lens: Vec<usize> = vocab.prepositions().iter().map(Preposition::len).collect();
    assert_eq!(lens, vec![3, 2, 1]);
}

#[test]
fn duplicate_and_blank_prepositions_ignored() {
    let vocab = Vocabulary::empty()
        .with_preposition("on")
        .with_preposition("ON")
        .with_preposition("   ");
    assert_eq!(vocab.prepositions().len(), 1);
}

#[test]
fn find_first_preposition() {
    let vocab = Vocabulary::default();
    let (at, prep) = vocab.find_preposition(&words("lamp in chest with key")).unwrap();
    assert_eq!(at, 1);
    assert_eq!(prep.words, vec!["in"]);
}

#[test]
fn find_multiword_preposition() {
    let vocab = Vocabulary::default();
    let (at, prep) = vocab
        .find_preposition(&words("hide In Front Of door"))
        .unwrap();
    assert_eq!(at, 1);
    assert_eq!(prep.len(), 3);
}

#[test]
fn no_preposition() {
    assert!(Vocabulary::default()
        .find_preposition(&words("brass lamp"))
        .is_none());
}

#[test]
fn partial_phrase_does_not_match() {
    let prep = Preposition::new("on top of");
    assert!(!prep.matches_at(&words("on top")));
    assert!(prep.matches_at(&words("on top of box")));
}
