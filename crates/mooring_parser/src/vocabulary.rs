//! Parser vocabulary: prepositions and leading-character shortcuts.

use std::collections::HashMap;

/// A preposition phrase, possibly several words long (`in front of`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preposition {
    /// Lowercase words of the phrase.
    pub words: Vec<String>,
}

impl Preposition {
    /// Creates a preposition from a space-separated phrase.
    #[must_use]
    pub fn new(phrase: &str) -> Self {
        Self {
            words: phrase.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Number of words in the phrase.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the phrase has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Checks whether `words` starts with this phrase, ignoring case.
    #[must_use]
    pub fn matches_at(&self, words: &[String]) -> bool {
        !self.is_empty()
            && words.len() >= self.len()
            && self
                .words
                .iter()
                .zip(words)
                .all(|(p, w)| p.eq_ignore_ascii_case(w))
    }
}

/// The classic preposition set of MOO-style worlds.
const DEFAULT_PREPOSITIONS: &[&str] = &[
    "with",
    "using",
    "at",
    "to",
    "in front of",
    "in",
    "inside",
    "into",
    "on top of",
    "on",
    "onto",
    "upon",
    "out of",
    "from inside",
    "from",
    "over",
    "through",
    "under",
    "underneath",
    "beneath",
    "behind",
    "beside",
    "for",
    "about",
    "is",
    "as",
    "off of",
    "off",
];

/// Words and shortcuts the command parser knows about.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    /// Prepositions, longest phrases first.
    prepositions: Vec<Preposition>,
    /// Leading characters that stand for a whole verb (`"` → `say`).
    shortcuts: HashMap<char, String>,
}

impl Vocabulary {
    /// Creates an empty vocabulary: no prepositions, no shortcuts.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            prepositions: Vec::new(),
            shortcuts: HashMap::new(),
        }
    }

    /// Adds a preposition phrase.
    #[must_use]
    pub fn with_preposition(mut self, phrase: &str) -> Self {
        let prep = Preposition::new(phrase);
        if !prep.is_empty() && !self.prepositions.contains(&prep) {
            self.prepositions.push(prep);
            // Longer phrases win so "in front of" is not read as "in".
            self.prepositions.sort_by_key(|p| std::cmp::Reverse(p.len()));
        }
        self
    }

    /// Adds a leading-character shortcut.
    #[must_use]
    pub fn with_shortcut(mut self, leader: char, verb: impl Into<String>) -> Self {
        self.shortcuts.insert(leader, verb.into());
        self
    }

    /// Removes every shortcut.
    #[must_use]
    pub fn without_shortcuts(mut self) -> Self {
        self.shortcuts.clear();
        self
    }

    /// Returns the prepositions, longest first.
    #[must_use]
    pub fn prepositions(&self) -> &[Preposition] {
        &self.prepositions
    }

    /// Returns the verb a leading character expands to, if any.
    #[must_use]
    pub fn shortcut(&self, leader: char) -> Option<&str> {
        self.shortcuts.get(&leader).map(String::as_str)
    }

    /// Finds the first preposition in `words`.
    ///
    /// Returns the index of its first word and the matched phrase.
    #[must_use]
    pub fn find_preposition(&self, words: &[String]) -> Option<(usize, &Preposition)> {
        (0..words.len()).find_map(|i| {
            self.prepositions
                .iter()
                .find(|p| p.matches_at(&words[i..]))
                .map(|p| (i, p))
        })
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        DEFAULT_PREPOSITIONS
            .iter()
            .fold(Self::empty(), |vocab, phrase| vocab.with_preposition(phrase))
            .with_shortcut('"', "say")
            .with_shortcut(':', "emote")
            .with_shortcut(';', "eval")
    }
}
