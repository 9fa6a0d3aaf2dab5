//! Input to command.
//!
//! The parser is total: any text, including empty or malformed input, yields
//! a [`Command`]. Unrecognized structure simply leaves fields empty.

use crate::command::Command;
use crate::tokenizer::InputTokenizer;
use crate::vocabulary::Vocabulary;

/// Parses player input into commands.
#[derive(Clone, Debug, Default)]
pub struct CommandParser {
    vocabulary: Vocabulary,
}

impl CommandParser {
    /// Creates a parser with the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Returns the parser's vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parses one line of input.
    #[must_use]
    pub fn parse(&self, input: &str) -> Command {
        let text = self.expand_shortcut(input.trim_start());

        let tokens = InputTokenizer::tokenize(&text);
        let Some((first, rest)) = tokens.split_first() else {
            return Command::default();
        };

        let argstr = text[first.end..].trim_start().to_string();
        let words: Vec<String> = rest.iter().map(|t| t.text.clone()).collect();

        let (dobjstr, prepstr, iobjstr) = match self.vocabulary.find_preposition(&words) {
            Some((at, prep)) => {
                let after = at + prep.len();
                (
                    words[..at].join(" "),
                    words[at..after].join(" "),
                    words[after..].join(" "),
                )
            }
            None => (words.join(" "), String::new(), String::new()),
        };

        Command {
            verb: first.text.clone(),
            argstr,
            dobjstr,
            prepstr,
            iobjstr,
        }
    }

    /// Rewrites a leading shortcut character into its verb.
    fn expand_shortcut(&self, text: &str) -> String {
        let mut chars = text.chars();
        match chars.next().and_then(|c| self.vocabulary.shortcut(c)) {
            Some(verb) => format!("{verb} {}", chars.as_str()),
            None => text.to_string(),
        }
    }
}

/// Parses input with the default vocabulary.
#[must_use]
pub fn parse(input: &str) -> Command {
    CommandParser::default().parse(input)
}
