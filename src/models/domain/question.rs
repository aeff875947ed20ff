use serde::{Deserialize, Serialize};
use std::fmt;

/// Label of one of the four options of a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 4] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionLetter::A => "A",
            OptionLetter::B => "B",
            OptionLetter::C => "C",
            OptionLetter::D => "D",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            OptionLetter::A => 0,
            OptionLetter::B => 1,
            OptionLetter::C => 2,
            OptionLetter::D => 3,
        }
    }

    /// Upper-case only; "a" is not a letter label.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(OptionLetter::A),
            'B' => Some(OptionLetter::B),
            'C' => Some(OptionLetter::C),
            'D' => Some(OptionLetter::D),
            _ => None,
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A multiple-choice question. Text and options are kept exactly as they were
/// produced, labels included; the display helpers strip them on the way out.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub text: String,
    pub options: [String; 4],
    pub answer_key: OptionLetter,
}

impl Question {
    /// Build a question from unlabelled option bodies, prefixing each with its letter.
    pub fn labelled(text: impl Into<String>, bodies: [&str; 4], answer_key: OptionLetter) -> Self {
        let options = OptionLetter::ALL.map(|letter| format!("{}. {}", letter, bodies[letter.index()]));
        Self {
            text: text.into(),
            options,
            answer_key,
        }
    }

    /// Question text without its leading "N." index.
    pub fn prompt(&self) -> &str {
        strip_label(&self.text)
    }

    /// Option text without its leading "A." label.
    pub fn option_text(&self, letter: OptionLetter) -> &str {
        strip_label(&self.options[letter.index()])
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.answer_key.as_str()
    }
}

fn strip_label(raw: &str) -> &str {
    match raw.split_once('.') {
        Some((_, rest)) => rest.trim(),
        None => raw,
    }
}
