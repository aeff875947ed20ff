use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::question::{OptionLetter, Question};

static QUESTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.").expect("QUESTION_LINE is a valid regex pattern"));

static OPTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-D])\.").expect("OPTION_LINE is a valid regex pattern"));

static ANSWER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^Answer:\s*([A-D])").expect("ANSWER_LINE is a valid regex pattern")
});

enum Line {
    Blank,
    Question,
    Option(OptionLetter),
    Answer(Option<OptionLetter>),
    Text,
}

fn classify(line: &str) -> Line {
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with("Answer:") {
        let letter = ANSWER_LINE
            .captures(line)
            .and_then(|caps| caps[1].chars().next())
            .and_then(OptionLetter::from_char);
        return Line::Answer(letter);
    }
    if QUESTION_LINE.is_match(line) {
        return Line::Question;
    }
    if let Some(letter) = OPTION_LINE
        .captures(line)
        .and_then(|caps| caps[1].chars().next())
        .and_then(OptionLetter::from_char)
    {
        return Line::Option(letter);
    }
    Line::Text
}

/// A question block that has started but not yet reached its answer line.
struct PendingBlock {
    question: String,
    options: Vec<String>,
}

impl PendingBlock {
    fn new(question_line: &str) -> Self {
        Self {
            question: question_line.to_string(),
            options: Vec::with_capacity(4),
        }
    }

    /// Returns false when the block can no longer become a valid question.
    fn accept_option(&mut self, letter: OptionLetter, line: &str) -> bool {
        if OptionLetter::ALL.get(self.options.len()) != Some(&letter) {
            return false;
        }
        if self.options.is_empty() && !self.question.ends_with('?') {
            return false;
        }
        self.options.push(line.to_string());
        true
    }

    /// Wrapped text continues whatever was read last.
    fn continue_with(&mut self, line: &str) {
        let target = self.options.last_mut().unwrap_or(&mut self.question);
        target.push(' ');
        target.push_str(line);
    }

    fn finish(self, answer: Option<OptionLetter>) -> Option<Question> {
        let answer_key = answer?;
        let options = <[String; 4]>::try_from(self.options).ok()?;
        Some(Question {
            text: self.question,
            options,
            answer_key,
        })
    }
}

/// Pull every well-formed question block out of generated text, in source order.
///
/// A block is a numbered line ending in `?`, the four option lines `A.` to `D.`
/// in order, then `Answer: <letter>`. Blank lines inside a block are ignored and
/// a new numbered line abandons any unfinished block. Anything malformed is
/// skipped; an empty result is a normal outcome.
pub fn extract(raw_text: &str) -> Vec<Question> {
    let mut questions = Vec::new();
    let mut pending: Option<PendingBlock> = None;

    for line in raw_text.lines().map(str::trim) {
        match classify(line) {
            Line::Blank => {}
            Line::Question => {
                if pending.is_some() {
                    log::debug!("Dropping unfinished question block before '{}'", line);
                }
                pending = Some(PendingBlock::new(line));
            }
            Line::Option(letter) => {
                if let Some(block) = pending.as_mut() {
                    if !block.accept_option(letter, line) {
                        log::debug!("Dropping question block at out-of-place option '{}'", line);
                        pending = None;
                    }
                }
            }
            Line::Answer(letter) => {
                if let Some(block) = pending.take() {
                    match block.finish(letter) {
                        Some(question) => questions.push(question),
                        None => log::debug!("Dropping incomplete question block at '{}'", line),
                    }
                }
            }
            Line::Text => {
                if let Some(block) = pending.as_mut() {
                    block.continue_with(line);
                }
            }
        }
    }

    questions
}
