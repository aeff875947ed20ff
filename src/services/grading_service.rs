use serde::Serialize;

use crate::models::domain::{
    question::{OptionLetter, Question},
    Quiz,
};

/// One graded question, with everything a results report needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionReview {
    pub number: usize,
    pub prompt: String,
    pub options: Vec<LabelledOption>,
    pub correct_answer: OptionLetter,
    pub user_answer: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LabelledOption {
    pub letter: OptionLetter,
    pub text: String,
}

impl LabelledOption {
    pub fn all(question: &Question) -> Vec<Self> {
        OptionLetter::ALL
            .iter()
            .map(|&letter| LabelledOption {
                letter,
                text: question.option_text(letter).to_string(),
            })
            .collect()
    }
}

pub struct GradingService;

impl GradingService {
    /// Count positions where the answer equals the stored key letter exactly.
    /// No trimming or case folding: " A" and "a" are wrong answers.
    pub fn grade(quiz: &Quiz, answers: &[String]) -> u32 {
        quiz.questions()
            .iter()
            .zip(answers)
            .filter(|(question, answer)| question.is_correct(answer))
            .count() as u32
    }

    pub fn review(quiz: &Quiz, answers: &[String]) -> Vec<QuestionReview> {
        quiz.questions()
            .iter()
            .zip(answers)
            .enumerate()
            .map(|(index, (question, answer))| QuestionReview {
                number: index + 1,
                prompt: question.prompt().to_string(),
                options: LabelledOption::all(question),
                correct_answer: question.answer_key,
                user_answer: answer.clone(),
                is_correct: question.is_correct(answer),
            })
            .collect()
    }
}
