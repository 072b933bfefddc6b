//! Multiple-choice questions sampled from the registry.

use crate::registry::Registry;

use super::rng::{sample_without_replacement, shuffle_with_rng, QuizRng};

pub const DEFAULT_QUESTIONS: usize = 6;
/// Wrong answers offered alongside the correct one.
pub const DISTRACTORS: usize = 3;
const GENERIC_STEM: &str = "Which label best matches this description?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub stem: String,
    pub correct: &'static str,
    /// Correct label plus distractors, in presented order.
    pub choices: Vec<&'static str>,
}

impl Question {
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct
    }
}

/// Feedback for the last answer given, or the time-up notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect { answer: &'static str },
    TimeUp,
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feedback::Correct => write!(f, "✅ Correct"),
            Feedback::Incorrect { answer } => write!(f, "❌ Incorrect — answer: {}", answer),
            Feedback::TimeUp => write!(f, "⏰ Time! Try another round."),
        }
    }
}

/// Stem text for `label`: a random clinical note, else the first overview
/// note, else a generic prompt.
pub fn make_stem(registry: &Registry, label: &str, rng: &mut dyn QuizRng) -> String {
    let text = registry.get(label).and_then(|e| {
        if e.clinical.is_empty() {
            e.overview.first().copied()
        } else {
            Some(e.clinical[rng.below(e.clinical.len())])
        }
    });
    match text {
        Some(t) => format!("Which region/territory best matches: “{}”", t),
        None => GENERIC_STEM.to_string(),
    }
}

/// `n` independent questions over every registry label.
pub fn generate_questions(registry: &Registry, n: usize, rng: &mut dyn QuizRng) -> Vec<Question> {
    let labels = registry.labels();
    if labels.is_empty() {
        return Vec::new();
    }
    (0..n)
        .map(|_| {
            let correct = labels[rng.below(labels.len())];
            let others: Vec<&'static str> = labels.iter().copied().filter(|l| *l != correct).collect();
            let mut choices = sample_without_replacement(&others, DISTRACTORS, rng);
            let stem = make_stem(registry, correct, rng);
            choices.push(correct);
            shuffle_with_rng(&mut choices, rng);
            Question { stem, correct, choices }
        })
        .collect()
}

/// Pregenerated questions plus a cycling cursor.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    index: usize,
    feedback: Option<Feedback>,
}

impl QuizSession {
    pub fn new(registry: &Registry, n: usize, rng: &mut dyn QuizRng) -> Self {
        Self {
            questions: generate_questions(registry, n, rng),
            index: 0,
            feedback: None,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Question> {
        if self.questions.is_empty() {
            return None;
        }
        self.questions.get(self.index % self.questions.len())
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn set_feedback(&mut self, feedback: Option<Feedback>) {
        self.feedback = feedback;
    }

    /// Judge `choice` against the current question. Any number of answers
    /// may be given; only the latest feedback is kept.
    pub fn answer(&mut self, choice: &str) -> Option<&Feedback> {
        let q = self.current()?;
        let fb = if q.is_correct(choice) {
            Feedback::Correct
        } else {
            Feedback::Incorrect { answer: q.correct }
        };
        self.feedback = Some(fb);
        self.feedback.as_ref()
    }

    /// Move to the next question, wrapping after the last.
    pub fn advance(&mut self) {
        if !self.questions.is_empty() {
            self.index = (self.index + 1) % self.questions.len();
        }
        self.feedback = None;
    }

    /// Fresh question list from the start.
    pub fn restart(&mut self, registry: &Registry, rng: &mut dyn QuizRng) {
        let n = self.questions.len().max(1);
        self.questions = generate_questions(registry, n, rng);
        self.index = 0;
        self.feedback = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryEntry;
    use crate::study::rng::{SequenceRng, StdQuizRng};

    #[test]
    fn test_six_questions_with_four_distinct_choices() {
        let reg = Registry::builtin();
        let mut rng = StdQuizRng::from_seed(2024);
        for _ in 0..20 {
            let qs = generate_questions(&reg, DEFAULT_QUESTIONS, &mut rng);
            assert_eq!(qs.len(), 6);
            for q in &qs {
                assert_eq!(q.choices.len(), 4);
                let distinct: std::collections::HashSet<_> = q.choices.iter().collect();
                assert_eq!(distinct.len(), 4);
                assert!(q.choices.contains(&q.correct));
                assert!(q.stem.starts_with("Which region/territory best matches"));
            }
        }
    }

    #[test]
    fn test_stem_comes_from_correct_label() {
        let reg = Registry::builtin();
        let mut rng = StdQuizRng::from_seed(5);
        for q in generate_questions(&reg, 30, &mut rng) {
            let entry = reg.get(q.correct).expect("registry label");
            assert!(entry.clinical.iter().any(|c| q.stem.contains(c)), "{}", q.stem);
        }
    }

    static SPARSE: &[RegistryEntry] = &[
        RegistryEntry { label: "a", overview: &["alpha overview"], clinical: &[], research: &[], fun: &[] },
        RegistryEntry { label: "b", overview: &[], clinical: &[], research: &[], fun: &[] },
    ];

    #[test]
    fn test_stem_fallbacks() {
        let reg = Registry::new(SPARSE);
        let mut rng = SequenceRng::new(vec![0]);
        assert_eq!(make_stem(&reg, "a", &mut rng), "Which region/territory best matches: “alpha overview”");
        assert_eq!(make_stem(&reg, "b", &mut rng), GENERIC_STEM);
        assert_eq!(make_stem(&reg, "zzz", &mut rng), GENERIC_STEM);
    }

    #[test]
    fn test_small_registry_limits_distractors() {
        let reg = Registry::new(SPARSE);
        let qs = generate_questions(&reg, 3, &mut SequenceRng::new(vec![1, 0, 0]));
        assert!(qs.iter().all(|q| q.choices.len() == 2));
    }

    #[test]
    fn test_answer_advance_restart() {
        let reg = Registry::builtin();
        let mut rng = StdQuizRng::from_seed(11);
        let mut quiz = QuizSession::new(&reg, 6, &mut rng);
        let q = quiz.current().cloned().expect("question");
        let wrong = q.choices.iter().copied().find(|c| *c != q.correct).expect("distractor");

        assert_eq!(quiz.answer(wrong), Some(&Feedback::Incorrect { answer: q.correct }));
        assert_eq!(quiz.answer(q.correct), Some(&Feedback::Correct));

        for _ in 0..6 {
            quiz.advance();
        }
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.current(), Some(&q));
        assert_eq!(quiz.feedback(), None);

        quiz.advance();
        quiz.restart(&reg, &mut rng);
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.questions().len(), 6);
    }

    #[test]
    fn test_feedback_text() {
        assert_eq!(Feedback::Correct.to_string(), "✅ Correct");
        assert_eq!(
            Feedback::Incorrect { answer: "V1 (Primary Visual)" }.to_string(),
            "❌ Incorrect — answer: V1 (Primary Visual)"
        );
    }
}
