//! Study mode: one flashcard, a quiz session and a countdown.
//!
//! `StudyMode` is `Closed` or `Open(session)`. The countdown lives inside the
//! session, so closing drops it and a tick can never reach a session other
//! than the one that started it.

pub mod quiz;
pub mod rng;

use std::time::Duration;

use crate::registry::Registry;

use quiz::{Feedback, QuizSession};
use rng::QuizRng;

pub const DEFAULT_COUNTDOWN_SECS: u32 = 60;
pub const FLASHCARD_PROMPT: &str = "Name two hallmark features.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub label: String,
    pub prompt: &'static str,
    /// First two clinical notes; empty when the label has no entry.
    pub back: Vec<&'static str>,
    pub revealed: bool,
}

impl Flashcard {
    pub fn new(registry: &Registry, label: &str) -> Self {
        let back = registry
            .get(label)
            .map(|e| e.clinical.iter().take(2).copied().collect())
            .unwrap_or_default();
        Self {
            label: label.to_string(),
            prompt: FLASHCARD_PROMPT,
            back,
            revealed: false,
        }
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Idle,
    Running(u32),
    Expired,
}

/// Whole-second countdown fed by frame deltas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
    running: bool,
    carry: Duration,
}

impl Countdown {
    pub fn new(secs: u32) -> Self {
        Self {
            total: secs,
            remaining: secs,
            running: secs > 0,
            carry: Duration::ZERO,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// One second elapsed.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            self.carry = Duration::ZERO;
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }

    /// Feed `dt` of wall-clock time; returns `true` if the countdown ran
    /// out during this call.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.running {
            return false;
        }
        self.carry += dt;
        while self.running && self.carry >= Duration::from_secs(1) {
            self.carry -= Duration::from_secs(1);
            if self.tick() == Tick::Expired {
                return true;
            }
        }
        false
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.total);
    }

    /// Time until the next whole-second tick, for repaint scheduling.
    pub fn until_next_tick(&self) -> Option<Duration> {
        self.running
            .then(|| Duration::from_secs(1).saturating_sub(self.carry))
    }

    pub fn display(&self) -> String {
        format!("({}s)", self.remaining)
    }
}

#[derive(Debug, Clone)]
pub struct StudySession {
    pub flashcard: Flashcard,
    pub quiz: QuizSession,
    pub countdown: Countdown,
}

impl StudySession {
    pub fn new(
        registry: &Registry,
        label: &str,
        questions: usize,
        countdown_secs: u32,
        rng: &mut dyn QuizRng,
    ) -> Self {
        Self {
            flashcard: Flashcard::new(registry, label),
            quiz: QuizSession::new(registry, questions, rng),
            countdown: Countdown::new(countdown_secs),
        }
    }

    pub fn tick(&mut self) -> Tick {
        let t = self.countdown.tick();
        if t == Tick::Expired {
            self.time_up();
        }
        t
    }

    pub fn advance(&mut self, dt: Duration) -> bool {
        let expired = self.countdown.advance(dt);
        if expired {
            self.time_up();
        }
        expired
    }

    fn time_up(&mut self) {
        log::info!("study countdown expired");
        self.quiz.set_feedback(Some(Feedback::TimeUp));
    }

    /// New questions, index 0, full countdown.
    pub fn restart(&mut self, registry: &Registry, rng: &mut dyn QuizRng) {
        self.quiz.restart(registry, rng);
        self.countdown.reset();
    }
}

#[derive(Debug, Clone, Default)]
pub enum StudyMode {
    #[default]
    Closed,
    Open(Box<StudySession>),
}

impl StudyMode {
    pub fn is_open(&self) -> bool {
        matches!(self, StudyMode::Open(_))
    }

    pub fn session(&self) -> Option<&StudySession> {
        match self {
            StudyMode::Open(s) => Some(s.as_ref()),
            StudyMode::Closed => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut StudySession> {
        match self {
            StudyMode::Open(s) => Some(s.as_mut()),
            StudyMode::Closed => None,
        }
    }

    /// Open a fresh session for `label`, replacing any open one.
    pub fn open(
        &mut self,
        registry: &Registry,
        label: &str,
        questions: usize,
        countdown_secs: u32,
        rng: &mut dyn QuizRng,
    ) {
        log::info!("study mode opened for {:?}", label);
        *self = StudyMode::Open(Box::new(StudySession::new(
            registry,
            label,
            questions,
            countdown_secs,
            rng,
        )));
    }

    /// Drop the session together with its countdown.
    pub fn close(&mut self) {
        if self.is_open() {
            log::info!("study mode closed");
        }
        *self = StudyMode::Closed;
    }

    /// Forward elapsed time to the open session, if any.
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.session_mut().map_or(false, |s| s.advance(dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::rng::StdQuizRng;
    use crate::territory::labels::{M1, V1};

    fn open_mode(rng: &mut StdQuizRng) -> StudyMode {
        let mut mode = StudyMode::Closed;
        mode.open(&Registry::builtin(), M1, 6, DEFAULT_COUNTDOWN_SECS, rng);
        mode
    }

    #[test]
    fn test_flashcard_back_is_two_clinical_notes() {
        let reg = Registry::builtin();
        let card = Flashcard::new(&reg, V1);
        assert_eq!(card.back.len(), 1);
        let card = Flashcard::new(&reg, "ACA (L)");
        assert_eq!(card.back.len(), 2);
        assert!(!card.revealed);
        assert!(Flashcard::new(&reg, "Insula").back.is_empty());
    }

    #[test]
    fn test_reveal_toggles() {
        let mut card = Flashcard::new(&Registry::builtin(), M1);
        card.toggle_reveal();
        assert!(card.revealed);
        card.toggle_reveal();
        assert!(!card.revealed);
    }

    #[test]
    fn test_countdown_expires_after_sixty_ticks() {
        let mut rng = StdQuizRng::from_seed(1);
        let mut mode = open_mode(&mut rng);
        let session = mode.session_mut().expect("open");
        for i in 1..60 {
            assert_eq!(session.tick(), Tick::Running(60 - i));
        }
        assert_eq!(session.tick(), Tick::Expired);
        assert!(!session.countdown.is_running());
        assert_eq!(session.quiz.feedback(), Some(&Feedback::TimeUp));
        assert_eq!(session.tick(), Tick::Idle);

        // interaction still works after time-up
        let q = session.quiz.current().cloned().expect("question");
        assert_eq!(session.quiz.answer(q.correct), Some(&Feedback::Correct));
    }

    #[test]
    fn test_reopen_resets_countdown() {
        let mut rng = StdQuizRng::from_seed(2);
        let mut mode = open_mode(&mut rng);
        mode.advance(Duration::from_secs(25));
        assert_eq!(mode.session().map(|s| s.countdown.remaining()), Some(35));

        mode.close();
        assert!(!mode.is_open());
        assert!(!mode.advance(Duration::from_secs(100)));

        mode.open(&Registry::builtin(), M1, 6, DEFAULT_COUNTDOWN_SECS, &mut rng);
        let s = mode.session().expect("open");
        assert_eq!(s.countdown.remaining(), 60);
        assert!(s.countdown.is_running());
        assert_eq!(s.quiz.feedback(), None);
        assert!(!s.flashcard.revealed);
    }

    #[test]
    fn test_advance_accumulates_fractions() {
        let mut c = Countdown::new(3);
        assert!(!c.advance(Duration::from_millis(600)));
        assert_eq!(c.remaining(), 3);
        assert!(!c.advance(Duration::from_millis(600)));
        assert_eq!(c.remaining(), 2);
        assert!(c.advance(Duration::from_secs(5)));
        assert_eq!(c.remaining(), 0);
        assert_eq!(c.until_next_tick(), None);
    }

    #[test]
    fn test_restart_resets_everything() {
        let reg = Registry::builtin();
        let mut rng = StdQuizRng::from_seed(3);
        let mut session = StudySession::new(&reg, M1, 6, 60, &mut rng);
        session.advance(Duration::from_secs(60));
        session.quiz.advance();
        session.restart(&reg, &mut rng);
        assert_eq!(session.countdown.remaining(), 60);
        assert!(session.countdown.is_running());
        assert_eq!(session.quiz.index(), 0);
        assert_eq!(session.quiz.feedback(), None);
        assert_eq!(session.countdown.display(), "(60s)");
    }
}
