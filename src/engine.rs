//! The mapper engine: Geometry → Classifiers → (Renderer, Interaction) → Registry → Study.
//!
//! `Mapper` owns everything the shell needs. The shell feeds it [`Action`]s
//! and frame time, and asks it for render parameters; it never mutates the
//! pieces directly.

use std::time::Duration;

use egui::{Pos2, Rect};

use crate::config::MapperConfig;
use crate::geometry::{BrainMask, Cell};
use crate::interaction::pointer::pointer_to_cell;
use crate::interaction::{Action, Effects, Scene, UiState};
use crate::registry::Registry;
use crate::render::palette::Palette;
use crate::render::{render_into, RenderParams, Surface};
use crate::study::rng::{QuizRng, StdQuizRng};
use crate::study::StudyMode;
use crate::territory::labels::Label;
use crate::territory::{Atlas, Mode};

pub struct Mapper {
    config: MapperConfig,
    mask: BrainMask,
    atlas: Atlas,
    registry: Registry,
    palettes: [Palette; 3],
    state: UiState,
    study: StudyMode,
    rng: Box<dyn QuizRng>,
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new(MapperConfig::default())
    }
}

impl Mapper {
    pub fn new(config: MapperConfig) -> Self {
        let mask = BrainMask::brain(config.grid);
        let atlas = Atlas::build(&mask, config.initial_dominance);
        let state = UiState::new(config.initial_mode, config.initial_dominance);
        Self {
            mask,
            atlas,
            registry: Registry::builtin(),
            palettes: Mode::ALL.map(Palette::for_mode),
            state,
            study: StudyMode::Closed,
            rng: Box::new(StdQuizRng::from_entropy()),
            config,
        }
    }

    /// Replace the quiz random source (seeded or scripted for tests).
    pub fn with_rng(mut self, rng: impl QuizRng + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn mask(&self) -> &BrainMask {
        &self.mask
    }

    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn study(&self) -> &StudyMode {
        &self.study
    }

    pub fn palette(&self, mode: Mode) -> &Palette {
        let idx = Mode::ALL.iter().position(|m| *m == mode).unwrap_or(0);
        &self.palettes[idx]
    }

    /// Apply `action` and carry out the effects that belong to the engine.
    /// The returned effects tell the shell whether to redraw.
    pub fn dispatch(&mut self, action: Action) -> Effects {
        let scene = Scene {
            mask: &self.mask,
            atlas: &self.atlas,
            registry: &self.registry,
        };
        let (next, effects) = self.state.reduce(&scene, action);
        self.state = next;

        if let Some(dominance) = effects.repaint_language {
            self.atlas.set_dominance(&self.mask, dominance);
        }
        if effects.toggle_study {
            self.toggle_study();
        }
        effects
    }

    /// Map a screen position to a cell, given where the surface is drawn.
    pub fn cell_at(&self, pointer: Pos2, display: Rect) -> Cell {
        pointer_to_cell(pointer, display, &self.config.grid)
    }

    pub fn pointer_moved(&mut self, pointer: Pos2, display: Rect) -> Effects {
        let cell = self.cell_at(pointer, display);
        self.dispatch(Action::PointerMoved { cell, pointer })
    }

    pub fn clicked(&mut self, pointer: Pos2, display: Rect) -> Effects {
        let cell = self.cell_at(pointer, display);
        self.dispatch(Action::Clicked { cell })
    }

    pub fn render_params(&self, scale: u32) -> RenderParams<'_> {
        let mode = self.state.mode;
        RenderParams {
            mask: &self.mask,
            map: self.atlas.map(mode),
            palette: self.palette(mode),
            hovered: self.state.hovered,
            pinned: self.state.pinned,
            show_grid: self.state.show_grid,
            scale,
            style: &self.config.style,
        }
    }

    pub fn render_into(&self, surface: &mut Surface, scale: u32) {
        render_into(surface, &self.render_params(scale));
    }

    // ── Study mode ───────────────────────────────────────────────────────────

    /// Flashcard subject: the pinned label, or the configured default.
    pub fn flashcard_label(&self) -> Label {
        self.state
            .pinned_label(&self.atlas)
            .unwrap_or(self.config.default_flashcard_label)
    }

    pub fn open_study(&mut self) {
        let label = self.flashcard_label();
        self.study.open(
            &self.registry,
            label,
            self.config.quiz_questions,
            self.config.countdown_secs,
            self.rng.as_mut(),
        );
    }

    pub fn close_study(&mut self) {
        self.study.close();
    }

    pub fn toggle_study(&mut self) {
        if self.study.is_open() {
            self.close_study();
        } else {
            self.open_study();
        }
    }

    pub fn reveal_flashcard(&mut self) {
        if let Some(s) = self.study.session_mut() {
            s.flashcard.toggle_reveal();
        }
    }

    /// Answer the current question with `choice`.
    pub fn answer(&mut self, choice: &str) {
        if let Some(s) = self.study.session_mut() {
            if let Some(fb) = s.quiz.answer(choice) {
                log::debug!("answered {:?}: {}", choice, fb);
            }
        }
    }

    pub fn next_question(&mut self) {
        if let Some(s) = self.study.session_mut() {
            s.quiz.advance();
        }
    }

    pub fn restart_quiz(&mut self) {
        if let Some(s) = self.study.session_mut() {
            s.restart(&self.registry, self.rng.as_mut());
        }
    }

    /// Feed frame time to the open session's countdown. Returns `true` when
    /// the countdown ran out during this call.
    pub fn advance_clock(&mut self, dt: Duration) -> bool {
        self.study.advance(dt)
    }

    /// When the shell should wake up next for the countdown.
    pub fn next_wakeup(&self) -> Option<Duration> {
        self.study.session().and_then(|s| s.countdown.until_next_tick())
    }
}
