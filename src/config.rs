//! Start-up configuration.
//!
//! Everything has a sensible default; override with the `with_*` builders.

use crate::geometry::GridSpec;
use crate::render::RenderStyle;
use crate::study::quiz::DEFAULT_QUESTIONS;
use crate::study::DEFAULT_COUNTDOWN_SECS;
use crate::territory::labels::{Label, M1};
use crate::territory::{Dominance, Mode};

#[derive(Debug, Clone, PartialEq)]
pub struct MapperConfig {
    pub grid: GridSpec,
    pub style: RenderStyle,
    /// Supersampling factor of the rendered surface (1 = one pixel per
    /// logical pixel).
    pub scale: u32,
    pub initial_mode: Mode,
    pub initial_dominance: Dominance,
    /// Questions per quiz round.
    pub quiz_questions: usize,
    pub countdown_secs: u32,
    /// Flashcard subject when no cell is pinned.
    pub default_flashcard_label: Label,
    /// Tooltip offset from the pointer, logical pixels.
    pub tooltip_offset: [f32; 2],
    /// Gap kept between a clamped tooltip and the container edge.
    pub tooltip_margin: f32,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            style: RenderStyle::default(),
            scale: 1,
            initial_mode: Mode::Arterial,
            initial_dominance: Dominance::Left,
            quiz_questions: DEFAULT_QUESTIONS,
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            default_flashcard_label: M1,
            tooltip_offset: [12.0, -8.0],
            tooltip_margin: 8.0,
        }
    }
}

impl MapperConfig {
    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    pub fn with_overlay_alpha(mut self, alpha: f32) -> Self {
        self.style.overlay_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn with_initial_mode(mut self, mode: Mode) -> Self {
        self.initial_mode = mode;
        self
    }

    pub fn with_dominance(mut self, dominance: Dominance) -> Self {
        self.initial_dominance = dominance;
        self
    }

    pub fn with_quiz_questions(mut self, n: usize) -> Self {
        self.quiz_questions = n.max(1);
        self
    }

    pub fn with_countdown_secs(mut self, secs: u32) -> Self {
        self.countdown_secs = secs;
        self
    }

    pub fn with_default_flashcard_label(mut self, label: Label) -> Self {
        self.default_flashcard_label = label;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = MapperConfig::default();
        assert_eq!(c.grid.width, 60);
        assert_eq!(c.grid.height, 45);
        assert_eq!(c.grid.tile, 16);
        assert_eq!(c.quiz_questions, 6);
        assert_eq!(c.countdown_secs, 60);
        assert!((c.style.overlay_alpha - 0.68).abs() < f32::EPSILON);
    }

    #[test]
    fn test_builders() {
        let c = MapperConfig::default()
            .with_quiz_questions(0)
            .with_countdown_secs(30)
            .with_initial_mode(Mode::Lesions)
            .with_scale(0)
            .with_overlay_alpha(1.5);
        assert_eq!(c.quiz_questions, 1);
        assert_eq!(c.scale, 1);
        assert_eq!(c.style.overlay_alpha, 1.0);
        assert_eq!(c.countdown_secs, 30);
        assert_eq!(c.initial_mode, Mode::Lesions);
    }
}
