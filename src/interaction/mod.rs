//! UI state and its transitions.
//!
//! [`UiState::reduce`] is a pure function from `(state, action)` to the next
//! state plus the side effects the caller must carry out (redraw, repaint
//! the functional map, toggle study mode). Nothing here touches egui widgets.

pub mod keys;
pub mod pointer;

use egui::Pos2;

use crate::geometry::{BrainMask, Cell};
use crate::registry::panes::Panes;
use crate::registry::Registry;
use crate::territory::labels::Label;
use crate::territory::{Atlas, Dominance, Mode};

/// Read-only world the reducer consults.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub mask: &'a BrainMask,
    pub atlas: &'a Atlas,
    pub registry: &'a Registry,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tooltip {
    pub text: Label,
    /// Pointer position the tooltip follows, in screen coordinates.
    pub anchor: Pos2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Pointer moved over the surface; `cell` is what it maps to.
    PointerMoved { cell: Cell, pointer: Pos2 },
    PointerLeft,
    Clicked { cell: Cell },
    SelectMode(Mode),
    SetGrid(bool),
    ToggleGrid,
    SetDominance(Dominance),
    Reset,
    ToggleStudy,
    Resized,
}

/// Work the caller owes after a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Effects {
    pub redraw: bool,
    pub repaint_language: Option<Dominance>,
    pub toggle_study: bool,
}

impl Effects {
    fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub mode: Mode,
    pub dominance: Dominance,
    pub hovered: Option<Cell>,
    pub pinned: Option<Cell>,
    pub show_grid: bool,
    pub tooltip: Option<Tooltip>,
    pub panes: Panes,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Mode::default(), Dominance::default())
    }
}

impl UiState {
    pub fn new(mode: Mode, dominance: Dominance) -> Self {
        Self {
            mode,
            dominance,
            hovered: None,
            pinned: None,
            show_grid: false,
            tooltip: None,
            panes: Panes::initial(),
        }
    }

    /// Label of the pinned cell in the active map.
    pub fn pinned_label(&self, atlas: &Atlas) -> Option<Label> {
        self.pinned.and_then(|c| atlas.label_at(self.mode, c))
    }

    fn cleared(&self) -> Self {
        Self {
            hovered: None,
            pinned: None,
            tooltip: None,
            ..self.clone()
        }
    }

    pub fn reduce(&self, scene: &Scene<'_>, action: Action) -> (UiState, Effects) {
        match action {
            Action::PointerMoved { cell, pointer } => {
                let hovered = scene.mask.contains(cell).then_some(cell);
                let tooltip = hovered
                    .and_then(|c| scene.atlas.label_at(self.mode, c))
                    .map(|text| Tooltip { text, anchor: pointer });
                let effects = Effects {
                    redraw: hovered != self.hovered,
                    ..Effects::default()
                };
                (
                    UiState {
                        hovered,
                        tooltip,
                        ..self.clone()
                    },
                    effects,
                )
            }
            Action::PointerLeft => (
                UiState {
                    hovered: None,
                    tooltip: None,
                    ..self.clone()
                },
                Effects {
                    redraw: self.hovered.is_some(),
                    ..Effects::default()
                },
            ),
            Action::Clicked { cell } => {
                if !scene.mask.contains(cell) {
                    return (self.clone(), Effects::default());
                }
                let Some(label) = scene.atlas.label_at(self.mode, cell) else {
                    return (self.clone(), Effects::default());
                };
                log::debug!("pinned {:?} ({})", cell, label);
                (
                    UiState {
                        pinned: Some(cell),
                        panes: Panes::populate(scene.registry, Some(label), self.mode),
                        ..self.clone()
                    },
                    Effects::redraw(),
                )
            }
            Action::SelectMode(mode) => {
                log::debug!("mode -> {}", mode.name());
                (
                    UiState {
                        mode,
                        panes: Panes::for_mode(mode),
                        ..self.cleared()
                    },
                    Effects::redraw(),
                )
            }
            Action::SetGrid(show_grid) => (
                UiState {
                    show_grid,
                    ..self.clone()
                },
                Effects::redraw(),
            ),
            Action::ToggleGrid => self.reduce(scene, Action::SetGrid(!self.show_grid)),
            Action::SetDominance(dominance) => (
                UiState {
                    dominance,
                    ..self.clone()
                },
                Effects {
                    redraw: self.mode == Mode::Functional,
                    repaint_language: Some(dominance),
                    toggle_study: false,
                },
            ),
            Action::Reset => (
                UiState {
                    panes: Panes::initial(),
                    ..self.cleared()
                },
                Effects::redraw(),
            ),
            Action::ToggleStudy => (
                self.clone(),
                Effects {
                    toggle_study: true,
                    ..Effects::default()
                },
            ),
            Action::Resized => (self.clone(), Effects::redraw()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridSpec;
    use crate::registry::panes::PaneBody;
    use crate::territory::labels::{ACA_L, LACUNAR};
    use egui::pos2;

    struct World {
        mask: BrainMask,
        atlas: Atlas,
        registry: Registry,
    }

    impl World {
        fn new() -> Self {
            let mask = BrainMask::brain(GridSpec::default());
            let atlas = Atlas::build(&mask, Dominance::Left);
            Self {
                mask,
                atlas,
                registry: Registry::builtin(),
            }
        }

        fn scene(&self) -> Scene<'_> {
            Scene {
                mask: &self.mask,
                atlas: &self.atlas,
                registry: &self.registry,
            }
        }
    }

    #[test]
    fn test_hover_inside_and_outside_mask() {
        let w = World::new();
        let s0 = UiState::default();
        let (s1, fx) = s0.reduce(&w.scene(), Action::PointerMoved { cell: Cell::new(20, 10), pointer: pos2(5.0, 6.0) });
        assert_eq!(s1.hovered, Some(Cell::new(20, 10)));
        assert_eq!(s1.tooltip, Some(Tooltip { text: ACA_L, anchor: pos2(5.0, 6.0) }));
        assert!(fx.redraw);

        let (s2, _) = s1.reduce(&w.scene(), Action::PointerMoved { cell: Cell::new(0, 0), pointer: pos2(0.0, 0.0) });
        assert_eq!(s2.hovered, None);
        assert_eq!(s2.tooltip, None);
    }

    #[test]
    fn test_hover_unlabeled_brain_cell_hides_tooltip() {
        let w = World::new();
        // midline cells are unlabeled in the arterial map
        let cell = Cell::new(30, 20);
        assert!(w.mask.contains(cell));
        let (s, _) = UiState::default().reduce(&w.scene(), Action::PointerMoved { cell, pointer: pos2(1.0, 1.0) });
        assert_eq!(s.hovered, Some(cell));
        assert_eq!(s.tooltip, None);
    }

    #[test]
    fn test_click_pins_labeled_cell_only() {
        let w = World::new();
        let s0 = UiState::default();

        let (s, fx) = s0.reduce(&w.scene(), Action::Clicked { cell: Cell::new(30, 20) });
        assert_eq!(s, s0);
        assert_eq!(fx, Effects::default());

        let (s, fx) = s0.reduce(&w.scene(), Action::Clicked { cell: Cell::new(-3, 2) });
        assert_eq!(s, s0);
        assert!(!fx.redraw);

        let (s, fx) = s0.reduce(&w.scene(), Action::Clicked { cell: Cell::new(20, 10) });
        assert_eq!(s.pinned, Some(Cell::new(20, 10)));
        assert_eq!(s.pinned_label(&w.atlas), Some(ACA_L));
        assert_eq!(s.panes.title.as_deref(), Some(ACA_L));
        assert!(matches!(s.panes.clinical, PaneBody::List(_)));
        assert!(fx.redraw);
    }

    #[test]
    fn test_mode_switch_clears_hover_and_pin() {
        let w = World::new();
        let (s, _) = UiState::default().reduce(&w.scene(), Action::Clicked { cell: Cell::new(20, 10) });
        let (s, _) = s.reduce(&w.scene(), Action::PointerMoved { cell: Cell::new(21, 10), pointer: pos2(3.0, 3.0) });
        let (s, fx) = s.reduce(&w.scene(), Action::SelectMode(Mode::Lesions));
        assert_eq!(s.mode, Mode::Lesions);
        assert_eq!((s.hovered, s.pinned, s.tooltip), (None, None, None));
        assert_eq!(s.panes, Panes::for_mode(Mode::Lesions));
        assert!(fx.redraw);
    }

    #[test]
    fn test_reset_restores_initial_panes() {
        let w = World::new();
        let s = UiState::new(Mode::Lesions, Dominance::Left);
        let (s, _) = s.reduce(&w.scene(), Action::Clicked { cell: Cell::new(30, 22) });
        assert_eq!(s.pinned_label(&w.atlas), Some(LACUNAR));
        let (s, fx) = s.reduce(&w.scene(), Action::Reset);
        assert_eq!(s.pinned, None);
        assert_eq!(s.panes, Panes::initial());
        assert_eq!(s.mode, Mode::Lesions);
        assert!(fx.redraw);
    }

    #[test]
    fn test_dominance_redraws_only_in_functional_mode() {
        let w = World::new();
        let (s, fx) = UiState::default().reduce(&w.scene(), Action::SetDominance(Dominance::Right));
        assert_eq!(s.dominance, Dominance::Right);
        assert_eq!(fx.repaint_language, Some(Dominance::Right));
        assert!(!fx.redraw);

        let functional = UiState::new(Mode::Functional, Dominance::Left);
        let (_, fx) = functional.reduce(&w.scene(), Action::SetDominance(Dominance::Right));
        assert!(fx.redraw);
    }

    #[test]
    fn test_grid_toggle() {
        let w = World::new();
        let (s, fx) = UiState::default().reduce(&w.scene(), Action::ToggleGrid);
        assert!(s.show_grid && fx.redraw);
        let (s, _) = s.reduce(&w.scene(), Action::ToggleGrid);
        assert!(!s.show_grid);
    }

    #[test]
    fn test_study_toggle_is_an_effect() {
        let w = World::new();
        let s0 = UiState::default();
        let (s, fx) = s0.reduce(&w.scene(), Action::ToggleStudy);
        assert_eq!(s, s0);
        assert!(fx.toggle_study && !fx.redraw);
    }
}
