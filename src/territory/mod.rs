//! Territory classifiers.
//!
//! Each display mode has a classifier that assigns a label to brain cells.
//! A classifier is an ordered list of [`Rule`]s evaluated per cell; when
//! several rules match, the one evaluated last wins. There is no priority
//! field: rule order *is* the priority, and reordering rules changes the map.

pub mod arterial;
pub mod functional;
pub mod labels;
pub mod lesions;

use std::collections::HashMap;

use crate::geometry::{BrainMask, Cell};

pub use labels::Label;

/// Which classification is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Arterial,
    Functional,
    Lesions,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Arterial, Mode::Functional, Mode::Lesions];

    /// Lower-case identifier, as shown in pane messages.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Arterial => "arterial",
            Mode::Functional => "functional",
            Mode::Lesions => "lesions",
        }
    }

    /// Button caption.
    pub fn title(self) -> &'static str {
        match self {
            Mode::Arterial => "Arterial",
            Mode::Functional => "Functional",
            Mode::Lesions => "Lesions",
        }
    }
}

/// Hemisphere hosting the language areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dominance {
    #[default]
    Left,
    Right,
}

impl Dominance {
    pub fn tag(self) -> &'static str {
        match self {
            Dominance::Left => "L",
            Dominance::Right => "R",
        }
    }
}

/// Cell → label. Cells without an entry are unlabeled.
pub type TerritoryMap = HashMap<Cell, Label>;

type Predicate = Box<dyn Fn(Cell) -> bool + Send + Sync>;

/// One `(predicate, label)` step of a classifier.
pub struct Rule {
    pub label: Label,
    predicate: Predicate,
}

impl Rule {
    pub fn new(label: Label, predicate: impl Fn(Cell) -> bool + Send + Sync + 'static) -> Self {
        Self {
            label,
            predicate: Box::new(predicate),
        }
    }

    #[inline]
    pub fn matches(&self, cell: Cell) -> bool {
        (self.predicate)(cell)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("label", &self.label).finish()
    }
}

/// Label of the last rule in `rules` that matches `cell`.
pub fn resolve(rules: &[Rule], cell: Cell) -> Option<Label> {
    rules.iter().rev().find(|r| r.matches(cell)).map(|r| r.label)
}

/// Apply `rules` in order to every cell of `mask`, writing into `map`.
/// Later matches overwrite earlier ones, including labels already in `map`.
pub fn paint(map: &mut TerritoryMap, mask: &BrainMask, rules: &[Rule]) {
    for cell in mask.iter() {
        for rule in rules {
            if rule.matches(cell) {
                map.insert(cell, rule.label);
            }
        }
    }
}

/// Build a fresh map from `rules`.
pub fn classify(mask: &BrainMask, rules: &[Rule]) -> TerritoryMap {
    let mut map = TerritoryMap::new();
    paint(&mut map, mask, rules);
    map
}

/// The three territory maps, built once at startup.
///
/// Only the functional map changes after construction, and only through
/// [`Atlas::set_dominance`], which swaps it wholesale.
#[derive(Debug, Clone)]
pub struct Atlas {
    pub arterial: TerritoryMap,
    pub functional: TerritoryMap,
    pub lesions: TerritoryMap,
    dominance: Dominance,
}

impl Atlas {
    pub fn build(mask: &BrainMask, dominance: Dominance) -> Self {
        let grid = *mask.grid();
        let arterial = classify(mask, &arterial::rules(&grid));
        let base = classify(mask, &functional::base_rules(&grid));
        let functional = functional::repaint_language(&base, mask, dominance);
        let lesions = classify(mask, &lesions::rules(&grid));
        log::info!(
            "atlas built: arterial={} functional={} lesions={} labeled cells (dominance {})",
            arterial.len(),
            functional.len(),
            lesions.len(),
            dominance.tag()
        );
        Self {
            arterial,
            functional,
            lesions,
            dominance,
        }
    }

    pub fn map(&self, mode: Mode) -> &TerritoryMap {
        match mode {
            Mode::Arterial => &self.arterial,
            Mode::Functional => &self.functional,
            Mode::Lesions => &self.lesions,
        }
    }

    pub fn dominance(&self) -> Dominance {
        self.dominance
    }

    pub fn label_at(&self, mode: Mode, cell: Cell) -> Option<Label> {
        self.map(mode).get(&cell).copied()
    }

    /// Replace the functional map with one repainted for `dominance`.
    pub fn set_dominance(&mut self, mask: &BrainMask, dominance: Dominance) {
        self.functional = functional::repaint_language(&self.functional, mask, dominance);
        self.dominance = dominance;
    }

    pub fn with_dominance(mut self, mask: &BrainMask, dominance: Dominance) -> Self {
        self.set_dominance(mask, dominance);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridSpec;

    #[test]
    fn test_last_rule_wins() {
        let mask = BrainMask::brain(GridSpec::default());
        let rules = vec![
            Rule::new("first", |_| true),
            Rule::new("second", |c: Cell| c.x < 30),
        ];
        let map = classify(&mask, &rules);
        for cell in mask.iter() {
            let expected = if cell.x < 30 { "second" } else { "first" };
            assert_eq!(map.get(&cell).copied(), Some(expected));
            assert_eq!(resolve(&rules, cell), Some(expected));
        }
    }

    #[test]
    fn test_maps_stay_inside_mask() {
        let mask = BrainMask::brain(GridSpec::default());
        let atlas = Atlas::build(&mask, Dominance::Left);
        for mode in Mode::ALL {
            let map = atlas.map(mode);
            assert!(!map.is_empty());
            for (cell, label) in map {
                assert!(mask.contains(*cell), "{:?} labeled outside mask", cell);
                assert!(!label.is_empty());
            }
        }
    }

    #[test]
    fn test_with_dominance_updates_only_functional() {
        let mask = BrainMask::brain(GridSpec::default());
        let atlas = Atlas::build(&mask, Dominance::Left);
        let arterial = atlas.arterial.clone();
        let lesions = atlas.lesions.clone();
        let before = atlas.functional.clone();

        let atlas = atlas.with_dominance(&mask, Dominance::Right);
        assert_eq!(atlas.dominance(), Dominance::Right);
        assert_eq!(atlas.arterial, arterial);
        assert_eq!(atlas.lesions, lesions);
        assert_ne!(atlas.functional, before);
    }
}
