//! Functional areas: primary motor/somatosensory strip, visual and auditory
//! cortex, plus the two language areas whose side depends on dominance.

use crate::geometry::{BrainMask, Cell, GridSpec};

use super::labels::{is_language, AUDITORY, BROCA, M1, S1, V1, WERNICKE};
use super::{paint, Dominance, Rule, TerritoryMap};

/// Inclusive cell rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x0: i32,
    pub x1: i32,
    pub y0: i32,
    pub y1: i32,
}

impl CellRect {
    pub const fn new(x0: i32, x1: i32, y0: i32, y1: i32) -> Self {
        Self { x0, x1, y0, y1 }
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.x0 && cell.x <= self.x1 && cell.y >= self.y0 && cell.y <= self.y1
    }
}

/// Rows covered by the sensorimotor strip and V1.
const STRIP_ROWS: (i32, i32) = (12, 26);
/// Half-width of the sensorimotor strip around the midline.
const STRIP_HALF_WIDTH: i32 = 5;

/// Motor/sensory strip, V1 and auditory cortex, in evaluation order.
pub fn base_rules(grid: &GridSpec) -> Vec<Rule> {
    let mid = grid.mid();
    let in_strip = move |c: Cell| {
        (c.x - mid).abs() <= STRIP_HALF_WIDTH && c.y >= STRIP_ROWS.0 && c.y <= STRIP_ROWS.1
    };
    let v1_from = grid.col_at(0.7);
    let auditory = CellRect::new(grid.col_at(0.38), grid.col_at(0.62), 18, 22);

    vec![
        Rule::new(M1, move |c| in_strip(c) && c.x < mid),
        Rule::new(S1, move |c| in_strip(c) && c.x >= mid),
        Rule::new(V1, move |c| c.x >= v1_from && c.y >= STRIP_ROWS.0 && c.y <= STRIP_ROWS.1),
        Rule::new(AUDITORY, move |c| auditory.contains(c)),
    ]
}

/// `(broca, wernicke)` rectangles for a dominance setting.
pub fn language_rects(grid: &GridSpec, dominance: Dominance) -> (CellRect, CellRect) {
    let w = grid.width;
    match dominance {
        Dominance::Left => (CellRect::new(12, 20, 22, 28), CellRect::new(18, 24, 18, 22)),
        Dominance::Right => (
            CellRect::new(w - 20, w - 12, 22, 28),
            CellRect::new(w - 24, w - 18, 18, 22),
        ),
    }
}

/// Broca then Wernicke; Wernicke wins where the rectangles touch.
pub fn language_rules(grid: &GridSpec, dominance: Dominance) -> Vec<Rule> {
    let (broca, wernicke) = language_rects(grid, dominance);
    vec![
        Rule::new(BROCA, move |c| broca.contains(c)),
        Rule::new(WERNICKE, move |c| wernicke.contains(c)),
    ]
}

/// Functional map for `dominance`, derived from `prior`.
///
/// Every language label is removed from `prior` before the language rules
/// are painted, so no label survives on the opposite side. Cells that lose a
/// language label stay unlabeled; their earlier base label is not restored.
pub fn repaint_language(prior: &TerritoryMap, mask: &BrainMask, dominance: Dominance) -> TerritoryMap {
    let mut next: TerritoryMap = prior
        .iter()
        .filter(|(_, label)| !is_language(label))
        .map(|(cell, label)| (*cell, *label))
        .collect();
    paint(&mut next, mask, &language_rules(mask.grid(), dominance));
    log::debug!(
        "language areas repainted for {}-dominance ({} labeled cells)",
        dominance.tag(),
        next.len()
    );
    next
}
