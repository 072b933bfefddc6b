//! Arterial (vascular) territories: ACA / MCA / PCA per hemisphere.
//!
//! Position is normalized inside the cell's hemisphere: `rel_x` runs 0..1
//! from the hemisphere's left edge across its width, `rel_y` runs 0..1 down
//! the full grid height. The superior band goes to the ACA, the
//! posterior-inferior corner to the PCA, and everything else to the MCA.

use crate::geometry::{Cell, GridSpec, Hemisphere};

use super::labels::{artery_label, Artery};
use super::Rule;

/// Upper band (`rel_y < 0.33`) supplied by the anterior cerebral artery.
pub const SUPERIOR_BAND: f64 = 0.33;
/// `rel_x` past which the posterior corner begins.
pub const POSTERIOR_X: f64 = 0.66;
/// `rel_y` past which the posterior corner begins.
pub const POSTERIOR_Y: f64 = 0.48;

/// Hemisphere-relative position of `cell`, or `None` on the midline.
pub fn relative_position(grid: &GridSpec, cell: Cell) -> Option<(Hemisphere, f64, f64)> {
    let hemi = grid.hemisphere(cell.x);
    let origin = match hemi {
        Hemisphere::Left => 0,
        Hemisphere::Right => grid.mid(),
        Hemisphere::Mid => return None,
    };
    let hemi_w = grid.mid() as f64;
    let rel_x = (cell.x - origin) as f64 / hemi_w;
    let rel_y = cell.y as f64 / grid.height as f64;
    Some((hemi, rel_x, rel_y))
}

/// Rules in evaluation order. MCA is the default, PCA overrides it in the
/// posterior corner, ACA overrides both in the superior band.
pub fn rules(grid: &GridSpec) -> Vec<Rule> {
    let mut rules = Vec::with_capacity(6);
    for hemi in [Hemisphere::Left, Hemisphere::Right] {
        for artery in [Artery::Middle, Artery::Posterior, Artery::Anterior] {
            let Some(label) = artery_label(artery, hemi) else {
                continue;
            };
            let g = *grid;
            rules.push(Rule::new(label, move |cell| {
                match relative_position(&g, cell) {
                    Some((h, rel_x, rel_y)) if h == hemi => match artery {
                        Artery::Middle => true,
                        Artery::Posterior => rel_x > POSTERIOR_X && rel_y > POSTERIOR_Y,
                        Artery::Anterior => rel_y < SUPERIOR_BAND,
                    },
                    _ => false,
                }
            }));
        }
    }
    rules
}
