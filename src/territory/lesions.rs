//! Stroke syndromes laid over the silhouette.
//!
//! The six rectangles overlap: MCA and ACA strokes share the upper lateral
//! corner, the PCA stroke eats into the right MCA. Overlaps resolve by rule
//! order (last wins), which is why [`rules`] must keep the order below.

use crate::geometry::{Cell, GridSpec, Hemisphere};

use super::labels::{L_ACA_STROKE, L_MCA_STROKE, LACUNAR, PCA_STROKE, R_ACA_STROKE, R_MCA_STROKE};
use super::Rule;

/// L-MCA, R-MCA, L-ACA, R-ACA, PCA, lacunar. Order is significant.
pub fn rules(grid: &GridSpec) -> Vec<Rule> {
    let g = *grid;
    let mid = g.mid();
    let w = g.width;
    let left = move |c: Cell| g.hemisphere(c.x) == Hemisphere::Left;
    let right = move |c: Cell| g.hemisphere(c.x) == Hemisphere::Right;
    let aca_l_edge = g.col_at(0.28);
    let aca_r_edge = g.col_at(0.72);
    let pca_edge = g.col_at(0.68);

    vec![
        Rule::new(L_MCA_STROKE, move |c| {
            left(c) && (12..=28).contains(&c.y) && c.x >= 10 && c.x <= mid - 4
        }),
        Rule::new(R_MCA_STROKE, move |c| {
            right(c) && (12..=28).contains(&c.y) && c.x <= w - 10 && c.x >= mid + 4
        }),
        Rule::new(L_ACA_STROKE, move |c| left(c) && c.y <= 16 && c.x <= aca_l_edge),
        Rule::new(R_ACA_STROKE, move |c| right(c) && c.y <= 16 && c.x >= aca_r_edge),
        Rule::new(PCA_STROKE, move |c| c.y >= 14 && c.x >= pca_edge),
        Rule::new(LACUNAR, move |c| (c.x - mid).abs() <= 3 && (18..=26).contains(&c.y)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BrainMask;
    use crate::territory::{classify, resolve};

    #[test]
    fn test_later_rule_wins_on_overlap() {
        let grid = GridSpec::default();
        let rules = rules(&grid);
        let mask = BrainMask::brain(grid);
        let map = classify(&mask, &rules);

        // Inside both the L-MCA and L-ACA rectangles; L-ACA is evaluated later.
        let both_left = Cell::new(14, 14);
        assert!(mask.contains(both_left));
        assert!(rules[0].matches(both_left) && rules[2].matches(both_left));
        assert_eq!(map.get(&both_left).copied(), Some(L_ACA_STROKE));

        // Inside both R-MCA and the PCA stroke; PCA is evaluated later.
        let both_right = Cell::new(45, 20);
        assert!(mask.contains(both_right));
        assert!(rules[1].matches(both_right) && rules[4].matches(both_right));
        assert_eq!(map.get(&both_right).copied(), Some(PCA_STROKE));

        // R-ACA and PCA share x >= 43, y in 14..=16.
        assert_eq!(resolve(&rules, Cell::new(44, 15)), Some(PCA_STROKE));
    }

    #[test]
    fn test_lacunar_band_straddles_midline() {
        let grid = GridSpec::default();
        let rules = rules(&grid);
        for x in 27..=33 {
            assert_eq!(resolve(&rules, Cell::new(x, 22)), Some(LACUNAR));
        }
        assert_ne!(resolve(&rules, Cell::new(26, 22)), Some(LACUNAR));
        assert_ne!(resolve(&rules, Cell::new(34, 22)), Some(LACUNAR));
    }

    #[test]
    fn test_pca_spans_hemispheres_only_on_right_columns() {
        let grid = GridSpec::default();
        let rules = rules(&grid);
        assert_eq!(resolve(&rules, Cell::new(40, 30)), Some(PCA_STROKE));
        assert_eq!(resolve(&rules, Cell::new(39, 30)), None);
    }

    #[test]
    fn test_unmatched_cells_are_unlabeled() {
        let grid = GridSpec::default();
        let mask = BrainMask::brain(grid);
        let map = classify(&mask, &rules(&grid));
        // Inferior lobe, left of the PCA columns and below every rectangle.
        let cell = Cell::new(25, 33);
        assert!(mask.contains(cell));
        assert_eq!(map.get(&cell), None);
    }
}
