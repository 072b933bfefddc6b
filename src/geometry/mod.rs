//! Grid geometry and the brain silhouette.
//!
//! The silhouette is the union of a handful of axis-aligned ellipses,
//! rasterized once onto the cell grid. Everything downstream (classifiers,
//! renderer, pointer hit-testing) works in cell coordinates.

use std::collections::HashSet;

/// Integer cell coordinate. Signed so that pointer positions left of or
/// above the surface map to cells that are simply not in the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Which side of the midline a column falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    Left,
    Right,
    /// The single midline column; belongs to neither hemisphere.
    Mid,
}

impl Hemisphere {
    /// Short tag used inside territory labels (`"L"` / `"R"`).
    pub fn tag(self) -> &'static str {
        match self {
            Hemisphere::Left => "L",
            Hemisphere::Right => "R",
            Hemisphere::Mid => "mid",
        }
    }
}

/// Grid dimensions in cells plus the tile edge in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub width: i32,
    pub height: i32,
    pub tile: u32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            width: 60,
            height: 45,
            tile: 16,
        }
    }
}

impl GridSpec {
    /// Midline column, `floor(width / 2)`.
    #[inline]
    pub fn mid(&self) -> i32 {
        self.width / 2
    }

    /// `floor(width * frac)`, the fractional column anchors used by the
    /// functional and lesion rectangles.
    #[inline]
    pub fn col_at(&self, frac: f64) -> i32 {
        (self.width as f64 * frac).floor() as i32
    }

    pub fn hemisphere(&self, x: i32) -> Hemisphere {
        let mid = self.mid();
        if x < mid {
            Hemisphere::Left
        } else if x > mid {
            Hemisphere::Right
        } else {
            Hemisphere::Mid
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    /// Logical surface size in pixels (before device scaling).
    pub fn surface_size(&self) -> (u32, u32) {
        (
            self.width as u32 * self.tile,
            self.height as u32 * self.tile,
        )
    }
}

/// Axis-aligned ellipse in cell space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub cx: i32,
    pub cy: i32,
    pub rx: i32,
    pub ry: i32,
}

impl Ellipse {
    pub const fn new(cx: i32, cy: i32, rx: i32, ry: i32) -> Self {
        Self { cx, cy, rx, ry }
    }

    /// Normalized-ellipse inclusion test: `((x-cx)/rx)^2 + ((y-cy)/ry)^2 <= 1`.
    pub fn contains(&self, cell: Cell) -> bool {
        let dx = (cell.x - self.cx) as f64 / self.rx as f64;
        let dy = (cell.y - self.cy) as f64 / self.ry as f64;
        dx * dx + dy * dy <= 1.0
    }
}

/// The built-in silhouette: two hemispheres, the cerebellum/brainstem lobe
/// below them, and two small medial lobes that close the gap at the top.
pub fn brain_ellipses(grid: &GridSpec) -> Vec<Ellipse> {
    let mid = grid.mid();
    vec![
        Ellipse::new(mid - 10, 18, 16, 12),
        Ellipse::new(mid + 10, 18, 16, 12),
        Ellipse::new(mid, 30, 14, 7),
        Ellipse::new(mid - 3, 16, 5, 7),
        Ellipse::new(mid + 3, 16, 5, 7),
    ]
}

/// Set of cells inside the silhouette. Immutable once built.
#[derive(Debug, Clone)]
pub struct BrainMask {
    grid: GridSpec,
    cells: HashSet<Cell>,
}

impl BrainMask {
    /// Rasterize the union of `ellipses`, clipped to the grid.
    pub fn from_ellipses(grid: GridSpec, ellipses: &[Ellipse]) -> Self {
        let mut cells = HashSet::new();
        for e in ellipses {
            let y0 = (e.cy - e.ry).max(0);
            let y1 = (e.cy + e.ry).min(grid.height - 1);
            let x0 = (e.cx - e.rx).max(0);
            let x1 = (e.cx + e.rx).min(grid.width - 1);
            for y in y0..=y1 {
                for x in x0..=x1 {
                    let cell = Cell::new(x, y);
                    if e.contains(cell) {
                        cells.insert(cell);
                    }
                }
            }
        }
        log::debug!(
            "brain mask: {} cells from {} ellipses on a {}x{} grid",
            cells.len(),
            ellipses.len(),
            grid.width,
            grid.height
        );
        Self { grid, cells }
    }

    /// The default silhouette for `grid`.
    pub fn brain(grid: GridSpec) -> Self {
        Self::from_ellipses(grid, &brain_ellipses(&grid))
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}
