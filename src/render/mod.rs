//! Software renderer: territory map → RGBA surface.
//!
//! Every call redraws the whole surface from its inputs; there is no
//! incremental state. The surface is sized `grid * tile * scale` so that
//! HiDPI displays get crisp tiles.

pub mod color;
pub mod palette;

use rayon::prelude::*;

use crate::geometry::{BrainMask, Cell};
use crate::territory::TerritoryMap;

use color::{parse_hex_color, Rgba};
use palette::Palette;

/// Colours and proportions of the drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub base: Rgba,
    /// Lighter strip along the top of every silhouette tile.
    pub base_highlight: Rgba,
    /// Height of the highlight strip as a fraction of the tile.
    pub highlight_frac: f32,
    pub overlay_alpha: f32,
    pub outline: Rgba,
    /// Outline width in logical pixels.
    pub outline_width: u32,
    pub grid_line: Rgba,
    pub grid_alpha: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            base: parse_hex_color("#1b2033").unwrap_or(Rgba::BLACK),
            base_highlight: parse_hex_color("#1f2740").unwrap_or(Rgba::BLACK),
            highlight_frac: 0.22,
            overlay_alpha: 0.68,
            outline: Rgba::WHITE,
            outline_width: 2,
            grid_line: parse_hex_color("#4a4e66").unwrap_or(Rgba::BLACK),
            grid_alpha: 0.12,
        }
    }
}

/// Everything a frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct RenderParams<'a> {
    pub mask: &'a BrainMask,
    pub map: &'a TerritoryMap,
    pub palette: &'a Palette,
    pub hovered: Option<Cell>,
    pub pinned: Option<Cell>,
    pub show_grid: bool,
    /// Device pixels per logical pixel (integer, at least 1).
    pub scale: u32,
    pub style: &'a RenderStyle,
}

/// RGBA8 pixel buffer, straight alpha, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl Surface {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let i = (y * self.width + x) * 4;
        Rgba::from_bytes([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }
}

/// What a single tile looks like, resolved once per row.
#[derive(Clone, Copy)]
struct TileLook {
    body: Rgba,
    top: Rgba,
    outlined: bool,
}

/// Draw a fresh surface.
pub fn render(params: &RenderParams<'_>) -> Surface {
    let mut surface = Surface::new(0, 0);
    render_into(&mut surface, params);
    surface
}

/// Redraw `surface` in place, resizing it if the grid or scale changed.
pub fn render_into(surface: &mut Surface, params: &RenderParams<'_>) {
    let grid = *params.mask.grid();
    let scale = params.scale.max(1) as usize;
    let ts = grid.tile as usize * scale;
    let cols = grid.width.max(0) as usize;
    let rows = grid.height.max(0) as usize;
    let (width, height) = (cols * ts, rows * ts);

    if surface.width != width || surface.height != height {
        *surface = Surface::new(width, height);
    }

    let style = params.style;
    let strip_h = (grid.tile as f32 * style.highlight_frac).floor() as usize * scale;
    let outline_w = style.outline_width as usize * scale;
    let line = style.grid_line.with_alpha(style.grid_alpha);
    let overlay = |c: Rgba| c.with_alpha(style.overlay_alpha);

    surface
        .pixels
        .par_chunks_exact_mut(width * 4)
        .enumerate()
        .for_each(|(py, row_buf)| {
            let cy = (py / ts) as i32;
            let ly = py % ts;

            let looks: Vec<Option<TileLook>> = (0..cols as i32)
                .map(|cx| {
                    let cell = Cell::new(cx, cy);
                    if !params.mask.contains(cell) {
                        return None;
                    }
                    let mut look = TileLook {
                        body: style.base,
                        top: style.base_highlight,
                        outlined: false,
                    };
                    if let Some(label) = params.map.get(&cell) {
                        let fill = overlay(params.palette.color(label));
                        look.body = fill.over(look.body);
                        look.top = fill.over(look.top);
                        look.outlined = params.hovered == Some(cell) || params.pinned == Some(cell);
                    }
                    Some(look)
                })
                .collect();

            for (px, out) in row_buf.chunks_exact_mut(4).enumerate() {
                let lx = px % ts;
                let mut c = match looks[px / ts] {
                    None => Rgba::TRANSPARENT,
                    Some(look) => {
                        let on_border = lx < outline_w
                            || lx >= ts.saturating_sub(outline_w)
                            || ly < outline_w
                            || ly >= ts.saturating_sub(outline_w);
                        if look.outlined && on_border {
                            style.outline
                        } else if ly < strip_h {
                            look.top
                        } else {
                            look.body
                        }
                    }
                };
                if params.show_grid && (lx < scale || ly < scale) {
                    c = line.over(c);
                }
                out.copy_from_slice(&c.to_bytes());
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridSpec;
    use crate::territory::{lesions, classify, Mode};

    struct Fixture {
        mask: BrainMask,
        map: TerritoryMap,
        palette: Palette,
        style: RenderStyle,
    }

    fn fixture() -> Fixture {
        let mask = BrainMask::brain(GridSpec::default());
        let map = classify(&mask, &lesions::rules(mask.grid()));
        Fixture {
            mask,
            map,
            palette: Palette::for_mode(Mode::Lesions),
            style: RenderStyle::default(),
        }
    }

    fn params(f: &Fixture) -> RenderParams<'_> {
        RenderParams {
            mask: &f.mask,
            map: &f.map,
            palette: &f.palette,
            hovered: None,
            pinned: None,
            show_grid: false,
            scale: 1,
            style: &f.style,
        }
    }

    /// Centre pixel of `cell` at scale 1.
    fn center(cell: Cell) -> (usize, usize) {
        (cell.x as usize * 16 + 8, cell.y as usize * 16 + 8)
    }

    #[test]
    fn test_surface_size_follows_scale() {
        let f = fixture();
        let s = render(&RenderParams { scale: 2, ..params(&f) });
        assert_eq!(s.size(), [60 * 16 * 2, 45 * 16 * 2]);
        assert_eq!(s.pixels.len(), s.width * s.height * 4);
    }

    #[test]
    fn test_background_is_transparent() {
        let f = fixture();
        let s = render(&params(&f));
        assert_eq!(s.pixel(0, 0), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_unlabeled_cell_shows_base_tile() {
        let f = fixture();
        let s = render(&params(&f));
        let cell = Cell::new(25, 33);
        assert!(f.mask.contains(cell) && !f.map.contains_key(&cell));
        let (x, y) = center(cell);
        assert_eq!(s.pixel(x, y), f.style.base);
        // highlight strip: floor(16 * 0.22) = 3 rows
        assert_eq!(s.pixel(x, y - 8), f.style.base_highlight);
        assert_eq!(s.pixel(x, y - 8 + 3), f.style.base);
    }

    #[test]
    fn test_labeled_cell_is_tinted() {
        let f = fixture();
        let s = render(&params(&f));
        let cell = Cell::new(45, 20);
        let label = f.map[&cell];
        let expected = f.palette.color(label).with_alpha(0.68).over(f.style.base);
        let (x, y) = center(cell);
        assert_eq!(s.pixel(x, y), expected);
    }

    #[test]
    fn test_outline_on_hovered_and_pinned() {
        let f = fixture();
        let hovered = Cell::new(45, 20);
        let pinned = Cell::new(14, 14);
        let s = render(&RenderParams {
            hovered: Some(hovered),
            pinned: Some(pinned),
            ..params(&f)
        });
        for cell in [hovered, pinned] {
            let (x0, y0) = (cell.x as usize * 16, cell.y as usize * 16);
            assert_eq!(s.pixel(x0, y0 + 8), Rgba::WHITE);
            assert_eq!(s.pixel(x0 + 1, y0 + 8), Rgba::WHITE);
            assert_eq!(s.pixel(x0 + 15, y0 + 8), Rgba::WHITE);
            assert_eq!(s.pixel(x0 + 8, y0 + 14), Rgba::WHITE);
            assert_ne!(s.pixel(x0 + 8, y0 + 8), Rgba::WHITE);
        }
    }

    #[test]
    fn test_unlabeled_hover_has_no_outline() {
        let f = fixture();
        let cell = Cell::new(25, 33);
        let plain = render(&params(&f));
        let hovered = render(&RenderParams { hovered: Some(cell), ..params(&f) });
        assert_eq!(plain, hovered);
    }

    #[test]
    fn test_grid_lines_on_tile_boundaries() {
        let f = fixture();
        let s = render(&RenderParams { show_grid: true, ..params(&f) });
        let line = f.style.grid_line.with_alpha(0.12);
        assert_eq!(s.pixel(16, 5), line);
        assert_eq!(s.pixel(5, 16), line);
        assert_eq!(s.pixel(5, 5), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_redraw_leaves_no_residue() {
        let f = fixture();
        let fresh = render(&params(&f));
        let mut reused = render(&RenderParams {
            hovered: Some(Cell::new(45, 20)),
            show_grid: true,
            ..params(&f)
        });
        render_into(&mut reused, &params(&f));
        assert_eq!(reused, fresh);
    }
}
