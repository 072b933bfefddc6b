//! Per-mode label → colour tables. Entry order is legend order.

use crate::territory::labels::*;
use crate::territory::Mode;

use super::color::{parse_hex_color, Rgba};

/// Colour used for a label the active palette doesn't know.
pub const FALLBACK_HEX: &str = "#7a8cff";
pub const FALLBACK: Rgba = Rgba::rgb(0x7a, 0x8c, 0xff);

const ARTERIAL: &[(Label, &str)] = &[
    (ACA_L, "#98c9ff"),
    (MCA_L, "#6fa0ff"),
    (PCA_L, "#aab1ff"),
    (ACA_R, "#ffd49b"),
    (MCA_R, "#ffa96f"),
    (PCA_R, "#ffc1b0"),
];

const FUNCTIONAL: &[(Label, &str)] = &[
    (M1, "#9affc9"),
    (S1, "#b8ffc9"),
    (BROCA, "#e6ff99"),
    (WERNICKE, "#f8ffb3"),
    (V1, "#c6ffd9"),
    (AUDITORY, "#b6f2ff"),
];

const LESIONS: &[(Label, &str)] = &[
    (L_MCA_STROKE, "#ff8aa0"),
    (R_MCA_STROKE, "#ffa0c8"),
    (L_ACA_STROKE, "#ffb67e"),
    (R_ACA_STROKE, "#ffd27e"),
    (PCA_STROKE, "#a0b8ff"),
    (LACUNAR, "#b3a3ff"),
];

#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<(Label, Rgba)>,
}

impl Palette {
    pub fn for_mode(mode: Mode) -> Self {
        let table = match mode {
            Mode::Arterial => ARTERIAL,
            Mode::Functional => FUNCTIONAL,
            Mode::Lesions => LESIONS,
        };
        Self::from_hex(table)
    }

    /// Build from hex strings; malformed entries fall back to [`FALLBACK`].
    pub fn from_hex(table: &[(Label, &str)]) -> Self {
        let entries = table
            .iter()
            .map(|&(label, hex)| {
                let color = parse_hex_color(hex).unwrap_or_else(|| {
                    log::warn!("palette entry {:?} has malformed colour {:?}", label, hex);
                    FALLBACK
                });
                (label, color)
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, label: &str) -> Option<Rgba> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, c)| *c)
    }

    /// Colour for `label`, or the fallback.
    pub fn color(&self, label: &str) -> Rgba {
        self.get(label).unwrap_or(FALLBACK)
    }

    /// `(label, colour)` in legend order.
    pub fn legend(&self) -> &[(Label, Rgba)] {
        &self.entries
    }
}
