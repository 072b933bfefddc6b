//! Territory label strings.
//!
//! Labels double as registry keys and palette keys, so they are plain
//! `&'static str` constants rather than an enum.

use crate::geometry::Hemisphere;

pub type Label = &'static str;

pub const ACA_L: Label = "ACA (L)";
pub const MCA_L: Label = "MCA (L)";
pub const PCA_L: Label = "PCA (L)";
pub const ACA_R: Label = "ACA (R)";
pub const MCA_R: Label = "MCA (R)";
pub const PCA_R: Label = "PCA (R)";

pub const M1: Label = "M1 (Primary Motor)";
pub const S1: Label = "S1 (Primary Somatosensory)";
pub const BROCA: Label = "Broca's area";
pub const WERNICKE: Label = "Wernicke's area";
pub const V1: Label = "V1 (Primary Visual)";
pub const AUDITORY: Label = "Auditory Cortex";

pub const L_MCA_STROKE: Label = "L-MCA stroke";
pub const R_MCA_STROKE: Label = "R-MCA stroke";
pub const L_ACA_STROKE: Label = "L-ACA stroke";
pub const R_ACA_STROKE: Label = "R-ACA stroke";
pub const PCA_STROKE: Label = "PCA stroke (either)";
pub const LACUNAR: Label = "Lacunar (deep)";

/// The two language-area labels rewritten on a dominance change.
pub const LANGUAGE: [Label; 2] = [BROCA, WERNICKE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artery {
    Anterior,
    Middle,
    Posterior,
}

/// Hemisphere-tagged arterial label, e.g. `MCA (R)`.
pub fn artery_label(artery: Artery, hemi: Hemisphere) -> Option<Label> {
    let label = match (artery, hemi) {
        (_, Hemisphere::Mid) => return None,
        (Artery::Anterior, Hemisphere::Left) => ACA_L,
        (Artery::Middle, Hemisphere::Left) => MCA_L,
        (Artery::Posterior, Hemisphere::Left) => PCA_L,
        (Artery::Anterior, Hemisphere::Right) => ACA_R,
        (Artery::Middle, Hemisphere::Right) => MCA_R,
        (Artery::Posterior, Hemisphere::Right) => PCA_R,
    };
    Some(label)
}

/// Hemisphere tag embedded in an arterial label (`"L"`/`"R"`).
pub fn hemisphere_tag(label: &str) -> Option<&str> {
    let open = label.rfind('(')?;
    let close = label.rfind(')')?;
    (close > open + 1).then(|| &label[open + 1..close])
}

pub fn is_language(label: &str) -> bool {
    LANGUAGE.contains(&label)
}
