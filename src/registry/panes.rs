//! Content-pane population.
//!
//! The side panel has four tabs. Their contents are computed here as plain
//! data; the shell only lays them out.

use crate::territory::Mode;

use super::Registry;

pub const INITIAL_HINT: &str = "Hover and click a region to pin details here.";
pub const NO_DETAILS: &str = "No details yet.";
/// Placeholder for a pane with nothing to show.
pub const DASH: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaneTab {
    #[default]
    Overview,
    Clinical,
    Research,
    Fun,
}

impl PaneTab {
    pub const ALL: [PaneTab; 4] = [PaneTab::Overview, PaneTab::Clinical, PaneTab::Research, PaneTab::Fun];

    pub fn title(self) -> &'static str {
        match self {
            PaneTab::Overview => "Overview",
            PaneTab::Clinical => "Clinical",
            PaneTab::Research => "Research",
            PaneTab::Fun => "Fun",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaneBody {
    Message(String),
    List(Vec<&'static str>),
}

impl PaneBody {
    fn dash() -> Self {
        PaneBody::Message(DASH.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panes {
    /// Heading shown above the overview body.
    pub title: Option<String>,
    pub overview: PaneBody,
    pub clinical: PaneBody,
    pub research: PaneBody,
    pub fun: PaneBody,
}

impl Default for Panes {
    fn default() -> Self {
        Self::initial()
    }
}

impl Panes {
    /// Start-up and reset state.
    pub fn initial() -> Self {
        Self::with_message(INITIAL_HINT.to_string())
    }

    /// Shown after a mode switch.
    pub fn for_mode(mode: Mode) -> Self {
        Self::with_message(format!("Mode: {}. Click a region to load details.", mode.name()))
    }

    fn with_message(msg: String) -> Self {
        Self {
            title: None,
            overview: PaneBody::Message(msg),
            clinical: PaneBody::dash(),
            research: PaneBody::dash(),
            fun: PaneBody::dash(),
        }
    }

    /// Panes for `label`. Unknown labels get the neutral "no details" view;
    /// a missing label gets the initial view.
    pub fn populate(registry: &Registry, label: Option<&str>, mode: Mode) -> Self {
        let Some(label) = label else {
            return Self::initial();
        };
        match registry.get(label) {
            Some(entry) => Self {
                title: Some(label.to_string()),
                overview: PaneBody::List(entry.overview.to_vec()),
                clinical: PaneBody::List(entry.clinical.to_vec()),
                research: PaneBody::List(entry.research.to_vec()),
                fun: PaneBody::List(entry.fun.to_vec()),
            },
            None => {
                log::debug!("no registry entry for {:?}", label);
                Self {
                    title: Some(label.to_string()),
                    overview: PaneBody::Message(NO_DETAILS.to_string()),
                    ..Self::for_mode(mode)
                }
            }
        }
    }

    pub fn body(&self, tab: PaneTab) -> &PaneBody {
        match tab {
            PaneTab::Overview => &self.overview,
            PaneTab::Clinical => &self.clinical,
            PaneTab::Research => &self.research,
            PaneTab::Fun => &self.fun,
        }
    }
}
