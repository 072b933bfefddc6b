//! Content registry: label → overview / clinical / research / fun notes.
//!
//! Read-only and static. A label with no entry is a normal outcome (content
//! not written yet); callers render a placeholder for it.

mod data;
pub mod panes;

/// Notes for one territory label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryEntry {
    pub label: &'static str,
    pub overview: &'static [&'static str],
    pub clinical: &'static [&'static str],
    pub research: &'static [&'static str],
    pub fun: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Registry {
    entries: &'static [RegistryEntry],
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// The bundled neuroanatomy notes.
    pub fn builtin() -> Self {
        Self::new(data::ENTRIES)
    }

    pub fn new(entries: &'static [RegistryEntry]) -> Self {
        Self { entries }
    }

    pub fn get(&self, label: &str) -> Option<&'static RegistryEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    /// Labels in registry order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.label).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::palette::Palette;
    use crate::territory::Mode;

    #[test]
    fn test_every_palette_label_has_content() {
        let reg = Registry::builtin();
        assert_eq!(reg.len(), 18);
        for mode in Mode::ALL {
            for (label, _) in Palette::for_mode(mode).legend() {
                let entry = reg.get(label).unwrap_or_else(|| panic!("no entry for {}", label));
                assert!(!entry.overview.is_empty());
                assert!(!entry.clinical.is_empty());
                assert!(!entry.research.is_empty());
                assert!(!entry.fun.is_empty());
            }
        }
    }

    #[test]
    fn test_labels_are_unique() {
        let labels = Registry::builtin().labels();
        let unique: std::collections::HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn test_missing_label() {
        assert!(Registry::builtin().get("Insula").is_none());
    }
}
