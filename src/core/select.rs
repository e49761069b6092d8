// BilPris - core/select.rs
//
// State machine for the dependent model select.
//
// The element is only ever in one of five states, and every transition
// replaces its full content (options are never patched incrementally):
//
//   Idle ──brand chosen──▶ Loading ──resolved──▶ Populated | Empty
//                             │
//                             └──failed──▶ Unavailable
//
// Any state returns to Loading the moment the brand changes again.
// The element is enabled only while Populated; in every other state it
// shows a single disabled, pre-selected placeholder.

use crate::core::model::ModelEntry;
use crate::util::constants;

/// Content and enabled-flag of the dependent model select.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModelSelect {
    /// No brand chosen yet.
    #[default]
    Idle,

    /// A model-list request is in flight.
    Loading,

    /// Models received; the user may pick one.
    Populated {
        models: Vec<ModelEntry>,
        /// Index into `models` of the user's choice. `None` while the
        /// pre-selected placeholder is still showing.
        selected: Option<usize>,
    },

    /// The backend reported no models for the chosen brand.
    Empty,

    /// The request failed; the cause lives in the diagnostic log only.
    Unavailable,
}

impl ModelSelect {
    /// Enter the loading state, discarding any previous content.
    pub fn begin_loading(&mut self) {
        *self = ModelSelect::Loading;
    }

    /// Apply a resolved model list, replacing the current content.
    /// An empty list renders as the empty state.
    pub fn apply_models(&mut self, models: Vec<ModelEntry>) {
        *self = if models.is_empty() {
            ModelSelect::Empty
        } else {
            ModelSelect::Populated {
                models,
                selected: None,
            }
        };
    }

    /// Apply a fetch failure, replacing the current content.
    pub fn apply_failure(&mut self) {
        *self = ModelSelect::Unavailable;
    }

    /// Record the user's choice. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if let ModelSelect::Populated { models, selected } = self {
            if index < models.len() {
                *selected = Some(index);
            }
        }
    }

    /// Whether the element accepts input. Only a populated list does.
    pub fn enabled(&self) -> bool {
        matches!(self, ModelSelect::Populated { .. })
    }

    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, ModelSelect::Loading)
    }

    /// The options currently offered (empty outside the populated state).
    pub fn models(&self) -> &[ModelEntry] {
        match self {
            ModelSelect::Populated { models, .. } => models,
            _ => &[],
        }
    }

    /// Index of the chosen model, if the user has picked one.
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            ModelSelect::Populated { selected, .. } => *selected,
            _ => None,
        }
    }

    /// The chosen model entry, if any.
    pub fn selected_entry(&self) -> Option<&ModelEntry> {
        match self {
            ModelSelect::Populated {
                models,
                selected: Some(idx),
            } => models.get(*idx),
            _ => None,
        }
    }

    /// The disabled, pre-selected placeholder for the current state.
    pub fn placeholder(&self) -> &'static str {
        match self {
            ModelSelect::Idle => constants::PLACEHOLDER_IDLE,
            ModelSelect::Loading => constants::PLACEHOLDER_LOADING,
            ModelSelect::Populated { .. } => constants::PLACEHOLDER_SELECT,
            ModelSelect::Empty => constants::PLACEHOLDER_EMPTY,
            ModelSelect::Unavailable => constants::PLACEHOLDER_ERROR,
        }
    }

    /// Text shown in the closed select: the chosen model's name, or the
    /// state placeholder while nothing is chosen.
    pub fn display_text(&self) -> &str {
        self.selected_entry()
            .map(|entry| entry.name.as_str())
            .unwrap_or_else(|| self.placeholder())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(value: &str, name: &str) -> ModelEntry {
        ModelEntry {
            value: value.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_disabled_placeholder() {
        let select = ModelSelect::default();
        assert!(!select.enabled());
        assert_eq!(select.display_text(), "Velg merke først");
    }

    #[test]
    fn test_loading_replaces_previous_content() {
        let mut select = ModelSelect::default();
        select.apply_models(vec![entry("a", "Alpha")]);
        select.select(0);
        assert_eq!(select.selected_entry().unwrap().value, "a");

        select.begin_loading();
        assert!(select.is_loading());
        assert!(!select.enabled());
        assert!(select.models().is_empty());
        assert!(select.selected_entry().is_none());
        assert_eq!(select.display_text(), "Henter modeller...");
    }

    #[test]
    fn test_populated_preserves_order_and_identifiers() {
        let mut select = ModelSelect::Loading;
        select.apply_models(vec![entry("a", "Alpha"), entry("b", "Beta")]);

        assert!(select.enabled());
        assert_eq!(select.models().len(), 2);
        assert_eq!(select.models()[0].name, "Alpha");
        assert_eq!(select.models()[0].value, "a");
        assert_eq!(select.models()[1].name, "Beta");
        assert_eq!(select.models()[1].value, "b");
        // Placeholder is pre-selected until the user picks a model.
        assert_eq!(select.display_text(), "Velg modell");
    }

    #[test]
    fn test_selection() {
        let mut select = ModelSelect::Loading;
        select.apply_models(vec![entry("a", "Alpha"), entry("b", "Beta")]);

        select.select(1);
        assert_eq!(select.display_text(), "Beta");
        assert_eq!(select.selected_entry().unwrap().value, "b");

        // Out-of-range choice leaves the selection untouched.
        select.select(7);
        assert_eq!(select.selected_index(), Some(1));
    }

    #[test]
    fn test_empty_list_disables_element() {
        let mut select = ModelSelect::Loading;
        select.apply_models(Vec::new());
        assert!(!select.enabled());
        assert_eq!(select.display_text(), "Ingen modeller");
    }

    #[test]
    fn test_failure_disables_element() {
        let mut select = ModelSelect::Loading;
        select.apply_failure();
        assert!(!select.enabled());
        assert_eq!(select.display_text(), "Kunne ikke hente");
    }

    #[test]
    fn test_same_outcome_twice_is_idempotent() {
        let models = vec![entry("a", "Alpha"), entry("b", "Beta")];

        let mut first = ModelSelect::default();
        first.begin_loading();
        first.apply_models(models.clone());

        let mut second = ModelSelect::default();
        second.begin_loading();
        second.apply_models(models.clone());
        second.begin_loading();
        second.apply_models(models);

        assert_eq!(first, second);
    }
}
