//! Tab strip model.
//!
//! A `TabStrip` is rebuilt on every render from caller-provided descriptors.
//! It owns no selection state: the selected id comes from the caller and the
//! strip only reports which tab the user asked for.

use std::collections::HashSet;

use thiserror::Error;

/// Malformed tab strip composition. Always a programmer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabsError {
    #[error("duplicate tab id {id:?}; ids must be unique among siblings")]
    DuplicateId { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabSize {
    #[default]
    Regular,
    Small,
}

/// One tab as described by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabDescriptor {
    pub id: String,
    pub title: String,
    pub icon: Option<String>,
    pub count: Option<u32>,
    pub disabled: bool,
    pub selected: bool,
}

impl TabDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn icon(mut self, name: impl Into<String>) -> Self {
        self.icon = Some(name.into());
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Explicit flag wins; otherwise selected when the ids match.
    pub fn is_selected(&self, selected_id: Option<&str>) -> bool {
        self.selected || selected_id == Some(self.id.as_str())
    }

    pub fn is_interactive(&self) -> bool {
        !self.disabled
    }

    /// Count to show in the badge. Zero means no badge.
    pub fn visible_count(&self) -> Option<u32> {
        self.count.filter(|count| *count > 0)
    }

    pub fn state(&self, selected_id: Option<&str>) -> TabState {
        TabState {
            id: self.id.clone(),
            selected: self.is_selected(selected_id),
            disabled: self.disabled,
            tab_index: if self.disabled { -1 } else { 0 },
            count: self.visible_count(),
        }
    }
}

/// Computed per-render state of a single tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabState {
    pub id: String,
    pub selected: bool,
    pub disabled: bool,
    pub tab_index: i32,
    pub count: Option<u32>,
}

/// What the user did to a tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Click,
    /// `KeyboardEvent.key` of a keydown.
    Key(String),
}

impl Trigger {
    pub fn key(key: impl Into<String>) -> Self {
        Trigger::Key(key.into())
    }

    /// Clicks always activate; keys only for space and enter.
    pub fn activates(&self) -> bool {
        match self {
            Trigger::Click => true,
            Trigger::Key(key) => matches!(key.as_str(), " " | "Enter" | "Return"),
        }
    }

    /// Activating keys must not also scroll the page or submit a form.
    pub fn prevents_default(&self) -> bool {
        matches!(self, Trigger::Key(_)) && self.activates()
    }
}

/// Validated, ordered list of tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStrip {
    tabs: Vec<TabDescriptor>,
}

impl TabStrip {
    pub fn new(tabs: impl IntoIterator<Item = TabDescriptor>) -> Result<Self, TabsError> {
        let tabs: Vec<TabDescriptor> = tabs.into_iter().collect();
        let mut seen = HashSet::with_capacity(tabs.len());
        for tab in &tabs {
            if !seen.insert(tab.id.as_str()) {
                return Err(TabsError::DuplicateId { id: tab.id.clone() });
            }
        }
        Ok(Self { tabs })
    }

    pub fn tabs(&self) -> &[TabDescriptor] {
        &self.tabs
    }

    pub fn get(&self, id: &str) -> Option<&TabDescriptor> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn states(&self, selected_id: Option<&str>) -> Vec<TabState> {
        self.tabs.iter().map(|tab| tab.state(selected_id)).collect()
    }

    /// Runs `on_change` with `id` if the trigger should change the selection.
    /// Returns whether the callback ran.
    pub fn activate<F>(&self, id: &str, trigger: &Trigger, on_change: F) -> bool
    where
        F: FnOnce(&str),
    {
        match self.get(id) {
            Some(tab) if tab.is_interactive() && trigger.activates() => {
                on_change(&tab.id);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip() -> TabStrip {
        TabStrip::new(vec![
            TabDescriptor::new("overview", "Overview"),
            TabDescriptor::new("runs", "Runs").count(12),
            TabDescriptor::new("schedules", "Schedules").icon("schedule"),
            TabDescriptor::new("sensors", "Sensors").disabled(true),
        ])
        .unwrap()
    }

    fn fire(strip: &TabStrip, id: &str, trigger: Trigger) -> Vec<String> {
        let mut calls = Vec::new();
        strip.activate(id, &trigger, |id| calls.push(id.to_string()));
        calls
    }

    #[test]
    fn test_states_follow_input_order() {
        let ids: Vec<_> = strip().states(None).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, ["overview", "runs", "schedules", "sensors"]);
    }

    #[test]
    fn test_only_matching_id_is_selected() {
        let states = strip().states(Some("runs"));
        let selected: Vec<_> = states.iter().filter(|s| s.selected).map(|s| s.id.as_str()).collect();
        assert_eq!(selected, ["runs"]);
    }

    #[test]
    fn test_explicit_selected_flag() {
        let strip = TabStrip::new(vec![
            TabDescriptor::new("a", "A"),
            TabDescriptor::new("b", "B").selected(true),
        ])
        .unwrap();
        let states = strip.states(None);
        assert!(!states[0].selected);
        assert!(states[1].selected);

        // The flag does not stop the matching id from being selected too.
        let states = strip.states(Some("a"));
        assert!(states[0].selected);
        assert!(states[1].selected);
    }

    #[test]
    fn test_unknown_selected_id_selects_nothing() {
        assert!(strip().states(Some("missing")).iter().all(|s| !s.selected));
    }

    #[test]
    fn test_click_fires_once() {
        assert_eq!(fire(&strip(), "runs", Trigger::Click), ["runs"]);
    }

    #[test]
    fn test_click_on_disabled_does_nothing() {
        assert!(fire(&strip(), "sensors", Trigger::Click).is_empty());
        assert!(fire(&strip(), "sensors", Trigger::key("Enter")).is_empty());
    }

    #[test]
    fn test_click_on_unknown_id_does_nothing() {
        assert!(fire(&strip(), "nope", Trigger::Click).is_empty());
    }

    #[test]
    fn test_activation_keys() {
        let strip = strip();
        for key in [" ", "Enter", "Return"] {
            assert_eq!(fire(&strip, "schedules", Trigger::key(key)), ["schedules"], "key {key:?}");
        }
        for key in ["Tab", "a", "ArrowRight", "Escape", "Spacebar"] {
            assert!(fire(&strip, "schedules", Trigger::key(key)).is_empty(), "key {key:?}");
        }
    }

    #[test]
    fn test_count_badge_visibility() {
        assert_eq!(TabDescriptor::new("a", "A").visible_count(), None);
        assert_eq!(TabDescriptor::new("a", "A").count(0).visible_count(), None);
        assert_eq!(TabDescriptor::new("a", "A").count(7).visible_count(), Some(7));
    }

    #[test]
    fn test_tab_index() {
        let states = strip().states(None);
        assert_eq!(states[0].tab_index, 0);
        assert_eq!(states[3].tab_index, -1);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = TabStrip::new(vec![TabDescriptor::new("a", "A"), TabDescriptor::new("a", "Again")])
            .unwrap_err();
        assert_eq!(err, TabsError::DuplicateId { id: "a".to_string() });
    }

    #[test]
    fn test_empty_id_is_accepted() {
        let strip = TabStrip::new(vec![TabDescriptor::new("", "Home"), TabDescriptor::new("b", "B")])
            .unwrap();
        assert_eq!(fire(&strip, "", Trigger::Click), [""]);
        assert!(strip.states(Some(""))[0].selected);
        assert!(!strip.states(Some(""))[1].selected);
    }

    #[test]
    fn test_prevents_default_only_for_activating_keys() {
        assert!(Trigger::key(" ").prevents_default());
        assert!(Trigger::key("Enter").prevents_default());
        assert!(!Trigger::key("Tab").prevents_default());
        assert!(!Trigger::key("ArrowLeft").prevents_default());
        assert!(!Trigger::Click.prevents_default());
    }

    #[test]
    fn test_empty_strip_is_valid() {
        let strip = TabStrip::new(Vec::new()).unwrap();
        assert!(strip.tabs().is_empty());
        assert!(strip.states(Some("a")).is_empty());
    }
}
