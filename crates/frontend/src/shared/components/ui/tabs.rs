//! Tab strip components.
//!
//! `Tabs` takes its items as `Tab` slots, so nothing but a tab can be placed
//! in a strip. Ids are checked when the strip is built; a bad composition
//! panics before anything is rendered.

use contracts::ui::styles::{count_style, tab_item_class, tab_item_style, tab_strip_style};
use contracts::ui::{TabDescriptor, TabSize, TabState, TabStrip, Trigger};
use leptos::prelude::*;

use crate::shared::icons::Icon;

/// A single tab inside `Tabs`.
#[slot]
pub struct Tab {
    /// Unique among siblings; passed to `on_change`
    #[prop(into)]
    id: String,
    #[prop(into)]
    title: String,
    /// Icon name, rendered after the title
    #[prop(optional, into)]
    icon: Option<String>,
    /// Shown as a badge when positive
    #[prop(optional)]
    count: Option<u32>,
    #[prop(optional)]
    disabled: bool,
    /// Forces the selected look regardless of `selected_tab_id`
    #[prop(optional)]
    selected: bool,
}

impl From<Tab> for TabDescriptor {
    fn from(tab: Tab) -> Self {
        TabDescriptor {
            id: tab.id,
            title: tab.title,
            icon: tab.icon,
            count: tab.count,
            disabled: tab.disabled,
            selected: tab.selected,
        }
    }
}

impl From<TabDescriptor> for Tab {
    fn from(descriptor: TabDescriptor) -> Self {
        Tab {
            id: descriptor.id,
            title: descriptor.title,
            icon: descriptor.icon,
            count: descriptor.count,
            disabled: descriptor.disabled,
            selected: descriptor.selected,
        }
    }
}

/// Validates the slots. A malformed strip is a programmer error, so this
/// panics before anything is rendered.
fn build_strip(tab: Vec<Tab>) -> TabStrip {
    match TabStrip::new(tab.into_iter().map(TabDescriptor::from)) {
        Ok(strip) => strip,
        Err(err) => {
            log::error!("Tabs: {err}");
            panic!("Tabs must render well-formed Tab items: {err}");
        }
    }
}

/// The change handler a tab should be wired to. Disabled tabs get none.
fn handler_for<H>(descriptor: &TabDescriptor, on_change: Option<H>) -> Option<H> {
    on_change.filter(|_| descriptor.is_interactive())
}

/// Horizontal tab list. Selection is owned by the caller: the strip only
/// reports the requested id through `on_change`.
#[component]
pub fn Tabs(
    /// Id of the currently selected tab
    #[prop(optional, into)]
    selected_tab_id: MaybeProp<String>,
    /// Called with the id of a clicked (or space/enter) non-disabled tab
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Compact variant
    #[prop(optional)]
    small: bool,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(default = vec![])] tab: Vec<Tab>,
) -> impl IntoView {
    let strip = build_strip(tab);
    let size = if small { TabSize::Small } else { TabSize::Regular };
    let descriptors = strip.tabs().to_vec();
    let strip = StoredValue::new(strip);

    let additional_class = move || class.get().unwrap_or_default();

    let items = descriptors
        .into_iter()
        .map(|descriptor| {
            let id = descriptor.id.clone();
            let is_selected = descriptor.clone();
            let selected = Signal::derive(move || {
                is_selected.is_selected(selected_tab_id.get().as_deref())
            });

            let on_activate = handler_for(&descriptor, on_change).map(|on_change| {
                Callback::new(move |trigger: Trigger| {
                    strip.with_value(|strip| {
                        strip.activate(&id, &trigger, |id| {
                            log::debug!("Tabs: {trigger:?} activated tab '{id}'");
                            on_change.run(id.to_string());
                        });
                    });
                })
            });

            view! {
                <TabItem descriptor=descriptor selected=selected size=size on_activate=on_activate />
            }
        })
        .collect_view();

    view! {
        <div
            role="tablist"
            class=move || format!("tabs {}", additional_class())
            style=tab_strip_style(size)
        >
            {items}
        </div>
    }
}

/// One rendered tab. Selected and disabled only change its look.
#[component]
pub fn TabItem(
    descriptor: TabDescriptor,
    #[prop(into)] selected: Signal<bool>,
    #[prop(optional)] size: TabSize,
    #[prop(optional_no_strip)] on_activate: Option<Callback<Trigger>>,
) -> impl IntoView {
    let base = descriptor.state(None);
    let disabled = base.disabled;
    let tab_index = base.tab_index;
    let count = base.count;
    let state = Memo::new(move |_| TabState {
        selected: selected.get(),
        ..base.clone()
    });

    let TabDescriptor { id, title, icon, .. } = descriptor;

    view! {
        <div
            role="tab"
            data-tab-id=id
            tabindex=tab_index.to_string()
            aria-disabled=disabled.to_string()
            aria-expanded=move || state.with(|s| s.selected.to_string())
            aria-selected=move || state.with(|s| s.selected.to_string())
            class=move || state.with(tab_item_class)
            style=move || state.with(|s| tab_item_style(s, size))
            on:click=move |_| {
                if let Some(handler) = on_activate {
                    handler.run(Trigger::Click);
                }
            }
            on:keydown=move |ev| {
                if let Some(handler) = on_activate {
                    let trigger = Trigger::Key(ev.key());
                    if trigger.prevents_default() {
                        ev.prevent_default();
                    }
                    handler.run(trigger);
                }
            }
        >
            {title}
            {icon.map(|name| view! { <Icon name=name /> })}
            {count.map(|value| view! { <Count value=value /> })}
        </div>
    }
}

/// Numeric badge shown next to a tab title
#[component]
pub fn Count(value: u32) -> impl IntoView {
    view! {
        <span class="count" style=count_style()>
            {value.to_string()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(tabs: Vec<TabDescriptor>) -> Vec<Tab> {
        tabs.into_iter().map(Tab::from).collect()
    }

    #[test]
    fn test_build_strip_keeps_slot_order() {
        let strip = build_strip(slots(vec![
            TabDescriptor::new("overview", "Overview"),
            TabDescriptor::new("runs", "Runs").count(3),
            TabDescriptor::new("sensors", "Sensors").disabled(true),
        ]));
        let ids: Vec<_> = strip.tabs().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["overview", "runs", "sensors"]);
        assert_eq!(strip.tabs()[1].count, Some(3));
        assert!(strip.tabs()[2].disabled);
    }

    #[test]
    fn test_build_strip_accepts_empty_id() {
        let strip = build_strip(slots(vec![
            TabDescriptor::new("", "Home"),
            TabDescriptor::new("b", "B"),
        ]));
        assert_eq!(strip.tabs()[0].id, "");
    }

    #[test]
    #[should_panic(expected = "Tabs must render well-formed Tab items")]
    fn test_build_strip_panics_on_duplicate_ids() {
        build_strip(slots(vec![
            TabDescriptor::new("runs", "Runs"),
            TabDescriptor::new("runs", "Runs again"),
        ]));
    }

    #[test]
    fn test_disabled_tab_gets_no_handler() {
        let enabled = TabDescriptor::new("a", "A");
        let disabled = TabDescriptor::new("b", "B").disabled(true);
        assert_eq!(handler_for(&enabled, Some("on_change")), Some("on_change"));
        assert_eq!(handler_for(&disabled, Some("on_change")), None);
        assert_eq!(handler_for::<&str>(&enabled, None), None);
    }
}
