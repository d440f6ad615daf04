use leptos::prelude::*;
use thaw::{Flex, FlexGap};

use crate::shared::components::ui::{Tab, Tabs};

pub fn basic() -> AnyView {
    view! {
        <Flex vertical=true gap=FlexGap::Large>
            <h3>"Regular"</h3>
            <TabsShowcase small=false />
            <h3>"Small"</h3>
            <TabsShowcase small=true />
        </Flex>
    }
    .into_any()
}

/// Strip with its own selection state so the story is interactive.
#[component]
fn TabsShowcase(small: bool) -> impl IntoView {
    let selected = RwSignal::new("overview".to_string());
    let last_change = RwSignal::new(None::<String>);

    let on_change = Callback::new(move |id: String| {
        last_change.set(Some(id.clone()));
        selected.set(id);
    });

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Tabs
                selected_tab_id=Signal::derive(move || Some(selected.get()))
                on_change=on_change
                small=small
            >
                <Tab slot id="overview" title="Overview" />
                <Tab slot id="runs" title="Runs" count=42 />
                <Tab slot id="assets" title="Assets" icon="star" count=0 />
                <Tab slot id="schedules" title="Schedules" icon="schedule" />
                <Tab slot id="sensors" title="Sensors" disabled=true />
            </Tabs>
            <code>
                {move || match last_change.get() {
                    Some(id) => format!("on_change({id:?})"),
                    None => "on_change not called yet".to_string(),
                }}
            </code>
        </Flex>
    }
}
