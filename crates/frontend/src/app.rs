use contracts::ui::styles::stylesheet;
use contracts::ui::TabDescriptor;
use leptos::prelude::*;
use thaw::{Flex, FlexGap};

use crate::config::CatalogConfig;
use crate::shared::components::ui::{Tab, Tabs};
use crate::stories::{find_story, stories};

/// Story catalog. The story picker is itself a `Tabs` strip.
#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    let all = stories();
    let initial = match find_story(&config.story) {
        Some(story) => story.id,
        None => {
            log::warn!("Unknown story '{}', showing the first one", config.story);
            all.first().map(|story| story.id).unwrap_or_default()
        }
    };
    let active = RwSignal::new(initial.to_string());
    let small = config.small;
    provide_context(config);

    let picker: Vec<Tab> = all
        .iter()
        .map(|story| TabDescriptor::new(story.id, story.title).into())
        .collect();

    view! {
        <style>{stylesheet()}</style>
        <Flex vertical=true gap=FlexGap::Large class="catalog">
            <Tabs
                selected_tab_id=Signal::derive(move || Some(active.get()))
                on_change=Callback::new(move |id: String| active.set(id))
                small=small
                tab=picker
            />
            <div class="catalog__story">
                {move || find_story(&active.get()).map(|story| (story.render)())}
            </div>
        </Flex>
    }
}
