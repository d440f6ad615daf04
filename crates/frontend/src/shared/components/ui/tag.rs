use contracts::ui::styles::{tag_class, tag_style};
use contracts::ui::Intent;
use leptos::prelude::*;

use crate::shared::icons::Icon;

/// Small inline label coloured by intent
#[component]
pub fn Tag(
    /// Colour treatment, `Intent::None` by default
    #[prop(optional)]
    intent: Intent,
    /// Icon name shown before the text
    #[prop(optional, into)]
    icon: Option<String>,
    /// Icon name shown after the text
    #[prop(optional, into)]
    right_icon: Option<String>,
    /// Tag text; a tag may be icon-only
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <span class=tag_class(intent) style=tag_style(intent)>
            {icon.map(|name| view! { <Icon name=name /> })}
            {children.map(|children| view! { <span class="tag__label">{children()}</span> })}
            {right_icon.map(|name| view! { <Icon name=name /> })}
        </span>
    }
}
