use contracts::ui::Intent;
use leptos::prelude::*;
use thaw::{Flex, FlexAlign, FlexGap};

use crate::config::CatalogConfig;
use crate::shared::components::ui::Tag;

/// Every intent with icon-only, left icon, right icon and text-only tags.
/// `?intent=` narrows it to one row.
pub fn basic() -> AnyView {
    let only = use_context::<CatalogConfig>().and_then(|config| config.intent);
    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {Intent::ALL
                .into_iter()
                .filter(|intent| only.map_or(true, |only| only == *intent))
                .map(|intent| {
                    view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::Center>
                            <Tag intent=intent icon="info" />
                            <Tag intent=intent icon="alternate_email">
                                "Lorem"
                            </Tag>
                            <Tag intent=intent right_icon="toggle_off">
                                "Lorem"
                            </Tag>
                            <Tag intent=intent>"Lorem"</Tag>
                        </Flex>
                    }
                })
                .collect_view()}
        </Flex>
    }
    .into_any()
}
