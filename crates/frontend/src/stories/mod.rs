//! Visual catalog entries. Each story renders one component in its
//! interesting variants.

mod tabs_story;
mod tag_story;

use leptos::prelude::AnyView;

#[derive(Clone, Copy)]
pub struct Story {
    pub id: &'static str,
    pub title: &'static str,
    pub render: fn() -> AnyView,
}

pub fn stories() -> Vec<Story> {
    vec![
        Story {
            id: "tag",
            title: "Tag",
            render: tag_story::basic,
        },
        Story {
            id: "tabs",
            title: "Tabs",
            render: tabs_story::basic,
        },
    ]
}

pub fn find_story(id: &str) -> Option<Story> {
    stories().into_iter().find(|story| story.id == id)
}
