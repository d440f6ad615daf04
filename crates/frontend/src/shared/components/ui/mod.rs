pub mod tabs;
pub mod tag;

pub use tabs::{Count, Tab, TabItem, Tabs};
pub use tag::Tag;
