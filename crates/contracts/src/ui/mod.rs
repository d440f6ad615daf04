//! Value types and style computation for the tab strip, count and tag
//! components. Nothing here touches the DOM, so it is tested natively.

pub mod intent;
pub mod styles;
pub mod tabs;
pub mod tokens;

pub use intent::{Intent, IntentPalette};
pub use tabs::{TabDescriptor, TabSize, TabState, TabStrip, TabsError, Trigger};
