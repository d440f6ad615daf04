//! Design tokens shared by every component.

/// Colour table. Values are hex strings ready to drop into CSS.
pub struct Colors;

impl Colors {
    pub const GRAY_100: &'static str = "#E9E7E4";
    pub const GRAY_300: &'static str = "#C9C5C0";
    pub const GRAY_700: &'static str = "#5C5955";
    pub const GRAY_900: &'static str = "#231F1B";

    pub const BLUE_50: &'static str = "#F0EFFC";
    pub const BLUE_200: &'static str = "#C6C1F5";
    pub const BLUE_500: &'static str = "#4F43DD";
    pub const BLUE_700: &'static str = "#3128A5";

    pub const GREEN_50: &'static str = "#EAF6F1";
    pub const GREEN_500: &'static str = "#2A9D6B";
    pub const GREEN_700: &'static str = "#1C7049";

    pub const YELLOW_50: &'static str = "#FDF6E5";
    pub const YELLOW_500: &'static str = "#E0A41B";
    pub const YELLOW_700: &'static str = "#9E6E07";

    pub const RED_50: &'static str = "#FDEDEC";
    pub const RED_500: &'static str = "#DE3B32";
    pub const RED_700: &'static str = "#A6221B";
}

/// Font stacks.
pub struct FontFamily;

impl FontFamily {
    pub const DEFAULT: &'static str =
        "Inter, -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif";
    pub const MONOSPACE: &'static str =
        "\"SF Mono\", SFMono-Regular, Menlo, Consolas, \"Liberation Mono\", monospace";
}
