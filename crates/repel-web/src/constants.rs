// Page-side presentation constants.

pub const DEFAULT_LABEL: &str = "NO";
pub const BASE_CLASS: &str = "repel";

// Keep the fleeing control above page content
pub const Z_INDEX: &str = "1000";
