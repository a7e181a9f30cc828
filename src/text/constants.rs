/// Marker replaced by the next argument in a template.
pub const PLACEHOLDER: &str = "{}";
