//! Outreach templating
//!
//! Message bodies are plain templates with `[Name]` placeholder
//! substitution; delivery itself is the caller's concern.

/// Placeholder replaced with the creator's display name.
pub const NAME_PLACEHOLDER: &str = "[Name]";

/// Render an outreach template for a creator.
#[must_use]
pub fn render_template(template: &str, name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, name)
}
