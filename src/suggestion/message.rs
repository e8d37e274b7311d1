//! Human-readable review comment bodies for patch suggestions.

use super::builder::PatchSuggestion;

/// Links used when rendering review messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    /// Rule documentation URL with a `{rule}` placeholder for the rule key.
    pub rule_url_template: String,
    /// Where the repair engine documents its repairs.
    pub repair_docs_url: String,
}

impl MessageTemplate {
    /// Documentation URL for `rule_key`.
    pub fn rule_url(&self, rule_key: u32) -> String {
        self.rule_url_template
            .replace("{rule}", &rule_key.to_string())
    }
}

/// Render the review comment body for a suggestion.
///
/// `rule_title` is the rule's human-readable name when the caller has it.
pub fn render_review_message(
    suggestion: &PatchSuggestion,
    template: &MessageTemplate,
    rule_title: Option<&str>,
) -> String {
    let rule_key = suggestion.violation_spec.rule_key;
    let rule_label = match rule_title {
        Some(title) => format!("{}: {}", rule_key, title),
        None => rule_key.to_string(),
    };

    format!(
        "This code change violates rule [{label}]({url}). The following fix is suggested:\n\
         \n\
         {block}\n\
         \n\
         See [the repair documentation]({docs}) for details on the repair.\n\
         \n\
         Violation specifier: {spec}\n",
        label = rule_label,
        url = template.rule_url(rule_key),
        block = suggestion.suggestion,
        docs = template.repair_docs_url,
        spec = suggestion.violation_spec,
    )
}
