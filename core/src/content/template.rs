//! Handlebars expansion of page templates

use super::parser::FENCE;
use crate::error::Result;
use handlebars::Handlebars;
use regex::{Captures, Regex};
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("Invalid regex pattern")
    })
}

/// Expands `{{variable}}` placeholders in page templates.
///
/// Output is markdown, so HTML escaping is disabled. Unknown variables
/// expand to an empty string. Inside fenced code only `{{name}}` of a known
/// variable is replaced and everything else is kept, so samples containing
/// `{{` survive. A block helper cannot span a fence.
pub struct TemplateEngine {
    registry: Handlebars<'static>,
    variables: BTreeMap<String, String>,
}

impl TemplateEngine {
    pub fn new(variables: BTreeMap<String, String>) -> Self {
        let mut registry = Handlebars::new();
        registry.register_escape_fn(handlebars::no_escape);
        Self {
            registry,
            variables,
        }
    }

    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }

    /// Expand a template string
    pub fn expand(&self, template: &str) -> Result<String> {
        let mut out = String::with_capacity(template.len());
        let mut prose = String::new();
        let mut in_fence = false;

        for line in template.split_inclusive('\n') {
            let trimmed = line.trim();
            if in_fence {
                out.push_str(&self.substitute(line));
                in_fence = trimmed != FENCE;
            } else if trimmed.starts_with(FENCE) {
                out.push_str(&self.render(&prose)?);
                prose.clear();
                out.push_str(line);
                in_fence = true;
            } else {
                prose.push_str(line);
            }
        }

        out.push_str(&self.render(&prose)?);
        Ok(out)
    }

    fn substitute(&self, line: &str) -> String {
        placeholder_regex()
            .replace_all(line, |captures: &Captures| match self.variables.get(&captures[1]) {
                Some(value) => value.clone(),
                None => captures[0].to_string(),
            })
            .into_owned()
    }

    fn render(&self, text: &str) -> Result<String> {
        if text.is_empty() {
            return Ok(String::new());
        }
        Ok(self.registry.render_template(text, &self.variables)?)
    }
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("variables", &self.variables)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TemplateEngine {
        let mut vars = BTreeMap::new();
        vars.insert("product".to_string(), "Suraksha".to_string());
        vars.insert("repository_url".to_string(), "https://example.com/repo".to_string());
        TemplateEngine::new(vars)
    }

    #[test]
    fn test_expand_variables() {
        let out = engine()
            .expand("# Welcome to {{product}}!\n[repo]({{repository_url}})")
            .unwrap();
        assert_eq!(out, "# Welcome to Suraksha!\n[repo](https://example.com/repo)");
    }

    #[test]
    fn test_no_html_escaping() {
        let mut vars = BTreeMap::new();
        vars.insert("snippet".to_string(), "a < b && \"c\"".to_string());
        let out = TemplateEngine::new(vars).expand("{{snippet}}").unwrap();
        assert_eq!(out, "a < b && \"c\"");
    }

    #[test]
    fn test_unknown_variable_is_empty() {
        assert_eq!(engine().expand("[{{missing}}]").unwrap(), "[]");
    }

    #[test]
    fn test_single_braces_untouched() {
        let out = engine().expand("f\"class: {name}\"").unwrap();
        assert_eq!(out, "f\"class: {name}\"");
    }

    #[test]
    fn test_fenced_code_keeps_braces() {
        let text = "By {{product}}:\n```jsx\n<div style={{ color: 'red' }} />\n```\nSee {{repository_url}}";
        assert_eq!(
            engine().expand(text).unwrap(),
            "By Suraksha:\n```jsx\n<div style={{ color: 'red' }} />\n```\nSee https://example.com/repo"
        );
    }

    #[test]
    fn test_known_variables_substituted_in_fences() {
        let text = "```bash\ngit clone {{repository_url}}\ncd {{ product }}\necho {{unknown}}\n```";
        assert_eq!(
            engine().expand(text).unwrap(),
            "```bash\ngit clone https://example.com/repo\ncd Suraksha\necho {{unknown}}\n```"
        );
    }

    #[test]
    fn test_broken_template_is_error() {
        assert!(engine().expand("{{#if}}").is_err());
    }
}
