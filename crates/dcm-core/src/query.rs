//! Templated query assembly: literal tag replacement over a stored body.
//!
//! Report queries live as files with `{{date_from}}`-style markers; a run
//! substitutes the window and source names in. Replacement is plain
//! substring substitution so a template stays copy-pasteable into a SQL
//! console.

/// A query template. Tags are literal substrings; the `{{...}}` braces are
/// a convention, not syntax.
#[derive(Debug, Clone)]
pub struct QueryTemplate {
    text: String,
}

impl QueryTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Apply each `(tag, value)` pair in order, replacing every occurrence.
    /// Later pairs see earlier substitutions; tags with no pair stay
    /// verbatim.
    pub fn render<T, V>(&self, replacements: &[(T, V)]) -> String
    where
        T: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = self.text.clone();
        for (tag, value) in replacements {
            query = query.replace(tag.as_ref(), value.as_ref());
        }
        query
    }

    /// Distinct `{{...}}` markers in the template, in order of first
    /// appearance. Convenience for tooling; rendering does not use it.
    pub fn tags(&self) -> Vec<&str> {
        let mut found = Vec::new();
        let mut rest = self.text.as_str();
        while let Some(start) = rest.find("{{") {
            let candidate = &rest[start..];
            match candidate.find("}}") {
                Some(end) => {
                    let tag = &candidate[..end + 2];
                    if !found.contains(&tag) {
                        found.push(tag);
                    }
                    rest = &candidate[end + 2..];
                }
                None => break,
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let t = QueryTemplate::new("select * from t where d >= '{{d}}' and d < '{{d}}'");
        let q = t.render(&[("{{d}}", "2024-01-01")]);
        assert_eq!(
            q,
            "select * from t where d >= '2024-01-01' and d < '2024-01-01'"
        );
    }

    #[test]
    fn pairs_apply_in_order() {
        let t = QueryTemplate::new("{{outer}}");
        let q = t.render(&[("{{outer}}", "{{inner}}"), ("{{inner}}", "42")]);
        assert_eq!(q, "42");
    }

    #[test]
    fn unmatched_tags_stay_verbatim() {
        let t = QueryTemplate::new("select {{cols}} from {{table}}");
        let q = t.render(&[("{{cols}}", "a, b")]);
        assert_eq!(q, "select a, b from {{table}}");
    }

    #[test]
    fn tags_lists_markers_once_in_first_appearance_order() {
        let t = QueryTemplate::new("{{b}} {{a}} {{b}} {{c");
        assert_eq!(t.tags(), vec!["{{b}}", "{{a}}"]);
    }
}
