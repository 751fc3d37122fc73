use crate::error::Result;
use regex::Regex;
use snipscope_api::DirectiveKind;

/// Compiled directive matcher for a single fragment name.
///
/// Matches `{% keyword "name" %}` style tags, with an optional whitespace
/// control dash and either quote style, case-insensitively and anywhere
/// in the text. With `liquid_blocks`, a keyword at the start of a line
/// also counts, which is how tags are written inside `{% liquid %}`.
#[derive(Debug, Clone)]
pub struct DirectivePattern {
    regex: Regex,
}

impl DirectivePattern {
    /// Returns `None` when there is nothing to match: an empty name never
    /// acts as a wildcard.
    pub fn new(
        name: &str,
        keywords: &[DirectiveKind],
        liquid_blocks: bool,
    ) -> Result<Option<Self>> {
        if name.is_empty() || keywords.is_empty() {
            return Ok(None);
        }

        let keywords = keywords
            .iter()
            .map(|k| k.keyword())
            .collect::<Vec<_>>()
            .join("|");
        let name = regex::escape(name);
        let opener = if liquid_blocks {
            r"(?m:\{%-?|^)"
        } else {
            r"\{%-?"
        };
        let source = format!(r#"(?i){opener}\s*({keywords})\s+(?:"{name}"|'{name}')"#);

        Ok(Some(Self {
            regex: Regex::new(&source)?,
        }))
    }

    #[cfg(test)]
    fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Keyword of the first directive referencing the fragment.
    pub fn find(&self, text: &str) -> Option<DirectiveKind> {
        let captures = self.regex.captures(text)?;
        DirectiveKind::from_keyword(captures.get(1)?.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permissive(name: &str) -> DirectivePattern {
        DirectivePattern::new(name, &DirectiveKind::ALL, false)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_quote_styles_and_case() {
        let pattern = permissive("header");
        assert!(pattern.is_match(r#"{% include "header" %}"#));
        assert!(pattern.is_match("{% include 'header' %}"));
        assert!(pattern.is_match(r#"{%- RENDER "header" %}"#));
        assert!(pattern.is_match(r#"{% render "HEADER", product: product %}"#));
    }

    #[test]
    fn test_name_must_match_whole() {
        let pattern = permissive("header");
        assert!(!pattern.is_match(r#"{% include "header2" %}"#));
        assert!(!pattern.is_match(r#"{% include "site-header" %}"#));
    }

    #[test]
    fn test_quotes_must_pair() {
        let pattern = permissive("header");
        assert!(!pattern.is_match(r#"{% include "header' %}"#));
    }

    #[test]
    fn test_requires_tag_delimiter() {
        let pattern = permissive("header");
        assert!(!pattern.is_match(r#"render "header""#));
        assert!(!pattern.is_match(r#"{{ "header" }}"#));
    }

    #[test]
    fn test_unanchored_multiline() {
        let pattern = permissive("card");
        let text = "<div>\n  <p>intro</p>\n  {% render 'card' %}\n</div>\n";
        assert_eq!(pattern.find(text), Some(DirectiveKind::Render));
    }

    #[test]
    fn test_name_is_literal() {
        let pattern = permissive("a.b");
        assert!(pattern.is_match("{% render 'a.b' %}"));
        assert!(!pattern.is_match("{% render 'axb' %}"));
    }

    #[test]
    fn test_empty_name_matches_nothing() {
        assert!(
            DirectivePattern::new("", &DirectiveKind::ALL, false)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_narrowed_keywords() {
        let pattern = DirectivePattern::new("hero", &[DirectiveKind::Section], false)
            .unwrap()
            .unwrap();
        assert!(pattern.is_match("{% section 'hero' %}"));
        assert!(!pattern.is_match("{% render 'hero' %}"));
    }

    #[test]
    fn test_liquid_block_lines() {
        let text = "{%- liquid\n  assign x = 1\n  render 'card', product: product\n-%}";
        assert!(!permissive("card").is_match(text));

        let pattern = DirectivePattern::new("card", &DirectiveKind::ALL, true)
            .unwrap()
            .unwrap();
        assert_eq!(pattern.find(text), Some(DirectiveKind::Render));
        assert!(pattern.is_match("{% include 'card' %}"));
        assert!(!pattern.is_match("<p>please render 'card' later</p>"));
    }
}
