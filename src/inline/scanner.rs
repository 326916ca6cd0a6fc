//! Tag scanning and attribute extraction
//!
//! Tags are matched structurally with a pattern, not parsed: an occurrence is
//! `<` + tag name + one or more non-`>` characters + `>`, which covers the
//! opening tag only. Each occurrence's attribute span is then searched for
//! `name="value"` or `name='value'` with the same quote on both sides.

use std::ops::Range;

use super::errors::{InlineError, InlineResult};

/// A single opening-tag occurrence found in a content string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch<'a> {
    /// Full matched text, including the leading `<` and trailing `>`
    pub source: &'a str,
    /// Everything between the tag name and the closing `>`
    pub attributes: &'a str,
    /// Byte range of `source` within the scanned content
    pub span: (usize, usize),
}

impl<'a> TagMatch<'a> {
    /// Tag source without the leading `<`, as seen by eligibility conditions
    #[must_use]
    pub fn condition_source(&self) -> &'a str {
        &self.source[1..]
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.span.0..self.span.1
    }
}

/// Compiled matcher for one (tag, attribute) pair
#[derive(Debug, Clone)]
pub struct TagPattern {
    tag: regex::Regex,
    attribute: regex::Regex,
}

impl TagPattern {
    /// Compile the tag and attribute patterns. Both names are matched literally.
    pub fn new(tag: &str, attribute: &str) -> InlineResult<Self> {
        let tag_pattern = format!("<{}([^>]+)>", regex::escape(tag));
        let tag_re = regex::Regex::new(&tag_pattern).map_err(|e| InlineError::InvalidPattern {
            pattern: tag_pattern.clone(),
            message: e.to_string(),
        })?;

        // One alternative per quote style so the closing quote matches the opening one
        let attr_pattern = format!(
            r#"({})=(?:"([^'"]+)"|'([^'"]+)')"#,
            regex::escape(attribute)
        );
        let attr_re = regex::Regex::new(&attr_pattern).map_err(|e| InlineError::InvalidPattern {
            pattern: attr_pattern.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            tag: tag_re,
            attribute: attr_re,
        })
    }

    /// Every occurrence of the tag in `content`, in document order
    pub fn occurrences<'a>(&'a self, content: &'a str) -> impl Iterator<Item = TagMatch<'a>> + 'a {
        self.tag.captures_iter(content).filter_map(|caps| {
            let whole = caps.get(0)?;
            let attrs = caps.get(1)?;
            Some(TagMatch {
                source: whole.as_str(),
                attributes: attrs.as_str(),
                span: (whole.start(), whole.end()),
            })
        })
    }

    /// Quoted value of the attribute within an attribute span, if present
    #[must_use]
    pub fn attribute_value<'a>(&self, attributes: &'a str) -> Option<&'a str> {
        let caps = self.attribute.captures(attributes)?;
        caps.get(2).or_else(|| caps.get(3)).map(|m| m.as_str())
    }

    /// Rewrite every eligible occurrence of the tag in `content`.
    ///
    /// Occurrences failing `condition`, or lacking the attribute, pass through
    /// unchanged. The first replacer error aborts the whole rewrite.
    pub fn replace<C, R>(&self, content: &str, condition: C, mut replacer: R) -> InlineResult<String>
    where
        C: Fn(&str) -> bool,
        R: FnMut(&str) -> InlineResult<String>,
    {
        let mut output = String::with_capacity(content.len());
        let mut last = 0;

        for occurrence in self.occurrences(content) {
            if !condition(occurrence.condition_source()) {
                continue;
            }

            let Some(value) = self.attribute_value(occurrence.attributes) else {
                continue;
            };

            let replacement = replacer(value)?;
            let range = occurrence.range();
            output.push_str(&content[last..range.start]);
            output.push_str(&replacement);
            last = range.end;
        }

        output.push_str(&content[last..]);
        Ok(output)
    }
}

/// Scan `content` for `tag` occurrences and substitute eligible ones in a single pass.
pub fn replace_tag<C, R>(
    content: &str,
    tag: &str,
    attribute: &str,
    condition: C,
    replacer: R,
) -> InlineResult<String>
where
    C: Fn(&str) -> bool,
    R: FnMut(&str) -> InlineResult<String>,
{
    TagPattern::new(tag, attribute)?.replace(content, condition, replacer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always(_: &str) -> bool {
        true
    }

    #[test]
    fn test_finds_each_occurrence() {
        let pattern = TagPattern::new("link", "href").unwrap();
        let html = r#"<link href="a.css"><p>x</p><link href='b.css' rel="x">"#;
        let found: Vec<_> = pattern.occurrences(html).collect();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].source, r#"<link href="a.css">"#);
        assert_eq!(found[0].attributes, r#" href="a.css""#);
        assert_eq!(found[1].condition_source(), r#"link href='b.css' rel="x">"#);
        assert_eq!(&html[found[1].range()], found[1].source);
    }

    #[test]
    fn test_attribute_accepts_both_quote_styles() {
        let pattern = TagPattern::new("script", "src").unwrap();
        assert_eq!(pattern.attribute_value(r#" src="a.js""#), Some("a.js"));
        assert_eq!(pattern.attribute_value(" src='a.js'"), Some("a.js"));
    }

    #[test]
    fn test_attribute_rejects_mismatched_quotes() {
        let pattern = TagPattern::new("script", "src").unwrap();
        assert_eq!(pattern.attribute_value(r#" src="a.js'"#), None);
        assert_eq!(pattern.attribute_value(r#" src='a.js""#), None);
    }

    #[test]
    fn test_attribute_later_occurrence_after_mismatch() {
        let pattern = TagPattern::new("script", "src").unwrap();
        assert_eq!(
            pattern.attribute_value(r#" src="a.js' data-src='b.js'"#),
            Some("b.js")
        );
    }

    #[test]
    fn test_attribute_missing_or_empty() {
        let pattern = TagPattern::new("script", "src").unwrap();
        assert_eq!(pattern.attribute_value(" data-inline"), None);
        assert_eq!(pattern.attribute_value(r#" src="""#), None);
    }

    #[test]
    fn test_huge_unterminated_value_passes_through() {
        let html = format!(r#"<script data-inline src="{}' >"#, "x".repeat(1_200_000));
        let out = replace_tag(&html, "script", "src", always, |_| Ok("X".into())).unwrap();
        assert_eq!(out, html);
    }

    #[test]
    fn test_tag_without_attribute_passes_through() {
        let html = "<script data-inline>var a;</script>";
        let out = replace_tag(html, "script", "src", always, |_| Ok("X".into())).unwrap();
        assert_eq!(out, html);
    }

    #[test]
    fn test_condition_failure_passes_through() {
        let html = r#"<script src="a.js"></script>"#;
        let out = replace_tag(html, "script", "src", |_| false, |_| Ok("X".into())).unwrap();
        assert_eq!(out, html);
    }

    #[test]
    fn test_replaces_only_opening_tag() {
        let html = r#"<p><script src="a.js"></script></p>"#;
        let out = replace_tag(html, "script", "src", always, |p| Ok(format!("[{p}]"))).unwrap();
        assert_eq!(out, "<p>[a.js]</script></p>");
    }

    #[test]
    fn test_tag_name_is_matched_literally() {
        let html = r#"<a.b src="x">"#;
        assert_eq!(
            replace_tag(html, "a.b", "src", always, |_| Ok("Y".into())).unwrap(),
            "Y"
        );
        let other = r#"<axb src="x">"#;
        assert_eq!(
            replace_tag(other, "a.b", "src", always, |_| Ok("Y".into())).unwrap(),
            other
        );
    }

    #[test]
    fn test_replacer_error_aborts() {
        let html = r#"<script src="a.js"><script src="b.js">"#;
        let err = replace_tag(html, "script", "src", always, |p| {
            Err(InlineError::ResolutionFailure { path: p.to_string() })
        })
        .unwrap_err();
        assert_eq!(err.missing_path(), Some("a.js"));
    }

    #[test]
    fn test_multiline_tag() {
        let html = "<link\n  href=\"a.css\"\n  data-inline>";
        let out = replace_tag(html, "link", "href", always, |p| Ok(p.to_uppercase())).unwrap();
        assert_eq!(out, "A.CSS");
    }
}
