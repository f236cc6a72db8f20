//! # Templates
//!
//! Parsed template text: literal runs and `@` tokens.
//!
//! ## Syntax
//!
//! - `@name`: name is `[A-Za-z_][A-Za-z0-9_]*`, longest match
//! - `@{name}`: same, for names directly followed by identifier characters
//! - `@@`: a literal `@`
//!
//! Any other use of `@` is an invalid placeholder.

use crate::cursor::Cursor;
use crate::error::{TemplateError, TemplateResult};
use crate::value::Value;
use config::constants::TOKEN_PREFIX;

#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Text(String),
    Token(String),
}

/// A parsed template.
///
/// # Example
///
/// ```rust
/// use case_template::{Template, Value};
///
/// let template = Template::parse("file \"@{name}.obj\"; // @@").unwrap();
/// assert_eq!(template.names(), vec!["name"]);
///
/// let text = template.render(|_| Ok(Value::from("cylinder0"))).unwrap();
/// assert_eq!(text, "file \"cylinder0.obj\"; // @");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pieces: Vec<Piece>,
}

impl Template {
    /// Parses template text.
    pub fn parse(source: &str) -> TemplateResult<Self> {
        let mut pieces = Vec::new();
        let mut text = String::new();
        let mut cursor = Cursor::new(source);

        while let Some(c) = cursor.advance() {
            if c != TOKEN_PREFIX {
                text.push(c);
                continue;
            }

            let start = cursor.position();
            let invalid = || TemplateError::InvalidPlaceholder {
                line: start.line,
                column: start.column - 1,
            };

            if cursor.eat(TOKEN_PREFIX) {
                text.push(TOKEN_PREFIX);
                continue;
            }

            let braced = cursor.eat('{');
            let name = identifier(&mut cursor).ok_or_else(invalid)?;
            if braced && !cursor.eat('}') {
                return Err(invalid());
            }

            if !text.is_empty() {
                pieces.push(Piece::Text(std::mem::take(&mut text)));
            }
            pieces.push(Piece::Token(name.to_string()));
        }

        if !text.is_empty() {
            pieces.push(Piece::Text(text));
        }
        Ok(Self { pieces })
    }

    /// Referenced names, in order of first appearance.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for piece in &self.pieces {
            if let Piece::Token(name) = piece {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitutes every token with the value `lookup` returns for it.
    pub fn render<F>(&self, mut lookup: F) -> TemplateResult<String>
    where
        F: FnMut(&str) -> TemplateResult<Value>,
    {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Token(name) => out.push_str(&lookup(name)?.to_string()),
            }
        }
        Ok(out)
    }
}

fn identifier<'a>(cursor: &mut Cursor<'a>) -> Option<&'a str> {
    if !cursor
        .peek()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
    {
        return None;
    }
    Some(cursor.eat_while(|c| c == '_' || c.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_with(source: &str, pairs: &[(&str, Value)]) -> TemplateResult<String> {
        Template::parse(source)?.render(|name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.clone())
                .ok_or_else(|| TemplateError::missing_key(name))
        })
    }

    #[test]
    fn test_plain_and_braced_tokens() {
        let text = render_with(
            "a is @a, and b is @{b}x, and also a is @a",
            &[("a", Value::from(2)), ("b", Value::from(3))],
        )
        .unwrap();
        assert_eq!(text, "a is 2, and b is 3x, and also a is 2");
    }

    #[test]
    fn test_name_stops_at_dot() {
        let text = render_with("\"@name.obj\"", &[("name", Value::from("cylinder1"))]).unwrap();
        assert_eq!(text, "\"cylinder1.obj\"");
    }

    #[test]
    fn test_escape() {
        assert_eq!(render_with("user@@host", &[]).unwrap(), "user@host");
    }

    #[test]
    fn test_missing_key() {
        let err = render_with("@nope", &[]).unwrap_err();
        assert_eq!(err, TemplateError::missing_key("nope"));
    }

    #[test]
    fn test_invalid_placeholders_report_position() {
        let err = Template::parse("ok\n  @ 1").unwrap_err();
        assert_eq!(err, TemplateError::InvalidPlaceholder { line: 2, column: 3 });

        assert!(Template::parse("@{name").is_err());
        assert!(Template::parse("@{}").is_err());
        assert!(Template::parse("@9").is_err());
        assert!(Template::parse("trailing @").is_err());
    }

    #[test]
    fn test_names_deduplicated_in_order() {
        let template = Template::parse("@b @a @b @{a}").unwrap();
        assert_eq!(template.names(), vec!["b", "a"]);
    }
}
