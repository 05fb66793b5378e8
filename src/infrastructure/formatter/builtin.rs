//! Builtin formatter
//!
//! Prints re-export statements (`export { a as b } from './x';`) the way
//! prettier does for the options in [`StyleConfig`]. Input that is not a
//! sequence of such statements is a syntax error.

use std::path::Path;

use async_trait::async_trait;
use unicode_width::UnicodeWidthStr;

use crate::config::{StyleConfig, TrailingComma};
use crate::domain::ports::{FormatError, ModuleFormatter};

/// In-process formatter for barrel modules
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFormatter;

impl BuiltinFormatter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ModuleFormatter for BuiltinFormatter {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn format(
        &self,
        source: &str,
        _path: &Path,
        style: &StyleConfig,
    ) -> Result<String, FormatError> {
        let formatted = format_module(source, style)?;
        // Formatting is a scheduling point for sibling pipelines
        tokio::task::yield_now().await;
        Ok(formatted)
    }
}

/// Parse `source` and print it with `style`.
///
/// Whitespace-only input formats to the empty string.
pub fn format_module(source: &str, style: &StyleConfig) -> Result<String, FormatError> {
    let statements = Parser::new(source).module()?;
    let eol = style.end_of_line.as_str();

    let mut out = String::new();
    for stmt in &statements {
        if stmt.blank_line_before {
            out.push_str(eol);
        }
        print_statement(&mut out, stmt, style, eol);
        out.push_str(eol);
    }
    Ok(out)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Specifier {
    local: String,
    exported: Option<String>,
}

impl Specifier {
    fn render(&self) -> String {
        match &self.exported {
            Some(exported) => format!("{} as {}", self.local, exported),
            None => self.local.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ExportStatement {
    specifiers: Vec<Specifier>,
    /// Raw module specifier, escapes intact, without quotes
    source: Option<String>,
    blank_line_before: bool,
}

fn print_statement(out: &mut String, stmt: &ExportStatement, style: &StyleConfig, eol: &str) {
    let semi = if style.semi { ";" } else { "" };
    let from = stmt
        .source
        .as_deref()
        .map(|raw| format!(" from {}", quote_string(raw, style.quote())))
        .unwrap_or_default();

    if stmt.specifiers.is_empty() {
        out.push_str(&format!("export {{}}{from}{semi}"));
        return;
    }

    let specifiers: Vec<String> = stmt.specifiers.iter().map(Specifier::render).collect();
    let pad = if style.bracket_spacing { " " } else { "" };
    let inline = format!(
        "export {{{pad}{}{pad}}}{from}{semi}",
        specifiers.join(", ")
    );

    // A single specifier never breaks, matching prettier
    if specifiers.len() == 1 || inline.width() <= style.print_width {
        out.push_str(&inline);
        return;
    }

    let indent = style.indent();
    out.push_str("export {");
    out.push_str(eol);
    let last = specifiers.len() - 1;
    for (i, spec) in specifiers.iter().enumerate() {
        out.push_str(&indent);
        out.push_str(spec);
        if i < last || style.trailing_comma != TrailingComma::None {
            out.push(',');
        }
        out.push_str(eol);
    }
    out.push('}');
    out.push_str(&from);
    out.push_str(semi);
}

/// Re-quote a raw string body with the preferred quote, unless the other
/// quote needs fewer escapes.
fn quote_string(raw: &str, preferred: char) -> String {
    let alternate = if preferred == '"' { '\'' } else { '"' };
    let preferred_count = raw.matches(preferred).count();
    let alternate_count = raw.matches(alternate).count();
    let quote = if preferred_count > alternate_count {
        alternate
    } else {
        preferred
    };

    let mut out = String::with_capacity(raw.len() + 2);
    out.push(quote);
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(q) if q == '"' || q == '\'' => {
                    if q == quote {
                        out.push('\\');
                    }
                    out.push(q);
                }
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            },
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Parser {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn module(mut self) -> Result<Vec<ExportStatement>, FormatError> {
        let mut statements = Vec::new();
        let mut prev_end_line: Option<usize> = None;

        loop {
            self.skip_whitespace();
            if self.peek().is_none() {
                break;
            }
            let blank_line_before = prev_end_line.is_some_and(|end| self.line > end + 1);
            let mut stmt = self.statement()?;
            stmt.blank_line_before = blank_line_before;
            prev_end_line = Some(self.line);
            statements.push(stmt);
        }

        Ok(statements)
    }

    fn statement(&mut self) -> Result<ExportStatement, FormatError> {
        if !self.eat_keyword("export") {
            return Err(self.error("expected 'export'"));
        }
        self.skip_whitespace();
        self.expect('{')?;

        let mut specifiers = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some('}') {
                self.bump();
                break;
            }

            let local = self.identifier()?;
            self.skip_whitespace();
            let exported = if self.eat_keyword("as") {
                self.skip_whitespace();
                Some(self.identifier()?)
            } else {
                None
            };
            specifiers.push(Specifier { local, exported });

            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {
                    self.bump();
                    break;
                }
                _ => return Err(self.error("expected ',' or '}'")),
            }
        }

        let checkpoint = (self.pos, self.line);
        self.skip_whitespace();
        let source = if self.eat_keyword("from") {
            self.skip_whitespace();
            Some(self.string_literal()?)
        } else {
            (self.pos, self.line) = checkpoint;
            None
        };

        self.skip_inline_whitespace();
        if self.peek() == Some(';') {
            self.bump();
        }

        Ok(ExportStatement {
            specifiers,
            source,
            blank_line_before: false,
        })
    }

    fn identifier(&mut self) -> Result<String, FormatError> {
        let start = self.pos;
        match self.peek() {
            Some(c) if c == '$' || c == '_' || c.is_alphabetic() => {
                self.bump();
            }
            _ => return Err(self.error("expected identifier")),
        }
        while let Some(c) = self.peek() {
            if c == '$' || c == '_' || c.is_alphanumeric() {
                self.bump();
            } else {
                break;
            }
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    /// Consume `keyword` if the next identifier is exactly it
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let checkpoint = (self.pos, self.line);
        match self.identifier() {
            Ok(word) if word == keyword => true,
            _ => {
                (self.pos, self.line) = checkpoint;
                false
            }
        }
    }

    fn string_literal(&mut self) -> Result<String, FormatError> {
        let quote = match self.peek() {
            Some(q @ ('\'' | '"')) => q,
            _ => return Err(self.error("expected string literal")),
        };
        self.bump();

        let mut raw = String::new();
        loop {
            match self.bump() {
                Some('\\') => {
                    raw.push('\\');
                    match self.bump() {
                        Some('\n') | None => return Err(self.error("unterminated string literal")),
                        Some(c) => raw.push(c),
                    }
                }
                Some(c) if c == quote => return Ok(raw),
                Some('\n') | Some('\r') | None => {
                    return Err(self.error("unterminated string literal"))
                }
                Some(c) => raw.push(c),
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), FormatError> {
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(&format!("expected '{expected}'")))
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn skip_inline_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' || c == '\r' || !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        // `\r\n` counts once, on the `\n`
        if c == '\n' || (c == '\r' && self.peek() != Some('\n')) {
            self.line += 1;
        }
        Some(c)
    }

    fn error(&self, message: &str) -> FormatError {
        let found = match self.peek() {
            Some(c) => format!("found '{}'", c.escape_default()),
            None => "found end of input".to_string(),
        };
        FormatError::Syntax {
            line: self.line,
            message: format!("{message}, {found}"),
        }
    }
}
