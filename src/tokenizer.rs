//! Token extraction from plain-text image sources

/// A single whitespace-delimited token and the 1-based line it appeared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub line: usize,
}

/// Iterator over the tokens of a plain-text image source.
///
/// Tokens are separated by any whitespace. A `#` begins a comment that runs
/// to the end of the line; comments never produce tokens.
///
/// # Examples
///
/// ```
/// use ppmkit::tokenizer::Tokens;
///
/// let texts: Vec<&str> = Tokens::new("P3 # plain\n2 1\n255").map(|t| t.text).collect();
/// assert_eq!(texts, vec!["P3", "2", "1", "255"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
    line: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { rest: source, line: 1 }
    }

    fn skip_blank(&mut self) {
        loop {
            let trimmed = self.rest.trim_start_matches(|c: char| c.is_whitespace() && c != '\n');
            if let Some(after) = trimmed.strip_prefix('\n') {
                self.line += 1;
                self.rest = after;
            } else if trimmed.starts_with('#') {
                let end = trimmed.find('\n').unwrap_or(trimmed.len());
                self.rest = &trimmed[end..];
            } else {
                self.rest = trimmed;
                return;
            }
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.skip_blank();
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .find(|c: char| c.is_whitespace() || c == '#')
            .unwrap_or(self.rest.len());
        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Token { text, line: self.line })
    }
}
