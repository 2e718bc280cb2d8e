//! Low-level markup tokenizer shared by both parse entry points.
//!
//! The tokenizer itself knows one policy knob, `lenient`: in lenient mode
//! it swallows malformed constructs (stray `<`, unquoted attributes,
//! unknown entities) instead of erroring, so the tree builder can recover
//! a best-effort document. Comments, doctypes, and processing
//! instructions are consumed silently in both modes.

/// A single markup token.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    StartTag {
        name: String,
        attributes: Vec<(String, String)>,
        self_closing: bool,
    },
    EndTag {
        name: String,
    },
    Text(String),
}

/// Tokenizer or tree-builder failure.
#[derive(Debug)]
pub(crate) struct ParseError {
    pub(crate) message: String,
}

impl ParseError {
    pub(crate) fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':')
}

/// Decode the body of an entity reference (the part between `&` and `;`).
fn decode_entity(body: &str) -> Option<char> {
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = if let Some(hex) = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok()?
            } else {
                return None;
            };
            char::from_u32(code)
        }
    }
}

pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    lenient: bool,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(input: &'a str, lenient: bool) -> Self {
        Self {
            input,
            pos: 0,
            lenient,
        }
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, pat: &str) -> bool {
        if self.rest().starts_with(pat) {
            self.pos += pat.len();
            true
        } else {
            false
        }
    }

    /// Advance past the next occurrence of `pat`. On a miss the position
    /// moves to the end of input and `false` is returned.
    fn skip_past(&mut self, pat: &str) -> bool {
        match self.rest().find(pat) {
            Some(i) => {
                self.pos += i + pat.len();
                true
            }
            None => {
                self.pos = self.input.len();
                false
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn error(&self, message: &str) -> ParseError {
        ParseError::message(format!("{} at offset {}", message, self.pos))
    }

    /// Next token, or `None` at end of input.
    pub(crate) fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        loop {
            if self.pos >= self.input.len() {
                return Ok(None);
            }
            if self.eat("<!--") {
                if !self.skip_past("-->") && !self.lenient {
                    return Err(self.error("unterminated comment"));
                }
                continue;
            }
            if self.eat("<![CDATA[") {
                let start = self.pos;
                if self.skip_past("]]>") {
                    let end = self.pos - 3;
                    return Ok(Some(Token::Text(self.input[start..end].to_string())));
                }
                if self.lenient {
                    return Ok(Some(Token::Text(self.input[start..].to_string())));
                }
                return Err(self.error("unterminated CDATA section"));
            }
            if self.rest().starts_with("<!") {
                self.pos += 2;
                if !self.skip_past(">") && !self.lenient {
                    return Err(self.error("unterminated markup declaration"));
                }
                continue;
            }
            if self.eat("<?") {
                if !self.skip_past("?>") && !self.lenient {
                    return Err(self.error("unterminated processing instruction"));
                }
                continue;
            }
            if self.eat("</") {
                return self.end_tag().map(Some);
            }
            if self.peek() == Some('<') {
                let mut chars = self.rest().chars();
                chars.next();
                match chars.next() {
                    Some(c) if is_name_start(c) => {
                        self.bump();
                        return self.start_tag().map(Some);
                    }
                    _ => {
                        if self.lenient {
                            self.bump();
                            return Ok(Some(Token::Text("<".to_string())));
                        }
                        return Err(self.error("stray '<'"));
                    }
                }
            }
            return self.text().map(Some);
        }
    }

    fn scan_name(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if is_name_char(c)) {
            self.bump();
        }
        self.input[start..self.pos].to_string()
    }

    fn end_tag(&mut self) -> Result<Token, ParseError> {
        let name = self.scan_name();
        if name.is_empty() && !self.lenient {
            return Err(self.error("expected element name after '</'"));
        }
        self.skip_whitespace();
        if !self.eat(">") {
            if !self.lenient {
                return Err(self.error("expected '>' to close end tag"));
            }
            self.skip_past(">");
        }
        Ok(Token::EndTag { name })
    }

    fn start_tag(&mut self) -> Result<Token, ParseError> {
        let name = self.scan_name();
        let mut attributes = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => {
                    if self.lenient {
                        return Ok(Token::StartTag {
                            name,
                            attributes,
                            self_closing: false,
                        });
                    }
                    return Err(self.error("unexpected end of input inside tag"));
                }
                Some('>') => {
                    self.bump();
                    return Ok(Token::StartTag {
                        name,
                        attributes,
                        self_closing: false,
                    });
                }
                Some('/') => {
                    self.bump();
                    if self.eat(">") {
                        return Ok(Token::StartTag {
                            name,
                            attributes,
                            self_closing: true,
                        });
                    }
                    if !self.lenient {
                        return Err(self.error("expected '>' after '/'"));
                    }
                }
                Some(c) if is_name_start(c) => {
                    attributes.push(self.attribute()?);
                }
                Some(_) => {
                    if !self.lenient {
                        return Err(self.error("unexpected character in tag"));
                    }
                    self.bump();
                }
            }
        }
    }

    fn attribute(&mut self) -> Result<(String, String), ParseError> {
        let name = self.scan_name();
        self.skip_whitespace();
        if !self.eat("=") {
            // Bare attribute name, e.g. `<input disabled>`.
            if self.lenient {
                return Ok((name, String::new()));
            }
            return Err(self.error("expected '=' after attribute name"));
        }
        self.skip_whitespace();
        match self.peek() {
            Some(q @ ('"' | '\'')) => {
                self.bump();
                let value = self.scan_quoted(q)?;
                Ok((name, value))
            }
            _ => {
                if !self.lenient {
                    return Err(self.error("attribute value must be quoted"));
                }
                let start = self.pos;
                while matches!(self.peek(), Some(c) if !c.is_whitespace() && c != '>' && c != '/')
                {
                    self.bump();
                }
                Ok((name, self.input[start..self.pos].to_string()))
            }
        }
    }

    fn scan_quoted(&mut self, quote: char) -> Result<String, ParseError> {
        let mut out = String::new();
        loop {
            match self.peek() {
                None => {
                    if self.lenient {
                        return Ok(out);
                    }
                    return Err(self.error("unterminated attribute value"));
                }
                Some(c) if c == quote => {
                    self.bump();
                    return Ok(out);
                }
                Some('&') => self.entity(&mut out)?,
                Some(c) => {
                    out.push(c);
                    self.bump();
                }
            }
        }
    }

    fn text(&mut self) -> Result<Token, ParseError> {
        let mut out = String::new();
        loop {
            match self.peek() {
                None | Some('<') => break,
                Some('&') => self.entity(&mut out)?,
                Some(c) => {
                    out.push(c);
                    self.bump();
                }
            }
        }
        Ok(Token::Text(out))
    }

    /// Consume one entity reference starting at `&`.
    fn entity(&mut self, out: &mut String) -> Result<(), ParseError> {
        let rest = self.rest();
        if let Some(i) = rest[1..].find(';').map(|i| i + 1) {
            // Entity bodies are short; a distant ';' means this '&' is bare.
            if i <= 12 {
                if let Some(c) = decode_entity(&rest[1..i]) {
                    out.push(c);
                    self.pos += i + 1;
                    return Ok(());
                }
            }
        }
        if self.lenient {
            out.push('&');
            self.bump();
            Ok(())
        } else {
            Err(self.error("invalid entity reference"))
        }
    }
}
