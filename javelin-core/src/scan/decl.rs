//! Top-level declaration scanner
//!
//! The grammar is deliberately shallow. Comments, string/char literals
//! and text blocks are skipped, brace depth is tracked, and the
//! keywords `class`, `interface`, `enum`, `record` and `@interface` at
//! depth zero introduce a declaration. Types nested inside other types
//! are invisible at this level; their `$`-qualified class files are
//! rejected later during finalization.

use super::cursor::Cursor;
use thiserror::Error;

/// Scanner failure: the text yields no usable primary type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("no top-level type declaration")]
    NoTypeDeclaration,

    #[error("more than one public top-level type: '{first}' and '{second}'")]
    MultiplePublicTypes { first: String, second: String },
}

/// One top-level type declaration, in textual order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    /// Simple (unqualified) type name
    pub name: String,
    /// Declared with the `public` modifier
    pub is_public: bool,
}

/// Everything the bookkeeping layer needs to know about one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationIndex {
    /// `package` header, if present
    pub package: Option<String>,
    /// Top-level type declarations in textual order
    pub types: Vec<TypeDecl>,
    primary: String,
}

impl DeclarationIndex {
    /// Simple name of the unit's main type: the unique public type, or
    /// the first declared type when nothing is public.
    pub fn primary_name(&self) -> &str {
        &self.primary
    }

    /// Binary (package-qualified) name for a simple name declared here.
    pub fn qualified(&self, simple_name: &str) -> String {
        match &self.package {
            Some(pkg) => format!("{}.{}", pkg, simple_name),
            None => simple_name.to_string(),
        }
    }

    /// Declared simple names in textual order.
    pub fn declared_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|d| d.name.as_str())
    }
}

/// Scan a Java source text for its package header and top-level type
/// declarations.
pub fn scan(source: &str) -> Result<DeclarationIndex, ScanError> {
    Scanner::new(source).run()
}

struct Scanner {
    cursor: Cursor,
    depth: usize,
    pending_public: bool,
    package: Option<String>,
    types: Vec<TypeDecl>,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            depth: 0,
            pending_public: false,
            package: None,
            types: Vec::new(),
        }
    }

    fn run(mut self) -> Result<DeclarationIndex, ScanError> {
        while let Some(c) = self.cursor.peek() {
            match c {
                c if c.is_whitespace() => {
                    self.cursor.bump();
                }
                '/' => self.skip_comment_or_slash(),
                '"' => self.skip_string(),
                '\'' => self.skip_char_literal(),
                '{' => {
                    self.depth += 1;
                    self.cursor.bump();
                }
                '}' => {
                    self.depth = self.depth.saturating_sub(1);
                    self.cursor.bump();
                }
                ';' => {
                    // ends package/import statements; a modifier cannot
                    // carry across a statement boundary
                    if self.depth == 0 {
                        self.pending_public = false;
                    }
                    self.cursor.bump();
                }
                '@' => {
                    self.cursor.bump();
                    self.at_sign();
                }
                c if is_ident_start(c) => self.word(),
                _ => {
                    self.cursor.bump();
                }
            }
        }
        self.into_index()
    }

    fn word(&mut self) {
        let word = self.read_ident();
        if self.depth != 0 {
            return;
        }
        match word.as_str() {
            "package" if self.package.is_none() && self.types.is_empty() => {
                self.package = self.read_dotted_name();
            }
            "public" => self.pending_public = true,
            "class" | "interface" | "enum" | "record" => self.type_decl(),
            _ => {}
        }
    }

    /// After `@`: either an `@interface` declaration or an annotation use.
    fn at_sign(&mut self) {
        self.skip_trivia();
        if !matches!(self.cursor.peek(), Some(c) if is_ident_start(c)) {
            return;
        }
        let word = self.read_ident();
        if word == "interface" {
            if self.depth == 0 {
                self.type_decl();
            }
        } else {
            // Annotation use: skip a simple argument list so array
            // initializers inside it don't disturb depth tracking.
            self.skip_trivia();
            if self.cursor.peek() == Some('(') {
                self.skip_balanced_parens();
            }
        }
    }

    /// At a declaration keyword: record the following identifier.
    fn type_decl(&mut self) {
        self.skip_trivia();
        if matches!(self.cursor.peek(), Some(c) if is_ident_start(c)) {
            let name = self.read_ident();
            self.types.push(TypeDecl {
                name,
                is_public: self.pending_public,
            });
        }
        self.pending_public = false;
    }

    fn read_ident(&mut self) -> String {
        let mut ident = String::new();
        while let Some(c) = self.cursor.peek() {
            if is_ident_continue(c) {
                ident.push(c);
                self.cursor.bump();
            } else {
                break;
            }
        }
        ident
    }

    /// `a.b.c` with trivia allowed around the dots.
    fn read_dotted_name(&mut self) -> Option<String> {
        let mut name = String::new();
        loop {
            self.skip_trivia();
            if !matches!(self.cursor.peek(), Some(c) if is_ident_start(c)) {
                break;
            }
            name.push_str(&self.read_ident());
            self.skip_trivia();
            if self.cursor.eat('.') {
                name.push('.');
            } else {
                break;
            }
        }
        if name.is_empty() || name.ends_with('.') {
            None
        } else {
            Some(name)
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.cursor.peek() {
                Some(c) if c.is_whitespace() => {
                    self.cursor.bump();
                }
                Some('/') if matches!(self.cursor.peek_n(1), Some('/') | Some('*')) => {
                    self.skip_comment_or_slash();
                }
                _ => break,
            }
        }
    }

    /// At `/`: a line comment, a block comment, or a bare operator.
    fn skip_comment_or_slash(&mut self) {
        match self.cursor.peek_n(1) {
            Some('/') => {
                while let Some(c) = self.cursor.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            Some('*') => {
                self.cursor.bump();
                self.cursor.bump();
                loop {
                    match self.cursor.bump() {
                        Some('*') if self.cursor.peek() == Some('/') => {
                            self.cursor.bump();
                            break;
                        }
                        Some(_) => {}
                        // unterminated comment runs to EOF
                        None => break,
                    }
                }
            }
            _ => {
                self.cursor.bump();
            }
        }
    }

    /// At `"`: a string literal or a `"""` text block.
    fn skip_string(&mut self) {
        if self.cursor.peek_n(1) == Some('"') && self.cursor.peek_n(2) == Some('"') {
            self.cursor.bump();
            self.cursor.bump();
            self.cursor.bump();
            loop {
                match self.cursor.bump() {
                    Some('\\') => {
                        self.cursor.bump();
                    }
                    Some('"')
                        if self.cursor.peek() == Some('"')
                            && self.cursor.peek_n(1) == Some('"') =>
                    {
                        self.cursor.bump();
                        self.cursor.bump();
                        break;
                    }
                    Some(_) => {}
                    None => break,
                }
            }
        } else {
            self.cursor.bump();
            loop {
                match self.cursor.bump() {
                    Some('\\') => {
                        self.cursor.bump();
                    }
                    // an unterminated literal stops at the line end
                    Some('"') | Some('\n') | None => break,
                    Some(_) => {}
                }
            }
        }
    }

    fn skip_char_literal(&mut self) {
        self.cursor.bump();
        loop {
            match self.cursor.bump() {
                Some('\\') => {
                    self.cursor.bump();
                }
                Some('\'') | Some('\n') | None => break,
                Some(_) => {}
            }
        }
    }

    fn skip_balanced_parens(&mut self) {
        let mut depth = 0usize;
        while let Some(c) = self.cursor.peek() {
            match c {
                '(' => {
                    depth += 1;
                    self.cursor.bump();
                }
                ')' => {
                    self.cursor.bump();
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        break;
                    }
                }
                '"' => self.skip_string(),
                '\'' => self.skip_char_literal(),
                '/' => self.skip_comment_or_slash(),
                _ => {
                    self.cursor.bump();
                }
            }
        }
    }

    fn into_index(self) -> Result<DeclarationIndex, ScanError> {
        if self.types.is_empty() {
            return Err(ScanError::NoTypeDeclaration);
        }
        let mut publics = self.types.iter().filter(|d| d.is_public);
        let primary = match (publics.next(), publics.next()) {
            (Some(first), Some(second)) => {
                return Err(ScanError::MultiplePublicTypes {
                    first: first.name.clone(),
                    second: second.name.clone(),
                })
            }
            (Some(only), None) => only.name.clone(),
            (None, _) => self.types[0].name.clone(),
        };
        Ok(DeclarationIndex {
            package: self.package,
            types: self.types,
            primary,
        })
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
