//! SCIP symbol identifier parsing.
//!
//! A symbol identifier has the fixed shape
//! `<scheme> <manager> <package-name> <version> <descriptor>+` where each
//! descriptor is one punctuation-delimited path segment, e.g.
//! `` scip-typescript npm mylib 1.0.0 `src/app.ts`/Service#handle(). ``.
//!
//! Parsing is an explicit left-to-right scan rather than a single pattern:
//! segment names may be backtick-escaped and may contain the very characters
//! that terminate neighbouring segments, so segment boundaries have to be
//! scanning decisions.

/// One path segment of a symbol identifier, tagged by the punctuation that
/// terminated it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    /// `name/`
    Namespace(String),
    /// `name#`
    Type(String),
    /// `name.`
    Term(String),
    /// `name:`
    Meta(String),
    /// `name!`
    Macro(String),
    /// `name(disambiguator).`
    Method { name: String, disambiguator: String },
    /// `(name)`
    Parameter(String),
    /// `[name]`
    TypeParameter(String),
}

impl Descriptor {
    /// The segment's local name, with delimiters and escaping removed.
    pub fn name(&self) -> &str {
        match self {
            Descriptor::Namespace(name)
            | Descriptor::Type(name)
            | Descriptor::Term(name)
            | Descriptor::Meta(name)
            | Descriptor::Macro(name)
            | Descriptor::Parameter(name)
            | Descriptor::TypeParameter(name) => name,
            Descriptor::Method { name, .. } => name,
        }
    }

    /// Stable string tag for the segment kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Descriptor::Namespace(_) => "namespace",
            Descriptor::Type(_) => "type",
            Descriptor::Term(_) => "term",
            Descriptor::Meta(_) => "meta",
            Descriptor::Macro(_) => "macro",
            Descriptor::Method { .. } => "method",
            Descriptor::Parameter(_) => "parameter",
            Descriptor::TypeParameter(_) => "type_parameter",
        }
    }
}

/// A fully parsed symbol identifier: package coordinates plus the descriptor
/// chain. The chain is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSymbol {
    pub scheme: String,
    pub manager: String,
    pub package: String,
    pub version: String,
    pub descriptors: Vec<Descriptor>,
}

impl ParsedSymbol {
    /// Parse a symbol identifier. Returns `None` when the string does not
    /// satisfy the grammar — typical for built-in and synthetic symbols such
    /// as `local 12`, which callers are expected to skip.
    pub fn parse(symbol: &str) -> Option<Self> {
        let mut parts = symbol.splitn(5, ' ');
        let scheme = parts.next()?;
        let manager = parts.next()?;
        let package = parts.next()?;
        let version = parts.next()?;
        let rest = parts.next()?;

        if scheme.is_empty() || manager.is_empty() || package.is_empty() || version.is_empty() {
            return None;
        }

        let descriptors = parse_descriptors(rest)?;
        Some(Self {
            scheme: scheme.to_string(),
            manager: manager.to_string(),
            package: package.to_string(),
            version: version.to_string(),
            descriptors,
        })
    }

    /// The final descriptor in the chain, which carries the symbol's local
    /// name and kind.
    pub fn last(&self) -> &Descriptor {
        // parse() rejects empty chains
        self.descriptors.last().expect("descriptor chain is non-empty")
    }

    /// The symbol's local name: the final segment's name.
    pub fn local_name(&self) -> &str {
        self.last().name()
    }

    /// Name of the innermost type segment in the chain, if any. For a method
    /// `Foo#bar().` this is `Foo`; for the class `Foo#` itself it is `Foo`.
    pub fn containing_type(&self) -> Option<&str> {
        self.descriptors.iter().rev().find_map(|d| match d {
            Descriptor::Type(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

fn parse_descriptors(input: &str) -> Option<Vec<Descriptor>> {
    let chars: Vec<char> = input.chars().collect();
    let mut pos = 0;
    let mut descriptors = Vec::new();

    while pos < chars.len() {
        descriptors.push(scan_descriptor(&chars, &mut pos)?);
    }

    if descriptors.is_empty() {
        None
    } else {
        Some(descriptors)
    }
}

fn scan_descriptor(chars: &[char], pos: &mut usize) -> Option<Descriptor> {
    match chars[*pos] {
        '(' => {
            *pos += 1;
            let body = scan_delimited(chars, pos, '(', ')')?;
            Some(Descriptor::Parameter(body))
        }
        '[' => {
            *pos += 1;
            let body = scan_delimited(chars, pos, '[', ']')?;
            Some(Descriptor::TypeParameter(body))
        }
        _ => {
            let name = scan_name(chars, pos)?;
            match chars.get(*pos)? {
                '/' => {
                    *pos += 1;
                    Some(Descriptor::Namespace(name))
                }
                '#' => {
                    *pos += 1;
                    Some(Descriptor::Type(name))
                }
                '.' => {
                    *pos += 1;
                    Some(Descriptor::Term(name))
                }
                ':' => {
                    *pos += 1;
                    Some(Descriptor::Meta(name))
                }
                '!' => {
                    *pos += 1;
                    Some(Descriptor::Macro(name))
                }
                '(' => {
                    *pos += 1;
                    let disambiguator = scan_delimited(chars, pos, '(', ')')?;
                    // the grammar closes methods with a trailing dot
                    if chars.get(*pos) == Some(&'.') {
                        *pos += 1;
                    }
                    Some(Descriptor::Method { name, disambiguator })
                }
                _ => None,
            }
        }
    }
}

/// Scan a segment name: either a run of plain identifier characters or a
/// backtick-escaped identifier (`` ` `` doubled to escape itself). The
/// returned name is unescaped.
fn scan_name(chars: &[char], pos: &mut usize) -> Option<String> {
    if chars.get(*pos) == Some(&'`') {
        *pos += 1;
        let mut name = String::new();
        loop {
            match chars.get(*pos)? {
                '`' if chars.get(*pos + 1) == Some(&'`') => {
                    name.push('`');
                    *pos += 2;
                }
                '`' => {
                    *pos += 1;
                    break;
                }
                c => {
                    name.push(*c);
                    *pos += 1;
                }
            }
        }
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    } else {
        let mut name = String::new();
        while let Some(c) = chars.get(*pos) {
            if is_plain_ident_char(*c) {
                name.push(*c);
                *pos += 1;
            } else {
                break;
            }
        }
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

/// Scan up to the matching close delimiter. Backtick-escaped regions are
/// copied verbatim and their content never terminates the scan, and nested
/// open delimiters are balanced, so bodies may contain the punctuation that
/// delimits adjacent descriptors.
fn scan_delimited(chars: &[char], pos: &mut usize, open: char, close: char) -> Option<String> {
    let mut body = String::new();
    let mut depth = 0usize;
    loop {
        match chars.get(*pos)? {
            '`' => {
                body.push('`');
                *pos += 1;
                loop {
                    match chars.get(*pos)? {
                        '`' if chars.get(*pos + 1) == Some(&'`') => {
                            body.push_str("``");
                            *pos += 2;
                        }
                        '`' => {
                            body.push('`');
                            *pos += 1;
                            break;
                        }
                        c => {
                            body.push(*c);
                            *pos += 1;
                        }
                    }
                }
            }
            c if *c == close && depth == 0 => {
                *pos += 1;
                return Some(body);
            }
            c if *c == close => {
                depth -= 1;
                body.push(*c);
                *pos += 1;
            }
            c if *c == open => {
                depth += 1;
                body.push(*c);
                *pos += 1;
            }
            c => {
                body.push(*c);
                *pos += 1;
            }
        }
    }
}

fn is_plain_ident_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '+' | '$')
}
