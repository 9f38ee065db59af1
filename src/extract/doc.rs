//! Declaration-kind classification of rendered type signatures.
//!
//! scip-typescript renders each symbol's declared type as a fenced code
//! block (`` ```ts\n<body>\n``` ``) in the first documentation entry; any
//! further entries are free-text docstring lines.

const FENCE_OPEN: &str = "```ts\n";
const FENCE_CLOSE: &str = "\n```";

/// Bodies starting with these prefixes describe use-sites (parameters, local
/// variables, properties), not declarations, and are filtered out of the
/// signature dataset.
const NOISE_PREFIXES: [&str; 3] = ["(parameter) ", "var ", "(property) "];

/// Coarse declaration category inferred from the rendered signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    /// An identifier immediately followed by a parameter list.
    Function,
    /// A leading keyword such as `class`, `interface`, `const`, `type`.
    Keyword(String),
    /// The body fits neither shape; a valid terminal state, not an error.
    Undefined,
}

impl DeclKind {
    pub fn as_str(&self) -> &str {
        match self {
            DeclKind::Function => "function",
            DeclKind::Keyword(keyword) => keyword,
            DeclKind::Undefined => "undefined",
        }
    }
}

/// A classified type signature: the declaration kind plus the normalized
/// signature text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSignature {
    pub kind: DeclKind,
    pub signature: String,
}

/// Classify the first documentation entry of a symbol.
pub fn classify(rendered: &str) -> TypeSignature {
    let body = fence_body(rendered);

    if is_function_decl(body) {
        return TypeSignature {
            kind: DeclKind::Function,
            signature: body.to_string(),
        };
    }

    if let Some((keyword, rest)) = split_keyword(body) {
        return TypeSignature {
            kind: DeclKind::Keyword(keyword),
            signature: rest.to_string(),
        };
    }

    TypeSignature {
        kind: DeclKind::Undefined,
        signature: body.to_string(),
    }
}

/// Whether the rendered signature marks a non-declaration (parameter, local
/// variable, property). Such symbols are dropped from signature emission.
pub fn is_noise(rendered: &str) -> bool {
    match rendered.strip_prefix(FENCE_OPEN) {
        Some(body) => NOISE_PREFIXES.iter().any(|p| body.starts_with(p)),
        None => false,
    }
}

/// Join all documentation entries after the first into the docstring.
pub fn docstring(documentation: &[String]) -> String {
    if documentation.len() < 2 {
        return String::new();
    }
    documentation[1..].join("\n")
}

fn fence_body(rendered: &str) -> &str {
    rendered
        .strip_prefix(FENCE_OPEN)
        .and_then(|body| body.strip_suffix(FENCE_CLOSE))
        .unwrap_or(rendered)
}

/// `name(...)` — an identifier immediately followed by a parameter list.
fn is_function_decl(body: &str) -> bool {
    let mut chars = body.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    for c in chars {
        if c == '(' {
            return true;
        }
        if !(c.is_alphanumeric() || c == '_' || c == '$') {
            return false;
        }
    }
    false
}

/// `<keyword> <rest>` where the keyword is a bare word, optionally wrapped in
/// parentheses the way the renderer writes `(method)` and friends.
fn split_keyword(body: &str) -> Option<(String, &str)> {
    let (token, rest) = match body.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest),
        None => (body, ""),
    };
    let keyword = token.trim_matches(|c| c == '(' || c == ')');
    if keyword.is_empty() {
        return None;
    }
    if !keyword.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }
    Some((keyword.to_string(), rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_function() {
        let sig = classify("```ts\nfoo(a: number): void\n```");
        assert_eq!(sig.kind, DeclKind::Function);
        assert_eq!(sig.kind.as_str(), "function");
        assert_eq!(sig.signature, "foo(a: number): void");
    }

    #[test]
    fn test_classify_class() {
        let sig = classify("```ts\nclass Foo\n```");
        assert_eq!(sig.kind, DeclKind::Keyword("class".to_string()));
        assert_eq!(sig.kind.as_str(), "class");
        assert_eq!(sig.signature, "Foo");
    }

    #[test]
    fn test_classify_interface_keeps_full_rest() {
        let sig = classify("```ts\ninterface Widget extends Base\n```");
        assert_eq!(sig.kind.as_str(), "interface");
        assert_eq!(sig.signature, "Widget extends Base");
    }

    #[test]
    fn test_classify_parenthesized_keyword() {
        let sig = classify("```ts\n(method) Foo.bar(): void\n```");
        assert_eq!(sig.kind.as_str(), "method");
        assert_eq!(sig.signature, "Foo.bar(): void");
    }

    #[test]
    fn test_classify_undefined() {
        let sig = classify("```ts\n=> odd render\n```");
        assert_eq!(sig.kind, DeclKind::Undefined);
        assert_eq!(sig.kind.as_str(), "undefined");
        assert_eq!(sig.signature, "=> odd render");
    }

    #[test]
    fn test_classify_without_fence_uses_raw_text() {
        let sig = classify("const x: number");
        assert_eq!(sig.kind.as_str(), "const");
        assert_eq!(sig.signature, "x: number");
    }

    #[test]
    fn test_noise_filter() {
        assert!(is_noise("```ts\n(parameter) x: string\n```"));
        assert!(is_noise("```ts\nvar counter: number\n```"));
        assert!(is_noise("```ts\n(property) Foo.size: number\n```"));
        assert!(!is_noise("```ts\nclass Foo\n```"));
        assert!(!is_noise("```ts\nvariant: string\n```"));
    }

    #[test]
    fn test_docstring_joins_trailing_entries() {
        let docs = vec![
            "```ts\nclass Foo\n```".to_string(),
            "First line.".to_string(),
            "Second line.".to_string(),
        ];
        assert_eq!(docstring(&docs), "First line.\nSecond line.");
    }

    #[test]
    fn test_docstring_empty_when_only_signature() {
        let docs = vec!["```ts\nclass Foo\n```".to_string()];
        assert_eq!(docstring(&docs), "");
        assert_eq!(docstring(&[]), "");
    }
}
