//! A small CSS selector subset: compound selectors joined by the descendant
//! combinator.
//!
//! Supported simple selectors are `tag`, `*`, `#id`, `.class`, `[attr]`,
//! `[attr=value]` and `[attr="value"]`. Attribute names may contain `:` so
//! namespaced-looking markers such as `option[filter:ignore]` work.

use crate::document::Document;
use crate::error::DomError;
use crate::node::NodeId;

/// A parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Compounds from outermost ancestor to subject.
    compounds: Vec<Compound>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    value: Option<String>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, DomError> {
        let invalid = |reason: &str| DomError::InvalidSelector {
            selector: source.to_string(),
            reason: reason.to_string(),
        };

        let mut compounds = Vec::new();
        for part in split_compounds(source).map_err(invalid)? {
            compounds.push(Compound::parse(&part).map_err(invalid)?);
        }
        if compounds.is_empty() {
            return Err(invalid("empty selector"));
        }
        Ok(Self { compounds })
    }

    /// Whether element `id` matches this selector.
    pub fn matches(&self, doc: &Document, id: NodeId) -> bool {
        let Some((subject, ancestors)) = self.compounds.split_last() else {
            return false;
        };
        if !subject.matches(doc, id) {
            return false;
        }

        // Descendant combinators only, so the nearest matching ancestor is
        // always the right pick.
        let mut cursor = doc.parent(id);
        for compound in ancestors.iter().rev() {
            loop {
                let Some(current) = cursor else {
                    return false;
                };
                cursor = doc.parent(current);
                if compound.matches(doc, current) {
                    break;
                }
            }
        }
        true
    }
}

/// Split on whitespace that is outside brackets and quotes.
fn split_compounds(source: &str) -> Result<Vec<String>, &'static str> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_brackets = false;
    let mut quote: Option<char> = None;

    for ch in source.chars() {
        match (ch, quote) {
            (c, Some(q)) if c == q => {
                quote = None;
                current.push(c);
            }
            (c, Some(_)) => current.push(c),
            ('"' | '\'', None) if in_brackets => {
                quote = Some(ch);
                current.push(ch);
            }
            ('[', None) => {
                in_brackets = true;
                current.push(ch);
            }
            (']', None) => {
                in_brackets = false;
                current.push(ch);
            }
            (c, None) if c.is_whitespace() && !in_brackets => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            ('>' | '+' | '~' | ',', None) if !in_brackets => {
                return Err("only the descendant combinator is supported");
            }
            (c, None) => current.push(c),
        }
    }

    if quote.is_some() || in_brackets {
        return Err("unterminated attribute selector");
    }
    if !current.is_empty() {
        parts.push(current);
    }
    Ok(parts)
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, extra: &[char]) -> String {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if is_ident_char(c) || extra.contains(&c) {
            ident.push(c);
            chars.next();
        } else {
            break;
        }
    }
    ident
}

impl Compound {
    fn parse(source: &str) -> Result<Self, &'static str> {
        let mut compound = Compound::default();
        let mut chars = source.chars().peekable();

        if chars.peek() == Some(&'*') {
            chars.next();
        } else {
            let tag = take_ident(&mut chars, &[]);
            if !tag.is_empty() {
                compound.tag = Some(tag.to_ascii_lowercase());
            }
        }

        while let Some(c) = chars.next() {
            match c {
                '#' => {
                    let id = take_ident(&mut chars, &[]);
                    if id.is_empty() {
                        return Err("expected an id after '#'");
                    }
                    compound.id = Some(id);
                }
                '.' => {
                    let class = take_ident(&mut chars, &[]);
                    if class.is_empty() {
                        return Err("expected a class name after '.'");
                    }
                    compound.classes.push(class);
                }
                '[' => compound.attrs.push(AttrMatch::parse(&mut chars)?),
                _ => return Err("unexpected character"),
            }
        }
        Ok(compound)
    }

    fn matches(&self, doc: &Document, id: NodeId) -> bool {
        let Some(tag) = doc.tag_name(id) else {
            return false;
        };
        if self.tag.as_deref().is_some_and(|t| t != tag) {
            return false;
        }
        if self
            .id
            .as_deref()
            .is_some_and(|want| doc.attr(id, "id") != Some(want))
        {
            return false;
        }
        if !self.classes.iter().all(|c| doc.has_class(id, c)) {
            return false;
        }
        self.attrs.iter().all(|a| match (&a.value, doc.attr(id, &a.name)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(want), Some(have)) => want == have,
        })
    }
}

impl AttrMatch {
    /// Parse the body of `[...]`; the opening bracket is already consumed.
    fn parse(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Result<Self, &'static str> {
        let name = take_ident(chars, &[':']);
        if name.is_empty() {
            return Err("expected an attribute name");
        }

        match chars.next() {
            Some(']') => Ok(Self { name, value: None }),
            Some('=') => {
                let value = match chars.peek().copied() {
                    Some(q @ ('"' | '\'')) => {
                        chars.next();
                        let mut value = String::new();
                        loop {
                            match chars.next() {
                                Some(c) if c == q => break,
                                Some(c) => value.push(c),
                                None => return Err("unterminated string"),
                            }
                        }
                        value
                    }
                    _ => take_ident(chars, &[':']),
                };
                if chars.next() != Some(']') {
                    return Err("expected ']'");
                }
                Ok(Self {
                    name,
                    value: Some(value),
                })
            }
            _ => Err("expected ']' or '='"),
        }
    }
}
