use serde_json::Value;
use std::fmt::{self, Write};
use std::iter::Peekable;
use std::str::Chars;

/// Subset of Python literal syntax found in detection exports.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Literal {
    Str(String),
    /// Numbers hold the text Python prints for them.
    Num(String),
    Bool(bool),
    None,
    List(Vec<Literal>),
    Tuple(Vec<Literal>),
    Dict(Vec<(Literal, Literal)>),
}

impl Literal {
    /// Lists yield one label per element. Anything else, tuples included,
    /// is a single label.
    pub(crate) fn into_labels(self) -> Vec<String> {
        match self {
            Literal::List(items) => items.into_iter().map(Literal::into_text).collect(),
            other => vec![other.into_text()],
        }
    }

    /// Strings are their own text, everything else renders as its repr.
    pub(crate) fn into_text(self) -> String {
        match self {
            Literal::Str(s) => s,
            other => other.to_string(),
        }
    }
}

impl From<&Value> for Literal {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Literal::None,
            Value::Bool(b) => Literal::Bool(*b),
            Value::Number(n) => Literal::Num(match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => i.to_string(),
                (_, Some(u), _) => u.to_string(),
                (_, _, Some(f)) => py_float(f),
                _ => n.to_string(),
            }),
            Value::String(s) => Literal::Str(s.clone()),
            Value::Array(items) => Literal::List(items.iter().map(Literal::from).collect()),
            Value::Object(map) => Literal::Dict(
                map.iter()
                    .map(|(k, v)| (Literal::Str(k.clone()), Literal::from(v)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => write_str_repr(f, s),
            Literal::Num(n) => f.write_str(n),
            Literal::Bool(true) => f.write_str("True"),
            Literal::Bool(false) => f.write_str("False"),
            Literal::None => f.write_str("None"),
            Literal::List(items) => {
                f.write_str("[")?;
                write_items(f, items)?;
                f.write_str("]")
            }
            Literal::Tuple(items) => {
                f.write_str("(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Literal::Dict(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Literal]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Single quotes unless the text holds a single quote and no double quote.
fn write_str_repr(f: &mut impl Write, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    f.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c if c.is_control() && (c as u32) < 0x100 => write!(f, "\\x{:02x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

/// Python list repr of plain strings, e.g. `['id', 'severity']`.
pub(crate) fn str_list_repr(items: &[String]) -> String {
    Literal::List(items.iter().cloned().map(Literal::Str).collect()).to_string()
}

/// Shortest round-trip float text in Python's `repr` layout: positional
/// between 1e-4 and 1e16, scientific with a two-digit exponent otherwise.
pub(crate) fn py_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if (-4..16).contains(&exponent) {
        let positional = value.to_string();
        if positional.contains('.') {
            positional
        } else {
            format!("{positional}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}

/// Parses `input` as a single literal. Trailing input other than whitespace
/// is a failure.
pub(crate) fn parse_literal(input: &str) -> Option<Literal> {
    let mut parser = Parser {
        chars: input.chars().peekable(),
    };
    let value = parser.value()?;
    parser.skip_whitespace();
    parser.chars.peek().is_none().then_some(value)
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Parser<'_> {
    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|c| c.is_whitespace()).is_some() {}
    }

    fn value(&mut self) -> Option<Literal> {
        self.skip_whitespace();
        match *self.chars.peek()? {
            '[' => {
                self.chars.next();
                self.sequence(']').map(Literal::List)
            }
            '(' => {
                self.chars.next();
                self.tuple()
            }
            '{' => {
                self.chars.next();
                self.dict()
            }
            '\'' | '"' => self.strings(),
            c if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => self.number(),
            c if c.is_ascii_alphabetic() => self.keyword(),
            _ => None,
        }
    }

    /// Comma separated values up to `close`; a trailing comma is allowed.
    fn sequence(&mut self, close: char) -> Option<Vec<Literal>> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.chars.next_if_eq(&close).is_some() {
                return Some(items);
            }
            items.push(self.value()?);
            self.skip_whitespace();
            match self.chars.next()? {
                ',' => continue,
                c if c == close => return Some(items),
                _ => return None,
            }
        }
    }

    /// `(x)` is just `x`; `(x,)` and `(x, y)` are tuples.
    fn tuple(&mut self) -> Option<Literal> {
        self.skip_whitespace();
        if self.chars.next_if_eq(&')').is_some() {
            return Some(Literal::Tuple(Vec::new()));
        }

        let first = self.value()?;
        self.skip_whitespace();
        match self.chars.next()? {
            ')' => Some(first),
            ',' => {
                let mut items = vec![first];
                items.extend(self.sequence(')')?);
                Some(Literal::Tuple(items))
            }
            _ => None,
        }
    }

    /// `{key: value, ...}`; a trailing comma is allowed. Sets are not
    /// supported.
    fn dict(&mut self) -> Option<Literal> {
        let mut entries = Vec::new();
        loop {
            self.skip_whitespace();
            if self.chars.next_if_eq(&'}').is_some() {
                return Some(Literal::Dict(entries));
            }
            let key = self.value()?;
            self.skip_whitespace();
            self.chars.next_if_eq(&':')?;
            let value = self.value()?;
            entries.push((key, value));
            self.skip_whitespace();
            match self.chars.next()? {
                ',' => continue,
                '}' => return Some(Literal::Dict(entries)),
                _ => return None,
            }
        }
    }

    /// Adjacent string literals concatenate, as in `'a' 'b'`.
    fn strings(&mut self) -> Option<Literal> {
        let mut out = self.string()?;
        loop {
            self.skip_whitespace();
            match self.chars.peek() {
                Some('\'') | Some('"') => out.push_str(&self.string()?),
                _ => return Some(Literal::Str(out)),
            }
        }
    }

    fn string(&mut self) -> Option<String> {
        let quote = self.chars.next()?;
        let mut out = String::new();
        loop {
            match self.chars.next()? {
                c if c == quote => return Some(out),
                '\n' => return None,
                '\\' => match self.chars.next()? {
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    'r' => out.push('\r'),
                    '0' => out.push('\0'),
                    '\\' => out.push('\\'),
                    '\'' => out.push('\''),
                    '"' => out.push('"'),
                    '\n' => {}
                    other => {
                        out.push('\\');
                        out.push(other);
                    }
                },
                c => out.push(c),
            }
        }
    }

    fn number(&mut self) -> Option<Literal> {
        let mut text = String::new();
        if let Some(sign) = self.chars.next_if(|c| *c == '-' || *c == '+') {
            text.push(sign);
            self.skip_whitespace();
        }

        let mut digits = 0;
        while let Some(c) = self
            .chars
            .next_if(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-'))
        {
            // A sign is only part of the number right after an exponent marker.
            if matches!(c, '+' | '-') && !text.ends_with(['e', 'E']) {
                return None;
            }
            if c.is_ascii_digit() {
                digits += 1;
            }
            text.push(c);
        }

        if digits == 0 {
            return None;
        }
        canonical_number(&text).map(Literal::Num)
    }

    fn keyword(&mut self) -> Option<Literal> {
        let mut word = String::new();
        while let Some(c) = self.chars.next_if(|c| c.is_ascii_alphanumeric() || *c == '_') {
            word.push(c);
        }
        match word.as_str() {
            "None" => Some(Literal::None),
            "True" => Some(Literal::Bool(true)),
            "False" => Some(Literal::Bool(false)),
            _ => None,
        }
    }
}

/// Text Python prints for a numeric literal: `1_000` is `1000`, `0x1F` is
/// `31`, `1e5` is `100000.0`.
fn canonical_number(text: &str) -> Option<String> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let body = body.replace('_', "");
    let lower = body.to_ascii_lowercase();

    let signed = |digits: String| {
        if negative && digits != "0" {
            format!("-{digits}")
        } else {
            digits
        }
    };

    let prefixed = [("0x", 16), ("0o", 8), ("0b", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| lower.strip_prefix(prefix).map(|d| (d, radix)));
    if let Some((digits, radix)) = prefixed {
        let value = u128::from_str_radix(digits, radix).ok()?;
        return Some(signed(value.to_string()));
    }

    if body.bytes().all(|b| b.is_ascii_digit()) {
        let trimmed = body.trim_start_matches('0');
        // `007` is not a valid literal, `000` is.
        if trimmed.is_empty() {
            return Some("0".to_string());
        }
        if trimmed.len() != body.len() {
            return None;
        }
        return Some(signed(trimmed.to_string()));
    }

    let value: f64 = body.parse().ok()?;
    Some(py_float(if negative { -value } else { value }))
}
