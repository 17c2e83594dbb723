//! PDS3 label parsing.
//!
//! A PDS3 label is a sequence of ODL `KEYWORD = VALUE` statements terminated
//! by `END`. Values may be quoted strings spanning several lines, `(...)` or
//! `{...}` sequences, numbers with `<UNIT>` annotations, or bare symbols.
//! `OBJECT`/`GROUP` blocks nest, and a block name repeated at the same level
//! (multiple `OBJECT = TABLE` entries, say) collects into an array.
//!
//! Parsing is deliberately lenient where real archive labels are sloppy:
//! a missing final `END` is accepted, and anything after `END` (attached
//! binary data) is ignored. Duplicate scalar keywords overwrite. Structural
//! damage (an unclosed `OBJECT`, a mismatched `END_OBJECT` name, or a
//! statement with no `=`) is an error carrying the offending line number.

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{LabelError, LabelModel, Mappings};

/// A parsed PDS3 label.
///
/// Construction reads the file, scans its statements, and builds the field
/// mappings in one step, so an instance in hand is always fully mapped.
#[derive(Debug)]
pub struct Pds3Label {
    path: PathBuf,
    mappings: Mappings,
}

impl Pds3Label {
    /// Read and parse the label at `path`.
    ///
    /// The file is read as bytes and decoded leniently: labels attached to
    /// binary products carry non-text data after `END`, which the parser
    /// never reaches.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, LabelError> {
        let path = path.into();
        let bytes = std::fs::read(&path).map_err(|source| LabelError::Read {
            path: path.clone(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let mappings = parse_label(&text)?;
        Ok(Self { path, mappings })
    }
}

impl LabelModel for Pds3Label {
    fn mappings(&self) -> &Mappings {
        &self.mappings
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// One logical `KEYWORD = VALUE` statement. `value` is `None` only for the
/// bare block terminators `END_OBJECT` / `END_GROUP`.
struct Statement {
    line: usize,
    key: String,
    value: Option<String>,
}

fn parse_label(text: &str) -> Result<Mappings, LabelError> {
    let statements = scan_statements(text)?;
    build_tree(statements)
}

/// Split the label text into logical statements.
///
/// A statement begins on the line carrying its keyword; quoted strings and
/// bracketed sequences pull in following lines until balanced. Scanning
/// stops at the `END` statement.
fn scan_statements(text: &str) -> Result<Vec<Statement>, LabelError> {
    let lines: Vec<&str> = text.lines().collect();
    let mut statements = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line_no = i + 1;
        let stripped = strip_comments(lines[i]);
        let trimmed = stripped.trim();

        if trimmed.is_empty() {
            i += 1;
            continue;
        }
        if trimmed == "END" {
            break;
        }

        let Some((raw_key, raw_value)) = trimmed.split_once('=') else {
            if trimmed == "END_OBJECT" || trimmed == "END_GROUP" {
                statements.push(Statement {
                    line: line_no,
                    key: trimmed.to_string(),
                    value: None,
                });
                i += 1;
                continue;
            }
            return Err(LabelError::Syntax {
                line: line_no,
                message: format!("expected '=' in statement '{}'", trimmed),
            });
        };

        let key = raw_key.trim().to_string();
        if key.is_empty() {
            return Err(LabelError::Syntax {
                line: line_no,
                message: "statement with empty keyword".to_string(),
            });
        }

        // An empty right-hand side means the value starts on the next line.
        let mut value = raw_value.trim().to_string();
        while !value_complete(&value) {
            i += 1;
            let Some(next) = lines.get(i) else {
                return Err(LabelError::Syntax {
                    line: line_no,
                    message: format!("unterminated value for {}", key),
                });
            };
            // Inside an open quote the line is label text; keep it verbatim.
            let next = if ends_inside_quote(&value) {
                (*next).to_string()
            } else {
                strip_comments(next)
            };
            value.push('\n');
            value.push_str(&next);
        }

        statements.push(Statement {
            line: line_no,
            key,
            value: Some(value),
        });
        i += 1;
    }

    Ok(statements)
}

/// Fold the statement stream into nested mappings, tracking open
/// `OBJECT`/`GROUP` blocks on a stack.
fn build_tree(statements: Vec<Statement>) -> Result<Mappings, LabelError> {
    struct Frame {
        kind: &'static str,
        name: String,
        line: usize,
        fields: Mappings,
    }

    let mut root = Mappings::new();
    let mut stack: Vec<Frame> = Vec::new();

    for Statement { line, key, value } in statements {
        if key == "OBJECT" || key == "GROUP" {
            let kind = if key == "OBJECT" { "OBJECT" } else { "GROUP" };
            let Some(raw) = value else {
                return Err(LabelError::Syntax {
                    line,
                    message: format!("{} statement missing a name", kind),
                });
            };
            stack.push(Frame {
                kind,
                name: unquote(raw.trim()).to_string(),
                line,
                fields: Mappings::new(),
            });
        } else if key == "END_OBJECT" || key == "END_GROUP" {
            let expected = if key == "END_OBJECT" { "OBJECT" } else { "GROUP" };
            let Some(frame) = stack.pop() else {
                return Err(LabelError::Syntax {
                    line,
                    message: format!("{} without an open {}", key, expected),
                });
            };
            if frame.kind != expected {
                return Err(LabelError::Syntax {
                    line,
                    message: format!("{} closes {} {}", key, frame.kind, frame.name),
                });
            }
            if let Some(raw) = value {
                let closing = unquote(raw.trim()).to_string();
                if closing != frame.name {
                    return Err(LabelError::Syntax {
                        line,
                        message: format!(
                            "{} = {} does not close {} {}",
                            key, closing, frame.kind, frame.name
                        ),
                    });
                }
            }
            let parent = stack
                .last_mut()
                .map(|f| &mut f.fields)
                .unwrap_or(&mut root);
            insert_block(parent, frame.name, Value::Object(frame.fields));
        } else if let Some(raw) = value {
            let target = stack
                .last_mut()
                .map(|f| &mut f.fields)
                .unwrap_or(&mut root);
            // Duplicate scalar keywords at the same level overwrite.
            target.insert(key, parse_value(&raw));
        }
    }

    if let Some(frame) = stack.last() {
        return Err(LabelError::Syntax {
            line: frame.line,
            message: format!("{} {} is never closed", frame.kind, frame.name),
        });
    }

    Ok(root)
}

/// Insert a completed block under its name; a repeated name at the same
/// level collects into an array.
fn insert_block(map: &mut Mappings, name: String, block: Value) {
    if let Some(existing) = map.get_mut(&name) {
        if let Value::Array(items) = existing {
            items.push(block);
        } else {
            let first = existing.take();
            map.insert(name, Value::Array(vec![first, block]));
        }
    } else {
        map.insert(name, block);
    }
}

/// Interpret one raw value: sequence, quoted string, number, or symbol.
/// Anything that is not cleanly one of those (units, dates, `N/A`) stays a
/// string, exactly as written.
fn parse_value(raw: &str) -> Value {
    let v = raw.trim();
    if v.is_empty() {
        return Value::String(String::new());
    }
    if v.starts_with('(') || v.starts_with('{') {
        return parse_sequence(v);
    }
    if v.len() >= 2 && v.starts_with('"') && v.ends_with('"') {
        return Value::String(v[1..v.len() - 1].to_string());
    }
    if v.len() >= 2 && v.starts_with('\'') && v.ends_with('\'') {
        return Value::String(v[1..v.len() - 1].to_string());
    }
    if let Ok(n) = v.parse::<i64>() {
        return Value::Number(n.into());
    }
    if let Ok(f) = v.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }
    Value::String(v.to_string())
}

/// Parse a `(...)` or `{...}` sequence into an array, recursing for nested
/// sequences.
fn parse_sequence(raw: &str) -> Value {
    let v = raw.trim();
    let inner = v
        .strip_prefix('(')
        .or_else(|| v.strip_prefix('{'))
        .unwrap_or(v);
    let inner = inner
        .strip_suffix(')')
        .or_else(|| inner.strip_suffix('}'))
        .unwrap_or(inner);

    // Split items on commas at depth zero, outside either quote kind.
    let mut items: Vec<&str> = Vec::new();
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (idx, c) in inner.char_indices() {
        match c {
            '"' | '\'' => match quote {
                None => quote = Some(c),
                Some(q) if q == c => quote = None,
                Some(_) => {}
            },
            '(' | '{' if quote.is_none() => depth += 1,
            ')' | '}' if quote.is_none() => depth -= 1,
            ',' if quote.is_none() && depth == 0 => {
                items.push(&inner[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    items.push(&inner[start..]);

    Value::Array(
        items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .map(parse_value)
            .collect(),
    )
}

/// Walk `value` tracking the open quote character and the bracket depth.
/// Either quote kind (`"` or `'`) opens a string; the other kind and any
/// brackets inside it are ordinary text.
fn scan_balance(value: &str) -> (Option<char>, i32) {
    let mut quote: Option<char> = None;
    let mut depth = 0i32;
    for c in value.chars() {
        match c {
            '"' | '\'' => match quote {
                None => quote = Some(c),
                Some(q) if q == c => quote = None,
                Some(_) => {}
            },
            '(' | '{' if quote.is_none() => depth += 1,
            ')' | '}' if quote.is_none() => depth -= 1,
            _ => {}
        }
    }
    (quote, depth)
}

/// True once a raw value carries balanced quotes and brackets. An empty
/// right-hand side is incomplete: its value starts on the next line.
fn value_complete(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    let (quote, depth) = scan_balance(value);
    quote.is_none() && depth <= 0
}

fn ends_inside_quote(value: &str) -> bool {
    scan_balance(value).0.is_some()
}

/// Remove `/* ... */` spans sitting outside quoted text. An unterminated
/// comment runs to the end of the line.
fn strip_comments(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    loop {
        match find_comment_start(rest) {
            None => {
                out.push_str(rest);
                return out;
            }
            Some(start) => {
                out.push_str(&rest[..start]);
                match rest[start + 2..].find("*/") {
                    Some(close) => rest = &rest[start + 2 + close + 2..],
                    None => return out,
                }
            }
        }
    }
}

/// Byte offset of the first `/*` outside quoted text, if any.
fn find_comment_start(s: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut prev: Option<(usize, char)> = None;
    for (idx, c) in s.char_indices() {
        match c {
            '"' | '\'' => match quote {
                None => quote = Some(c),
                Some(q) if q == c => quote = None,
                Some(_) => {}
            },
            '*' if quote.is_none() => {
                if let Some((pidx, '/')) = prev {
                    return Some(pidx);
                }
            }
            _ => {}
        }
        prev = Some((idx, c));
    }
    None
}

fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(s)
}
