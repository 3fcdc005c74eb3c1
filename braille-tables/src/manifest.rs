//! Custom table manifest parsing.
//!
//! A manifest is an INI-style text file describing one or more braille
//! tables shipped next to it. Each top-level section names a table file;
//! its keys carry the capability flags, and `displayName` gives the name
//! shown to the user, either as a single string or as a per-locale
//! subsection.
//!
//! # Format
//! ```ini
//! [my-table.ctb]
//! contracted = yes
//! displayName = My contracted table
//!
//! [other-table.utb]
//! input = false
//! [[displayName]]
//! en = Other table
//! de = Andere Tabelle
//! ```
//!
//! Parsing is strict about structure (unterminated headers, duplicate
//! sections or keys, nesting beyond two levels) but open about content:
//! keys other than the known ones are ignored so a manifest can carry
//! data for newer releases.

use indexmap::IndexMap;

use crate::display_name::DisplayName;
use crate::error::{BrailleTableError, Result};

/// File extension of custom table manifests.
pub const MANIFEST_EXTENSION: &str = "ini";

/// A parsed manifest: table file name mapped to its raw configuration,
/// in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableManifest {
    /// One entry per `[section]` in the manifest.
    pub entries: IndexMap<String, RawTableConfig>,
}

/// Raw per-table configuration from a manifest, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTableConfig {
    /// `contracted` key, defaults to false.
    pub contracted: bool,
    /// `output` key, defaults to true.
    pub output: bool,
    /// `input` key, defaults to true.
    pub input: bool,
    /// `displayName` key or subsection, defaults to [`DisplayName::Absent`].
    pub display_name: DisplayName,
}

impl Default for RawTableConfig {
    fn default() -> Self {
        Self {
            contracted: false,
            output: true,
            input: true,
            display_name: DisplayName::Absent,
        }
    }
}

/// Parse manifest bytes into table configurations.
///
/// The bytes must be UTF-8; a leading byte order mark is accepted and
/// skipped. Structural problems surface as
/// [`BrailleTableError::ManifestParse`] with a 1-based line number, schema
/// problems as [`BrailleTableError::SchemaValidation`] naming the offending
/// entry.
pub fn parse_manifest(bytes: &[u8]) -> Result<TableManifest> {
    let text = decode(bytes)?;
    let document = parse_document(text)?;
    validate(document)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum RawValue {
    Str(String),
    List(Vec<String>),
}

#[derive(Debug, Default)]
struct RawSection {
    values: IndexMap<String, RawValue>,
    subsections: IndexMap<String, IndexMap<String, RawValue>>,
}

#[derive(Debug, Default)]
struct RawDocument {
    top_level: IndexMap<String, RawValue>,
    sections: IndexMap<String, RawSection>,
}

fn decode(bytes: &[u8]) -> Result<&str> {
    let text = std::str::from_utf8(bytes).map_err(|source| {
        let line = bytes[..source.valid_up_to()]
            .iter()
            .filter(|&&b| b == b'\n')
            .count()
            + 1;
        BrailleTableError::manifest_parse(line, "manifest is not valid UTF-8")
    })?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}

fn parse_document(text: &str) -> Result<RawDocument> {
    let mut doc = RawDocument::default();
    let mut current_section: Option<String> = None;
    let mut current_subsection: Option<String> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            let (depth, name) = parse_header(line, line_no)?;
            if depth == 1 {
                if doc.sections.contains_key(&name) {
                    return Err(BrailleTableError::manifest_parse(
                        line_no,
                        format!("duplicate section '[{name}]'"),
                    ));
                }
                doc.sections.insert(name.clone(), RawSection::default());
                current_section = Some(name);
                current_subsection = None;
            } else {
                let Some(parent) = current_section.clone() else {
                    return Err(BrailleTableError::manifest_parse(
                        line_no,
                        format!("subsection '[[{name}]]' without an enclosing section"),
                    ));
                };
                let section = doc.sections.entry(parent).or_default();
                if section.subsections.contains_key(&name) {
                    return Err(BrailleTableError::manifest_parse(
                        line_no,
                        format!("duplicate subsection '[[{name}]]'"),
                    ));
                }
                section.subsections.insert(name.clone(), IndexMap::new());
                current_subsection = Some(name);
            }
            continue;
        }

        let Some(divider) = line.find('=') else {
            return Err(BrailleTableError::manifest_parse(
                line_no,
                "expected 'key = value' or a section header",
            ));
        };
        let key = unquote(line[..divider].trim(), line_no)?;
        if key.is_empty() {
            return Err(BrailleTableError::manifest_parse(line_no, "empty key"));
        }
        let value = parse_value(line[divider + 1..].trim(), line_no)?;

        let values = match (&current_section, &current_subsection) {
            (None, _) => &mut doc.top_level,
            (Some(section), None) => &mut doc.sections.entry(section.clone()).or_default().values,
            (Some(section), Some(subsection)) => doc
                .sections
                .entry(section.clone())
                .or_default()
                .subsections
                .entry(subsection.clone())
                .or_default(),
        };
        if values.contains_key(&key) {
            return Err(BrailleTableError::manifest_parse(
                line_no,
                format!("duplicate key '{key}'"),
            ));
        }
        values.insert(key, value);
    }

    Ok(doc)
}

/// Cut the line at the first `#` that is not inside a quoted span.
///
/// A quote opens a span only at the start of a token: the start of the
/// line, or after `=`, `,` or `[`, ignoring whitespace. An apostrophe
/// inside a word is literal text and does not swallow a comment.
fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut token_start = true;
    for (index, c) in line.char_indices() {
        match quote {
            Some(q) if c == q => {
                quote = None;
                token_start = false;
            }
            Some(_) => {}
            None => match c {
                '#' => return &line[..index],
                '\'' | '"' if token_start => quote = Some(c),
                '=' | ',' | '[' => token_start = true,
                c if c.is_whitespace() => {}
                _ => token_start = false,
            },
        }
    }
    line
}

fn parse_header(line: &str, line_no: usize) -> Result<(usize, String)> {
    let depth = line.chars().take_while(|&c| c == '[').count();
    if depth > 2 {
        return Err(BrailleTableError::manifest_parse(
            line_no,
            "sections nested deeper than two levels are not supported",
        ));
    }
    let rest = &line[depth..];
    let Some(name_end) = rest.find(']') else {
        return Err(BrailleTableError::manifest_parse(
            line_no,
            "unterminated section header",
        ));
    };
    let closing = &rest[name_end..];
    let closers = closing.chars().take_while(|&c| c == ']').count();
    if closers != depth || !closing[closers..].trim().is_empty() {
        return Err(BrailleTableError::manifest_parse(
            line_no,
            "malformed section header",
        ));
    }
    let name = unquote(rest[..name_end].trim(), line_no)?;
    if name.is_empty() {
        return Err(BrailleTableError::manifest_parse(
            line_no,
            "empty section name",
        ));
    }
    Ok((depth, name))
}

fn parse_value(raw: &str, line_no: usize) -> Result<RawValue> {
    let parts = split_on_commas(raw);
    if parts.len() == 1 {
        return Ok(RawValue::Str(unquote(parts[0].trim(), line_no)?));
    }
    let mut items = Vec::new();
    for (index, part) in parts.iter().enumerate() {
        let part = part.trim();
        // A trailing comma leaves one empty final element; drop it.
        if part.is_empty() && index == parts.len() - 1 {
            continue;
        }
        items.push(unquote(part, line_no)?);
    }
    Ok(RawValue::List(items))
}

/// Split a value on commas outside quoted spans. As in [`strip_comment`],
/// a quote only opens a span at the start of a list item.
fn split_on_commas(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut token_start = true;
    for (index, c) in value.char_indices() {
        match quote {
            Some(q) if c == q => {
                quote = None;
                token_start = false;
            }
            Some(_) => {}
            None => match c {
                '\'' | '"' if token_start => quote = Some(c),
                ',' => {
                    parts.push(&value[start..index]);
                    start = index + 1;
                    token_start = true;
                }
                c if c.is_whitespace() => {}
                _ => token_start = false,
            },
        }
    }
    parts.push(&value[start..]);
    parts
}

fn unquote(token: &str, line_no: usize) -> Result<String> {
    let Some(q @ ('\'' | '"')) = token.chars().next() else {
        return Ok(token.to_string());
    };
    let rest = &token[1..];
    match rest.find(q) {
        Some(end) if rest[end + 1..].trim().is_empty() => Ok(rest[..end].to_string()),
        Some(_) => Err(BrailleTableError::manifest_parse(
            line_no,
            format!("unexpected text after closing {q} quote"),
        )),
        None => Err(BrailleTableError::manifest_parse(
            line_no,
            "unterminated quoted value",
        )),
    }
}

fn validate(doc: RawDocument) -> Result<TableManifest> {
    if let Some((key, _)) = doc.top_level.first() {
        return Err(BrailleTableError::schema_validation(
            key,
            "table entries must be sections, found a bare top-level key",
        ));
    }
    let mut entries = IndexMap::new();
    for (table, section) in doc.sections {
        let config = validate_section(&table, section)?;
        entries.insert(table, config);
    }
    Ok(TableManifest { entries })
}

fn validate_section(table: &str, section: RawSection) -> Result<RawTableConfig> {
    let mut config = RawTableConfig::default();
    for (key, value) in &section.values {
        match key.as_str() {
            "contracted" => config.contracted = validate_bool(table, key, value)?,
            "output" => config.output = validate_bool(table, key, value)?,
            "input" => config.input = validate_bool(table, key, value)?,
            "displayName" => {
                config.display_name = match value {
                    RawValue::Str(name) => DisplayName::Literal(name.clone()),
                    RawValue::List(items) => {
                        DisplayName::Unsupported(format!("a list of {} values", items.len()))
                    }
                }
            }
            // Unknown keys are allowed; a manifest may carry data for newer
            // releases.
            _ => {}
        }
    }
    for (name, values) in section.subsections {
        if name != "displayName" {
            return Err(BrailleTableError::schema_validation(
                table,
                format!("unknown subsection '[[{name}]]'"),
            ));
        }
        if config.display_name != DisplayName::Absent {
            return Err(BrailleTableError::schema_validation(
                table,
                "displayName given both as a key and as a subsection",
            ));
        }
        let mut names = IndexMap::new();
        for (locale, value) in values {
            match value {
                RawValue::Str(text) => {
                    names.insert(locale, text);
                }
                RawValue::List(_) => {
                    return Err(BrailleTableError::schema_validation(
                        table,
                        format!("displayName for locale '{locale}' must be a single string"),
                    ));
                }
            }
        }
        config.display_name = DisplayName::LocaleMap(names);
    }
    Ok(config)
}

fn validate_bool(table: &str, key: &str, value: &RawValue) -> Result<bool> {
    let text = match value {
        RawValue::Str(text) => text,
        RawValue::List(_) => {
            return Err(BrailleTableError::schema_validation(
                table,
                format!("key '{key}' must be a boolean, found a list"),
            ));
        }
    };
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" => Ok(true),
        "false" | "no" => Ok(false),
        _ => Err(BrailleTableError::schema_validation(
            table,
            format!("key '{key}' must be one of true/false/yes/no, found '{text}'"),
        )),
    }
}
