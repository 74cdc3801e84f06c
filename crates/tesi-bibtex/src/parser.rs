//! BibTeX parser built on nom
//!
//! The grammar is permissive in the ways real .bib files demand: nested
//! braces, quoted values, `#` concatenation, @string substitution and `%`
//! line comments. A malformed entry is recorded as a [`ParseIssue`] and the
//! parser resynchronizes at the next `@`, so a single broken record does not
//! take the rest of the file with it.

use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::map,
    IResult,
};
use std::collections::HashMap;

use crate::entry::{Entry, EntryType};

/// A recoverable problem found while parsing, with its source location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    pub line: u32,
    pub column: u32,
    pub message: String,
}

/// Everything extracted from a BibTeX source
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOutcome {
    pub entries: Vec<Entry>,
    pub preambles: Vec<String>,
    pub strings: HashMap<String, String>,
    pub issues: Vec<ParseIssue>,
}

/// Unrecoverable parse failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid BibTeX: {message}")]
    InvalidSyntax { message: String },
    #[error("input contains no BibTeX entry")]
    NoEntry,
}

/// Parse a BibTeX source string.
///
/// Returns `Err` only when the input contained entries and every one of
/// them failed; partial damage surfaces as [`ParseOutcome::issues`].
pub fn parse(input: &str) -> Result<ParseOutcome, ParseError> {
    let outcome = scan(input);
    if outcome.entries.is_empty() && !outcome.issues.is_empty() {
        let first = &outcome.issues[0];
        return Err(ParseError::InvalidSyntax {
            message: format!("{} (line {})", first.message, first.line),
        });
    }
    Ok(outcome)
}

/// Parse a source expected to hold exactly one entry and return it
pub fn parse_entry(input: &str) -> Result<Entry, ParseError> {
    parse(input)?
        .entries
        .into_iter()
        .next()
        .ok_or(ParseError::NoEntry)
}

fn scan(input: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();
    let mut remaining = input;
    let mut line = 1u32;

    while !remaining.is_empty() {
        let (rest, newlines) = skip_trivia(remaining);
        line += newlines;
        remaining = rest;

        if remaining.is_empty() {
            break;
        }

        if !remaining.starts_with('@') {
            // Stray text between entries; resynchronize at the next @
            match remaining.find('@') {
                Some(pos) => {
                    line += count_newlines(&remaining[..pos]);
                    remaining = &remaining[pos..];
                }
                None => break,
            }
            continue;
        }

        match parse_directive(remaining, &outcome.strings) {
            Ok((rest, directive)) => {
                let consumed = &remaining[..remaining.len() - rest.len()];
                match directive {
                    Directive::Entry(mut entry) => {
                        entry.raw = Some(consumed.trim().to_string());
                        outcome.entries.push(entry);
                    }
                    Directive::StringDef(name, value) => {
                        outcome.strings.insert(name, value);
                    }
                    Directive::Preamble(text) => outcome.preambles.push(text),
                    Directive::Comment => {}
                }
                line += count_newlines(consumed);
                remaining = rest;
            }
            Err(_) => {
                outcome.issues.push(ParseIssue {
                    line,
                    column: 1,
                    message: "malformed entry".to_string(),
                });
                // Resynchronize at the next @ past the broken one
                match remaining[1..].find('@') {
                    Some(pos) => {
                        line += count_newlines(&remaining[..pos + 1]);
                        remaining = &remaining[pos + 1..];
                    }
                    None => break,
                }
            }
        }
    }

    outcome
}

enum Directive {
    Entry(Entry),
    StringDef(String, String),
    Preamble(String),
    Comment,
}

fn count_newlines(s: &str) -> u32 {
    s.matches('\n').count() as u32
}

/// Skip whitespace and `%` line comments, returning the newline count
fn skip_trivia(input: &str) -> (&str, u32) {
    let bytes = input.as_bytes();
    let mut pos = 0;
    let mut newlines = 0u32;

    while pos < bytes.len() {
        match bytes[pos] {
            b'\n' => {
                newlines += 1;
                pos += 1;
            }
            c if c.is_ascii_whitespace() => pos += 1,
            b'%' => {
                while pos < bytes.len() && bytes[pos] != b'\n' {
                    pos += 1;
                }
            }
            _ => break,
        }
    }

    (&input[pos..], newlines)
}

/// Parse one `@...` directive: an entry, @string, @preamble or @comment
fn parse_directive<'a>(
    input: &'a str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, Directive> {
    let (rest, _) = char('@')(input)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, keyword) = take_while1(|c: char| c.is_ascii_alphanumeric())(rest)?;

    match keyword.to_lowercase().as_str() {
        "string" => {
            let (rest, (name, value)) = string_definition(rest, strings)?;
            Ok((rest, Directive::StringDef(name, value)))
        }
        "preamble" => {
            let (rest, text) = preamble_body(rest, strings)?;
            Ok((rest, Directive::Preamble(text)))
        }
        "comment" => {
            let (rest, _) = comment_body(rest)?;
            Ok((rest, Directive::Comment))
        }
        _ => {
            let (rest, entry) = entry_body(rest, keyword, strings)?;
            Ok((rest, Directive::Entry(entry)))
        }
    }
}

fn string_definition<'a>(
    input: &'a str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, (String, String)> {
    let (rest, _) = multispace0(input)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, name) = field_key(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('=')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, value) = field_value(rest, strings)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('}')(rest)?;

    Ok((rest, (name.to_string(), value)))
}

fn preamble_body<'a>(
    input: &'a str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, String> {
    let (rest, _) = multispace0(input)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, value) = field_value(rest, strings)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('}')(rest)?;

    Ok((rest, value))
}

/// Skip a @comment body: a braced block, or everything to end of line
fn comment_body(input: &str) -> IResult<&str, ()> {
    let (rest, _) = multispace0(input)?;
    if rest.starts_with('{') {
        let (rest, _) = read_braced(rest)?;
        Ok((rest, ()))
    } else {
        let pos = rest.find('\n').unwrap_or(rest.len());
        Ok((&rest[pos..], ()))
    }
}

fn entry_body<'a>(
    input: &'a str,
    type_name: &str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, Entry> {
    let (rest, _) = multispace0(input)?;
    let (rest, _) = char('{')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, cite_key) =
        take_while1(|c: char| c.is_ascii_alphanumeric() || "_-:./+".contains(c))(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char(',')(rest)?;

    let (rest, fields) = entry_fields(rest, strings)?;

    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('}')(rest)?;

    let mut entry = Entry::new(cite_key, EntryType::from_str(type_name));
    for (key, value) in fields {
        entry.push_field(key, value);
    }

    Ok((rest, entry))
}

fn entry_fields<'a>(
    input: &'a str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, Vec<(String, String)>> {
    let mut fields = Vec::new();
    let mut remaining = input;

    loop {
        let (rest, _) = multispace0(remaining)?;

        if rest.starts_with('}') {
            return Ok((rest, fields));
        }

        match single_field(rest, strings) {
            Ok((rest, pair)) => {
                fields.push(pair);
                let (rest, _) = multispace0(rest)?;
                remaining = rest.strip_prefix(',').unwrap_or(rest);
            }
            // No more parseable fields; let the caller close the entry
            Err(_) => return Ok((remaining, fields)),
        }
    }
}

fn single_field<'a>(
    input: &'a str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, (String, String)> {
    let (rest, _) = multispace0(input)?;
    let (rest, key) = field_key(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = char('=')(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, value) = field_value(rest, strings)?;

    Ok((rest, (key.to_string(), value)))
}

fn field_key(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-')(input)
}

/// A field value: braced, quoted, bare number, or @string reference,
/// possibly chained with `#`
fn field_value<'a>(
    input: &'a str,
    strings: &HashMap<String, String>,
) -> IResult<&'a str, String> {
    let mut value = String::new();
    let mut remaining = input;

    loop {
        let (rest, _) = multispace0(remaining)?;

        let (rest, part) = alt((
            braced_value,
            quoted_value,
            map(take_while1(|c: char| c.is_ascii_digit()), str::to_string),
            map(field_key, |name| {
                // Undefined references keep their literal name
                strings.get(name).cloned().unwrap_or_else(|| name.to_string())
            }),
        ))(rest)?;

        value.push_str(&part);

        let (rest, _) = multispace0(rest)?;
        match rest.strip_prefix('#') {
            Some(stripped) => remaining = stripped,
            None => return Ok((rest, value)),
        }
    }
}

fn braced_value(input: &str) -> IResult<&str, String> {
    let (rest, inner) = read_braced(input)?;
    Ok((rest, inner.to_string()))
}

/// Read a `{...}` block with nested braces, returning the inner text
fn read_braced(input: &str) -> IResult<&str, &str> {
    if !input.starts_with('{') {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        )));
    }

    let bytes = input.as_bytes();
    let mut depth = 0i32;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[pos + 1..], &input[1..pos]));
                }
            }
            // Escaped character, e.g. \{ inside a LaTeX command
            b'\\' => pos += 1,
            _ => {}
        }
        pos += 1;
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

/// Read a `"..."` value; braces suspend the closing quote
fn quoted_value(input: &str) -> IResult<&str, String> {
    if !input.starts_with('"') {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Char,
        )));
    }

    let bytes = input.as_bytes();
    let mut value = String::new();
    let mut depth = 0i32;
    let mut pos = 1;

    while pos < bytes.len() {
        match bytes[pos] {
            b'"' if depth == 0 => return Ok((&input[pos + 1..], value)),
            b'{' => {
                depth += 1;
                value.push('{');
            }
            b'}' => {
                depth -= 1;
                value.push('}');
            }
            b'\\' if pos + 1 < bytes.len() => {
                value.push('\\');
                pos += 1;
                value.push(bytes[pos] as char);
            }
            c => value.push(c as char),
        }
        pos += 1;
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}
