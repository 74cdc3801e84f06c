//! Author-string utilities shared by dedup and citation formatting
//!
//! Author fields follow the BibTeX convention: names joined with ` and `,
//! each either `Family, Given` or `Given Family`.

/// Split a BibTeX author field into individual names
pub fn split_authors(authors: &str) -> Vec<String> {
    authors
        .split(" and ")
        .flat_map(|s| s.split(';'))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Extract the family name from a single author name
pub fn surname(author: &str) -> String {
    if let Some(comma) = author.find(',') {
        return author[..comma].trim().to_string();
    }
    author
        .split_whitespace()
        .last()
        .unwrap_or(author)
        .trim()
        .to_string()
}

/// Extract the given name(s) from a single author name
pub fn given_names(author: &str) -> String {
    if let Some(comma) = author.find(',') {
        return author[comma + 1..].trim().to_string();
    }
    let mut parts: Vec<&str> = author.split_whitespace().collect();
    if parts.len() < 2 {
        return String::new();
    }
    parts.pop();
    parts.join(" ")
}

/// Initialize given names: `Lev Semyonovich` becomes `L. S.`
pub fn initials(given: &str) -> String {
    given
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .map(|c| format!("{}.", c))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapse runs of whitespace into single spaces
pub fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }

    result.trim().to_string()
}
