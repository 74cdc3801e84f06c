//! Text normalization for duplicate comparison

use unicode_normalization::UnicodeNormalization;

use crate::text::collapse_whitespace;

/// Normalize a title for comparison
///
/// Lowercases, strips diacritics and punctuation, collapses whitespace
/// and drops leading articles that never distinguish two works.
pub fn normalize_title(title: &str) -> String {
    let mut result: String = title
        .nfkd()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
        .collect();

    result = result.to_lowercase();
    result = collapse_whitespace(&result);

    let prefixes = ["a ", "an ", "the ", "on ", "re "];
    for prefix in prefixes {
        if let Some(stripped) = result.strip_prefix(prefix) {
            result = stripped.to_string();
        }
    }

    result.trim().to_string()
}

/// Normalize an author name for comparison
///
/// Keeps the comma so `Family, Given` order survives; strips honorifics
/// and generational suffixes.
pub fn normalize_author(author: &str) -> String {
    let mut result: String = author
        .nfkd()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || *c == ',')
        .collect();

    result = result.to_lowercase();

    // Punctuation is already gone, so the dotted forms reduce to these
    let titles = ["dr ", "professor ", "prof ", "mr ", "mrs ", "ms ", "sir "];
    for title in titles {
        result = result.replace(title, "");
    }

    let suffixes = [" jr", " sr", " ii", " iii", " iv", " phd", " md", " esq"];
    for suffix in suffixes {
        if let Some(stripped) = result.strip_suffix(suffix) {
            result = stripped.to_string();
        }
    }

    collapse_whitespace(&result)
}

/// Normalize a DOI for comparison
pub fn normalize_doi(doi: &str) -> String {
    doi.to_lowercase()
        .replace("https://doi.org/", "")
        .replace("http://doi.org/", "")
        .replace("doi:", "")
        .trim()
        .to_string()
}

/// Surname of a normalized author name
pub(crate) fn normalized_surname(author: &str) -> String {
    let normalized = normalize_author(author);

    if let Some(comma) = normalized.find(',') {
        return normalized[..comma].trim().to_string();
    }

    normalized
        .split_whitespace()
        .last()
        .unwrap_or(&normalized)
        .to_string()
}
