//! Pairwise similarity scoring

use strsim::{jaro_winkler, normalized_levenshtein};

use super::normalization::{normalize_doi, normalize_title, normalized_surname};
use super::DedupConfig;
use crate::reference::Reference;
use crate::text::split_authors;

/// Result of comparing two references
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateMatch {
    /// Overall similarity score (0.0 to 1.0)
    pub score: f64,
    /// Human-readable explanation of the match
    pub reason: String,
}

/// Score how likely two references describe the same work.
///
/// A normalized DOI match is decisive. Otherwise the score accumulates
/// from title similarity, author surname overlap, year proximity and
/// journal similarity, capped at 1.0. Import placeholders (`No Title`
/// and friends) carry no signal and are skipped.
pub fn similarity(a: &Reference, b: &Reference, config: &DedupConfig) -> DuplicateMatch {
    if let (Some(doi_a), Some(doi_b)) = (&a.doi, &b.doi) {
        let (norm_a, norm_b) = (normalize_doi(doi_a), normalize_doi(doi_b));
        if !norm_a.is_empty() && norm_a == norm_b {
            return DuplicateMatch {
                score: 1.0,
                reason: "DOI match".to_string(),
            };
        }
    }

    let mut score: f64 = 0.0;
    let mut reasons = Vec::new();

    if !a.has_placeholder_title() && !b.has_placeholder_title() {
        let title_score = title_similarity(&a.title, &b.title);
        if title_score > 0.9 {
            score += 0.5;
            reasons.push(format!("Title match ({:.0}%)", title_score * 100.0));
        } else if title_score > 0.7 {
            score += 0.3;
            reasons.push(format!("Similar title ({:.0}%)", title_score * 100.0));
        }
    }

    if !a.has_placeholder_author()
        && !b.has_placeholder_author()
        && authors_overlap(&a.author, &b.author)
    {
        score += 0.3;
        reasons.push("Author overlap".to_string());
    }

    if let (Some(year_a), Some(year_b)) = (a.numeric_year(), b.numeric_year()) {
        if year_a == year_b {
            score += 0.1;
            reasons.push("Same year".to_string());
        } else if (year_a - year_b).abs() <= config.year_tolerance {
            // Preprint and published version often sit a year apart
            score += 0.05;
            reasons.push("Years within tolerance".to_string());
        }
    }

    if let (Some(journal_a), Some(journal_b)) = (&a.journal, &b.journal) {
        if journal_similarity(journal_a, journal_b) > 0.8 {
            score += 0.1;
            reasons.push("Same journal".to_string());
        }
    }

    score = score.min(1.0);

    let reason = if reasons.is_empty() {
        "No significant similarity".to_string()
    } else {
        reasons.join("; ")
    };

    DuplicateMatch { score, reason }
}

/// Blend of Jaro-Winkler and normalized Levenshtein over normalized titles
pub(crate) fn title_similarity(a: &str, b: &str) -> f64 {
    let norm_a = normalize_title(a);
    let norm_b = normalize_title(b);

    if norm_a.is_empty() || norm_b.is_empty() {
        return 0.0;
    }

    let jw = jaro_winkler(&norm_a, &norm_b);
    let lev = normalized_levenshtein(&norm_a, &norm_b);

    jw * 0.6 + lev * 0.4
}

/// Whether two author lists share at least one surname
pub(crate) fn authors_overlap(authors_a: &str, authors_b: &str) -> bool {
    let list_a = split_authors(authors_a);
    let list_b = split_authors(authors_b);

    if list_a.is_empty() || list_b.is_empty() {
        return false;
    }

    let surnames_a: Vec<String> = list_a.iter().map(|a| normalized_surname(a)).collect();
    let surnames_b: Vec<String> = list_b.iter().map(|a| normalized_surname(a)).collect();

    for s_a in &surnames_a {
        for s_b in &surnames_b {
            if s_a == s_b || jaro_winkler(s_a, s_b) > 0.9 {
                return true;
            }
        }
    }

    false
}

fn journal_similarity(a: &str, b: &str) -> f64 {
    let norm_a = normalize_journal(a);
    let norm_b = normalize_journal(b);

    if norm_a.is_empty() || norm_b.is_empty() {
        return 0.0;
    }

    jaro_winkler(&norm_a, &norm_b)
}

/// Expand common journal abbreviations before comparing
fn normalize_journal(journal: &str) -> String {
    let mut result = journal.to_lowercase();
    result = result.replace('.', " ");
    result = result.replace(',', " ");
    result = crate::text::collapse_whitespace(&result);
    result.push(' ');

    let expansions = [
        ("j ", "journal "),
        ("proc ", "proceedings "),
        ("trans ", "transactions "),
        ("int ", "international "),
        ("natl ", "national "),
        ("educ ", "education "),
        ("psychol ", "psychology "),
        ("sci ", "science "),
        ("rev ", "review "),
        ("res ", "research "),
        ("q ", "quarterly "),
        ("lett ", "letters "),
    ];

    for (abbrev, full) in expansions {
        result = result.replace(abbrev, full);
    }

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(title: &str, author: &str, year: &str) -> Reference {
        let mut r = Reference::new("key", "article", title);
        r.author = author.to_string();
        r.year = year.to_string();
        r
    }

    #[test]
    fn doi_match_is_decisive() {
        let mut a = reference("Paper A", "Smith, Jane", "2020");
        a.doi = Some("10.1037/edu0000098".to_string());
        let mut b = reference("Completely Different Title", "Jones, Tom", "1999");
        b.doi = Some("https://doi.org/10.1037/EDU0000098".to_string());

        let result = similarity(&a, &b, &DedupConfig::default());
        assert_eq!(result.score, 1.0);
        assert!(result.reason.contains("DOI"));
    }

    #[test]
    fn same_title_author_year_scores_high() {
        let a = reference(
            "Self-Efficacy in Doctoral Writing",
            "Bandura, Albert",
            "1997",
        );
        let b = reference(
            "Self-Efficacy in Doctoral Writing",
            "A. Bandura",
            "1997",
        );

        let result = similarity(&a, &b, &DedupConfig::default());
        assert!(result.score >= 0.85, "got {}", result.score);
    }

    #[test]
    fn unrelated_references_score_low() {
        let a = reference("Qualitative Coding Handbook", "Saldana, Johnny", "2015");
        let b = reference("Statistical Power Analysis", "Cohen, Jacob", "1988");

        let result = similarity(&a, &b, &DedupConfig::default());
        assert!(result.score < 0.3, "got {}", result.score);
        assert_eq!(result.reason, "No significant similarity");
    }

    #[test]
    fn placeholders_carry_no_signal() {
        let a = reference("No Title", "No Author", "No Year");
        let b = reference("No Title", "No Author", "No Year");

        let result = similarity(&a, &b, &DedupConfig::default());
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn adjacent_years_earn_partial_bonus() {
        let a = reference("Communities of Practice", "Wenger, Etienne", "1998");
        let b = reference("Communities of Practice", "Wenger, Etienne", "1999");

        let result = similarity(&a, &b, &DedupConfig::default());
        assert!(result.reason.contains("Years within tolerance"));
    }

    #[test]
    fn title_similarity_tolerates_articles_and_case() {
        assert!(title_similarity("The Action Research Planner", "Action Research Planner") > 0.95);
        assert!(title_similarity("Case Study Research", "case study research") > 0.99);
        assert!(title_similarity("Completely Different", "Case Study Research") < 0.5);
    }

    #[test]
    fn author_overlap_handles_order_and_initials() {
        assert!(authors_overlap("John Dewey", "Dewey, John"));
        assert!(authors_overlap("Dewey, J. and Bruner, J.", "Jerome Bruner"));
        assert!(!authors_overlap("John Dewey", "Maria Montessori"));
        assert!(!authors_overlap("", "John Dewey"));
    }

    #[test]
    fn journal_abbreviations_expand() {
        assert!(journal_similarity("J. Educ. Psychol.", "Journal of Education Psychology") > 0.8);
        assert!(journal_similarity("Rev. Res. Educ.", "Review of Research in Education") > 0.8);
    }

    #[test]
    fn symmetric_scores() {
        let a = reference("Mixed Methods Research", "Creswell, John", "2014");
        let b = reference("Mixed Method Research", "Creswell, J.", "2014");
        let config = DedupConfig::default();
        assert_eq!(similarity(&a, &b, &config).score, similarity(&b, &a, &config).score);
    }
}
