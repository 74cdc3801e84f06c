//! Shape-error recovery for structured answers
//!
//! Prompts that ask for JSON get prose, code fences, or half-valid objects
//! back often enough that a failed parse must not fail the feature. The
//! helpers here pull a JSON object out of whatever came back and fall back
//! to a stand-in value when that is impossible.

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

lazy_static! {
    // first `{` to last `}`, across newlines, so code fences fall away
    static ref JSON_BLOCK: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
}

/// The widest substring that looks like a JSON object, if any.
pub fn extract_json_block(content: &str) -> Option<&str> {
    JSON_BLOCK.find(content).map(|m| m.as_str())
}

/// Parse the JSON object embedded in `content`, or hand back `fallback`.
pub fn json_or_fallback<T: DeserializeOwned>(content: &str, fallback: T) -> T {
    let Some(block) = extract_json_block(content) else {
        warn!("no JSON object in model answer, using fallback");
        return fallback;
    };
    match serde_json::from_str(block) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "could not parse model answer, using fallback");
            fallback
        }
    }
}

/// Per-source analysis the matrix asks the model for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceAnalysis {
    pub summary: String,
    pub strengths: Vec<String>,
    pub limitations: Vec<String>,
    pub quality_score: u8,
    pub thematic_category: String,
    pub research_gaps: Vec<String>,
}

impl SourceAnalysis {
    /// Stand-in analysis built from the raw answer text, used when the
    /// model did not produce the requested JSON shape.
    pub fn fallback(content: &str) -> Self {
        let mut summary: String = content.chars().take(200).collect();
        summary.push_str("...");
        Self {
            summary,
            strengths: vec!["AI analysis in progress".to_string()],
            limitations: vec!["AI analysis in progress".to_string()],
            quality_score: 5,
            thematic_category: "Analysis pending".to_string(),
            research_gaps: vec!["AI analysis pending".to_string()],
        }
    }
}

/// Decode a model answer into a [`SourceAnalysis`], best effort.
pub fn parse_analysis(content: &str) -> SourceAnalysis {
    json_or_fallback(content, SourceAnalysis::fallback(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FENCED_ANSWER: &str = r#"Here is the analysis you asked for:

```json
{
  "summary": "A landmark study of perspective transformation in adult learners.",
  "strengths": ["Large sample", "Clear framework"],
  "limitations": ["Single institution"],
  "qualityScore": 8,
  "thematicCategory": "Empirical Study",
  "researchGaps": ["Longitudinal follow-up"]
}
```

Let me know if you need anything else."#;

    #[test]
    fn extracts_an_object_from_a_code_fence() {
        let block = extract_json_block(FENCED_ANSWER).unwrap();
        assert!(block.starts_with('{'));
        assert!(block.ends_with('}'));
    }

    #[test]
    fn prose_without_an_object_yields_none() {
        assert!(extract_json_block("I could not analyze this paper.").is_none());
    }

    #[test]
    fn fenced_answer_parses_to_the_analysis() {
        let analysis = parse_analysis(FENCED_ANSWER);
        assert_eq!(analysis.quality_score, 8);
        assert_eq!(analysis.thematic_category, "Empirical Study");
        assert_eq!(analysis.strengths.len(), 2);
        assert_eq!(analysis.research_gaps, vec!["Longitudinal follow-up"]);
    }

    #[test]
    fn prose_answer_falls_back_without_failing() {
        let content = "This paper examines adult learning through interviews.";
        let analysis = parse_analysis(content);
        assert!(analysis.summary.starts_with("This paper examines"));
        assert!(analysis.summary.ends_with("..."));
        assert_eq!(analysis.quality_score, 5);
        assert_eq!(analysis.thematic_category, "Analysis pending");
        assert_eq!(analysis.strengths, vec!["AI analysis in progress"]);
        assert_eq!(analysis.research_gaps, vec!["AI analysis pending"]);
    }

    #[test]
    fn wrong_shape_inside_the_object_falls_back() {
        // qualityScore arrives as a sentence, so strict decoding fails
        let content = r#"{"summary": "ok", "qualityScore": "eight out of ten"}"#;
        let analysis = parse_analysis(content);
        assert_eq!(analysis.quality_score, 5);
        assert!(analysis.summary.starts_with(r#"{"summary""#));
    }

    #[test]
    fn long_prose_is_clipped_to_two_hundred_chars() {
        let content = "x".repeat(500);
        let analysis = parse_analysis(&content);
        assert_eq!(analysis.summary.chars().count(), 203);
    }

    #[test]
    fn generic_fallback_works_for_other_shapes() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Verdict {
            ok: bool,
        }
        let parsed = json_or_fallback(r#"The verdict: {"ok": true}"#, Verdict { ok: false });
        assert_eq!(parsed, Verdict { ok: true });
        let fallback = json_or_fallback("no object here", Verdict { ok: false });
        assert_eq!(fallback, Verdict { ok: false });
    }
}
