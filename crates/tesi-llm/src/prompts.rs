//! Prompt builders for the literature review matrix
//!
//! The texts mirror what the matrix views send: a cross-source synthesis
//! request and a per-source analysis request that asks for JSON (decoded
//! with [`crate::fallback::parse_analysis`]).

use tesi_core::MatrixEntry;

const ANALYSIS_SHAPE: &str = r#"Provide the following analysis in JSON format:
{
  "summary": "Brief summary of the paper",
  "strengths": ["Strength 1", "Strength 2", "Strength 3"],
  "limitations": ["Limitation 1", "Limitation 2", "Limitation 3"],
  "qualityScore": Number between 1-10 (based on methodological rigor, sample size, impact, etc.),
  "thematicCategory": "One of: Quantitative Methods, Qualitative Methods, Literature Review, Theoretical Framework, Empirical Study, Mixed Methods, Case Study, Experimental Design, Survey Research, etc.",
  "researchGaps": ["Gap 1", "Gap 2"]
}"#;

fn joined_or_unspecified(items: &[String]) -> String {
    if items.is_empty() {
        "Not specified".to_string()
    } else {
        items.join(", ")
    }
}

/// Cross-source synthesis prompt over the whole matrix.
pub fn synthesis_prompt(entries: &[MatrixEntry]) -> String {
    let sources: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "Title: {}\n\
                 Author: {}\n\
                 Year: {}\n\
                 Purpose: {}\n\
                 Methods: {}\n\
                 Results: {}\n\
                 Conclusions: {}\n\
                 Framework: {}\n\
                 Research Gaps: {}\n\
                 Strengths: {}\n\
                 Limitations: {}",
                entry.title,
                entry.author,
                entry.year,
                entry.purpose,
                entry.methods,
                entry.results,
                entry.conclusions,
                entry.framework,
                joined_or_unspecified(&entry.research_gaps),
                joined_or_unspecified(&entry.strengths),
                joined_or_unspecified(&entry.limitations),
            )
        })
        .collect();

    format!(
        "Please analyze and synthesize the following literature sources. Provide:\n\
         \n\
         1. Main themes across the literature\n\
         2. Common research gaps identified\n\
         3. Key strengths and limitations of the studies\n\
         4. Methodological approaches used\n\
         5. Potential areas for future research\n\
         6. How these sources connect to each other\n\
         \n\
         Literature Sources:\n\
         {}\n\
         \n\
         Format your response in clear sections with headers.",
        sources.join("\n---\n")
    )
}

/// Per-source analysis prompt asking for the JSON shape of
/// [`crate::fallback::SourceAnalysis`].
pub fn analysis_prompt(entry: &MatrixEntry) -> String {
    let sample_size = entry
        .sample_size
        .map_or_else(|| "Not specified".to_string(), |n| n.to_string());
    format!(
        "Analyze this research paper comprehensively:\n\
         \n\
         Title: {}\n\
         Author: {}\n\
         Year: {}\n\
         Purpose: {}\n\
         Methods: {}\n\
         Results: {}\n\
         Conclusions: {}\n\
         Framework: {}\n\
         Sample Size: {}\n\
         \n\
         {}",
        entry.title,
        entry.author,
        entry.year,
        entry.purpose,
        entry.methods,
        entry.results,
        entry.conclusions,
        entry.framework,
        sample_size,
        ANALYSIS_SHAPE,
    )
}

/// Pull `- ` bullet lines out of a synthesis answer section.
pub fn parse_gap_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("- "))
        .map(|gap| gap.trim().to_string())
        .filter(|gap| !gap.is_empty())
        .collect()
}
