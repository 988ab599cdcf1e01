//! Markdown rendering for section summaries.

use crate::model::Section;
use crate::summarize::SectionSummary;

/// Render summaries as `## title` headings, each followed by its summary.
///
/// Every section is preceded by a blank line except the first.
pub fn to_markdown(summaries: &[SectionSummary]) -> String {
    let mut lines = Vec::with_capacity(summaries.len() * 2);
    for summary in summaries {
        lines.push(format!("\n## {}", summary.title));
        lines.push(summary.summary.clone());
    }

    let out = lines.join("\n");
    out.strip_prefix('\n').map(str::to_string).unwrap_or(out)
}

/// Render full sections, one paragraph per block.
pub fn sections_to_markdown(sections: &[Section]) -> String {
    let mut out = String::new();
    for section in sections {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("## ");
        out.push_str(&section.title);
        out.push('\n');
        for paragraph in &section.paragraphs {
            out.push('\n');
            out.push_str(paragraph);
            out.push('\n');
        }
    }
    out
}
