// Prompt catalog for the Readless operations.
// Every prompt is a directive, a blank line, a `---` separator, then the caller's content verbatim.

use std::borrow::Cow;

use tracing::info;

use crate::readless::operation::{Operation, RewriteStyle};

/// Line placed between the directive and the caller's content.
pub const CONTENT_SEPARATOR: &str = "---";

pub const SUMMARIZE_DIRECTIVE: &str = "\
Summarize the following text in 2–4 concise sentences.
Keep only essential facts, results, and implications.
Remove filler, anecdotes, and subjective language.";

pub const SUGGEST_DIRECTIVE: &str = "\
Based on the material, list closely related topics and targeted further reading.
Focus on advanced areas and canonical sources. Avoid generic, low-value items.
Output as a short bulleted list.";

pub const BULLETS_DIRECTIVE: &str = "\
Produce 5–8 crisp bullets capturing the core ideas and actions.
Each bullet <= 20 words. No preface, no summary line.";

pub const OUTLINE_DIRECTIVE: &str = "\
Create a hierarchical outline with numbered headings and subpoints (max depth 2).
Use compact phrasing. No paragraphs.";

pub const EXTRACTIVE_DIRECTIVE: &str = "\
Return the 3–5 most informative verbatim quotes (<=120 characters each) from the text.
Do not paraphrase. No commentary. One quote per line.";

pub const KEYWORDS_DIRECTIVE: &str = "\
Return 10–15 comma-separated keywords that best index this text.
No sentences, no numbering, no hashtags.";

pub const TLDR_DIRECTIVE: &str = "\
Write a single-sentence TL;DR (<=25 words). No preface, no label.";

pub const TITLE_DIRECTIVE: &str = "\
Propose 3 ultra-concise titles (<=8 words each), line-separated.
No subtitles, no numbering.";

pub const QA_DIRECTIVE: &str = "\
Generate 5 Q&A pairs derived strictly from the text.
Format:
Q: ...
A: ...
Keep each answer <= 30 words.";

pub const EXPAND_DIRECTIVE: &str = "\
Expand the text into 1–2 tight paragraphs.
Preserve meaning, remove redundancy, improve flow. No new facts.";

pub const SHORTEN_DIRECTIVE: &str = "\
Shorten the text by about 50% while preserving all critical information.
Keep terminology intact. Output only the shortened version.";

pub const DETECT_LANGUAGE_DIRECTIVE: &str = "\
Read the text and output only:
<Language Name> (<ISO-639-1 code>)
Nothing else.";

pub const REWRITE_FORMAL_DIRECTIVE: &str = "\
Rewrite the text in a formal, objective, concise tone suitable for academic or official documents.
Remove slang, hedging, and verbosity. Output only the rewritten text.";

pub const REWRITE_SIMPLE_DIRECTIVE: &str = "\
Rewrite the text for a grade-6 reading level.
Use short sentences, common words, and direct structure. Output only the rewritten text.";

/// Translation directive. `target` is passed through unvalidated and may be empty.
fn translate_directive(target: &str) -> String {
    format!(
        "Translate the text into the target language exactly, preserving meaning and names.\n\
         Output only the translation; no preface, no notes.\n\
         Target language: {target}"
    )
}

impl Operation {
    /// The instruction block for this operation, without the content.
    pub fn directive(&self) -> Cow<'static, str> {
        let directive = match self {
            Operation::Summarize => SUMMARIZE_DIRECTIVE,
            Operation::Suggest => SUGGEST_DIRECTIVE,
            Operation::Bullets => BULLETS_DIRECTIVE,
            Operation::Outline => OUTLINE_DIRECTIVE,
            Operation::Extractive => EXTRACTIVE_DIRECTIVE,
            Operation::Keywords => KEYWORDS_DIRECTIVE,
            Operation::Tldr => TLDR_DIRECTIVE,
            Operation::Title => TITLE_DIRECTIVE,
            Operation::Qa => QA_DIRECTIVE,
            Operation::Expand => EXPAND_DIRECTIVE,
            Operation::Shorten => SHORTEN_DIRECTIVE,
            Operation::DetectLanguage => DETECT_LANGUAGE_DIRECTIVE,
            Operation::Rewrite(RewriteStyle::Formal) => REWRITE_FORMAL_DIRECTIVE,
            Operation::Rewrite(RewriteStyle::Simple) => REWRITE_SIMPLE_DIRECTIVE,
            Operation::Translate(target) => return Cow::Owned(translate_directive(target)),
        };
        Cow::Borrowed(directive)
    }

    /// Full prompt for this operation. `content` is appended as-is: no escaping, no truncation.
    pub fn prompt(&self, content: &str) -> String {
        format!(
            "{directive}\n\n{CONTENT_SEPARATOR}\n{content}\n",
            directive = self.directive()
        )
    }
}

/// Resolves `operation` and builds its prompt around `content`.
pub fn build_prompt(operation: Option<&str>, content: &str) -> String {
    let operation = Operation::resolve(operation);
    info!(
        "Building prompt: operation={} content_bytes={}",
        operation,
        content.len()
    );
    operation.prompt(content)
}
