//! Keyword-vote subject classification and prompt selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::llm::prompts;

/// Lecture subject used to pick a normalization prompt.
///
/// Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    /// Data structures and algorithms
    #[serde(rename = "DSA")]
    Dsa,
    /// Mathematics
    Maths,
    /// Databases
    #[serde(rename = "DBMS")]
    Dbms,
    /// Generative AI and machine learning
    #[serde(rename = "GenAI")]
    GenAi,
    /// Web development
    WebDev,
}

/// Label → keyword table. Keywords are matched by substring containment.
const KEYWORDS: &[(Subject, &[&str])] = &[
    (
        Subject::Dsa,
        &[
            "algorithm", "data structure", "array", "string", "linked list", "stack",
            "queue", "heap", "hash", "hashmap", "tree", "binary tree", "bst", "graph", "dfs",
            "bfs", "recursion", "dynamic programming", "greedy", "two pointer",
            "sliding window", "time complexity", "space complexity", "big o", "optimization",
            "pseudo code", "edge case",
        ],
    ),
    (
        Subject::Maths,
        &[
            "formula", "equation", "expression", "theorem", "proof", "derivative",
            "integral", "limit", "matrix", "determinant", "vector", "eigen", "probability",
            "statistics", "mean", "variance", "standard deviation", "permutation",
            "combination", "logarithm", "exponential",
        ],
    ),
    (
        Subject::Dbms,
        &[
            "database", "dbms", "table", "row", "column", "schema", "primary key",
            "foreign key", "index", "normalization", "sql", "select", "insert", "update",
            "delete", "join", "inner join", "left join", "right join", "transaction", "acid",
            "lock", "deadlock", "mongodb", "collection", "document", "aggregation",
        ],
    ),
    (
        Subject::GenAi,
        &[
            "model", "training", "testing", "validation", "neural network",
            "deep learning", "machine learning", "dataset", "label", "loss", "optimizer",
            "gradient", "backpropagation", "transformer", "attention", "embedding", "llm",
            "prompt", "fine tuning", "inference", "overfitting", "underfitting",
        ],
    ),
    (
        Subject::WebDev,
        &[
            "html", "css", "javascript", "js", "typescript", "ts", "frontend", "backend",
            "full stack", "full-stack", "react", "next js", "next.js", "vue", "angular",
            "component", "props", "state", "hook", "use state", "use effect", "dom",
            "event listener", "event handler", "api", "rest", "rest api", "http", "request",
            "response", "endpoint", "route", "router", "controller", "express", "node",
            "node js", "node.js", "json", "fetch", "axios", "layout", "flexbox", "grid",
            "responsive", "media query", "tailwind", "bootstrap", "css module",
            "styled components",
        ],
    ),
];

impl Subject {
    /// Every subject in tie-break order.
    pub const ALL: [Subject; 5] = [
        Subject::Dsa,
        Subject::Maths,
        Subject::Dbms,
        Subject::GenAi,
        Subject::WebDev,
    ];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Subject::Dsa => "DSA",
            Subject::Maths => "Maths",
            Subject::Dbms => "DBMS",
            Subject::GenAi => "GenAI",
            Subject::WebDev => "WebDev",
        }
    }

    /// Keyword phrases voting for this subject.
    pub fn keywords(&self) -> &'static [&'static str] {
        KEYWORDS
            .iter()
            .find(|(subject, _)| subject == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    /// Subject-specific constraints appended to the base prompt.
    pub fn prompt_rules(&self) -> &'static str {
        match self {
            Subject::Dsa => prompts::DSA_RULES,
            Subject::Maths => prompts::MATHS_RULES,
            Subject::Dbms => prompts::DBMS_RULES,
            Subject::GenAi => prompts::GENAI_RULES,
            Subject::WebDev => prompts::WEBDEV_RULES,
        }
    }

    /// Full normalization system prompt: shared base plus subject rules.
    pub fn system_prompt(&self) -> String {
        format!("{}{}", prompts::NORMALIZATION_BASE, self.prompt_rules())
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .iter()
            .copied()
            .find(|subject| subject.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("unknown subject: {}", s)))
    }
}

/// Count how many of each subject's keywords occur in `text` (case-insensitive).
pub fn subject_scores(text: &str) -> Vec<(Subject, usize)> {
    let text = text.to_lowercase();
    Subject::ALL
        .iter()
        .map(|subject| {
            let hits = subject
                .keywords()
                .iter()
                .filter(|kw| text.contains(*kw))
                .count();
            (*subject, hits)
        })
        .collect()
}

/// Pick the subject with the strictly highest keyword count.
///
/// Ties go to the subject declared first; text with no keyword at all
/// therefore classifies as [`Subject::Dsa`].
pub fn classify_subject(text: &str) -> Subject {
    let mut best = (Subject::ALL[0], 0usize);
    for (subject, score) in subject_scores(text) {
        if score > best.1 {
            best = (subject, score);
        }
    }
    best.0
}
