//! Deterministic summary and quiz heuristics.

use super::{GenerationError, QuizResult, SummaryResult, TextGenerator};
use crate::text::{sentences, truncate_chars};
use async_trait::async_trait;
use rand::Rng;
use rand::seq::SliceRandom;

/// Maximum summary length in characters.
pub const SUMMARY_MAX_CHARS: usize = 100;
const SUMMARY_SENTENCES: usize = 2;

const TOPIC_MARKER: &str = "Operation Sindoor";
const MARKED_TOPIC: &str = "Counter-terrorism efforts";
const DEFAULT_TOPIC: &str = "Government policy";
const DISTRACTORS: [&str; 3] = ["Economic reforms", "Sports achievements", "Cultural festivals"];

/// Backend that never leaves the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedGenerator;

#[async_trait]
impl TextGenerator for RuleBasedGenerator {
    async fn summarize(&self, text: &str) -> Result<SummaryResult, GenerationError> {
        Ok(SummaryResult {
            summary: extractive_summary(text),
        })
    }

    async fn quiz(&self, text: &str) -> Result<QuizResult, GenerationError> {
        Ok(build_quiz(text, &mut rand::thread_rng()))
    }

    fn name(&self) -> &'static str {
        "rules"
    }
}

/// Join the first two sentences and cap the result at [`SUMMARY_MAX_CHARS`].
///
/// Falls back to the head of the raw text when segmentation produces nothing.
pub fn extractive_summary(text: &str) -> String {
    let joined = sentences(text)
        .take(SUMMARY_SENTENCES)
        .collect::<Vec<_>>()
        .join(" ");
    let summary = truncate_chars(&joined, SUMMARY_MAX_CHARS);
    if summary.is_empty() {
        truncate_chars(text, SUMMARY_MAX_CHARS).to_string()
    } else {
        summary.to_string()
    }
}

/// Build a topic question from the first sentence and shuffle its options with `rng`.
///
/// The option that lands first after shuffling is declared the answer.
pub fn build_quiz<R: Rng + ?Sized>(text: &str, rng: &mut R) -> QuizResult {
    let lead = sentences(text).next().unwrap_or_default();
    let topic = if text.contains(TOPIC_MARKER) {
        MARKED_TOPIC
    } else {
        DEFAULT_TOPIC
    };

    let mut options: Vec<String> = std::iter::once(topic)
        .chain(DISTRACTORS)
        .map(str::to_string)
        .collect();
    options.shuffle(rng);
    let answer = options[0].clone();

    QuizResult {
        question: format!("What is the main theme of the following statement: \"{lead}\"?"),
        options,
        answer,
    }
}
