//! Prompt drafting seam.
//!
//! The authoring workflow can take a finished prompt, a named sample, or a
//! topic handed to a `PromptDrafter`. The drafter is a trait so a hosted
//! text-generation backend can be plugged in; the built-in implementation
//! works offline from a fixed scaffold.

use crate::errors::{AppError, AppResult};

/// Turns a topic or keyword into a candidate prompt body the teacher can
/// still edit before storing. Any failure leaves the authoring workflow in
/// its prior state.
pub trait PromptDrafter {
    fn generate(&self, topic: &str) -> AppResult<String>;
}

/// Built-in sample prompt library, by display name.
const SAMPLES: &[(&str, &str)] = &[
    (
        "explain-encyclopedia",
        "Take this encyclopedia passage and explain it so a third grader can understand it.",
    ),
    (
        "unpack-a-poem",
        "Read this difficult poem and rephrase it in words an elementary school student can follow.",
    ),
    (
        "friendship-award",
        "I want to make an award certificate for my friend. Use a happy memory we share to write the title and the citation.",
    ),
    (
        "continue-the-story",
        "Our group wrote a short story together. Imagine the conversation that comes next and continue it.",
    ),
    (
        "science-concept",
        "Explain today's science concept simply enough for an elementary school student.",
    ),
    (
        "summarize-history",
        "Summarize this complicated event from the history textbook so a fourth grader can understand it.",
    ),
    (
        "song-lyrics",
        "Rephrase these difficult song lyrics in words an elementary school student can understand.",
    ),
    (
        "describe-artwork",
        "Read about this famous artwork and describe it simply for a third grader.",
    ),
    (
        "math-walkthrough",
        "Walk through the solution of this hard math problem step by step, simply enough for an elementary school student.",
    ),
    (
        "ethics-scenario",
        "Break this complicated ethical situation down so an elementary school student can understand it.",
    ),
];

/// Offline drafter: renders a teaching-assistant scaffold around the topic.
pub struct SampleDrafter;

impl SampleDrafter {
    pub fn samples() -> &'static [(&'static str, &'static str)] {
        SAMPLES
    }

    /// Look up one sample prompt by name.
    pub fn sample(name: &str) -> AppResult<&'static str> {
        SAMPLES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, text)| *text)
            .ok_or_else(|| AppError::UnknownSample(name.to_string()))
    }
}

impl PromptDrafter for SampleDrafter {
    fn generate(&self, topic: &str) -> AppResult<String> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(AppError::Draft("no topic given".to_string()));
        }

        Ok(format!(
            "You are a teaching assistant for a classroom activity about {topic}. \
             When a student sends you their work, respond in simple, encouraging \
             language suited to their age, help them take the next step on {topic}, \
             and never do the whole task for them."
        ))
    }
}
