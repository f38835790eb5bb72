//! Canned response generation.
//!
//! A heuristic, not NLP: a fixed table maps each topic to a keyword set,
//! response templates, and follow-up suggestions. Classification counts
//! case-insensitive keyword hits over the recent transcript; the reply is a
//! uniform-random template from the winning topic with the user's input
//! interpolated verbatim. The table is owned here and nowhere else — the
//! suggestion chips in the UI read it through this module too.

use std::cell::RefCell;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use banter_types::message::Message;

/// How many trailing history messages join the current input for
/// classification.
const CONTEXT_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Technology,
    Business,
    Education,
    Creative,
    ProblemSolving,
    General,
}

struct TopicProfile {
    topic: Topic,
    keywords: &'static [&'static str],
    templates: &'static [&'static str],
    suggestions: &'static [&'static str],
}

/// Marker replaced by the user's input, quoted, in every template.
const INPUT: &str = "{input}";

static TOPICS: &[TopicProfile] = &[
    TopicProfile {
        topic: Topic::Technology,
        keywords: &[
            "ai", "artificial intelligence", "tech", "software", "programming", "code",
            "algorithm", "data", "computer", "digital", "automation", "machine learning",
            "development",
        ],
        templates: &[
            "That's a fascinating technology question about \"{input}\". The field is moving quickly, and there are several technical aspects worth understanding before diving into implementation details.",
            "Your interest in \"{input}\" touches on some important technical concepts. Let me walk you through how this works under the hood and where the technology is heading.",
            "When it comes to \"{input}\", the technical landscape offers both established approaches and emerging innovations. I'll outline the engineering trade-offs involved.",
        ],
        suggestions: &[
            "What are the latest trends in this field?",
            "How can I implement this practically?",
            "What are the potential challenges?",
        ],
    },
    TopicProfile {
        topic: Topic::Business,
        keywords: &[
            "business", "company", "market", "sales", "revenue", "profit", "strategy",
            "management", "productivity", "efficiency", "growth", "customer", "service",
        ],
        templates: &[
            "From a business perspective, \"{input}\" has real strategic implications. Let me break down how it affects operations, growth, and the bottom line.",
            "Your question about \"{input}\" is one many organizations are weighing right now. There are measurable productivity and market considerations worth exploring.",
        ],
        suggestions: &[
            "What are the business implications?",
            "How can this improve productivity?",
            "What's the ROI on this approach?",
        ],
    },
    TopicProfile {
        topic: Topic::Education,
        keywords: &[
            "learn", "study", "education", "school", "university", "course", "tutorial",
            "explain", "understand", "knowledge", "teach", "research", "academic",
        ],
        templates: &[
            "Great learning question! \"{input}\" is best understood by starting with the fundamentals and building up. Let me explain it step by step.",
            "I'd be happy to help you study \"{input}\". Breaking it into smaller concepts makes the whole subject much easier to absorb.",
            "Understanding \"{input}\" thoroughly takes a little structure. Here's a learning path that covers the essential concepts in a sensible order.",
        ],
        suggestions: &[
            "Can you explain this in simpler terms?",
            "What are some real-world examples?",
            "How can I learn more about this?",
        ],
    },
    TopicProfile {
        topic: Topic::Creative,
        keywords: &[
            "creative", "design", "art", "writing", "content", "marketing", "brand", "idea",
            "innovation", "brainstorm", "inspiration", "visual", "story",
        ],
        templates: &[
            "What a creative prompt! \"{input}\" opens up plenty of room for original ideas. Let's brainstorm some directions you could take this.",
            "I love exploring creative territory like \"{input}\". There are several fresh angles that could make the result genuinely engaging.",
        ],
        suggestions: &[
            "Can you help me brainstorm ideas?",
            "What are some creative approaches?",
            "How can I make this more engaging?",
        ],
    },
    TopicProfile {
        topic: Topic::ProblemSolving,
        keywords: &[
            "problem", "issue", "solve", "fix", "error", "bug", "troubleshoot", "help",
            "solution", "resolve", "debug", "challenge", "difficulty",
        ],
        templates: &[
            "Let's troubleshoot \"{input}\" together. A systematic approach usually surfaces the root cause faster than guessing — here's where I'd start.",
            "Solving \"{input}\" is very doable. I'll lay out the most likely causes and a step-by-step path to resolve each one.",
            "When facing \"{input}\", it helps to isolate variables one at a time. Let me suggest a debugging sequence that narrows things down quickly.",
        ],
        suggestions: &[
            "What are alternative solutions?",
            "How can I troubleshoot this?",
            "What steps should I take next?",
        ],
    },
    TopicProfile {
        topic: Topic::General,
        keywords: &[],
        templates: &[
            "That's a fascinating question about \"{input}\". Let me share some insights on this topic — there are several key aspects to consider when approaching this subject.",
            "Thank you for asking about \"{input}\". This is actually a topic with multiple dimensions, and I'd be happy to help you understand the aspects involved.",
            "Your question regarding \"{input}\" opens up some interesting possibilities for discussion. There are several angles we could explore, each offering a unique perspective.",
        ],
        suggestions: &[
            "Can you elaborate on that?",
            "What else should I know?",
            "How does this relate to other topics?",
        ],
    },
];

/// Prompts offered before any conversation exists.
pub static STARTER_SUGGESTIONS: &[&str] = &[
    "Tell me about artificial intelligence",
    "Help me write a professional email",
    "Explain quantum computing simply",
];

fn profile(topic: Topic) -> &'static TopicProfile {
    TOPICS
        .iter()
        .find(|p| p.topic == topic)
        .unwrap_or(&TOPICS[TOPICS.len() - 1])
}

/// Classify the recent transcript plus the current input.
///
/// Deterministic: keyword substring hits are counted case-insensitively;
/// the strictly greatest count wins, ties and zero hits fall back to
/// General.
pub fn classify(input: &str, recent: &[Message]) -> Topic {
    let tail = recent.len().saturating_sub(CONTEXT_WINDOW);
    let mut transcript = recent[tail..]
        .iter()
        .map(|m| m.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    transcript.push(' ');
    transcript.push_str(input);
    let transcript = transcript.to_lowercase();

    let mut best = Topic::General;
    let mut best_count = 0usize;
    let mut tied = false;

    for p in TOPICS.iter().filter(|p| p.topic != Topic::General) {
        let count = p
            .keywords
            .iter()
            .filter(|kw| transcript.contains(*kw))
            .count();
        if count > best_count {
            best = p.topic;
            best_count = count;
            tied = false;
        } else if count == best_count && count > 0 {
            tied = true;
        }
    }

    if best_count == 0 || tied {
        Topic::General
    } else {
        best
    }
}

/// Generates replies. Classification is deterministic; the template pick
/// within the winning topic is uniform-random.
pub struct Responder {
    rng: RefCell<SmallRng>,
}

impl Responder {
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(SmallRng::from_entropy()),
        }
    }

    #[cfg(test)]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: RefCell::new(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Map (input, recent history) to a reply. Callers must not pass
    /// empty or whitespace-only input — that is rejected upstream.
    pub fn generate(&self, input: &str, recent: &[Message]) -> String {
        debug_assert!(!input.trim().is_empty());
        let topic = classify(input, recent);
        let templates = profile(topic).templates;
        let pick = self.rng.borrow_mut().gen_range(0..templates.len());
        templates[pick].replace(INPUT, input)
    }

    /// Follow-up prompts matching the conversation so far.
    /// An empty history gets the fixed starter set.
    pub fn suggestions(&self, recent: &[Message]) -> &'static [&'static str] {
        if recent.is_empty() {
            return STARTER_SUGGESTIONS;
        }
        profile(classify("", recent)).suggestions
    }

    /// Uniform draw from [min, max] — simulated backend latency.
    pub fn jitter_ms(&self, min: u64, max: u64) -> u64 {
        if min >= max {
            return min;
        }
        self.rng.borrow_mut().gen_range(min..=max)
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}
