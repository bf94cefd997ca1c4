//! Lexicon-based polarity scorer. Implements `PolarityScorer`.
//!
//! Word-level polarity lookup with negation and intensifier handling,
//! averaged over all lexicon hits in the text.

use crate::domain::DomainError;
use crate::ports::PolarityScorer;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// A negated assessment is flipped and damped by this factor.
const NEGATION_FACTOR: f64 = -0.5;

/// Characters that close a clause; modifiers do not carry across them.
const CLAUSE_BREAKS: [char; 6] = ['.', ',', ';', ':', '!', '?'];

/// Custom lexicon file. All sections are optional and merged over the built-in lexicon.
///
/// ```json
/// { "words": {"meh": -0.1}, "intensifiers": {"super": 1.5}, "negations": ["nah"] }
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct LexiconFile {
    #[serde(default)]
    pub words: HashMap<String, f64>,
    #[serde(default)]
    pub intensifiers: HashMap<String, f64>,
    #[serde(default)]
    pub negations: Vec<String>,
}

/// Lexicon polarity scorer.
pub struct LexiconScorer {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

#[derive(Debug, PartialEq)]
enum Token {
    Word(String),
    Break,
}

impl LexiconScorer {
    /// Scorer with the built-in English lexicon.
    pub fn new() -> Self {
        Self {
            words: Self::build_word_lexicon(),
            intensifiers: Self::build_intensifier_lexicon(),
            negations: Self::build_negation_lexicon(),
        }
    }

    /// Built-in lexicon extended/overridden by a JSON lexicon file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::Lexicon(format!("read {}: {}", path.display(), e)))?;
        let file: LexiconFile = serde_json::from_str(&raw)
            .map_err(|e| DomainError::Lexicon(format!("parse {}: {}", path.display(), e)))?;
        let scorer = Self::new().merge(file)?;
        info!(
            path = %path.display(),
            words = scorer.words.len(),
            "custom lexicon loaded"
        );
        Ok(scorer)
    }

    /// Merge a lexicon file into this scorer. Word polarities must lie in [-1, 1].
    pub fn merge(mut self, file: LexiconFile) -> Result<Self, DomainError> {
        for (word, polarity) in file.words {
            if !(-1.0..=1.0).contains(&polarity) {
                return Err(DomainError::Lexicon(format!(
                    "polarity {} for '{}' outside [-1, 1]",
                    polarity, word
                )));
            }
            self.words.insert(word.to_lowercase(), polarity);
        }
        for (word, factor) in file.intensifiers {
            if !factor.is_finite() {
                return Err(DomainError::Lexicon(format!(
                    "intensifier '{}' is not finite",
                    word
                )));
            }
            self.intensifiers.insert(word.to_lowercase(), factor);
        }
        self.negations
            .extend(file.negations.into_iter().map(|w| w.to_lowercase()));
        Ok(self)
    }

    fn tokenize(text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        for ch in text.chars() {
            if ch.is_alphanumeric() || ch == '\'' || ch == '\u{2019}' {
                let ch = if ch == '\u{2019}' { '\'' } else { ch };
                current.extend(ch.to_lowercase());
                continue;
            }
            if !current.is_empty() {
                tokens.push(Token::Word(std::mem::take(&mut current)));
            }
            if CLAUSE_BREAKS.contains(&ch) {
                tokens.push(Token::Break);
            }
        }
        if !current.is_empty() {
            tokens.push(Token::Word(current));
        }
        tokens
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }

    /// Per-hit assessments, in text order.
    fn assessments(&self, text: &str) -> Vec<f64> {
        let mut out = Vec::new();
        let mut negated = false;
        let mut intensity = 1.0;
        for token in Self::tokenize(text) {
            let word = match token {
                Token::Break => {
                    negated = false;
                    intensity = 1.0;
                    continue;
                }
                Token::Word(w) => w,
            };
            let word = word.trim_matches('\'');
            if let Some(&polarity) = self.words.get(word) {
                let mut value = polarity * intensity;
                if negated {
                    value *= NEGATION_FACTOR;
                }
                out.push(value.clamp(-1.0, 1.0));
                negated = false;
                intensity = 1.0;
            } else if self.is_negation(word) {
                negated = true;
            } else if let Some(&factor) = self.intensifiers.get(word) {
                intensity *= factor;
            }
        }
        out
    }

    fn build_word_lexicon() -> HashMap<String, f64> {
        [
            // Positive
            ("love", 0.5), ("loved", 0.7), ("loving", 0.6), ("loves", 0.5),
            ("like", 0.2), ("liked", 0.3), ("likes", 0.2),
            ("good", 0.7), ("great", 0.8), ("best", 1.0), ("better", 0.5),
            ("excellent", 1.0), ("amazing", 0.6), ("awesome", 1.0), ("fantastic", 0.4),
            ("wonderful", 1.0), ("brilliant", 0.9), ("perfect", 1.0), ("beautiful", 0.85),
            ("nice", 0.6), ("cool", 0.35), ("fun", 0.3), ("funny", 0.25),
            ("happy", 0.8), ("glad", 0.5), ("enjoy", 0.4), ("enjoyed", 0.5),
            ("helpful", 0.5), ("useful", 0.3), ("interesting", 0.5), ("informative", 0.5),
            ("clear", 0.1), ("thanks", 0.2), ("thank", 0.2), ("appreciate", 0.4),
            ("favorite", 0.5), ("favourite", 0.5), ("incredible", 0.9), ("impressive", 1.0),
            ("masterpiece", 0.8), ("inspiring", 0.6), ("legend", 0.4), ("recommend", 0.3),
            ("well", 0.1), ("right", 0.3), ("easy", 0.4), ("wow", 0.1),
            // Negative
            ("hate", -0.8), ("hated", -0.9), ("hates", -0.8), ("hating", -0.8),
            ("bad", -0.7), ("worse", -0.4), ("worst", -1.0), ("terrible", -1.0),
            ("awful", -1.0), ("horrible", -1.0), ("poor", -0.4), ("boring", -1.0),
            ("stupid", -0.8), ("dumb", -0.4), ("ugly", -0.7), ("annoying", -0.8),
            ("sad", -0.5), ("angry", -0.5), ("disappointed", -0.75), ("disappointing", -0.6),
            ("useless", -0.5), ("waste", -0.2), ("wrong", -0.5), ("fake", -0.5),
            ("misleading", -0.5), ("clickbait", -0.6), ("cringe", -0.6), ("trash", -0.8),
            ("garbage", -0.8), ("hard", -0.3), ("confusing", -0.4), ("slow", -0.3),
            ("long", -0.05), ("broken", -0.4), ("sucks", -0.7), ("unwatchable", -0.8),
            ("dislike", -0.5), ("disliked", -0.5), ("pathetic", -1.0), ("lame", -0.5),
        ]
        .into_iter()
        .map(|(w, p)| (w.to_string(), p))
        .collect()
    }

    fn build_intensifier_lexicon() -> HashMap<String, f64> {
        [
            ("very", 1.3), ("really", 1.2), ("extremely", 1.5), ("so", 1.2),
            ("super", 1.4), ("incredibly", 1.4), ("absolutely", 1.4), ("totally", 1.3),
            ("too", 1.2), ("quite", 1.1), ("pretty", 1.1), ("most", 1.2),
            ("slightly", 0.5), ("somewhat", 0.7), ("kinda", 0.7), ("barely", 0.4),
        ]
        .into_iter()
        .map(|(w, f)| (w.to_string(), f))
        .collect()
    }

    fn build_negation_lexicon() -> HashSet<String> {
        ["not", "no", "never", "nothing", "neither", "nor", "without", "hardly"]
            .into_iter()
            .map(String::from)
            .collect()
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let assessments = self.assessments(text);
        if assessments.is_empty() {
            return 0.0;
        }
        let mean = assessments.iter().sum::<f64>() / assessments.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}
