// Configuration type definitions

use serde::Deserialize;

/// Debounce before a hover with the modifier held is evaluated
pub const DEFAULT_HOVER_DELAY_MS: u64 = 520;
/// Scores below this never produce a tooltip
pub const DEFAULT_MIN_SCORE: f64 = 26.0;
/// Hovered text shorter than this (after normalization) is ignored
pub const DEFAULT_MIN_TEXT_CHARS: usize = 6;
/// Weight applied when the hovered text is only a fragment of the question
pub const DEFAULT_REVERSE_CONTAINMENT_WEIGHT: f64 = 0.7;
/// Bonus applied to questions ending with `?`
pub const DEFAULT_QUESTION_BONUS: f64 = 1.05;
pub const DEFAULT_OFFSET_X: f64 = 10.0;
pub const DEFAULT_OFFSET_Y: f64 = 14.0;
pub const DEFAULT_PADDING: f64 = 8.0;

/// Modifier key that must be held for hover answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    #[default]
    Alt,
    Ctrl,
    Shift,
}

/// Hover intent section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    pub delay_ms: u64,
    pub modifier: ModifierKey,
}

impl Default for HoverConfig {
    fn default() -> Self {
        HoverConfig {
            delay_ms: DEFAULT_HOVER_DELAY_MS,
            modifier: ModifierKey::Alt,
        }
    }
}

/// Scoring constants for the containment matcher
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub min_score: f64,
    pub min_text_chars: usize,
    pub reverse_containment_weight: f64,
    pub question_bonus: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            min_score: DEFAULT_MIN_SCORE,
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
            reverse_containment_weight: DEFAULT_REVERSE_CONTAINMENT_WEIGHT,
            question_bonus: DEFAULT_QUESTION_BONUS,
        }
    }
}

/// Tooltip placement relative to the pointer, in viewport pixels
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub offset_x: f64,
    pub offset_y: f64,
    pub padding: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig {
            offset_x: DEFAULT_OFFSET_X,
            offset_y: DEFAULT_OFFSET_Y,
            padding: DEFAULT_PADDING,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub hover: HoverConfig,
    pub matcher: MatcherConfig,
    pub tooltip: TooltipConfig,
}
