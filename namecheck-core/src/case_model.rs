use crate::acronym::{default_acronym_set, AcronymSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The casing styles the engine can classify and render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Style {
    #[serde(rename = "camelCase")]
    Camel,
    #[serde(rename = "PascalCase")]
    Pascal,
    #[serde(rename = "snake_case")]
    Snake,
    #[serde(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnake,
    #[serde(rename = "kebab-case")]
    Kebab,
    #[serde(rename = "lowerflat")]
    LowerFlat,
}

impl Style {
    /// All styles in canonical order. Classification results and reports
    /// list styles in this order so output is deterministic.
    pub fn all() -> &'static [Self] {
        &[
            Self::Camel,
            Self::Pascal,
            Self::Snake,
            Self::ScreamingSnake,
            Self::Kebab,
            Self::LowerFlat,
        ]
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
            Self::Snake => "snake_case",
            Self::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            Self::Kebab => "kebab-case",
            Self::LowerFlat => "lowerflat",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenModel {
    pub tokens: Vec<Token>,
}

impl TokenModel {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

/// Split an identifier into case-agnostic words using the default acronym set.
pub fn parse_to_tokens(s: &str) -> TokenModel {
    parse_to_tokens_with_acronyms(s, default_acronym_set())
}

/// Split an identifier into case-agnostic words.
///
/// Words split on `_` and `-` separators, on lowercase-to-uppercase
/// transitions and on digit-to-uppercase transitions. Digits stay attached
/// to the preceding word, including at the end of an uppercase run. An
/// uppercase run followed by a lowercase letter keeps a known acronym
/// prefix together and otherwise donates its last letter to the following
/// word (`URLParser` -> `URL`, `Parser`).
pub fn parse_to_tokens_with_acronyms(s: &str, acronyms: &AcronymSet) -> TokenModel {
    let bytes = s.as_bytes();
    let mut tokens = Vec::new();
    let mut current: Vec<u8> = Vec::new();

    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];

        if b == b'_' || b == b'-' {
            if !current.is_empty() {
                tokens.push(Token::new(
                    std::str::from_utf8(&current).unwrap_or_default(),
                ));
                current.clear();
            }
            i += 1;
            continue;
        }

        if !b.is_ascii_alphanumeric() {
            // Non-identifier characters are dropped
            i += 1;
            continue;
        }

        if b.is_ascii_uppercase() {
            // lower->upper and digit->upper boundaries end the pending word
            if current
                .last()
                .is_some_and(|&p| p.is_ascii_lowercase() || p.is_ascii_digit())
            {
                tokens.push(Token::new(
                    std::str::from_utf8(&current).unwrap_or_default(),
                ));
                current.clear();
            }

            // Uppercase run at a word boundary: decide where the run ends
            if current.is_empty() {
                let mut j = i;
                while j < bytes.len() && bytes[j].is_ascii_uppercase() {
                    j += 1;
                }
                if j > i + 1 {
                    let run = &s[i..j];
                    let followed_by_lower = j < bytes.len() && bytes[j].is_ascii_lowercase();
                    if followed_by_lower {
                        // The last letter starts the next word unless a known
                        // acronym covers a longer prefix of the run
                        let upto = run.len() - 1;
                        let split = acronyms.longest_prefix_len(&run[..upto]).unwrap_or(upto);
                        tokens.push(Token::new(&run[..split]));
                        i += split;
                    } else {
                        // Trailing digits belong to the run: `AA0` is one word
                        let mut k = j;
                        while k < bytes.len() && bytes[k].is_ascii_digit() {
                            k += 1;
                        }
                        tokens.push(Token::new(&s[i..k]));
                        i = k;
                    }
                    continue;
                }
            }
        }

        current.push(b);
        i += 1;
    }

    if !current.is_empty() {
        tokens.push(Token::new(
            std::str::from_utf8(&current).unwrap_or_default(),
        ));
    }

    TokenModel::new(tokens)
}

fn is_lower_word(w: &str) -> bool {
    !w.is_empty()
        && w.bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

fn is_upper_word(w: &str) -> bool {
    !w.is_empty()
        && w.bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        && w.bytes().any(|b| b.is_ascii_uppercase())
}

fn is_capitalized_word(w: &str) -> bool {
    let mut bytes = w.bytes();
    bytes.next().is_some_and(|b| b.is_ascii_uppercase())
        && bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
}

/// Determine every casing style the string already matches.
///
/// Returns styles in canonical order; an empty result means the string is
/// unclassifiable (mixed separators, leading digit, stray characters,
/// inconsistent casing). Single lowercase words are deliberately ambiguous
/// and match camelCase, snake_case, kebab-case and lowerflat at once.
pub fn classify(s: &str) -> Vec<Style> {
    classify_with_acronyms(s, default_acronym_set())
}

pub fn classify_with_acronyms(s: &str, acronyms: &AcronymSet) -> Vec<Style> {
    if s.is_empty() {
        return Vec::new();
    }
    if !s
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    {
        return Vec::new();
    }
    if s.bytes().next().is_some_and(|b| b.is_ascii_digit()) {
        return Vec::new();
    }

    let has_underscore = s.contains('_');
    let has_hyphen = s.contains('-');
    if has_underscore && has_hyphen {
        return Vec::new();
    }

    if has_underscore || has_hyphen {
        let sep = if has_underscore { '_' } else { '-' };
        let words: Vec<&str> = s.split(sep).collect();
        // Leading/trailing/doubled separators produce empty words
        if words.iter().any(|w| w.is_empty()) {
            return Vec::new();
        }
        if has_underscore {
            if words.iter().all(|w| is_lower_word(w)) {
                return vec![Style::Snake];
            }
            if words.iter().all(|w| is_upper_word(w)) {
                return vec![Style::ScreamingSnake];
            }
            return Vec::new();
        }
        if words.iter().all(|w| is_lower_word(w)) {
            return vec![Style::Kebab];
        }
        return Vec::new();
    }

    // Single-chunk identifier, no separators
    if is_lower_word(s) {
        return vec![Style::Camel, Style::Snake, Style::Kebab, Style::LowerFlat];
    }

    let model = parse_to_tokens_with_acronyms(s, acronyms);
    let words: Vec<&str> = model.tokens.iter().map(|t| t.text.as_str()).collect();
    if words.is_empty() {
        return Vec::new();
    }

    let hump_ok = |w: &str| is_capitalized_word(w) || is_upper_word(w);
    let mut styles = Vec::new();

    if is_lower_word(words[0]) && words[1..].iter().all(|w| hump_ok(w)) {
        styles.push(Style::Camel);
    }
    if words.iter().all(|w| hump_ok(w)) {
        styles.push(Style::Pascal);
    }
    if s.bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    {
        styles.push(Style::ScreamingSnake);
    }

    styles
}

/// Render a token model into the given style using the default acronym set.
pub fn to_style(model: &TokenModel, style: Style) -> String {
    to_style_with_acronyms(model, style, default_acronym_set())
}

pub fn to_style_with_acronyms(model: &TokenModel, style: Style, acronyms: &AcronymSet) -> String {
    if model.tokens.is_empty() {
        return String::new();
    }

    match style {
        Style::Snake => model
            .tokens
            .iter()
            .map(|t| t.text.to_lowercase())
            .collect::<Vec<_>>()
            .join("_"),

        Style::ScreamingSnake => model
            .tokens
            .iter()
            .map(|t| t.text.to_uppercase())
            .collect::<Vec<_>>()
            .join("_"),

        Style::Kebab => model
            .tokens
            .iter()
            .map(|t| t.text.to_lowercase())
            .collect::<Vec<_>>()
            .join("-"),

        Style::Camel => {
            let mut result = String::new();
            for (i, token) in model.tokens.iter().enumerate() {
                if i == 0 {
                    result.push_str(&token.text.to_lowercase());
                } else if acronyms.is_acronym_token(&token.text) {
                    result.push_str(&token.text);
                } else {
                    result.push_str(&capitalize_first(&token.text));
                }
            }
            result
        },

        Style::Pascal => model
            .tokens
            .iter()
            .map(|t| {
                if acronyms.is_acronym_token(&t.text) {
                    t.text.clone()
                } else {
                    capitalize_first(&t.text)
                }
            })
            .collect::<String>(),

        Style::LowerFlat => model
            .tokens
            .iter()
            .map(|t| t.text.to_lowercase())
            .collect::<String>(),
    }
}

/// Re-render an identifier into the target style.
///
/// If the string already classifies as the target style it is returned
/// unchanged, so `transform(x, s) == x` whenever `classify(x)` contains `s`.
pub fn transform(text: &str, target: Style) -> String {
    transform_with_acronyms(text, target, default_acronym_set())
}

pub fn transform_with_acronyms(text: &str, target: Style, acronyms: &AcronymSet) -> String {
    if classify_with_acronyms(text, acronyms).contains(&target) {
        return text.to_string();
    }
    to_style_with_acronyms(&parse_to_tokens_with_acronyms(text, acronyms), target, acronyms)
}

fn capitalize_first(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    // Short all-caps tokens like IO or DB read as initialisms; keep them
    if s.bytes().all(|b| b.is_ascii_uppercase()) && s.len() <= 2 {
        return s.to_string();
    }

    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}
