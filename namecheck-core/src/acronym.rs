use std::collections::HashSet;
use std::sync::OnceLock;

/// Default acronyms commonly seen in identifiers across the supported
/// languages. All-uppercase tokens in this set keep their casing when an
/// identifier is re-rendered into camelCase or PascalCase.
pub const DEFAULT_ACRONYMS: &[&str] = &[
    "API", "BEM", "CLI", "CPU", "CSS", "CSV", "DB", "DNS", "DOM", "FK", "GPU", "HTML", "HTTP",
    "HTTPS", "ID", "IO", "IP", "JSON", "JWT", "PHP", "PK", "SCSS", "SQL", "SSH", "SSL", "SVG",
    "TCP", "TLS", "UI", "UID", "URI", "URL", "UUID", "UX", "XML", "YAML",
];

static DEFAULT_ACRONYM_SET: OnceLock<AcronymSet> = OnceLock::new();

/// Get the default acronym set (lazily initialized once).
pub fn default_acronym_set() -> &'static AcronymSet {
    DEFAULT_ACRONYM_SET.get_or_init(AcronymSet::default)
}

/// Manages a set of known acronyms used during tokenization and rendering.
#[derive(Debug, Clone)]
pub struct AcronymSet {
    acronyms: HashSet<String>,
    enabled: bool,
}

impl Default for AcronymSet {
    fn default() -> Self {
        let mut set = Self::new();
        for &acronym in DEFAULT_ACRONYMS {
            set.add(acronym);
        }
        set
    }
}

impl AcronymSet {
    /// Create a new empty acronym set
    pub fn new() -> Self {
        Self {
            acronyms: HashSet::new(),
            enabled: true,
        }
    }

    /// Create a disabled acronym set (no acronym detection)
    pub fn disabled() -> Self {
        Self {
            acronyms: HashSet::new(),
            enabled: false,
        }
    }

    /// Create from a specific list of acronyms
    pub fn from_list(acronyms: &[String]) -> Self {
        let mut set = Self::new();
        for acronym in acronyms {
            set.add(acronym);
        }
        set
    }

    /// Add a single acronym to the set
    pub fn add(&mut self, acronym: &str) {
        self.acronyms.insert(acronym.to_uppercase());
    }

    /// Remove a single acronym from the set
    pub fn remove(&mut self, acronym: &str) {
        self.acronyms.remove(&acronym.to_uppercase());
    }

    /// Check if a string is a known acronym (case-insensitive lookup)
    pub fn is_acronym(&self, s: &str) -> bool {
        if !self.enabled {
            return false;
        }
        self.acronyms.contains(&s.to_uppercase())
    }

    /// Check if a token is an all-uppercase known acronym (2+ chars, may
    /// contain digits but must contain at least one letter).
    pub fn is_acronym_token(&self, s: &str) -> bool {
        if !self.enabled || s.len() < 2 {
            return false;
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        {
            return false;
        }
        if !s.chars().any(|c| c.is_ascii_uppercase()) {
            return false;
        }
        self.acronyms.contains(s)
    }

    /// Find the longest known acronym that is a prefix of `run` (an
    /// all-uppercase sequence from the tokenizer). Returns its length.
    pub fn longest_prefix_len(&self, run: &str) -> Option<usize> {
        if !self.enabled {
            return None;
        }
        for end in (2..=run.len()).rev() {
            if self.acronyms.contains(&run[..end]) {
                return Some(end);
            }
        }
        None
    }
}
