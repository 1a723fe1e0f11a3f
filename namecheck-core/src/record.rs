use serde::{Deserialize, Serialize};
use std::fmt;

/// Syntactic role of an identifier. Closed set; the upstream extractor is
/// responsible for mapping its language constructs onto these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstructKind {
    Variable,
    Constant,
    Function,
    Method,
    Class,
    Interface,
    Enum,
    EnumMember,
    Parameter,
    Property,
    PrivateField,
    StaticField,
    Namespace,
    File,
    Directory,
    Table,
    Column,
    Index,
    Constraint,
    CssClass,
    CssId,
    CssCustomProperty,
    BemBlock,
    BemElement,
    BemModifier,
    HtmlDataAttribute,
}

/// Source dialect that produced an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    Css,
    Html,
    Javascript,
    Typescript,
    C,
    Cpp,
    Php,
    Sql,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// Structured location of an identifier, used for rule specificity.
/// Every dimension is optional; an absent dimension never matches a rule
/// that constrains it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Scope {
    /// Containing class, table or namespace, if any
    pub container: Option<String>,
    pub visibility: Option<Visibility>,
    pub is_static: Option<bool>,
    /// BEM block this element/modifier belongs to
    pub bem_block: Option<String>,
}

/// One observed identifier, as produced by the upstream extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierRecord {
    pub text: String,
    pub construct_kind: ConstructKind,
    #[serde(default)]
    pub scope: Scope,
    pub language_tag: LanguageTag,
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // serde's camelCase names double as the display names
        let name = serde_json::to_value(self)
            .ok()
            .and_then(|v| v.as_str().map(String::from))
            .unwrap_or_default();
        f.write_str(&name)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = serde_json::to_value(self)
            .ok()
            .and_then(|v| v.as_str().map(String::from))
            .unwrap_or_default();
        f.write_str(&name)
    }
}
