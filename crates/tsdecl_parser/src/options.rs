//! Parser configuration, read from JSON the way `tsconfig.json` options are.

use serde::{Deserialize, Serialize};

/// Default nesting limit for types and namespaces.
pub const DEFAULT_MAX_DEPTH: u32 = 200;

/// Options controlling a parse. Unset fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    /// Maximum nesting of types and namespace bodies before the parse fails.
    pub max_depth: Option<u32>,
    /// Attach leading comments to declarations as documentation.
    pub attach_comments: Option<bool>,
}

impl ParserOptions {
    pub fn max_depth(&self) -> u32 {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    pub fn attach_comments(&self) -> bool {
        self.attach_comments.unwrap_or(true)
    }

    /// Fill unset fields from `other`.
    pub fn merged_with(mut self, other: &ParserOptions) -> ParserOptions {
        self.max_depth = self.max_depth.or(other.max_depth);
        self.attach_comments = self.attach_comments.or(other.attach_comments);
        self
    }
}

/// Parse parser options from a JSON string.
pub fn parse_options(content: &str) -> Result<ParserOptions, serde_json::Error> {
    serde_json::from_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParserOptions::default();
        assert_eq!(options.max_depth(), 200);
        assert!(options.attach_comments());
    }

    #[test]
    fn test_parse_camel_case() {
        let options = parse_options(r#"{ "maxDepth": 16, "attachComments": false }"#).unwrap();
        assert_eq!(options.max_depth(), 16);
        assert!(!options.attach_comments());

        let partial = parse_options(r#"{ "maxDepth": 8 }"#).unwrap();
        assert!(partial.attach_comments());
    }

    #[test]
    fn test_merge_prefers_self() {
        let flags = ParserOptions { max_depth: Some(4), attach_comments: None };
        let file = ParserOptions { max_depth: Some(50), attach_comments: Some(false) };
        let merged = flags.merged_with(&file);
        assert_eq!(merged.max_depth, Some(4));
        assert_eq!(merged.attach_comments, Some(false));
    }
}
