//! Documentation comment extraction.

/// Normalize a raw comment (delimiters included) into documentation text.
///
/// Every line is trimmed, stripped of a leading run of `*` or `~`
/// decoration, and trimmed again. Empty lines are dropped and the rest are
/// joined with `\r\n`. Returns `None` when nothing remains.
pub fn doc_comment_text(raw: &str) -> Option<String> {
    let body = if let Some(rest) = raw.strip_prefix("//") {
        rest.trim_start_matches('/')
    } else if let Some(rest) = raw.strip_prefix("/*") {
        rest.strip_suffix("*/").unwrap_or(rest)
    } else {
        raw
    };

    let lines: Vec<&str> = body
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(|c| c == '*' || c == '~')
                .trim()
        })
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\r\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_comment() {
        assert_eq!(doc_comment_text("/* C */").as_deref(), Some("C"));
        assert_eq!(doc_comment_text("/** \n * A\n * B\n */").as_deref(), Some("A\r\nB"));
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(doc_comment_text("// note").as_deref(), Some("note"));
        assert_eq!(doc_comment_text("/// triple").as_deref(), Some("triple"));
    }

    #[test]
    fn test_decoration_runs() {
        assert_eq!(
            doc_comment_text("/*~ You can declare\n *~ more text\r\n */").as_deref(),
            Some("You can declare\r\nmore text")
        );
        assert_eq!(doc_comment_text("/*****/"), None);
        assert_eq!(doc_comment_text("//"), None);
    }
}
