/// Extensions of generated documentation files that get normalized
pub const NORMALIZED_EXTENSIONS: [&str; 2] = ["html", "js"];

pub fn is_normalized_doc(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| NORMALIZED_EXTENSIONS.contains(&ext))
}

/// Normalize generated documentation text.
///
/// CRLF becomes LF, trailing whitespace is stripped from every line and the
/// result ends with exactly one newline.
pub fn normalize_text(content: &[u8]) -> Vec<u8> {
    let unix = replace_crlf(content);
    let trimmed = trim_end_matching(&unix, |b| b == b'\n');

    let mut out = Vec::with_capacity(trimmed.len() + 1);
    for (i, line) in trimmed.split(|&b| b == b'\n').enumerate() {
        if i > 0 {
            out.push(b'\n');
        }
        out.extend_from_slice(trim_end_matching(line, |b| b.is_ascii_whitespace() || b == 0x0b));
    }
    out.push(b'\n');
    out
}

fn replace_crlf(content: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len());
    let mut iter = content.iter().peekable();
    while let Some(&b) = iter.next() {
        if b == b'\r' && iter.peek() == Some(&&b'\n') {
            continue;
        }
        out.push(b);
    }
    out
}

fn trim_end_matching(bytes: &[u8], pred: impl Fn(u8) -> bool) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| !pred(b))
        .map(|i| i + 1)
        .unwrap_or(0);
    &bytes[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_crlf_converted() {
        assert_eq!(normalize_text(b"Line1\r\nLine2\r\n"), b"Line1\nLine2\n");
    }

    #[test]
    fn test_missing_newline_added() {
        assert_eq!(normalize_text(b"Line1\nLine2"), b"Line1\nLine2\n");
    }

    #[test]
    fn test_trailing_whitespace_and_blank_lines_stripped() {
        assert_eq!(normalize_text(b"a  \n\tb\t\n\n\n"), b"a\n\tb\n");
    }

    #[test]
    fn test_only_html_and_js() {
        assert!(is_normalized_doc(Path::new("docs/index.html")));
        assert!(is_normalized_doc(Path::new("docs/search.js")));
        assert!(!is_normalized_doc(Path::new("docs/notes.md")));
    }
}
