//! Inbound framing — the two-phase line/raw drain.
//!
//! The controller frames responses with `\n` when it feels like it and
//! sends bare chunks otherwise. Each read cycle is drained in two phases:
//! every complete line first, then whatever undelimited bytes remain as one
//! raw chunk. A chunk that straddles read cycles is therefore concatenated
//! with whatever follows it inside the same cycle — inherited protocol
//! behavior, kept as-is.

/// Split one read cycle's bytes into ordered messages.
///
/// Complete `\n`-terminated segments come first, each UTF-8 decoded and
/// trimmed (dropping `\r` and surrounding whitespace); empty segments are
/// skipped. A non-empty undelimited tail is appended once as a raw chunk.
pub(crate) fn drain(chunk: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(chunk);
    let mut messages = Vec::new();

    let mut rest = text.as_ref();
    while let Some(pos) = rest.find('\n') {
        let line = rest[..pos].trim();
        if !line.is_empty() {
            messages.push(line.to_string());
        }
        rest = &rest[pos + 1..];
    }

    let tail = rest.trim();
    if !tail.is_empty() {
        messages.push(tail.to_string());
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_emit_each_line_in_order() {
        assert_eq!(drain(b"a\nb\nc\n"), vec!["a", "b", "c"]);
    }

    #[test]
    fn should_emit_undelimited_tail_as_raw_chunk() {
        assert_eq!(drain(b"a\nb\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn should_emit_line_then_raw_tail() {
        assert_eq!(drain(b"a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn should_trim_carriage_returns_and_whitespace() {
        assert_eq!(drain(b"  ok\r\n status=open \r\n"), vec!["ok", "status=open"]);
    }

    #[test]
    fn should_skip_empty_lines() {
        assert_eq!(drain(b"\n\r\n  \na\n"), vec!["a"]);
    }

    #[test]
    fn should_emit_nothing_for_blank_chunk() {
        assert!(drain(b"").is_empty());
        assert!(drain(b"   \r\n").is_empty());
    }

    #[test]
    fn should_emit_bare_chunk_without_terminator() {
        assert_eq!(drain(b"window is open"), vec!["window is open"]);
    }

    #[test]
    fn should_replace_invalid_utf8() {
        let messages = drain(b"ok\n\xff\xfe");
        assert_eq!(messages[0], "ok");
        assert_eq!(messages.len(), 2);
    }
}
