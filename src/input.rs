use std::io::{self, BufRead};

/// Reads one line into a freshly allocated buffer. `None` at end of input.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// stray byte only affects the line it appears on.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = Vec::new();

    match input.read_until(b'\n', &mut line)? {
        0 => Ok(None),
        _ => Ok(Some(String::from_utf8_lossy(&line).into_owned())),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn yields_lines_then_none() {
        let mut input = Cursor::new("ls\necho hi | wc -l\n");

        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("ls\n"));
        assert_eq!(
            read_line(&mut input).unwrap().as_deref(),
            Some("echo hi | wc -l\n")
        );
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let mut input = Cursor::new("pwd");

        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("pwd"));
    }

    #[test]
    fn invalid_utf8_is_replaced_and_next_line_still_read() {
        let mut input = Cursor::new(&b"echo \xff\ntrue\n"[..]);

        assert_eq!(
            read_line(&mut input).unwrap().as_deref(),
            Some("echo \u{FFFD}\n")
        );
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("true\n"));
    }
}
