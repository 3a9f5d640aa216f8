use serde::Serialize;
use std::io::Write;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    write_json(&mut std::io::stdout().lock(), value)
}

pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// `{number} {name} => {action}`, the line layout for phrases and records.
pub fn phrase_line(number: u64, name: &str, action: &str) -> String {
    format!("{number} {name} => {action}")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Writer whose reader has gone away.
    pub(crate) struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn phrase_line_layout() {
        assert_eq!(
            phrase_line(1580, "Albert Einstein", "laughs HO HO HO"),
            "1580 Albert Einstein => laughs HO HO HO"
        );
        assert_eq!(phrase_line(7, "", ""), "7  => ");
    }

    #[test]
    fn write_json_reports_closed_pipe() {
        let err = write_json(&mut ClosedPipe, &serde_json::json!({ "n": 1 })).unwrap_err();
        let io = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
