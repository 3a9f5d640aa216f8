use crate::output::write_json;
use anyhow::Context;
use dominic_core::mnemonic;
use std::io::Write;

pub fn run(number: u64, json: bool) -> anyhow::Result<()> {
    write_code(&mut std::io::stdout().lock(), number, json)
}

fn write_code<W: Write>(out: &mut W, number: u64, json: bool) -> anyhow::Result<()> {
    let (first, second) = mnemonic::mnemonic_pair(number)
        .with_context(|| format!("{number} has no two-letter code"))?;

    if json {
        write_json(
            out,
            &serde_json::json!({
                "number": number,
                "first": first.to_string(),
                "second": second.to_string(),
            }),
        )?;
    } else {
        writeln!(out, "{number} {first}{second}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::tests::ClosedPipe;

    #[test]
    fn writes_letter_pair() {
        let mut out = Vec::new();
        write_code(&mut out, 15, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "15 AE\n");
    }

    #[test]
    fn closed_stdout_is_an_error() {
        assert!(write_code(&mut ClosedPipe, 15, false).is_err());
        assert!(write_code(&mut ClosedPipe, 15, true).is_err());
    }
}
