//! Line-oriented parsing helpers

use aoc_solver::ParseError;

/// Parses every non-empty line with `parse_line`. The first failure is
/// reported as [`ParseError::InvalidLine`] with its 1-based line number.
pub fn parse_lines<T, F>(input: &str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_idx, line)| {
            parse_line(line.trim_end()).map_err(|e| ParseError::invalid_line(line_idx + 1, format!("{e:#}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_skips_blank_lines_and_numbers_errors() {
        let parsed = parse_lines("1\n\n2\n", |line| Ok(line.parse::<u32>()?)).unwrap();
        assert_eq!(parsed, vec![1, 2]);

        let err = parse_lines("1\n\nx\n", |line| Ok(line.parse::<u32>()?)).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }

    #[test]
    fn test_message_keeps_context_chain() {
        let err = parse_lines("x\n", |line| {
            line.parse::<u32>().with_context(|| format!("invalid number {line:?}"))
        })
        .unwrap_err();
        match err {
            ParseError::InvalidLine { line: 1, message } => {
                assert!(message.starts_with("invalid number \"x\": "), "{message}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
