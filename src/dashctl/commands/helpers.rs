use crate::error::{DashError, Result};
use serde_json::Value;
use std::io::Read;

/// Graph definitions from the inline argument, or all of `stdin` if there is none.
///
/// Stdin is read as bytes; anything that is not UTF-8 JSON is malformed input.
pub fn read_graphs<R: Read>(inline: Option<String>, mut stdin: R) -> Result<Value> {
    match inline {
        Some(text) => parse_graphs(text.as_bytes()),
        None => {
            let mut buffer = Vec::new();
            stdin.read_to_end(&mut buffer)?;
            parse_graphs(&buffer)
        }
    }
}

pub fn parse_graphs(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes)
        .map_err(|e| DashError::MalformedData(format!("graphs are not valid JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inline_argument_wins_over_stdin() {
        let graphs = read_graphs(Some("[1]".into()), "[2]".as_bytes()).unwrap();
        assert_eq!(graphs, json!([1]));
    }

    #[test]
    fn reads_all_of_stdin() {
        let stdin = "[\n  {\"metric\": \"cpu\"}\n]\n".as_bytes();
        let graphs = read_graphs(None, stdin).unwrap();
        assert_eq!(graphs, json!([{"metric": "cpu"}]));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_graphs(b"not json").unwrap_err();
        assert!(matches!(err, DashError::MalformedData(_)));
    }

    #[test]
    fn non_utf8_stdin_is_malformed() {
        let err = read_graphs(None, &[0xff, 0xfe][..]).unwrap_err();
        assert!(matches!(err, DashError::MalformedData(_)));
    }
}
