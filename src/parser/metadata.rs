use log::{debug, warn};
use serde_yaml::Value;

use crate::model::{scalar_to_string, Metadata};

const DELIMITER: &str = "---";

/// Strip a `---` delimited front matter block from the head of `text`.
///
/// Returns the remaining body and the parsed mapping. A missing closing
/// delimiter, or a block that is not a key/value mapping, leaves the text
/// untouched and yields an empty mapping.
pub fn extract_front_matter(text: &str) -> (String, Metadata) {
    let lines: Vec<&str> = text
        .split('\n')
        .skip_while(|line| line.trim().is_empty())
        .collect();

    if lines.first().map(|line| line.trim()) != Some(DELIMITER) {
        return (text.to_string(), Metadata::new());
    }

    let Some(end) = lines
        .iter()
        .skip(1)
        .position(|line| line.trim() == DELIMITER)
        .map(|i| i + 1)
    else {
        debug!("Front matter has no closing delimiter, treating it as text");
        return (text.to_string(), Metadata::new());
    };

    let block = lines[1..end].join("\n");
    match parse_block(&block) {
        Some(metadata) => {
            let body = lines[end + 1..].join("\n").trim().to_string();
            debug!("Parsed {} front matter keys", metadata.len());
            (body, metadata)
        }
        None => {
            warn!("Ignoring malformed front matter block");
            (text.to_string(), Metadata::new())
        }
    }
}

fn parse_block(block: &str) -> Option<Metadata> {
    if block.trim().is_empty() {
        return Some(Metadata::new());
    }

    let value: Value = match serde_yaml::from_str(block) {
        Ok(value) => value,
        Err(e) => {
            debug!("Front matter is not valid YAML: {}", e);
            return None;
        }
    };

    match value {
        Value::Null => Some(Metadata::new()),
        Value::Mapping(mapping) => Some(
            mapping
                .into_iter()
                .filter_map(|(key, value)| match scalar_to_string(&key) {
                    Some(key) => Some((key, value)),
                    None => {
                        debug!("Skipping front matter key that is not a scalar: {:?}", key);
                        None
                    }
                })
                .collect(),
        ),
        _ => None,
    }
}
