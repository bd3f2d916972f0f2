// src/util.rs

use anyhow::{Context, Result};
use figment::value::{Dict, Value};
use std::path::Path;

/// Read a dotenv-style file (`KEY=value` lines) into key/value pairs.
///
/// Keys are lower-cased so they line up with the other config formats.
pub fn read_dotenv(path: &Path) -> Result<Vec<(String, String)>> {
    let iter = dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to open env file {:?}", path))?;

    iter.map(|item| {
        item.map(|(key, value)| (key.to_lowercase(), value))
            .with_context(|| format!("Failed to parse env file {:?}", path))
    })
    .collect()
}

/// Lower-case every key of a dictionary, recursively.
pub fn lowercase_keys(dict: Dict) -> Dict {
    dict.into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Dict(tag, inner) => Value::Dict(tag, lowercase_keys(inner)),
                other => other,
            };
            (key.to_lowercase(), value)
        })
        .collect()
}

/// Dotted paths of every leaf value in `dict`, e.g. `log.level`.
pub fn leaf_keys(dict: &Dict) -> Vec<String> {
    let mut out = Vec::new();
    collect_leaf_keys("", dict, &mut out);
    out
}

fn collect_leaf_keys(prefix: &str, dict: &Dict, out: &mut Vec<String>) {
    for (key, value) in dict {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Dict(_, inner) => collect_leaf_keys(&path, inner, out),
            _ => out.push(path),
        }
    }
}

/// Render a config value as the text a user would expect to see.
///
/// Lists are joined with `,`. Tables have no textual form.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(_, s) => Some(s.clone()),
        Value::Char(_, c) => Some(c.to_string()),
        Value::Empty(_, _) => Some(String::new()),
        Value::Bool(..) | Value::Num(..) => serde_json::to_string(value).ok(),
        Value::Array(_, items) => items
            .iter()
            .map(value_text)
            .collect::<Option<Vec<_>>>()
            .map(|parts| parts.join(",")),
        Value::Dict(..) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::providers::{Format, Yaml};
    use figment::Figment;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_dict(raw: &str) -> Dict {
        Figment::from(Yaml::string(raw)).extract().unwrap()
    }

    #[test]
    fn nested_keys_are_lowercased() {
        let dict = lowercase_keys(yaml_dict("Author: Alice\nLog:\n  Level: debug\n"));
        assert!(dict.contains_key("author"));
        match &dict["log"] {
            Value::Dict(_, inner) => assert!(inner.contains_key("level")),
            other => panic!("expected a table, got {:?}", other),
        }
    }

    #[test]
    fn leaf_keys_are_dotted_and_sorted() {
        let dict = yaml_dict("team:\n  name: sec\n  size: 3\nauthor: Alice\n");
        assert_eq!(leaf_keys(&dict), vec!["author", "team.name", "team.size"]);
    }

    #[test]
    fn scalars_keep_their_textual_form() {
        let dict = yaml_dict("flag: true\nretries: 3\nratio: 0.5\nfiles: [a, b]\nname: x\n");
        let text = |k: &str| value_text(&dict[k]);
        assert_eq!(text("flag").as_deref(), Some("true"));
        assert_eq!(text("retries").as_deref(), Some("3"));
        assert_eq!(text("ratio").as_deref(), Some("0.5"));
        assert_eq!(text("files").as_deref(), Some("a,b"));
        assert_eq!(text("name").as_deref(), Some("x"));
    }

    #[test]
    fn tables_have_no_text() {
        let dict = yaml_dict("team:\n  name: sec\n");
        assert_eq!(value_text(&dict["team"]), None);
    }

    #[test]
    fn dotenv_keys_are_lowercased() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "AUTHOR=Alice\n# comment\nTEAM=\"platform sec\"").unwrap();

        let pairs = read_dotenv(file.path()).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("author".to_string(), "Alice".to_string()),
                ("team".to_string(), "platform sec".to_string()),
            ]
        );
    }
}
