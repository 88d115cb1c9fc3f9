//! Flattening the merged mapping into KEY=VALUE lines

use anyhow::Result;
use serde_yaml::{Mapping, Value};
use std::io::Write;

const KEY_SEPARATOR: &str = "__";

/// Write one `key=value` line per leaf of `mapping` to `out`, in insertion
/// order, nested keys joined with `__`.
///
/// Lines are emitted as they are produced; anything already written stays
/// visible if a later write fails.
pub fn write_flattened<W: Write>(mapping: &Mapping, out: &mut W) -> Result<()> {
    flatten_mapping(mapping, "", out)
}

fn flatten_mapping<W: Write>(mapping: &Mapping, prefix: &str, out: &mut W) -> Result<()> {
    for (key, value) in mapping {
        let key_text = render_value(key);
        let full_key = if prefix.is_empty() {
            key_text
        } else {
            format!("{prefix}{KEY_SEPARATOR}{key_text}")
        };
        match value {
            Value::Mapping(nested) => flatten_mapping(nested, &full_key, out)?,
            leaf => writeln!(out, "{}={}", full_key, render_value(leaf))?,
        }
    }
    Ok(())
}

/// Canonical text form of a leaf value (also used for key segments, since
/// YAML allows non-string keys).
///
/// Strings render verbatim, numbers in decimal, booleans as `true`/`false`,
/// null as the literal `null`. Sequences join their elements' forms with a
/// comma and no brackets; nested sequences flatten into the same join. A
/// mapping reached here sits inside a sequence and renders its values the
/// same way, keys dropped.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => items.iter().map(render_value).collect::<Vec<_>>().join(","),
        Value::Mapping(nested) => nested.values().map(render_value).collect::<Vec<_>>().join(","),
        Value::Tagged(tagged) => render_value(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flattened(yaml: &str) -> String {
        let mapping: Mapping = serde_yaml::from_str(yaml).expect("fixture yaml");
        let mut out = Vec::new();
        write_flattened(&mapping, &mut out).expect("flatten");
        String::from_utf8(out).expect("utf8 output")
    }

    #[test]
    fn test_nested_mapping_joins_keys_with_double_underscore() {
        assert_eq!(flattened("a:\n  b:\n    c: 1\n"), "a__b__c=1\n");
    }

    #[test]
    fn test_lines_follow_insertion_order() {
        let out = flattened("z: 1\na: 2\nm:\n  second: 3\n  first: 4\n");
        assert_eq!(out, "z=1\na=2\nm__second=3\nm__first=4\n");
    }

    #[test]
    fn test_scalar_forms() {
        let out = flattened("name: demo\ncount: 3\nratio: 1.5\nenabled: true\nmissing: null\n");
        assert_eq!(out, "name=demo\ncount=3\nratio=1.5\nenabled=true\nmissing=null\n");
    }

    #[test]
    fn test_sequences_join_with_commas_without_brackets() {
        assert_eq!(flattened("hosts:\n  - alpha\n  - beta\n"), "hosts=alpha,beta\n");
    }

    #[test]
    fn test_nested_sequences_flatten_into_one_join() {
        assert_eq!(flattened("grid:\n  - [1, 2]\n  - [3, 4]\n"), "grid=1,2,3,4\n");
    }

    #[test]
    fn test_null_in_sequence_renders_as_null() {
        assert_eq!(flattened("items:\n  - 1\n  - null\n  - 2\n"), "items=1,null,2\n");
    }

    #[test]
    fn test_empty_nested_mapping_emits_nothing() {
        assert_eq!(flattened("a: {}\nb: 1\n"), "b=1\n");
    }

    #[test]
    fn test_non_string_keys_use_scalar_forms() {
        assert_eq!(flattened("true: on\n12: x\n"), "true=on\n12=x\n");
    }

    #[test]
    fn test_empty_mapping_produces_no_output() {
        let mut out = Vec::new();
        write_flattened(&Mapping::new(), &mut out).expect("flatten");
        assert!(out.is_empty());
    }
}
