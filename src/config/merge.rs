//! Shallow merge of top-level keys into the accumulator

use serde_yaml::Mapping;

/// Merge `incoming`'s top-level keys into `accumulator`.
///
/// The merge is shallow: a colliding key's entire value, nested subtree
/// included, is replaced by the incoming one. Nested mappings are never
/// combined recursively. A replaced key keeps its original position, so
/// flatten order stays stable across overrides.
pub fn merge_into(accumulator: &mut Mapping, incoming: Mapping) {
    for (key, value) in incoming {
        if accumulator.contains_key(&key) {
            tracing::debug!("Overwriting top-level key {:?}", key);
        }
        accumulator.insert(key, value);
    }
}
