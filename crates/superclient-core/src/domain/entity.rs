//! Domain Layer - Core Entity Trait
//!
//! Every entity kept in a client-side collection has an identifier that is
//! unique within that collection.

use serde::{Deserialize, Deserializer};

/// Core trait for all domain entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: PartialEq + ?Sized;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Insert `entity` at the front of `list`, or replace the entry with the same id in place.
///
/// Returns `true` when an existing entry was replaced.
pub fn upsert_by_id<T: Entity>(list: &mut Vec<T>, entity: T) -> bool {
    match list.iter_mut().find(|existing| existing.id() == entity.id()) {
        Some(existing) => {
            *existing = entity;
            true
        }
        None => {
            list.insert(0, entity);
            false
        }
    }
}

/// Remove every entry whose id equals `id`. Returns `true` if anything was removed.
pub fn remove_by_id<T: Entity>(list: &mut Vec<T>, id: &T::Id) -> bool {
    let before = list.len();
    list.retain(|item| item.id() != id);
    list.len() != before
}

/// Backend ids arrive either as JSON strings or numbers.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        label: &'static str,
    }

    impl Entity for Row {
        type Id = str;

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn row(id: &str, label: &'static str) -> Row {
        Row { id: id.to_string(), label }
    }

    #[test]
    fn test_upsert_inserts_new_at_front() {
        let mut rows = vec![row("a", "first")];
        let replaced = upsert_by_id(&mut rows, row("b", "second"));
        assert!(!replaced);
        assert_eq!(rows[0].id, "b");
        assert_eq!(rows[1].id, "a");
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut rows = vec![row("a", "first"), row("b", "second"), row("c", "third")];
        let replaced = upsert_by_id(&mut rows, row("b", "changed"));
        assert!(replaced);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], row("b", "changed"));
    }

    #[test]
    fn test_remove_by_id() {
        let mut rows = vec![row("a", "first"), row("b", "second")];
        assert!(remove_by_id(&mut rows, "a"));
        assert!(!remove_by_id(&mut rows, "missing"));
        assert_eq!(rows, vec![row("b", "second")]);
    }

    #[test]
    fn test_deserialize_numeric_and_text_ids() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "deserialize_id")]
            id: String,
        }

        let numeric: Wrapper = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        let text: Wrapper = serde_json::from_str(r#"{"id": "col-1"}"#).unwrap();
        assert_eq!(numeric.id, "42");
        assert_eq!(text.id, "col-1");
    }
}
