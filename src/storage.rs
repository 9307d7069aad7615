//! Collection Persistence
//!
//! The entire collection is serialized as one JSON array under a single
//! localStorage key. Reads that fail (missing key, storage access error,
//! parse error) fall back to the built-in seed data; write failures are
//! logged and dropped without rolling back in-memory state.

use crate::models::{TodoItem, TodoList};

/// The one storage slot holding the whole collection
pub const STORAGE_KEY: &str = "lists";

/// Serialize the collection for the storage slot
pub fn encode(lists: &[TodoList]) -> Result<String, serde_json::Error> {
    serde_json::to_string(lists)
}

/// Parse a storage slot value back into the collection
pub fn decode(raw: &str) -> Result<Vec<TodoList>, serde_json::Error> {
    serde_json::from_str(raw)
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Raw slot contents, or None when the key is absent or storage is
/// unreachable (the latter is logged)
pub fn read_raw() -> Option<String> {
    let storage = local_storage()?;
    match storage.get_item(STORAGE_KEY) {
        Ok(value) => value,
        Err(err) => {
            web_sys::console::error_1(&format!("[STORAGE] read failed: {:?}", err).into());
            None
        }
    }
}

/// Load the collection, substituting seed data for an absent or
/// unparseable slot. Never errors to the caller.
pub fn load_lists() -> Vec<TodoList> {
    match read_raw() {
        Some(raw) => match decode(&raw) {
            Ok(lists) => lists,
            Err(err) => {
                web_sys::console::error_1(
                    &format!("[STORAGE] stored lists unparseable, using seed data: {}", err).into(),
                );
                seed_lists()
            }
        },
        None => seed_lists(),
    }
}

/// Persist the collection. Failures are logged, not surfaced.
pub fn save_lists(lists: &[TodoList]) {
    let raw = match encode(lists) {
        Ok(raw) => raw,
        Err(err) => {
            web_sys::console::error_1(&format!("[STORAGE] serialize failed: {}", err).into());
            return;
        }
    };
    if let Some(storage) = local_storage() {
        if let Err(err) = storage.set_item(STORAGE_KEY, &raw) {
            web_sys::console::error_1(&format!("[STORAGE] write failed: {:?}", err).into());
        }
    }
}

/// First-run data: two rotations to demonstrate the cycle
pub fn seed_lists() -> Vec<TodoList> {
    vec![
        TodoList {
            title: "Game Night".to_string(),
            items: vec![
                TodoItem::new("20", "7 Wonders"),
                TodoItem::new("21", "Space Base"),
                TodoItem::new("22", "Kingdom Builder"),
                TodoItem::new("23", "Azul"),
                TodoItem::new("24", "Catan"),
            ],
        },
        TodoList {
            title: "Goto Dinners".to_string(),
            items: vec![
                TodoItem::new("1", "Mediterranean-Sauteed Shrimp Zucchini"),
                TodoItem::new("2", "Beef Stroganoff"),
                TodoItem::new("3", "Italian Lentil Soup"),
                TodoItem::new("4", "Thai Green Bean Stir-fry"),
                TodoItem::new("5", "Chickpea Shakshuka"),
                TodoItem::new("6", "Dill Salmon with Charred Brussel Sprouts"),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_empty_collection() {
        let lists: Vec<TodoList> = Vec::new();
        let raw = encode(&lists).unwrap();
        assert_eq!(decode(&raw).unwrap(), lists);
    }

    #[test]
    fn test_round_trip_with_and_without_timestamps() {
        let lists = vec![TodoList {
            title: "Dinners".to_string(),
            items: vec![
                TodoItem::new("1", "Tacos"),
                TodoItem {
                    id: "2".to_string(),
                    name: "Soup".to_string(),
                    last_checked: Some(1_700_000_000_000),
                },
            ],
        }];
        let raw = encode(&lists).unwrap();
        assert_eq!(decode(&raw).unwrap(), lists);
    }

    #[test]
    fn test_seed_round_trip() {
        let seed = seed_lists();
        let raw = encode(&seed).unwrap();
        assert_eq!(decode(&raw).unwrap(), seed);
    }

    #[test]
    fn test_stored_shape_uses_last_checked_key() {
        let raw = r#"[{"title":"Dinners","items":[{"id":"1","name":"Tacos","lastChecked":42}]}]"#;
        let lists = decode(raw).unwrap();
        assert_eq!(lists[0].items[0].last_checked, Some(42));

        // Absent timestamps stay absent on the wire
        let unstamped = vec![TodoList {
            title: "Dinners".to_string(),
            items: vec![TodoItem::new("1", "Tacos")],
        }];
        let raw = encode(&unstamped).unwrap();
        assert!(!raw.contains("lastChecked"));
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(decode("not json").is_err());
        assert!(decode(r#"{"title":"not an array"}"#).is_err());
    }
}
