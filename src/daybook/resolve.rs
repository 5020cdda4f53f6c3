//! Maps user-typed entry selectors to stable ids.
//!
//! The CLI shows shortened ids; users type back either a full UUID or a
//! hex prefix of one. A prefix must match exactly one entry.

use crate::error::{DaybookError, Result};
use crate::model::DiaryEntry;
use uuid::Uuid;

pub fn resolve_id(entries: &[DiaryEntry], selector: &str) -> Result<Uuid> {
    if let Ok(id) = Uuid::parse_str(selector) {
        if entries.iter().any(|e| e.id == id) {
            return Ok(id);
        }
        return Err(DaybookError::EntryNotFound(id));
    }

    let needle = selector.to_lowercase();
    let matches: Vec<Uuid> = entries
        .iter()
        .filter(|e| {
            e.id.simple().to_string().starts_with(&needle)
                || e.id.to_string().starts_with(&needle)
        })
        .map(|e| e.id)
        .collect();

    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(DaybookError::Selector(format!(
            "no entry matches id '{}'",
            selector
        ))),
        n => Err(DaybookError::Selector(format!(
            "id '{}' is ambiguous ({} matches); use more characters",
            selector, n
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_with_id(id: &str) -> DiaryEntry {
        let mut entry = DiaryEntry::new("T".into(), "".into());
        entry.id = Uuid::parse_str(id).unwrap();
        entry
    }

    #[test]
    fn full_uuid_resolves_when_present() {
        let entry = entry_with_id("aaaaaaaa-1111-4111-8111-111111111111");
        let id = resolve_id(std::slice::from_ref(&entry), &entry.id.to_string()).unwrap();
        assert_eq!(id, entry.id);
    }

    #[test]
    fn full_uuid_missing_from_collection_is_not_found() {
        let entry = entry_with_id("aaaaaaaa-1111-4111-8111-111111111111");
        let ghost = "bbbbbbbb-2222-4222-8222-222222222222";
        let err = resolve_id(std::slice::from_ref(&entry), ghost).unwrap_err();
        assert!(matches!(err, DaybookError::EntryNotFound(_)));
    }

    #[test]
    fn unique_prefix_resolves() {
        let entries = vec![
            entry_with_id("aaaaaaaa-1111-4111-8111-111111111111"),
            entry_with_id("bbbbbbbb-2222-4222-8222-222222222222"),
        ];
        assert_eq!(resolve_id(&entries, "bbbb").unwrap(), entries[1].id);
    }

    #[test]
    fn ambiguous_prefix_is_rejected() {
        let entries = vec![
            entry_with_id("aaaaaaaa-1111-4111-8111-111111111111"),
            entry_with_id("aaaaaaaa-3333-4333-8333-333333333333"),
        ];
        let err = resolve_id(&entries, "aaaa").unwrap_err();
        assert!(matches!(err, DaybookError::Selector(_)));
    }

    #[test]
    fn unknown_prefix_is_rejected() {
        let entries = vec![entry_with_id("aaaaaaaa-1111-4111-8111-111111111111")];
        assert!(resolve_id(&entries, "ffff").is_err());
    }
}
