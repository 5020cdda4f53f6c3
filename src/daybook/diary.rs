//! The diary core: an in-memory collection of entries kept in sync with
//! durable storage.
//!
//! [`DiaryStore`] owns the authoritative collection. Every mutation follows
//! the same sequence: mutate memory first, then persist the whole collection
//! through the [`KeyValueStore`] as one JSON document under [`DIARIES_KEY`].
//! If the persistence step fails the error propagates with the in-memory
//! change already applied; memory and storage reconverge on the next
//! successful write. Whole-collection replace is fine at personal-diary
//! scale and is not worth incremental writes.

use crate::error::Result;
use crate::model::{DiaryDraft, DiaryEntry};
use crate::store::KeyValueStore;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

/// Storage key holding the serialized entry collection.
pub const DIARIES_KEY: &str = "diaries";

pub struct DiaryStore<S: KeyValueStore> {
    store: S,
    entries: Vec<DiaryEntry>,
}

impl<S: KeyValueStore> DiaryStore<S> {
    /// Creates a store with an empty collection. Call [`load`](Self::load)
    /// before reading views.
    pub fn new(store: S) -> Self {
        Self {
            store,
            entries: Vec::new(),
        }
    }

    /// Reads the collection from storage. An empty or missing collection is
    /// seeded with two sample entries, persisted immediately. Never fails:
    /// on any read, parse, or seed-write error the collection resets to
    /// empty and the error is logged.
    pub fn load(&mut self) {
        match self.read_or_seed() {
            Ok(entries) => {
                debug!("loaded {} diary entr(ies)", entries.len());
                self.entries = entries;
            }
            Err(err) => {
                warn!("failed to load diary collection, starting empty: {}", err);
                self.entries.clear();
            }
        }
    }

    fn read_or_seed(&mut self) -> Result<Vec<DiaryEntry>> {
        let entries: Vec<DiaryEntry> = match self.store.get(DIARIES_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        if !entries.is_empty() {
            return Ok(entries);
        }

        let seeded = sample_entries(Utc::now());
        let json = serde_json::to_string_pretty(&seeded)?;
        self.store.set(DIARIES_KEY, &json)?;
        Ok(seeded)
    }

    /// Saves a draft. Without an id this is a creation: the new entry gets a
    /// random id and a creation timestamp and goes to the front of the
    /// collection. With an id that matches an existing entry, that entry's
    /// fields are replaced wholesale in place (`id` and `created_at` are
    /// preserved, `updated_at` is stamped). With an id that matches nothing,
    /// memory is left untouched and `Ok(None)` comes back — but the
    /// (unchanged) collection is still written, mirroring the persist-after-
    /// every-save contract.
    pub fn save(&mut self, draft: DiaryDraft) -> Result<Option<DiaryEntry>> {
        let saved = match draft.id {
            None => {
                let mut entry = DiaryEntry::new(draft.title, draft.content);
                entry.weather = draft.weather;
                entry.mood = draft.mood;
                self.entries.insert(0, entry.clone());
                Some(entry)
            }
            Some(id) => self.replace(id, draft),
        };
        self.persist()?;
        Ok(saved)
    }

    fn replace(&mut self, id: Uuid, draft: DiaryDraft) -> Option<DiaryEntry> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        entry.title = draft.title;
        entry.content = draft.content;
        entry.weather = draft.weather;
        entry.mood = draft.mood;
        entry.updated_at = Some(Utc::now());
        Some(entry.clone())
    }

    /// Removes every entry with the given id (zero or one in practice) and
    /// persists. Deleting an unknown id is a no-op that still writes the
    /// unchanged collection.
    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        self.entries.retain(|e| e.id != id);
        self.persist()
    }

    /// All entries, most recently created first. Restartable and read-only:
    /// the underlying collection keeps its insertion order. The sort is
    /// stable, so entries sharing a timestamp keep their relative order.
    pub fn sorted(&self) -> impl Iterator<Item = &DiaryEntry> {
        let mut by_date: Vec<&DiaryEntry> = self.entries.iter().collect();
        by_date.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        by_date.into_iter()
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&DiaryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The collection in insertion order (most recent creation first).
    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        self.store.set(DIARIES_KEY, &json)
    }
}

/// The two sample entries written on first launch, dated to yesterday and
/// the day before.
fn sample_entries(now: DateTime<Utc>) -> Vec<DiaryEntry> {
    let yesterday = now - Duration::days(1);
    let day_before = now - Duration::days(2);
    vec![
        DiaryEntry {
            id: Uuid::new_v4(),
            title: "第一次使用日记应用".to_string(),
            content: "今天是我第一次使用这款日记应用。感觉界面很简洁，操作也很方便。\n\n\
                      希望这款应用能帮助我记录生活中的美好瞬间和重要思考。"
                .to_string(),
            created_at: yesterday,
            updated_at: Some(yesterday),
            weather: Some("☀️ 晴朗".to_string()),
            mood: Some("😊 开心".to_string()),
        },
        DiaryEntry {
            id: Uuid::new_v4(),
            title: "开发日记应用的想法".to_string(),
            content: "这款日记应用可以运行在各种设备上，把数据保存在本地。\n\n\
                      主要功能包括：\n- 创建、编辑和删除日记\n- 查看日记列表和详情\n\
                      - 本地存储日记数据\n- 响应式设计，适配各种移动设备"
                .to_string(),
            created_at: day_before,
            updated_at: Some(day_before),
            weather: Some("☁️ 多云".to_string()),
            mood: Some("😃 兴奋".to_string()),
        },
    ]
}
