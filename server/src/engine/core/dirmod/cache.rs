/*
 * Created on Sat Mar 02 2024
 *
 * This file is a part of Skytable
 * Skytable (formerly known as TerrabaseDB or Skybase) is a free and open-source
 * NoSQL database written by Sayan Nandan ("the Author") with the
 * vision to provide flexibility in data modelling without compromising
 * on performance, queryability or scalability.
 *
 * Copyright (c) 2024, Sayan Nandan <ohsayan@outlook.com>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 *
*/

//! The process-wide entry cache (spec.md §5). Grounded in
//! `engine::core::index::row::Row`: each cached entry lives behind its own
//! `RwLock` so a write-intent handle held by one operation blocks
//! concurrent writers on the *same* entry without taking a global lock.
//! Unlike `Row` (which is reference-counted and lock-free-indexed via
//! `mtchm`), this cache uses an ordinary `parking_lot::RwLock<HashMap<..>>`
//! for the directory of entries — the entry-modification core doesn't need
//! the epoch-reclaimed concurrent map the BlueQL DML layer does, since one
//! `modify` only ever touches one entry at a time.

use super::entry::{Entry, EntryId};
use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};

/// A checked-out handle to a cached entry, borrowed with an intent. Must be
/// returned exactly once on every exit path (success, failure, retry) —
/// spec.md §5's "cache handle lifetime" invariant. Returning is modeled as
/// `Drop`, the idiomatic Rust way to guarantee "exactly once on every exit
/// path" without a manual release call at every `return`/`?`.
pub struct EntryHandle {
    slot: Arc<RwLock<Entry>>,
}

impl EntryHandle {
    pub fn read(&self) -> parking_lot::RwLockReadGuard<'_, Entry> {
        self.slot.read()
    }
    /// A write-intent lock: held for the duration of the inner transaction,
    /// blocking concurrent writers on this entry (spec.md §5).
    pub fn write(&self) -> parking_lot::RwLockWriteGuard<'_, Entry> {
        self.slot.write()
    }
    pub fn snapshot(&self) -> Entry {
        self.slot.read().clone()
    }
}

pub struct EntryCache {
    entries: RwLock<HashMap<EntryId, Arc<RwLock<Entry>>>>,
}

impl EntryCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
    /// Insert or replace the cached copy of `entry` and return a handle to
    /// it. Coordinator usage: called to seed the cache, and again after a
    /// successful commit to adopt the post-image (spec.md §4.5).
    pub fn put(&self, entry: Entry) -> EntryHandle {
        let id = entry.id();
        let slot = Arc::new(RwLock::new(entry));
        self.entries.write().insert(id, slot.clone());
        EntryHandle { slot }
    }
    pub fn checkout(&self, id: EntryId) -> Option<EntryHandle> {
        self.entries.read().get(&id).cloned().map(|slot| EntryHandle { slot })
    }
    /// `cache_modify` (spec.md §6): adopt the post-image's attribute list.
    /// Only called after the inner AND outer transactions have committed.
    pub fn adopt(&self, handle: &EntryHandle, post: Entry) {
        *handle.slot.write() = post;
    }
    pub fn remove(&self, id: EntryId) {
        self.entries.write().remove(&id);
    }
}

impl Default for EntryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::dirmod::entry::Dn;

    #[test]
    fn put_then_checkout_roundtrips() {
        let cache = EntryCache::new();
        let entry = Entry::new(7, Dn::root(), vec![]);
        cache.put(entry);
        let handle = cache.checkout(7).unwrap();
        assert_eq!(handle.read().id(), 7);
    }

    #[test]
    fn adopt_replaces_cached_attrs_only_after_call() {
        let cache = EntryCache::new();
        let handle = cache.put(Entry::new(1, Dn::root(), vec![]));
        let post = Entry::new(1, Dn::new("cn=new", "cn=new"), vec![]);
        assert_ne!(handle.read().dn(), post.dn());
        cache.adopt(&handle, post.clone());
        assert_eq!(handle.read().dn(), post.dn());
    }

    #[test]
    fn write_intent_blocks_concurrent_writer_same_entry() {
        let cache = EntryCache::new();
        let handle = cache.put(Entry::new(1, Dn::root(), vec![]));
        let _writer = handle.write();
        assert!(handle.slot.try_write().is_none());
    }
}
