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

//! In-memory fakes for every collaborator trait, one fixture struct per
//! test the way `engine::fractal::test_utils::TestGlobal` stands in for a
//! running node. Nothing here is reachable outside `#[cfg(test)]`.

#![cfg(test)]

use super::{
    cache::EntryCache,
    collab::{
        AclCheck, Collaborators, DnResolver, IndexOp, IndexStore, ReadControls, ReadWhich,
        ResolveOutcome, SchemaValidator, TxnError, TxnId, TxnOutcome, TxnStore,
    },
    entry::{AttrDescriptor, AttrValue, Entry, EntryId},
    modification::ModList,
    snapshot::{self, AttributeSnapshot},
};
use parking_lot::Mutex;
use std::{collections::HashMap, sync::Arc};

/// A schema registry that resolves any attribute name on first use and
/// remembers the descriptor it handed back, so repeated lookups of the same
/// name return the same `Arc`. `mark_indexed` lets a test opt an attribute
/// into the Index Delta Tracker's reach.
pub struct SimpleSchema {
    registry: Mutex<HashMap<Box<str>, Arc<AttrDescriptor>>>,
    indexed: Mutex<std::collections::HashSet<Box<str>>>,
}

impl SimpleSchema {
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(HashMap::new()),
            indexed: Mutex::new(std::collections::HashSet::new()),
        }
    }

    pub fn mark_indexed(&mut self, descriptor: &Arc<AttrDescriptor>) {
        self.indexed
            .get_mut()
            .insert(descriptor.name().to_ascii_lowercase().into_boxed_str());
    }
}

impl SchemaValidator for SimpleSchema {
    fn validate(&self, _post: &Entry, _pre: &Entry, _manage_dit: bool) -> Result<(), String> {
        Ok(())
    }
    fn is_indexed(&self, descriptor: &Arc<AttrDescriptor>) -> bool {
        self.indexed
            .lock()
            .contains(descriptor.name().to_ascii_lowercase().as_str())
    }
    fn check_syntax(&self, _descriptor: &Arc<AttrDescriptor>, _value: &AttrValue) -> Result<(), String> {
        Ok(())
    }
    fn normalize(&self, _descriptor: &Arc<AttrDescriptor>, value: &AttrValue) -> AttrValue {
        match value.as_str() {
            Some(s) => AttrValue::from_str(s.to_ascii_lowercase()),
            None => value.clone(),
        }
    }
    fn resolve(&self, name: &str) -> Option<Arc<AttrDescriptor>> {
        let key = name.to_ascii_lowercase().into_boxed_str();
        let mut registry = self.registry.lock();
        if let Some(d) = registry.get(&key) {
            return Some(d.clone());
        }
        let single_valued = matches!(
            name.to_ascii_lowercase().as_str(),
            "modifiersname" | "modifytimestamp" | "creatorsname" | "createtimestamp" | "uidnumber"
        );
        let operational = matches!(
            name.to_ascii_lowercase().as_str(),
            "modifiersname" | "modifytimestamp" | "creatorsname" | "createtimestamp"
        );
        let descriptor = AttrDescriptor::new(name, single_valued, operational);
        registry.insert(key, descriptor.clone());
        Some(descriptor)
    }
}

impl Default for SimpleSchema {
    fn default() -> Self {
        Self::new()
    }
}

/// Records every `index_write` call in order, so tests can assert on the
/// relative order of deletes and adds (`index_writer::tests`).
pub struct FakeIndexStore {
    ops: Mutex<Vec<(IndexOp, String, EntryId)>>,
}

impl FakeIndexStore {
    pub fn new() -> Self {
        Self { ops: Mutex::new(Vec::new()) }
    }
    pub fn ops(&self) -> Vec<(IndexOp, String, EntryId)> {
        self.ops.lock().clone()
    }
}

impl Default for FakeIndexStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexStore for FakeIndexStore {
    fn index_write(
        &self,
        _txn: TxnId,
        descriptor: &Arc<AttrDescriptor>,
        _values: &[AttrValue],
        entry_id: EntryId,
        op: IndexOp,
    ) -> TxnOutcome<()> {
        self.ops.lock().push((op, descriptor.name().to_owned(), entry_id));
        Ok(())
    }
}

/// A nested-transaction store that can be told to fail the *next* inner
/// `begin` with a deadlock exactly once, modeling the lock manager
/// collision the coordinator's retry loop (spec.md §4.5) exists for.
pub struct FakeTxnStore {
    next_id: Mutex<u64>,
    inject_deadlock: Mutex<bool>,
    commits: Mutex<Vec<TxnId>>,
    aborts: Mutex<Vec<TxnId>>,
    checkpoints: Mutex<u32>,
}

impl FakeTxnStore {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(0),
            inject_deadlock: Mutex::new(false),
            commits: Mutex::new(Vec::new()),
            aborts: Mutex::new(Vec::new()),
            checkpoints: Mutex::new(0),
        }
    }
    /// The next call to `begin` with a `parent` (i.e. the inner txn) fails
    /// with `TxnError::Deadlock` exactly once.
    pub fn with_deadlock_on_next_inner_begin() -> Self {
        let s = Self::new();
        *s.inject_deadlock.lock() = true;
        s
    }
    pub fn commits(&self) -> Vec<TxnId> {
        self.commits.lock().clone()
    }
    pub fn aborts(&self) -> Vec<TxnId> {
        self.aborts.lock().clone()
    }
    pub fn checkpoint_count(&self) -> u32 {
        *self.checkpoints.lock()
    }
}

impl Default for FakeTxnStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TxnStore for FakeTxnStore {
    fn begin(&self, parent: Option<TxnId>) -> TxnOutcome<TxnId> {
        if parent.is_some() {
            let mut inject = self.inject_deadlock.lock();
            if *inject {
                *inject = false;
                return Err(TxnError::Deadlock);
            }
        }
        let mut id = self.next_id.lock();
        *id += 1;
        Ok(TxnId(*id))
    }
    fn commit(&self, txn: TxnId) -> TxnOutcome<()> {
        self.commits.lock().push(txn);
        Ok(())
    }
    fn abort(&self, txn: TxnId) -> TxnOutcome<()> {
        self.aborts.lock().push(txn);
        Ok(())
    }
    fn checkpoint(&self, _min_pages: usize, _min_secs: u64) -> TxnOutcome<()> {
        *self.checkpoints.lock() += 1;
        Ok(())
    }
}

/// Resolves exactly one fixed entry by normalized DN; everything else is
/// `NotFound`. Never produces a referral — referral scenarios construct
/// their own resolver via [`FakeDnResolver::with_referral`].
pub struct FakeDnResolver {
    entry: Mutex<Option<Entry>>,
    referral: bool,
    referral_urls: Vec<String>,
    busy: bool,
}

impl FakeDnResolver {
    pub fn with_entry(entry: Entry) -> Self {
        Self {
            entry: Mutex::new(Some(entry)),
            referral: false,
            referral_urls: Vec::new(),
            busy: false,
        }
    }
    pub fn with_referral(entry: Entry, urls: Vec<String>) -> Self {
        Self {
            entry: Mutex::new(Some(entry)),
            referral: true,
            referral_urls: urls,
            busy: false,
        }
    }
    pub fn empty() -> Self {
        Self {
            entry: Mutex::new(None),
            referral: false,
            referral_urls: Vec::new(),
            busy: false,
        }
    }
    /// always reports [`ResolveOutcome::Busy`], to exercise the coordinator's
    /// fatal (non-retrying) handling of that outcome.
    pub fn busy() -> Self {
        Self {
            entry: Mutex::new(None),
            referral: false,
            referral_urls: Vec::new(),
            busy: true,
        }
    }
}

impl DnResolver for FakeDnResolver {
    fn resolve_by_ndn(&self, ndn: &str, _txn: TxnId) -> ResolveOutcome {
        if self.busy {
            return ResolveOutcome::Busy;
        }
        match self.entry.lock().as_ref() {
            Some(e) if e.dn().normalized().eq_ignore_ascii_case(ndn) => ResolveOutcome::Found(e.clone()),
            _ => ResolveOutcome::NotFound,
        }
    }
    fn is_referral(&self, _entry: &Entry) -> bool {
        self.referral
    }
    fn referral_urls(&self, _entry: &Entry) -> Vec<String> {
        self.referral_urls.clone()
    }
}

/// Allows every modlist unconditionally; `AllowNoneAcl` below is the
/// opposite fixture for access-denied scenarios.
pub struct AllowAllAcl;

impl AclCheck for AllowAllAcl {
    fn acl_check_modlist(&self, _entry: &Entry, _modlist: &ModList) -> Result<(), Option<String>> {
        Ok(())
    }
}

pub struct AllowNoneAcl;

impl AclCheck for AllowNoneAcl {
    fn acl_check_modlist(&self, _entry: &Entry, _modlist: &ModList) -> Result<(), Option<String>> {
        Err(None)
    }
}

/// Records every `entry_store_update` call's post-image.
pub struct FakeEntryStore {
    updates: Mutex<Vec<Entry>>,
}

impl FakeEntryStore {
    pub fn new() -> Self {
        Self { updates: Mutex::new(Vec::new()) }
    }
    pub fn updates(&self) -> Vec<Entry> {
        self.updates.lock().clone()
    }
}

impl Default for FakeEntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl super::collab::EntryStore for FakeEntryStore {
    fn entry_store_update(&self, _txn: TxnId, entry: &Entry) -> TxnOutcome<()> {
        self.updates.lock().push(entry.clone());
        Ok(())
    }
}

/// Wraps the real [`EntryCache`] so coordinator tests observe adoption
/// through the same code path production does, while still tracking call
/// counts for `cache_modify`.
pub struct FakeCache {
    inner: EntryCache,
    calls: Mutex<u32>,
}

impl FakeCache {
    pub fn new() -> Self {
        Self {
            inner: EntryCache::new(),
            calls: Mutex::new(0),
        }
    }
    pub fn seed(&self, entry: Entry) {
        self.inner.put(entry);
    }
    pub fn calls(&self) -> u32 {
        *self.calls.lock()
    }
    pub fn snapshot(&self, id: EntryId) -> Option<Entry> {
        self.inner.checkout(id).map(|h| h.snapshot())
    }
}

impl Default for FakeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl super::collab::Cache for FakeCache {
    fn cache_modify(&self, entry_id: EntryId, new_attrs: Entry) -> TxnOutcome<()> {
        *self.calls.lock() += 1;
        match self.inner.checkout(entry_id) {
            Some(handle) => self.inner.adopt(&handle, new_attrs),
            None => {
                self.inner.put(new_attrs);
            }
        }
        Ok(())
    }
}

/// No filtering: every attribute named by the selector (or all of them) is
/// returned, as if every access control check passed.
pub struct FullAccessReadControls;

impl ReadControls for FullAccessReadControls {
    fn read_controls(&self, entry: &Entry, _which: ReadWhich, selector: &[String]) -> AttributeSnapshot {
        snapshot::capture(entry, selector)
    }
}

/// Bundles one of each fake collaborator behind [`Collaborators`], mirroring
/// how `TestGlobal` bundles a namespace, queues and transaction driver
/// behind `GlobalInstanceLike` for DML-layer tests.
pub struct TestCollaborators {
    pub dn: FakeDnResolver,
    pub acl: AllowAllAcl,
    pub schema: SimpleSchema,
    pub index: FakeIndexStore,
    pub entries: FakeEntryStore,
    pub cache: FakeCache,
    pub txn: FakeTxnStore,
    pub reads: FullAccessReadControls,
}

impl TestCollaborators {
    pub fn new(resident: Entry) -> Self {
        Self {
            dn: FakeDnResolver::with_entry(resident),
            acl: AllowAllAcl,
            schema: SimpleSchema::new(),
            index: FakeIndexStore::new(),
            entries: FakeEntryStore::new(),
            cache: FakeCache::new(),
            txn: FakeTxnStore::new(),
            reads: FullAccessReadControls,
        }
    }
}

impl Collaborators for TestCollaborators {
    type Dn = FakeDnResolver;
    type Acl = AllowAllAcl;
    type Schema = SimpleSchema;
    type Index = FakeIndexStore;
    type Entries = FakeEntryStore;
    type Cache = FakeCache;
    type Txn = FakeTxnStore;
    type Reads = FullAccessReadControls;

    fn dn(&self) -> &Self::Dn {
        &self.dn
    }
    fn acl(&self) -> &Self::Acl {
        &self.acl
    }
    fn schema(&self) -> &Self::Schema {
        &self.schema
    }
    fn index(&self) -> &Self::Index {
        &self.index
    }
    fn entries(&self) -> &Self::Entries {
        &self.entries
    }
    fn cache(&self) -> &Self::Cache {
        &self.cache
    }
    fn txn(&self) -> &Self::Txn {
        &self.txn
    }
    fn reads(&self) -> &Self::Reads {
        &self.reads
    }
}
