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

//! Collaborator contracts (spec.md §6). Everything in this file is external
//! to the entry-modification core by design: DN resolution, access control,
//! schema, index storage, entry storage, the transactional KV store itself
//! and read-controls are all out of scope (spec.md §1) and are therefore
//! modeled purely as traits. `dirmod::testutil` is the only place that
//! implements them, for tests.

use super::{
    entry::{AttrDescriptor, AttrValue, Entry, EntryId},
    modification::ModList,
};
use std::sync::Arc;

/// Opaque identifier for an in-flight transaction, handed back by
/// [`TxnStore::begin`] and threaded through every subsequent call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxnId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnError {
    /// the store's lock manager detected a deadlock or a lock could not be
    /// granted; the coordinator retries on this and only this
    Deadlock,
    Other,
}

pub type TxnOutcome<T> = Result<T, TxnError>;

/// `txn_begin`/`txn_commit`/`txn_abort`/`txn_checkpoint` (spec.md §6).
pub trait TxnStore {
    fn begin(&self, parent: Option<TxnId>) -> TxnOutcome<TxnId>;
    fn commit(&self, txn: TxnId) -> TxnOutcome<()>;
    fn abort(&self, txn: TxnId) -> TxnOutcome<()>;
    fn checkpoint(&self, min_pages: usize, min_secs: u64) -> TxnOutcome<()>;
}

/// `resolve_by_ndn` (spec.md §6).
pub enum ResolveOutcome {
    Found(Entry),
    NotFound,
    Deadlock,
    Busy,
    Other(String),
}

pub trait DnResolver {
    fn resolve_by_ndn(&self, ndn: &str, txn: TxnId) -> ResolveOutcome;
    /// true when the resolved entry is a referral rather than a real entry
    fn is_referral(&self, entry: &Entry) -> bool;
    fn referral_urls(&self, entry: &Entry) -> Vec<String>;
}

/// `acl_check_modlist` (spec.md §6). Implementations may additionally stash
/// a more specific error into operation-local storage (here: the return
/// value itself) to override the generic `INSUFFICIENT_ACCESS` the
/// coordinator would otherwise report (spec.md §4.5).
pub trait AclCheck {
    fn acl_check_modlist(&self, entry: &Entry, modlist: &ModList) -> Result<(), Option<String>>;
}

/// `schema_check` + `is_indexed` (spec.md §6, component 4.2/4.3).
pub trait SchemaValidator {
    fn validate(&self, post: &Entry, pre: &Entry, manage_dit: bool) -> Result<(), String>;
    fn is_indexed(&self, descriptor: &Arc<AttrDescriptor>) -> bool;
    fn check_syntax(&self, descriptor: &Arc<AttrDescriptor>, value: &AttrValue) -> Result<(), String>;
    fn normalize(&self, descriptor: &Arc<AttrDescriptor>, value: &AttrValue) -> AttrValue;
    fn resolve(&self, name: &str) -> Option<Arc<AttrDescriptor>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexOp {
    Add,
    Delete,
}

/// `index_write` (spec.md §6, component 4.4).
pub trait IndexStore {
    fn index_write(
        &self,
        txn: TxnId,
        descriptor: &Arc<AttrDescriptor>,
        values: &[AttrValue],
        entry_id: EntryId,
        op: IndexOp,
    ) -> TxnOutcome<()>;
}

/// `entry_store_update` (spec.md §6).
pub trait EntryStore {
    fn entry_store_update(&self, txn: TxnId, entry: &Entry) -> TxnOutcome<()>;
}

/// `cache_modify` (spec.md §6). The coordinator calls this only after the
/// inner transaction has committed, per the state machine in spec.md §4.5.
pub trait Cache {
    fn cache_modify(&self, entry_id: EntryId, new_attrs: Entry) -> TxnOutcome<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadWhich {
    Pre,
    Post,
}

/// `read_controls` (spec.md §6, component 4.6).
pub trait ReadControls {
    fn read_controls(&self, entry: &Entry, which: ReadWhich, selector: &[String]) -> super::snapshot::AttributeSnapshot;
}

/// Convenience bundle so `coordinator::modify` doesn't need seven generic
/// parameters; the teacher's `GlobalNS` plays the same "one handle to every
/// collaborator" role for the DML layer (`engine/core/dml/mod.rs`).
pub trait Collaborators {
    type Dn: DnResolver;
    type Acl: AclCheck;
    type Schema: SchemaValidator;
    type Index: IndexStore;
    type Entries: EntryStore;
    type Cache: Cache;
    type Txn: TxnStore;
    type Reads: ReadControls;

    fn dn(&self) -> &Self::Dn;
    fn acl(&self) -> &Self::Acl;
    fn schema(&self) -> &Self::Schema;
    fn index(&self) -> &Self::Index;
    fn entries(&self) -> &Self::Entries;
    fn cache(&self) -> &Self::Cache;
    fn txn(&self) -> &Self::Txn;
    fn reads(&self) -> &Self::Reads;
}
