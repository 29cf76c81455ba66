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

//! The transaction coordinator (spec.md §4.5): the state machine that owns
//! the outer/inner transaction pair around one `modify` call. The source's
//! goto-based retry label becomes a labeled loop here (spec.md §9): every
//! deadlock outcome runs its cleanup and `continue 'attempt`s; every other
//! outcome `return`s directly, which plays the role of the original's
//! `break` out of the retry loop.

use super::{
    applier::{self, ApplyError, ApplyFlags},
    collab::{
        AclCheck, Cache, Collaborators, DnResolver, EntryStore, ReadControls, ReadWhich, ResolveOutcome, SchemaValidator,
        TxnError, TxnStore,
    },
    entry::{AttrValue, Attribute, Dn, Entry},
    error::{ModifyError, ModifyResult},
    index_delta, index_writer, opattrs,
    config::CoordinatorConfig,
    modification::ModList,
    retry::RetryBackoff,
    snapshot::AttributeSnapshot,
};
use log::{debug, warn};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// One `modify` call's input. `assertion`, when present, is evaluated
/// against the pre-image; a `false` result fails the operation before any
/// modification is attempted (spec.md §4.5).
pub struct ModifyRequest {
    pub ndn: String,
    pub modlist: ModList,
    pub authz_dn: Option<String>,
    pub permissive: bool,
    pub manage_dit: bool,
    pub manage_dsait: bool,
    pub no_op: bool,
    /// true when this backend is a shadow/replica applying an
    /// already-stamped change from its master (spec.md §4.7): suppresses
    /// the Operational-Attribute Injector entirely.
    pub is_shadow: bool,
    pub assertion: Option<Box<dyn Fn(&Entry) -> bool>>,
    pub pre_read_selector: Option<Vec<String>>,
    pub post_read_selector: Option<Vec<String>>,
    /// polled only at retry boundaries (spec.md §5, "Cancellation")
    pub abandon: Arc<AtomicBool>,
}

impl ModifyRequest {
    pub fn new(ndn: impl Into<String>, modlist: ModList) -> Self {
        Self {
            ndn: ndn.into(),
            modlist,
            authz_dn: None,
            permissive: false,
            manage_dit: false,
            manage_dsait: false,
            no_op: false,
            is_shadow: false,
            assertion: None,
            pre_read_selector: None,
            post_read_selector: None,
            abandon: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[derive(Debug, Default)]
pub struct ModifyReply {
    pub pre_read: Option<AttributeSnapshot>,
    pub post_read: Option<AttributeSnapshot>,
}

const ATTR_OBJECT_CLASS: &str = "objectClass";
const ATTR_STRUCTURAL_OBJECT_CLASS: &str = "structuralObjectClass";
const SENTINEL_GLUE: &str = "glue";

/// Build the transient pre-image the coordinator uses when resolution
/// reports "not found" for the empty (root) DN (spec.md §4.5, "Fake-root
/// handling"). Never persisted; its id is a sentinel the caller's entry
/// store/index/cache implementations must treat as "not a real entry" if
/// they ever see it (they won't on the success path below, since a fake
/// root's cache update is skipped).
fn synthesize_fake_root(schema: &dyn SchemaValidator) -> Entry {
    let mut attrs = Vec::with_capacity(2);
    if let Some(oc) = schema.resolve(ATTR_OBJECT_CLASS) {
        attrs.push(Attribute::new(oc, vec![AttrValue::from_str(SENTINEL_GLUE)], vec![AttrValue::from_str(SENTINEL_GLUE)]));
    }
    if let Some(soc) = schema.resolve(ATTR_STRUCTURAL_OBJECT_CLASS) {
        attrs.push(Attribute::new(soc, vec![AttrValue::from_str(SENTINEL_GLUE)], vec![AttrValue::from_str(SENTINEL_GLUE)]));
    }
    let mut entry = Entry::new(0, Dn::root(), attrs);
    entry.mark_glue();
    entry
}

fn map_apply_error(err: ApplyError) -> ModifyError {
    match err {
        ApplyError::TypeOrValueExists => ModifyError::TypeOrValueExists,
        ApplyError::NoSuchAttribute => ModifyError::NoSuchAttribute,
        ApplyError::ConstraintViolation(text) => ModifyError::ConstraintViolation(text),
        ApplyError::InvalidSyntax(text) => ModifyError::InvalidSyntax(text),
        ApplyError::Other(text) => ModifyError::Other(text),
    }
}

fn report_if_past_threshold(retries: u32, cfg: &CoordinatorConfig) {
    if retries == cfg.deadlock_report_threshold {
        warn!("modify operation has retried {retries} times on deadlock, still contending");
    }
}

/// Run one `modify` operation to completion, retrying transparently on
/// deadlock until it commits, fails for a non-retryable reason, or observes
/// the abandon flag at a retry boundary.
pub fn modify<C: Collaborators>(collab: &C, cfg: &CoordinatorConfig, req: ModifyRequest) -> ModifyResult<ModifyReply> {
    let backoff = RetryBackoff::new();
    let mut retries: u32 = 0;

    'attempt: loop {
        if req.abandon.load(Ordering::Acquire) {
            debug!("modify {}: abandoned at retry boundary", req.ndn);
            return Err(ModifyError::Abandoned);
        }

        debug!("modify {}: OUTER_BEGIN (attempt {})", req.ndn, retries + 1);
        let outer = match collab.txn().begin(None) {
            Ok(id) => id,
            Err(TxnError::Deadlock) => {
                retries += 1;
                report_if_past_threshold(retries, cfg);
                backoff.wait();
                continue 'attempt;
            }
            Err(TxnError::Other) => return Err(ModifyError::Other("failed to begin outer transaction".into())),
        };

        macro_rules! retry_after_abort {
            ($($txn:expr),+) => {{
                $(let _ = collab.txn().abort($txn);)+
                retries += 1;
                report_if_past_threshold(retries, cfg);
                backoff.wait();
                continue 'attempt;
            }};
        }
        macro_rules! fail_after_abort {
            ($err:expr, $($txn:expr),+) => {{
                $(let _ = collab.txn().abort($txn);)+
                return Err($err);
            }};
        }

        let is_fake_root = req.ndn.is_empty();
        let pre = match collab.dn().resolve_by_ndn(&req.ndn, outer) {
            ResolveOutcome::Found(entry) => entry,
            ResolveOutcome::NotFound if is_fake_root => synthesize_fake_root(collab.schema()),
            ResolveOutcome::NotFound => fail_after_abort!(ModifyError::NoSuchObject, outer),
            ResolveOutcome::Deadlock => retry_after_abort!(outer),
            ResolveOutcome::Busy => fail_after_abort!(ModifyError::Busy("entry resolution reported busy".into()), outer),
            ResolveOutcome::Other(text) => fail_after_abort!(ModifyError::Other(text), outer),
        };

        if !is_fake_root && collab.dn().is_referral(&pre) && !req.manage_dsait {
            debug!("modify {}: resolved entry is a referral, manageDSAit not set", req.ndn);
            fail_after_abort!(ModifyError::Referral(collab.dn().referral_urls(&pre)), outer);
        }
        if let Some(assertion) = &req.assertion {
            if !assertion(&pre) {
                debug!("modify {}: assertion control evaluated false against pre-image", req.ndn);
                fail_after_abort!(ModifyError::AssertionFailed, outer);
            }
        }
        if let Err(specific) = collab.acl().acl_check_modlist(&pre, &req.modlist) {
            warn!("modify {}: access check denied the modification list", req.ndn);
            let err = specific.map(ModifyError::Other).unwrap_or(ModifyError::InsufficientAccess);
            fail_after_abort!(err, outer);
        }

        let pre_read = req
            .pre_read_selector
            .as_ref()
            .map(|selector| collab.reads().read_controls(&pre, ReadWhich::Pre, selector));

        let modlist = opattrs::inject(req.modlist.clone(), req.authz_dn.as_deref(), req.is_shadow, is_fake_root, collab.schema());

        let inner = match collab.txn().begin(Some(outer)) {
            Ok(id) => id,
            Err(TxnError::Deadlock) => retry_after_abort!(outer),
            Err(TxnError::Other) => fail_after_abort!(ModifyError::Other("failed to begin inner transaction".into()), outer),
        };

        let apply_flags = ApplyFlags { permissive: req.permissive };
        let outcome = match applier::apply(&pre, &modlist, apply_flags, collab.schema()) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!("modify {}: applier rejected modification list: {err:?}", req.ndn);
                fail_after_abort!(map_apply_error(err), inner, outer)
            }
        };

        if let Err(text) = collab.schema().validate(&outcome.post, &pre, req.manage_dit) {
            debug!("modify {}: post-image failed schema validation: {text}", req.ndn);
            fail_after_abort!(ModifyError::SchemaViolation(text), inner, outer);
        }

        if req.no_op {
            // run to completion for diagnostics, then discard everything
            // (spec.md §4.5, "No-op" / I4)
            debug!("modify {}: no-op flag set, discarding would-be-successful change", req.ndn);
            fail_after_abort!(ModifyError::NoOperation, inner, outer);
        }

        let deltas = index_delta::finalize(&outcome.tracker, &pre, &outcome.post, collab.schema());
        if let Err(e) = index_writer::write(collab.index(), inner, pre.id(), &deltas) {
            warn!("modify {}: index write failed: {}", req.ndn, e.0);
            fail_after_abort!(ModifyError::Other(e.0), inner, outer);
        }

        match collab.entries().entry_store_update(inner, &outcome.post) {
            Ok(()) => {}
            Err(TxnError::Deadlock) => retry_after_abort!(inner, outer),
            Err(TxnError::Other) => fail_after_abort!(ModifyError::Other("entry store update failed".into()), inner, outer),
        }

        match collab.txn().commit(inner) {
            Ok(()) => {}
            Err(TxnError::Deadlock) => retry_after_abort!(outer),
            Err(TxnError::Other) => fail_after_abort!(ModifyError::Other("inner commit failed".into()), outer),
        }

        let post_read = req
            .post_read_selector
            .as_ref()
            .map(|selector| collab.reads().read_controls(&outcome.post, ReadWhich::Post, selector));

        if !is_fake_root {
            match collab.cache().cache_modify(pre.id(), outcome.post.clone()) {
                Ok(()) => {}
                Err(TxnError::Deadlock) => retry_after_abort!(outer),
                Err(TxnError::Other) => fail_after_abort!(ModifyError::Other("cache update failed".into()), outer),
            }
        }

        match collab.txn().commit(outer) {
            Ok(()) => {}
            Err(TxnError::Deadlock) => retry_after_abort!(outer),
            Err(TxnError::Other) => return Err(ModifyError::Other("outer commit failed".into())),
        }

        debug!("modify {}: committed after {retries} retries", req.ndn);
        if cfg.checkpoint_enabled {
            let _ = collab.txn().checkpoint(cfg.checkpoint_min_pages, cfg.checkpoint_min_secs);
        }

        return Ok(ModifyReply { pre_read, post_read });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::dirmod::{
        collab::Collaborators,
        entry::AttrDescriptor,
        modification::{ModOp, Modification},
        testutil::{FakeTxnStore, TestCollaborators},
    };

    fn resident_entry() -> Entry {
        let description = AttrDescriptor::new("description", false, false);
        Entry::new(
            1,
            Dn::new("cn=a,dc=x", "cn=a,dc=x"),
            vec![Attribute::new(description, vec![AttrValue::from_str("old")], vec![AttrValue::from_str("old")])],
        )
    }

    #[test]
    fn simple_modify_commits_and_updates_cache() {
        let collab = TestCollaborators::new(resident_entry());
        let cfg = CoordinatorConfig::default();
        let description = AttrDescriptor::new("description", false, false);
        let req = ModifyRequest::new(
            "cn=a,dc=x",
            vec![Modification::new(ModOp::Add, description, vec![AttrValue::from_str("new")])],
        );
        let reply = modify(&collab, &cfg, req).unwrap();
        assert!(reply.pre_read.is_none());
        assert_eq!(collab.cache.calls(), 1);
        assert_eq!(collab.txn.commits().len(), 2);
        assert_eq!(collab.txn.checkpoint_count(), 1);
    }

    #[test]
    fn no_such_object_when_entry_missing_and_dn_not_root() {
        let collab = TestCollaborators::new(resident_entry());
        let cfg = CoordinatorConfig::default();
        let req = ModifyRequest::new("cn=missing,dc=x", vec![]);
        let err = modify(&collab, &cfg, req).unwrap_err();
        assert_eq!(err, ModifyError::NoSuchObject);
    }

    #[test]
    fn fake_root_synthesized_and_cache_update_skipped() {
        let collab = TestCollaborators::new(resident_entry());
        let cfg = CoordinatorConfig::default();
        let o = AttrDescriptor::new("o", false, false);
        let soc = AttrDescriptor::new("structuralObjectClass", true, false);
        let req = ModifyRequest::new(
            "",
            vec![
                Modification::new(ModOp::Replace, soc, vec![AttrValue::from_str("organization")]),
                Modification::new(ModOp::Add, o, vec![AttrValue::from_str("Acme")]),
            ],
        );
        modify(&collab, &cfg, req).unwrap();
        assert_eq!(collab.cache.calls(), 0);
    }

    #[test]
    fn no_op_leaves_store_and_cache_untouched() {
        let collab = TestCollaborators::new(resident_entry());
        let cfg = CoordinatorConfig::default();
        let description = AttrDescriptor::new("description", false, false);
        let mut req = ModifyRequest::new(
            "cn=a,dc=x",
            vec![Modification::new(ModOp::Add, description, vec![AttrValue::from_str("new")])],
        );
        req.no_op = true;
        let err = modify(&collab, &cfg, req).unwrap_err();
        assert_eq!(err, ModifyError::NoOperation);
        assert_eq!(collab.cache.calls(), 0);
        assert!(collab.entries.updates().is_empty());
    }

    #[test]
    fn schema_violation_preserves_pre_image_and_reports_violation() {
        struct RejectingSchema(super::super::testutil::SimpleSchema);
        impl SchemaValidator for RejectingSchema {
            fn validate(&self, _post: &Entry, _pre: &Entry, _manage_dit: bool) -> Result<(), String> {
                Err("structural object class is required".into())
            }
            fn is_indexed(&self, d: &Arc<AttrDescriptor>) -> bool {
                self.0.is_indexed(d)
            }
            fn check_syntax(&self, d: &Arc<AttrDescriptor>, v: &AttrValue) -> Result<(), String> {
                self.0.check_syntax(d, v)
            }
            fn normalize(&self, d: &Arc<AttrDescriptor>, v: &AttrValue) -> AttrValue {
                self.0.normalize(d, v)
            }
            fn resolve(&self, name: &str) -> Option<Arc<AttrDescriptor>> {
                self.0.resolve(name)
            }
        }
        struct RejectingCollaborators(TestCollaborators, RejectingSchema);
        impl Collaborators for RejectingCollaborators {
            type Dn = <TestCollaborators as Collaborators>::Dn;
            type Acl = <TestCollaborators as Collaborators>::Acl;
            type Schema = RejectingSchema;
            type Index = <TestCollaborators as Collaborators>::Index;
            type Entries = <TestCollaborators as Collaborators>::Entries;
            type Cache = <TestCollaborators as Collaborators>::Cache;
            type Txn = <TestCollaborators as Collaborators>::Txn;
            type Reads = <TestCollaborators as Collaborators>::Reads;
            fn dn(&self) -> &Self::Dn {
                self.0.dn()
            }
            fn acl(&self) -> &Self::Acl {
                self.0.acl()
            }
            fn schema(&self) -> &Self::Schema {
                &self.1
            }
            fn index(&self) -> &Self::Index {
                self.0.index()
            }
            fn entries(&self) -> &Self::Entries {
                self.0.entries()
            }
            fn cache(&self) -> &Self::Cache {
                self.0.cache()
            }
            fn txn(&self) -> &Self::Txn {
                self.0.txn()
            }
            fn reads(&self) -> &Self::Reads {
                self.0.reads()
            }
        }

        let base = TestCollaborators::new(resident_entry());
        let rejecting = RejectingSchema(super::super::testutil::SimpleSchema::new());
        let collab = RejectingCollaborators(base, rejecting);
        let cfg = CoordinatorConfig::default();
        let description = AttrDescriptor::new("description", false, false);
        let req = ModifyRequest::new(
            "cn=a,dc=x",
            vec![Modification::new(ModOp::Add, description, vec![AttrValue::from_str("new")])],
        );
        let err = modify(&collab, &cfg, req).unwrap_err();
        assert_eq!(err, ModifyError::SchemaViolation("structural object class is required".into()));
        assert!(collab.0.entries.updates().is_empty());
    }

    #[test]
    fn insufficient_access_aborts_before_any_modification() {
        use crate::engine::core::dirmod::testutil::AllowNoneAcl;

        struct DenyingCollaborators(TestCollaborators);
        impl Collaborators for DenyingCollaborators {
            type Dn = <TestCollaborators as Collaborators>::Dn;
            type Acl = AllowNoneAcl;
            type Schema = <TestCollaborators as Collaborators>::Schema;
            type Index = <TestCollaborators as Collaborators>::Index;
            type Entries = <TestCollaborators as Collaborators>::Entries;
            type Cache = <TestCollaborators as Collaborators>::Cache;
            type Txn = <TestCollaborators as Collaborators>::Txn;
            type Reads = <TestCollaborators as Collaborators>::Reads;
            fn dn(&self) -> &Self::Dn {
                self.0.dn()
            }
            fn acl(&self) -> &Self::Acl {
                &AllowNoneAcl
            }
            fn schema(&self) -> &Self::Schema {
                self.0.schema()
            }
            fn index(&self) -> &Self::Index {
                self.0.index()
            }
            fn entries(&self) -> &Self::Entries {
                self.0.entries()
            }
            fn cache(&self) -> &Self::Cache {
                self.0.cache()
            }
            fn txn(&self) -> &Self::Txn {
                self.0.txn()
            }
            fn reads(&self) -> &Self::Reads {
                self.0.reads()
            }
        }

        let collab = DenyingCollaborators(TestCollaborators::new(resident_entry()));
        let cfg = CoordinatorConfig::default();
        let description = AttrDescriptor::new("description", false, false);
        let req = ModifyRequest::new(
            "cn=a,dc=x",
            vec![Modification::new(ModOp::Add, description, vec![AttrValue::from_str("new")])],
        );
        let err = modify(&collab, &cfg, req).unwrap_err();
        assert_eq!(err, ModifyError::InsufficientAccess);
        assert!(collab.0.txn.commits().is_empty());
        assert_eq!(collab.0.txn.aborts().len(), 1);
    }

    #[test]
    fn referral_short_circuits_without_manage_dsait() {
        use crate::engine::core::dirmod::testutil::FakeDnResolver;

        struct ReferralCollaborators(TestCollaborators, FakeDnResolver);
        impl Collaborators for ReferralCollaborators {
            type Dn = FakeDnResolver;
            type Acl = <TestCollaborators as Collaborators>::Acl;
            type Schema = <TestCollaborators as Collaborators>::Schema;
            type Index = <TestCollaborators as Collaborators>::Index;
            type Entries = <TestCollaborators as Collaborators>::Entries;
            type Cache = <TestCollaborators as Collaborators>::Cache;
            type Txn = <TestCollaborators as Collaborators>::Txn;
            type Reads = <TestCollaborators as Collaborators>::Reads;
            fn dn(&self) -> &Self::Dn {
                &self.1
            }
            fn acl(&self) -> &Self::Acl {
                self.0.acl()
            }
            fn schema(&self) -> &Self::Schema {
                self.0.schema()
            }
            fn index(&self) -> &Self::Index {
                self.0.index()
            }
            fn entries(&self) -> &Self::Entries {
                self.0.entries()
            }
            fn cache(&self) -> &Self::Cache {
                self.0.cache()
            }
            fn txn(&self) -> &Self::Txn {
                self.0.txn()
            }
            fn reads(&self) -> &Self::Reads {
                self.0.reads()
            }
        }

        let entry = resident_entry();
        let resolver = FakeDnResolver::with_referral(entry, vec!["ldap://elsewhere/cn=a,dc=x".into()]);
        let collab = ReferralCollaborators(TestCollaborators::new(resident_entry()), resolver);
        let cfg = CoordinatorConfig::default();
        let req = ModifyRequest::new("cn=a,dc=x", vec![]);
        let err = modify(&collab, &cfg, req).unwrap_err();
        assert_eq!(err, ModifyError::Referral(vec!["ldap://elsewhere/cn=a,dc=x".into()]));
        assert!(collab.0.entries.updates().is_empty());
    }

    #[test]
    fn assertion_failed_aborts_before_any_modification() {
        let collab = TestCollaborators::new(resident_entry());
        let cfg = CoordinatorConfig::default();
        let description = AttrDescriptor::new("description", false, false);
        let mut req = ModifyRequest::new(
            "cn=a,dc=x",
            vec![Modification::new(ModOp::Add, description, vec![AttrValue::from_str("new")])],
        );
        req.assertion = Some(Box::new(|_entry| false));
        let err = modify(&collab, &cfg, req).unwrap_err();
        assert_eq!(err, ModifyError::AssertionFailed);
        assert!(collab.entries.updates().is_empty());
        assert_eq!(collab.cache.calls(), 0);
    }

    #[test]
    fn abandoned_flag_observed_at_retry_boundary_before_any_work() {
        use std::sync::atomic::Ordering;

        let collab = TestCollaborators::new(resident_entry());
        let cfg = CoordinatorConfig::default();
        let mut req = ModifyRequest::new("cn=a,dc=x", vec![]);
        req.abandon.store(true, Ordering::Release);
        let err = modify(&collab, &cfg, req).unwrap_err();
        assert_eq!(err, ModifyError::Abandoned);
        assert!(collab.txn.commits().is_empty());
        assert!(collab.txn.aborts().is_empty());
    }

    #[test]
    fn shadow_backend_suppresses_operational_attribute_injection() {
        let collab = TestCollaborators::new(resident_entry());
        let cfg = CoordinatorConfig::default();
        let modify_timestamp = AttrDescriptor::new("modifyTimestamp", true, true);
        let mut req = ModifyRequest::new(
            "cn=a,dc=x",
            vec![Modification::new(ModOp::Replace, modify_timestamp, vec![AttrValue::from_str("19700101000000Z")])],
        );
        req.is_shadow = true;
        modify(&collab, &cfg, req).unwrap();
        let update = collab.entries.updates().into_iter().next().unwrap();
        let stamp = update
            .find(&AttrDescriptor::new("modifyTimestamp", true, true))
            .unwrap();
        assert_eq!(stamp.values()[0].as_str(), Some("19700101000000Z"));
    }

    #[test]
    fn resolve_busy_is_fatal_not_retried() {
        use crate::engine::core::dirmod::testutil::FakeDnResolver;

        struct BusyCollaborators(TestCollaborators, FakeDnResolver);
        impl Collaborators for BusyCollaborators {
            type Dn = FakeDnResolver;
            type Acl = <TestCollaborators as Collaborators>::Acl;
            type Schema = <TestCollaborators as Collaborators>::Schema;
            type Index = <TestCollaborators as Collaborators>::Index;
            type Entries = <TestCollaborators as Collaborators>::Entries;
            type Cache = <TestCollaborators as Collaborators>::Cache;
            type Txn = <TestCollaborators as Collaborators>::Txn;
            type Reads = <TestCollaborators as Collaborators>::Reads;
            fn dn(&self) -> &Self::Dn {
                &self.1
            }
            fn acl(&self) -> &Self::Acl {
                self.0.acl()
            }
            fn schema(&self) -> &Self::Schema {
                self.0.schema()
            }
            fn index(&self) -> &Self::Index {
                self.0.index()
            }
            fn entries(&self) -> &Self::Entries {
                self.0.entries()
            }
            fn cache(&self) -> &Self::Cache {
                self.0.cache()
            }
            fn txn(&self) -> &Self::Txn {
                self.0.txn()
            }
            fn reads(&self) -> &Self::Reads {
                self.0.reads()
            }
        }

        let collab = BusyCollaborators(TestCollaborators::new(resident_entry()), FakeDnResolver::busy());
        let cfg = CoordinatorConfig::default();
        let req = ModifyRequest::new("cn=a,dc=x", vec![]);
        let err = modify(&collab, &cfg, req).unwrap_err();
        assert_eq!(err, ModifyError::Busy("entry resolution reported busy".into()));
        assert!(collab.0.txn.commits().is_empty());
        assert_eq!(collab.0.txn.aborts().len(), 1);
    }

    #[test]
    fn checkpoint_disabled_skips_checkpoint_call() {
        let collab = TestCollaborators::new(resident_entry());
        let mut cfg = CoordinatorConfig::default();
        cfg.checkpoint_enabled = false;
        let description = AttrDescriptor::new("description", false, false);
        let req = ModifyRequest::new(
            "cn=a,dc=x",
            vec![Modification::new(ModOp::Add, description, vec![AttrValue::from_str("new")])],
        );
        modify(&collab, &cfg, req).unwrap();
        assert_eq!(collab.txn.checkpoint_count(), 0);
    }

    #[test]
    fn deadlock_on_inner_begin_retries_once_then_commits() {
        let mut collab = TestCollaborators::new(resident_entry());
        collab.txn = FakeTxnStore::with_deadlock_on_next_inner_begin();
        let cfg = CoordinatorConfig::default();
        let description = AttrDescriptor::new("description", false, false);
        let req = ModifyRequest::new(
            "cn=a,dc=x",
            vec![Modification::new(ModOp::Add, description, vec![AttrValue::from_str("new")])],
        );
        modify(&collab, &cfg, req).unwrap();
        // one aborted outer txn from the deadlocked attempt, then a full successful attempt
        assert_eq!(collab.txn.aborts().len(), 1);
        assert_eq!(collab.txn.commits().len(), 2);
    }
}
