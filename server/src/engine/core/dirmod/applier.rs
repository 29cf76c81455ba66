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

//! The modification applier (spec.md §4.1). Pure in-memory transformer: no
//! collaborator here ever touches a transaction or the cache. `apply` takes
//! the pre-image by reference and only ever returns an owned post-image —
//! there's no in-place mutation path for a caller to misuse, which is what
//! upholds I1 without runtime bookkeeping.

use super::{
    collab::SchemaValidator,
    entry::{AttrDescriptor, AttrValue, Entry},
    index_delta::IndexDeltaTracker,
    modification::{ModList, ModOp, Modification},
};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyFlags {
    pub permissive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplyError {
    TypeOrValueExists,
    NoSuchAttribute,
    ConstraintViolation(String),
    InvalidSyntax(String),
    Other(String),
}

pub struct ApplyOutcome {
    pub post: Entry,
    pub tracker: IndexDeltaTracker,
}

const SENTINEL_GLUE: &str = "glue";
const ATTR_STRUCTURAL_OBJECT_CLASS: &str = "structuralObjectClass";
const ATTR_OBJECT_CLASS: &str = "objectClass";

/// Run the two-pass algorithm of spec.md §4.1 against `pre`, returning the
/// post-image and the set of attributes touched (for the Index Delta
/// Tracker) or a typed error. `pre` is never mutated.
pub fn apply(
    pre: &Entry,
    modlist: &ModList,
    flags: ApplyFlags,
    schema: &dyn SchemaValidator,
) -> Result<ApplyOutcome, ApplyError> {
    let mut post = pre.deep_copy();
    let mut tracker = IndexDeltaTracker::new();

    let glue_purge = detect_glue_promotion(modlist);
    if glue_purge {
        post.purge_non_operational();
    }

    for modification in modlist {
        apply_one(&mut post, modification, flags, glue_purge, schema, &mut tracker)?;
        if modification.descriptor.name().eq_ignore_ascii_case(ATTR_OBJECT_CLASS) {
            post.invalidate_ocflags();
        }
    }

    Ok(ApplyOutcome { post, tracker })
}

/// Pass 1: scan for an ADD/REPLACE of `structuralObjectClass` whose value is
/// not the glue sentinel. If found, the entry is being promoted from a
/// placeholder to a real entry.
fn detect_glue_promotion(modlist: &ModList) -> bool {
    modlist.iter().any(|m| {
        matches!(m.op, ModOp::Add | ModOp::Replace)
            && m.descriptor.name().eq_ignore_ascii_case(ATTR_STRUCTURAL_OBJECT_CLASS)
            && m.values.iter().any(|v| v.as_str() != Some(SENTINEL_GLUE))
    })
}

fn apply_one(
    post: &mut Entry,
    modification: &Modification,
    flags: ApplyFlags,
    glue_purge: bool,
    schema: &dyn SchemaValidator,
    tracker: &mut IndexDeltaTracker,
) -> Result<(), ApplyError> {
    match modification.op {
        ModOp::Add => apply_add(post, modification, flags, schema, false)?,
        ModOp::SoftAdd => apply_add(post, modification, flags, schema, true)?,
        ModOp::Delete => {
            if glue_purge {
                // the attributes are already gone due to the purge; treat
                // the user-visible delete as a success without action
                // (spec.md §9, `glue_attr_delete`)
            } else {
                apply_delete(post, modification, flags, schema)?;
            }
        }
        ModOp::Replace => apply_replace(post, modification, schema)?,
        ModOp::Increment => apply_increment(post, modification)?,
    }
    tracker.mark_touched(&modification.descriptor);
    Ok(())
}

fn apply_add(
    post: &mut Entry,
    modification: &Modification,
    flags: ApplyFlags,
    schema: &dyn SchemaValidator,
    soft: bool,
) -> Result<(), ApplyError> {
    for value in &modification.values {
        schema
            .check_syntax(&modification.descriptor, value)
            .map_err(ApplyError::InvalidSyntax)?;
    }
    let attr = find_or_create(post, &modification.descriptor);
    for value in &modification.values {
        let normalized = schema.normalize(&modification.descriptor, value);
        let already_present = attr.normalized_values().contains(&normalized);
        if already_present {
            if soft || flags.permissive {
                continue;
            }
            return Err(ApplyError::TypeOrValueExists);
        }
        attr.values_mut().push(value.clone());
        attr.normalized_values_mut().push(normalized);
    }
    Ok(())
}

fn apply_delete(
    post: &mut Entry,
    modification: &Modification,
    flags: ApplyFlags,
    schema: &dyn SchemaValidator,
) -> Result<(), ApplyError> {
    let Some(attr) = post.find_mut(&modification.descriptor) else {
        return if flags.permissive {
            Ok(())
        } else {
            Err(ApplyError::NoSuchAttribute)
        };
    };
    if modification.values.is_empty() {
        post.remove(&modification.descriptor);
        return Ok(());
    }
    for value in &modification.values {
        let normalized = schema.normalize(&modification.descriptor, value);
        let pos = attr.normalized_values().iter().position(|v| *v == normalized);
        match pos {
            Some(idx) => {
                attr.values_mut().remove(idx);
                attr.normalized_values_mut().remove(idx);
            }
            None if flags.permissive => {}
            None => return Err(ApplyError::NoSuchAttribute),
        }
    }
    if attr.is_empty() {
        post.remove(&modification.descriptor);
    }
    Ok(())
}

fn apply_replace(post: &mut Entry, modification: &Modification, schema: &dyn SchemaValidator) -> Result<(), ApplyError> {
    for value in &modification.values {
        schema
            .check_syntax(&modification.descriptor, value)
            .map_err(ApplyError::InvalidSyntax)?;
    }
    post.remove(&modification.descriptor);
    if modification.values.is_empty() {
        return Ok(());
    }
    let normalized = modification
        .values
        .iter()
        .map(|v| schema.normalize(&modification.descriptor, v))
        .collect();
    post.attrs_mut().push(super::entry::Attribute::new(
        modification.descriptor.clone(),
        modification.values.clone(),
        normalized,
    ));
    Ok(())
}

fn apply_increment(post: &mut Entry, modification: &Modification) -> Result<(), ApplyError> {
    if !modification.descriptor.single_valued() {
        return Err(ApplyError::ConstraintViolation(format!(
            "cannot INCREMENT multi-valued attribute '{}'",
            modification.descriptor.name()
        )));
    }
    let Some(delta_value) = modification.values.first() else {
        return Err(ApplyError::ConstraintViolation("INCREMENT requires exactly one value".into()));
    };
    let Some(delta) = parse_integer(delta_value) else {
        return Err(ApplyError::ConstraintViolation("INCREMENT value is not numeric".into()));
    };
    let Some(attr) = post.find_mut(&modification.descriptor) else {
        return Err(ApplyError::ConstraintViolation(format!(
            "attribute '{}' is absent",
            modification.descriptor.name()
        )));
    };
    if attr.values().len() != 1 {
        return Err(ApplyError::ConstraintViolation(format!(
            "attribute '{}' does not hold exactly one value",
            modification.descriptor.name()
        )));
    }
    let Some(current) = parse_integer(&attr.values()[0]) else {
        return Err(ApplyError::ConstraintViolation(format!(
            "existing value of '{}' is not numeric",
            modification.descriptor.name()
        )));
    };
    let new_value = AttrValue::from_str((current + delta).to_string());
    attr.values_mut()[0] = new_value.clone();
    attr.normalized_values_mut()[0] = new_value;
    Ok(())
}

fn parse_integer(value: &AttrValue) -> Option<i64> {
    value.as_str()?.trim().parse::<i64>().ok()
}

fn find_or_create<'a>(post: &'a mut Entry, descriptor: &Arc<AttrDescriptor>) -> &'a mut super::entry::Attribute {
    if post.find(descriptor).is_none() {
        post.attrs_mut()
            .push(super::entry::Attribute::new(descriptor.clone(), Vec::new(), Vec::new()));
    }
    post.find_mut(descriptor).expect("just inserted")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::dirmod::testutil::SimpleSchema;

    fn desc(name: &str, single_valued: bool) -> Arc<AttrDescriptor> {
        AttrDescriptor::new(name, single_valued, false)
    }

    /// normalizes the same way [`SimpleSchema::normalize`] does, so fixtures
    /// built here compare consistently with values the applier normalizes
    /// itself at apply time.
    fn entry_with(attrs: Vec<(Arc<AttrDescriptor>, Vec<&str>)>) -> Entry {
        let attrs = attrs
            .into_iter()
            .map(|(d, vs)| {
                let values: Vec<_> = vs.iter().map(|v| AttrValue::from_str(*v)).collect();
                let normalized: Vec<_> = vs.iter().map(|v| AttrValue::from_str(v.to_ascii_lowercase())).collect();
                super::super::entry::Attribute::new(d, values, normalized)
            })
            .collect();
        Entry::new(1, super::super::entry::Dn::new("cn=a,dc=x", "cn=a,dc=x"), attrs)
    }

    #[test]
    fn simple_add() {
        let schema = SimpleSchema::new();
        let description = desc("description", false);
        let pre = entry_with(vec![(description.clone(), vec!["old"])]);
        let modlist = vec![Modification::new(ModOp::Add, description.clone(), vec![AttrValue::from_str("new")])];
        let out = apply(&pre, &modlist, ApplyFlags::default(), &schema).unwrap();
        let attr = out.post.find(&description).unwrap();
        assert_eq!(attr.values().len(), 2);
    }

    #[test]
    fn replace_with_empty_removes_attribute() {
        let schema = SimpleSchema::new();
        let description = desc("description", false);
        let pre = entry_with(vec![(description.clone(), vec!["old"])]);
        let modlist = vec![Modification::new(ModOp::Replace, description.clone(), vec![])];
        let out = apply(&pre, &modlist, ApplyFlags::default(), &schema).unwrap();
        assert!(out.post.find(&description).is_none());
    }

    #[test]
    fn soft_add_on_existing_value_is_noop_success() {
        let schema = SimpleSchema::new();
        let description = desc("description", false);
        let pre = entry_with(vec![(description.clone(), vec!["old"])]);
        let modlist = vec![Modification::new(ModOp::SoftAdd, description.clone(), vec![AttrValue::from_str("old")])];
        let out = apply(&pre, &modlist, ApplyFlags::default(), &schema).unwrap();
        assert_eq!(out.post.find(&description).unwrap().values().len(), 1);
    }

    #[test]
    fn increment() {
        let schema = SimpleSchema::new();
        let uid_number = desc("uidNumber", true);
        let pre = entry_with(vec![(uid_number.clone(), vec!["1000"])]);
        let modlist = vec![Modification::new(ModOp::Increment, uid_number.clone(), vec![AttrValue::from_str("3")])];
        let out = apply(&pre, &modlist, ApplyFlags::default(), &schema).unwrap();
        assert_eq!(out.post.find(&uid_number).unwrap().values()[0].as_str(), Some("1003"));
    }

    #[test]
    fn add_duplicate_value_fails_without_permissive() {
        let schema = SimpleSchema::new();
        let description = desc("description", false);
        let pre = entry_with(vec![(description.clone(), vec!["old"])]);
        let modlist = vec![Modification::new(ModOp::Add, description.clone(), vec![AttrValue::from_str("old")])];
        let err = apply(&pre, &modlist, ApplyFlags::default(), &schema).unwrap_err();
        assert_eq!(err, ApplyError::TypeOrValueExists);
    }

    #[test]
    fn add_duplicate_differing_only_in_case_fails_on_normalized_form() {
        // the raw bytes "old" and "OLD" differ, but the schema's matching
        // rule (case-folding, per SimpleSchema::normalize) considers them
        // the same value — ADD must reject on the normalized comparison,
        // not the raw one.
        let schema = SimpleSchema::new();
        let description = desc("description", false);
        let pre = entry_with(vec![(description.clone(), vec!["old"])]);
        let modlist = vec![Modification::new(ModOp::Add, description.clone(), vec![AttrValue::from_str("OLD")])];
        let err = apply(&pre, &modlist, ApplyFlags::default(), &schema).unwrap_err();
        assert_eq!(err, ApplyError::TypeOrValueExists);
    }

    #[test]
    fn delete_value_differing_only_in_case_matches_on_normalized_form() {
        let schema = SimpleSchema::new();
        let description = desc("description", false);
        let pre = entry_with(vec![(description.clone(), vec!["old"])]);
        let modlist = vec![Modification::new(ModOp::Delete, description.clone(), vec![AttrValue::from_str("OLD")])];
        let out = apply(&pre, &modlist, ApplyFlags::default(), &schema).unwrap();
        assert!(out.post.find(&description).is_none());
    }

    #[test]
    fn glue_promotion_purges_non_operational_and_suppresses_delete() {
        let schema = SimpleSchema::new();
        let soc = desc("structuralObjectClass", true);
        let extra = desc("extra", false);
        let o = desc("o", false);
        let pre = entry_with(vec![(soc.clone(), vec!["glue"]), (extra.clone(), vec!["stale"])]);
        let modlist = vec![
            Modification::new(ModOp::Replace, soc.clone(), vec![AttrValue::from_str("organization")]),
            Modification::new(ModOp::Delete, extra.clone(), vec![]),
            Modification::new(ModOp::Add, o.clone(), vec![AttrValue::from_str("Acme")]),
        ];
        let out = apply(&pre, &modlist, ApplyFlags::default(), &schema).unwrap();
        assert!(out.post.find(&extra).is_none());
        assert_eq!(out.post.find(&soc).unwrap().values()[0].as_str(), Some("organization"));
        assert_eq!(out.post.find(&o).unwrap().values()[0].as_str(), Some("Acme"));
    }

    #[test]
    fn error_leaves_pre_image_observably_unchanged() {
        let schema = SimpleSchema::new();
        let description = desc("description", false);
        let pre = entry_with(vec![(description.clone(), vec!["old"])]);
        let modlist = vec![Modification::new(ModOp::Delete, desc("missing", false), vec![])];
        let before = pre.clone();
        let err = apply(&pre, &modlist, ApplyFlags::default(), &schema).unwrap_err();
        assert_eq!(err, ApplyError::NoSuchAttribute);
        assert_eq!(pre.attrs().len(), before.attrs().len());
        assert_eq!(pre.find(&description).unwrap().values(), before.find(&description).unwrap().values());
    }
}
