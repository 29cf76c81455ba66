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

//! The index delta tracker (spec.md §4.3). The original tracks `IX_DELETE`/
//! `IX_ADD` as bits directly on the pre- and post-image `Attribute`
//! objects, which spec.md §9 flags as a potential aliasing hazard if the
//! pre/post images ever share structure. This tracker instead records
//! *which descriptors were touched* in a side table keyed by attribute
//! name, and only reads the pre-/post-image values back out when
//! [`IndexDeltaTracker::finalize`] is called — there is nothing on
//! [`super::entry::Attribute`] for the two writers to alias.

use super::{
    collab::SchemaValidator,
    entry::{AttrDescriptor, AttrValue, Entry},
};
use std::{collections::HashSet, sync::Arc};

#[derive(Debug)]
pub struct IndexDeltaTracker {
    touched: HashSet<Box<str>>,
}

impl IndexDeltaTracker {
    pub fn new() -> Self {
        Self {
            touched: HashSet::new(),
        }
    }
    pub fn mark_touched(&mut self, descriptor: &Arc<AttrDescriptor>) {
        self.touched.insert(descriptor.name().to_ascii_lowercase().into());
    }
    pub fn is_empty(&self) -> bool {
        self.touched.is_empty()
    }
}

impl Default for IndexDeltaTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// One attribute's worth of index work: remove `delete_values` (normalized,
/// from the pre-image), then add `add_values` (normalized, from the
/// post-image). Both halves can be empty (e.g. an attribute that was
/// touched but turned out not to be indexed never reaches this struct).
pub struct IndexDelta {
    pub descriptor: Arc<AttrDescriptor>,
    pub delete_values: Vec<AttrValue>,
    pub add_values: Vec<AttrValue>,
}

/// Resolve the tracker's touched set against pre/post images and the
/// schema's indexing decision, producing the deltas the Index Writer will
/// apply. No-op operations never call this (spec.md §4.3: "flags are set
/// only when... the operation is not no-op").
pub fn finalize(tracker: &IndexDeltaTracker, pre: &Entry, post: &Entry, schema: &dyn SchemaValidator) -> Vec<IndexDelta> {
    let mut deltas = Vec::with_capacity(tracker.touched.len());
    for name in &tracker.touched {
        let descriptor = match pre
            .attrs()
            .iter()
            .chain(post.attrs().iter())
            .map(|a| a.descriptor())
            .find(|d| d.name().eq_ignore_ascii_case(name))
        {
            Some(d) => d.clone(),
            None => match schema.resolve(name) {
                Some(d) => d,
                None => continue,
            },
        };
        if !schema.is_indexed(&descriptor) {
            continue;
        }
        let delete_values = pre
            .find(&descriptor)
            .map(|a| a.normalized_values().to_vec())
            .unwrap_or_default();
        let add_values = post
            .find(&descriptor)
            .map(|a| a.normalized_values().to_vec())
            .unwrap_or_default();
        if delete_values.is_empty() && add_values.is_empty() {
            continue;
        }
        deltas.push(IndexDelta {
            descriptor,
            delete_values,
            add_values,
        });
    }
    deltas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::dirmod::testutil::SimpleSchema;

    #[test]
    fn unindexed_attribute_produces_no_delta() {
        let schema = SimpleSchema::new();
        let descriptor = AttrDescriptor::new("notIndexed", false, false);
        let mut tracker = IndexDeltaTracker::new();
        tracker.mark_touched(&descriptor);
        let pre = Entry::new(1, super::super::entry::Dn::root(), vec![]);
        let post = pre.clone();
        assert!(finalize(&tracker, &pre, &post, &schema).is_empty());
    }

    #[test]
    fn indexed_attribute_produces_symmetric_delete_and_add() {
        let mut schema = SimpleSchema::new();
        let descriptor = AttrDescriptor::new("description", false, false);
        schema.mark_indexed(&descriptor);
        let mut tracker = IndexDeltaTracker::new();
        tracker.mark_touched(&descriptor);
        let pre = Entry::new(
            1,
            super::super::entry::Dn::root(),
            vec![super::super::entry::Attribute::new(
                descriptor.clone(),
                vec![AttrValue::from_str("old")],
                vec![AttrValue::from_str("old")],
            )],
        );
        let post = Entry::new(
            1,
            super::super::entry::Dn::root(),
            vec![super::super::entry::Attribute::new(
                descriptor.clone(),
                vec![AttrValue::from_str("new")],
                vec![AttrValue::from_str("new")],
            )],
        );
        let deltas = finalize(&tracker, &pre, &post, &schema);
        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas[0].delete_values, vec![AttrValue::from_str("old")]);
        assert_eq!(deltas[0].add_values, vec![AttrValue::from_str("new")]);
    }
}
