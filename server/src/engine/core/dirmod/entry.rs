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

//! The entry data model: a directory entry is a `(id, dn, attrs)` triple.
//! `Attribute` descriptors are shared handles so the applier can clone an
//! entry's attribute list without re-resolving the schema for every value.

use bitflags::bitflags;
use std::sync::Arc;

pub type EntryId = u64;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ObjectClassFlags: u32 {
        const NONE = 0;
        const STRUCTURAL_RESOLVED = 1 << 0;
        const IS_GLUE = 1 << 1;
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AttributeFlags: u8 {
        const NONE = 0;
        const OPERATIONAL = 1 << 0;
    }
}

/// A shared handle describing one attribute type. In the real backend this
/// would come from the schema registry (out of scope here, see
/// [`super::collab::SchemaValidator`]); this struct is the shape that trait
/// hands back.
#[derive(Debug, PartialEq, Eq)]
pub struct AttrDescriptor {
    name: Box<str>,
    single_valued: bool,
    operational: bool,
}

impl AttrDescriptor {
    pub fn new(name: impl Into<Box<str>>, single_valued: bool, operational: bool) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            single_valued,
            operational,
        })
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn single_valued(&self) -> bool {
        self.single_valued
    }
    pub fn is_operational(&self) -> bool {
        self.operational
    }
    /// descriptors are compared case-insensitively on name, matching LDAP
    /// attribute-type equality
    pub fn same_attribute(a: &Arc<Self>, b: &Arc<Self>) -> bool {
        Arc::ptr_eq(a, b) || a.name.eq_ignore_ascii_case(&b.name)
    }
}

/// A single attribute value. Values are carried as raw bytes (the original
/// `berval`); string-typed syntaxes read through [`AttrValue::as_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrValue(Box<[u8]>);

impl AttrValue {
    pub fn from_str(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().as_bytes().to_vec().into_boxed_slice())
    }
    pub fn from_bytes(b: impl Into<Box<[u8]>>) -> Self {
        Self(b.into())
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

/// The pre-/post-image attribute: `(descriptor, values, normalized_values, flags)`
/// exactly as spec'd. `flags` here only ever carries static facts about the
/// attribute (e.g. [`AttributeFlags::OPERATIONAL`]); index-delta bookkeeping
/// lives in [`super::index_delta::IndexDeltaTracker`] instead of attribute
/// bits, see DESIGN.md for why.
#[derive(Debug, Clone)]
pub struct Attribute {
    descriptor: Arc<AttrDescriptor>,
    values: Vec<AttrValue>,
    normalized_values: Vec<AttrValue>,
    flags: AttributeFlags,
}

impl Attribute {
    pub fn new(descriptor: Arc<AttrDescriptor>, values: Vec<AttrValue>, normalized: Vec<AttrValue>) -> Self {
        let flags = if descriptor.is_operational() {
            AttributeFlags::OPERATIONAL
        } else {
            AttributeFlags::NONE
        };
        Self {
            descriptor,
            values,
            normalized_values: normalized,
            flags,
        }
    }
    pub fn descriptor(&self) -> &Arc<AttrDescriptor> {
        &self.descriptor
    }
    pub fn values(&self) -> &[AttrValue] {
        &self.values
    }
    pub fn values_mut(&mut self) -> &mut Vec<AttrValue> {
        &mut self.values
    }
    pub fn normalized_values(&self) -> &[AttrValue] {
        &self.normalized_values
    }
    pub fn normalized_values_mut(&mut self) -> &mut Vec<AttrValue> {
        &mut self.normalized_values
    }
    pub fn flags(&self) -> AttributeFlags {
        self.flags
    }
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Textual and normalized distinguished name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dn {
    text: Box<str>,
    normalized: Box<str>,
}

impl Dn {
    pub fn new(text: impl Into<Box<str>>, normalized: impl Into<Box<str>>) -> Self {
        Self {
            text: text.into(),
            normalized: normalized.into(),
        }
    }
    pub fn root() -> Self {
        Self::new("", "")
    }
    pub fn is_root(&self) -> bool {
        self.normalized.is_empty()
    }
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn normalized(&self) -> &str {
        &self.normalized
    }
}

/// A directory entry: the unit of work for one `modify` operation.
#[derive(Debug, Clone)]
pub struct Entry {
    id: EntryId,
    dn: Dn,
    attrs: Vec<Attribute>,
    ocflags: ObjectClassFlags,
}

impl Entry {
    pub fn new(id: EntryId, dn: Dn, attrs: Vec<Attribute>) -> Self {
        Self {
            id,
            dn,
            attrs,
            ocflags: ObjectClassFlags::NONE,
        }
    }
    pub fn id(&self) -> EntryId {
        self.id
    }
    pub fn dn(&self) -> &Dn {
        &self.dn
    }
    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }
    pub fn attrs_mut(&mut self) -> &mut Vec<Attribute> {
        &mut self.attrs
    }
    pub fn ocflags(&self) -> ObjectClassFlags {
        self.ocflags
    }
    /// Invalidate the object-class cache; called whenever `objectClass` is
    /// touched by a modification (spec.md §3).
    pub fn invalidate_ocflags(&mut self) {
        self.ocflags = ObjectClassFlags::NONE;
    }
    pub fn find(&self, descriptor: &Arc<AttrDescriptor>) -> Option<&Attribute> {
        self.attrs
            .iter()
            .find(|a| AttrDescriptor::same_attribute(a.descriptor(), descriptor))
    }
    pub fn find_mut(&mut self, descriptor: &Arc<AttrDescriptor>) -> Option<&mut Attribute> {
        self.attrs
            .iter_mut()
            .find(|a| AttrDescriptor::same_attribute(a.descriptor(), descriptor))
    }
    pub fn remove(&mut self, descriptor: &Arc<AttrDescriptor>) -> Option<Attribute> {
        let idx = self
            .attrs
            .iter()
            .position(|a| AttrDescriptor::same_attribute(a.descriptor(), descriptor))?;
        Some(self.attrs.remove(idx))
    }
    /// Deep-copy the attribute list into an owned post-image. The pre-image
    /// this was called on is never mutated afterwards (I1).
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }
    /// Purge every non-operational attribute; used by the glue-promotion
    /// path (spec.md §4.1, Pass 1).
    pub fn purge_non_operational(&mut self) {
        self.attrs
            .retain(|a| a.flags().contains(AttributeFlags::OPERATIONAL));
    }
    pub fn is_glue(&self) -> bool {
        self.ocflags.contains(ObjectClassFlags::IS_GLUE)
    }
    pub fn mark_glue(&mut self) {
        self.ocflags |= ObjectClassFlags::IS_GLUE;
    }
}
