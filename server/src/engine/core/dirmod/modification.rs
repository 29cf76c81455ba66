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

//! A modification list is pre-parsed by the time it reaches this core
//! (network decode is out of scope, spec.md §1) — every [`Modification`]
//! already carries a resolved attribute descriptor handle. spec.md §3 spells
//! out the quadruple `(op, descriptor, values[], normalized_values[])`: the
//! normalized form travels alongside the raw one exactly like
//! [`super::entry::Attribute`]'s, so the applier can compare against it
//! instead of raw bytes.

use super::entry::{AttrDescriptor, AttrValue};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModOp {
    Add,
    Delete,
    Replace,
    Increment,
    SoftAdd,
}

#[derive(Debug, Clone)]
pub struct Modification {
    pub op: ModOp,
    pub descriptor: Arc<AttrDescriptor>,
    pub values: Vec<AttrValue>,
    pub normalized_values: Vec<AttrValue>,
}

impl Modification {
    /// Convenience constructor for callers that have not run the values
    /// through the schema's matching rule yet: `normalized_values` defaults
    /// to a copy of `values`. Real producers that already normalized
    /// upstream should use [`Modification::new_normalized`] instead.
    pub fn new(op: ModOp, descriptor: Arc<AttrDescriptor>, values: Vec<AttrValue>) -> Self {
        let normalized_values = values.clone();
        Self {
            op,
            descriptor,
            values,
            normalized_values,
        }
    }

    /// Construct with an explicit, already-normalized value set, mirroring
    /// [`super::entry::Attribute::new`]'s `(values, normalized)` pair.
    pub fn new_normalized(op: ModOp, descriptor: Arc<AttrDescriptor>, values: Vec<AttrValue>, normalized_values: Vec<AttrValue>) -> Self {
        Self {
            op,
            descriptor,
            values,
            normalized_values,
        }
    }
}

pub type ModList = Vec<Modification>;
