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

//! The entry-modification core: applies a batch of attribute modifications
//! to a single directory entry, re-validates it against the schema, keeps
//! secondary indices consistent, and commits atomically against a
//! transactional key-value store with deadlock retry. Everything outside
//! this module's remit (network decoding, DN resolution proper, the real
//! schema registry, the real transactional store) is modeled in
//! [`collab`] and supplied by the caller.

pub mod applier;
pub mod cache;
pub mod clock;
pub mod collab;
pub mod config;
pub mod coordinator;
pub mod entry;
pub mod error;
pub mod index_delta;
pub mod index_writer;
pub mod modification;
pub mod opattrs;
pub mod retry;
pub mod snapshot;
#[cfg(test)]
pub(crate) mod testutil;

pub use coordinator::{modify, ModifyReply, ModifyRequest};
pub use error::{ModifyError, ModifyResult};
