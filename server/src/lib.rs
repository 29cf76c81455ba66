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

//! Library surface for the `skyd` crate.
//!
//! The binary target (`main.rs`) still owns the legacy TerrabaseDB-era
//! server loop (`coredb`, `dbnet`, `protocol`, `queryengine`). This target
//! exposes the entry-modification core on its own, without dragging in the
//! rest of the (independently evolving, partially unwired) `engine` tree
//! it physically lives under.
//!
//! `dirmod` never reaches outside its own module via an absolute `crate::`
//! path, so it is safe to mount here under a shorter path than its
//! on-disk location.

#[path = "engine/core/dirmod/mod.rs"]
pub mod dirmod;
