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

pub type ModifyResult<T> = Result<T, ModifyError>;

/// The error kinds from spec.md §7. Unlike `engine::error::DatabaseError`
/// (a `Copy` enum with no payload) these carry an owned diagnostic where the
/// original kept one in a fixed-size caller buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum ModifyError {
    InsufficientAccess,
    Referral(Vec<String>),
    AssertionFailed,
    NoSuchObject,
    SchemaViolation(String),
    TypeOrValueExists,
    NoSuchAttribute,
    ConstraintViolation(String),
    InvalidSyntax(String),
    /// surfaced only by collaborators that report busy outside the
    /// coordinator's own retry loop (the loop itself retries unbounded,
    /// per spec.md, and never returns this on deadlock alone)
    Busy(String),
    Other(String),
    Abandoned,
    /// distinguished no-op success, not a failure
    NoOperation,
}

impl std::fmt::Display for ModifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientAccess => write!(f, "insufficient access"),
            Self::Referral(refs) => write!(f, "referral: {}", refs.join(", ")),
            Self::AssertionFailed => write!(f, "assertion failed"),
            Self::NoSuchObject => write!(f, "no such object"),
            Self::SchemaViolation(text) => write!(f, "schema violation: {text}"),
            Self::TypeOrValueExists => write!(f, "attribute or value exists"),
            Self::NoSuchAttribute => write!(f, "no such attribute"),
            Self::ConstraintViolation(text) => write!(f, "constraint violation: {text}"),
            Self::InvalidSyntax(text) => write!(f, "invalid attribute syntax: {text}"),
            Self::Busy(text) => write!(f, "busy: {text}"),
            Self::Other(text) => write!(f, "operations error: {text}"),
            Self::Abandoned => write!(f, "abandoned"),
            Self::NoOperation => write!(f, "no operation performed"),
        }
    }
}

impl std::error::Error for ModifyError {}
