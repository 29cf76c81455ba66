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

//! The operational-attribute injector (spec.md §4.7). Collapses the
//! original's `back-bdb` inline stamping and the legacy `add_lastmods`
//! path (and the independent copy the shell backend kept, see
//! `original_source/servers/slapd/back-shell/modify.c`) into one contract:
//! strip user attempts to set the four maintained attributes, then prepend
//! replacement modifications stamping this operation.
//!
//! Creation attributes (`creatorsName`/`createTimestamp`) are only
//! (re)injected when `creating` is set — an ordinary modify never rewrites
//! them, matching the original setting creation stamps once. See
//! SPEC_FULL.md's Open Question #1.

use super::{
    clock::now_utc_guarded,
    collab::SchemaValidator,
    entry::AttrValue,
    modification::{ModList, ModOp, Modification},
};

pub const ATTR_MODIFIERS_NAME: &str = "modifiersName";
pub const ATTR_MODIFY_TIMESTAMP: &str = "modifyTimestamp";
pub const ATTR_CREATORS_NAME: &str = "creatorsName";
pub const ATTR_CREATE_TIMESTAMP: &str = "createTimestamp";

const MAINTAINED: [&str; 4] = [
    ATTR_MODIFIERS_NAME,
    ATTR_MODIFY_TIMESTAMP,
    ATTR_CREATORS_NAME,
    ATTR_CREATE_TIMESTAMP,
];

fn is_maintained(name: &str) -> bool {
    MAINTAINED.iter().any(|m| m.eq_ignore_ascii_case(name))
}

/// `authz_dn` is `None` for an anonymous bind, in which case the sentinel
/// `"anonymous"` is recorded, matching the original's unauthenticated
/// modifiersName convention.
pub fn inject(modlist: ModList, authz_dn: Option<&str>, is_shadow: bool, creating: bool, schema: &dyn SchemaValidator) -> ModList {
    if is_shadow {
        // a shadow/replica applies an already-stamped change from its
        // master; re-stamping here would overwrite the master's timestamp
        return modlist;
    }

    let mut out: ModList = modlist.into_iter().filter(|m| !is_maintained(m.descriptor.name())).collect();

    let modifier = authz_dn.unwrap_or("anonymous").to_owned();
    let timestamp = now_utc_guarded();

    let mut prefix = Vec::with_capacity(4);
    if creating {
        if let Some(d) = schema.resolve(ATTR_CREATORS_NAME) {
            prefix.push(Modification::new(ModOp::Replace, d, vec![AttrValue::from_str(&modifier)]));
        }
        if let Some(d) = schema.resolve(ATTR_CREATE_TIMESTAMP) {
            prefix.push(Modification::new(ModOp::Replace, d, vec![AttrValue::from_str(&timestamp)]));
        }
    }
    if let Some(d) = schema.resolve(ATTR_MODIFIERS_NAME) {
        prefix.push(Modification::new(ModOp::Replace, d, vec![AttrValue::from_str(&modifier)]));
    }
    if let Some(d) = schema.resolve(ATTR_MODIFY_TIMESTAMP) {
        prefix.push(Modification::new(ModOp::Replace, d, vec![AttrValue::from_str(&timestamp)]));
    }

    prefix.extend(out.drain(..));
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::dirmod::{entry::AttrDescriptor, testutil::SimpleSchema};

    #[test]
    fn strips_user_supplied_modify_timestamp() {
        let schema = SimpleSchema::new();
        let user_ts = AttrDescriptor::new(ATTR_MODIFY_TIMESTAMP, true, true);
        let modlist = vec![Modification::new(ModOp::Replace, user_ts, vec![AttrValue::from_str("19700101000000Z")])];
        let injected = inject(modlist, Some("cn=admin"), false, false, &schema);
        let stamp = injected
            .iter()
            .find(|m| m.descriptor.name().eq_ignore_ascii_case(ATTR_MODIFY_TIMESTAMP))
            .unwrap();
        assert_ne!(stamp.values[0].as_str(), Some("19700101000000Z"));
    }

    #[test]
    fn anonymous_modifier_gets_sentinel() {
        let schema = SimpleSchema::new();
        let injected = inject(vec![], None, false, false, &schema);
        let modifier = injected
            .iter()
            .find(|m| m.descriptor.name().eq_ignore_ascii_case(ATTR_MODIFIERS_NAME))
            .unwrap();
        assert_eq!(modifier.values[0].as_str(), Some("anonymous"));
    }

    #[test]
    fn shadow_backend_passes_modlist_through_unchanged() {
        let schema = SimpleSchema::new();
        let d = AttrDescriptor::new(ATTR_MODIFY_TIMESTAMP, true, true);
        let modlist = vec![Modification::new(ModOp::Replace, d, vec![AttrValue::from_str("19700101000000Z")])];
        let injected = inject(modlist.clone(), Some("cn=admin"), true, false, &schema);
        assert_eq!(injected.len(), modlist.len());
        assert_eq!(injected[0].values[0].as_str(), Some("19700101000000Z"));
    }

    #[test]
    fn creation_stamps_only_injected_when_creating() {
        let schema = SimpleSchema::new();
        let not_creating = inject(vec![], Some("cn=admin"), false, false, &schema);
        assert!(!not_creating
            .iter()
            .any(|m| m.descriptor.name().eq_ignore_ascii_case(ATTR_CREATORS_NAME)));
        let creating = inject(vec![], Some("cn=admin"), false, true, &schema);
        assert!(creating
            .iter()
            .any(|m| m.descriptor.name().eq_ignore_ascii_case(ATTR_CREATORS_NAME)));
    }
}
