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

//! Pre/post-read snapshot (spec.md §4.6). A snapshot is an
//! attribute-filtered, owned copy of an entry image; its lifetime is the
//! operation's, same as the original's operation-scoped memory context —
//! here that's just ordinary ownership, freed on every exit path by drop.

use super::entry::{Attribute, Entry, EntryId};

#[derive(Debug, Clone)]
pub struct AttributeSnapshot {
    pub entry_id: EntryId,
    pub attrs: Vec<Attribute>,
}

/// Capture the attributes named by `selector` (case-insensitive; an empty
/// selector captures every user attribute) from `entry`.
pub fn capture(entry: &Entry, selector: &[String]) -> AttributeSnapshot {
    let attrs = if selector.is_empty() {
        entry.attrs().to_vec()
    } else {
        entry
            .attrs()
            .iter()
            .filter(|a| selector.iter().any(|s| s.eq_ignore_ascii_case(a.descriptor().name())))
            .cloned()
            .collect()
    };
    AttributeSnapshot {
        entry_id: entry.id(),
        attrs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::dirmod::entry::{AttrDescriptor, AttrValue, Dn};

    #[test]
    fn empty_selector_captures_everything() {
        let d = AttrDescriptor::new("cn", true, false);
        let entry = Entry::new(1, Dn::root(), vec![Attribute::new(d, vec![AttrValue::from_str("a")], vec![])]);
        let snap = capture(&entry, &[]);
        assert_eq!(snap.attrs.len(), 1);
    }

    #[test]
    fn selector_filters_by_name() {
        let cn = AttrDescriptor::new("cn", true, false);
        let sn = AttrDescriptor::new("sn", true, false);
        let entry = Entry::new(
            1,
            Dn::root(),
            vec![
                Attribute::new(cn, vec![AttrValue::from_str("a")], vec![]),
                Attribute::new(sn, vec![AttrValue::from_str("b")], vec![]),
            ],
        );
        let snap = capture(&entry, &["cn".to_owned()]);
        assert_eq!(snap.attrs.len(), 1);
        assert_eq!(snap.attrs[0].descriptor().name(), "cn");
    }
}
