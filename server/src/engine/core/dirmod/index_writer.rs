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

//! The index writer (spec.md §4.4). Deletes precede adds *globally*: every
//! delta's delete half is issued before any delta's add half, so an
//! attribute whose value set is unchanged in total but reordered across two
//! deltas still lands in the correct multiset state.

use super::{
    collab::{IndexOp, IndexStore, TxnId},
    entry::EntryId,
    index_delta::IndexDelta,
};

#[derive(Debug, Clone, PartialEq)]
pub struct IndexWriteError(pub String);

pub fn write(index: &dyn IndexStore, txn: TxnId, entry_id: EntryId, deltas: &[IndexDelta]) -> Result<(), IndexWriteError> {
    for delta in deltas {
        index
            .index_write(txn, &delta.descriptor, &delta.delete_values, entry_id, IndexOp::Delete)
            .map_err(|_| IndexWriteError(format!("index delete failed for '{}'", delta.descriptor.name())))?;
    }
    for delta in deltas {
        index
            .index_write(txn, &delta.descriptor, &delta.add_values, entry_id, IndexOp::Add)
            .map_err(|_| IndexWriteError(format!("index add failed for '{}'", delta.descriptor.name())))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::dirmod::{entry::AttrDescriptor, entry::AttrValue, testutil::FakeIndexStore};

    #[test]
    fn deletes_precede_adds_globally() {
        let store = FakeIndexStore::new();
        let a = AttrDescriptor::new("a", false, false);
        let b = AttrDescriptor::new("b", false, false);
        let deltas = vec![
            IndexDelta {
                descriptor: a.clone(),
                delete_values: vec![AttrValue::from_str("a-old")],
                add_values: vec![AttrValue::from_str("a-new")],
            },
            IndexDelta {
                descriptor: b.clone(),
                delete_values: vec![AttrValue::from_str("b-old")],
                add_values: vec![AttrValue::from_str("b-new")],
            },
        ];
        write(&store, TxnId(1), 42, &deltas).unwrap();
        let ops = store.ops();
        let first_add = ops.iter().position(|(op, _, _)| *op == IndexOp::Add).unwrap();
        let last_delete = ops.iter().rposition(|(op, _, _)| *op == IndexOp::Delete).unwrap();
        assert!(last_delete < first_add);
    }
}
