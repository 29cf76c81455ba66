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

//! Deadlock backoff (spec.md §4.5). `engine::sync::Backoff` spins the CPU
//! then yields to the scheduler — fine for a lock held for a handful of
//! instructions, but a deadlocked *transaction* here can be held up by disk
//! I/O on another thread, so each step sleeps instead of spinning, and the
//! schedule is capped rather than open-ended.

use std::{cell::Cell, thread, time::Duration};

const BASE_MILLIS: u64 = 2;
const MAX_MILLIS: u64 = 256;

/// One coordinator retry loop's backoff state. Not `Sync` — each retry loop
/// owns its own instance, same lifetime as [`Cell`] requires.
pub struct RetryBackoff {
    step: Cell<u32>,
}

impl RetryBackoff {
    pub fn new() -> Self {
        Self { step: Cell::new(0) }
    }
    /// Sleep the next step in the schedule and advance it. Doubles each
    /// call starting from [`BASE_MILLIS`], capped at [`MAX_MILLIS`].
    pub fn wait(&self) {
        thread::sleep(Duration::from_millis(self.next_millis()));
    }
    fn next_millis(&self) -> u64 {
        let step = self.step.get();
        let millis = BASE_MILLIS.saturating_mul(1u64 << step.min(16)).min(MAX_MILLIS);
        self.step.set(step + 1);
        millis
    }
}

impl Default for RetryBackoff {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_doubles_until_capped() {
        let backoff = RetryBackoff::new();
        assert_eq!(backoff.next_millis(), BASE_MILLIS);
        assert_eq!(backoff.next_millis(), BASE_MILLIS * 2);
        assert_eq!(backoff.next_millis(), BASE_MILLIS * 4);
        for _ in 0..20 {
            backoff.next_millis();
        }
        assert_eq!(backoff.next_millis(), MAX_MILLIS);
    }
}
