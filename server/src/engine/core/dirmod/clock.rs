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

//! Access to the current-time global is guarded by a dedicated mutex
//! (spec.md §4.7, §5) since it's shared process-wide. `chrono` gives us the
//! `YYYYMMDDhhmmssZ` formatting the original's `ldap_now_time` produces.

use chrono::Utc;
use parking_lot::Mutex;

static CLOCK_GUARD: Mutex<()> = Mutex::new(());

/// LDAP generalized-time-ish stamp: `YYYYMMDDhhmmssZ`.
pub fn now_utc_guarded() -> String {
    let _guard = CLOCK_GUARD.lock();
    Utc::now().format("%Y%m%d%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_has_expected_shape() {
        let stamp = now_utc_guarded();
        assert_eq!(stamp.len(), 15);
        assert!(stamp.ends_with('Z'));
        assert!(stamp[..14].chars().all(|c| c.is_ascii_digit()));
    }
}
