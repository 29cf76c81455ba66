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

//! The coordinator's tunables (spec.md §4.5), deserialized the way
//! `engine::config::Configuration`'s sub-sections are: a flat `Deserialize`
//! struct with `#[serde(default = ...)]` falling back to the original's
//! compiled-in defaults when a field is absent from the config file.

use serde::Deserialize;

fn default_deadlock_report_threshold() -> u32 {
    100
}
fn default_checkpoint_min_pages() -> usize {
    4096
}
fn default_checkpoint_min_secs() -> u64 {
    120
}
fn default_checkpoint_enabled() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoordinatorConfig {
    /// retries past this count are logged as a slow/stuck operation; the
    /// retry loop itself never gives up on its own (spec.md §4.5)
    #[serde(default = "default_deadlock_report_threshold")]
    pub deadlock_report_threshold: u32,
    /// whether a successful commit triggers a transactional checkpoint at
    /// all; the original's `bdb->bi_txn_cp` (spec.md §4.5, "Checkpoint")
    #[serde(default = "default_checkpoint_enabled")]
    pub checkpoint_enabled: bool,
    /// `txn_checkpoint`'s `min_pages` argument
    #[serde(default = "default_checkpoint_min_pages")]
    pub checkpoint_min_pages: usize,
    /// `txn_checkpoint`'s `min_secs` argument
    #[serde(default = "default_checkpoint_min_secs")]
    pub checkpoint_min_secs: u64,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            deadlock_report_threshold: default_deadlock_report_threshold(),
            checkpoint_enabled: default_checkpoint_enabled(),
            checkpoint_min_pages: default_checkpoint_min_pages(),
            checkpoint_min_secs: default_checkpoint_min_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_compiled_in_values() {
        let cfg: CoordinatorConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, CoordinatorConfig::default());
    }

    #[test]
    fn partial_yaml_only_overrides_given_fields() {
        let cfg: CoordinatorConfig = serde_yaml::from_str("deadlock_report_threshold: 5").unwrap();
        assert_eq!(cfg.deadlock_report_threshold, 5);
        assert_eq!(cfg.checkpoint_min_pages, default_checkpoint_min_pages());
    }

    #[test]
    fn checkpoint_enabled_defaults_true_and_can_be_disabled() {
        let cfg: CoordinatorConfig = serde_yaml::from_str("{}").unwrap();
        assert!(cfg.checkpoint_enabled);
        let cfg: CoordinatorConfig = serde_yaml::from_str("checkpoint_enabled: false").unwrap();
        assert!(!cfg.checkpoint_enabled);
    }
}
