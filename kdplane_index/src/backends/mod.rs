// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different storage strategies.
//!
//! - `brute`: ordered set with linear-scan queries. The reference answer for every query.
//! - `kd_tree`: 2-d tree alternating vertical and horizontal splits, with rectangle pruning.
//!
//! Pruning note
//! ------------
//! Every k-d tree node owns the rectangle of the plane its subtree can occupy: the root's
//! region clipped by the splitting line of each ancestor. A range query skips a node whose
//! rectangle misses the query rectangle, and a nearest-neighbor query skips a node whose
//! rectangle is no closer than the best distance found so far. Both rules only discard
//! subtrees that cannot contribute, so answers match the brute-force scan exactly.

pub mod brute;
pub mod kd_tree;
