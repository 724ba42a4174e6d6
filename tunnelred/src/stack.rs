// tunnelred: Tunnel Network reachability, reduced to propositional logic
// Copyright (C) 2025  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Stack-size policy (S)
//!
//! Derives the maximum stack height bound `H(k)` from the target path length `k`, per
//! spec.md §3: every push must be matched within the remaining budget, so a length-`k` path
//! can never push its stack higher than `k/2 + 1`.

/// `H(k) = k/2 + 1`, the number of distinct heights `0..H(k)` reachable by any well-formed
/// length-`k` path. Caller must ensure `k >= 0`.
pub fn stack_size(k: i64) -> i64 {
    debug_assert!(k >= 0, "stack_size called with negative k");
    k / 2 + 1
}
