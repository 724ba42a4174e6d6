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

//! φ1 — Existence & uniqueness of configuration.
//!
//! At every position `p ∈ [0,k]`: at least one `(u,h)` pair is live, and every distinct pair
//! of live candidates is mutually exclusive (pairwise at-most-one, mandated for clarity by
//! spec.md §4.2; a ladder encoding would preserve the same models but isn't needed at the
//! scale this core targets).

use itertools::Itertools;

use crate::namer::VarNamer;
use crate::network::NetworkModel;
use crate::solver::SolverContext;
use crate::stack::stack_size;

/// Builds φ1 over every position `p ∈ [0,k]`.
pub fn build<C: SolverContext>(
    ctx: &C,
    namer: &VarNamer<C>,
    network: &dyn NetworkModel,
    k: i64,
) -> C::Var {
    let n = network.num_nodes();
    let h_max = stack_size(k);

    let mut per_position = Vec::with_capacity((k + 1) as usize);
    for p in 0..=k {
        let mut candidates = Vec::with_capacity(n * h_max as usize);
        for h in 0..h_max {
            for u in 0..n {
                candidates.push(namer.path(ctx, u, p, h));
            }
        }

        let existence = ctx.or(&candidates);

        let pairs: Vec<C::Var> = candidates
            .iter()
            .copied()
            .tuple_combinations()
            .map(|(a, b)| ctx.or(&[ctx.not(a), ctx.not(b)]))
            .collect();
        let at_most_one = ctx.and(&pairs);

        per_position.push(ctx.and(&[existence, at_most_one]));
    }
    ctx.and(&per_position)
}
