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

//! φ5 — Decapsulation feasibility: a node popping the top cell must be capable of the pop
//! action matching the (revealed-below, discarded-top) protocol pair — the "below,top"
//! convention, see spec.md §9.

use crate::action::{Action, Protocol};
use crate::namer::VarNamer;
use crate::network::NetworkModel;
use crate::solver::SolverContext;
use crate::stack::stack_size;

/// Builds φ5 over `h ∈ [1,H)`. Returns `true` when `H(k) <= 1`, since no pop can then occur.
pub fn build<C: SolverContext>(
    ctx: &C,
    namer: &VarNamer<C>,
    network: &dyn NetworkModel,
    k: i64,
) -> C::Var {
    let h_max = stack_size(k);
    if h_max <= 1 {
        return ctx.mk_true();
    }
    let n = network.num_nodes();

    let mut constraints = Vec::new();
    for p in 0..k {
        for h in 1..h_max {
            let next_any_h_minus = namer.any_node_at(ctx, n, p + 1, h - 1);
            for u in 0..n {
                let premise = ctx.and(&[namer.path(ctx, u, p, h), next_any_h_minus]);

                // discarded top, at (p, h)
                let y4_top = namer.four(ctx, p, h);
                let y6_top = namer.six(ctx, p, h);
                // revealed below, at (p, h-1)
                let y4_under = namer.four(ctx, p, h - 1);
                let y6_under = namer.six(ctx, p, h - 1);

                let combos = [
                    (y4_top, y4_under, Action::pop(Protocol::Four, Protocol::Four)),
                    (y4_top, y6_under, Action::pop(Protocol::Six, Protocol::Four)),
                    (y6_top, y4_under, Action::pop(Protocol::Four, Protocol::Six)),
                    (y6_top, y6_under, Action::pop(Protocol::Six, Protocol::Six)),
                ];
                let clauses: Vec<C::Var> = combos
                    .into_iter()
                    .map(|(top, under, action)| {
                        let has = ctx.bool_const(network.node_has_action(u, action));
                        ctx.implies(ctx.and(&[top, under]), has)
                    })
                    .collect();
                let conclusion = ctx.and(&clauses);
                constraints.push(ctx.implies(premise, conclusion));
            }
        }
    }
    ctx.and(&constraints)
}
