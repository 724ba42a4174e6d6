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

//! φ3 — Height preservation on transmission: a node staying at the same stack height must
//! be capable of transmitting whichever protocol is on top.

use crate::action::Action;
use crate::namer::VarNamer;
use crate::network::NetworkModel;
use crate::solver::SolverContext;
use crate::stack::stack_size;

/// Builds φ3 over every `p ∈ [0,k)`, `u ∈ N`, `h ∈ [0,H)`.
pub fn build<C: SolverContext>(
    ctx: &C,
    namer: &VarNamer<C>,
    network: &dyn NetworkModel,
    k: i64,
) -> C::Var {
    let n = network.num_nodes();
    let h_max = stack_size(k);

    let mut constraints = Vec::new();
    for p in 0..k {
        for h in 0..h_max {
            let next_any_h = namer.any_node_at(ctx, n, p + 1, h);
            for u in 0..n {
                let premise = ctx.and(&[namer.path(ctx, u, p, h), next_any_h]);

                let y4 = namer.four(ctx, p, h);
                let y6 = namer.six(ctx, p, h);
                let can_t4 = ctx.bool_const(network.node_has_action(u, Action::Transmit4));
                let can_t6 = ctx.bool_const(network.node_has_action(u, Action::Transmit6));

                let valid4 = ctx.implies(y4, can_t4);
                let valid6 = ctx.implies(y6, can_t6);
                let conclusion = ctx.and(&[valid4, valid6]);
                constraints.push(ctx.implies(premise, conclusion));
            }
        }
    }
    ctx.and(&constraints)
}
