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

//! φ7 — Top-of-stack admissibility: a live node whose capability set accepts no action with
//! a given input-top protocol cannot have that protocol on top of stack.

use crate::action::{Protocol, ALL_ACTIONS};
use crate::namer::VarNamer;
use crate::network::NetworkModel;
use crate::solver::SolverContext;
use crate::stack::stack_size;

fn accepts(network: &dyn NetworkModel, u: usize, top: Protocol) -> bool {
    ALL_ACTIONS.iter().any(|&a| a.input_top() == top && network.node_has_action(u, a))
}

/// Builds φ7 over every `p ∈ [0,k)`.
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
            for u in 0..n {
                let active = namer.path(ctx, u, p, h);
                if !accepts(network, u, Protocol::Four) {
                    let y4 = namer.four(ctx, p, h);
                    constraints.push(ctx.implies(active, ctx.not(y4)));
                }
                if !accepts(network, u, Protocol::Six) {
                    let y6 = namer.six(ctx, p, h);
                    constraints.push(ctx.implies(active, ctx.not(y6)));
                }
            }
        }
    }
    ctx.and(&constraints)
}
