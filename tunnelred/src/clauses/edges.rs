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

//! φ11 — Edge constraint: a live configuration at `(u,p,h)` must transition, at `p+1`, into a
//! graph successor of `u` at one of the three reachable heights. A node with no successor at
//! all (at any reachable height) can never be live there.

use crate::namer::VarNamer;
use crate::network::NetworkModel;
use crate::solver::SolverContext;
use crate::stack::stack_size;

fn edge_node<C: SolverContext>(
    ctx: &C,
    namer: &VarNamer<C>,
    network: &dyn NetworkModel,
    h_max: i64,
    p: i64,
    h: i64,
    u: usize,
) -> C::Var {
    let current = namer.path(ctx, u, p, h);

    let mut valid_next = Vec::new();
    for v in 0..network.num_nodes() {
        if !network.is_edge(u, v) {
            continue;
        }
        valid_next.push(namer.path(ctx, v, p + 1, h));
        if h + 1 < h_max {
            valid_next.push(namer.path(ctx, v, p + 1, h + 1));
        }
        if h - 1 >= 0 {
            valid_next.push(namer.path(ctx, v, p + 1, h - 1));
        }
    }

    if valid_next.is_empty() {
        ctx.not(current)
    } else {
        ctx.implies(current, ctx.or(&valid_next))
    }
}

/// Builds φ11 over every `p ∈ [0,k)`, `u ∈ N`, `h ∈ [0,H)`.
pub fn build<C: SolverContext>(
    ctx: &C,
    namer: &VarNamer<C>,
    network: &dyn NetworkModel,
    k: i64,
) -> C::Var {
    let n = network.num_nodes();
    let h_max = stack_size(k);

    let mut constraints = Vec::with_capacity((k * h_max * n as i64) as usize);
    for p in 0..k {
        for h in 0..h_max {
            for u in 0..n {
                constraints.push(edge_node(ctx, namer, network, h_max, p, h, u));
            }
        }
    }
    ctx.and(&constraints)
}
