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

//! φ2 — Boundary: the path starts at `source` with an empty stack `[4]` and ends at `sink`
//! with the same.

use crate::namer::VarNamer;
use crate::network::NetworkModel;
use crate::solver::SolverContext;

/// Builds φ2: `x[source,0,0] ∧ y4[0,0] ∧ x[sink,k,0] ∧ y4[k,0]`.
pub fn build<C: SolverContext>(
    ctx: &C,
    namer: &VarNamer<C>,
    network: &dyn NetworkModel,
    k: i64,
) -> C::Var {
    let init = namer.path(ctx, network.initial(), 0, 0);
    let init_four = namer.four(ctx, 0, 0);
    let fin = namer.path(ctx, network.final_node(), k, 0);
    let fin_four = namer.four(ctx, k, 0);
    ctx.and(&[init, init_four, fin, fin_four])
}
