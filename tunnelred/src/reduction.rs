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

//! # Reduction assembler (R)
//!
//! Composes φ1 through φ11 into a single top-level conjunction. The order of conjunction is
//! immaterial for correctness but fixed here for reproducible debugging output (spec.md §4.3).

use log::debug;

use crate::clauses::{
    boundary, decapsulation, edges, encapsulation, existence, feasibility, preservation,
    stack_coherence, transmission,
};
use crate::error::{Error, Result};
use crate::namer::VarNamer;
use crate::network::NetworkModel;
use crate::solver::SolverContext;

/// Builds the full reduction formula for `(network, k)`.
///
/// # Errors
/// Returns [`Error::InvalidInput`] if `k < 0` or `source`/`sink` are not valid node indices.
pub fn build<C: SolverContext>(
    ctx: &C,
    namer: &VarNamer<C>,
    network: &dyn NetworkModel,
    k: i64,
) -> Result<C::Var> {
    if k < 0 {
        return Err(Error::InvalidInput(format!("path length must be non-negative, got {k}")));
    }
    let n = network.num_nodes();
    if network.initial() >= n {
        return Err(Error::InvalidInput(format!("source index {} out of range", network.initial())));
    }
    if network.final_node() >= n {
        return Err(Error::InvalidInput(format!("sink index {} out of range", network.final_node())));
    }

    debug!("building reduction for k={k}, {n} nodes, H(k)={}", crate::stack::stack_size(k));

    let f1 = existence::build(ctx, namer, network, k);
    let f2 = boundary::build(ctx, namer, network, k);
    let f3 = transmission::build(ctx, namer, network, k);
    let f4 = encapsulation::build(ctx, namer, network, k);
    let f5 = decapsulation::build(ctx, namer, network, k);
    let f6 = stack_coherence::build(ctx, namer, k);
    let f7 = feasibility::build(ctx, namer, network, k);
    let f_preservation = preservation::build(ctx, namer, network, k);
    let f_edges = edges::build(ctx, namer, network, k);

    Ok(ctx.and(&[f1, f2, f3, f4, f5, f6, f7, f_preservation, f_edges]))
}
