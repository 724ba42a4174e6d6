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

//! φ6 — Stack-cell coherence: every cell, at every position, holds exactly one of the two
//! protocols. Cells above the height actually reached by a path are otherwise unconstrained
//! (spec.md §3 invariant 2) — this clause still pins them to *some* single protocol, which is
//! harmless to soundness and completeness since no other clause ever reads an unreached cell's
//! value, but keeps every `y4`/`y6` pair total rather than partial. Matches
//! `examples/original_source`'s unconditional `tn_stack_content_coherence`.

use crate::namer::VarNamer;
use crate::solver::SolverContext;
use crate::stack::stack_size;

/// Builds φ6 over every `p ∈ [0,k]`, `h ∈ [0,H)`.
pub fn build<C: SolverContext>(ctx: &C, namer: &VarNamer<C>, k: i64) -> C::Var {
    let h_max = stack_size(k);
    let mut constraints = Vec::new();
    for p in 0..=k {
        for h in 0..h_max {
            let y4 = namer.four(ctx, p, h);
            let y6 = namer.six(ctx, p, h);
            constraints.push(ctx.xor(y4, y6));
        }
    }
    ctx.and(&constraints)
}
