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

//! φ8, φ9, φ10 — Stack-content preservation below the modified cell.
//!
//! Which sub-rule applies at `(p,h)` is detected, not named: we express "the next-step live
//! height is `h`, `h+1` or `h−1`" as an implication from a disjunction over `x[·,p+1,·]` at the
//! relevant height, exactly as spec.md §9 recommends, rather than introducing an auxiliary
//! "transition kind" variable.
//!
//! Implemented over every `p ∈ [0,k)` (all `k` transitions). `examples/original_source`'s
//! `tn_stack_preservation_logic` leaves the very last transition (`p = k-1`) entirely
//! unconstrained — an acknowledged gap in that reference (its own comment admits the last
//! position is left as either `true` or "handled specially" and picks `true`). spec.md §4.2
//! explicitly quantifies φ8-10 over "all `p ∈ [0,k)`", so this implementation closes that gap
//! and constrains every transition; see DESIGN.md.

use crate::namer::VarNamer;
use crate::network::NetworkModel;
use crate::solver::SolverContext;
use crate::stack::stack_size;

fn prefix_equal<C: SolverContext>(
    ctx: &C,
    namer: &VarNamer<C>,
    p: i64,
    next_p: i64,
    limit: i64,
) -> C::Var {
    if limit <= 0 {
        return ctx.mk_true();
    }
    let mut eqs = Vec::with_capacity(2 * limit as usize);
    for k_prime in 0..limit {
        let four_eq = ctx.iff(namer.four(ctx, p, k_prime), namer.four(ctx, next_p, k_prime));
        let six_eq = ctx.iff(namer.six(ctx, p, k_prime), namer.six(ctx, next_p, k_prime));
        eqs.push(four_eq);
        eqs.push(six_eq);
    }
    ctx.and(&eqs)
}

fn transmission<C: SolverContext>(
    ctx: &C,
    namer: &VarNamer<C>,
    n: usize,
    p: i64,
    h: i64,
) -> C::Var {
    let cond = ctx.and(&[namer.any_node_at(ctx, n, p, h), namer.any_node_at(ctx, n, p + 1, h)]);
    let preserves = prefix_equal(ctx, namer, p, p + 1, h);
    ctx.implies(cond, preserves)
}

fn encapsulation<C: SolverContext>(
    ctx: &C,
    namer: &VarNamer<C>,
    n: usize,
    h_max: i64,
    p: i64,
    h: i64,
) -> C::Var {
    let next_at_h_plus = if h + 1 < h_max {
        namer.any_node_at(ctx, n, p + 1, h + 1)
    } else {
        ctx.mk_false()
    };
    let cond = ctx.and(&[namer.any_node_at(ctx, n, p, h), next_at_h_plus]);
    let preserves = prefix_equal(ctx, namer, p, p + 1, h + 1);
    ctx.implies(cond, preserves)
}

fn decapsulation<C: SolverContext>(
    ctx: &C,
    namer: &VarNamer<C>,
    n: usize,
    p: i64,
    h: i64,
) -> C::Var {
    let next_at_h_minus =
        if h - 1 >= 0 { namer.any_node_at(ctx, n, p + 1, h - 1) } else { ctx.mk_false() };
    let cond = ctx.and(&[namer.any_node_at(ctx, n, p, h), next_at_h_minus]);
    let preserves = prefix_equal(ctx, namer, p, p + 1, h);
    ctx.implies(cond, preserves)
}

/// Builds the conjunction of φ8, φ9 and φ10 over every `p ∈ [0,k)`, `h ∈ [0,H)`.
pub fn build<C: SolverContext>(
    ctx: &C,
    namer: &VarNamer<C>,
    network: &dyn NetworkModel,
    k: i64,
) -> C::Var {
    let n = network.num_nodes();
    let h_max = stack_size(k);

    let mut per_pos = Vec::with_capacity(k as usize);
    for p in 0..k {
        let mut per_h = Vec::with_capacity(h_max as usize);
        for h in 0..h_max {
            let c1 = transmission(ctx, namer, n, p, h);
            let c2 = encapsulation(ctx, namer, n, h_max, p, h);
            let c3 = decapsulation(ctx, namer, n, p, h);
            per_h.push(ctx.and(&[c1, c2, c3]));
        }
        per_pos.push(ctx.and(&per_h));
    }
    ctx.and(&per_pos)
}
