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

//! # Model decoder (D)
//!
//! Reconstructs the sequence of `(action, src, tgt)` steps from a satisfying assignment,
//! per spec.md §4.4.

use crate::action::{Action, Protocol};
use crate::error::{Error, Result};
use crate::namer::VarNamer;
use crate::network::NetworkModel;
use crate::path::{Path, Step};
use crate::solver::SolverContext;
use crate::stack::stack_size;

/// Decodes a path of length `k` out of `model`.
///
/// # Errors
/// Returns [`Error::ModelCorrupt`] if, at any position, zero or more than one `(node,height)`
/// pair is live, or a stack cell's protocol cannot be read unambiguously.
pub fn decode<C: SolverContext>(
    ctx: &C,
    model: &C::Model,
    namer: &VarNamer<C>,
    network: &dyn NetworkModel,
    k: i64,
) -> Result<Path> {
    let n = network.num_nodes();
    let h_max = stack_size(k);

    let mut path = Vec::with_capacity(k as usize);
    for p in 0..k {
        let (src, src_h) = unique_live(ctx, model, namer, n, h_max, p)?;
        let (tgt, tgt_h) = unique_live(ctx, model, namer, n, h_max, p + 1)?;

        let action = match tgt_h - src_h {
            0 => Action::transmit(protocol_at(ctx, model, namer, p, src_h)?),
            1 => {
                let below = protocol_at(ctx, model, namer, p, src_h)?;
                let new_top = protocol_at(ctx, model, namer, p + 1, tgt_h)?;
                Action::push(below, new_top)
            }
            -1 => {
                let discarded_top = protocol_at(ctx, model, namer, p, src_h)?;
                let revealed = protocol_at(ctx, model, namer, p + 1, tgt_h)?;
                Action::pop(revealed, discarded_top)
            }
            d => {
                return Err(Error::ModelCorrupt(format!(
                    "height delta {d} out of range {{-1,0,1}} at position {p}"
                )))
            }
        };

        path.push(Step { action, src, tgt });
    }
    Ok(path)
}

fn unique_live<C: SolverContext>(
    ctx: &C,
    model: &C::Model,
    namer: &VarNamer<C>,
    n: usize,
    h_max: i64,
    p: i64,
) -> Result<(usize, i64)> {
    let mut found = None;
    for u in 0..n {
        for h in 0..h_max {
            if ctx.value(model, namer.path(ctx, u, p, h)) {
                if found.is_some() {
                    return Err(Error::ModelCorrupt(format!(
                        "more than one live (node,height) pair at position {p}"
                    )));
                }
                found = Some((u, h));
            }
        }
    }
    found.ok_or_else(|| Error::ModelCorrupt(format!("no live (node,height) pair at position {p}")))
}

fn protocol_at<C: SolverContext>(
    ctx: &C,
    model: &C::Model,
    namer: &VarNamer<C>,
    p: i64,
    h: i64,
) -> Result<Protocol> {
    let is4 = ctx.value(model, namer.four(ctx, p, h));
    let is6 = ctx.value(model, namer.six(ctx, p, h));
    match (is4, is6) {
        (true, false) => Ok(Protocol::Four),
        (false, true) => Ok(Protocol::Six),
        _ => Err(Error::ModelCorrupt(format!(
            "stack cell at (pos {p}, height {h}) is not exactly one of {{4,6}}"
        ))),
    }
}
