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

//! # Model pretty-printer (P)
//!
//! Emits, for each position, the live `(node, height)` pairs and the stack contents
//! left-to-right, for diagnostics. Writes to any [`fmt::Write`] sink rather than only stdout,
//! so a caller can route it through `log::info!` just as easily as printing it directly
//! (mirroring the teacher's `netsim::printer`, which returns formatted `String`s rather than
//! calling `println!` itself).

use std::fmt::{self, Write};

use crate::namer::VarNamer;
use crate::network::NetworkModel;
use crate::solver::SolverContext;
use crate::stack::stack_size;

/// Renders the full per-position state and stack diagnostics for `model` into `out`.
pub fn write_model<C: SolverContext>(
    out: &mut dyn Write,
    ctx: &C,
    model: &C::Model,
    namer: &VarNamer<C>,
    network: &dyn NetworkModel,
    k: i64,
) -> fmt::Result {
    let n = network.num_nodes();
    let h_max = stack_size(k);

    for p in 0..=k {
        write!(out, "At pos {p}:\nState: ")?;
        let mut num_seen = 0;
        for u in 0..n {
            for h in 0..h_max {
                if ctx.value(model, namer.path(ctx, u, p, h)) {
                    write!(out, "({},{}) ", network.node_name(u), h)?;
                    num_seen += 1;
                }
            }
        }
        if num_seen == 0 {
            writeln!(out, "no node at that position!")?;
        } else {
            writeln!(out)?;
        }
        if num_seen > 1 {
            writeln!(out, "several (node,height) pairs live!")?;
        }

        write!(out, "Stack: ")?;
        let mut misdefined = false;
        let mut above_top = false;
        for h in 0..h_max {
            let is4 = ctx.value(model, namer.four(ctx, p, h));
            let is6 = ctx.value(model, namer.six(ctx, p, h));
            match (is4, is6) {
                (true, true) => {
                    write!(out, "|X")?;
                    misdefined = true;
                }
                (true, false) => {
                    write!(out, "|4")?;
                    if above_top {
                        misdefined = true;
                    }
                }
                (false, true) => {
                    write!(out, "|6")?;
                    if above_top {
                        misdefined = true;
                    }
                }
                (false, false) => {
                    write!(out, "| ")?;
                    above_top = true;
                }
            }
        }
        writeln!(out)?;
        if misdefined {
            writeln!(out, "warning: ill-defined stack")?;
        }
    }
    Ok(())
}

/// Convenience wrapper returning the rendering as an owned `String`.
pub fn render_model<C: SolverContext>(
    ctx: &C,
    model: &C::Model,
    namer: &VarNamer<C>,
    network: &dyn NetworkModel,
    k: i64,
) -> String {
    let mut out = String::new();
    write_model(&mut out, ctx, model, namer, network, k).expect("writing to a String cannot fail");
    out
}
