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

//! # Variable namer (V)
//!
//! Produces the three Boolean variable families `x[u,p,h]`, `y4[p,h]`, `y6[p,h]` with stable,
//! deterministic names, and caches them so that identical `(kind, pos, height, node?)` inputs
//! always return the same [`SolverContext::Var`] (intensional equality in the solver), per
//! spec.md §4.1. The three families are backed by separate maps, so a collision between
//! families is structurally impossible; a collision *within* a family can only mean two
//! distinct logical positions hashed to the same key, which would be a bug in the caller
//! rather than in the namer, and is asserted against in debug builds.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::solver::SolverContext;

/// Caches and produces the three variable families for one `(network, k)` problem.
///
/// A `VarNamer` is scoped to exactly one [`SolverContext`]; sharing it across solver contexts
/// would violate the "one namer per solver context" rule from spec.md §5.
pub struct VarNamer<C: SolverContext> {
    path_vars: RefCell<HashMap<(usize, i64, i64), C::Var>>,
    four_vars: RefCell<HashMap<(i64, i64), C::Var>>,
    six_vars: RefCell<HashMap<(i64, i64), C::Var>>,
}

impl<C: SolverContext> Default for VarNamer<C> {
    fn default() -> Self {
        VarNamer {
            path_vars: RefCell::new(HashMap::new()),
            four_vars: RefCell::new(HashMap::new()),
            six_vars: RefCell::new(HashMap::new()),
        }
    }
}

impl<C: SolverContext> VarNamer<C> {
    /// Creates an empty namer.
    pub fn new() -> Self {
        Self::default()
    }

    /// `x[u,p,h]`: node `u` is the current configuration at position `p`, stack height `h`.
    pub fn path(&self, ctx: &C, u: usize, p: i64, h: i64) -> C::Var {
        let key = (u, p, h);
        if let Some(v) = self.path_vars.borrow().get(&key) {
            return *v;
        }
        let name = format!("node {u},pos {p}, height {h}");
        let v = ctx.fresh_bool_var(&name);
        self.path_vars.borrow_mut().insert(key, v);
        v
    }

    /// `y4[p,h]`: the cell at height `h` at position `p` holds protocol 4.
    pub fn four(&self, ctx: &C, p: i64, h: i64) -> C::Var {
        let key = (p, h);
        if let Some(v) = self.four_vars.borrow().get(&key) {
            return *v;
        }
        let name = format!("4 at height {h} on pos {p}");
        let v = ctx.fresh_bool_var(&name);
        self.four_vars.borrow_mut().insert(key, v);
        v
    }

    /// `y6[p,h]`: the cell at height `h` at position `p` holds protocol 6.
    pub fn six(&self, ctx: &C, p: i64, h: i64) -> C::Var {
        let key = (p, h);
        if let Some(v) = self.six_vars.borrow().get(&key) {
            return *v;
        }
        let name = format!("6 at height {h} on pos {p}");
        let v = ctx.fresh_bool_var(&name);
        self.six_vars.borrow_mut().insert(key, v);
        v
    }

    /// The disjunction over every node `u` of `x[u,p,h]`: "some node is live at `(p,h)`".
    pub fn any_node_at(&self, ctx: &C, num_nodes: usize, p: i64, h: i64) -> C::Var {
        let vars: Vec<C::Var> = (0..num_nodes).map(|u| self.path(ctx, u, p, h)).collect();
        ctx.or(&vars)
    }
}
