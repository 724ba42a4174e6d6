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

//! The solver collaborator: an opaque propositional-logic context.
//!
//! The core never touches solver internals (spec.md §6). It only ever builds expressions
//! through this trait and, once a model has been produced elsewhere, reads Boolean values back
//! out of it. `tunnelred_solver::CnfContext` is the concrete binding to a real SAT backend;
//! `tunnelred`'s own unit tests use a small in-memory fake (see `crate::test::fake`) so the
//! core's tests stay solver-agnostic.

use std::fmt::Debug;
use std::hash::Hash;

/// A propositional-logic construction context, and the one polymorphic seam of the core.
///
/// Implementations are free to choose any internal representation (a CNF/Tseitin encoder over
/// a real SAT solver, a direct AST evaluator, ...); the core only ever combines [`Self::Var`]
/// handles through the methods below.
pub trait SolverContext {
    /// An opaque handle to a Boolean-valued expression (a variable, or a constructed formula).
    type Var: Copy + Eq + Hash + Debug;
    /// A satisfying assignment produced by [`Self::solve`] (or however the caller drives solving).
    type Model;

    /// Allocates a fresh, named Boolean variable. Identical inputs are the caller's
    /// responsibility to avoid; distinct calls always yield distinct variables.
    fn fresh_bool_var(&self, name: &str) -> Self::Var;
    /// The conjunction of `vars`. The empty conjunction is `true`.
    fn and(&self, vars: &[Self::Var]) -> Self::Var;
    /// The disjunction of `vars`. The empty disjunction is `false`.
    fn or(&self, vars: &[Self::Var]) -> Self::Var;
    /// Negation.
    fn not(&self, v: Self::Var) -> Self::Var;
    /// `a => b`.
    fn implies(&self, a: Self::Var, b: Self::Var) -> Self::Var {
        self.or(&[self.not(a), b])
    }
    /// `a <=> b`.
    fn iff(&self, a: Self::Var, b: Self::Var) -> Self::Var {
        self.and(&[self.implies(a, b), self.implies(b, a)])
    }
    /// `a xor b`.
    fn xor(&self, a: Self::Var, b: Self::Var) -> Self::Var {
        self.not(self.iff(a, b))
    }
    /// The constant `true`.
    fn mk_true(&self) -> Self::Var {
        self.and(&[])
    }
    /// The constant `false`.
    fn mk_false(&self) -> Self::Var {
        self.or(&[])
    }
    /// Either [`Self::mk_true`] or [`Self::mk_false`], chosen by `b`.
    fn bool_const(&self, b: bool) -> Self::Var {
        if b {
            self.mk_true()
        } else {
            self.mk_false()
        }
    }
    /// Reads the value of `v` under `model`.
    fn value(&self, model: &Self::Model, v: Self::Var) -> bool;
}
