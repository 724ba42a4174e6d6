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

#![deny(missing_docs)]

//! # tunnelred_solver: a real SAT backend for `tunnelred::SolverContext`
//!
//! `tunnelred` builds its reduction formula purely in terms of the
//! [`tunnelred::SolverContext`] trait, never naming a concrete solver. This crate is the
//! concrete binding: [`CnfContext`] Tseitin-encodes every `and`/`or`/`not` combinator the
//! core requests into CNF as it is built, and [`CnfContext::solve`] hands the accumulated
//! clauses to [`rustsat_minisat::core::Minisat`].
//!
//! Each `and(vars)`/`or(vars)` call allocates one fresh auxiliary variable and records the
//! handful of clauses that make it logically equivalent to the combinator, rather than
//! building an AST that is flattened to CNF afterwards — this keeps memory bounded by the
//! number of combinator calls the core actually makes, at the cost of a few more auxiliary
//! variables than a globally-optimized Tseitin pass would use. That trade is the right one
//! here: spec.md's own design notes call for exactly this "keep the formula purely
//! propositional" style, and the core never inspects a `Var` except to combine it further or
//! read it back out of a model.

use std::cell::RefCell;
use std::collections::HashMap;

use log::trace;
use rustsat::instances::{BasicVarManager, ManageVars};
use rustsat::solvers::{Solve, SolverResult};
use rustsat::types::{Clause, Lit, TernaryVal, Var};
use rustsat_minisat::core::Minisat;
use tunnelred::error::{Error, Result};
use tunnelred::solver::SolverContext;

/// A satisfying assignment produced by [`CnfContext::solve`], snapshotted out of the solver
/// so the solver instance itself can be dropped immediately afterwards (spec.md §5's "release
/// scoped resources along every exit path").
#[derive(Debug, Clone)]
pub struct Model {
    values: HashMap<Var, bool>,
}

impl Model {
    fn value_of(&self, lit: Lit) -> bool {
        let base = self.values.get(&lit.var()).copied().unwrap_or(false);
        if lit.is_pos() {
            base
        } else {
            !base
        }
    }
}

/// Tseitin-to-CNF [`SolverContext`] backed by a real SAT solver.
///
/// One `CnfContext` must be paired with exactly one [`tunnelred::namer::VarNamer`] and
/// consumed by exactly one [`CnfContext::solve`] call, matching the "one namer per solver
/// context" rule of spec.md §5 — sharing a context across unrelated `(network, k)` problems
/// would let their auxiliary variables collide.
pub struct CnfContext {
    var_man: RefCell<BasicVarManager>,
    all_vars: RefCell<Vec<Var>>,
    names: RefCell<HashMap<Var, String>>,
    clauses: RefCell<Vec<Clause>>,
    true_lit: RefCell<Option<Lit>>,
    false_lit: RefCell<Option<Lit>>,
}

impl Default for CnfContext {
    fn default() -> Self {
        CnfContext {
            var_man: RefCell::new(BasicVarManager::default()),
            all_vars: RefCell::new(Vec::new()),
            names: RefCell::new(HashMap::new()),
            clauses: RefCell::new(Vec::new()),
            true_lit: RefCell::new(None),
            false_lit: RefCell::new(None),
        }
    }
}

impl CnfContext {
    /// Creates an empty context with no variables or clauses recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The advisory name passed to [`SolverContext::fresh_bool_var`] for `var`, if any.
    /// Auxiliary Tseitin variables (created by `and`/`or`/the constants) have no name.
    pub fn describe(&self, var: Var) -> Option<String> {
        self.names.borrow().get(&var).cloned()
    }

    fn alloc_var(&self) -> Var {
        let v = self.var_man.borrow_mut().new_var();
        self.all_vars.borrow_mut().push(v);
        v
    }

    fn alloc_aux(&self) -> Lit {
        self.alloc_var().pos_lit()
    }

    fn record(&self, lits: Vec<Lit>) {
        self.clauses.borrow_mut().push(Clause::from_iter(lits));
    }

    fn const_true(&self) -> Lit {
        if let Some(l) = *self.true_lit.borrow() {
            return l;
        }
        let l = self.alloc_aux();
        self.record(vec![l]);
        *self.true_lit.borrow_mut() = Some(l);
        l
    }

    fn const_false(&self) -> Lit {
        if let Some(l) = *self.false_lit.borrow() {
            return l;
        }
        let l = self.alloc_aux();
        self.record(vec![!l]);
        *self.false_lit.borrow_mut() = Some(l);
        l
    }

    /// Solves the accumulated CNF under the extra unit assumption that `top` holds, and
    /// snapshots a [`Model`] on success.
    ///
    /// # Errors
    /// Returns [`Error::SolverError`] if the backend itself fails (as opposed to reporting
    /// UNSAT, which is a normal `Ok(None)`).
    pub fn solve(&self, top: Lit) -> Result<Option<Model>> {
        let num_clauses = self.clauses.borrow().len();
        let num_vars = self.all_vars.borrow().len();
        trace!("dispatching {num_clauses} clauses over {num_vars} variables to minisat");

        let mut solver = Minisat::default();
        for clause in self.clauses.borrow().iter() {
            solver
                .add_clause(clause.clone())
                .map_err(|e| Error::SolverError(format!("adding clause: {e}")))?;
        }
        solver
            .add_clause(Clause::from_iter([top]))
            .map_err(|e| Error::SolverError(format!("adding top-level assumption: {e}")))?;

        match solver.solve().map_err(|e| Error::SolverError(format!("solving: {e}")))? {
            SolverResult::Sat => {
                let mut values = HashMap::with_capacity(num_vars);
                for &v in self.all_vars.borrow().iter() {
                    let val = solver
                        .lit_val(v.pos_lit())
                        .map_err(|e| Error::SolverError(format!("reading model: {e}")))?;
                    values.insert(v, val == TernaryVal::True);
                }
                Ok(Some(Model { values }))
            }
            SolverResult::Unsat => Ok(None),
            SolverResult::Interrupted => {
                Err(Error::SolverError("solver was interrupted before a verdict".into()))
            }
        }
    }
}

impl SolverContext for CnfContext {
    type Var = Lit;
    type Model = Model;

    fn fresh_bool_var(&self, name: &str) -> Lit {
        let v = self.alloc_var();
        self.names.borrow_mut().insert(v, name.to_string());
        v.pos_lit()
    }

    fn and(&self, vars: &[Lit]) -> Lit {
        match vars {
            [] => self.const_true(),
            [only] => *only,
            _ => {
                let aux = self.alloc_aux();
                // aux -> v_i, for each i
                for &v in vars {
                    self.record(vec![!aux, v]);
                }
                // (v_1 & ... & v_n) -> aux
                let mut big: Vec<Lit> = vars.iter().map(|&v| !v).collect();
                big.push(aux);
                self.record(big);
                aux
            }
        }
    }

    fn or(&self, vars: &[Lit]) -> Lit {
        match vars {
            [] => self.const_false(),
            [only] => *only,
            _ => {
                let aux = self.alloc_aux();
                // v_i -> aux, for each i
                for &v in vars {
                    self.record(vec![!v, aux]);
                }
                // aux -> (v_1 | ... | v_n)
                let mut big: Vec<Lit> = vars.to_vec();
                big.push(!aux);
                self.record(big);
                aux
            }
        }
    }

    fn not(&self, v: Lit) -> Lit {
        !v
    }

    fn value(&self, model: &Model, v: Lit) -> bool {
        model.value_of(v)
    }
}
