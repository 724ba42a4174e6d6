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

// An in-memory SolverContext that evaluates its Boolean AST directly instead of delegating to
// a real SAT backend, plus a small backtracking search to satisfy it. Good enough for the
// handful of variables the seed scenarios need; `tunnelred_solver` is what exercises a real
// Tseitin+minisat binding.

use std::cell::RefCell;

use crate::solver::SolverContext;

enum Node {
    Prim(usize),
    Not(usize),
    And(Vec<usize>),
    Or(Vec<usize>),
}

pub struct FakeContext {
    nodes: RefCell<Vec<Node>>,
    num_prims: RefCell<usize>,
}

impl FakeContext {
    pub fn new() -> Self {
        FakeContext { nodes: RefCell::new(Vec::new()), num_prims: RefCell::new(0) }
    }

    fn push(&self, n: Node) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(n);
        nodes.len() - 1
    }

    fn eval3(&self, idx: usize, assignment: &[Option<bool>]) -> Option<bool> {
        match &self.nodes.borrow()[idx] {
            Node::Prim(id) => assignment[*id],
            Node::Not(c) => self.eval3(*c, assignment).map(|b| !b),
            Node::And(cs) => {
                let mut undetermined = false;
                for &c in cs {
                    match self.eval3(c, assignment) {
                        Some(false) => return Some(false),
                        Some(true) => {}
                        None => undetermined = true,
                    }
                }
                if undetermined {
                    None
                } else {
                    Some(true)
                }
            }
            Node::Or(cs) => {
                let mut undetermined = false;
                for &c in cs {
                    match self.eval3(c, assignment) {
                        Some(true) => return Some(true),
                        Some(false) => {}
                        None => undetermined = true,
                    }
                }
                if undetermined {
                    None
                } else {
                    Some(false)
                }
            }
        }
    }

    fn first_unassigned(&self, idx: usize, assignment: &[Option<bool>]) -> Option<usize> {
        match &self.nodes.borrow()[idx] {
            Node::Prim(id) => {
                if assignment[*id].is_none() {
                    Some(*id)
                } else {
                    None
                }
            }
            Node::Not(c) => self.first_unassigned(*c, assignment),
            Node::And(cs) | Node::Or(cs) => {
                cs.iter().find_map(|&c| self.first_unassigned(c, assignment))
            }
        }
    }

    fn dfs(&self, top: usize, assignment: &mut Vec<Option<bool>>) -> bool {
        match self.eval3(top, assignment) {
            Some(true) => return true,
            Some(false) => return false,
            None => {}
        }
        let var = match self.first_unassigned(top, assignment) {
            Some(v) => v,
            None => return false,
        };
        for candidate in [true, false] {
            assignment[var] = Some(candidate);
            if self.dfs(top, assignment) {
                return true;
            }
            assignment[var] = None;
        }
        false
    }

    /// Searches for a satisfying assignment of `top`. Returns `None` on UNSAT.
    pub fn solve(&self, top: usize) -> Option<Vec<bool>> {
        let n = *self.num_prims.borrow();
        let mut assignment = vec![None; n];
        if self.dfs(top, &mut assignment) {
            Some(assignment.into_iter().map(|v| v.unwrap_or(false)).collect())
        } else {
            None
        }
    }
}

impl SolverContext for FakeContext {
    type Var = usize;
    type Model = Vec<bool>;

    fn fresh_bool_var(&self, _name: &str) -> Self::Var {
        let id = {
            let mut n = self.num_prims.borrow_mut();
            let id = *n;
            *n += 1;
            id
        };
        self.push(Node::Prim(id))
    }

    fn and(&self, vars: &[Self::Var]) -> Self::Var {
        self.push(Node::And(vars.to_vec()))
    }

    fn or(&self, vars: &[Self::Var]) -> Self::Var {
        self.push(Node::Or(vars.to_vec()))
    }

    fn not(&self, v: Self::Var) -> Self::Var {
        self.push(Node::Not(v))
    }

    fn value(&self, model: &Self::Model, v: Self::Var) -> bool {
        let assignment: Vec<Option<bool>> = model.iter().map(|&b| Some(b)).collect();
        self.eval3(v, &assignment).unwrap_or(false)
    }
}
