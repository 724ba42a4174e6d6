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

#![cfg(test)]

//! End-to-end tests of the real Tseitin+minisat binding: the core's own unit tests (in
//! `tunnelred/src/test/`) stay solver-agnostic by running against an in-memory fake, so these
//! are the tests that prove [`CnfContext`] actually satisfies `SolverContext`'s contract against
//! a real backend (spec.md §8).

use std::collections::HashSet;

use tunnelred::action::Action;
use tunnelred::decode::decode;
use tunnelred::namer::VarNamer;
use tunnelred::network::Network;
use tunnelred::reduction;
use tunnelred_solver::CnfContext;

fn caps(actions: &[Action]) -> HashSet<Action> {
    actions.iter().copied().collect()
}

/// S1 end-to-end against the real minisat binding: build, solve, decode.
#[test]
fn s1_direct_transmit_round_trips_through_minisat() {
    let net = Network::new(
        vec!["A".into(), "B".into()],
        vec![caps(&[Action::Transmit4]), caps(&[])],
        &[(0, 1)],
        0,
        1,
    )
    .unwrap();

    let ctx = CnfContext::new();
    let namer = VarNamer::new();
    let top = reduction::build(&ctx, &namer, &net, 1).unwrap();
    let model = ctx.solve(top).unwrap().expect("expected SAT");

    let path = decode(&ctx, &model, &namer, &net, 1).unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].action, Action::Transmit4);
    assert_eq!(path[0].src, 0);
    assert_eq!(path[0].tgt, 1);
}

/// S2 end-to-end: a push/pop round trip solved for real.
#[test]
fn s2_push_pop_round_trip_through_minisat() {
    let net = Network::new(
        vec!["A".into(), "B".into(), "C".into()],
        vec![caps(&[Action::Push44]), caps(&[Action::Pop44]), caps(&[])],
        &[(0, 1), (1, 2)],
        0,
        2,
    )
    .unwrap();

    let ctx = CnfContext::new();
    let namer = VarNamer::new();
    let top = reduction::build(&ctx, &namer, &net, 2).unwrap();
    let model = ctx.solve(top).unwrap().expect("expected SAT");

    let path = decode(&ctx, &model, &namer, &net, 2).unwrap();
    assert_eq!(path.len(), 2);
    assert!(path[0].action.is_push());
    assert!(path[1].action.is_pop());
}

/// S3 end-to-end: missing capability is genuinely UNSAT under a real solver, not just the
/// in-memory fake used by `tunnelred`'s own unit tests.
#[test]
fn s3_missing_capability_is_unsat_under_minisat() {
    let net =
        Network::new(vec!["A".into(), "B".into()], vec![caps(&[]), caps(&[])], &[(0, 1)], 0, 1)
            .unwrap();

    let ctx = CnfContext::new();
    let namer = VarNamer::new();
    let top = reduction::build(&ctx, &namer, &net, 1).unwrap();
    assert!(ctx.solve(top).unwrap().is_none());
}

/// The empty conjunction/disjunction constants are stable and mutually exclusive.
#[test]
fn constants_are_consistent() {
    use tunnelred::solver::SolverContext;

    let ctx = CnfContext::new();
    let namer: VarNamer<CnfContext> = VarNamer::new();
    let v = namer.path(&ctx, 0, 0, 0);
    let t = ctx.and(&[]);
    let f = ctx.or(&[]);
    let top = ctx.and(&[v, t, ctx.not(f)]);
    let model = ctx.solve(top).unwrap().expect("expected SAT");
    assert!(ctx.value(&model, v));
}
