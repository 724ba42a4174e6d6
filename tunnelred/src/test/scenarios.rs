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

//! Scenario tests against [`super::fake::FakeContext`], covering spec.md §8.

use std::collections::HashSet;

use crate::action::Action;
use crate::decode::decode;
use crate::error::Error;
use crate::namer::VarNamer;
use crate::network::Network;
use crate::reduction;
use crate::solver::SolverContext;

use super::fake::FakeContext;

fn caps(actions: &[Action]) -> HashSet<Action> {
    actions.iter().copied().collect()
}

/// S1: a direct transmit-only hop is satisfiable and decodes to a single transmit step.
#[test]
fn s1_direct_transmit_is_reachable() {
    let net = Network::new(
        vec!["A".into(), "B".into()],
        vec![caps(&[Action::Transmit4]), caps(&[])],
        &[(0, 1)],
        0,
        1,
    )
    .unwrap();

    let ctx = FakeContext::new();
    let namer = VarNamer::new();
    let top = reduction::build(&ctx, &namer, &net, 1).unwrap();
    let model = ctx.solve(top).expect("expected SAT");

    let path = decode(&ctx, &model, &namer, &net, 1).unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].action, Action::Transmit4);
    assert_eq!(path[0].src, 0);
    assert_eq!(path[0].tgt, 1);
}

/// S2: a push immediately followed by a pop on the matching protocol is satisfiable.
#[test]
fn s2_push_pop_round_trip() {
    let net = Network::new(
        vec!["A".into(), "B".into(), "C".into()],
        vec![caps(&[Action::Push44]), caps(&[Action::Pop44]), caps(&[])],
        &[(0, 1), (1, 2)],
        0,
        2,
    )
    .unwrap();

    let ctx = FakeContext::new();
    let namer = VarNamer::new();
    let top = reduction::build(&ctx, &namer, &net, 2).unwrap();
    let model = ctx.solve(top).expect("expected SAT");

    let path = decode(&ctx, &model, &namer, &net, 2).unwrap();
    assert_eq!(path.len(), 2);
    assert!(path[0].action.is_push());
    assert_eq!(path[0].src, 0);
    assert_eq!(path[0].tgt, 1);
    assert!(path[1].action.is_pop());
    assert_eq!(path[1].src, 1);
    assert_eq!(path[1].tgt, 2);
}

/// S3: a node with no matching capability at all makes the hop unreachable.
#[test]
fn s3_missing_capability_is_unsat() {
    let net =
        Network::new(vec!["A".into(), "B".into()], vec![caps(&[]), caps(&[])], &[(0, 1)], 0, 1)
            .unwrap();

    let ctx = FakeContext::new();
    let namer = VarNamer::new();
    let top = reduction::build(&ctx, &namer, &net, 1).unwrap();
    assert!(ctx.solve(top).is_none());
}

/// S4: a requested length shorter than the graph distance between source and sink is unsat.
#[test]
fn s4_length_shorter_than_distance_is_unsat() {
    let net = Network::new(
        vec!["A".into(), "B".into(), "C".into()],
        vec![caps(&[Action::Transmit4]), caps(&[Action::Transmit4]), caps(&[])],
        &[(0, 1), (1, 2)],
        0,
        2,
    )
    .unwrap();

    let ctx = FakeContext::new();
    let namer = VarNamer::new();
    let top = reduction::build(&ctx, &namer, &net, 1).unwrap();
    assert!(ctx.solve(top).is_none());
}

/// S5: a node that can only push, with a path length too short to ever pop it back, is unsat.
#[test]
fn s5_insufficient_stack_budget_is_unsat() {
    let net = Network::new(
        vec!["A".into(), "B".into()],
        vec![caps(&[Action::Push44]), caps(&[])],
        &[(0, 1)],
        0,
        1,
    )
    .unwrap();

    let ctx = FakeContext::new();
    let namer = VarNamer::new();
    let top = reduction::build(&ctx, &namer, &net, 1).unwrap();
    assert!(ctx.solve(top).is_none());
}

/// S6: decoding a model with no live configuration at some position is rejected, not panicked.
#[test]
fn s6_decoder_rejects_corrupt_model() {
    let net =
        Network::new(vec!["A".into(), "B".into()], vec![caps(&[]), caps(&[])], &[], 0, 1).unwrap();

    let ctx = FakeContext::new();
    let namer = VarNamer::new();
    // Every primitive variable false: no `(node,height)` pair is ever live.
    let model = vec![false; 2];

    let err = decode(&ctx, &model, &namer, &net, 1).unwrap_err();
    assert!(matches!(err, Error::ModelCorrupt(_)));
}

/// The boundary clause pins source/sink and the empty-stack invariant at the two endpoints of
/// any satisfiable instance.
#[test]
fn boundary_holds_on_satisfiable_instances() {
    let net = Network::new(
        vec!["A".into(), "B".into()],
        vec![caps(&[Action::Transmit4]), caps(&[])],
        &[(0, 1)],
        0,
        1,
    )
    .unwrap();

    let ctx = FakeContext::new();
    let namer = VarNamer::new();
    let top = reduction::build(&ctx, &namer, &net, 1).unwrap();
    let model = ctx.solve(top).expect("expected SAT");

    assert!(ctx.value(&model, namer.path(&ctx, 0, 0, 0)));
    assert!(ctx.value(&model, namer.four(&ctx, 0, 0)));
    assert!(ctx.value(&model, namer.path(&ctx, 1, 1, 0)));
    assert!(ctx.value(&model, namer.four(&ctx, 1, 0)));
}
