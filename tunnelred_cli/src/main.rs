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

//! Thin CLI driver (spec.md §6): loads a Tunnel Network, builds the reduction formula for a
//! given path length `k`, solves it against [`tunnelred_solver::CnfContext`], and either
//! prints the decoded path (exit 0), reports UNSAT (exit 1), or reports an error (exit 2).
//! Never part of the core: all it does is wire `tunnelred` and `tunnelred_solver` together.

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use tunnelred::namer::VarNamer;
use tunnelred::network::{Network, NetworkModel};
use tunnelred::{decode, printer, reduction};
use tunnelred_solver::CnfContext;

/// Decides whether a Tunnel Network admits a well-formed path of exactly `k` transitions from
/// its source to its sink.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a network document (see SPEC_FULL.md §3 for the JSON schema).
    network_file: String,

    /// The exact path length to search for.
    k: i64,

    /// Raise the log level to show `debug`/`trace` diagnostics from the clause builders.
    #[arg(short, long)]
    verbose: bool,

    /// Also run the model pretty-printer (spec.md §4.5) over every position, even on success.
    #[arg(long)]
    print_model: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }
    pretty_env_logger::init();

    match run(&args) {
        Ok(true) => ExitCode::from(0),
        Ok(false) => {
            println!("UNSAT");
            ExitCode::from(1)
        }
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Returns `Ok(true)` on SAT (having already printed the path), `Ok(false)` on UNSAT.
fn run(args: &Args) -> tunnelred::Result<bool> {
    let network = Network::from_json_file(&args.network_file)?;
    info!("loaded network with {} nodes from {}", network.num_nodes(), args.network_file);

    let ctx = CnfContext::new();
    let namer = VarNamer::new();
    let top = reduction::build(&ctx, &namer, &network, args.k)?;

    let model = match ctx.solve(top)? {
        Some(model) => model,
        None => return Ok(false),
    };

    if args.print_model {
        print!("{}", printer::render_model(&ctx, &model, &namer, &network, args.k));
    }

    let path = decode::decode(&ctx, &model, &namer, &network, args.k)?;
    for step in &path {
        println!("{step}");
    }
    Ok(true)
}
