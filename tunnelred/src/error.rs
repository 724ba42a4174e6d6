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

//! Error types for the reduction core and its network loader.

use thiserror::Error;

/// Error produced while loading or querying a [`crate::network::Network`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NetworkError {
    /// An edge, `source` or `sink` referred to a node index that doesn't exist.
    #[error("node index {index} is out of range (network has {num_nodes} nodes)")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of nodes actually present.
        num_nodes: usize,
    },
    /// A capability string in the network document did not name one of the ten actions.
    #[error("unknown action name: {0:?}")]
    UnknownAction(String),
    /// The network document could not be parsed as JSON.
    #[error("malformed network document: {0}")]
    Malformed(String),
}

/// Top-level error type for the reduction core.
#[derive(Debug, Error)]
pub enum Error {
    /// `k` was negative, or `source`/`sink` do not name a node of the network.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Propagated from the network loader.
    #[error("network error: {0}")]
    NetworkError(#[from] NetworkError),
    /// The solver collaborator failed to construct or solve the formula.
    #[error("solver error: {0}")]
    SolverError(String),
    /// The decoder could not find a unique live `(node, height)` pair in the model.
    #[error("model corrupt: {0}")]
    ModelCorrupt(String),
    /// An internal invariant of the core was violated (e.g. a namer collision).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
