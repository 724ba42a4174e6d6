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

//! # Tunnel Network
//!
//! The read-only input to the reduction core: a directed graph of nodes, each carrying a
//! capability set drawn from the ten-element [`Action`] set, with a designated `source` and
//! `sink`. This module also ships the network loader (see [`Network::from_json_str`]), which
//! is the concrete realization of the "network loader" collaborator the core consumes.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use petgraph::graph::DiGraph;
use serde::Deserialize;

use crate::action::Action;
use crate::error::{Error, NetworkError};

/// Everything the reduction core needs to know about a Tunnel Network, queried by plain
/// `0..num_nodes()` indices, matching spec.md §6's "Network collaborator".
pub trait NetworkModel {
    /// Number of nodes, `|N|`.
    fn num_nodes(&self) -> usize;
    /// Index of the designated source node.
    fn initial(&self) -> usize;
    /// Index of the designated sink node.
    fn final_node(&self) -> usize;
    /// The human-readable name of node `u`, for diagnostics.
    fn node_name(&self, u: usize) -> &str;
    /// Whether the directed edge `(u, v)` is present.
    fn is_edge(&self, u: usize, v: usize) -> bool;
    /// Whether node `u` has the given action in its capability set.
    fn node_has_action(&self, u: usize, action: Action) -> bool;
}

#[derive(Debug, Clone)]
struct NodeData {
    name: String,
    capabilities: HashSet<Action>,
}

/// A concrete, in-memory Tunnel Network.
#[derive(Debug, Clone)]
pub struct Network {
    graph: DiGraph<NodeData, (), u32>,
    source: usize,
    sink: usize,
}

impl Network {
    /// Builds a network from an explicit node list, edge list, and source/sink indices.
    ///
    /// `capabilities` is indexed in parallel with `names`; both must have one entry per node.
    pub fn new(
        names: Vec<String>,
        capabilities: Vec<HashSet<Action>>,
        edges: &[(usize, usize)],
        source: usize,
        sink: usize,
    ) -> Result<Self, NetworkError> {
        let num_nodes = names.len();
        let mut graph = DiGraph::<NodeData, (), u32>::with_capacity(num_nodes, edges.len());
        for (name, capabilities) in names.into_iter().zip(capabilities) {
            graph.add_node(NodeData { name, capabilities });
        }
        for &(u, v) in edges {
            let ui = check_index(u, num_nodes)?;
            let vi = check_index(v, num_nodes)?;
            graph.add_edge(ui.into(), vi.into(), ());
        }
        check_index(source, num_nodes)?;
        check_index(sink, num_nodes)?;
        Ok(Network { graph, source, sink })
    }

    /// Parses a network document of the form described in SPEC_FULL.md §3.
    pub fn from_json_str(s: &str) -> Result<Self, NetworkError> {
        let doc: NetworkDoc =
            serde_json::from_str(s).map_err(|e| NetworkError::Malformed(e.to_string()))?;
        let num_nodes = doc.nodes.len();
        let mut names = Vec::with_capacity(num_nodes);
        let mut capabilities = Vec::with_capacity(num_nodes);
        for node in doc.nodes {
            let mut caps = HashSet::with_capacity(node.capabilities.len());
            for cap in node.capabilities {
                caps.insert(cap.parse()?);
            }
            names.push(node.name);
            capabilities.push(caps);
        }
        Network::new(names, capabilities, &doc.edges, doc.source, doc.sink)
    }

    /// Loads and parses a network document from a file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| Error::InvalidInput(format!("cannot read network file: {e}")))?;
        Network::from_json_str(&content).map_err(Error::from)
    }
}

fn check_index(index: usize, num_nodes: usize) -> Result<usize, NetworkError> {
    if index < num_nodes {
        Ok(index)
    } else {
        Err(NetworkError::IndexOutOfRange { index, num_nodes })
    }
}

impl NetworkModel for Network {
    fn num_nodes(&self) -> usize {
        self.graph.node_count()
    }

    fn initial(&self) -> usize {
        self.source
    }

    fn final_node(&self) -> usize {
        self.sink
    }

    fn node_name(&self, u: usize) -> &str {
        &self.graph[petgraph::graph::NodeIndex::<u32>::new(u)].name
    }

    fn is_edge(&self, u: usize, v: usize) -> bool {
        self.graph
            .find_edge(petgraph::graph::NodeIndex::<u32>::new(u), petgraph::graph::NodeIndex::<u32>::new(v))
            .is_some()
    }

    fn node_has_action(&self, u: usize, action: Action) -> bool {
        self.graph[petgraph::graph::NodeIndex::<u32>::new(u)].capabilities.contains(&action)
    }
}

#[derive(Debug, Deserialize)]
struct NetworkDoc {
    nodes: Vec<NodeDoc>,
    edges: Vec<(usize, usize)>,
    source: usize,
    sink: usize,
}

#[derive(Debug, Deserialize)]
struct NodeDoc {
    name: String,
    #[serde(default)]
    capabilities: Vec<String>,
}
