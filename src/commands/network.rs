//! `routemap connected`, `short-connections`, `neighbors` and `nodes`

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use routemap_core::error::Result;
use routemap_core::graph::algos::reachable_from;
use routemap_core::graph::{ConnectivityMethod, Distance, Graph};
use serde::Serialize;

/// Connectivity verdict for one traversal method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectivityCheck {
    pub method: ConnectivityMethod,
    pub connected: bool,
    /// Localities reached from the first locality
    pub reachable: usize,
}

/// Run each traversal once from the first locality.
///
/// A map with no localities counts as connected.
pub fn check_connectivity(
    graph: &Graph,
    methods: &[ConnectivityMethod],
) -> Result<Vec<ConnectivityCheck>> {
    let nodes = graph.nodes();
    let total = nodes.len();
    methods
        .iter()
        .map(|&method| -> Result<ConnectivityCheck> {
            let reachable = match nodes.first() {
                Some(start) => reachable_from(graph, start, method)?.len(),
                None => 0,
            };
            Ok(ConnectivityCheck {
                method,
                connected: reachable == total,
                reachable,
            })
        })
        .collect()
}

pub fn handle_connected(ctx: &CommandContext, methods: &[ConnectivityMethod]) -> Result<()> {
    let checks = check_connectivity(&ctx.graph, methods)?;
    let connected = checks.iter().all(|c| c.connected);
    let total = ctx.graph.node_count();

    match ctx.cli.format {
        OutputFormat::Human => {
            for check in &checks {
                if check.connected {
                    println!("connected ({}): yes", check.method.as_str());
                } else {
                    println!(
                        "connected ({}): no, {} of {} localities reachable",
                        check.method.as_str(),
                        check.reachable,
                        total
                    );
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "connected": connected,
                "localities": total,
                "checks": checks,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

pub fn handle_short_connections(ctx: &CommandContext, max_distance: f64) -> Result<()> {
    let localities = ctx.graph.nodes_with_all_connections_below(max_distance);

    match ctx.cli.format {
        OutputFormat::Human => {
            let limit = Distance::new(max_distance);
            if localities.is_empty() {
                if !ctx.cli.quiet {
                    println!("No localities with every connection under {} km", limit);
                }
            } else {
                if !ctx.cli.quiet {
                    println!("Localities with every connection under {} km:", limit);
                }
                for locality in &localities {
                    println!("  {}", locality);
                }
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "max_distance": max_distance,
                "count": localities.len(),
                "localities": localities,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

pub fn handle_neighbors(ctx: &CommandContext, locality: &str) -> Result<()> {
    let neighbors = ctx.graph.neighbors(locality)?;

    match ctx.cli.format {
        OutputFormat::Human => {
            if neighbors.is_empty() && !ctx.cli.quiet {
                println!("{} has no connections", locality);
            }
            for (neighbor, distance) in &neighbors {
                println!("  {} ({} km)", neighbor, distance);
            }
        }
        OutputFormat::Json => {
            let json_neighbors: Vec<serde_json::Value> = neighbors
                .iter()
                .map(|(neighbor, distance)| {
                    serde_json::json!({
                        "locality": neighbor,
                        "distance": distance,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "locality": locality,
                "neighbors": json_neighbors,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

pub fn handle_nodes(ctx: &CommandContext) -> Result<()> {
    let mut entries = Vec::new();
    for locality in ctx.graph.nodes() {
        entries.push((locality, ctx.graph.degree(locality)?));
    }

    match ctx.cli.format {
        OutputFormat::Human => {
            if entries.is_empty() && !ctx.cli.quiet {
                println!("Map has no localities");
            }
            for (locality, degree) in &entries {
                println!(
                    "{} ({} {})",
                    locality,
                    degree,
                    if *degree == 1 { "connection" } else { "connections" }
                );
            }
        }
        OutputFormat::Json => {
            let json_nodes: Vec<serde_json::Value> = entries
                .iter()
                .map(|(locality, degree)| {
                    serde_json::json!({
                        "locality": locality,
                        "connections": degree,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "count": entries.len(),
                "edges": ctx.graph.edge_count(),
                "localities": json_nodes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
