//! `routemap report` - every query over the whole map at once

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use crate::commands::network::check_connectivity;
use routemap_core::error::Result;
use routemap_core::graph::{Distance, Graph, PathResult};

/// Shortest route for every unordered pair of localities, in name order
pub fn all_pairs_shortest(graph: &Graph) -> Result<Vec<PathResult>> {
    let nodes = graph.nodes();
    let mut results = Vec::new();
    for (i, from) in nodes.iter().enumerate() {
        for to in &nodes[i + 1..] {
            results.push(graph.shortest_path(from, to)?);
        }
    }
    Ok(results)
}

pub fn handle_report(ctx: &CommandContext, max_distance: f64) -> Result<()> {
    let graph = &ctx.graph;
    let checks = check_connectivity(graph, &[ctx.config.connectivity])?;
    let connected = checks.iter().all(|c| c.connected);
    let pairs = all_pairs_shortest(graph)?;
    let short = graph.nodes_with_all_connections_below(max_distance);

    tracing::debug!(
        pairs = pairs.len(),
        short_connections = short.len(),
        connected,
        "report"
    );

    match ctx.cli.format {
        OutputFormat::Human => {
            println!(
                "Map: {} localities, {} connections",
                graph.node_count(),
                graph.edge_count()
            );
            println!("Connected: {}", if connected { "yes" } else { "no" });

            println!();
            println!("Shortest routes:");
            for result in &pairs {
                match result.route() {
                    Some(route) => println!(
                        "  {} -> {}: {} km via {}",
                        result.from, result.to, route.distance, route
                    ),
                    None => println!("  {} -> {}: unreachable", result.from, result.to),
                }
            }

            println!();
            println!(
                "Localities with every connection under {} km:",
                Distance::new(max_distance)
            );
            if short.is_empty() {
                println!("  (none)");
            }
            for locality in &short {
                println!("  {}", locality);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "localities": graph.node_count(),
                "connections": graph.edge_count(),
                "connected": connected,
                "connectivity_method": ctx.config.connectivity,
                "shortest_routes": pairs,
                "short_connections": {
                    "max_distance": max_distance,
                    "localities": short,
                },
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
