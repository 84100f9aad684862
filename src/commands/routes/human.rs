use crate::cli::Cli;
use routemap_core::graph::{PathResult, Route};

/// Output a single-pair result in human-readable format
pub fn output_path(cli: &Cli, result: &PathResult) {
    let Some(route) = result.route() else {
        if !cli.quiet {
            println!("No route from {} to {}", result.from, result.to);
        }
        return;
    };

    println!("{}", route);
    if !cli.quiet {
        println!(
            "Distance: {} km ({} {})",
            route.distance,
            route.hops(),
            if route.hops() == 1 { "hop" } else { "hops" }
        );
    }
}

/// Output enumerated routes in human-readable format
pub fn output_routes(cli: &Cli, from: &str, to: &str, routes: &[Route]) {
    if routes.is_empty() {
        if !cli.quiet {
            println!("No routes from {} to {}", from, to);
        }
        return;
    }

    if !cli.quiet {
        let noun = if routes.len() == 1 { "route" } else { "routes" };
        println!("{} {} from {} to {}:", routes.len(), noun, from, to);
    }
    for (i, route) in routes.iter().enumerate() {
        println!("  {}. {} ({} km)", i + 1, route, route.distance);
    }
}
