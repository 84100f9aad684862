use routemap_core::error::Result;
use routemap_core::graph::{LongestPathStrategy, PathResult, Route};

/// Output a single-pair result in JSON format
pub fn output_path(result: &PathResult, strategy: Option<LongestPathStrategy>) -> Result<()> {
    let mut json = serde_json::to_value(result)?;
    if let Some(strategy) = strategy {
        if let Some(obj_mut) = json.as_object_mut() {
            obj_mut.insert("strategy".to_string(), serde_json::json!(strategy.as_str()));
        }
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

/// Output enumerated routes in JSON format
pub fn output_routes(from: &str, to: &str, routes: &[Route]) -> Result<()> {
    let json_routes: Vec<serde_json::Value> = routes
        .iter()
        .map(|route| {
            serde_json::json!({
                "localities": route.localities,
                "distance": route.distance,
                "hops": route.hops(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "from": from,
        "to": to,
        "count": routes.len(),
        "routes": json_routes,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
