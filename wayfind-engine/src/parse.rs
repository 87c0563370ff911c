//! Numeric input recovery.

/// Parse edge costs from text, silently dropping unparseable entries.
///
/// Malformed input is recovered locally rather than propagated: the caller
/// receives only the successfully parsed subset, in input order.
pub fn parse_edge_costs<I, S>(inputs: I) -> Vec<f64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .filter_map(|raw| raw.as_ref().trim().parse::<f64>().ok())
        .collect()
}
