//! Console report formatting.

use crate::parse::StopBoard;

/// One line per route: `"<route>: <stop_name> -> <destination> <eta>"`.
pub fn stop_lines(board: &StopBoard) -> Vec<String> {
    board
        .entries()
        .iter()
        .map(|a| {
            format!(
                "{}: {} -> {} {}",
                a.route_short_name,
                a.stop_name,
                a.destination,
                a.eta()
            )
        })
        .collect()
}

/// `"Route <number>: <duration> min"` followed by the instruction lines.
///
/// `number` is 1-based.
pub fn itinerary_block(number: usize, duration_mins: i64, instructions: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(instructions.len() + 1);
    lines.push(format!("Route {number}: {duration_mins} min"));
    lines.extend(instructions.iter().cloned());
    lines
}
