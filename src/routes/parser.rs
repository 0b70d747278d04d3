// Legacy route file parser
//
// Lines look like `<address>/<prefix> via <gateway> dev <interface>`. Only
// lines starting with a digit 1-9 are treated as routes; comments, blank
// lines and `default ...` entries are skipped without complaint.

use super::{LineError, Route, RouteParseError};

/// What to do with a route-looking line that cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Collect every malformed line and fail the whole run
    #[default]
    Abort,
    /// Drop malformed lines with a warning and keep going
    Skip,
}

/// Routes in output order, plus whatever was skipped along the way
#[derive(Debug, Clone, Default)]
pub struct ParsedRoutes {
    pub routes: Vec<Route>,
    pub skipped: Vec<LineError>,
}

/// Parse a single line.
///
/// Returns `Ok(None)` for lines that are not route entries at all.
pub fn parse_line(line: &str) -> Result<Option<Route>, RouteParseError> {
    let line = line.trim();

    match line.chars().next() {
        Some('1'..='9') => {}
        _ => return Ok(None),
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let destination = parts[0];

    let (address, prefix) = destination
        .split_once('/')
        .ok_or_else(|| RouteParseError::MissingPrefix(destination.to_string()))?;
    if prefix.contains('/') {
        return Err(RouteParseError::MultiplePrefixSeparators(destination.to_string()));
    }
    if address.is_empty() || prefix.is_empty() {
        return Err(RouteParseError::EmptyField(destination.to_string()));
    }

    // parts[1] is the `via` keyword
    let gateway = parts
        .get(2)
        .ok_or(RouteParseError::MissingGateway(parts.len()))?;

    Route::new(address, prefix, gateway).map(Some)
}

/// Parse a whole legacy route file and sort the result by address.
///
/// The sort is stable, so routes sharing an address stay in file order.
pub fn parse_routes(input: &str, policy: MalformedPolicy) -> Result<ParsedRoutes, Vec<LineError>> {
    let mut parsed = ParsedRoutes::default();
    let mut errors = Vec::new();

    for (index, line) in input.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(route)) => {
                tracing::debug!(
                    "line {}: {} mask {} via {}",
                    index + 1,
                    route.address(),
                    route.netmask(),
                    route.gateway()
                );
                parsed.routes.push(route);
            }
            Ok(None) => {
                tracing::trace!("line {}: not a route, skipped", index + 1);
            }
            Err(reason) => {
                let error = LineError {
                    line_number: index + 1,
                    line: line.trim().to_string(),
                    reason,
                };
                match policy {
                    MalformedPolicy::Abort => errors.push(error),
                    MalformedPolicy::Skip => {
                        tracing::warn!("Skipping malformed {}", error);
                        parsed.skipped.push(error);
                    }
                }
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    parsed.routes.sort_by_key(Route::order_key);
    Ok(parsed)
}
