// Legacy route text in, indexed key=value text out. No I/O happens here.

use crate::error::{AppError, AppResult};
use crate::routes::parser::{self, MalformedPolicy};
use crate::routes::render::render_routes;
use crate::routes::{LineError, Route};

/// Result of converting one route file
#[derive(Debug, Clone)]
pub struct Conversion {
    pub routes: Vec<Route>,
    pub rendered: String,
    pub skipped: Vec<LineError>,
}

/// Convert the full text of a legacy route file.
///
/// Fails with [`AppError::MalformedRoutes`] under [`MalformedPolicy::Abort`]
/// if any route-looking line is broken; nothing is rendered in that case.
pub fn convert(input: &str, policy: MalformedPolicy) -> AppResult<Conversion> {
    let parsed = parser::parse_routes(input, policy).map_err(AppError::MalformedRoutes)?;
    let rendered = render_routes(&parsed.routes);

    tracing::info!(
        "Converted {} route(s), skipped {} malformed line(s)",
        parsed.routes.len(),
        parsed.skipped.len()
    );

    Ok(Conversion {
        routes: parsed.routes,
        rendered,
        skipped: parsed.skipped,
    })
}
