//! Convert legacy static route files (`10.0.0.0/8 via 10.0.0.1 dev eth0`)
//! into the indexed `ADDRESSn`/`NETMASKn`/`GATEWAYn`/`METRICn` format.
//!
//! [`convert::convert`] is the pure text-to-text core; [`output`] and
//! [`config`] hold everything that touches the filesystem or command line.

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod routes;

pub use convert::{Conversion, convert};
pub use error::{AppError, AppResult};
pub use routes::parser::MalformedPolicy;
