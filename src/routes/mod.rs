// Routes module - legacy route parsing, ordering and rendering

pub mod netmask;
pub mod order;
pub mod parser;
pub mod render;

use thiserror::Error;

/// Why a route-looking line could not be turned into a [`Route`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteParseError {
    #[error("expected <address>/<prefix> but found no '/' in {0:?}")]
    MissingPrefix(String),

    #[error("more than one '/' in {0:?}")]
    MultiplePrefixSeparators(String),

    #[error("empty address or prefix in {0:?}")]
    EmptyField(String),

    #[error("expected '<address>/<prefix> via <gateway>' but found {0} token(s)")]
    MissingGateway(usize),

    #[error("address {0:?} does not have four octets")]
    InvalidAddress(String),

    #[error("octet {octet:?} in address {address:?} is not a number between 0 and 255")]
    InvalidOctet { address: String, octet: String },
}

/// A malformed line, kept with its position for reporting
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_number}: {reason} ({line:?})")]
pub struct LineError {
    pub line_number: usize,
    pub line: String,
    pub reason: RouteParseError,
}

/// One static route. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    address: String,
    netmask: String,
    gateway: String,
    order_key: u32,
}

impl Route {
    /// Build a route, expanding a short prefix length into a dotted netmask
    pub fn new(address: &str, prefix: &str, gateway: &str) -> Result<Self, RouteParseError> {
        let order_key = order::order_key(address)?;

        Ok(Route {
            address: address.to_string(),
            netmask: netmask::expand_prefix(prefix).to_string(),
            gateway: gateway.to_string(),
            order_key,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn netmask(&self) -> &str {
        &self.netmask
    }

    pub fn gateway(&self) -> &str {
        &self.gateway
    }

    /// Sort key derived from the address; never rendered
    pub fn order_key(&self) -> u32 {
        self.order_key
    }
}
