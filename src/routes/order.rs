// Numeric sort key for dotted-decimal addresses

use super::RouteParseError;

/// Compute a key that orders addresses numerically rather than lexically,
/// so `10.0.0.5` sorts before `192.168.1.100` and `1.2.3.10` after `1.2.3.9`.
pub fn order_key(address: &str) -> Result<u32, RouteParseError> {
    let octets: Vec<&str> = address.split('.').collect();
    if octets.len() != 4 {
        return Err(RouteParseError::InvalidAddress(address.to_string()));
    }

    octets.iter().try_fold(0u32, |key, octet| {
        let value: u8 = octet
            .parse()
            .map_err(|_| RouteParseError::InvalidOctet {
                address: address.to_string(),
                octet: octet.to_string(),
            })?;
        Ok((key << 8) | u32::from(value))
    })
}
