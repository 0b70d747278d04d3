// Indexed key=value renderer for NetworkManager-style route files

use super::Route;
use std::fmt::Write;

/// Render routes as `ADDRESSn`/`NETMASKn`/`GATEWAYn`/`METRICn` groups.
///
/// `n` is the position in `routes`, not the order key.
pub fn render_routes(routes: &[Route]) -> String {
    let mut output = String::new();

    for (index, route) in routes.iter().enumerate() {
        // Writing to a String cannot fail
        let _ = writeln!(output, "ADDRESS{}={}", index, route.address());
        let _ = writeln!(output, "NETMASK{}={}", index, route.netmask());
        let _ = writeln!(output, "GATEWAY{}={}", index, route.gateway());
        let _ = writeln!(output, "METRIC{}=0", index);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_two_routes() {
        let routes = vec![
            Route::new("10.0.0.5", "8", "10.0.0.1").unwrap(),
            Route::new("192.168.1.100", "24", "192.168.151.1").unwrap(),
        ];
        let expected = "ADDRESS0=10.0.0.5\n\
                        NETMASK0=255.0.0.0\n\
                        GATEWAY0=10.0.0.1\n\
                        METRIC0=0\n\
                        ADDRESS1=192.168.1.100\n\
                        NETMASK1=255.255.255.0\n\
                        GATEWAY1=192.168.151.1\n\
                        METRIC1=0\n";
        assert_eq!(render_routes(&routes), expected);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_routes(&[]), "");
    }
}
