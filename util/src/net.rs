//! Network helpers for tests and local tooling.

use std::io;
use std::net::TcpListener;

/// Asks the operating system for a currently free TCP port on `host` by
/// binding port 0. The port is released again before returning, so another
/// process can grab it in the meantime.
pub fn free_tcp_port(host: &str) -> io::Result<u16> {
    let listener = TcpListener::bind((host, 0))?;
    Ok(listener.local_addr()?.port())
}

/// Returns a currently free TCP port on localhost.
pub fn localhost_tcp_port() -> io::Result<u16> {
    free_tcp_port("127.0.0.1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ports_are_nonzero_and_bindable() {
        let port = localhost_tcp_port().unwrap();
        assert!(port > 0);

        // the returned port is free again, binding it must work
        let listener = TcpListener::bind(("127.0.0.1", port));
        assert!(listener.is_ok());
    }

    #[test]
    fn unavailable_hosts_are_an_error() {
        assert!(free_tcp_port("192.0.2.123").is_err());
    }
}
