use std::net::{IpAddr, Ipv4Addr, SocketAddr, TcpListener};

use tracing::trace;

use crate::error::PortError;

/// Reserves an ephemeral TCP port on all interfaces and reports it.
///
/// # Errors
/// [`PortError::Bind`] or [`PortError::LocalAddr`]; there is no retry.
///
/// # Example
/// ```
/// let port = wakecast::net::random_port().expect("port");
/// assert_ne!(port, 0);
/// ```
pub fn random_port() -> Result<u16, PortError> {
    random_port_on(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Reserves an ephemeral TCP port on `ip` and reports it.
///
/// # Errors
/// [`PortError::Bind`] if `ip` cannot be bound, [`PortError::LocalAddr`] if the
/// assigned address cannot be read back.
pub fn random_port_on(ip: IpAddr) -> Result<u16, PortError> {
    let listener = TcpListener::bind(SocketAddr::new(ip, 0)).map_err(PortError::Bind)?;
    let port = listener.local_addr().map_err(PortError::LocalAddr)?.port();
    drop(listener);

    trace!(%ip, port, "reserved ephemeral port");
    Ok(port)
}
