//! UDP transport implementation

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::timeout;

use cymple_core::{CympleError, CympleResult};

/// Receive buffer size. A blendshape datagram is 168 bytes; anything the
/// sender could plausibly grow into still fits well below this.
pub const MAX_DATAGRAM_SIZE: usize = 1024;

/// UDP transport for the face receiver
pub struct UdpTransport {
    socket: UdpSocket,
    local_addr: SocketAddr,
}

impl UdpTransport {
    /// Bind to a local address
    pub async fn bind(addr: SocketAddr) -> CympleResult<Self> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|e| CympleError::TransportUnavailable(e.to_string()))?;

        let local_addr = socket
            .local_addr()
            .map_err(|e| CympleError::TransportUnavailable(e.to_string()))?;

        tracing::debug!(%local_addr, "udp transport bound");

        Ok(UdpTransport { socket, local_addr })
    }

    /// Get local address
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Receive one datagram, waiting at most `wait`.
    ///
    /// Elapsing the deadline yields `TransportTimeout`; any socket fault
    /// yields `TransportError`.
    pub async fn recv_timeout(&self, wait: Duration) -> CympleResult<(Vec<u8>, SocketAddr)> {
        let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
        match timeout(wait, self.socket.recv_from(&mut buf)).await {
            Ok(Ok((len, addr))) => {
                buf.truncate(len);
                Ok((buf, addr))
            }
            Ok(Err(e)) => Err(CympleError::TransportError(e.to_string())),
            Err(_) => Err(CympleError::TransportTimeout),
        }
    }

    /// Send raw bytes to a destination (test and diagnostic senders)
    pub async fn send_to(&self, bytes: &[u8], dest: SocketAddr) -> CympleResult<()> {
        self.socket
            .send_to(bytes, dest)
            .await
            .map_err(|e| CympleError::TransportError(e.to_string()))?;
        Ok(())
    }
}
