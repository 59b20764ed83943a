//! Receive loop / liveness monitor
//!
//! Runs for the module's entire lifetime on its own task. Every per-packet
//! error is absorbed here; the loop exits only through the stop signal.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tracing::{error, info, warn};

use cymple_core::CympleError;
use cymple_state::TrackingStore;
use cymple_transport::UdpTransport;
use cymple_wire::{decode, HEADER_SIZE};

/// Default receive timeout; one elapsed interval marks the link down
pub const RECV_TIMEOUT: Duration = Duration::from_secs(1);

/// The receive loop, consumed by [`Receiver::run`]
pub struct Receiver {
    transport: UdpTransport,
    store: Arc<TrackingStore>,
    exiting: Arc<AtomicBool>,
    shutdown: Arc<Notify>,
    recv_timeout: Duration,
}

impl Receiver {
    pub fn new(
        transport: UdpTransport,
        store: Arc<TrackingStore>,
        exiting: Arc<AtomicBool>,
        shutdown: Arc<Notify>,
        recv_timeout: Duration,
    ) -> Self {
        Receiver {
            transport,
            store,
            exiting,
            shutdown,
            recv_timeout,
        }
    }

    /// Drive the decode-and-store cycle until the stop signal is observed.
    pub async fn run(self) {
        info!("receive loop started");
        loop {
            if self.exiting.load(Ordering::Acquire) {
                break;
            }
            tokio::select! {
                _ = self.shutdown.notified() => break,
                received = self.transport.recv_timeout(self.recv_timeout) => match received {
                    Ok((datagram, _source)) => self.on_datagram(&datagram),
                    Err(CympleError::TransportTimeout) => self.on_timeout(),
                    // Other socket faults are not fatal; keep listening.
                    Err(e) => error!("receive failed: {e}"),
                },
            }
        }
        info!("receive loop stopped");
    }

    fn on_datagram(&self, datagram: &[u8]) {
        // Runt datagrams don't even count as a liveness signal
        if datagram.len() < HEADER_SIZE {
            return;
        }

        if self.store.mark_connected() {
            info!("connection reestablished");
        }

        match decode(datagram) {
            Ok(frame) => self.store.store_frame(frame),
            Err(e) => warn!("packet discarded: {e}"),
        }
    }

    fn on_timeout(&self) {
        // Only the Connected -> Disconnected edge warns and drops the
        // activation latches; sustained timeouts stay quiet.
        if self.store.mark_disconnected() {
            warn!("connection lost");
            self.store.reset_activation();
        }
    }
}
