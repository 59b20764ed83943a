//! Host-facing module lifecycle

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use cymple_mapper::ExpressionModel;
use cymple_state::{ConnectionState, TrackingStore};
use cymple_transport::UdpTransport;

use crate::{ModuleConfig, Receiver};

/// Module display name reported to the host
pub const MODULE_NAME: &str = "Cymple Facial Tracking";

/// Sleep appended to every polling tick so the host poll thread
/// does not busy-spin
pub const POLL_INTERVAL: Duration = Duration::from_millis(5);

/// The tracking module: owns the receive loop and serves polling ticks.
///
/// The update/teardown surface is synchronous because the host drives it
/// from plain threads; the receive loop runs on a small runtime owned by
/// the module.
pub struct CympleModule {
    runtime: Option<Runtime>,
    store: Arc<TrackingStore>,
    exiting: Arc<AtomicBool>,
    shutdown: Arc<Notify>,
    receiver: Option<JoinHandle<()>>,
    local_addr: Option<SocketAddr>,
    supported: (bool, bool),
}

impl CympleModule {
    /// Bind the endpoint and start the receive loop.
    ///
    /// Initialization failures are not surfaced as errors: a module that
    /// cannot listen reports (false, false) and stays inert, matching the
    /// host's capability contract.
    pub fn initialize(config: ModuleConfig) -> Self {
        info!("initializing {MODULE_NAME}");

        let store = Arc::new(TrackingStore::new());
        let exiting = Arc::new(AtomicBool::new(false));
        let shutdown = Arc::new(Notify::new());

        let mut module = CympleModule {
            runtime: None,
            store,
            exiting,
            shutdown,
            receiver: None,
            local_addr: None,
            supported: (false, false),
        };

        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(e) => {
                error!("failed to start module runtime: {e}");
                return module;
            }
        };

        let transport = match runtime.block_on(UdpTransport::bind(config.bind_addr)) {
            Ok(transport) => transport,
            Err(e) => {
                warn!("udp endpoint {} unavailable: {e}", config.bind_addr);
                module.runtime = Some(runtime);
                return module;
            }
        };

        info!(
            eye = config.eye_enabled,
            mouth = config.mouth_enabled,
            "module switches"
        );

        module.local_addr = Some(transport.local_addr());
        let receiver = Receiver::new(
            transport,
            Arc::clone(&module.store),
            Arc::clone(&module.exiting),
            Arc::clone(&module.shutdown),
            config.recv_timeout,
        );
        module.receiver = Some(runtime.spawn(receiver.run()));
        module.runtime = Some(runtime);
        module.supported = (config.eye_enabled, config.mouth_enabled);
        module
    }

    /// Capability tuple reported to the host: (eye, expression)
    pub fn supported(&self) -> (bool, bool) {
        self.supported
    }

    /// Module display name
    pub fn name(&self) -> &'static str {
        MODULE_NAME
    }

    /// Bound local endpoint, if the bind succeeded
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    /// Current connection liveness
    pub fn connection(&self) -> ConnectionState {
        self.store.connection()
    }

    /// One host polling tick: apply the latest frame to the model, then
    /// yield briefly.
    pub fn update(&self, model: &mut ExpressionModel) {
        if self.exiting.load(Ordering::Acquire) {
            return;
        }
        if self.receiver.is_none() {
            error!("receive loop is not running");
            return;
        }

        cymple_mapper::apply(&self.store, model);

        std::thread::sleep(POLL_INTERVAL);
    }

    /// Stop the receive loop and wait for it to finish.
    ///
    /// The exiting flag is set first, then the shutdown signal unblocks any
    /// receive in flight; once this returns no further store writes occur.
    /// Safe to call more than once.
    pub fn teardown(&mut self) {
        info!("tearing down {MODULE_NAME}");
        self.exiting.store(true, Ordering::Release);
        self.shutdown.notify_one();

        if let (Some(runtime), Some(handle)) = (self.runtime.as_ref(), self.receiver.take()) {
            if let Err(e) = runtime.block_on(handle) {
                error!("receive loop terminated abnormally: {e}");
            }
        }
        info!("{MODULE_NAME} teardown complete");
    }
}
