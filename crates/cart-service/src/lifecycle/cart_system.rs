use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::cart_actor;
use crate::clients::CartClient;
use crate::config::CartConfig;

/// A running cart owner and the handles needed to reach and stop it.
pub struct CartSystem {
    pub cart_client: CartClient,
    terminate: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl CartSystem {
    /// Spawns a cart owner seeded from `config`.
    ///
    /// Must be called from within a Tokio runtime. Each call creates an independent cart.
    pub fn start(config: &CartConfig) -> Self {
        info!(buffer_size = config.buffer_size, "Starting cart system");

        let (actor, generic_client) = cart_actor::new(config.buffer_size);
        let generic_client = match config.request_timeout {
            Some(limit) => generic_client.with_timeout(limit),
            None => generic_client,
        };

        let (terminate, signal) = oneshot::channel::<()>();
        let handle = tokio::spawn(actor.run_until(config.context.clone(), async {
            // A dropped sender stops the owner as well.
            let _ = signal.await;
        }));

        Self {
            cart_client: CartClient::new(generic_client),
            terminate,
            handle,
        }
    }

    /// Stops the owner and waits for its task to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system...");

        if self.cart_client.is_closed() {
            warn!("Cart owner stopped before shutdown");
        }
        // The owner may already be gone; joining the task below still reports a panic.
        let _ = self.terminate.send(());
        drop(self.cart_client);

        if let Err(e) = self.handle.await {
            error!("Cart task failed: {:?}", e);
            return Err(format!("Cart task failed: {:?}", e));
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}
