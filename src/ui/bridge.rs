// UiBridge - Marshals UI updates from background threads into the Slint event loop
//
// Slint property setters must run on the GUI thread. The state subscription
// thread computes estimates off that thread, so its updates are queued here
// and replayed on the event loop via upgrade_in_event_loop.
//
// The bridge provides:
// - Safe UI updates from any thread via a bounded queue
// - A cloneable handle for passing into callbacks and worker threads

use slint::{ComponentHandle, Weak};
use tokio::sync::mpsc;

/// Marshals UI updates from background threads into the Slint event loop
///
/// A dedicated handler thread drains a bounded queue of update closures and
/// hands each one to `upgrade_in_event_loop`, which runs it on the GUI
/// thread with a strong component reference. If the window is gone the
/// handler thread ends.
///
/// # Example
/// ```ignore
/// let ui = MainWindow::new()?;
/// let bridge = UiBridge::new(&ui);
///
/// // From a worker thread:
/// bridge.update_ui(|ui| {
///     ui.set_total_effort_text("7.7 hours".into());
/// });
/// ```
pub struct UiBridge<T: ComponentHandle> {
    /// Weak reference to the UI component to prevent circular references
    ui_weak: Weak<T>,

    /// Channel for sending UI update requests from worker threads to the Slint event loop
    /// Bounded to 100 updates to prevent unbounded memory growth if UI lags
    ui_update_tx: mpsc::Sender<Box<dyn FnOnce(&T) + Send>>,
}

impl<T: ComponentHandle + 'static> UiBridge<T> {
    /// Create a new UiBridge
    ///
    /// This sets up a background handler thread that processes UI update requests
    /// and marshals them to the Slint event loop using `upgrade_in_event_loop`.
    ///
    /// # Arguments
    /// * `ui` - Strong reference to the Slint UI component
    ///
    /// # Returns
    /// A new UiBridge instance
    pub fn new(ui: &T) -> Self {
        let ui_weak = ui.as_weak();
        // Use bounded channel with capacity 100 to prevent OOM if UI lags
        let (ui_update_tx, mut ui_update_rx) = mpsc::channel::<Box<dyn FnOnce(&T) + Send>>(100);

        // Spawn a background thread to drain the queue. blocking_recv needs
        // no async runtime, so this is a plain std::thread.
        let ui_weak_clone = ui_weak.clone();
        std::thread::spawn(move || {
            tracing::debug!("UiBridge handler thread started");

            while let Some(update_fn) = ui_update_rx.blocking_recv() {
                // upgrade_in_event_loop queues the closure onto Slint's event
                // loop thread and runs it with the upgraded component.
                let result = ui_weak_clone.upgrade_in_event_loop(move |ui| {
                    update_fn(&ui);
                });

                if let Err(e) = result {
                    tracing::warn!("Failed to queue UI update to event loop: {:?}", e);
                    // The event loop has stopped; no more updates can land.
                    break;
                }
            }

            tracing::debug!("UiBridge handler thread terminated");
        });

        Self {
            ui_weak,
            ui_update_tx,
        }
    }

    /// Schedule a UI update from any thread
    ///
    /// This safely marshals the update to the Slint event loop thread.
    /// The update will be queued and executed on the next event loop iteration.
    ///
    /// # Arguments
    /// * `update` - A closure that receives a reference to the UI component and performs updates
    ///
    /// # Returns
    /// `true` if the update was queued, `false` if it was dropped because
    /// the queue was full or the handler thread has stopped
    ///
    /// # Example
    /// ```ignore
    /// bridge.update_ui(|ui| {
    ///     ui.set_calendar_text("2 workdays".into());
    /// });
    /// ```
    pub fn update_ui<F>(&self, update: F) -> bool
    where
        F: FnOnce(&T) + Send + 'static,
    {
        send_update(&self.ui_update_tx, update)
    }

    /// Clone the bridge for use in multiple callbacks
    ///
    /// Returns a lightweight handle that can be cloned and passed to multiple Slint callbacks.
    /// This is necessary because Slint callbacks often need to capture the bridge by value.
    ///
    /// # Returns
    /// A UiBridgeHandle that implements Clone
    pub fn clone_handle(&self) -> UiBridgeHandle<T> {
        UiBridgeHandle {
            ui_weak: self.ui_weak.clone(),
            ui_update_tx: self.ui_update_tx.clone(),
        }
    }
}

/// Lightweight handle that can be cloned and passed to callbacks
///
/// This is a cloneable version of UiBridge that can be easily shared across
/// multiple Slint callbacks and worker threads without worrying about ownership.
pub struct UiBridgeHandle<T: ComponentHandle> {
    ui_weak: Weak<T>,
    ui_update_tx: mpsc::Sender<Box<dyn FnOnce(&T) + Send>>,
}

// Manual Clone implementation to avoid requiring T: Clone
impl<T: ComponentHandle> Clone for UiBridgeHandle<T> {
    fn clone(&self) -> Self {
        Self {
            ui_weak: self.ui_weak.clone(),
            ui_update_tx: self.ui_update_tx.clone(),
        }
    }
}

impl<T: ComponentHandle + 'static> UiBridgeHandle<T> {
    /// Schedule a UI update from any thread
    ///
    /// See `UiBridge::update_ui()` for details.
    pub fn update_ui<F>(&self, update: F) -> bool
    where
        F: FnOnce(&T) + Send + 'static,
    {
        send_update(&self.ui_update_tx, update)
    }

    /// Get a weak reference to the UI component
    ///
    /// This can be used to check if the UI is still alive or to manually
    /// upgrade the reference for custom operations.
    pub fn ui_weak(&self) -> &Weak<T> {
        &self.ui_weak
    }
}

fn send_update<T: ComponentHandle>(
    tx: &mpsc::Sender<Box<dyn FnOnce(&T) + Send>>,
    update: impl FnOnce(&T) + Send + 'static,
) -> bool {
    match tx.try_send(Box::new(update)) {
        Ok(_) => true,
        Err(mpsc::error::TrySendError::Full(_)) => {
            tracing::warn!("UI update channel full - skipping update to prevent backpressure");
            false
        }
        Err(mpsc::error::TrySendError::Closed(_)) => {
            tracing::warn!("Failed to send UI update - handler thread has stopped");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Note: These tests are limited because they require a real Slint UI component
    // which needs a display/window system. The bridge's queue mechanics are
    // exercised here directly; end-to-end behavior needs a window.

    #[test]
    fn test_queue_drains_on_plain_thread() {
        // Same shape as the handler thread: a std::thread draining
        // blocking_recv without any async runtime.
        let (tx, mut rx) = mpsc::channel::<Box<dyn FnOnce() + Send>>(100);
        let counter = Arc::new(AtomicUsize::new(0));

        let handle = std::thread::spawn(move || {
            while let Some(update_fn) = rx.blocking_recv() {
                update_fn();
            }
        });

        for _ in 0..3 {
            let counter = counter.clone();
            tx.try_send(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();
        }

        drop(tx);
        handle.join().unwrap();

        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_full_queue_rejects_without_blocking() {
        let (tx, _rx) = mpsc::channel::<Box<dyn FnOnce() + Send>>(2);

        assert!(tx.try_send(Box::new(|| {})).is_ok());
        assert!(tx.try_send(Box::new(|| {})).is_ok());

        // Third send must fail fast instead of blocking the caller.
        match tx.try_send(Box::new(|| {})) {
            Err(mpsc::error::TrySendError::Full(_)) => {}
            Ok(()) => panic!("expected Full, got Ok"),
            Err(e) => panic!("expected Full, got {:?}", e),
        }
    }

    #[test]
    fn test_closed_queue_reports_closed() {
        let (tx, rx) = mpsc::channel::<Box<dyn FnOnce() + Send>>(2);
        drop(rx);

        match tx.try_send(Box::new(|| {})) {
            Err(mpsc::error::TrySendError::Closed(_)) => {}
            Ok(()) => panic!("expected Closed, got Ok"),
            Err(e) => panic!("expected Closed, got {:?}", e),
        }
    }
}
