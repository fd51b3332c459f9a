//! Background persistence for the catalog.
//!
//! The store hands every post-mutation snapshot to a [`PersistenceHandle`],
//! which only enqueues it. A dedicated thread owns the [`StorageAdapter`] and
//! performs the writes, so callers see their mutation immediately while the
//! on-disk copy catches up shortly after.

use std::thread::{self, JoinHandle};

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use super::storage_adapter::{PersistenceSink, StorageAdapter};
use crate::types::bookmark::VideoBookmark;
use crate::types::errors::StorageError;

/// Messages understood by the worker thread.
enum PersistCommand {
    Bookmarks(Vec<VideoBookmark>),
    Categories(Vec<String>),
    Flush(oneshot::Sender<()>),
    Shutdown,
}

/// Cloneable sending side of the worker queue.
#[derive(Clone)]
pub struct PersistenceHandle {
    tx: mpsc::UnboundedSender<PersistCommand>,
}

impl PersistenceHandle {
    fn send(&self, command: PersistCommand) -> Result<(), StorageError> {
        self.tx.send(command).map_err(|_| StorageError::WorkerStopped)
    }

    /// Blocks until every snapshot enqueued before this call has been written.
    ///
    /// Must not be called from inside an async runtime.
    pub fn flush(&self) -> Result<(), StorageError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.send(PersistCommand::Flush(ack_tx))?;
        ack_rx.blocking_recv().map_err(|_| StorageError::WorkerStopped)
    }
}

impl PersistenceSink for PersistenceHandle {
    fn persist_bookmarks(&self, bookmarks: &[VideoBookmark]) {
        if self.send(PersistCommand::Bookmarks(bookmarks.to_vec())).is_err() {
            warn!("persistence worker stopped, bookmark snapshot dropped");
        }
    }

    fn persist_categories(&self, categories: &[String]) {
        if self.send(PersistCommand::Categories(categories.to_vec())).is_err() {
            warn!("persistence worker stopped, category snapshot dropped");
        }
    }
}

/// Owns the worker thread. Dropping it drains the queue and joins the thread.
pub struct PersistenceWorker {
    handle: Option<PersistenceHandle>,
    thread: Option<JoinHandle<()>>,
}

impl PersistenceWorker {
    /// Starts the worker thread, moving the adapter into it.
    pub fn spawn(adapter: StorageAdapter) -> Result<Self, StorageError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let thread = thread::Builder::new()
            .name("vidmark-persist".to_string())
            .spawn(move || run(adapter, rx))
            .map_err(|e| StorageError::DatabaseError(format!("failed to start worker: {}", e)))?;

        Ok(Self {
            handle: Some(PersistenceHandle { tx }),
            thread: Some(thread),
        })
    }

    /// Returns a new sender for the worker queue.
    pub fn handle(&self) -> Result<PersistenceHandle, StorageError> {
        self.handle.clone().ok_or(StorageError::WorkerStopped)
    }

    pub fn flush(&self) -> Result<(), StorageError> {
        self.handle()?.flush()
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().map(|t| !t.is_finished()).unwrap_or(false)
    }

    /// Stops the worker after it has written everything queued so far, then
    /// joins the thread. Handles that outlive the worker drop their snapshots.
    pub fn shutdown(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.send(PersistCommand::Shutdown);
        }
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                warn!("persistence worker panicked");
            }
        }
    }
}

impl Drop for PersistenceWorker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Worker loop. Snapshots already waiting in the queue are coalesced so only
/// the newest bookmark and category snapshot of a burst is written.
fn run(adapter: StorageAdapter, mut rx: mpsc::UnboundedReceiver<PersistCommand>) {
    info!("persistence worker started");

    let mut stopping = false;
    while !stopping {
        let Some(first) = rx.blocking_recv() else {
            break;
        };
        let mut bookmarks = None;
        let mut categories = None;
        let mut acks = Vec::new();

        let mut next = Some(first);
        while let Some(command) = next {
            match command {
                PersistCommand::Bookmarks(b) => bookmarks = Some(b),
                PersistCommand::Categories(c) => categories = Some(c),
                PersistCommand::Flush(ack) => acks.push(ack),
                PersistCommand::Shutdown => stopping = true,
            }
            if stopping {
                break;
            }
            next = rx.try_recv().ok();
        }

        if let Some(b) = bookmarks {
            adapter.save_bookmarks(&b);
        }
        if let Some(c) = categories {
            adapter.save_categories(&c);
        }
        for ack in acks {
            let _ = ack.send(());
        }
        debug!("persistence batch written");
    }

    info!("persistence worker stopped");
}
