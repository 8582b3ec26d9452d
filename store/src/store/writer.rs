use crate::storage::PersistConfig;
use std::sync::{Mutex, PoisonError};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};

struct PendingWrite {
    seq: u64,
    payload: String,
}

/// Serializes persistence writes onto one background task.
///
/// Writes queued while another is in flight collapse into the newest one.
/// Sequence numbers only grow, so `flush` can wait for "everything submitted
/// so far" without tracking individual writes.
pub(crate) struct PersistWriter {
    queue: mpsc::UnboundedSender<PendingWrite>,
    submitted: Mutex<u64>,
    completed: watch::Receiver<u64>,
}

impl PersistWriter {
    pub(crate) fn spawn(runtime: &Handle, persist: PersistConfig) -> Self {
        let (queue, rx) = mpsc::unbounded_channel();
        let (done_tx, completed) = watch::channel(0);
        runtime.spawn(run(persist, rx, done_tx));

        Self {
            queue,
            submitted: Mutex::new(0),
            completed,
        }
    }

    pub(crate) fn submit(&self, payload: String) -> u64 {
        let mut submitted = self
            .submitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *submitted += 1;
        let seq = *submitted;

        if self.queue.send(PendingWrite { seq, payload }).is_err() {
            log::warn!("Theme persistence writer has stopped; dropping write #{seq}");
        }
        seq
    }

    /// Waits until every write submitted before this call has been attempted.
    pub(crate) async fn flush(&self) {
        let target = *self
            .submitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut completed = self.completed.clone();
        if completed.wait_for(|done| *done >= target).await.is_err() {
            log::warn!("Theme persistence writer stopped before flushing write #{target}");
        }
    }
}

async fn run(
    persist: PersistConfig,
    mut rx: mpsc::UnboundedReceiver<PendingWrite>,
    done: watch::Sender<u64>,
) {
    while let Some(mut write) = rx.recv().await {
        while let Ok(newer) = rx.try_recv() {
            log::trace!("Coalescing theme write #{} into #{}", write.seq, newer.seq);
            write = newer;
        }

        match persist.storage.set_item(&persist.key, &write.payload).await {
            Ok(()) => log::debug!("Persisted theme state under '{}'", persist.key),
            Err(e) => log::warn!("Failed to persist theme state: {e}"),
        }

        done.send_if_modified(|current| {
            if write.seq > *current {
                *current = write.seq;
                true
            } else {
                false
            }
        });
    }

    log::debug!("Theme persistence writer stopped");
}
