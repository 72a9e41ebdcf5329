use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use koober_core::{update, Action, AppState};
use koober_logging::{koober_debug, koober_trace};

use crate::effects::run_effect;
use crate::UserSessionRepository;

enum StoreCommand {
    Dispatch(Action),
    Subscribe {
        id: u64,
        tx: mpsc::Sender<AppState>,
    },
    Unsubscribe(u64),
    Snapshot(mpsc::Sender<AppState>),
    #[cfg(test)]
    SubscriberCount(mpsc::Sender<usize>),
    Shutdown,
}

/// Single owner of the state tree.
///
/// Actions travel over a channel to an owner thread that runs [`update`],
/// keeps the result, publishes changes to subscribers and spawns the
/// requested effects on its runtime. Effect outcomes are dispatched back
/// through the same channel, so reducers never run concurrently.
pub struct Store {
    cmd_tx: mpsc::Sender<StoreCommand>,
    next_subscriber: AtomicU64,
    owner: Option<thread::JoinHandle<()>>,
}

impl Store {
    pub fn new(repository: Arc<dyn UserSessionRepository>) -> io::Result<Self> {
        Self::with_state(repository, AppState::new())
    }

    pub fn with_state(
        repository: Arc<dyn UserSessionRepository>,
        initial: AppState,
    ) -> io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let effect_tx = cmd_tx.clone();

        let owner = thread::Builder::new()
            .name("koober-store".to_string())
            .spawn(move || {
                let owner = Owner {
                    state: initial,
                    subscribers: Vec::new(),
                    repository,
                    runtime,
                    effect_tx,
                    seq: 0,
                };
                owner.run(cmd_rx);
            })?;

        Ok(Self {
            cmd_tx,
            next_subscriber: AtomicU64::new(1),
            owner: Some(owner),
        })
    }

    pub fn dispatch(&self, action: impl Into<Action>) {
        let _ = self.cmd_tx.send(StoreCommand::Dispatch(action.into()));
    }

    /// Starts observing state changes. The current state is delivered first.
    pub fn subscribe(&self) -> Subscription {
        let id = self.next_subscriber.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = mpsc::channel();
        let _ = self.cmd_tx.send(StoreCommand::Subscribe { id, tx });
        Subscription {
            id,
            rx,
            cmd_tx: self.cmd_tx.clone(),
        }
    }

    /// Current state after every action dispatched so far has been reduced.
    /// Returns `None` once the owner thread is gone.
    pub fn state(&self) -> Option<AppState> {
        let (tx, rx) = mpsc::channel();
        self.cmd_tx.send(StoreCommand::Snapshot(tx)).ok()?;
        rx.recv().ok()
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> Option<usize> {
        let (tx, rx) = mpsc::channel();
        self.cmd_tx.send(StoreCommand::SubscriberCount(tx)).ok()?;
        rx.recv().ok()
    }

    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(owner) = self.owner.take() {
            let _ = self.cmd_tx.send(StoreCommand::Shutdown);
            let _ = owner.join();
        }
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Receiving end of [`Store::subscribe`]; unsubscribes when dropped.
pub struct Subscription {
    id: u64,
    rx: mpsc::Receiver<AppState>,
    cmd_tx: mpsc::Sender<StoreCommand>,
}

impl Subscription {
    /// Blocks until the next state arrives or the store shuts down.
    pub fn recv(&self) -> Option<AppState> {
        self.rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<AppState> {
        self.rx.recv_timeout(timeout).ok()
    }

    pub fn try_recv(&self) -> Option<AppState> {
        self.rx.try_recv().ok()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(StoreCommand::Unsubscribe(self.id));
    }
}

struct Owner {
    state: AppState,
    subscribers: Vec<(u64, mpsc::Sender<AppState>)>,
    repository: Arc<dyn UserSessionRepository>,
    runtime: tokio::runtime::Runtime,
    effect_tx: mpsc::Sender<StoreCommand>,
    seq: u64,
}

impl Owner {
    fn run(mut self, cmd_rx: mpsc::Receiver<StoreCommand>) {
        while let Ok(command) = cmd_rx.recv() {
            match command {
                StoreCommand::Dispatch(action) => self.dispatch(action),
                StoreCommand::Subscribe { id, tx } => {
                    if tx.send(self.state.clone()).is_ok() {
                        self.subscribers.push((id, tx));
                    }
                }
                StoreCommand::Unsubscribe(id) => {
                    self.subscribers.retain(|(subscriber, _)| *subscriber != id);
                }
                StoreCommand::Snapshot(tx) => {
                    let _ = tx.send(self.state.clone());
                }
                #[cfg(test)]
                StoreCommand::SubscriberCount(tx) => {
                    let _ = tx.send(self.subscribers.len());
                }
                StoreCommand::Shutdown => break,
            }
        }
        koober_debug!("Store owner stopped after {} actions", self.seq);
    }

    fn dispatch(&mut self, action: Action) {
        self.seq += 1;
        koober_trace!("#{} {:?}", self.seq, action);

        let (next, effects) = update(self.state.clone(), action);
        if next != self.state {
            self.state = next;
            let state = &self.state;
            self.subscribers
                .retain(|(_, tx)| tx.send(state.clone()).is_ok());
        }

        for effect in effects {
            koober_debug!("#{} running effect {:?}", self.seq, effect);
            let repository = self.repository.clone();
            let tx = self.effect_tx.clone();
            self.runtime.spawn(async move {
                let action = run_effect(repository.as_ref(), effect).await;
                let _ = tx.send(StoreCommand::Dispatch(action));
            });
        }
    }
}
