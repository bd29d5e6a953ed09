//! Store: the runtime that closes the feedback loop.
//!
//! One Tokio task owns the canonical state and drains a single event
//! channel. Dispatched actions and feedback events share that channel, so
//! events are applied strictly one at a time in arrival order.

use std::marker::PhantomData;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use futures::StreamExt;
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::feedback::Feedback;
use super::intent::Intent;
use super::reducer::Reducer;
use super::shutdown::ShutdownSignal;
use super::state::UiState;

type Observer<S> = Box<dyn Fn(&S) + Send>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Observers<S> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer<S>)>,
}

impl<S> Default for Observers<S> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<S> Observers<S> {
    fn insert(&mut self, observer: Observer<S>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Call every observer. A panicking observer is logged and skipped.
    fn notify(&self, state: &S) {
        for (id, observer) in &self.entries {
            if panic::catch_unwind(AssertUnwindSafe(|| observer(state))).is_err() {
                tracing::error!(subscription = id.0, "observer panicked");
            }
        }
    }
}

/// Generic feedback-loop store.
///
/// Built from an initial state, a [`Reducer`] type and a list of
/// [`Feedback`]s. The presentation layer only needs [`dispatch`],
/// [`current_state`] and [`subscribe`].
///
/// Observers are called on the loop task, in the order states are produced,
/// while the observer list is locked. An observer may `dispatch`, but must
/// not call `subscribe`, `unsubscribe` or `shutdown` on the same store.
///
/// Dropping the store tears it down like [`shutdown`].
///
/// [`dispatch`]: Store::dispatch
/// [`current_state`]: Store::current_state
/// [`subscribe`]: Store::subscribe
/// [`shutdown`]: Store::shutdown
pub struct Store<R: Reducer> {
    session: Uuid,
    state: Arc<RwLock<R::State>>,
    observers: Arc<Mutex<Observers<R::State>>>,
    events: mpsc::UnboundedSender<R::Event>,
    shutdown: ShutdownSignal,
    task: JoinHandle<()>,
}

impl<R: Reducer> Store<R> {
    /// Start the store's event loop.
    ///
    /// Must be called from within a Tokio runtime. Feedback predicates are
    /// evaluated against `initial` as soon as the loop starts.
    pub fn new(initial: R::State, feedbacks: Vec<Feedback<R::State, R::Event>>) -> Self {
        let session = Uuid::new_v4();
        let (events, receiver) = mpsc::unbounded_channel();
        let state = Arc::new(RwLock::new(initial.clone()));
        let observers = Arc::new(Mutex::new(Observers::default()));
        let shutdown = ShutdownSignal::new();

        tracing::info!(%session, feedbacks = feedbacks.len(), "store started");

        let event_loop = EventLoop::<R> {
            session,
            current: initial,
            shared: Arc::clone(&state),
            observers: Arc::clone(&observers),
            slots: feedbacks.into_iter().map(FeedbackSlot::new).collect(),
            sender: events.clone(),
            receiver,
            shutdown: shutdown.clone(),
            _reducer: PhantomData,
        };
        let task = tokio::spawn(event_loop.run());

        Self {
            session,
            state,
            observers,
            events,
            shutdown,
            task,
        }
    }

    /// Identifier attached to this store's log records.
    pub fn session(&self) -> Uuid {
        self.session
    }

    /// Snapshot of the most recently reduced state.
    pub fn current_state(&self) -> R::State {
        self.state.read().clone()
    }

    /// Queue an action for the event loop. Never blocks.
    ///
    /// Concurrent dispatches are applied in the order they reach the
    /// channel, not necessarily in call order. Ignored after shutdown.
    pub fn dispatch(&self, action: R::Action) {
        if self.shutdown.is_shutting_down() {
            tracing::trace!(session = %self.session, ?action, "dispatch after shutdown ignored");
            return;
        }
        if self.events.send(action.into()).is_err() {
            tracing::trace!(session = %self.session, "event loop gone, dispatch dropped");
        }
    }

    /// Register an observer called with every new state.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&R::State) + Send + 'static,
    {
        self.observers.lock().insert(Box::new(observer))
    }

    /// Receive every new state through a channel instead of a callback.
    pub fn subscribe_channel(&self) -> (SubscriptionId, mpsc::UnboundedReceiver<R::State>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = self.subscribe(move |state: &R::State| {
            let _ = tx.send(state.clone());
        });
        (id, rx)
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.lock().remove(id)
    }

    /// Tear the store down.
    ///
    /// Stops the event loop, cancels every running effect and drops all
    /// observers. No notification is delivered once this returns.
    pub fn shutdown(&self) {
        if !self.shutdown.signal() {
            return;
        }
        // Waits for a notification in progress to finish.
        self.observers.lock().entries.clear();
        self.task.abort();
        tracing::info!(session = %self.session, "store shut down");
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_shutting_down()
    }
}

impl<R: Reducer> Drop for Store<R> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

struct FeedbackSlot<S, E> {
    feedback: Feedback<S, E>,
    active: bool,
    running: Option<JoinHandle<()>>,
}

impl<S: UiState, E: Intent> FeedbackSlot<S, E> {
    fn new(feedback: Feedback<S, E>) -> Self {
        Self {
            feedback,
            active: false,
            running: None,
        }
    }

    /// Start on the predicate's rising edge, cancel on its falling edge.
    fn evaluate(&mut self, state: &S, sender: &mpsc::UnboundedSender<E>, shutdown: &ShutdownSignal) {
        let matches = self.feedback.matches(state);
        match (self.active, matches) {
            (false, true) => {
                self.cancel();
                self.running = Some(self.start(state.clone(), sender.clone(), shutdown.clone()));
            }
            (true, false) => self.cancel(),
            _ => {}
        }
        self.active = matches;
    }

    fn start(
        &self,
        state: S,
        sender: mpsc::UnboundedSender<E>,
        shutdown: ShutdownSignal,
    ) -> JoinHandle<()> {
        let name = self.feedback.name();
        let mut events = self.feedback.run(state);
        tracing::trace!(feedback = name, "effect started");

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    _ = shutdown.wait() => break,
                    next = events.next() => match next {
                        Some(event) => {
                            if sender.send(event).is_err() {
                                break;
                            }
                        }
                        None => break,
                    },
                }
            }
            tracing::trace!(feedback = name, "effect finished");
        })
    }

    fn cancel(&mut self) {
        if let Some(task) = self.running.take() {
            if !task.is_finished() {
                tracing::debug!(feedback = self.feedback.name(), "effect cancelled");
            }
            task.abort();
        }
    }
}

struct EventLoop<R: Reducer> {
    session: Uuid,
    current: R::State,
    shared: Arc<RwLock<R::State>>,
    observers: Arc<Mutex<Observers<R::State>>>,
    slots: Vec<FeedbackSlot<R::State, R::Event>>,
    sender: mpsc::UnboundedSender<R::Event>,
    receiver: mpsc::UnboundedReceiver<R::Event>,
    shutdown: ShutdownSignal,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> EventLoop<R> {
    async fn run(mut self) {
        let shutdown = self.shutdown.clone();
        let guard_shutdown = shutdown.clone();
        let mut slots = scopeguard::guard(std::mem::take(&mut self.slots), move |slots| {
            // However the loop ends, the store must report itself shut down.
            if guard_shutdown.signal() {
                tracing::warn!("event loop exited before shutdown");
            }
            for mut slot in slots {
                slot.cancel();
            }
        });

        for slot in slots.iter_mut() {
            slot.evaluate(&self.current, &self.sender, &shutdown);
        }

        loop {
            let event = tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                event = self.receiver.recv() => match event {
                    Some(event) => event,
                    None => break,
                },
            };

            if !self.apply(event) {
                break;
            }

            for slot in slots.iter_mut() {
                slot.evaluate(&self.current, &self.sender, &shutdown);
            }
        }

        tracing::debug!(session = %self.session, "event loop stopped");
    }

    /// Reduce one event and publish the result. Returns false on teardown.
    fn apply(&mut self, event: R::Event) -> bool {
        tracing::trace!(session = %self.session, ?event, "applying event");
        let previous = std::mem::take(&mut self.current);
        self.current = R::reduce(previous, event);

        // shutdown() clears observers under this lock, so nothing below
        // runs once it has returned.
        let observers = self.observers.lock();
        if self.shutdown.is_shutting_down() {
            return false;
        }
        *self.shared.write() = self.current.clone();
        tracing::debug!(session = %self.session, state = ?self.current, "state updated");
        observers.notify(&self.current);
        true
    }
}
