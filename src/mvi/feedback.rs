//! Declarative, predicate-gated side effects.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};

/// Events produced by a running effect.
pub type EffectStream<E> = BoxStream<'static, E>;

type Predicate<S> = Box<dyn Fn(&S) -> bool + Send + Sync>;
type Effect<S, E> = Box<dyn Fn(S) -> EffectStream<E> + Send + Sync>;

/// A side effect the store runs whenever its predicate starts to hold.
///
/// Feedbacks never touch state directly: the effect receives a snapshot
/// of the state that triggered it and reports back through events.
/// The store starts the effect on the predicate's false → true edge and
/// cancels it if the predicate drops back to false while it is running.
pub struct Feedback<S, E> {
    name: &'static str,
    predicate: Predicate<S>,
    effect: Effect<S, E>,
}

impl<S, E> Feedback<S, E>
where
    S: 'static,
    E: Send + 'static,
{
    /// Create a feedback whose effect yields a stream of events.
    pub fn new<P, F>(name: &'static str, predicate: P, effect: F) -> Self
    where
        P: Fn(&S) -> bool + Send + Sync + 'static,
        F: Fn(S) -> EffectStream<E> + Send + Sync + 'static,
    {
        Self {
            name,
            predicate: Box::new(predicate),
            effect: Box::new(effect),
        }
    }

    /// Create a feedback whose effect resolves to exactly one event.
    pub fn future<P, F, Fut>(name: &'static str, predicate: P, effect: F) -> Self
    where
        P: Fn(&S) -> bool + Send + Sync + 'static,
        F: Fn(S) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = E> + Send + 'static,
    {
        Self::new(name, predicate, move |state| stream::once(effect(state)).boxed())
    }

    /// Lift the events of this feedback into another event type.
    pub fn map_event<U, M>(self, f: M) -> Feedback<S, U>
    where
        U: Send + 'static,
        M: Fn(E) -> U + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        let effect = self.effect;
        Feedback {
            name: self.name,
            predicate: self.predicate,
            effect: Box::new(move |state| {
                let f = Arc::clone(&f);
                effect(state).map(move |event| f(event)).boxed()
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the effect should be running for this state.
    pub fn matches(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    /// Start the effect for a state snapshot.
    pub fn run(&self, state: S) -> EffectStream<E> {
        (self.effect)(state)
    }
}

impl<S, E> fmt::Debug for Feedback<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Feedback").field("name", &self.name).finish()
    }
}
