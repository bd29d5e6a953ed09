//! Shared test utilities and lookup doubles.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use signup_loop::avatar::{Avatar, AvatarError, AvatarLookup};
use signup_loop::signup::{Field, SignUpAction, SignUpState, SignUpStore};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::Semaphore;

pub const TIMEOUT: Duration = Duration::from_secs(2);

/// Lookup that blocks every call until [`GatedLookup::release`].
pub struct GatedLookup {
    result: Result<Avatar, AvatarError>,
    calls: AtomicUsize,
    gate: Semaphore,
}

impl GatedLookup {
    pub fn new(result: Result<Avatar, AvatarError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            gate: Semaphore::new(0),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(Ok(Avatar::placeholder(16)))
    }

    /// Open the gate for every pending and future call.
    pub fn release(&self) {
        self.gate.add_permits(1);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Poll until at least `n` calls have started.
    pub async fn wait_for_calls(&self, n: usize) {
        tokio::time::timeout(TIMEOUT, async {
            while self.calls() < n {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("lookup was not called in time");
    }
}

#[async_trait]
impl AvatarLookup for GatedLookup {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn lookup_avatar(&self, _email: &str) -> Result<Avatar, AvatarError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // The permit goes back on drop, so one release opens the gate for good.
        let _permit = self.gate.acquire().await.map_err(|_| AvatarError::Unknown)?;
        self.result.clone()
    }
}

/// Receive the next published state or panic after [`TIMEOUT`].
pub async fn next_state(states: &mut UnboundedReceiver<SignUpState>) -> SignUpState {
    tokio::time::timeout(TIMEOUT, states.recv())
        .await
        .expect("timed out waiting for state")
        .expect("store stopped publishing")
}

/// Receive states until one matches `predicate`.
pub async fn wait_until<F>(states: &mut UnboundedReceiver<SignUpState>, predicate: F) -> SignUpState
where
    F: Fn(&SignUpState) -> bool,
{
    loop {
        let state = next_state(states).await;
        if predicate(&state) {
            return state;
        }
    }
}

/// Dispatch a valid email/password/confirmation triple.
pub fn fill_form(store: &SignUpStore, email: &str, password: &str) {
    store.dispatch(Field::Email.action(email));
    store.dispatch(Field::Password.action(password));
    store.dispatch(Field::Confirmation.action(password));
}

/// Fill the form, wait until it is submittable, then submit.
pub async fn fill_and_submit(
    store: &SignUpStore,
    states: &mut UnboundedReceiver<SignUpState>,
    email: &str,
) -> SignUpState {
    fill_form(store, email, "x");
    let filled = wait_until(states, |s| s.password_confirmation == "x").await;
    assert!(filled.is_submit_enabled());
    store.dispatch(SignUpAction::SubmitTapped);
    wait_until(states, SignUpState::is_signing_up).await
}
