use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tokio::sync::mpsc::UnboundedReceiver;

use signup_loop::avatar::{AvatarError, AvatarLookup, GravatarClient, MockAvatarLookup};
use signup_loop::config::Config;
use signup_loop::logging::init_tracing;
use signup_loop::signup::{sign_up_store, Field, SignUpAction, SignUpState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LookupKind {
    /// Query Gravatar.
    Live,
    /// Always return a placeholder avatar.
    Success,
    /// Always fail.
    Failure,
}

/// Fill in the sign-up form, submit it, and print every state the store publishes.
#[derive(Debug, Parser)]
#[command(name = "signup-loop", version)]
struct Args {
    #[arg(long)]
    email: String,

    #[arg(long)]
    password: String,

    /// Password confirmation (defaults to the password).
    #[arg(long)]
    confirmation: Option<String>,

    #[arg(long, value_enum, default_value_t = LookupKind::Live)]
    lookup: LookupKind,

    /// Config file (defaults to the per-user config path).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seconds to wait for the submit to finish.
    #[arg(long, default_value_t = 30)]
    wait_seconds: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;
    init_tracing(&config.logging.filter);

    let lookup: Arc<dyn AvatarLookup> = match args.lookup {
        LookupKind::Live => Arc::new(
            GravatarClient::new(&config.avatar).context("failed to build avatar client")?,
        ),
        LookupKind::Success => Arc::new(MockAvatarLookup::success()),
        LookupKind::Failure => Arc::new(MockAvatarLookup::failure(AvatarError::Unknown)),
    };

    let store = sign_up_store(lookup);
    let (_subscription, mut states) = store.subscribe_channel();

    let confirmation = args
        .confirmation
        .clone()
        .unwrap_or_else(|| args.password.clone());
    let edits = [
        (Field::Email, args.email.as_str()),
        (Field::Password, args.password.as_str()),
        (Field::Confirmation, confirmation.as_str()),
    ];

    for (field, value) in edits {
        store.dispatch(field.action(value));
    }
    let mut state = next_state(&mut states).await?;
    print_state(&state);
    for _ in 1..edits.len() {
        state = next_state(&mut states).await?;
        print_state(&state);
    }

    if !state.is_submit_enabled() {
        println!("submit disabled: {}", submit_blocker(&state));
        store.shutdown();
        return Ok(());
    }

    store.dispatch(SignUpAction::SubmitTapped);
    let outcome = tokio::time::timeout(Duration::from_secs(args.wait_seconds), async {
        loop {
            let state = next_state(&mut states).await?;
            print_state(&state);
            if !state.is_signing_up() {
                return Ok::<_, anyhow::Error>(state);
            }
        }
    })
    .await
    .context("timed out waiting for sign-up")??;

    match (&outcome.avatar, &outcome.sign_up_error_message) {
        (Some(avatar), _) => println!(
            "signed up: avatar {}x{}",
            avatar.width(),
            avatar.height()
        ),
        (None, Some(message)) => println!("sign-up failed: {}", message),
        (None, None) => println!("sign-up finished without an avatar"),
    }

    store.shutdown();
    Ok(())
}

async fn next_state(states: &mut UnboundedReceiver<SignUpState>) -> Result<SignUpState> {
    states.recv().await.context("store stopped publishing")
}

fn print_state(state: &SignUpState) {
    let fields: Vec<String> = Field::ALL
        .iter()
        .map(|field| match field {
            Field::Email => format!("{}={:?}", field.label(), field.value(state)),
            _ => format!("{}={}", field.label(), masked(field.value(state))),
        })
        .collect();
    println!(
        "[{:?}] {} submit_enabled={}",
        state.status,
        fields.join(" "),
        state.is_submit_enabled()
    );
}

/// One asterisk per character of `secret`.
fn masked(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

fn submit_blocker(state: &SignUpState) -> &'static str {
    if state.email.is_empty() {
        "email is empty"
    } else if state.password.is_empty() {
        "password is empty"
    } else if state.password != state.password_confirmation {
        "passwords do not match"
    } else {
        "a sign-up is already in progress"
    }
}
