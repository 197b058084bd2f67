//! Payment status polling.
//!
//! Mobile-money deposits settle asynchronously on the provider side and the
//! backend exposes no push channel, so after initiating a deposit the
//! client polls the payment-status endpoint on a fixed interval until the
//! payment settles or the attempt budget runs out.
//!
//! The loop is modeled as an explicit state machine
//! (`Pending → {Completed, Failed, TimedOut}`) on [`PaymentIntent`] so the
//! attempt accounting is testable without any timer or UI lifecycle;
//! [`DepositPoller`] is the timer-driven driver. No cancellation is
//! exposed: callers own the future and stop polling by dropping it.

use std::time::Duration;

use async_trait::async_trait;
use compact_str::CompactString;
use tracing::{debug, warn};

use crate::client::{ClientError, WalletClient};
use crate::objects::wallet::{PaymentStatus, Wallet};

/// Fixed delay before each status check.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Status-check budget; at [`POLL_INTERVAL`] this is ~100 seconds of
/// waiting before the poller gives up.
pub const MAX_POLL_ATTEMPTS: u32 = 20;

/// Observed lifecycle of an in-flight deposit.
///
/// `TimedOut` is a UX degradation, not a failure: the payment may still
/// settle server-side, and the user should be told to check their account
/// rather than shown an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Pending,
    Completed,
    Failed,
    TimedOut,
}

impl PollState {
    /// Terminal states admit no further transition.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PollState::Pending)
    }
}

/// The client's transient local view of an in-flight mobile-money deposit,
/// identified by the provider-issued reference. The true state lives
/// server-side; this only tracks what has been observed so far.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    reference: CompactString,
    state: PollState,
    attempts: u32,
    max_attempts: u32,
}

impl PaymentIntent {
    pub fn new(reference: impl Into<CompactString>) -> Self {
        Self::with_budget(reference, MAX_POLL_ATTEMPTS)
    }

    pub fn with_budget(reference: impl Into<CompactString>, max_attempts: u32) -> Self {
        Self {
            reference: reference.into(),
            state: PollState::Pending,
            attempts: 0,
            max_attempts,
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn state(&self) -> PollState {
        self.state
    }

    /// Checks recorded so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Apply one status observation and return the resulting state.
    ///
    /// `None` is a failed check (network error, undecodable status); it
    /// counts against the same attempt budget as a still-pending answer.
    /// Once a terminal state is reached further observations are ignored.
    pub fn record_check(&mut self, observed: Option<PaymentStatus>) -> PollState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.attempts += 1;
        self.state = match observed {
            Some(PaymentStatus::Completed) => PollState::Completed,
            Some(PaymentStatus::Failed) => PollState::Failed,
            Some(PaymentStatus::Pending) | None => {
                if self.attempts >= self.max_attempts {
                    PollState::TimedOut
                } else {
                    PollState::Pending
                }
            }
        };
        self.state
    }
}

/// The two backend touchpoints the poller needs, kept behind a trait so
/// the driver is testable against scripted sequences.
#[async_trait]
pub trait DepositBackend: Send + Sync {
    /// One status probe for a provider reference.
    async fn check_status(&self, reference: &str) -> Result<PaymentStatus, ClientError>;

    /// Re-fetch the wallet once a terminal status is observed.
    async fn refresh_wallet(&self) -> Result<Wallet, ClientError>;
}

#[async_trait]
impl DepositBackend for WalletClient {
    async fn check_status(&self, reference: &str) -> Result<PaymentStatus, ClientError> {
        Ok(self.payment_status(reference).await?.status)
    }

    async fn refresh_wallet(&self) -> Result<Wallet, ClientError> {
        self.wallet().await
    }
}

/// Timer-driven poller for one deposit at a time.
#[derive(Debug, Clone)]
pub struct DepositPoller<B> {
    backend: B,
    interval: Duration,
    max_attempts: u32,
}

impl<B: DepositBackend> DepositPoller<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            interval: POLL_INTERVAL,
            max_attempts: MAX_POLL_ATTEMPTS,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Drive `reference` to a terminal state.
    ///
    /// Waits the fixed interval before every check. On `Completed` or
    /// `Failed` the wallet is refreshed exactly once (a refresh failure is
    /// logged, not surfaced; the poll outcome stands).
    pub async fn watch(&self, reference: &str) -> PollState {
        let mut intent = PaymentIntent::with_budget(reference, self.max_attempts);
        loop {
            tokio::time::sleep(self.interval).await;
            let observed = match self.backend.check_status(intent.reference()).await {
                Ok(status) => Some(status),
                Err(err) => {
                    warn!(
                        reference = intent.reference(),
                        error = %err,
                        "status check failed, treating as still pending"
                    );
                    None
                }
            };
            match intent.record_check(observed) {
                PollState::Pending => {}
                state @ (PollState::Completed | PollState::Failed) => {
                    debug!(
                        reference = intent.reference(),
                        ?state,
                        checks = intent.attempts(),
                        "payment reached terminal status"
                    );
                    if let Err(err) = self.backend.refresh_wallet().await {
                        warn!(error = %err, "wallet refresh after settled payment failed");
                    }
                    return state;
                }
                PollState::TimedOut => {
                    debug!(
                        reference = intent.reference(),
                        checks = intent.attempts(),
                        "payment status polling timed out"
                    );
                    return PollState::TimedOut;
                }
            }
        }
    }
}
