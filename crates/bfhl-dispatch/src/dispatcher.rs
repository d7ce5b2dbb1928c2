//! The request dispatcher.
//!
//! Per request: validate the body into an [`Operation`], execute it, and
//! wrap the outcome in a [`ResponseEnvelope`]. Processing stops at the first
//! failure and every failure becomes a failure envelope.

use std::sync::Arc;

use serde_json::Value;

use bfhl_oracle::TextOracle;
use bfhl_types::{messages, DispatchError, Operation, OperationOutput, ResponseEnvelope};

use crate::numeric;

/// Routes request bodies to operation handlers.
///
/// Immutable after construction; share it behind an `Arc`.
pub struct Dispatcher {
    official_email: String,
    oracle: Arc<dyn TextOracle>,
}

impl Dispatcher {
    /// Creates a dispatcher stamping `official_email` on every response and
    /// answering `AI` requests with `oracle`.
    pub fn new(official_email: impl Into<String>, oracle: Arc<dyn TextOracle>) -> Self {
        Self {
            official_email: official_email.into(),
            oracle,
        }
    }

    /// The identifying address placed in every envelope.
    pub fn official_email(&self) -> &str {
        &self.official_email
    }

    /// Name of the configured oracle, for logs.
    pub fn oracle_name(&self) -> &'static str {
        self.oracle.name()
    }

    /// The liveness response.
    pub fn health(&self) -> ResponseEnvelope {
        ResponseEnvelope::health(self.official_email.as_str())
    }

    /// Handles one request body. Never fails: errors become failure envelopes.
    pub async fn dispatch(&self, body: &Value) -> ResponseEnvelope {
        let operation = match Operation::from_request(body) {
            Ok(op) => op,
            Err(e) => {
                tracing::warn!(kind = ?e.kind, error = %e, "request rejected");
                return self.reject(&e);
            }
        };

        let kind = operation.kind();
        match self.execute(operation).await {
            Ok(output) => {
                tracing::debug!(operation = %kind, "request served");
                ResponseEnvelope::success(self.official_email.as_str(), output)
            }
            Err(e) => {
                tracing::warn!(operation = %kind, error = %e, "operation failed");
                self.reject(&e)
            }
        }
    }

    /// Runs a validated operation.
    ///
    /// Array operations run on tokio's blocking pool: trial division over
    /// large `i64` values can take seconds per element.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error when an `lcm` result does not fit in a
    /// `u64`, and an `Internal` error if a blocking computation is aborted.
    pub async fn execute(&self, operation: Operation) -> Result<OperationOutput, DispatchError> {
        match operation {
            Operation::Fibonacci(n) => Ok(OperationOutput::Sequence(numeric::fibonacci(n))),
            Operation::Prime(values) => offload(move || numeric::filter_primes(&values))
                .await
                .map(OperationOutput::Integers),
            Operation::Lcm(values) => offload(move || numeric::fold_lcm(&values))
                .await?
                .map(OperationOutput::Integer)
                .ok_or_else(|| DispatchError::validation(messages::LCM_OVERFLOW)),
            Operation::Hcf(values) => offload(move || numeric::fold_gcd(&values))
                .await
                .map(OperationOutput::Integer),
            Operation::Ai(question) => {
                let answer = self.oracle.ask(&question).await;
                tracing::debug!(oracle = self.oracle.name(), %answer, "oracle answered");
                Ok(OperationOutput::Word(answer))
            }
        }
    }

    fn reject(&self, err: &DispatchError) -> ResponseEnvelope {
        ResponseEnvelope::from_error(self.official_email.as_str(), err)
    }
}

/// Runs CPU-bound work off the async worker threads.
async fn offload<T, F>(work: F) -> Result<T, DispatchError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(work).await.map_err(|e| {
        tracing::error!(error = %e, "numeric task did not complete");
        DispatchError::internal(messages::INTERRUPTED)
    })
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("official_email", &self.official_email)
            .field("oracle", &self.oracle.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfhl_oracle::HeuristicOracle;
    use serde_json::json;

    fn dispatcher() -> Dispatcher {
        Dispatcher::new("dev@example.com", Arc::new(HeuristicOracle::new()))
    }

    #[tokio::test]
    async fn lcm_overflow_is_a_failure_envelope() {
        let env = dispatcher()
            .dispatch(&json!({"lcm": [i64::MAX, i64::MAX - 1]}))
            .await;
        assert!(!env.is_success);
        assert_eq!(env.error.as_deref(), Some(messages::LCM_OVERFLOW));
    }

    #[tokio::test]
    async fn large_primes_are_filtered_off_the_worker_thread() {
        let out = dispatcher()
            .execute(Operation::Prime(vec![2_147_483_647, 2_147_483_649]))
            .await
            .expect("prime");
        assert_eq!(out, OperationOutput::Integers(vec![2_147_483_647]));
    }

    #[tokio::test]
    async fn offload_reports_panics_as_internal() {
        let err = offload(|| -> u64 { panic!("boom") })
            .await
            .expect_err("panicked task");
        assert_eq!(err.kind, bfhl_types::ErrorKind::Internal);
        assert_eq!(err.message, messages::INTERRUPTED);
    }

    #[tokio::test]
    async fn execute_hcf_directly() {
        let out = dispatcher()
            .execute(Operation::Hcf(vec![12, 18]))
            .await
            .expect("hcf");
        assert_eq!(out, OperationOutput::Integer(6));
    }

    #[test]
    fn health_carries_email_only() {
        let env = dispatcher().health();
        assert!(env.is_success);
        assert_eq!(env.official_email, "dev@example.com");
        assert!(env.data.is_none() && env.error.is_none());
    }

    #[test]
    fn debug_shows_oracle_name() {
        let dbg = format!("{:?}", dispatcher());
        assert!(dbg.contains("heuristic"));
    }
}
