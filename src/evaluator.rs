//! Password policy evaluator - runs every section and aggregates violations.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::catalog::SequenceCatalog;
use crate::policy::{PasswordPolicy, PolicyError};
use crate::sections::{SECTIONS, shannon_entropy};
use crate::violation::{PasswordPolicyViolation, Violation};

/// Full result of [`PasswordPolicyEvaluator::evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordReport {
    pub violations: Vec<Violation>,
    /// Shannon entropy in bits.
    pub entropy: f64,
    /// Length in codepoints.
    pub length: usize,
    /// Advisory; never turns into a violation.
    pub meets_recommended_length: bool,
}

impl PasswordReport {
    pub fn is_acceptable(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Holds a validated policy and the sequence catalog. Immutable after
/// construction, so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct PasswordPolicyEvaluator {
    policy: PasswordPolicy,
    catalog: SequenceCatalog,
}

impl PasswordPolicyEvaluator {
    /// Builds an evaluator after checking the policy for consistency.
    pub fn new(policy: PasswordPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self {
            policy,
            catalog: SequenceCatalog::STANDARD,
        })
    }

    pub fn with_catalog(mut self, catalog: SequenceCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    pub fn catalog(&self) -> &SequenceCatalog {
        &self.catalog
    }

    /// Runs every section and returns the violations in emission order.
    ///
    /// All sections run regardless of earlier failures. Never fails; an
    /// empty list means the password is acceptable.
    pub fn check(&self, password: &SecretString) -> Vec<Violation> {
        let mut violations = Vec::new();

        for (_section_name, section_fn) in SECTIONS {
            let found = section_fn(password, &self.policy, &self.catalog);

            #[cfg(feature = "tracing")]
            for violation in &found {
                tracing::debug!(
                    section = _section_name,
                    rule = violation.rule(),
                    "password rule failed"
                );
            }

            violations.extend(found);
        }

        violations
    }

    /// Same as [`check`](Self::check), rendered as messages.
    pub fn check_messages(&self, password: &SecretString) -> Vec<String> {
        self.check(password)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Accept/reject wrapper around [`check`](Self::check).
    pub fn validate(&self, password: &SecretString) -> Result<(), PasswordPolicyViolation> {
        let violations = self.check(password);
        if violations.is_empty() {
            return Ok(());
        }
        Err(PasswordPolicyViolation { violations })
    }

    /// Runs [`check`](Self::check) and adds entropy and length details.
    pub fn evaluate(&self, password: &SecretString) -> PasswordReport {
        let pwd = password.expose_secret();
        let length = pwd.chars().count();

        PasswordReport {
            violations: self.check(password),
            entropy: shannon_entropy(pwd),
            length,
            meets_recommended_length: length >= self.policy.recommended_length,
        }
    }
}

impl Default for PasswordPolicyEvaluator {
    fn default() -> Self {
        Self {
            policy: PasswordPolicy::default(),
            catalog: SequenceCatalog::STANDARD,
        }
    }
}

/// Debounce applied before an async evaluation starts.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates after [`EVALUATION_DEBOUNCE`] and sends the report via channel.
///
/// Nothing is sent if `token` is cancelled during the debounce.
#[cfg(feature = "async")]
pub async fn check_password_tx(
    evaluator: &PasswordPolicyEvaluator,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let report = evaluator.evaluate(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_check_password_tx() {
        let evaluator = PasswordPolicyEvaluator::default();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        check_password_tx(&evaluator, &secret("Q7!x@Lm2#Rp9"), token, tx).await;

        let report = rx.recv().await.expect("Should receive report");
        assert!(report.is_acceptable());
    }

    #[tokio::test(start_paused = true)]
    async fn test_check_password_tx_cancelled() {
        let evaluator = PasswordPolicyEvaluator::default();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        check_password_tx(&evaluator, &secret("aaaa"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_check_password_tx_receiver_dropped() {
        let evaluator = PasswordPolicyEvaluator::default();
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        check_password_tx(&evaluator, &secret("aaaa"), CancellationToken::new(), tx).await;
    }
}
