//! Password strength scoring - advisory feedback shown beside the input.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

/// Special characters that count toward the score and the sign-up gate.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

const MIN_LENGTH: usize = 8;

pub(crate) fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// Coarse strength category. Advisory only; the submit gate is
/// [`validate_password`](crate::validate_password).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl Strength {
    /// Maps a 0-5 criteria tally to a category.
    ///
    /// The mapping is fixed and monotonic: 0-2 is `Weak`, 3 is `Fair`,
    /// 4 is `Good`, 5 is `Strong`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Strength::Weak,
            3 => Strength::Fair,
            4 => Strength::Good,
            _ => Strength::Strong,
        }
    }
}

/// The five independent scoring criteria, one point each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criteria {
    pub min_length: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl Criteria {
    /// Number of satisfied criteria.
    pub fn score(&self) -> u8 {
        [
            self.min_length,
            self.uppercase,
            self.lowercase,
            self.digit,
            self.special,
        ]
        .iter()
        .filter(|&&b| b)
        .count() as u8
    }
}

/// Outcome of a strength evaluation: the tally plus the per-criterion
/// breakdown, so a UI can render a checklist as well as the meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthEvaluation {
    pub score: u8,
    pub criteria: Criteria,
}

impl StrengthEvaluation {
    pub fn strength(&self) -> Strength {
        Strength::from_score(self.score)
    }
}

/// Evaluates password strength and returns the full breakdown.
///
/// Total over all strings; an empty candidate satisfies no criterion and
/// scores `Weak`. Deterministic, no locale dependence, no side effects.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthEvaluation {
    let pwd = password.expose_secret();

    let criteria = Criteria {
        min_length: pwd.chars().count() >= MIN_LENGTH,
        uppercase: pwd.chars().any(|c| c.is_ascii_uppercase()),
        lowercase: pwd.chars().any(|c| c.is_ascii_lowercase()),
        digit: pwd.chars().any(|c| c.is_ascii_digit()),
        special: pwd.chars().any(is_special),
    };

    StrengthEvaluation {
        score: criteria.score(),
        criteria,
    }
}

/// Convenience wrapper returning the category alone.
pub fn calculate_password_strength(password: &SecretString) -> Strength {
    evaluate_password_strength(password).strength()
}

/// Debounce window before a keystroke-driven evaluation fires.
#[cfg(feature = "async")]
const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that debounces, then sends the evaluation via channel.
///
/// A token cancelled during the debounce window suppresses the send, so a
/// caller re-spawning this on every keystroke only ever receives the
/// evaluation of the latest candidate.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("strength evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        return;
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}



#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_sends_result() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        evaluate_password_strength_tx(&pwd, token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.strength(), Strength::Strong);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_cancelled_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        evaluate_password_strength_tx(&pwd, token, tx).await;

        assert!(rx.try_recv().is_err());
    }
}
