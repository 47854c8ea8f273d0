//! Trip and participant model with settlement arithmetic.
//!
//! A trip is one settlement unit: every participant's receipts are summed,
//! the group total is averaged across participants, and each participant's
//! adjustment is the share minus what they already paid.

use crate::money::Money;

/// One participant's paid receipts within a trip.
///
/// A participant with zero receipts paid nothing and simply owes their share.
#[derive(Debug, Clone)]
pub struct Participant {
    receipts: Vec<Money>,
}

impl Participant {
    /// Creates a participant from their receipt amounts, in input order.
    pub fn new(receipts: Vec<Money>) -> Self {
        Participant { receipts }
    }

    /// Number of receipts this participant submitted.
    pub fn receipt_count(&self) -> usize {
        self.receipts.len()
    }

    /// Total amount this participant personally paid for the group.
    pub fn total_paid(&self) -> Money {
        self.receipts.iter().copied().sum()
    }
}

/// One group trip: an ordered sequence of participants.
///
/// # Invariants
///
/// - At least one participant (the parser rejects a zero count)
/// - Adjustments over a trip sum to zero before rounding, since the share
///   is the exact average of the total expense
#[derive(Debug, Clone)]
pub struct Trip {
    participants: Vec<Participant>,
}

impl Trip {
    /// Creates a trip from its participants, in input order.
    pub fn new(participants: Vec<Participant>) -> Self {
        debug_assert!(!participants.is_empty());
        Trip { participants }
    }

    /// Number of participants on this trip.
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// The participants, in input order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Total expense across all participants.
    pub fn total_expense(&self) -> Money {
        self.participants.iter().map(|p| p.total_paid()).sum()
    }

    /// Each participant's equal share of the total expense.
    ///
    /// Exact decimal division; no rounding at this stage.
    pub fn share(&self) -> Money {
        self.total_expense().split_between(self.participants.len())
    }

    /// Signed adjustment per participant, in input order.
    ///
    /// Positive means the participant owes the group; negative means the
    /// group owes the participant.
    pub fn adjustments(&self) -> Vec<Money> {
        let share = self.share();
        self.participants
            .iter()
            .map(|p| share - p.total_paid())
            .collect()
    }
}
