use std::{fmt, str::FromStr};

/// Opaque participant identity, assigned sequentially by the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticipantId(pub u64);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Participant {
    pub id: ParticipantId,
    pub display_name: String,
}

/// Expense category as presented to the user. `Bath` is a single shared
/// cost, never attributed to an individual payer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    Food,
    Alcohol,
    Bath,
}

/// The subset of categories attributable to the participant who paid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaidCategory {
    Food,
    Alcohol,
}

impl From<PaidCategory> for ExpenseCategory {
    fn from(category: PaidCategory) -> Self {
        match category {
            PaidCategory::Food => ExpenseCategory::Food,
            PaidCategory::Alcohol => ExpenseCategory::Alcohol,
        }
    }
}

/// Validated monetary amount: finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Amount(f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("not a number")]
    NotANumber,
    #[error("amount must not be negative")]
    Negative,
}

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub fn new(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotANumber);
        }
        if value < 0.0 {
            return Err(AmountError::Negative);
        }
        Ok(Self(value))
    }

    /// Parse user-entered text into an amount. Accepts a comma as the
    /// decimal separator since that is what most users type.
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        let normalized = input.trim().replace(',', ".");
        let value = f64::from_str(&normalized).map_err(|_| AmountError::NotANumber)?;
        Self::new(value)
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-participant accumulated category totals for the current round.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LedgerEntry {
    pub food: f64,
    pub alcohol: f64,
}

impl LedgerEntry {
    pub fn total(self) -> f64 {
        self.food + self.alcohol
    }
}

/// One attendee's line in the settlement report. Positive `owed` means the
/// participant must pay into the pool, negative means a refund.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticipantShare {
    pub id: ParticipantId,
    pub paid: f64,
    pub owed: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SettlementReport {
    pub total_spent: f64,
    pub total_food: f64,
    pub total_alcohol: f64,
    pub bath_cost: f64,
    pub per_person_bath: f64,
    pub per_person_food: f64,
    pub per_person_alcohol: f64,
    /// Attendee shares in registration order.
    pub shares: Vec<ParticipantShare>,
}
