pub mod ledger;
pub mod model;
pub mod registry;
pub mod services;

pub use ledger::ExpenseLedger;
pub use model::{
    Amount, AmountError, ExpenseCategory, LedgerEntry, PaidCategory, Participant, ParticipantId,
    ParticipantShare, SettlementReport,
};
pub use registry::{ParticipantRegistry, RegistryError};
pub use services::SettlementCalculator;
