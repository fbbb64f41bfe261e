mod settlement_calculator;

pub use settlement_calculator::SettlementCalculator;
