/// Recoverable user-flow warnings. Every variant is surfaced as a plain
/// message through the outbound response; none terminates the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowWarning {
    DuplicateName { name: String },
    EmptyName,
    EmptyRegistry,
    NoAttendanceYet,
    EmptyAttendance,
    BathCostUnset,
    InvalidAmount { input: String },
    NotFound,
    UnknownCommand,
}
