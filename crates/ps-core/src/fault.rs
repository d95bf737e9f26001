use thiserror::Error;

use crate::param::ParamName;

/// Operator-visible failure raised during a reconciliation cycle or a write.
///
/// Faults are surfaced through the UI projection as alerts; they never abort
/// the cycle or the polling loop. The system recovers by re-reading on the
/// next cycle rather than crash-and-restart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncFault {
    #[error("failed to get parameter {name}: {reason}")]
    ReadFailed { name: ParamName, reason: String },

    #[error("failed to set parameter {name}: {reason}")]
    WriteFailed { name: ParamName, reason: String },

    #[error("failed to get scenario catalog: {reason}")]
    CatalogFailed { reason: String },

    #[error("unknown application mode: {raw:?}")]
    UnknownMode { raw: String },
}
