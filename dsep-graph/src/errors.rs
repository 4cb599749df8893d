/// Graph construction and lookup errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("unknown node: {name}")]
    UnknownNode { name: String },

    #[error("duplicate node name: {name}")]
    DuplicateNode { name: String },

    // Field is named `from`, not `source`: thiserror reserves `source` for
    // the error-chain cause.
    #[error("edge {from} -> {to} would create a cycle")]
    CycleDetected { from: String, to: String },

    #[error("self-loop on node: {name}")]
    SelfLoop { name: String },
}

pub type DsepResult<T> = Result<T, GraphError>;
