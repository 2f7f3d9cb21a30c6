use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, NetErr>;

/// Names the function reference a topology is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Activation,
    OutputActivation,
    Loss,
    Optimizer,
}

impl Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FunctionKind::Activation => "activation",
            FunctionKind::OutputActivation => "output activation",
            FunctionKind::Loss => "loss",
            FunctionKind::Optimizer => "optimizer",
        };

        write!(f, "{s}")
    }
}

/// The crate's error type.
#[derive(Debug)]
pub enum NetErr {
    NullTensor {
        what: &'static str,
    },
    NullTopology,
    NullNetwork,
    InvalidDimension {
        what: &'static str,
        got: usize,
    },
    DimensionLimitExceeded {
        what: &'static str,
        got: usize,
        max: usize,
    },
    InvalidTopologyParams {
        what: &'static str,
        got: i64,
    },
    MissingFunction(FunctionKind),
    ShapeMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    Spec(serde_json::Error),
}

impl Display for NetErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetErr::NullTensor { what } => write!(f, "the {what} tensor has no backing storage"),
            NetErr::NullTopology => write!(f, "no network topology was given"),
            NetErr::NullNetwork => write!(f, "the network has been released"),
            NetErr::InvalidDimension { what, got } => {
                write!(f, "invalid dimension for {what}: got {got}")
            }
            NetErr::DimensionLimitExceeded { what, got, max } => {
                write!(f, "{what} exceeds its limit: got {got}, max is {max}")
            }
            NetErr::InvalidTopologyParams { what, got } => {
                write!(f, "invalid topology parameter {what}: got {got}")
            }
            NetErr::MissingFunction(kind) => write!(f, "the topology has no {kind} function"),
            NetErr::ShapeMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "shape mismatch for {what}: got {got}, expected {expected}"
            ),
            NetErr::Spec(e) => write!(f, "invalid network spec: {e}"),
        }
    }
}

impl Error for NetErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NetErr::Spec(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for NetErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Spec(value)
    }
}
