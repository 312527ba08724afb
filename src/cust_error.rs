//! This module contains all custom errors used in this library.

use std::fmt;
use std::error::Error;

#[derive(Debug)]
pub enum ImportError {
    IoError(std::io::Error),
    InputMalformedError,
    BadIntError(std::num::ParseIntError),
    /// An edge references a vertex out of range or is a self-loop.
    BadEdgeError(usize, usize),
    BadPatternError(String),
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> ImportError {
        ImportError::IoError(e)
    }
}

impl From<std::num::ParseIntError> for ImportError {
    fn from(e: std::num::ParseIntError) -> ImportError {
        ImportError::BadIntError(e)
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(_) => write!(f, "Import: IoError"),
            Self::InputMalformedError => write!(f, "Import: Input is malformed."),
            Self::BadIntError(_) => write!(f, "Import: Integer is malformed."),
            Self::BadEdgeError(src, trg) => write!(f, "Import: Edge ({}, {}) is invalid.", src, trg),
            Self::BadPatternError(pattern) => write!(f, "Import: Glob pattern {} is invalid.", pattern),
        }
    }
}

impl Error for ImportError {}

#[derive(Debug)]
pub enum SolverError {
    /// The requested approach name is not in the fixed approach set.
    UnknownApproach(String),
    /// The worker exited without producing a result before its deadline.
    WorkerFailure,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownApproach(name) => write!(f, "Not a valid approach name: {}", name),
            Self::WorkerFailure => write!(f, "Worker terminated without a result."),
        }
    }
}

impl Error for SolverError {}
