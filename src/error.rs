//! src/error.rs
//!
//! Foutsoorten van de walk en van de experimentconfiguratie.

use std::io;

use thiserror::Error;

/// Fouten die een walk kan opleveren.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum WalkError {
    /// De huidige knoop heeft geen resterende kantcapaciteit meer.
    #[error("random walk is stuck")]
    Stuck,
    /// De startknoop ligt niet in `1..=n`.
    #[error("start vertex {start} is outside 1..={n}")]
    StartOutOfRange { start: usize, n: usize },
    /// Een begrensde cover-run haalde zijn doel niet binnen `limit` stappen.
    #[error("coverage target not reached within {limit} steps")]
    StepLimitReached { limit: usize },
}

/// Ongeldige experimentparameters.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("edge probability {0} is not in [0, 1]")]
    InvalidProbability(f64),
    #[error("unknown topology `{0}`; expected `complete`, `cycle` or `random`")]
    UnknownTopology(String),
    #[error("cover target must be at least 1")]
    ZeroCoverTarget,
    #[error("runs must be at least 1")]
    ZeroRuns,
}

/// Alles wat een experiment-run kan laten mislukken.
#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error(transparent)]
    Params(#[from] ParamsError),
    #[error(transparent)]
    Walk(#[from] WalkError),
    /// Het DIMACS-bestand kon niet gelezen of geparst worden.
    #[error("failed to load graph from `{path}`: {source}")]
    Load {
        path: String,
        #[source]
        source: io::Error,
    },
}
