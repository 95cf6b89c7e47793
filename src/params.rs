//! src/params.rs
//!
//! Bundelt alle afstembare parameters voor een walk-experiment.

use crate::{error::ParamsError, generators::Topology, walk::WalkMode, walk::DEFAULT_START};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Alle instellingen voor één experiment: graaf, stopcriterium en toeval.
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub n: usize,
    /// Indien gezet: laad de graaf uit dit DIMACS-bestand in plaats van te genereren.
    pub instance_path: Option<String>,
    /// `"complete"`, `"cycle"` of `"random"`.
    pub topology: String,
    /// Kantkans voor `"random"`; standaard `ln(n) / n`.
    pub p: Option<f64>,
    /// Aantal stappen in begrensde modus; standaard `n²`.
    pub steps: Option<usize>,
    /// Indien gezet: loop tot de graaf zo vaak bedekt is (cover-modus).
    pub cover_target: Option<usize>,
    /// Optionele stapgrens voor de cover-modus.
    pub max_steps: Option<usize>,
    pub burning: bool,
    pub start: usize,
    pub runs: usize, // Aantal runs per experiment
    pub seed: u64, // Random seed
}

#[cfg(feature = "python")]
#[pymethods]
impl Params {
    #[new]
    #[pyo3(signature = (
        n = 500,
        instance_path = None,
        topology = "complete".to_string(),
        p = None,
        steps = None,
        cover_target = None,
        max_steps = None,
        burning = true,
        start = 1,
        runs = 1,
        seed = 42,
    ))]
    #[allow(clippy::too_many_arguments)]
    fn py_new(
        n: usize,
        instance_path: Option<String>,
        topology: String,
        p: Option<f64>,
        steps: Option<usize>,
        cover_target: Option<usize>,
        max_steps: Option<usize>,
        burning: bool,
        start: usize,
        runs: usize,
        seed: u64,
    ) -> Self {
        Self {
            n,
            instance_path,
            topology,
            p,
            steps,
            cover_target,
            max_steps,
            burning,
            start,
            runs,
            seed,
        }
    }

    /// Maakt een kopie, blootgesteld aan Python.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl Default for Params {
    fn default() -> Self {
        Params {
            n: 500,
            instance_path: None,
            topology: "complete".to_string(),
            p: None,
            steps: None,
            cover_target: None,
            max_steps: None,
            burning: true,
            start: DEFAULT_START,
            runs: 1,
            seed: 42,
        }
    }
}

impl Params {
    /// Standaardparameters voor een graaf met `n` knopen in de gegeven topologie.
    pub fn new(n: usize, topology: &str) -> Self {
        Self {
            n,
            topology: topology.to_string(),
            ..Self::default()
        }
    }

    /// Laadt de graaf uit een DIMACS-bestand; `n` volgt dan uit de header.
    pub fn from_instance(path: &str) -> Self {
        Self {
            instance_path: Some(path.to_string()),
            ..Self::default()
        }
    }

    /// Schakelt over naar cover-modus met doel `c` en optionele stapgrens.
    pub fn enable_cover(&mut self, c: usize, max_steps: Option<usize>) -> &mut Self {
        self.cover_target = Some(c);
        self.max_steps = max_steps;
        self
    }

    /// Lost de topologienaam op naar een [`Topology`].
    pub fn topology(&self) -> Result<Topology, ParamsError> {
        match self.topology.trim().to_ascii_lowercase().as_str() {
            "complete" => Ok(Topology::Complete),
            "cycle" => Ok(Topology::Cycle),
            "random" => {
                let p = self.p.unwrap_or_else(|| default_probability(self.n));
                if !(0.0..=1.0).contains(&p) {
                    return Err(ParamsError::InvalidProbability(p));
                }
                Ok(Topology::Random { p })
            }
            other => Err(ParamsError::UnknownTopology(other.to_owned())),
        }
    }

    /// Aantal stappen in begrensde modus voor een graaf met `n` knopen.
    pub fn step_budget(&self, n: usize) -> usize {
        self.steps.unwrap_or_else(|| n.saturating_mul(n))
    }

    pub fn mode(&self) -> WalkMode {
        if self.burning {
            WalkMode::Burning
        } else {
            WalkMode::Simple
        }
    }

    /// Controleert de parameters voordat een experiment start.
    pub fn validate(&self) -> Result<(), ParamsError> {
        self.topology()?;
        if self.cover_target == Some(0) {
            return Err(ParamsError::ZeroCoverTarget);
        }
        if self.runs == 0 {
            return Err(ParamsError::ZeroRuns);
        }
        Ok(())
    }
}

/// `ln(n) / n`, de connectiviteitsdrempel voor toevalsgrafen (begrensd tot `[0, 1]`).
fn default_probability(n: usize) -> f64 {
    if n < 2 {
        return 1.0;
    }
    let n = n as f64;
    (n.ln() / n).clamp(0.0, 1.0)
}
