//! src/experiment.rs
//!
//! Eén experiment: bouw een graaf, laat er een walk over lopen (begrensd of
//! tot bedekking) en verzamel de kerncijfers. Elke run krijgt een eigen
//! `ChaCha8Rng`, geseed met `seed + run`.

use crate::{
    error::ExperimentError,
    graph::MultiGraph,
    params::Params,
    walk::Walk,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io::BufReader;
use tracing::debug;

/// De kerncijfers van één run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    /// Aantal knopen.
    pub n: usize,
    /// Aantal kanten van de gegenereerde of geladen graaf.
    pub edges: u64,
    /// Kanten in het spoor voor de eerste stap (altijd 0).
    pub trace_before: u64,
    pub trace_after: u64,
    /// Cover-getal aan het eind van de run.
    pub cover: usize,
    /// Aantal gezette stappen.
    pub time: usize,
    /// Resterende kanten in de graaf van de walk.
    pub edges_left: u64,
    /// `false` als een begrensde walk vastliep voor zijn stapbudget op was.
    pub completed: bool,
}

/// Laadt een DIMACS-instantie van schijf.
pub fn load_instance(path: &str) -> Result<MultiGraph, ExperimentError> {
    let to_err = |source| ExperimentError::Load {
        path: path.to_string(),
        source,
    };
    let file = File::open(path).map_err(to_err)?;
    MultiGraph::parse_dimacs(BufReader::new(file)).map_err(to_err)
}

/// De startgraaf van een run: uit `instance_path` indien gezet, anders gegenereerd.
fn build_graph<R>(params: &Params, rng: &mut R) -> Result<MultiGraph, ExperimentError>
where
    R: Rng + ?Sized,
{
    match params.instance_path.as_deref() {
        Some(path) => load_instance(path),
        None => Ok(params.topology()?.build(params.n, rng)),
    }
}

/// Voert één run uit met de gegeven RNG.
pub fn run_once<R>(params: &Params, rng: &mut R) -> Result<Report, ExperimentError>
where
    R: Rng + ?Sized,
{
    params.validate()?;
    let graph = build_graph(params, rng)?;
    let n = graph.n();
    let edges = graph.total_edges();

    let mut walk = Walk::with_mode(graph, params.start, params.mode())?;
    let trace_before = walk.trace().total_edges();
    debug!(
        n,
        edges,
        instance = ?params.instance_path,
        mode = ?walk.mode(),
        "experiment started"
    );

    let completed = match params.cover_target {
        Some(c) => {
            match params.max_steps {
                Some(limit) => walk.walk_till_covered_within(c, limit, rng)?,
                None => walk.walk_till_covered(c, rng)?,
            };
            true
        }
        None => walk.walk(params.step_budget(n), rng),
    };

    let report = Report {
        n,
        edges,
        trace_before,
        trace_after: walk.trace().total_edges(),
        cover: walk.has_covered(),
        time: walk.time(),
        edges_left: walk.graph().total_edges(),
        completed,
    };
    debug!(?report, "experiment finished");
    Ok(report)
}

/// Voert `params.runs` onafhankelijke runs uit, elk met een eigen geseede RNG.
pub fn run(params: &Params) -> Result<Vec<Report>, ExperimentError> {
    (0..params.runs)
        .map(|i| {
            let mut rng = ChaCha8Rng::seed_from_u64(params.seed.wrapping_add(i as u64));
            run_once(params, &mut rng)
        })
        .collect()
}

/// Cover-tijd van één run in cover-modus; standaard doel 1.
pub fn cover_time(params: &Params) -> Result<usize, ExperimentError> {
    let mut params = params.clone();
    if params.cover_target.is_none() {
        params.cover_target = Some(1);
    }
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    run_once(&params, &mut rng).map(|r| r.time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalkError;
    use std::io::Write;

    #[test]
    fn bounded_burning_run_conserves_edges() {
        let params = Params::new(12, "complete");
        let reports = run(&params).unwrap();
        assert_eq!(reports.len(), 1);
        let r = &reports[0];
        assert_eq!(r.edges, 66);
        assert_eq!(r.trace_before, 0);
        assert_eq!(r.trace_after, r.time as u64);
        assert_eq!(r.edges_left + r.trace_after, r.edges);
        // 144 stappen op 66 kanten: de walk loopt gegarandeerd vast.
        assert!(!r.completed);
    }

    #[test]
    fn simple_run_uses_full_budget() {
        let mut params = Params::new(8, "cycle");
        params.burning = false;
        params.steps = Some(50);
        let r = run(&params).unwrap().remove(0);
        assert!(r.completed);
        assert_eq!(r.time, 50);
        assert_eq!(r.trace_after, 50);
        assert_eq!(r.edges_left, 8);
    }

    #[test]
    fn runs_are_reproducible_per_seed() {
        let mut params = Params::new(20, "random");
        params.p = Some(0.5);
        params.runs = 3;
        let a = run(&params).unwrap();
        let b = run(&params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn cover_mode_reports_cover_time() {
        let mut params = Params::new(4, "complete");
        params.enable_cover(1, None);
        let r = run(&params).unwrap().remove(0);
        assert!(r.completed);
        assert!(r.cover >= 1);
        assert!((3..=4).contains(&r.time));
        assert_eq!(cover_time(&params).unwrap(), r.time);
    }

    #[test]
    fn stuck_cover_run_is_an_error() {
        // De cykel van 3 brandt op na drie stappen en is nooit twee keer bedekt.
        let mut params = Params::new(3, "cycle");
        params.enable_cover(2, None);
        assert!(matches!(
            run(&params),
            Err(ExperimentError::Walk(WalkError::Stuck))
        ));
    }

    #[test]
    fn runs_on_a_dimacs_instance() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "c driehoek met dubbele kant\np edge 3 4\ne 1 2\ne 2 3\ne 3 1\ne 1 2").unwrap();
        let path = file.path().to_str().unwrap();

        let mut params = Params::from_instance(path);
        params.n = 999; // genegeerd: de header bepaalt n
        let r = run(&params).unwrap().remove(0);
        assert_eq!(r.n, 3);
        assert_eq!(r.edges, 4);
        // Budget 3² = 9 stappen, maar er zijn maar 4 kanten.
        assert!(!r.completed);
        assert_eq!(r.edges_left + r.trace_after, 4);

        assert_eq!(load_instance(path).unwrap().edge_count(2, 1), 2);
    }

    #[test]
    fn missing_instance_is_a_load_error() {
        let params = Params::from_instance("/nonexistent/burnwalk/graph.clq");
        match run(&params) {
            Err(ExperimentError::Load { path, source }) => {
                assert_eq!(path, "/nonexistent/burnwalk/graph.clq");
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn invalid_params_are_rejected_before_running() {
        let params = Params::new(5, "lattice");
        assert!(matches!(run(&params), Err(ExperimentError::Params(_))));
    }
}
