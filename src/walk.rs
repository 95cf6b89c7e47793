//! src/walk.rs
//!
//! De brandende random walk: elke stap kiest een kant uit de resterende
//! graaf, uniform gewogen naar multipliciteit, en verbruikt die kant.
//! Het spoor (`trace`) houdt elke doorlopen kant bij en wordt nooit verlaagd.

use crate::{error::WalkError, graph::MultiGraph};
use bitvec::prelude::*;
use rand::Rng;
use tracing::{info, trace};

/// Standaard startknoop van een walk.
pub const DEFAULT_START: usize = 1;

/// Bepaalt of een stap de doorlopen kant uit de resterende graaf haalt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalkMode {
    /// Elke doorlopen kant wordt verbruikt.
    #[default]
    Burning,
    /// Gewone random walk; de resterende graaf blijft onaangeroerd.
    Simple,
}

/// Een random walk over een eigen (resterende) multigraaf.
#[derive(Clone, Debug)]
pub struct Walk {
    /// Resterende capaciteit; wordt destructief bijgewerkt in `Burning`-modus.
    graph: MultiGraph,
    /// Alle doorlopen kanten.
    trace: MultiGraph,
    loc: usize,
    t: usize,
    /// `visits[v - 1]` is het aantal keren dat de walk op `v` stond.
    visits: Vec<usize>,
    /// Reeds bezochte knopen (index `v - 1`).
    range: BitVec,
    mode: WalkMode,
}

impl Walk {
    /*────────── Constructors ──────────*/

    /// Start een brandende walk op `start` over `graph`.
    pub fn new(graph: MultiGraph, start: usize) -> Result<Self, WalkError> {
        Self::with_mode(graph, start, WalkMode::Burning)
    }

    pub fn with_mode(graph: MultiGraph, start: usize, mode: WalkMode) -> Result<Self, WalkError> {
        let n = graph.n();
        if start == 0 || start > n {
            return Err(WalkError::StartOutOfRange { start, n });
        }
        let mut visits = vec![0; n];
        visits[start - 1] = 1;
        let mut range = bitvec![0; n];
        range.set(start - 1, true);
        Ok(Self {
            graph,
            trace: MultiGraph::with_vertices(n),
            loc: start,
            t: 0,
            visits,
            range,
            mode,
        })
    }

    /*────────── Queries ──────────*/

    /// De resterende graaf.
    #[inline]
    pub fn graph(&self) -> &MultiGraph {
        &self.graph
    }

    #[inline]
    pub fn trace(&self) -> &MultiGraph {
        &self.trace
    }

    /// Huidige knoop.
    #[inline]
    pub fn location(&self) -> usize {
        self.loc
    }

    /// Aantal gezette stappen.
    #[inline]
    pub fn time(&self) -> usize {
        self.t
    }

    #[inline]
    pub fn mode(&self) -> WalkMode {
        self.mode
    }

    /// Aantal keren dat de walk op `v` stond, inclusief de start; 0 buiten bereik.
    pub fn visits(&self, v: usize) -> usize {
        v.checked_sub(1)
            .and_then(|i| self.visits.get(i).copied())
            .unwrap_or(0)
    }

    /// Som over alle bezoeken; altijd gelijk aan `time() + 1`.
    pub fn total_visits(&self) -> usize {
        self.visits.iter().sum()
    }

    /// Bitset van bezochte knopen; bit `v - 1` hoort bij knoop `v`.
    #[inline]
    pub fn range(&self) -> &BitSlice {
        &self.range
    }

    /// Aantal verschillende bezochte knopen.
    pub fn range_size(&self) -> usize {
        self.range.count_ones()
    }

    pub fn is_range_complete(&self) -> bool {
        self.range.all()
    }

    /// Het cover-getal: de grootste `c` zodat elke knoop minstens `c` keer is
    /// bezocht, begrensd door `t + 1`.
    pub fn has_covered(&self) -> usize {
        self.visits.iter().copied().fold(self.t + 1, usize::min)
    }

    /// Geeft de resterende graaf en het spoor terug.
    pub fn into_parts(self) -> (MultiGraph, MultiGraph) {
        (self.graph, self.trace)
    }

    /*────────── Stappen ──────────*/

    /// Zet één willekeurige stap en geeft de nieuwe knoop terug.
    ///
    /// Faalt met [`WalkError::Stuck`] zonder iets te wijzigen als de huidige
    /// knoop geen resterende kanten heeft.
    pub fn step<R>(&mut self, rng: &mut R) -> Result<usize, WalkError>
    where
        R: Rng + ?Sized,
    {
        let neighbourhood = self.graph.neighbors(self.loc);
        if neighbourhood.is_empty() {
            return Err(WalkError::Stuck);
        }
        let pos = rng.gen_range(1..=neighbourhood.len());
        let to = neighbourhood.as_slice()[pos - 1];
        self.make_step(to);
        Ok(to)
    }

    fn make_step(&mut self, to: usize) {
        trace!(from = self.loc, to, t = self.t, "step");
        self.trace.add_edge(self.loc, to);
        if self.mode == WalkMode::Burning {
            self.graph.remove_edge(self.loc, to);
        }
        self.loc = to;
        self.t += 1;
        self.visits[to - 1] += 1;
        self.range.set(to - 1, true);
    }

    /// Zet maximaal `steps` stappen. Geeft `false` terug als de walk vastliep.
    pub fn walk<R>(&mut self, steps: usize, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        for _ in 0..steps {
            if let Err(err) = self.step(rng) {
                info!(t = self.t, loc = self.loc, %err, "random walk is stuck");
                return false;
            }
        }
        true
    }

    /// Loopt tot de graaf `c` keer bedekt is en geeft de eindtijd terug.
    ///
    /// Onbegrensd: als de walk vastloopt voor het doel bereikt is, wordt
    /// [`WalkError::Stuck`] doorgegeven.
    pub fn walk_till_covered<R>(&mut self, c: usize, rng: &mut R) -> Result<usize, WalkError>
    where
        R: Rng + ?Sized,
    {
        while self.has_covered() < c {
            self.step(rng)?;
        }
        Ok(self.t)
    }

    /// Zoals [`Walk::walk_till_covered`], maar met hoogstens `max_steps` stappen in deze aanroep.
    pub fn walk_till_covered_within<R>(
        &mut self,
        c: usize,
        max_steps: usize,
        rng: &mut R,
    ) -> Result<usize, WalkError>
    where
        R: Rng + ?Sized,
    {
        let mut taken = 0usize;
        while self.has_covered() < c {
            if taken == max_steps {
                return Err(WalkError::StepLimitReached { limit: max_steps });
            }
            self.step(rng)?;
            taken += 1;
        }
        Ok(self.t)
    }
}
