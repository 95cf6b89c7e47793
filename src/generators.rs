//! src/generators.rs
//!
//! Generatoren voor de startgrafen van de experimenten: volledige graaf,
//! cykel en een Erdős–Rényi-achtige toevalsgraaf. Elke aanroep bouwt een
//! verse `MultiGraph`; er is geen gedeelde toestand tussen aanroepen.
use crate::graph::MultiGraph;
use rand::Rng;

/// De topologie waarmee een experiment zijn graaf opbouwt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Topology {
    Complete,
    Cycle,
    /// Elke kant onafhankelijk aanwezig met kans `p`.
    Random { p: f64 },
}

impl Topology {
    /// Bouwt een graaf met `n` knopen in deze topologie.
    pub fn build<R>(&self, n: usize, rng: &mut R) -> MultiGraph
    where
        R: Rng + ?Sized,
    {
        match *self {
            Topology::Complete => complete_graph(n),
            Topology::Cycle => cycle_graph(n),
            Topology::Random { p } => random_graph(n, p, rng),
        }
    }
}

/// De volledige graaf `K_n`: precies één kant per paar `u < v`.
pub fn complete_graph(n: usize) -> MultiGraph {
    let mut g = MultiGraph::with_vertices(n);
    for u in 1..n {
        for v in u + 1..=n {
            g.add_edge(u, v);
        }
    }
    g
}

/// De cykel `1 - 2 - … - n - 1`.
///
/// De regel wordt ook voor kleine `n` letterlijk toegepast: `n = 2` geeft een
/// dubbele kant tussen 1 en 2, `n = 1` een zelf-lus op 1 en `n = 0` een lege graaf.
pub fn cycle_graph(n: usize) -> MultiGraph {
    let mut g = MultiGraph::with_vertices(n);
    for u in 1..n {
        g.add_edge(u, u + 1);
    }
    g.add_edge(n, 1);
    g
}

/// Toevalsgraaf: voor elk paar `u < v` één Bernoulli(`p`)-trekking met een
/// uniforme waarde in `[0, 1)`.
pub fn random_graph<R>(n: usize, p: f64, rng: &mut R) -> MultiGraph
where
    R: Rng + ?Sized,
{
    let mut g = MultiGraph::with_vertices(n);
    for u in 1..n {
        for v in u + 1..=n {
            if rng.gen::<f64>() < p {
                g.add_edge(u, v);
            }
        }
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn complete_graph_has_every_pair_once() {
        for n in 0..12 {
            let g = complete_graph(n);
            assert_eq!(g.total_edges(), (n * n.saturating_sub(1) / 2) as u64);
            assert_eq!(g.simple_edge_count() as u64, g.total_edges());
        }
    }

    #[test]
    fn cycle_graph_has_n_edges_and_degree_two() {
        for n in 3..20 {
            let g = cycle_graph(n);
            assert_eq!(g.total_edges(), n as u64);
            assert!((1..=n).all(|v| g.degree(v) == 2));
        }
    }

    #[test]
    fn degenerate_cycles() {
        let two = cycle_graph(2);
        assert_eq!(two.edge_count(1, 2), 2);
        assert_eq!(two.total_edges(), 2);

        let one = cycle_graph(1);
        assert_eq!(one.edge_count(1, 1), 1);
        assert_eq!(one.total_edges(), 1);

        let zero = cycle_graph(0);
        assert_eq!(zero.n(), 0);
        assert!(zero.is_empty());
    }

    #[test]
    fn random_graph_extremes() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_graph(30, 0.0, &mut rng).is_empty());
        assert_eq!(random_graph(30, 1.0, &mut rng), complete_graph(30));
    }

    #[test]
    fn random_graph_edge_fraction_is_close_to_p() {
        let mut rng = StdRng::seed_from_u64(2024);
        let n = 200;
        let p = 0.3;
        let g = random_graph(n, p, &mut rng);
        let pairs = (n * (n - 1) / 2) as f64;
        let fraction = g.total_edges() as f64 / pairs;
        // 19900 trekkingen: standaardafwijking ~0.0033
        assert_abs_diff_eq!(fraction, p, epsilon = 0.02);
        assert_eq!(g.simple_edge_count() as u64, g.total_edges());
    }

    #[test]
    fn topology_dispatch() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Topology::Complete.build(5, &mut rng), complete_graph(5));
        assert_eq!(Topology::Cycle.build(5, &mut rng), cycle_graph(5));
        assert!(Topology::Random { p: 0.0 }.build(5, &mut rng).is_empty());
    }
}
