//! src/graph.rs
//!
//! Representeert een ongerichte multigraaf met een dichte matrix van
//! kant-multipliciteiten. Knopen zijn 1-gebaseerd (`1..=n`); argumenten buiten
//! dat bereik worden stil genegeerd of leveren een nul-resultaat op.
//! Ondersteunt het parsen van het DIMACS *.clq-formaat.

use std::io::{self, BufRead, Read};

/// Een ongerichte multigraaf, opgeslagen als een row-major matrix van tellers.
///
/// `Clone` maakt een diepe kopie: een walk die een kloon consumeert deelt
/// nooit geheugen met de graaf van de generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiGraph {
    /// `adj[i][j]` is het aantal kanten tussen knoop `i + 1` en `j + 1`.
    /// De diagonaal telt zelf-lussen, elk precies één keer.
    adj: Vec<Vec<u32>>,
}

/// De kant-buurt van een knoop: elke buur komt zo vaak voor als zijn
/// multipliciteit, oplopend gesorteerd op label.
///
/// Posities zijn 1-gebaseerd, zodat een uniforme trekking uit `1..=len()`
/// een buur kiest met kans evenredig aan de multipliciteit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighbourhood {
    endpoints: Vec<usize>,
}

impl Neighbourhood {
    /// Aantal kant-eindpunten (de gewogen graad).
    #[inline]
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Geeft de buur op 1-gebaseerde positie `pos` terug, of `None` buiten `1..=len()`.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<usize> {
        pos.checked_sub(1).and_then(|i| self.endpoints.get(i).copied())
    }

    /// Itereert over de buren in volgorde van positie.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.endpoints.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.endpoints
    }
}

impl MultiGraph {
    /*────────── Constructors ──────────*/

    /// Creëert een lege multigraaf met `n` geïsoleerde knopen.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            adj: vec![vec![0; n]; n],
        }
    }

    /// Bouwt een multigraaf op basis van een lijst van kanten (1-gebaseerde labels).
    /// Herhaalde paren verhogen de multipliciteit; paren buiten bereik worden overgeslagen.
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = Self::with_vertices(n);
        for &(u, v) in edges {
            g.add_edge(u, v);
        }
        g
    }

    /// Parset het DIMACS *.clq formaat vanuit een gebufferde reader.
    ///
    /// Dubbele `e`-regels tellen als parallelle kanten en `e u u` is een zelf-lus.
    /// Het kantental in de `p`-regel wordt alleen gevalideerd, niet gebruikt
    /// om geheugen te reserveren.
    pub fn parse_dimacs<R: Read>(reader: R) -> io::Result<Self> {
        let mut graph: Option<Self> = None;

        for (line_no, line_result) in io::BufReader::new(reader).lines().enumerate() {
            let line = line_result?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('c') {
                continue;
            }

            let parts: Vec<_> = line.split_whitespace().collect();
            match parts.as_slice() {
                ["p", "edge", n_raw, m_raw, ..] => {
                    if graph.is_some() {
                        return Err(invalid(format!(
                            "line {}: duplicate problem line 'p'",
                            line_no + 1
                        )));
                    }
                    let n: usize = parse_field(n_raw)?;
                    let _declared_edges: u64 = parse_field(m_raw)?;
                    if n > MAX_DIMACS_VERTICES {
                        return Err(invalid(format!(
                            "n={} exceeds the dense limit of {} vertices",
                            n, MAX_DIMACS_VERTICES
                        )));
                    }
                    graph = Some(Self::with_vertices(n));
                }
                ["e", u_raw, v_raw, ..] => {
                    let Some(g) = graph.as_mut() else {
                        return Err(invalid("Edge line 'e' found before problem line 'p'".into()));
                    };
                    let u: usize = parse_field(u_raw)?;
                    let v: usize = parse_field(v_raw)?;
                    if g.pair(u, v).is_none() {
                        return Err(invalid(format!(
                            "Edge ({}, {}) out of bounds for n={}",
                            u,
                            v,
                            g.n()
                        )));
                    }
                    g.add_edge(u, v);
                }
                _ => { /* Negeer andere of ongeldige regels */ }
            }
        }
        Ok(graph.unwrap_or_else(|| Self::with_vertices(0)))
    }

    /*────────── Getters ──────────*/

    /// Geeft het aantal knopen terug.
    #[inline]
    pub fn n(&self) -> usize {
        self.adj.len()
    }

    /// Vertaalt een 1-gebaseerd label naar een rij-index, of `None` buiten bereik.
    #[inline]
    fn index(&self, u: usize) -> Option<usize> {
        (1..=self.n()).contains(&u).then(|| u - 1)
    }

    #[inline]
    fn pair(&self, u: usize, v: usize) -> Option<(usize, usize)> {
        Some((self.index(u)?, self.index(v)?))
    }

    /// Aantal kanten tussen `u` en `v`; 0 als een van beide buiten bereik ligt.
    pub fn edge_count(&self, u: usize, v: usize) -> u32 {
        self.pair(u, v).map_or(0, |(i, j)| self.adj[i][j])
    }

    /// Totaal aantal kanten: elke zelf-lus en elk parallel exemplaar telt één keer.
    pub fn total_edges(&self) -> u64 {
        self.adj
            .iter()
            .enumerate()
            .map(|(i, row)| row[i..].iter().map(|&c| u64::from(c)).sum::<u64>())
            .sum()
    }

    /// Aantal verschillende paren `u != v` met minstens één kant.
    pub fn simple_edge_count(&self) -> usize {
        self.adj
            .iter()
            .enumerate()
            .map(|(i, row)| row[i + 1..].iter().filter(|&&c| c > 0).count())
            .sum()
    }

    /// Gewogen graad van `u` (zelf-lussen tellen één keer); 0 buiten bereik.
    pub fn degree(&self, u: usize) -> u64 {
        self.index(u)
            .map_or(0, |i| self.adj[i].iter().map(|&c| u64::from(c)).sum())
    }

    /// `true` als de graaf geen enkele kant meer heeft.
    pub fn is_empty(&self) -> bool {
        self.adj.iter().all(|row| row.iter().all(|&c| c == 0))
    }

    /// De kant-buurt van `u`. Leeg voor knopen buiten bereik.
    pub fn neighbors(&self, u: usize) -> Neighbourhood {
        let Some(i) = self.index(u) else {
            return Neighbourhood::default();
        };
        let row = &self.adj[i];
        let mut endpoints = Vec::with_capacity(row.iter().map(|&c| c as usize).sum());
        for (j, &count) in row.iter().enumerate() {
            endpoints.extend(std::iter::repeat(j + 1).take(count as usize));
        }
        Neighbourhood { endpoints }
    }

    /// Itereert over de bovendriehoek: `(u, v, multipliciteit)` met `u <= v` en multipliciteit > 0.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.adj.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .skip(i)
                .filter(|&(_, &c)| c > 0)
                .map(move |(j, &c)| (i + 1, j + 1, c))
        })
    }

    /*────────── Mutators ──────────*/

    /// Voegt één kant tussen `u` en `v` toe. Een zelf-lus raakt alleen de diagonaal.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        if let Some((i, j)) = self.pair(u, v) {
            self.adj[i][j] += 1;
            if i != j {
                self.adj[j][i] += 1;
            }
        }
    }

    /// Verwijdert precies één kant tussen `u` en `v`.
    ///
    /// # Panics
    /// De aanroeper moet garanderen dat de kant bestaat. Een multipliciteit
    /// onder nul is een programmeerfout en wordt nooit afgekapt.
    pub fn remove_edge(&mut self, u: usize, v: usize) {
        if let Some((i, j)) = self.pair(u, v) {
            assert!(
                self.adj[i][j] > 0,
                "remove_edge({}, {}): er is geen kant om te verwijderen",
                u,
                v
            );
            self.adj[i][j] -= 1;
            if i != j {
                self.adj[j][i] -= 1;
            }
        }
    }

    /// Verwijdert alle kanten tussen `u` en `v` en geeft het aantal verwijderde kanten terug.
    pub fn remove_all_edges(&mut self, u: usize, v: usize) -> u32 {
        let Some((i, j)) = self.pair(u, v) else {
            return 0;
        };
        let removed = std::mem::take(&mut self.adj[i][j]);
        self.adj[j][i] = 0;
        removed
    }
}

/// Bovengrens voor `n` in een DIMACS-header; de matrix is `n × n`.
pub const MAX_DIMACS_VERTICES: usize = 1 << 14;

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

fn parse_field<T>(raw: &str) -> io::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
