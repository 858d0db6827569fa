//! CSV → [`SkillGraph`].
//!
//! Two passes. The first builds every node from its row and parks the raw
//! relation text; the second resolves that text against the now-complete
//! node set, so a cell may name a skill defined further down the file.
//!
//! Only a missing input file is fatal. Everything else (unknown relation
//! targets, bad numbers, absent optional columns, undecodable rows) is
//! logged, counted in the [`LoadReport`], and replaced by a default.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use hashbrown::HashMap;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use super::columns::{ColumnMap, Concept};
use super::relations::parse_relations;
use crate::model::{Position, Scores, SkillGraph, SkillNode};
use crate::{Error, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Which cell a relation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// Listed in the node's "depends on" cell: edge `target → node`.
    DependsOn,
    /// Listed in the node's "required by" cell: edge `node → target`.
    RequiredBy,
}

/// A relation target that named no known skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedRelation {
    pub node: String,
    pub target: String,
    pub kind: RelationKind,
}

/// What the loader had to work around.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    /// Data rows read (excluding the header).
    pub rows: usize,
    /// Rows without a name, or that failed to decode.
    pub skipped_rows: usize,
    /// Rows whose name had already been seen.
    pub overwritten: usize,
    /// Numeric cells that did not parse.
    pub bad_numbers: usize,
    pub missing_columns: Vec<Concept>,
    pub unresolved: Vec<UnresolvedRelation>,
}

/// Raw relation text per node name, in first-insertion order.
#[derive(Debug, Default)]
struct PendingRelations {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl PendingRelations {
    fn set(&mut self, name: &str, raw: &str) {
        match self.index.get(name) {
            Some(&i) => self.entries[i].1 = raw.to_string(),
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), raw.to_string()));
            }
        }
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r.as_str()))
    }
}

/// Load a graph with entropy-seeded initial positions.
pub fn load(path: impl AsRef<Path>) -> Result<SkillGraph> {
    let mut rng = StdRng::from_entropy();
    load_with_rng(path, &mut rng).map(|(graph, _)| graph)
}

/// Load a graph, drawing initial positions from `rng`.
pub fn load_with_rng<R: Rng>(
    path: impl AsRef<Path>,
    rng: &mut R,
) -> Result<(SkillGraph, LoadReport)> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound(format!("CSV file not found: {}", path.display())));
    }
    let bytes = fs::read(path)?;
    info!(path = %path.display(), bytes = bytes.len(), "loading skill network");
    load_bytes(&bytes, rng)
}

/// Load a graph from any byte source.
pub fn load_from_reader<Rd: Read, R: Rng>(
    mut reader: Rd,
    rng: &mut R,
) -> Result<(SkillGraph, LoadReport)> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    load_bytes(&bytes, rng)
}

fn load_bytes<R: Rng>(bytes: &[u8], rng: &mut R) -> Result<(SkillGraph, LoadReport)> {
    let data = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(data);

    let raw_headers = reader.byte_headers()?.clone();
    if raw_headers.iter().any(|h| std::str::from_utf8(h).is_err()) {
        warn!("header row is not valid UTF-8; undecodable bytes replaced");
    }
    let headers: Vec<String> = raw_headers
        .iter()
        .map(|h| String::from_utf8_lossy(h).into_owned())
        .collect();
    let columns = ColumnMap::resolve(&headers);
    log_column_mapping(&columns, &headers);

    let mut report = LoadReport {
        missing_columns: columns.missing(),
        ..LoadReport::default()
    };
    let mut graph = SkillGraph::new();
    let mut depends_on = PendingRelations::default();
    let mut required_by = PendingRelations::default();

    // Pass 1: nodes.
    for (row_no, result) in reader.records().enumerate() {
        report.rows += 1;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(row = row_no + 1, error = %e, "skipping undecodable row");
                report.skipped_rows += 1;
                continue;
            }
        };

        let get = |concept: Concept| cell(&columns, &record, concept);

        let name = get(Concept::Name).trim();
        if name.is_empty() {
            report.skipped_rows += 1;
            continue;
        }

        let node = SkillNode::new(name)
            .with_position(Position::random(rng))
            .with_ratings(
                get(Concept::Familiarity),
                get(Concept::Interest),
                get(Concept::Market),
            )
            .with_scores(read_scores(&columns, &record, name, &mut report));

        if graph.upsert_node(node) {
            debug!(name, "duplicate name, later row wins");
            report.overwritten += 1;
        }

        let deps = get(Concept::DependsOn).trim();
        if !deps.is_empty() {
            depends_on.set(name, deps);
        }
        let reqs = get(Concept::RequiredBy).trim();
        if !reqs.is_empty() {
            required_by.set(name, reqs);
        }
    }

    // Pass 2: edges.
    resolve_relations(&mut graph, &depends_on, RelationKind::DependsOn, &mut report);
    resolve_relations(&mut graph, &required_by, RelationKind::RequiredBy, &mut report);

    graph.compute_degrees();

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        unresolved = report.unresolved.len(),
        "skill network loaded"
    );
    Ok((graph, report))
}

fn cell<'r>(columns: &ColumnMap, record: &'r StringRecord, concept: Concept) -> &'r str {
    columns
        .get(concept)
        .and_then(|i| record.get(i))
        .unwrap_or("")
}

fn resolve_relations(
    graph: &mut SkillGraph,
    pending: &PendingRelations,
    kind: RelationKind,
    report: &mut LoadReport,
) {
    for (name, raw) in pending.iter() {
        for target in parse_relations(raw) {
            if !graph.contains(&target) {
                match kind {
                    RelationKind::DependsOn => {
                        warn!(node = name, target = %target, "depends on unknown skill")
                    }
                    RelationKind::RequiredBy => {
                        warn!(node = name, target = %target, "required by unknown skill")
                    }
                }
                report.unresolved.push(UnresolvedRelation {
                    node: name.to_string(),
                    target,
                    kind,
                });
                continue;
            }
            let added = match kind {
                RelationKind::DependsOn => graph.add_edge(&target, name),
                RelationKind::RequiredBy => graph.add_edge(name, &target),
            };
            if !added {
                debug!(node = name, target = %target, ?kind, "duplicate edge merged");
            }
        }
    }
}

fn read_scores(
    columns: &ColumnMap,
    record: &StringRecord,
    name: &str,
    report: &mut LoadReport,
) -> Scores {
    let mut scores = Scores::default();
    for (concept, i) in columns.score_columns() {
        let raw = record.get(i).unwrap_or("");
        let value = match parse_number(raw) {
            Some(v) => v,
            None => {
                warn!(node = name, column = concept.label(), value = raw, "not a number, using 0");
                report.bad_numbers += 1;
                0.0
            }
        };
        match concept {
            Concept::ReqScore => scores.req_score = value,
            Concept::MasterScore => scores.master_score = value,
            Concept::ReqIndirect => scores.req_indirect = value,
            Concept::DepIndirect => scores.dep_indirect = value,
            _ => {}
        }
    }
    scores
}

/// Empty cells count as 0; anything else must parse as a finite float.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn log_column_mapping(columns: &ColumnMap, headers: &[String]) {
    for concept in Concept::ALL {
        match columns.get(concept) {
            Some(i) => info!(concept = concept.label(), header = %headers[i], "column mapped"),
            None if concept == Concept::Name => {
                warn!("no name column found, every row will be skipped")
            }
            None => warn!(concept = concept.label(), "optional column missing, using defaults"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str = "Nome da Área/Habilidade,Depende de...,Requerido por...,Grau de Familiaridade,Interesse,Relevância no Mercado,Requirement Score,Master Score\n";

    fn load_str(csv: &str) -> (SkillGraph, LoadReport) {
        let mut rng = StdRng::seed_from_u64(1);
        load_from_reader(csv.as_bytes(), &mut rng).unwrap()
    }

    fn edge_pairs(g: &SkillGraph) -> Vec<(String, String)> {
        g.edges()
            .iter()
            .map(|e| (e.source.clone(), e.target.clone()))
            .collect()
    }

    #[test]
    fn depends_on_is_inverted() {
        let csv = format!("{HEADER}A,,,,,,,\nB,A,,,,,,\n");
        let (g, _) = load_str(&csv);
        assert_eq!(edge_pairs(&g), vec![("A".into(), "B".into())]);
    }

    #[test]
    fn required_by_keeps_direction() {
        let csv = format!("{HEADER}A,,B,,,,,\nB,,,,,,,\n");
        let (g, _) = load_str(&csv);
        assert_eq!(edge_pairs(&g), vec![("A".into(), "B".into())]);
    }

    #[test]
    fn same_relation_from_both_cells_merges() {
        let csv = format!("{HEADER}A,,B,,,,,\nB,A,,,,,,\n");
        let (g, _) = load_str(&csv);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.node("A").unwrap().req_direct, 1);
        assert_eq!(g.node("B").unwrap().dep_direct, 1);
    }

    #[test]
    fn forward_references_resolve() {
        let csv = format!("{HEADER}Z,Later,,,,,,\nLater,,,,,,,\n");
        let (g, report) = load_str(&csv);
        assert_eq!(edge_pairs(&g), vec![("Later".into(), "Z".into())]);
        assert!(report.unresolved.is_empty());
    }

    #[test]
    fn unknown_target_is_reported_and_dropped() {
        let csv = format!("{HEADER}A,Ghost,,,,,,\n");
        let (g, report) = load_str(&csv);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(
            report.unresolved,
            vec![UnresolvedRelation {
                node: "A".into(),
                target: "Ghost".into(),
                kind: RelationKind::DependsOn,
            }],
        );
    }

    #[test]
    fn blank_names_skipped() {
        let csv = format!("{HEADER}  ,A,,,,,,\nA,,,,,,,\n");
        let (g, report) = load_str(&csv);
        assert_eq!(g.node_count(), 1);
        assert_eq!(report.skipped_rows, 1);
    }

    #[test]
    fn last_row_wins_for_attributes() {
        let csv = format!("{HEADER}A,,,🌱,,,1,\nB,,,,,,,\nA,,,🏆,,,2,\n");
        let (g, report) = load_str(&csv);
        assert_eq!(g.node_count(), 2);
        assert_eq!(report.overwritten, 1);
        let a = &g.nodes()[0];
        assert_eq!(a.name, "A");
        assert_eq!(a.familiarity.value, 5);
        assert_eq!(a.scores.req_score, 2.0);
    }

    #[test]
    fn empty_relation_cell_does_not_clear_earlier_text() {
        let csv = format!("{HEADER}A,B,,,,,,\nB,,,,,,,\nA,,,,,,,\n");
        let (g, _) = load_str(&csv);
        assert_eq!(edge_pairs(&g), vec![("B".into(), "A".into())]);
    }

    #[test]
    fn bad_numbers_default_to_zero() {
        let csv = format!("{HEADER}A,,,,,,lots, 3.5 \n");
        let (g, report) = load_str(&csv);
        let a = g.node("A").unwrap();
        assert_eq!(a.scores.req_score, 0.0);
        assert_eq!(a.scores.master_score, 3.5);
        assert_eq!(report.bad_numbers, 1);
    }

    #[test]
    fn non_finite_numbers_default_to_zero() {
        let csv = format!("{HEADER}A,,,,,,inf,NaN\n");
        let (g, report) = load_str(&csv);
        let a = g.node("A").unwrap();
        assert_eq!(a.scores.req_score, 0.0);
        assert_eq!(a.scores.master_score, 0.0);
        assert_eq!(report.bad_numbers, 2);
    }

    #[test]
    fn undecodable_header_is_not_fatal() {
        let bytes = b"Nome da Area/Habilidade,Coluna \xFF\xFE\nA,x\nB,y\n";
        let mut rng = StdRng::seed_from_u64(1);
        let (g, report) = load_from_reader(&bytes[..], &mut rng).unwrap();
        assert_eq!(g.node_count(), 2);
        assert!(g.contains("A"));
        assert_eq!(report.rows, 2);
    }

    #[test]
    fn ratings_parsed_from_cells() {
        let csv = format!("{HEADER}A,,,💪 Confiante,🔥,⭐,,\n");
        let (g, _) = load_str(&csv);
        let a = g.node("A").unwrap();
        assert_eq!(a.familiarity.raw, "💪 Confiante");
        assert_eq!(a.familiarity.value, 4);
        assert_eq!(a.interest.value, 4);
        assert_eq!(a.market.value, 5);
    }

    #[test]
    fn bom_and_short_rows_tolerated() {
        let csv = format!("\u{feff}{HEADER}A\nB,A\n");
        let (g, report) = load_str(&csv);
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(report.missing_columns.contains(&Concept::ReqIndirect));
    }

    #[test]
    fn missing_name_column_gives_empty_graph() {
        let (g, report) = load_str("Foo,Bar\n1,2\n");
        assert!(g.is_empty());
        assert!(report.missing_columns.contains(&Concept::Name));
    }

    #[test]
    fn empty_input_is_empty_graph() {
        let (g, report) = load_str("");
        assert!(g.is_empty());
        assert_eq!(report.rows, 0);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load("/definitely/not/here/skills.csv").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn parse_number_rules() {
        assert_eq!(parse_number(""), Some(0.0));
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number("1e2"), Some(100.0));
        assert_eq!(parse_number("n/a"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("-Infinity"), None);
        assert_eq!(parse_number("NaN"), None);
    }
}
