//! Header → column concept resolution.
//!
//! Resolution is a pure function of the header row:
//!
//! 1. Every header is reduced to its [`normalize_key`]; if two headers share
//!    a key, the later one wins.
//! 2. Exact concepts are looked up by alias, first alias present wins.
//! 3. Headers not claimed in step 2 are scanned in file order against the
//!    score heuristics. Each header takes the first rule it matches; a later
//!    header matching the same concept replaces an earlier one.

use hashbrown::HashMap;

use super::normalize::normalize_key;

/// A column the loader knows how to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concept {
    Name,
    DependsOn,
    RequiredBy,
    Familiarity,
    Interest,
    Market,
    ReqScore,
    MasterScore,
    ReqIndirect,
    DepIndirect,
}

impl Concept {
    pub const ALL: [Concept; 10] = [
        Concept::Name,
        Concept::DependsOn,
        Concept::RequiredBy,
        Concept::Familiarity,
        Concept::Interest,
        Concept::Market,
        Concept::ReqScore,
        Concept::MasterScore,
        Concept::ReqIndirect,
        Concept::DepIndirect,
    ];

    /// Header aliases for concepts matched by exact (normalized) name.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Concept::Name => &["Nome da Área/Habilidade", "Nome da Area/Habilidade"],
            Concept::DependsOn => &["Depende de...", "Depende de"],
            Concept::RequiredBy => &["Requerido por...", "Requerido por"],
            Concept::Familiarity => &["Grau de Familiaridade"],
            Concept::Interest => &["Interesse"],
            Concept::Market => &["Relevância no Mercado", "Relevancia no Mercado"],
            _ => &[],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Concept::Name => "name",
            Concept::DependsOn => "depends-on",
            Concept::RequiredBy => "required-by",
            Concept::Familiarity => "familiarity",
            Concept::Interest => "interest",
            Concept::Market => "market",
            Concept::ReqScore => "requirement score",
            Concept::MasterScore => "master score",
            Concept::ReqIndirect => "indirect requirements",
            Concept::DepIndirect => "indirect dependencies",
        }
    }

    fn is_score(self) -> bool {
        matches!(
            self,
            Concept::ReqScore | Concept::MasterScore | Concept::ReqIndirect | Concept::DepIndirect
        )
    }
}

/// Score heuristic for one normalized header, in rule order.
pub fn score_concept(key: &str) -> Option<Concept> {
    if key.contains("requirement score") || key.contains("req score") {
        Some(Concept::ReqScore)
    } else if key.contains("master") && key.contains("score") {
        Some(Concept::MasterScore)
    } else if key.contains("req") && key.contains("indirect") {
        Some(Concept::ReqIndirect)
    } else if key.contains("dep") && key.contains("indirect") {
        Some(Concept::DepIndirect)
    } else {
        None
    }
}

/// Resolved column positions for one header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: HashMap<Concept, usize>,
}

impl ColumnMap {
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Self {
        // Later duplicates overwrite earlier ones.
        let mut by_key: HashMap<String, usize> = HashMap::new();
        for (i, h) in headers.iter().enumerate() {
            by_key.insert(normalize_key(h.as_ref()), i);
        }

        let mut columns = HashMap::new();
        for concept in Concept::ALL {
            let found = concept
                .aliases()
                .iter()
                .find_map(|alias| by_key.get(&normalize_key(alias)).copied());
            if let Some(i) = found {
                columns.insert(concept, i);
            }
        }

        let claimed: Vec<usize> = columns.values().copied().collect();
        for (i, h) in headers.iter().enumerate() {
            let key = normalize_key(h.as_ref());
            // Shadowed duplicates don't take part.
            if by_key.get(&key) != Some(&i) || claimed.contains(&i) {
                continue;
            }
            if let Some(concept) = score_concept(&key) {
                columns.insert(concept, i);
            }
        }

        Self { columns }
    }

    pub fn get(&self, concept: Concept) -> Option<usize> {
        self.columns.get(&concept).copied()
    }

    pub fn has(&self, concept: Concept) -> bool {
        self.columns.contains_key(&concept)
    }

    /// Concepts with no matching header, in declaration order.
    pub fn missing(&self) -> Vec<Concept> {
        Concept::ALL.into_iter().filter(|c| !self.has(*c)).collect()
    }

    pub fn score_columns(&self) -> impl Iterator<Item = (Concept, usize)> + '_ {
        Concept::ALL
            .into_iter()
            .filter(|c| c.is_score())
            .filter_map(|c| Some((c, self.get(c)?)))
    }
}
