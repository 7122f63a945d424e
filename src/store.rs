// src/store.rs
//
// Data provider seam. Pages ask for one upstream view (`Source`) within an
// explicit `Scope`; nothing here reads ambient "current league" state.
//
// - DataSet:        headers + raw text rows, as read from a view export.
// - CsvDirProvider: reads `<root>/<view>.csv` exports of the league views.
// - MemoryProvider: in-memory tables (tests, benches, embedding).

use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::csv::{Delim, parse_rows};
use crate::data::{Record, Value};
use crate::stats::slugify;

/// Upstream pre-aggregated views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    SeasonStandings,
    ManagerSummary,
    TeamSeasons,
    DraftPicks,
}

impl Source {
    pub fn file_stem(self) -> &'static str {
        match self {
            Source::SeasonStandings => "season_standings",
            Source::ManagerSummary => "manager_summary",
            Source::TeamSeasons => "team_seasons",
            Source::DraftPicks => "draft_picks",
        }
    }
}

/// Which slice of a view to fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scope {
    pub league: String,
    pub season: Option<i64>,
    pub manager: Option<String>,
}

impl Scope {
    pub fn league(league: &str) -> Self {
        Self { league: s!(league), season: None, manager: None }
    }

    pub fn with_season(mut self, season: i64) -> Self {
        self.season = Some(season);
        self
    }

    pub fn with_manager(mut self, manager: &str) -> Self {
        self.manager = Some(s!(manager));
        self
    }

    /// Whether a record belongs to this scope. Fields the record does not
    /// carry do not narrow it.
    pub fn contains(&self, r: &Record) -> bool {
        let league = r.get("league");
        if !league.is_null() && league.to_string() != self.league {
            return false;
        }
        if let Some(season) = self.season {
            let year = r.int("season").or_else(|| r.int("year"));
            if year != Some(season) {
                return false;
            }
        }
        if let Some(manager) = &self.manager {
            match r.text("manager") {
                Some(m) if slugify(m) == slugify(manager) => {}
                _ => return false,
            }
        }
        true
    }
}

/// Headers + raw rows for one view export.
#[derive(Clone, Debug, Default)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// First row is the header line.
    pub fn parse(text: &str, delim: Delim) -> Self {
        let mut rows = parse_rows(text, delim);
        if rows.is_empty() {
            return Self::default();
        }
        let headers = rows.remove(0).into_iter().map(|h| h.trim().to_string()).collect();
        Self { headers: Some(headers), rows }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    /// Convert to records. Short rows leave trailing fields absent; extra
    /// cells beyond the header are dropped.
    pub fn into_records(self) -> Vec<Record> {
        let Some(headers) = self.headers else {
            return Vec::new();
        };
        self.rows
            .into_iter()
            .map(|row| {
                headers
                    .iter()
                    .zip(row.iter())
                    .map(|(h, cell)| (h.clone(), Value::infer(cell)))
                    .collect::<Record>()
            })
            .collect()
    }
}

pub trait DataProvider {
    /// The full in-scope record set for one view. Order is not meaningful;
    /// the browser imposes its own.
    fn fetch(&self, source: Source, scope: &Scope) -> Result<Vec<Record>, Box<dyn Error>>;

    /// Distinct seasons present in a view for a league, newest first.
    fn seasons(&self, source: Source, league: &str) -> Result<Vec<i64>, Box<dyn Error>> {
        let rows = self.fetch(source, &Scope::league(league))?;
        Ok(crate::stats::seasons(&rows))
    }

    /// Distinct manager names for a league, sorted.
    fn managers(&self, league: &str) -> Result<Vec<String>, Box<dyn Error>> {
        let rows = self.fetch(Source::TeamSeasons, &Scope::league(league))?;
        let mut names: Vec<String> = rows
            .iter()
            .filter_map(|r| r.text("manager"))
            .map(str::to_string)
            .collect();
        names.sort_by_key(|n| n.to_lowercase());
        names.dedup();
        Ok(names)
    }
}

/// Reads `<root>/<view>.csv` exports of the league views.
#[derive(Clone, Debug)]
pub struct CsvDirProvider {
    root: PathBuf,
}

impl CsvDirProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path { &self.root }

    pub fn path_for(&self, source: Source) -> PathBuf {
        self.root.join(join!(source.file_stem(), ".csv"))
    }

    pub fn load_dataset(&self, source: Source) -> Result<DataSet, Box<dyn Error>> {
        let path = self.path_for(source);
        let text = fs::read_to_string(&path)
            .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
        Ok(DataSet::parse(&text, Delim::Csv))
    }
}

impl DataProvider for CsvDirProvider {
    fn fetch(&self, source: Source, scope: &Scope) -> Result<Vec<Record>, Box<dyn Error>> {
        let ds = self.load_dataset(source)?;
        if ds.headers.is_none() {
            return Err(format!("{} has no header row", self.path_for(source).display()).into());
        }
        let rows: Vec<Record> = ds.into_records().into_iter().filter(|r| scope.contains(r)).collect();
        logf!("Store: Fetched {:?} scope={:?} rows={}", source, scope, rows.len());
        Ok(rows)
    }
}

/// In-memory tables keyed by view.
#[derive(Clone, Debug, Default)]
pub struct MemoryProvider {
    tables: HashMap<Source, Vec<Record>>,
}

impl MemoryProvider {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, source: Source, rows: Vec<Record>) -> Self {
        self.tables.insert(source, rows);
        self
    }
}

impl DataProvider for MemoryProvider {
    fn fetch(&self, source: Source, scope: &Scope) -> Result<Vec<Record>, Box<dyn Error>> {
        let rows = self
            .tables
            .get(&source)
            .ok_or_else(|| format!("No data for {source:?}"))?;
        Ok(rows.iter().filter(|r| scope.contains(r)).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dataset_and_infer() {
        let ds = DataSet::parse("league,season,pick,player\nX,2021,1,\"Smith, Jr.\"\nX,2021,2\n", Delim::Csv);
        assert_eq!(ds.header_count(), 4);
        assert_eq!(ds.row_count(), 2);
        let rs = ds.into_records();
        assert_eq!(rs[0].int("pick"), Some(1));
        assert_eq!(rs[0].text("player"), Some("Smith, Jr."));
        assert!(rs[1].get("player").is_null());
    }

    #[test]
    fn scope_matches_season_or_year_and_manager_slug() {
        let r = record! { "league" => "X", "year" => 2020, "manager" => "Big Al" };
        assert!(Scope::league("X").contains(&r));
        assert!(!Scope::league("Y").contains(&r));
        assert!(Scope::league("X").with_season(2020).contains(&r));
        assert!(!Scope::league("X").with_season(2021).contains(&r));
        assert!(Scope::league("X").with_manager("big-al").contains(&r));
        assert!(!Scope::league("X").with_manager("Sal").contains(&r));
    }

    #[test]
    fn numeric_league_ids_still_narrow() {
        let rows = DataSet::parse("league,season\n7,2021\n8,2021\n", Delim::Csv).into_records();
        assert!(Scope::league("7").contains(&rows[0]));
        assert!(!Scope::league("7").contains(&rows[1]));
        assert!(Scope::league("7").contains(&record! { "season" => 2021 }));
    }

    #[test]
    fn memory_provider_filters_by_scope() {
        let p = MemoryProvider::new().with(Source::DraftPicks, vec![
            record! { "league" => "X", "season" => 2021, "manager" => "A" },
            record! { "league" => "X", "season" => 2022, "manager" => "B" },
            record! { "league" => "Y", "season" => 2022, "manager" => "C" },
        ]);
        let rows = p.fetch(Source::DraftPicks, &Scope::league("X").with_season(2022)).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(p.seasons(Source::DraftPicks, "X").unwrap(), vec![2022, 2021]);
        assert!(p.fetch(Source::SeasonStandings, &Scope::league("X")).is_err());
    }
}
