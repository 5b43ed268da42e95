pub mod copy;
pub mod export;
pub mod link;
pub mod list;
pub mod parse;
pub mod save;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use debatecomps_core::TournamentRecord;
use debatecomps_core::config::DirectoryConfig;
use debatecomps_core::saved::{JsonFileStore, SavedStore};
use debatecomps_core::tournament::load_tournaments;
use tracing::debug;

/// Everything a command needs, resolved from config.toml and CLI overrides.
pub struct Context {
    pub config: DirectoryConfig,
    pub tournaments_file: PathBuf,
    pub store: JsonFileStore,
}

impl Context {
    pub fn load(file_override: Option<PathBuf>) -> Result<Self> {
        let config = DirectoryConfig::load()?;
        let tournaments_file = file_override.unwrap_or_else(|| config.tournaments_path());
        let store = JsonFileStore::new(config.saved_path()?);

        debug!(
            tournaments = %tournaments_file.display(),
            saved = %store.path().display(),
            "resolved data files"
        );

        Ok(Context {
            config,
            tournaments_file,
            store,
        })
    }

    pub fn tournaments(&self) -> Result<Vec<TournamentRecord>> {
        load_tournaments(&self.tournaments_file).with_context(|| {
            format!(
                "Could not read tournaments from {}",
                self.tournaments_file.display()
            )
        })
    }

    /// Tournaments matching the optional name filter and saved-only flag.
    pub fn select(&self, name: Option<&str>, saved_only: bool) -> Result<Vec<TournamentRecord>> {
        let saved = if saved_only {
            Some(self.store.saved_ids())
        } else {
            None
        };

        Ok(filter(self.tournaments()?, name, saved.as_ref()))
    }

    /// Exactly one tournament whose name contains `name`. An exact
    /// (case-insensitive) name match wins over partial matches.
    pub fn find_one(&self, name: &str) -> Result<TournamentRecord> {
        let matches = filter(self.tournaments()?, Some(name), None);

        if let Some(exact) = matches
            .iter()
            .find(|t| t.competition_name.eq_ignore_ascii_case(name.trim()))
        {
            return Ok(exact.clone());
        }

        match matches.as_slice() {
            [] => anyhow::bail!("No tournament matches '{}'", name),
            [one] => Ok(one.clone()),
            many => {
                let names: Vec<&str> = many.iter().map(|t| t.competition_name.as_str()).collect();
                anyhow::bail!(
                    "'{}' matches {} tournaments: {}",
                    name,
                    many.len(),
                    names.join(", ")
                );
            }
        }
    }
}

fn filter(
    tournaments: Vec<TournamentRecord>,
    name: Option<&str>,
    saved: Option<&std::collections::BTreeSet<String>>,
) -> Vec<TournamentRecord> {
    let needle = name.map(|n| n.trim().to_lowercase());

    tournaments
        .into_iter()
        .filter(|t| match &needle {
            Some(needle) => t.competition_name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .filter(|t| saved.is_none_or(|ids| ids.contains(&t.id())))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn tournament(name: &str, date: &str) -> TournamentRecord {
        TournamentRecord {
            competition_name: name.to_string(),
            date: date.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<TournamentRecord> {
        vec![
            tournament("Oxford IV", "Nov 7-9 2025"),
            tournament("Oxford Women's Open", "Feb 1 2026"),
            tournament("Yale IV", "Oct 3-5 2025"),
        ]
    }

    #[test]
    fn test_filter_by_name_is_case_insensitive() {
        let names: Vec<String> = filter(sample(), Some("oxford"), None)
            .into_iter()
            .map(|t| t.competition_name)
            .collect();
        assert_eq!(names, ["Oxford IV", "Oxford Women's Open"]);
    }

    #[test]
    fn test_filter_by_saved_ids() {
        let saved: BTreeSet<String> = ["yale-iv-oct-3-5-2025".to_string()].into();
        let selected = filter(sample(), None, Some(&saved));
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].competition_name, "Yale IV");
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        assert_eq!(filter(sample(), None, None).len(), 3);
    }
}
