//! Tournament records as served by the directory's data layer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DirectoryResult;

/// Location value that marks a tournament held online.
pub const ONLINE: &str = "Online";

/// What calendars and clipboard text show for an online tournament.
pub const ONLINE_EVENT: &str = "Online Event";

/// One row of the tournament spreadsheet.
///
/// Every field is always present; missing cells arrive as empty strings and
/// unknown values as sentinels such as "TBA" or "N/A".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TournamentRecord {
    pub competition_name: String,
    pub date: String,
    pub location: String,
    pub timezone: String,
    pub format: String,
    pub fees: String,
    pub reg_link: String,
    pub info_link: String,
    pub judge_rule: String,
    pub profit_status: String,
    pub team_cap: String,
}

impl TournamentRecord {
    /// Stable identifier used by the saved-tournament store:
    /// `"{name}-{date}"` with whitespace runs turned into `-`, lower-cased.
    pub fn id(&self) -> String {
        let raw = format!("{}-{}", self.competition_name, self.date);
        let mut id = String::with_capacity(raw.len());
        let mut in_whitespace = false;

        for c in raw.chars() {
            if c.is_whitespace() {
                if !in_whitespace {
                    id.push('-');
                }
                in_whitespace = true;
            } else {
                id.push(c);
                in_whitespace = false;
            }
        }

        id.to_lowercase()
    }

    /// Location as shown in exports, with "Online" spelled out as an event.
    pub fn location_label(&self) -> &str {
        if self.location == ONLINE {
            ONLINE_EVENT
        } else {
            &self.location
        }
    }
}

/// True for values the spreadsheet uses to mean "nothing here yet".
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("TBA") || value.eq_ignore_ascii_case("N/A")
}

/// The two shapes a tournament file can take: a bare list, or the
/// `{"tournaments": [...]}` body returned by the directory's API route.
#[derive(Deserialize)]
#[serde(untagged)]
enum TournamentFile {
    Wrapped { tournaments: Vec<TournamentRecord> },
    List(Vec<TournamentRecord>),
}

/// Parse tournament records from JSON text.
pub fn parse_tournaments(json: &str) -> DirectoryResult<Vec<TournamentRecord>> {
    let file: TournamentFile = serde_json::from_str(json)?;
    Ok(match file {
        TournamentFile::Wrapped { tournaments } => tournaments,
        TournamentFile::List(tournaments) => tournaments,
    })
}

/// Load tournament records from a JSON file.
pub fn load_tournaments(path: &Path) -> DirectoryResult<Vec<TournamentRecord>> {
    let json = std::fs::read_to_string(path)?;
    parse_tournaments(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tournament(name: &str, date: &str) -> TournamentRecord {
        TournamentRecord {
            competition_name: name.to_string(),
            date: date.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_id_collapses_whitespace_and_lowercases() {
        let t = tournament("Oxford  IV\tOpen", "Feb 20 2025");
        assert_eq!(t.id(), "oxford-iv-open-feb-20-2025");
    }

    #[test]
    fn test_id_is_deterministic() {
        let a = tournament("Cambridge IV", "Dec 28 - Jan 4");
        let b = a.clone();
        assert_eq!(a.id(), b.id());
        assert_eq!(a.id(), "cambridge-iv-dec-28---jan-4");
    }

    #[test]
    fn test_location_label() {
        let mut t = tournament("X", "");
        t.location = "Online".to_string();
        assert_eq!(t.location_label(), "Online Event");

        t.location = "Online (Discord)".to_string();
        assert_eq!(t.location_label(), "Online (Discord)");

        t.location = "Berlin, Germany".to_string();
        assert_eq!(t.location_label(), "Berlin, Germany");
    }

    #[test]
    fn test_is_placeholder() {
        assert!(is_placeholder(""));
        assert!(is_placeholder("  "));
        assert!(is_placeholder("TBA"));
        assert!(is_placeholder("tba"));
        assert!(is_placeholder("N/A"));
        assert!(!is_placeholder("$40 per team"));
    }

    #[test]
    fn test_parse_wrapped_and_bare_lists() {
        let record = concat!(
            r#"{"competitionName":"Yale IV","date":"Oct 3-5 2025","#,
            r#""regLink":"https://example.org"}"#,
        );
        let wrapped = format!(r#"{{"tournaments":[{record}]}}"#);
        let bare = format!("[{record}]");

        let a = parse_tournaments(&wrapped).unwrap();
        let b = parse_tournaments(&bare).unwrap();
        assert_eq!(a, b);
        assert_eq!(a[0].competition_name, "Yale IV");
        assert_eq!(a[0].reg_link, "https://example.org");
        assert_eq!(a[0].fees, "");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_tournaments("not json").is_err());
    }
}
