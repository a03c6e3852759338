use crate::domain::model::Team;
use crate::utils::error::{CalendarError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// `<ordinal>. <team> — <city>`; em dash, en dash or hyphen.
fn roster_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\d+\.\s*(\S.*?)\s*[—–-]\s*(\S.*)$").expect("roster line pattern is valid")
    })
}

/// Parses the roster text into teams in file order. Blank lines are skipped.
pub fn parse_roster(content: &str) -> Result<Vec<Team>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut teams = Vec::new();

    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let caps = roster_line_pattern().captures(line).ok_or_else(|| {
            CalendarError::MalformedRosterLine {
                line_number: number + 1,
                line: line.to_string(),
            }
        })?;

        let team = Team::new(caps[1].trim(), caps[2].trim());
        tracing::trace!("Roster line {}: {}", number + 1, team);
        teams.push(team);
    }

    Ok(teams)
}

pub fn require_teams(teams: &[Team], required: usize) -> Result<()> {
    if teams.len() < required {
        return Err(CalendarError::InsufficientTeams {
            found: teams.len(),
            required,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_separators() {
        let content = "1. Зенит — Санкт-Петербург\n2. Spartak - Moscow\r\n\n   \n3. Rubin – Kazan\n";
        let teams = parse_roster(content).unwrap();
        assert_eq!(
            teams,
            vec![
                Team::new("Зенит", "Санкт-Петербург"),
                Team::new("Spartak", "Moscow"),
                Team::new("Rubin", "Kazan"),
            ]
        );
    }

    #[test]
    fn test_name_split_at_first_separator() {
        let teams = parse_roster("10.Lokomotiv-2 — Moscow").unwrap();
        assert_eq!(teams[0].name, "Lokomotiv");
        assert_eq!(teams[0].city, "2 — Moscow");
    }

    #[test]
    fn test_malformed_line_is_reported() {
        let err = parse_roster("1. Zenit — SPb\n1. TeamOnly\n").unwrap_err();
        match err {
            CalendarError::MalformedRosterLine { line_number, line } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "1. TeamOnly");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_ordinal_is_malformed() {
        assert!(parse_roster("Zenit — SPb").is_err());
    }

    #[test]
    fn test_blank_name_or_city_is_malformed() {
        assert!(matches!(
            parse_roster("1. A — "),
            Err(CalendarError::MalformedRosterLine { line_number: 1, .. })
        ));
        assert!(matches!(
            parse_roster("1.   — Kazan"),
            Err(CalendarError::MalformedRosterLine { line_number: 1, .. })
        ));
    }

    #[test]
    fn test_bom_is_ignored() {
        let teams = parse_roster("\u{feff}1. A — X\n2. B — Y").unwrap();
        assert_eq!(teams.len(), 2);
    }

    #[test]
    fn test_require_teams() {
        assert!(require_teams(&[Team::new("A", "X"), Team::new("B", "Y")], 2).is_ok());
        assert!(matches!(
            require_teams(&[], 2),
            Err(CalendarError::InsufficientTeams { found: 0, required: 2 })
        ));
    }
}
