use crate::domain::model::{Match, Team};

/// Double round-robin: for each pair (i, j), i < j, the home leg of `teams[i]`
/// followed by the return leg.
pub fn generate_matches(teams: &[Team]) -> Vec<Match> {
    let mut matches = Vec::with_capacity(teams.len() * teams.len().saturating_sub(1));

    for (i, first) in teams.iter().enumerate() {
        for second in &teams[i + 1..] {
            matches.push(Match {
                home: first.clone(),
                away: second.clone(),
            });
            matches.push(Match {
                home: second.clone(),
                away: first.clone(),
            });
        }
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<Team> {
        names.iter().map(|n| Team::new(*n, "City")).collect()
    }

    fn pairs(matches: &[Match]) -> Vec<(String, String)> {
        matches
            .iter()
            .map(|m| (m.home.name.clone(), m.away.name.clone()))
            .collect()
    }

    #[test]
    fn test_two_teams_play_twice() {
        let matches = generate_matches(&roster(&["A", "B"]));
        assert_eq!(
            pairs(&matches),
            vec![("A".into(), "B".into()), ("B".into(), "A".into())]
        );
    }

    #[test]
    fn test_three_teams_pair_then_leg_order() {
        let matches = generate_matches(&roster(&["A", "B", "C"]));
        let expected: Vec<(String, String)> = [
            ("A", "B"),
            ("B", "A"),
            ("A", "C"),
            ("C", "A"),
            ("B", "C"),
            ("C", "B"),
        ]
        .iter()
        .map(|(h, a)| (h.to_string(), a.to_string()))
        .collect();
        assert_eq!(pairs(&matches), expected);
    }

    #[test]
    fn test_every_ordered_pair_exactly_once() {
        let names = ["A", "B", "C", "D", "E", "F", "G"];
        let matches = generate_matches(&roster(&names));
        assert_eq!(matches.len(), names.len() * (names.len() - 1));

        for home in names {
            for away in names {
                let count = matches
                    .iter()
                    .filter(|m| m.home.name == home && m.away.name == away)
                    .count();
                let expected = if home == away { 0 } else { 1 };
                assert_eq!(count, expected, "{} vs {}", home, away);
            }
        }
    }

    #[test]
    fn test_generation_is_repeatable() {
        let teams = roster(&["A", "B", "C", "D"]);
        assert_eq!(generate_matches(&teams), generate_matches(&teams));
    }
}
