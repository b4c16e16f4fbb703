use super::types::LeagueStanding;

/// Shortest query that produces suggestions.
pub const MIN_QUERY_LEN: usize = 2;

/// Managers whose name or team name contains `query` (case-insensitive), in
/// standings order, at most `limit` of them.
pub fn search_managers<'a>(
    rows: &'a [LeagueStanding],
    query: &str,
    limit: usize,
) -> Vec<&'a LeagueStanding> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| {
            row.player_name.to_lowercase().contains(&needle)
                || row.entry_name.to_lowercase().contains(&needle)
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(entry: u64, player: &str, team: &str) -> LeagueStanding {
        LeagueStanding {
            entry,
            entry_name: team.into(),
            player_name: player.into(),
            rank: entry as u32,
            total: 0,
        }
    }

    #[test]
    fn short_queries_match_nothing() {
        let rows = vec![row(1, "Alex Smith", "Smith FC")];
        assert!(search_managers(&rows, "a", 5).is_empty());
        assert!(search_managers(&rows, "", 5).is_empty());
    }

    #[test]
    fn matches_player_or_team_name_case_insensitively() {
        let rows = vec![
            row(1, "Alex Smith", "Smith FC"),
            row(2, "Jo Park", "Alexandria XI"),
            row(3, "Sam Lee", "Lee's Lads"),
        ];
        let hits: Vec<u64> = search_managers(&rows, "ALEX", 5)
            .iter()
            .map(|r| r.entry)
            .collect();
        assert_eq!(hits, vec![1, 2]);
    }

    #[test]
    fn limit_caps_suggestions() {
        let rows: Vec<_> = (1..=8).map(|i| row(i, "Chris", "Team")).collect();
        assert_eq!(search_managers(&rows, "chris", 5).len(), 5);
    }
}
