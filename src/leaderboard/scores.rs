use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Player names mapped to cumulative scores, kept in insertion order.
///
/// Serialized as a single JSON object, e.g. `{"Alice":3,"Bob":-1}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<(String, i64)>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, score)| score)
    }

    /// Add `score` to `name`'s total, appending a new entry for unknown names.
    /// Returns the new total.
    pub fn add_score(&mut self, name: &str, score: i64) -> i64 {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, total)) => {
                *total = total.saturating_add(score);
                *total
            }
            None => {
                self.entries.push((name.to_string(), score));
                score
            }
        }
    }

    /// Entries in stored order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // A repeated key keeps its first position and takes the later value.
    fn set(&mut self, name: String, score: i64) {
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, total)) => *total = score,
            None => self.entries.push((name, score)),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for Leaderboard {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut board = Leaderboard::new();
        for (name, score) in iter {
            board.set(name.into(), score);
        }
        board
    }
}

/// One `name: score` line per entry.
impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, score) in self.iter() {
            writeln!(f, "{}: {}", name, score)?;
        }
        Ok(())
    }
}

impl Serialize for Leaderboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(n, s)| (n, s)))
    }
}

struct LeaderboardVisitor;

impl<'de> Visitor<'de> for LeaderboardVisitor {
    type Value = Leaderboard;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of player names to integer scores")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut board = Leaderboard::new();
        while let Some((name, score)) = access.next_entry::<String, i64>()? {
            board.set(name, score);
        }
        Ok(board)
    }
}

impl<'de> Deserialize<'de> for Leaderboard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LeaderboardVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_score_new_and_existing() {
        let mut board = Leaderboard::new();
        assert_eq!(board.add_score("Carol", 5), 5);
        assert_eq!(board.add_score("Carol", 3), 8);
        assert_eq!(board.add_score("Dave", -1), -1);
        assert_eq!(board.get("Carol"), Some(8));
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_json_keeps_file_order() {
        let board: Leaderboard = serde_json::from_str(r#"{"Zoe": 1, "Adam": -2, "Mia": 0}"#).unwrap();
        let names: Vec<&str> = board.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Zoe", "Adam", "Mia"]);
        assert_eq!(
            serde_json::to_string(&board).unwrap(),
            r#"{"Zoe":1,"Adam":-2,"Mia":0}"#
        );
    }

    #[test]
    fn test_duplicate_key_takes_last_value() {
        let board: Leaderboard = serde_json::from_str(r#"{"A": 1, "B": 2, "A": 7}"#).unwrap();
        assert_eq!(board, Leaderboard::from_iter([("A", 7), ("B", 2)]));
    }

    #[test]
    fn test_rejects_non_object_and_non_integer() {
        assert!(serde_json::from_str::<Leaderboard>("[1, 2]").is_err());
        assert!(serde_json::from_str::<Leaderboard>(r#"{"A": "three"}"#).is_err());
        assert!(serde_json::from_str::<Leaderboard>(r#"{"A": 1.5}"#).is_err());
    }

    #[test]
    fn test_display() {
        let board = Leaderboard::from_iter([("Alice", 3), ("Bob", -1)]);
        assert_eq!(board.to_string(), "Alice: 3\nBob: -1\n");
        assert_eq!(Leaderboard::new().to_string(), "");
    }
}
