// Randomness simulator - outcome counting over uniform discrete trials
// All randomness comes from a caller-supplied Rng, so runs are reproducible
// with a seeded StdRng and tests never touch global state

use rand::Rng;

/// Frequency table over a fixed set of discrete outcomes.
///
/// The outcome set and its display order are declared at construction:
/// `Heads` before `Tails` for coins, faces in ascending numeric order for
/// dice. Every declared outcome is present even at zero occurrences, and
/// iteration always follows the declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeTable {
    entries: Vec<(String, u64)>,
}

impl OutcomeTable {
    /// Builds a table with all counts at zero, in the given order.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OutcomeTable {
            entries: labels.into_iter().map(|l| (l.into(), 0)).collect(),
        }
    }

    /// Builds a table from pre-counted pairs, preserving their order.
    pub fn from_counts<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        OutcomeTable {
            entries: pairs.into_iter().map(|(l, c)| (l.into(), c)).collect(),
        }
    }

    /// Adds one occurrence to a declared outcome. Unknown labels are
    /// ignored; the outcome set never grows after construction.
    pub fn increment(&mut self, label: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| l == label) {
            entry.1 += 1;
        }
    }

    // Outcome sets are tiny (2..=100) so positional access beats a map.
    fn bump(&mut self, index: usize) {
        self.entries[index].1 += 1;
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| *c)
    }

    /// Entries in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    pub fn max_count(&self) -> Option<u64> {
        self.entries.iter().map(|(_, c)| *c).max()
    }

    pub fn min_count(&self) -> Option<u64> {
        self.entries.iter().map(|(_, c)| *c).min()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Flips a fair coin `trials` times.
///
/// Returns a table over exactly `Heads` and `Tails`, in that order; each
/// trial increments exactly one of them. Callers bound `trials`; any u64
/// is accepted here.
pub fn coin_counts(trials: u64, rng: &mut impl Rng) -> OutcomeTable {
    let mut counts = OutcomeTable::with_labels(["Heads", "Tails"]);
    for _ in 0..trials {
        if rng.gen_bool(0.5) {
            counts.bump(0);
        } else {
            counts.bump(1);
        }
    }
    counts
}

/// Rolls a `sides`-sided die `trials` times.
///
/// Outcomes are labeled `1..=sides` in ascending order, each trial
/// uniform over the faces. `sides >= 2` is a caller precondition.
pub fn dice_counts(trials: u64, sides: u32, rng: &mut impl Rng) -> OutcomeTable {
    debug_assert!(sides >= 2, "a die needs at least two sides");

    let mut counts = OutcomeTable::with_labels((1..=sides).map(|face| face.to_string()));
    for _ in 0..trials {
        let face = rng.gen_range(1..=sides);
        counts.bump((face - 1) as usize);
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_coin_counts_partition_trials() {
        let mut rng = StdRng::seed_from_u64(7);
        let counts = coin_counts(1000, &mut rng);

        assert_eq!(counts.len(), 2);
        assert_eq!(
            counts.get("Heads").unwrap() + counts.get("Tails").unwrap(),
            1000
        );
    }

    #[test]
    fn test_coin_declared_order_is_heads_then_tails() {
        let mut rng = StdRng::seed_from_u64(7);
        let counts = coin_counts(10, &mut rng);
        let labels: Vec<&str> = counts.iter().map(|(l, _)| l).collect();

        assert_eq!(labels, vec!["Heads", "Tails"]);
    }

    #[test]
    fn test_zero_trials_keeps_all_outcomes_at_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let counts = coin_counts(0, &mut rng);

        assert_eq!(counts.total(), 0);
        assert_eq!(counts.get("Heads"), Some(0));
        assert_eq!(counts.get("Tails"), Some(0));
    }

    #[test]
    fn test_dice_counts_cover_all_faces_and_sum_to_trials() {
        let mut rng = StdRng::seed_from_u64(42);
        let counts = dice_counts(600, 6, &mut rng);

        assert_eq!(counts.len(), 6);
        assert_eq!(counts.total(), 600);
        for face in 1..=6 {
            assert!(
                counts.get(&face.to_string()).is_some(),
                "Face {} should be present even at zero",
                face
            );
        }
    }

    #[test]
    fn test_dice_faces_in_ascending_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let counts = dice_counts(100, 8, &mut rng);
        let labels: Vec<&str> = counts.iter().map(|(l, _)| l).collect();

        assert_eq!(labels, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_same_seed_reproduces_identical_tables() {
        let mut a = StdRng::seed_from_u64(1234);
        let mut b = StdRng::seed_from_u64(1234);

        assert_eq!(dice_counts(600, 6, &mut a), dice_counts(600, 6, &mut b));

        let mut a = StdRng::seed_from_u64(1234);
        let mut b = StdRng::seed_from_u64(1234);
        assert_eq!(coin_counts(500, &mut a), coin_counts(500, &mut b));
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);

        // 1000 trials makes a collision astronomically unlikely
        assert_ne!(dice_counts(1000, 6, &mut a), dice_counts(1000, 6, &mut b));
    }

    #[test]
    fn test_increment_ignores_undeclared_labels() {
        let mut counts = OutcomeTable::with_labels(["Heads", "Tails"]);
        counts.increment("Edge");

        assert_eq!(counts.total(), 0);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_min_max_and_total() {
        let counts =
            OutcomeTable::from_counts([("1", 10u64), ("2", 3), ("3", 10)]);

        assert_eq!(counts.total(), 23);
        assert_eq!(counts.max_count(), Some(10));
        assert_eq!(counts.min_count(), Some(3));
    }
}
