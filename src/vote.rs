/// Displayed when no record carried an event label.
pub const NO_CLEAR_WINNER: &str = "No clear winner";

/// Order-preserving vote tally for event labels.
///
/// Keys are the lowercased labels; each entry remembers the exact
/// casing of the label's first occurrence for display. Entries live in
/// first-seen order, which is what makes the tie-break deterministic:
/// on equal counts the earliest-seen key wins.
#[derive(Debug, Default)]
pub struct VoteTally {
    entries: Vec<VoteEntry>,
}

#[derive(Debug)]
struct VoteEntry {
    key: String,
    first_seen: String,
    votes: usize,
}

impl VoteTally {
    pub fn new() -> VoteTally {
        VoteTally { entries: vec![] }
    }

    /// Casts one vote. Labels are trimmed before tallying; a blank
    /// label is not a vote.
    pub fn cast(&mut self, label: &str) {
        let label = label.trim();
        if label.is_empty() {
            return;
        }

        let key = label.to_lowercase();

        match self.entries.iter_mut().find(|e| e.key == key) {
            Some(entry) => entry.votes += 1,
            None => self.entries.push(VoteEntry {
                key,
                first_seen: label.to_string(),
                votes: 1,
            }),
        }
    }

    /// The winning label in its first-seen casing, or `None` when no
    /// votes were cast. A strict `>` keeps the scan stable, so earlier
    /// entries win ties.
    ///
    /// # Examples
    /// ```
    /// use freizeit_libs::vote::VoteTally;
    ///
    /// let mut tally = VoteTally::new();
    /// for label in ["Board Games", "board games", "Trivia"] {
    ///     tally.cast(label);
    /// }
    ///
    /// assert_eq!(tally.winner(), Some("Board Games"));
    /// ```
    pub fn winner(&self) -> Option<&str> {
        let mut best: Option<&VoteEntry> = None;

        for entry in &self.entries {
            match best {
                Some(b) if entry.votes > b.votes => best = Some(entry),
                None => best = Some(entry),
                _ => {}
            }
        }

        best.map(|e| e.first_seen.as_str())
    }

    /// Like [`winner`](VoteTally::winner), but collapses the no-vote
    /// case to the [`NO_CLEAR_WINNER`] sentinel for display.
    pub fn winner_label(&self) -> String {
        self.winner().unwrap_or(NO_CLEAR_WINNER).to_string()
    }
}

impl<'a> Extend<&'a str> for VoteTally {
    fn extend<T: IntoIterator<Item = &'a str>>(&mut self, labels: T) {
        for label in labels {
            self.cast(label);
        }
    }
}
