/// What one extraction call did with its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Report {
    /// Hands whose decisions were folded into the patterns.
    pub accepted: usize,
    /// Hands already seen in this pass.
    pub duplicates: usize,
    /// Hands dropped because their outcome was malformed.
    pub skipped: usize,
    /// Decisions counted.
    pub states: usize,
    /// Decisions dropped because their state was malformed.
    pub malformed: usize,
}

impl std::ops::AddAssign for Report {
    fn add_assign(&mut self, other: Self) {
        self.accepted += other.accepted;
        self.duplicates += other.duplicates;
        self.skipped += other.skipped;
        self.states += other.states;
        self.malformed += other.malformed;
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hands {} (dup {}, skip {}) states {} (skip {})",
            self.accepted, self.duplicates, self.skipped, self.states, self.malformed
        )
    }
}
