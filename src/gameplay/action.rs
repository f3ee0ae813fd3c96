use crate::Chips;

/// A player decision or forced bet, carrying the chips it added to the pot.
///
/// Amounts are increments: `Call(10)` puts ten more chips in, not a total.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Check,
    Call(Chips),
    Raise(Chips),
    Shove(Chips),
    Blind(Chips),
}

impl Action {
    /// True if this is a bet, raise or shove.
    pub fn is_aggro(&self) -> bool {
        matches!(self, Action::Raise(_) | Action::Shove(_))
    }
    /// True if this is a voluntary decision rather than a forced post.
    pub fn is_choice(&self) -> bool {
        !self.is_blind()
    }
    pub fn is_blind(&self) -> bool {
        matches!(self, Action::Blind(_))
    }
    pub fn is_fold(&self) -> bool {
        matches!(self, Action::Fold)
    }
    /// Chips added to the pot by this action.
    pub fn amount(&self) -> Chips {
        match *self {
            Action::Call(amount)
            | Action::Raise(amount)
            | Action::Shove(amount)
            | Action::Blind(amount) => amount,
            Action::Fold | Action::Check => 0,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "Fold",
            Action::Check => "Check",
            Action::Call(_) => "Call",
            Action::Raise(_) => "Raise",
            Action::Shove(_) => "Shove",
            Action::Blind(_) => "Blind",
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let amount = || -> Result<Chips, Self::Error> {
            parts
                .get(1)
                .and_then(|n| n.parse().ok())
                .ok_or("invalid amount")
        };
        match parts.first().map(|p| p.to_uppercase()).as_deref() {
            Some("CHECK") => Ok(Action::Check),
            Some("FOLD") => Ok(Action::Fold),
            Some("CALL") => amount().map(Action::Call),
            Some("RAISE") | Some("BET") => amount().map(Action::Raise),
            Some("SHOVE") => amount().map(Action::Shove),
            Some("BLIND") => amount().map(Action::Blind),
            _ => Err("invalid action type"),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Check => write!(f, "CHECK"),
            Action::Call(amount) => write!(f, "CALL  {}", amount),
            Action::Blind(amount) => write!(f, "BLIND {}", amount),
            Action::Raise(amount) => write!(f, "RAISE {}", amount),
            Action::Shove(amount) => write!(f, "SHOVE {}", amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_form() {
        for action in [
            Action::Fold,
            Action::Check,
            Action::Call(20),
            Action::Raise(60),
            Action::Shove(400),
            Action::Blind(2),
        ] {
            assert_eq!(Action::try_from(action.to_string().as_str()), Ok(action));
        }
    }

    #[test]
    fn bet_is_a_raise() {
        assert_eq!(Action::try_from("bet 10"), Ok(Action::Raise(10)));
        assert!(Action::try_from("raise").is_err());
    }
}
