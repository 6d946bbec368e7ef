/// The betting round a decision is made on.
///
/// The solver treats every street the same way (it samples whatever board
/// cards are missing), so the street is carried for reporting only.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    pub const fn all() -> &'static [Self] {
        &[Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// board cards showing on this street
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Street {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "preflop" | "pref" => Ok(Self::Pref),
            "flop" => Ok(Self::Flop),
            "turn" => Ok(Self::Turn),
            "river" | "rive" => Ok(Self::Rive),
            _ => Err(anyhow::anyhow!("invalid stage: {}", s)),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_str() {
        for street in Street::all() {
            assert_eq!(Street::try_from(street.to_string().as_str()).unwrap(), *street);
        }
    }

    #[test]
    fn stage_names_ignore_case() {
        assert_eq!(Street::try_from("RIVER").unwrap(), Street::Rive);
        assert_eq!(Street::try_from("Flop").unwrap(), Street::Flop);
        assert!(Street::try_from("showdown").is_err());
    }
}
