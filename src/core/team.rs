//! Team ownership and faction turn identity.
//!
//! These are distinct concepts: a *team* is who owns a piece or host
//! (`Friendly` or `Cursed`), while a *faction* is whose turn it is
//! (`Julia`, `Billy`, or `Curse`). Both human factions control
//! friendly-team pieces.

use serde::{Deserialize, Serialize};

/// Ownership of a piece or host.
///
/// The integer codes (Friendly = 0, Cursed = 1) are part of the binary
/// save format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Friendly,
    Cursed,
}

impl Team {
    /// The opposing team.
    #[must_use]
    pub const fn enemy(self) -> Team {
        match self {
            Team::Friendly => Team::Cursed,
            Team::Cursed => Team::Friendly,
        }
    }

    /// Integer code used by the save format.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Team::Friendly => 0,
            Team::Cursed => 1,
        }
    }

    /// Decode a save-format team code.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Team> {
        match code {
            0 => Some(Team::Friendly),
            1 => Some(Team::Cursed),
            _ => None,
        }
    }
}

/// The three factions, in the order they play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Julia,
    Billy,
    Curse,
}

impl Faction {
    /// Number of factions in the turn cycle.
    pub const COUNT: u32 = 3;

    /// The faction that plays after this one.
    #[must_use]
    pub const fn next(self) -> Faction {
        match self {
            Faction::Julia => Faction::Billy,
            Faction::Billy => Faction::Curse,
            Faction::Curse => Faction::Julia,
        }
    }

    /// The team whose pieces this faction acts with.
    #[must_use]
    pub const fn team(self) -> Team {
        match self {
            Faction::Julia | Faction::Billy => Team::Friendly,
            Faction::Curse => Team::Cursed,
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Faction::Julia => write!(f, "Julia"),
            Faction::Billy => write!(f, "Billy"),
            Faction::Curse => write!(f, "Curse"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_is_involution() {
        assert_eq!(Team::Friendly.enemy(), Team::Cursed);
        assert_eq!(Team::Cursed.enemy(), Team::Friendly);
        assert_eq!(Team::Friendly.enemy().enemy(), Team::Friendly);
    }

    #[test]
    fn test_team_codes_round_trip() {
        for team in [Team::Friendly, Team::Cursed] {
            assert_eq!(Team::from_code(team.code()), Some(team));
        }
        assert_eq!(Team::from_code(2), None);
        assert_eq!(Team::from_code(-1), None);
    }

    #[test]
    fn test_faction_cycle() {
        assert_eq!(Faction::Julia.next(), Faction::Billy);
        assert_eq!(Faction::Billy.next(), Faction::Curse);
        assert_eq!(Faction::Curse.next(), Faction::Julia);
    }

    #[test]
    fn test_faction_teams() {
        assert_eq!(Faction::Julia.team(), Team::Friendly);
        assert_eq!(Faction::Billy.team(), Team::Friendly);
        assert_eq!(Faction::Curse.team(), Team::Cursed);
    }
}
