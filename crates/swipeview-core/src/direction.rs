use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Horizontal direction of a drag, as passed to lifecycle callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Left,
    Right,
    /// Zero displacement. Only ever reaches the bounce-back callbacks.
    None,
}

impl SwipeDirection {
    /// Maps the sign of a horizontal displacement to a direction.
    pub fn from_displacement(dx: f32) -> Self {
        if dx < 0.0 {
            SwipeDirection::Left
        } else if dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::None
        }
    }

    /// -1 for left, 1 for right, 0 for none.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
            SwipeDirection::None => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
            SwipeDirection::None => "none",
        }
    }

    fn bit(self) -> u8 {
        match self {
            SwipeDirection::Left => 1,
            SwipeDirection::Right => 1 << 1,
            SwipeDirection::None => 0,
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of horizontal directions, tested by membership at every decision point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1);
    pub const RIGHT: Self = Self(1 << 1);
    pub const BOTH: Self = Self(1 | (1 << 1));

    pub fn with(mut self, direction: SwipeDirection) -> Self {
        self.insert(direction);
        self
    }

    pub fn insert(&mut self, direction: SwipeDirection) {
        self.0 |= direction.bit();
    }

    pub fn remove(&mut self, direction: SwipeDirection) {
        self.0 &= !direction.bit();
    }

    /// `SwipeDirection::None` is never a member.
    pub fn contains(&self, direction: SwipeDirection) -> bool {
        let bit = direction.bit();
        bit != 0 && (self.0 & bit) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::BOTH
    }
}

impl FromStr for DirectionSet {
    type Err = ConfigError;

    /// Accepts the option strings `left`, `right`, `both` and `none`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "left" => Ok(Self::LEFT),
            "right" => Ok(Self::RIGHT),
            "both" => Ok(Self::BOTH),
            "none" => Ok(Self::NONE),
            other => Err(ConfigError::UnknownDirection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_sign_maps_to_direction() {
        assert_eq!(SwipeDirection::from_displacement(-0.5), SwipeDirection::Left);
        assert_eq!(SwipeDirection::from_displacement(3.0), SwipeDirection::Right);
        assert_eq!(SwipeDirection::from_displacement(0.0), SwipeDirection::None);
        assert_eq!(SwipeDirection::from_displacement(-0.0), SwipeDirection::None);
    }

    #[test]
    fn none_is_never_a_member() {
        assert!(!DirectionSet::BOTH.contains(SwipeDirection::None));
        assert!(DirectionSet::BOTH.contains(SwipeDirection::Left));
        assert!(!DirectionSet::RIGHT.contains(SwipeDirection::Left));
    }

    #[test]
    fn insert_and_remove() {
        let mut set = DirectionSet::NONE.with(SwipeDirection::Right);
        assert_eq!(set, DirectionSet::RIGHT);
        set.insert(SwipeDirection::Left);
        assert_eq!(set, DirectionSet::BOTH);
        set.remove(SwipeDirection::Right);
        assert_eq!(set, DirectionSet::LEFT);
        set.remove(SwipeDirection::Left);
        assert!(set.is_empty());
    }

    #[test]
    fn parses_option_strings() {
        assert_eq!("both".parse::<DirectionSet>(), Ok(DirectionSet::BOTH));
        assert_eq!("left".parse::<DirectionSet>(), Ok(DirectionSet::LEFT));
        assert_eq!("none".parse::<DirectionSet>(), Ok(DirectionSet::NONE));
        assert_eq!(
            "up".parse::<DirectionSet>(),
            Err(ConfigError::UnknownDirection("up".to_string()))
        );
    }
}
