use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
#[error("Rating must be between 1 and 5, got {0}")]
pub struct Error(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Filled,
    Empty,
}

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn stars(self) -> [Star; Rating::MAX as usize] {
        Star::row(self.0)
    }

    /// Every valid rating, lowest first. This is the order of the stars in the picker.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<u8> for Rating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) { Ok(Self(value)) } else { Err(Error(value)) }
    }
}

impl From<Rating> for u8 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

impl Star {
    /// `filled` stars followed by empty ones. Values above the maximum saturate.
    pub fn row(filled: u8) -> [Self; Rating::MAX as usize] {
        let filled = usize::from(filled);
        std::array::from_fn(|index| if index < filled { Self::Filled } else { Self::Empty })
    }

    pub fn is_filled(self) -> bool {
        matches!(self, Self::Filled)
    }
}

#[cfg(any(test, feature = "test"))]
mod test {
    use fake::Fake;

    use super::*;

    impl Rating {
        pub fn fake() -> Self {
            Self((Self::MIN..=Self::MAX).fake())
        }
    }
}
