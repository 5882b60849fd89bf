use time::OffsetDateTime;

use crate::{Rating, Song, Star};

/// The song being edited in the form. `rating` is `None` until a star is picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub artist: String,
    pub rating: Option<Rating>,
}

impl Draft {
    /// Builds a song only if name and artist are non-empty and a rating is set.
    ///
    /// Text is taken verbatim, so whitespace-only names are accepted.
    pub fn commit(&self, created: OffsetDateTime) -> Option<Song> {
        if self.name.is_empty() || self.artist.is_empty() {
            return None;
        }
        let rating = self.rating?;
        Some(Song {
            id: Song::id(created),
            name: self.name.clone(),
            artist: self.artist.clone(),
            rating,
        })
    }

    pub fn stars(&self) -> [Star; Rating::MAX as usize] {
        Star::row(self.rating.map_or(0, Rating::get))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use time::macros::datetime;

    use super::*;

    fn draft(name: &str, artist: &str, rating: u8) -> Draft {
        Draft {
            name: name.to_owned(),
            artist: artist.to_owned(),
            rating: Rating::try_from(rating).ok(),
        }
    }

    #[rstest]
    fn test_commit() {
        let created = datetime!(2024-06-10 06:13:20 UTC);
        assert_eq!(
            draft("Imagine", "John Lennon", 5).commit(created),
            Some(Song {
                id: "1718000000000".to_owned(),
                name: "Imagine".to_owned(),
                artist: "John Lennon".to_owned(),
                rating: Rating::try_from(5).unwrap(),
            })
        );
    }

    #[rstest]
    #[case("", "X", 3)]
    #[case("Imagine", "", 3)]
    #[case("Imagine", "John Lennon", 0)]
    #[case("", "", 0)]
    fn test_commit_incomplete(#[case] name: &str, #[case] artist: &str, #[case] rating: u8) {
        assert_eq!(draft(name, artist, rating).commit(OffsetDateTime::now_utc()), None);
    }

    #[rstest]
    fn test_commit_verbatim() {
        let song = draft(" ", "\tartist ", 1).commit(OffsetDateTime::now_utc()).unwrap();
        assert_eq!(song.name, " ");
        assert_eq!(song.artist, "\tartist ");
    }

    #[rstest]
    fn test_stars(#[values(0, 1, 2, 3, 4, 5)] rating: u8) {
        let filled = draft("", "", rating).stars().iter().filter(|star| star.is_filled()).count();
        assert_eq!(filled, usize::from(rating));
    }

    #[rstest]
    fn test_default() {
        assert_eq!(Draft::default(), draft("", "", 0));
    }
}
