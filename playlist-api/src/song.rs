use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::Rating;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub rating: Rating,
}

impl Song {
    /// Milliseconds since the Unix epoch of `created`, as a decimal string.
    ///
    /// Two songs created within the same millisecond share an id.
    pub fn id(created: OffsetDateTime) -> String {
        (created.unix_timestamp_nanos() / 1_000_000).to_string()
    }
}

#[cfg(any(test, feature = "test"))]
mod test {
    use fake::faker::lorem::en::Words;
    use fake::faker::name::en::Name;
    use fake::{Fake, Faker};

    use super::*;

    impl Song {
        pub fn fake() -> Self {
            Self {
                id: Faker.fake::<u64>().to_string(),
                name: Words(1..4).fake::<Vec<String>>().join(" "),
                artist: Name().fake(),
                rating: Rating::fake(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use fake::Fake;
    use rstest::rstest;
    use time::macros::datetime;

    use super::*;

    #[rstest]
    #[case(datetime!(1970-01-01 0:00 UTC), "0")]
    #[case(datetime!(2024-06-10 06:13:20 UTC), "1718000000000")]
    #[case(datetime!(2024-06-10 06:13:20.123456 UTC), "1718000000123")]
    fn test_id(#[case] created: OffsetDateTime, #[case] id: &str) {
        assert_eq!(Song::id(created), id);
    }

    #[rstest]
    fn test_deserialize() {
        let songs: Vec<Song> = serde_json::from_str(
            r#"[{"id":"1718000000000","name":"Imagine","artist":"John Lennon","rating":5}]"#,
        )
        .unwrap();
        assert_eq!(
            songs,
            vec![Song {
                id: "1718000000000".to_owned(),
                name: "Imagine".to_owned(),
                artist: "John Lennon".to_owned(),
                rating: Rating::try_from(5).unwrap(),
            }]
        );
    }

    #[rstest]
    #[case(r#"[{"id":"1","name":"a","artist":"b","rating":0}]"#)]
    #[case(r#"[{"id":"1","name":"a","artist":"b","rating":6}]"#)]
    #[case(r#"[{"id":1,"name":"a","artist":"b","rating":3}]"#)]
    #[case(r#"[{"id":"1","name":"a","rating":3}]"#)]
    #[case(r#"{"id":"1","name":"a","artist":"b","rating":3}"#)]
    #[case("not json")]
    fn test_deserialize_invalid(#[case] input: &str) {
        assert!(serde_json::from_str::<Vec<Song>>(input).is_err());
    }

    #[rstest]
    fn test_serialize() {
        let song = Song {
            id: "42".to_owned(),
            name: "Imagine".to_owned(),
            artist: "John Lennon".to_owned(),
            rating: Rating::try_from(4).unwrap(),
        };
        assert_eq!(
            serde_json::to_string(&song).unwrap(),
            r#"{"id":"42","name":"Imagine","artist":"John Lennon","rating":4}"#
        );
    }

    #[rstest]
    fn test_roundtrip() {
        let songs: Vec<_> = (0..(2..8).fake::<usize>()).map(|_| Song::fake()).collect();
        assert_eq!(
            songs,
            serde_json::from_str::<Vec<Song>>(&serde_json::to_string(&songs).unwrap()).unwrap()
        );
    }
}
