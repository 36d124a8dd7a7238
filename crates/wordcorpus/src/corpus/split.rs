//! # Dataset Splits

/// A dataset split.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Split {
    /// The training split; the only split vocabularies are induced from.
    Train,

    /// The development split.
    Dev,

    /// The test split; malformed lines degrade to unlabeled records.
    Test,
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(
            Split::iter().map(|s| s.to_string()).collect::<Vec<_>>(),
            vec!["train", "dev", "test"]
        );
        assert_eq!(Split::from_str("dev").unwrap(), Split::Dev);
        assert!(Split::from_str("valid").is_err());
    }
}
