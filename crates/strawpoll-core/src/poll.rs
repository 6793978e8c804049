//! Poll records exchanged with the Strawpoll v2 API
//!
//! Field names match the wire format exactly, so every record maps onto its
//! JSON document without renaming.

use serde::{Deserialize, Serialize};

/// Well-known duplicate-vote policies
///
/// The service owns the meaning of these values. Any other string it returns
/// is kept as-is.
pub mod dupcheck {
    /// One vote per IP address, enforced by the service
    pub const NORMAL: &str = "normal";
    /// Cookie-based duplicate detection
    pub const PERMISSIVE: &str = "permissive";
    /// No duplicate detection
    pub const DISABLED: &str = "disabled";
}

/// Identifies the poll to fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PollQuery {
    /// Poll identifier; `0` is treated as absent
    pub id: u64,
}

impl PollQuery {
    /// Create a query for the given poll identifier
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub(crate) fn validate(&self) -> crate::Result<()> {
        if self.id == 0 {
            return Err(crate::Error::invalid_input("Poll id must be a positive integer"));
        }
        Ok(())
    }
}

impl From<u64> for PollQuery {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// A poll as returned by `GET <endpoint>/<id>`
///
/// `votes[i]` is the count for `options[i]`. Decoding rejects documents where
/// the two sequences differ in length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPollRecord")]
pub struct PollRecord {
    /// Poll identifier
    pub id: u64,
    /// Poll question
    pub title: String,
    /// Option labels, in display order
    pub options: Vec<String>,
    /// Vote counts, index-aligned with `options`
    pub votes: Vec<u64>,
    /// Whether voters may pick more than one option
    pub multi: bool,
    /// Duplicate-vote policy (see [`dupcheck`])
    pub dupcheck: String,
    /// Whether voting requires a captcha
    pub captcha: bool,
}

impl PollRecord {
    /// Option labels paired with their vote counts, in order
    pub fn tally(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.options
            .iter()
            .map(String::as_str)
            .zip(self.votes.iter().copied())
    }

    /// Sum of all vote counts, saturating at `u64::MAX`
    pub fn total_votes(&self) -> u64 {
        self.votes.iter().copied().fold(0u64, u64::saturating_add)
    }

    /// Vote count for the first option with this exact label
    pub fn votes_for(&self, option: &str) -> Option<u64> {
        self.tally()
            .find(|(label, _)| *label == option)
            .map(|(_, votes)| votes)
    }
}

/// Wire shape of a fetched poll, before the alignment check
#[derive(Deserialize)]
struct RawPollRecord {
    id: u64,
    title: String,
    options: Vec<String>,
    votes: Vec<u64>,
    #[serde(default)]
    multi: bool,
    #[serde(default)]
    dupcheck: String,
    #[serde(default)]
    captcha: bool,
}

impl TryFrom<RawPollRecord> for PollRecord {
    type Error = String;

    fn try_from(raw: RawPollRecord) -> Result<Self, Self::Error> {
        if raw.votes.len() != raw.options.len() {
            return Err(format!(
                "poll {} has {} options but {} vote counts",
                raw.id,
                raw.options.len(),
                raw.votes.len()
            ));
        }

        Ok(Self {
            id: raw.id,
            title: raw.title,
            options: raw.options,
            votes: raw.votes,
            multi: raw.multi,
            dupcheck: raw.dupcheck,
            captcha: raw.captcha,
        })
    }
}

/// Fields of a poll to create with `POST <endpoint>`
///
/// `title` and `options` are required; the rest fall back to service
/// defaults. An empty `dupcheck` lets the service choose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollCreation {
    /// Poll question (required)
    pub title: String,
    /// Option labels, in display order (required)
    pub options: Vec<String>,
    /// Allow voters to pick more than one option
    #[serde(default)]
    pub multi: bool,
    /// Duplicate-vote policy (see [`dupcheck`])
    #[serde(default)]
    pub dupcheck: String,
    /// Require a captcha to vote
    #[serde(default)]
    pub captcha: bool,
}

impl PollCreation {
    /// Create a poll with the given title and options
    pub fn new<I, S>(title: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            options: options.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Allow or forbid multiple choices
    pub fn with_multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Set the duplicate-vote policy
    pub fn with_dupcheck(mut self, dupcheck: impl Into<String>) -> Self {
        self.dupcheck = dupcheck.into();
        self
    }

    /// Require or skip the captcha
    pub fn with_captcha(mut self, captcha: bool) -> Self {
        self.captcha = captcha;
        self
    }

    /// Presence checks run before anything is sent
    ///
    /// Only an empty title is rejected; content rules belong to the service.
    pub(crate) fn validate(&self) -> crate::Result<()> {
        if self.title.is_empty() {
            return Err(crate::Error::invalid_input("Title must not be empty"));
        }
        if self.options.is_empty() {
            return Err(crate::Error::invalid_input("Options must not be empty"));
        }
        Ok(())
    }
}

/// The poll echoed back by the service after creation
///
/// A fresh poll has no votes, so there is no `votes` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedPoll {
    /// Identifier assigned by the service
    pub id: u64,
    /// Poll question
    pub title: String,
    /// Option labels, in display order
    pub options: Vec<String>,
    /// Whether voters may pick more than one option
    #[serde(default)]
    pub multi: bool,
    /// Duplicate-vote policy
    #[serde(default)]
    pub dupcheck: String,
    /// Whether voting requires a captcha
    #[serde(default)]
    pub captcha: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FETCHED: &str = r#"{"id":5,"title":"T","options":["a","b"],"votes":[1,2],"multi":false,"dupcheck":"normal","captcha":false}"#;

    #[test]
    fn test_decode_poll_record() {
        let record: PollRecord = serde_json::from_str(FETCHED).unwrap();
        assert_eq!(
            record,
            PollRecord {
                id: 5,
                title: "T".to_string(),
                options: vec!["a".to_string(), "b".to_string()],
                votes: vec![1, 2],
                multi: false,
                dupcheck: dupcheck::NORMAL.to_string(),
                captcha: false,
            }
        );
    }

    #[test]
    fn test_decode_rejects_misaligned_votes() {
        let body = r#"{"id":5,"title":"T","options":["a","b"],"votes":[1],"multi":false,"dupcheck":"normal","captcha":false}"#;
        let err = serde_json::from_str::<PollRecord>(body).unwrap_err();
        assert!(err.to_string().contains("2 options but 1 vote counts"));
    }

    #[test]
    fn test_decode_requires_votes() {
        let body = r#"{"id":5,"title":"T","options":["a"]}"#;
        assert!(serde_json::from_str::<PollRecord>(body).is_err());
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = r#"{"id":9,"title":"T","options":["a"],"votes":[0],"created":"2016-01-01"}"#;
        let record: PollRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.id, 9);
        assert!(record.dupcheck.is_empty());
    }

    #[test]
    fn test_tally_helpers() {
        let record: PollRecord = serde_json::from_str(FETCHED).unwrap();
        let tally: Vec<_> = record.tally().collect();
        assert_eq!(tally, vec![("a", 1), ("b", 2)]);
        assert_eq!(record.total_votes(), 3);
        assert_eq!(record.votes_for("b"), Some(2));
        assert_eq!(record.votes_for("c"), None);
    }

    #[test]
    fn test_total_votes_saturates() {
        let body = r#"{"id":5,"title":"T","options":["a","b"],"votes":[18446744073709551615,1]}"#;
        let record: PollRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.total_votes(), u64::MAX);
        assert_eq!(record.votes_for("a"), Some(u64::MAX));
    }

    #[test]
    fn test_creation_serializes_fixed_field_names() {
        let creation = PollCreation::new("Lunch?", ["Pizza", "Sushi"])
            .with_multi(true)
            .with_dupcheck(dupcheck::PERMISSIVE);

        let value = serde_json::to_value(&creation).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Lunch?",
                "options": ["Pizza", "Sushi"],
                "multi": true,
                "dupcheck": "permissive",
                "captcha": false,
            })
        );
    }

    #[test]
    fn test_creation_validation() {
        assert!(PollCreation::new("Q", ["a"]).validate().is_ok());
        assert!(PollCreation::default().validate().is_err());
        assert!(PollCreation::new("", ["a"]).validate().is_err());
        assert!(PollCreation::new(" ", ["a"]).validate().is_ok());
        assert!(PollCreation::new("Q", Vec::<String>::new()).validate().is_err());
    }

    #[test]
    fn test_query_validation() {
        assert!(PollQuery::new(1).validate().is_ok());
        assert!(PollQuery::default().validate().is_err());
        assert_eq!(PollQuery::from(42).id, 42);
    }

    #[test]
    fn test_decode_created_poll_without_votes() {
        let body = r#"{"id":11,"title":"Q","options":["x","y"],"multi":true,"dupcheck":"disabled","captcha":true}"#;
        let created: CreatedPoll = serde_json::from_str(body).unwrap();
        assert_eq!(created.id, 11);
        assert_eq!(created.options, vec!["x", "y"]);
        assert!(created.multi);
        assert_eq!(created.dupcheck, dupcheck::DISABLED);
        assert!(created.captcha);
    }
}
