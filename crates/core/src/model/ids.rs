use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier slug for a Subject (e.g. `physics`, `math`).
///
/// Slugs feed directly into [`TopicKey`] strings, so the alphabet is kept to
/// ASCII lowercase letters, digits and `-`. Underscores in particular are
/// reserved as key separators.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubjectId(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubjectIdError {
    #[error("subject id cannot be empty")]
    Empty,

    #[error("subject id may only contain ascii lowercase letters, digits and '-'")]
    InvalidChar,
}

impl SubjectId {
    /// Creates a new `SubjectId` from a slug.
    ///
    /// # Errors
    ///
    /// Returns `SubjectIdError` if the slug is empty after trimming or
    /// contains characters outside the slug alphabet.
    pub fn new(raw: impl Into<String>) -> Result<Self, SubjectIdError> {
        let raw = raw.into().trim().to_owned();
        if raw.is_empty() {
            return Err(SubjectIdError::Empty);
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(SubjectIdError::InvalidChar);
        }
        Ok(Self(raw))
    }

    /// Returns the underlying slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Persistence key for a single topic: `{subject}_c{chapter}_t{topic}`.
///
/// Keys are derived from the position of a topic inside the fixed syllabus
/// table, which makes them stable across runs as long as the table itself is
/// stable. Reordering or inserting chapters/topics shifts indices and
/// silently orphans previously stored completion state.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TopicKey {
    subject: SubjectId,
    chapter: usize,
    topic: usize,
}

impl TopicKey {
    /// Creates a key for the topic at `(chapter, topic)` within a subject.
    #[must_use]
    pub fn new(subject: SubjectId, chapter: usize, topic: usize) -> Self {
        Self {
            subject,
            chapter,
            topic,
        }
    }

    #[must_use]
    pub fn subject(&self) -> &SubjectId {
        &self.subject
    }

    #[must_use]
    pub fn chapter(&self) -> usize {
        self.chapter
    }

    #[must_use]
    pub fn topic(&self) -> usize {
        self.topic
    }
}

impl fmt::Debug for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubjectId({})", self.0)
    }
}

impl fmt::Debug for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TopicKey({self})")
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TopicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_c{}_t{}", self.subject, self.chapter, self.topic)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing a key or id from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed {kind}")]
pub struct ParseKeyError {
    kind: &'static str,
}

impl FromStr for SubjectId {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubjectId::new(s).map_err(|_| ParseKeyError { kind: "subject id" })
    }
}

impl FromStr for TopicKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Slugs never contain '_', so the last "_t" and "_c" markers are
        // unambiguous separators.
        let malformed = ParseKeyError { kind: "topic key" };
        let (rest, topic) = s.rsplit_once("_t").ok_or(malformed.clone())?;
        let (subject, chapter) = rest.rsplit_once("_c").ok_or(malformed.clone())?;
        let chapter: usize = chapter.parse().map_err(|_| malformed.clone())?;
        let topic: usize = topic.parse().map_err(|_| malformed.clone())?;
        let subject = SubjectId::new(subject).map_err(|_| malformed)?;
        Ok(Self {
            subject,
            chapter,
            topic,
        })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
