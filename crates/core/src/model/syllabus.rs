use thiserror::Error;

use crate::model::ids::{SubjectId, TopicKey};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SyllabusError {
    #[error("subject title cannot be empty")]
    EmptySubjectTitle,

    #[error("chapter title cannot be empty")]
    EmptyChapterTitle,

    #[error("topic label cannot be empty")]
    EmptyTopicLabel,

    #[error("duplicate subject id: {0}")]
    DuplicateSubjectId(SubjectId),
}

//
// ─── TOPIC ─────────────────────────────────────────────────────────────────────
//

/// A single study item. Completion is tracked against its [`TopicKey`],
/// never stored on the topic itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    label: String,
}

impl Topic {
    /// Creates a topic with a display label.
    ///
    /// # Errors
    ///
    /// Returns `SyllabusError::EmptyTopicLabel` if the label is empty or
    /// whitespace-only.
    pub fn new(label: impl Into<String>) -> Result<Self, SyllabusError> {
        let label = label.into().trim().to_owned();
        if label.is_empty() {
            return Err(SyllabusError::EmptyTopicLabel);
        }
        Ok(Self { label })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

//
// ─── CHAPTER ───────────────────────────────────────────────────────────────────
//

/// An ordered group of topics under one heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    title: String,
    topics: Vec<Topic>,
}

impl Chapter {
    /// Creates a chapter. An empty topic list is allowed.
    ///
    /// # Errors
    ///
    /// Returns `SyllabusError::EmptyChapterTitle` if the title is empty or
    /// whitespace-only.
    pub fn new(title: impl Into<String>, topics: Vec<Topic>) -> Result<Self, SyllabusError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(SyllabusError::EmptyChapterTitle);
        }
        Ok(Self { title, topics })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }
}

//
// ─── SUBJECT ───────────────────────────────────────────────────────────────────
//

/// A subject card: stable id, display title and ordered chapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    id: SubjectId,
    title: String,
    chapters: Vec<Chapter>,
}

impl Subject {
    /// Creates a subject. An empty chapter list is allowed.
    ///
    /// # Errors
    ///
    /// Returns `SyllabusError::EmptySubjectTitle` if the title is empty or
    /// whitespace-only.
    pub fn new(
        id: SubjectId,
        title: impl Into<String>,
        chapters: Vec<Chapter>,
    ) -> Result<Self, SyllabusError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(SyllabusError::EmptySubjectTitle);
        }
        Ok(Self {
            id,
            title,
            chapters,
        })
    }

    #[must_use]
    pub fn id(&self) -> &SubjectId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Key for the topic at `(chapter_index, topic_index)` within this subject.
    #[must_use]
    pub fn topic_key(&self, chapter_index: usize, topic_index: usize) -> TopicKey {
        TopicKey::new(self.id.clone(), chapter_index, topic_index)
    }
}

//
// ─── SYLLABUS ──────────────────────────────────────────────────────────────────
//

/// The fixed subjects → chapters → topics hierarchy.
///
/// Order matters: topic keys are positional, so the syllabus must be treated
/// as append-only once completion state has been stored against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllabus {
    subjects: Vec<Subject>,
}

impl Syllabus {
    /// Creates a syllabus from an ordered subject list.
    ///
    /// # Errors
    ///
    /// Returns `SyllabusError::DuplicateSubjectId` if two subjects share an id.
    pub fn new(subjects: Vec<Subject>) -> Result<Self, SyllabusError> {
        for (i, subject) in subjects.iter().enumerate() {
            if subjects[..i].iter().any(|s| s.id() == subject.id()) {
                return Err(SyllabusError::DuplicateSubjectId(subject.id().clone()));
            }
        }
        Ok(Self { subjects })
    }

    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    #[must_use]
    pub fn subject(&self, id: &SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id() == id)
    }

    /// Total number of topics across all subjects.
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.subjects
            .iter()
            .flat_map(Subject::chapters)
            .map(|c| c.topics().len())
            .sum()
    }

    /// Iterates every topic together with its persistence key, in table order.
    pub fn topic_keys(&self) -> impl Iterator<Item = (TopicKey, &Topic)> + '_ {
        self.subjects.iter().flat_map(|subject| {
            subject.chapters().iter().enumerate().flat_map(move |(ci, chapter)| {
                chapter
                    .topics()
                    .iter()
                    .enumerate()
                    .map(move |(ti, topic)| (subject.topic_key(ci, ti), topic))
            })
        })
    }

    /// Returns true if the key addresses a topic present in this syllabus.
    #[must_use]
    pub fn contains_key(&self, key: &TopicKey) -> bool {
        self.subject(key.subject())
            .and_then(|subject| subject.chapters().get(key.chapter()))
            .is_some_and(|chapter| key.topic() < chapter.topics().len())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
