use std::collections::HashSet;

use crate::model::ids::{SubjectId, TopicKey};
use crate::model::syllabus::{Chapter, Subject, Syllabus};

//
// ─── PROGRESS SET ──────────────────────────────────────────────────────────────
//

/// In-memory view of which topics are completed.
///
/// This is derived state: the set mirrors whatever the progress repository
/// holds and is rebuilt from it on load. Filtering and searching never touch
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressSet {
    completed: HashSet<TopicKey>,
}

impl ProgressSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from completed keys, e.g. rows read from storage.
    #[must_use]
    pub fn from_keys(keys: impl IntoIterator<Item = TopicKey>) -> Self {
        Self {
            completed: keys.into_iter().collect(),
        }
    }

    /// Marks one topic complete or incomplete.
    pub fn set_completed(&mut self, key: TopicKey, completed: bool) {
        if completed {
            self.completed.insert(key);
        } else {
            self.completed.remove(&key);
        }
    }

    #[must_use]
    pub fn is_completed(&self, key: &TopicKey) -> bool {
        self.completed.contains(key)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Drops keys that no longer address a topic in the syllabus.
    ///
    /// Orphans appear when the fixed table is edited; they stay harmless in
    /// storage but should not count toward any summary.
    pub fn retain_known(&mut self, syllabus: &Syllabus) {
        self.completed.retain(|key| syllabus.contains_key(key));
    }
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// Done/total counts with a rounded percentage for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub done: usize,
    pub total: usize,
    pub percent: u8,
}

impl ProgressSummary {
    /// Builds a summary from raw counts.
    ///
    /// The percentage is rounded half-up; an empty scope reads as 0% done.
    #[must_use]
    pub fn from_counts(done: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            u8::try_from((done * 100 + total / 2) / total).unwrap_or(100)
        };
        Self {
            done,
            total,
            percent,
        }
    }

    /// Summary over every topic in the syllabus.
    ///
    /// Only keys the syllabus still references are counted, so orphaned
    /// stored state cannot push the percentage past 100.
    #[must_use]
    pub fn overall(syllabus: &Syllabus, progress: &ProgressSet) -> Self {
        let total = syllabus.topic_count();
        let done = syllabus
            .topic_keys()
            .filter(|(key, _)| progress.is_completed(key))
            .count();
        Self::from_counts(done, total)
    }

    /// Summary over one subject.
    #[must_use]
    pub fn for_subject(subject: &Subject, progress: &ProgressSet) -> Self {
        let mut done = 0;
        let mut total = 0;
        for (ci, chapter) in subject.chapters().iter().enumerate() {
            total += chapter.topics().len();
            done += completed_in_chapter(subject.id(), ci, chapter, progress);
        }
        Self::from_counts(done, total)
    }

    /// Summary over one chapter, addressed by its position within a subject.
    #[must_use]
    pub fn for_chapter(
        subject_id: &SubjectId,
        chapter_index: usize,
        chapter: &Chapter,
        progress: &ProgressSet,
    ) -> Self {
        let done = completed_in_chapter(subject_id, chapter_index, chapter, progress);
        Self::from_counts(done, chapter.topics().len())
    }
}

fn completed_in_chapter(
    subject_id: &SubjectId,
    chapter_index: usize,
    chapter: &Chapter,
    progress: &ProgressSet,
) -> usize {
    (0..chapter.topics().len())
        .filter(|ti| {
            progress.is_completed(&TopicKey::new(subject_id.clone(), chapter_index, *ti))
        })
        .count()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
