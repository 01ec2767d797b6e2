//! Visibility filtering for the tracker page.
//!
//! Filters only decide what is shown. They never read or write completion
//! state, so searching cannot change what is persisted.

use crate::model::{Chapter, Subject, SubjectId, Topic};

//
// ─── SUBJECT DROPDOWN ──────────────────────────────────────────────────────────
//

/// Subject dropdown selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubjectFilter {
    #[default]
    All,
    Only(SubjectId),
}

impl SubjectFilter {
    #[must_use]
    pub fn admits(&self, id: &SubjectId) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Only(selected) => selected == id,
        }
    }
}

//
// ─── FREE-TEXT SEARCH ──────────────────────────────────────────────────────────
//

/// Free-text topic search. Empty (after trimming) matches everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicQuery {
    needle: String,
}

impl TopicQuery {
    /// Normalizes raw input: trimmed and lowercased for case-insensitive
    /// substring matching.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    #[must_use]
    pub fn matches(&self, label: &str) -> bool {
        self.needle.is_empty() || label.to_lowercase().contains(&self.needle)
    }
}

//
// ─── COMBINED FILTER ───────────────────────────────────────────────────────────
//

/// Dropdown and search combined into one visibility decision.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyllabusFilter {
    pub subject: SubjectFilter,
    pub query: TopicQuery,
}

impl SyllabusFilter {
    #[must_use]
    pub fn topic_visible(&self, subject_id: &SubjectId, topic: &Topic) -> bool {
        self.subject.admits(subject_id) && self.query.matches(topic.label())
    }

    /// A chapter stays visible while the query is empty even if it has no
    /// topics; with a query it needs at least one matching topic.
    #[must_use]
    pub fn chapter_visible(&self, subject_id: &SubjectId, chapter: &Chapter) -> bool {
        if !self.subject.admits(subject_id) {
            return false;
        }
        self.query.is_empty()
            || chapter.topics().iter().any(|t| self.query.matches(t.label()))
    }

    /// Subject cards collapse away once no topic under them matches.
    #[must_use]
    pub fn subject_visible(&self, subject: &Subject) -> bool {
        if !self.subject.admits(subject.id()) {
            return false;
        }
        self.query.is_empty()
            || subject
                .chapters()
                .iter()
                .any(|chapter| chapter.topics().iter().any(|t| self.query.matches(t.label())))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Syllabus;

    fn syllabus() -> Syllabus {
        let physics = Subject::new(
            SubjectId::new("physics").unwrap(),
            "Physics",
            vec![
                Chapter::new(
                    "Optics",
                    vec![
                        Topic::new("Reflection and refraction").unwrap(),
                        Topic::new("Diffraction & polarization").unwrap(),
                    ],
                )
                .unwrap(),
                Chapter::new("Placeholder", vec![]).unwrap(),
            ],
        )
        .unwrap();
        let math = Subject::new(
            SubjectId::new("math").unwrap(),
            "Mathematics",
            vec![Chapter::new(
                "Calculus",
                vec![Topic::new("Integrals & applications").unwrap()],
            )
            .unwrap()],
        )
        .unwrap();
        Syllabus::new(vec![physics, math]).unwrap()
    }

    fn id(raw: &str) -> SubjectId {
        SubjectId::new(raw).unwrap()
    }

    #[test]
    fn query_is_case_insensitive_and_trimmed() {
        let query = TopicQuery::new("  DIFFRACTION ");
        assert!(query.matches("Diffraction & polarization"));
        assert!(!query.matches("Integrals & applications"));
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = TopicQuery::new("   ");
        assert!(query.is_empty());
        assert!(query.matches("anything at all"));
    }

    #[test]
    fn subject_filter_admits_only_selection() {
        let filter = SubjectFilter::Only(id("math"));
        assert!(filter.admits(&id("math")));
        assert!(!filter.admits(&id("physics")));
        assert!(SubjectFilter::All.admits(&id("physics")));
    }

    #[test]
    fn dropdown_hides_other_subjects_without_a_query() {
        let syllabus = syllabus();
        let filter = SyllabusFilter {
            subject: SubjectFilter::Only(id("math")),
            query: TopicQuery::default(),
        };
        assert!(!filter.subject_visible(&syllabus.subjects()[0]));
        assert!(filter.subject_visible(&syllabus.subjects()[1]));
    }

    #[test]
    fn search_hides_subjects_with_no_matching_topic() {
        let syllabus = syllabus();
        let filter = SyllabusFilter {
            subject: SubjectFilter::All,
            query: TopicQuery::new("integrals"),
        };
        assert!(!filter.subject_visible(&syllabus.subjects()[0]));
        assert!(filter.subject_visible(&syllabus.subjects()[1]));
    }

    #[test]
    fn empty_chapter_visible_only_without_query() {
        let syllabus = syllabus();
        let physics = &syllabus.subjects()[0];
        let empty_chapter = &physics.chapters()[1];

        let no_query = SyllabusFilter::default();
        assert!(no_query.chapter_visible(physics.id(), empty_chapter));

        let with_query = SyllabusFilter {
            subject: SubjectFilter::All,
            query: TopicQuery::new("optics"),
        };
        assert!(!with_query.chapter_visible(physics.id(), empty_chapter));
    }

    #[test]
    fn topic_visibility_combines_dropdown_and_query() {
        let syllabus = syllabus();
        let physics = &syllabus.subjects()[0];
        let topic = &physics.chapters()[0].topics()[1];

        let filter = SyllabusFilter {
            subject: SubjectFilter::Only(id("physics")),
            query: TopicQuery::new("polarization"),
        };
        assert!(filter.topic_visible(physics.id(), topic));

        let filter = SyllabusFilter {
            subject: SubjectFilter::Only(id("math")),
            query: TopicQuery::new("polarization"),
        };
        assert!(!filter.topic_visible(physics.id(), topic));
    }
}
