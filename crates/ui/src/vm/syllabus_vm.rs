use tracker_core::filter::SyllabusFilter;
use tracker_core::model::{ProgressSet, ProgressSummary, Syllabus};

/// One checkbox row. `key` is the stable persistence key, reused as the DOM
/// element id so labels can target their checkbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicVm {
    pub key: String,
    pub label: String,
    pub completed: bool,
    pub visible: bool,
}

/// One collapsible chapter, with its done/total badge counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterVm {
    pub title: String,
    pub done: usize,
    pub total: usize,
    pub visible: bool,
    pub topics: Vec<TopicVm>,
}

/// One subject card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectVm {
    pub id: String,
    pub title: String,
    pub visible: bool,
    pub chapters: Vec<ChapterVm>,
}

/// Maps the full syllabus into render-ready rows.
///
/// Visibility is carried as flags rather than by dropping rows, so toggling a
/// filter never loses checkbox state held in the DOM tree.
#[must_use]
pub fn map_subjects(
    syllabus: &Syllabus,
    progress: &ProgressSet,
    filter: &SyllabusFilter,
) -> Vec<SubjectVm> {
    syllabus
        .subjects()
        .iter()
        .map(|subject| {
            let chapters = subject
                .chapters()
                .iter()
                .enumerate()
                .map(|(ci, chapter)| {
                    let summary =
                        ProgressSummary::for_chapter(subject.id(), ci, chapter, progress);
                    let topics = chapter
                        .topics()
                        .iter()
                        .enumerate()
                        .map(|(ti, topic)| {
                            let key = subject.topic_key(ci, ti);
                            TopicVm {
                                completed: progress.is_completed(&key),
                                visible: filter.topic_visible(subject.id(), topic),
                                key: key.to_string(),
                                label: topic.label().to_owned(),
                            }
                        })
                        .collect();
                    ChapterVm {
                        title: chapter.title().to_owned(),
                        done: summary.done,
                        total: summary.total,
                        visible: filter.chapter_visible(subject.id(), chapter),
                        topics,
                    }
                })
                .collect();
            SubjectVm {
                id: subject.id().to_string(),
                title: subject.title().to_owned(),
                visible: filter.subject_visible(subject),
                chapters,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::catalog;
    use tracker_core::filter::{SubjectFilter, TopicQuery};
    use tracker_core::model::SubjectId;

    #[test]
    fn maps_every_subject_with_stable_keys() {
        let syllabus = catalog::builtin();
        let subjects = map_subjects(&syllabus, &ProgressSet::new(), &SyllabusFilter::default());

        assert_eq!(subjects.len(), 3);
        assert_eq!(subjects[0].id, "physics");
        assert_eq!(subjects[0].chapters[0].topics[0].key, "physics_c0_t0");
        assert!(subjects.iter().all(|s| s.visible));
    }

    #[test]
    fn completed_flags_follow_progress() {
        let syllabus = catalog::builtin();
        let mut progress = ProgressSet::new();
        progress.set_completed("physics_c0_t1".parse().unwrap(), true);

        let subjects = map_subjects(&syllabus, &progress, &SyllabusFilter::default());
        let chapter = &subjects[0].chapters[0];
        assert!(!chapter.topics[0].completed);
        assert!(chapter.topics[1].completed);
        assert_eq!(chapter.done, 1);
        assert_eq!(chapter.total, 3);
    }

    #[test]
    fn search_marks_non_matching_rows_invisible_without_dropping_them() {
        let syllabus = catalog::builtin();
        let filter = SyllabusFilter {
            subject: SubjectFilter::All,
            query: TopicQuery::new("bayes"),
        };
        let subjects = map_subjects(&syllabus, &ProgressSet::new(), &filter);

        // Every row is still present.
        assert_eq!(subjects.len(), 3);
        // Only math has a matching topic.
        assert!(!subjects[0].visible);
        assert!(!subjects[1].visible);
        assert!(subjects[2].visible);

        let probability = subjects[2]
            .chapters
            .iter()
            .find(|c| c.title.starts_with("Probability"))
            .unwrap();
        assert!(probability.visible);
        let visible: Vec<&str> = probability
            .topics
            .iter()
            .filter(|t| t.visible)
            .map(|t| t.label.as_str())
            .collect();
        assert_eq!(visible, vec!["Bayes theorem"]);
    }

    #[test]
    fn dropdown_hides_other_subject_cards() {
        let syllabus = catalog::builtin();
        let filter = SyllabusFilter {
            subject: SubjectFilter::Only(SubjectId::new("chemistry").unwrap()),
            query: TopicQuery::default(),
        };
        let subjects = map_subjects(&syllabus, &ProgressSet::new(), &filter);
        assert!(!subjects[0].visible);
        assert!(subjects[1].visible);
        assert!(!subjects[2].visible);
    }
}
