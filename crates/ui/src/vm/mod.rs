mod syllabus_vm;

pub use syllabus_vm::{ChapterVm, SubjectVm, TopicVm, map_subjects};
