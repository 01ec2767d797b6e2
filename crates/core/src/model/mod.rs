mod ids;
mod progress;
mod syllabus;
mod theme;

pub use ids::{ParseKeyError, SubjectId, SubjectIdError, TopicKey};
pub use progress::{ProgressSet, ProgressSummary};
pub use syllabus::{Chapter, Subject, Syllabus, SyllabusError, Topic};
pub use theme::ThemePreference;
