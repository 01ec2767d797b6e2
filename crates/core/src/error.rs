use thiserror::Error;

use crate::model::{SubjectIdError, SyllabusError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    SubjectId(#[from] SubjectIdError),
    #[error(transparent)]
    Syllabus(#[from] SyllabusError),
}
