use std::fmt;
use thiserror::Error;

/// Worauf sich ein ungültiger Index bezieht.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexUnit {
    /// Index in die flache Punktliste
    Point,
    /// Index eines Segments
    Segment,
}

impl fmt::Display for IndexUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexUnit::Point => f.write_str("Punkt"),
            IndexUnit::Segment => f.write_str("Segment"),
        }
    }
}

/// Fehler der Kurven-Operationen. Ein fehlgeschlagener Aufruf verändert die Kurve nicht.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CurveError {
    #[error("{unit}-Index {index} liegt außerhalb von 0..{len}")]
    IndexOutOfRange {
        unit: IndexUnit,
        index: usize,
        len: usize,
    },

    #[error("ungültiges Argument: {0}")]
    InvalidArgument(String),
}

impl CurveError {
    pub(crate) fn point_index(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            unit: IndexUnit::Point,
            index,
            len,
        }
    }

    pub(crate) fn segment_index(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            unit: IndexUnit::Segment,
            index,
            len,
        }
    }
}

pub type CurveResult<T> = Result<T, CurveError>;
