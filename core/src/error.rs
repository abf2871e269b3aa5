use thiserror::Error;

/// Validation failures raised at construction time.
///
/// The display strings are part of the observable contract — callers
/// and tests match on them verbatim, so never reword a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RaceError {
    #[error("Name cannot be null.")]
    NullName,

    #[error("Name cannot be blank.")]
    BlankName,

    #[error("Speed cannot be negative.")]
    NegativeSpeed,

    #[error("Distance cannot be negative.")]
    NegativeDistance,

    #[error("Horses cannot be null.")]
    NullHorses,

    #[error("Horses cannot be empty.")]
    EmptyHorses,
}

pub type RaceResult<T> = Result<T, RaceError>;
