#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Cannot count pairs of an empty sequence: no maximum is defined")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, Error>;
