use crate::convert::QuickError;
use crate::units::Category;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Select a category first")]
    NoCategory,
    #[error("'{unit}' is not a {category} unit")]
    UnitNotInCategory { unit: String, category: Category },
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Convert needs a category, a value, and both units")]
    ConvertDisabled,
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Missing argument for '{0}'")]
    MissingArgument(&'static str),
    #[error(transparent)]
    Quick(#[from] QuickError),
}
