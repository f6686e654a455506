//! Pipeline trait.
use crate::error::Error;

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// any custom pipeline that needs a return type can use the
/// trait aswell.
pub trait Pipeline<T> {
    fn version() -> &'static str
    where
        Self: Sized;
    fn run(&self) -> Result<T, Error>;
}
