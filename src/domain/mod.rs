//! Arithmetic methods and the numeric rules they share

pub mod methods;
pub mod numeric;
