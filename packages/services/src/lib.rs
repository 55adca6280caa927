pub mod form;
pub mod history;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use form::*;
pub use history::*;
pub use validation::*;
