pub mod field;
pub mod form_record;
pub mod submitted_record;

pub use field::*;
pub use form_record::*;
pub use submitted_record::*;
