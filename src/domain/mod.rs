pub mod errors;
pub mod outcome;
pub mod value_objects;
