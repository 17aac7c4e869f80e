pub mod field;

pub use field::FieldState;
