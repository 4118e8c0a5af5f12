//! Target label encoding.

pub mod label;

pub use self::label::BinaryLabelEncoder;
