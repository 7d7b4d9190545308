//! Text to tokens, tokens to typed field values.

pub mod decoder;
pub mod tokenizer;

pub use decoder::{decode_field, DecodeError, DecodedField, FieldDecoder};
pub use tokenizer::Tokenizer;
