pub mod png_codec;

pub use png_codec::{decode, decode_bytes, encode, encode_bytes};
