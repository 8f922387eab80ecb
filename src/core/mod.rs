//! 半角記号 -> 全角記号のサニタイズ変換モジュール

mod symbol_map;
pub mod normalizer;

pub use normalizer::normalize;
pub use symbol_map::{to_zenkaku, HAN_SYMBOLS, ZEN_SYMBOLS};
