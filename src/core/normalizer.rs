//! 入力文字のサニタイズ対応
//! 特殊記号を半角から全角に変換する

use crate::core::symbol_map::to_zenkaku;

/// 文字列中の半角記号を全角記号に変換
/// 対応表にない文字(英数字、かな、漢字、全角記号など)はそのまま維持
pub fn normalize(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for c in input.chars() {
        match to_zenkaku(c) {
            Some(zen) => result.push(zen),
            None => result.push(c),
        }
    }

    result
}
