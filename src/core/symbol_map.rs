//! 半角記号 -> 全角記号の対応表

use std::collections::HashMap;
use std::sync::LazyLock;

/// 半角記号 (30文字)
#[rustfmt::skip]
pub const HAN_SYMBOLS: [char; 30] = [
    '!', '#', '$', '%', '^', '&', '*', '(', ')', '_',
    '+', '=', '{', '}', '[', ']', ':', ';', '"', '\'',
    '<', '>', ',', '.', '?', '/', '\\', '|', '`', '~',
];

/// 全角記号 (30文字、HAN_SYMBOLSと同順)
///
/// `"` は左ダブルクォート「“」、`'` は右シングルクォート「’」に対応する。
/// 非対称だが元の対応表のまま維持する。
#[rustfmt::skip]
pub const ZEN_SYMBOLS: [char; 30] = [
    '！', '＃', '＄', '％', '＾', '＆', '＊', '（', '）', '＿',
    '＋', '＝', '｛', '｝', '［', '］', '：', '；', '“', '’',
    '＜', '＞', '，', '．', '？', '／', '＼', '｜', '｀', '～',
];

/// 半角記号 -> 全角記号の変換テーブル (プロセス起動時に一度だけ構築)
static SYMBOL_MAP: LazyLock<HashMap<char, char>> = LazyLock::new(|| {
    HAN_SYMBOLS.iter().copied().zip(ZEN_SYMBOLS).collect()
});

/// 半角記号1文字を全角記号に変換
/// 対応表にない文字は None 返却
pub fn to_zenkaku(c: char) -> Option<char> {
    SYMBOL_MAP.get(&c).copied()
}
