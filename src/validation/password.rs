//! パスワードポリシーチェック

use crate::messages;

/// パスワードの最小文字数
const PASS_MIN_LENGTH: usize = 12;
/// パスワードの最大文字数
const PASS_MAX_LENGTH: usize = 16;

/// パスワードに使用可能な記号
const PASS_SYMBOLS: [char; 6] = ['.', '_', '!', '+', '^', '&'];

/// 使用可能文字かどうか (英字・数字・許可記号)
fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || PASS_SYMBOLS.contains(&c)
}

/// 形式チェック: 使用可能文字のみで12~16文字
/// 違反の場合はエラーメッセージを返却
pub(crate) fn check_shape(password: &str) -> Option<&'static str> {
    let len = password.chars().count();
    let shape_ok =
        (PASS_MIN_LENGTH..=PASS_MAX_LENGTH).contains(&len) && password.chars().all(is_allowed_char);
    (!shape_ok).then_some(messages::PASS_REGEX_MESSAGE)
}

/// 構成チェック: 小文字英字・大文字英字・半角数字・記号を各1文字以上含む
/// 違反メッセージを検出順に返却する (違反なしの場合は空)
pub(crate) fn check_composition(password: &str) -> Vec<&'static str> {
    let mut violations = Vec::new();

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        violations.push(messages::PASS_REGEX_NO_SMALL_ALF);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        violations.push(messages::PASS_REGEX_NO_BIG_ALF);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(messages::PASS_REGEX_NO_NUM);
    }
    if !password.chars().any(|c| PASS_SYMBOLS.contains(&c)) {
        violations.push(messages::PASS_REGEX_NO_SYMBOL);
    }

    violations
}

/// パスワードポリシーチェック
///
/// 違反メッセージを検出順に返却する (違反なしの場合は空):
/// 1. 形式 (使用可能文字のみで12~16文字)
/// 2. 小文字英字を含む
/// 3. 大文字英字を含む
/// 4. 半角数字を含む
/// 5. 記号(._!+^&)を含む
pub fn check_password(password: &str) -> Vec<&'static str> {
    let mut violations = Vec::new();
    violations.extend(check_shape(password));
    violations.extend(check_composition(password));
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        // 12桁、全要件充足
        assert!(check_password("aiueoaiue5!A").is_empty());
        // 16桁
        assert!(check_password("aiueoaiueo12.AB&").is_empty());
    }

    #[test]
    fn test_empty_password() {
        let violations = check_password("");
        assert_eq!(
            violations,
            vec![
                messages::PASS_REGEX_MESSAGE,
                messages::PASS_REGEX_NO_SMALL_ALF,
                messages::PASS_REGEX_NO_BIG_ALF,
                messages::PASS_REGEX_NO_NUM,
                messages::PASS_REGEX_NO_SYMBOL,
            ]
        );
    }

    #[test]
    fn test_too_short() {
        // 11桁 (要件自体は充足)
        let violations = check_password("aiueoaiu5!A");
        assert_eq!(violations, vec![messages::PASS_REGEX_MESSAGE]);
    }

    #[test]
    fn test_too_long() {
        // 17桁
        let violations = check_password("1234567890..AAaa!");
        assert_eq!(violations, vec![messages::PASS_REGEX_MESSAGE]);
    }

    #[test]
    fn test_disallowed_char() {
        // 使用不可記号 (@)
        let violations = check_password("aiueoaiue5@A");
        assert_eq!(
            violations,
            vec![messages::PASS_REGEX_MESSAGE, messages::PASS_REGEX_NO_SYMBOL]
        );
    }

    #[test]
    fn test_missing_lowercase() {
        let violations = check_password("AIUEOAIUE5!A");
        assert_eq!(violations, vec![messages::PASS_REGEX_NO_SMALL_ALF]);
    }

    #[test]
    fn test_missing_uppercase() {
        let violations = check_password("aiueoaiue5!a");
        assert_eq!(violations, vec![messages::PASS_REGEX_NO_BIG_ALF]);
    }

    #[test]
    fn test_missing_digit() {
        let violations = check_password("aiueoaiueo!A");
        assert_eq!(violations, vec![messages::PASS_REGEX_NO_NUM]);
    }

    #[test]
    fn test_missing_symbol() {
        let violations = check_password("aiueoaiue55A");
        assert_eq!(violations, vec![messages::PASS_REGEX_NO_SYMBOL]);
    }

    #[test]
    fn test_all_symbols_accepted() {
        for sym in PASS_SYMBOLS {
            let password = format!("aiueoaiue5A{}", sym);
            assert!(check_password(&password).is_empty(), "記号 {} で失敗", sym);
        }
    }
}
