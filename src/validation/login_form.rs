//! ログイン・サインアップフォームの入力チェック

use crate::config::Limits;
use crate::core::normalize;
use crate::messages;
use crate::validation::errors::ValidationErrors;
use crate::validation::password::{check_composition, check_shape};

/// ログインフォーム入力値 (画面から受領したままの値)
#[derive(Debug, Clone)]
pub struct SignInForm {
    pub user_name: String,
    pub password: String,
}

/// サインアップフォーム入力値
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub user_name: String,
    pub password: String,
    pub confirm_password: String,
}

/// バリデーション済みログイン情報 (trim適用後)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSignIn {
    pub user_name: String,
    pub password: String,
}

/// バリデーション済みサインアップ情報 (trim適用後、確認用パスワードは破棄)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSignUp {
    pub user_name: String,
    pub password: String,
}

/// ユーザー名チェック (必須・最大文字数)
fn check_user_name(user_name: &str, limits: &Limits, errors: &mut ValidationErrors) {
    if user_name.is_empty() {
        errors.push("userName", messages::REQUIRED);
    }
    if user_name.chars().count() > limits.name_max {
        errors.push("userName", messages::max_length(limits.name_max));
    }
}

impl SignInForm {
    /// 入力チェック (既定の上限値)
    pub fn validate(&self) -> Result<ValidatedSignIn, ValidationErrors> {
        self.validate_with(&Limits::default())
    }

    /// 入力チェック
    /// 各項目trim後、必須・最大文字数を検査する
    pub fn validate_with(&self, limits: &Limits) -> Result<ValidatedSignIn, ValidationErrors> {
        let user_name = self.user_name.trim();
        let password = self.password.trim();

        let mut errors = ValidationErrors::new();
        check_user_name(user_name, limits, &mut errors);
        if password.is_empty() {
            errors.push("password", messages::REQUIRED);
        }

        if errors.is_empty() {
            Ok(ValidatedSignIn {
                user_name: user_name.to_string(),
                password: password.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

impl ValidatedSignIn {
    /// 登録時と同様にユーザー名の半角記号を全角へ変換する
    pub fn sanitize(self) -> Self {
        Self {
            user_name: normalize(&self.user_name),
            password: self.password,
        }
    }
}

impl SignUpForm {
    /// 入力チェック (既定の上限値)
    pub fn validate(&self) -> Result<ValidatedSignUp, ValidationErrors> {
        self.validate_with(&Limits::default())
    }

    /// 入力チェック
    ///
    /// 項目単位チェック (宣言順) の後、パスワード構成チェックと
    /// 確認用パスワードの一致チェックを行う。エラーは検出順に積まれる。
    pub fn validate_with(&self, limits: &Limits) -> Result<ValidatedSignUp, ValidationErrors> {
        let user_name = self.user_name.trim();
        let password = self.password.trim();
        let confirm_password = self.confirm_password.trim();

        let mut errors = ValidationErrors::new();

        check_user_name(user_name, limits, &mut errors);
        if password.is_empty() {
            errors.push("password", messages::REQUIRED);
        }
        if let Some(message) = check_shape(password) {
            errors.push("password", message);
        }
        if confirm_password.is_empty() {
            errors.push("confirmPassword", messages::REQUIRED);
        }

        // パスワード構成チェック (小文字・大文字・数字・記号)
        for message in check_composition(password) {
            errors.push("password", message);
        }

        // 確認用パスワードとの一致チェック
        if password != confirm_password {
            errors.push("confirmPassword", messages::PASS_MISMATCH);
        }

        if errors.is_empty() {
            Ok(ValidatedSignUp {
                user_name: user_name.to_string(),
                password: password.to_string(),
            })
        } else {
            Err(errors)
        }
    }
}

impl ValidatedSignUp {
    /// 登録時と同様にユーザー名の半角記号を全角へ変換する
    pub fn sanitize(self) -> Self {
        Self {
            user_name: normalize(&self.user_name),
            password: self.password,
        }
    }
}
