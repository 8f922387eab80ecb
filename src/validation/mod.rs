//! フォーム入力バリデーションモジュール
//!
//! 元のフロント側入力チェックをサーバー側でも流用する設計に合わせ、
//! 各フォームの検証を画面非依存の純粋な関数として提供します。

mod content_form;
mod errors;
mod login_form;
mod password;
mod upload;

pub use content_form::{ContentForm, ContentType, ValidatedContent};
pub use errors::{FieldError, ValidationErrors};
pub use login_form::{SignInForm, SignUpForm, ValidatedSignIn, ValidatedSignUp};
pub use password::check_password;
pub use upload::{validate_upload, UploadError, UploadFile};
