pub mod config;
pub mod core;
pub mod messages;
pub mod validation;

pub use config::{load_limits, Limits};
pub use core::normalize;
pub use validation::{
    check_password, validate_upload, ContentForm, SignInForm, SignUpForm, ValidationErrors,
};
