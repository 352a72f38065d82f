//! Pure validation rules for a prompt submission.
//!
//! Checks run in a fixed order and the first failure wins; a failed
//! validation never touches the store.

use crate::errors::{AppError, AppResult};

/// True when the string is non-empty and every character is an ASCII
/// decimal digit. Codes and passwords made of digits only are rejected so
/// students cannot confuse them with numeric quiz answers.
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Validate one submission against the codes already present in the
/// target sheet. Order matters:
///   1. empty payload        → EmptyPrompt
///   2. empty code           → MissingCode
///   3. digits-only code     → NumericCode
///   4. code already taken   → DuplicateCode
///   5. digits-only password → NumericPassword (empty password is fine)
pub fn validate_submission(
    code: &str,
    payload: &str,
    password: &str,
    existing_codes: &[String],
) -> AppResult<()> {
    if payload.trim().is_empty() {
        return Err(AppError::EmptyPrompt);
    }

    let code = code.trim();
    if code.is_empty() {
        return Err(AppError::MissingCode);
    }
    if is_all_digits(code) {
        return Err(AppError::NumericCode(code.to_string()));
    }
    if existing_codes.iter().any(|c| c == code) {
        return Err(AppError::DuplicateCode(code.to_string()));
    }

    if !password.is_empty() && is_all_digits(password) {
        return Err(AppError::NumericPassword);
    }

    Ok(())
}
