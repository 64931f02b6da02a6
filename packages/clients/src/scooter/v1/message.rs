//! Fixed error messages reported by the service.
//!
//! The service reports these in Russian; the English rendering is given on
//! each constant.

/// "Insufficient data to create an account" (create, 400).
pub const CREATE_INSUFFICIENT_DATA: &str = "Недостаточно данных для создания учетной записи";

/// "This login is already in use. Try another one." (create, 409).
pub const LOGIN_ALREADY_IN_USE: &str = "Этот логин уже используется. Попробуйте другой.";

/// "Insufficient data to log in" (login, 400).
pub const LOGIN_INSUFFICIENT_DATA: &str = "Недостаточно данных для входа";

/// "Account not found" (login, 404).
pub const ACCOUNT_NOT_FOUND: &str = "Учетная запись не найдена";

/// "There is no courier with this id." (delete, 404).
pub const COURIER_ID_NOT_FOUND: &str = "Курьера с таким id нет.";
