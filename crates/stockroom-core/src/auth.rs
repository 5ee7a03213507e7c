//! Login screen message helpers.

/// Shown when the login request never got an answer.
pub const SERVER_UNREACHABLE_MESSAGE: &str = "Không kết nối được tới server";

/// Shown for a 401 from `/api/auth/login`.
pub const BAD_CREDENTIALS_MESSAGE: &str = "tên đăng nhập hoặc mật khẩu không đúng";

/// Shown once on the login screen after a successful registration.
pub const REGISTER_SUCCESS_MESSAGE: &str = "Đăng kí thành công. Vui lòng đăng nhập.";

/// Error text the transport layer uses for HTTP 401.
pub const UNAUTHORIZED: &str = "Unauthorized";

/// Turns a login failure into the message shown under the form.
///
/// `None` means the request failed without any message.
///
/// ```rust
/// use stockroom_core::auth::parse_login_error;
///
/// assert_eq!(parse_login_error(Some("Unauthorized")), "tên đăng nhập hoặc mật khẩu không đúng");
/// assert_eq!(parse_login_error(None), "Không kết nối được tới server");
/// ```
pub fn parse_login_error(error: Option<&str>) -> String {
    match error {
        None | Some("") => SERVER_UNREACHABLE_MESSAGE.to_string(),
        Some(UNAUTHORIZED) => BAD_CREDENTIALS_MESSAGE.to_string(),
        Some(message) => message.to_string(),
    }
}

/// Takes the one-shot "registered" flag, returning the notice if it was set.
pub fn consume_register_success(flag: &mut bool) -> Option<&'static str> {
    if std::mem::take(flag) {
        Some(REGISTER_SUCCESS_MESSAGE)
    } else {
        None
    }
}
