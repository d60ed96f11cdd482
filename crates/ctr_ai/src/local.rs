use ctr_core::error::{codes, AppError};

const LOCAL_ORIGIN: &str = "http://127.0.0.1";

/// Normalize `base_url` and reject anything that is not `http://127.0.0.1[:port]`.
///
/// Complaint text never leaves the machine, so every HTTP adapter goes through
/// this check. A trailing slash is trimmed; paths, userinfo and other hosts are
/// refused.
pub fn require_local_base_url(service: &str, base_url: &str) -> Result<String, AppError> {
    let base_url = base_url.trim().trim_end_matches('/').to_string();

    let ok = match base_url.strip_prefix(LOCAL_ORIGIN) {
        Some("") => true,
        Some(rest) => match rest.strip_prefix(':') {
            Some(port) => {
                !port.is_empty()
                    && port.bytes().all(|b| b.is_ascii_digit())
                    && matches!(port.parse::<u16>(), Ok(p) if p != 0)
            }
            None => false,
        },
        None => false,
    };

    if !ok {
        return Err(AppError::new(
            codes::REMOTE_NOT_ALLOWED,
            format!("{service} base URL must be localhost (127.0.0.1)"),
        )
        .with_details(format!("base_url={base_url}")));
    }

    Ok(base_url)
}
