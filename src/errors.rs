use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("server responded with {status}: {body}")]
    Server { status: StatusCode, body: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn server(status: StatusCode, body: impl Into<String>) -> Self {
        Self::Server {
            status,
            body: body.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err)
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Form problems reported to the user before any request is sent.
/// The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Сначала выберите блюдо через поиск!")]
    NoDishSelected,

    #[error("Введите корректный вес!")]
    InvalidWeight,

    #[error("Заполните название и калорийность!")]
    MissingNameOrCalories,

    #[error("Некорректное значение в поле «{0}»!")]
    InvalidMacro(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_text() {
        assert_eq!(
            ValidationError::NoDishSelected.to_string(),
            "Сначала выберите блюдо через поиск!"
        );
        assert_eq!(
            ValidationError::InvalidMacro("Жиры").to_string(),
            "Некорректное значение в поле «Жиры»!"
        );
    }

    #[test]
    fn server_error_keeps_status() {
        let err = ApiError::server(StatusCode::BAD_REQUEST, "bad dish");
        assert!(matches!(err, ApiError::Server { status, .. } if status == StatusCode::BAD_REQUEST));
        assert_eq!(err.to_string(), "server responded with 400 Bad Request: bad dish");
    }
}
