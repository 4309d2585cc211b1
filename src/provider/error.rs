use std::fmt;
use std::fmt::Formatter;

/// 응답 본문을 도서 목록으로 변환하는 중 발생한 에러
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// 본문이 비어있거나 JSON 객체가 아님
    Malformed(String),
    /// `items` 배열의 특정 아이템을 도서로 변환할 수 없음 (제목 누락 등)
    InvalidItem { index: usize, reason: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Malformed(reason) => write!(f, "Malformed response body: {}", reason),
            ParseError::InvalidItem { index, reason } => write!(f, "Invalid item at {}: {}", index, reason),
        }
    }
}

impl std::error::Error for ParseError {}

/// 도서 검색 요청 중 발생한 에러
///
/// 모든 에러는 해당 요청에 한해 최종적이며 재시도 하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    InvalidUrl(String),
    HttpStatus(u16),
    Network(String),
    InvalidResponse(ParseError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::InvalidUrl(url) => write!(f, "Invalid request url: {}", url),
            FetchError::HttpStatus(code) => write!(f, "Unexpected HTTP status: {}", code),
            FetchError::Network(cause) => write!(f, "Network failure: {}", cause),
            FetchError::InvalidResponse(err) => write!(f, "Invalid response, {}", err),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::InvalidResponse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for FetchError {
    fn from(err: ParseError) -> Self {
        FetchError::InvalidResponse(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    InvalidParameter(String),         // 유효하지 않은 매개변수
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidParameter(message) => write!(f, "Invalid parameter: {}", message),
        }
    }
}

impl std::error::Error for RequestError {}
