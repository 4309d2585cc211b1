use crate::book::{Book, SearchResult, NO_AUTHOR};
use crate::provider;
use crate::provider::api::Request;
use crate::provider::error::{FetchError, ParseError};
use reqwest::{blocking, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnError;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Google Books 볼륨 검색 엔드포인트로 검색어가 바로 뒤에 붙는다.
pub const GOOGLE_BOOKS_ENDPOINT: &'static str = "https://www.googleapis.com/books/v1/volumes?q=";
/// 연결 타임아웃(밀리초)
pub const DEFAULT_CONNECT_TIMEOUT_MILLIS: u64 = 15_000;
/// 응답 읽기 타임아웃(밀리초)
pub const DEFAULT_READ_TIMEOUT_MILLIS: u64 = 10_000;

/// 응답의 최상위 구조
///
/// `totalItems`가 없거나 숫자가 아니면 0으로 취급한다.
/// 아이템은 하나씩 변환해야 실패한 위치를 알 수 있으므로 JSON 값 그대로 받는다.
#[serde_as]
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "totalItems", default)]
    #[serde_as(as = "DefaultOnError")]
    total_items: u32,
    #[serde(rename = "items", default)]
    items: Option<Vec<serde_json::Value>>,
}

/// 볼륨 검색 응답
#[derive(Debug, Serialize, Deserialize)]
pub struct VolumesResponse {
    #[serde(rename = "totalItems")]
    pub total_items: u32,
    #[serde(rename = "items", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
}

/// 검색된 볼륨 하나
#[derive(Debug, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "volumeInfo")]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VolumeInfo {
    /// 도서 제목 (필수)
    #[serde(rename = "title")]
    pub title: String,
    /// 저자 목록
    #[serde(rename = "authors", default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    /// 표지 이미지 링크
    #[serde(rename = "imageLinks", default, skip_serializing_if = "Option::is_none")]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ImageLinks {
    #[serde(rename = "smallThumbnail", default, skip_serializing_if = "Option::is_none")]
    pub small_thumbnail: Option<String>,
}

impl Item {
    fn into_book(self) -> Book {
        let info = self.volume_info;
        let thumbnail_url = info.image_links.and_then(|links| links.small_thumbnail);

        Book::with_authors(info.title, info.authors, thumbnail_url)
    }
}

impl From<&SearchResult> for VolumesResponse {
    fn from(result: &SearchResult) -> Self {
        let items = result.books().iter()
            .map(|book| {
                let authors = if book.author() == NO_AUTHOR {
                    None
                } else {
                    Some(vec![book.author().to_owned()])
                };
                let image_links = book.thumbnail_url().map(|url| ImageLinks {
                    small_thumbnail: Some(url.to_owned()),
                });

                Item {
                    volume_info: VolumeInfo {
                        title: book.title().to_owned(),
                        authors,
                        image_links,
                    },
                }
            })
            .collect();

        VolumesResponse {
            total_items: result.total_items(),
            items,
        }
    }
}

/// 볼륨 검색 응답 본문을 검색 결과로 변환한다.
///
/// # Description
/// - 본문이 비어있거나 JSON 객체가 아니면 [`ParseError::Malformed`]
/// - `totalItems`가 0이거나 없으면 빈 결과를 반환한다. 결과 없음은 에러가 아니다.
/// - 아이템 중 하나라도 `volumeInfo.title`이 없으면 전체 변환을 중단하고 [`ParseError::InvalidItem`]을 반환한다.
pub fn parse(body: &str) -> Result<SearchResult, ParseError> {
    if body.trim().is_empty() {
        error!("Problem parsing the book JSON results: empty body");
        return Err(ParseError::Malformed("empty body".to_string()));
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|err| {
            error!(error = %err, "Problem parsing the book JSON results");
            ParseError::Malformed(err.to_string())
        })?;
    if !value.is_object() {
        error!("Problem parsing the book JSON results: not an object");
        return Err(ParseError::Malformed("expected a JSON object".to_string()));
    }

    let envelope = serde_json::from_value::<Envelope>(value)
        .map_err(|err| {
            error!(error = %err, "Problem parsing the book JSON results");
            ParseError::Malformed(err.to_string())
        })?;

    if envelope.total_items == 0 {
        debug!("no books in response");
        return Ok(SearchResult::empty());
    }

    let items = envelope.items.unwrap_or_else(|| {
        warn!(total_items = envelope.total_items, "response has no items");
        vec![]
    });

    let books = items.into_iter()
        .enumerate()
        .map(|(index, raw)| {
            serde_json::from_value::<Item>(raw)
                .map(Item::into_book)
                .map_err(|err| {
                    error!(index, error = %err, "Problem parsing the book JSON item");
                    ParseError::InvalidItem { index, reason: err.to_string() }
                })
        })
        .collect::<Result<Vec<Book>, ParseError>>()?;

    Ok(SearchResult::new(envelope.total_items, books))
}

/// Google Books 검색 클라이언트
///
/// 요청마다 새 연결을 맺고 응답을 받은 뒤 연결을 반환한다. 호출 간에 공유하는 상태는 없다.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl Client {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MILLIS),
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MILLIS),
        }
    }

    pub fn with_timeouts(mut self, connect_timeout: Duration, read_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self.read_timeout = read_timeout;
        self
    }

    pub fn from_config(api: &crate::config::api::Api) -> Self {
        Self::new(api.base_url())
            .with_timeouts(api.connect_timeout(), api.read_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// 검색어와 시작 인덱스로 한 페이지를 조회한다.
    pub fn fetch(&self, query: &str, start_index: u32) -> Result<SearchResult, FetchError> {
        provider::api::Client::get_books(self, &Request::new(query, start_index))
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(GOOGLE_BOOKS_ENDPOINT)
    }
}

impl provider::api::Client for Client {
    fn get_books(&self, request: &Request) -> Result<SearchResult, FetchError> {
        let url = build_search_url(&self.base_url, request)?;
        debug!(url = %url, "requesting books");

        // blocking 클라이언트는 읽기 타임아웃을 따로 받지 않아 연결과 읽기 시간을 합쳐 전체 요청 시간을 제한한다.
        let client = blocking::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.connect_timeout + self.read_timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|err| FetchError::Network(format!("client build failed: {}", err)))?;

        let response = client.get(url)
            .send()
            .map_err(|err| {
                error!(query = request.query(), error = %err, "Problem retrieving the book JSON results");
                network_error(err)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(query = request.query(), status = status.as_u16(), "Error response code");
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let bytes = response.bytes()
            .map_err(|err| {
                error!(query = request.query(), error = %err, "Problem reading the book JSON results");
                network_error(err)
            })?;
        let body = String::from_utf8(bytes.to_vec())
            .map_err(|err| FetchError::InvalidResponse(ParseError::Malformed(err.to_string())))?;

        Ok(parse(&body)?)
    }
}

/// `base_url` 뒤에 인코딩한 검색어와 `&startIndex=`를 붙여 요청 URL을 만든다.
pub fn build_search_url(base_url: &str, request: &Request) -> Result<Url, FetchError> {
    let raw = format!(
        "{}{}&startIndex={}",
        base_url,
        urlencoding::encode(request.query()),
        request.start_index()
    );

    let url = Url::parse(&raw)
        .map_err(|err| {
            error!(url = %raw, error = %err, "Problem building the URL");
            FetchError::InvalidUrl(format!("{}: {}", raw, err))
        })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => {
            error!(url = %raw, scheme, "Problem building the URL");
            Err(FetchError::InvalidUrl(format!("{}: unsupported scheme", raw)))
        }
    }
}

/// 기본 설정으로 한 페이지를 조회한다.
pub fn fetch(base_url: &str, query: &str, start_index: u32) -> Result<SearchResult, FetchError> {
    Client::new(base_url).fetch(query, start_index)
}

fn network_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Network(format!("timed out: {}", err))
    } else {
        FetchError::Network(err.to_string())
    }
}
