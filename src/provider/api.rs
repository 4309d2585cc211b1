use crate::book::SearchResult;
use crate::pagination::PAGE_SIZE;
use crate::provider::error::{FetchError, RequestError};

pub mod google;

/// 도서 검색 요청
///
/// 검색어와 결과의 시작 인덱스로 구성된다. 페이지 크기는 [`PAGE_SIZE`]로 고정이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    query: String,
    start_index: u32,
}

impl Request {
    pub fn new<S: Into<String>>(query: S, start_index: u32) -> Self {
        Self {
            query: query.into(),
            start_index,
        }
    }

    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn start_index(&self) -> u32 {
        self.start_index
    }

    pub fn size(&self) -> u32 {
        PAGE_SIZE
    }
}

#[derive(Default)]
pub struct RequestBuilder {
    query: Option<String>,
    start_index: Option<u32>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        RequestBuilder::default()
    }

    pub fn query<S: Into<String>>(mut self, query: S) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn start_index(mut self, start_index: u32) -> Self {
        self.start_index = Some(start_index);
        self
    }

    /// 검색어는 필수이며 빈 문자열은 허용된다. 시작 인덱스는 설정하지 않으면 0이다.
    pub fn build(self) -> Result<Request, RequestError> {
        let query = self.query.ok_or_else(||
            RequestError::InvalidParameter("query is required".to_string()))?;

        Ok(Request {
            query,
            start_index: self.start_index.unwrap_or(0),
        })
    }
}

/// 도서 검색 API 클라이언트
pub trait Client {
    fn get_books(&self, request: &Request) -> Result<SearchResult, FetchError>;
}
