use crate::book::SearchResult;
use crate::pagination::Cursor;
use crate::provider::api::{Client, Request};
use crate::provider::error::FetchError;
use std::fmt;
use std::fmt::Formatter;
use tracing::{debug, info, warn};

/// 사용자의 검색 화면 조작
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Search(String),
    Next,
    Previous,
}

/// 페이지 이동이 거절된 이유
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    NoActiveSearch,
    NoPreviousPage,
    NoNextPage,
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::NoActiveSearch => write!(f, "No active search"),
            NavigationError::NoPreviousPage => write!(f, "No previous page"),
            NavigationError::NoNextPage => write!(f, "No next page"),
        }
    }
}

impl std::error::Error for NavigationError {}

/// 발행된 조회 한 건
///
/// 세션은 가장 마지막에 발행한 티켓의 결과만 화면에 반영한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    request: Request,
    cursor: Cursor,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

/// 조회 결과를 세션에 반영한 결과
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// 결과가 현재 페이지로 교체됨
    Displayed,
    /// 이후에 발행된 티켓이 있어 결과를 버림
    Stale,
    /// 조회 실패, 현재 페이지는 비워진다
    Failed(FetchError),
}

/// 하나의 검색 화면 상태
///
/// 검색어, 요청한 커서, 마지막으로 표시한 결과를 가진다.
/// 새 검색이나 페이지 이동은 이전에 진행 중이던 조회를 무효화한다.
#[derive(Debug, Default)]
pub struct SearchSession {
    query: Option<String>,
    cursor: Cursor,
    total_items: u32,
    current: Option<SearchResult>,
    issued: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        SearchSession::default()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// 가장 최근에 요청한 페이지의 커서
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// 마지막으로 성공한 조회의 전체 결과 수
    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    /// 현재 표시 중인 결과. 조회 전이거나 마지막 조회가 실패했다면 `None`
    pub fn current(&self) -> Option<&SearchResult> {
        self.current.as_ref()
    }

    pub fn navigate(&mut self, navigation: Navigation) -> Result<Ticket, NavigationError> {
        match navigation {
            Navigation::Search(input) => Ok(self.search(&input)),
            Navigation::Next => self.next_page(),
            Navigation::Previous => self.previous_page(),
        }
    }

    /// 입력값의 앞뒤 공백을 제거하고 첫 페이지부터 새로 검색한다.
    pub fn search(&mut self, input: &str) -> Ticket {
        self.search_at(input, Cursor::first())
    }

    /// 지정한 페이지부터 새로 검색한다.
    pub fn search_at(&mut self, input: &str, cursor: Cursor) -> Ticket {
        let query = input.trim().to_owned();
        info!(query = query.as_str(), start_index = cursor.start_index(), "new search");

        self.query = Some(query);
        self.total_items = 0;
        self.issue(cursor)
    }

    pub fn next_page(&mut self) -> Result<Ticket, NavigationError> {
        if self.query.is_none() {
            return Err(NavigationError::NoActiveSearch);
        }

        let next = self.cursor.next(self.total_items)
            .ok_or(NavigationError::NoNextPage)?;
        Ok(self.issue(next))
    }

    pub fn previous_page(&mut self) -> Result<Ticket, NavigationError> {
        if self.query.is_none() {
            return Err(NavigationError::NoActiveSearch);
        }

        let previous = self.cursor.previous()
            .ok_or(NavigationError::NoPreviousPage)?;
        Ok(self.issue(previous))
    }

    /// 조회 결과를 반영한다. 마지막으로 발행된 티켓이 아니면 결과를 버린다.
    pub fn complete(&mut self, ticket: Ticket, result: Result<SearchResult, FetchError>) -> Completion {
        if ticket.generation != self.issued {
            debug!(generation = ticket.generation, latest = self.issued, "discarding stale result");
            return Completion::Stale;
        }

        match result {
            Ok(result) => {
                self.total_items = result.total_items();
                self.current = Some(result);
                Completion::Displayed
            }
            Err(err) => {
                warn!(error = %err, "search failed");
                self.current = None;
                Completion::Failed(err)
            }
        }
    }

    /// 티켓의 요청을 현재 스레드에서 조회하고 결과를 반영한다.
    pub fn run<C: Client + ?Sized>(&mut self, client: &C, ticket: Ticket) -> Completion {
        let result = client.get_books(ticket.request());
        self.complete(ticket, result)
    }

    /// 현재 표시 중인 결과 범위 문구. 표시할 도서가 없으면 `None`
    pub fn range_label(&self) -> Option<String> {
        self.current.as_ref()
            .filter(|result| !result.is_empty())
            .map(|result| self.cursor.range_label(result.total_items()))
    }

    fn issue(&mut self, cursor: Cursor) -> Ticket {
        self.issued += 1;
        self.cursor = cursor;

        Ticket {
            generation: self.issued,
            request: Request::new(self.query.clone().unwrap_or_default(), cursor.start_index()),
            cursor,
        }
    }
}
