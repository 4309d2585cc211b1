use serde::Deserialize;
use std::time::Duration;

/// 도서 검색 API 설정
#[derive(Debug, Clone, Deserialize)]
pub struct Api {
    /// 검색어가 바로 뒤에 붙는 요청 URL (예: `https://www.googleapis.com/books/v1/volumes?q=`)
    base_url: String,
    connect_timeout_ms: u64,
    read_timeout_ms: u64,
}

impl Api {
    pub fn new(base_url: String, connect_timeout_ms: u64, read_timeout_ms: u64) -> Self {
        Self {
            base_url,
            connect_timeout_ms,
            read_timeout_ms,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn set_base_url(&mut self, base_url: String) {
        self.base_url = base_url;
    }
}
