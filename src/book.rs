use serde::Serialize;

/// 저자 정보가 없는 도서에 사용하는 기본 저자명
pub const NO_AUTHOR: &str = "No author";

/// 검색 결과로 표시되는 도서 정보
///
/// 응답의 아이템 하나에서 생성되며 생성 이후에는 변경되지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    title: String,
    author: String,
    thumbnail_url: Option<String>,
}

impl Book {
    pub fn new(title: String, author: String, thumbnail_url: Option<String>) -> Self {
        Self {
            title,
            author,
            thumbnail_url,
        }
    }

    /// 저자 목록을 `", "`로 이어 붙여 도서를 생성한다.
    /// 저자 목록이 없으면 [`NO_AUTHOR`]가 저자명으로 사용된다.
    pub fn with_authors(title: String, authors: Option<Vec<String>>, thumbnail_url: Option<String>) -> Self {
        let author = authors
            .map(|authors| authors.join(", "))
            .unwrap_or_else(|| NO_AUTHOR.to_owned());

        Self::new(title, author, thumbnail_url)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }
}

/// 한 번의 조회로 얻은 검색 결과
///
/// `total_items`는 원격 서비스가 알려준 전체 결과 수이며 `books`는 현재 페이지의 도서 목록이다.
/// 다음 조회 결과가 나오면 통째로 교체된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    total_items: u32,
    books: Vec<Book>,
}

impl SearchResult {
    pub fn new(total_items: u32, books: Vec<Book>) -> Self {
        Self { total_items, books }
    }

    pub fn empty() -> Self {
        Self::new(0, Vec::new())
    }

    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn into_books(self) -> Vec<Book> {
        self.books
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
