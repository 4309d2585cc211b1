/// 한 페이지에 요청하는 도서 수
pub const PAGE_SIZE: u32 = 10;

/// 검색 결과 중 현재 보고 있는 페이지의 위치
///
/// `start_index`는 항상 [`PAGE_SIZE`]의 배수이다. 이동 연산은 기존 값을 바꾸지 않고 새 커서를 반환한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    start_index: u32,
}

impl Cursor {
    /// 첫 페이지
    pub fn first() -> Self {
        Self { start_index: 0 }
    }

    /// 주어진 인덱스가 속한 페이지의 커서. 페이지 경계에 맞지 않으면 내림한다.
    pub fn containing(index: u32) -> Self {
        Self {
            start_index: index - index % PAGE_SIZE,
        }
    }

    pub fn start_index(&self) -> u32 {
        self.start_index
    }

    pub fn page_size(&self) -> u32 {
        PAGE_SIZE
    }

    pub fn has_previous(&self) -> bool {
        self.start_index > 0
    }

    /// `total_items`개의 결과 중 다음 페이지가 남아있는지 여부
    pub fn has_next(&self, total_items: u32) -> bool {
        self.start_index.saturating_add(PAGE_SIZE) < total_items
    }

    pub fn previous(&self) -> Option<Cursor> {
        if self.has_previous() {
            Some(Cursor { start_index: self.start_index - PAGE_SIZE })
        } else {
            None
        }
    }

    pub fn next(&self, total_items: u32) -> Option<Cursor> {
        if self.has_next(total_items) {
            Some(Cursor { start_index: self.start_index + PAGE_SIZE })
        } else {
            None
        }
    }

    /// 화면에 표시하는 결과 범위 문구
    pub fn range_label(&self, total_items: u32) -> String {
        format!(
            "Results {} to {} out of approximately {} Books",
            self.start_index,
            self.start_index.saturating_add(PAGE_SIZE),
            total_items
        )
    }
}
