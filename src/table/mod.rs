//! 테이블 상태
//! 원본 행, 검색 결과(작업 집합), 페이지, 선택, 상세 보기 토글을 테이블 인스턴스 하나가 소유한다.
// region:    --- Imports
use filter::{filter_rows, Searchable};
use pagination::{page_count, paginate, PageSize};
use selection::Selection;
use serde::Serialize;
use std::collections::HashSet;

// endregion: --- Imports

// region:    --- Modules
pub mod filter;
pub mod pagination;
pub mod selection;

// endregion: --- Modules

// region:    --- Table Row
/// 테이블 행 식별자
pub trait TableRow {
    fn row_id(&self) -> &str;
}

// endregion: --- Table Row

// region:    --- Table State
#[derive(Debug, Clone)]
pub struct TableState<T> {
    original: Vec<T>,
    rows: Vec<T>,
    search_input: String,
    committed_term: String,
    page: usize,
    page_size: PageSize,
    selection: Selection<String>,
    expanded: HashSet<String>,
}

impl<T: TableRow + Clone> TableState<T> {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            original: Vec::new(),
            rows: Vec::new(),
            search_input: String::new(),
            committed_term: String::new(),
            page: 0,
            page_size,
            selection: Selection::default(),
            expanded: HashSet::new(),
        }
    }

    /// 새로 받은 행으로 교체. 검색어와 선택, 상세 토글 초기화
    pub fn replace_rows(&mut self, rows: Vec<T>) {
        self.original = rows.clone();
        self.rows = rows;
        self.search_input.clear();
        self.committed_term.clear();
        self.expanded.clear();
        self.clamp_page();
        self.reset_selection();
    }

    /// 입력 중인 검색어. 필터링은 commit_search 에서만
    pub fn set_search_input(&mut self, term: &str) {
        self.search_input = term.to_string();
    }

    /// 검색어 확정 (Enter)
    pub fn commit_search(&mut self)
    where
        T: Searchable,
    {
        self.committed_term = self.search_input.trim().to_string();
        self.rows = filter_rows(&self.original, &self.committed_term);
        self.page = 0;
        self.reset_selection();
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
        self.reset_selection();
    }

    /// 페이지 크기 변경 시 첫 페이지로
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 0;
        self.reset_selection();
    }

    /// 현재 페이지의 행
    pub fn page_rows(&self) -> &[T] {
        paginate(&self.rows, self.page, self.page_size.get())
    }

    /// 행 삭제. 원본, 작업 집합, 선택, 상세 토글에서 모두 제거
    pub fn remove_row(&mut self, id: &str) -> Option<T> {
        let position = self.original.iter().position(|row| row.row_id() == id)?;
        let removed = self.original.remove(position);
        self.rows.retain(|row| row.row_id() != id);
        self.expanded.remove(id);
        self.clamp_page();
        let visible = self.page_ids();
        self.selection.retain(visible);
        Some(removed)
    }

    pub fn find(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|row| row.row_id() == id)
    }

    /// 상세 보기 토글. 없는 행이면 None
    pub fn toggle_details(&mut self, id: &str) -> Option<bool> {
        self.find(id)?;
        if self.expanded.remove(id) {
            Some(false)
        } else {
            self.expanded.insert(id.to_string());
            Some(true)
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn selection(&self) -> &Selection<String> {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection<String> {
        &mut self.selection
    }

    /// 검색 결과 전체 행 수
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        page_count(self.rows.len(), self.page_size.get())
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn search_term(&self) -> &str {
        &self.committed_term
    }

    /// 화면 표시용 스냅샷
    pub fn view(&self) -> PageView<T> {
        let mut selected: Vec<String> = self.selection.selected().iter().cloned().collect();
        selected.sort();
        let mut expanded: Vec<String> = self.expanded.iter().cloned().collect();
        expanded.sort();

        PageView {
            rows: self.page_rows().to_vec(),
            total: self.total(),
            page: self.page,
            rows_per_page: self.page_size.get(),
            page_count: self.page_count(),
            selected,
            all_selected: self.selection.is_all_selected(),
            partially_selected: self.selection.is_partially_selected(),
            expanded,
            rows_per_page_options: PageSize::OPTIONS.map(PageSize::get).to_vec(),
            search_input: self.search_input.clone(),
            search_term: self.committed_term.clone(),
        }
    }

    fn page_ids(&self) -> Vec<String> {
        self.page_rows()
            .iter()
            .map(|row| row.row_id().to_string())
            .collect()
    }

    fn reset_selection(&mut self) {
        self.selection = Selection::new(self.page_ids());
    }

    // 마지막 행 삭제로 페이지가 비면 이전 페이지로
    fn clamp_page(&mut self) {
        let last = self.page_count().saturating_sub(1);
        if self.page > last {
            self.page = last;
        }
    }
}

// endregion: --- Table State

// region:    --- Page View
#[derive(Debug, Clone, Serialize)]
pub struct PageView<T> {
    pub rows: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub rows_per_page: usize,
    pub page_count: usize,
    pub selected: Vec<String>,
    pub all_selected: bool,
    pub partially_selected: bool,
    pub expanded: Vec<String>,
    pub rows_per_page_options: Vec<usize>,
    pub search_input: String,
    pub search_term: String,
}

// endregion: --- Page View

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
    }

    impl TableRow for Row {
        fn row_id(&self) -> &str {
            &self.id
        }
    }

    impl Searchable for Row {
        fn search_text(&self) -> &str {
            &self.name
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row {
                id: format!("r{}", i),
                name: if i % 2 == 0 {
                    format!("Sofia {}", i)
                } else {
                    format!("Miron {}", i)
                },
            })
            .collect()
    }

    #[test]
    fn select_all_covers_visible_page_only() {
        let mut table = TableState::new(PageSize::Five);
        table.replace_rows(rows(12));
        table.set_page(2);
        table.selection_mut().select_all();
        let view = table.view();
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.selected, vec!["r10".to_string(), "r11".to_string()]);
        assert!(view.all_selected);
        assert_eq!(view.rows_per_page_options, vec![5, 10, 25]);
    }

    #[test]
    fn page_change_resets_selection() {
        let mut table = TableState::new(PageSize::Five);
        table.replace_rows(rows(12));
        table.selection_mut().select_one("r1".to_string());
        table.set_page(1);
        assert!(table.selection().selected().is_empty());
    }

    #[test]
    fn search_applies_only_on_commit() {
        let mut table = TableState::new(PageSize::Ten);
        table.replace_rows(rows(6));
        table.set_search_input("sofia");
        assert_eq!(table.total(), 6);
        assert_eq!(table.search_input(), "sofia");
        assert_eq!(table.view().search_term, "");

        table.commit_search();
        assert_eq!(table.total(), 3);
        assert_eq!(table.search_term(), "sofia");

        table.set_search_input("  ");
        table.commit_search();
        assert_eq!(table.rows(), rows(6).as_slice());
    }

    #[test]
    fn commit_search_returns_to_first_page() {
        let mut table = TableState::new(PageSize::Five);
        table.replace_rows(rows(12));
        table.set_page(2);
        table.set_search_input("Miron");
        table.commit_search();
        assert_eq!(table.page(), 0);
        assert_eq!(table.page_rows().len(), 5);
    }

    #[test]
    fn remove_row_prunes_selection_and_details() {
        let mut table = TableState::new(PageSize::Five);
        table.replace_rows(rows(3));
        table.selection_mut().select_all();
        assert_eq!(table.toggle_details("r1"), Some(true));

        let removed = table.remove_row("r1").map(|row| row.id);
        assert_eq!(removed.as_deref(), Some("r1"));
        assert_eq!(table.total(), 2);
        assert!(!table.selection().is_selected(&"r1".to_string()));
        assert_eq!(table.selection().selected().len(), 2);
        assert!(!table.is_expanded("r1"));
        assert!(table.remove_row("r1").is_none());
    }

    #[test]
    fn removing_last_row_of_page_moves_back() {
        let mut table = TableState::new(PageSize::Five);
        table.replace_rows(rows(6));
        table.set_page(1);
        table.remove_row("r5");
        assert_eq!(table.page(), 0);
        assert_eq!(table.page_rows().len(), 5);
    }

    #[test]
    fn toggle_details_flips_per_row() {
        let mut table = TableState::new(PageSize::Five);
        table.replace_rows(rows(2));
        assert_eq!(table.toggle_details("r0"), Some(true));
        assert!(!table.is_expanded("r1"));
        assert_eq!(table.toggle_details("r0"), Some(false));
        assert_eq!(table.toggle_details("missing"), None);
    }
}
