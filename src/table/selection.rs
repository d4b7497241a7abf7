//! 행 선택 상태
//! 테이블 인스턴스 하나에 속한 선택된 행 id 집합.
//! 선택 집합은 항상 현재 행 id 목록의 부분집합이다.
// region:    --- Imports
use std::collections::HashSet;
use std::hash::Hash;

// endregion: --- Imports

// region:    --- Selection
#[derive(Debug, Clone)]
pub struct Selection<K> {
    row_ids: Vec<K>,
    selected: HashSet<K>,
}

impl<K> Default for Selection<K> {
    fn default() -> Self {
        Self {
            row_ids: Vec::new(),
            selected: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Selection<K> {
    pub fn new(row_ids: Vec<K>) -> Self {
        Self {
            row_ids,
            selected: HashSet::new(),
        }
    }

    /// 현재 알려진 모든 id 선택
    pub fn select_all(&mut self) {
        self.selected = self.row_ids.iter().cloned().collect();
    }

    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// 행 하나 선택. 모르는 id는 무시
    pub fn select_one(&mut self, id: K) {
        if self.row_ids.contains(&id) {
            self.selected.insert(id);
        }
    }

    pub fn deselect_one(&mut self, id: &K) {
        self.selected.remove(id);
    }

    pub fn selected(&self) -> &HashSet<K> {
        &self.selected
    }

    pub fn is_selected(&self, id: &K) -> bool {
        self.selected.contains(id)
    }

    /// 헤더 체크박스: 전체 선택
    pub fn is_all_selected(&self) -> bool {
        !self.row_ids.is_empty() && self.selected.len() == self.row_ids.len()
    }

    /// 헤더 체크박스: 일부 선택 (indeterminate)
    pub fn is_partially_selected(&self) -> bool {
        !self.selected.is_empty() && self.selected.len() < self.row_ids.len()
    }

    /// 남은 행 id 로 축소. 사라진 행은 선택에서도 제거
    pub fn retain(&mut self, row_ids: Vec<K>) {
        self.selected.retain(|id| row_ids.contains(id));
        self.row_ids = row_ids;
    }
}

// endregion: --- Selection

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("USR-{:03}", i)).collect()
    }

    #[test]
    fn select_one_is_idempotent() {
        let mut once = Selection::new(ids(3));
        once.select_one("USR-001".to_string());

        let mut twice = Selection::new(ids(3));
        twice.select_one("USR-001".to_string());
        twice.select_one("USR-001".to_string());

        assert_eq!(once.selected(), twice.selected());
        assert!(twice.is_partially_selected());
    }

    #[test]
    fn deselecting_absent_id_is_noop() {
        let mut selection = Selection::new(ids(2));
        selection.deselect_one(&"missing".to_string());
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn unknown_id_is_not_selected() {
        let mut selection = Selection::new(ids(2));
        selection.select_one("ghost".to_string());
        assert!(selection.selected().is_empty());
    }

    #[test]
    fn empty_table_is_never_all_selected() {
        let mut selection: Selection<String> = Selection::new(Vec::new());
        selection.select_all();
        assert!(!selection.is_all_selected());
        assert!(!selection.is_partially_selected());
    }

    #[test]
    fn retain_drops_removed_rows() {
        let mut selection = Selection::new(ids(3));
        selection.select_all();
        selection.retain(vec!["USR-000".to_string(), "USR-002".to_string()]);
        assert_eq!(selection.selected().len(), 2);
        assert!(!selection.is_selected(&"USR-001".to_string()));
        assert!(selection.is_all_selected());
    }

    proptest! {
        #[test]
        fn select_all_then_deselect_one(n in 1usize..60, pick in 0usize..60) {
            let row_ids = ids(n);
            let x = row_ids[pick % n].clone();
            let mut selection = Selection::new(row_ids);
            selection.select_all();
            selection.deselect_one(&x);
            prop_assert_eq!(selection.selected().len(), n - 1);
            prop_assert!(!selection.is_selected(&x));
        }
    }
}
