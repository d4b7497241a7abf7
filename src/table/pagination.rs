//! 페이지 분할
//! 전체 행 목록을 페이지 단위로 잘라낸다. 범위를 벗어난 페이지는 빈 슬라이스.
// region:    --- Imports
use serde::{Deserialize, Serialize};

// endregion: --- Imports

// region:    --- Page Size
/// 페이지당 행 수 (5, 10, 25)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    TwentyFive,
}

/// 허용되지 않는 페이지 크기
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("rows per page must be one of 5, 10, 25 (got {0})")]
pub struct InvalidPageSize(pub usize);

impl PageSize {
    pub const OPTIONS: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::TwentyFive];

    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = InvalidPageSize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(PageSize::Five),
            10 => Ok(PageSize::Ten),
            25 => Ok(PageSize::TwentyFive),
            other => Err(InvalidPageSize(other)),
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

// endregion: --- Page Size

// region:    --- Paginate
/// 페이지 조회 (0부터 시작)
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(start) = page.checked_mul(page_size) else {
        return &[];
    };
    if page_size == 0 || start >= rows.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// 전체 페이지 수
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

// endregion: --- Paginate

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn last_page_is_partial() {
        let rows: Vec<i32> = (0..12).collect();
        assert_eq!(paginate(&rows, 2, 5), &[10, 11]);
        assert_eq!(page_count(rows.len(), 5), 3);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let rows = vec!["a", "b", "c"];
        assert!(paginate(&rows, 1, 5).is_empty());
        assert!(paginate(&rows, usize::MAX, 25).is_empty());
        assert!(paginate(&rows, 0, 0).is_empty());
    }

    #[test]
    fn page_size_accepts_only_known_options() {
        assert_eq!(PageSize::try_from(10usize), Ok(PageSize::Ten));
        assert_eq!(PageSize::try_from(7usize), Err(InvalidPageSize(7)));
        let parsed: PageSize = serde_json::from_str("25").unwrap();
        assert_eq!(parsed, PageSize::TwentyFive);
        assert!(serde_json::from_str::<PageSize>("3").is_err());
    }

    proptest! {
        #[test]
        fn page_length_matches_remaining_rows(len in 0usize..200, page in 0usize..50, size in 1usize..30) {
            let rows: Vec<usize> = (0..len).collect();
            let expected = size.min(len.saturating_sub(page * size));
            prop_assert_eq!(paginate(&rows, page, size).len(), expected);
        }

        #[test]
        fn pages_concatenate_to_original(len in 0usize..200, size in 1usize..30) {
            let rows: Vec<usize> = (0..len).collect();
            let rebuilt: Vec<usize> = (0..page_count(len, size))
                .flat_map(|page| paginate(&rows, page, size).to_vec())
                .collect();
            prop_assert_eq!(rebuilt, rows);
        }
    }
}
