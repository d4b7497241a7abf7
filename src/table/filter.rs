//! 검색 필터
//! 지정된 필드에 대해 대소문자 구분 없는 부분 문자열 검색.
//! 빈 검색어는 원본을 그대로 돌려준다.

/// 검색 대상 필드를 가진 행
pub trait Searchable {
    fn search_text(&self) -> &str;
}

/// 원본 목록에서 검색어와 일치하는 행만 남긴 새 목록
pub fn filter_rows<T: Searchable + Clone>(rows: &[T], term: &str) -> Vec<T> {
    let term = term.trim();
    if term.is_empty() {
        return rows.to_vec();
    }
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| row.search_text().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Named(&'static str);

    impl Searchable for Named {
        fn search_text(&self) -> &str {
            self.0
        }
    }

    fn people() -> Vec<Named> {
        vec![
            Named("Sofia Rivers"),
            Named("Miron Vitold"),
            Named("Alcides Antonio"),
            Named("Sofia Lind"),
        ]
    }

    #[test]
    fn blank_term_returns_original() {
        assert_eq!(filter_rows(&people(), ""), people());
        assert_eq!(filter_rows(&people(), "   "), people());
    }

    #[test]
    fn match_is_case_insensitive() {
        let found = filter_rows(&people(), "SOFIA");
        assert_eq!(found, vec![Named("Sofia Rivers"), Named("Sofia Lind")]);
    }

    #[test]
    fn substring_in_the_middle_matches() {
        assert_eq!(filter_rows(&people(), "vit"), vec![Named("Miron Vitold")]);
        assert!(filter_rows(&people(), "zzz").is_empty());
    }
}
