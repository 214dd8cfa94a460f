use crate::domain::model::{PageRequest, PageResult, Record};

/// 取出指定頁 (從 1 開始) 的紀錄
///
/// 超出範圍的頁數回傳空陣列，但總數與總頁數照常計算。
pub fn paginate<'a>(records: Vec<&'a Record>, request: PageRequest) -> PageResult<'a> {
    let total_items = records.len();
    let limit = request.limit();
    let total_pages = total_items.div_ceil(limit);
    let start = (request.page() - 1).saturating_mul(limit);

    let items = records.into_iter().skip(start).take(limit).collect();

    PageResult {
        items,
        total_items,
        total_pages,
        current_page: request.page(),
        items_per_page: limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<Record> {
        (0..n).map(|i| Record::new().with("transactionId", i as u64)).collect()
    }

    fn page(p: usize, l: usize) -> PageRequest {
        PageRequest::new(p, l).unwrap()
    }

    #[test]
    fn test_partial_last_page() {
        let data = records(5);
        let result = paginate(data.iter().collect(), page(3, 2));
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.total_items, 5);
        assert_eq!(result.items[0], &data[4]);
    }

    #[test]
    fn test_page_beyond_end_is_empty() {
        let data = records(5);
        let result = paginate(data.iter().collect(), page(9, 2));
        assert!(result.items.is_empty());
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.current_page, 9);
    }

    #[test]
    fn test_empty_input_has_zero_pages() {
        let result = paginate(Vec::new(), page(1, 10));
        assert!(result.items.is_empty());
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.total_items, 0);
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let data = records(3);
        let result = paginate(data.iter().collect(), page(usize::MAX, usize::MAX));
        assert!(result.items.is_empty());
        assert_eq!(result.total_pages, 1);
    }
}
