//! Page math for the 50-per-page species catalog table.

/// Rows per catalog page.
pub const PAGE_SIZE: usize = 50;

/// Number of pages needed for `n` rows.
pub fn page_count(n: usize) -> usize {
    n.div_ceil(PAGE_SIZE)
}

/// The numbered page buttons to show for the current page, at most seven.
///
/// All pages fit when there are seven or fewer; near either end the window
/// pins to that end; in the middle it centers on the current page.
pub fn page_window(page: usize, total_pages: usize) -> Vec<usize> {
    let buttons = total_pages.min(7);
    (0..buttons)
        .map(|i| {
            if total_pages <= 7 || page <= 4 {
                i + 1
            } else if page >= total_pages - 3 {
                total_pages - 6 + i
            } else {
                page - 3 + i
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(50), 1);
        assert_eq!(page_count(51), 2);
        assert_eq!(page_count(757), 16);
    }

    #[test]
    fn small_totals_show_every_page() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(3, 7), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_pins_to_the_start() {
        assert_eq!(page_window(1, 16), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(page_window(4, 16), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_pins_to_the_end() {
        assert_eq!(page_window(13, 16), vec![10, 11, 12, 13, 14, 15, 16]);
        assert_eq!(page_window(16, 16), vec![10, 11, 12, 13, 14, 15, 16]);
    }

    #[test]
    fn window_centers_in_the_middle() {
        assert_eq!(page_window(8, 16), vec![5, 6, 7, 8, 9, 10, 11]);
    }
}
