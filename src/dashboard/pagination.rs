use crate::catalog::PageSize;

/// Numbered buttons shown around the current page
pub const VISIBLE_PAGES: u32 = 5;

/// Where a pagination button sends the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    First,
    Previous,
    Number(u32),
    Next,
    Last,
}

pub fn total_pages(total_count: u64, page_size: PageSize) -> u32 {
    let pages = total_count.div_ceil(u64::from(page_size.get()));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Snapshot of the pagination control for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current: u32,
    pub total_pages: u32,
}

impl Pager {
    pub fn new(current: u32, total_pages: u32) -> Self {
        Self {
            current,
            total_pages,
        }
    }

    /// Highest page navigation may land on. An empty result set still has page 1.
    fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    /// Page reached by following `target`, always within `[1, last]`
    pub fn resolve(&self, target: PageTarget) -> u32 {
        let last = self.last_page();
        let page = match target {
            PageTarget::First => 1,
            PageTarget::Previous => self.current.saturating_sub(1),
            PageTarget::Number(number) => number,
            PageTarget::Next => self.current.saturating_add(1).min(self.total_pages),
            PageTarget::Last => self.total_pages,
        };
        page.clamp(1, last)
    }

    pub fn on_first_page(&self) -> bool {
        self.current <= 1
    }

    /// True on the final page, and also when there are no pages at all
    pub fn on_last_page(&self) -> bool {
        self.current >= self.total_pages
    }

    /// Up to five page numbers starting two before the current page
    pub fn window(&self) -> Vec<u32> {
        let start = self.current.saturating_sub(VISIBLE_PAGES / 2).max(1);
        let end = self
            .total_pages
            .min(start.saturating_add(VISIBLE_PAGES - 1));
        (start..=end).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(47, PageSize::Ten), 5);
        assert_eq!(total_pages(50, PageSize::Fifty), 1);
        assert_eq!(total_pages(51, PageSize::Fifty), 2);
        assert_eq!(total_pages(1, PageSize::Hundred), 1);
        assert_eq!(total_pages(0, PageSize::Ten), 0);
    }

    #[test]
    fn test_resolve_clamps_to_range() {
        let pager = Pager::new(3, 5);
        assert_eq!(pager.resolve(PageTarget::First), 1);
        assert_eq!(pager.resolve(PageTarget::Previous), 2);
        assert_eq!(pager.resolve(PageTarget::Next), 4);
        assert_eq!(pager.resolve(PageTarget::Last), 5);
        assert_eq!(pager.resolve(PageTarget::Number(9)), 5);
        assert_eq!(pager.resolve(PageTarget::Number(0)), 1);

        assert_eq!(Pager::new(1, 5).resolve(PageTarget::Previous), 1);
        assert_eq!(Pager::new(5, 5).resolve(PageTarget::Next), 5);
    }

    #[test]
    fn test_empty_result_set_stays_on_page_one() {
        let pager = Pager::new(1, 0);
        for target in [
            PageTarget::First,
            PageTarget::Previous,
            PageTarget::Next,
            PageTarget::Last,
        ] {
            assert_eq!(pager.resolve(target), 1);
        }
        assert!(pager.on_first_page());
        assert!(pager.on_last_page());
        assert!(pager.window().is_empty());
    }

    #[test]
    fn test_window() {
        assert_eq!(Pager::new(1, 5).window(), vec![1, 2, 3, 4, 5]);
        assert_eq!(Pager::new(3, 10).window(), vec![1, 2, 3, 4, 5]);
        assert_eq!(Pager::new(6, 10).window(), vec![4, 5, 6, 7, 8]);
        assert_eq!(Pager::new(5, 5).window(), vec![3, 4, 5]);
        assert_eq!(Pager::new(1, 2).window(), vec![1, 2]);
    }

    #[test]
    fn test_boundary_flags() {
        assert!(Pager::new(1, 5).on_first_page());
        assert!(!Pager::new(1, 5).on_last_page());
        assert!(Pager::new(5, 5).on_last_page());
        assert!(!Pager::new(5, 5).on_first_page());
    }
}
