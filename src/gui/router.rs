// src/gui/router.rs
use crate::config::options::PageKind::{ self, * };
use crate::pages::{ self, Page };

/// Tab order.
pub static PAGES: &[&'static dyn Page] = &[
    &pages::standings::PAGE,
    &pages::managers::PAGE,
    &pages::career::PAGE,
    &pages::teams::PAGE,
    &pages::drafts::BOARD,
    &pages::drafts::HISTORY,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        Standings     => &pages::standings::PAGE,
        Managers      => &pages::managers::PAGE,
        ManagerCareer => &pages::career::PAGE,
        Teams         => &pages::teams::PAGE,
        DraftBoard    => &pages::drafts::BOARD,
        DraftHistory  => &pages::drafts::HISTORY,
    }
}

/// Tab index of a page kind.
pub fn index_of(kind: PageKind) -> usize {
    PAGES.iter().position(|p| p.kind() == kind).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_routes_to_itself() {
        for (ix, page) in all_pages().iter().enumerate() {
            assert_eq!(page_for(page.kind()).kind(), page.kind());
            assert_eq!(index_of(page.kind()), ix);
        }
    }

    #[test]
    fn tab_titles_are_plain_ascii() {
        for page in all_pages() {
            assert!(page.title().is_ascii(), "{}", page.title());
        }
        assert_eq!(page_for(PageKind::DraftHistory).title(), "All Drafts");
    }
}
