//! Pagination engine

use crate::content::Post;

/// One page of a filtered listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    /// Posts on this page, at most `page_size`
    pub items: Vec<&'a Post>,
    /// Zero-based page index
    pub page_index: usize,
    pub page_size: usize,
    /// Always at least 1, even for an empty listing
    pub total_pages: usize,
    /// Number of posts across all pages
    pub total_items: usize,
}

impl PageView<'_> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether pagination controls should be shown at all
    pub fn has_controls(&self) -> bool {
        self.total_pages > 1
    }

    pub fn prev_index(&self) -> Option<usize> {
        self.page_index.checked_sub(1)
    }

    pub fn next_index(&self) -> Option<usize> {
        let next = self.page_index + 1;
        (next < self.total_pages).then_some(next)
    }
}

/// Number of pages needed for `count` posts, never less than one
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Slice `[page_index * page_size, page_index * page_size + page_size)` out
/// of `posts`. An index past the end gives an empty page.
pub fn paginate<'a>(posts: &[&'a Post], page_index: usize, page_size: usize) -> PageView<'a> {
    let page_size = page_size.max(1);
    let items = posts
        .iter()
        .copied()
        .skip(page_index.saturating_mul(page_size))
        .take(page_size)
        .collect();

    PageView {
        items,
        page_index,
        page_size,
        total_pages: total_pages(posts.len(), page_size),
        total_items: posts.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(n: usize) -> Vec<Post> {
        (0..n)
            .map(|i| {
                let mut post = Post::default();
                post.body = format!("post {}", i);
                post
            })
            .collect()
    }

    #[test]
    fn test_five_posts_four_per_page() {
        let posts = posts(5);
        let refs: Vec<&Post> = posts.iter().collect();

        let first = paginate(&refs, 0, 4);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items.len(), 4);
        assert_eq!(first.items[0].body, "post 0");
        assert_eq!(first.prev_index(), None);
        assert_eq!(first.next_index(), Some(1));
        assert!(first.has_controls());

        let second = paginate(&refs, 1, 4);
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].body, "post 4");
        assert_eq!(second.prev_index(), Some(0));
        assert_eq!(second.next_index(), None);
    }

    #[test]
    fn test_empty_listing_is_one_page_without_controls() {
        let page = paginate(&[], 0, 4);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_items, 0);
        assert!(!page.has_controls());
    }

    #[test]
    fn test_exact_multiple() {
        let posts = posts(8);
        let refs: Vec<&Post> = posts.iter().collect();
        let page = paginate(&refs, 1, 4);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 4);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let posts = posts(3);
        let refs: Vec<&Post> = posts.iter().collect();
        assert!(paginate(&refs, 7, 4).is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 4), 1);
        assert_eq!(total_pages(4, 4), 1);
        assert_eq!(total_pages(5, 4), 2);
        assert_eq!(total_pages(5, 0), 5);
    }
}
