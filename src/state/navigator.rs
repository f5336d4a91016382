//! Image navigation over the fetched image list.
//!
//! Navigation moves an index over the in-memory page; it never re-fetches
//! the list itself. Unlike a looping slideshow, the ends are hard stops.

use crate::model::{EntityId, ImageRef};

/// The fetched image page plus the cursor over it.
#[derive(Debug, Clone, Default)]
pub struct ImageNavigator {
    images: Vec<ImageRef>,
    current_index: usize,
    page: u32,
    total: u64,
}

impl ImageNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly fetched page and reset the cursor.
    pub fn set_page(&mut self, images: Vec<ImageRef>, page: u32, total: u64) {
        self.images = images;
        self.current_index = 0;
        self.page = page;
        self.total = total;
    }

    pub fn clear(&mut self) {
        self.images.clear();
        self.current_index = 0;
        self.page = 0;
        self.total = 0;
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Server-reported total across all pages.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn current(&self) -> Option<&ImageRef> {
        self.images.get(self.current_index)
    }

    pub fn current_id(&self) -> Option<EntityId> {
        self.current().map(|image| image.id)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn has_next(&self) -> bool {
        self.current_index + 1 < self.images.len()
    }

    pub fn has_prev(&self) -> bool {
        self.current_index > 0
    }

    /// Step forward. Returns false at the last image (no wrap-around).
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Step backward. Returns false at the first image (no wrap-around).
    pub fn prev(&mut self) -> bool {
        if self.has_prev() {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to an index within the page. Out-of-range indexes are refused.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.images.len() {
            self.current_index = index;
            true
        } else {
            false
        }
    }

    /// Progress string like "3/15" for the toolbar.
    pub fn progress(&self) -> String {
        if self.images.is_empty() {
            return "0/0".to_string();
        }
        format!("{}/{}", self.current_index + 1, self.images.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: EntityId) -> ImageRef {
        ImageRef {
            id,
            file_name: format!("img{id}.jpg"),
            relative_path: format!("ds/img{id}.jpg"),
            width: 640,
            height: 480,
        }
    }

    fn navigator_with(count: u64) -> ImageNavigator {
        let mut navigator = ImageNavigator::new();
        navigator.set_page((1..=count).map(image).collect(), 1, count);
        navigator
    }

    #[test]
    fn test_next_stops_at_last_image() {
        let mut navigator = navigator_with(3);
        assert!(navigator.next());
        assert!(navigator.next());
        // At the last image: further steps are refused, index unchanged.
        assert!(!navigator.next());
        assert_eq!(navigator.current_index(), 2);
    }

    #[test]
    fn test_prev_stops_at_first_image() {
        let mut navigator = navigator_with(3);
        assert!(!navigator.prev());
        assert_eq!(navigator.current_index(), 0);
    }

    #[test]
    fn test_select_rejects_out_of_range() {
        let mut navigator = navigator_with(3);
        assert!(navigator.select(2));
        assert!(!navigator.select(3));
        assert_eq!(navigator.current_index(), 2);
    }

    #[test]
    fn test_set_page_resets_cursor() {
        let mut navigator = navigator_with(3);
        navigator.next();
        navigator.set_page(vec![image(10), image(11)], 2, 12);
        assert_eq!(navigator.current_index(), 0);
        assert_eq!(navigator.current_id(), Some(10));
        assert_eq!(navigator.page(), 2);
        assert_eq!(navigator.total(), 12);
    }

    #[test]
    fn test_progress_string() {
        let mut navigator = navigator_with(15);
        navigator.select(2);
        assert_eq!(navigator.progress(), "3/15");
        assert_eq!(ImageNavigator::new().progress(), "0/0");
    }
}
