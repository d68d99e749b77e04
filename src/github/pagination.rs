// Page-by-page collection of GitHub list endpoints.
// Walks 1-indexed pages until an empty or short page marks the end.

use crate::error::Result;

/// Largest page size the GitHub API accepts.
pub const PER_PAGE: u32 = 100;

/// Something that can return one page of a paginated collection.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    type Item;

    /// Fetch page `page` (1-indexed) holding at most `per_page` items.
    async fn fetch_page(&mut self, page: u32, per_page: u32) -> Result<Vec<Self::Item>>;
}

/// Fetch every page from `source` and concatenate them in page order.
///
/// Stops at the first empty page, or right after a page shorter than
/// [`PER_PAGE`]. A failing page aborts the walk and its error is returned;
/// items gathered from earlier pages are dropped.
pub async fn collect_all<S: PageSource>(source: &mut S) -> Result<Vec<S::Item>> {
    let mut items = Vec::new();
    let mut page = 1;

    loop {
        let batch = source.fetch_page(page, PER_PAGE).await?;
        if batch.is_empty() {
            break;
        }

        let is_last = batch.len() < PER_PAGE as usize;
        items.extend(batch);
        if is_last {
            break;
        }

        page += 1;
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrackerError;

    /// Serves pages of the given sizes and records every page requested.
    struct FakePages {
        sizes: Vec<usize>,
        requested: Vec<u32>,
        fail_on: Option<u32>,
    }

    impl FakePages {
        fn new(sizes: &[usize]) -> Self {
            Self {
                sizes: sizes.to_vec(),
                requested: Vec::new(),
                fail_on: None,
            }
        }
    }

    impl PageSource for FakePages {
        type Item = String;

        async fn fetch_page(&mut self, page: u32, per_page: u32) -> Result<Vec<String>> {
            assert_eq!(per_page, PER_PAGE);
            self.requested.push(page);

            if self.fail_on == Some(page) {
                return Err(TrackerError::RequestFailed {
                    status: 502,
                    body: "bad gateway".to_string(),
                });
            }

            let size = self.sizes.get(page as usize - 1).copied().unwrap_or(0);
            Ok((0..size).map(|i| format!("p{}-{}", page, i)).collect())
        }
    }

    #[tokio::test]
    async fn test_full_pages_then_empty() {
        let mut source = FakePages::new(&[100, 100, 0]);

        let items = collect_all(&mut source).await.unwrap();
        assert_eq!(items.len(), 200);
        assert_eq!(source.requested, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_short_page_ends_without_extra_request() {
        let mut source = FakePages::new(&[100, 37]);

        let items = collect_all(&mut source).await.unwrap();
        assert_eq!(items.len(), 137);
        assert_eq!(source.requested, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_empty_collection_single_request() {
        let mut source = FakePages::new(&[]);

        let items = collect_all(&mut source).await.unwrap();
        assert!(items.is_empty());
        assert_eq!(source.requested, vec![1]);
    }

    #[tokio::test]
    async fn test_preserves_page_and_item_order() {
        let mut source = FakePages::new(&[100, 2]);

        let items = collect_all(&mut source).await.unwrap();
        assert_eq!(items[0], "p1-0");
        assert_eq!(items[99], "p1-99");
        assert_eq!(items[100], "p2-0");
        assert_eq!(items[101], "p2-1");
    }

    #[tokio::test]
    async fn test_failed_page_aborts() {
        let mut source = FakePages::new(&[100, 100, 5]);
        source.fail_on = Some(2);

        let result = collect_all(&mut source).await;
        assert!(matches!(
            result,
            Err(TrackerError::RequestFailed { status: 502, .. })
        ));
        assert_eq!(source.requested, vec![1, 2]);
    }
}
