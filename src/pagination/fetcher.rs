//! Paginated GET requests

use super::types::{FetchBudget, Page, PageSet, PAGE_SIZE_PARAM};
use crate::error::Result;
use crate::http::{Client, QueryParams};
use reqwest::Method;
use tracing::{debug, trace};

impl Client {
    /// GET `url` and follow `rel="next"` links until the server stops paging
    /// or `max` items have been requested (`max == 0` fetches everything).
    ///
    /// `params` are merged into every request, continuation URLs included.
    /// The page size parameter is always overwritten with
    /// `min(max_per_page, remaining)`.
    ///
    /// If a request fails, the pages fetched so far are returned together with
    /// the error. Pages are requested strictly one after another.
    pub async fn get_with_paging(
        &self,
        url: &str,
        params: Option<&QueryParams>,
        max: usize,
    ) -> PageSet {
        let ceiling = self.config().max_per_page();
        let mut budget = FetchBudget::new(max);
        let mut target = url.to_string();
        let mut result = PageSet::default();

        while budget.has_remaining() {
            let page_size = budget.page_size(ceiling);
            budget.consume(ceiling);

            let page = match self.fetch_page(&target, params, page_size).await {
                Ok(page) => page,
                Err(err) => {
                    debug!(
                        "Pagination stopped after {} page(s) on error",
                        result.pages.len()
                    );
                    result.error = Some(err);
                    break;
                }
            };

            result.pages.push(page.body);
            debug!(
                "Fetched page {} (requested {} items)",
                result.pages.len(),
                page_size
            );

            match page.next {
                Some(next) => {
                    trace!("Following next link: {}", next);
                    target = next;
                }
                None => break,
            }
        }

        result
    }

    async fn fetch_page(
        &self,
        url: &str,
        params: Option<&QueryParams>,
        page_size: u32,
    ) -> Result<Page> {
        let mut request = self.build_request(Method::GET, url, params, None)?;
        QueryParams::set_in_url(&mut request.url, PAGE_SIZE_PARAM, &page_size.to_string());

        let (headers, body) = self.execute(request).await?;
        Ok(Page::from_response(&headers, body))
    }
}
