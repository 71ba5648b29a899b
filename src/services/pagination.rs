// src/services/pagination.rs

//! Offset/limit pagination over list endpoints.

use serde::de::DeserializeOwned;

use crate::api::IncidentApi;
use crate::error::{AppError, Result};

/// Fetch every item of a paginated collection, in remote order.
///
/// Pages are requested at offsets `0, page_size, 2 * page_size, ...` until the
/// service reports no further pages. The first failing page aborts the fetch.
pub async fn fetch_all<T: DeserializeOwned>(
    api: &dyn IncidentApi,
    path: &str,
    key: &str,
    page_size: usize,
) -> Result<Vec<T>> {
    if page_size == 0 {
        return Err(AppError::validation("page size must be > 0"));
    }

    let mut items = Vec::new();
    let mut offset = 0;

    loop {
        let page = api.list_page(path, key, page_size, offset).await?;
        let received = page.items.len();

        for raw in page.items {
            items.push(serde_json::from_value(raw).map_err(|e| AppError::decode(path, e))?);
        }

        if !page.more {
            break;
        }
        if received == 0 {
            log::warn!("{} reported more pages but returned none at offset {}", path, offset);
            break;
        }
        offset += page_size;
    }

    log::debug!("Fetched {} {} from {}", items.len(), key, path);
    Ok(items)
}
