//! Cursor-paginated collection results.

use strum::{Display, EnumString};
use url::Url;

use super::Record;

/// Sort direction for list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first.
    Desc,
}

/// Query parameters accepted by collection endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Records per page (the server caps this at 200).
    pub per_page: Option<u32>,
    /// Opaque cursor from a previous page.
    pub cursor: Option<String>,
    /// State filter (`active`, `closed`, `past_due`, ...).
    pub state: Option<String>,
    /// Sort attribute (`created_at`, `updated_at`).
    pub sort: Option<String>,
    /// Sort direction.
    pub order: Option<SortOrder>,
}

impl ListParams {
    /// Sets the page size.
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Sets the state filter.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the sort attribute and direction.
    pub fn sort(mut self, attribute: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some(attribute.into());
        self.order = Some(order);
        self
    }

    /// Query pairs in a stable order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        if let Some(cursor) = &self.cursor {
            pairs.push(("cursor", cursor.clone()));
        }
        if let Some(state) = &self.state {
            pairs.push(("state", state.clone()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("sort", sort.clone()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.to_string()));
        }
        pairs
    }
}

/// One page of a collection.
#[derive(Debug, Clone)]
pub struct Page<R> {
    /// Records on this page.
    pub items: Vec<Record<R>>,
    /// Total number of records across all pages (`X-Records`).
    pub total: Option<u64>,
    /// Absolute URL of the next page (`Link: <..>; rel="next"`).
    pub next: Option<Url>,
}

impl<R> Page<R> {
    /// Returns `true` if another page follows.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Extracts the `rel="next"` target from a `Link` header.
pub(crate) fn next_link(header: &str) -> Option<Url> {
    header.split(',').find_map(|part| {
        let mut pieces = part.split(';');
        let target = pieces.next()?.trim();
        let is_next = pieces.any(|param| {
            let param = param.trim();
            param == r#"rel="next""# || param == "rel=next"
        });
        if !is_next {
            return None;
        }
        let target = target.strip_prefix('<')?.strip_suffix('>')?;
        Url::parse(target).ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs() {
        let params = ListParams::default()
            .per_page(50)
            .state("active")
            .sort("updated_at", SortOrder::Desc);
        assert_eq!(
            params.query_pairs(),
            vec![
                ("per_page", "50".to_string()),
                ("state", "active".to_string()),
                ("sort", "updated_at".to_string()),
                ("order", "desc".to_string()),
            ]
        );
        assert!(ListParams::default().query_pairs().is_empty());
    }

    #[test]
    fn test_next_link() {
        let header = r#"<https://api.recurly.com/v2/accounts?per_page=2>; rel="start", <https://api.recurly.com/v2/accounts?cursor=1304958672&per_page=2>; rel="next""#;
        let next = next_link(header).unwrap();
        assert_eq!(
            next.as_str(),
            "https://api.recurly.com/v2/accounts?cursor=1304958672&per_page=2"
        );
    }

    #[test]
    fn test_next_link_absent() {
        let header = r#"<https://api.recurly.com/v2/accounts?per_page=2>; rel="start""#;
        assert!(next_link(header).is_none());
        assert!(next_link("").is_none());
    }
}
