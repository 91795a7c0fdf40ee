use crate::types::dto::items::{Item, ItemPage, Pagination};
use crate::types::internal::ItemQuery;

/// Page returned when `page` is absent or unusable
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when `per_page` is absent or unusable
pub const DEFAULT_PER_PAGE: u64 = 12;

/// Upper bound on page size; larger requests are clamped, not rejected
pub const MAX_PER_PAGE: u64 = 100;

/// Filter predicates resolved from an `ItemQuery`
///
/// Needles are lowercased once here so matching only lowercases the item side.
/// Empty strings count as absent, as do price bounds that are not finite numbers.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ItemFilter {
    category: Option<String>,
    size: Option<String>,
    city: Option<String>,
    search: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl ItemFilter {
    pub fn from_query(params: &ItemQuery) -> Self {
        Self {
            category: needle(params.category.as_deref()),
            size: needle(params.size.as_deref()),
            city: needle(params.city.as_deref()),
            search: needle(params.search.as_deref()),
            min_price: parse_price(params.min_price.as_deref()),
            max_price: parse_price(params.max_price.as_deref()),
        }
    }

    /// AND of every active predicate
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(category) = &self.category {
            if item.category.to_lowercase() != *category {
                return false;
            }
        }

        if let Some(size) = &self.size {
            if item.size.to_lowercase() != *size {
                return false;
            }
        }

        if let Some(city) = &self.city {
            if !item.owner.city.to_lowercase().contains(city.as_str()) {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let in_title = item.title.to_lowercase().contains(search.as_str());
            if !in_title && !item.description.to_lowercase().contains(search.as_str()) {
                return false;
            }
        }

        if self.min_price.is_some_and(|min| item.price_per_day < min) {
            return false;
        }

        if self.max_price.is_some_and(|max| item.price_per_day > max) {
            return false;
        }

        true
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.size.is_none()
            && self.city.is_none()
            && self.search.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }
}

fn needle(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_lowercase)
}

/// Positive integer or nothing; zero, negatives and garbage all fall through
fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|n| *n > 0)
}

/// Inclusive price bound; anything that is not a finite number means no bound
fn parse_price(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Resolve the requested page, defaulting to 1
pub fn parse_page(raw: Option<&str>) -> u64 {
    parse_positive(raw).unwrap_or(DEFAULT_PAGE)
}

/// Resolve the requested page size, defaulting to 12 and capped at 100
pub fn parse_per_page(raw: Option<&str>) -> u64 {
    parse_positive(raw).unwrap_or(DEFAULT_PER_PAGE).min(MAX_PER_PAGE)
}

/// Compute pagination metadata for `total` matching items
///
/// `has_prev` depends only on the requested page, so an out-of-range page of an
/// empty result still reports a previous page. A `per_page` of 0 counts as 1.
pub fn paginate(total: u64, page: u64, per_page: u64) -> Pagination {
    let per_page = per_page.max(1);
    let pages = total.div_ceil(per_page);

    Pagination {
        page,
        pages,
        per_page,
        total,
        has_next: page < pages,
        has_prev: page > 1,
    }
}

/// Filter and paginate `catalog` according to `params`
///
/// Never fails: malformed parameters fall back to defaults and an out-of-range
/// page yields an empty `items` list. Items keep catalog order.
pub fn query(catalog: &[Item], params: &ItemQuery) -> ItemPage {
    let page = parse_page(params.page.as_deref());
    let per_page = parse_per_page(params.per_page.as_deref());
    let filter = ItemFilter::from_query(params);

    let matching: Vec<&Item> = catalog.iter().filter(|item| filter.matches(item)).collect();
    let pagination = paginate(matching.len() as u64, page, per_page);

    let start = usize::try_from((page - 1).saturating_mul(per_page)).unwrap_or(usize::MAX);
    let items: Vec<Item> = matching
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect();

    tracing::debug!(
        page,
        per_page,
        total = pagination.total,
        returned = items.len(),
        filtered = !filter.is_empty(),
        "Catalog query evaluated"
    );

    ItemPage { items, pagination }
}
