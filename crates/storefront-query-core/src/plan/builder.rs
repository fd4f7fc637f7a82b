use super::{
    Aggregate, OrderDirection, OrderKey, OrderSpec, PageSpec, QueryDescriptor, fields,
};
use crate::{
    filter::{FilterSpec, SortKey},
    predicate::{Predicate, escape_like},
};

/// Translate a resolved [`FilterSpec`] into a [`QueryDescriptor`].
///
/// Predicates are emitted in a fixed order: the published baseline, search,
/// category, brand, gender, then the variant existence checks (color, lower
/// price bound, upper price bound). Each price bound is its own existence
/// check, so a product matches when *some* variant meets each bound.
#[must_use]
pub fn build_descriptor(spec: &FilterSpec) -> QueryDescriptor {
    let mut predicates = vec![Predicate::eq(fields::IS_PUBLISHED, true)];

    if let Some(search) = &spec.search {
        let pattern = format!("%{}%", escape_like(search));
        predicates.push(
            Predicate::text_match_ci(fields::NAME, pattern.clone())
                | Predicate::text_match_ci(fields::DESCRIPTION, pattern),
        );
    }

    if !spec.category_ids.is_empty() {
        predicates.push(Predicate::in_(fields::CATEGORY_ID, spec.category_ids.clone()));
    }

    if !spec.brand_ids.is_empty() {
        predicates.push(Predicate::in_(fields::BRAND_ID, spec.brand_ids.clone()));
    }

    if let Some(gender) = spec.gender {
        predicates.push(Predicate::eq(fields::GENDER, gender.as_str()));
    }

    if !spec.color_ids.is_empty() {
        predicates.push(Predicate::exists(
            fields::VARIANTS,
            Predicate::in_(fields::COLOR_ID, spec.color_ids.clone()),
        ));
    }

    if let Some(min) = spec.price_min {
        predicates.push(Predicate::exists(
            fields::VARIANTS,
            Predicate::gte(fields::PRICE, min),
        ));
    }

    if let Some(max) = spec.price_max {
        predicates.push(Predicate::exists(
            fields::VARIANTS,
            Predicate::lte(fields::PRICE, max),
        ));
    }

    let descriptor = QueryDescriptor {
        predicates,
        order: order_for(spec.sort_by),
        page: PageSpec {
            limit: spec.limit,
            offset: spec.page.saturating_sub(1).saturating_mul(spec.limit),
        },
        color_filter_ids: spec.color_ids.clone(),
    };

    tracing::debug!(
        predicates = descriptor.predicates.len(),
        order_terms = descriptor.order.fields.len(),
        offset = descriptor.page.offset,
        limit = descriptor.page.limit,
        "built query descriptor"
    );

    descriptor
}

// Price sorts tie-break on recency; the default is recency alone.
fn order_for(sort_by: Option<SortKey>) -> OrderSpec {
    let latest = (OrderKey::field(fields::CREATED_AT), OrderDirection::Desc);

    let terms = match sort_by {
        Some(SortKey::PriceAsc) => vec![
            (
                OrderKey::aggregate(Aggregate::Min, fields::VARIANTS, fields::PRICE),
                OrderDirection::Asc,
            ),
            latest,
        ],
        Some(SortKey::PriceDesc) => vec![
            (
                OrderKey::aggregate(Aggregate::Max, fields::VARIANTS, fields::PRICE),
                OrderDirection::Desc,
            ),
            latest,
        ],
        Some(SortKey::Latest) | None => vec![latest],
    };

    OrderSpec { fields: terms }
}
