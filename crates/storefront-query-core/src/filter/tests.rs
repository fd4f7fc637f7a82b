use super::*;
use crate::codec::{SearchParams, parse_search_params};

fn resolve(input: &str) -> FilterSpec {
    resolve_filters(input)
}

///
/// defaults
///

#[test]
fn empty_input_yields_first_page_defaults() {
    let spec = resolve("");
    assert_eq!(spec, FilterSpec::default());
    assert_eq!(spec.page, 1);
    assert_eq!(spec.limit, 12);
    assert!(spec.is_unfiltered());
}

#[test]
fn page_and_limit_are_clamped() {
    assert_eq!(resolve("limit=1000").limit, 60);
    assert_eq!(resolve("limit=0").limit, 1);
    assert_eq!(resolve("limit=-4").limit, 1);
    assert_eq!(resolve("limit=24").limit, 24);
    assert_eq!(resolve("page=0").page, 1);
    assert_eq!(resolve("page=-3").page, 1);
    assert_eq!(resolve("page=3").page, 3);
    assert_eq!(resolve("page=2.9").page, 2);
}

#[test]
fn malformed_numbers_fall_back_to_defaults() {
    let spec = resolve("page=two&limit=lots&priceMin=cheap&priceMax=inf");
    assert_eq!(spec.page, 1);
    assert_eq!(spec.limit, 12);
    assert_eq!(spec.price_min, None);
    assert_eq!(spec.price_max, None);
}

///
/// text fields
///

#[test]
fn search_is_trimmed_and_blank_is_absent() {
    assert_eq!(resolve("search=++air+max++").search.as_deref(), Some("air max"));
    assert_eq!(resolve("search=+++").search, None);
}

#[test]
fn gender_is_trimmed_and_validated() {
    assert_eq!(resolve("gender=women").gender, Some(Gender::Women));
    assert_eq!(resolve("gender=+kids+").gender, Some(Gender::Kids));
    assert_eq!(resolve("gender=aliens").gender, None);
    assert_eq!(resolve("gender=").gender, None);
}

#[test]
fn first_gender_wins() {
    assert_eq!(resolve("gender=men,women").gender, Some(Gender::Men));
}

///
/// sort
///

#[test]
fn sort_values_are_normalized() {
    assert_eq!(resolve("sort=featured").sort_by, None);
    assert_eq!(resolve("sort=newest").sort_by, Some(SortKey::Latest));
    assert_eq!(resolve("sort=bogus").sort_by, None);
    assert_eq!(resolve("sortBy=price_asc").sort_by, Some(SortKey::PriceAsc));
}

#[test]
fn sort_key_takes_precedence_over_sort_by() {
    let spec = resolve("sortBy=price_asc&sort=price_desc");
    assert_eq!(spec.sort_by, Some(SortKey::PriceDesc));
}

///
/// id sets
///

#[test]
fn synonym_keys_merge_in_order() {
    let spec = resolve("category=shoes&categoryIds=boots,sneakers");
    assert_eq!(spec.category_ids, ["shoes", "boots", "sneakers"]);
}

#[test]
fn id_sets_are_deduplicated() {
    let spec = resolve("brand=nike&brandId=jordan&brandIds=nike,acg&color=red&colorIds=red");
    assert_eq!(spec.brand_ids, ["nike", "jordan", "acg"]);
    assert_eq!(spec.color_ids, ["red"]);
}

///
/// price
///

#[test]
fn explicit_price_bounds() {
    let spec = resolve("priceMin=25&priceMax=80.5");
    assert_eq!(spec.price_min, Some(25.0));
    assert_eq!(spec.price_max, Some(80.5));
}

#[test]
fn negative_price_min_floors_at_zero() {
    assert_eq!(resolve("priceMin=-10").price_min, Some(0.0));
}

#[test]
fn price_bands_union() {
    let spec = resolve("price=under-100,150-200");
    assert_eq!(spec.price_min, Some(0.0));
    assert_eq!(spec.price_max, Some(200.0));

    let spec = resolve("price=under-100&priceIds=200-plus");
    assert_eq!(spec.price_min, Some(0.0));
    assert_eq!(spec.price_max, None);
}

#[test]
fn unknown_price_bands_are_ignored() {
    let spec = resolve("price=cheap,100-150");
    assert_eq!(spec.price_min, Some(100.0));
    assert_eq!(spec.price_max, Some(150.0));

    assert_eq!(resolve("price=cheap").price_min, None);
}

#[test]
fn explicit_bounds_merge_with_bands() {
    let spec = resolve("priceMin=120&priceMax=300&price=100-150");
    assert_eq!(spec.price_min, Some(100.0));
    assert_eq!(spec.price_max, Some(300.0));
}

///
/// input shapes
///

#[test]
fn record_and_normalized_inputs_agree() {
    let params = SearchParams::new()
        .with_many("color", ["red,blue"])
        .with_one("price", "under-100")
        .with_one("sort", "price_desc")
        .with_one("page", "2");

    let from_params = resolve_filters(&params);
    let from_query = resolve_filters(&parse_search_params(&params));
    let from_text = resolve("color=red,blue&price=under-100&sort=price_desc&page=2");

    assert_eq!(from_params, from_text);
    assert_eq!(from_query, from_text);
}

#[test]
fn end_to_end_filter_spec() {
    let spec = resolve("color=red,blue&price=under-100&sort=price_desc&page=2");

    assert_eq!(
        spec,
        FilterSpec {
            color_ids: vec!["red".to_string(), "blue".to_string()],
            price_min: Some(0.0),
            price_max: Some(100.0),
            sort_by: Some(SortKey::PriceDesc),
            page: 2,
            limit: 12,
            ..FilterSpec::default()
        }
    );
}

#[test]
fn resolver_honours_configured_policy() {
    let config = CatalogConfig {
        default_limit: 24,
        max_limit: 48,
        price_bands: vec![PriceBand::new("budget", "Budget", 0.0, Some(50.0))],
        ..CatalogConfig::default()
    };
    let resolver = FilterResolver::from_config(&config);

    let spec = resolver.resolve("price=budget,under-100");
    assert_eq!(spec.limit, 24);
    assert_eq!(spec.price_min, Some(0.0));
    assert_eq!(spec.price_max, Some(50.0));

    assert_eq!(resolver.resolve("limit=100").limit, 48);
}

#[test]
fn spec_serializes_without_absent_fields() {
    let spec = resolve("color=red&page=2");
    let json = serde_json::to_value(&spec).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "colorIds": ["red"], "page": 2, "limit": 12 })
    );
}

#[test]
#[tracing_test::traced_test]
fn resolve_logs_summary() {
    let _ = resolve("gender=men&page=4");
    assert!(logs_contain("resolved filter spec"));
    assert!(logs_contain("page=4"));
}
