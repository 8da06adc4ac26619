use super::{RestfulRouter, RestfulStrategy, SegmentKind};
use crate::action::ActionMeta;
use crate::restful::HyphenatedName;
use http::Method;

use SegmentKind::{EventSuffix as E, Identifier as I, ResourceName as R};

fn reserved() -> Vec<String> {
    vec!["swagger".to_string()]
}

fn numeric(segments: &[&str]) -> Option<Vec<SegmentKind>> {
    RestfulStrategy::NumericBased
        .classify(segments, &reserved())
        .map(|shape| shape.kinds().to_vec())
}

fn pair(segments: &[&str]) -> Option<Vec<SegmentKind>> {
    RestfulStrategy::PairBased
        .classify(segments, &reserved())
        .map(|shape| shape.kinds().to_vec())
}

fn names(list: &[&str]) -> Vec<HyphenatedName> {
    list.iter().map(|n| HyphenatedName::new(*n).unwrap()).collect()
}

#[test]
fn test_numeric_alternation() {
    assert_eq!(numeric(&["products"]), Some(vec![R]));
    assert_eq!(numeric(&["products", "1"]), Some(vec![R, I]));
    assert_eq!(numeric(&["products", "1", "purchases"]), Some(vec![R, I, R]));
    assert_eq!(numeric(&["products", "1", "purchases", "2"]), Some(vec![R, I, R, I]));
    assert_eq!(numeric(&["products", "-1"]), Some(vec![R, I]));
}

#[test]
fn test_numeric_rejects() {
    assert_eq!(numeric(&[]), None);
    assert_eq!(numeric(&["swagger", "index.html"]), None);
    assert_eq!(numeric(&["1", "products"]), None);
    assert_eq!(numeric(&["products", "1", "2"]), None);
}

#[test]
fn test_numeric_event_suffix() {
    assert_eq!(numeric(&["products", "sales"]), Some(vec![R, E]));
    assert_eq!(numeric(&["products", "sales", "1"]), Some(vec![R, E, I]));
    assert_eq!(
        numeric(&["products", "sales", "1", "purchases", "2"]),
        Some(vec![R, E, I, R, I])
    );
    // only one event segment is readable
    assert_eq!(numeric(&["products", "sales", "history"]), None);
    assert_eq!(numeric(&["products", "sales", "1", "purchases", "history"]), None);
}

#[test]
fn test_numeric_event_suffix_after_identifier_rejected() {
    assert_eq!(numeric(&["products", "1", "purchases", "sales"]), None);
    assert_eq!(numeric(&["products", "1", "purchases", "sales", "2"]), None);
    let router = RestfulRouter::numeric_based();
    assert!(!router.is_restful_path(&["products", "1", "purchases", "sales"]));
    assert_eq!(
        router.convert_to_mapping_path("/products/1/purchases/sales/", &Method::POST),
        None
    );
}

#[test]
fn test_names_without_words_rejected() {
    assert_eq!(numeric(&["products", "1", "-"]), None);
    assert_eq!(numeric(&["--5"]), None);
    assert_eq!(numeric(&["products", "--"]), None);
    assert_eq!(numeric(&["v-2", "1"]), None);
    assert_eq!(pair(&["products", "1", "-"]), None);
    assert_eq!(numeric(&["ballet-dancers", "1"]), Some(vec![R, I]));

    let router = RestfulRouter::numeric_based();
    assert_eq!(router.convert_to_mapping_path("/products/1/-/", &Method::POST), None);
    assert_eq!(router.convert_to_mapping_path("/--5/", &Method::POST), None);
}

#[test]
fn test_pair_alternation() {
    assert_eq!(pair(&["products", "1"]), Some(vec![R, I]));
    assert_eq!(pair(&["products", "abc", "purchases", "x-y"]), Some(vec![R, I, R, I]));
    assert_eq!(pair(&["products", "sales", "purchases"]), Some(vec![R, I, R]));
    assert_eq!(pair(&["1", "products"]), None);
    assert_eq!(pair(&["products", "abc", "2"]), None);
    assert_eq!(pair(&["swagger"]), None);
    assert_eq!(pair(&[]), None);
}

#[test]
fn test_is_parameter() {
    let numeric = RestfulStrategy::NumericBased;
    assert!(numeric.is_parameter("1", "{}"));
    assert!(numeric.is_parameter("{}", "{}"));
    assert!(!numeric.is_parameter("sales", "{}"));
    assert!(RestfulStrategy::PairBased.is_parameter("sales", "{}"));
}

#[test]
fn test_strategy_names() {
    assert_eq!("Numeric".parse::<RestfulStrategy>().unwrap(), RestfulStrategy::NumericBased);
    assert_eq!("pair-based".parse::<RestfulStrategy>().unwrap(), RestfulStrategy::PairBased);
    assert!("regex".parse::<RestfulStrategy>().is_err());
    assert_eq!(RestfulStrategy::PairBased.to_string(), "pair");
    assert!(RestfulStrategy::NumericBased.supports_virtual_list());
    assert!(!RestfulStrategy::PairBased.supports_virtual_list());
}

#[test]
fn test_forward_groups_names_first() {
    let router = RestfulRouter::numeric_based();
    let post = Method::POST;
    assert_eq!(
        router.convert_to_mapping_path("/products/1/purchases/", &post).as_deref(),
        Some("/products/purchases/1/")
    );
    assert_eq!(
        router.convert_to_mapping_path("products/1/purchases/2", &post).as_deref(),
        Some("/products/purchases/1/2/")
    );
    assert_eq!(
        router.convert_to_mapping_path("/products/sales/1/", &post).as_deref(),
        Some("/products/sales/1/")
    );
}

#[test]
fn test_forward_expands_hyphenated_names() {
    let router = RestfulRouter::numeric_based();
    assert_eq!(
        router
            .convert_to_mapping_path("/ballet-dancers/1/greetings/", &Method::PUT)
            .as_deref(),
        Some("/ballet/dancers/greetings/1/")
    );
}

#[test]
fn test_forward_passthrough() {
    let router = RestfulRouter::numeric_based();
    let mapping = router.to_mapping("/", &Method::GET);
    assert!(!mapping.restful);
    assert_eq!(mapping.mapping_path, "/");
    assert_eq!(mapping.restful_path(), None);

    let mapping = router.to_mapping("/swagger/index.html", &Method::GET);
    assert!(!mapping.restful);
    assert_eq!(mapping.mapping_path, "/swagger/index.html");
}

#[test]
fn test_forward_virtual_list() {
    let router = RestfulRouter::numeric_based().enable_virtual_list_handling();
    let get = Method::GET;
    assert_eq!(
        router.convert_to_mapping_path("/products/1/purchases/", &get).as_deref(),
        Some("/products/purchases/list/1/")
    );
    assert_eq!(
        router.convert_to_mapping_path("/products/", &get).as_deref(),
        Some("/products/list/")
    );
    // single resource by id
    assert_eq!(
        router.convert_to_mapping_path("/products/1/", &get).as_deref(),
        Some("/products/1/")
    );
    // event segment is not a list
    assert_eq!(
        router.convert_to_mapping_path("/products/sales/", &get).as_deref(),
        Some("/products/sales/")
    );
    // an earlier event segment does not suppress the marker
    assert_eq!(
        router
            .convert_to_mapping_path("/products/sales/1/purchases/", &get)
            .as_deref(),
        Some("/products/sales/purchases/list/1/")
    );
    assert_eq!(
        router
            .convert_to_mapping_path("/products/1/purchases/", &Method::POST)
            .as_deref(),
        Some("/products/purchases/1/")
    );
}

#[test]
fn test_forward_custom_list_marker() {
    let router = RestfulRouter::numeric_based()
        .enable_virtual_list_handling()
        .with_list_marker("all");
    assert_eq!(
        router
            .convert_to_mapping_path("/products/1/purchases/", &Method::GET)
            .as_deref(),
        Some("/products/purchases/all/1/")
    );
}

#[test]
fn test_forward_pair_based() {
    let router = RestfulRouter::pair_based().enable_virtual_list_handling();
    assert!(!router.is_virtual_list_handling());
    assert_eq!(
        router
            .convert_to_mapping_path("/products/abc/purchases/", &Method::GET)
            .as_deref(),
        Some("/products/purchases/abc/")
    );
    assert_eq!(
        router.convert_to_mapping_path("/products/a-b/", &Method::GET).as_deref(),
        Some("/products/a-b/")
    );
    assert_eq!(router.convert_to_mapping_path("/1/products/", &Method::GET), None);
}

#[test]
fn test_forward_custom_reserved_prefixes() {
    let router = RestfulRouter::numeric_based().with_reserved_prefixes(["api-docs"]);
    assert!(!router.to_mapping("/api-docs/1/", &Method::GET).restful);
    assert!(router.is_restful_path(&["products", "1"]));
    assert!(!router.is_restful_path::<&str>(&[]));
}

#[test]
fn test_reverse_interleaves_parameters() {
    let router = RestfulRouter::numeric_based();
    let two = ActionMeta::new("ProductsPurchasesAction", 2);
    assert_eq!(
        router.to_restful_url("/products/purchases/1/2/", &two).as_deref(),
        Some("/products/1/purchases/2/")
    );
    assert_eq!(
        router.to_restful_url("/products/purchases/1/", &two).as_deref(),
        Some("/products/1/purchases/")
    );
    assert_eq!(
        router.to_restful_url("/products/purchases/", &two).as_deref(),
        Some("/products/purchases/")
    );
    assert_eq!(
        router.to_restful_url("/products/purchases/{}/{}/", &two).as_deref(),
        Some("/products/{}/purchases/{}/")
    );
}

#[test]
fn test_reverse_event_keyword() {
    let router = RestfulRouter::numeric_based();
    let one = ActionMeta::new("ProductsAction", 1);
    assert_eq!(
        router.to_restful_url("/products/sales/1/", &one).as_deref(),
        Some("/products/sales/1/")
    );
    assert_eq!(
        router.to_restful_url("/products/sales/", &one).as_deref(),
        Some("/products/sales/")
    );
}

#[test]
fn test_reverse_event_keyword_without_restful_form() {
    let router = RestfulRouter::numeric_based();
    // the event would follow an identifier
    let two = ActionMeta::new("ProductsPurchasesAction", 2);
    assert_eq!(router.to_restful_url("/products/purchases/sales/1/2/", &two), None);
    assert_eq!(router.to_restful_url("/products/purchases/sales/", &two), None);
    // two keyword words and no alias to join them
    let one = ActionMeta::new("ProductsAction", 1);
    assert_eq!(router.to_restful_url("/products/sales/history/1/", &one), None);
}

#[test]
fn test_reverse_event_alias() {
    let router = RestfulRouter::numeric_based();
    let meta = ActionMeta::new("ProductsAction", 1)
        .with_event_suffix_hyphenated_names(names(&["sales-history"]));
    assert_eq!(
        router.to_restful_url("/products/sales/history/1/", &meta).as_deref(),
        Some("/products/sales-history/1/")
    );
}

#[test]
fn test_reverse_hyphenated_prefix() {
    let router = RestfulRouter::numeric_based();
    let meta = ActionMeta::new("BalletDancersGreetingsAction", 3)
        .with_hyphenated_names(names(&["ballet-dancers"]));
    assert_eq!(
        router.to_restful_url("/ballet/dancers/greetings/1/2/", &meta).as_deref(),
        Some("/ballet-dancers/1/greetings/2/")
    );
}

#[test]
fn test_reverse_not_applicable() {
    let router = RestfulRouter::numeric_based();
    let three = ActionMeta::new("ProductsPurchasesSalesAction", 3);
    assert_eq!(router.to_restful_url("/products/1/", &three), None);
    let excluded = ActionMeta::new("ProductsAction", 1).not_restful();
    assert_eq!(router.to_restful_url("/products/1/", &excluded), None);
}

#[test]
fn test_reverse_drops_list_keyword_only_with_virtual_list() {
    let two = ActionMeta::new("ProductsPurchasesAction", 2);
    let enabled = RestfulRouter::numeric_based().enable_virtual_list_handling();
    assert_eq!(
        enabled.to_restful_url("/products/purchases/list/1/", &two).as_deref(),
        Some("/products/1/purchases/")
    );
    // without the feature `list` is an ordinary event keyword
    let disabled = RestfulRouter::numeric_based();
    assert_eq!(disabled.to_restful_url("/products/purchases/list/1/", &two), None);
    let one = ActionMeta::new("ProductsAction", 1);
    assert_eq!(
        disabled.to_restful_url("/products/list/", &one).as_deref(),
        Some("/products/list/")
    );
}

#[test]
fn test_reverse_pair_based_has_no_keywords() {
    let router = RestfulRouter::pair_based();
    let two = ActionMeta::new("ProductsPurchasesAction", 2);
    assert_eq!(
        router.to_restful_url("/products/purchases/abc/xyz/", &two).as_deref(),
        Some("/products/abc/purchases/xyz/")
    );
    let one = ActionMeta::new("ProductsAction", 1);
    assert_eq!(
        router.to_restful_url("/products/sales/1/", &one).as_deref(),
        Some("/products/sales/1/")
    );
}

#[test]
fn test_reverse_surplus_and_zero_count() {
    let router = RestfulRouter::numeric_based();
    assert_eq!(
        router
            .to_restful_url("/products/1/2/", &ActionMeta::new("ProductsAction", 1))
            .as_deref(),
        Some("/products/1/2/")
    );
    assert_eq!(
        router
            .to_restful_url("/sales/1/", &ActionMeta::new("RootAction", 0))
            .as_deref(),
        Some("/sales/1/")
    );
}

#[test]
fn test_segment_kinds() {
    let router = RestfulRouter::numeric_based();
    assert_eq!(router.segment_kinds("/products/1/"), Some(vec![R, I]));
    assert_eq!(router.segment_kinds("/"), None);
}

#[test]
fn test_router_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestfulRouter>();
}
