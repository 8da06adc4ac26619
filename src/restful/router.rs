//! Restful router core - forward and reverse path conversion.

use crate::action::ActionMeta;
use crate::path::{build_path, split_path, split_query, Segments};
use crate::runtime_config::{RouterConfig, DEFAULT_LIST_MARKER, DEFAULT_PLACEHOLDER, DEFAULT_RESERVED_PREFIX};
use http::Method;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::{debug, info};

use super::hyphenate::{find_event_alias, group_resource_names};
use super::strategy::{RestfulShape, RestfulStrategy, SegmentKind};

/// Result of converting a request path for the action-mapping resolver.
///
/// When `restful` is `false` the mapping path is the untouched request path
/// and the resolver should use conventional routing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlMapping {
    /// Path as received
    pub request_path: String,
    /// Path to resolve actions against
    pub mapping_path: String,
    /// Whether the mapping path was produced by RESTful conversion
    pub restful: bool,
}

impl UrlMapping {
    fn passthrough(request_path: &str) -> Self {
        Self {
            request_path: request_path.to_string(),
            mapping_path: request_path.to_string(),
            restful: false,
        }
    }

    /// The converted path, or `None` for non-RESTful requests.
    #[must_use]
    pub fn restful_path(&self) -> Option<&str> {
        self.restful.then_some(self.mapping_path.as_str())
    }
}

/// Converts between physical RESTful paths and logical action paths.
///
/// Immutable after construction and safe to share across request threads.
///
/// # Example
///
/// ```rust
/// use http::Method;
/// use restroute::action::ActionMeta;
/// use restroute::restful::RestfulRouter;
///
/// let router = RestfulRouter::numeric_based();
///
/// let mapping = router.to_mapping("/products/1/purchases/", &Method::POST);
/// assert_eq!(mapping.restful_path(), Some("/products/purchases/1/"));
///
/// let meta = ActionMeta::from_action_name("ProductsPurchasesAction");
/// let url = router.to_restful_url("/products/purchases/1/", &meta);
/// assert_eq!(url.as_deref(), Some("/products/1/purchases/"));
/// ```
#[derive(Debug, Clone)]
pub struct RestfulRouter {
    strategy: RestfulStrategy,
    virtual_list_handling: bool,
    list_marker: String,
    reserved_prefixes: Vec<String>,
    placeholder: String,
}

impl RestfulRouter {
    /// Create a router with default settings for the given strategy.
    #[must_use]
    pub fn new(strategy: RestfulStrategy) -> Self {
        Self {
            strategy,
            virtual_list_handling: false,
            list_marker: DEFAULT_LIST_MARKER.to_string(),
            reserved_prefixes: vec![DEFAULT_RESERVED_PREFIX.to_string()],
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Router whose identifiers are decimal numbers.
    #[must_use]
    pub fn numeric_based() -> Self {
        Self::new(RestfulStrategy::NumericBased)
    }

    /// Router with strict resource/identifier pairs.
    #[must_use]
    pub fn pair_based() -> Self {
        Self::new(RestfulStrategy::PairBased)
    }

    /// Build a router from validated configuration.
    pub fn from_config(config: &RouterConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let router = Self {
            strategy: config.strategy,
            virtual_list_handling: config.virtual_list_handling,
            list_marker: config.list_marker.clone(),
            reserved_prefixes: config.reserved_prefixes.clone(),
            placeholder: config.placeholder.clone(),
        };
        info!(
            strategy = %router.strategy,
            virtual_list_handling = router.virtual_list_handling,
            list_marker = %router.list_marker,
            reserved_prefixes = ?router.reserved_prefixes,
            "Restful router configured"
        );
        Ok(router)
    }

    /// Insert the list marker for GET requests ending with a resource name.
    #[must_use]
    pub fn enable_virtual_list_handling(mut self) -> Self {
        self.virtual_list_handling = true;
        self
    }

    /// Replace the virtual list marker literal.
    #[must_use]
    pub fn with_list_marker(mut self, marker: impl Into<String>) -> Self {
        self.list_marker = marker.into();
        self
    }

    /// Replace the first segments that are never RESTful.
    #[must_use]
    pub fn with_reserved_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn strategy(&self) -> RestfulStrategy {
        self.strategy
    }

    #[must_use]
    pub fn list_marker(&self) -> &str {
        &self.list_marker
    }

    #[must_use]
    pub fn is_virtual_list_handling(&self) -> bool {
        self.virtual_list_handling && self.strategy.supports_virtual_list()
    }

    /// Classify a request path.
    #[must_use]
    pub fn classify(&self, request_path: &str) -> Option<RestfulShape> {
        let segments = split_path(request_path);
        self.strategy.classify(&segments, &self.reserved_prefixes)
    }

    /// Whether split segments form a RESTful path.
    #[must_use]
    pub fn is_restful_path<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        self.strategy.is_restful_path(segments, &self.reserved_prefixes)
    }

    /// Convert a physical request path to the mapping path.
    ///
    /// Resource names (hyphen-expanded) come first, then the list marker when
    /// it applies, then identifiers in their original order.
    ///
    /// ```text
    /// /products/1/purchases/      -> /products/purchases/1/
    /// /ballet-dancers/1/          -> /ballet/dancers/1/
    /// /products/1/purchases/ GET  -> /products/purchases/list/1/   (virtual list on)
    /// ```
    #[must_use]
    pub fn to_mapping(&self, request_path: &str, method: &Method) -> UrlMapping {
        let segments = split_path(request_path);
        let Some(shape) = self.strategy.classify(&segments, &self.reserved_prefixes) else {
            debug!(
                request_path = %request_path,
                strategy = %self.strategy,
                "Not a restful path"
            );
            return UrlMapping::passthrough(request_path);
        };

        let mut names: Segments<'_> = SmallVec::new();
        let mut identifiers: Segments<'_> = SmallVec::new();
        for (segment, kind) in segments.iter().copied().zip(shape.kinds()) {
            if kind.is_name() {
                names.extend(segment.split('-').filter(|s| !s.is_empty()));
            } else {
                identifiers.push(segment);
            }
        }

        let mut arranged: Segments<'_> = SmallVec::with_capacity(names.len() + identifiers.len() + 1);
        arranged.extend(names);
        let virtual_list = self.needs_virtual_list(&shape, method);
        if virtual_list {
            arranged.push(self.list_marker.as_str());
        }
        arranged.extend(identifiers);

        let mapping_path = build_path(&arranged);
        debug!(
            request_path = %request_path,
            mapping_path = %mapping_path,
            method = %method,
            virtual_list,
            "Restful path converted"
        );
        UrlMapping {
            request_path: request_path.to_string(),
            mapping_path,
            restful: true,
        }
    }

    /// Mapping path for a RESTful request, or `None` to fall back to conventional routing.
    #[must_use]
    pub fn convert_to_mapping_path(&self, request_path: &str, method: &Method) -> Option<String> {
        let mapping = self.to_mapping(request_path, method);
        mapping.restful.then_some(mapping.mapping_path)
    }

    fn needs_virtual_list(&self, shape: &RestfulShape, method: &Method) -> bool {
        self.is_virtual_list_handling()
            && *method == Method::GET
            && shape.ends_with_resource_name()
    }

    /// Convert a generated logical action URL to its physical RESTful form.
    ///
    /// The first `business_element_count` segments are the resource names,
    /// grouped by the action's hyphenated names. Remaining segments before the
    /// first parameter form the event keyword, emitted after the last
    /// resource name. Parameters are interleaved one per resource name; any
    /// surplus is appended. A query string or fragment is kept verbatim.
    ///
    /// Returns `None` when the action is not RESTful, the URL has fewer
    /// segments than the business element count, or the event keyword cannot
    /// be expressed as one segment after a single resource name.
    ///
    /// ```text
    /// /products/purchases/1/2/      (count 2) -> /products/1/purchases/2/
    /// /products/sales/1/            (count 1) -> /products/sales/1/
    /// /ballet/dancers/1/            (count 2, ballet-dancers) -> /ballet-dancers/1/
    /// ```
    #[must_use]
    pub fn to_restful_url(&self, action_url: &str, meta: &ActionMeta) -> Option<String> {
        if !meta.restful {
            debug!(action = %meta.name, "Action is not restful, reverse routing skipped");
            return None;
        }
        let (path, suffix) = split_query(action_url);
        let segments = split_path(path);
        let count = meta.business_element_count;
        if segments.len() < count {
            debug!(
                action = %meta.name,
                action_url = %action_url,
                business_element_count = count,
                segment_count = segments.len(),
                "Action URL shorter than business elements, reverse routing skipped"
            );
            return None;
        }

        let (prefix, rest) = segments.split_at(count);
        let resources = group_resource_names(prefix, &meta.hyphenated_names);

        let mut keywords: Segments<'_> = SmallVec::new();
        let mut parameters: Segments<'_> = SmallVec::new();
        for segment in rest.iter().copied() {
            if parameters.is_empty() && !self.strategy.is_parameter(segment, &self.placeholder) {
                keywords.push(segment);
            } else {
                parameters.push(segment);
            }
        }
        if self.is_virtual_list_handling() && keywords.len() == 1 && keywords[0] == self.list_marker {
            keywords.clear();
        }
        if let Some(alias) = find_event_alias(&keywords, &meta.event_suffix_hyphenated_names) {
            keywords.clear();
            keywords.push(alias.as_str());
        }
        // The event segment must be a single token directly after the first
        // resource name, before any identifier.
        if keywords.len() > 1 || (!keywords.is_empty() && resources.len() > 1) {
            debug!(
                action = %meta.name,
                action_url = %action_url,
                keywords = ?keywords,
                "Event keyword has no restful form, reverse routing skipped"
            );
            return None;
        }

        let mut arranged: Segments<'_> = SmallVec::with_capacity(segments.len());
        if resources.is_empty() {
            arranged.extend(keywords.iter().copied());
        }
        let last = resources.len().saturating_sub(1);
        let mut remaining = parameters.iter().copied();
        for (index, resource) in resources.iter().copied().enumerate() {
            arranged.push(resource);
            if index == last {
                arranged.extend(keywords.iter().copied());
            }
            if let Some(parameter) = remaining.next() {
                arranged.push(parameter);
            }
        }
        arranged.extend(remaining);

        let mut restful_url = build_path(&arranged);
        restful_url.push_str(suffix);
        debug!(
            action = %meta.name,
            action_url = %action_url,
            restful_url = %restful_url,
            "Action URL converted"
        );
        Some(restful_url)
    }

    /// Segment kinds for diagnostics, `None` for non-RESTful paths.
    #[must_use]
    pub fn segment_kinds(&self, request_path: &str) -> Option<Vec<SegmentKind>> {
        self.classify(request_path).map(|shape| shape.kinds().to_vec())
    }
}

impl Default for RestfulRouter {
    fn default() -> Self {
        Self::numeric_based()
    }
}
