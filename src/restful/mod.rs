//! # Restful Module
//!
//! The restful module converts between physical RESTful URL paths and the
//! logical action paths an action-dispatch framework resolves handlers from.
//!
//! ## Overview
//!
//! Physical paths interleave resource names with identifiers:
//!
//! ```text
//! /products/1/purchases/2/
//! ```
//!
//! Action mapping paths group the resource names first and move identifiers
//! to the tail, so `ProductsPurchasesAction` receives both identifiers as
//! parameters:
//!
//! ```text
//! /products/purchases/1/2/
//! ```
//!
//! ## Architecture
//!
//! - **[`RestfulStrategy`]** decides whether a path is RESTful and classifies
//!   each segment. `NumericBased` treats decimal numbers as identifiers;
//!   `PairBased` treats every odd segment as an identifier.
//! - **[`RestfulRouter`]** performs the forward conversion (request path to
//!   mapping path) and the reverse conversion (generated action URL to
//!   physical URL).
//! - **[`HyphenatedName`]** declares one-segment aliases for multi-word
//!   resources (`ballet-dancers`) and event keywords (`sales-history`).
//!
//! ## Forward Conversion
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Host as Action resolver
//!     participant Router as RestfulRouter
//!     participant Strategy as RestfulStrategy
//!
//!     Host->>Router: to_mapping("/products/1/purchases/", GET)
//!     Router->>Strategy: classify([products, 1, purchases])
//!     Strategy-->>Router: [resource, identifier, resource]
//!     Router->>Router: names first, identifiers last,<br/>list marker for GET lists
//!     Router-->>Host: /products/purchases/list/1/ (restful)
//! ```
//!
//! Paths that do not classify are passed through unchanged with
//! `restful = false`, and the host uses conventional routing.
//!
//! ## Ambiguity
//!
//! Classification is best effort. Several physical layouts can collapse to
//! the same mapping path, and shapes the strategy cannot read with
//! confidence (identifiers at resource positions, several trailing
//! identifiers, an event segment after an identifier or more than one of
//! them, names made only of dashes or numbers) are reported as not RESTful.

mod hyphenate;
mod router;
mod strategy;
#[cfg(test)]
mod tests;

pub use hyphenate::{find_event_alias, group_resource_names, HyphenatedName};
pub use router::{RestfulRouter, UrlMapping};
pub use strategy::{RestfulShape, RestfulStrategy, SegmentKind};
