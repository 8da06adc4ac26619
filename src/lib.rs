//! # restroute
//!
//! **restroute** converts between the physical URL paths of a RESTful API and
//! the logical action paths an action-dispatch web framework maps requests to.
//!
//! ## Overview
//!
//! Action-based frameworks resolve a handler from the leading path segments
//! (`/products/purchases/` -> `ProductsPurchasesAction`) and pass the rest as
//! parameters. RESTful URLs interleave identifiers with resource names
//! (`/products/1/purchases/`), so they have to be rearranged before action
//! resolution, and generated links have to be rearranged the other way.
//!
//! ## Architecture
//!
//! - **[`path`]** - Segment splitting and lexical checks
//! - **[`restful`]** - Classification strategies and the [`RestfulRouter`]
//! - **[`action`]** - Per-action metadata and the YAML action registry
//! - **[`runtime_config`]** - Router configuration from file and environment
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - The `restroute` command-line tool
//!
//! ### Request Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Client
//!     participant Host as Host framework
//!     participant Router as RestfulRouter
//!     participant Resolver as Action resolver
//!
//!     Client->>Host: GET /products/1/purchases/
//!     Host->>Router: to_mapping(path, GET)
//!     Router->>Router: classify segments<br/>(resource, identifier, resource)
//!     Router-->>Host: /products/purchases/list/1/ (restful)
//!     Host->>Resolver: resolve /products/purchases/list/1/
//!     Resolver-->>Host: ProductsPurchasesAction#get$list(1)
//! ```
//!
//! ### Link Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Host as Host framework
//!     participant Router as RestfulRouter
//!
//!     Host->>Host: action URL for ProductsPurchasesAction(1, 2)<br/>/products/purchases/1/2/
//!     Host->>Router: to_restful_url(url, ActionMeta { count: 2 })
//!     Router-->>Host: /products/1/purchases/2/
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use restroute::{ActionMeta, RestfulRouter};
//!
//! let router = RestfulRouter::numeric_based().enable_virtual_list_handling();
//!
//! let mapping = router.to_mapping("/products/1/purchases/", &Method::GET);
//! assert_eq!(mapping.restful_path(), Some("/products/purchases/list/1/"));
//!
//! let meta = ActionMeta::from_action_name("ProductsPurchasesAction");
//! assert_eq!(
//!     router.to_restful_url("/products/purchases/1/2/", &meta).as_deref(),
//!     Some("/products/1/purchases/2/")
//! );
//! ```
//!
//! ## Thread Safety
//!
//! A [`RestfulRouter`] holds only immutable configuration. Build it once and
//! share it (by reference or `Arc`) across request threads.

pub mod action;
pub mod cli;
pub mod logging;
pub mod path;
pub mod restful;
pub mod runtime_config;

pub use action::{ActionMeta, ActionRegistry};
pub use restful::{HyphenatedName, RestfulRouter, RestfulStrategy, SegmentKind, UrlMapping};
pub use runtime_config::{ConfigError, RouterConfig};
