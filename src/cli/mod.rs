//! # CLI Module
//!
//! Command-line front end for checking how paths are routed.
//!
//! ## Commands
//!
//! ### `classify`
//!
//! ```bash
//! restroute classify /products/1/purchases/
//! # /products/1/purchases/: restful [resource, identifier, resource]
//! ```
//!
//! ### `forward`
//!
//! ```bash
//! restroute --virtual-list forward /products/1/purchases/ --method GET
//! # /products/1/purchases/ -> /products/purchases/list/1/
//! ```
//!
//! ### `reverse`
//!
//! ```bash
//! restroute reverse /ballet/dancers/1/ -n 2 --hyphenate ballet-dancers
//! # /ballet/dancers/1/ -> /ballet-dancers/1/
//!
//! restroute reverse /products/purchases/1/ --action ProductsPurchasesAction --actions actions.yaml
//! ```
//!
//! Global options: `--config <FILE>`, `--strategy numeric|pair`,
//! `--virtual-list`, `--json`. `RESTROUTE_*` environment variables apply as
//! described in [`crate::runtime_config`].

mod commands;


pub use commands::{build_router, execute, run_cli, Cli, Commands};
