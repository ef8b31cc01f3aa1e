//! Helpers shipped alongside the como compositor: a kconf_update filter for
//! the desktop grid click setting and a clang-tidy runner for CI.

pub mod fetch;
pub mod logging;
pub mod mapping;
pub mod migration;
pub mod tidy;
