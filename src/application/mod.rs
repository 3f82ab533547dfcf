// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`query`]: Query services (CQRS read-side)
//!
//! The application layer sits between the domain layer (catalog, filtering)
//! and the presentation layer. It depends on domain types only.

pub mod query;
