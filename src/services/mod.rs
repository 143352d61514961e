//! Business logic services

pub mod aggregate_service;
pub mod catalogue_service;
pub mod filter_service;
pub mod problem_service;

pub use aggregate_service::{AggregateService, CategorySummary, Overview, PlatformStats, Totals};
pub use catalogue_service::CatalogueService;
pub use filter_service::{FilterOption, FilterService, ProblemFilter};
pub use problem_service::{resolve_language, split_description, ProblemService};
