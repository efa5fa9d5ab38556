//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod disclosure_command;
mod disclosure_query;
mod disclosure_repository;
mod progress_query;

#[cfg(test)]
pub use disclosure_command::MockDisclosureCommand;
pub use disclosure_command::DisclosureCommand;
#[cfg(test)]
pub use disclosure_query::MockDisclosureQuery;
pub use disclosure_query::DisclosureQuery;
#[cfg(test)]
pub use disclosure_repository::MockDisclosureRepository;
pub use disclosure_repository::{
    DisclosureRepository, DisclosureRepositoryError, FixtureDisclosureRepository,
    NewDisclosureRecord,
};
#[cfg(test)]
pub use progress_query::MockProgressQuery;
pub use progress_query::{FixtureProgressQuery, ProgressQuery};
