//! Landing-zone resource synthesis engine.
//!
//! Walks a [`zonestack_model::LandingZoneConfig`] for one account/region
//! context and emits the resource declarations and parameter registrations
//! the deployment backend applies: stack sets, portfolios, portfolio shares,
//! products with their provisioning artifacts, and principal access grants.
//!
//! Synthesis is synchronous and single-threaded; configuration entries are
//! processed in declaration order and every declaration is appended to an
//! in-memory [`zonestack_model::SynthesizedTemplate`]. External collaborators
//! (account/OU resolution, IAM and Identity Center lookups, template file
//! access) are reached through the traits in [`resolver`] and
//! [`template_store`].

mod association;
mod engine;
mod error;
mod portfolio;
mod product;
mod resolver;
mod share;
mod stack_set;
mod template_store;

#[cfg(test)]
mod testing;

pub use engine::Synthesizer;
pub use error::{SynthError, SynthResult};
pub use resolver::{AccountResolver, PrincipalResolver};
pub use template_store::{FsTemplateStore, TemplateStore};
