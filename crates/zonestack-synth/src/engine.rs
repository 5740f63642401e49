//! The top-level synthesizer.

use tracing::{debug, info};

use zonestack_core::{DeploymentContext, SynthConfig};
use zonestack_model::LandingZoneConfig;
use zonestack_model::input::PortfolioDefinition;
use zonestack_model::output::SynthesizedTemplate;

use crate::association::synthesize_association;
use crate::error::SynthResult;
use crate::portfolio::synthesize_portfolio;
use crate::product::synthesize_product;
use crate::resolver::{AccountResolver, PrincipalResolver};
use crate::share::synthesize_shares;
use crate::stack_set::synthesize_stack_sets;
use crate::template_store::TemplateStore;

/// Walks a landing-zone configuration for one account/region context and
/// emits the declarations the deployment backend applies.
///
/// The synthesizer holds no state of its own; the output is a pure function
/// of the configuration and the deployment context, except for the
/// declaration emission itself. Either the whole account/region synthesizes
/// or the first error aborts the run.
pub struct Synthesizer<'a> {
    ctx: &'a DeploymentContext,
    config: &'a SynthConfig,
    accounts: &'a dyn AccountResolver,
    principals: &'a dyn PrincipalResolver,
    templates: &'a dyn TemplateStore,
}

impl std::fmt::Debug for Synthesizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Synthesizer")
            .field("ctx", &self.ctx)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a> Synthesizer<'a> {
    /// Create a synthesizer for one deployment context.
    #[must_use]
    pub fn new(
        ctx: &'a DeploymentContext,
        config: &'a SynthConfig,
        accounts: &'a dyn AccountResolver,
        principals: &'a dyn PrincipalResolver,
        templates: &'a dyn TemplateStore,
    ) -> Self {
        Self {
            ctx,
            config,
            accounts,
            principals,
            templates,
        }
    }

    /// Synthesize every declaration the configuration yields for this
    /// context, in declaration order.
    pub fn synthesize(&self, config: &LandingZoneConfig) -> SynthResult<SynthesizedTemplate> {
        let mut out = SynthesizedTemplate::new();

        synthesize_stack_sets(
            &config.stack_sets,
            self.ctx,
            self.accounts,
            self.templates,
            &mut out,
        )?;

        for portfolio in &config.portfolios {
            if self.applies_here(portfolio)? {
                self.synthesize_portfolio_tree(portfolio, &mut out)?;
            }
        }

        info!(
            account = %self.ctx.account,
            region = %self.ctx.region,
            declarations = out.declarations.len(),
            "synthesis complete"
        );
        Ok(out)
    }

    /// A portfolio applies when its resolved account is the current account
    /// and the current region is in its region list.
    fn applies_here(&self, portfolio: &PortfolioDefinition) -> SynthResult<bool> {
        let account = self.accounts.resolve_account(&portfolio.account)?;
        let applies =
            account == self.ctx.account && portfolio.regions.contains(&self.ctx.region);
        if !applies {
            debug!(portfolio = %portfolio.name, "portfolio out of scope for this context");
        }
        Ok(applies)
    }

    fn synthesize_portfolio_tree(
        &self,
        definition: &PortfolioDefinition,
        out: &mut SynthesizedTemplate,
    ) -> SynthResult<()> {
        let portfolio = synthesize_portfolio(definition, self.config, out);

        synthesize_shares(
            &definition.name,
            &portfolio,
            &definition.share_targets,
            self.ctx,
            self.config,
            self.accounts,
            out,
        )?;

        for product in &definition.products {
            synthesize_product(product, &definition.name, &portfolio, self.config, out);
        }

        for directive in &definition.associations {
            synthesize_association(
                directive,
                &definition.name,
                &portfolio,
                self.ctx,
                self.principals,
                out,
            )?;
        }

        Ok(())
    }
}
