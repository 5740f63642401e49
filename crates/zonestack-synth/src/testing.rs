//! Shared test doubles for the engine's unit tests.

use std::collections::{HashMap, HashSet};

use zonestack_core::{AccountId, AwsRegion, DeploymentContext, OrgUnitId};

use crate::error::{SynthError, SynthResult};
use crate::resolver::{AccountResolver, PrincipalResolver};
use crate::template_store::TemplateStore;

/// Account resolver backed by fixed maps.
#[derive(Debug, Default)]
pub struct StaticAccounts {
    accounts: HashMap<String, AccountId>,
    ous: HashMap<String, OrgUnitId>,
}

impl StaticAccounts {
    pub fn with_account(mut self, name: &str, id: &str) -> Self {
        self.accounts
            .insert(name.to_owned(), AccountId::new(id).unwrap());
        self
    }

    pub fn with_ou(mut self, name: &str, id: &str) -> Self {
        self.ous.insert(name.to_owned(), OrgUnitId::new(id).unwrap());
        self
    }
}

impl AccountResolver for StaticAccounts {
    fn resolve_account(&self, name: &str) -> SynthResult<AccountId> {
        self.accounts
            .get(name)
            .cloned()
            .ok_or_else(|| SynthError::AccountResolution {
                name: name.to_owned(),
                reason: String::from("unknown account name"),
            })
    }

    fn resolve_organizational_unit(&self, name: &str) -> SynthResult<OrgUnitId> {
        self.ous
            .get(name)
            .cloned()
            .ok_or_else(|| SynthError::AccountResolution {
                name: name.to_owned(),
                reason: String::from("unknown organizational unit name"),
            })
    }
}

/// Principal resolver backed by fixed maps; remembers permission-set
/// lookups so tests can assert the resolution path taken.
#[derive(Debug, Default)]
pub struct StaticPrincipals {
    groups: HashMap<String, String>,
    users: HashMap<String, String>,
    roles: HashMap<String, String>,
    role_arns: HashSet<String>,
    permission_sets: HashMap<String, String>,
    permission_set_lookups: std::cell::RefCell<Vec<String>>,
}

impl StaticPrincipals {
    pub fn with_group(mut self, name: &str, arn: &str) -> Self {
        self.groups.insert(name.to_owned(), arn.to_owned());
        self
    }

    pub fn with_user(mut self, name: &str, arn: &str) -> Self {
        self.users.insert(name.to_owned(), arn.to_owned());
        self
    }

    pub fn with_role(mut self, name: &str, arn: &str) -> Self {
        self.roles.insert(name.to_owned(), arn.to_owned());
        self.role_arns.insert(arn.to_owned());
        self
    }

    pub fn with_permission_set(mut self, name: &str, role_arn: &str) -> Self {
        self.permission_sets
            .insert(name.to_owned(), role_arn.to_owned());
        self.role_arns.insert(role_arn.to_owned());
        self
    }

    pub fn permission_set_lookups(&self) -> Vec<String> {
        self.permission_set_lookups.borrow().clone()
    }
}

impl PrincipalResolver for StaticPrincipals {
    fn find_group_arn(&self, name: &str, _account: &AccountId) -> SynthResult<Option<String>> {
        Ok(self.groups.get(name).cloned())
    }

    fn find_user_arn(&self, name: &str, _account: &AccountId) -> SynthResult<Option<String>> {
        Ok(self.users.get(name).cloned())
    }

    fn find_role_arn(&self, name: &str, _account: &AccountId) -> SynthResult<Option<String>> {
        Ok(self.roles.get(name).cloned())
    }

    fn find_role_by_arn(&self, arn: &str) -> SynthResult<Option<String>> {
        Ok(self.role_arns.get(arn).cloned())
    }

    fn permission_set_role_arn(
        &self,
        permission_set: &str,
        _account: &AccountId,
    ) -> SynthResult<Option<String>> {
        self.permission_set_lookups
            .borrow_mut()
            .push(permission_set.to_owned());
        Ok(self.permission_sets.get(permission_set).cloned())
    }
}

/// Template store backed by a fixed map.
#[derive(Debug, Default)]
pub struct StaticTemplates(HashMap<String, String>);

impl StaticTemplates {
    pub fn with_template(mut self, path: &str, body: &str) -> Self {
        self.0.insert(path.to_owned(), body.to_owned());
        self
    }
}

impl TemplateStore for StaticTemplates {
    fn read_template(&self, path: &str) -> SynthResult<String> {
        self.0
            .get(path)
            .cloned()
            .ok_or_else(|| SynthError::TemplateRead {
                path: path.to_owned(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }
}

/// Context where the current account is also admin, home region, and
/// management account.
pub fn control_context(account: &str, region: &str) -> DeploymentContext {
    let id = AccountId::new(account).unwrap();
    DeploymentContext::builder()
        .account(id.clone())
        .region(AwsRegion::new(region))
        .admin_account(id.clone())
        .home_region(AwsRegion::new(region))
        .management_account(id)
        .organization_id(Some(String::from("o-example1234")))
        .build()
}

/// Context for a plain member account with separate control accounts.
pub fn member_context(account: &str, region: &str) -> DeploymentContext {
    DeploymentContext::builder()
        .account(AccountId::new(account).unwrap())
        .region(AwsRegion::new(region))
        .admin_account(AccountId::new("999999999999").unwrap())
        .home_region(AwsRegion::new("us-east-1"))
        .management_account(AccountId::new("999999999999").unwrap())
        .build()
}
