//! Principal access-grant scenarios.

#[cfg(test)]
mod tests {
    use zonestack_model::input::{AssociationDirective, PrincipalKind};
    use zonestack_synth::SynthError;

    use crate::{
        FixtureAccounts, Lookup, RecordingPrincipals, app_portfolio, member_context,
        synthesize_portfolios,
    };

    fn synthesize_with(
        directives: Vec<AssociationDirective>,
        principals: &RecordingPrincipals,
    ) -> Result<zonestack_model::SynthesizedTemplate, SynthError> {
        let mut portfolio = app_portfolio();
        portfolio.associations = directives;
        let ctx = member_context("222222222222", "eu-west-1");
        let accounts = FixtureAccounts::default().with_account("Shared", "222222222222");
        synthesize_portfolios(vec![portfolio], &ctx, &accounts, principals)
    }

    #[test]
    fn test_should_resolve_each_recognized_kind_by_its_own_path() {
        let principals = RecordingPrincipals::default()
            .with_group("developers", "arn:aws:iam::222222222222:group/developers")
            .with_user("alice", "arn:aws:iam::222222222222:user/alice")
            .with_role("deployer", "arn:aws:iam::222222222222:role/deployer");

        let out = synthesize_with(
            vec![
                AssociationDirective {
                    kind: PrincipalKind::Group,
                    name: String::from("developers"),
                },
                AssociationDirective {
                    kind: PrincipalKind::User,
                    name: String::from("alice"),
                },
                AssociationDirective {
                    kind: PrincipalKind::Role,
                    name: String::from("deployer"),
                },
            ],
            &principals,
        )
        .unwrap();

        assert_eq!(out.principal_associations().count(), 3);
        assert_eq!(
            principals.lookups(),
            vec![
                Lookup::Group(String::from("developers")),
                Lookup::User(String::from("alice")),
                Lookup::Role(String::from("deployer")),
            ]
        );
    }

    #[test]
    fn test_should_grant_role_access_for_permission_set() {
        // Directive {type: "PermissionSet", name: "AdminPS"}: exactly one
        // permission-set ARN lookup followed by one role-based grant using
        // the resolved ARN.
        let role_arn =
            "arn:aws:iam::222222222222:role/aws-reserved/sso.amazonaws.com/AWSReservedSSO_AdminPS";
        let principals = RecordingPrincipals::default().with_permission_set("AdminPS", role_arn);

        let out = synthesize_with(
            vec![AssociationDirective {
                kind: PrincipalKind::PermissionSet,
                name: String::from("AdminPS"),
            }],
            &principals,
        )
        .unwrap();

        assert_eq!(
            principals.lookups(),
            vec![
                Lookup::PermissionSet(String::from("AdminPS")),
                Lookup::RoleByArn(String::from(role_arn)),
            ]
        );
        let grants: Vec<_> = out.principal_associations().collect();
        assert_eq!(grants.len(), 1);
        assert_eq!(grants[0].principal_arn, role_arn);
        assert_eq!(grants[0].principal_kind, PrincipalKind::PermissionSet);
    }

    #[test]
    fn test_should_make_no_lookup_for_unrecognized_kind() {
        let principals = RecordingPrincipals::default();

        let out = synthesize_with(
            vec![AssociationDirective {
                kind: PrincipalKind::Unknown(String::from("ServiceAccount")),
                name: String::from("ci"),
            }],
            &principals,
        )
        .unwrap();

        assert!(principals.lookups().is_empty());
        assert_eq!(out.principal_associations().count(), 0);
    }

    #[test]
    fn test_should_abort_with_principal_and_account_in_error() {
        let err = synthesize_with(
            vec![AssociationDirective {
                kind: PrincipalKind::Group,
                name: String::from("missing-group"),
            }],
            &RecordingPrincipals::default(),
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("missing-group"));
        assert!(message.contains("222222222222"));
    }
}
