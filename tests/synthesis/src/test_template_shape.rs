//! Serialized-shape assertions on a full synthesized template.

#[cfg(test)]
mod tests {
    use zonestack_model::input::{
        AssociationDirective, PrincipalKind, ProductDefinition, ProductVersionDefinition,
        ShareTargets,
    };

    use crate::{
        FixtureAccounts, RecordingPrincipals, app_portfolio, control_context,
        synthesize_portfolios,
    };

    #[test]
    fn test_should_serialize_declarations_in_backend_wire_shape() {
        let mut portfolio = app_portfolio();
        portfolio.share_targets = ShareTargets {
            accounts: vec![String::from("111111111111")],
            organizational_units: vec![String::from("Root")],
            share_tag_options: false,
        };
        portfolio.products = vec![ProductDefinition {
            name: String::from("vpc-product"),
            owner: String::from("platform-team"),
            distributor: None,
            description: None,
            support: None,
            tag_options: None,
            versions: vec![ProductVersionDefinition {
                name: String::from("v1"),
                description: None,
                template_path: String::from("products/vpc/v1.yaml"),
            }],
        }];
        portfolio.associations = vec![AssociationDirective {
            kind: PrincipalKind::Group,
            name: String::from("developers"),
        }];

        let ctx = control_context("222222222222", "eu-west-1");
        let accounts = FixtureAccounts::default().with_account("Shared", "222222222222");
        let principals = RecordingPrincipals::default()
            .with_group("developers", "arn:aws:iam::222222222222:group/developers");

        let out = synthesize_portfolios(vec![portfolio], &ctx, &accounts, &principals).unwrap();
        let json = serde_json::to_value(&out).unwrap();

        // Emission order: portfolio, account share, org share, product,
        // product association, principal association.
        let declarations = json["Declarations"].as_array().unwrap();
        let types: Vec<&str> = declarations
            .iter()
            .map(|d| d["Type"].as_str().unwrap())
            .collect();
        assert_eq!(
            types,
            vec![
                "Portfolio",
                "AccountShare",
                "OrganizationShare",
                "Product",
                "ProductAssociation",
                "PrincipalAssociation",
            ]
        );

        assert_eq!(declarations[0]["DisplayName"], "AppPortfolio");
        assert_eq!(declarations[1]["AccountId"], "111111111111");
        assert_eq!(declarations[2]["OrganizationWide"], true);
        assert_eq!(declarations[3]["ProvisioningArtifacts"][0]["ValidateTemplate"], true);
        assert_eq!(
            declarations[5]["PrincipalArn"],
            "arn:aws:iam::222222222222:group/developers"
        );

        assert_eq!(
            json["Parameters"][0]["Name"],
            "/zonestack/servicecatalog/portfolios/AppPortfolio/id"
        );
    }
}
