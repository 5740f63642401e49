//! Stack-set emission scenarios.

#[cfg(test)]
mod tests {
    use zonestack_core::AwsRegion;
    use zonestack_model::input::{
        Capability, DeploymentTargets, LandingZoneConfig, StackSetDefinition,
    };
    use zonestack_synth::SynthError;

    use crate::{
        FixtureAccounts, RecordingPrincipals, control_context, member_context,
        synthesize_with_templates,
    };

    const VPC_TEMPLATE: &str = "Resources:\n  Vpc:\n    Type: AWS::EC2::VPC\n";

    fn config() -> LandingZoneConfig {
        LandingZoneConfig {
            stack_sets: vec![StackSetDefinition {
                name: String::from("baseline-vpc"),
                description: Some(String::from("baseline networking")),
                capabilities: vec![Capability::NamedIam],
                targets: DeploymentTargets {
                    accounts: vec![String::from("Network")],
                    organizational_units: vec![String::from("Workloads")],
                },
                regions: vec![AwsRegion::new("eu-west-1"), AwsRegion::new("us-east-1")],
                template_path: String::from("stacksets/vpc.yaml"),
            }],
            portfolios: vec![],
        }
    }

    fn accounts() -> FixtureAccounts {
        FixtureAccounts::default()
            .with_account("Network", "333333333333")
            .with_ou("Workloads", "ou-ab12-cdef3456")
    }

    fn template_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("stacksets")).unwrap();
        std::fs::write(dir.path().join("stacksets/vpc.yaml"), VPC_TEMPLATE).unwrap();
        dir
    }

    #[test]
    fn test_should_emit_stack_set_only_in_admin_home() {
        let dir = template_dir();
        let accounts = accounts();
        let principals = RecordingPrincipals::default();

        let admin_home = control_context("111111111111", "eu-west-1");
        let out = synthesize_with_templates(&config(), &admin_home, &accounts, &principals, dir.path())
            .unwrap();
        assert_eq!(out.stack_sets().count(), 1);

        let member = member_context("222222222222", "eu-west-1");
        let out = synthesize_with_templates(&config(), &member, &accounts, &principals, dir.path())
            .unwrap();
        assert_eq!(out.stack_sets().count(), 0);

        let mut wrong_region = control_context("111111111111", "eu-west-1");
        wrong_region.region = AwsRegion::new("ap-southeast-2");
        let out =
            synthesize_with_templates(&config(), &wrong_region, &accounts, &principals, dir.path())
                .unwrap();
        assert_eq!(out.stack_sets().count(), 0);
    }

    #[test]
    fn test_should_embed_template_body_verbatim() {
        let dir = template_dir();
        let ctx = control_context("111111111111", "eu-west-1");
        let out = synthesize_with_templates(
            &config(),
            &ctx,
            &accounts(),
            &RecordingPrincipals::default(),
            dir.path(),
        )
        .unwrap();

        let set = out.stack_sets().next().unwrap();
        assert_eq!(set.template_body, VPC_TEMPLATE);
        assert_eq!(set.capabilities, vec![Capability::NamedIam]);
        assert_eq!(set.accounts[0].as_str(), "333333333333");
        assert_eq!(set.regions.len(), 2);
    }

    #[test]
    fn test_should_bake_fixed_operation_preferences() {
        let dir = template_dir();
        let ctx = control_context("111111111111", "eu-west-1");
        let out = synthesize_with_templates(
            &config(),
            &ctx,
            &accounts(),
            &RecordingPrincipals::default(),
            dir.path(),
        )
        .unwrap();

        let prefs = &out.stack_sets().next().unwrap().operation_preferences;
        assert_eq!(prefs.failure_tolerance_percentage, 25);
        assert_eq!(prefs.max_concurrent_percentage, 35);
        let json = serde_json::to_value(prefs).unwrap();
        assert_eq!(json["RegionConcurrencyType"], "PARALLEL");
    }

    #[test]
    fn test_should_abort_run_when_template_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = control_context("111111111111", "eu-west-1");

        let err = synthesize_with_templates(
            &config(),
            &ctx,
            &accounts(),
            &RecordingPrincipals::default(),
            dir.path(),
        )
        .unwrap_err();

        assert!(matches!(err, SynthError::TemplateRead { .. }));
    }
}
