use proptest::prelude::*;
use proptest::test_runner::Config;

use resource_index::index::{build_control_index, build_resource_set, resolve_aliases, split_api_version};
use resource_index::{Control, Framework, Rule, RuleMatchObjects};

const GROUPS: &[&str] = &["", "apps", "batch", "hostdata.kubescape.cloud", "*"];
const VERSIONS: &[&str] = &["v1", "v1beta0", "*"];
const RESOURCES: &[&str] = &[
    "Pod",
    "pods",
    "Deployment",
    "jobs",
    "KernelVersion",
    "OpenPortsList",
    "ClusterDescribe",
    "ImageVulnerabilities",
    "Widget",
];

fn pick(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(pool), 0..3)
        .prop_map(|items| items.into_iter().map(str::to_string).collect())
}

fn match_entry() -> impl Strategy<Value = RuleMatchObjects> {
    (pick(GROUPS), pick(VERSIONS), pick(RESOURCES)).prop_map(|(api_groups, api_versions, resources)| {
        RuleMatchObjects {
            api_groups,
            api_versions,
            resources,
        }
    })
}

fn rule() -> impl Strategy<Value = Rule> {
    (
        prop::collection::vec(match_entry(), 0..3),
        prop::collection::vec(match_entry(), 0..3),
    )
        .prop_map(|(static_match, dynamic_match)| Rule {
            name: "rule".to_string(),
            static_match,
            dynamic_match,
        })
}

fn frameworks() -> impl Strategy<Value = Vec<Framework>> {
    let control = ("C-[0-9]", prop::collection::vec(rule(), 0..3)).prop_map(|(id, rules)| Control {
        control_id: id,
        name: String::new(),
        rules,
    });
    prop::collection::vec(control, 0..4)
        .prop_map(|controls| Framework {
            name: "generated".to_string(),
            controls,
        })
        .prop_map(|framework| vec![framework.clone(), framework])
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn building_twice_gives_identical_output(frameworks in frameworks()) {
        prop_assert_eq!(build_resource_set(&frameworks), build_resource_set(&frameworks));
        prop_assert_eq!(build_control_index(&frameworks), build_control_index(&frameworks));
    }

    #[test]
    fn duplicated_frameworks_add_nothing(frameworks in frameworks()) {
        let once = &frameworks[..1];
        prop_assert_eq!(build_resource_set(once), build_resource_set(&frameworks));
        prop_assert_eq!(build_control_index(once), build_control_index(&frameworks));
    }

    #[test]
    fn control_ids_never_repeat(frameworks in frameworks()) {
        let (_, index) = build_control_index(&frameworks);
        for (_, controls) in index.iter() {
            let mut seen = std::collections::HashSet::new();
            for id in controls {
                prop_assert!(seen.insert(id), "duplicate control id {}", id);
            }
        }
    }

    #[test]
    fn split_api_version_is_total(input in ".{0,24}") {
        let (group, version) = split_api_version(&input);
        match input.split_once('/') {
            Some(_) => prop_assert_eq!(format!("{}/{}", group, version), input),
            None => {
                prop_assert_eq!(group, input.as_str());
                prop_assert_eq!(version, "");
            }
        }
    }

    #[test]
    fn unknown_names_resolve_empty(name in "[a-z]{1,12}") {
        prop_assert!(resolve_aliases(&name).is_empty());
    }
}
