//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::Config;
use crate::path::{Containment, Separator};
use proptest::prelude::*;

fn separator_strategy() -> impl Strategy<Value = Separator> {
    prop_oneof![Just(Separator::Slash), Just(Separator::Backslash)]
}

fn containment_strategy() -> impl Strategy<Value = Containment> {
    prop_oneof![
        Just(Containment::Verbatim),
        Just(Containment::Lexical),
        Just(Containment::Real),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(separator_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(containment_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(separator, absolute, containment, remove_root)| Config {
            separator,
            absolute,
            containment,
            remove_root,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Set fields in the higher-precedence config win; unset fields fall through
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(result.separator, high.separator.or(low.separator));
        prop_assert_eq!(result.absolute, high.absolute.or(low.absolute));
        prop_assert_eq!(result.containment, high.containment.or(low.containment));
        prop_assert_eq!(result.remove_root, high.remove_root.or(low.remove_root));
    }

    // Merging an empty config changes nothing
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &Config::default());
        prop_assert_eq!(result, config);
    }

    // Merging is idempotent
    #[test]
    fn config_merge_idempotent(low in config_strategy(), high in config_strategy()) {
        let mut once = low.clone();
        ConfigMerger::merge_into(&mut once, &high);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &high);
        prop_assert_eq!(once, twice);
    }

    // Whatever is written to YAML loads back unchanged
    #[test]
    fn config_survives_yaml(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
