//! Property-based tests for path handling.
//!
//! The resolve and containment modules carry light property tests of their
//! own. This suite runs many more cases and checks how the operations
//! compose.

use super::containment::{is_beneath, is_beneath_resolve};
use super::join::slash;
use super::resolve::resolve;
use super::separator::Separator;
use proptest::prelude::*;

const SEP: Separator = Separator::Slash;

fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn noisy_component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => component_strategy(),
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

fn noisy_path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(noisy_component_strategy(), 0..12)).prop_map(
        |(rooted, parts)| {
            let body = parts.join("/");
            if rooted {
                format!("/{body}")
            } else {
                body
            }
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Resolution is idempotent: resolve(resolve(p)) == resolve(p)
    #[test]
    fn resolve_idempotent(path in noisy_path_strategy()) {
        let once = resolve(&path, false, SEP);
        prop_assert_eq!(resolve(&once, false, SEP), once);
    }

    // Clean paths come back unchanged
    #[test]
    fn resolve_clean_is_identity(path in absolute_path_strategy()) {
        prop_assert_eq!(resolve(&path, false, SEP), path);
    }

    // Resolved paths never contain "." or ".." segments or empty segments
    #[test]
    fn resolve_output_is_clean(path in noisy_path_strategy()) {
        let resolved = resolve(&path, false, SEP);
        let body = resolved.strip_prefix('/').unwrap_or(&resolved);
        if !body.is_empty() {
            for part in body.split('/') {
                prop_assert!(!part.is_empty());
                prop_assert_ne!(part, ".");
                prop_assert_ne!(part, "..");
            }
        }
    }

    // Forcing absolute only adds the leading separator
    #[test]
    fn resolve_absolute_adds_root(path in noisy_path_strategy()) {
        let relative = resolve(path.trim_start_matches('/'), false, SEP);
        let absolute = resolve(&path, true, SEP);
        prop_assert_eq!(absolute, format!("/{relative}"));
    }

    // Joining then resolving equals resolving the pieces joined naively
    #[test]
    fn slash_then_resolve(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        let joined = slash([a.as_str(), b.as_str()], SEP).unwrap();
        prop_assert_eq!(resolve(&joined, false, SEP), format!("{a}{b}"));
    }

    // A single segment passes through slash untouched
    #[test]
    fn slash_single_identity(s in ".*") {
        prop_assert_eq!(slash([s.as_str()], SEP), Some(s.clone()));
    }

    // Appending a segment to a path keeps it beneath the original
    #[test]
    fn appended_path_is_beneath(base in absolute_path_strategy(), leaf in component_strategy()) {
        let child = slash([base.as_str(), leaf.as_str()], SEP).unwrap();
        prop_assert!(is_beneath(&child, &base));
        prop_assert!(is_beneath_resolve(&child, &base, SEP));
    }

    // A strictly shorter path is never beneath a longer one
    #[test]
    fn shorter_is_not_beneath(base in absolute_path_strategy(), leaf in component_strategy()) {
        let longer = format!("{base}/{leaf}");
        prop_assert!(!is_beneath(&base, &longer));
    }

    // Lexical containment agrees with verbatim containment on clean paths
    #[test]
    fn lexical_matches_verbatim_on_clean(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        prop_assert_eq!(is_beneath_resolve(&a, &b, SEP), is_beneath(&a, &b));
    }
}
