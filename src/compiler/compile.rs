use super::*;
use crate::config::Config;
use crate::patterns::*;
use std::collections::BTreeMap;

/// Compile one pass of patterns into a fresh rule set.
///
/// Every fingerprint contributes to its own key and to each prefix down to
/// `fallback_depth` components, so prefix rules are built from the summed
/// histograms of every spot they cover. Keys short of `min_samples`, or
/// whose confidence falls below `min_confidence`, get no rule. The rule set
/// carries the resolution the patterns were extracted with.
pub fn compile(patterns: &Patterns, config: &Config) -> RuleSet {
    if patterns.resolution() != config.resolution {
        log::warn!(
            "{:<32}{:<32}",
            "compiling   foreign buckets",
            format!("{:?}", patterns.resolution())
        );
    }
    let mut merged = BTreeMap::<Key, Pattern>::new();
    for (fingerprint, pattern) in patterns.iter() {
        for key in Key::from(*fingerprint).prefixes(config.fallback_depth) {
            merged.entry(key).or_default().merge(pattern);
        }
    }
    let candidates = merged.len();
    let rules = merged
        .into_iter()
        .filter(|(_, pattern)| pattern.samples >= config.min_samples as u64)
        .filter_map(|(key, pattern)| {
            Rule::derive(&pattern, config.smoothing_constant).map(|rule| {
                let template = Template::from(&pattern);
                (key, Entry { rule, template })
            })
        })
        .filter(|(_, entry)| entry.rule.confidence >= config.min_confidence)
        .collect::<RuleSet>()
        .with_resolution(patterns.resolution());
    log::info!(
        "{:<32}{:<32}",
        "compiled    rules",
        format!("{} of {} keys", rules.len(), candidates)
    );
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Resolution;
    use crate::gameplay::Edge;

    fn fingerprint(s: &str) -> Fingerprint {
        Fingerprint::try_from(Key::try_from(s).unwrap()).unwrap()
    }

    fn patterns(spots: &[(&str, Edge, usize, f64)]) -> Patterns {
        spots
            .iter()
            .map(|(spot, edge, n, ev)| {
                let mut pattern = Pattern::default();
                (0..*n).for_each(|_| pattern.add(*edge, units(*ev)));
                (fingerprint(spot), pattern)
            })
            .collect()
    }

    #[test]
    fn empty_input_empty_rules() {
        let rules = compile(&Patterns::default(), &Config::default());
        assert!(rules.is_empty());
    }

    #[test]
    fn thin_spots_get_no_rule() {
        let patterns = patterns(&[("river.co.d0.dry.x", Edge::Raise, 29, 3.)]);
        let rules = compile(&patterns, &Config::default());
        assert!(rules.get(&Key::try_from("river.co.d0.dry.x").unwrap()).is_none());
        assert!(rules.is_empty());
    }

    #[test]
    fn prefixes_merge_siblings() {
        let patterns = patterns(&[
            ("flop.btn.d1.wet.x", Edge::Raise, 20, 5.),
            ("flop.btn.d1.dry.x", Edge::Check, 20, 1.),
        ]);
        let rules = compile(&patterns, &Config::default());
        assert!(rules.get(&Key::try_from("flop.btn.d1.wet.x").unwrap()).is_none());
        let entry = rules.get(&Key::try_from("flop.btn.d1").unwrap()).unwrap();
        assert_eq!(entry.rule.samples, 40);
        assert_eq!(entry.rule.action, Edge::Raise);
        assert_eq!(entry.template.probability(&Edge::Check), 0.5);
        assert!(rules.get(&Key::try_from("flop.btn").unwrap()).is_some());
        assert!(rules.get(&Key::try_from("flop").unwrap()).is_none());
    }

    #[test]
    fn low_confidence_is_pruned() {
        let patterns = patterns(&[("turn.sb.d2.paired.c", Edge::Call, 40, 1.)]);
        let config = Config {
            smoothing_constant: 100.,
            ..Config::default()
        };
        assert!(compile(&patterns, &config).is_empty());
    }

    #[test]
    fn rules_inherit_the_extraction_resolution() {
        let fine = Resolution {
            stack: 1.,
            ..Resolution::default()
        };
        let config = Config {
            resolution: fine,
            ..Config::default()
        };
        let rules = compile(&Patterns::new(fine), &config);
        assert_eq!(rules.resolution(), fine);
        let rules = compile(&Patterns::new(fine), &Config::default());
        assert_eq!(rules.resolution(), fine);
    }

    #[test]
    fn deterministic() {
        let patterns = patterns(&[
            ("flop.btn.d1.wet.x", Edge::Raise, 50, 5.),
            ("pre.bb.d7.blank._", Edge::Fold, 35, -1.),
            ("pre.bb.d7.blank.r2", Edge::Call, 31, 0.5),
        ]);
        let a = compile(&patterns, &Config::default());
        let b = compile(&patterns, &Config::default());
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
