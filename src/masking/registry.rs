//! Mask kind registry
//!
//! Every known mask kind exposes a registration factory; they are tried
//! in a fixed order against each declared rule until one claims it. A
//! rule claimed by nobody aborts configuration assembly: a typo'd rule
//! must never let sensitive data flow through unmasked.

use crate::domain::{MaskError, Result, Rule};
use crate::masking::configuration::MaskingConfiguration;
use crate::masking::engine::MaskingEngine;
use crate::masking::strategy::MaskFactory;
use crate::masks;

/// All known mask factories, in probe order.
pub const MASK_FACTORIES: &[MaskFactory] = &[
    masks::constant::register,
    masks::random_choice::register,
    masks::weighted_choice::register,
    masks::pattern::register,
    masks::hash::register,
    masks::random_int::register,
    masks::rand_date::register,
    masks::incremental::register,
    masks::replacement::register,
    masks::template::register,
    masks::remove::register,
];

/// Resolve every declared rule into a configuration.
///
/// Fatal on the first construction-time failure (malformed pattern or
/// template, invalid bounds, unclaimed rule); no partial configuration
/// is ever returned.
pub fn build_configuration(rules: &[Rule], seed: u64) -> Result<MaskingConfiguration> {
    let mut configuration = MaskingConfiguration::new();

    for rule in rules {
        let mut claimed = false;
        for factory in MASK_FACTORIES {
            let (next, did_claim) = factory(rule, configuration, seed)?;
            configuration = next;
            if did_claim {
                claimed = true;
                break;
            }
        }
        if !claimed {
            return Err(MaskError::UnclaimedRule(rule.selector.jsonpath.clone()));
        }
        tracing::debug!(selector = %rule.selector.jsonpath, "rule registered");
    }

    Ok(configuration)
}

/// Convenience: resolve rules straight into a root engine.
pub fn build_engine(rules: &[Rule], seed: u64) -> Result<MaskingEngine> {
    Ok(build_configuration(rules, seed)?.into_engine())
}
