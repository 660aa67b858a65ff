//! Eligibility policy
//!
//! Decides whether an asset is a legal member of the spreading outfit,
//! given the captured spell option. Bind matches never touch neck slots
//! unless the host's global flag permits it.

use crate::host::Host;
use hexweave_core::{ItemBundle, OutfitOption, SpellDefinition};

/// Neck slot groups excluded from bind matches by default
pub const NECK_GROUPS: [&str; 3] = ["ItemNeck", "ItemNeckAccessories", "ItemNeckRestraints"];

fn neck_exclusions<H: Host>(host: &H) -> &'static [&'static str] {
    if host.allow_neck_changes() {
        &[]
    } else {
        &NECK_GROUPS
    }
}

/// Whether `item` is a legal member of the spreading outfit.
///
/// Without a captured spell the check is permissive: any cloth or any
/// bind-type asset qualifies, with no neck exclusion.
pub fn is_allowed<H: Host>(host: &H, item: &ItemBundle, spell: Option<&SpellDefinition>) -> bool {
    let Some(spell) = spell else {
        return host.is_cloth(item) || host.is_bind(item, &[]);
    };

    let exclusions = neck_exclusions(host);
    match spell.option {
        OutfitOption::ClothesOnly => host.is_cloth(item),
        OutfitOption::BindsOnly => host.is_bind(item, exclusions),
        OutfitOption::Both => host.is_cloth(item) || host.is_bind(item, exclusions),
    }
}
