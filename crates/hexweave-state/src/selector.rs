//! Next-item selection
//!
//! A two-phase linear scan with cloth priority: the first pass walks the
//! list in stored order skipping bind-type items, the second pass admits
//! them. The first index that is eligible, unworn, unblocked, and
//! room-legal wins; the scan short-circuits rather than ranking the whole
//! list. `None` means the outfit is fully applied, which callers treat as
//! a completion signal, not an error.
//!
//! Selection is a pure function of the input order and the host oracles.
//! Callers wanting unpredictable spread order shuffle the list first.

use crate::eligibility;
use crate::host::Host;
use hexweave_core::{ActorId, ItemBundle, SpellDefinition};

/// Pick the index of the next item to apply, or `None` when exhausted
pub fn select_next<H: Host>(
    host: &H,
    items: &[ItemBundle],
    spell: &SpellDefinition,
    sender: Option<ActorId>,
) -> Option<usize> {
    let mut i = 0;
    let mut cloth_priority = true;
    while i < items.len() {
        let item = &items[i];
        let skip_bind = cloth_priority && host.is_bind(item, &[]);
        let allowed = eligibility::is_allowed(host, item, Some(spell));
        let blocked = host.is_blocked_for_sender(sender, item);
        let room_disallowed = !host.is_room_allowed(item);
        let already_worn = host.is_worn(&item.group, &item.name);

        if already_worn || skip_bind || !allowed || blocked || room_disallowed {
            i += 1;
            // Cloth pass exhausted; walk again admitting binds
            if i == items.len() && cloth_priority {
                i = 0;
                cloth_priority = false;
            }
            continue;
        }

        return Some(i);
    }
    None
}
