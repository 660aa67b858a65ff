//! Spreading-curse state machine
//!
//! One [`SpreadingCurse`] instance owns one target's curse. An external
//! driver calls [`tick`](SpreadingCurse::tick) at a roughly constant
//! cadence; the machine reads its persisted fields, applies at most one
//! transition, and reports side effects through the returned
//! [`UpdateResult`]. `now` is always injected, never read, so every path
//! replays deterministically with a scripted clock.
//!
//! Lifecycle: `Inactive` -> `PendingStart` (activation captured, first
//! phase scheduled) -> `Spreading` (one item per interval) -> `LoopWait`
//! (between loops) -> `Spreading` ... -> `Inactive` on full drain or
//! recovery.

use crate::bag::ExtensionBag;
use crate::eligibility;
use crate::host::Host;
use crate::report::{LogLevel, UpdateResult};
use crate::selector;
use crate::store::CurseStore;
use hexweave_core::{time, ActorId, CurseRng, ItemBundle, SpellDefinition, Timestamp};
use serde::{Deserialize, Serialize};

/// Default interval between item applications (45 seconds)
pub const DEFAULT_ITEM_INTERVAL_MS: u64 = 45_000;
/// Shortest allowed item interval (5 seconds)
pub const MIN_ITEM_INTERVAL_MS: u64 = 5_000;
/// Longest allowed item interval (5 minutes)
pub const MAX_ITEM_INTERVAL_MS: u64 = 300_000;

/// Lifecycle phase of a spreading curse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Phase {
    /// No curse captured
    #[default]
    Inactive,
    /// Activation captured, waiting for the first spreading phase
    PendingStart,
    /// Actively applying one item per interval
    Spreading,
    /// Between loops, waiting for the next activation time
    LoopWait,
}

impl Phase {
    /// Whether a curse is captured at all
    pub fn is_active(self) -> bool {
        self != Phase::Inactive
    }

    /// Whether items are being applied right now
    pub fn is_spreading(self) -> bool {
        self == Phase::Spreading
    }
}

/// The tick-driven state machine that spreads a stored outfit onto its
/// target
#[derive(Debug)]
pub struct SpreadingCurse {
    store: CurseStore,
    phase: Phase,
    /// Next time an item may be applied; 0 means "on the next tick"
    item_check: Timestamp,
    item_interval: u64,
    activated_at: Timestamp,
    duration: Option<u64>,
    rng: CurseRng,
}

impl SpreadingCurse {
    /// Create an idle machine over an empty bag
    pub fn new(seed: u64) -> Self {
        Self::with_bag(ExtensionBag::new(), seed)
    }

    /// Rebuild a machine over previously persisted extension data.
    ///
    /// The phase is derived from the stored fields: a scheduled
    /// activation lands in the matching wait phase, and stored data with
    /// no schedule (a session that died mid-spread, or a corrupted
    /// timestamp) is restored as pending and self-heals on the next tick.
    pub fn with_bag(bag: ExtensionBag, seed: u64) -> Self {
        let store = CurseStore::from_bag(bag);
        let phase = if !store.has_any() {
            Phase::Inactive
        } else if store.next_activation().is_none() || store.loops_done() == 0 {
            Phase::PendingStart
        } else {
            Phase::LoopWait
        };
        Self {
            store,
            phase,
            item_check: 0,
            item_interval: DEFAULT_ITEM_INTERVAL_MS,
            activated_at: 0,
            duration: None,
            rng: CurseRng::new(seed),
        }
    }

    // --- status accessors (display only) ---

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a curse is captured
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Whether items are being applied right now
    pub fn is_spreading(&self) -> bool {
        self.phase.is_spreading()
    }

    /// Loops begun so far
    pub fn loops_done(&self) -> u32 {
        self.store.loops_done()
    }

    /// When the next spreading phase begins, if one is scheduled
    pub fn next_activation(&self) -> Option<Timestamp> {
        self.store.next_activation()
    }

    /// Who activated the curse, when captured from another character
    pub fn activated_by(&self) -> Option<ActorId> {
        self.store.sender()
    }

    /// The raw persisted bag, for the host's settings storage
    pub fn bag(&self) -> &ExtensionBag {
        self.store.bag()
    }

    /// Interval between item applications, in milliseconds
    pub fn item_interval(&self) -> u64 {
        self.item_interval
    }

    /// Set the item interval, clamped to the allowed range
    pub fn set_item_interval(&mut self, ms: u64) {
        self.item_interval = ms.clamp(MIN_ITEM_INTERVAL_MS, MAX_ITEM_INTERVAL_MS);
    }

    /// One-line status summary for display surfaces
    pub fn status_line(&self, now: Timestamp) -> String {
        if !self.is_active() {
            return "Inactive".to_string();
        }
        let max_loops = self.store.spell().map(|s| s.loop_count).unwrap_or(0);
        match self.store.next_activation() {
            Some(at) => format!(
                "Active - loop {}/{} - next activation in {}",
                self.loops_done(),
                max_loops,
                time::format_countdown(now, at)
            ),
            None => format!(
                "Active - loop {}/{} - currently spreading",
                self.loops_done(),
                max_loops
            ),
        }
    }

    // --- operations ---

    /// Capture a spell and activate the curse.
    ///
    /// The configured outfit code is decoded and filtered against the
    /// eligibility predicate before anything is written; a code that does
    /// not parse aborts the whole activation with a warning log and no
    /// state change. On success the clamped definition, the filtered
    /// outfit, and the activator identity are persisted, and the first
    /// spreading phase is either scheduled (`delay_active`) or begun in
    /// the same call.
    pub fn apply<H: Host>(
        &mut self,
        host: &mut H,
        spell: &SpellDefinition,
        activated_by: Option<ActorId>,
        now: Timestamp,
        duration: Option<u64>,
        notify: bool,
    ) -> UpdateResult {
        let mut result = UpdateResult::new();

        let outfit: Vec<ItemBundle> = match hexweave_codec::decode_outfit(&spell.code) {
            Ok(items) => {
                let host: &H = host;
                items
                    .into_iter()
                    .filter(|item| eligibility::is_allowed(host, item, None))
                    .collect()
            }
            Err(err) => {
                result.warn(format!(
                    "ignoring curse activation, outfit code does not parse: {err}"
                ));
                return result;
            }
        };

        let spell = spell.clone().clamped();
        self.item_check = 0;
        self.activated_at = now;
        self.duration = duration;
        self.store.capture(&outfit, &spell, activated_by);

        if spell.delay_active {
            self.store
                .set_next_activation(now + time::minutes_to_ms(spell.delay_minutes as u64));
            self.phase = Phase::PendingStart;
        } else {
            self.begin_spreading(host);
        }

        host.set_wardrobe_lock(true);
        host.save();

        if notify {
            result.notify("%NAME%'s outfit shivers as a curse takes hold of it.");
        }
        result
    }

    /// Advance the curse by one scheduler cycle
    pub fn tick<H: Host>(&mut self, host: &mut H, now: Timestamp) -> UpdateResult {
        let mut result = UpdateResult::new();
        if !self.is_active() {
            return result;
        }

        if let Some(duration) = self.duration {
            if now >= self.activated_at.saturating_add(duration) {
                result.log(LogLevel::Info, "curse duration elapsed");
                self.finish(host, false, &mut result);
                return result;
            }
        }

        match self.phase {
            Phase::Inactive => {}
            Phase::PendingStart | Phase::LoopWait => match self.store.next_activation() {
                Some(due) if due <= now => {
                    self.begin_spreading(host);
                    self.spread_step(host, now, &mut result);
                }
                Some(_) => {}
                None => {
                    // Active with no schedule at all: orphaned or
                    // corrupted state, heal it rather than wedge
                    result.warn("active curse has no scheduled activation, forcing recovery");
                    self.finish(host, false, &mut result);
                }
            },
            Phase::Spreading => self.spread_step(host, now, &mut result),
        }
        result
    }

    /// Terminate the curse, clearing every persisted field.
    ///
    /// A requester other than the captured activator is refused with a
    /// notification; the system (no requester) may always recover.
    /// Recovering an inactive machine is a no-op.
    pub fn recover<H: Host>(
        &mut self,
        host: &mut H,
        notify: bool,
        requested_by: Option<ActorId>,
    ) -> UpdateResult {
        let mut result = UpdateResult::new();
        if !self.is_active() {
            return result;
        }
        if let Some(requester) = requested_by {
            if self.store.sender() != Some(requester) {
                result.notify("%NAME%'s cursed outfit cannot be removed by this character.");
                return result;
            }
        }
        self.finish(host, notify, &mut result);
        result
    }

    // --- transitions ---

    /// Enter the spreading phase: count the loop, take off whatever the
    /// captured policy controls, and arm the item timer.
    fn begin_spreading<H: Host>(&mut self, host: &mut H) {
        let spell = self.store.spell();
        if spell.as_ref().map(|s| s.loop_active).unwrap_or(false) {
            self.store.set_loops_done(self.store.loops_done() + 1);
        }
        self.strip_matching(host, spell.as_ref());
        self.store.clear_next_activation();
        self.phase = Phase::Spreading;
        self.item_check = 0;
        host.save();
    }

    /// Remove currently worn items under the captured policy. Cloth
    /// always comes off; a bind comes off only when the incoming outfit
    /// covers the same slot, or when there is no incoming list.
    fn strip_matching<H: Host>(&mut self, host: &mut H, spell: Option<&SpellDefinition>) {
        let new_list = self.store.outfit().unwrap_or_default();
        let appearance = host.appearance();
        for index in (0..appearance.len()).rev() {
            let worn = &appearance[index];
            if !eligibility::is_allowed(host, worn, spell) {
                continue;
            }
            if host.is_cloth(worn)
                || new_list.is_empty()
                || new_list.iter().any(|item| item.group == worn.group)
            {
                host.strip(index);
            }
        }
    }

    /// Apply at most one item per elapsed interval.
    ///
    /// Stored fields that fail to decode skip the step for this tick;
    /// a tick is never allowed to fail.
    fn spread_step<H: Host>(&mut self, host: &mut H, now: Timestamp, result: &mut UpdateResult) {
        if self.item_check != 0 && self.item_check > now {
            return;
        }
        self.item_check = now + self.item_interval;

        let (Some(outfit), Some(spell)) = (self.store.outfit(), self.store.spell()) else {
            return;
        };
        let mut items = outfit;
        self.rng.shuffle(&mut items);
        self.wear_one_more(host, now, &items, &spell, result);
    }

    fn wear_one_more<H: Host>(
        &mut self,
        host: &mut H,
        now: Timestamp,
        items: &[ItemBundle],
        spell: &SpellDefinition,
        result: &mut UpdateResult,
    ) {
        let sender = self.store.sender();
        match selector::select_next(host, items, spell, sender) {
            Some(index) => {
                let item = &items[index];
                if let Some(worn) = host.wear(item) {
                    if let Some(property) = &item.property {
                        host.apply_property(&item.group, property);
                    }
                    result.notify(format!(
                        "%NAME%'s cursed outfit is spreading, adding {}.",
                        worn.display_name()
                    ));
                    host.sync_appearance();
                }
            }
            None => self.finish_loop(host, now, spell, result),
        }
    }

    /// The selector is exhausted: schedule another loop, or drain
    fn finish_loop<H: Host>(
        &mut self,
        host: &mut H,
        now: Timestamp,
        spell: &SpellDefinition,
        result: &mut UpdateResult,
    ) {
        if !spell.loop_active || self.store.loops_done() > spell.loop_count {
            self.finish(host, true, result);
            return;
        }
        self.store
            .set_next_activation(now + time::minutes_to_ms(spell.loop_minutes as u64));
        self.phase = Phase::LoopWait;
        host.save();
        result.notify("%NAME%'s cursed outfit settles for a moment, but some energy remains within it.");
    }

    /// Return to `Inactive`: clear all persisted fields together and lift
    /// the wardrobe restriction
    fn finish<H: Host>(&mut self, host: &mut H, notify: bool, result: &mut UpdateResult) {
        self.phase = Phase::Inactive;
        self.item_check = 0;
        self.duration = None;
        self.store.clear();
        host.set_wardrobe_lock(false);
        host.save();
        if notify {
            result.notify(
                "%NAME%'s cursed outfit finished spreading and is now drained of all its energy.",
            );
        }
    }
}

impl Default for SpreadingCurse {
    fn default() -> Self {
        Self::new(0)
    }
}
