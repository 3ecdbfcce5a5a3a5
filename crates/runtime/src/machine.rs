//! Applies one attack submission to a working copy of raid state.
//!
//! The machine is deliberately synchronous and infallible: it takes a
//! mutable state, the immutable rule inputs, and produces the mutated state
//! plus a reply and events. The commit loop in [`crate::api::RaidHandle`]
//! decides whether the mutation actually lands.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use raid_core::combat::{AttackInput, resolve_attack};
use raid_core::reward::split_pool;
use raid_core::state::{AttackRecord, BossId, PlayerId};
use raid_core::upgrade::UpgradeRegistry;
use raid_core::{BalanceConfig, Boss, RngOracle, compute_seed, generate_boss, reward_pool};

use crate::api::{AttackReply, RaidEvent};
use crate::repository::RaidState;

/// One-shot resolver over a working state.
pub struct RaidMachine<'a> {
    state: &'a mut RaidState,
    registry: &'a UpgradeRegistry,
    balance: &'a BalanceConfig,
    rng: &'a dyn RngOracle,
    session_seed: u64,
}

impl<'a> RaidMachine<'a> {
    pub fn new(
        state: &'a mut RaidState,
        registry: &'a UpgradeRegistry,
        balance: &'a BalanceConfig,
        rng: &'a dyn RngOracle,
        session_seed: u64,
    ) -> Self {
        Self {
            state,
            registry,
            balance,
            rng,
            session_seed,
        }
    }

    /// Resolves one attack end to end: lazy spawn, regen, damage, logging,
    /// XP, and (on a killing blow) settlement plus respawn.
    pub fn resolve(
        &mut self,
        player: PlayerId,
        input: &AttackInput,
        owned_upgrades: &HashMap<String, u8>,
        population: u64,
        now: DateTime<Utc>,
    ) -> (AttackReply, Vec<RaidEvent>) {
        let mut events = Vec::new();

        // Take ownership of the active slot; every path below puts a boss
        // back, so the slot is never left empty.
        let mut boss = match self.state.active_boss.take() {
            Some(boss) if boss.active => boss,
            _ => {
                let boss = self.spawn_boss(population);
                events.push(spawned_event(&boss));
                boss
            }
        };

        let nonce = self.state.attack_nonce;
        self.state.attack_nonce += 1;

        // Radioactive regen ticks once per incoming attack, before damage.
        let healed = boss.apply_regen(self.balance);
        if healed > 0 {
            debug!(target: "raid::machine", boss = %boss.id, healed, "boss regenerated");
        }

        let level = self
            .state
            .players
            .get(&player)
            .copied()
            .unwrap_or_default()
            .level();
        let seed = compute_seed(self.session_seed, nonce, player.0, 0);
        let outcome = resolve_attack(
            input,
            level,
            &boss.traits,
            &boss.debuffs,
            owned_upgrades,
            self.registry,
            self.balance,
            self.rng,
            seed,
        );

        let newly_broke = !outcome.is_miss
            && !boss.armor_broken()
            && outcome
                .new_debuffs
                .contains(raid_core::Debuff::ArmorBreak);
        if !outcome.is_miss {
            boss.merge_debuffs(&outcome.new_debuffs);
            boss.apply_damage(outcome.damage);
        }

        let xp = if outcome.is_miss {
            self.balance.xp_per_miss
        } else {
            self.balance.xp_per_hit
        };
        self.state.logs.push(AttackRecord::new(
            boss.id,
            player,
            input.sport,
            outcome.damage,
            outcome.is_crit,
            outcome.is_miss,
            xp,
            now,
        ));
        let levels_gained = self.state.players.entry(player).or_default().award_xp(xp);

        debug!(
            target: "raid::machine",
            boss = %boss.id,
            %player,
            sport = %input.sport,
            damage = outcome.damage,
            is_critical = outcome.is_crit,
            is_miss = outcome.is_miss,
            boss_hp = boss.hp.current(),
            "attack resolved"
        );
        events.push(RaidEvent::AttackResolved {
            boss: boss.id,
            player,
            damage: outcome.damage,
            is_critical: outcome.is_crit,
            is_miss: outcome.is_miss,
            boss_hp: boss.hp.current(),
        });

        let new_boss_hp = boss.hp.current();
        let mut message = if outcome.is_miss {
            "The boss dodged your attack!".to_owned()
        } else if outcome.is_crit {
            format!("CRITICAL HIT! {} damage!", outcome.damage)
        } else {
            format!("You hit for {}!", outcome.damage)
        };
        if newly_broke {
            message.push_str(" Armor shattered!");
        }
        if levels_gained > 0 {
            let reached = self.state.players.get(&player).map_or(0, |p| p.level());
            message.push_str(&format!(" Level up! You reached level {reached}."));
        }

        let mut gold_earned = 0;
        if boss.is_defeated() {
            gold_earned = self.settle_defeat(&mut boss, player, &mut events);
            message.push_str(&format!(
                " {} has been defeated! You earned {gold_earned} gold!",
                boss.name
            ));
            let successor = self.spawn_boss(population);
            events.push(spawned_event(&successor));
            self.state.active_boss = Some(successor);
        } else {
            self.state.active_boss = Some(boss);
        }

        let reply = AttackReply {
            damage_dealt: outcome.damage,
            gold_earned,
            xp_earned: xp,
            is_critical: outcome.is_crit,
            is_miss: outcome.is_miss,
            new_boss_hp,
            message,
        };
        (reply, events)
    }

    /// Deactivates the boss, splits its pool over the durable log, and
    /// credits every contributor. Returns the attacker's own share.
    fn settle_defeat(
        &mut self,
        boss: &mut Boss,
        attacker: PlayerId,
        events: &mut Vec<RaidEvent>,
    ) -> u64 {
        boss.active = false;
        let pool = reward_pool(boss.hp.maximum(), &boss.traits, self.balance);
        let ledger = self.state.ledger_for(boss.id);
        let payouts = split_pool(pool, &ledger);
        if payouts.is_empty() {
            warn!(
                target: "raid::machine",
                boss = %boss.id,
                pool,
                "boss died with an empty damage ledger, pool forfeited"
            );
        }

        let mut own_share = 0;
        for payout in &payouts {
            self.state
                .players
                .entry(payout.player)
                .or_default()
                .credit_gold(payout.amount);
            if payout.player == attacker {
                own_share = payout.amount;
            }
        }

        info!(
            target: "raid::machine",
            boss = %boss.id,
            pool,
            recipients = payouts.len(),
            "boss defeated, pool distributed"
        );
        events.push(RaidEvent::BossDefeated {
            boss: boss.id,
            payouts,
        });
        own_share
    }

    /// Generates the next boss from the current population. Seeds derive
    /// from the boss id, so respawns are deterministic per session.
    fn spawn_boss(&mut self, population: u64) -> Boss {
        let id = BossId(self.state.next_boss_id);
        self.state.next_boss_id += 1;
        let seed = compute_seed(self.session_seed, id.0, PlayerId::SYSTEM.0, 0);
        let boss = generate_boss(id, population, self.balance, self.rng, seed);
        info!(
            target: "raid::machine",
            boss = %boss.id,
            name = %boss.name,
            kind = %boss.kind,
            max_hp = boss.hp.maximum(),
            population,
            "boss spawned"
        );
        boss
    }
}

fn spawned_event(boss: &Boss) -> RaidEvent {
    RaidEvent::BossSpawned {
        boss: boss.id,
        name: boss.name.clone(),
        kind: boss.kind,
    }
}
