use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use raid_core::combat::{AttackInput, SportKind};
use raid_core::state::{BossId, HitPoints, PlayerId};
use raid_core::{Boss, BossKind, BossTraits, DebuffSet};
use raid_runtime::{
    FixedPopulation, InMemoryRaidStore, OwnershipProvider, Raid, RaidEvent, RaidState, RaidStore,
};

/// Builds a store whose active boss has exactly the given stats, so tests
/// are independent of the random archetype draw.
fn store_with_boss(traits: BossTraits, current: u32, max: u32) -> Arc<InMemoryRaidStore> {
    let state = RaidState {
        active_boss: Some(Boss {
            id: BossId(0),
            name: "Titan of Entropy".to_owned(),
            kind: BossKind::Normal,
            traits,
            hp: HitPoints::new(current, max),
            debuffs: DebuffSet::default(),
            active: true,
        }),
        next_boss_id: 1,
        ..RaidState::default()
    };
    Arc::new(InMemoryRaidStore::with_state(state))
}

fn cycle_attack() -> AttackInput {
    // 30*2 + 40 = 100 raw; a fresh level-1 player deals 101.
    AttackInput::new(SportKind::Cycle)
        .with_distance(2.0)
        .with_duration(40)
}

#[tokio::test]
async fn full_attack_flow_from_empty_state() {
    let raid = Raid::builder()
        .population(FixedPopulation(10))
        .session_seed(42)
        .build()
        .expect("raid should build");
    let handle = raid.handle();
    let mut events = handle.subscribe();

    // First ever attack spawns the boss lazily.
    let reply = handle
        .attack(PlayerId(1), cycle_attack())
        .await
        .expect("attack should resolve");

    assert!(!reply.message.is_empty());
    let expected_xp = if reply.is_miss { 10 } else { 100 };
    assert_eq!(reply.xp_earned, expected_xp);

    match events.recv().await.expect("should receive spawn event") {
        RaidEvent::BossSpawned { boss, name, .. } => {
            assert_eq!(boss, BossId(0));
            assert!(!name.is_empty());
        }
        other => panic!("expected BossSpawned first, got {other:?}"),
    }
    match events.recv().await.expect("should receive attack event") {
        RaidEvent::AttackResolved { player, .. } => assert_eq!(player, PlayerId(1)),
        other => panic!("expected AttackResolved, got {other:?}"),
    }

    let snapshot = handle.snapshot().await.expect("snapshot should load");
    assert!(snapshot.boss_active);
    // Population 10: 10 * 350 * 3 * 1.2 = 12600 before archetype adjustment.
    assert!(snapshot.max_hp >= 10_000);
    assert_eq!(snapshot.active_player_count, 10);
    assert_eq!(snapshot.recent_attacks.len(), 1);

    let progress = handle
        .player(PlayerId(1))
        .expect("store should load")
        .expect("attacker should have progress");
    assert_eq!(progress.xp(), expected_xp);
}

#[tokio::test]
async fn snapshot_before_first_attack_is_the_waiting_placeholder() {
    let raid = Raid::builder().build().expect("raid should build");
    let snapshot = raid.handle().snapshot().await.expect("snapshot");

    assert!(!snapshot.boss_active);
    assert_eq!(snapshot.max_hp, 0);
    assert_eq!(snapshot.current_hp, 0);
    assert!(snapshot.recent_attacks.is_empty());
    assert!(snapshot.participants.is_empty());
}

#[tokio::test]
async fn full_evasion_boss_always_dodges() {
    let store = store_with_boss(
        BossTraits {
            evasion_chance: Some(100),
            ..BossTraits::default()
        },
        5000,
        5000,
    );
    let raid = Raid::builder()
        .store(store.clone())
        .session_seed(1)
        .build()
        .expect("raid should build");
    let handle = raid.handle();

    let reply = handle
        .attack(PlayerId(1), cycle_attack())
        .await
        .expect("attack should resolve");

    assert!(reply.is_miss);
    assert_eq!(reply.damage_dealt, 0);
    assert_eq!(reply.xp_earned, 10);
    assert_eq!(reply.new_boss_hp, 5000);
    assert_eq!(reply.message, "The boss dodged your attack!");
}

#[tokio::test]
async fn armored_boss_takes_half_damage_until_broken() {
    let armored = store_with_boss(
        BossTraits {
            armor_reduction: Some(0.5),
            ..BossTraits::default()
        },
        100_000,
        100_000,
    );
    let normal = store_with_boss(BossTraits::default(), 100_000, 100_000);

    let against_armored = Raid::builder()
        .store(armored)
        .session_seed(1)
        .build()
        .expect("raid should build");
    let against_normal = Raid::builder()
        .store(normal)
        .session_seed(1)
        .build()
        .expect("raid should build");

    let reduced = against_armored
        .handle()
        .attack(PlayerId(1), cycle_attack())
        .await
        .expect("attack should resolve");
    let full = against_normal
        .handle()
        .attack(PlayerId(1), cycle_attack())
        .await
        .expect("attack should resolve");

    // 100 raw * 1.01 level factor = 101; armored halves and truncates.
    assert_eq!(full.damage_dealt, 101);
    assert_eq!(reduced.damage_dealt, 50);
}

/// Ownership source granting one player the cycling damage doubler.
struct CycleSuperOwner(PlayerId);

#[async_trait]
impl OwnershipProvider for CycleSuperOwner {
    async fn owned_upgrades(&self, player: PlayerId) -> HashMap<String, u8> {
        if player == self.0 {
            HashMap::from([("cycle_super".to_owned(), 1u8)])
        } else {
            HashMap::new()
        }
    }
}

#[tokio::test]
async fn owned_super_upgrade_doubles_damage() {
    let store = store_with_boss(BossTraits::default(), 100_000, 100_000);
    let raid = Raid::builder()
        .store(store)
        .ownership(CycleSuperOwner(PlayerId(1)))
        .session_seed(1)
        .build()
        .expect("raid should build");
    let handle = raid.handle();

    let boosted = handle
        .attack(PlayerId(1), cycle_attack())
        .await
        .expect("attack should resolve");
    let plain = handle
        .attack(PlayerId(2), cycle_attack())
        .await
        .expect("attack should resolve");

    assert_eq!(plain.damage_dealt, 101);
    assert_eq!(boosted.damage_dealt, 202);
}

#[tokio::test]
async fn killing_blow_distributes_the_pool_proportionally() {
    // Normal boss, 10000 max HP: pool is exactly 1000 coins.
    let mut state = RaidState {
        active_boss: Some(Boss {
            id: BossId(0),
            name: "Lord of Static".to_owned(),
            kind: BossKind::Normal,
            traits: BossTraits::default(),
            hp: HitPoints::new(10, 10_000),
            debuffs: DebuffSet::default(),
            active: true,
        }),
        next_boss_id: 1,
        ..RaidState::default()
    };
    // Player 2 already dealt 6000; player 1 dealt 3899, and the killing blow
    // adds 101 for a clean 4000/6000 split.
    state.logs.push(raid_core::state::AttackRecord::new(
        BossId(0),
        PlayerId(2),
        SportKind::Run,
        6000,
        false,
        false,
        100,
        chrono::Utc::now(),
    ));
    state.logs.push(raid_core::state::AttackRecord::new(
        BossId(0),
        PlayerId(1),
        SportKind::Run,
        3899,
        false,
        false,
        100,
        chrono::Utc::now(),
    ));
    let store = Arc::new(InMemoryRaidStore::with_state(state));

    let raid = Raid::builder()
        .store(store.clone())
        .population(FixedPopulation(10))
        .session_seed(1)
        .build()
        .expect("raid should build");
    let handle = raid.handle();
    let mut events = handle.subscribe();

    let reply = handle
        .attack(PlayerId(1), cycle_attack())
        .await
        .expect("attack should resolve");

    assert_eq!(reply.damage_dealt, 101);
    assert_eq!(reply.gold_earned, 400);
    assert!(reply.message.contains("defeated"));
    assert_eq!(reply.new_boss_hp, 0);

    // AttackResolved, then BossDefeated with both shares, then the respawn.
    let mut saw_defeat = false;
    let mut saw_respawn = false;
    while let Ok(event) = events.try_recv() {
        match event {
            RaidEvent::BossDefeated { boss, payouts } => {
                assert_eq!(boss, BossId(0));
                assert_eq!(payouts.len(), 2);
                let total: u64 = payouts.iter().map(|p| p.amount).sum();
                assert_eq!(total, 1000);
                saw_defeat = true;
            }
            RaidEvent::BossSpawned { boss, .. } => {
                assert_eq!(boss, BossId(1));
                saw_respawn = true;
            }
            RaidEvent::AttackResolved { .. } => {}
        }
    }
    assert!(saw_defeat);
    assert!(saw_respawn);

    // Both contributors were credited, not just the killer.
    let p1 = handle.player(PlayerId(1)).unwrap().unwrap();
    let p2 = handle.player(PlayerId(2)).unwrap().unwrap();
    assert_eq!(p1.gold(), 400);
    assert_eq!(p2.gold(), 600);

    // The successor is live and untouched.
    let (state, _) = store.load().expect("load");
    let successor = state.active_boss.expect("successor boss");
    assert!(successor.active);
    assert_eq!(successor.id, BossId(1));
    assert_eq!(successor.hp.current(), successor.hp.maximum());
}

#[tokio::test]
async fn snapshot_keeps_only_the_five_newest_attacks() {
    let store = store_with_boss(BossTraits::default(), 1_000_000, 1_000_000);
    let raid = Raid::builder()
        .store(store)
        .session_seed(1)
        .build()
        .expect("raid should build");
    let handle = raid.handle();

    for i in 0..8u32 {
        handle
            .attack(PlayerId(1), cycle_attack().with_heart_rate(100 + i))
            .await
            .expect("attack should resolve");
    }

    let snapshot = handle.snapshot().await.expect("snapshot");
    assert_eq!(snapshot.recent_attacks.len(), 5);
    // Newest first: timestamps must be non-increasing.
    for pair in snapshot.recent_attacks.windows(2) {
        assert!(pair[0].at >= pair[1].at);
    }
    assert_eq!(snapshot.participants.len(), 1);
    assert_eq!(snapshot.participants[0].player, PlayerId(1));
}

#[tokio::test]
async fn snapshot_serializes_to_json() {
    let store = store_with_boss(BossTraits::default(), 5000, 5000);
    let raid = Raid::builder()
        .store(store)
        .session_seed(1)
        .build()
        .expect("raid should build");
    let handle = raid.handle();
    handle
        .attack(PlayerId(7), cycle_attack())
        .await
        .expect("attack should resolve");

    let snapshot = handle.snapshot().await.expect("snapshot");
    let json = serde_json::to_value(&snapshot).expect("snapshot should serialize");

    assert_eq!(json["boss_active"], true);
    assert_eq!(json["boss_kind"], "normal");
    assert_eq!(json["max_hp"], 5000);
    assert_eq!(json["recent_attacks"][0]["sport"], "cycle");
    assert_eq!(json["recent_attacks"][0]["player"], 7);
}
