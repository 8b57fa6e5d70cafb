//! Behavioural coverage for ranking lost reports against found reports.

use std::cell::RefCell;

use jiff::civil::date;
use lostfound_core::{FoundItem, FoundStatus, LostItem};
use lostfound_matcher::compute_matches;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Reports gathered by the scenario and the ranking computed from them.
#[derive(Default)]
pub struct RankingWorld {
    lost: RefCell<Vec<LostItem>>,
    found: RefCell<Vec<FoundItem>>,
    ranked: RefCell<Option<Vec<(String, u32)>>>,
}

/// Fresh, empty world for each scenario.
#[fixture]
pub fn world() -> RankingWorld {
    RankingWorld::default()
}

fn push_lost(world: &RankingWorld, item: LostItem) {
    world.lost.borrow_mut().push(item);
}

fn push_found(world: &RankingWorld, item: FoundItem) {
    world.found.borrow_mut().push(item);
}

fn ranked(world: &RankingWorld) -> Vec<(String, u32)> {
    world
        .ranked
        .borrow()
        .clone()
        .unwrap_or_else(|| panic!("matches must be computed first"))
}

#[given("a lost black phone reported at the library")]
fn lost_phone(world: &RankingWorld) {
    push_lost(
        world,
        LostItem::new(
            "lost-phone",
            "Phone",
            "black phone",
            "Electronics",
            "Library",
            date(2025, 4, 1),
        ),
    );
}

#[given("a verified black smartphone found the next day on the library's second floor")]
fn verified_smartphone(world: &RankingWorld) {
    push_found(world, smartphone(FoundStatus::Verified));
}

#[given("a claimed black smartphone found the next day on the library's second floor")]
fn claimed_smartphone(world: &RankingWorld) {
    push_found(world, smartphone(FoundStatus::Claimed));
}

fn smartphone(status: FoundStatus) -> FoundItem {
    FoundItem::new(
        "found-smartphone",
        "Smartphone",
        "black smartphone found",
        "Electronics",
        "Library 2nd floor",
        date(2025, 4, 2),
        status,
    )
}

#[given("a lost chemistry textbook reported at the gym")]
fn lost_textbook(world: &RankingWorld) {
    push_lost(
        world,
        LostItem::new(
            "lost-textbook",
            "Textbook",
            "organic chemistry",
            "Books",
            "Gym",
            date(2025, 3, 1),
        ),
    );
}

#[given("a verified pair of earbuds found three weeks later in the cafeteria")]
fn found_earbuds(world: &RankingWorld) {
    push_found(
        world,
        FoundItem::new(
            "found-earbuds",
            "Headphones",
            "wireless earbuds",
            "Electronics",
            "Cafeteria",
            date(2025, 3, 22),
            FoundStatus::Verified,
        ),
    );
}

#[given("a lost silver laptop reported at the library")]
fn lost_laptop(world: &RankingWorld) {
    push_lost(
        world,
        LostItem::new(
            "lost-laptop",
            "Laptop",
            "silver laptop",
            "Electronics",
            "Library",
            date(2025, 4, 1),
        ),
    );
}

#[given("a verified charger found five days later in the cafeteria")]
fn found_charger(world: &RankingWorld) {
    push_found(
        world,
        FoundItem::new(
            "found-charger",
            "Charger",
            "white cable",
            "Electronics",
            "Cafeteria",
            date(2025, 4, 6),
            FoundStatus::Verified,
        ),
    );
}

#[given("a verified grey laptop found two days later at the gym")]
fn found_laptop(world: &RankingWorld) {
    push_found(
        world,
        FoundItem::new(
            "found-laptop",
            "Laptop",
            "grey laptop",
            "Electronics",
            "Gym",
            date(2025, 4, 3),
            FoundStatus::Verified,
        ),
    );
}

#[when("I compute matches")]
fn compute(world: &RankingWorld) {
    let lost = world.lost.borrow();
    let found = world.found.borrow();
    let ranked = compute_matches(&lost, &found)
        .iter()
        .map(|candidate| (candidate.id(), candidate.score()))
        .collect();
    *world.ranked.borrow_mut() = Some(ranked);
}

#[then("one candidate pairs the phone with the smartphone")]
fn phone_paired(world: &RankingWorld) {
    let ids: Vec<String> = ranked(world).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["lost-phone-found-smartphone".to_owned()]);
}

#[then("the candidate scores at least 8")]
fn strong_score(world: &RankingWorld) {
    let scores: Vec<u32> = ranked(world).into_iter().map(|(_, score)| score).collect();
    assert!(
        scores.iter().all(|score| *score >= 8),
        "expected strong scores, got {scores:?}"
    );
}

#[then("no candidates are proposed")]
fn nothing_proposed(world: &RankingWorld) {
    assert_eq!(ranked(world), Vec::new());
}

#[then("the candidates are ranked grey laptop then charger")]
fn laptop_before_charger(world: &RankingWorld) {
    assert_eq!(
        ranked(world),
        vec![
            ("lost-laptop-found-laptop".to_owned(), 7),
            ("lost-laptop-found-charger".to_owned(), 4),
        ]
    );
}

#[scenario(path = "tests/features/match_ranking.feature", index = 0)]
fn proposes_matching_phone(world: RankingWorld) {
    drop(world);
}

#[scenario(path = "tests/features/match_ranking.feature", index = 1)]
fn skips_claimed_items(world: RankingWorld) {
    drop(world);
}

#[scenario(path = "tests/features/match_ranking.feature", index = 2)]
fn suppresses_unrelated_reports(world: RankingWorld) {
    drop(world);
}

#[scenario(path = "tests/features/match_ranking.feature", index = 3)]
fn ranks_stronger_match_first(world: RankingWorld) {
    drop(world);
}

#[scenario(path = "tests/features/match_ranking.feature", index = 4)]
fn empty_inputs_rank_nothing(world: RankingWorld) {
    drop(world);
}
