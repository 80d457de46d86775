// End-to-end checks of the standings engine against the in-memory store:
// repeated weekly runs, season aggregation and output ordering.

use std::collections::BTreeMap;

use storage::models::PickWinner::{Away, Home};
use storage::services::standings_computation::{
    ScoringOptions, calculate_overall_standings, calculate_weekly_standings,
};
use storage::store::InMemoryStore;

/// Two weeks, four players, a mix of home wins, away wins and a tie.
fn season() -> InMemoryStore {
    InMemoryStore::new()
        .with_user(1, Some("Ana"))
        .with_user(2, Some("Ben"))
        .with_user(3, Some("Cy"))
        .with_user(4, None)
        .with_week(1)
        .with_week(2)
        // week 1
        .with_final_game(10, 1, 27, 20)
        .with_final_game(11, 1, 10, 17)
        .with_final_game(12, 1, 14, 14)
        .with_scheduled_game(13, 1)
        .with_pick(100, 1, 10, Home)
        .with_pick(101, 1, 11, Away)
        .with_pick(102, 1, 12, Home)
        .with_pick(103, 2, 10, Away)
        .with_pick(104, 2, 11, Away)
        .with_pick(105, 3, 10, Home)
        .with_pick(106, 3, 12, Away)
        .with_pick(107, 4, 13, Home)
        // week 2
        .with_final_game(20, 2, 3, 0)
        .with_final_game(21, 2, 35, 38)
        .with_pick(200, 1, 20, Away)
        .with_pick(201, 2, 20, Home)
        .with_pick(202, 2, 21, Away)
        .with_pick(203, 4, 21, Away)
}

#[tokio::test]
async fn recomputing_a_week_gives_the_same_scores() {
    let store = season();

    let first = calculate_weekly_standings(&store, 1, ScoringOptions::default())
        .await
        .unwrap();
    let second = calculate_weekly_standings(&store, 1, ScoringOptions::default())
        .await
        .unwrap();

    assert_eq!(first.standings, second.standings);
    assert_eq!(store.standings_count(), 3);
    assert_eq!(store.standing(1, 1), Some(2));
    assert_eq!(store.standing(2, 1), Some(1));
    assert_eq!(store.standing(3, 1), Some(1));
    // user 4 only picked the unfinished game
    assert_eq!(store.standing(4, 1), None);
    assert_eq!(store.pick_score(107), None);
}

#[tokio::test]
async fn season_total_is_the_sum_of_weekly_scores() {
    let store = season();
    let mut weekly: BTreeMap<i64, i64> = BTreeMap::new();

    for week_id in [1, 2] {
        let run = calculate_weekly_standings(&store, week_id, ScoringOptions::default())
            .await
            .unwrap();
        assert!(run.report.is_clean());
        for entry in run.standings.standings {
            *weekly.entry(entry.user_id).or_default() += i64::from(entry.score);
        }
    }

    let overall = calculate_overall_standings(&store).await.unwrap();

    let totals: BTreeMap<i64, i64> = overall.iter().map(|e| (e.user_id, e.total_score)).collect();
    assert_eq!(totals, weekly);
    assert_eq!(totals.get(&2), Some(&3));
    assert_eq!(totals.get(&4), Some(&1));

    let unnamed = overall.iter().find(|e| e.user_id == 4).unwrap();
    assert_eq!(unnamed.display_name, "Unknown");
}

#[tokio::test]
async fn outputs_are_sorted_by_score_descending() {
    let store = season();

    for week_id in [1, 2] {
        let run = calculate_weekly_standings(&store, week_id, ScoringOptions::default())
            .await
            .unwrap();
        let rows = &run.standings.standings;
        assert!(rows.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(
            rows.windows(2)
                .filter(|w| w[0].score == w[1].score)
                .all(|w| w[0].user_id < w[1].user_id)
        );
    }

    let overall = calculate_overall_standings(&store).await.unwrap();
    assert!(overall.windows(2).all(|w| w[0].total_score >= w[1].total_score));
}

#[tokio::test]
async fn weeks_are_finalized_once_scored() {
    let store = season();
    assert!(!store.is_week_finalized(2));

    calculate_weekly_standings(&store, 2, ScoringOptions::default())
        .await
        .unwrap();

    assert!(store.is_week_finalized(2));
    assert!(!store.is_week_finalized(1));
}
