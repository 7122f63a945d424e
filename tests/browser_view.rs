// tests/browser_view.rs
//
// Browser behavior through the real page field tables: filters, search,
// sort chains and pagination.

use league_browser::browser::{Filter, TabularBrowser};
use league_browser::data::{Record, Value};
use league_browser::pages::{Page, drafts, managers, standings, teams};
use league_browser::record;

fn pick(season: i64, pick: i64, manager: &str, player: &str, position: &str) -> Record {
    let round = (pick + 1) / 2;
    record! {
        "league" => "X",
        "season" => season,
        "pick" => pick,
        "round" => round,
        "pick_in_round" => pick - (round - 1) * 2,
        "manager" => manager,
        "team" => format!("{manager} FC"),
        "player" => player,
        "position" => position,
        "player_id" => format!("p{season}{pick}"),
    }
}

// Deliberately not in draft order.
fn draft_rows() -> Vec<Record> {
    vec![
        pick(2021, 3, "A", "Smith", "RB"),
        pick(2020, 2, "B", "Jones", "WR"),
        pick(2021, 1, "B", "Smyth", "WR"),
        pick(2020, 4, "A", "Brown", "RB"),
        pick(2020, 1, "A", "Smith, Jr.", "RB"),
        pick(2021, 4, "B", "Cole", "TE"),
        pick(2020, 3, "B", "Adams", "QB"),
        pick(2021, 2, "A", "Allen", "QB"),
    ]
}

fn history() -> TabularBrowser {
    let mut b = drafts::HISTORY.browser();
    b.load(draft_rows());
    b
}

fn keys(b: &TabularBrowser) -> Vec<(i64, i64)> {
    b.view()
        .rows()
        .map(|r| (r.int("season").unwrap(), r.int("pick").unwrap()))
        .collect()
}

#[test]
fn history_defaults_to_season_then_pick() {
    let b = history();
    assert_eq!(
        keys(&b),
        vec![(2020, 1), (2020, 2), (2020, 3), (2020, 4), (2021, 1), (2021, 2), (2021, 3), (2021, 4)]
    );
    assert_eq!(b.state().page_size, 100);
}

#[test]
fn board_filter_on_manager_keeps_pick_order() {
    let mut b = drafts::BOARD.browser();
    b.load(draft_rows().into_iter().filter(|r| r.int("season") == Some(2021)).collect());
    b.set_filter("manager", Value::from("A"));
    assert_eq!(keys(&b), vec![(2021, 2), (2021, 3)]);

    b.set_filter("manager", Filter::All);
    assert_eq!(b.view().total_count, 4);
}

#[test]
fn filters_combine_and_are_idempotent() {
    let mut b = history();
    b.set_filter("manager", Filter::from_choice("A"));
    b.set_filter("position", Filter::from_choice("RB"));
    let once = keys(&b);
    b.set_filter("position", Filter::from_choice("RB"));
    assert_eq!(keys(&b), once);
    assert_eq!(once, vec![(2020, 1), (2020, 4), (2021, 3)]);
}

#[test]
fn filter_to_nothing_is_empty_not_an_error() {
    let mut b = history();
    b.set_filter("position", Filter::from_choice("K"));
    let v = b.view();
    assert!(v.is_empty());
    assert_eq!(v.total_count, 0);
    assert_eq!(v.page_count, 1);
    assert_eq!(v.current_page, 1);
}

#[test]
fn search_is_trimmed_case_insensitive_and_narrows() {
    let mut b = history();
    let mut prev = b.matching();
    for q in ["S", "sm", "  SMI ", "smith,"] {
        b.set_search(q);
        let now = b.matching();
        assert!(now.iter().all(|i| prev.contains(i)), "{q:?} widened the match set");
        prev = now;
    }
    assert_eq!(keys(&b), vec![(2020, 1)]);

    b.set_search("smi");
    assert_eq!(keys(&b), vec![(2020, 1), (2021, 3)]);
}

#[test]
fn season_is_searchable_only_on_history() {
    let mut h = history();
    h.set_search("2021");
    assert_eq!(h.view().total_count, 4);

    let mut board = drafts::BOARD.browser();
    board.load(draft_rows());
    board.set_search("2021");
    assert_eq!(board.view().total_count, 0);
}

#[test]
fn text_sort_breaks_ties_by_season_then_pick() {
    let mut b = history();
    assert!(b.set_sort("manager"));
    assert_eq!(
        keys(&b),
        vec![(2020, 1), (2020, 4), (2021, 2), (2021, 3), (2020, 2), (2020, 3), (2021, 1), (2021, 4)]
    );

    assert!(b.set_sort("player"));
    let players: Vec<String> = b.view().rows().map(|r| r.get("player").to_string()).collect();
    assert_eq!(players, ["Adams", "Allen", "Brown", "Cole", "Jones", "Smith", "Smith, Jr.", "Smyth"]);
}

#[test]
fn round_sort_interleaves_seasons_by_pick() {
    let mut b = history();
    assert!(b.set_sort("round"));
    assert_eq!(
        keys(&b)[..4],
        [(2020, 1), (2021, 1), (2020, 2), (2021, 2)]
    );
}

#[test]
fn unknown_or_unsortable_sort_is_ignored() {
    let mut b = history();
    let before = keys(&b);
    assert!(!b.set_sort("nope"));
    assert!(!b.set_sort("player_id"));
    assert_eq!(b.state().sort_key, "season");
    assert_eq!(keys(&b), before);
}

#[test]
fn equal_keys_keep_load_order() {
    let mut b = drafts::HISTORY.browser();
    b.load(vec![
        pick(2020, 1, "A", "First", "RB"),
        pick(2020, 1, "A", "Second", "RB"),
        pick(2020, 1, "A", "Third", "RB"),
    ]);
    assert!(b.set_sort("manager"));
    let players: Vec<String> = b.view().rows().map(|r| r.get("player").to_string()).collect();
    assert_eq!(players, ["First", "Second", "Third"]);
}

#[test]
fn pages_partition_the_match_set() {
    let mut b = history();
    b.set_page_size(3);
    let all = b.matching();

    let first = b.view();
    assert_eq!(first.page_count, 3);
    drop(first);

    let mut seen = Vec::new();
    for p in 1..=3 {
        b.set_page(p);
        let v = b.view();
        assert!(v.len() <= 3);
        assert_eq!(v.total_count, all.len());
        seen.extend(v.row_ix.iter().copied());
    }
    assert_eq!(seen, all);
}

#[test]
fn set_page_clamps_both_ends() {
    let mut b = drafts::HISTORY.browser();
    b.load(vec![pick(2020, 1, "A", "a", "RB"), pick(2020, 2, "B", "b", "WR")]);
    b.set_page_size(1);
    b.set_page(5);
    let v = b.view();
    assert_eq!(v.current_page, 2);
    assert!(!v.has_next());
    assert!(v.has_prev());
    drop(v);

    b.set_page(0);
    assert_eq!(b.view().current_page, 1);

    b.set_page_size(0);
    assert_eq!(b.state().page_size, 1);
}

#[test]
fn search_and_filter_reset_to_first_page() {
    let mut b = history();
    b.set_page_size(2);
    b.set_page(3);
    assert_eq!(b.view().current_page, 3);
    b.set_search("s");
    assert_eq!(b.view().current_page, 1);
    b.set_page(2);
    b.set_filter("manager", Filter::from_choice("A"));
    assert_eq!(b.view().current_page, 1);
}

#[test]
fn load_resets_the_view() {
    let mut b = history();
    b.set_search("smith");
    b.set_sort("player");
    b.set_page_size(2);
    b.load(draft_rows());
    assert_eq!(b.state().search, "");
    assert_eq!(b.state().sort_key, "season");
    assert_eq!(b.state().page_size, 100);
    assert_eq!(b.view().total_count, 8);
}

#[test]
fn views_are_deterministic() {
    let mut b = history();
    b.set_sort("position");
    b.set_search("a");
    let v1 = b.view().row_ix;
    let v2 = b.view().row_ix;
    assert_eq!(v1, v2);
}

#[test]
fn distinct_values_feed_dropdowns() {
    let b = history();
    let pos: Vec<String> = b.distinct_values("position").iter().map(ToString::to_string).collect();
    assert_eq!(pos, ["QB", "RB", "TE", "WR"]);
}

/* ---- null sentinels ---- */

fn team_season(id: i64, year: i64, finish: Option<i64>, pf: f64) -> Record {
    record! {
        "league" => "X",
        "team_season_id" => id,
        "year" => year,
        "manager" => format!("M{id}"),
        "team_name" => format!("Team {id}"),
        "season_finish" => finish,
        "wins" => 5,
        "losses" => 5,
        "points_scored" => pf,
        "points_against" => 1000.0,
    }
}

#[test]
fn missing_finish_sorts_after_real_places() {
    let mut b = teams::PAGE.browser();
    b.load(vec![
        team_season(1, 2020, None, 1500.0),
        team_season(2, 2020, Some(1), 1200.0),
        team_season(3, 2020, Some(3), 1100.0),
    ]);
    assert!(b.set_sort("season_finish"));
    let finishes: Vec<Value> = b.view().rows().map(|r| r.get("season_finish").clone()).collect();
    assert_eq!(finishes, vec![Value::from(1), Value::from(3), Value::Null]);
}

#[test]
fn teams_default_newest_first_then_id() {
    let mut b = teams::PAGE.browser();
    b.load(vec![
        team_season(3, 2019, Some(2), 1000.0),
        team_season(2, 2021, Some(1), 1000.0),
        team_season(1, 2021, Some(4), 1000.0),
    ]);
    let ids: Vec<i64> = b.view().rows().map(|r| r.int("team_season_id").unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn derived_average_sort_uses_games_played() {
    let mut b = teams::PAGE.browser();
    let mut short = team_season(1, 2020, Some(1), 900.0);
    short.set("wins", 3);
    short.set("losses", 3);
    b.load(vec![team_season(2, 2020, Some(2), 1100.0), short]);
    // 900 / 6 = 150 beats 1100 / 10 = 110.
    assert!(b.set_sort("avg_points_scored"));
    let ids: Vec<i64> = b.view().rows().map(|r| r.int("team_season_id").unwrap()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn standings_break_finish_ties_on_points() {
    let mut b = standings::PAGE.browser();
    b.load(vec![
        record! { "manager" => "Low", "season_finish" => Value::Null, "points_scored" => 900 },
        record! { "manager" => "Champ", "season_finish" => 1, "points_scored" => 1000 },
        record! { "manager" => "High", "season_finish" => Value::Null, "points_scored" => 1300 },
    ]);
    let names: Vec<String> = b.view().rows().map(|r| r.get("manager").to_string()).collect();
    assert_eq!(names, ["Champ", "High", "Low"]);
}

#[test]
fn managers_rank_by_titles_then_name() {
    let mut b = managers::PAGE.browser();
    b.load(vec![
        record! { "manager" => "Zed", "championships" => 2, "avg_finish" => 3.5 },
        record! { "manager" => "Amy", "championships" => 2, "avg_finish" => Value::Null },
        record! { "manager" => "Bob", "championships" => 4, "avg_finish" => 2.0 },
    ]);
    let names: Vec<String> = b.view().rows().map(|r| r.get("manager").to_string()).collect();
    assert_eq!(names, ["Bob", "Amy", "Zed"]);

    assert!(b.set_sort("avg_finish"));
    let names: Vec<String> = b.view().rows().map(|r| r.get("manager").to_string()).collect();
    assert_eq!(names, ["Bob", "Zed", "Amy"]);
}
