// tests/pages.rs
//
// Pages end-to-end against a directory of view exports: scope narrowing,
// fetch + load, export stems, and writing the export file.

use std::fs;
use std::path::PathBuf;

use league_browser::config::options::{ExportFormat, ExportOptions, PageKind};
use league_browser::file;
use league_browser::gui::router;
use league_browser::pages::ScopeNeed;
use league_browser::store::{CsvDirProvider, DataProvider, Scope, Source};

fn fixture_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("league_pages_{tag}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    fs::write(
        dir.join("draft_picks.csv"),
        "league,season,pick,round,pick_in_round,manager,team,player,position,player_id\n\
         X,2020,1,1,1,Big Al,Aces,\"Smith, Jr.\",RB,11\n\
         X,2020,2,1,2,Sal,Sals,Jones,WR,12\n\
         X,2021,1,1,1,Sal,Sals,Adams,QB,13\n\
         Y,2021,1,1,1,Zed,Zeds,Other,TE,14\n",
    )
    .unwrap();
    fs::write(
        dir.join("team_seasons.csv"),
        "league,team_season_id,year,manager,team_name,season_finish,wins,losses,points_scored,points_against\r\n\
         X,1,2020,Big Al,Aces,1,10,4,1500.5,1200\r\n\
         X,2,2020,Sal,Sals,,4,10,1100,1400\r\n\
         X,3,2021,Big Al,Aces II,3,8,6,1300,1250\r\n\
         X,4,2021,Sal,Sals,2,9,5,1350,1280\r\n",
    )
    .unwrap();
    dir
}

#[test]
fn scope_for_takes_only_what_the_page_needs() {
    let picked = Scope::league("X").with_season(2021).with_manager("Sal");
    for page in router::all_pages() {
        let s = page.scope_for(&picked);
        assert_eq!(s.league, "X");
        assert_eq!(s.season.is_some(), page.needs() == ScopeNeed::Season, "{:?}", page.kind());
        assert_eq!(s.manager.is_some(), page.needs() == ScopeNeed::Manager, "{:?}", page.kind());
    }
}

#[test]
fn board_loads_one_season_of_one_league() {
    let dir = fixture_dir("board");
    let provider = CsvDirProvider::new(&dir);
    let page = router::page_for(PageKind::DraftBoard);

    assert_eq!(provider.seasons(Source::DraftPicks, "X").unwrap(), vec![2021, 2020]);

    let scope = page.scope_for(&Scope::league("X").with_season(2020));
    let mut b = page.browser();
    b.load(provider.fetch(page.source(), &scope).unwrap());

    let players: Vec<String> = b.view().rows().map(|r| r.get("player").to_string()).collect();
    assert_eq!(players, ["Smith, Jr.", "Jones"]);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn career_matches_manager_by_slug() {
    let dir = fixture_dir("career");
    let provider = CsvDirProvider::new(&dir);
    let page = router::page_for(PageKind::ManagerCareer);

    assert_eq!(provider.managers("X").unwrap(), vec!["Big Al", "Sal"]);

    let scope = page.scope_for(&Scope::league("X").with_manager("big-al"));
    let mut b = page.browser();
    b.load(provider.fetch(page.source(), &scope).unwrap());
    let years: Vec<i64> = b.view().rows().map(|r| r.int("year").unwrap()).collect();
    assert_eq!(years, vec![2020, 2021]);

    assert_eq!(page.export_stem(&scope), "career_X_big-al");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn teams_export_writes_all_rows_to_named_file() {
    let dir = fixture_dir("teams");
    let provider = CsvDirProvider::new(&dir);
    let page = router::page_for(PageKind::Teams);
    let scope = page.scope_for(&Scope::league("X"));

    let mut b = page.browser();
    b.load(provider.fetch(page.source(), &scope).unwrap());
    b.set_page_size(1);

    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Csv;
    opts.set_path(&dir.join("out").join("ignored.tsv").to_string_lossy());
    opts.set_stem(&page.export_stem(&scope));

    let path = file::export_browser(&opts, &b, &page.columns()).unwrap();
    assert_eq!(path, dir.join("out").join("teams_X.csv"));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("Year,Manager,Team,Finish"));
    // Newest first, ids ascending within a year.
    assert!(lines[1].starts_with("2021,Big Al,Aces II,3,"));
    assert!(lines[3].starts_with("2020,Big Al,Aces,1,10,4,1500.5,1200,107.18,"));
    assert!(lines[4].starts_with("2020,Sal,Sals,,"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_view_is_an_error() {
    let dir = fixture_dir("missing");
    let provider = CsvDirProvider::new(&dir);
    assert!(provider.fetch(Source::SeasonStandings, &Scope::league("X")).is_err());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn export_stems_follow_scope() {
    let scope = Scope::league("Conga Danga").with_season(2021);
    let stem = |k| router::page_for(k).export_stem(&router::page_for(k).scope_for(&scope));
    assert_eq!(stem(PageKind::DraftBoard), "draft_Conga_Danga_2021");
    assert_eq!(stem(PageKind::DraftHistory), "draft_all_Conga_Danga");
    assert_eq!(stem(PageKind::Standings), "standings_Conga_Danga_2021");
    assert_eq!(stem(PageKind::Teams), "teams_Conga_Danga");
    assert_eq!(stem(PageKind::Managers), "managers_Conga_Danga");
}
