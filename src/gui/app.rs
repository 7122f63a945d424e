// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
};

use eframe::egui;

use crate::{
    browser::TabularBrowser,
    config::{
        options::{ ExportOptions, PageKind },
        state::AppState,
    },
    data::Record,
    pages::{ Page, ScopeNeed },
    store::{ CsvDirProvider, DataProvider, Scope },
};

use super::{ components, router };

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "League Browser",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub provider: CsvDirProvider,

    // scope pickers
    pub seasons: Vec<i64>,
    pub managers: Vec<String>,
    pub data_dir_text: String,
    pub league_text: String,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // search box text per page, as typed (browsers keep the normalized form)
    pub search_texts: HashMap<PageKind, String>,

    // row position in the current view picked for the detail card
    pub selected: Option<usize>,

    pub status: String,

    // per-page browsers, the scope each was loaded for, and load errors
    pub browsers: HashMap<PageKind, TabularBrowser>,
    pub loaded: HashMap<PageKind, Scope>,
    pub errors: HashMap<PageKind, String>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let provider = CsvDirProvider::new(&state.gui.data_dir);
        let data_dir_text = state.gui.data_dir.to_string_lossy().into_owned();
        let league_text = state.gui.scope.league.clone();
        let out_path_text = state.export.out_path().to_string_lossy().into_owned();

        let browsers = router::all_pages().iter().map(|p| (p.kind(), p.browser())).collect();

        let mut app = Self {
            state,
            provider,
            seasons: Vec::new(),
            managers: Vec::new(),
            data_dir_text,
            league_text,
            out_path_text,
            out_path_dirty: false,
            search_texts: HashMap::new(),
            selected: None,
            status: s!("Idle"),
            browsers,
            loaded: HashMap::new(),
            errors: HashMap::new(),
        };

        logf!("Init: data_dir={} league={} pages={}",
            app.provider.root().display(), app.state.gui.scope.league, router::all_pages().len());

        app.state.export.set_default_dir_for_page(app.current_page_kind());
        app.refresh_scope_lists();
        app.ensure_loaded();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    pub fn browser(&self) -> Option<&TabularBrowser> {
        self.browsers.get(&self.current_page_kind())
    }

    pub fn browser_mut(&mut self) -> Option<&mut TabularBrowser> {
        let kind = self.current_page_kind();
        self.browsers.get_mut(&kind)
    }

    /// Search box text for the current page, as the user typed it.
    pub fn search_text(&self) -> &str {
        self.search_texts.get(&self.current_page_kind()).map_or("", String::as_str)
    }

    /// Keep the typed text for this page and hand its browser the query.
    pub fn set_search(&mut self, text: String) {
        let kind = self.current_page_kind();
        if let Some(b) = self.browsers.get_mut(&kind) {
            b.set_search(&text);
        }
        self.search_texts.insert(kind, text);
        self.selected = None;
    }

    /// The scope the current page fetches with.
    pub fn page_scope(&self) -> Scope {
        self.current_page().scope_for(&self.state.gui.scope)
    }

    /* ---------- scope ---------- */

    /// Re-read the season and manager pickers for the current page's view.
    /// Keeps the picked season/manager when still present, else picks the
    /// newest season / first manager.
    pub fn refresh_scope_lists(&mut self) {
        let page = self.current_page();
        let league = self.state.gui.scope.league.clone();

        self.seasons = match self.provider.seasons(page.source(), &league) {
            Ok(v) => v,
            Err(e) => {
                logd!("Scope: No seasons for {:?} ({})", page.source(), e);
                Vec::new()
            }
        };
        self.managers = match self.provider.managers(&league) {
            Ok(v) => v,
            Err(e) => {
                logd!("Scope: No managers ({})", e);
                Vec::new()
            }
        };

        let scope = &mut self.state.gui.scope;
        if !scope.season.is_some_and(|s| self.seasons.contains(&s)) {
            scope.season = self.seasons.first().copied();
        }
        if !scope.manager.as_ref().is_some_and(|m| self.managers.contains(m)) {
            scope.manager = self.managers.first().cloned();
        }
    }

    /// Point the provider at a new data directory and drop every loaded page.
    pub fn set_data_dir(&mut self, text: &str) {
        let dir = std::path::PathBuf::from(crate::file::normalize_separators(text.trim()));
        logf!("UI: Data dir → {}", dir.display());
        self.provider = CsvDirProvider::new(&dir);
        self.state.gui.data_dir = dir;
        self.loaded.clear();
        self.refresh_scope_lists();
        self.ensure_loaded();
    }

    pub fn set_league(&mut self, league: &str) {
        let league = league.trim();
        if league.is_empty() || league == self.state.gui.scope.league {
            return;
        }
        logf!("UI: League → {}", league);
        self.state.gui.scope = Scope::league(league);
        self.refresh_scope_lists();
        self.ensure_loaded();
    }

    pub fn set_season(&mut self, season: i64) {
        logf!("UI: Season → {}", season);
        self.state.gui.scope.season = Some(season);
        self.ensure_loaded();
    }

    pub fn set_manager(&mut self, manager: &str) {
        logf!("UI: Manager → {}", manager);
        self.state.gui.scope.manager = Some(s!(manager));
        self.ensure_loaded();
    }

    /* ---------- loading ---------- */

    /// Fetch the current page if it has never been loaded for its scope.
    pub fn ensure_loaded(&mut self) {
        let scope = self.page_scope();
        if self.loaded.get(&self.current_page_kind()) == Some(&scope) {
            self.sync_page_ui();
            return;
        }
        self.load_current(scope);
    }

    /// Force a re-fetch of the current page.
    pub fn reload(&mut self) {
        self.refresh_scope_lists();
        let scope = self.page_scope();
        self.load_current(scope);
    }

    fn load_current(&mut self, scope: Scope) {
        let page = self.current_page();
        let kind = page.kind();

        let fetched: Result<Vec<Record>, Box<dyn Error>> = match page.needs() {
            ScopeNeed::Season if scope.season.is_none() => Err(s!("No seasons available").into()),
            ScopeNeed::Manager if scope.manager.is_none() => Err(s!("No managers available").into()),
            _ => self.provider.fetch(page.source(), &scope),
        };

        // A load resets the browser's view, search included.
        self.search_texts.remove(&kind);
        let browser = self.browsers.entry(kind).or_insert_with(|| page.browser());
        match fetched {
            Ok(rows) => {
                let n = rows.len();
                browser.load(rows);
                self.errors.remove(&kind);
                logf!("Load: {:?} scope={:?} rows={}", kind, scope, n);
                self.status = format!("Loaded {n} row(s)");
            }
            Err(e) => {
                // Fetch failures keep the page usable, just empty.
                browser.load(Vec::new());
                loge!("Load: {:?} failed: {}", kind, e);
                self.status = format!("Error: {e}");
                self.errors.insert(kind, e.to_string());
            }
        }
        self.loaded.insert(kind, scope);
        self.sync_page_ui();
    }

    /// Clear the row pick and default the export stem to this page's name
    /// unless the user typed their own.
    pub fn sync_page_ui(&mut self) {
        self.selected = None;

        if !self.out_path_dirty {
            let stem = self.current_page().export_stem(&self.page_scope());
            self.state.export.set_stem(&stem);
            self.out_path_text = self.state.export.out_path().to_string_lossy().into_owned();
        }
    }

    /// Switch tabs. Moves the export dir along when it is still the
    /// previous page's default.
    pub fn switch_to(&mut self, idx: usize) {
        let prev = self.current_page_kind();
        self.set_current_index(idx);
        let next = self.current_page_kind();
        logf!("UI: Tab switch {:?} → {:?}", prev, next);

        let export = &mut self.state.export;
        if export.current_dir() == ExportOptions::default_dir_for(prev).as_path() {
            export.set_default_dir_for_page(next);
        }

        self.refresh_scope_lists();
        self.ensure_loaded();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            components::tabs::draw(ui, self);
            ui.separator();
            components::scope_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("export").show(ctx, |ui| {
            components::export_bar::draw(ui, self);
        });

        egui::SidePanel::right("summary")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                components::summary::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::controls::draw(ui, self);
            ui.separator();
            components::pager::draw(ui, self);
            components::data_table::draw(ui, self);
        });
    }
}
