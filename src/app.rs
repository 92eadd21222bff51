use crate::event::AppEvent;
use crate::github::rate_limit::cooldown_active;
use crate::github::types::User;
use crate::notify::Notifications;
use crate::policy;
use crate::store::profile::ProfileRequest;
use crate::store::search::SearchRequest;
use crate::store::{Completion, RequestStatus, Store};
use crate::ui::{
    self,
    header_bar::{HeaderBar, HeaderContent},
    help_panel::HelpPanel,
    input::{self, Action, InputMode},
    profile_card::ProfileCard,
    status_bar::{Cooldown, StatusBar},
    theme,
    toast::Toast,
    user_list::UserList,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Widget,
    Frame,
};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Search,
    Profile(String),
    Favourites,
}

/// Side effects requested by the app, carried out by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ScheduleSearch(String),
    CancelScheduledSearch,
    Search(SearchRequest),
    FetchProfile(ProfileRequest),
}

#[derive(Debug, Default, Clone, Copy)]
struct ListCursor {
    selected: usize,
    scroll: usize,
}

impl ListCursor {
    fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            *self = ListCursor::default();
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, len as isize - 1) as usize;
    }

    fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        if self.scroll > self.selected {
            self.scroll = self.selected;
        }
    }

    fn ensure_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected >= self.scroll + visible_height {
            self.scroll = self.selected - visible_height + 1;
        }
        if self.selected < self.scroll {
            self.scroll = self.selected;
        }
    }
}

pub struct App {
    store: Store,
    notifications: Notifications,
    screen: Screen,
    history: Vec<Screen>,
    query_input: String,
    input_mode: InputMode,
    results: ListCursor,
    favourites: ListCursor,
    viewport_height: usize,
    last_near_end_check: Option<(usize, usize)>,
    show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            notifications: Notifications::default(),
            screen: Screen::Search,
            history: Vec::new(),
            query_input: String::new(),
            input_mode: InputMode::Navigate,
            results: ListCursor::default(),
            favourites: ListCursor::default(),
            viewport_height: 0,
            last_near_end_check: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Seeds the query box and, if allowed, searches for it right away.
    pub fn start(&mut self, initial_query: Option<String>, now: i64) -> Vec<Command> {
        match initial_query {
            Some(query) => {
                self.query_input = query;
                let query = self.query_input.clone();
                self.trigger_search(&query, now).into_iter().collect()
            }
            None => {
                self.input_mode = InputMode::Editing;
                Vec::new()
            }
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &Store {
        &self.store
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn cooldown_active(&self, now: i64) -> bool {
        cooldown_active(self.store.cooldown_until(), now)
    }

    pub fn prune_notifications(&mut self, now: Instant) {
        self.notifications.prune(now);
    }

    pub fn has_notifications(&self) -> bool {
        self.notifications.len() > 0
    }

    #[cfg(test)]
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
    }

    pub fn handle_event(&mut self, event: AppEvent, now: i64) -> Vec<Command> {
        match event {
            AppEvent::Key(key) => {
                let action = input::map_key(key, self.input_mode);
                self.handle_action(action, now)
            }
            AppEvent::Resize | AppEvent::Tick => Vec::new(),
            AppEvent::SearchDue(query) => self.trigger_search(&query, now).into_iter().collect(),
            AppEvent::SearchFinished { request, result } => {
                let error = result.as_ref().err().cloned();
                if self.store.finish_search(&request, result) == Completion::Applied {
                    match error {
                        Some(err) => self.notifications.on_api_error(&err),
                        None => self.last_near_end_check = None,
                    }
                    if let Some(reset) = self.store.rate_limit_reset_at() {
                        log::info!("search cooling down until {reset}");
                    }
                    self.results.clamp(self.store.users().len());
                }
                Vec::new()
            }
            AppEvent::ProfileFinished { request, result } => {
                let error = result.as_ref().err().cloned();
                if self.store.finish_profile(&request, result) == Completion::Applied {
                    if let Some(err) = error {
                        self.notifications.on_api_error(&err);
                    }
                }
                Vec::new()
            }
        }
    }

    fn handle_action(&mut self, action: Action, now: i64) -> Vec<Command> {
        if self.show_help {
            match action {
                Action::Quit => self.should_quit = true,
                Action::Help | Action::Back | Action::InputCancel => self.show_help = false,
                _ => {}
            }
            return Vec::new();
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::FocusSearch => {
                if self.screen != Screen::Search {
                    self.navigate(Screen::Search);
                }
                self.input_mode = InputMode::Editing;
            }
            Action::InputChar(c) => {
                self.query_input.push(c);
                return vec![Command::ScheduleSearch(self.query_input.clone())];
            }
            Action::InputBackspace => {
                self.query_input.pop();
                return vec![Command::ScheduleSearch(self.query_input.clone())];
            }
            Action::InputConfirm => {
                self.input_mode = InputMode::Navigate;
                let query = self.query_input.clone();
                let mut commands = vec![Command::CancelScheduledSearch];
                commands.extend(self.trigger_search(&query, now));
                return commands;
            }
            Action::InputCancel => self.input_mode = InputMode::Navigate,
            Action::ScrollDown => self.move_selection(1),
            Action::ScrollUp => self.move_selection(-1),
            Action::PageDown => self.move_selection(self.viewport_height.max(1) as isize),
            Action::PageUp => self.move_selection(-(self.viewport_height.max(1) as isize)),
            Action::Select => {
                if let Some(login) = self.highlighted_user().map(|u| u.login.clone()) {
                    return vec![self.open_profile(&login)];
                }
            }
            Action::ToggleStar => {
                if let Some(user) = self.star_target().cloned() {
                    self.store.toggle_favourite(&user);
                    self.favourites.clamp(self.store.favourites().len());
                }
            }
            Action::Favourites => {
                if self.screen != Screen::Favourites {
                    self.navigate(Screen::Favourites);
                }
            }
            Action::Refresh => {
                if self.screen == Screen::Search
                    && policy::can_refresh(self.store.search(), self.store.cooldown_until(), now)
                {
                    let query = self.store.pagination().query.to_string();
                    return vec![self.begin_search(&query)];
                }
            }
            Action::LoadMore => {
                if self.screen == Screen::Search
                    && policy::can_load_more_explicitly(
                        self.store.search(),
                        self.store.cooldown_until(),
                        now,
                    )
                {
                    return vec![Command::Search(self.store.begin_pagination())];
                }
            }
            Action::Back => self.go_back(),
            Action::None => {}
        }
        Vec::new()
    }

    fn trigger_search(&mut self, raw: &str, now: i64) -> Option<Command> {
        let query = policy::significant_query(raw)?;
        if !policy::can_search(query, self.store.cooldown_until(), now) {
            log::debug!("search for {query:?} suppressed by cooldown");
            return None;
        }
        let search = self.store.search();
        if search.query() == query
            && matches!(
                search.status(),
                RequestStatus::Loading | RequestStatus::Succeeded
            )
        {
            return None;
        }
        let query = query.to_string();
        Some(self.begin_search(&query))
    }

    fn begin_search(&mut self, query: &str) -> Command {
        self.results = ListCursor::default();
        self.last_near_end_check = None;
        Command::Search(self.store.begin_search(query))
    }

    fn open_profile(&mut self, login: &str) -> Command {
        self.navigate(Screen::Profile(login.to_string()));
        Command::FetchProfile(self.store.fetch_profile(login))
    }

    fn navigate(&mut self, screen: Screen) {
        let previous = std::mem::replace(&mut self.screen, screen);
        self.history.push(previous);
        self.input_mode = InputMode::Navigate;
    }

    fn go_back(&mut self) {
        self.screen = self.history.pop().unwrap_or(Screen::Search);
    }

    fn move_selection(&mut self, delta: isize) {
        match self.screen {
            Screen::Search => self.results.move_by(delta, self.store.users().len()),
            Screen::Favourites => self.favourites.move_by(delta, self.store.favourites().len()),
            Screen::Profile(_) => {}
        }
    }

    fn highlighted_user(&self) -> Option<&User> {
        match self.screen {
            Screen::Search => self.store.users().get(self.results.selected),
            Screen::Favourites => self.store.favourites().get(self.favourites.selected),
            Screen::Profile(_) => None,
        }
    }

    fn star_target(&self) -> Option<&User> {
        match self.screen {
            Screen::Profile(_) => self.store.selected_user(),
            _ => self.highlighted_user(),
        }
    }

    /// Near-end pagination, checked once per change in what is visible.
    pub fn after_render(&mut self, now: i64) -> Vec<Command> {
        if self.screen != Screen::Search || self.viewport_height == 0 {
            return Vec::new();
        }
        let loaded = self.store.users().len();
        if loaded == 0 {
            return Vec::new();
        }
        let last_visible = (self.results.scroll + self.viewport_height).min(loaded) - 1;
        let key = (last_visible, loaded);
        if self.last_near_end_check == Some(key) {
            return Vec::new();
        }
        self.last_near_end_check = Some(key);

        if policy::near_end(last_visible, loaded)
            && policy::can_paginate(self.store.search(), self.store.cooldown_until(), now)
        {
            log::debug!(
                "{loaded} rows loaded, fetching page {}",
                self.store.pagination().page
            );
            return vec![Command::Search(self.store.begin_pagination())];
        }
        Vec::new()
    }

    fn footer_cooldown(&self, now: i64) -> Cooldown {
        match self.store.cooldown_until() {
            Some(reset) if reset > now => Cooldown::Active(reset.saturating_sub(now)),
            Some(_) if self.screen == Screen::Search => Cooldown::Cleared {
                load_more_enabled: policy::can_load_more_explicitly(
                    self.store.search(),
                    self.store.cooldown_until(),
                    now,
                ),
            },
            _ => Cooldown::None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, now: i64) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(size);
        let body = chunks[1];
        self.viewport_height = body.height as usize;

        let title;
        let content = match &self.screen {
            Screen::Search => HeaderContent::Query {
                text: &self.query_input,
                editing: self.input_mode.is_editing(),
            },
            Screen::Profile(handle) => {
                title = format!("@{handle}");
                HeaderContent::Title(&title)
            }
            Screen::Favourites => HeaderContent::Title("Favourites"),
        };
        frame.render_widget(
            HeaderBar {
                content,
                favourites_count: self.store.favourites_count(),
            },
            chunks[0],
        );

        let dim = Style::default().fg(theme::DIM_TEXT);
        let buf = frame.buffer_mut();
        match &self.screen {
            Screen::Search => {
                let search = self.store.search();
                if search.users().is_empty() {
                    let message = if search.is_loading() {
                        "Searching\u{2026}"
                    } else if let Some(err) = search.error() {
                        err.message()
                    } else if policy::significant_query(search.query()).is_none() {
                        "Press / and type at least 3 characters"
                    } else {
                        "No search results."
                    };
                    ui::render_centered_message(buf, body, message, dim);
                } else {
                    self.results.ensure_visible(self.viewport_height);
                    UserList {
                        users: search.users(),
                        favourites: self.store.favourites(),
                        selected: self.results.selected,
                        scroll: self.results.scroll,
                    }
                    .render(body, buf);
                }
            }
            Screen::Profile(handle) => {
                let profile = self.store.profile();
                match profile.user() {
                    Some(user) => ProfileCard {
                        user,
                        is_favourite: self.store.is_favourite(Some(&user.login)),
                    }
                    .render(body, buf),
                    None if profile.status() == RequestStatus::Loading => {
                        let handle = profile.handle().unwrap_or(handle.as_str());
                        ui::render_centered_message(
                            buf,
                            body,
                            &format!("Loading @{handle}\u{2026}"),
                            dim,
                        );
                    }
                    None => {
                        let message = match profile.error() {
                            Some(err) if err.is_rate_limited() => err.message(),
                            _ => "User not found",
                        };
                        ui::render_centered_message(buf, body, message, dim);
                    }
                }
            }
            Screen::Favourites => {
                let favourites = self.store.favourites();
                if favourites.is_empty() {
                    ui::render_centered_message(
                        buf,
                        body,
                        "You don't have any favourite users yet",
                        dim,
                    );
                } else {
                    self.favourites.ensure_visible(self.viewport_height);
                    UserList {
                        users: favourites,
                        favourites,
                        selected: self.favourites.selected,
                        scroll: self.favourites.scroll,
                    }
                    .render(body, buf);
                }
            }
        }

        let on_search = self.screen == Screen::Search;
        let pagination = self.store.pagination();
        let status = StatusBar {
            cooldown: self.footer_cooldown(now),
            loading: (on_search && self.store.is_searching()) || self.store.is_profile_loading(),
            loaded: self.store.users().len(),
            total_count: pagination.total_count.filter(|_| on_search),
            incomplete: self.store.search().incomplete() == Some(true),
            has_more: pagination.has_more,
            hint: if self.input_mode.is_editing() {
                "Enter search  Esc done"
            } else {
                "? help"
            },
        };
        frame.render_widget(status, chunks[2]);

        if let Some(notification) = self.notifications.current() {
            frame.render_widget(Toast { notification }, body);
        }

        if self.show_help {
            frame.render_widget(HelpPanel, size);
        }
    }
}
