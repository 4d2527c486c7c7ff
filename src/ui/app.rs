use std::mem;

use anyhow::{Error, Result};
use crossterm::event::KeyCode;
use open::that as open_link;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{info, warn};

use crate::navigation::Step;
use crate::session::Session;

use super::forms::{FilterInput, JumpInput, JumpTarget};
use super::helpers::{centered_rect, surface_error, vertically_centered, wrapped_height};
use super::screens::{BookPane, CatalogScreen, Focus};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height of the translation bar above the lists.
const TRANSLATION_BAR_HEIGHT: u16 = 3;
/// Share of the operator screen given to the projector preview.
const PROJECTOR_PERCENT: u16 = 35;
/// Rows skipped by PageUp/PageDown.
const PAGE: isize = 10;

/// Top-level views. The projector view fills the terminal with the audience
/// text, standing in for the second screen.
enum Screen {
    Operator,
    Catalog(CatalogScreen),
    Projector,
}

/// Input modes layered over the operator screen.
enum Mode {
    Normal,
    Filtering(FilterInput),
    Jumping(JumpInput),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state for the operator console.
pub struct App {
    session: Session,
    installed: Vec<String>,
    books: BookPane,
    focus: Focus,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            installed: Vec::new(),
            books: BookPane::default(),
            focus: Focus::Books,
            screen: Screen::Operator,
            mode: Mode::Normal,
            status: None,
        };
        app.refresh_installed();
        app.refresh_book_rows();
        app
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Show a message in the footer, typically a start-up warning.
    pub fn notify_error<S: Into<String>>(&mut self, text: S) {
        self.set_status(text, StatusKind::Error);
    }

    /// Process one key press. Returns `true` when the operator asked to quit.
    /// Failures never escape: they are logged and shown in the footer.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        let result = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::Filtering(input) => self.handle_filter(code, input),
            Mode::Jumping(input) => self.handle_jump(code, input),
        };

        match result {
            Ok(mode) => self.mode = mode,
            Err(err) => self.report(&err),
        }
        exit
    }

    /// Toggle the black-out state of the projector.
    pub(crate) fn handle_ctrl_b(&mut self) {
        let black = self.session.projector_mut().toggle_black();
        let message = if black {
            "Projector blacked out."
        } else {
            "Projector back on."
        };
        self.set_status(message, StatusKind::Info);
    }

    /// Clear the projected text without blacking out.
    pub(crate) fn handle_ctrl_l(&mut self) {
        self.session.projector_mut().clear();
        self.set_status("Projector cleared.", StatusKind::Info);
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match self.screen {
            Screen::Operator => self.handle_operator_key(code, exit),
            Screen::Catalog(_) => self.handle_catalog_key(code, exit),
            Screen::Projector => {
                match code {
                    KeyCode::Char('q') => *exit = true,
                    KeyCode::Esc | KeyCode::Char('f') => self.screen = Screen::Operator,
                    KeyCode::Down | KeyCode::Right | KeyCode::Char('n') | KeyCode::Char(' ') => {
                        self.next_verse()?
                    }
                    KeyCode::Up | KeyCode::Left | KeyCode::Char('p') => self.prev_verse()?,
                    _ => {}
                }
                Ok(Mode::Normal)
            }
        }
    }

    fn handle_operator_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc => {
                if self.books.filter.is_some() {
                    self.set_book_filter(None);
                    self.clear_status();
                } else {
                    *exit = true;
                }
            }
            KeyCode::Tab | KeyCode::Right => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Left => self.focus = self.focus.previous(),
            KeyCode::Up => self.move_in_focus(-1)?,
            KeyCode::Down => self.move_in_focus(1)?,
            KeyCode::PageUp => self.move_in_focus(-PAGE)?,
            KeyCode::PageDown => self.move_in_focus(PAGE)?,
            KeyCode::Home => self.jump_in_focus(false)?,
            KeyCode::End => self.jump_in_focus(true)?,
            KeyCode::Enter => self.activate_focus()?,
            KeyCode::Char('n') | KeyCode::Char(' ') => self.next_verse()?,
            KeyCode::Char('p') => self.prev_verse()?,
            KeyCode::Char('/') => {
                let query = self.books.filter.clone().unwrap_or_default();
                self.focus = Focus::Books;
                return Ok(Mode::Filtering(FilterInput { query }));
            }
            KeyCode::Char(':') => {
                if self.session.navigation().book().is_none() {
                    self.set_status("Select a book first.", StatusKind::Error);
                } else {
                    return Ok(Mode::Jumping(JumpInput::new(JumpTarget::Chapter)));
                }
            }
            KeyCode::Char('.') => {
                if self.session.navigation().chapter().is_none() {
                    self.set_status("Select a chapter first.", StatusKind::Error);
                } else {
                    return Ok(Mode::Jumping(JumpInput::new(JumpTarget::Verse)));
                }
            }
            KeyCode::Char(ch @ '1'..='9') => {
                let index = ch as usize - '1' as usize;
                match self.installed.get(index).cloned() {
                    Some(identifier) => self.switch_translation(&identifier),
                    None => self.set_status(
                        format!("No translation in slot {ch}."),
                        StatusKind::Error,
                    ),
                }
            }
            KeyCode::Char('r') => {
                self.refresh_installed();
                self.set_status(
                    format!("{} translations installed.", self.installed.len()),
                    StatusKind::Info,
                );
            }
            KeyCode::Char('c') => self.open_catalog(),
            KeyCode::Char('h') => {
                let hidden = self.session.projector_mut().toggle_hidden();
                let message = if hidden {
                    "Projector hidden."
                } else {
                    "Projector shown."
                };
                self.set_status(message, StatusKind::Info);
            }
            KeyCode::Char('f') => self.screen = Screen::Projector,
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_catalog_key(&mut self, code: KeyCode, exit: &mut bool) -> Result<Mode> {
        let catalog = match &mut self.screen {
            Screen::Catalog(catalog) => catalog,
            _ => return Ok(Mode::Normal),
        };

        match code {
            KeyCode::Char('q') => *exit = true,
            KeyCode::Esc | KeyCode::Char('c') => self.screen = Screen::Operator,
            KeyCode::Up => catalog.move_selection(-1),
            KeyCode::Down => catalog.move_selection(1),
            KeyCode::Enter => {
                let Some(row) = catalog.current() else {
                    return Ok(Mode::Normal);
                };
                let (entry, installed) = (row.entry, row.installed);
                if installed {
                    self.screen = Screen::Operator;
                    self.switch_translation(entry.identifier);
                } else {
                    self.open_source(entry.source_url, entry.display_name);
                }
            }
            KeyCode::Char('o') => {
                if let Some(row) = catalog.current() {
                    let entry = row.entry;
                    self.open_source(entry.source_url, entry.display_name);
                }
            }
            _ => {}
        }
        Ok(Mode::Normal)
    }

    fn handle_filter(&mut self, code: KeyCode, mut input: FilterInput) -> Result<Mode> {
        match code {
            KeyCode::Esc => {
                self.set_book_filter(None);
                return Ok(Mode::Normal);
            }
            KeyCode::Enter => {
                self.select_highlighted_book()?;
                if self.books.current_book_id().is_some() {
                    self.focus = Focus::Chapters;
                }
                return Ok(Mode::Normal);
            }
            KeyCode::Up => {
                self.books.move_selection(-1);
                self.select_highlighted_book()?;
                return Ok(Mode::Filtering(input));
            }
            KeyCode::Down => {
                self.books.move_selection(1);
                self.select_highlighted_book()?;
                return Ok(Mode::Filtering(input));
            }
            KeyCode::Backspace => input.backspace(),
            KeyCode::Char(ch) => {
                if !input.push_char(ch) {
                    return Ok(Mode::Filtering(input));
                }
            }
            _ => return Ok(Mode::Filtering(input)),
        }

        let filter = if input.query.trim().is_empty() {
            None
        } else {
            Some(input.query.clone())
        };
        self.set_book_filter(filter);

        // A unique match is taken straight away, moving on to the chapters.
        if self.books.rows.len() == 1 && !input.query.trim().is_empty() {
            self.select_highlighted_book()?;
            self.focus = Focus::Chapters;
            return Ok(Mode::Normal);
        }

        Ok(Mode::Filtering(input))
    }

    fn handle_jump(&mut self, code: KeyCode, mut input: JumpInput) -> Result<Mode> {
        match code {
            KeyCode::Esc => return Ok(Mode::Normal),
            KeyCode::Enter => {
                let number = match input.parse_number() {
                    Ok(number) => number,
                    Err(err) => {
                        input.error = Some(err.to_string());
                        return Ok(Mode::Jumping(input));
                    }
                };
                let landed = match input.target {
                    JumpTarget::Chapter => self.jump_to_chapter(number)?,
                    JumpTarget::Verse => self.jump_to_verse(number as usize - 1),
                };
                if landed {
                    return Ok(Mode::Normal);
                }
                input.error = Some(format!(
                    "{} {number} does not exist.",
                    input.target.label()
                ));
                return Ok(Mode::Jumping(input));
            }
            KeyCode::Backspace => {
                input.backspace();
                return Ok(Mode::Jumping(input));
            }
            KeyCode::Char(ch) => {
                if !input.push_char(ch) {
                    return Ok(Mode::Jumping(input));
                }
            }
            _ => return Ok(Mode::Jumping(input)),
        }

        // Typing narrows by prefix; a single candidate is selected right away.
        match input.target {
            JumpTarget::Chapter => {
                if let [chapter] = self.session.chapter_prefix_matches(&input.digits)[..] {
                    self.jump_to_chapter(chapter)?;
                    return Ok(Mode::Normal);
                }
            }
            JumpTarget::Verse => {
                if let [index] = self.session.verse_prefix_matches(&input.digits)[..] {
                    self.jump_to_verse(index);
                    return Ok(Mode::Normal);
                }
            }
        }
        Ok(Mode::Jumping(input))
    }

    fn jump_to_chapter(&mut self, chapter: u32) -> Result<bool> {
        if chapter == 0 || chapter > self.session.chapter_count() {
            return Ok(false);
        }
        self.session.select_chapter(chapter)?;
        self.focus = Focus::Verses;
        Ok(true)
    }

    fn jump_to_verse(&mut self, index: usize) -> bool {
        if index >= self.session.verses().len() {
            return false;
        }
        self.session.select_verse(index);
        self.focus = Focus::Verses;
        true
    }

    fn move_in_focus(&mut self, offset: isize) -> Result<()> {
        match self.focus {
            Focus::Books => {
                self.books.move_selection(offset);
                self.select_highlighted_book()
            }
            Focus::Chapters => {
                let count = self.session.chapter_count();
                if count == 0 {
                    return Ok(());
                }
                let current = self.session.navigation().chapter().unwrap_or(0) as isize;
                let target = (current + offset).clamp(1, count as isize) as u32;
                if Some(target) != self.session.navigation().chapter() {
                    self.session.select_chapter(target)?;
                }
                Ok(())
            }
            Focus::Verses => match offset {
                1 => self.next_verse(),
                -1 => self.prev_verse(),
                _ => {
                    let len = self.session.verses().len();
                    if len == 0 {
                        return Ok(());
                    }
                    let current = self.session.navigation().verse_index().unwrap_or(0) as isize;
                    let target = (current + offset).clamp(0, len as isize - 1) as usize;
                    self.session.select_verse(target);
                    Ok(())
                }
            },
        }
    }

    fn jump_in_focus(&mut self, to_end: bool) -> Result<()> {
        match self.focus {
            Focus::Books => {
                if to_end {
                    self.books.select_last();
                } else {
                    self.books.select_first();
                }
                self.select_highlighted_book()
            }
            Focus::Chapters => {
                let count = self.session.chapter_count();
                if count > 0 {
                    self.session.select_chapter(if to_end { count } else { 1 })?;
                }
                Ok(())
            }
            Focus::Verses => {
                let len = self.session.verses().len();
                if len > 0 {
                    self.session.select_verse(if to_end { len - 1 } else { 0 });
                }
                Ok(())
            }
        }
    }

    fn activate_focus(&mut self) -> Result<()> {
        match self.focus {
            Focus::Books => {
                self.select_highlighted_book()?;
                if self.session.navigation().book().is_some() {
                    self.focus = Focus::Chapters;
                }
            }
            Focus::Chapters => {
                if self.session.navigation().chapter().is_none() && self.session.chapter_count() > 0
                {
                    self.session.select_chapter(1)?;
                }
                if self.session.navigation().chapter().is_some() {
                    self.focus = Focus::Verses;
                }
            }
            Focus::Verses => {
                if self.session.navigation().verse_index().is_none() {
                    if !self.session.verses().is_empty() {
                        self.session.select_verse(0);
                    }
                } else {
                    self.session.present_current();
                }
            }
        }
        Ok(())
    }

    fn next_verse(&mut self) -> Result<()> {
        if self.session.next_verse()? == Step::Stay {
            self.set_status("Already at the last verse.", StatusKind::Info);
        }
        Ok(())
    }

    fn prev_verse(&mut self) -> Result<()> {
        if self.session.prev_verse()? == Step::Stay {
            self.set_status("Already at the first verse.", StatusKind::Info);
        }
        Ok(())
    }

    fn select_highlighted_book(&mut self) -> Result<()> {
        if let Some(book_id) = self.books.current_book_id() {
            if self.session.navigation().book() != Some(book_id) {
                self.session.select_book(book_id)?;
            }
        }
        Ok(())
    }

    fn set_book_filter(&mut self, filter: Option<String>) {
        self.books.set_filter(filter);
        self.refresh_book_rows();
    }

    fn refresh_book_rows(&mut self) {
        let filter = self.books.filter.clone().unwrap_or_default();
        self.books.set_rows(self.session.filter_books(&filter));
        if let Some(book_id) = self.session.navigation().book() {
            self.books.focus_book(book_id);
        }
    }

    fn refresh_installed(&mut self) {
        match self.session.installed() {
            Ok(installed) => self.installed = installed.into_iter().collect(),
            Err(err) => self.report(&err),
        }
    }

    fn switch_translation(&mut self, identifier: &str) {
        match self.session.switch_translation(identifier) {
            Ok(()) => {
                let message = format!(
                    "Switched to {}.",
                    self.session.catalog().resolve_display_name(identifier)
                );
                self.set_status(message, StatusKind::Info);
            }
            Err(err) => {
                let err = Error::from(err);
                self.set_status(format!("{err:#}"), StatusKind::Error);
            }
        }
        self.refresh_book_rows();
    }

    fn open_catalog(&mut self) {
        self.refresh_installed();
        let catalog = CatalogScreen::load(self.session.catalog(), self.session.store().books_dir());
        self.screen = Screen::Catalog(catalog);
    }

    fn open_source(&mut self, url: &str, name: &str) {
        match open_link(url) {
            Ok(()) => {
                info!(url, "opened translation download page");
                self.set_status(
                    format!("Opened the download page for {name}."),
                    StatusKind::Info,
                );
            }
            Err(err) => {
                warn!(url, error = %err, "failed to open download page");
                self.set_status(format!("Failed to open link: {err}"), StatusKind::Error);
            }
        }
    }

    fn report(&mut self, err: &Error) {
        warn!(error = ?err, "operator action failed");
        self.set_status(surface_error(err), StatusKind::Error);
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Operator => self.draw_operator(frame, content_area),
            Screen::Catalog(catalog) => self.draw_catalog(frame, content_area, catalog),
            Screen::Projector => self.draw_projector(frame, content_area, true),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        match &self.mode {
            Mode::Filtering(input) => self.draw_prompt(
                frame,
                area,
                "Filter Books",
                input.build_line(),
                None,
                input.cursor_offset(),
            ),
            Mode::Jumping(input) => self.draw_prompt(
                frame,
                area,
                "Jump",
                input.build_line(),
                input.error.as_deref(),
                input.cursor_offset(),
            ),
            Mode::Normal => {}
        }
    }

    fn draw_operator(&self, frame: &mut Frame, area: Rect) {
        let hidden = self.session.projector().is_hidden();
        let constraints = if hidden {
            vec![
                Constraint::Length(TRANSLATION_BAR_HEIGHT),
                Constraint::Min(3),
            ]
        } else {
            vec![
                Constraint::Length(TRANSLATION_BAR_HEIGHT),
                Constraint::Min(3),
                Constraint::Percentage(PROJECTOR_PERCENT),
            ]
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.draw_translation_bar(frame, chunks[0]);
        self.draw_lists(frame, chunks[1]);
        if !hidden {
            self.draw_projector(frame, chunks[2], false);
        }
    }

    fn draw_translation_bar(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Translations");
        if self.installed.is_empty() {
            let message = Paragraph::new(format!(
                "No translations in {}. Press [c] for the catalog.",
                self.session.store().books_dir().display()
            ))
            .block(block);
            frame.render_widget(message, area);
            return;
        }

        let active = self.session.active_identifier();
        let mut spans = Vec::new();
        for (index, identifier) in self.installed.iter().enumerate() {
            let name = self.session.catalog().resolve_display_name(identifier);
            let style = if Some(identifier.as_str()) == active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if index < 9 {
                spans.push(Span::styled(
                    format!("[{}]", index + 1),
                    Style::default().fg(Color::Cyan),
                ));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(name.to_string(), style));
            spans.push(Span::raw("   "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn draw_lists(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Length(9),
                Constraint::Min(20),
            ])
            .split(area);

        let book_title = match &self.books.filter {
            Some(filter) => format!("Books /{filter}"),
            None => "Books".to_string(),
        };
        let book_items: Vec<ListItem> = self
            .books
            .rows
            .iter()
            .map(|(_, label)| ListItem::new(label.clone()))
            .collect();
        let book_selected = (!self.books.rows.is_empty()).then_some(self.books.selected);
        self.draw_list(frame, chunks[0], &book_title, book_items, book_selected, Focus::Books);

        let chapter_items: Vec<ListItem> = (1..=self.session.chapter_count())
            .map(|chapter| ListItem::new(chapter.to_string()))
            .collect();
        self.draw_list(
            frame,
            chunks[1],
            "Chapter",
            chapter_items,
            self.session.navigation().chapter_index(),
            Focus::Chapters,
        );

        let verse_title = self
            .session
            .caption()
            .unwrap_or_else(|| "Verses".to_string());
        let verse_items: Vec<ListItem> = self
            .session
            .verses()
            .iter()
            .map(|verse| ListItem::new(verse.display_line()))
            .collect();
        self.draw_list(
            frame,
            chunks[2],
            &verse_title,
            verse_items,
            self.session.navigation().verse_index(),
            Focus::Verses,
        );
    }

    fn draw_list(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        items: Vec<ListItem>,
        selected: Option<usize>,
        pane: Focus,
    ) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(title.to_string());
        if self.focus == pane && matches!(self.screen, Screen::Operator) {
            block = block.border_style(Style::default().fg(Color::Yellow));
        }

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(selected);
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn draw_projector(&self, frame: &mut Frame, area: Rect, full: bool) {
        let projector = self.session.projector();
        let screen_style = Style::default().bg(Color::Black).fg(Color::White);

        let mut title = String::from("Projector");
        if projector.is_blank() {
            title.push_str(" • black");
        }
        let block = if full {
            Block::default().style(screen_style)
        } else {
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .style(screen_style)
        };
        frame.render_widget(Clear, area);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);
        if inner.height == 0 || projector.is_blank() {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let text_style = if full {
            screen_style.add_modifier(Modifier::BOLD)
        } else {
            screen_style
        };
        let main_text = projector.main_text();
        let text_area = vertically_centered(chunks[0], wrapped_height(main_text, chunks[0].width));
        let main = Paragraph::new(main_text.to_string())
            .style(text_style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(main, text_area);

        if let Some(footer) = projector.footer() {
            let footer = Paragraph::new(footer.to_string())
                .style(Style::default().bg(Color::Black).fg(Color::Gray))
                .alignment(Alignment::Center);
            frame.render_widget(footer, chunks[1]);
        }
    }

    fn draw_catalog(&self, frame: &mut Frame, area: Rect, catalog: &CatalogScreen) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                "Catalog • {}",
                self.session.store().books_dir().display()
            ));

        if catalog.rows.is_empty() {
            let message = Paragraph::new("The catalog is empty.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let items: Vec<ListItem> = catalog
            .display_lines()
            .into_iter()
            .zip(&catalog.rows)
            .map(|(line, row)| {
                let style = if row.installed {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ListItem::new(Line::from(Span::styled(line, style)))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");

        let mut list_state = ListState::default();
        list_state.select(Some(catalog.selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_prompt(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        line: Line<'static>,
        error: Option<&str>,
        cursor_offset: usize,
    ) {
        let popup_area = centered_rect(50, 20, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title(title.to_string()).borders(Borders::ALL);
        let mut lines = vec![line];
        if let Some(error) = error {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(Color::Red),
            )));
        }
        let paragraph = Paragraph::new(lines)
            .block(block.clone())
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);

        let inner = block.inner(popup_area);
        if inner.width > 0 && inner.height > 0 {
            let cursor_x = inner.x + (cursor_offset as u16).min(inner.width - 1);
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::Filtering(_)) => Line::from(vec![
                Span::styled("[type]", key_style),
                Span::raw(" Filter   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Choose   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Clear"),
            ]),
            (_, Mode::Jumping(_)) => Line::from(vec![
                Span::styled("[0-9]", key_style),
                Span::raw(" Number   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Jump   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Cancel"),
            ]),
            (Screen::Catalog(_), _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Use / Download Page   "),
                Span::styled("[o]", key_style),
                Span::raw(" Open Link   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            (Screen::Projector, _) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Prev/Next Verse   "),
                Span::styled("[Ctrl+B]", key_style),
                Span::raw(" Black   "),
                Span::styled("[Ctrl+L]", key_style),
                Span::raw(" Clear   "),
                Span::styled("[f]", key_style),
                Span::raw(" Back   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            _ => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Pane   "),
                Span::styled("[↑↓]", key_style),
                Span::raw(" Move   "),
                Span::styled("[/]", key_style),
                Span::raw(" Book   "),
                Span::styled("[:]", key_style),
                Span::raw(" Chapter   "),
                Span::styled("[.]", key_style),
                Span::raw(" Verse   "),
                Span::styled("[n]", key_style),
                Span::raw(" Next   "),
                Span::styled("[1-9]", key_style),
                Span::raw(" Translation   "),
                Span::styled("[c]", key_style),
                Span::raw(" Catalog   "),
                Span::styled("[h]", key_style),
                Span::raw(" Hide   "),
                Span::styled("[f]", key_style),
                Span::raw(" Full Screen   "),
                Span::styled("[Ctrl+B]", key_style),
                Span::raw(" Black   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }
}
