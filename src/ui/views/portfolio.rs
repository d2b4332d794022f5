//! The portfolio page: theme toggle, profile header, tab switcher, the
//! active content panel and the contact footer.

use std::cell::{Cell, RefCell};

use color_eyre::eyre::Result;
use ratatui::{
    crossterm::event::{
        Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    layout::{Constraint, Flex, Layout, Margin, Position, Rect},
    style::Style,
    text::Line,
    widgets::{Block, ScrollbarState, Widget},
};

use crate::{
    content::{CONTENT, ContentStore},
    store::{
        action::Action,
        state::{State, Tab},
    },
    ui::components::{
        footer::{ContactFooter, InfoFooter, legend_lines},
        header::ProfileHeader,
        project_list::ProjectList,
        scrollview::{SCROLLBAR_WIDTH, ScrollView},
        skill_list::SkillList,
        tabs::{TABS_HEIGHT, TabSwitcher},
        text::row_count,
        theme_toggle::{TOGGLE_HEIGHT, TOGGLE_WIDTH, ThemeToggle},
    },
};

use super::traits::{
    CustomEventContext, CustomStatefulWidget, CustomWidget, CustomWidgetContext,
    CustomWidgetRef, EventHandler, View,
};

/// Widest the page content grows before being centered.
pub const MAX_PAGE_WIDTH: u16 = 100;

const PAGE_MARGIN: Margin = Margin {
    horizontal: 1,
    vertical: 0,
};

pub const KEY_BINDINGS: [(&str, &str); 5] = [
    ("t", "theme"),
    ("p", "projects"),
    ("s", "skills"),
    ("j/k", "scroll"),
    ("q", "quit"),
];

/// Where the clickable parts were drawn during the last render.
#[derive(Debug, Default, Clone)]
struct HitAreas {
    theme_toggle: Rect,
    tabs: Vec<(Tab, Rect)>,
}

/// Rows of the sections whose content wraps with the page width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SectionHeights {
    header: u16,
    contact: u16,
    legend: u16,
}

#[derive(Debug, Clone, Copy)]
struct PageAreas {
    toggle: Rect,
    header: Rect,
    tabs: Rect,
    panel: Rect,
    contact: Rect,
    legend: Rect,
}

/// Top level view. Reads theme and tab from state; the only view-local
/// state is scroll position and click targets.
pub struct PortfolioView {
    content: &'static ContentStore,
    hit_areas: RefCell<HitAreas>,
    scroll_offset: Cell<usize>,
    max_scroll: Cell<usize>,
    scrolled_tab: Cell<Tab>,
}

impl Default for PortfolioView {
    fn default() -> Self {
        Self::new(&CONTENT)
    }
}

impl PortfolioView {
    pub fn new(content: &'static ContentStore) -> Self {
        Self {
            content,
            hit_areas: RefCell::new(HitAreas::default()),
            scroll_offset: Cell::new(0),
            max_scroll: Cell::new(0),
            scrolled_tab: Cell::new(Tab::default()),
        }
    }

    /// Lines of the panel selected by the active tab.
    pub fn panel_lines(&self, state: &State, width: usize) -> Vec<Line<'static>> {
        match state.tab {
            Tab::Projects => {
                ProjectList::new(self.content.projects).lines(width, &state.colors)
            }
            Tab::Skills => {
                SkillList::new(self.content.skills).lines(width, &state.colors)
            }
        }
    }

    /// Height at which the whole page fits without scrolling.
    pub fn natural_height(&self, state: &State, width: u16) -> u16 {
        let page = Self::page_rect(Rect::new(0, 0, width, 0));
        let panel_width = page.width.saturating_sub(SCROLLBAR_WIDTH) as usize;
        let panel_height = row_count(&self.panel_lines(state, panel_width));
        self.chrome_height(page.width).saturating_add(panel_height)
    }

    fn section_heights(&self, page_width: u16) -> SectionHeights {
        SectionHeights {
            header: ProfileHeader::new(&self.content.profile).height(page_width),
            contact: ContactFooter::new(&self.content.contact).height(page_width),
            legend: row_count(&legend_lines(&KEY_BINDINGS, page_width)),
        }
    }

    /// Rows of every section except the content panel, for a page
    /// `page_width` columns wide.
    fn chrome_height(&self, page_width: u16) -> u16 {
        let heights = self.section_heights(page_width);
        TOGGLE_HEIGHT
            .saturating_add(TABS_HEIGHT)
            .saturating_add(heights.header)
            .saturating_add(heights.contact)
            .saturating_add(heights.legend)
    }

    /// Current scroll position of the panel.
    #[cfg(test)]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset.get()
    }

    fn page_rect(area: Rect) -> Rect {
        let [page] = Layout::horizontal([Constraint::Max(MAX_PAGE_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        page.inner(PAGE_MARGIN)
    }

    fn page_areas(&self, area: Rect) -> PageAreas {
        let page = Self::page_rect(area);
        let heights = self.section_heights(page.width);

        let [toggle_row, header, tabs, panel, contact, legend] = Layout::vertical([
            Constraint::Length(TOGGLE_HEIGHT),
            Constraint::Length(heights.header),
            Constraint::Length(TABS_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(heights.contact),
            Constraint::Length(heights.legend),
        ])
        .areas(page);

        let [_, toggle] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(TOGGLE_WIDTH)])
                .areas(toggle_row);

        PageAreas {
            toggle,
            header,
            tabs,
            panel,
            contact,
            legend,
        }
    }

    // scroll position belongs to the panel it was made in
    fn sync_scroll_with_tab(&self, tab: Tab) {
        if self.scrolled_tab.get() != tab {
            self.scrolled_tab.set(tab);
            self.scroll_offset.set(0);
        }
    }

    fn scroll_down(&self) {
        let next = (self.scroll_offset.get() + 1).min(self.max_scroll.get());
        self.scroll_offset.set(next);
    }

    fn scroll_up(&self) {
        self.scroll_offset.set(self.scroll_offset.get().saturating_sub(1));
    }

    fn render_panel(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) {
        self.sync_scroll_with_tab(ctx.state.tab);

        let width = area.width.saturating_sub(SCROLLBAR_WIDTH) as usize;
        let lines = self.panel_lines(ctx.state, width);
        let viewport = area.height as usize;
        let max_scroll = lines.len().saturating_sub(viewport);

        self.max_scroll.set(max_scroll);
        if self.scroll_offset.get() > max_scroll {
            self.scroll_offset.set(max_scroll);
        }

        let mut scroll_state = ScrollbarState::new(max_scroll)
            .viewport_content_length(viewport)
            .position(self.scroll_offset.get());

        ScrollView::new(lines, self.scroll_offset.get()).render(
            area,
            buf,
            &mut scroll_state,
            ctx,
        );
    }

    fn process_click(&self, column: u16, row: u16, ctx: &CustomEventContext) -> bool {
        let position = Position::new(column, row);
        let hit_areas = self.hit_areas.borrow();

        if hit_areas.theme_toggle.contains(position) {
            ctx.dispatcher.dispatch(Action::ToggleTheme);
            return true;
        }

        if let Some((tab, _)) = hit_areas
            .tabs
            .iter()
            .find(|(_, rect)| rect.contains(position))
        {
            ctx.dispatcher.dispatch(Action::SelectTab(*tab));
            return true;
        }

        false
    }

    fn process_mouse(&self, mouse: &MouseEvent, ctx: &CustomEventContext) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.process_click(mouse.column, mouse.row, ctx)
            }
            MouseEventKind::ScrollDown => {
                self.sync_scroll_with_tab(ctx.state.tab);
                self.scroll_down();
                true
            }
            MouseEventKind::ScrollUp => {
                self.sync_scroll_with_tab(ctx.state.tab);
                self.scroll_up();
                true
            }
            _ => false,
        }
    }

    fn process_key(&self, code: KeyCode, ctx: &CustomEventContext) -> bool {
        match code {
            KeyCode::Char('t') => {
                ctx.dispatcher.dispatch(Action::ToggleTheme);
                true
            }
            KeyCode::Char('p') | KeyCode::Char('1') => {
                ctx.dispatcher.dispatch(Action::SelectTab(Tab::Projects));
                true
            }
            KeyCode::Char('s') | KeyCode::Char('2') => {
                ctx.dispatcher.dispatch(Action::SelectTab(Tab::Skills));
                true
            }
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                ctx.dispatcher
                    .dispatch(Action::SelectTab(ctx.state.tab.other()));
                true
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.sync_scroll_with_tab(ctx.state.tab);
                self.scroll_down();
                true
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.sync_scroll_with_tab(ctx.state.tab);
                self.scroll_up();
                true
            }
            _ => false,
        }
    }
}

impl View for PortfolioView {}

impl CustomWidgetRef for PortfolioView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let colors = &ctx.state.colors;

        // page background for the active palette
        Block::new()
            .style(Style::new().bg(colors.page_bg).fg(colors.text))
            .render(area, buf);

        let areas = self.page_areas(area);

        ThemeToggle::new(ctx.state.is_dark).render(areas.toggle, buf, ctx);
        ProfileHeader::new(&self.content.profile).render(areas.header, buf, ctx);
        TabSwitcher::new(ctx.state.tab).render(areas.tabs, buf, ctx);
        self.render_panel(areas.panel, buf, ctx);
        ContactFooter::new(&self.content.contact).render(areas.contact, buf, ctx);
        InfoFooter::new(legend_lines(&KEY_BINDINGS, areas.legend.width))
            .render(areas.legend, buf, ctx);

        *self.hit_areas.borrow_mut() = HitAreas {
            theme_toggle: areas.toggle,
            tabs: TabSwitcher::button_areas(areas.tabs),
        };

        Ok(())
    }
}

impl EventHandler for PortfolioView {
    fn process_event(
        &self,
        evt: &Event,
        ctx: &CustomEventContext,
    ) -> Result<bool> {
        let handled = match evt {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.process_key(key.code, ctx)
            }
            Event::Mouse(mouse) => self.process_mouse(mouse, ctx),
            _ => false,
        };

        Ok(handled)
    }
}

#[cfg(test)]
#[path = "./portfolio_tests.rs"]
mod tests;
