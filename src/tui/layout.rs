//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: sidebar, main panel, status bar,
//! plus the overlay areas of the drawers and dialogs.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (brand header, page list)
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(24), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    pub header: Rect,
    pub pages: Rect,
    /// "New Card" shortcut
    pub footer: Rect,
}

impl SidebarLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(9),    // Pages
                Constraint::Length(3), // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            pages: chunks[1],
            footer: chunks[2],
        }
    }
}

/// Layout for a list page: header, search bar, table
pub struct ListPageLayout {
    pub header: Rect,
    pub search: Rect,
    pub content: Rect,
}

impl ListPageLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header (title, hints or filter tabs)
                Constraint::Length(3), // Search
                Constraint::Min(3),    // Content
            ])
            .split(area);

        Self {
            header: chunks[0],
            search: chunks[1],
            content: chunks[2],
        }
    }
}

/// Layout for the dashboard page
pub struct DashboardLayout {
    pub greeting: Rect,
    /// Credit overview and account balances
    pub overview: Rect,
    pub chart: Rect,
    /// Money movement and side widgets
    pub movement: Rect,
    pub recent: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Greeting
                Constraint::Length(8), // Overview
                Constraint::Length(6), // Balance chart
                Constraint::Length(9), // Money movement
                Constraint::Min(4),    // Recent transactions
            ])
            .split(area);

        Self {
            greeting: chunks[0],
            overview: chunks[1],
            chart: chunks[2],
            movement: chunks[3],
            recent: chunks[4],
        }
    }
}

/// Share of the screen width a fully open drawer covers
const DRAWER_WIDTH_PERCENT: u16 = 50;

/// Area of a drawer sliding in from the right edge of `area`.
///
/// `reveal` is the share of the full width currently drawn (0.0 to 1.0).
pub fn drawer_rect(area: Rect, reveal: f64) -> Rect {
    let full = (area.width as u32 * DRAWER_WIDTH_PERCENT as u32 / 100).max(30) as u16;
    let full = full.min(area.width);
    let width = (full as f64 * reveal.clamp(0.0, 1.0)).round() as u16;
    Rect::new(area.x + area.width - width, area.y, width, area.height)
}

/// Whether a click at (`column`, `row`) lands outside the open drawer
pub fn is_overlay_click(area: Rect, column: u16, row: u16) -> bool {
    !drawer_rect(area, 1.0).contains(Position::new(column, row))
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawer_hugs_right_edge() {
        let area = Rect::new(0, 0, 100, 40);
        let open = drawer_rect(area, 1.0);
        assert_eq!(open, Rect::new(50, 0, 50, 40));

        let half = drawer_rect(area, 0.5);
        assert_eq!(half.x + half.width, 100);
        assert_eq!(half.width, 25);

        assert_eq!(drawer_rect(area, 0.0).width, 0);
    }

    #[test]
    fn test_drawer_minimum_width() {
        let area = Rect::new(0, 0, 40, 20);
        assert_eq!(drawer_rect(area, 1.0).width, 30);
        let tiny = Rect::new(0, 0, 20, 10);
        assert_eq!(drawer_rect(tiny, 1.0).width, 20);
    }

    #[test]
    fn test_overlay_click() {
        let area = Rect::new(0, 0, 100, 40);
        assert!(is_overlay_click(area, 10, 5));
        assert!(!is_overlay_click(area, 75, 5));
    }

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect_fixed(40, 10, area), Rect::new(30, 15, 40, 10));
    }
}
