//! Stateless rendering: board grid, status, and the move-history browser.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use tictactoe_rewind::{Board, GameState, Player, Position, Square, Verdict};

use super::app::{App, Focus};

/// Draws the full frame.
pub fn draw(f: &mut Frame, app: &App) {
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(f.area());

    draw_board_pane(f, panes[0], app);
    draw_info_pane(f, panes[1], app);
}

fn draw_board_pane(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Board ")
        .border_style(focus_style(app.focus() == Focus::Board));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let game = app.game();
    let win_line = game.verdict().line();
    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());

    let board_area = center_rect(inner, 23, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], game.board(), 0, win_line, cursor);
    render_separator(f, rows[1]);
    render_row(f, rows[2], game.board(), 3, win_line, cursor);
    render_separator(f, rows[3]);
    render_row(f, rows[4], game.board(), 6, win_line, cursor);
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    start: usize,
    win_line: Option<[Position; 3]>,
    cursor: Option<Position>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for (slot, offset) in [(0, 0), (2, 1), (4, 2)] {
        let pos = Position::from_index(start + offset).expect("grid index in range");
        render_square(f, cols[slot], board, pos, win_line, cursor);
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    pos: Position,
    win_line: Option<[Position; 3]>,
    cursor: Option<Position>,
) {
    let (text, mut style) = match board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if win_line.is_some_and(|line| line.contains(&pos)) {
        style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    if cursor == Some(pos) {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center the mark inside the 3-line cell.
    let lines = vec![Line::raw(""), Line::styled(text, style), Line::raw("")];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::raw("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn draw_info_pane(f: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    draw_status(f, sections[0], app);
    draw_move_list(f, sections[1], app, game);
    draw_keys_hint(f, sections[2]);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let status = match game.verdict() {
        Verdict::Win { player, .. } => format!("Winner: {player}"),
        Verdict::Draw => "Draw".to_string(),
        Verdict::Ongoing => format!("Next player: {}", game.to_move()),
    };

    let mut lines = vec![
        Line::styled(status, Style::default().add_modifier(Modifier::BOLD)),
        Line::raw("Move locations are zero-indexed (row, column)"),
    ];
    if let Some(message) = app.message() {
        lines.push(Line::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Status "))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn draw_move_list(f: &mut Frame, area: Rect, app: &App, game: &GameState) {
    let items: Vec<ListItem> = game
        .ordered_moves()
        .into_iter()
        .map(|(step, snapshot)| {
            let at_step = step == game.step();
            let desc = if step == 0 {
                if at_step {
                    "Currently at game start".to_string()
                } else {
                    "Go to game start".to_string()
                }
            } else if at_step {
                format!("Currently at move #{step}")
            } else {
                format!("Go to move #{step}")
            };

            let mut style = Style::default();
            if at_step {
                style = style.add_modifier(Modifier::BOLD);
            }
            if app.focus() == Focus::History && step == app.selected() {
                style = style.bg(Color::DarkGray);
            }

            let mut lines = vec![Line::styled(desc, style)];
            if let Some(mov) = snapshot.placed() {
                lines.push(Line::styled(
                    format!(
                        "  Placed {} at ({}, {})",
                        mov.player,
                        mov.position.row(),
                        mov.position.col()
                    ),
                    style,
                ));
            }
            ListItem::new(lines)
        })
        .collect();

    // The title names the order you get by pressing [s], not the current one.
    let title = format!(" Moves - [s] sort {} ", game.sort_order().toggled());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(focus_style(app.focus() == Focus::History)),
    );
    f.render_widget(list, area);
}

fn draw_keys_hint(f: &mut Frame, area: Rect) {
    let hint = Paragraph::new("1-9 or arrows+Enter: place · Tab: switch pane · Up/Down+Enter: jump · s: sort · q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(hint, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
