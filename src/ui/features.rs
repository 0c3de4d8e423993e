// ============================================================================
// Features - Rendu de la page vitrine
// ============================================================================
// "Next-Gen Trading Platform" : les trois compteurs de stats, le graphique
// live alimenté par la série aléatoire, et la grille de six cartes
//
// CONCEPTS RATATUI :
// 1. Layout imbriqués : lignes puis colonnes
// 2. Chart widget : Dataset + Axis, comme la maquette recharts
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::FeatureCard;

/// Dessine la page features complète
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Stats
            Constraint::Min(8),    // Live chart
            Constraint::Length(8), // Grille de features
            Constraint::Length(3), // Footer
        ])
        .split(frame.size())
        .to_vec();

    render_header(frame, app, chunks[0]);
    render_stats(frame, app, chunks[1]);
    render_live_chart(frame, app, chunks[2]);
    render_feature_grid(frame, chunks[3]);
    render_footer(frame, app, chunks[4]);
}

// ============================================================================
// Header
// ============================================================================

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" CryptoView — Features ");

    let text = vec![Line::from(vec![
        Span::styled(
            "Next-Gen Trading Platform",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("🔔 {}", app.alerts.len()),
            Style::default().fg(Color::Red),
        ),
    ])];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Stats : les trois compteurs
// ============================================================================

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area)
        .to_vec();

    let cards = [
        ("24h Volume", app.stats.volume_label()),
        ("Total Trades", app.stats.trades_label()),
        ("Active Users", app.stats.users_label()),
    ];

    for (area, (label, value)) in columns.into_iter().zip(cards) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", label));

        let paragraph = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )))
        .block(block)
        .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
    }
}

// ============================================================================
// Live chart
// ============================================================================

/// Dessine le graphique live (série aléatoire glissante, comme la maquette)
fn render_live_chart(frame: &mut Frame, app: &App, area: Rect) {
    let points = app.live_series.chart_points();
    let x_bounds = app.live_series.x_bounds();

    let datasets = vec![Dataset::default()
        .name("live")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Blue))
        .data(&points)];

    let x_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds(x_bounds);

    let y_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, 100.0])
        .labels(vec![
            Span::raw("0"),
            Span::raw("50"),
            Span::raw("100"),
        ]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Live Chart "),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

// ============================================================================
// Grille de features
// ============================================================================

/// Dessine les six cartes en deux rangées de trois
fn render_feature_grid(frame: &mut Frame, area: Rect) {
    let cards = FeatureCard::catalog();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
        .to_vec();

    for (row_index, row_area) in rows.into_iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(row_area)
            .to_vec();

        for (col_index, col_area) in columns.into_iter().enumerate() {
            let Some(card) = cards.get(row_index * 3 + col_index) else {
                continue;
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" {} ", card.title));

            let paragraph = Paragraph::new(Line::from(Span::styled(
                card.description,
                Style::default().fg(Color::Gray),
            )))
            .block(block)
            .wrap(Wrap { trim: true });

            frame.render_widget(paragraph, col_area);
        }
    }
}

// ============================================================================
// Footer
// ============================================================================

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let shortcuts = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled(
                "⚠  Press ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                " again to quit, any other key to cancel ⚠",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("[d]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(" Dashboard  "),
            Span::styled("[q]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(" Quit"),
        ])
    };

    let paragraph = Paragraph::new(vec![shortcuts])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
