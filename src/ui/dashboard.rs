// ============================================================================
// Dashboard - Rendu de la maquette de dashboard
// ============================================================================
// Vue d'ensemble du portefeuille fictif, actions rapides, cartes de marché
// et deux mini-graphes (prix / volume) alimentés en aléatoire
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Sparkline},
    Frame,
};

use crate::app::App;

/// Les quatre actions rapides de la maquette (purement décoratives)
const QUICK_ACTIONS: [&str; 4] = ["Deposit", "Withdraw", "Rewards", "Learn"];

/// Dessine le dashboard complet
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Portefeuille + actions rapides
            Constraint::Length(5), // Cartes de marché
            Constraint::Min(6),    // Graphes prix / volume
            Constraint::Length(3), // Footer
        ])
        .split(frame.size())
        .to_vec();

    render_header(frame, chunks[0]);
    render_overview_row(frame, app, chunks[1]);
    render_market_cards(frame, app, chunks[2]);
    render_charts(frame, app, chunks[3]);
    render_footer(frame, app, chunks[4]);
}

// ============================================================================
// Header
// ============================================================================

fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" CryptoView — Dashboard ");

    // Horloge locale : seul usage "temps réel" de l'écran
    let clock = chrono::Local::now().format("%H:%M:%S").to_string();

    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(
            "Demo portfolio ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("· {}", clock), Style::default().fg(Color::Gray)),
    ]))
    .block(block)
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Portefeuille + actions rapides
// ============================================================================

fn render_overview_row(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area)
        .to_vec();

    render_portfolio(frame, app, columns[0]);
    render_quick_actions(frame, columns[1]);
}

/// Vue d'ensemble du portefeuille (valeur totale + P&L 24h)
fn render_portfolio(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Portfolio Overview ");

    let pl_color = if app.portfolio.is_positive() {
        Color::Green
    } else {
        Color::Red
    };

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Total Value  ", Style::default().fg(Color::Gray)),
            Span::styled(
                app.portfolio.value_label(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("24h P/L  ", Style::default().fg(Color::Gray)),
            Span::styled(
                app.portfolio.profit_loss_label(),
                Style::default().fg(pl_color).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_quick_actions(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Quick Actions ");

    let mut spans = Vec::new();
    for (i, action) in QUICK_ACTIONS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("[{}]", action),
            Style::default().fg(Color::Blue),
        ));
    }

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(spans)])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Cartes de marché
// ============================================================================

/// Dessine les trois cartes de marché (BTC, ETH, SOL)
fn render_market_cards(frame: &mut Frame, app: &App, area: Rect) {
    let constraints: Vec<Constraint> = app
        .quotes
        .iter()
        .map(|_| Constraint::Ratio(1, app.quotes.len() as u32))
        .collect();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec();

    for (quote, card_area) in app.quotes.iter().zip(columns) {
        let color = if quote.is_positive() {
            Color::Green
        } else {
            Color::Red
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", quote.symbol));

        let text = vec![
            Line::from(vec![
                Span::styled(
                    quote.price_label(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(quote.change_label(), Style::default().fg(color)),
            ]),
            Line::from(Span::styled(
                quote.volume_label(),
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, card_area);
    }
}

// ============================================================================
// Graphes prix / volume
// ============================================================================

fn render_charts(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
        .to_vec();

    render_sparkline(frame, " Price Chart ", Color::Blue, &app.price_series.sparkline_data(), columns[0]);
    render_sparkline(frame, " Volume Chart ", Color::Green, &app.volume_series.sparkline_data(), columns[1]);
}

fn render_sparkline(frame: &mut Frame, title: &str, color: Color, data: &[u64], area: Rect) {
    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title.to_string()),
        )
        .style(Style::default().fg(color))
        .data(data)
        .max(100);

    frame.render_widget(sparkline, area);
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
            Span::styled("[f]", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(" Features  "),
            Span::styled("[q]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(" Quit"),
        ])
    };

    let paragraph = Paragraph::new(vec![shortcuts])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
