use super::app::{App, InputMode, StatusLine};
use crate::checkout::{Checkout, CheckoutState};
use crate::money::{self, format_price};
use crate::session::View;
use ratatui::{prelude::*, widgets::*};
use shared::{CustomerField, PaymentMethod};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Feedback / status
            Constraint::Min(10),   // Main content
            Constraint::Length(8), // Logs
            Constraint::Length(1), // Key hints
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_status(f, app, chunks[1]);

    match app.store.view() {
        View::Checkout => match app.store.checkout() {
            Some(checkout) => render_checkout(f, app, checkout, chunks[2]),
            None => render_browse(f, app, chunks[2]),
        },
        View::Menu | View::Cart => render_browse(f, app, chunks[2]),
    }

    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Activity ")
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                )
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, chunks[3]);

    let help = Paragraph::new(key_hints(app)).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let count = app.store.cart_manager().count();
    let badge_style = if count > 0 {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", app.store_name),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::raw("Cart "),
        Span::styled(format!(" {} ", count), badge_style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let line = match (&app.status, app.store.feedback()) {
        (Some(StatusLine::Error(text)), _) => {
            Line::from(Span::styled(format!(" {}", text), Style::default().fg(Color::Red)))
        }
        (_, Some(feedback)) => Line::from(Span::styled(
            format!(" {}", feedback),
            Style::default().fg(Color::Green),
        )),
        (Some(info @ StatusLine::Info(_)), None) => Line::from(Span::styled(
            format!(" {}", info.text()),
            Style::default().fg(Color::Green),
        )),
        (None, None) => Line::default(),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Yellow } else { Color::Cyan };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

// ========== 菜单 + 购物车 ==========

fn render_browse(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let view = app.store.view();

    let menu_items: Vec<ListItem> = app
        .store
        .catalog()
        .entries()
        .iter()
        .map(|entry| {
            let in_cart = app
                .store
                .cart()
                .get(&entry.name)
                .map(|line| format!("  ×{}", line.quantity()))
                .unwrap_or_default();
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(entry.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(
                        format_price(&app.currency, money::to_decimal(entry.price)),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::styled(in_cart, Style::default().fg(Color::Green)),
                ]),
                Line::from(Span::styled(
                    format!("  {}", entry.description),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let menu = List::new(menu_items)
        .block(panel(" Menu ", view == View::Menu))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut menu_state = ListState::default().with_selected(Some(app.menu_index));
    f.render_stateful_widget(menu, columns[0], &mut menu_state);

    render_cart(f, app, columns[1], view == View::Cart);
}

fn render_cart(f: &mut Frame, app: &App, area: Rect, focused: bool) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let cart = app.store.cart();
    let title = format!(" Cart ({}) ", app.store.cart_manager().count());

    if cart.is_empty() {
        let empty = Paragraph::new("Your cart is empty")
            .style(Style::default().fg(Color::DarkGray))
            .block(panel(&title, focused));
        f.render_widget(empty, rows[0]);
    } else {
        let items: Vec<ListItem> = cart
            .iter()
            .map(|line| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} × {}", line.name, line.quantity())),
                    Span::raw("  "),
                    Span::styled(
                        format_price(&app.currency, money::line_total(line)),
                        Style::default().fg(Color::Yellow),
                    ),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(panel(&title, focused))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if focused {
            state.select(Some(app.cart_index));
        }
        f.render_stateful_widget(list, rows[0], &mut state);
    }

    let total = Paragraph::new(Line::from(vec![
        Span::raw("Total: "),
        Span::styled(
            format_price(&app.currency, app.store.cart_manager().total()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(total, rows[1]);
}

// ========== 结账 ==========

fn render_checkout(f: &mut Frame, app: &App, checkout: &Checkout, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    if let CheckoutState::Confirmed(confirmation) = checkout.state() {
        let banner = Paragraph::new(vec![
            Line::from(Span::styled(
                confirmation.message(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(format!("Reference: {}", confirmation.short_reference())),
            Line::from(format!(
                "Total: {}",
                format_price(&app.currency, confirmation.total)
            )),
            Line::default(),
            Line::from(Span::styled(
                "Press 'n' to start a new order",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(panel(" Order Confirmed ", true))
        .wrap(Wrap { trim: true });
        f.render_widget(banner, columns[0]);
    } else {
        render_form(f, app, checkout, columns[0]);
    }

    render_summary(f, app, checkout, columns[1]);
}

fn render_form(f: &mut Frame, app: &App, checkout: &Checkout, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);

    for (field, row) in CustomerField::ALL.into_iter().zip(rows.iter()) {
        let focused = app.input_mode == InputMode::Editing && app.focused_field == field;
        let invalid = checkout
            .state()
            .error()
            .and_then(|e| e.field())
            .is_some_and(|err_field| err_field == field);
        let border = match (focused, invalid) {
            (_, true) => Color::Red,
            (true, false) => Color::Yellow,
            (false, false) => Color::Gray,
        };

        let input = app.input(field);
        let width = row.width.max(3) - 3;
        let scroll = input.visual_scroll(width as usize);
        let widget = Paragraph::new(input.value())
            .scroll((0, scroll as u16))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", field.label()))
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(widget, *row);

        if focused {
            f.set_cursor_position((
                row.x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
                row.y + 1,
            ));
        }
    }

    let selected = checkout.payment_method();
    let payment: Vec<Line> = PaymentMethod::ALL
        .into_iter()
        .map(|method| {
            let marker = if method == selected { "(•)" } else { "( )" };
            if checkout.policy().is_enabled(method) {
                Line::from(format!("{} {}", marker, method.label()))
            } else {
                Line::from(Span::styled(
                    format!("{} {} (Coming soon)", marker, method.label()),
                    Style::default().fg(Color::DarkGray),
                ))
            }
        })
        .collect();
    let payment = Paragraph::new(payment).block(panel(" Payment Method ", false));
    f.render_widget(payment, rows[3]);
}

fn render_summary(f: &mut Frame, app: &App, checkout: &Checkout, area: Rect) {
    let mut lines: Vec<Line> = checkout
        .lines()
        .iter()
        .map(|line| {
            Line::from(vec![
                Span::raw(format!("{} × {}", line.name, line.quantity)),
                Span::raw("  "),
                Span::styled(
                    format_price(&app.currency, money::checkout_line_total(line)),
                    Style::default().fg(Color::Yellow),
                ),
            ])
        })
        .collect();
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::raw("Total: "),
        Span::styled(
            format_price(&app.currency, checkout.total()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let summary = Paragraph::new(lines)
        .block(panel(" Order Summary ", false))
        .wrap(Wrap { trim: true });
    f.render_widget(summary, area);
}

fn key_hints(app: &App) -> &'static str {
    match app.store.view() {
        View::Checkout => {
            let confirmed = app
                .store
                .checkout()
                .is_some_and(|c| c.state().is_confirmed());
            match (confirmed, app.input_mode) {
                (true, _) => " n new order | q quit",
                (false, InputMode::Editing) => " Tab next field | Enter place order | Esc done editing",
                (false, InputMode::Normal) => {
                    " Tab edit | p payment | Enter place order | Esc back to menu | q quit"
                }
            }
        }
        View::Menu | View::Cart => {
            " ↑/↓ select | a add | r remove | Tab switch panel | c checkout | PgUp/PgDn logs | q quit"
        }
    }
}
