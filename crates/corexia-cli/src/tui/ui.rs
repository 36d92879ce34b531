use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table, Tabs},
    Frame,
};

use super::app::{DashboardApp, Tab, TableData};
use super::messages::{messages, Messages};
use corexia_runtime::Origin;

pub(crate) fn draw(f: &mut Frame, app: &DashboardApp) {
    let msgs = messages(app.store.locale());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_header(f, chunks[0], app, msgs);
    render_tabs(f, chunks[1], app, msgs);

    let body = chunks[2];
    if app.store.sidebar_collapsed() {
        render_body(f, body, app, msgs);
    } else {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Min(0)])
            .split(body);
        render_sidebar(f, split[0], app, msgs);
        render_body(f, split[1], app, msgs);
    }

    render_footer(f, chunks[3], app, msgs);
}

fn render_header(f: &mut Frame, area: Rect, app: &DashboardApp, msgs: &Messages) {
    let session = match app.store.user() {
        Some(user) => format!("{} {}", msgs.signed_in_as, user.name),
        None => msgs.not_signed_in.to_string(),
    };
    let line = Line::from(vec![
        Span::styled(
            msgs.title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  ·  "),
        Span::raw(session),
        Span::raw("  ·  "),
        Span::raw(app.store.locale().as_str()),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_tabs(f: &mut Frame, area: Rect, app: &DashboardApp, msgs: &Messages) {
    let titles: Vec<Line> = msgs.tabs.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &DashboardApp, msgs: &Messages) {
    let items: Vec<ListItem> = msgs
        .tabs
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let style = if i == app.tab.index() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(*name, style))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::RIGHT));
    f.render_widget(list, area);
}

fn render_body(f: &mut Frame, area: Rect, app: &DashboardApp, msgs: &Messages) {
    match app.tab {
        Tab::Overview => render_overview(f, area, app, msgs),
        Tab::Settings => render_settings(f, area, app, msgs),
        _ => match app.current_table(msgs) {
            Some(table) => render_table(f, area, &table, msgs),
            None => {
                let text = if app.is_loading() {
                    msgs.loading
                } else {
                    msgs.no_rows
                };
                f.render_widget(Paragraph::new(text), area);
            }
        },
    }
}

fn render_overview(f: &mut Frame, area: Rect, app: &DashboardApp, msgs: &Messages) {
    let counts = app.overview_counts();
    let mut lines = vec![
        Line::styled(
            msgs.overview_heading,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];
    // Tabs 1..=4 are the four resource lists
    for (i, count) in counts.iter().enumerate() {
        lines.push(Line::raw(format!("  {:<12} {}", msgs.tabs[i + 1], count)));
    }

    let series = app.inference_series();
    let total: u64 = series.iter().sum();
    lines.push(Line::raw(""));
    lines.push(Line::raw(format!(
        "  {:<12} {}  {}",
        msgs.inference_label,
        sparkline(&series),
        total
    )));

    if app.is_loading() {
        lines.push(Line::raw(""));
        lines.push(Line::raw(msgs.loading));
    }
    f.render_widget(Paragraph::new(lines), area);
}

const SPARK_BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One block character per value, scaled against the series maximum.
fn sparkline(values: &[u64]) -> String {
    let max = values.iter().copied().max().unwrap_or(0).max(1);
    values
        .iter()
        .map(|v| SPARK_BARS[((v * (SPARK_BARS.len() as u64 - 1)) / max) as usize])
        .collect()
}

fn render_settings(f: &mut Frame, area: Rect, app: &DashboardApp, msgs: &Messages) {
    let lines = vec![
        Line::styled(
            msgs.settings_heading,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw(format!("  api.base_url     = {}", app.config.api.base_url)),
        Line::raw(format!(
            "  api.timeout_secs = {}",
            app.config.api.timeout_secs
        )),
        Line::raw(format!("  ui.page_size     = {}", app.config.ui.page_size)),
        Line::raw(format!(
            "  locale           = {}",
            app.store.locale().as_str()
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_table(f: &mut Frame, area: Rect, table: &TableData, msgs: &Messages) {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.len()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    let constraints: Vec<Constraint> = widths
        .iter()
        .map(|w| Constraint::Length(*w as u16))
        .collect();

    let header = Row::new(table.headers.iter().map(|h| h.to_uppercase()))
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = table.rows.iter().map(|r| Row::new(r.clone()));

    let mut footer = table.footer.clone();
    if table.origin == Origin::Fixture {
        footer.push_str(&format!(" · {}", msgs.sample_data));
    }
    let mut title = footer;
    if let Some(notice) = &table.notice {
        title.push_str(&format!(" · {}", notice));
    }

    let widget = Table::new(rows, constraints).header(header).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .title_bottom(Line::styled(title, Style::default().fg(Color::DarkGray))),
    );
    f.render_widget(widget, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &DashboardApp, msgs: &Messages) {
    let line = match &app.search_input {
        Some(buffer) => Line::from(vec![
            Span::styled(
                format!("{}: ", msgs.search_prompt),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(buffer.clone()),
            Span::styled("▏", Style::default().fg(Color::Yellow)),
        ]),
        None => Line::styled(msgs.hints, Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::sparkline;

    #[test]
    fn test_sparkline_scales_to_the_series_maximum() {
        assert_eq!(sparkline(&[0, 50, 100]), "▁▄█");
        assert_eq!(sparkline(&[0, 0, 0]), "▁▁▁");
    }
}
