use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};

use crate::cli::state::{App, LoginMode, Screen, Tab};
use crate::cli::util::{fmt_money, iso, today};
use crate::dashboard::{projection, Tone};

pub fn draw(f: &mut Frame, app: &mut App) {
    if app.screen == Screen::Login {
        draw_login(f, app);
        return;
    }

    // top tabs | main content | status line
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(f.size());

    let titles = Tab::ALL
        .iter()
        .map(|t| Line::from(Span::raw(t.title())))
        .collect::<Vec<_>>();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .block(Block::default().borders(Borders::ALL).title("Finanças"))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(tabs, root[0]);

    match app.tab {
        Tab::Overview => draw_overview(f, root[1], app),
        Tab::Help => draw_help(f, root[1]),
        tab => draw_entities(f, root[1], app, tab),
    }

    let status = Paragraph::new(app.status.clone());
    f.render_widget(status, root[2]);

    if app.form.is_some() {
        draw_form_modal(f, root[1], app);
    }
}

// Login screen

fn draw_login(f: &mut Frame, app: &App) {
    let area = center_rect(f.size(), 56, 16);
    f.render_widget(Clear, area);

    let form = &app.login;
    let mode_label = match form.mode {
        LoginMode::SignIn => "Sign in",
        LoginMode::SignUp => "Create account",
    };
    let mode_marker = if form.focus == 0 { "  <change with ←/→>" } else { "" };

    let mut lines = vec![
        format!("Mode     : {mode_label}{mode_marker}"),
        String::new(),
    ];
    for (idx, label) in form.field_labels().iter().enumerate() {
        let Some(edit) = form.field(idx) else { continue };
        let marker = if form.focus == idx + 1 { "  <editing>" } else { "" };
        lines.push(format!("{:<9}: {}{}", label, edit.rendered(), marker));
    }
    lines.push(String::new());
    lines.push("Tab: switch field | Enter: submit | F2: reset password | Esc: quit".into());
    if let Some(error) = &form.error {
        lines.push(error.clone());
    }

    let p = Paragraph::new(lines.join("\n"))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Finanças — welcome"));
    f.render_widget(p, area);
}

// Overview

fn draw_overview(f: &mut Frame, area: Rect, app: &mut App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let summary = app.summary();
    let currency = app.currency();

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(4)])
        .split(cols[0]);

    let totals = Paragraph::new(format!(
        "Income          : {currency} {}\n\
         Expenses        : {currency} {}\n\
         Balance         : {currency} {}\n\
         Invested        : {currency} {}\n\
         Outstanding debt: {currency} {}\n\
         Net worth       : {currency} {}",
        fmt_money(&summary.total_income),
        fmt_money(&summary.total_expense),
        fmt_money(&summary.balance),
        fmt_money(&summary.total_invested),
        fmt_money(&summary.outstanding_debt),
        fmt_money(&summary.net_worth()),
    ))
    .block(Block::default().borders(Borders::ALL).title("Summary  (r=reload, e=export, l=logout)"));
    f.render_widget(totals, left[0]);

    let history_lines: Vec<String> = app
        .record
        .as_ref()
        .map(|record| {
            record
                .history
                .iter()
                .rev()
                .take(8)
                .map(|point| format!("{}  {currency} {}", iso(&point.date), fmt_money(&point.net_worth)))
                .collect()
        })
        .unwrap_or_default();
    let history = Paragraph::new(if history_lines.is_empty() {
        "No net-worth points recorded yet.".to_string()
    } else {
        history_lines.join("\n")
    })
    .block(Block::default().borders(Borders::ALL).title("Net worth history"));
    f.render_widget(history, left[1]);

    let advice_items: Vec<ListItem> = app
        .advice()
        .into_iter()
        .map(|advice| {
            let (prefix, color) = match advice.tone {
                Tone::Warning => ("[!]", Color::Red),
                Tone::Praise => ("[+]", Color::Green),
                Tone::Info => ("[i]", Color::Cyan),
            };
            ListItem::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(color)),
                Span::raw(" "),
                Span::raw(advice.text),
            ]))
        })
        .collect();
    let advisor = List::new(advice_items)
        .block(Block::default().borders(Borders::ALL).title("Financial assistant"));
    f.render_widget(advisor, cols[1]);
}

// Entity tables

fn draw_entities(f: &mut Frame, area: Rect, app: &mut App, tab: Tab) {
    let (title, header, widths, body) = build_table(app, tab);

    let len = body.len();
    let header = Row::new(header).height(1).style(Style::default().add_modifier(Modifier::BOLD));
    let table = Table::new(body, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let Some(page) = app.page_mut(tab) else { return };
    if let Some(i) = page.sel.selected() {
        if i >= len {
            page.sel.select(if len == 0 { None } else { Some(len - 1) });
        }
    } else if len > 0 {
        page.sel.select(Some(0));
    }

    let mut sel = page.sel.clone();
    f.render_stateful_widget(table, area, &mut sel);
    page.sel = sel;
}

type TableParts = (String, Vec<&'static str>, Vec<Constraint>, Vec<Row<'static>>);

fn build_table(app: &App, tab: Tab) -> TableParts {
    let record = app.record.as_ref();
    let at = today();

    match tab {
        Tab::Incomes | Tab::Expenses => {
            let list = record
                .map(|r| if tab == Tab::Incomes { &r.incomes } else { &r.expenses })
                .map(|l| l.as_slice())
                .unwrap_or_default();
            let body = list
                .iter()
                .map(|e| {
                    Row::new(vec![
                        Cell::from(e.description.clone()),
                        Cell::from(fmt_money(&e.amount)),
                        Cell::from(e.category.clone()),
                        Cell::from(iso(&e.date)),
                        Cell::from(if e.recurring { "yes" } else { "-" }),
                    ])
                })
                .collect();
            (
                format!("{}  (n=new, e=edit, x=delete)", tab.title()),
                vec!["Description", "Amount", "Category", "Date", "Recurring"],
                vec![
                    Constraint::Percentage(40),
                    Constraint::Length(12),
                    Constraint::Percentage(20),
                    Constraint::Length(12),
                    Constraint::Length(9),
                ],
                body,
            )
        }
        Tab::Investments => {
            let list = record.map(|r| r.investments.as_slice()).unwrap_or_default();
            let body = list
                .iter()
                .map(|i| {
                    Row::new(vec![
                        Cell::from(i.description.clone()),
                        Cell::from(fmt_money(&i.amount)),
                        Cell::from(i.kind.clone()),
                        Cell::from(
                            i.annual_yield
                                .map(|y| format!("{y}% p.a."))
                                .unwrap_or_else(|| "-".into()),
                        ),
                        Cell::from(fmt_money(&projection::projected_for(i, at))),
                        Cell::from(iso(&i.date)),
                    ])
                })
                .collect();
            (
                "Investments  (n=new, e=edit, x=delete)".into(),
                vec!["Description", "Amount", "Type", "Yield", "Accrued", "Date"],
                vec![
                    Constraint::Percentage(32),
                    Constraint::Length(12),
                    Constraint::Percentage(18),
                    Constraint::Length(12),
                    Constraint::Length(12),
                    Constraint::Length(12),
                ],
                body,
            )
        }
        Tab::Goals => {
            let list = record.map(|r| r.goals.as_slice()).unwrap_or_default();
            let body = list
                .iter()
                .map(|g| {
                    Row::new(vec![
                        Cell::from(g.description.clone()),
                        Cell::from(fmt_money(&g.target)),
                        Cell::from(fmt_money(&g.progress)),
                        Cell::from(format!("{}%", g.percent().round_dp(1))),
                        Cell::from(g.due_date.map(|d| iso(&d)).unwrap_or_else(|| "-".into())),
                    ])
                })
                .collect();
            (
                "Goals  (n=new, e=edit, x=delete, +=add progress)".into(),
                vec!["Description", "Target", "Progress", "%", "Due"],
                vec![
                    Constraint::Percentage(40),
                    Constraint::Length(12),
                    Constraint::Length(12),
                    Constraint::Length(8),
                    Constraint::Length(12),
                ],
                body,
            )
        }
        Tab::Debts => {
            let list = record.map(|r| r.debts.as_slice()).unwrap_or_default();
            let body = list
                .iter()
                .map(|d| {
                    Row::new(vec![
                        Cell::from(d.description.clone()),
                        Cell::from(fmt_money(&d.total)),
                        Cell::from(fmt_money(&d.installment)),
                        Cell::from(d.installments.to_string()),
                        Cell::from(
                            d.interest_rate
                                .map(|r| format!("{r}%"))
                                .unwrap_or_else(|| "-".into()),
                        ),
                        Cell::from(d.status.as_str()),
                    ])
                })
                .collect();
            (
                "Debts  (n=new, e=edit, x=delete, p=toggle paid)".into(),
                vec!["Description", "Total", "Installment", "Count", "Interest", "Status"],
                vec![
                    Constraint::Percentage(34),
                    Constraint::Length(12),
                    Constraint::Length(12),
                    Constraint::Length(7),
                    Constraint::Length(10),
                    Constraint::Length(9),
                ],
                body,
            )
        }
        Tab::Categories => {
            let list = record.map(|r| r.categories.as_slice()).unwrap_or_default();
            let body = list
                .iter()
                .map(|c| {
                    Row::new(vec![
                        Cell::from(c.name.clone()),
                        Cell::from(c.color.clone()),
                        Cell::from(c.kind.as_str()),
                    ])
                })
                .collect();
            (
                "Categories  (n=new, e=edit, x=delete)".into(),
                vec!["Name", "Color", "Kind"],
                vec![
                    Constraint::Percentage(50),
                    Constraint::Length(12),
                    Constraint::Length(10),
                ],
                body,
            )
        }
        _ => (String::new(), Vec::new(), Vec::new(), Vec::new()),
    }
}

// Modal form

fn draw_form_modal(f: &mut Frame, area: Rect, app: &App) {
    let Some(form) = &app.form else { return };

    let height = (form.fields.len() as u16) + 6;
    let modal = center_rect(area, 58, height);
    f.render_widget(Clear, modal);

    let mut lines: Vec<String> = form
        .fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            let marker = if form.focus == idx { "  <editing>" } else { "" };
            format!("{:<18}: {}{}", field.label, field.edit.rendered(), marker)
        })
        .collect();
    lines.push(String::new());
    lines.push("Tab: switch field | Enter: save | Esc: cancel".into());
    lines.push(form.error.clone().unwrap_or_default());

    let p = Paragraph::new(lines.join("\n"))
        .block(Block::default().borders(Borders::ALL).title(form.title.clone()));
    f.render_widget(p, modal);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let help_text = [
        "Global keys:",
        "  q        : Save and quit",
        "  l        : Log out",
        "  ?        : Open this help tab",
        "  Tab      : Next tab (Shift+Tab: previous)",
        "",
        "List tabs (Incomes / Expenses / Investments / Goals / Debts / Categories):",
        "  Up/Down  : Navigate rows",
        "  n        : New entry",
        "  e        : Edit selected entry",
        "  x/Del    : Delete selected entry",
        "",
        "Goals tab:",
        "  +        : Add progress (fixed 100-unit step, capped at the target)",
        "",
        "Debts tab:",
        "  p        : Toggle Pending/Paid",
        "",
        "Overview tab:",
        "  r        : Reload the record from the store",
        "  e        : Export a JSON backup of the record",
        "",
        "Forms:",
        "  Tab      : Next field | Enter: save | Esc: cancel",
    ]
    .join("\n");

    let p = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL).title("Help & keybindings"));
    f.render_widget(p, area);
}

fn center_rect(rect: Rect, w: u16, h: u16) -> Rect {
    let x = rect.x + rect.width.saturating_sub(w) / 2;
    let y = rect.y + rect.height.saturating_sub(h) / 2;
    Rect {
        x,
        y,
        width: w.min(rect.width),
        height: h.min(rect.height),
    }
}
