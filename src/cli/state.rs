use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::widgets::TableState;

use crate::auth::{NewUser, Session};
use crate::cli::input::LineEdit;
use crate::cli::util::{
    iso, parse_date_any, parse_date_opt, parse_flag, parse_money, parse_money_or_zero, today,
};
use crate::dashboard::{advise, Advice, Summary};
use crate::model::{
    self, Category, CategoryKind, Debt, Entry, Goal, GoalUpdate, Investment, UserRecord,
};
use crate::store::Persistence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Incomes,
    Expenses,
    Investments,
    Goals,
    Debts,
    Categories,
    Help,
}

impl Tab {
    pub const ALL: [Tab; 8] = [
        Tab::Overview,
        Tab::Incomes,
        Tab::Expenses,
        Tab::Investments,
        Tab::Goals,
        Tab::Debts,
        Tab::Categories,
        Tab::Help,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Incomes => "Incomes",
            Tab::Expenses => "Expenses",
            Tab::Investments => "Investments",
            Tab::Goals => "Goals",
            Tab::Debts => "Debts",
            Tab::Categories => "Categories",
            Tab::Help => "Help",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    fn cycle(&self, delta: isize) -> Tab {
        let len = Self::ALL.len() as isize;
        let next = (self.index() as isize + delta).rem_euclid(len) as usize;
        Self::ALL[next]
    }

    /// Singular noun for status messages.
    fn noun(&self) -> &'static str {
        match self {
            Tab::Incomes => "Income",
            Tab::Expenses => "Expense",
            Tab::Investments => "Investment",
            Tab::Goals => "Goal",
            Tab::Debts => "Debt",
            Tab::Categories => "Category",
            _ => "Entry",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginMode {
    SignIn,
    SignUp,
}

/// Login screen state. Focus 0 is the mode selector row, the fields follow.
pub struct LoginForm {
    pub mode: LoginMode,
    pub name: LineEdit,
    pub nickname: LineEdit,
    pub email: LineEdit,
    pub password: LineEdit,
    pub confirm: LineEdit,
    pub focus: usize,
    pub error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            mode: LoginMode::SignIn,
            name: LineEdit::default(),
            nickname: LineEdit::default(),
            email: LineEdit::default(),
            password: LineEdit::password(),
            confirm: LineEdit::password(),
            focus: 1,
            error: None,
        }
    }
}

impl LoginForm {
    pub fn field_labels(&self) -> &'static [&'static str] {
        match self.mode {
            LoginMode::SignIn => &["E-mail", "Password"],
            LoginMode::SignUp => &["Name", "Nickname", "E-mail", "Password", "Confirm"],
        }
    }

    pub fn field(&self, idx: usize) -> Option<&LineEdit> {
        let fields: [&LineEdit; 5] = match self.mode {
            LoginMode::SignIn => {
                [&self.email, &self.password, &self.name, &self.nickname, &self.confirm]
            }
            LoginMode::SignUp => {
                [&self.name, &self.nickname, &self.email, &self.password, &self.confirm]
            }
        };
        if idx < self.field_labels().len() {
            Some(fields[idx])
        } else {
            None
        }
    }

    fn field_mut(&mut self, idx: usize) -> Option<&mut LineEdit> {
        let count = self.field_labels().len();
        if idx >= count {
            return None;
        }
        let field = match (self.mode, idx) {
            (LoginMode::SignIn, 0) => &mut self.email,
            (LoginMode::SignIn, 1) => &mut self.password,
            (LoginMode::SignUp, 0) => &mut self.name,
            (LoginMode::SignUp, 1) => &mut self.nickname,
            (LoginMode::SignUp, 2) => &mut self.email,
            (LoginMode::SignUp, 3) => &mut self.password,
            (LoginMode::SignUp, 4) => &mut self.confirm,
            _ => return None,
        };
        Some(field)
    }

    fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            LoginMode::SignIn => LoginMode::SignUp,
            LoginMode::SignUp => LoginMode::SignIn,
        };
        self.focus = self.focus.min(self.field_labels().len());
        self.error = None;
    }
}

#[derive(Clone)]
pub struct FormField {
    pub label: &'static str,
    pub edit: LineEdit,
}

/// One modal create/edit form. Field meaning is positional: the tab that
/// opened the form also parses it on submit.
#[derive(Clone, Default)]
pub struct Form {
    pub title: String,
    pub fields: Vec<FormField>,
    pub focus: usize,
    pub editing_id: Option<String>,
    pub error: Option<String>,
}

impl Form {
    fn new(title: impl Into<String>, labels: &[&'static str]) -> Self {
        Self {
            title: title.into(),
            fields: labels
                .iter()
                .map(|label| FormField {
                    label,
                    edit: LineEdit::default(),
                })
                .collect(),
            focus: 0,
            editing_id: None,
            error: None,
        }
    }

    fn with_values(mut self, values: &[&str]) -> Self {
        for (field, value) in self.fields.iter_mut().zip(values) {
            field.edit.set(*value);
        }
        self
    }

    pub fn value(&self, idx: usize) -> &str {
        self.fields.get(idx).map(|f| f.edit.value.as_str()).unwrap_or("")
    }

    fn focused_mut(&mut self) -> Option<&mut LineEdit> {
        let idx = self.focus;
        self.fields.get_mut(idx).map(|f| &mut f.edit)
    }

    fn move_focus(&mut self, delta: isize) {
        let len = self.fields.len() as isize;
        if len == 0 {
            return;
        }
        self.focus = (self.focus as isize + delta).rem_euclid(len) as usize;
    }
}

#[derive(Default)]
pub struct ListPage {
    pub sel: TableState,
}

pub struct App {
    pub session: Session,
    pub store: Persistence,
    pub record: Option<UserRecord>,
    pub screen: Screen,
    pub tab: Tab,
    pub status: String,
    pub quit: bool,
    pub login: LoginForm,
    pub form: Option<Form>,
    pub incomes: ListPage,
    pub expenses: ListPage,
    pub investments: ListPage,
    pub goals: ListPage,
    pub debts: ListPage,
    pub categories: ListPage,
    last_autosave: Instant,
}

impl App {
    pub async fn new(session: Session, store: Persistence) -> Self {
        let mut app = Self {
            session,
            store,
            record: None,
            screen: Screen::Login,
            tab: Tab::Overview,
            status: "Tab: switch field | Enter: sign in | Esc: quit".into(),
            quit: false,
            login: LoginForm::default(),
            form: None,
            incomes: ListPage::default(),
            expenses: ListPage::default(),
            investments: ListPage::default(),
            goals: ListPage::default(),
            debts: ListPage::default(),
            categories: ListPage::default(),
            last_autosave: Instant::now(),
        };

        // restored session from a previous run goes straight to the dashboard
        if let Some(user) = app.session.current().cloned() {
            app.record = Some(app.store.load(&user.id).await);
            app.screen = Screen::Dashboard;
            app.status = format!("Welcome back, {}!", user.display_name());
        }
        app
    }

    pub fn summary(&self) -> Summary {
        self.record.as_ref().map(Summary::compute).unwrap_or_default()
    }

    pub fn advice(&self) -> Vec<Advice> {
        advise(&self.summary())
    }

    pub fn currency(&self) -> String {
        self.record
            .as_ref()
            .map(|r| r.settings.currency.clone())
            .unwrap_or_else(|| "BRL".into())
    }

    async fn persist(&mut self) {
        if let Some(record) = self.record.as_mut() {
            if let Err(err) = self.store.save(record).await {
                self.status = format!("Save failed: {err}");
            }
        }
    }

    /// Periodic re-persist, driven from the event-loop tick while a session
    /// is active. Logging out stops it by leaving the dashboard screen.
    pub fn autosave_due(&self) -> bool {
        self.screen == Screen::Dashboard
            && self.last_autosave.elapsed() >= self.store.autosave_interval()
    }

    pub async fn autosave(&mut self) {
        self.persist().await;
        self.last_autosave = Instant::now();
    }

    pub async fn handle_key(&mut self, k: KeyEvent) -> Result<()> {
        if k.kind != KeyEventKind::Press {
            return Ok(());
        }
        match self.screen {
            Screen::Login => self.handle_login_key(k).await,
            Screen::Dashboard => {
                if self.form.is_some() {
                    self.handle_form_key(k).await
                } else {
                    self.handle_dashboard_key(k).await
                }
            }
        }
    }

    // ===== login =====

    async fn handle_login_key(&mut self, k: KeyEvent) -> Result<()> {
        let field_count = self.login.field_labels().len();
        match k.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => {
                self.login.focus = (self.login.focus + 1) % (field_count + 1);
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.login.focus = self.login.focus.checked_sub(1).unwrap_or(field_count);
            }
            KeyCode::Left | KeyCode::Right if self.login.focus == 0 => {
                self.login.toggle_mode();
            }
            KeyCode::Enter => self.submit_login().await,
            KeyCode::F(2) => {
                let email = self.login.email.value.trim().to_string();
                self.login.error = Some(match self.session.reset_password(&email) {
                    Ok(()) => "Password reset requested. Check your e-mail.".into(),
                    Err(err) => err.message().to_string(),
                });
            }
            KeyCode::Char(c) => {
                let idx = self.login.focus;
                if idx > 0 {
                    if let Some(edit) = self.login.field_mut(idx - 1) {
                        edit.push(c);
                    }
                }
            }
            KeyCode::Backspace => {
                let idx = self.login.focus;
                if idx > 0 {
                    if let Some(edit) = self.login.field_mut(idx - 1) {
                        edit.backspace();
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn submit_login(&mut self) {
        let outcome = match self.login.mode {
            LoginMode::SignIn => self
                .session
                .sign_in(&self.login.email.value, &self.login.password.value),
            LoginMode::SignUp => {
                if self.login.password.value != self.login.confirm.value {
                    self.login.error = Some("Passwords do not match.".into());
                    return;
                }
                self.session.sign_up(NewUser {
                    name: self.login.name.value.trim().to_string(),
                    nickname: self.login.nickname.value.trim().to_string(),
                    email: self.login.email.value.trim().to_string(),
                    password: self.login.password.value.clone(),
                })
            }
        };

        match outcome {
            Ok(user) => {
                self.record = Some(self.store.load(&user.id).await);
                self.screen = Screen::Dashboard;
                self.tab = Tab::Overview;
                self.login = LoginForm::default();
                self.last_autosave = Instant::now();
                self.status = format!("Welcome, {}!", user.display_name());
            }
            Err(err) => self.login.error = Some(err.message().into()),
        }
    }

    async fn logout(&mut self) {
        self.persist().await;
        self.session.sign_out();
        self.record = None;
        self.screen = Screen::Login;
        self.login = LoginForm::default();
        self.form = None;
        self.status = "You signed out of your account.".into();
    }

    // ===== dashboard =====

    async fn handle_dashboard_key(&mut self, k: KeyEvent) -> Result<()> {
        match k.code {
            KeyCode::Char('q') => {
                self.persist().await;
                self.quit = true;
                return Ok(());
            }
            KeyCode::Char('l') => {
                self.logout().await;
                return Ok(());
            }
            KeyCode::Char('?') => {
                self.tab = Tab::Help;
                return Ok(());
            }
            KeyCode::Tab => {
                self.tab = self.tab.cycle(1);
                return Ok(());
            }
            KeyCode::BackTab => {
                self.tab = self.tab.cycle(-1);
                return Ok(());
            }
            _ => {}
        }

        match self.tab {
            Tab::Overview => match k.code {
                KeyCode::Char('r') => {
                    if let Some(user) = self.session.current().cloned() {
                        self.record = Some(self.store.load(&user.id).await);
                        self.status = "Reloaded from the store.".into();
                    }
                }
                KeyCode::Char('e') => self.export_record(),
                _ => {}
            },
            Tab::Help => {
                if matches!(k.code, KeyCode::Esc | KeyCode::Char('b')) {
                    self.tab = Tab::Overview;
                }
            }
            tab => match k.code {
                KeyCode::Up => self.move_sel(tab, -1),
                KeyCode::Down => self.move_sel(tab, 1),
                KeyCode::Char('n') => self.open_form(tab, None),
                KeyCode::Char('e') => {
                    if let Some(id) = self.selected_id(tab) {
                        self.open_form(tab, Some(id));
                    }
                }
                KeyCode::Char('x') | KeyCode::Delete => self.delete_selected(tab).await,
                KeyCode::Char('+') if tab == Tab::Goals => self.add_goal_progress().await,
                KeyCode::Char('p') if tab == Tab::Debts => self.toggle_debt_paid().await,
                _ => {}
            },
        }
        Ok(())
    }

    pub fn rows_len(&self, tab: Tab) -> usize {
        let Some(record) = &self.record else { return 0 };
        match tab {
            Tab::Incomes => record.incomes.len(),
            Tab::Expenses => record.expenses.len(),
            Tab::Investments => record.investments.len(),
            Tab::Goals => record.goals.len(),
            Tab::Debts => record.debts.len(),
            Tab::Categories => record.categories.len(),
            _ => 0,
        }
    }

    pub fn page_mut(&mut self, tab: Tab) -> Option<&mut ListPage> {
        match tab {
            Tab::Incomes => Some(&mut self.incomes),
            Tab::Expenses => Some(&mut self.expenses),
            Tab::Investments => Some(&mut self.investments),
            Tab::Goals => Some(&mut self.goals),
            Tab::Debts => Some(&mut self.debts),
            Tab::Categories => Some(&mut self.categories),
            _ => None,
        }
    }

    fn move_sel(&mut self, tab: Tab, delta: isize) {
        let n = self.rows_len(tab);
        let Some(page) = self.page_mut(tab) else { return };
        if n == 0 {
            page.sel.select(None);
            return;
        }
        let cur = page.sel.selected().unwrap_or(0) as isize;
        let next = (cur + delta).rem_euclid(n as isize) as usize;
        page.sel.select(Some(next));
    }

    fn selected_index(&mut self, tab: Tab) -> Option<usize> {
        let n = self.rows_len(tab);
        let idx = self.page_mut(tab)?.sel.selected()?;
        (idx < n).then_some(idx)
    }

    /// Selected row resolved to the entity's stable id; everything downstream
    /// addresses by id, never by row position.
    fn selected_id(&mut self, tab: Tab) -> Option<String> {
        let idx = self.selected_index(tab)?;
        let record = self.record.as_ref()?;
        match tab {
            Tab::Incomes => record.incomes.get(idx).map(|e| e.id.clone()),
            Tab::Expenses => record.expenses.get(idx).map(|e| e.id.clone()),
            Tab::Investments => record.investments.get(idx).map(|i| i.id.clone()),
            Tab::Goals => record.goals.get(idx).map(|g| g.id.clone()),
            Tab::Debts => record.debts.get(idx).map(|d| d.id.clone()),
            Tab::Categories => record.categories.get(idx).map(|c| c.id.clone()),
            _ => None,
        }
    }

    // ===== forms =====

    fn open_form(&mut self, tab: Tab, editing: Option<String>) {
        let Some(record) = &self.record else { return };
        let today_s = iso(&today());

        let mut form = match tab {
            Tab::Incomes | Tab::Expenses => Form::new(
                format!(
                    "{} {}",
                    if editing.is_some() { "Edit" } else { "New" },
                    tab.noun()
                ),
                &["Description", "Amount", "Category", "Date", "Recurring (y/n)"],
            )
            .with_values(&["", "", "", today_s.as_str(), "n"]),
            Tab::Investments => Form::new(
                if editing.is_some() { "Edit Investment" } else { "New Investment" },
                &["Description", "Amount", "Type", "Yield % p.a.", "Date"],
            )
            .with_values(&["", "", "", "", today_s.as_str()]),
            Tab::Goals => Form::new(
                if editing.is_some() { "Edit Goal" } else { "New Goal" },
                &["Description", "Target", "Category", "Due date"],
            ),
            Tab::Debts => Form::new(
                if editing.is_some() { "Edit Debt" } else { "New Debt" },
                &["Description", "Total", "Installment", "Installments", "Interest % p.a."],
            ),
            Tab::Categories => Form::new(
                if editing.is_some() { "Edit Category" } else { "New Category" },
                &["Name", "Color", "Kind (income/expense)"],
            ),
            _ => return,
        };

        if let Some(id) = &editing {
            let values: Option<Vec<String>> = match tab {
                Tab::Incomes | Tab::Expenses => {
                    let list = if tab == Tab::Incomes { &record.incomes } else { &record.expenses };
                    list.iter().find(|e| &e.id == id).map(|e| {
                        vec![
                            e.description.clone(),
                            e.amount.to_string(),
                            e.category.clone(),
                            iso(&e.date),
                            if e.recurring { "y".into() } else { "n".into() },
                        ]
                    })
                }
                Tab::Investments => record.investments.iter().find(|i| &i.id == id).map(|i| {
                    vec![
                        i.description.clone(),
                        i.amount.to_string(),
                        i.kind.clone(),
                        i.annual_yield.map(|y| y.to_string()).unwrap_or_default(),
                        iso(&i.date),
                    ]
                }),
                Tab::Goals => record.goals.iter().find(|g| &g.id == id).map(|g| {
                    vec![
                        g.description.clone(),
                        g.target.to_string(),
                        g.category.clone(),
                        g.due_date.map(|d| iso(&d)).unwrap_or_default(),
                    ]
                }),
                Tab::Debts => record.debts.iter().find(|d| &d.id == id).map(|d| {
                    vec![
                        d.description.clone(),
                        d.total.to_string(),
                        d.installment.to_string(),
                        d.installments.to_string(),
                        d.interest_rate.map(|r| r.to_string()).unwrap_or_default(),
                    ]
                }),
                Tab::Categories => record.categories.iter().find(|c| &c.id == id).map(|c| {
                    vec![
                        c.name.clone(),
                        c.color.clone(),
                        c.kind.as_str().to_ascii_lowercase(),
                    ]
                }),
                _ => None,
            };
            let Some(values) = values else { return };
            let refs: Vec<&str> = values.iter().map(String::as_str).collect();
            form = form.with_values(&refs);
            form.editing_id = editing;
        }

        self.form = Some(form);
    }

    async fn handle_form_key(&mut self, k: KeyEvent) -> Result<()> {
        let Some(form) = self.form.as_mut() else { return Ok(()) };
        match k.code {
            KeyCode::Esc => {
                self.form = None;
            }
            KeyCode::Enter => self.submit_form().await,
            KeyCode::Tab | KeyCode::Down => form.move_focus(1),
            KeyCode::BackTab | KeyCode::Up => form.move_focus(-1),
            KeyCode::Left => {
                if let Some(edit) = form.focused_mut() {
                    edit.left();
                }
            }
            KeyCode::Right => {
                if let Some(edit) = form.focused_mut() {
                    edit.right();
                }
            }
            KeyCode::Char(c) => {
                if let Some(edit) = form.focused_mut() {
                    edit.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(edit) = form.focused_mut() {
                    edit.backspace();
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn submit_form(&mut self) {
        let Some(form) = self.form.clone() else { return };
        let tab = self.tab;

        if form.value(0).trim().is_empty() {
            let label = form.fields.first().map(|f| f.label).unwrap_or("Description");
            if let Some(open) = self.form.as_mut() {
                open.error = Some(format!("{label} is required."));
            }
            return;
        }

        let Some(record) = self.record.as_mut() else { return };
        let editing = form.editing_id.clone();

        match tab {
            Tab::Incomes | Tab::Expenses => {
                let mut entry = Entry::new(
                    form.value(0).trim().to_string(),
                    parse_money_or_zero(form.value(1)),
                    form.value(2).trim().to_string(),
                    parse_date_any(form.value(3)),
                );
                entry.recurring = parse_flag(form.value(4));
                let list = if tab == Tab::Incomes {
                    &mut record.incomes
                } else {
                    &mut record.expenses
                };
                match editing {
                    Some(id) => {
                        entry.id = id;
                        model::replace_by_id(list, entry);
                    }
                    None => list.push(entry),
                }
            }
            Tab::Investments => {
                let mut investment = Investment::new(
                    form.value(0).trim().to_string(),
                    parse_money_or_zero(form.value(1)),
                    form.value(2).trim().to_string(),
                    parse_money(form.value(3)),
                    parse_date_any(form.value(4)),
                );
                match editing {
                    Some(id) => {
                        investment.id = id;
                        model::replace_by_id(&mut record.investments, investment);
                    }
                    None => record.investments.push(investment),
                }
            }
            Tab::Goals => {
                let mut goal = Goal::new(
                    form.value(0).trim().to_string(),
                    parse_money_or_zero(form.value(1)),
                    form.value(2).trim().to_string(),
                    parse_date_opt(form.value(3)),
                );
                match editing {
                    Some(id) => {
                        // progress survives an edit
                        if let Some(existing) = model::find_mut(&mut record.goals, &id) {
                            goal.progress = existing.progress;
                        }
                        goal.id = id;
                        model::replace_by_id(&mut record.goals, goal);
                    }
                    None => record.goals.push(goal),
                }
            }
            Tab::Debts => {
                let mut debt = Debt::new(
                    form.value(0).trim().to_string(),
                    parse_money_or_zero(form.value(1)),
                    parse_money_or_zero(form.value(2)),
                    form.value(3).trim().parse().unwrap_or(0),
                    parse_money(form.value(4)),
                );
                match editing {
                    Some(id) => {
                        // paid/pending state survives an edit
                        if let Some(existing) = model::find_mut(&mut record.debts, &id) {
                            debt.status = existing.status;
                        }
                        debt.id = id;
                        model::replace_by_id(&mut record.debts, debt);
                    }
                    None => record.debts.push(debt),
                }
            }
            Tab::Categories => {
                let kind = if form.value(2).trim().eq_ignore_ascii_case("income") {
                    CategoryKind::Income
                } else {
                    CategoryKind::Expense
                };
                let mut category = Category::new(
                    form.value(0).trim().to_string(),
                    form.value(1).trim().to_string(),
                    kind,
                );
                match editing {
                    Some(id) => {
                        category.id = id;
                        model::replace_by_id(&mut record.categories, category);
                    }
                    None => record.categories.push(category),
                }
            }
            _ => {}
        }

        self.form = None;
        self.persist().await;
        self.status = format!("{} saved.", tab.noun());
    }

    /// Writes a dated JSON backup of the whole record next to the local
    /// store files.
    fn export_record(&mut self) {
        let Some(record) = &self.record else { return };
        let path = self
            .store
            .local()
            .dir()
            .join(format!("backup-{}.json", iso(&today())));

        let result = serde_json::to_string_pretty(record)
            .map_err(anyhow::Error::from)
            .and_then(|raw| std::fs::write(&path, raw).map_err(anyhow::Error::from));
        self.status = match result {
            Ok(()) => format!("Data exported to {}.", path.display()),
            Err(err) => format!("Export failed: {err}"),
        };
    }

    // ===== row actions =====

    async fn delete_selected(&mut self, tab: Tab) {
        let Some(id) = self.selected_id(tab) else { return };
        let Some(record) = self.record.as_mut() else { return };

        let removed = match tab {
            Tab::Incomes => model::remove_by_id(&mut record.incomes, &id),
            Tab::Expenses => model::remove_by_id(&mut record.expenses, &id),
            Tab::Investments => model::remove_by_id(&mut record.investments, &id),
            Tab::Goals => model::remove_by_id(&mut record.goals, &id),
            Tab::Debts => model::remove_by_id(&mut record.debts, &id),
            Tab::Categories => model::remove_by_id(&mut record.categories, &id),
            _ => false,
        };
        if removed {
            self.persist().await;
            self.status = format!("{} deleted.", tab.noun());
        }
    }

    async fn add_goal_progress(&mut self) {
        let Some(id) = self.selected_id(Tab::Goals) else { return };
        let Some(record) = self.record.as_mut() else { return };
        let Some(goal) = model::find_mut(&mut record.goals, &id) else { return };

        let update = goal.add_progress();
        let description = goal.description.clone();
        self.persist().await;
        self.status = match update {
            GoalUpdate::Reached => format!("Congratulations! You reached the goal: {description}"),
            GoalUpdate::Advanced => "Progress added to the goal.".into(),
        };
    }

    async fn toggle_debt_paid(&mut self) {
        let Some(id) = self.selected_id(Tab::Debts) else { return };
        let Some(record) = self.record.as_mut() else { return };
        let Some(debt) = model::find_mut(&mut record.debts, &id) else { return };

        debt.toggle_paid();
        let status = debt.status;
        self.persist().await;
        self.status = format!("Debt marked as {}.", status.as_str());
    }
}
