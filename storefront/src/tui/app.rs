//! 终端界面状态与按键处理
//!
//! Rendering lives in [`super::ui`]; everything here is plain state so the
//! key handling can be driven from tests without a terminal.

use crate::core::Config;
use crate::feedback::FeedbackExpired;
use crate::session::{Storefront, View};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use shared::{AppError, CustomerField, PaymentMethod};
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// What the event loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Continue,
    Quit,
}

/// One-line message under the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Info(String),
    Error(String),
}

impl StatusLine {
    pub fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Error(text) => text,
        }
    }
}

pub struct App {
    pub store: Storefront,
    pub store_name: String,
    pub currency: String,
    /// Highlighted row in the menu list
    pub menu_index: usize,
    /// Highlighted row in the cart panel
    pub cart_index: usize,
    /// Checkout inputs, in [`CustomerField::ALL`] order
    pub inputs: [Input; 3],
    pub focused_field: CustomerField,
    pub input_mode: InputMode,
    pub status: Option<StatusLine>,
    pub logger_state: TuiWidgetState,
}

impl App {
    pub fn new(store: Storefront, config: &Config) -> Self {
        Self {
            store,
            store_name: config.store_name.clone(),
            currency: config.currency.clone(),
            menu_index: 0,
            cart_index: 0,
            inputs: Default::default(),
            focused_field: CustomerField::Name,
            input_mode: InputMode::Normal,
            status: None,
            logger_state: TuiWidgetState::new(),
        }
    }

    pub fn input(&self, field: CustomerField) -> &Input {
        &self.inputs[field_index(field)]
    }

    pub fn on_feedback_expired(&mut self, event: FeedbackExpired) {
        self.store.on_feedback_expired(event);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return AppAction::Continue;
        }

        // 日志面板翻页在所有视图下可用
        match key.code {
            KeyCode::PageUp => {
                self.logger_state.transition(TuiWidgetEvent::PrevPageKey);
                return AppAction::Continue;
            }
            KeyCode::PageDown => {
                self.logger_state.transition(TuiWidgetEvent::NextPageKey);
                return AppAction::Continue;
            }
            _ => {}
        }

        match (self.store.view(), self.input_mode) {
            (View::Checkout, InputMode::Editing) => self.handle_editing_key(key),
            (View::Checkout, InputMode::Normal) => self.handle_checkout_key(key),
            (View::Menu | View::Cart, _) => self.handle_browse_key(key),
        }
    }

    // ========== 菜单 / 购物车 ==========

    fn handle_browse_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(),
            KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                let next = match self.store.view() {
                    View::Menu => View::Cart,
                    _ => View::Menu,
                };
                self.store.show_view(next);
            }
            KeyCode::Char('a') | KeyCode::Enter => self.add_selected(),
            KeyCode::Char('r') => self.remove_selected(),
            KeyCode::Char('c') => self.proceed_to_checkout(),
            _ => {}
        }
        AppAction::Continue
    }

    fn selected_name(&self) -> Option<String> {
        match self.store.view() {
            View::Cart => self
                .store
                .cart()
                .lines()
                .get(self.cart_index)
                .map(|line| line.name.clone()),
            _ => self
                .store
                .catalog()
                .get_index(self.menu_index)
                .map(|entry| entry.name.clone()),
        }
    }

    fn select_prev(&mut self) {
        let index = match self.store.view() {
            View::Cart => &mut self.cart_index,
            _ => &mut self.menu_index,
        };
        *index = index.saturating_sub(1);
    }

    fn select_next(&mut self) {
        let (index, len) = match self.store.view() {
            View::Cart => (&mut self.cart_index, self.store.cart().len()),
            _ => (&mut self.menu_index, self.store.catalog().len()),
        };
        if *index + 1 < len {
            *index += 1;
        }
    }

    fn add_selected(&mut self) {
        let Some(name) = self.selected_name() else {
            return;
        };
        match self.store.add_item(&name) {
            Ok(_) => self.status = None,
            Err(e) => self.show_error(e),
        }
    }

    fn remove_selected(&mut self) {
        let Some(name) = self.selected_name() else {
            return;
        };
        let len = self.store.remove_item(&name).len();
        self.cart_index = self.cart_index.min(len.saturating_sub(1));
    }

    fn proceed_to_checkout(&mut self) {
        match self.store.proceed_to_checkout() {
            Ok(checkout) => {
                // 恢复未完成的表单
                let customer = checkout.customer();
                self.inputs =
                    CustomerField::ALL.map(|f| Input::new(customer.field(f).to_string()));
                self.focused_field = CustomerField::Name;
                self.input_mode = InputMode::Editing;
                self.status = None;
            }
            Err(e) => self.show_error(e),
        }
    }

    // ========== 结账表单 ==========

    fn handle_checkout_key(&mut self, key: KeyEvent) -> AppAction {
        let confirmed = self
            .store
            .checkout()
            .is_some_and(|c| c.state().is_confirmed());

        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Char('n') if confirmed => self.start_new_order(),
            KeyCode::Esc if confirmed => self.start_new_order(),
            KeyCode::Esc => self.store.show_view(View::Menu),
            KeyCode::Tab | KeyCode::Char('e') if !confirmed => {
                self.input_mode = InputMode::Editing;
            }
            KeyCode::Char('p') if !confirmed => self.toggle_payment(),
            KeyCode::Enter if !confirmed => self.submit(),
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Tab => self.focused_field = self.focused_field.next(),
            KeyCode::Enter => self.submit(),
            _ => {
                let field = self.focused_field;
                let input = &mut self.inputs[field_index(field)];
                if input.handle_event(&Event::Key(key)).is_some() {
                    let value = input.value().to_string();
                    if let Err(e) = self.store.handle_field_change(field, &value) {
                        self.show_error(e);
                    }
                }
            }
        }
        AppAction::Continue
    }

    fn toggle_payment(&mut self) {
        let Some(checkout) = self.store.checkout() else {
            return;
        };
        let next = match checkout.payment_method() {
            PaymentMethod::CashOnDelivery => PaymentMethod::Online,
            PaymentMethod::Online => PaymentMethod::CashOnDelivery,
        };
        match self.store.select_payment(next) {
            Ok(()) => self.status = None,
            Err(e) => self.show_error(e),
        }
    }

    fn submit(&mut self) {
        match self.store.submit_order() {
            Ok(confirmation) => {
                tracing::info!(
                    reference = %confirmation.short_reference(),
                    "{}",
                    confirmation.message()
                );
                self.input_mode = InputMode::Normal;
                self.cart_index = 0;
                self.status = Some(StatusLine::Info(confirmation.message()));
            }
            Err(e) => {
                // 跳到出错的字段继续编辑
                if let Some(field) = e
                    .detail("field")
                    .and_then(|v| v.as_str())
                    .and_then(|key| key.parse::<CustomerField>().ok())
                {
                    self.focused_field = field;
                    self.input_mode = InputMode::Editing;
                }
                self.show_error(e);
            }
        }
    }

    fn start_new_order(&mut self) {
        self.store.start_new_order();
        self.inputs = Default::default();
        self.focused_field = CustomerField::Name;
        self.input_mode = InputMode::Normal;
        self.menu_index = 0;
        self.cart_index = 0;
        self.status = None;
    }

    fn show_error(&mut self, err: AppError) {
        if err.code.category().is_user_recoverable() {
            tracing::warn!(code = %err.code, "{}", err.message);
        } else {
            tracing::error!(code = %err.code, "{}", err.message);
        }
        self.status = Some(StatusLine::Error(err.message));
    }
}

fn field_index(field: CustomerField) -> usize {
    match field {
        CustomerField::Name => 0,
        CustomerField::Address => 1,
        CustomerField::Contact => 2,
    }
}
