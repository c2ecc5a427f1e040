use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    domain::FieldKind,
    form::FormCommand,
    presentation::{self, UiContext},
};

use super::{
    controller::ClusterForm,
    events::WizardEvent,
    input::{HELP_TEXT, KeyCommand, classify},
    options::UiOptions,
    popup::PopupState,
    terminal::Screen,
};

pub(crate) struct App {
    form: ClusterForm,
    options: UiOptions,
    popup: Option<PopupState>,
    should_quit: bool,
    events: Vec<WizardEvent>,
}

impl App {
    pub fn new(form: ClusterForm, options: UiOptions) -> Self {
        Self {
            form,
            options,
            popup: None,
            should_quit: false,
            events: Vec::new(),
        }
    }

    /// Runs until an event leaves the page. Returns every event emitted,
    /// in order.
    pub fn run(&mut self) -> Result<Vec<WizardEvent>> {
        let mut screen = Screen::open()?;
        while !self.should_quit {
            self.tick();
            if self.should_quit {
                break;
            }
            screen.draw(|frame| self.draw(frame))?;
            if !event::poll(self.options.tick_rate)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => self.handle_key(key),
                Event::Paste(text) => self.handle_paste(&text),
                Event::Resize(width, height) => screen.resize(width, height)?,
                Event::Mouse(_) | Event::FocusGained | Event::FocusLost => {}
            }
            self.collect_events();
        }
        screen.close()?;
        Ok(std::mem::take(&mut self.events))
    }

    fn tick(&mut self) {
        self.form.poll();
        self.collect_events();
    }

    fn collect_events(&mut self) {
        for event in self.form.take_events() {
            if event.leaves_page() {
                self.should_quit = true;
            }
            self.events.push(event);
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = self.options.show_help.then_some(HELP_TEXT);
        presentation::draw(
            frame,
            UiContext {
                form_state: self.form.form_state(),
                alert: self.form.status().error(),
                toolbar: self.form.toolbar(),
                status_message: self.form.status_line().message(),
                form_errors: self.form.form_errors(),
                help,
                popup: self.popup.as_ref().map(PopupState::as_render),
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.handle_popup_key(&key) {
            return;
        }

        match classify(&key) {
            KeyCommand::Toolbar(action) => {
                self.form.activate(action);
            }
            KeyCommand::SwitchSection(delta) => {
                self.form.dispatch(FormCommand::FocusNextSection(delta))
            }
            KeyCommand::NextField => self.form.dispatch(FormCommand::FocusNextField),
            KeyCommand::PrevField => self.form.dispatch(FormCommand::FocusPrevField),
            KeyCommand::Dismiss => {
                if self.form.status().error().is_some() {
                    self.form.dismiss_alert();
                } else {
                    self.form.status_line_mut().ready();
                }
            }
            KeyCommand::Enter => self.handle_enter(),
            KeyCommand::Edit(event) => {
                let edited = self
                    .form
                    .form_state_mut()
                    .focused_field_mut()
                    .is_some_and(|field| field.handle_key(&event));
                if edited {
                    self.after_edit();
                }
            }
            KeyCommand::None => {}
        }
    }

    fn handle_popup_key(&mut self, key: &KeyEvent) -> bool {
        let Some(popup) = &mut self.popup else {
            return false;
        };
        match key.code {
            KeyCode::Esc => {
                self.popup = None;
                self.form.status_line_mut().ready();
            }
            KeyCode::Up => popup.select_previous(),
            KeyCode::Down => popup.select_next(),
            KeyCode::Enter => {
                let field = popup.field();
                let selection = popup.selection();
                self.popup = None;
                if let Some(state) = self.form.form_state_mut().field_mut(field) {
                    state.set_selected(selection);
                }
                self.after_edit();
            }
            _ => {}
        }
        true
    }

    fn handle_enter(&mut self) {
        let Some(field) = self.form.form_state().focused_field() else {
            return;
        };
        match field.schema.kind {
            FieldKind::Select(_) => {
                self.popup = PopupState::from_field(field);
                if self.popup.is_some() {
                    self.form
                        .status_line_mut()
                        .set_raw("Use ↑/↓ and Enter to choose");
                }
            }
            FieldKind::TextArea => {
                let edited = self
                    .form
                    .form_state_mut()
                    .focused_field_mut()
                    .is_some_and(|field| field.insert_newline());
                if edited {
                    self.after_edit();
                }
            }
            FieldKind::Text | FieldKind::Integer => {
                self.form.dispatch(FormCommand::FocusNextField)
            }
        }
    }

    fn handle_paste(&mut self, text: &str) {
        if self.popup.is_some() {
            return;
        }
        let edited = self
            .form
            .form_state_mut()
            .focused_field_mut()
            .is_some_and(|field| field.insert_text(text));
        if edited {
            self.after_edit();
        }
    }

    /// Status line plus re-validation for the focused field.
    fn after_edit(&mut self) {
        let Some((id, label)) = self
            .form
            .form_state()
            .focused_field()
            .map(|field| (field.schema.id, field.schema.display_label()))
        else {
            return;
        };
        self.form.status_line_mut().editing(&label);
        self.form.dispatch(FormCommand::FieldEdited { field: id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Cluster,
        app::{ToolbarAction, WizardStep},
        domain::FieldId,
        test_support::{Behaviour, FakeApi, complete_cluster, demo_cluster, form, runtime},
    };
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn chord(app: &mut App, ch: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL));
        app.collect_events();
    }

    fn focused(app: &App) -> Option<FieldId> {
        app.form
            .form_state()
            .focused_field()
            .map(|field| field.schema.id)
    }

    #[test]
    fn typing_edits_focused_field_and_revalidates() {
        let runtime = runtime();
        let form = form(&complete_cluster(), FakeApi::new(Behaviour::Succeed), &runtime);
        let mut app = App::new(form, UiOptions::default());
        assert_eq!(focused(&app), Some(FieldId::Name));

        for _ in 0.."demo".len() {
            press(&mut app, KeyCode::Backspace);
        }
        assert!(!app.form.is_valid());
        let name = app.form.form_state().field(FieldId::Name).expect("name");
        assert_eq!(name.visible_error(), Some("Required"));
        assert!(!app.form.toolbar().is_enabled(ToolbarAction::Save));

        press(&mut app, KeyCode::Char('x'));
        assert!(app.form.is_valid());
        assert_eq!(app.form.status_line().message(), "Editing Cluster name *");
    }

    #[test]
    fn enter_on_select_opens_popup_and_applies_choice() {
        let runtime = runtime();
        let form = form(&demo_cluster(), FakeApi::new(Behaviour::Succeed), &runtime);
        let mut app = App::new(form, UiOptions::default());
        press(&mut app, KeyCode::Tab);
        assert_eq!(focused(&app), Some(FieldId::OpenshiftVersion));

        press(&mut app, KeyCode::Enter);
        assert!(app.popup.is_some());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.popup.is_none());
        let values = app.form.values().expect("values");
        assert_eq!(values.openshift_version, "4.5");
    }

    #[test]
    fn escape_closes_popup_without_changing_value() {
        let runtime = runtime();
        let form = form(&demo_cluster(), FakeApi::new(Behaviour::Succeed), &runtime);
        let mut app = App::new(form, UiOptions::default());
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);
        assert!(app.popup.is_none());
        assert_eq!(app.form.values().expect("values").openshift_version, "4.4");
    }

    #[test]
    fn enter_on_text_field_moves_focus() {
        let runtime = runtime();
        let form = form(&demo_cluster(), FakeApi::new(Behaviour::Succeed), &runtime);
        let mut app = App::new(form, UiOptions::default());
        press(&mut app, KeyCode::Enter);
        assert_eq!(focused(&app), Some(FieldId::OpenshiftVersion));
    }

    #[test]
    fn paste_into_single_line_field_drops_newlines() {
        let runtime = runtime();
        let form = form(&demo_cluster(), FakeApi::new(Behaviour::Succeed), &runtime);
        let mut app = App::new(form, UiOptions::default());
        app.form.form_state_mut().focus_field(FieldId::BaseDnsDomain);
        app.handle_paste("example.com\n");
        let values = app.form.values().expect("values");
        assert_eq!(values.base_dns_domain, "example.com");
    }

    #[test]
    fn escape_dismisses_alert_before_status_line() {
        let runtime = runtime();
        let form = form(&complete_cluster(), FakeApi::new(Behaviour::Fail), &runtime);
        let mut app = App::new(form, UiOptions::default());
        chord(&mut app, 's');
        crate::test_support::settle(&mut app.form);
        assert!(app.form.status().error().is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.form.status().error().is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn back_and_cancel_end_the_loop() {
        let runtime = runtime();
        let form = form(&demo_cluster(), FakeApi::new(Behaviour::Succeed), &runtime);
        let mut app = App::new(form, UiOptions::default());
        chord(&mut app, 'b');
        assert!(app.should_quit);
        assert_eq!(
            app.events,
            vec![WizardEvent::StepChanged(WizardStep::BaremetalInventory)]
        );

        let form = crate::test_support::form(
            &demo_cluster(),
            FakeApi::new(Behaviour::Succeed),
            &runtime,
        );
        let mut app = App::new(form, UiOptions::default());
        chord(&mut app, 'q');
        assert_eq!(app.events, vec![WizardEvent::Cancelled]);
    }

    #[test]
    fn successful_save_keeps_page_open() {
        let runtime = runtime();
        let form = form(&complete_cluster(), FakeApi::new(Behaviour::Succeed), &runtime);
        let mut app = App::new(form, UiOptions::default());
        chord(&mut app, 's');
        assert!(app.form.toolbar().show_saving());
        crate::test_support::settle(&mut app.form);
        app.collect_events();
        assert!(!app.should_quit);
        assert!(matches!(
            app.events.as_slice(),
            [WizardEvent::ClusterUpdated(_)]
        ));
    }

    #[test]
    fn pasting_a_missing_vip_enables_save() {
        let runtime = runtime();
        let cluster = Cluster {
            api_vip: None,
            ..complete_cluster()
        };
        let form = form(&cluster, FakeApi::new(Behaviour::Succeed), &runtime);
        let mut app = App::new(form, UiOptions::default());
        assert!(!app.form.toolbar().is_enabled(ToolbarAction::Save));

        app.form.form_state_mut().focus_field(FieldId::ApiVip);
        app.handle_paste("192.168.126.100");
        assert!(app.form.is_valid());
        assert!(app.form.toolbar().is_enabled(ToolbarAction::Save));
    }

    #[test]
    fn clearing_a_required_field_disables_save() {
        let runtime = runtime();
        let form = form(&complete_cluster(), FakeApi::new(Behaviour::Succeed), &runtime);
        let mut app = App::new(form, UiOptions::default());
        assert!(app.form.toolbar().is_enabled(ToolbarAction::Save));

        app.form
            .form_state_mut()
            .focus_field(FieldId::ClusterNetworkCidr);
        press(&mut app, KeyCode::Delete);
        assert!(!app.form.is_valid());
        assert!(!app.form.toolbar().is_enabled(ToolbarAction::Save));
        let cidr = app
            .form
            .form_state()
            .field(FieldId::ClusterNetworkCidr)
            .expect("cidr");
        assert_eq!(cidr.visible_error(), Some("Required"));

        chord(&mut app, 's');
        assert!(!app.form.is_submitting());
    }
}
