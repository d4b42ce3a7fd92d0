use std::io::{self, StdinLock, Write};

use forms::{ContactController, Credito, Dialogs, FormController, Planilla, RecordApi};

use crate::{
    config::AppConfig,
    error::Result,
    ui::{
        self, TerminalDialogs,
        commands::{self, AppAction},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Credito,
    Planilla,
    Contacto,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Self::Credito => "Simulación de crédito",
            Self::Planilla => "Planilla financiera",
            Self::Contacto => "Contacto",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            Self::Credito => "credito> ",
            Self::Planilla => "planilla> ",
            Self::Contacto => "contacto> ",
        }
    }
}

pub struct App {
    credito: FormController<Credito>,
    planilla: FormController<Planilla>,
    contacto: ContactController,
    section: Section,
    dialogs: TerminalDialogs<StdinLock<'static>>,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let tz = config.tz()?;
        let api = RecordApi::new(&config.base_url)?;
        tracing::info!(base_url = %config.base_url, timezone = %tz, "starting");

        Ok(Self {
            credito: FormController::new(api.clone(), tz),
            planilla: FormController::new(api.clone(), tz),
            contacto: ContactController::new(api),
            section: Section::Credito,
            dialogs: TerminalDialogs::stdin(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        println!("{}", ui::HELP);
        self.print_view();

        while !self.should_quit {
            print!("{}", self.section.prompt());
            io::stdout().flush()?;

            // Confirmations read from the same reader.
            let Some(line) = self.dialogs.next_line()? else {
                break;
            };
            self.handle(commands::parse(&line)).await;
        }
        Ok(())
    }

    async fn handle(&mut self, action: AppAction) {
        match action {
            AppAction::None => {}
            AppAction::Quit => self.should_quit = true,
            AppAction::Help => println!("{}", ui::HELP),
            AppAction::Invalid(message) => println!("{message}"),
            AppAction::Show => self.print_view(),
            AppAction::Switch(section) => {
                self.section = section;
                println!("-> {}", section.label());
                self.print_view();
            }
            AppAction::Set { field, value } => {
                if !self.set_field(&field, value) {
                    println!("Campo desconocido: {field}");
                }
            }
            AppAction::Submit => {
                self.submit().await;
                self.print_view();
            }
            other => {
                self.handle_record_action(other).await;
                self.print_view();
            }
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match self.section {
            Section::Credito => self.credito.set_field(field, value),
            Section::Planilla => self.planilla.set_field(field, value),
            Section::Contacto => self.contacto.set_field(field, value),
        }
    }

    async fn submit(&mut self) {
        let dialogs: &mut dyn Dialogs = &mut self.dialogs;
        match self.section {
            Section::Credito => self.credito.submit(dialogs).await,
            Section::Planilla => self.planilla.submit(dialogs).await,
            Section::Contacto => self.contacto.submit(dialogs).await,
        }
    }

    /// History and edit actions. The contact form has none.
    async fn handle_record_action(&mut self, action: AppAction) {
        let dialogs: &mut dyn Dialogs = &mut self.dialogs;
        match (self.section, action) {
            (Section::Contacto, _) => println!("El formulario de contacto no tiene historial."),
            (Section::Credito, AppAction::Search(key)) => self.credito.search(&key).await,
            (Section::Planilla, AppAction::Search(key)) => self.planilla.search(&key).await,
            (Section::Credito, AppAction::Edit(id)) => self.credito.edit(id, dialogs),
            (Section::Planilla, AppAction::Edit(id)) => self.planilla.edit(id, dialogs),
            (Section::Credito, AppAction::Delete(id)) => self.credito.delete(id, dialogs).await,
            (Section::Planilla, AppAction::Delete(id)) => self.planilla.delete(id, dialogs).await,
            (Section::Credito, AppAction::Cancel) => self.credito.cancel_edit(),
            (Section::Planilla, AppAction::Cancel) => self.planilla.cancel_edit(),
            _ => {}
        }
    }

    fn print_view(&self) {
        let view = match self.section {
            Section::Credito => ui::form_view(self.section.label(), &self.credito),
            Section::Planilla => ui::form_view(self.section.label(), &self.planilla),
            Section::Contacto => ui::contact_view(&self.contacto),
        };
        println!("{view}");
    }
}
