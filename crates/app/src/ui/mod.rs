use std::io::{self, BufRead, StdinLock, Write};

use forms::{
    ContactController, Dialogs, EditState, Entity, FieldKind, Form, FormController,
    Notification, NotificationLevel, SubmitButton,
};

pub mod commands;

pub const HELP: &str = "\
Comandos:
  credito | planilla | contacto   cambiar de formulario
  campo <nombre> [valor]          escribir en un campo
  enviar                          enviar el formulario
  buscar <cedula>                 consultar el historial
  editar <id> | eliminar <id>     acciones de una fila del historial
  cancelar                        salir del modo edición
  ver | ayuda | salir";

/// Modal surface on the terminal. Messages are printed; confirmations are
/// read from the same input as the commands, one line each.
#[derive(Debug)]
pub struct TerminalDialogs<R> {
    input: R,
}

impl TerminalDialogs<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> TerminalDialogs<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Next input line without its terminator, `None` at end of input.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead> Dialogs for TerminalDialogs<R> {
    fn notify(&mut self, notification: Notification) {
        let tag = match notification.level {
            NotificationLevel::Success => "OK",
            NotificationLevel::Error => "ERROR",
        };
        if notification.text.is_empty() {
            println!("[{tag}] {}", notification.title);
        } else {
            println!("[{tag}] {}: {}", notification.title, notification.text);
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        print!("{message} [s/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        match self.next_line() {
            Ok(Some(answer)) => matches!(
                answer.trim().to_lowercase().as_str(),
                "s" | "si" | "sí" | "y" | "yes"
            ),
            _ => false,
        }
    }
}

pub fn form_view<E: Entity>(title: &str, controller: &FormController<E>) -> String {
    let mut out = match controller.current_state() {
        EditState::Creating => format!("== {title}\n"),
        EditState::Editing(id) => format!("== {title} (editando #{id})\n"),
    };
    push_fields(&mut out, controller.form(), controller.submit_button());

    let result = controller.result();
    if result.is_visible() {
        out.push_str("-- Resultado\n");
        out.push_str(&plain_text(result.detail()));
        out.push('\n');
    }
    if !controller.history().html().is_empty() {
        out.push_str("-- Historial\n");
        out.push_str(&plain_text(controller.history().html()));
        out.push('\n');
    }
    out
}

pub fn contact_view(controller: &ContactController) -> String {
    let mut out = String::from("== Contacto\n");
    push_fields(&mut out, controller.form(), controller.submit_button());
    out
}

fn push_fields(out: &mut String, form: &Form, button: &SubmitButton) {
    for field in form.fields() {
        let marker = if form.focused() == Some(field.spec.name) {
            '>'
        } else {
            ' '
        };
        match field.spec.kind {
            FieldKind::Input => {
                out.push_str(&format!("{marker} {}: {}\n", field.spec.name, field.value));
            }
            // Multi-line text goes below its name, indented.
            FieldKind::TextArea => {
                out.push_str(&format!("{marker} {}:\n", field.spec.name));
                for line in field.value.lines() {
                    out.push_str(&format!("    {line}\n"));
                }
            }
        }
    }
    if button.is_disabled() {
        out.push_str(&format!("  ({})\n", button.label()));
    } else {
        out.push_str(&format!("  [{}]\n", button.label()));
    }
}

/// Flattens rendered markup for the terminal. Table cells are separated by
/// `|` and row triggers show the identity they act on.
pub fn plain_text(html: &str) -> String {
    let mut out = String::new();
    let mut tag = String::new();
    let mut in_tag = false;

    for ch in html.chars() {
        match ch {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                match tag.as_str() {
                    "/p" | "/div" | "/tr" => out.push('\n'),
                    "/td" | "/th" => out.push_str(" | "),
                    "/button" => out.push_str("] "),
                    _ if tag.starts_with("button") => match attribute(&tag, "data-id") {
                        Some(id) => out.push_str(&format!("[#{id} ")),
                        None => out.push('['),
                    },
                    _ => {}
                }
            }
            _ if in_tag => tag.push(ch),
            _ => out.push(ch),
        }
    }

    out.trim_end().to_string()
}

fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let start = tag.find(&format!("{name}=\""))? + name.len() + 2;
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}
