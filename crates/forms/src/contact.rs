use crate::{
    client::RecordApi,
    coerce,
    dialogs::{Dialogs, Notification},
    page::{FieldSpec, Form, SubmitButton},
};

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("nombres"),
    FieldSpec::text("apellidos"),
    FieldSpec::text("cedula"),
    FieldSpec::text("correo"),
    FieldSpec::text("celular"),
    FieldSpec::text("ubicacion"),
    FieldSpec::text("direccion"),
    FieldSpec::text_area("mensaje"),
];

const SEND_LABEL: &str = "Enviar";
const BUSY_LABEL: &str = "Enviando...";

const THANKS_TITLE: &str = "¡Gracias por tu preferencia!";
const THANKS_TEXT: &str =
    "Gracias por enviar sus datos, un agente se contactará lo más pronto posible.";
const SEND_ERROR: &str = "No se pudo guardar el contacto";
const NETWORK_ERROR: &str = "Hubo un problema al conectar con el servidor";

/// The contact form: a single fire-and-forget submission, answered with a
/// modal notification only.
#[derive(Debug)]
pub struct ContactController {
    api: RecordApi,
    form: Form,
    submit_button: SubmitButton,
}

impl ContactController {
    pub fn new(api: RecordApi) -> Self {
        Self {
            api,
            form: Form::new(FIELDS),
            submit_button: SubmitButton::new(SEND_LABEL),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> bool {
        self.form.set(name, value)
    }

    pub fn submit_button(&self) -> &SubmitButton {
        &self.submit_button
    }

    pub async fn submit(&mut self, dialogs: &mut dyn Dialogs) {
        if self.submit_button.is_disabled() {
            return;
        }
        self.submit_button.disable(BUSY_LABEL);

        let body = coerce::serialize(&self.form);
        match self.api.send_contact(&body).await {
            Ok(_) => {
                dialogs.notify(Notification::success(THANKS_TITLE, THANKS_TEXT));
                self.form.reset();
            }
            Err(err) => {
                tracing::warn!("contact failed: {err}");
                dialogs.notify(Notification::error(
                    &err.user_message(SEND_ERROR, NETWORK_ERROR),
                ));
            }
        }

        self.submit_button.enable(SEND_LABEL);
    }
}
