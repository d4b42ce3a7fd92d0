use std::fmt;

use serde::{Deserialize, Deserializer, de};

/// Server-assigned record identity (`SERIAL` primary key).
pub type RecordId = i64;

/// A numeric value exactly as the server sent it.
///
/// NUMERIC columns may arrive as JSON numbers or as strings depending on the
/// server's encoder, so the original text is kept and displayed verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Numeric(String);

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumericVisitor;

        impl de::Visitor<'_> for NumericVisitor {
            type Value = Numeric;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or a numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Numeric, E> {
                Ok(Numeric(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Numeric, E> {
                Ok(Numeric(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Numeric, E> {
                Ok(Numeric(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Numeric, E> {
                Ok(Numeric(v.to_string()))
            }
        }

        deserializer.deserialize_any(NumericVisitor)
    }
}

/// Body of every non-2xx answer.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of a successful delete.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteAck {
    pub mensaje: Option<String>,
}

pub mod credito {
    use super::*;

    /// A stored credit simulation request.
    ///
    /// Field names follow the wire format, which is also the set of form
    /// field names used by the credit form.
    #[derive(Clone, Debug, PartialEq, Deserialize)]
    pub struct CreditSimulation {
        pub id: RecordId,
        pub nombres: Option<String>,
        pub apellidos: Option<String>,
        pub documento_identidad: Option<String>,
        pub edad: Option<Numeric>,
        /// Date as sent by the server (ISO date, RFC 3339 or HTTP date).
        pub fecha_nacimiento: Option<String>,
        pub ingresos_mensuales: Option<Numeric>,
        pub gastos_mensuales: Option<Numeric>,
        pub valor_patrimonio: Option<Numeric>,
        pub dimension_terreno: Option<String>,
        pub destinacion_credito: Option<String>,
        pub numero_empleados: Option<Numeric>,
        /// Maximum approved amount, computed by the server.
        pub valor_aprobado: Option<Numeric>,
        pub created_at: Option<String>,
    }
}

pub mod planilla {
    use super::*;

    /// A stored financial worksheet.
    #[derive(Clone, Debug, PartialEq, Deserialize)]
    pub struct Planilla {
        pub id: RecordId,
        pub cedula: Option<String>,
        pub ingresos: Option<Numeric>,
        pub gastos: Option<Numeric>,
        pub inversiones: Option<Numeric>,
        /// `ingresos - gastos - inversiones`, computed by the server.
        pub utilidad: Option<Numeric>,
        pub observaciones: Option<String>,
        pub fecha: Option<String>,
        pub created_at: Option<String>,
    }
}

pub mod contacto {
    use super::*;

    /// Echo of a stored contact request. Only used to acknowledge success.
    #[derive(Clone, Debug, Deserialize)]
    pub struct Contacto {
        pub id: Option<RecordId>,
        pub nombres: Option<String>,
        pub correo: Option<String>,
    }
}
