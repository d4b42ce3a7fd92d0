//! Text-to-number coercion applied to form fields before transmission.
//!
//! Parsing follows the browser's `parseInt`/`parseFloat`: leading whitespace
//! is skipped and the longest numeric prefix wins (`"30 años"` is 30). When no
//! prefix parses the value is NaN, which goes over the wire as `null`. A field
//! that does not parse never aborts the submission.

use serde_json::{Map, Number, Value};

use crate::page::Form;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Sent as typed.
    Text,
    Integer,
    /// Integer that defaults to `0` when left empty.
    IntegerOrZero,
    Decimal,
}

/// Serializes every named field of `form` into a JSON object.
pub fn serialize(form: &Form) -> Map<String, Value> {
    form.fields()
        .iter()
        .map(|field| {
            (
                field.spec.name.to_string(),
                coerce(&field.value, field.spec.coercion),
            )
        })
        .collect()
}

pub fn coerce(raw: &str, coercion: Coercion) -> Value {
    match coercion {
        Coercion::Text => Value::String(raw.to_string()),
        Coercion::IntegerOrZero if raw.is_empty() => Value::from(0),
        Coercion::Integer | Coercion::IntegerOrZero => {
            parse_int(raw).map(Value::Number).unwrap_or(Value::Null)
        }
        Coercion::Decimal => parse_float(raw)
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
    }
}

/// Base-10 integer prefix of `input`, or `None` for NaN. Prefixes past the
/// `i64` range become floats, the way the browser keeps them.
pub fn parse_int(input: &str) -> Option<Number> {
    let trimmed = input.trim_start();
    let sign = usize::from(matches!(trimmed.as_bytes().first(), Some(b'+' | b'-')));
    let digits = count_digits(&trimmed.as_bytes()[sign..]);
    if digits == 0 {
        return None;
    }

    let prefix = &trimmed[..sign + digits];
    match prefix.parse::<i64>() {
        Ok(int) => Some(Number::from(int)),
        Err(_) => prefix.parse::<f64>().ok().and_then(Number::from_f64),
    }
}

/// Decimal prefix of `input`, or `None` for NaN and infinities.
pub fn parse_float(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::page::FieldSpec;

    #[test]
    fn int_takes_leading_prefix() {
        assert_eq!(parse_int("30"), Some(Number::from(30)));
        assert_eq!(parse_int("  30 años"), Some(Number::from(30)));
        assert_eq!(parse_int("3.9"), Some(Number::from(3)));
        assert_eq!(parse_int("-4"), Some(Number::from(-4)));
        assert_eq!(parse_int("+7"), Some(Number::from(7)));
    }

    #[test]
    fn int_past_i64_range_stays_a_number() {
        let value = parse_int("99999999999999999999 años").unwrap();
        assert!(value.is_f64());
        assert_eq!(value.as_f64(), Some(1e20));
        assert_eq!(coerce("-99999999999999999999", Coercion::Integer), json!(-1e20));
    }

    #[test]
    fn int_without_digits_is_nan() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("treinta"), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn float_takes_leading_prefix() {
        assert_eq!(parse_float("1000"), Some(1000.0));
        assert_eq!(parse_float("1500.75 COP"), Some(1500.75));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("2e3"), Some(2000.0));
        assert_eq!(parse_float("2e"), Some(2.0));
    }

    #[test]
    fn float_without_digits_is_nan() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("1e999"), None);
    }

    #[test]
    fn employee_count_defaults_to_zero_only_when_empty() {
        assert_eq!(coerce("", Coercion::IntegerOrZero), json!(0));
        assert_eq!(coerce("x", Coercion::IntegerOrZero), Value::Null);
        assert_eq!(coerce("", Coercion::Integer), Value::Null);
    }

    #[test]
    fn credit_form_is_coerced_before_transmission() {
        let mut form = Form::new(&[
            FieldSpec::text("nombres"),
            FieldSpec::text("apellidos"),
            FieldSpec::text("documento_identidad"),
            FieldSpec::numeric("edad", Coercion::Integer),
            FieldSpec::numeric("ingresos_mensuales", Coercion::Decimal),
            FieldSpec::numeric("gastos_mensuales", Coercion::Decimal),
            FieldSpec::numeric("valor_patrimonio", Coercion::Decimal),
            FieldSpec::numeric("numero_empleados", Coercion::IntegerOrZero),
        ]);
        form.set("nombres", "Ana");
        form.set("apellidos", "Lopez");
        form.set("documento_identidad", "123");
        form.set("edad", "30");
        form.set("ingresos_mensuales", "1000");
        form.set("gastos_mensuales", "200");
        form.set("valor_patrimonio", "5000");
        form.set("numero_empleados", "2");

        let body = Value::Object(serialize(&form));
        assert_eq!(
            body,
            json!({
                "nombres": "Ana",
                "apellidos": "Lopez",
                "documento_identidad": "123",
                "edad": 30,
                "ingresos_mensuales": 1000.0,
                "gastos_mensuales": 200.0,
                "valor_patrimonio": 5000.0,
                "numero_empleados": 2,
            })
        );
    }

    #[test]
    fn unparseable_field_does_not_abort_serialization() {
        let mut form = Form::new(&[
            FieldSpec::text("cedula"),
            FieldSpec::numeric("ingresos", Coercion::Decimal),
        ]);
        form.set("cedula", "123");
        form.set("ingresos", "mucho");

        let body = serialize(&form);
        assert_eq!(body.get("cedula"), Some(&json!("123")));
        assert_eq!(body.get("ingresos"), Some(&Value::Null));
    }
}
