//! Default acta template and placeholder substitution.
//!
//! The template is flat narrative text with `{{KEY}}` placeholders. All
//! prose placeholders are substituted here; the two marker placeholders
//! survive substitution on purpose, since the assembler expands them into
//! blocks that plain text cannot carry.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use acta_types::{NonEmptyText, SessionKind};

use crate::constants::{ATTENDANCE_MARKER, SIGNATURE_MARKER};
use crate::error::{ActaError, ActaResult};
use crate::numerals::spell;
use crate::phrases::{phrase_clause, phrase_header_caption};

/// The default session record for the H. Ayuntamiento de Tepakán.
pub const DEFAULT_TEMPLATE: &str = "\
ACTA DE LA SESIÓN {{TIPO_SESION}} DE CABILDO. DEL
HONORABLE AYUNTAMIENTO DE TEPAKÁN,
YUCATÁN, 2024-2027, CELEBRADA EL DÍA
{{FECHA_HEADER_LETRAS}}

En el Municipio de Tepakán, Yucatán, Estados Unidos Mexicanos, siendo las {{FECHA_Y_HORA_EN_LETRAS}}, estando presentes en la sala de sesiones del Palacio Municipal, los integrantes del H. Ayuntamiento de Tepakán, Yucatán, Estados Unidos Mexicanos y presidiendo la sesión el C. Presidente Municipal, Rogel Ismael Gamboa Castillo, se procede a dar inicio a la {{TIPO_SESION}} de Cabildo, con fundamento en los artículos 30,31,32,33,34,64 y demás relativos de la Ley de Gobierno de los Municipios del Estado de Yucatán, con sujeción al siguiente orden del día:

1.- Lista de asistencia.
2.- Declaración de la existencia del quórum legal e instalación de la sesión.
3.- Aprobación del orden del día.
4.- Lectura de acta anterior.
5.- Asuntos en cartera: {{TEMA_DE_LA_SESION}}
6.- Clausura de la sesión.

En Cumplimiento del Primer Punto, el Secretario Municipal procedió al pase de lista:

{{ASISTENCIA_TABLE}}

Seguidamente, para desahogo del Segundo Punto el C. Presidente Municipal, declaró la existencia del quórum legal para realizar la presente sesión, toda vez que se encuentran todos los regidores presentes que integran el Honorable Cabildo.

Cumpliendo el Tercer Punto, De igual forma, se sometió a consideración y aprobación del Cabildo el orden del día, aprobándose por unanimidad de los Regidores presentes.

Cumplidos los tres primeros puntos del orden del día y como Cuarto Punto, se procedió a dar lectura del acta anterior y en ese punto el Secretario Municipal, C. Miguel Ángel Chi Uicab, propuso se dispense la lectura del acta anterior, toda vez que la misma es conocida por todos quienes en ella intervinieron, poniéndose a consideración del Cabildo, aprobándose por unanimidad de votos de los regidores presentes la dispensa de la lectura del acta anterior.

Expuestos y desahogados los cuatro primeros puntos del orden del día, para dar cumplimiento al Quinto Punto de la sesión, el Presidente Municipal, en uso de la voz, se dirigió a los regidores manifestando:
{{PALABRAS_PRESIDENTE}}
Acto seguido, puso a disposición de los presentes los documentos correspondientes.

Analizada la propuesta por los integrantes del Cabildo y no habiendo observaciones sobre el tema, se sometió a votación, resultando aprobado por UNANIMIDAD de votos de los regidores presentes.

ACUERDOS

{{ACUERDOS}}

Desahogando el punto cinco de la Orden del Día, se procede con el Sexto Punto.

CLAUSURA DE LA SESIÓN.

No habiendo otro asunto por tratar y habiéndose desahogado correctamente y en su totalidad todos los puntos de la Orden del Día y siendo las {{FECHA_Y_HORA_CIERRE_EN_LETRAS}}, se da por clausurada la presente Sesión. Levántese el Acta correspondiente.

Se firma la presente acta para constancia y validez por todos los Regidores que estuvieron presentes. Damos fe.

{{FIRMAS}}
";

/// Passage removed for cuenta pública sessions, whose generated remarks
/// already narrate the document hand-out and the vote.
pub const ACCOUNT_REDUNDANT_PASSAGE: &str = "Acto seguido, puso a disposición de los presentes los documentos correspondientes.\n\nAnalizada la propuesta por los integrantes del Cabildo y no habiendo observaciones sobre el tema, se sometió a votación, resultando aprobado por UNANIMIDAD de votos de los regidores presentes.";

/// Any `{{KEY}}` token, in either case.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{[A-Za-z0-9_]+\}\}").expect("placeholder pattern is valid"));

/// When, and what kind of, session is being recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionDetails {
    pub date: NaiveDate,
    pub opened: NaiveTime,
    pub closed: NaiveTime,
    pub kind: SessionKind,
}

/// Fills every prose placeholder in `template`.
///
/// Date and time placeholders are spelled out from `details`; the subject,
/// the president's remarks and the pre-numbered agreements text drop in
/// verbatim. Matching is case-insensitive, so a hand-edited template with
/// `{{tipo_sesion}}` still fills. The attendance and signature markers are
/// re-emitted untouched for the assembler.
///
/// # Errors
///
/// Returns [`ActaError::UnresolvedPlaceholder`] if any `{{…}}` token other
/// than the two markers survives substitution.
pub fn fill_template(
    template: &str,
    details: &SessionDetails,
    subject: &NonEmptyText,
    remarks: &NonEmptyText,
    agreements: &str,
) -> ActaResult<String> {
    let substitutions = [
        ("TIPO_SESION", details.kind.as_record_str().to_string()),
        (
            "FECHA_HEADER_LETRAS",
            phrase_header_caption(details.date),
        ),
        (
            "FECHA_Y_HORA_EN_LETRAS",
            phrase_clause(details.date, details.opened),
        ),
        (
            "FECHA_Y_HORA_CIERRE_EN_LETRAS",
            phrase_clause(details.date, details.closed),
        ),
        ("TEMA_DE_LA_SESION", subject.as_str().to_string()),
        ("PALABRAS_PRESIDENTE", remarks.as_str().to_string()),
        ("ACUERDOS", agreements.to_string()),
    ];

    let mut filled = template.to_string();
    for (key, value) in &substitutions {
        let pattern =
            Regex::new(&format!(r"(?i)\{{\{{{key}\}}\}}")).expect("substitution pattern is valid");
        filled = pattern
            .replace_all(&filled, regex::NoExpand(value))
            .into_owned();
    }

    for token in PLACEHOLDER.find_iter(&filled) {
        if token.as_str() != ATTENDANCE_MARKER && token.as_str() != SIGNATURE_MARKER {
            return Err(ActaError::UnresolvedPlaceholder(token.as_str().to_string()));
        }
    }

    Ok(filled)
}

/// Numbers a list of agreements into the record's fixed prose form.
///
/// The first five get the traditional "PUNTO UNO" … "PUNTO CINCO" labels;
/// later items fall back to the spelled ordinal. Items are joined by blank
/// lines so each becomes its own paragraph.
pub fn number_agreements(items: &[String]) -> String {
    const LABELS: [&str; 5] = [
        "PUNTO UNO",
        "PUNTO DOS",
        "PUNTO TRES",
        "PUNTO CUATRO",
        "PUNTO CINCO",
    ];

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let label = LABELS
                .get(index)
                .map(|label| (*label).to_string())
                .unwrap_or_else(|| format!("PUNTO {}", spell(index as u32 + 1).to_uppercase()));
            format!("{label}. - {item}")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> SessionDetails {
        SessionDetails {
            date: NaiveDate::from_ymd_opt(2024, 9, 5).expect("valid date"),
            opened: NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"),
            closed: NaiveTime::from_hms_opt(11, 30, 0).expect("valid time"),
            kind: SessionKind::Ordinaria,
        }
    }

    fn text(value: &str) -> NonEmptyText {
        NonEmptyText::new(value).expect("non-empty text")
    }

    #[test]
    fn fills_every_prose_placeholder() {
        let filled = fill_template(
            DEFAULT_TEMPLATE,
            &details(),
            &text("Aprobación del reglamento de mercados."),
            &text("\u{201c}Se presenta el asunto.\u{201d}"),
            "PUNTO UNO. - Se aprueba.",
        )
        .expect("template fills");

        assert!(filled.contains("ACTA DE LA SESIÓN ORDINARIA DE CABILDO."));
        assert!(filled.contains("CINCO DE SEPTIEMBRE DE DOS MIL VEINTICUATRO."));
        assert!(filled.contains("siendo las diez horas del día cinco de septiembre"));
        assert!(filled.contains("once horas con treinta minutos"));
        assert!(filled.contains("Aprobación del reglamento de mercados."));
        assert!(!filled.contains("{{TIPO_SESION}}"));
    }

    #[test]
    fn markers_survive_for_the_assembler() {
        let filled = fill_template(
            DEFAULT_TEMPLATE,
            &details(),
            &text("Asunto."),
            &text("Palabras."),
            "PUNTO UNO. - Acuerdo.",
        )
        .expect("template fills");
        assert!(filled.contains("{{ASISTENCIA_TABLE}}"));
        assert!(filled.contains("{{FIRMAS}}"));
    }

    #[test]
    fn substitution_is_case_insensitive() {
        let filled = fill_template(
            "sesión {{tipo_sesion}} celebrada",
            &details(),
            &text("Asunto."),
            &text("Palabras."),
            "",
        )
        .expect("template fills");
        assert_eq!(filled, "sesión ORDINARIA celebrada");
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let err = fill_template(
            "registro {{DESCONOCIDO}}",
            &details(),
            &text("Asunto."),
            &text("Palabras."),
            "",
        )
        .expect_err("should reject unknown placeholder");
        match err {
            ActaError::UnresolvedPlaceholder(token) => assert_eq!(token, "{{DESCONOCIDO}}"),
            other => panic!("expected UnresolvedPlaceholder, got {other:?}"),
        }
    }

    #[test]
    fn dollar_signs_in_values_are_literal() {
        let filled = fill_template(
            "monto: {{TEMA_DE_LA_SESION}}",
            &details(),
            &text("$1,500.00 MXN"),
            &text("Palabras."),
            "",
        )
        .expect("template fills");
        assert_eq!(filled, "monto: $1,500.00 MXN");
    }

    #[test]
    fn numbers_first_five_agreements_with_fixed_labels() {
        let items: Vec<String> = (1..=6).map(|n| format!("Acuerdo {n}.")).collect();
        let numbered = number_agreements(&items);
        assert!(numbered.starts_with("PUNTO UNO. - Acuerdo 1."));
        assert!(numbered.contains("PUNTO CINCO. - Acuerdo 5."));
        assert!(numbered.contains("PUNTO SEIS. - Acuerdo 6."));
        assert_eq!(numbered.matches("\n\n").count(), 5);
    }

    #[test]
    fn empty_agreement_list_is_empty_text() {
        assert_eq!(number_agreements(&[]), "");
    }

    #[test]
    fn redundant_account_passage_matches_the_default_template() {
        assert!(DEFAULT_TEMPLATE.contains(ACCOUNT_REDUNDANT_PASSAGE));
    }
}
