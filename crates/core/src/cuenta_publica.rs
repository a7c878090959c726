//! Monthly public-account session content.
//!
//! The cuenta pública session recurs every month with fixed prose, so its
//! subject, president's remarks and agreements are generated rather than
//! drafted. Quarter-closing months also report the trimester; December adds
//! the annual report.

use crate::constants::MONTHS;
use crate::error::{ActaError, ActaResult};

/// Generated prose for one monthly public-account session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountContent {
    pub subject: String,
    pub remarks: String,
    pub agreements: String,
}

/// Capitalized month triads named by the quarterly report.
fn trimester(month_num: usize) -> Option<&'static str> {
    match month_num {
        3 => Some("Enero, Febrero y Marzo"),
        6 => Some("Abril, Mayo y Junio"),
        9 => Some("Julio, Agosto y Septiembre"),
        12 => Some("Octubre, Noviembre y Diciembre"),
        _ => None,
    }
}

/// Voting-outcome label for the given head-count, uppercase and lowercase.
fn voting_labels(present: usize, total: usize) -> (&'static str, &'static str) {
    if present == total {
        ("UNANIMIDAD", "unanimidad")
    } else if present >= 4 {
        ("MAYORÍA CALIFICADA", "mayoría calificada")
    } else if present >= 3 {
        ("MAYORÍA ABSOLUTA", "mayoría absoluta")
    } else {
        ("MAYORÍA", "mayoría")
    }
}

/// Generates the subject, remarks and agreements for the monthly
/// public-account session.
///
/// # Arguments
///
/// * `month_index` - Zero-based month of the reported account
/// * `year` - Calendar year of the reported account
/// * `present` - Attendees marked as present
/// * `total` - Council size the vote is measured against
///
/// # Errors
///
/// Returns [`ActaError::InvalidInput`] if `month_index` is not below 12.
pub fn monthly_account_content(
    month_index: usize,
    year: u32,
    present: usize,
    total: usize,
) -> ActaResult<AccountContent> {
    let Some(month) = MONTHS.get(month_index) else {
        return Err(ActaError::InvalidInput(format!(
            "month index out of range: {month_index}"
        )));
    };
    let month_upper = month.to_uppercase();
    let (label_upper, label_lower) = voting_labels(present, total);

    let mut subject = format!(
        "Presentación y aprobación del Informe Mensual de la Cuenta Pública y en su caso la \
         modificación al Presupuesto de Egresos correspondiente al mes de {month_upper} de \
         {year} del H. Ayuntamiento de Tepakán, Yucatán."
    );

    let month_num = month_index + 1;
    if let Some(months) = trimester(month_num) {
        subject = subject.replacen(
            " del H. ",
            &format!(" y el Informe Trimestral correspondiente a los meses de {months} del H. "),
            1,
        );
        if month_num == 12 {
            subject = subject.replacen(" del H. ", " y el Informe Anual del H. ", 1);
        }
    }

    let agreements = format!(
        "PUNTO UNO. - Se aprueba por {label_lower} la Cuenta Pública, la modificación al \
         Presupuesto de Egresos del mes de {month} de {year} del H. Ayuntamiento de Tepakán, \
         Yucatán.\n\nPUNTO DOS. \u{2013} Remítase el Informe Mensual correspondiente al mes de \
         {month} de {year} a la Auditoría Superior del Estado de Yucatán."
    );

    let remarks = format!(
        "\u{201c}presento para su análisis, la Cuenta Pública Documentada y en su caso la \
         modificación del Presupuesto de Egresos correspondiente al mes de {month_upper} de \
         {year} del H. Ayuntamiento de Tepakán, Yucatán. Acto seguido puso a disposición de los \
         presentes los documentos correspondientes y explicó la situación y como se encuentra \
         integrado.\nUna vez analizados por los integrantes del H. Cabildo de Tepakán, Yucatán, \
         el presidente Municipal, en uso de la voz preguntó a los regidores \u{201c}¿Hay alguna \
         duda sobre los documentos presentados?\u{201d}, a lo que los regidores respondieron que \
         \u{201c}No\u{201d} y solicitó que los Regidores que Estén de acuerdo que se Apruebe el \
         Otorgamiento del Documento mencionado levanten la mano. Levantándola {present} de los \
         {total} regidores presentes, quedando así aprobada por {label_upper}.\u{201d}"
    );

    Ok(AccountContent {
        subject,
        remarks,
        agreements,
    })
}
