//! Formal date and time phrasing for the record text.
//!
//! Dates arrive as civil dates (`NaiveDate`/`NaiveTime`): the caller has
//! already resolved which calendar day the session belongs to, so no
//! timezone arithmetic happens here and a day can never shift during
//! composition.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::constants::MONTHS;
use crate::numerals::spell;

/// Spells a date and time as the formal opening/closing clause.
///
/// Shape: `"<hora> hora(s)[ con <minutos> minutos] del día <día> de <mes>
/// de <año>"`. "hora" is singular only for one o'clock; the minutes clause
/// is omitted entirely on the round hour.
///
/// # Arguments
///
/// * `date` - Civil date of the session
/// * `time` - Wall-clock time being phrased
pub fn phrase_clause(date: NaiveDate, time: NaiveTime) -> String {
    let hour = time.hour();
    let minute = time.minute();

    let hour_word = if hour == 1 { "hora" } else { "horas" };
    let minutes_clause = if minute > 0 {
        format!(" con {} minutos", spell(minute))
    } else {
        String::new()
    };

    format!(
        "{} {}{} del día {} de {} de {}",
        spell(hour),
        hour_word,
        minutes_clause,
        spell(date.day()),
        month_name(date),
        spell(date.year() as u32),
    )
}

/// Spells a date as the uppercase page-header caption.
///
/// Shape: `"<DÍA> DE <MES> DE <AÑO>."`, all tokens uppercased, exactly one
/// trailing period and no time component.
pub fn phrase_header_caption(date: NaiveDate) -> String {
    format!(
        "{} DE {} DE {}.",
        spell_upper(date.day()),
        month_name(date).to_uppercase(),
        spell_upper(date.year() as u32),
    )
}

fn month_name(date: NaiveDate) -> &'static str {
    MONTHS[date.month0() as usize]
}

fn spell_upper(n: u32) -> String {
    spell(n).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
    }

    #[test]
    fn clause_spells_full_date_and_time() {
        let clause = phrase_clause(date(2024, 9, 5), time(10, 30));
        assert_eq!(
            clause,
            "diez horas con treinta minutos del día cinco de septiembre de dos mil veinticuatro"
        );
    }

    #[test]
    fn clause_omits_minutes_on_the_round_hour() {
        let clause = phrase_clause(date(2024, 9, 5), time(10, 0));
        assert_eq!(
            clause,
            "diez horas del día cinco de septiembre de dos mil veinticuatro"
        );
    }

    #[test]
    fn clause_uses_singular_hora_for_one() {
        let clause = phrase_clause(date(2025, 1, 2), time(1, 15));
        assert!(clause.starts_with("uno hora con quince minutos del día"));
    }

    #[test]
    fn header_caption_is_uppercase_with_one_period() {
        let caption = phrase_header_caption(date(2024, 12, 31));
        assert_eq!(
            caption,
            "TREINTA Y UNO DE DICIEMBRE DE DOS MIL VEINTICUATRO."
        );
        assert_eq!(caption.matches('.').count(), 1);
    }
}
