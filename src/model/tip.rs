use crate::format::format_currency;
use crate::model::locale::CurrencyFormat;

/// Used when the percent field is absent or does not parse.
const DEFAULT_TIP_PERCENT: f64 = 15.0;

/// One snapshot of the three input fields, taken as entered. Built fresh for
/// every evaluation and discarded after producing a result.
pub struct TipRequest {
    pub bill_amount_text: String,
    pub tip_percent_text: Option<String>,
    pub round_up: Option<bool>,
}

impl TipRequest {
    pub fn new(
        bill_amount_text: String,
        tip_percent_text: Option<String>,
        round_up: Option<bool>,
    ) -> TipRequest {
        TipRequest {
            bill_amount_text,
            tip_percent_text,
            round_up,
        }
    }

    /// Malformed or empty input degrades to zero, never to an error.
    pub fn bill_amount(&self) -> f64 {
        self.bill_amount_text.trim().parse().unwrap_or(0.0)
    }

    pub fn tip_percent(&self) -> f64 {
        self.tip_percent_text
            .as_deref()
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(DEFAULT_TIP_PERCENT)
    }

    pub fn round_up(&self) -> bool {
        self.round_up.unwrap_or(false)
    }

    pub fn evaluate(&self) -> f64 {
        let mut tip = self.tip_percent() / 100.0 * self.bill_amount();
        if self.round_up() {
            // Only ever up to the next whole unit, never to nearest
            tip = tip.ceil();
        }
        tip
    }
}

/// Calculates the tip from the raw field contents and formats it according
/// to the given currency conventions. Example result: "$10.00".
pub fn compute_tip(
    bill_amount_text: &str,
    tip_percent_text: Option<&str>,
    round_up: Option<bool>,
    format: &CurrencyFormat,
) -> String {
    let request = TipRequest::new(
        bill_amount_text.to_string(),
        tip_percent_text.map(str::to_string),
        round_up,
    );

    format_currency(request.evaluate(), format)
}

#[cfg(test)]
mod test {
    use super::*;

    fn dollars() -> CurrencyFormat {
        CurrencyFormat::us_dollars()
    }

    #[test]
    fn test_fifteen_percent() {
        assert_eq!("$15.00", compute_tip("100", Some("15"), Some(false), &dollars()));
    }

    #[test]
    fn test_round_up_is_noop_on_whole_amounts() {
        assert_eq!("$15.00", compute_tip("100", Some("15"), Some(true), &dollars()));
    }

    #[test]
    fn test_round_up_takes_ceiling() {
        assert_eq!("$19.00", compute_tip("100", Some("18.5"), Some(true), &dollars()));
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!("$0.00", compute_tip("", Some(""), Some(false), &dollars()));
    }

    #[test]
    fn test_absent_percent_defaults_to_fifteen() {
        assert_eq!("$7.50", compute_tip("50", None, None, &dollars()));
    }

    #[test]
    fn test_unparsable_bill_amount_is_zero() {
        assert_eq!("$0.00", compute_tip("abc", Some("20"), Some(false), &dollars()));
    }

    #[test]
    fn test_unparsable_percent_defaults_to_fifteen() {
        assert_eq!("$15.00", compute_tip("100", Some("lots"), Some(false), &dollars()));
    }

    #[test]
    fn test_negative_bill_amount_flows_through() {
        assert_eq!("-$2.00", compute_tip("-10", Some("20"), Some(false), &dollars()));
    }

    #[test]
    fn test_rounding_up_never_decreases_the_tip() {
        for bill in ["0", "1", "19.99", "100", "12345.67"] {
            for percent in ["0", "5", "15", "18.5", "200"] {
                let rounded = TipRequest::new(
                    bill.to_string(),
                    Some(percent.to_string()),
                    Some(true),
                )
                .evaluate();
                let plain = TipRequest::new(
                    bill.to_string(),
                    Some(percent.to_string()),
                    Some(false),
                )
                .evaluate();

                assert!(rounded >= plain, "{bill} at {percent}%");
            }
        }
    }

    #[test]
    fn test_identical_inputs_give_identical_output() {
        let first = compute_tip("72.30", Some("18"), Some(true), &dollars());
        let second = compute_tip("72.30", Some("18"), Some(true), &dollars());

        assert_eq!(first, second);
    }
}
