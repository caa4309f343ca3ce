use crate::model::locale::CurrencyFormat;
use crate::model::tip::compute_tip;

/// One change to an input field. This is the CLI stand-in for a keystroke or
/// switch toggle: every edit replaces a whole field and triggers one full
/// re-evaluation.
#[derive(Debug, PartialEq)]
pub enum Edit {
    Bill(String),
    Percent(String),
    RoundUp(bool),
    Clear,
}

impl Edit {
    pub fn parse(line: &str) -> Option<Edit> {
        let mut words = line.splitn(2, char::is_whitespace);
        let command = words.next()?;
        let rest = words.next().unwrap_or("").trim();

        match command {
            "bill" => Some(Edit::Bill(rest.to_string())),
            "percent" => Some(Edit::Percent(rest.to_string())),
            "round" => match rest {
                "on" => Some(Edit::RoundUp(true)),
                "off" => Some(Edit::RoundUp(false)),
                _ => None,
            },
            "clear" => Some(Edit::Clear),
            _ => None,
        }
    }
}

/// Current snapshot of the three input fields. Each applied edit updates the
/// snapshot and recomputes, so the rendered tip always reflects the latest
/// values.
pub struct Session {
    format: CurrencyFormat,
    bill_amount_text: String,
    tip_percent_text: Option<String>,
    round_up: Option<bool>,
}

impl Session {
    pub fn new(format: CurrencyFormat) -> Session {
        Session {
            format,
            bill_amount_text: String::new(),
            tip_percent_text: None,
            round_up: None,
        }
    }

    pub fn apply(&mut self, edit: Edit) -> String {
        match edit {
            Edit::Bill(text) => self.bill_amount_text = text,
            Edit::Percent(text) => self.tip_percent_text = Some(text),
            Edit::RoundUp(round_up) => self.round_up = Some(round_up),
            Edit::Clear => {
                self.bill_amount_text = String::new();
                self.tip_percent_text = None;
                self.round_up = None;
            }
        }

        self.render()
    }

    pub fn render(&self) -> String {
        compute_tip(
            &self.bill_amount_text,
            self.tip_percent_text.as_deref(),
            self.round_up,
            &self.format,
        )
    }
}
