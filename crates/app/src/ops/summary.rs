use std::fmt;

use common::prelude::PredictionResponse;

/// Human-readable rendering of a decoded prediction
pub struct Summary<'a>(pub &'a PredictionResponse);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let response = self.0;

        if response.is_grouped() {
            let instruments = response.instruments();
            writeln!(f, "Shape: instruments ({})", instruments.len())?;
            for (idx, instrument) in instruments.iter().enumerate() {
                writeln!(
                    f,
                    "  [{}] program {:>3}{} - {} - {} note(s)",
                    idx,
                    instrument.program,
                    if instrument.is_drum { " (drums)" } else { "" },
                    instrument.name.as_deref().unwrap_or("unnamed"),
                    instrument.notes.len()
                )?;
            }
        } else {
            writeln!(f, "Shape: notes")?;
        }

        let span = response
            .notes()
            .map(|n| n.end)
            .fold(None, |acc: Option<f64>, end| Some(acc.map_or(end, |a| a.max(end))));

        match span {
            Some(end) => write!(
                f,
                "Total: {} note(s), last offset {:.3}s",
                response.note_count(),
                end
            ),
            None => write!(f, "Total: 0 note(s)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_summary() {
        let response = common::prelude::decode(
            br#"{"notes":[
                {"pitch":60,"start":0.0,"end":1.5,"velocity":90},
                {"pitch":62,"start":1.5,"end":2.25,"velocity":90}
            ]}"#,
        )
        .unwrap();

        let text = Summary(&response).to_string();
        assert_eq!(text, "Shape: notes\nTotal: 2 note(s), last offset 2.250s");
    }

    #[test]
    fn test_grouped_summary() {
        let response = common::prelude::decode(
            br#"{"instruments":[
                {"name":"Bass","program":33,"is_drum":false,"notes":[]},
                {"program":0,"is_drum":true,"notes":[]}
            ]}"#,
        )
        .unwrap();

        let text = Summary(&response).to_string();
        assert_eq!(
            text,
            "Shape: instruments (2)\n  \
             [0] program  33 - Bass - 0 note(s)\n  \
             [1] program   0 (drums) - unnamed - 0 note(s)\n\
             Total: 0 note(s)"
        );
    }
}
