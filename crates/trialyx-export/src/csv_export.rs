//! CSV export with the fixed v1 header `ID,Título,Estado,Fase`.

use trialyx_common::{RegistryError, Result};
use trialyx_registry::models::TrialSummary;

pub const CSV_HEADER: [&str; 4] = ["ID", "Título", "Estado", "Fase"];

pub fn trials_csv(trials: &[TrialSummary]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| RegistryError::Export(e.to_string()))?;
    for trial in trials {
        writer
            .write_record([&trial.identifier, &trial.title, &trial.status, &trial.phase])
            .map_err(|e| RegistryError::Export(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| RegistryError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn trial(i: usize) -> TrialSummary {
        TrialSummary {
            identifier: format!("NCT000{}", i),
            title: format!("Ensayo simulado {}", i),
            status: "En curso".into(),
            phase: "3".into(),
            location: "Desconocida".into(),
        }
    }

    #[test]
    fn csv_starts_with_fixed_header() {
        let bytes = trials_csv(&[trial(1), trial(2)]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ID,Título,Estado,Fase"));
        assert_eq!(lines.next(), Some("NCT0001,Ensayo simulado 1,En curso,3"));
        assert_eq!(lines.next(), Some("NCT0002,Ensayo simulado 2,En curso,3"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_result_set_is_header_only() {
        let bytes = trials_csv(&[]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "ID,Título,Estado,Fase\n");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        let mut t = trial(1);
        t.title = "Ensayo, fase tardía".into();
        let bytes = trials_csv(&[t]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\"Ensayo, fase tardía\""));
    }
}
