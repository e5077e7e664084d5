use crate::model::Roster;
use crate::table::Columns;
use anyhow::Context;
use csv::WriterBuilder;
use std::fs;
use std::path::Path;

/// Charge un effectif JSON puis le valide.
pub fn load_roster_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Roster> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let roster: Roster = serde_json::from_slice(&data)
        .with_context(|| format!("parsing roster {}", path.display()))?;
    roster
        .validate()
        .with_context(|| format!("validating roster {}", path.display()))?;
    Ok(roster)
}

/// Export JSON de l'effectif, relisible par `load_roster_json`.
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(roster).context("serializing roster")?;
    fs::write(path, json).with_context(|| format!("writing roster {}", path.display()))
}

/// Export CSV d'une projection : en-tête = libellés, puis une ligne par enregistrement.
pub fn write_projection_csv<W, T>(
    writer: W,
    columns: &Columns<'_, T>,
    rows: &[&T],
) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    let mut w = WriterBuilder::new().has_headers(true).from_writer(writer);
    w.write_record(columns.labels())?;
    for row in rows {
        let cells: Vec<String> = columns
            .row_values(row)
            .iter()
            .map(ToString::to_string)
            .collect();
        w.write_record(&cells)?;
    }
    w.flush()?;
    Ok(())
}
