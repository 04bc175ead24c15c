use crate::CliError;
use folio_core::ports::SnapshotRepository as _;
use folio_solver::io::Portfolio;
use folio_sqlite::{Db, types::SnapshotId};
use std::io::Write;
use time::OffsetDateTime;

// The store handle is opened by the caller and passed in; nothing here holds a
// connection beyond the call.

pub async fn sync(db: &Db, portfolio: &Portfolio, buffer: &mut impl Write) -> anyhow::Result<()> {
    let id = db
        .save_snapshot(&portfolio.0, OffsetDateTime::now_utc())
        .await?;
    writeln!(buffer, "{id}")?;
    Ok(())
}

pub async fn show(db: &Db, id: i64, buffer: &mut impl Write) -> anyhow::Result<()> {
    let snapshot = db
        .get_snapshot(SnapshotId::from(id))
        .await?
        .ok_or(CliError::SnapshotNotFound(id))?;
    serde_json::to_writer_pretty(&mut *buffer, &snapshot)?;
    writeln!(buffer)?;
    Ok(())
}
