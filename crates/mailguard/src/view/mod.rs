//! Report rendering.
//!
//! Every renderer writes to an [`std::io::Write`] in either text or JSON
//! form, so stdout stays the only place reports go.

mod analysis;
mod records;

pub use analysis::{write_analysis, write_result, write_summary};
pub use records::{write_list, write_preview, write_record};

use std::io::Write;

use serde::Serialize;

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
