use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use dataviz_constants::config::{OutputConfig, OutputFormat};
use dataviz_constants::registry::{ConstantEntry, Literal};
use dataviz_constants::DvResult;
use std::io::Write;

pub fn write_entries<W: Write>(
    out: &mut W,
    entries: &[ConstantEntry],
    config: &OutputConfig,
) -> DvResult<()> {
    match config.format {
        OutputFormat::Table => write_table(out, entries, config.no_header),
        OutputFormat::Json => write_json(out, entries),
        OutputFormat::Csv => write_csv(out, entries, config.no_header),
    }
}

fn write_table<W: Write>(out: &mut W, entries: &[ConstantEntry], no_header: bool) -> DvResult<()> {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    if !no_header {
        table.set_header(vec![
            Cell::new("Group").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);
    }

    for e in entries {
        // Booleans right-aligned so they stand apart from string literals.
        let align = match e.value {
            Literal::Bool(_) => CellAlignment::Right,
            Literal::Str(_) => CellAlignment::Left,
        };
        table.add_row(vec![
            Cell::new(e.group),
            Cell::new(e.name),
            Cell::new(e.value).set_alignment(align),
        ]);
    }

    writeln!(out, "{}", table)?;
    Ok(())
}

fn write_json<W: Write>(out: &mut W, entries: &[ConstantEntry]) -> DvResult<()> {
    serde_json::to_writer_pretty(&mut *out, entries)?;
    writeln!(out)?;
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, entries: &[ConstantEntry], no_header: bool) -> DvResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    if !no_header {
        wtr.write_record(["group", "name", "value"])?;
    }
    for e in entries {
        wtr.write_record([e.group.to_string(), e.name.to_string(), e.value.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
