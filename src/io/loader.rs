//! CSV ingestion of lead tables.
//!
//! Headers are matched after trimming, against the canonical dashboard names
//! first and then the short snake-case names. The spend column also accepts
//! the `Total_Spend (INR)` alias when the canonical name is absent. Missing
//! required columns are reported together, before any row is read.

use crate::core::{Disposition, Error, Lead, LeadState, LeadTable, Result};
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Lead table columns, in canonical header order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    LeadId,
    Disposition,
    State,
    AttemptedCalls,
    ConnectedCalls,
    Spend,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::LeadId,
        Column::Disposition,
        Column::State,
        Column::AttemptedCalls,
        Column::ConnectedCalls,
        Column::Spend,
    ];

    pub fn canonical(&self) -> &'static str {
        match self {
            Self::LeadId => "Lead_ID",
            Self::Disposition => "Lead_Entity_Disposition",
            Self::State => "Lead_State",
            Self::AttemptedCalls => "AI_Attempted_Calls",
            Self::ConnectedCalls => "AI_Connected_Calls",
            Self::Spend => "Total_Spend_INR",
        }
    }

    /// Accepted header names, highest precedence first
    pub fn accepted_names(&self) -> &'static [&'static str] {
        match self {
            Self::LeadId => &["Lead_ID", "lead_id"],
            Self::Disposition => &["Lead_Entity_Disposition", "disposition"],
            Self::State => &["Lead_State", "state"],
            Self::AttemptedCalls => &["AI_Attempted_Calls", "attempted_calls"],
            Self::ConnectedCalls => &["AI_Connected_Calls", "connected_calls"],
            Self::Spend => &["Total_Spend_INR", "spend", "Total_Spend (INR)"],
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::LeadId)
    }
}

/// Header positions resolved for one input
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    lead_id: Option<usize>,
    disposition: usize,
    state: usize,
    attempted: usize,
    connected: usize,
    spend: usize,
}

fn find_column(headers: &StringRecord, column: Column) -> Option<(usize, &'static str)> {
    column.accepted_names().iter().find_map(|name| {
        headers
            .iter()
            .position(|header| header.trim() == *name)
            .map(|index| (index, *name))
    })
}

fn resolve_columns(headers: &StringRecord) -> Result<ColumnMap> {
    let mut found = [None; 6];
    let mut missing = Vec::new();

    for (slot, column) in found.iter_mut().zip(Column::ALL) {
        match find_column(headers, column) {
            Some((index, name)) => {
                if column == Column::Spend && name == "Total_Spend (INR)" {
                    log::info!("Normalised spend column alias '{}'", name);
                }
                *slot = Some(index);
            }
            None if column.is_required() => missing.push(column.canonical()),
            None => {}
        }
    }

    match found {
        [lead_id, Some(disposition), Some(state), Some(attempted), Some(connected), Some(spend)] => {
            Ok(ColumnMap {
                lead_id,
                disposition,
                state,
                attempted,
                connected,
                spend,
            })
        }
        _ => Err(Error::missing_columns(missing)),
    }
}

fn cell(record: &StringRecord, index: usize) -> &str {
    record.get(index).map(str::trim).unwrap_or("")
}

/// Non-negative integer cell; whole-valued decimals such as `3.0` are accepted
fn parse_count(column: Column, row: usize, raw: &str) -> Result<u32> {
    if let Ok(value) = raw.parse::<u32>() {
        return Ok(value);
    }
    match raw.parse::<f64>() {
        Ok(value)
            if value.is_finite()
                && value >= 0.0
                && value.fract() == 0.0
                && value <= f64::from(u32::MAX) =>
        {
            Ok(value as u32)
        }
        _ => Err(Error::schema(
            column.canonical(),
            row,
            raw,
            "a non-negative integer",
        )),
    }
}

fn parse_spend(row: usize, raw: &str) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(Error::schema(
            Column::Spend.canonical(),
            row,
            raw,
            "a non-negative number",
        )),
    }
}

fn parse_lead(record: &StringRecord, columns: &ColumnMap, index: usize) -> Result<Lead> {
    // 1-based data row, header excluded
    let row = index + 1;
    let lead_id = columns
        .lead_id
        .map(|i| cell(record, i))
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| synthetic_lead_id(index));

    Ok(Lead {
        lead_id,
        disposition: Disposition::parse(cell(record, columns.disposition)),
        state: LeadState::parse(cell(record, columns.state)),
        attempted_calls: parse_count(
            Column::AttemptedCalls,
            row,
            cell(record, columns.attempted),
        )?,
        connected_calls: parse_count(
            Column::ConnectedCalls,
            row,
            cell(record, columns.connected),
        )?,
        spend: parse_spend(row, cell(record, columns.spend))?,
    })
}

/// Identifier given to rows without a lead id
pub fn synthetic_lead_id(index: usize) -> String {
    format!("L{}", 10000 + index)
}

/// Read a lead table from CSV.
///
/// Fails with [`Error::MissingColumns`] before reading rows, with
/// [`Error::Schema`] on the first malformed numeric cell, and with
/// [`Error::EmptyInput`] when there are no data rows.
pub fn read_leads_csv<R: Read>(reader: R) -> Result<LeadTable> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&headers)?;

    let mut leads = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        leads.push(parse_lead(&record, &columns, index)?);
    }

    if leads.is_empty() {
        return Err(Error::EmptyInput);
    }

    let inconsistent = leads
        .iter()
        .filter(|lead| lead.connected_calls > lead.attempted_calls)
        .count();
    if inconsistent > 0 {
        log::warn!(
            "{} leads report more connected than attempted calls",
            inconsistent
        );
    }

    Ok(LeadTable::new(leads))
}

pub fn load_leads_csv(path: &Path) -> Result<LeadTable> {
    let file = File::open(path)?;
    let table = read_leads_csv(file)?;
    log::info!("Loaded {} leads from {}", table.len(), path.display());
    Ok(table)
}

/// Write a lead table as CSV with canonical headers
pub fn write_leads_csv<W: Write>(writer: W, table: &LeadTable) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(Column::ALL.iter().map(Column::canonical))?;
    for lead in table {
        writer.write_record([
            lead.lead_id.clone(),
            lead.disposition.to_string(),
            lead.state.to_string(),
            lead.attempted_calls.to_string(),
            lead.connected_calls.to_string(),
            format!("{:.2}", lead.spend),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn export_leads_csv(path: &Path, table: &LeadTable) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    write_leads_csv(File::create(path)?, table)?;
    log::info!("Exported {} leads to {}", table.len(), path.display());
    Ok(())
}
