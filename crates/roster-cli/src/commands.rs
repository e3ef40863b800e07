use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use roster_cli::config::Settings;
use roster_cli::logging::redact_value;
use roster_core::{
    ExportOptions, ImportOutcome, JsonSink, RecordSink, export, import, records_from_json,
    template,
};
use roster_model::EntityKind;
use roster_schema::all_schemas;
use tracing::{info, info_span, trace, warn};

use crate::cli::{ExportArgs, ImportArgs, TemplateArgs};
use crate::summary::{apply_table_style, field_type_label};
use crate::types::{GradingSystemSummary, ImportReport};

pub fn run_schemas() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Entity", "Column", "Type", "Required", "Also accepts"]);
    apply_table_style(&mut table);
    for schema in all_schemas() {
        for column in schema.columns {
            table.add_row(vec![
                schema.kind.to_string(),
                column.header.to_string(),
                field_type_label(column.field_type),
                String::from(if column.required { "yes" } else { "" }),
                column.aliases.join(", "),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}

pub fn run_import(args: &ImportArgs, settings: &Settings) -> Result<ImportReport> {
    let span = info_span!("run_import", entity = %args.entity, file = %args.file.display());
    let _guard = span.enter();
    let start = Instant::now();

    if args.name.is_some() && args.entity != EntityKind::GradingSystem {
        bail!("--name only applies to grading-system imports");
    }

    let bytes =
        fs::read(&args.file).with_context(|| format!("read {}", args.file.display()))?;
    let options = settings.import_options(args.lenient_gender);
    let outcome = import(args.entity, &bytes, &options)
        .with_context(|| format!("import {}", args.file.display()))?;

    for error in &outcome.result.errors {
        trace!(
            row = error.row,
            field = %error.field,
            value = redact_value(error.value.as_deref().unwrap_or_default()),
            "row rejected"
        );
    }

    let json_output = match &args.json {
        Some(path) => {
            write_json(&outcome, path)?;
            Some(path.clone())
        }
        None => None,
    };

    let grading_system = match &args.name {
        Some(name) => assemble_grading_system(outcome.clone(), name),
        None => None,
    };

    info!(
        elapsed_ms = start.elapsed().as_millis(),
        records = outcome.records.len(),
        "import command finished"
    );

    Ok(ImportReport {
        kind: outcome.kind,
        source: args.file.clone(),
        result: outcome.result,
        json_output,
        grading_system,
    })
}

pub fn run_export(args: &ExportArgs, settings: &Settings) -> Result<PathBuf> {
    let json = fs::read_to_string(&args.records)
        .with_context(|| format!("read {}", args.records.display()))?;
    let records = records_from_json(&json)
        .with_context(|| format!("parse records in {}", args.records.display()))?;
    let file = export(args.entity, &records, &ExportOptions::default())
        .with_context(|| format!("export {}", args.entity.label()))?;
    let dir = settings.output_dir(args.output_dir.as_deref());
    let path = file.write_to(&dir).context("write export")?;
    info!(records = records.len(), path = %path.display(), "export command finished");
    Ok(path)
}

pub fn run_template(args: &TemplateArgs, settings: &Settings) -> Result<PathBuf> {
    let file = template(args.entity)
        .with_context(|| format!("build {} template", args.entity.label()))?;
    let dir = settings.output_dir(args.output_dir.as_deref());
    file.write_to(&dir).context("write template")
}

fn write_json(outcome: &ImportOutcome, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut sink = JsonSink::new(BufWriter::new(file));
    sink.accept(outcome.kind, &outcome.records)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Assembly fails on overlapping bands, which are already in the error list.
fn assemble_grading_system(outcome: ImportOutcome, name: &str) -> Option<GradingSystemSummary> {
    match outcome.into_grading_system(name) {
        Ok(system) => Some(GradingSystemSummary {
            name: system.name().to_string(),
            bands: system.ranges().len(),
        }),
        Err(error) => {
            warn!(%error, "grading system not assembled");
            None
        }
    }
}
