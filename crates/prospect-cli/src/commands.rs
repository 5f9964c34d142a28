//! Subcommand implementations.

use anyhow::{Context, bail};
use indicatif::{ProgressBar, ProgressStyle};

use prospect_import::{ImportOptions, ManyreachClient, apply_mapping, partition, run_import};
use prospect_ingest::decode_file;
use prospect_map::scan_table;
use prospect_model::{ColumnMapping, ProspectField};

use crate::cli::{ImportArgs, InspectArgs};
use crate::logging::redact_value;
use crate::summary::{print_fields, print_import_summary, print_scan};

pub fn run_inspect(args: &InspectArgs) -> anyhow::Result<()> {
    let table = decode_file(&args.file)?;
    let scan = scan_table(&table);
    print_scan(&scan, table.headers());
    Ok(())
}

pub fn run_fields() {
    print_fields();
}

pub async fn run_import_command(args: &ImportArgs) -> anyhow::Result<()> {
    let table = decode_file(&args.file)?;
    let scan = scan_table(&table);

    let mut mapping = scan.mapping.clone();
    apply_overrides(&mut mapping, &args.map, table.headers())?;
    if mapping.header_for(ProspectField::Email).is_none() {
        bail!(
            "no email column was found in {}; bind one with --map email=COLUMN",
            args.file.display()
        );
    }

    let prospects = apply_mapping(&table, &mapping);
    let dropped = table.row_count() - prospects.len();
    if prospects.is_empty() {
        bail!("no rows with a valid email to import ({dropped} rows dropped)");
    }
    tracing::debug!(
        first_email = redact_value(&prospects[0].email),
        prospects = prospects.len(),
        dropped,
        "mapping applied"
    );

    let total_batches = partition(&prospects, args.batch_size).len();
    if args.dry_run {
        println!(
            "Would import {} prospects into list {} in {} batch(es) of up to {}; {} rows dropped.",
            prospects.len(),
            args.list_id,
            total_batches,
            args.batch_size,
            dropped
        );
        return Ok(());
    }

    if args.api_key.is_empty() {
        bail!("an API key is required; pass --api-key or set PROSPECT_API_KEY");
    }
    let client = ManyreachClient::new(&args.api_url, &args.api_key);
    let options = ImportOptions {
        list_id: args.list_id,
        campaign_id: args.campaign_id,
        add_only_if_new: args.add_only_if_new,
        not_in_other_campaign: args.not_in_other_campaign,
    };

    let bar = ProgressBar::new(total_batches as u64).with_style(
        ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} batches {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    let mut last_percent = 0u8;
    let result = run_import(&client, &prospects, &options, args.batch_size, |event| {
        last_percent = event.percent;
        bar.set_position(event.batches_completed as u64);
        bar.set_message(format!("{}%", event.percent));
    })
    .await;

    match result {
        Ok(summary) => {
            bar.finish_and_clear();
            print_import_summary(&summary, prospects.len(), dropped);
            Ok(())
        }
        Err(error) => {
            bar.abandon();
            Err(anyhow::Error::new(error)
                .context(format!("import failed at {last_percent}% complete")))
        }
    }
}

/// Applies `--map field=Column` overrides to the inferred mapping.
///
/// An override replaces the inferred binding for that field; binding a field
/// to a column another field already holds is allowed (an edited mapping is
/// taken as given). An empty column unbinds the field.
fn apply_overrides(
    mapping: &mut ColumnMapping,
    overrides: &[String],
    headers: &[String],
) -> anyhow::Result<()> {
    for entry in overrides {
        let (field_raw, column) = entry
            .split_once('=')
            .with_context(|| format!("invalid --map '{entry}': expected FIELD=COLUMN"))?;
        let field: ProspectField = field_raw
            .trim()
            .parse()
            .with_context(|| format!("invalid --map '{entry}'"))?;
        let column = column.trim();
        if column.is_empty() {
            mapping.unbind(field);
            continue;
        }
        if !headers.iter().any(|header| header == column) {
            bail!(
                "--map {field}={column}: column '{column}' does not exist in the file \
                 (headers: {})",
                headers.join(", ")
            );
        }
        mapping.bind(field, column);
    }
    Ok(())
}
