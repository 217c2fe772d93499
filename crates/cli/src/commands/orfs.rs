use anyhow::{Context, Result};
use serde::Serialize;
use twilight_analysis::orf::{self, rank_by_gc, Orf};
use twilight_sim::io::read_single_fasta;

use crate::args::OrfArgs;
use crate::utils::write_output;

#[derive(Serialize)]
struct OrfOutput<'a> {
    total: usize,
    highest_gc: &'a [Orf],
    lowest_gc: &'a [Orf],
}

fn format_orf_block(title: &str, orfs: &[Orf]) -> String {
    let mut out = format!("\n=== {title} ===\n");
    for (i, orf) in orfs.iter().enumerate() {
        out.push_str(&format!(
            "#{} | Length: {} bp | GC: {:.2}% | Strand: {} | Frame: {}\n",
            i + 1,
            orf.length,
            orf.gc_percent,
            orf.strand,
            orf.frame
        ));
        out.push_str(&format!("    Sequence: {}\n", orf.sequence));
    }
    out
}

pub fn find_orfs(args: &OrfArgs) -> Result<()> {
    let record = read_single_fasta(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let mut orfs = orf::find_orfs(record.sequence.as_slice(), args.min_length);
    rank_by_gc(&mut orfs);

    let top = args.top.min(orfs.len());
    let highest = &orfs[..top];
    let lowest = &orfs[orfs.len() - top..];

    let content = match args.output.format.as_str() {
        "pretty" => {
            let mut content = format!(
                "--- ORF analysis for {} ({} ORFs >= {} nt) ---\n",
                args.input.display(),
                orfs.len(),
                args.min_length
            );
            content.push_str(&format_orf_block(&format!("Top {top} highest GC"), highest));
            content.push_str(&format_orf_block(&format!("Top {top} lowest GC"), lowest));
            content
        }
        "json" => {
            let out = OrfOutput {
                total: orfs.len(),
                highest_gc: highest,
                lowest_gc: lowest,
            };
            format!("{}\n", serde_json::to_string_pretty(&out)?)
        }
        "csv" => {
            let mut csv = String::from("rank,strand,frame,start,end,length,gc_percent,sequence\n");
            for (i, o) in orfs.iter().enumerate() {
                csv.push_str(&format!(
                    "{},{},{},{},{},{},{:.4},{}\n",
                    i + 1,
                    o.strand,
                    o.frame,
                    o.start,
                    o.end,
                    o.length,
                    o.gc_percent,
                    o.sequence
                ));
            }
            csv
        }
        other => anyhow::bail!("Unknown format '{other}'. Use: pretty, json, or csv"),
    };

    write_output(&content, args.output.output.as_ref())
}
