use anyhow::{Context, Result};
use twilight_analysis::palindrome::longest_complement_palindromes;
use twilight_sim::io::read_single_fasta;

use crate::args::PalindromeArgs;
use crate::utils::write_output;

pub fn find_palindromes(args: &PalindromeArgs) -> Result<()> {
    let record = read_single_fasta(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let palindromes = longest_complement_palindromes(record.sequence.as_slice(), args.top);

    let content = match args.output.format.as_str() {
        "pretty" => {
            let mut content = format!(
                "\n🔁 Longest complementary palindromes in {} ({} bp)\n",
                record.id,
                record.sequence.len()
            );
            if palindromes.is_empty() {
                content.push_str("  No complementary palindromes found.\n");
            }
            for (i, p) in palindromes.iter().enumerate() {
                content.push_str(&format!(
                    "#{} | Length: {} bp | Start: {} | End: {} | {}\n",
                    i + 1,
                    p.length,
                    p.start,
                    p.end,
                    p.sequence
                ));
            }
            content
        }
        "json" => format!("{}\n", serde_json::to_string_pretty(&palindromes)?),
        "csv" => {
            let mut csv = String::from("rank,length,start,end,sequence\n");
            for (i, p) in palindromes.iter().enumerate() {
                csv.push_str(&format!(
                    "{},{},{},{},{}\n",
                    i + 1,
                    p.length,
                    p.start,
                    p.end,
                    p.sequence
                ));
            }
            csv
        }
        other => anyhow::bail!("Unknown format '{other}'. Use: pretty, json, or csv"),
    };

    write_output(&content, args.output.output.as_ref())
}
