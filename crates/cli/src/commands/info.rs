//! CLI handler for the `info` command.

use crate::cli::OutputFormat;
use anyhow::Result;
use langpick_intelligence::{language_info, Industry, Language};

/// Handle the `info` command.
pub(crate) fn handle_info_command(
    language: Language,
    industry: Option<Industry>,
    format: OutputFormat,
) -> Result<()> {
    let info = language_info(language, industry);

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", info.language);
    println!("{}", "=".repeat(info.language.as_str().len()));
    println!("{}", info.description);
    println!();
    println!(
        "Tingkat kesulitan: {} ({})",
        info.difficulty, info.difficulty_reason
    );
    println!("Waktu belajar:     {}", info.learning_time);
    println!("Gaji entry-level:  {}", info.avg_salary);

    if let (Some(industry), Some(use_case)) = (industry, info.industry_specific) {
        println!();
        println!("Untuk {}: {}", industry, use_case);
    }

    println!();
    println!("Keunggulan:");
    for pro in info.pros {
        println!("  + {}", pro);
    }
    println!("Kekurangan:");
    for con in info.cons {
        println!("  - {}", con);
    }
    println!("Penggunaan:");
    for (industry, use_case) in &info.use_cases {
        println!("  {}: {}", industry, use_case);
    }
    println!("Sumber belajar:");
    for resource in info.resources {
        println!("  * {}", resource);
    }
    Ok(())
}
