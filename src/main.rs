use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::Path;

use gift_allocation::{allocate, AllocationReport, Catalog};

const USAGE: &str = "Usage:\n  \
    gift-allocation <catalog.json> [report.json]\n  \
    gift-allocation csv <children.csv> <gifts.csv> [report.json]";

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        bail!("{}", USAGE);
    }

    let (mut catalog, report_path) = if args[1] == "csv" {
        if args.len() < 4 {
            bail!("{}", USAGE);
        }
        let catalog = Catalog::from_csv_files(&args[2], &args[3])?;
        (catalog, args.get(4).cloned())
    } else {
        let catalog = Catalog::from_json_file(&args[1])?;
        (catalog, args.get(2).cloned())
    };

    println!("🎁 Gift Allocation v{}", gift_allocation::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "✓ Catalog loaded: {} children, {} gifts",
        catalog.child_count(),
        catalog.gift_count()
    );

    let report = allocate(&mut catalog)?;

    print_assignments(&catalog, &report);

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("🎉 {}", report.summary());

    if let Some(path) = report_path {
        write_report(&report, Path::new(&path))?;
        println!("✓ Report written to {}", path);
    }

    Ok(())
}

fn print_assignments(catalog: &Catalog, report: &AllocationReport) {
    println!("\n📋 Assignments:");
    for child in &catalog.children {
        if child.is_young_adult() {
            println!("  Child {} - excluded (age {})", child.id, child.age);
            continue;
        }

        let assignments = report.assignments_for(child.id);
        if assignments.is_empty() {
            println!(
                "  Child {} - no gifts (remaining budget {:.2})",
                child.id, child.assigned_budget
            );
        } else {
            let gifts: Vec<String> = assignments
                .iter()
                .map(|a| format!("{} ({:.2})", a.category, a.price))
                .collect();
            println!(
                "  Child {} - {} (remaining budget {:.2})",
                child.id,
                gifts.join(", "),
                child.assigned_budget
            );
        }
    }
}

fn write_report(report: &AllocationReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("Failed to write report: {:?}", path))?;
    Ok(())
}
