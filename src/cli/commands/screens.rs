use anyhow::Result;
use colored::*;

use smartjob::nav::ScreenRegistry;

/// Print the registry; `*` marks screens the floating navigation offers
pub fn screens_command() -> Result<()> {
    let registry = ScreenRegistry::new();

    println!("{}", "Screens (navigation order)".bold());
    println!();
    for (index, entry) in registry.entries().iter().enumerate() {
        let marker = if entry.jumpable { "*".green() } else { " ".normal() };
        println!(
            "  {} {:>2}  {:<16} {}",
            marker,
            index,
            entry.id.as_key().cyan(),
            entry.title
        );
    }
    println!();
    println!(
        "{} {} of {} screens appear in the navigation overlay",
        "*".green(),
        registry.jump_len(),
        registry.len()
    );
    Ok(())
}
