//! Terminal output formatting.

use archlens_core::analysis::model::DashboardStats;
use colored::Colorize;

/// Print dashboard stats.
pub fn print_stats(stats: &DashboardStats) {
    println!("{}", "Dashboard".cyan().bold());
    println!();
    println!("{}: {}", "Analyses".bold(), stats.total_analyses);
    println!("{}: {}", "Apps".bold(), stats.total_apps);

    if !stats.components_by_app.is_empty() {
        println!();
        println!("{:<30} {:>10}", "App", "Components");
        println!("{}", "─".repeat(41));
        for (app, count) in &stats.components_by_app {
            println!("{:<30} {:>10}", truncate(app, 28), count);
        }
    }

    println!();
    if stats.recent_analyses.is_empty() {
        println!("{}", "No analyses found.".dimmed());
        return;
    }

    println!("{}", "Recent".bold());
    for summary in &stats.recent_analyses {
        println!(
            "  {} {} {}",
            summary.id.dimmed(),
            summary.component_name.as_deref().unwrap_or("-"),
            format!("({})", summary.file_name.as_deref().unwrap_or("-")).dimmed()
        );
    }
}

/// Truncate to `max` characters, marking the cut with an ellipsis.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("shop", 28), "shop");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }
}
