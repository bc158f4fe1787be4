//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::password::Strength;
use crate::store::RecordStore;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a strength verdict, with one dim line per unmet criterion.
pub fn strength(level: Strength, feedback: &[String]) {
    println!("Strength: {}", style(level.label()).bold());
    for reason in feedback {
        tip(reason);
    }
}

/// Print a details table (Site, Login, Created) for the given sites.
///
/// Passwords are deliberately absent — `get` is for that.
pub fn print_details_table(store: &RecordStore, sites: &[String]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Site", "Login", "Created"]);

    for site in sites {
        if let Some(record) = store.get(site) {
            table.add_row(vec![
                site.clone(),
                record.login.clone(),
                record.created.format("%Y-%m-%d %H:%M:%S").to_string(),
            ]);
        }
    }

    println!("{table}");
}
