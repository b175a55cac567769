//! Rewrite the export line to point at the target directory

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::backup::BackupManager;
use crate::cli::context::Context;
use crate::rewrite::{plan_file, rewrite_file, ExportLine, Rewrite};

/// Execute the update action
pub fn execute(ctx: &Context, target: &Path) -> Result<()> {
    let line = ExportLine::new(ctx.config.target.variable.as_str(), target);

    if ctx.dry_run {
        let rewrite = plan_file(&ctx.rc_file, &line)?;
        print_change(ctx, &rewrite);
        println!("{}", "Dry run, nothing written.".dimmed());
        return Ok(());
    }

    // The backup must be on disk before the rc file is touched
    let backup_path = BackupManager::new(&ctx.config).create_backup(&ctx.rc_file)?;
    log::debug!("backup written to {}", backup_path.display());

    let rewrite = rewrite_file(&ctx.rc_file, &line)?;
    log::debug!(
        "replaced line {} of {}",
        rewrite.line_number,
        ctx.rc_file.display()
    );

    if rewrite.duplicates > 0 {
        ctx.print_warning(&format!(
            "{} more '{}' line(s) left unchanged",
            rewrite.duplicates,
            line.prefix()
        ));
    }

    ctx.print_success(&format!(
        "{} in {} (backup: {})",
        rewrite.new_line.cyan(),
        ctx.rc_file.display(),
        backup_path.display()
    ));
    ctx.print_reload_hint();

    Ok(())
}

fn print_change(ctx: &Context, rewrite: &Rewrite) {
    println!("{}:{}", ctx.rc_file.display(), rewrite.line_number);
    if rewrite.changed() {
        println!("  {} {}", "-".red(), rewrite.old_line.red());
        println!("  {} {}", "+".green(), rewrite.new_line.green());
    } else {
        println!("  {} (unchanged)", rewrite.old_line);
    }
}
