//! `tokens`: show where cached tokens live

use std::path::Path;

use crate::central::TokenStore;
use crate::config::AccountConfig;
use crate::error::AppResult;

/// Lines printed by the command
pub fn listing(account: &AccountConfig, cwd: &Path) -> AppResult<Vec<String>> {
    let store = TokenStore::new(&account.token_dir);
    let mut lines = vec![
        format!("Working directory: {}", cwd.display()),
        format!("Token directory: {}", store.dir().display()),
    ];

    if !store.dir().is_dir() {
        lines.push("  (directory does not exist)".to_string());
        return Ok(lines);
    }

    let files = store.list()?;
    if files.is_empty() {
        lines.push("  (no files)".to_string());
    }
    for file in files {
        let name = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let modified = file
            .modified
            .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!("  {}  {} bytes  {}", name, file.size, modified));
    }
    Ok(lines)
}

pub fn run(account: &AccountConfig) -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    for line in listing(account, &cwd)? {
        println!("{}", line);
    }
    Ok(())
}
