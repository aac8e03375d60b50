// Installs the default config file into the Argos config dir.
//
// This copy is deliberately NOT idempotent: every run overwrites the
// destination, with no backup. Edits made to the installed default file are
// lost on the next run; user customizations belong in `jira.custom.ini`,
// which this installer never touches.

use crate::errors::InstallError;
use crate::report_action;
use std::fs;
use std::path::Path;

/// Copies the default config file to its destination, overwriting any
/// existing file there. Any copy failure is fatal.
pub fn install_default_config_file(
    src_config_file: &Path,
    dest_config_file: &Path,
) -> Result<(), InstallError> {
    report_action!(
        "Copying default config file to '{}'",
        dest_config_file.display()
    );

    fs::copy(src_config_file, dest_config_file).map_err(InstallError::ConfigCopyFailed)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("jira.default.ini");
        let dest = dir.path().join("argos").join("jira.default.ini");
        fs::create_dir(dir.path().join("argos")).unwrap();
        fs::write(&src, "[jira]\nurl = https://jira.example.com\n").unwrap();

        install_default_config_file(&src, &dest).unwrap();
        assert_eq!(
            fs::read_to_string(&dest).unwrap(),
            "[jira]\nurl = https://jira.example.com\n"
        );
    }

    #[test]
    fn test_overwrites_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("jira.default.ini");
        let dest = dir.path().join("installed.ini");
        fs::write(&src, "fresh defaults\n").unwrap();
        fs::write(&dest, "user edits that will be lost\n").unwrap();

        install_default_config_file(&src, &dest).unwrap();
        assert_eq!(fs::read_to_string(&dest).unwrap(), "fresh defaults\n");
    }

    #[test]
    fn test_missing_source_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("missing.ini");
        let dest = dir.path().join("installed.ini");

        let result = install_default_config_file(&src, &dest);
        assert!(matches!(result, Err(InstallError::ConfigCopyFailed(_))));
    }
}
