// Installs the plugin script itself.
// The installed file is the source template with a generated shebang line
// prepended, pointing at the provisioned venv's interpreter. Installation is
// idempotent on byte-for-byte content equality: an identical installed copy
// means no write and, importantly, no permission change either.

use crate::errors::InstallError;
use crate::libs::paths::VENV_PYTHON_RELATIVE_PATH;
use crate::{report_action, report_skipped};
use std::fs;
use std::io;
use std::path::Path;

/// Templates and installs the plugin script.
///
/// Builds `#!<venv>/bin/python` + newline + the verbatim template content,
/// compares it against any existing installed copy, and only on a difference
/// (or absence) writes the file and sets the owner-execute bit. The execute
/// bit is added on top of the existing permission bits, never replacing them.
pub fn install_plugin(
    src_plugin_path: &Path,
    dest_plugin_path: &Path,
    virtualenv_path: &Path,
) -> Result<(), InstallError> {
    let src_plugin_txt = fs::read_to_string(src_plugin_path)
        .map_err(|source| plugin_error(src_plugin_path, source))?;

    let shebang = format!(
        "#!{}/{}",
        virtualenv_path.display(),
        VENV_PYTHON_RELATIVE_PATH
    );
    let templated_plugin = format!("{shebang}\n{src_plugin_txt}");

    if dest_plugin_path.exists() {
        let dest_plugin_txt = fs::read_to_string(dest_plugin_path)
            .map_err(|source| plugin_error(dest_plugin_path, source))?;

        if dest_plugin_txt == templated_plugin {
            report_skipped!(
                "Current installed plugin is identical to latest version, skipping plugin install"
            );
            return Ok(());
        }
    }

    report_action!(
        "Installing plugin {} → {}",
        src_plugin_path.display(),
        dest_plugin_path.display()
    );
    fs::write(dest_plugin_path, &templated_plugin)
        .map_err(|source| plugin_error(dest_plugin_path, source))?;

    report_action!("Setting plugin permissions");
    set_owner_executable(dest_plugin_path).map_err(|source| plugin_error(dest_plugin_path, source))
}

fn plugin_error(path: &Path, source: io::Error) -> InstallError {
    InstallError::PluginInstallFailed {
        path: path.to_path_buf(),
        source,
    }
}

/// Adds the owner-execute bit to the file's current permissions, leaving all
/// other bits untouched.
#[cfg(unix)]
fn set_owner_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(perms.mode() | 0o100);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn set_owner_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[cfg(unix)]
    use std::os::unix::fs::PermissionsExt;

    struct Fixture {
        _dir: tempfile::TempDir,
        src: PathBuf,
        dest: PathBuf,
        venv: PathBuf,
    }

    fn fixture(template: &str) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("jira-timelog-critic.py.in");
        let dest = dir.path().join("jira-timelog-critic..5m.py");
        let venv = dir.path().join("venv");
        fs::write(&src, template).unwrap();
        Fixture { src, dest, venv, _dir: dir }
    }

    fn expected_content(fx: &Fixture, template: &str) -> String {
        format!("#!{}/bin/python\n{}", fx.venv.display(), template)
    }

    #[test]
    fn test_fresh_install_prepends_shebang() {
        let fx = fixture("print('hello')\n");
        install_plugin(&fx.src, &fx.dest, &fx.venv).unwrap();

        assert_eq!(
            fs::read_to_string(&fx.dest).unwrap(),
            expected_content(&fx, "print('hello')\n")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_fresh_install_adds_execute_bit_additively() {
        let fx = fixture("print('hello')\n");
        // Pre-create the destination with different content and unusual
        // permissions to confirm the execute bit is added on top.
        fs::write(&fx.dest, "outdated\n").unwrap();
        fs::set_permissions(&fx.dest, fs::Permissions::from_mode(0o604)).unwrap();

        install_plugin(&fx.src, &fx.dest, &fx.venv).unwrap();

        let mode = fs::metadata(&fx.dest).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o704);
    }

    #[cfg(unix)]
    #[test]
    fn test_identical_content_skips_write_and_permissions() {
        let template = "print('hello')\n";
        let fx = fixture(template);

        // An already-installed identical copy, deliberately without the
        // execute bit: the idempotent path must not touch permissions.
        fs::write(&fx.dest, expected_content(&fx, template)).unwrap();
        fs::set_permissions(&fx.dest, fs::Permissions::from_mode(0o600)).unwrap();

        install_plugin(&fx.src, &fx.dest, &fx.venv).unwrap();

        let mode = fs::metadata(&fx.dest).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600, "skip path must not reapply the execute bit");
        assert_eq!(
            fs::read_to_string(&fx.dest).unwrap(),
            expected_content(&fx, template)
        );
    }

    #[test]
    fn test_changed_template_rewrites_destination() {
        let fx = fixture("print('v2')\n");
        fs::write(&fx.dest, expected_content(&fx, "print('v1')\n")).unwrap();

        install_plugin(&fx.src, &fx.dest, &fx.venv).unwrap();

        assert_eq!(
            fs::read_to_string(&fx.dest).unwrap(),
            expected_content(&fx, "print('v2')\n")
        );
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("missing.py.in");
        let dest = dir.path().join("out.py");
        let venv = dir.path().join("venv");

        let result = install_plugin(&src, &dest, &venv);
        assert!(matches!(
            result,
            Err(InstallError::PluginInstallFailed { .. })
        ));
        assert!(!dest.exists());
    }
}
