use std::path::PathBuf;

use exports_core::{ExportStore, Settings};
use exports_test_utils::ExportsFixture;
use pretty_assertions::assert_eq;

#[test]
fn defaults_target_system_exports() {
    let settings = Settings::default();
    assert_eq!(settings.exports.file, PathBuf::from("/etc/exports"));
    assert_eq!(settings.exports.mode, 0o644);
    assert!(settings.nfsd.validate);
}

#[test]
fn load_toml_settings() {
    let fixture = ExportsFixture::missing();
    let path = fixture.dir().join("nfsexports.toml");
    std::fs::write(
        &path,
        "[exports]\nfile = \"/tmp/exports\"\nmode = 0o600\n\n[nfsd]\nprogram = \"/usr/sbin/nfsd\"\nvalidate = false\n",
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();

    assert_eq!(settings.exports.file, PathBuf::from("/tmp/exports"));
    assert_eq!(settings.exports.mode, 0o600);
    assert_eq!(settings.nfsd.program, PathBuf::from("/usr/sbin/nfsd"));
    assert_eq!(settings.nfsd.privilege(), Some("sudo"));
    assert!(!settings.nfsd.validate);
}

#[test]
fn store_from_settings_uses_configured_file() {
    let fixture = ExportsFixture::with_content("# BEGIN: a\n/a host\n# END: a\n");
    let mut settings = Settings::default();
    settings.exports.file = fixture.path().to_path_buf();
    settings.nfsd.validate = false;

    let store = ExportStore::from_settings(&settings);

    assert_eq!(store.path().as_path(), fixture.path());
    store.add("b", "/b host").unwrap();
    assert!(store.exists("b").unwrap());
}

#[test]
fn empty_settings_path_means_system_file() {
    let mut settings = Settings::default();
    settings.exports.file = PathBuf::new();

    let store = ExportStore::from_settings(&settings);
    assert!(store.path().is_default());
}
