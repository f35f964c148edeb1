//! Path-string operations against real files.
//!
//! Additions go through the real nfsd checker, so only the read paths and
//! removal are exercised here.

use exports_core::{Error, exists, list, list_all, remove};
use exports_test_utils::ExportsFixture;
use pretty_assertions::assert_eq;

const WITH_BLOCKS: &str = "/Users 192.168.64.1 -alldirs -maproot=root
# BEGIN: my-id
/Users 192.168.64.2 -alldirs -maproot=root
# END: my-id
# BEGIN: my-id1
/Users 192.168.64.3 -alldirs -maproot=root
# END: my-id1
";

#[test]
fn exists_by_path() {
    let fixture = ExportsFixture::with_content(WITH_BLOCKS);
    assert!(exists(fixture.path_str(), "my-id1").unwrap());
    assert!(!exists(fixture.path_str(), "my-id2").unwrap());
}

#[test]
fn list_by_path() {
    let fixture = ExportsFixture::with_content(WITH_BLOCKS);
    let exports = list(fixture.path_str()).unwrap().into_map();

    assert_eq!(exports.len(), 2);
    assert_eq!(
        exports["my-id1"],
        "/Users 192.168.64.3 -alldirs -maproot=root"
    );
}

#[test]
fn list_all_by_path() {
    let fixture = ExportsFixture::with_content(WITH_BLOCKS);
    assert_eq!(list_all(fixture.path_str()).unwrap().len(), 3);
}

#[test]
fn remove_by_path() {
    let fixture = ExportsFixture::with_content(WITH_BLOCKS);

    remove(fixture.path_str(), "my-id").unwrap();

    assert_eq!(
        fixture.read(),
        "/Users 192.168.64.1 -alldirs -maproot=root\n# BEGIN: my-id1\n/Users 192.168.64.3 -alldirs -maproot=root\n# END: my-id1\n"
    );
}

#[test]
fn remove_unknown_by_path() {
    let fixture = ExportsFixture::with_content("/Users/my-user 192.168.64.1 -alldirs -maproot=root\n");
    assert!(matches!(
        remove(fixture.path_str(), "my-id"),
        Err(Error::IdentifierNotFound { .. })
    ));
}
