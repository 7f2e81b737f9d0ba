//! Changes the working directory of the test process, so it lives in its own binary.

use eliash::builtins::{cd::Cd, BuiltinCommand, BuiltinError};

#[test]
fn cd_changes_directory_only_on_success() {
    let before = std::env::current_dir().unwrap();

    let err = Cd.execute("/eliash-test-nonexistent\n").unwrap_err();
    assert!(matches!(err, BuiltinError::Path { .. }));
    assert_eq!(std::env::current_dir().unwrap(), before);

    let target = std::env::temp_dir().canonicalize().unwrap();
    Cd.execute(&format!("  {}\n", target.display())).unwrap();
    assert_eq!(std::env::current_dir().unwrap(), target);

    Cd.execute("..").unwrap();
    assert_eq!(
        std::env::current_dir().unwrap(),
        target.parent().unwrap_or(target.as_path())
    );
}
