use super::*;
use std::path::PathBuf;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("sink_unit").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn writes_and_flushes_body() {
    let dir = scratch("writes");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("out.osb");

    write_file(&path, CompileOpts::default(), |w| {
        w.write_all(b"[Events]\n")?;
        Ok(())
    })
    .unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[Events]\n");
}

#[test]
fn missing_directory_is_an_io_error_unless_created() {
    let dir = scratch("nested");
    let path = dir.join("a").join("b").join("out.osb");

    let err = write_file(&path, CompileOpts::default(), |_| Ok(())).unwrap_err();
    assert!(matches!(err, OsbError::Io { .. }));
    assert!(err.to_string().contains("create"));

    write_file(&path, CompileOpts { create_dirs: true }, |_| Ok(())).unwrap();
    assert!(path.exists());
}

#[test]
fn body_errors_propagate_and_keep_partial_output() {
    let dir = scratch("partial");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("out.osb");

    let err = write_file(&path, CompileOpts::default(), |w| {
        w.write_all(b"[Events]\n")?;
        Err(OsbError::missing_timing("no start"))
    })
    .unwrap_err();

    assert!(matches!(err, OsbError::MissingRequiredTiming(_)));
    assert!(path.exists());
}
