use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::error::{ConvertError, Result};
use crate::Row;

/// Write rows as TSV: fields joined by `\t`, one `\n`-terminated line per row.
/// Fields must already be free of tabs (see `scrub::scrub_tabs`).
pub fn write_rows<W: Write>(out: &mut W, rows: &[Row]) -> std::io::Result<()> {
    for row in rows {
        for (i, field) in row.iter().enumerate() {
            if i > 0 {
                out.write_all(b"\t")?;
            }
            out.write_all(field)?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Create or truncate `path` and write the rows into it.
///
/// A failure partway through leaves whatever was already written on disk.
pub fn write_tsv(path: &Path, rows: &[Row]) -> Result<()> {
    let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
    let mut w = BufWriter::new(file);
    write_rows(&mut w, rows).map_err(|e| ConvertError::io(path, e))?;
    w.flush().map_err(|e| ConvertError::io(path, e))?;
    Ok(())
}

/// Like [`write_tsv`], but writes to a temp file next to `path` and renames
/// it over `path` only once everything is flushed. On failure `path` is not
/// touched and the temp file is removed. The result gets the same mode a
/// plain create would give it, or the existing destination's mode.
pub fn write_tsv_atomic(path: &Path, rows: &[Row]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = temp_beside(dir, path).map_err(|e| ConvertError::io(dir, e))?;
    {
        let mut w = BufWriter::new(tmp.as_file_mut());
        write_rows(&mut w, rows).map_err(|e| ConvertError::io(path, e))?;
        w.flush().map_err(|e| ConvertError::io(path, e))?;
    }
    tmp.persist(path)
        .map_err(|e| ConvertError::io(path, e.error))?;
    Ok(())
}

fn temp_beside(dir: &Path, dest: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".csv2tsv");
    // 0666 masked by the umask at open, same as File::create
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;
    if let Ok(meta) = std::fs::metadata(dest) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    Ok(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(src: &[&[&str]]) -> Vec<Row> {
        src.iter()
            .map(|r| r.iter().map(|s| s.as_bytes().to_vec()).collect())
            .collect()
    }

    #[test]
    fn joins_with_tabs_one_line_per_row() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows(&[&["a", "b"], &["c,d", "e"]])).expect("write");
        assert_eq!(buf, b"a\tb\nc,d\te\n");
    }

    #[test]
    fn empty_rows_and_empty_dataset() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &rows(&[&[], &[""], &["", ""]])).expect("write");
        assert_eq!(buf, b"\n\n\t\n");

        let mut buf = Vec::new();
        write_rows(&mut buf, &[]).expect("write");
        assert!(buf.is_empty());
    }

    #[test]
    fn write_tsv_truncates_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("out.tsv");
        std::fs::write(&out, "old content that is longer\n").expect("seed");

        write_tsv(&out, &rows(&[&["x", "y"]])).expect("write");
        assert_eq!(std::fs::read_to_string(&out).expect("read"), "x\ty\n");
    }

    #[test]
    fn atomic_write_replaces_destination() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("out.tsv");
        std::fs::write(&out, "stale\n").expect("seed");

        write_tsv_atomic(&out, &rows(&[&["1", "2", "3"]])).expect("write");
        assert_eq!(std::fs::read_to_string(&out).expect("read"), "1\t2\t3\n");

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .expect("ls")
            .map(|e| e.expect("entry").file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.tsv")]);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("no_such_dir").join("out.tsv");

        let err = write_tsv(&out, &rows(&[&["a"]])).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));

        let err = write_tsv_atomic(&out, &rows(&[&["a"]])).unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
    }

    #[test]
    fn field_bytes_are_written_verbatim() {
        let mut buf = Vec::new();
        write_rows(&mut buf, &[vec![b"caf\xe9".to_vec(), b"\xff".to_vec()]]).expect("write");
        assert_eq!(buf, b"caf\xe9\t\xff\n");
    }

    #[cfg(unix)]
    #[test]
    fn atomic_write_matches_plain_create_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let plain = dir.path().join("plain.tsv");
        let atomic = dir.path().join("atomic.tsv");
        let data = rows(&[&["a", "b"]]);

        write_tsv(&plain, &data).expect("plain");
        write_tsv_atomic(&atomic, &data).expect("atomic");

        let mode = |p: &Path| std::fs::metadata(p).expect("stat").permissions().mode() & 0o777;
        assert_eq!(mode(atomic.as_path()), mode(plain.as_path()));
    }

    #[cfg(unix)]
    #[test]
    fn atomic_write_keeps_existing_destination_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("out.tsv");
        std::fs::write(&out, "old\n").expect("seed");
        std::fs::set_permissions(&out, std::fs::Permissions::from_mode(0o640)).expect("chmod");

        write_tsv_atomic(&out, &rows(&[&["x"]])).expect("write");
        let mode = std::fs::metadata(&out).expect("stat").permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }
}
