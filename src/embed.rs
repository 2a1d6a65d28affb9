use std::fmt;
use std::path::{Path, PathBuf};

use crate::Error;

/// Single-inclusion directive opening every generated header.
pub const INCLUDE_GUARD: &str = "#pragma once";

/// File name of the generated header.
pub const OUTPUT_FILE_NAME: &str = "EmbeddedAssets.h";

/// Assets compiled into the game, as (input file, symbol name) pairs in output order.
pub const BUNDLED_ASSETS: [(&str, &str); 2] = [
    ("xolo.fnt", "FONT_DATA"),
    ("xolo_0.png", "FONT_TEXTURE"),
];

/// Raw bytes of one input file, paired with the symbol they will be declared under.
///
/// The [`Display`](fmt::Display) impl renders the declaration pair:
/// ```text
/// const unsigned char <symbol>[N] = {
/// 0xHH, 0xHH, ..., 0xHH
/// };
/// const int <symbol>_SIZE = N;
///
/// ```
/// The symbol is emitted as given. Picking a valid, unique identifier is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    /// Identifier of the byte array; the size constant is this plus `_SIZE`
    pub symbol: String,
    /// File contents, in file order
    pub bytes: Vec<u8>,
}

impl Asset {
    /// Wraps bytes that are already in memory.
    #[must_use]
    pub fn new(symbol: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { symbol: symbol.into(), bytes: bytes.into() }
    }

    /// Reads the whole file at `path`.
    ///
    /// # Errors
    /// [`Error::Read`] if the file is missing or unreadable.
    pub fn read(path: impl AsRef<Path>, symbol: impl Into<String>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Read { path: path.to_owned(), source })?;

        let asset = Self::new(symbol, bytes);
        log::debug!("Read {} bytes from {} for {}", asset.bytes.len(), path.display(), asset.symbol);
        if asset.bytes.is_empty() {
            log::warn!("{} is empty; {} will be declared as a zero-length array", path.display(), asset.symbol);
        }

        Ok(asset)
    }

    /// Upper bound on the rendered length, used to size output buffers.
    fn rendered_len_hint(&self) -> usize {
        // "0xHH, " per byte, plus both declaration lines
        self.bytes.len() * 6 + 2 * self.symbol.len() + 80
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self.bytes.len();
        writeln!(f, "const unsigned char {}[{len}] = {{", self.symbol)?;

        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "0x{byte:02x}")?;
        }

        f.write_str("\n};\n")?;
        writeln!(f, "const int {}_SIZE = {len};", self.symbol)?;
        writeln!(f)
    }
}

/// Reads `path` and renders its declaration block under `symbol`.
///
/// # Errors
/// [`Error::Read`] if the file is missing or unreadable.
pub fn render_asset(path: impl AsRef<Path>, symbol: &str) -> Result<String, Error> {
    Asset::read(path, symbol).map(|asset| asset.to_string())
}

/// Renders the full header for `assets`, in the order given.
///
/// Stops at the first asset that fails to read, so no partial document is ever returned.
///
/// # Errors
/// [`Error::Read`] for the first missing or unreadable asset.
pub fn build_document<I, P, S>(assets: I) -> Result<String, Error>
where
    I: IntoIterator<Item = (P, S)>,
    P: AsRef<Path>,
    S: Into<String>,
{
    let mut document = String::from(INCLUDE_GUARD);
    document.push_str("\n\n");

    for (path, symbol) in assets {
        let asset = Asset::read(path, symbol)?;
        document.reserve(asset.rendered_len_hint());
        document.push_str(&asset.to_string());
    }

    log::debug!("Rendered header of {} bytes", document.len());
    Ok(document)
}

/// Replaces the contents of `path` with `text`, creating the file if needed.
///
/// # Errors
/// [`Error::Write`] if the file cannot be created or written.
pub fn write_document(text: &str, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    std::fs::write(path, text).map_err(|source| Error::Write { path: path.to_owned(), source })
}

/// Embeds [`BUNDLED_ASSETS`] from `directory` into [`OUTPUT_FILE_NAME`] inside the same directory.
///
/// Returns the path of the written header. Nothing is written unless every asset was read.
///
/// # Errors
/// [`Error::Read`] if an asset cannot be read, [`Error::Write`] if the header cannot be written.
pub fn generate(directory: impl AsRef<Path>) -> Result<PathBuf, Error> {
    let directory = directory.as_ref();
    let document = build_document(BUNDLED_ASSETS.iter().map(|&(file, symbol)| (directory.join(file), symbol)))?;

    let output_path = directory.join(OUTPUT_FILE_NAME);
    write_document(&document, &output_path)?;
    log::info!("Wrote {}", output_path.display());

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_tokens(rendered: &str) -> Vec<&str> {
        let body = rendered.lines().nth(1).unwrap();
        if body.is_empty() { vec![] } else { body.split(", ").collect() }
    }

    #[test]
    fn renders_three_byte_scenario() {
        let asset = Asset::new("TEST", [0x01u8, 0xAB, 0xFF]);
        assert_eq!(
            asset.to_string(),
            "const unsigned char TEST[3] = {\n0x01, 0xab, 0xff\n};\nconst int TEST_SIZE = 3;\n\n"
        );
    }

    #[test]
    fn empty_asset_has_empty_body() {
        let asset = Asset::new("NOTHING", Vec::new());
        assert_eq!(
            asset.to_string(),
            "const unsigned char NOTHING[0] = {\n\n};\nconst int NOTHING_SIZE = 0;\n\n"
        );
    }

    #[test]
    fn token_count_matches_size() {
        let bytes: Vec<u8> = (0..=255).chain(0..17).collect();
        let rendered = Asset::new("ALL", bytes.clone()).to_string();

        let tokens = body_tokens(&rendered);
        assert_eq!(tokens.len(), bytes.len());
        assert!(rendered.starts_with(&format!("const unsigned char ALL[{}] = {{\n", bytes.len())));
        assert!(rendered.contains(&format!("const int ALL_SIZE = {};\n", bytes.len())));

        let decoded: Vec<u8> = tokens
            .iter()
            .map(|token| {
                assert_eq!(token.len(), 4, "{token} is not zero-padded");
                u8::from_str_radix(token.strip_prefix("0x").unwrap(), 16).unwrap()
            })
            .collect();
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn hex_is_lowercase() {
        let rendered = Asset::new("X", [0xDEu8, 0xAD, 0xBE, 0xEF]).to_string();
        assert_eq!(body_tokens(&rendered), ["0xde", "0xad", "0xbe", "0xef"]);
    }

    #[test]
    fn render_asset_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, b"\x00\x7f").unwrap();

        let rendered = render_asset(&path, "BLOB").unwrap();
        assert_eq!(rendered, "const unsigned char BLOB[2] = {\n0x00, 0x7f\n};\nconst int BLOB_SIZE = 2;\n\n");
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.fnt");

        match render_asset(&path, "ABSENT") {
            Err(Error::Read { path: failed, source }) => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn document_keeps_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.bin");
        let second = dir.path().join("b.bin");
        std::fs::write(&first, b"\x10").unwrap();
        std::fs::write(&second, b"\x20\x30").unwrap();

        let document = build_document([(&second, "SECOND"), (&first, "FIRST")]).unwrap();
        assert_eq!(
            document,
            "#pragma once\n\n\
             const unsigned char SECOND[2] = {\n0x20, 0x30\n};\nconst int SECOND_SIZE = 2;\n\n\
             const unsigned char FIRST[1] = {\n0x10\n};\nconst int FIRST_SIZE = 1;\n\n"
        );
    }

    #[test]
    fn empty_asset_list_is_just_the_guard() {
        let document = build_document(std::iter::empty::<(PathBuf, String)>()).unwrap();
        assert_eq!(document, "#pragma once\n\n");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join(OUTPUT_FILE_NAME);

        let err = write_document("#pragma once\n\n", &path).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert_eq!(err.path(), path.as_path());
    }
}
