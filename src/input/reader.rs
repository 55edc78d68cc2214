use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

// A single un-chunked completion request bounds useful input; 64 KiB is
// already far beyond what the hosted models accept in one prompt.
const MAX_INPUT_SIZE: usize = 64 * 1024;

pub struct InputReader;

impl InputReader {
    pub fn read(file_path: Option<&str>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;

        let size = metadata.len() as usize;
        if size > MAX_INPUT_SIZE {
            bail!(
                "Error: Input size ({:.1} KiB) exceeds maximum allowed size (64 KiB).\n\n\
                 Translate the file in smaller pieces.",
                size as f64 / 1024.0
            );
        }

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} KiB) exceeds maximum allowed size (64 KiB).\n\n\
                     Translate the input in smaller pieces.",
                    buffer.len() as f64 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}
