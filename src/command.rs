use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::{Error, Region};

/// Command count cap for a single function file, imposed by the target
/// environment's function runner.
pub const MAX_COMMANDS: usize = 10_000;

/// Formats one relative-coordinate bulk-fill command per region.
pub fn fill_commands(regions: &[Region], block: &str) -> Vec<String> {
    regions
        .iter()
        .map(|r| {
            let (p1, p2) = (r.p1(), r.p2());
            format!(
                "fill ~{} ~{} ~{} ~{} ~{} ~{} {}",
                p1.x, p1.y, p1.z, p2.x, p2.y, p2.z, block
            )
        })
        .collect()
}

/// Writes a command batch to a function file, one command per line.
///
/// Batches over [`MAX_COMMANDS`] are refused before anything is written.
pub fn write_function<P: AsRef<Path>>(path: P, commands: &[String]) -> Result<(), Error> {
    if commands.len() > MAX_COMMANDS {
        return Err(Error::CommandLimitExceeded {
            count: commands.len(),
            limit: MAX_COMMANDS,
        });
    }
    let mut file = BufWriter::new(File::create(&path)?);
    for command in commands {
        writeln!(file, "{}", command)?;
    }
    info!(
        "wrote {} commands to {}",
        commands.len(),
        path.as_ref().display()
    );
    Ok(())
}
