use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use super::RunError;
use crate::batch::JobHandle;

/// Echo `outfile` to `out` while the process behind `handle` runs, then
/// the rest of it once the process has finished. Returns the exit code.
///
/// If the outfile cannot be read the process is still waited for before the
/// error is returned, so SOG never outlives the command.
pub fn watch_outfile<H: JobHandle, W: Write>(
    handle: &mut H,
    outfile: &Path,
    interval: Duration,
    out: &mut W,
) -> Result<i32, RunError> {
    echo_until_finished(handle, outfile, interval, out).map_err(|err| {
        warn!(pid = handle.pid(), outfile = %outfile.display(), error = %err, "Unable to watch outfile; waiting for SOG");
        wait_for(handle, interval);
        err
    })
}

fn echo_until_finished<H: JobHandle, W: Write>(
    handle: &mut H,
    outfile: &Path,
    interval: Duration,
    out: &mut W,
) -> Result<i32, RunError> {
    // Give SOG a moment to create the outfile.
    thread::sleep(interval);
    let mut reader = BufReader::new(File::open(outfile)?);
    let mut line = String::new();

    let code = loop {
        if let Some(code) = handle.try_wait()? {
            break code;
        }
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            thread::sleep(interval);
            continue;
        }
        out.write_all(line.as_bytes())?;
    };

    io::copy(&mut reader, out)?;
    out.flush()?;
    Ok(code)
}

fn wait_for<H: JobHandle>(handle: &mut H, interval: Duration) {
    loop {
        match handle.try_wait() {
            Ok(Some(code)) => {
                info!(pid = handle.pid(), returncode = code, "SOG finished");
                return;
            }
            Ok(None) => thread::sleep(interval),
            Err(err) => {
                warn!(pid = handle.pid(), error = %err, "Unable to wait for SOG");
                return;
            }
        }
    }
}
