//! Watch command: live rendering from a running game.

use std::path::PathBuf;

use anyhow::Result;

/// Run the watch command
#[cfg(target_os = "windows")]
pub fn run(pid: Option<u32>, offsets: Option<PathBuf>, interval_ms: u64) -> Result<()> {
    use std::sync::Arc;
    use std::time::Duration;

    use journal_core::{Catalog, MemoryReader, ProcessHandle, ReadMemory};
    use tracing::info;

    use super::variables::make_config;
    use crate::shutdown::ShutdownSignal;

    let process = if let Some(pid) = pid {
        ProcessHandle::open(pid)?
    } else {
        ProcessHandle::find_and_open()?
    };
    info!(
        "Found process (PID: {}, Base: 0x{:X})",
        process.pid, process.base_address
    );

    let reader = MemoryReader::new(&process);
    let config = make_config(reader.base_address(), offsets);
    let catalog = Catalog::build(&config, &config.offset_table()?);

    let shutdown = Arc::new(ShutdownSignal::new());
    {
        let shutdown = Arc::clone(&shutdown);
        ctrlc::set_handler(move || shutdown.trigger())?;
    }

    let interval = Duration::from_millis(interval_ms.max(10));
    let mut last: Vec<(u32, String)> = Vec::new();

    loop {
        // Check if process is still alive by trying to read memory
        if reader.read_bytes(process.base_address, 4).is_err() {
            info!("Process terminated");
            break;
        }

        let rendered = catalog.render_all(&reader);
        if rendered != last {
            for (id, text) in &rendered {
                let name = catalog.get(*id).map(|v| v.name.as_str()).unwrap_or("?");
                println!("{}: {}", name, text);
            }
            println!();
            last = rendered;
        }

        if shutdown.wait(interval) {
            info!("Stopped");
            break;
        }
    }

    Ok(())
}

/// Run the watch command
#[cfg(not(target_os = "windows"))]
pub fn run(_pid: Option<u32>, _offsets: Option<PathBuf>, _interval_ms: u64) -> Result<()> {
    anyhow::bail!("watch needs the game running on Windows")
}
