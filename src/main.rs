use anyhow::Result;
use env_logger::Env;
use yuyv_parity::demo::{DemoConfig, run};

fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let report = run(&DemoConfig::default())?;

    log::info!(
        "done: packed {}x{}, wrote {} images",
        report.packed_width,
        report.packed_height,
        report.written.len()
    );

    for failure in &report.failures {
        log::warn!("{failure}");
    }

    Ok(())
}
