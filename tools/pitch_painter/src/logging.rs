use color_eyre::Result;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

pub fn setup_logger(verbose: bool) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{:<5} {}] {}",
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
