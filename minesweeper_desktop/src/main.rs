use minesweeper_desktop::app;
use minesweeper_desktop::logging::{init_logging, LoggingConfig};
use minesweeper_desktop::render::RenderMode;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    app::run(RenderMode::Sprites)
}
