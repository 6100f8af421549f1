use {
  cfrac_viz::{
    frame::{self, FrameLayout},
    profile,
    report,
    sequence::SequenceKind
  },
  anyhow::{Context, Result},
  clap::{Parser, Subcommand},
  std::path::{Path, PathBuf},
  tracing_subscriber::EnvFilter
};

#[derive(Parser, Debug)]
#[command(name = "cfrac-viz", version, about)]
struct Cli {
  #[command(subcommand)]
  cmd: Option<Command>,

  /// Output directory.
  #[arg(long, global = true, default_value = "out")]
  out: PathBuf,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
  /// Render blue noise, golden ratio, pi and sqrt(2) sequences as PNG frames (default).
  Render,
  /// Print continued fractions and their convergents, write the error tables as CSV.
  Report,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let cli = Cli::parse();
  match cli.cmd.unwrap_or(Command::Render) {
    Command::Render => render(&cli.out),
    Command::Report => report::run(&cli.out)
      .context("continued fraction report failed"),
  }
}

fn render(out: &Path) -> Result<()> {
  let layout = FrameLayout::default();
  for kind in SequenceKind::ALL {
    profile!(kind.name(), frame::render_frames(kind.name(), kind.samples(), &layout, out))
      .with_context(|| format!("rendering {} frames", kind.name()))?;
  }
  Ok(())
}
