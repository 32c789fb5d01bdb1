use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use is_terminal::IsTerminal;
use minus::Pager;
use sidediff::ColorChoice;
use sidediff::areas::config::ViewConfig;
use sidediff::areas::viewer::Viewer;
use sidediff::areas::workspace::TextSource;
use sidediff::artifacts::core::PagerWriter;
use sidediff::artifacts::diff::segment::Algorithm;
use sidediff::artifacts::render::DEFAULT_WIDTH;
use sidediff::artifacts::render::layout::LayoutMode;
use sidediff::artifacts::render::theme::Theme;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sidediff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two texts side by side",
    long_about = "This tool computes a minimal line diff between two texts and renders \
    both versions side by side, highlighting added, removed and modified lines.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        value_enum,
        global = true,
        default_value_t = ColorChoice::Auto,
        help = "When to use colors"
    )]
    color: ColorChoice,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone)]
struct ViewArgs {
    #[arg(
        long,
        value_enum,
        default_value_t = LayoutMode::Aligned,
        help = "How rows of both sides are paired"
    )]
    layout: LayoutMode,
    #[arg(
        long,
        value_enum,
        env = "SIDEDIFF_THEME",
        default_value_t = Theme::Light,
        help = "Color theme"
    )]
    theme: Theme,
    #[arg(
        long,
        env = "SIDEDIFF_WIDTH",
        default_value_t = DEFAULT_WIDTH,
        help = "Total output width in columns"
    )]
    width: usize,
    #[arg(long, help = "Only show this many display lines")]
    height: Option<usize>,
    #[arg(long, default_value_t = 0.0, help = "Scroll position as a fraction between 0 and 1")]
    scroll: f64,
    #[arg(long, value_enum, default_value_t = Algorithm::Myers, help = "Diff algorithm")]
    algorithm: Algorithm,
    #[arg(long, help = "Do not print the color legend")]
    no_legend: bool,
}

impl From<ViewArgs> for ViewConfig {
    fn from(args: ViewArgs) -> Self {
        ViewConfig::new(
            args.layout,
            args.theme,
            args.width,
            args.height,
            args.scroll,
            args.algorithm,
            !args.no_legend,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "compare",
        about = "Show two texts side by side",
        long_about = "This command reads two texts (use - for stdin on one side) and renders \
        them side by side with changed lines highlighted."
    )]
    Compare {
        #[arg(index = 1, help = "The original text")]
        old: String,
        #[arg(index = 2, help = "The modified text")]
        new: String,
        #[command(flatten)]
        view: ViewArgs,
    },
    #[command(
        name = "stat",
        about = "Count added, removed and unchanged lines",
        long_about = "This command prints how many lines were added, removed and kept between two texts."
    )]
    Stat {
        #[arg(index = 1, help = "The original text")]
        old: String,
        #[arg(index = 2, help = "The modified text")]
        new: String,
        #[arg(long, value_enum, default_value_t = Algorithm::Myers, help = "Diff algorithm")]
        algorithm: Algorithm,
    },
    #[command(
        name = "example",
        about = "Render a built-in example comparison",
        long_about = "This command loads a small pair of example snippets and renders them like compare does."
    )]
    Example {
        #[command(flatten)]
        view: ViewArgs,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sidediff=warn")),
        )
        .init();

    let cli = Cli::parse();
    cli.color.apply();

    let pwd = std::env::current_dir()?;
    let use_pager = std::env::var_os("NO_PAGER").is_none() && std::io::stdout().is_terminal();
    let pager = Pager::new();
    let writer: Box<dyn std::io::Write> = if use_pager {
        Box::new(PagerWriter::new(pager.clone()))
    } else {
        Box::new(std::io::stdout())
    };

    match cli.command {
        Commands::Compare { old, new, view } => {
            let viewer = Viewer::new(&pwd, view.into(), writer)?;
            viewer.compare(&TextSource::from(old.as_str()), &TextSource::from(new.as_str()))?
        }
        Commands::Stat { old, new, algorithm } => {
            let config = ViewConfig {
                algorithm,
                ..Default::default()
            };
            let viewer = Viewer::new(&pwd, config, writer)?;
            viewer.stat(&TextSource::from(old.as_str()), &TextSource::from(new.as_str()))?
        }
        Commands::Example { view } => {
            let viewer = Viewer::new(&pwd, view.into(), writer)?;
            viewer.example()?
        }
    }

    if use_pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
