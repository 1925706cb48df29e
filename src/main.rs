use std::error::Error;
use std::process::exit;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};

use ascii_mandelbrot::{
    gradient_factory, CliController, Gradient, GradientError, GradientKinds, RenderConfig,
    RenderStrategy, WriterPresenter, DEFAULT_HEIGHT, DEFAULT_IM_END, DEFAULT_IM_START,
    DEFAULT_MAX_ITERATIONS, DEFAULT_RE_END, DEFAULT_RE_START, DEFAULT_WIDTH,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("caused by: {}", cause);
            source = cause.source();
        }
        exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = command().get_matches();

    init_logging(matches.get_one::<String>("verbosity").map(|s| s.as_str()));

    info!(
        "'{}' version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let config = render_config(&matches);
    let gradient = gradient(&matches)?;
    let strategy = strategy(&matches);

    debug!("Gradient: {:?}", gradient.symbols());

    let mut controller = CliController::new(WriterPresenter::stdout());
    controller.generate(config, &gradient, strategy)?;
    controller.present()?;

    Ok(())
}

// An explicit --verbosity wins over RUST_LOG; otherwise RUST_LOG or "warn"
fn init_logging(verbosity: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(level) = verbosity {
        builder.parse_filters(level);
    }

    builder.init();
}

// Flags left off the command line fall back to `RenderConfig::default()`
fn render_config(matches: &ArgMatches) -> RenderConfig {
    let defaults = RenderConfig::default();
    let get_u32 = |id: &str, default: u32| matches.get_one::<u32>(id).copied().unwrap_or(default);
    let get_f64 = |id: &str, default: f64| matches.get_one::<f64>(id).copied().unwrap_or(default);

    RenderConfig {
        width: get_u32("width", defaults.width),
        height: get_u32("height", defaults.height),
        max_iterations: get_u32("max-iterations", defaults.max_iterations),
        re_start: get_f64("re-start", defaults.re_start),
        re_end: get_f64("re-end", defaults.re_end),
        im_start: get_f64("im-start", defaults.im_start),
        im_end: get_f64("im-end", defaults.im_end),
    }
}

fn gradient(matches: &ArgMatches) -> Result<Gradient, GradientError> {
    if let Some(symbols) = matches.get_one::<String>("symbols") {
        return Gradient::new(symbols.chars());
    }

    let kind = matches
        .get_one::<String>("gradient")
        .and_then(|name| GradientKinds::from_name(name))
        .unwrap_or_default();

    Ok(gradient_factory(kind))
}

fn strategy(matches: &ArgMatches) -> RenderStrategy {
    if matches.get_flag("parallel") {
        RenderStrategy::Parallel
    } else {
        RenderStrategy::Sequential
    }
}

fn u32_arg(id: &'static str, help: String) -> Arg {
    Arg::new(id)
        .long(id)
        .num_args(1)
        .value_parser(clap::value_parser!(u32))
        .help(help)
}

fn f64_arg(id: &'static str, help: String) -> Arg {
    Arg::new(id)
        .long(id)
        .num_args(1)
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(f64))
        .help(help)
}

// Build the command line parser using clap
fn command() -> Command {
    let gradient_names: Vec<&'static str> =
        GradientKinds::ALL.iter().map(|kind| kind.name()).collect();

    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Prints the Mandelbrot set as text")
        .arg(u32_arg("width", format!("Number of columns [default: {DEFAULT_WIDTH}]")).short('W'))
        .arg(u32_arg("height", format!("Number of rows [default: {DEFAULT_HEIGHT}]")).short('H'))
        .arg(
            u32_arg(
                "max-iterations",
                format!(
                    "Iterations before a point counts as inside the set \
                     [default: {DEFAULT_MAX_ITERATIONS}]"
                ),
            )
            .short('i'),
        )
        .arg(f64_arg(
            "re-start",
            format!("Real part at the left column [default: {DEFAULT_RE_START}]"),
        ))
        .arg(f64_arg(
            "re-end",
            format!("Real part at the right column [default: {DEFAULT_RE_END}]"),
        ))
        .arg(f64_arg(
            "im-start",
            format!("Imaginary part at the top row [default: {DEFAULT_IM_START}]"),
        ))
        .arg(f64_arg(
            "im-end",
            format!("Imaginary part at the bottom row [default: {DEFAULT_IM_END}]"),
        ))
        .arg(
            Arg::new("gradient")
                .short('g')
                .long("gradient")
                .num_args(1)
                .value_parser(gradient_names)
                .default_value(GradientKinds::default().name())
                .help("Built-in symbol gradient"),
        )
        .arg(
            Arg::new("symbols")
                .short('s')
                .long("symbols")
                .num_args(1)
                .value_name("SYMBOLS")
                .help("Custom gradient, least to most intense (overrides --gradient)"),
        )
        .arg(
            Arg::new("parallel")
                .short('p')
                .long("parallel")
                .action(ArgAction::SetTrue)
                .help("Evaluate cells on all cores"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(1)
                .value_name("VERBOSITY_LEVEL")
                .help("Set verbosity level for output (trace, debug, info, warn (default), error)"),
        )
}
