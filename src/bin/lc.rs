extern crate leavecal as lib;

use flexi_logger::{Duplicate, FileSpec, Logger};
use lib::clock::{Clock, FixedClock, SystemClock};
use lib::date::CalendarDate;
use lib::store::CalendarStore;
use lib::ui::MonthPane;
use std::io::stdout;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "lc",
    about = "Prints a month calendar annotated with holidays and leave counts."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "d",
        long = "date",
        help = "reference date (YYYY-MM-DD) whose month is shown, defaults to today"
    )]
    pub date: Option<CalendarDate>,

    #[structopt(long = "today", help = "treat this date (YYYY-MM-DD) as today")]
    pub today: Option<CalendarDate>,

    #[structopt(short = "p", long = "plain", help = "disable colors")]
    pub plain: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .duplicate_to_stderr(Duplicate::Warn);
    }

    logger.start()?;

    std::panic::set_hook(Box::new(|info| {
        eprintln!("leavecal ran into a fatal error!");
        eprintln!("{}", info);
        eprintln!("{:?}", backtrace::Backtrace::new());
    }));

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let clock: Box<dyn Clock> = match args.today {
        Some(today) => Box::new(FixedClock(today)),
        None => Box::new(SystemClock),
    };
    let reference = args.date.unwrap_or_else(|| clock.today());

    let store = match CalendarStore::new(
        reference,
        config.holidays.clone(),
        config.leaves.clone(),
        config.month_match,
        clock,
    ) {
        Ok(store) => store,
        Err(err) => {
            log::error!("Failed to build calendar for {}: {}", reference, err);
            eprintln!("Cannot render calendar: {}", err);
            std::process::exit(1);
        }
    };

    log::debug!(
        "Rendering {} (today {}) with {} holiday(s) and {} leave record(s)",
        store.title(),
        store.today(),
        store.holidays().len(),
        store.leaves().len()
    );

    let colored = !args.plain && termion::is_tty(&stdout());
    print!(
        "{}",
        MonthPane::from_store(&store, &config.theme).colored(colored)
    );

    Ok(())
}
