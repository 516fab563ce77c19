use anyhow::{Context, Result};
use clap::Parser;
use hbnb_storage::cli::{Cli, Command};
use hbnb_storage::config::Config;
use hbnb_storage::console::{Console, ConsoleError, ConsoleResult};
use hbnb_storage::storage::FileStorage;
use tracing_subscriber::EnvFilter;

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_env("HBNB_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(console: &mut Console<'_>, command: Command) -> ConsoleResult<()> {
    match command {
        Command::Create { class } => println!("{}", console.create(&class)?),
        Command::Show { class, id } => println!("{}", console.show(&class, &id)?),
        Command::Destroy { class, id } => console.destroy(&class, &id)?,
        Command::All { class } => {
            for line in console.all(class.as_deref())? {
                println!("{}", line);
            }
        }
        Command::Update {
            class,
            id,
            attribute,
            value,
        } => console.update(&class, &id, &attribute, &value)?,
        Command::Count { class } => println!("{}", console.count(&class)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref(), cli.file.clone())?;
    init_logging(&config.log_level);

    let mut storage = FileStorage::from_config(&config.storage);
    let mut console = Console::open(&mut storage).with_context(|| {
        format!(
            "Failed to load snapshot file: {}",
            config.storage.file_path.display()
        )
    })?;

    match run(&mut console, cli.command) {
        Err(ConsoleError::Storage(e)) => Err(e).context("Storage operation failed"),
        // usage errors are a single line on stdout, not a failure exit
        Err(e) => {
            println!("{}", e);
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}
