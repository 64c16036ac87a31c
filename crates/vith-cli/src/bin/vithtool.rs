use clap::{Parser, Subcommand, ValueEnum};

use vith_cli::commands::{config_ops, convert_ops, table_ops};
use vith_cli::trace_init::init_tracing;
use vith_core::Direction;

#[derive(Parser)]
#[command(name = "vithtool", about = "Latin/Vithkuqi Albanian transliteration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transliterate text given as arguments, or stdin line by line
    Convert {
        /// Text to transliterate (joined with spaces)
        text: Vec<String>,
        /// Which script to convert
        #[arg(short, long, value_enum, default_value_t = DirectionArg::Auto)]
        direction: DirectionArg,
        /// Custom settings TOML file
        #[arg(long)]
        settings: Option<String>,
    },
    /// List the alphabet table
    Table {
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    /// Both ways, decided per character
    Auto,
    /// Latin to Vithkuqi only
    ToVithkuqi,
    /// Vithkuqi to Latin only
    ToLatin,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Auto => Direction::Auto,
            DirectionArg::ToVithkuqi => Direction::ToVithkuqi,
            DirectionArg::ToLatin => Direction::ToLatin,
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            text,
            direction,
            settings,
        } => {
            if let Some(file) = settings {
                config_ops::settings_load(&file);
            }
            convert_ops::convert_cmd(&text, direction.into());
        }
        Command::Table { json } => table_ops::table_cmd(json),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
