use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::ui::output::Output;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, out: &Output) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            let yaml = ConfigLogic::render(cfg)?;
            out.emit("config", cfg, || {
                header(format!("Current configuration ({})", path.display()));
                println!("{}", yaml);
            })?;
        }

        if *check {
            let added = ConfigLogic::check(&path)?;
            out.emit("added_keys", &added, || {
                if added.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    info(format!("Added missing keys: {}", added.join(", ")));
                }
            })?;
        }

        if *edit_config {
            let used = ConfigLogic::edit(&path, editor)?;
            out.done(&format!("Configuration file edited using '{}'", used))?;
        }
    }

    Ok(())
}
