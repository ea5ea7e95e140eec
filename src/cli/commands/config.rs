use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();
        let path_str = path.to_string_lossy().to_string();

        if *print_config {
            ConfigLogic::print(&path_str)?;
            return Ok(());
        }

        if *edit_config {
            ConfigLogic::edit(&path_str, editor)?;
            return Ok(());
        }

        warning("Nothing to do: specify --print or --edit.");
    }

    Ok(())
}
