//! 命令行参数
//!
//! 所有参数只覆盖本次运行，不写回配置文件。

use std::path::PathBuf;

use clap::Parser;

use crate::model::NavigationMode;
use crate::view::theme::Theme;

#[derive(Debug, Parser)]
#[command(name = "phorge", version, about = "Terminal dashboard for Laravel Forge")]
pub struct Cli {
    /// Navigation mode: `tree` lists every server, `single` opens one server
    #[arg(long, value_name = "tree|single")]
    pub mode: Option<NavigationMode>,

    /// Default server name for single-server mode (overrides .phorge)
    #[arg(long, value_name = "NAME")]
    pub server: Option<String>,

    /// Forge API key
    #[arg(long, env = "FORGE_API_KEY", hide_env_values = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_name = "dark|light")]
    pub theme: Option<Theme>,

    /// Interface language
    #[arg(long, value_name = "en-US|zh-CN")]
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = tokio_test::assert_ok!(Cli::try_parse_from([
            "phorge",
            "--mode",
            "single",
            "--server",
            "web-1",
            "--api-key",
            "secret",
            "--theme",
            "light",
            "--language",
            "zh-CN",
        ]));

        assert_eq!(cli.mode, Some(NavigationMode::SingleServer));
        assert_eq!(cli.server.as_deref(), Some("web-1"));
        assert_eq!(cli.api_key.as_deref(), Some("secret"));
        assert_eq!(cli.theme, Some(Theme::Light));
        assert_eq!(cli.language.as_deref(), Some("zh-CN"));
    }

    #[test]
    fn rejects_unknown_mode() {
        tokio_test::assert_err!(Cli::try_parse_from(["phorge", "--mode", "grid"]));
    }

    #[test]
    fn verifies_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
