// ==========================================
// 文档站点配置检查 - 命令行入口
// ==========================================
// 用法: qiye-docs-config [配置文件路径]
// 成功: stdout 输出规范化后的配置 JSON，退出码 0
// 失败: stderr 输出违规列表，退出码 1
// ==========================================

use std::path::PathBuf;
use std::process::ExitCode;

use qiye_docs_config::config::{ConfigLoader, DEFAULT_CONFIG_FILE};
use qiye_docs_config::{i18n, logging, ConfigError};

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    tracing::info!("{} v{}", qiye_docs_config::APP_NAME, qiye_docs_config::VERSION);

    let record = match ConfigLoader::load_from_path(&path) {
        Ok(record) => record,
        Err(ConfigError::Validation(e)) => anyhow::bail!(e.localized_report()),
        Err(ConfigError::Io { path, source })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            anyhow::bail!(i18n::t_with_args(
                "loader.file_not_found",
                &[("path", &path.display().to_string())]
            ))
        }
        Err(e) => return Err(e.into()),
    };

    i18n::apply_default_locale(&record);
    tracing::info!(
        "{}",
        i18n::t_with_args(
            "loader.loaded",
            &[
                ("name", record.theme().name()),
                ("count", &record.locales().len().to_string()),
            ],
        )
    );

    println!("{}", record.to_json_pretty()?);
    Ok(())
}
