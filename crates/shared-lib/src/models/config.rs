use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::{Result, Section};
use std::sync::Arc;
use tracing::Level;

/// 数据库连接池配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// postgresql数据库链接字符串
    pub postgresql_conn_str: String,

    /// 连接池中常驻的最少连接数
    ///
    /// 可通过环境变量 `DB_MIN_CONNECTIONS` 来调整
    pub min_connections: u32,

    /// 连接池的最大连接数
    ///
    /// 可通过环境变量 `DB_MAX_CONNECTIONS` 来调整
    pub max_connections: u32,
}

/// 程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 数据库配置
    pub database: DatabaseConfig,

    /// Web服务监听地址，环境变量 `BIND_ADDR`
    pub bind_addr: String,

    /// 日志级别，环境变量 `LOG_LEVEL`（trace/debug/info/warn/error）
    pub log_level: Level,
}

impl AppConfig {
    pub fn load() -> Result<Arc<AppConfig>> {
        // 加载.env文件中的数据注入到环境变量中，方便本地测试
        // 线上环境部署时会直接使用环境变量，不需要.env文件
        if dotenvy::dotenv().is_err() {
            tracing::debug!("📄 未找到 .env 文件，直接使用环境变量");
        }

        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        Ok(Arc::new(config))
    }

    /// 通过 `lookup` 读取配置项构建配置
    ///
    /// 与 [`AppConfig::load`] 分开，便于在不修改进程环境变量的情况下测试
    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 读取数据库地址信息（仅支持postgresql）
        let db_url = lookup("DATABASE_URL")
            .ok_or_else(|| eyre!("Can not load DATABASE_URL in environment"))
            .suggestion("设置 DATABASE_URL 环境变量")?;

        let min_connections = lookup("DB_MIN_CONNECTIONS").map_or(2, |s| s.parse().unwrap_or(2));
        let max_connections = lookup("DB_MAX_CONNECTIONS").map_or(20, |s| s.parse().unwrap_or(20));

        let log_level = match lookup("LOG_LEVEL") {
            Some(level) => level
                .parse::<Level>()
                .wrap_err_with(|| format!("Invalid LOG_LEVEL: {level}"))
                .suggestion("可选值: trace, debug, info, warn, error")?,
            None => Level::INFO,
        };

        Ok(AppConfig {
            database: DatabaseConfig {
                postgresql_conn_str: db_url,
                min_connections,
                // 最大连接数不能小于最小连接数
                max_connections: max_connections.max(min_connections),
            },
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/projects")])).unwrap();

        assert_eq!(config.database.postgresql_conn_str, "postgres://localhost/projects");
        assert_eq!(config.database.min_connections, 2);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn test_missing_database_url() {
        let result = AppConfig::from_lookup(lookup_from(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_and_invalid_numbers() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/projects"),
            ("DB_MIN_CONNECTIONS", "8"),
            ("DB_MAX_CONNECTIONS", "not-a-number"),
            ("BIND_ADDR", "127.0.0.1:3000"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.database.min_connections, 8);
        // 非法值回退到默认值 20
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.bind_addr, "127.0.0.1:3000");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn test_max_connections_not_below_min() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/projects"),
            ("DB_MIN_CONNECTIONS", "30"),
            ("DB_MAX_CONNECTIONS", "10"),
        ]))
        .unwrap();

        assert_eq!(config.database.max_connections, 30);
    }

    #[test]
    fn test_invalid_log_level() {
        let result = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/projects"), ("LOG_LEVEL", "loud")]));
        assert!(result.is_err());
    }
}
